//! Class/year-level classification core of the school portfolio app.
//!
//! The portfolio app identifies a student's class by a code such as `"M1/3"`:
//! a grade prefix (`P1`..`P6`, `M1`..`M3`) and a section number separated by
//! `/`. This crate holds the static class tables and the two queries the rest
//! of the app asks of them: which school-wide year level (1..9) a code maps
//! to, and whether a code names a real, assignable class.

pub mod classes;
pub mod logger;

pub use classes::{ClassCode, ClassCodeRegistry};
