mod code;
mod data_roster;
mod data_year_level;

pub use code::ClassCode;

use anyhow::{Result, bail};
use std::sync::LazyLock;
use tracing::debug;

use data_roster::{ROSTER_ORDER, VALID_CLASSES};
use data_year_level::YEAR_LEVELS;

static REGISTRY: LazyLock<ClassCodeRegistry> =
    LazyLock::new(|| ClassCodeRegistry::new().expect("Failed to initialize class registry"));

/// Process-wide registry instance.
pub fn get() -> &'static ClassCodeRegistry {
    &REGISTRY
}

/// The static class tables plus the two queries the rest of the app asks of
/// them. Both queries are pure and total over arbitrary strings: an empty,
/// malformed, or unknown code is a normal "no result", never an error.
pub struct ClassCodeRegistry {
    year_levels: &'static phf::Map<&'static str, u8>,
    roster: &'static phf::Set<&'static str>,
    roster_order: &'static [&'static str],
}

impl ClassCodeRegistry {
    /// Build the registry and sanity-check the static data: the ordered
    /// roster and the membership set must hold the same classes, and every
    /// class must have a year-level mapping for its prefix.
    pub fn new() -> Result<Self> {
        let registry = Self {
            year_levels: &YEAR_LEVELS,
            roster: &VALID_CLASSES,
            roster_order: ROSTER_ORDER,
        };

        if registry.roster_order.len() != registry.roster.len() {
            bail!(
                "roster order lists {} classes but the membership set holds {}",
                registry.roster_order.len(),
                registry.roster.len()
            );
        }
        for class in registry.roster_order {
            if !registry.roster.contains(class) {
                bail!("class {class} is ordered but missing from the membership set");
            }
            let prefix = code::prefix_of(class);
            if !registry.year_levels.contains_key(prefix) {
                bail!("class {class} has no year-level mapping for prefix {prefix}");
            }
        }

        debug!(
            "class registry ready: {} classes, {} grade prefixes",
            registry.roster.len(),
            registry.year_levels.len()
        );

        Ok(registry)
    }

    /// Year level (1..9) for a class code. `None` for an empty code or an
    /// unrecognized grade prefix. Only the text before the first `/` matters.
    pub fn year_level_of(&self, code: &str) -> Option<u8> {
        if code.is_empty() {
            return None;
        }
        self.year_levels.get(code::prefix_of(code)).copied()
    }

    /// Exact, case-sensitive membership test against the roster. No trimming,
    /// no normalization, no partial matches.
    pub fn is_valid_class(&self, code: &str) -> bool {
        self.roster.contains(code)
    }

    /// All assignable class codes, in roster declaration order (M1/1..M3/6,
    /// then P1/1..P6/5). The ordered slice is the enumeration source; the
    /// phf set only answers membership.
    pub fn classes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.roster_order.iter().copied()
    }
}
