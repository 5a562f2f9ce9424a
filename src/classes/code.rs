use serde::{Deserialize, Serialize};
use std::fmt;

/// A class code as the portfolio app carries it, e.g. `"M1/3"`.
///
/// Construction never validates: any string is a `ClassCode`, and whether it
/// names a real class is a separate registry query. Serializes as the bare
/// string so it can ride in the app's JSON payloads unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassCode(String);

impl ClassCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Grade prefix: everything before the first `/`, or the whole string
    /// when there is no separator.
    pub fn prefix(&self) -> &str {
        prefix_of(&self.0)
    }

    /// Section token: everything after the first `/`, `None` when there is no
    /// separator.
    pub fn section(&self) -> Option<&str> {
        self.0.split_once('/').map(|(_, section)| section)
    }
}

impl fmt::Display for ClassCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClassCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for ClassCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

/// First-`/` split rule shared with the registry lookups.
pub(crate) fn prefix_of(code: &str) -> &str {
    code.split_once('/').map_or(code, |(prefix, _)| prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_is_text_before_first_slash() {
        assert_eq!(ClassCode::from("M1/3").prefix(), "M1");
        assert_eq!(ClassCode::from("P4/2").prefix(), "P4");
    }

    #[test]
    fn prefix_without_separator_is_whole_string() {
        assert_eq!(ClassCode::from("M1").prefix(), "M1");
        assert_eq!(ClassCode::from("").prefix(), "");
    }

    #[test]
    fn only_first_slash_splits() {
        let code = ClassCode::from("M1/3/extra");
        assert_eq!(code.prefix(), "M1");
        assert_eq!(code.section(), Some("3/extra"));
    }

    #[test]
    fn section_is_none_without_separator() {
        assert_eq!(ClassCode::from("M1").section(), None);
    }

    #[test]
    fn serializes_as_bare_string() {
        let code = ClassCode::from("M1/3");
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"M1/3\"");

        let back: ClassCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
    }
}
