use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::ModelError;

/// Trailing digit run of a registration id, e.g. `"EX-2024-012"` -> `"012"`.
static NUMERIC_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*$").expect("numeric suffix pattern"));

/// A registrant's display id as it appears on the sheet.
///
/// The sheet carries ids with an alphabetic/stamp prefix; the board only shows
/// the trailing number. The raw form is kept so unmatched ids still render.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct RegistrantId(String);

impl RegistrantId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidRegistrantId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The trailing numeric portion of the id, or the raw id when the
    /// pattern does not match.
    pub fn numeric_suffix(&self) -> &str {
        NUMERIC_SUFFIX
            .captures(&self.0)
            .and_then(|caps| caps.get(1))
            .map_or(self.0.as_str(), |m| m.as_str())
    }
}

impl fmt::Display for RegistrantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
