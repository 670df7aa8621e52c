//! Malformed-input policy
//!
//! Native file systems do not enforce UTF-16 well-formedness, so a path
//! handed over by the OS may contain unpaired surrogates. The policy decides,
//! once per call, what happens to every such unit.

use crate::error::{ConvertError, Result};
use std::fmt;
use std::str::FromStr;

/// What to do with an unpaired surrogate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MalformedPolicy {
    /// Fail the conversion with [`ConvertError::Encoding`] at the first unpaired surrogate.
    #[default]
    Strict,
    /// Emit U+FFFD for each unpaired surrogate and carry on.
    Replace,
}

impl MalformedPolicy {
    /// Lowercase name of the policy, as accepted by `FromStr`.
    pub fn as_str(&self) -> &'static str {
        match self {
            MalformedPolicy::Strict => "strict",
            MalformedPolicy::Replace => "replace",
        }
    }
}

impl fmt::Display for MalformedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MalformedPolicy {
    type Err = ConvertError;

    /// Parse a policy name, ignoring case and surrounding whitespace.
    ///
    /// # Examples
    /// ```
    /// use wide_path::MalformedPolicy;
    ///
    /// assert_eq!("strict".parse::<MalformedPolicy>().unwrap(), MalformedPolicy::Strict);
    /// assert_eq!("Lossy".parse::<MalformedPolicy>().unwrap(), MalformedPolicy::Replace);
    /// assert!("skip".parse::<MalformedPolicy>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(MalformedPolicy::Strict),
            "replace" | "lossy" => Ok(MalformedPolicy::Replace),
            _ => Err(ConvertError::UnknownPolicy {
                name: s.to_string(),
            }),
        }
    }
}
