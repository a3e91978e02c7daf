use std::fmt;

use serde::{Serialize, Serializer};

use crate::domain::IDENTIFIER_MAX_LEN;
use crate::error::{ModelError, ModelResult};

/// Lowercased assignment or student identifier.
///
/// Identifiers are interpolated into job names, image tags and staging shell commands,
/// so construction restricts them to `[a-z0-9-]`, starting and ending with an alphanumeric.
/// Anything that passes is inert inside a double-quoted shell argument and a valid
/// Kubernetes name segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Normalize (trim + lowercase) and validate a raw form value.
    ///
    /// `field` is only used to label the error.
    ///
    /// ```
    /// use kgrade_model::Identifier;
    ///
    /// let id = Identifier::parse("assignment", "  HW-01 ").unwrap();
    /// assert_eq!(id.as_str(), "hw-01");
    /// assert!(Identifier::parse("assignment", "hw 01").is_err());
    /// ```
    pub fn parse(field: &'static str, raw: &str) -> ModelResult<Self> {
        let value = raw.trim().to_lowercase();

        if value.is_empty() {
            return Err(ModelError::EmptyIdentifier { field });
        }
        if value.len() > IDENTIFIER_MAX_LEN {
            return Err(ModelError::IdentifierTooLong {
                field,
                max: IDENTIFIER_MAX_LEN,
            });
        }
        if !value
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        {
            return Err(ModelError::IdentifierCharset { field, value });
        }
        if value.starts_with('-') || value.ends_with('-') {
            return Err(ModelError::IdentifierEdge { field, value });
        }

        Ok(Self(value))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Identifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}
