use std::fmt;

use serde::{de::Error as DeserializeError, Deserialize, Deserializer, Serialize};

use crate::Error;

const DATA_ATTRIBUTE_PREFIX: &str = "data-";

/// A CSS class name usable in a selector without escaping.
#[derive(Clone, Debug, Serialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ClassName(String);

impl ClassName {
    /// Returns the class name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ClassName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_css_identifier(&value) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidClassName(value))
        }
    }
}

impl<'de> Deserialize<'de> for ClassName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let inner = String::deserialize(deserializer)?;

        Self::try_from(inner).map_err(D::Error::custom)
    }
}

/// The name of a custom data attribute, e.g. `data-h`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct AttributeName(String);

impl AttributeName {
    /// Returns the attribute name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for AttributeName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let valid = value
            .strip_prefix(DATA_ATTRIBUTE_PREFIX)
            .is_some_and(|name| {
                !name.is_empty()
                    && name.chars().all(|character| {
                        matches!(character, 'a'..='z' | '0'..='9' | '-' | '_')
                    })
            });

        if valid {
            Ok(Self(value))
        } else {
            Err(Error::InvalidAttributeName(value))
        }
    }
}

impl<'de> Deserialize<'de> for AttributeName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let inner = String::deserialize(deserializer)?;

        Self::try_from(inner).map_err(D::Error::custom)
    }
}

/// Whether the given name is a CSS identifier restricted to ASCII characters.
fn is_css_identifier(name: &str) -> bool {
    let mut characters = name.chars();
    let valid_start = match (characters.next(), characters.next()) {
        (None, _) | (Some('-'), None | Some('0'..='9')) => false,
        (Some(first), _) => first == '-' || first == '_' || first.is_ascii_alphabetic(),
    };

    valid_start
        && name.chars().all(|character| {
            character == '-' || character == '_' || character.is_ascii_alphanumeric()
        })
}
