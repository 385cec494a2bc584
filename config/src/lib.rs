//! The `config` crate contains the options selecting which elements get decorated.

mod primitives;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use primitives::{AttributeName, ClassName};

/// A configuration of the bar decorator.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Config {
    /// The bar selection configuration.
    pub bars: Bars,
}

/// A configuration for selecting bar elements.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Bars {
    /// The class every bar element carries.
    pub class: ClassName,
    /// The data attribute holding the height percentage.
    pub attribute: AttributeName,
}

impl Config {
    /// Parses a configuration from the given TOML source.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is not valid TOML or contains invalid identifiers.
    pub fn from_toml(source: &str) -> Result<Self, Error> {
        Ok(toml::from_str(source)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        let toml_string = include_str!("default.toml");
        toml::from_str(toml_string).expect("default configuration should always be deserializable")
    }
}

impl Bars {
    /// Returns the CSS selector matching every bar carrying the height attribute.
    pub fn selector(&self) -> Selector<'_> {
        Selector(self)
    }
}

/// A CSS selector for bar elements, e.g. `.bar[data-h]`.
#[derive(Clone, Copy, Debug)]
pub struct Selector<'a>(&'a Bars);

impl fmt::Display for Selector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".{}[{}]", self.0.class, self.0.attribute)
    }
}

/// The error type for errors regarding parsing configurations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to parse TOML.
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
    /// Class name is not a valid CSS identifier.
    #[error("`{0}` is not a valid class name")]
    InvalidClassName(String),
    /// Attribute name is not a valid data attribute.
    #[error("`{0}` is not a valid data attribute name")]
    InvalidAttributeName(String),
}
