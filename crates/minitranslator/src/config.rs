//! Translator configuration.
//!
//! A [`Config`] bundles everything needed to build a [`Translator`] and can be
//! loaded from YAML:
//!
//! ```yaml
//! options: color, format, gradient, close-colors
//! gradient_end: at
//! ```
//!
//! Missing fields fall back to their defaults.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;
use crate::options::Options;
use crate::translator::{GradientEnd, Translator};

/// Serializable translator settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Enabled options, as an option list (`"color, format"` or `"COLOR | FORMAT"`).
    #[serde(deserialize_with = "options_from_list")]
    pub options: Options,
    /// Which characters terminate a gradient body.
    pub gradient_end: GradientEnd,
}

impl Config {
    /// Parses a configuration from a YAML document.
    ///
    /// # Example
    ///
    /// ```rust
    /// use minitranslator::{Config, GradientEnd, Options};
    ///
    /// let config = Config::from_yaml("options: color, close-colors\ngradient_end: at").unwrap();
    /// assert_eq!(config.options, Options::COLOR | Options::CLOSE_COLORS);
    /// assert_eq!(config.gradient_end, GradientEnd::At);
    /// ```
    pub fn from_yaml(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Builds a translator using the default color names.
    pub fn translator(&self) -> Translator {
        Translator::new(self.options).gradient_end(self.gradient_end)
    }
}

fn options_from_list<'de, D>(deserializer: D) -> std::result::Result<Options, D::Error>
where
    D: Deserializer<'de>,
{
    let list = String::deserialize(deserializer)?;
    list.parse().map_err(serde::de::Error::custom)
}
