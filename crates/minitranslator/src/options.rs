//! Translation options.
//!
//! Each flag enables one facet of the translation. Flags are independent and
//! read-only for the duration of a single [`translate`](crate::translate) call.
//!
//! # Example
//!
//! ```rust
//! use minitranslator::Options;
//!
//! let opts: Options = "color, format, close-colors".parse().unwrap();
//! assert!(opts.contains(Options::CLOSE_COLORS));
//! assert!(!opts.contains(Options::GRADIENT));
//! ```

use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::error::OptionsError;

bitflags! {
    /// Set of enabled translation features.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Options: u16 {
        /// Named single-symbol colors (`&a`) and hex colors (`&#123456`, `&x&1&2&3&4&5&6`).
        const COLOR = 1 << 0;
        /// Bare `#rrggbb` outside of tags and codes.
        const HEX_COLOR_STANDALONE = 1 << 1;
        /// Bold, underline, strikethrough, italic and obfuscated (`&l`, `&n`, `&m`, `&o`, `&k`).
        const FORMAT = 1 << 2;
        /// The explicit reset code `&r`.
        const RESET = 1 << 3;
        /// Gradients (`&@red-#00ff00-blue@`).
        const GRADIENT = 1 << 4;
        /// Emit `<color:#rrggbb>` instead of `<#rrggbb>`.
        const VERBOSE_HEX_COLOR = 1 << 5;
        /// Collapse two or more pending closing tags into a single `<reset>`.
        const FAST_RESET = 1 << 6;
        /// Close every open tag when a new color opens.
        const CLOSE_COLORS = 1 << 7;
        /// Treat `&&` as an escaped, literal `&`.
        const DOUBLE_TO_ESCAPE = 1 << 8;
        /// Explicit closing codes such as `&/l` or `&/c`.
        const END_TAGS = 1 << 9;
    }
}

impl Default for Options {
    /// `COLOR`, `FORMAT`, `RESET`, `GRADIENT` and `FAST_RESET`.
    fn default() -> Self {
        Options::COLOR | Options::FORMAT | Options::RESET | Options::GRADIENT | Options::FAST_RESET
    }
}

impl FromStr for Options {
    type Err = OptionsError;

    /// Parses a comma or `|` separated list of option names.
    ///
    /// Names are case-insensitive and may use `-` in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut options = Options::empty();
        let mut seen_any = false;

        for raw in s.split(|c: char| c == ',' || c == '|') {
            let name = raw.trim();
            if name.is_empty() {
                continue;
            }
            let canonical = name.to_ascii_uppercase().replace('-', "_");
            let flag = Options::from_name(&canonical)
                .ok_or_else(|| OptionsError::UnknownOption(name.to_string()))?;
            options |= flag;
            seen_any = true;
        }

        if seen_any {
            Ok(options)
        } else {
            Err(OptionsError::Empty)
        }
    }
}
