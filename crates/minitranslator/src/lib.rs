//! Translates legacy ampersand color codes into tag-based markup.
//!
//! Legacy text uses a marker (`&`, or the section sign `§`) followed by a
//! single symbol: `&a` for green, `&l` for bold, `&r` for reset. This crate
//! rewrites such text into angle-bracket tags:
//!
//! ```rust
//! use minitranslator::translate;
//!
//! assert_eq!(translate("&aA simple one"), "<green>A simple one");
//! assert_eq!(
//!     translate("&a&lGreen bold, &cred normal"),
//!     "<green><b>Green bold, <reset><red>red normal"
//! );
//! ```
//!
//! # Supported codes
//!
//! | Code | Output |
//! |---|---|
//! | `&0`-`&9`, `&a`-`&f` | `<black>` ... `<white>` |
//! | `&#rrggbb`, `&x&r&r&g&g&b&b` | `<#rrggbb>` (or `<color:#rrggbb>`) |
//! | `&l` `&n` `&m` `&o` `&k` | `<b>` `<u>` `<st>` `<i>` `<obf>` |
//! | `&r` | `<reset>` |
//! | `&@c1-c2-...@` | `<gradient:c1:c2:...>` |
//! | `&/l`, `&/c`, ... | `</b>`, `</red>`, ... (with [`Options::END_TAGS`]) |
//!
//! Anything that is not a valid code is kept as literal text, so any input
//! can be translated safely.
//!
//! # Closing tags
//!
//! Formats stack on top of whatever is open. When a new color or gradient
//! opens, the tags opened before it are closed first:
//!
//! - with [`Options::FAST_RESET`] and two or more open tags, a single
//!   `<reset>` is emitted;
//! - otherwise closing tags are emitted newest first. The oldest tag is left
//!   unclosed when the previous opening was a plain color and
//!   [`Options::CLOSE_COLORS`] is off.
//!
//! The same rule runs once more at the end of the input.
//!
//! ```rust
//! use minitranslator::{translate_with, Options};
//!
//! let options = Options::default() - Options::FAST_RESET | Options::CLOSE_COLORS;
//! assert_eq!(
//!     translate_with("&aone &btwo", options),
//!     "<green>one </green><aqua>two</aqua>"
//! );
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod options;
pub mod prepare;
pub mod tag;
pub mod translator;

mod stack;

pub use color::{legacy_color, ColorLookup, NamedColors, LEGACY_COLORS};
pub use config::Config;
pub use error::{ConfigError, OptionsError};
pub use options::Options;
pub use prepare::{prepare, MARKER, SECTION_SIGN};
pub use tag::{resolve, HexForm, Style, TagKind};
pub use translator::{GradientEnd, Translator};

/// Translates `input` with [`Options::default()`].
pub fn translate(input: &str) -> String {
    translate_with(input, Options::default())
}

/// Translates `input` with the given options.
pub fn translate_with(input: &str, options: Options) -> String {
    Translator::new(options).translate(input)
}
