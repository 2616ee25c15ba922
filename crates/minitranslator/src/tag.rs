//! Symbol resolution.
//!
//! A legacy code is a marker followed by one symbol. [`resolve`] maps that
//! symbol to the kind of tag it introduces, taking the enabled [`Options`]
//! into account. Kinds that need more input (hex colors, gradients) are
//! completed by the translator.

use crate::color::legacy_color;
use crate::options::Options;

/// Text formatting styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// `&l` → `<b>`
    Bold,
    /// `&n` → `<u>`
    Underline,
    /// `&m` → `<st>`
    Strikethrough,
    /// `&o` → `<i>`
    Italic,
    /// `&k` → `<obf>`
    Obfuscated,
}

impl Style {
    /// Returns the tag name emitted for this style.
    pub fn tag(self) -> &'static str {
        match self {
            Style::Bold => "b",
            Style::Underline => "u",
            Style::Strikethrough => "st",
            Style::Italic => "i",
            Style::Obfuscated => "obf",
        }
    }
}

/// Surface form of a hex color code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HexForm {
    /// `&#rrggbb`
    Compact,
    /// `&x&r&r&g&g&b&b`
    Spaced,
}

/// What a code symbol introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// A legacy color, carrying its tag name.
    NamedColor(&'static str),
    /// A hex color whose digits still have to be read.
    HexColor(HexForm),
    /// A formatting style.
    Format(Style),
    /// Closes everything.
    Reset,
    /// A gradient whose body still has to be read.
    Gradient,
}

impl TagKind {
    /// Returns true for kinds that take part in the color closing policy.
    pub fn is_color(self) -> bool {
        matches!(
            self,
            TagKind::NamedColor(_) | TagKind::HexColor(_) | TagKind::Gradient
        )
    }
}

/// Resolves the symbol following a marker.
///
/// Returns `None` when the symbol is not a code, or when the option that
/// gates it is disabled. Symbols are case-insensitive.
///
/// # Example
///
/// ```rust
/// use minitranslator::{resolve, Options, Style, TagKind};
///
/// let opts = Options::default();
/// assert_eq!(resolve('c', opts), Some(TagKind::NamedColor("red")));
/// assert_eq!(resolve('L', opts), Some(TagKind::Format(Style::Bold)));
/// assert_eq!(resolve('j', opts), None);
/// assert_eq!(resolve('l', Options::COLOR), None);
/// ```
pub fn resolve(symbol: char, options: Options) -> Option<TagKind> {
    let symbol = symbol.to_ascii_lowercase();
    match symbol {
        '0'..='9' | 'a'..='f' if options.contains(Options::COLOR) => {
            legacy_color(symbol).map(TagKind::NamedColor)
        }
        '#' if options.contains(Options::COLOR) => Some(TagKind::HexColor(HexForm::Compact)),
        'x' if options.contains(Options::COLOR) => Some(TagKind::HexColor(HexForm::Spaced)),
        'k' | 'l' | 'm' | 'n' | 'o' if options.contains(Options::FORMAT) => {
            let style = match symbol {
                'l' => Style::Bold,
                'n' => Style::Underline,
                'm' => Style::Strikethrough,
                'o' => Style::Italic,
                _ => Style::Obfuscated,
            };
            Some(TagKind::Format(style))
        }
        'r' if options.contains(Options::RESET) => Some(TagKind::Reset),
        '@' if options.contains(Options::GRADIENT) => Some(TagKind::Gradient),
        _ => None,
    }
}
