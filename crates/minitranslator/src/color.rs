//! Color tables and the named-color lookup capability.
//!
//! Legacy codes use a single symbol (`0`-`9`, `a`-`f`) per color. Gradients
//! can additionally name a color in full (`&@gold-dark_red@`); those names are
//! resolved through a [`ColorLookup`], which defaults to [`NamedColors`].

/// The sixteen legacy colors, indexed by their code symbol.
pub const LEGACY_COLORS: [(char, &str); 16] = [
    ('0', "black"),
    ('1', "dark_blue"),
    ('2', "dark_green"),
    ('3', "dark_aqua"),
    ('4', "dark_red"),
    ('5', "dark_purple"),
    ('6', "gold"),
    ('7', "gray"),
    ('8', "dark_gray"),
    ('9', "blue"),
    ('a', "green"),
    ('b', "aqua"),
    ('c', "red"),
    ('d', "light_purple"),
    ('e', "yellow"),
    ('f', "white"),
];

/// Returns the color tag name for a legacy color symbol.
///
/// Matching is case-insensitive: `A` and `a` both map to `green`.
pub fn legacy_color(symbol: char) -> Option<&'static str> {
    let name = match symbol.to_ascii_lowercase() {
        '0' => "black",
        '1' => "dark_blue",
        '2' => "dark_green",
        '3' => "dark_aqua",
        '4' => "dark_red",
        '5' => "dark_purple",
        '6' => "gold",
        '7' => "gray",
        '8' => "dark_gray",
        '9' => "blue",
        'a' => "green",
        'b' => "aqua",
        'c' => "red",
        'd' => "light_purple",
        'e' => "yellow",
        'f' => "white",
        _ => return None,
    };
    Some(name)
}

/// Resolves a full color name to the tag name emitted for it.
///
/// Implemented for [`NamedColors`] and for any
/// `Fn(&str) -> Option<&'static str>` closure.
///
/// # Example
///
/// ```rust
/// use minitranslator::{ColorLookup, NamedColors};
///
/// assert_eq!(NamedColors.lookup("gold"), Some("gold"));
/// assert_eq!(NamedColors.lookup("chartreuse"), None);
///
/// let custom = |name: &str| if name == "brand" { Some("#ff6b35") } else { None };
/// assert_eq!(custom.lookup("brand"), Some("#ff6b35"));
/// ```
pub trait ColorLookup {
    /// Returns the tag name for `name`, or `None` if the color is unknown.
    fn lookup(&self, name: &str) -> Option<&str>;
}

/// The default lookup: the sixteen named legacy colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NamedColors;

impl ColorLookup for NamedColors {
    fn lookup(&self, name: &str) -> Option<&str> {
        LEGACY_COLORS
            .iter()
            .find(|(_, known)| *known == name)
            .map(|(_, known)| *known)
    }
}

impl<F> ColorLookup for F
where
    F: Fn(&str) -> Option<&'static str>,
{
    fn lookup(&self, name: &str) -> Option<&str> {
        self(name)
    }
}

/// Returns true if `bytes` is exactly six ASCII hex digits.
pub(crate) fn is_hex6(bytes: &[u8]) -> bool {
    bytes.len() == 6 && bytes.iter().all(u8::is_ascii_hexdigit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_map_to_names() {
        assert_eq!(legacy_color('0'), Some("black"));
        assert_eq!(legacy_color('6'), Some("gold"));
        assert_eq!(legacy_color('a'), Some("green"));
        assert_eq!(legacy_color('f'), Some("white"));
    }

    #[test]
    fn symbols_are_case_insensitive() {
        assert_eq!(legacy_color('A'), Some("green"));
        assert_eq!(legacy_color('D'), Some("light_purple"));
    }

    #[test]
    fn non_color_symbols_rejected() {
        assert_eq!(legacy_color('g'), None);
        assert_eq!(legacy_color('#'), None);
        assert_eq!(legacy_color('l'), None);
    }

    #[test]
    fn table_and_match_agree() {
        for (symbol, name) in LEGACY_COLORS {
            assert_eq!(legacy_color(symbol), Some(name));
            assert_eq!(NamedColors.lookup(name), Some(name));
        }
    }

    #[test]
    fn named_lookup_is_exact() {
        assert_eq!(NamedColors.lookup("dark_aqua"), Some("dark_aqua"));
        assert_eq!(NamedColors.lookup("Dark_Aqua"), None);
        assert_eq!(NamedColors.lookup(""), None);
    }

    #[test]
    fn hex6_validation() {
        assert!(is_hex6(b"12ab3F"));
        assert!(!is_hex6(b"12ab3"));
        assert!(!is_hex6(b"12ab3g"));
        assert!(!is_hex6(b"1234567"));
    }
}
