//! Input normalization ahead of the main scan.
//!
//! Three rewrites, each applied once over the whole input:
//!
//! 1. The section sign `§` becomes the canonical marker `&`.
//! 2. With [`Options::DOUBLE_TO_ESCAPE`], each `&&` becomes a private-use
//!    sentinel that the scanner copies as plain text. The translator turns it
//!    back into `&` once the output is complete.
//! 3. With [`Options::HEX_COLOR_STANDALONE`], bare `#rrggbb` tokens become
//!    complete color tags. Tokens that belong to a code (`&#123456`, a
//!    terminated gradient body) or already sit inside a tag (`<#123456>`,
//!    `<color:#123456>`, `<gradient:#123456:...>`) are left alone.

use std::borrow::Cow;

use tracing::debug;

use crate::color::is_hex6;
use crate::options::Options;

/// The canonical code marker.
pub const MARKER: char = '&';

/// The alternate marker accepted in place of [`MARKER`].
pub const SECTION_SIGN: char = '§';

/// Stands in for an escaped `&&` while scanning.
pub(crate) const ESCAPE_SENTINEL: &str = "\u{E000}";

/// Normalizes `text` for scanning.
///
/// Returns the input unchanged (borrowed) when no rewrite applies.
/// The escape sentinel is `U+E000`, so with [`Options::DOUBLE_TO_ESCAPE`]
/// that character in the input is indistinguishable from an escaped `&&`.
///
/// # Example
///
/// ```rust
/// use minitranslator::{prepare, Options};
///
/// assert_eq!(prepare("§aHi", Options::default()), "&aHi");
/// assert_eq!(
///     prepare("see #ff0000 here", Options::HEX_COLOR_STANDALONE),
///     "see <#ff0000> here"
/// );
/// ```
pub fn prepare(text: &str, options: Options) -> Cow<'_, str> {
    let mut text = Cow::Borrowed(text);

    if text.contains(SECTION_SIGN) {
        text = Cow::Owned(text.replace(SECTION_SIGN, "&"));
    }

    if options.contains(Options::DOUBLE_TO_ESCAPE) && text.contains("&&") {
        text = Cow::Owned(text.replace("&&", ESCAPE_SENTINEL));
    }

    if options.contains(Options::HEX_COLOR_STANDALONE) {
        if let Some(rewritten) = rewrite_standalone_hex(&text, options) {
            text = Cow::Owned(rewritten);
        }
    }

    text
}

/// Rewrites bare hex colors into tags, or returns `None` if there were none.
fn rewrite_standalone_hex(text: &str, options: Options) -> Option<String> {
    let bytes = text.as_bytes();
    let verbose = options.contains(Options::VERBOSE_HEX_COLOR);
    let skip_gradients = options.contains(Options::GRADIENT);

    let mut output: Option<String> = None;
    let mut copied = 0;
    let mut rewrites = 0usize;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'&' => {
                // Skip the code symbol, and the whole body for terminated gradients.
                i += 1;
                match bytes.get(i) {
                    Some(b'@') if skip_gradients => {
                        i += 1;
                        let end = bytes[i..]
                            .iter()
                            .position(|&b| !is_gradient_body_byte(b))
                            .map_or(bytes.len(), |n| i + n);
                        if matches!(bytes.get(end), Some(b'@') | Some(b'&')) {
                            i = end;
                        }
                    }
                    Some(b'&') | None => {}
                    Some(_) => i += 1,
                }
            }
            b'#' if i + 7 <= bytes.len()
                && is_hex6(&bytes[i + 1..i + 7])
                && !inside_tag(bytes, i) =>
            {
                let out = output.get_or_insert_with(|| String::with_capacity(text.len() + 16));
                out.push_str(&text[copied..i]);
                out.push('<');
                if verbose {
                    out.push_str("color:");
                }
                out.push_str(&text[i..i + 7]);
                out.push('>');
                i += 7;
                copied = i;
                rewrites += 1;
            }
            _ => i += 1,
        }
    }

    output.map(|mut out| {
        out.push_str(&text[copied..]);
        debug!(rewrites, "rewrote standalone hex colors");
        out
    })
}

/// Heuristic for a `#rrggbb` at `hash` that is already part of markup.
fn inside_tag(bytes: &[u8], hash: usize) -> bool {
    match hash.checked_sub(1).map(|prev| bytes[prev]) {
        Some(b'<') => true,
        Some(b':') => matches!(bytes.get(hash + 7), Some(b'>') | Some(b':')),
        _ => false,
    }
}

/// Characters allowed between `&@` and the gradient terminator.
pub(crate) fn is_gradient_body_byte(b: u8) -> bool {
    b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'#' || b == b'-'
}

#[cfg(test)]
mod tests {
    use super::*;

    mod markers {
        use super::*;

        #[test]
        fn plain_text_is_borrowed() {
            let out = prepare("nothing to see", Options::all());
            assert!(matches!(out, Cow::Borrowed(_)));
        }

        #[test]
        fn section_sign_normalized() {
            assert_eq!(prepare("§aGreen §lbold", Options::empty()), "&aGreen &lbold");
        }

        #[test]
        fn doubled_markers_become_sentinel() {
            let out = prepare("a && b", Options::DOUBLE_TO_ESCAPE);
            assert_eq!(out, format!("a {} b", ESCAPE_SENTINEL));
        }

        #[test]
        fn doubled_markers_kept_without_option() {
            assert_eq!(prepare("a && b", Options::default()), "a && b");
        }

        #[test]
        fn triple_marker_escapes_first_pair() {
            let out = prepare("&&&a", Options::DOUBLE_TO_ESCAPE);
            assert_eq!(out, format!("{}&a", ESCAPE_SENTINEL));
        }

        #[test]
        fn mixed_markers_escape_together() {
            let out = prepare("§&", Options::DOUBLE_TO_ESCAPE);
            assert_eq!(out, ESCAPE_SENTINEL);
        }
    }

    mod standalone_hex {
        use super::*;

        fn opts() -> Options {
            Options::default() | Options::HEX_COLOR_STANDALONE
        }

        #[test]
        fn bare_hex_rewritten() {
            assert_eq!(prepare("a #12AB56 b", opts()), "a <#12AB56> b");
        }

        #[test]
        fn verbose_form() {
            let opts = opts() | Options::VERBOSE_HEX_COLOR;
            assert_eq!(prepare("#123456", opts), "<color:#123456>");
        }

        #[test]
        fn marker_prefixed_left_alone() {
            assert_eq!(prepare("&#123456x", opts()), "&#123456x");
        }

        #[test]
        fn after_doubled_marker_left_alone() {
            assert_eq!(prepare("a &&#123456 b", opts()), "a &&#123456 b");
            assert_eq!(prepare("&&&#123456", opts()), "&&&#123456");
        }

        #[test]
        fn existing_tags_left_alone() {
            let input = "<#123456>a<color:#654321>b<gradient:#111111:#222222>c";
            assert_eq!(prepare(input, opts()), input);
        }

        #[test]
        fn colon_without_tag_context_rewritten() {
            assert_eq!(prepare("note:#123456 ok", opts()), "note:<#123456> ok");
        }

        #[test]
        fn gradient_body_left_alone() {
            let input = "&@red-#00ff00-blue@text";
            assert_eq!(prepare(input, opts()), input);
            assert_eq!(prepare("&@#123456&x", opts()), "&@#123456&x");
        }

        #[test]
        fn unterminated_gradient_body_rewritten() {
            assert_eq!(prepare("&@#123456 x", opts()), "&@<#123456> x");
            assert_eq!(
                prepare("&@red-#123456", opts()),
                "&@red-<#123456>"
            );
        }

        #[test]
        fn short_or_invalid_hex_left_alone() {
            assert_eq!(prepare("ba#12345r #12345g", opts()), "ba#12345r #12345g");
        }

        #[test]
        fn only_first_six_digits_taken() {
            assert_eq!(prepare("#1234567", opts()), "<#123456>7");
        }

        #[test]
        fn multiple_rewrites() {
            assert_eq!(
                prepare("#000000 and #ffffff", opts()),
                "<#000000> and <#ffffff>"
            );
        }

        #[test]
        fn non_ascii_neighbours() {
            assert_eq!(prepare("é#abcdefé", opts()), "é<#abcdef>é");
            assert_eq!(prepare("&é#abcdef", opts()), "&é<#abcdef>");
        }
    }
}
