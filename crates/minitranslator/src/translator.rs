//! The translation engine.
//!
//! [`Translator`] walks the prepared input once, left to right. Text between
//! markers is copied verbatim; each marker's symbol is resolved and handled:
//!
//! - named and hex colors close what is open (per the closing policy) and
//!   open a new color tag,
//! - formats stack freely on top of whatever is open,
//! - `&r` drops everything with a single `<reset>`,
//! - gradients behave like colors but carry their color list in the tag.
//!
//! Anything that fails to parse is copied through as literal text.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::color::{is_hex6, legacy_color, ColorLookup, NamedColors};
use crate::options::Options;
use crate::prepare::{is_gradient_body_byte, prepare, ESCAPE_SENTINEL, MARKER};
use crate::stack::TagStack;
use crate::tag::{resolve, HexForm, TagKind};

/// Which characters end a gradient body such as `&@red-blue@`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientEnd {
    /// Only `@`: `&@red-blue@`.
    At,
    /// Only the marker: `&@red-blue&`.
    Marker,
    /// Either of the above.
    #[default]
    Either,
}

impl GradientEnd {
    fn accepts(self, b: u8) -> bool {
        match self {
            GradientEnd::At => b == b'@',
            GradientEnd::Marker => b == b'&',
            GradientEnd::Either => b == b'@' || b == b'&',
        }
    }
}

/// Translates legacy codes to tag markup.
///
/// A translator is immutable; every call to [`translate`](Self::translate)
/// starts from an empty tag stack.
///
/// # Example
///
/// ```rust
/// use minitranslator::{GradientEnd, Options, Translator};
///
/// let options = Options::default() - Options::FAST_RESET | Options::CLOSE_COLORS;
/// let translator = Translator::new(options).gradient_end(GradientEnd::At);
///
/// assert_eq!(translator.translate("&aHi &lthere"), "<green>Hi <b>there</b></green>");
/// assert_eq!(
///     translator.translate("&@gold-#ff0000@Fire"),
///     "<gradient:gold:#ff0000>Fire</gradient>"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Translator<L = NamedColors> {
    options: Options,
    gradient_end: GradientEnd,
    lookup: L,
}

impl Translator<NamedColors> {
    /// Creates a translator with the given options and the default color names.
    pub fn new(options: Options) -> Self {
        Self {
            options,
            gradient_end: GradientEnd::default(),
            lookup: NamedColors,
        }
    }
}

impl Default for Translator<NamedColors> {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl<L: ColorLookup> Translator<L> {
    /// Sets which characters terminate a gradient body.
    pub fn gradient_end(mut self, end: GradientEnd) -> Self {
        self.gradient_end = end;
        self
    }

    /// Replaces the lookup used for full color names inside gradients.
    pub fn with_lookup<M: ColorLookup>(self, lookup: M) -> Translator<M> {
        Translator {
            options: self.options,
            gradient_end: self.gradient_end,
            lookup,
        }
    }

    /// Returns the enabled options.
    pub fn options(&self) -> Options {
        self.options
    }

    /// Translates `input`. Never fails; malformed codes are kept as text.
    ///
    /// With [`Options::DOUBLE_TO_ESCAPE`], a `U+E000` already present in
    /// `input` comes out as `&`.
    pub fn translate(&self, input: &str) -> String {
        let text = prepare(input, self.options);
        let mut output = Scanner::new(self, &text).run();

        if self.options.contains(Options::DOUBLE_TO_ESCAPE) && output.contains(ESCAPE_SENTINEL) {
            output = output.replace(ESCAPE_SENTINEL, "&");
        }
        output
    }

    /// Resolves one `-` separated gradient color.
    fn gradient_color<'s>(&'s self, spec: &'s str) -> Option<&'s str> {
        let bytes = spec.as_bytes();
        match bytes {
            [] => None,
            [symbol] => legacy_color(char::from(*symbol)),
            [b'#', digits @ ..] => is_hex6(digits).then_some(spec),
            _ => self.lookup.lookup(spec),
        }
    }
}

/// Per-call scanning state.
struct Scanner<'a, L> {
    translator: &'a Translator<L>,
    text: &'a str,
    pos: usize,
    output: String,
    stack: TagStack,
    close_last: bool,
}

impl<'a, L: ColorLookup> Scanner<'a, L> {
    fn new(translator: &'a Translator<L>, text: &'a str) -> Self {
        Self {
            translator,
            text,
            pos: 0,
            output: String::with_capacity(text.len() + text.len() / 2),
            stack: TagStack::new(),
            close_last: true,
        }
    }

    fn options(&self) -> Options {
        self.translator.options
    }

    fn run(mut self) -> String {
        while let Some(offset) = self.text[self.pos..].find(MARKER) {
            let at = self.pos + offset;
            self.output.push_str(&self.text[self.pos..at]);
            self.pos = at + 1;

            let Some(symbol) = self.text[self.pos..].chars().next() else {
                self.output.push(MARKER);
                break;
            };
            self.pos += symbol.len_utf8();

            if symbol == '/' && self.options().contains(Options::END_TAGS) {
                self.close_explicit();
                continue;
            }

            match resolve(symbol, self.options()) {
                Some(kind) => self.open(kind, symbol),
                None => self.push_literal(symbol),
            }
        }
        self.output.push_str(&self.text[self.pos..]);

        if !self.stack.is_empty() {
            trace!(open = self.stack.len(), close_all = self.close_last, "flushing open tags");
        }
        self.unwind();
        self.output
    }

    fn open(&mut self, kind: TagKind, symbol: char) {
        let tag: Cow<'static, str> = match kind {
            TagKind::NamedColor(name) => Cow::Borrowed(name),
            TagKind::Format(style) => Cow::Borrowed(style.tag()),
            TagKind::Reset => {
                self.stack.clear();
                self.output.push_str("<reset>");
                return;
            }
            TagKind::HexColor(form) => match self.read_hex(form) {
                Some(tag) => Cow::Owned(tag),
                None => {
                    trace!(pos = self.pos, ?form, "invalid hex color, keeping literal");
                    self.push_literal(symbol);
                    return;
                }
            },
            TagKind::Gradient => match self.read_gradient() {
                Some(tag) => Cow::Owned(tag),
                None => {
                    trace!(pos = self.pos, "invalid gradient, keeping literal");
                    self.push_literal(symbol);
                    return;
                }
            },
        };

        if kind.is_color() {
            self.unwind();
        }
        self.close_last = match kind {
            TagKind::NamedColor(_) | TagKind::HexColor(_) => {
                self.options().contains(Options::CLOSE_COLORS)
            }
            _ => true,
        };

        self.output.push('<');
        self.output.push_str(&tag);
        self.output.push('>');
        if kind == TagKind::Gradient {
            self.stack.push("gradient");
        } else {
            self.stack.push(tag);
        }
    }

    /// Handles `&/` followed by a symbol.
    fn close_explicit(&mut self) {
        let Some(symbol) = self.text[self.pos..].chars().next() else {
            self.output.push_str("&/");
            return;
        };
        self.pos += symbol.len_utf8();

        let output = &mut self.output;
        let closed = match resolve(symbol, self.translator.options) {
            Some(TagKind::Reset) => true,
            Some(TagKind::NamedColor(name)) => {
                self.stack.close_last_matching(output, |tag| tag == name)
            }
            Some(TagKind::Format(style)) => {
                self.stack.close_last_matching(output, |tag| tag == style.tag())
            }
            Some(TagKind::HexColor(_)) => self.stack.close_last_matching(output, |tag| {
                tag.starts_with('#') || tag.starts_with("color:#")
            }),
            Some(TagKind::Gradient) => {
                self.stack.close_last_matching(output, |tag| tag == "gradient")
            }
            None => false,
        };

        if !closed {
            self.output.push_str("&/");
            self.output.push(symbol);
        }
    }

    /// Reads the digits of a hex color starting at the cursor.
    ///
    /// On success the cursor moves past the digits and the tag text is
    /// returned; on failure nothing is consumed.
    fn read_hex(&mut self, form: HexForm) -> Option<String> {
        let bytes = &self.text.as_bytes()[self.pos..];
        let mut digits = String::with_capacity(6);

        let consumed = match form {
            HexForm::Compact => {
                let window = bytes.get(..6)?;
                if !is_hex6(window) {
                    return None;
                }
                digits.push_str(&self.text[self.pos..self.pos + 6]);
                6
            }
            HexForm::Spaced => {
                let window = bytes.get(..12)?;
                for pair in window.chunks_exact(2) {
                    if pair[0] != b'&' || !pair[1].is_ascii_hexdigit() {
                        return None;
                    }
                    digits.push(char::from(pair[1]));
                }
                12
            }
        };
        self.pos += consumed;

        let prefix = if self.options().contains(Options::VERBOSE_HEX_COLOR) {
            "color:#"
        } else {
            "#"
        };
        Some(format!("{}{}", prefix, digits))
    }

    /// Reads a gradient body starting at the cursor.
    ///
    /// Returns the full tag text (`gradient:c1:c2...`) and moves the cursor
    /// past the terminator, or consumes nothing if the body is invalid.
    fn read_gradient(&mut self) -> Option<String> {
        let bytes = self.text.as_bytes();
        let end_rule = self.translator.gradient_end;

        let mut end = None;
        for (i, &b) in bytes.iter().enumerate().skip(self.pos) {
            if end_rule.accepts(b) {
                end = Some(i);
                break;
            }
            if !is_gradient_body_byte(b) {
                break;
            }
        }
        let end = end?;

        let body = &self.text[self.pos..end];
        let mut tag = String::from("gradient");
        let mut count = 0;
        for spec in body.split('-') {
            let color = self.translator.gradient_color(spec)?;
            tag.push(':');
            tag.push_str(color);
            count += 1;
        }
        if count < 2 {
            return None;
        }

        self.pos = end + 1;
        Some(tag)
    }

    fn unwind(&mut self) {
        let fast_reset = self.options().contains(Options::FAST_RESET);
        self.stack.unwind(&mut self.output, self.close_last, fast_reset);
    }

    fn push_literal(&mut self, symbol: char) {
        self.output.push(MARKER);
        self.output.push(symbol);
    }
}
