//! Open-tag tracking and the closing policy.

use std::borrow::Cow;

/// Tags currently open in the output, oldest first.
///
/// Each entry is the exact text between `<` and `>` of its opening tag, so
/// the matching closer is always `</entry>`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct TagStack {
    entries: Vec<Cow<'static, str>>,
}

impl TagStack {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn push(&mut self, tag: impl Into<Cow<'static, str>>) {
        self.entries.push(tag.into());
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    /// Closes every tracked tag before a new color opens, and at end of input.
    ///
    /// With `fast_reset` and two or more entries a single `<reset>` is
    /// emitted. Otherwise closers are emitted newest first, stopping before
    /// the oldest entry unless `close_all` is set. The stack is empty
    /// afterwards either way.
    pub(crate) fn unwind(&mut self, output: &mut String, close_all: bool, fast_reset: bool) {
        if fast_reset && self.entries.len() > 1 {
            output.push_str("<reset>");
        } else {
            let keep = if close_all { 0 } else { 1 };
            for tag in self.entries.iter().skip(keep).rev() {
                push_close(output, tag);
            }
        }
        self.entries.clear();
    }

    /// Closes the most recent entry accepted by `matches`.
    ///
    /// Everything opened after it is dropped from tracking as well, but only
    /// the matched entry gets a closer. Returns false, leaving the stack
    /// untouched, when no entry matches.
    pub(crate) fn close_last_matching<F>(&mut self, output: &mut String, matches: F) -> bool
    where
        F: Fn(&str) -> bool,
    {
        let Some(index) = self.entries.iter().rposition(|tag| matches(tag.as_ref())) else {
            return false;
        };
        push_close(output, &self.entries[index]);
        self.entries.truncate(index);
        true
    }
}

fn push_close(output: &mut String, tag: &str) {
    output.push_str("</");
    output.push_str(tag);
    output.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_of(tags: &[&'static str]) -> TagStack {
        let mut stack = TagStack::new();
        for tag in tags {
            stack.push(*tag);
        }
        stack
    }

    mod unwind {
        use super::*;

        #[test]
        fn empty_stack_emits_nothing() {
            let mut out = String::new();
            TagStack::new().unwind(&mut out, true, true);
            TagStack::new().unwind(&mut out, false, false);
            assert_eq!(out, "");
        }

        #[test]
        fn close_all_newest_first() {
            let mut stack = stack_of(&["green", "b", "u"]);
            let mut out = String::new();
            stack.unwind(&mut out, true, false);
            assert_eq!(out, "</u></b></green>");
            assert_eq!(stack.len(), 0);
        }

        #[test]
        fn oldest_left_open_but_forgotten() {
            let mut stack = stack_of(&["green", "b"]);
            let mut out = String::new();
            stack.unwind(&mut out, false, false);
            assert_eq!(out, "</b>");
            assert_eq!(stack.len(), 0);
        }

        #[test]
        fn single_entry_without_close_all() {
            let mut stack = stack_of(&["green"]);
            let mut out = String::new();
            stack.unwind(&mut out, false, true);
            assert_eq!(out, "");
            assert_eq!(stack.len(), 0);
        }

        #[test]
        fn fast_reset_collapses_two_or_more() {
            let mut stack = stack_of(&["green", "b"]);
            let mut out = String::new();
            stack.unwind(&mut out, false, true);
            assert_eq!(out, "<reset>");
            assert_eq!(stack.len(), 0);
        }

        #[test]
        fn fast_reset_ignored_for_single_entry() {
            let mut stack = stack_of(&["green"]);
            let mut out = String::new();
            stack.unwind(&mut out, true, true);
            assert_eq!(out, "</green>");
        }

        #[test]
        fn owned_entries_close_verbatim() {
            let mut stack = TagStack::new();
            stack.push(String::from("color:#a1B2c3"));
            let mut out = String::new();
            stack.unwind(&mut out, true, false);
            assert_eq!(out, "</color:#a1B2c3>");
        }
    }

    mod explicit_close {
        use super::*;

        #[test]
        fn closes_most_recent_match() {
            let mut stack = stack_of(&["b", "red", "b", "u"]);
            let mut out = String::new();
            assert!(stack.close_last_matching(&mut out, |tag| tag == "b"));
            assert_eq!(out, "</b>");
            assert_eq!(stack, stack_of(&["b", "red"]));
        }

        #[test]
        fn missing_tag_leaves_stack() {
            let mut stack = stack_of(&["red"]);
            let mut out = String::new();
            assert!(!stack.close_last_matching(&mut out, |tag| tag == "b"));
            assert_eq!(out, "");
            assert_eq!(stack.len(), 1);
        }
    }
}
