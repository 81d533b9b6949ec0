//! Reusable whitespace boundary checks.
//!
//! A [`WhitespaceChecker`] is built once per rule from a target whitespace
//! kind and an expectation, then asked whether the text around a given index
//! of a source fragment satisfies it. The checker knows nothing about nodes:
//! callers pass the fragment and the index of the token whose boundary they
//! care about, and map a [`Violation`] back to a node themselves.

/// Kind of whitespace a boundary is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Whitespace {
    Space,
    Newline,
}

/// What the boundary must look like.
///
/// The single-line and multi-line variants only apply when the line-check
/// string (or the source, if none) is respectively single-line or
/// multi-line; otherwise the check passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    Always,
    Never,
    AlwaysSingleLine,
    NeverSingleLine,
    AlwaysMultiLine,
    NeverMultiLine,
}

impl Expectation {
    const fn requires(self) -> bool {
        matches!(
            self,
            Self::Always | Self::AlwaysSingleLine | Self::AlwaysMultiLine
        )
    }

    fn applies_to(self, text: &str) -> bool {
        let single_line = !text.contains(['\n', '\r']);
        match self {
            Self::Always | Self::Never => true,
            Self::AlwaysSingleLine | Self::NeverSingleLine => single_line,
            Self::AlwaysMultiLine | Self::NeverMultiLine => !single_line,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Before,
    After,
}

/// A failed boundary check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub side: Side,
    pub target: Whitespace,
    pub expectation: Expectation,
    /// Character at the checked index, if the index is inside the source.
    pub found: Option<char>,
}

/// The text and position a check runs against.
///
/// `index` may be `-1` to check the start of `source` as if a token sat
/// just before it.
#[derive(Debug, Clone, Copy)]
pub struct Boundary<'a> {
    pub source: &'a str,
    pub index: isize,
    pub line_check: Option<&'a str>,
}

impl<'a> Boundary<'a> {
    #[must_use]
    pub const fn new(source: &'a str, index: isize) -> Self {
        Self {
            source,
            index,
            line_check: None,
        }
    }

    /// Decide single-line/multi-line expectations on `text` instead of the source.
    #[must_use]
    pub const fn with_line_check(mut self, text: &'a str) -> Self {
        self.line_check = Some(text);
        self
    }

    fn char_at(&self, index: isize) -> Option<char> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.source.chars().nth(i))
    }

    fn line_check_text(&self) -> &'a str {
        self.line_check.unwrap_or(self.source)
    }
}

const fn is_whitespace(c: Option<char>) -> bool {
    matches!(c, Some(' ' | '\t' | '\n' | '\r' | '\x0c'))
}

#[derive(Debug, Clone, Copy, Default)]
struct Options {
    only_one_char: bool,
    allow_indentation: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WhitespaceChecker {
    target: Whitespace,
    expectation: Expectation,
}

impl WhitespaceChecker {
    #[must_use]
    pub const fn new(target: Whitespace, expectation: Expectation) -> Self {
        Self {
            target,
            expectation,
        }
    }

    #[must_use]
    pub const fn target(&self) -> Whitespace {
        self.target
    }

    #[must_use]
    pub const fn expectation(&self) -> Expectation {
        self.expectation
    }

    /// Check the whitespace after `boundary.index`.
    ///
    /// # Errors
    /// Returns the violation when the boundary does not match the expectation.
    pub fn after(&self, boundary: Boundary<'_>) -> Result<(), Violation> {
        self.check_after(boundary, Options::default())
    }

    /// Like [`after`](Self::after), but only the first whitespace token after
    /// the index is examined; what follows it is left to other checks.
    ///
    /// # Errors
    /// Returns the violation when the boundary does not match the expectation.
    pub fn after_one_only(&self, boundary: Boundary<'_>) -> Result<(), Violation> {
        self.check_after(
            boundary,
            Options {
                only_one_char: true,
                ..Options::default()
            },
        )
    }

    /// Check the whitespace before `boundary.index`.
    ///
    /// # Errors
    /// Returns the violation when the boundary does not match the expectation.
    pub fn before(&self, boundary: Boundary<'_>) -> Result<(), Violation> {
        self.check_before(boundary, Options::default())
    }

    /// Like [`before`](Self::before), but spaces and tabs between the
    /// expected newline and the index are accepted as indentation.
    ///
    /// # Errors
    /// Returns the violation when the boundary does not match the expectation.
    pub fn before_allowing_indentation(&self, boundary: Boundary<'_>) -> Result<(), Violation> {
        self.check_before(
            boundary,
            Options {
                allow_indentation: true,
                ..Options::default()
            },
        )
    }

    fn violation(&self, side: Side, boundary: &Boundary<'_>) -> Violation {
        Violation {
            side,
            target: self.target,
            expectation: self.expectation,
            found: boundary.char_at(boundary.index),
        }
    }

    fn check_after(&self, boundary: Boundary<'_>, options: Options) -> Result<(), Violation> {
        if !self.expectation.applies_to(boundary.line_check_text()) {
            return Ok(());
        }
        let passes = if self.expectation.requires() {
            self.expected_after_present(&boundary, options)
        } else {
            !is_whitespace(boundary.char_at(boundary.index + 1))
        };
        if passes {
            Ok(())
        } else {
            Err(self.violation(Side::After, &boundary))
        }
    }

    fn expected_after_present(&self, boundary: &Boundary<'_>, options: Options) -> bool {
        let at = |offset: isize| boundary.char_at(boundary.index + offset);
        let Some(first) = at(1) else {
            // Nothing follows the index: nothing to separate.
            return true;
        };
        match self.target {
            Whitespace::Newline => {
                if first == '\r' && at(2) == Some('\n') {
                    return options.only_one_char || !is_whitespace(at(3));
                }
                first == '\n' && (options.only_one_char || !is_whitespace(at(2)))
            }
            Whitespace::Space => first == ' ' && (options.only_one_char || !is_whitespace(at(2))),
        }
    }

    fn check_before(&self, boundary: Boundary<'_>, options: Options) -> Result<(), Violation> {
        if !self.expectation.applies_to(boundary.line_check_text()) {
            return Ok(());
        }
        let passes = if self.expectation.requires() {
            self.expected_before_present(&boundary, options)
        } else {
            !is_whitespace(boundary.char_at(boundary.index - 1))
        };
        if passes {
            Ok(())
        } else {
            Err(self.violation(Side::Before, &boundary))
        }
    }

    fn expected_before_present(&self, boundary: &Boundary<'_>, options: Options) -> bool {
        let at = |offset: isize| boundary.char_at(boundary.index - offset);
        if options.allow_indentation && self.target == Whitespace::Newline {
            let mut offset = 1;
            loop {
                match at(offset) {
                    Some(' ' | '\t') => offset += 1,
                    Some('\n') => return true,
                    _ => return false,
                }
            }
        }
        let Some(first) = at(1) else {
            return true;
        };
        let expected = match self.target {
            Whitespace::Newline => '\n',
            Whitespace::Space => ' ',
        };
        if first != expected {
            return false;
        }
        let mut previous = at(2);
        if self.target == Whitespace::Newline && previous == Some('\r') {
            previous = at(3);
        }
        options.only_one_char || !is_whitespace(previous)
    }
}

#[cfg(test)]
#[path = "whitespace_tests.rs"]
mod tests;
