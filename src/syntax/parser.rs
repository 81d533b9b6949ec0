//! Lossless stylesheet parser.
//!
//! Builds a [`Document`] whose rendering reproduces the input byte for byte.
//! It recognises at-rules, rules, declarations and comments, plus the Less
//! mixin-call and variable forms that linters need to tell apart from
//! standard at-rules. It does not validate CSS beyond balancing blocks,
//! strings, comments and brackets.

use thiserror::Error;

use super::node::{AtRule, Document, NodeId, NodeKind, Position, Raws};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unclosed block at {0}")]
    UnclosedBlock(Position),

    #[error("Unclosed comment at {0}")]
    UnclosedComment(Position),

    #[error("Unclosed string at {0}")]
    UnclosedString(Position),

    #[error("Unclosed bracket at {0}")]
    UnclosedBracket(Position),

    #[error("Unexpected }} at {0}")]
    UnexpectedCloseBrace(Position),

    #[error("Unknown word at {0}")]
    UnknownWord(Position),
}

impl ParseError {
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnclosedBlock(p)
            | Self::UnclosedComment(p)
            | Self::UnclosedString(p)
            | Self::UnclosedBracket(p)
            | Self::UnexpectedCloseBrace(p)
            | Self::UnknownWord(p) => *p,
        }
    }
}

type ParseResult<T> = std::result::Result<T, ParseError>;

/// Parse stylesheet source into a lossless [`Document`].
///
/// # Errors
/// Returns an error for unbalanced blocks, comments, strings or brackets, a
/// stray `}`, or a statement that is neither a declaration nor a rule.
pub fn parse(source: &str) -> ParseResult<Document> {
    let parser = Parser {
        src: source,
        bytes: source.as_bytes(),
        pos: 0,
        doc: Document::with_source(source.to_string()),
    };
    parser.run()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Terminator {
    Semicolon,
    OpenBrace,
    CloseBrace,
    Eof,
}

const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0c)
}

const fn is_name_end(b: u8) -> bool {
    is_whitespace(b) || matches!(b, b'(' | b'{' | b'}' | b';' | b':' | b'"' | b'\'' | b'/')
}

/// Split `text` into its content and trailing whitespace.
fn split_trailing_whitespace(text: &str) -> (&str, &str) {
    let content = text.trim_end_matches(|c: char| c.is_ascii() && is_whitespace(c as u8));
    (content, &text[content.len()..])
}

fn split_leading_whitespace(text: &str) -> (&str, &str) {
    let rest = text.trim_start_matches(|c: char| c.is_ascii() && is_whitespace(c as u8));
    (&text[..text.len() - rest.len()], rest)
}

struct Parser<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
    doc: Document,
}

impl Parser<'_> {
    fn run(mut self) -> ParseResult<Document> {
        let root = self.doc.root();
        self.parse_children(root, None)?;
        Ok(self.doc)
    }

    fn position_of(&self, offset: usize) -> Position {
        Position::of_offset(self.src, offset)
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn starts_comment(&self, at: usize) -> bool {
        self.bytes.get(at) == Some(&b'/') && self.bytes.get(at + 1) == Some(&b'*')
    }

    fn take_whitespace(&mut self) -> String {
        let start = self.pos;
        while self.peek().is_some_and(is_whitespace) {
            self.pos += 1;
        }
        self.src[start..self.pos].to_string()
    }

    /// Whitespace before the next node. Stray `;` are kept here as well so
    /// they survive a round trip.
    fn take_before(&mut self) -> String {
        let start = self.pos;
        while self.peek().is_some_and(|b| is_whitespace(b) || b == b';') {
            self.pos += 1;
        }
        self.src[start..self.pos].to_string()
    }

    fn parse_children(&mut self, parent: NodeId, open_brace: Option<usize>) -> ParseResult<()> {
        loop {
            let before = self.take_before();
            match self.peek() {
                None => {
                    if let Some(open) = open_brace {
                        return Err(ParseError::UnclosedBlock(self.position_of(open)));
                    }
                    self.doc.node_mut(parent).raws.after = before;
                    return Ok(());
                }
                Some(b'}') => {
                    if open_brace.is_none() {
                        return Err(ParseError::UnexpectedCloseBrace(
                            self.position_of(self.pos),
                        ));
                    }
                    self.doc.node_mut(parent).raws.after = before;
                    self.pos += 1;
                    return Ok(());
                }
                Some(b'/') if self.starts_comment(self.pos) => self.parse_comment(parent, before)?,
                Some(b'@') => self.parse_at_rule(parent, before)?,
                Some(_) => self.parse_other(parent, before)?,
            }
        }
    }

    fn comment_end(&self, start: usize) -> ParseResult<usize> {
        self.src[start + 2..]
            .find("*/")
            .map(|i| start + 2 + i)
            .ok_or_else(|| ParseError::UnclosedComment(self.position_of(start)))
    }

    fn parse_comment(&mut self, parent: NodeId, before: String) -> ParseResult<()> {
        let start = self.pos;
        let end = self.comment_end(start)?;
        let inner = &self.src[start + 2..end];
        let (left, rest) = split_leading_whitespace(inner);
        let (text, right) = split_trailing_whitespace(rest);
        let raws = Raws {
            before,
            left: left.to_string(),
            right: right.to_string(),
            ..Raws::default()
        };
        let kind = NodeKind::Comment {
            text: text.to_string(),
        };
        self.pos = end + 2;
        self.doc.append_at(parent, kind, raws, Some(start));
        Ok(())
    }

    fn skip_string(&self, start: usize) -> ParseResult<usize> {
        let quote = self.bytes[start];
        let mut i = start + 1;
        while i < self.bytes.len() {
            match self.bytes[i] {
                b'\\' => i += 2,
                b if b == quote => return Ok(i + 1),
                _ => i += 1,
            }
        }
        Err(ParseError::UnclosedString(self.position_of(start)))
    }

    /// Find where the statement starting at `from` ends, skipping strings,
    /// comments and anything nested in brackets.
    fn scan_end(&self, from: usize) -> ParseResult<(usize, Terminator)> {
        let len = self.bytes.len();
        let mut i = from;
        let mut depth = 0usize;
        let mut bracket_start = from;
        while i < len {
            match self.bytes[i] {
                b'"' | b'\'' => i = self.skip_string(i)?,
                b'/' if self.starts_comment(i) => i = self.comment_end(i)? + 2,
                b'\\' => i = (i + 2).min(len),
                b'(' | b'[' => {
                    if depth == 0 {
                        bracket_start = i;
                    }
                    depth += 1;
                    i += 1;
                }
                b')' | b']' => {
                    depth = depth.saturating_sub(1);
                    i += 1;
                }
                b';' if depth == 0 => return Ok((i, Terminator::Semicolon)),
                b'{' if depth == 0 => return Ok((i, Terminator::OpenBrace)),
                b'}' if depth == 0 => return Ok((i, Terminator::CloseBrace)),
                _ => i += 1,
            }
        }
        if depth > 0 {
            return Err(ParseError::UnclosedBracket(self.position_of(bracket_start)));
        }
        Ok((len, Terminator::Eof))
    }

    fn parse_at_rule(&mut self, parent: NodeId, before: String) -> ParseResult<()> {
        let start = self.pos;
        self.pos += 1;
        let name_start = self.pos;
        while self.peek().is_some_and(|b| !is_name_end(b)) {
            self.pos += 1;
        }
        let name = self.src[name_start..self.pos].to_string();
        let variable = !name.is_empty() && self.peek() == Some(b':');
        if variable {
            self.pos += 1;
        }
        let after_name = self.take_whitespace();

        let (end, terminator) = self.scan_end(self.pos)?;
        let (params, between) = split_trailing_whitespace(&self.src[self.pos..end]);
        let kind = NodeKind::AtRule(AtRule {
            name,
            params: params.to_string(),
            has_block: terminator == Terminator::OpenBrace,
            variable,
            mixin: false,
        });
        let raws = Raws {
            before,
            between: between.to_string(),
            after_name,
            identifier: "@".to_string(),
            ..Raws::default()
        };
        self.finish_node(parent, kind, raws, start, end, terminator)
    }

    fn parse_other(&mut self, parent: NodeId, before: String) -> ParseResult<()> {
        let start = self.pos;
        let (end, terminator) = self.scan_end(start)?;
        let text = &self.src[start..end];

        let (kind, raws) = if terminator == Terminator::OpenBrace {
            let (selector, between) = split_trailing_whitespace(text);
            let kind = NodeKind::Rule {
                selector: selector.to_string(),
            };
            let raws = Raws {
                before,
                between: between.to_string(),
                ..Raws::default()
            };
            (kind, raws)
        } else if text.starts_with(['.', '#']) {
            mixin_call(text, before)
        } else if let Some(colon) = text.find(':') {
            declaration(text, colon, before)
        } else {
            return Err(ParseError::UnknownWord(self.position_of(start)));
        };
        self.finish_node(parent, kind, raws, start, end, terminator)
    }

    fn finish_node(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        raws: Raws,
        start: usize,
        end: usize,
        terminator: Terminator,
    ) -> ParseResult<()> {
        let id = self.doc.append_at(parent, kind, raws, Some(start));
        self.pos = end;
        match terminator {
            Terminator::OpenBrace => {
                self.pos += 1;
                self.parse_children(id, Some(end))
            }
            Terminator::Semicolon => {
                self.pos += 1;
                self.doc.node_mut(parent).raws.semicolon = true;
                Ok(())
            }
            Terminator::CloseBrace | Terminator::Eof => {
                self.doc.node_mut(parent).raws.semicolon = false;
                Ok(())
            }
        }
    }
}

/// `.mixin(args)` or `#ns.mixin(args)` used as a statement (Less).
fn mixin_call(text: &str, before: String) -> (NodeKind, Raws) {
    let (identifier, body) = text.split_at(1);
    let name_len = body
        .find(|c: char| c == '(' || c == '!' || (c.is_ascii() && is_whitespace(c as u8)))
        .unwrap_or(body.len());
    let (name, rest) = body.split_at(name_len);
    let (after_name, rest) = split_leading_whitespace(rest);
    let (params, between) = split_trailing_whitespace(rest);
    let kind = NodeKind::AtRule(AtRule {
        name: name.to_string(),
        params: params.to_string(),
        has_block: false,
        variable: false,
        mixin: true,
    });
    let raws = Raws {
        before,
        between: between.to_string(),
        after_name: after_name.to_string(),
        identifier: identifier.to_string(),
        ..Raws::default()
    };
    (kind, raws)
}

fn declaration(text: &str, colon: usize, before: String) -> (NodeKind, Raws) {
    let (prop, _) = split_trailing_whitespace(&text[..colon]);
    let (gap, rest) = split_leading_whitespace(&text[colon + 1..]);
    let (value, after) = split_trailing_whitespace(rest);
    let between = format!("{}:{gap}", &text[prop.len()..colon]);
    let kind = NodeKind::Declaration {
        prop: prop.to_string(),
        value: value.to_string(),
    };
    let raws = Raws {
        before,
        between,
        after: after.to_string(),
        ..Raws::default()
    };
    (kind, raws)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
