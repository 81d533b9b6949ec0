//! Stylesheet syntax tree.
//!
//! An arena-backed tree that keeps every raw whitespace fragment, so that a
//! parsed document renders back to its source exactly and fixes only touch
//! the fragments they mutate.

mod node;
mod parser;
mod stringify;

pub use node::{AtRule, Document, Node, NodeId, NodeKind, Position, Raws};
pub use parser::{ParseError, parse};
