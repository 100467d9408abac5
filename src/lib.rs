// This file is part of the jsoncst library.

// The jsoncst library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The jsoncst library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the jsoncst library. If not, see <https://www.gnu.org/licenses/>.

//! Lossless rowan-based concrete syntax tree for JSON-with-comments.
//!
//! `parse` never fails and never panics: every byte of the input ends up
//! somewhere in the tree (as a value, as trivia, or wrapped in an error
//! node), and every problem found along the way is a [`error::JsonError`] in
//! [`parser::Root::errors`] rather than a `Result::Err`.
//!
//! ```
//! let root = jsoncst::parse(r#"{ "a": [1, 2, true] }"#);
//! assert!(root.errors().is_empty());
//! assert_eq!(root.syntax().text(), r#"{ "a": [1, 2, true] }"#);
//! ```

mod circular_buffer;
mod classify;
mod error;
mod green;
mod lexer;
mod parser;
mod red;
mod syntax_kind;

pub use circular_buffer::CircularBuffer;
pub use classify::{classify, CharClass};
pub use error::{ErrorLevel, ErrorParam, JsonError, JsonErrorCode};
pub use lexer::{tokenize_all, BoolKind, IntegerValue, Symbol, Tokenizer};
pub use parser::{parse, Root};
pub use red::{terminal_symbols_at, terminal_symbols_in_range, KeyValue, List, Map, MultiValue, Value};
pub use rowan::{TextRange, TextSize};
pub use syntax_kind::{syntax_kind_from_raw, SyntaxKind};

/// The `rowan::Language` tag for the JSON-WC tree. Uninhabited: it exists
/// only to parameterize `rowan`'s generic node/token types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JsoncstLanguage {}

impl rowan::Language for JsoncstLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        syntax_kind_from_raw(raw)
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// A node in the JSON-WC syntax tree.
pub type SyntaxNode = rowan::SyntaxNode<JsoncstLanguage>;

/// A token (leaf) in the JSON-WC syntax tree.
pub type SyntaxToken = rowan::SyntaxToken<JsoncstLanguage>;

/// Either a node or a token.
pub type SyntaxElement = rowan::SyntaxElement<JsoncstLanguage>;
