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

//! Syntax kind definitions for the JSON-WC rowan tree.
//!
//! This enum is intentionally flat (not nested) to satisfy rowan's
//! requirement for a `#[repr(u16)]` type. Categories are indicated by
//! comments and helper predicates like `is_trivia()`.

use SyntaxKind::*;

/// All syntax kinds for JSON-WC tokens and nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // ==========================================================================
    // Special
    // ==========================================================================
    /// Sentinel returned by lookahead past the end of input. Never appears
    /// in a built tree.
    EOF = 0,

    // ==========================================================================
    // Background tokens (trivia)
    // ==========================================================================
    /// A maximal run of whitespace bytes.
    WHITESPACE,
    /// A terminated comment, `//` line or `/* ... */` block. A line
    /// comment's trailing newline is not part of the token.
    COMMENT,
    /// A `/*` comment that ran to end of input without a closing `*/`.
    UNTERMINATED_BLOCK_COMMENT,

    // ==========================================================================
    // Structural tokens (width 1)
    // ==========================================================================
    CURLY_OPEN,
    CURLY_CLOSE,
    SQUARE_OPEN,
    SQUARE_CLOSE,
    COLON,
    COMMA,

    // ==========================================================================
    // Value-starter tokens
    // ==========================================================================
    /// A signed decimal integer word.
    INTEGER,
    /// A well-formed, terminated string literal.
    STRING,
    /// A string literal with embedded lexical errors (unterminated, illegal
    /// control characters, or bad escapes).
    ERROR_STRING,
    /// The keyword `true`.
    KW_TRUE,
    /// The keyword `false`.
    KW_FALSE,
    /// A word that is neither a boolean nor an integer.
    UNDEFINED_VALUE,
    /// A single separator character outside the recognized grammar.
    UNKNOWN_SYMBOL,

    // ==========================================================================
    // Composite nodes - grammar structure
    // ==========================================================================
    /// Root of the tree: one `MULTI_VALUE`.
    ROOT,
    /// A sequence of one or more values separated only by background trivia,
    /// plus a trailing background list.
    MULTI_VALUE,
    /// A run of background (trivia) symbols preceding a value.
    BACKGROUND_LIST,
    /// One background list followed by one value.
    VALUE_WITH_BACKGROUND,
    /// A stray top-level `,`, `:`, `}`, or `]` reclassified as trivia.
    ROOT_LEVEL_VALUE_DELIMITER,

    // ==========================================================================
    // Composite nodes - value variants
    // ==========================================================================
    /// An absent value (width 0, no children).
    VALUE_MISSING,
    /// Wraps an `INTEGER` token.
    VALUE_INTEGER,
    /// Wraps a `STRING` token.
    VALUE_STRING,
    /// Wraps an `ERROR_STRING` token.
    VALUE_ERROR_STRING,
    /// Wraps a `KW_TRUE`/`KW_FALSE` token.
    VALUE_BOOLEAN,
    /// Wraps an `UNDEFINED_VALUE` token.
    VALUE_UNDEFINED,
    /// Wraps an `UNKNOWN_SYMBOL` token.
    VALUE_UNKNOWN_SYMBOL,
    /// `[` MULTI_VALUE (`,` MULTI_VALUE)* `]`?
    LIST,
    /// `{` KEY_VALUE (`,` KEY_VALUE)* `}`?
    MAP,
    /// One map entry: a key `MULTI_VALUE` and zero or more `:` `MULTI_VALUE`
    /// continuations.
    KEY_VALUE,

    // Sentinel for bounds checking (must be last).
    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Whether this token kind is background trivia.
    pub fn is_trivia(self) -> bool {
        matches!(self, WHITESPACE | COMMENT | UNTERMINATED_BLOCK_COMMENT)
    }

    /// Whether this is one of the seven fixed-width structural tokens.
    pub fn is_structural(self) -> bool {
        matches!(self, CURLY_OPEN | CURLY_CLOSE | SQUARE_OPEN | SQUARE_CLOSE | COLON | COMMA)
    }

    /// Whether this token kind can start a value (`spec.md` "value-starter").
    pub fn is_value_starter(self) -> bool {
        matches!(
            self,
            CURLY_OPEN | SQUARE_OPEN | INTEGER | STRING | ERROR_STRING | KW_TRUE | KW_FALSE | UNDEFINED_VALUE
                | UNKNOWN_SYMBOL
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Lookup table for converting raw u16 values back to SyntaxKind.
/// This avoids unsafe transmute by using an explicit array.
const SYNTAX_KIND_TABLE: &[SyntaxKind] = &[
    EOF,
    WHITESPACE,
    COMMENT,
    UNTERMINATED_BLOCK_COMMENT,
    CURLY_OPEN,
    CURLY_CLOSE,
    SQUARE_OPEN,
    SQUARE_CLOSE,
    COLON,
    COMMA,
    INTEGER,
    STRING,
    ERROR_STRING,
    KW_TRUE,
    KW_FALSE,
    UNDEFINED_VALUE,
    UNKNOWN_SYMBOL,
    ROOT,
    MULTI_VALUE,
    BACKGROUND_LIST,
    VALUE_WITH_BACKGROUND,
    ROOT_LEVEL_VALUE_DELIMITER,
    VALUE_MISSING,
    VALUE_INTEGER,
    VALUE_STRING,
    VALUE_ERROR_STRING,
    VALUE_BOOLEAN,
    VALUE_UNDEFINED,
    VALUE_UNKNOWN_SYMBOL,
    LIST,
    MAP,
    KEY_VALUE,
    __LAST,
];

/// Convert a raw rowan SyntaxKind to our SyntaxKind.
///
/// # Panics
/// Panics if the raw value is out of range.
pub fn syntax_kind_from_raw(raw: rowan::SyntaxKind) -> SyntaxKind {
    SYNTAX_KIND_TABLE.get(raw.0 as usize).copied().unwrap_or_else(|| panic!("invalid SyntaxKind: {}", raw.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_kind_table_is_correct() {
        for (i, &kind) in SYNTAX_KIND_TABLE.iter().enumerate() {
            assert_eq!(
                kind as u16, i as u16,
                "SYNTAX_KIND_TABLE[{i}] = {:?} has discriminant {}, expected {i}",
                kind, kind as u16
            );
        }
    }

    #[test]
    fn syntax_kind_roundtrip() {
        for &kind in SYNTAX_KIND_TABLE.iter() {
            if kind == __LAST {
                continue;
            }
            let raw: rowan::SyntaxKind = kind.into();
            let back = syntax_kind_from_raw(raw);
            assert_eq!(kind, back);
        }
    }

    #[test]
    fn is_trivia() {
        assert!(WHITESPACE.is_trivia());
        assert!(COMMENT.is_trivia());
        assert!(UNTERMINATED_BLOCK_COMMENT.is_trivia());
        assert!(!INTEGER.is_trivia());
    }

    #[test]
    fn is_value_starter() {
        assert!(INTEGER.is_value_starter());
        assert!(STRING.is_value_starter());
        assert!(CURLY_OPEN.is_value_starter());
        assert!(SQUARE_OPEN.is_value_starter());
        assert!(!COMMA.is_value_starter());
        assert!(!WHITESPACE.is_value_starter());
    }
}
