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

//! Stable diagnostic codes and records for the JSON-WC syntax core.
//!
//! `JsonErrorCode` is a stable wire contract: its variants and their order
//! must not change without a deliberate migration, since hosts may persist
//! or compare against specific codes.

use std::fmt;

/// Stable diagnostic code. One variant per row of the error code catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[non_exhaustive]
pub enum JsonErrorCode {
    /// Placeholder; never emitted by this crate.
    Unspecified = 0,
    /// Reserved for host layers built on top of this crate.
    Custom,
    /// A stray delimiter or extra value appeared at the top level.
    ExpectedEof,
    /// A list was never closed before end of input.
    UnexpectedEofInArray,
    /// A map was never closed before end of input.
    UnexpectedEofInObject,
    /// A `}` was seen while inside a list.
    ControlSymbolInArray,
    /// A `]` was seen while inside a map.
    ControlSymbolInObject,
    /// A value was expected but none was present.
    MissingValue,
    /// More than one value appeared between delimiters.
    MultipleValues,
    /// A map entry's key section was empty.
    MissingPropertyKey,
    /// A map entry's key section held more than one value.
    MultiplePropertyKeys,
    /// A map entry had more than one `:` section.
    MultiplePropertyKeySections,
    /// A map entry's key was not a string literal.
    InvalidPropertyKey,
    /// A map already had an entry with this key.
    PropertyKeyAlreadyExists,
    /// An unrecognized symbol was found at the lexical level.
    UnexpectedSymbol,
    /// A bare word was neither `true`, `false`, nor an integer.
    UnrecognizedValue,
    /// A `/*` comment was never closed with `*/`.
    UnterminatedMultiLineComment,
    /// A string literal's open quote was never closed.
    UnterminatedString,
    /// A C0 or DEL control character appeared inside a string body.
    IllegalControlCharacterInString,
    /// A `\x` or `\uXXXX` escape sequence was malformed.
    UnrecognizedEscapeSequence,
}

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorLevel {
    Message,
    Warning,
    Error,
}

impl JsonErrorCode {
    /// The severity a freshly constructed diagnostic of this code defaults to.
    pub fn default_level(self) -> ErrorLevel {
        match self {
            JsonErrorCode::Unspecified | JsonErrorCode::Custom => ErrorLevel::Message,
            JsonErrorCode::PropertyKeyAlreadyExists | JsonErrorCode::UnrecognizedValue => ErrorLevel::Warning,
            _ => ErrorLevel::Error,
        }
    }
}

/// One typed diagnostic parameter.
///
/// The catalog in `spec.md` only ever attaches a character or a string, so
/// this stays a plain two-variant enum rather than a boxed `dyn Any`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorParam {
    Char(char),
    Str(String),
}

impl fmt::Display for ErrorParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorParam::Char(c) => write!(f, "{c}"),
            ErrorParam::Str(s) => write!(f, "{s}"),
        }
    }
}

/// A single diagnostic record.
///
/// `start`/`length` are byte offsets into whatever text this error's owner
/// was decoded from. For errors embedded in a `SyntaxKind::ERROR_STRING` or
/// `SyntaxKind::UNTERMINATED_BLOCK_COMMENT` token, `start` is relative to the
/// token; call [`JsonError::shifted`] to translate into absolute source
/// offsets once the token's position in the tree is known.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code:?} at {start}..{end}", end = start + length)]
pub struct JsonError {
    pub code: JsonErrorCode,
    pub level: ErrorLevel,
    pub start: u32,
    pub length: u32,
    pub params: Vec<ErrorParam>,
}

impl JsonError {
    /// Construct a diagnostic at the code's default severity.
    pub fn new(code: JsonErrorCode, start: u32, length: u32, params: Vec<ErrorParam>) -> Self {
        Self { level: code.default_level(), code, start, length, params }
    }

    /// Construct a zero-length diagnostic at `start`.
    pub fn at(code: JsonErrorCode, start: u32) -> Self {
        Self::new(code, start, 0, Vec::new())
    }

    /// Translate a token-relative error into an absolute-offset one.
    #[must_use]
    pub fn shifted(mut self, offset: u32) -> Self {
        self.start += offset;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifted_moves_start_only() {
        let e = JsonError::new(JsonErrorCode::UnterminatedString, 3, 5, vec![]);
        let shifted = e.shifted(10);
        assert_eq!(shifted.start, 13);
        assert_eq!(shifted.length, 5);
    }

    #[test]
    fn display_includes_code_and_range() {
        let e = JsonError::at(JsonErrorCode::ExpectedEof, 4);
        assert_eq!(e.to_string(), "ExpectedEof at 4..4");
    }
}
