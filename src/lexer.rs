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

//! Hand-written tokenizer: turns source text into a lazy sequence of
//! [`Symbol`]s. Four states live here even though only one (`Default`) is an
//! explicit loop: `InLineComment`/`InBlockComment`/`InString` are the three
//! helper scans `Default` dispatches into once it sees `/` or `"`.
//!
//! Every [`Symbol`] knows its own byte width, and widths over a full stream
//! sum to the length of the input text (see `tests::width_sums_to_input_len`
//! below, and the `proptest` properties in `tests/properties.rs`).

use std::iter::Peekable;
use std::str::CharIndices;

use crate::classify::{classify, is_unassigned, CharClass};
use crate::error::{ErrorParam, JsonError, JsonErrorCode};
use crate::syntax_kind::SyntaxKind;

/// Which of the two boolean keywords a `BooleanLiteral` symbol spells out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolKind {
    True,
    False,
}

impl BoolKind {
    /// Byte width of the keyword spelling (`true` is 4, `false` is 5).
    pub fn width(self) -> u32 {
        match self {
            BoolKind::True => 4,
            BoolKind::False => 5,
        }
    }
}

/// An arbitrary-precision signed decimal integer, as scanned from a word.
///
/// Stored as a sign plus a canonical (no leading-zero, except bare `"0"`)
/// ASCII digit string rather than a fixed-width integer, since the tokenizer
/// never computes with these values -- it only stores and later hands them
/// to a caller that may downcast via [`IntegerValue::as_i128`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerValue {
    negative: bool,
    digits: String,
}

impl IntegerValue {
    /// Parse a word's full text as a signed decimal integer per the word
    /// reclassification rule: an optional single leading `+`/`-`, then one
    /// or more ASCII digits and nothing else.
    fn parse(text: &str) -> Option<Self> {
        let (negative, digits_part) = if let Some(rest) = text.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = text.strip_prefix('+') {
            (false, rest)
        } else {
            (false, text)
        };
        if digits_part.is_empty() || !digits_part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let canonical = digits_part.trim_start_matches('0');
        let digits = if canonical.is_empty() { "0".to_string() } else { canonical.to_string() };
        let negative = negative && digits != "0";
        Some(Self { negative, digits })
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// The canonical digit string, without sign or leading zeros.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Downcast to a fixed-width integer, if it fits.
    pub fn as_i128(&self) -> Option<i128> {
        let magnitude: i128 = self.digits.parse().ok()?;
        if self.negative {
            magnitude.checked_neg()
        } else {
            Some(magnitude)
        }
    }
}

/// One unit of tokenizer output: either foreground (contributes syntactic
/// value) or background (trivia). See `classify.rs` for how individual code
/// points get routed here.
#[derive(Debug, Clone, PartialEq)]
pub enum Symbol {
    // Background
    Whitespace { width: u32 },
    Comment { width: u32 },
    UnterminatedBlockComment { width: u32, error: JsonError },

    // Foreground: structural (width 1)
    CurlyOpen,
    CurlyClose,
    SquareBracketOpen,
    SquareBracketClose,
    Colon,
    Comma,

    // Foreground: value-starters
    IntegerLiteral { width: u32, value: IntegerValue },
    StringLiteral { width: u32, decoded: String },
    ErrorString { width: u32, errors: Vec<JsonError> },
    BooleanLiteral { kind: BoolKind },
    UndefinedValue { width: u32, text: String },
    UnknownSymbol { width: u32, display: String, error: JsonError },
}

impl Symbol {
    /// Byte width of this symbol in the source text.
    pub fn width(&self) -> u32 {
        match self {
            Symbol::Whitespace { width }
            | Symbol::Comment { width }
            | Symbol::UnterminatedBlockComment { width, .. }
            | Symbol::IntegerLiteral { width, .. }
            | Symbol::StringLiteral { width, .. }
            | Symbol::ErrorString { width, .. }
            | Symbol::UndefinedValue { width, .. }
            | Symbol::UnknownSymbol { width, .. } => *width,
            Symbol::BooleanLiteral { kind } => kind.width(),
            Symbol::CurlyOpen
            | Symbol::CurlyClose
            | Symbol::SquareBracketOpen
            | Symbol::SquareBracketClose
            | Symbol::Colon
            | Symbol::Comma => 1,
        }
    }

    /// Whether this symbol is trivia (never appears as a parsed `Value`).
    pub fn is_background(&self) -> bool {
        matches!(self, Symbol::Whitespace { .. } | Symbol::Comment { .. } | Symbol::UnterminatedBlockComment { .. })
    }

    pub fn is_foreground(&self) -> bool {
        !self.is_background()
    }

    /// Whether this symbol can start a `Value` production.
    pub fn is_value_starter(&self) -> bool {
        matches!(
            self,
            Symbol::CurlyOpen
                | Symbol::SquareBracketOpen
                | Symbol::IntegerLiteral { .. }
                | Symbol::StringLiteral { .. }
                | Symbol::ErrorString { .. }
                | Symbol::BooleanLiteral { .. }
                | Symbol::UndefinedValue { .. }
                | Symbol::UnknownSymbol { .. }
        )
    }

    /// The `SyntaxKind` this symbol becomes as a green token.
    pub fn syntax_kind(&self) -> SyntaxKind {
        match self {
            Symbol::Whitespace { .. } => SyntaxKind::WHITESPACE,
            Symbol::Comment { .. } => SyntaxKind::COMMENT,
            Symbol::UnterminatedBlockComment { .. } => SyntaxKind::UNTERMINATED_BLOCK_COMMENT,
            Symbol::CurlyOpen => SyntaxKind::CURLY_OPEN,
            Symbol::CurlyClose => SyntaxKind::CURLY_CLOSE,
            Symbol::SquareBracketOpen => SyntaxKind::SQUARE_OPEN,
            Symbol::SquareBracketClose => SyntaxKind::SQUARE_CLOSE,
            Symbol::Colon => SyntaxKind::COLON,
            Symbol::Comma => SyntaxKind::COMMA,
            Symbol::IntegerLiteral { .. } => SyntaxKind::INTEGER,
            Symbol::StringLiteral { .. } => SyntaxKind::STRING,
            Symbol::ErrorString { .. } => SyntaxKind::ERROR_STRING,
            Symbol::BooleanLiteral { kind: BoolKind::True } => SyntaxKind::KW_TRUE,
            Symbol::BooleanLiteral { kind: BoolKind::False } => SyntaxKind::KW_FALSE,
            Symbol::UndefinedValue { .. } => SyntaxKind::UNDEFINED_VALUE,
            Symbol::UnknownSymbol { .. } => SyntaxKind::UNKNOWN_SYMBOL,
        }
    }

    /// Diagnostics this symbol carries, shifted so `start` is absolute given
    /// that the symbol itself begins at `start_offset`. Diagnostics stored
    /// internally are relative to the symbol's own start.
    ///
    /// `UndefinedValue`'s diagnostic is computed here rather than stored,
    /// matching the "lazily; only when errors are collected" rule.
    pub fn local_errors(&self, start_offset: u32) -> Vec<JsonError> {
        match self {
            Symbol::UnterminatedBlockComment { error, .. } => vec![error.clone().shifted(start_offset)],
            Symbol::ErrorString { errors, .. } => errors.iter().cloned().map(|e| e.shifted(start_offset)).collect(),
            Symbol::UndefinedValue { text, width } => vec![JsonError::new(
                JsonErrorCode::UnrecognizedValue,
                start_offset,
                *width,
                vec![ErrorParam::Str(text.clone())],
            )],
            Symbol::UnknownSymbol { error, .. } => vec![error.clone().shifted(start_offset)],
            _ => Vec::new(),
        }
    }
}

fn reclassify_word(text: &str) -> Symbol {
    let width = text.len() as u32;
    match text {
        "true" => Symbol::BooleanLiteral { kind: BoolKind::True },
        "false" => Symbol::BooleanLiteral { kind: BoolKind::False },
        _ => match IntegerValue::parse(text) {
            Some(value) => Symbol::IntegerLiteral { width, value },
            None => Symbol::UndefinedValue { width, text: text.to_string() },
        },
    }
}

fn is_control(c: char) -> bool {
    (c as u32) < 0x20 || c == '\u{7f}'
}

/// Escape-form display name for a control character, used as the
/// `IllegalControlCharacterInString` parameter.
fn control_display(c: char) -> String {
    match c {
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\t' => "\\t".to_string(),
        '\u{8}' => "\\b".to_string(),
        '\u{c}' => "\\f".to_string(),
        '\u{b}' => "\\v".to_string(),
        _ => format!("\\u{:04x}", c as u32),
    }
}

/// Display text for an `UnknownSymbol`: the literal character, or its
/// `\uXXXX` escape form if the code point is unassigned.
fn unknown_display(c: char) -> String {
    if is_unassigned(c) {
        format!("\\u{:04x}", c as u32)
    } else {
        c.to_string()
    }
}

/// Lazy tokenizer over a source string. Construct with [`tokenize_all`].
pub struct Tokenizer<'a> {
    chars: Peekable<CharIndices<'a>>,
}

/// Tokenize `text` into a lazy sequence of [`Symbol`]s. Never panics and
/// never stops early: every byte of `text` is eventually accounted for by
/// some symbol's width.
pub fn tokenize_all(text: &str) -> Tokenizer<'_> {
    Tokenizer { chars: text.char_indices().peekable() }
}

impl<'a> Tokenizer<'a> {
    fn bump(&mut self) -> Option<char> {
        self.chars.next().map(|(_, c)| c)
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn scan_word(&mut self, first: char) -> Symbol {
        let mut buf = String::new();
        buf.push(first);
        while let Some(c) = self.peek_char() {
            if classify(c) == CharClass::Value {
                buf.push(c);
                self.bump();
            } else {
                break;
            }
        }
        reclassify_word(&buf)
    }

    fn scan_whitespace(&mut self, first: char) -> Symbol {
        let mut width = first.len_utf8() as u32;
        while let Some(c) = self.peek_char() {
            if classify(c) == CharClass::Whitespace {
                width += c.len_utf8() as u32;
                self.bump();
            } else {
                break;
            }
        }
        Symbol::Whitespace { width }
    }

    fn scan_line_comment(&mut self) -> Symbol {
        let mut width: u32 = 2; // "//"
        loop {
            match self.peek_char() {
                None | Some('\n') | Some('\r') => break,
                Some(c) => {
                    width += c.len_utf8() as u32;
                    self.bump();
                }
            }
        }
        Symbol::Comment { width }
    }

    fn scan_block_comment(&mut self) -> Symbol {
        let mut width: u32 = 2; // "/*"
        loop {
            match self.peek_char() {
                None => {
                    tracing::trace!(width, "unterminated block comment ran to end of input");
                    let error = JsonError::new(JsonErrorCode::UnterminatedMultiLineComment, 0, width, Vec::new());
                    return Symbol::UnterminatedBlockComment { width, error };
                }
                Some('*') => {
                    width += 1;
                    self.bump();
                    if let Some('/') = self.peek_char() {
                        width += 1;
                        self.bump();
                        return Symbol::Comment { width };
                    }
                }
                Some(c) => {
                    width += c.len_utf8() as u32;
                    self.bump();
                }
            }
        }
    }

    /// Scans the body of a string literal; the opening `"` has already been
    /// consumed. Implements §4.2.2's escape table and error ordering.
    fn scan_string(&mut self) -> Symbol {
        let mut width: u32 = 1; // the opening quote
        let mut decoded = String::new();
        let mut errors: Vec<JsonError> = Vec::new();

        loop {
            match self.peek_char() {
                None => {
                    errors.push(JsonError::new(JsonErrorCode::UnterminatedString, 0, width, Vec::new()));
                    return Symbol::ErrorString { width, errors };
                }
                Some('"') => {
                    width += 1;
                    self.bump();
                    return if errors.is_empty() {
                        Symbol::StringLiteral { width, decoded }
                    } else {
                        tracing::trace!(error_count = errors.len(), "string literal scanned with embedded errors");
                        Symbol::ErrorString { width, errors }
                    };
                }
                Some('\\') => {
                    let escape_start = width;
                    width += 1;
                    self.bump();
                    match self.peek_char() {
                        None => {
                            errors.push(JsonError::new(
                                JsonErrorCode::UnrecognizedEscapeSequence,
                                escape_start,
                                width - escape_start,
                                Vec::new(),
                            ));
                            errors.push(JsonError::new(JsonErrorCode::UnterminatedString, 0, width, Vec::new()));
                            return Symbol::ErrorString { width, errors };
                        }
                        Some(c) => self.scan_escape(c, escape_start, &mut width, &mut decoded, &mut errors),
                    }
                }
                Some(c) if is_control(c) => {
                    errors.push(JsonError::new(
                        JsonErrorCode::IllegalControlCharacterInString,
                        width,
                        1,
                        vec![ErrorParam::Str(control_display(c))],
                    ));
                    width += c.len_utf8() as u32;
                    self.bump();
                    decoded.push(c);
                }
                Some(c) => {
                    width += c.len_utf8() as u32;
                    self.bump();
                    decoded.push(c);
                }
            }
        }
    }

    fn scan_escape(
        &mut self,
        c: char,
        escape_start: u32,
        width: &mut u32,
        decoded: &mut String,
        errors: &mut Vec<JsonError>,
    ) {
        match c {
            '"' | '\\' | '/' => {
                *width += 1;
                self.bump();
                decoded.push(c);
            }
            'b' => {
                *width += 1;
                self.bump();
                decoded.push('\u{8}');
            }
            'f' => {
                *width += 1;
                self.bump();
                decoded.push('\u{c}');
            }
            'n' => {
                *width += 1;
                self.bump();
                decoded.push('\n');
            }
            'r' => {
                *width += 1;
                self.bump();
                decoded.push('\r');
            }
            't' => {
                *width += 1;
                self.bump();
                decoded.push('\t');
            }
            'v' => {
                *width += 1;
                self.bump();
                decoded.push('\u{b}');
            }
            'u' => {
                *width += 1;
                self.bump();
                let mut hex = String::new();
                for _ in 0..4 {
                    match self.peek_char() {
                        Some(h) if h.is_ascii_hexdigit() => {
                            hex.push(h);
                            *width += 1;
                            self.bump();
                        }
                        _ => break,
                    }
                }
                if hex.len() == 4 {
                    if let Ok(code_point) = u32::from_str_radix(&hex, 16) {
                        if let Some(ch) = char::from_u32(code_point) {
                            decoded.push(ch);
                        }
                    }
                } else {
                    errors.push(JsonError::new(
                        JsonErrorCode::UnrecognizedEscapeSequence,
                        escape_start,
                        *width - escape_start,
                        vec![ErrorParam::Str(format!("\\u{hex}"))],
                    ));
                }
            }
            _ => {
                errors.push(JsonError::new(
                    JsonErrorCode::UnrecognizedEscapeSequence,
                    escape_start,
                    2,
                    vec![ErrorParam::Char(c)],
                ));
                *width += c.len_utf8() as u32;
                self.bump();
            }
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Symbol;

    fn next(&mut self) -> Option<Symbol> {
        let c = self.peek_char()?;
        match classify(c) {
            CharClass::Value => {
                self.bump();
                Some(self.scan_word(c))
            }
            CharClass::Whitespace => {
                self.bump();
                Some(self.scan_whitespace(c))
            }
            CharClass::Structural(s) => {
                self.bump();
                Some(match s {
                    '{' => Symbol::CurlyOpen,
                    '}' => Symbol::CurlyClose,
                    '[' => Symbol::SquareBracketOpen,
                    ']' => Symbol::SquareBracketClose,
                    ':' => Symbol::Colon,
                    ',' => Symbol::Comma,
                    other => unreachable!("unhandled structural char {other:?}"),
                })
            }
            CharClass::Quote => {
                self.bump();
                Some(self.scan_string())
            }
            CharClass::Slash => {
                self.bump();
                match self.peek_char() {
                    Some('/') => {
                        self.bump();
                        Some(self.scan_line_comment())
                    }
                    Some('*') => {
                        self.bump();
                        Some(self.scan_block_comment())
                    }
                    _ => {
                        let error = JsonError::new(
                            JsonErrorCode::UnexpectedSymbol,
                            0,
                            1,
                            vec![ErrorParam::Str("/".to_string())],
                        );
                        Some(Symbol::UnknownSymbol { width: 1, display: "/".to_string(), error })
                    }
                }
            }
            CharClass::Unknown => {
                self.bump();
                let display = unknown_display(c);
                let width = c.len_utf8() as u32;
                let error =
                    JsonError::new(JsonErrorCode::UnexpectedSymbol, 0, width, vec![ErrorParam::Str(display.clone())]);
                Some(Symbol::UnknownSymbol { width, display, error })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::{expect, Expect};

    fn check_lex(input: &str, expect: Expect) {
        let symbols: Vec<Symbol> = tokenize_all(input).collect();
        let actual = format!("{symbols:#?}");
        expect.assert_eq(&actual);
    }

    fn widths(input: &str) -> Vec<u32> {
        tokenize_all(input).map(|s| s.width()).collect()
    }

    #[test]
    fn width_sums_to_input_len() {
        let inputs = ["", "  ", "{}", "[1, 2, true]", "\"a\\nb\"", "/* unterminated", "😀🙂 true"];
        for input in inputs {
            let total: u32 = widths(input).into_iter().sum();
            assert_eq!(total, input.len() as u32, "input = {input:?}");
        }
    }

    #[test]
    fn structural_tokens() {
        check_lex(
            "{}[]:,",
            expect![[r#"
                [
                    CurlyOpen,
                    CurlyClose,
                    SquareBracketOpen,
                    SquareBracketClose,
                    Colon,
                    Comma,
                ]"#]],
        );
    }

    #[test]
    fn whitespace_agglutinates() {
        check_lex(
            "   \t\n ",
            expect![[r#"
                [
                    Whitespace {
                        width: 6,
                    },
                ]"#]],
        );
    }

    #[test]
    fn words_reclassify() {
        check_lex(
            "true false 007 -5 +5 1.9 hello",
            expect![[r#"
                [
                    BooleanLiteral {
                        kind: True,
                    },
                    Whitespace {
                        width: 1,
                    },
                    BooleanLiteral {
                        kind: False,
                    },
                    Whitespace {
                        width: 1,
                    },
                    IntegerLiteral {
                        width: 3,
                        value: IntegerValue {
                            negative: false,
                            digits: "7",
                        },
                    },
                    Whitespace {
                        width: 1,
                    },
                    IntegerLiteral {
                        width: 2,
                        value: IntegerValue {
                            negative: true,
                            digits: "5",
                        },
                    },
                    Whitespace {
                        width: 1,
                    },
                    IntegerLiteral {
                        width: 2,
                        value: IntegerValue {
                            negative: false,
                            digits: "5",
                        },
                    },
                    Whitespace {
                        width: 1,
                    },
                    UndefinedValue {
                        width: 3,
                        text: "1.9",
                    },
                    Whitespace {
                        width: 1,
                    },
                    UndefinedValue {
                        width: 5,
                        text: "hello",
                    },
                ]"#]],
        );
    }

    #[test]
    fn float_like_words_stay_undefined() {
        for word in ["1.9E-5", "-1e+10", "0xffff", "0b1010", "10.8"] {
            let symbols: Vec<Symbol> = tokenize_all(word).collect();
            assert_eq!(symbols.len(), 1);
            assert!(matches!(symbols[0], Symbol::UndefinedValue { .. }), "word = {word:?} got {:?}", symbols[0]);
        }
    }

    #[test]
    fn string_literal_happy_path() {
        check_lex(
            r#""hello\nworld""#,
            expect![[r#"
                [
                    StringLiteral {
                        width: 14,
                        decoded: "hello\nworld",
                    },
                ]"#]],
        );
    }

    #[test]
    fn string_literal_unicode_escape() {
        check_lex(
            "\"\\u00e9\"",
            expect![[r#"
                [
                    StringLiteral {
                        width: 8,
                        decoded: "é",
                    },
                ]"#]],
        );
    }

    #[test]
    fn unterminated_string_at_eof() {
        let symbols: Vec<Symbol> = tokenize_all("\"abc").collect();
        assert_eq!(symbols.len(), 1);
        match &symbols[0] {
            Symbol::ErrorString { width, errors } => {
                assert_eq!(*width, 4);
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].code, JsonErrorCode::UnterminatedString);
                assert_eq!(errors[0].start, 0);
                assert_eq!(errors[0].length, 4);
            }
            other => panic!("expected ErrorString, got {other:?}"),
        }
    }

    #[test]
    fn control_character_in_string_reported_and_kept() {
        let symbols: Vec<Symbol> = tokenize_all("\"a\u{1}b\"").collect();
        assert_eq!(symbols.len(), 1);
        match &symbols[0] {
            Symbol::ErrorString { errors, .. } => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].code, JsonErrorCode::IllegalControlCharacterInString);
                assert_eq!(errors[0].params, vec![ErrorParam::Str("\\u0001".to_string())]);
            }
            other => panic!("expected ErrorString, got {other:?}"),
        }
    }

    #[test]
    fn bad_escape_letter_then_unterminated_orders_errors() {
        let symbols: Vec<Symbol> = tokenize_all("\"\\q").collect();
        assert_eq!(symbols.len(), 1);
        match &symbols[0] {
            Symbol::ErrorString { errors, .. } => {
                assert_eq!(errors.len(), 2);
                assert_eq!(errors[0].code, JsonErrorCode::UnrecognizedEscapeSequence);
                assert_eq!(errors[1].code, JsonErrorCode::UnterminatedString);
            }
            other => panic!("expected ErrorString, got {other:?}"),
        }
    }

    #[test]
    fn partial_unicode_escape_then_unterminated_orders_errors() {
        let symbols: Vec<Symbol> = tokenize_all("\"\\u0").collect();
        assert_eq!(symbols.len(), 1);
        match &symbols[0] {
            Symbol::ErrorString { errors, .. } => {
                assert_eq!(errors.len(), 2);
                assert_eq!(errors[0].code, JsonErrorCode::UnrecognizedEscapeSequence);
                assert_eq!(errors[1].code, JsonErrorCode::UnterminatedString);
            }
            other => panic!("expected ErrorString, got {other:?}"),
        }
    }

    #[test]
    fn line_comment_excludes_newline() {
        check_lex(
            "// hi\n",
            expect![[r#"
                [
                    Comment {
                        width: 5,
                    },
                    Whitespace {
                        width: 1,
                    },
                ]"#]],
        );
    }

    #[test]
    fn block_comment_unterminated() {
        let symbols: Vec<Symbol> = tokenize_all("/* oops").collect();
        assert_eq!(symbols.len(), 1);
        match &symbols[0] {
            Symbol::UnterminatedBlockComment { width, error } => {
                assert_eq!(*width, 7);
                assert_eq!(error.code, JsonErrorCode::UnterminatedMultiLineComment);
                assert_eq!(error.length, 7);
            }
            other => panic!("expected UnterminatedBlockComment, got {other:?}"),
        }
    }

    #[test]
    fn bare_slash_is_unknown_symbol() {
        let symbols: Vec<Symbol> = tokenize_all("/").collect();
        assert_eq!(symbols.len(), 1);
        assert!(matches!(&symbols[0], Symbol::UnknownSymbol { display, .. } if display == "/"));
    }

    #[test]
    fn unknown_symbol_ascii_uses_literal_char() {
        let symbols: Vec<Symbol> = tokenize_all("$").collect();
        match &symbols[0] {
            Symbol::UnknownSymbol { display, width, .. } => {
                assert_eq!(display, "$");
                assert_eq!(*width, 1);
            }
            other => panic!("expected UnknownSymbol, got {other:?}"),
        }
    }

    #[test]
    fn agglutination_contract() {
        // Whitespace merges with whitespace; nothing else merges.
        let symbols: Vec<Symbol> = tokenize_all("  {  ").collect();
        assert_eq!(symbols.len(), 3);
        assert!(matches!(symbols[0], Symbol::Whitespace { width: 2 }));
        assert!(matches!(symbols[1], Symbol::CurlyOpen));
        assert!(matches!(symbols[2], Symbol::Whitespace { width: 2 }));
    }

    #[test]
    fn local_errors_shift_by_start_offset() {
        let symbols: Vec<Symbol> = tokenize_all("\"a\u{1}b\"").collect();
        let errs = symbols[0].local_errors(10);
        assert_eq!(errs[0].start, 11);
    }
}
