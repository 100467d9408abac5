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

//! Character classification by Unicode general category.
//!
//! The tokenizer's `Default` state buffers consecutive [`CharClass::Value`]
//! code points into a "word", which is then reclassified as a boolean,
//! integer, or undefined literal (see `lexer.rs`). Everything else either
//! closes that word and is handled on its own (`Structural`, `Quote`,
//! `Slash`), or is pure separator trivia.

use unicode_general_category::{GeneralCategory, get_general_category};

/// How a single code point participates in tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Continues a word-like value token (number, boolean, `null`, or an
    /// undefined/unrecognized literal).
    Value,
    /// One of the seven fixed single-character structural tokens.
    Structural(char),
    /// Starts a string literal.
    Quote,
    /// May start a comment (with lookahead) or stand alone as unknown.
    Slash,
    /// Whitespace separator; agglutinates with adjacent whitespace.
    Whitespace,
    /// A separator that isn't whitespace and isn't recognized structure:
    /// becomes a single-character `UnknownSymbol`.
    Unknown,
}

const STRUCTURAL_CHARS: [char; 6] = ['{', '}', '[', ']', ':', ','];

/// Classify a single code point per `spec.md` §4.1.
pub fn classify(c: char) -> CharClass {
    if let Some(sc) = STRUCTURAL_CHARS.iter().copied().find(|&s| s == c) {
        return CharClass::Structural(sc);
    }
    if c == '"' {
        return CharClass::Quote;
    }
    if c == '/' {
        return CharClass::Slash;
    }

    use GeneralCategory::*;
    match get_general_category(c) {
        // Letters, marks, digits, letter/other numbers, connector/dash
        // punctuation: value-character.
        UppercaseLetter
        | LowercaseLetter
        | TitlecaseLetter
        | ModifierLetter
        | OtherLetter
        | NonspacingMark
        | SpacingMark
        | EnclosingMark
        | DecimalNumber
        | LetterNumber
        | OtherNumber
        | ConnectorPunctuation
        | DashPunctuation
        | Surrogate => CharClass::Value,

        // Open/close/quote punctuation, currency/modifier/other symbols,
        // and unassigned code points: separator + unknown-symbol candidate.
        OpenPunctuation | ClosePunctuation | InitialPunctuation | FinalPunctuation | CurrencySymbol
        | ModifierSymbol | OtherSymbol | Unassigned => CharClass::Unknown,

        // Other punctuation is unknown except `.`, which is value-character.
        OtherPunctuation => {
            if c == '.' {
                CharClass::Value
            } else {
                CharClass::Unknown
            }
        }

        // Math symbol is unknown except `+`, which is value-character.
        MathSymbol => {
            if c == '+' {
                CharClass::Value
            } else {
                CharClass::Unknown
            }
        }

        // Space separator, line/paragraph separator, control, format,
        // private-use: whitespace separator.
        SpaceSeparator | LineSeparator | ParagraphSeparator | Control | Format | PrivateUse => {
            CharClass::Whitespace
        }
    }
}

/// `true` if `c` belongs to the "unassigned" general category, which governs
/// whether an `UnknownSymbol`'s display text is the literal character or its
/// `\uXXXX` escape form (see `lexer.rs`'s `UnknownSymbol` construction).
pub fn is_unassigned(c: char) -> bool {
    matches!(get_general_category(c), GeneralCategory::Unassigned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_letters_and_digits_are_value() {
        assert_eq!(classify('a'), CharClass::Value);
        assert_eq!(classify('Z'), CharClass::Value);
        assert_eq!(classify('9'), CharClass::Value);
        assert_eq!(classify('_'), CharClass::Value);
        assert_eq!(classify('-'), CharClass::Value);
        assert_eq!(classify('.'), CharClass::Value);
        assert_eq!(classify('+'), CharClass::Value);
    }

    #[test]
    fn structural_chars_are_structural() {
        for c in STRUCTURAL_CHARS {
            assert_eq!(classify(c), CharClass::Structural(c));
        }
    }

    #[test]
    fn quote_and_slash_are_special() {
        assert_eq!(classify('"'), CharClass::Quote);
        assert_eq!(classify('/'), CharClass::Slash);
    }

    #[test]
    fn ascii_whitespace_is_whitespace() {
        assert_eq!(classify(' '), CharClass::Whitespace);
        assert_eq!(classify('\t'), CharClass::Whitespace);
        assert_eq!(classify('\n'), CharClass::Whitespace);
        assert_eq!(classify('\r'), CharClass::Whitespace);
    }

    #[test]
    fn other_punctuation_is_unknown_except_dot() {
        // '!' is OtherPunctuation in Unicode.
        assert_eq!(classify('!'), CharClass::Unknown);
        assert_eq!(classify('.'), CharClass::Value);
    }

    #[test]
    fn math_symbol_is_unknown_except_plus() {
        // '=' and '<' are MathSymbol in Unicode.
        assert_eq!(classify('='), CharClass::Unknown);
        assert_eq!(classify('<'), CharClass::Unknown);
        assert_eq!(classify('+'), CharClass::Value);
    }

    #[test]
    fn open_close_quote_punctuation_is_unknown() {
        assert_eq!(classify('('), CharClass::Unknown);
        assert_eq!(classify(')'), CharClass::Unknown);
        assert_eq!(classify('\u{2018}'), CharClass::Unknown); // left single quote
    }

    #[test]
    fn currency_symbol_is_unknown() {
        assert_eq!(classify('$'), CharClass::Unknown);
        assert_eq!(classify('\u{20AC}'), CharClass::Unknown); // euro sign
    }
}
