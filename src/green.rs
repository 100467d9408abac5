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

//! Canonical spellings of the fixed-width structural tokens.
//!
//! `rowan::GreenNodeBuilder` already interns identical tokens internally
//! (its `NodeCache` deduplicates by kind + text), so there is no separate
//! hand-rolled green-node cache here -- that would just duplicate work the
//! builder already does. What's worth fixing once, in one place, is the
//! canonical text each structural kind is allowed to spell: every occurrence
//! of e.g. `SyntaxKind::COLON` in a well-formed tree must be the single byte
//! `":"`, and [`Parser::bump`](crate::parser::Parser) debug-asserts against
//! this table rather than trusting the source slice blindly.

use once_cell::sync::Lazy;

use crate::syntax_kind::SyntaxKind;

/// The one legal spelling for each fixed-width structural `SyntaxKind`.
/// `None` for any kind that isn't a single fixed spelling.
static STRUCTURAL_TEXT: Lazy<[(SyntaxKind, &'static str); 6]> = Lazy::new(|| {
    [
        (SyntaxKind::CURLY_OPEN, "{"),
        (SyntaxKind::CURLY_CLOSE, "}"),
        (SyntaxKind::SQUARE_OPEN, "["),
        (SyntaxKind::SQUARE_CLOSE, "]"),
        (SyntaxKind::COLON, ":"),
        (SyntaxKind::COMMA, ","),
    ]
});

/// The canonical spelling for `kind`, if it's one of the six structural
/// tokens.
pub fn canonical_text(kind: SyntaxKind) -> Option<&'static str> {
    STRUCTURAL_TEXT.iter().find(|(k, _)| *k == kind).map(|(_, text)| *text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_structural_kind_has_canonical_text() {
        for kind in [
            SyntaxKind::CURLY_OPEN,
            SyntaxKind::CURLY_CLOSE,
            SyntaxKind::SQUARE_OPEN,
            SyntaxKind::SQUARE_CLOSE,
            SyntaxKind::COLON,
            SyntaxKind::COMMA,
        ] {
            assert!(kind.is_structural());
            assert!(canonical_text(kind).is_some());
        }
    }

    #[test]
    fn non_structural_kind_has_no_canonical_text() {
        assert_eq!(canonical_text(SyntaxKind::INTEGER), None);
    }
}
