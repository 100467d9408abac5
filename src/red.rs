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

//! Typed accessors over the untyped `rowan` red tree.
//!
//! Each wrapper is a thin newtype around [`SyntaxNode`]/[`SyntaxToken`]:
//! cheap to construct, cheap to discard, and always in sync with the
//! underlying tree since nothing here is cached. `try_from`/`cast`-style
//! conversion follows the same pattern rust-analyzer's `ast` layer uses over
//! its own rowan tree.

use rowan::{TextRange, TextSize};

use crate::syntax_kind::SyntaxKind;
use crate::{SyntaxNode, SyntaxToken};

fn cast_node(node: SyntaxNode, kind: SyntaxKind) -> Option<SyntaxNode> {
    (node.kind() == kind).then_some(node)
}

/// The parsed document: always a `MultiValue`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiValue(SyntaxNode);

impl MultiValue {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        cast_node(node, SyntaxKind::MULTI_VALUE).map(Self)
    }

    pub fn syntax(&self) -> &SyntaxNode {
        &self.0
    }

    /// Every non-background value held by this `MultiValue`, in document
    /// order. Includes `MissingValue` slots.
    pub fn values(&self) -> impl Iterator<Item = Value> + '_ {
        self.0.children().filter(|n| n.kind() == SyntaxKind::VALUE_WITH_BACKGROUND).filter_map(|vwb| {
            vwb.children().find_map(Value::cast)
        })
    }

    /// The non-`MissingValue` values only, in document order.
    pub fn present_values(&self) -> impl Iterator<Item = Value> + '_ {
        self.values().filter(|v| !matches!(v, Value::Missing(_)))
    }
}

/// Any of the value productions a `MultiValue`/`KeyValue` slot can hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Missing(SyntaxNode),
    Integer(SyntaxNode),
    String(SyntaxNode),
    ErrorString(SyntaxNode),
    Boolean(SyntaxNode),
    Undefined(SyntaxNode),
    UnknownSymbol(SyntaxNode),
    List(List),
    Map(Map),
}

impl Value {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        Some(match node.kind() {
            SyntaxKind::VALUE_MISSING => Value::Missing(node),
            SyntaxKind::VALUE_INTEGER => Value::Integer(node),
            SyntaxKind::VALUE_STRING => Value::String(node),
            SyntaxKind::VALUE_ERROR_STRING => Value::ErrorString(node),
            SyntaxKind::VALUE_BOOLEAN => Value::Boolean(node),
            SyntaxKind::VALUE_UNDEFINED => Value::Undefined(node),
            SyntaxKind::VALUE_UNKNOWN_SYMBOL => Value::UnknownSymbol(node),
            SyntaxKind::LIST => Value::List(List(node)),
            SyntaxKind::MAP => Value::Map(Map(node)),
            _ => return None,
        })
    }

    pub fn syntax(&self) -> &SyntaxNode {
        match self {
            Value::Missing(n)
            | Value::Integer(n)
            | Value::String(n)
            | Value::ErrorString(n)
            | Value::Boolean(n)
            | Value::Undefined(n)
            | Value::UnknownSymbol(n) => n,
            Value::List(l) => l.syntax(),
            Value::Map(m) => m.syntax(),
        }
    }
}

/// `[` `MultiValue` (`,` `MultiValue`)* `]`?
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List(SyntaxNode);

impl List {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        cast_node(node, SyntaxKind::LIST).map(Self)
    }

    pub fn syntax(&self) -> &SyntaxNode {
        &self.0
    }

    pub fn items(&self) -> impl Iterator<Item = MultiValue> + '_ {
        self.0.children().filter_map(MultiValue::cast)
    }

    /// `true` if the list's final `]` (or `}`, if malformed) is present.
    pub fn is_closed(&self) -> bool {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .any(|t| t.kind() == SyntaxKind::SQUARE_CLOSE)
    }
}

/// `{` `KeyValue` (`,` `KeyValue`)* `}`?
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map(SyntaxNode);

impl Map {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        cast_node(node, SyntaxKind::MAP).map(Self)
    }

    pub fn syntax(&self) -> &SyntaxNode {
        &self.0
    }

    pub fn entries(&self) -> impl Iterator<Item = KeyValue> + '_ {
        self.0.children().filter_map(KeyValue::cast)
    }

    pub fn is_closed(&self) -> bool {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .any(|t| t.kind() == SyntaxKind::CURLY_CLOSE)
    }
}

/// One map entry: a key `MultiValue` and zero or more `:` `MultiValue`
/// continuations (well-formed entries have exactly one).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue(SyntaxNode);

impl KeyValue {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        cast_node(node, SyntaxKind::KEY_VALUE).map(Self)
    }

    pub fn syntax(&self) -> &SyntaxNode {
        &self.0
    }

    /// The key section: the first child `MultiValue`.
    pub fn key(&self) -> Option<MultiValue> {
        self.0.children().find_map(MultiValue::cast)
    }

    /// Every value section after a `:`, in document order. Well-formed
    /// entries have exactly one; more than one means
    /// `MultiplePropertyKeySections` was reported.
    pub fn value_sections(&self) -> impl Iterator<Item = MultiValue> + '_ {
        self.0.children().filter_map(MultiValue::cast).skip(1)
    }

    /// The decoded text of the key, if it was a plain string literal.
    pub fn key_text(&self) -> Option<String> {
        match self.key()?.present_values().next()? {
            Value::String(node) => {
                let token = node.children_with_tokens().filter_map(|e| e.into_token()).find(|t| t.kind() == SyntaxKind::STRING)?;
                Some(decode_string_token(&token))
            }
            _ => None,
        }
    }
}

/// Re-decode a `STRING` token's text. The green tree stores only raw source
/// bytes (lossless), so anything that needs the decoded value -- as opposed
/// to the diagnostics already captured during parsing -- re-runs the escape
/// table over the token's own text.
fn decode_string_token(token: &SyntaxToken) -> String {
    let text = token.text();
    let inner = &text[1..text.len().saturating_sub(1)];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('/') => out.push('/'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('v') => out.push('\u{b}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                if let Ok(cp) = u32::from_str_radix(&hex, 16) {
                    if let Some(ch) = char::from_u32(cp) {
                        out.push(ch);
                    }
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

/// Every token whose span intersects `range`, in document order -- not just
/// tokens fully contained by it, so a range that starts or ends mid-token
/// still picks that token up. Used by hosts that want to re-tokenize,
/// highlight, or diff a sub-span of the tree without walking the whole thing.
pub fn terminal_symbols_in_range(root: &SyntaxNode, range: TextRange) -> impl Iterator<Item = SyntaxToken> + '_ {
    root.descendants_with_tokens()
        .filter_map(|e| e.into_token())
        .filter(move |t| range.intersect(t.text_range()).is_some())
}

/// Every token whose range contains `offset` (there are at most two, at a
/// token boundary).
pub fn terminal_symbols_at(root: &SyntaxNode, offset: TextSize) -> impl Iterator<Item = SyntaxToken> + '_ {
    root.descendants_with_tokens()
        .filter_map(|e| e.into_token())
        .filter(move |t| t.text_range().contains_inclusive(offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn multi_value_values_include_missing() {
        let root = parse("");
        let mv = MultiValue::cast(root.syntax()).unwrap();
        assert_eq!(mv.values().count(), 1);
        assert!(matches!(mv.values().next().unwrap(), Value::Missing(_)));
    }

    #[test]
    fn list_items_and_closed() {
        let root = parse("[1, 2, 3]");
        let mv = MultiValue::cast(root.syntax()).unwrap();
        let Value::List(list) = mv.present_values().next().unwrap() else { panic!("expected a list") };
        assert_eq!(list.items().count(), 3);
        assert!(list.is_closed());
    }

    #[test]
    fn unclosed_list_reports_not_closed() {
        let root = parse("[1, 2");
        let mv = MultiValue::cast(root.syntax()).unwrap();
        let Value::List(list) = mv.present_values().next().unwrap() else { panic!("expected a list") };
        assert!(!list.is_closed());
    }

    #[test]
    fn map_key_text_round_trips_escapes() {
        let root = parse(r#"{"a\nb": 1}"#);
        let mv = MultiValue::cast(root.syntax()).unwrap();
        let Value::Map(map) = mv.present_values().next().unwrap() else { panic!("expected a map") };
        let entry = map.entries().next().unwrap();
        assert_eq!(entry.key_text().as_deref(), Some("a\nb"));
    }

    #[test]
    fn terminal_symbols_in_range_finds_tokens() {
        let root = parse("[1, 2, 3]");
        let syntax = root.syntax();
        let range = TextRange::new(0.into(), syntax.text_range().len());
        let tokens: Vec<_> = terminal_symbols_in_range(&syntax, range).collect();
        assert!(tokens.iter().any(|t| t.kind() == SyntaxKind::INTEGER));
    }
}
