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

//! Recursive-descent parser building a lossless rowan tree from [`Symbol`]s.
//!
//! Single symbol of lookahead throughout. The only recovery mechanism is the
//! `terminators` set threaded through `parse_multi_value` -- there is no
//! separate `ERROR` node wrapping pass, since every symbol (including
//! unrecognized ones) already has a place in the grammar as some `Value`
//! variant.

use std::collections::HashSet;

use rowan::{Checkpoint, GreenNodeBuilder};

use crate::error::{ErrorParam, JsonError, JsonErrorCode};
use crate::lexer::{tokenize_all, Symbol};
use crate::syntax_kind::SyntaxKind;
use crate::SyntaxNode;

// =============================================================================
// Root / Parse result
// =============================================================================

/// The result of [`parse`]: a lossless tree plus every diagnostic discovered
/// while building it. Never a `Result` -- parsing always succeeds in the
/// sense of producing a complete tree; `errors` is just data.
pub struct Root {
    green: rowan::GreenNode,
    errors: Vec<JsonError>,
}

impl Root {
    /// The parsed `MultiValue`, as a red (positioned) node at absolute start 0.
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
            .first_child()
            .expect("ROOT always wraps exactly one MULTI_VALUE child")
    }

    /// Every diagnostic discovered during parsing, in left-to-right discovery
    /// order (nested problems before the enclosing production's own).
    pub fn errors(&self) -> &[JsonError] {
        &self.errors
    }
}

/// Parse `text` into a lossless tree. Never panics on malformed input; every
/// byte is accounted for somewhere in the resulting tree.
#[tracing::instrument(level = "debug", skip(text), fields(len = text.len()))]
pub fn parse(text: &str) -> Root {
    let symbols: Vec<Symbol> = tokenize_all(text).collect();
    tracing::trace!(symbol_count = symbols.len(), "tokenized");
    let mut parser = Parser::new(text, symbols);
    let root = parser.start();
    parser.parse_multi_value(&[SyntaxKind::EOF]);
    root.complete(&mut parser, SyntaxKind::ROOT);
    let root = parser.finish();
    if !root.errors.is_empty() {
        tracing::debug!(error_count = root.errors.len(), "parse produced diagnostics");
    }
    root
}

// =============================================================================
// Marker types
// =============================================================================

/// A node under construction. Must be completed or abandoned; dropping one
/// unfinished panics in debug builds, the same drop-bomb discipline used for
/// checkpoint-based tree builders generally.
pub struct Marker {
    checkpoint: Checkpoint,
    #[cfg(debug_assertions)]
    completed: bool,
}

impl Marker {
    fn new(checkpoint: Checkpoint) -> Self {
        Self { checkpoint, #[cfg(debug_assertions)] completed: false }
    }

    #[allow(unused_mut)]
    pub fn complete(mut self, p: &mut Parser, kind: SyntaxKind) -> CompletedMarker {
        #[cfg(debug_assertions)]
        {
            self.completed = true;
        }
        p.builder.start_node_at(self.checkpoint, kind.into());
        p.builder.finish_node();
        CompletedMarker { kind }
    }
}

#[cfg(debug_assertions)]
impl Drop for Marker {
    fn drop(&mut self) {
        if !self.completed && !std::thread::panicking() {
            panic!("Marker was dropped without being completed");
        }
    }
}

/// A finished node. Kept mainly so call sites can inspect what kind of value
/// they just built (e.g. to decide whether a map key was a string).
#[derive(Clone, Copy)]
pub struct CompletedMarker {
    kind: SyntaxKind,
}

impl CompletedMarker {
    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }
}

// =============================================================================
// Value / MultiValue bookkeeping
// =============================================================================

/// What a just-parsed `Value` turned out to be, for callers (the `KeyValue`
/// production) that need to inspect it without re-walking the tree.
struct ValueInfo {
    kind: SyntaxKind,
    /// `Some` only when `kind == VALUE_STRING`: the decoded string value.
    decoded_string: Option<String>,
}

/// What a just-parsed `MultiValue` turned out to hold.
struct MultiValueInfo {
    is_missing_only: bool,
    non_missing_count: u32,
    last_value: Option<ValueInfo>,
    /// Absolute start of the last non-missing value, or of the `MultiValue`
    /// itself if it held nothing.
    last_value_start: u32,
}

// =============================================================================
// Parser
// =============================================================================

const STRAY_DELIMS: [SyntaxKind; 4] =
    [SyntaxKind::COMMA, SyntaxKind::COLON, SyntaxKind::CURLY_CLOSE, SyntaxKind::SQUARE_CLOSE];

// `COMMA` must stop a list item's `MultiValue` even though it doesn't end the
// `List` itself -- otherwise a second comma in `[1, , 3]` would be swallowed
// as a stray root-level delimiter instead of ending the empty item.
const LIST_TERMINATORS: [SyntaxKind; 4] =
    [SyntaxKind::COMMA, SyntaxKind::SQUARE_CLOSE, SyntaxKind::CURLY_CLOSE, SyntaxKind::EOF];

const MAP_ENTRY_TERMINATORS: [SyntaxKind; 5] =
    [SyntaxKind::COLON, SyntaxKind::COMMA, SyntaxKind::CURLY_CLOSE, SyntaxKind::SQUARE_CLOSE, SyntaxKind::EOF];

pub struct Parser<'s> {
    source: &'s str,
    symbols: Vec<Symbol>,
    pos: usize,
    byte_offset: u32,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<JsonError>,
}

impl<'s> Parser<'s> {
    fn new(source: &'s str, symbols: Vec<Symbol>) -> Self {
        Self { source, symbols, pos: 0, byte_offset: 0, builder: GreenNodeBuilder::new(), errors: Vec::new() }
    }

    fn start(&mut self) -> Marker {
        Marker::new(self.builder.checkpoint())
    }

    fn checkpoint(&self) -> Checkpoint {
        self.builder.checkpoint()
    }

    fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    fn current_kind(&self) -> SyntaxKind {
        self.symbols.get(self.pos).map(Symbol::syntax_kind).unwrap_or(SyntaxKind::EOF)
    }

    fn push_error(&mut self, code: JsonErrorCode, start: u32, length: u32, params: Vec<ErrorParam>) {
        self.errors.push(JsonError::new(code, start, length, params));
    }

    /// Consume the current symbol, pushing its token into the tree and
    /// merging in any diagnostics it carries (shifted to its absolute start).
    fn bump(&mut self) {
        let symbol = &self.symbols[self.pos];
        let kind = symbol.syntax_kind();
        let width = symbol.width();
        let start = self.byte_offset as usize;
        let text = &self.source[start..start + width as usize];
        debug_assert!(
            match crate::green::canonical_text(kind) {
                Some(canonical) => canonical == text,
                None => true,
            },
            "structural token {kind:?} spelled {text:?}, expected its canonical spelling"
        );
        self.builder.token(kind.into(), text);
        let local = symbol.local_errors(self.byte_offset);
        self.errors.extend(local);
        self.byte_offset += width;
        self.pos += 1;
    }

    /// The decoded value of the current symbol, which must be a `STRING`.
    fn current_string_decoded(&self) -> String {
        match &self.symbols[self.pos] {
            Symbol::StringLiteral { decoded, .. } => decoded.clone(),
            other => unreachable!("current_string_decoded called on {other:?}"),
        }
    }

    // =========================================================================
    // Grammar
    // =========================================================================

    /// Consumes a run of background symbols: whitespace, comments, and (per
    /// this call's `terminators`) stray structural delimiters, which get
    /// reinterpreted as `RootLevelValueDelimiter` trivia with an
    /// `ExpectedEof` diagnostic. Stops at a value-starter or a terminator.
    fn consume_background(&mut self, terminators: &[SyntaxKind]) {
        loop {
            let kind = self.current_kind();
            if kind.is_trivia() {
                self.bump();
            } else if STRAY_DELIMS.contains(&kind) && !terminators.contains(&kind) {
                let start = self.byte_offset;
                let m = self.start();
                self.bump();
                m.complete(self, SyntaxKind::ROOT_LEVEL_VALUE_DELIMITER);
                self.push_error(JsonErrorCode::ExpectedEof, start, 0, Vec::new());
            } else {
                break;
            }
        }
    }

    fn missing_value_node(&mut self) {
        let m = self.start();
        m.complete(self, SyntaxKind::VALUE_MISSING);
    }

    fn parse_value(&mut self) -> ValueInfo {
        match self.current_kind() {
            SyntaxKind::CURLY_OPEN => {
                self.parse_map();
                ValueInfo { kind: SyntaxKind::MAP, decoded_string: None }
            }
            SyntaxKind::SQUARE_OPEN => {
                self.parse_list();
                ValueInfo { kind: SyntaxKind::LIST, decoded_string: None }
            }
            SyntaxKind::INTEGER => {
                self.wrap_current(SyntaxKind::VALUE_INTEGER);
                ValueInfo { kind: SyntaxKind::VALUE_INTEGER, decoded_string: None }
            }
            SyntaxKind::STRING => {
                let decoded = self.current_string_decoded();
                self.wrap_current(SyntaxKind::VALUE_STRING);
                ValueInfo { kind: SyntaxKind::VALUE_STRING, decoded_string: Some(decoded) }
            }
            SyntaxKind::ERROR_STRING => {
                self.wrap_current(SyntaxKind::VALUE_ERROR_STRING);
                ValueInfo { kind: SyntaxKind::VALUE_ERROR_STRING, decoded_string: None }
            }
            SyntaxKind::KW_TRUE | SyntaxKind::KW_FALSE => {
                self.wrap_current(SyntaxKind::VALUE_BOOLEAN);
                ValueInfo { kind: SyntaxKind::VALUE_BOOLEAN, decoded_string: None }
            }
            SyntaxKind::UNDEFINED_VALUE => {
                self.wrap_current(SyntaxKind::VALUE_UNDEFINED);
                ValueInfo { kind: SyntaxKind::VALUE_UNDEFINED, decoded_string: None }
            }
            SyntaxKind::UNKNOWN_SYMBOL => {
                self.wrap_current(SyntaxKind::VALUE_UNKNOWN_SYMBOL);
                ValueInfo { kind: SyntaxKind::VALUE_UNKNOWN_SYMBOL, decoded_string: None }
            }
            other => unreachable!("parse_value called while not at a value-starter ({other:?})"),
        }
    }

    fn wrap_current(&mut self, kind: SyntaxKind) {
        let m = self.start();
        self.bump();
        m.complete(self, kind);
    }

    /// `parse_multi_value(terminators)`: the one production every value
    /// section (top level, list item, map key/value section) goes through.
    /// `terminators` must include `EOF`.
    fn parse_multi_value(&mut self, terminators: &[SyntaxKind]) -> MultiValueInfo {
        let mv = self.start();
        let mut non_missing_count = 0u32;
        let mut last_value: Option<ValueInfo> = None;
        let mut last_value_start = self.byte_offset;
        loop {
            let bg_checkpoint = self.checkpoint();
            self.consume_background(terminators);
            if self.current_kind().is_value_starter() {
                self.start_node_at(bg_checkpoint, SyntaxKind::VALUE_WITH_BACKGROUND);
                let value_start = self.byte_offset;
                let info = self.parse_value();
                non_missing_count += 1;
                if non_missing_count > 1 {
                    self.push_error(JsonErrorCode::MultipleValues, value_start, 0, Vec::new());
                }
                last_value = Some(info);
                last_value_start = value_start;
                self.finish_node();
            } else {
                if non_missing_count == 0 {
                    self.start_node_at(bg_checkpoint, SyntaxKind::VALUE_WITH_BACKGROUND);
                    self.missing_value_node();
                    self.finish_node();
                } else {
                    self.start_node_at(bg_checkpoint, SyntaxKind::BACKGROUND_LIST);
                    self.finish_node();
                }
                break;
            }
        }
        mv.complete(self, SyntaxKind::MULTI_VALUE);
        MultiValueInfo { is_missing_only: non_missing_count == 0, non_missing_count, last_value, last_value_start }
    }

    /// `List = [ · MultiValue · (, · MultiValue)* · ]?`
    fn parse_list(&mut self) -> CompletedMarker {
        let m = self.start();
        let open_start = self.byte_offset;
        self.bump(); // [
        // A missing item immediately followed by the list's own close
        // delimiter is a tolerated trailing comma (`[0,]`), not an error --
        // only a missing item that is itself followed by another `,` (a
        // genuine gap, as in `[1, , 3]`) gets flagged.
        let first = self.parse_multi_value(&LIST_TERMINATORS);
        if first.is_missing_only && self.current_kind() == SyntaxKind::COMMA {
            self.push_error(JsonErrorCode::MissingValue, open_start, 0, Vec::new());
        }
        while self.current_kind() == SyntaxKind::COMMA {
            let comma_start = self.byte_offset;
            self.bump();
            let item = self.parse_multi_value(&LIST_TERMINATORS);
            if item.is_missing_only && self.current_kind() == SyntaxKind::COMMA {
                self.push_error(JsonErrorCode::MissingValue, comma_start, 0, Vec::new());
            }
        }
        match self.current_kind() {
            SyntaxKind::SQUARE_CLOSE => self.bump(),
            SyntaxKind::CURLY_CLOSE => self.push_error(JsonErrorCode::ControlSymbolInArray, self.byte_offset, 0, Vec::new()),
            _ => self.push_error(JsonErrorCode::UnexpectedEofInArray, self.byte_offset, 0, Vec::new()),
        }
        m.complete(self, SyntaxKind::LIST)
    }

    /// One `KeyValue = MultiValue · (: · MultiValue)*`.
    fn parse_key_value(&mut self, seen_keys: &mut HashSet<String>) {
        let kv = self.start();
        let key = self.parse_multi_value(&MAP_ENTRY_TERMINATORS);
        if key.is_missing_only {
            self.push_error(JsonErrorCode::MissingPropertyKey, key.last_value_start, 0, Vec::new());
        } else {
            if key.non_missing_count > 1 {
                self.push_error(JsonErrorCode::MultiplePropertyKeys, key.last_value_start, 0, Vec::new());
            }
            match key.last_value.as_ref().and_then(|v| v.decoded_string.clone()) {
                Some(text) => {
                    if !seen_keys.insert(text.clone()) {
                        self.push_error(
                            JsonErrorCode::PropertyKeyAlreadyExists,
                            key.last_value_start,
                            0,
                            vec![ErrorParam::Str(text)],
                        );
                    }
                }
                None => {
                    self.push_error(JsonErrorCode::InvalidPropertyKey, key.last_value_start, 0, Vec::new());
                }
            }
        }

        let mut colon_count = 0u32;
        while self.current_kind() == SyntaxKind::COLON {
            self.bump();
            colon_count += 1;
            if colon_count > 1 {
                self.push_error(JsonErrorCode::MultiplePropertyKeySections, self.byte_offset, 0, Vec::new());
            }
            let value = self.parse_multi_value(&MAP_ENTRY_TERMINATORS);
            if value.is_missing_only {
                self.push_error(JsonErrorCode::MissingValue, value.last_value_start, 0, Vec::new());
            }
        }
        // A colon-less entry that runs straight into `]` or end-of-input
        // needs no diagnostic of its own: the enclosing map already reports
        // `ControlSymbolInObject`/`UnexpectedEofInObject` for that terminator,
        // and piling `MissingValue` on top would double-report the same
        // "this entry never got its value because the map broke off" fact.
        // A colon-less entry followed by `}` (a clean close) or `,` (more
        // entries to come) gets nothing else to explain the missing value,
        // so it's still flagged there.
        if colon_count == 0 && !matches!(self.current_kind(), SyntaxKind::SQUARE_CLOSE | SyntaxKind::EOF) {
            self.push_error(JsonErrorCode::MissingValue, self.byte_offset, 0, Vec::new());
        }
        kv.complete(self, SyntaxKind::KEY_VALUE);
    }

    /// `Map = { · KeyValue · (, · KeyValue)* · }?`
    fn parse_map(&mut self) -> CompletedMarker {
        let m = self.start();
        self.bump(); // {
        let mut seen_keys = HashSet::new();
        self.parse_key_value(&mut seen_keys);
        while self.current_kind() == SyntaxKind::COMMA {
            self.bump();
            self.parse_key_value(&mut seen_keys);
        }
        match self.current_kind() {
            SyntaxKind::CURLY_CLOSE => self.bump(),
            SyntaxKind::SQUARE_CLOSE => self.push_error(JsonErrorCode::ControlSymbolInObject, self.byte_offset, 0, Vec::new()),
            _ => self.push_error(JsonErrorCode::UnexpectedEofInObject, self.byte_offset, 0, Vec::new()),
        }
        m.complete(self, SyntaxKind::MAP)
    }

    fn finish(self) -> Root {
        Root { green: self.builder.finish(), errors: self.errors }
    }
}
