//! Token types yielded by the lexer (spec §3).
//!
//! Derive style (`Debug, Clone, PartialEq, serde::Serialize`) follows the
//! teacher's own token types, e.g. `LineToken` in
//! `lex-parser/src/lex/token/line.rs`.

use serde::Serialize;

/// A single token with its source position.
///
/// `line` is 1-based; `offset` is the 0-based column, in Unicode scalar
/// values, at which the token's source text begins (spec §3).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize, offset: usize) -> Self {
        Token { kind, line, offset }
    }

    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }
}

/// The closed set of token kinds (spec §3 / §4.E's scanner table).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum TokenKind {
    NewLine,
    Indent,
    Outdent,
    Import {
        import_type: String,
        filter: Option<String>,
        path: String,
    },
    Block {
        mode: Option<String>,
        name: Option<String>,
    },
    Conditional {
        name: String,
        subject: Option<String>,
    },
    Each {
        item_name: String,
        key_name: Option<String>,
        subject: String,
    },
    Case {
        subject: Option<String>,
    },
    When {
        name: String,
        default: bool,
        subject: Option<String>,
    },
    Do,
    While {
        subject: Option<String>,
    },
    Mixin {
        name: String,
    },
    MixinCall {
        name: String,
    },
    Doctype {
        name: Option<String>,
    },
    Tag {
        name: String,
    },
    Class {
        name: String,
    },
    Id {
        name: String,
    },
    AttributeStart,
    Attribute {
        name: Option<String>,
        value: Option<String>,
        escaped: bool,
    },
    AttributeEnd,
    Assignment {
        name: String,
    },
    Comment {
        rendered: bool,
    },
    Filter {
        name: String,
    },
    Expression {
        escaped: bool,
        returns: bool,
    },
    Text {
        value: String,
    },
    Expansion {
        with_space: bool,
    },
}

impl TokenKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            TokenKind::NewLine => "newLine",
            TokenKind::Indent => "indent",
            TokenKind::Outdent => "outdent",
            TokenKind::Import { .. } => "import",
            TokenKind::Block { .. } => "block",
            TokenKind::Conditional { .. } => "conditional",
            TokenKind::Each { .. } => "each",
            TokenKind::Case { .. } => "case",
            TokenKind::When { .. } => "when",
            TokenKind::Do => "do",
            TokenKind::While { .. } => "while",
            TokenKind::Mixin { .. } => "mixin",
            TokenKind::MixinCall { .. } => "mixinCall",
            TokenKind::Doctype { .. } => "doctype",
            TokenKind::Tag { .. } => "tag",
            TokenKind::Class { .. } => "class",
            TokenKind::Id { .. } => "id",
            TokenKind::AttributeStart => "attributeStart",
            TokenKind::Attribute { .. } => "attribute",
            TokenKind::AttributeEnd => "attributeEnd",
            TokenKind::Assignment { .. } => "assignment",
            TokenKind::Comment { .. } => "comment",
            TokenKind::Filter { .. } => "filter",
            TokenKind::Expression { .. } => "expression",
            TokenKind::Text { .. } => "text",
            TokenKind::Expansion { .. } => "expansion",
        }
    }
}
