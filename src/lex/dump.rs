//! The `dump` debug operation (spec §6): a linear, human-readable rendering
//! of the token stream, `[type(line:offset) key=value, ...]` per token, with
//! a newline inserted after each `newLine` token so the dump reads one
//! source line per output line.

use crate::lex::lexing::Lexer;
use crate::lex::options::LexerOptions;
use crate::lex::token::{Token, TokenKind};

pub fn dump(source: &str, options: LexerOptions) -> Result<String, crate::lex::error::LexError> {
    let mut out = String::new();
    for result in Lexer::new(source, options) {
        let token = result?;
        out.push_str(&format_token(&token));
        if matches!(token.kind, TokenKind::NewLine) {
            out.push('\n');
        }
    }
    Ok(out)
}

fn format_token(token: &Token) -> String {
    let header = format!("{}({}:{})", token.type_name(), token.line, token.offset);
    let attrs = token_attrs(&token.kind);
    if attrs.is_empty() {
        format!("[{}]", header)
    } else {
        format!("[{} {}]", header, attrs.join(", "))
    }
}

fn opt(name: &str, value: &Option<String>) -> Option<String> {
    value.as_ref().map(|v| format!("{}={}", name, v))
}

fn token_attrs(kind: &TokenKind) -> Vec<String> {
    match kind {
        TokenKind::Import {
            import_type,
            filter,
            path,
        } => [
            Some(format!("importType={}", import_type)),
            opt("filter", filter),
            Some(format!("path={}", path)),
        ]
        .into_iter()
        .flatten()
        .collect(),
        TokenKind::Block { mode, name } => [opt("mode", mode), opt("name", name)]
            .into_iter()
            .flatten()
            .collect(),
        TokenKind::Conditional { name, subject } => [
            Some(format!("name={}", name)),
            opt("subject", subject),
        ]
        .into_iter()
        .flatten()
        .collect(),
        TokenKind::Each {
            item_name,
            key_name,
            subject,
        } => [
            Some(format!("itemName={}", item_name)),
            opt("keyName", key_name),
            Some(format!("subject={}", subject)),
        ]
        .into_iter()
        .flatten()
        .collect(),
        TokenKind::Case { subject } => opt("subject", subject).into_iter().collect(),
        TokenKind::When {
            name,
            default,
            subject,
        } => [
            Some(format!("name={}", name)),
            Some(format!("default={}", default)),
            opt("subject", subject),
        ]
        .into_iter()
        .flatten()
        .collect(),
        TokenKind::While { subject } => opt("subject", subject).into_iter().collect(),
        TokenKind::Mixin { name } | TokenKind::MixinCall { name } | TokenKind::Id { name } => {
            vec![format!("name={}", name)]
        }
        TokenKind::Doctype { name } => opt("name", name).into_iter().collect(),
        TokenKind::Tag { name } => vec![format!("name={}", name)],
        TokenKind::Class { name } => vec![format!("name={}", name)],
        TokenKind::Attribute {
            name,
            value,
            escaped,
        } => [
            opt("name", name),
            opt("value", value),
            Some(format!("escaped={}", escaped)),
        ]
        .into_iter()
        .flatten()
        .collect(),
        TokenKind::Assignment { name } => vec![format!("name={}", name)],
        TokenKind::Comment { rendered } => vec![format!("rendered={}", rendered)],
        TokenKind::Filter { name } => vec![format!("name={}", name)],
        TokenKind::Expression { escaped, returns } => vec![
            format!("escaped={}", escaped),
            format!("return={}", returns),
        ],
        TokenKind::Text { value } => vec![format!("value={}", value)],
        TokenKind::Expansion { with_space } => vec![format!("withSpace={}", with_space)],
        TokenKind::NewLine
        | TokenKind::Indent
        | TokenKind::Outdent
        | TokenKind::Do
        | TokenKind::AttributeStart
        | TokenKind::AttributeEnd => vec![],
    }
}
