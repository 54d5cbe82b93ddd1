//! Structural scanning module for Go template sources.
//!
//! This module is responsible for tokenizing a Go template into the stream of
//! tokens the template validator needs: keywords, identifiers, literals and
//! delimiters. It deliberately covers only the structural subset of Go —
//! expression-level detail inside function bodies is irrelevant to
//! placeholder collection and is reduced to generic operator tokens.

mod scanner;

pub use scanner::{tokenize, Scanner, TokenWithPosition};

use logos::Logos;

/// Byte range of a token or error within one source unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn dummy() -> Self {
        Self::new(0, 0)
    }
}

impl From<logos::Span> for Span {
    fn from(span: logos::Span) -> Self {
        Self::new(span.start, span.end)
    }
}

/// Token types for the structural Go subset
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")] // Whitespace carries no structure here
#[logos(skip r"//[^\n]*")] // Line comments
#[logos(skip r"/\*([^*]|\*[^/])*\*+/")] // Block comments
pub enum Token {
    // Keywords that open declarations
    #[token("package")]
    Package,
    #[token("import")]
    Import,
    #[token("type")]
    Type,
    #[token("func")]
    Func,
    #[token("interface")]
    Interface,
    #[token("struct")]
    Struct,
    #[token("const")]
    Const,
    #[token("var")]
    Var,
    #[token("map")]
    Map,
    #[token("chan")]
    Chan,

    // Identifiers (must come after keywords to avoid conflicts)
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_owned(), priority = 1)]
    Identifier(String),

    // Literals
    #[regex(r#""([^"\\\n]|\\.)*""#, |lex| lex.slice().trim_matches('"').to_owned())]
    String(String),
    #[regex(r"`[^`]*`", |lex| lex.slice().trim_matches('`').to_owned())]
    RawString(String),
    #[regex(r"'([^'\\\n]|\\.)+'")]
    Rune,
    #[regex(r"[0-9][0-9a-fA-F_xXoObB.]*([eEpP][+-]?[0-9]+)?i?")]
    Number,

    // Delimiters
    #[token(".")]
    Dot,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,

    // Everything else inside bodies collapses into operator runs
    #[regex(r"[-+*/%&|^<>=!:~]+", |lex| lex.slice().to_owned())]
    Operator(String),
}

impl Token {
    /// 開き括弧に対応する閉じ括弧を返す
    pub fn matching_close(&self) -> Option<Token> {
        match self {
            Token::LParen => Some(Token::RParen),
            Token::LBrace => Some(Token::RBrace),
            Token::LBracket => Some(Token::RBracket),
            _ => None,
        }
    }

    /// 閉じ括弧かどうか
    pub fn is_close(&self) -> bool {
        matches!(self, Token::RParen | Token::RBrace | Token::RBracket)
    }
}
