//! スキャナのメイン実装

use logos::{Lexer as LogosLexer, Logos};

use super::{Span, Token};
use crate::error::ParseError;

/// 位置情報付きトークン
#[derive(Debug, Clone)]
pub struct TokenWithPosition {
    pub token: Token,
    pub span: Span,
}

/// Goテンプレートのスキャナ
pub struct Scanner<'a> {
    inner: LogosLexer<'a, Token>,
}

impl<'a> Scanner<'a> {
    /// 新しいスキャナを作成
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: Token::lexer(input),
        }
    }

    /// 次のトークンを取得（認識できない文字はスキップ）
    pub fn next_token(&mut self) -> Option<TokenWithPosition> {
        loop {
            let result = self.inner.next()?;
            let span = Span::from(self.inner.span());
            if let Ok(token) = result {
                return Some(TokenWithPosition { token, span });
            }
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = TokenWithPosition;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// ソースをトークン化する
///
/// 未終了の文字列リテラルのみをエラーとして報告し、その他の
/// 認識できない文字（バイナリゴミなど）はスキップして続行する。
pub fn tokenize(input: &str) -> Result<Vec<TokenWithPosition>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(input);

    while let Some(result) = lexer.next() {
        let span = Span::from(lexer.span());
        match result {
            Ok(token) => tokens.push(TokenWithPosition { token, span }),
            Err(_) => {
                let slice = lexer.slice();
                if slice.starts_with('"') || slice.starts_with('`') {
                    return Err(ParseError::UnterminatedString { span });
                }
                // 未知の文字はスキップ
            }
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokenization() {
        let input = "package numbers";
        let tokens = tokenize(input).unwrap();

        assert_eq!(tokens.len(), 2);
        assert!(matches!(tokens[0].token, Token::Package));
        assert!(matches!(tokens[1].token, Token::Identifier(_)));
    }

    #[test]
    fn test_type_declaration() {
        let input = "type NumberType generic.Number";
        let tokens = tokenize(input).unwrap();

        assert_eq!(tokens.len(), 5);
        assert!(matches!(tokens[0].token, Token::Type));
        assert!(matches!(tokens[3].token, Token::Dot));
        if let Token::Identifier(name) = &tokens[1].token {
            assert_eq!(name, "NumberType");
        } else {
            panic!("Expected identifier token");
        }
        if let Token::Identifier(pkg) = &tokens[2].token {
            assert_eq!(pkg, "generic");
        } else {
            panic!("Expected identifier token");
        }
    }

    #[test]
    fn test_string_literal() {
        let input = r#"import "fmt""#;
        let tokens = tokenize(input).unwrap();

        assert_eq!(tokens.len(), 2);
        if let Token::String(s) = &tokens[1].token {
            assert_eq!(s, "fmt");
        } else {
            panic!("Expected string token");
        }
    }

    #[test]
    fn test_comments_are_skipped() {
        let input = "// a line comment\n/* a block\ncomment */\ntype T struct {}";
        let tokens = tokenize(input).unwrap();

        assert!(matches!(tokens[0].token, Token::Type));
        assert_eq!(tokens.len(), 5);
    }

    #[test]
    fn test_unterminated_string() {
        let input = "var s = \"oops";
        let err = tokenize(input).unwrap_err();
        assert!(matches!(err, ParseError::UnterminatedString { .. }));
    }

    #[test]
    fn test_operators_collapse() {
        let input = "a := b + c";
        let tokens = tokenize(input).unwrap();

        assert_eq!(tokens.len(), 5);
        if let Token::Operator(op) = &tokens[1].token {
            assert_eq!(op, ":=");
        } else {
            panic!("Expected operator token");
        }
    }
}
