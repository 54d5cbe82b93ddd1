//! 構造検証の実装

use crate::bindings::TypeSet;
use crate::error::{BindingError, MonogoResult, ParseError};
use crate::scan::{tokenize, Span, Token, TokenWithPosition};

/// プレースホルダ型の予約パッケージ名
const GENERIC_PACKAGE: &str = "generic";

/// テンプレート内で宣言された1つのプレースホルダ型
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    pub name: String,
    pub span: Span,
}

/// テンプレートの構造バリデータ
#[derive(Debug)]
pub struct Validator {
    tokens: Vec<TokenWithPosition>,
    current: usize,
}

impl Validator {
    /// テンプレートをトークン化してバリデータを作成
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let tokens = tokenize(source)?;
        Ok(Self { tokens, current: 0 })
    }

    /// 構造チェックを行い、宣言されたプレースホルダ型を収集する
    ///
    /// - テンプレートはpackage句で始まらなければならない
    /// - 括弧類はすべて対応が取れていなければならない
    pub fn collect_placeholders(&mut self) -> Result<Vec<Placeholder>, ParseError> {
        self.current = 0;
        self.check_package_clause()?;
        self.check_balance()?;

        let mut placeholders = Vec::new();
        while !self.is_at_end() {
            if self.check(&Token::Type) {
                self.advance();
                self.collect_type_decl(&mut placeholders);
            } else {
                self.advance();
            }
        }
        Ok(placeholders)
    }

    /// 宣言されたすべてのプレースホルダ型が束縛されているか検証する
    ///
    /// 最初に見つかった未束縛のプレースホルダがエラーとして報告される。
    pub fn validate(&mut self, typeset: &TypeSet) -> MonogoResult<()> {
        let placeholders = self.collect_placeholders()?;
        for placeholder in &placeholders {
            if !typeset.contains(&placeholder.name) {
                return Err(BindingError::MissingSpecificType {
                    placeholder: placeholder.name.clone(),
                    span: placeholder.span,
                }
                .into());
            }
        }
        Ok(())
    }

    /// `type`キーワード直後からの型宣言を処理
    ///
    /// 単一形式 `type T generic.Type` とグループ形式 `type ( ... )` の
    /// 両方を扱う。
    fn collect_type_decl(&mut self, placeholders: &mut Vec<Placeholder>) {
        if self.check(&Token::LParen) {
            // グループ形式：対応する閉じ括弧まで各型指定を順に見る
            self.advance();
            let mut depth = 0usize;
            while !self.is_at_end() {
                if self.check(&Token::RParen) {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                    self.advance();
                    continue;
                }
                if self.check(&Token::LParen) {
                    depth += 1;
                    self.advance();
                    continue;
                }
                if !self.try_collect_type_spec(placeholders) {
                    self.advance();
                }
            }
        } else {
            self.try_collect_type_spec(placeholders);
        }
    }

    /// 現在位置が `Ident generic.Type|Number` の型指定ならば収集する
    fn try_collect_type_spec(&mut self, placeholders: &mut Vec<Placeholder>) -> bool {
        let name = match self.current_token() {
            Some(Token::Identifier(name)) => name.clone(),
            _ => return false,
        };
        let name_span = self.current_span();

        // エイリアス形式 `type T = generic.Type` の `=` を許容する
        let mut offset = 1;
        if let Some(Token::Operator(op)) = self.peek(offset) {
            if op == "=" {
                offset += 1;
            }
        }

        let is_generic = matches!(self.peek(offset), Some(Token::Identifier(pkg)) if pkg == GENERIC_PACKAGE)
            && matches!(self.peek(offset + 1), Some(Token::Dot))
            && matches!(self.peek(offset + 2), Some(Token::Identifier(flavor)) if flavor == "Type" || flavor == "Number");

        if is_generic {
            placeholders.push(Placeholder {
                name,
                span: name_span,
            });
            for _ in 0..offset + 3 {
                self.advance();
            }
            true
        } else {
            false
        }
    }

    /// テンプレートがpackage句で始まることを確認
    fn check_package_clause(&self) -> Result<(), ParseError> {
        match self.tokens.first() {
            Some(t) if matches!(t.token, Token::Package) => {
                match self.tokens.get(1) {
                    Some(t) if matches!(t.token, Token::Identifier(_)) => Ok(()),
                    other => Err(ParseError::InvalidSyntax {
                        message: "package句にパッケージ名がありません".to_string(),
                        span: other.map(|t| t.span).unwrap_or_else(Span::dummy),
                    }),
                }
            }
            other => Err(ParseError::MissingPackageClause {
                span: other.map(|t| t.span).unwrap_or_else(Span::dummy),
            }),
        }
    }

    /// 括弧類の対応を確認
    fn check_balance(&self) -> Result<(), ParseError> {
        let mut stack: Vec<(&Token, Span)> = Vec::new();
        for t in &self.tokens {
            if t.token.matching_close().is_some() {
                stack.push((&t.token, t.span));
            } else if t.token.is_close() {
                match stack.pop() {
                    Some((open, _)) if open.matching_close().as_ref() == Some(&t.token) => {}
                    _ => {
                        return Err(ParseError::UnbalancedDelimiter {
                            found: format!("{:?}", t.token),
                            span: t.span,
                        })
                    }
                }
            }
        }
        if let Some((open, span)) = stack.pop() {
            return Err(ParseError::UnbalancedDelimiter {
                found: format!("{:?}", open),
                span,
            });
        }
        Ok(())
    }

    // ==================== ユーティリティメソッド ====================

    fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.current).map(|t| &t.token)
    }

    fn current_span(&self) -> Span {
        self.tokens
            .get(self.current)
            .map(|t| t.span)
            .unwrap_or_else(Span::dummy)
    }

    fn peek(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.current + offset).map(|t| &t.token)
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.current += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    fn check(&self, token_type: &Token) -> bool {
        match self.current_token() {
            Some(token) => std::mem::discriminant(token) == std::mem::discriminant(token_type),
            None => false,
        }
    }
}
