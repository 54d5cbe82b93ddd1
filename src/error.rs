//! 統一的なエラーハンドリングモジュール
//!
//! このモジュールは、monogoジェネレータ全体で使用される統一的なエラー型と
//! エラー報告システムを提供します。

use crate::scan::Span;
use codespan_reporting::diagnostic::{Diagnostic, Label};
use thiserror::Error;

/// monogoジェネレータの統一エラー型
#[derive(Error, Debug, Clone)]
#[allow(dead_code)]
pub enum MonogoError {
    /// テンプレート解析エラー
    #[error("テンプレート解析エラー")]
    Parse(#[from] ParseError),

    /// 型バインディングエラー
    #[error("型バインディングエラー")]
    Binding(#[from] BindingError),

    /// インポート整形エラー
    #[error("インポート整形エラー")]
    Imports(#[from] ImportsError),

    /// ファイルI/Oエラー
    #[error("ファイル操作エラー: {0}")]
    Io(String),

    /// その他のエラー
    #[error("{0}")]
    Other(String),
}

/// テンプレートの構造解析エラーの詳細
#[derive(Error, Debug, Clone)]
pub enum ParseError {
    #[error("package句が見つかりません")]
    MissingPackageClause { span: Span },

    #[error("対応しない区切り記号: '{found}'")]
    UnbalancedDelimiter { found: String, span: Span },

    #[error("未終了の文字列リテラル")]
    UnterminatedString { span: Span },

    #[error("不正な構文: {message}")]
    InvalidSyntax { message: String, span: Span },
}

/// 型バインディングエラーの詳細
#[derive(Error, Debug, Clone)]
pub enum BindingError {
    #[error("プレースホルダ型 {placeholder} に対応する具体型が指定されていません")]
    MissingSpecificType { placeholder: String, span: Span },

    #[error("不正な型指定引数: '{arg}'")]
    InvalidTypeSetArg { arg: String },

    #[error("型指定が空です")]
    EmptyTypeSet,
}

/// インポート解決エラーの詳細
#[derive(Error, Debug, Clone)]
pub enum ImportsError {
    #[error("生成結果の整形に失敗しました: {message}")]
    Normalize { message: String },

    #[error("外部整形ツール {tool} の実行に失敗しました: {message}")]
    Tool { tool: String, message: String },
}

/// エラー情報とソースコードの位置情報を含むエラー
#[derive(Debug, Clone)]
pub struct DiagnosticError {
    pub error: MonogoError,
    pub file_id: usize,
}

impl DiagnosticError {
    pub fn new(error: MonogoError, file_id: usize) -> Self {
        Self { error, file_id }
    }

    /// codespan-reportingのDiagnosticに変換
    pub fn to_diagnostic(&self) -> Diagnostic<usize> {
        let (message, labels) = match &self.error {
            MonogoError::Parse(e) => match e {
                ParseError::MissingPackageClause { span } => (
                    "package句が見つかりません".to_string(),
                    vec![Label::primary(self.file_id, span.start..span.end)
                        .with_message("テンプレートはpackage句で始まる必要があります")],
                ),
                ParseError::UnbalancedDelimiter { found, span } => (
                    format!("対応しない区切り記号: '{}'", found),
                    vec![Label::primary(self.file_id, span.start..span.end)
                        .with_message("ここに対応の取れない括弧があります")],
                ),
                ParseError::UnterminatedString { span } => (
                    "未終了の文字列リテラル".to_string(),
                    vec![Label::primary(self.file_id, span.start..span.end)
                        .with_message("文字列が閉じられていません")],
                ),
                ParseError::InvalidSyntax { message, span } => (
                    format!("不正な構文: {}", message),
                    vec![Label::primary(self.file_id, span.start..span.end)],
                ),
            },
            MonogoError::Binding(e) => match e {
                BindingError::MissingSpecificType { placeholder, span } => (
                    format!(
                        "プレースホルダ型 {} に対応する具体型が指定されていません",
                        placeholder
                    ),
                    vec![Label::primary(self.file_id, span.start..span.end)
                        .with_message("この宣言に対応する型を指定してください")],
                ),
                BindingError::InvalidTypeSetArg { arg } => {
                    (format!("不正な型指定引数: '{}'", arg), vec![])
                }
                BindingError::EmptyTypeSet => ("型指定が空です".to_string(), vec![]),
            },
            MonogoError::Imports(e) => (e.to_string(), vec![]),
            MonogoError::Io(message) => (format!("ファイル操作エラー: {}", message), vec![]),
            MonogoError::Other(message) => (message.clone(), vec![]),
        };

        Diagnostic::error().with_message(message).with_labels(labels)
    }
}

/// Result型のエイリアス
pub type MonogoResult<T> = Result<T, MonogoError>;

impl From<std::io::Error> for MonogoError {
    fn from(e: std::io::Error) -> Self {
        MonogoError::Io(e.to_string())
    }
}
