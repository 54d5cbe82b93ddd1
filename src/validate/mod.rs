//! テンプレート検証モジュール
//!
//! このモジュールはテンプレートの構造を解析し、宣言されたすべての
//! プレースホルダ型（`generic.Type` / `generic.Number` への別名宣言）が
//! 型バインディングで網羅されていることを確認する責任を持ちます。
//!
//! 検証は純粋なチェックであり、出力を生成しません。検証に失敗した
//! 特殊化は一切の部分的な出力を残さず中断されます。

mod validator;

pub use validator::{Placeholder, Validator};
