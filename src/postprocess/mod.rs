//! 後処理モジュール
//!
//! 集約結果に対する合成可能な後処理ステップを提供します：
//! パッケージ名の差し替え、追加インポートの注入、そして外部
//! コラボレータによる最終的なインポート整形です。
//!
//! インポート整形は`ImportNormalizer`トレイトとして切り出されており、
//! 純Rustの組み込み実装（`BuiltinNormalizer`）と、`goimports`バイナリに
//! 委譲する実装（`GoimportsNormalizer`）を選べます。

mod normalizer;
mod rewrite;

pub use normalizer::{BuiltinNormalizer, GoimportsNormalizer, ImportNormalizer};
pub use rewrite::{add_imports, change_package};
