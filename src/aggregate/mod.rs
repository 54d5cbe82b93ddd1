//! 特殊化集約モジュール
//!
//! 置換エンジンを`TypeSet`ごとに1回ずつ実行して出力を連結し、
//! その連結結果を1つのコンパイル可能なソースに正規化します：
//! package句は最初の1つだけを残し、インポートは順序を保って
//! 重複排除された1つのブロックにまとめ、不要な行接頭辞
//! （ジェネレータ起動ディレクティブやビルドタグ）を除去します。

mod aggregator;
mod imports;

pub use aggregator::Aggregator;
pub use imports::ImportSet;

/// 生成ファイルの先頭に付く固定ヘッダコメント
pub const GENERATED_HEADER: &str = "\n\
// This file was automatically generated by monogo.\n\
// Any changes will be lost if this file is regenerated.\n\
// see https://github.com/yuniruyuni/monogo\n\n";
