//! トークン置換エンジンモジュール
//!
//! 1つのテンプレートを1つの`TypeSet`に対して行単位で書き換え、
//! 1つの特殊化済みソースを生成します。プレースホルダに関係しない
//! 行はそのまま保持されます。
//!
//! ## 置換規則
//!
//! 行内の各語についてプレースホルダ名の出現位置を調べ、出現の前後が
//! 英数字またはアンダースコアであれば「部分一致」（より大きな識別子の
//! 一部）、そうでなければ「完全一致」（型位置）として扱います：
//!
//! - 完全一致 → 具体型参照（`person.Person`など）に置換
//! - 部分一致 → wordify形（`Person`など）に置換。先頭文字の大小は
//!   出現を含む識別子の先頭文字に合わせられ、エクスポート規約が
//!   保たれます
//!
//! ## 行バッファリング
//!
//! インタフェース宣言ブロックと先行コメント行は小さな状態機械で
//! 保留され、ジェネリック専用の宣言が除去される際には付随する
//! コメントも一緒に消えます。

mod buffer;
mod engine;
mod words;

pub use buffer::{CommentHold, InterfaceBuffer};
pub use engine::Specializer;
pub use words::substitute_line;
