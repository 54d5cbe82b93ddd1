//! 型バインディングモジュール
//!
//! テンプレート内のプレースホルダ型と、それを置き換える具体型の
//! 対応付けを表現するデータモデルを提供します。
//!
//! ## 具体型指定の構文
//!
//! 具体型は単純な型参照（`int`、`pet.Dog`）のほか、ラベル付きの
//! `Label:ConcreteType` 形式を取ることができます：
//!
//! ```text
//! FirstType=Person:person.Person
//! ```
//!
//! ラベル（`Person`）は生成される識別子名の合成に使われ、
//! 型参照（`person.Person`）は型の位置への置換に使われます。
//! ラベルがない場合は指定文字列がその両方を兼ねます。

mod spec;
mod typesets;

pub use spec::ConcreteSpec;
pub use typesets::parse_typeset_args;

use indexmap::IndexMap;

/// プレースホルダ名から具体型への完全な対応付け（1つの特殊化分）
///
/// 挿入順を保持するため、置換結果は常に決定的になる。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeSet {
    entries: IndexMap<String, ConcreteSpec>,
}

impl TypeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// プレースホルダ名と具体型の対応を追加
    pub fn insert(&mut self, placeholder: impl Into<String>, spec: ConcreteSpec) {
        self.entries.insert(placeholder.into(), spec);
    }

    /// プレースホルダ名が束縛されているか
    pub fn contains(&self, placeholder: &str) -> bool {
        self.entries.contains_key(placeholder)
    }

    pub fn get(&self, placeholder: &str) -> Option<&ConcreteSpec> {
        self.entries.get(placeholder)
    }

    /// 挿入順でのイテレーション
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConcreteSpec)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// テスト・組み立て用のヘルパー
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut set = Self::new();
        for (k, v) in pairs {
            set.insert(k, ConcreteSpec::new(v));
        }
        set
    }
}
