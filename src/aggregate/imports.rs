//! 挿入順保持のインポート集合

use indexmap::IndexSet;

/// 重複排除済みインポートエントリの集合
///
/// 最初に現れた順序が保持される。マージ順序の保証
/// （先に見たインポートが先に出力される）はこの型の契約。
#[derive(Debug, Clone, Default)]
pub struct ImportSet {
    entries: IndexSet<String>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// エントリを追加する（既存なら何もしない）
    pub fn insert(&mut self, entry: impl Into<String>) {
        self.entries.insert(entry.into());
    }

    /// 挿入順でのイテレーション
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_order_preserved() {
        let mut set = ImportSet::new();
        set.insert("\"fmt\"");
        set.insert("\"strings\"");
        set.insert("\"fmt\"");

        let entries: Vec<&str> = set.iter().collect();
        assert_eq!(entries, vec!["\"fmt\"", "\"strings\""]);
    }
}
