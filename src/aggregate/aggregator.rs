//! 集約と正規化の実装

use log::debug;

use super::imports::ImportSet;
use super::GENERATED_HEADER;
use crate::bindings::TypeSet;
use crate::subst::Specializer;

/// ジェネレータ起動ディレクティブの接頭辞（常に除去される）
const GENERATE_PREFIXES: [&str; 2] = [
    "//go:generate monogo ",
    "//go:generate $GOPATH/bin/monogo ",
];

/// N個の特殊化を1つのソースにまとめる集約器
pub struct Aggregator {
    unwanted_prefixes: Vec<String>,
}

impl Aggregator {
    /// 集約器を作成する
    ///
    /// `strip_tag`が与えられた場合、そのタグのビルドタグ行
    /// （旧`// +build`形式と新`//go:build`形式の両方）も除去対象になる。
    pub fn new(strip_tag: Option<&str>) -> Self {
        let mut unwanted_prefixes: Vec<String> =
            GENERATE_PREFIXES.iter().map(|p| p.to_string()).collect();
        if let Some(tag) = strip_tag {
            unwanted_prefixes.push(format!("// +build {}", tag));
            unwanted_prefixes.push(format!("//go:build {}", tag));
        }
        Self { unwanted_prefixes }
    }

    /// テンプレートを各`TypeSet`で特殊化し、正規化済みの1ソースに集約する
    ///
    /// 出力順はリクエスト順。package句とインポートブロックは
    /// N個の特殊化に対して必ず1つずつになる。
    pub fn aggregate(&self, template: &str, typesets: &[TypeSet]) -> String {
        let specializer = Specializer::new();

        let mut concatenated = String::new();
        for (i, typeset) in typesets.iter().enumerate() {
            debug!("specializing typeset {}/{}", i + 1, typesets.len());
            concatenated.push_str(&specializer.specialize(template, typeset));
        }

        self.normalize(&concatenated)
    }

    /// 連結済みの特殊化群を行単位で正規化する
    fn normalize(&self, concatenated: &str) -> String {
        let mut package_line: Option<String> = None;
        let mut imports = ImportSet::new();
        let mut body: Vec<&str> = Vec::new();
        let mut inside_import_block = false;

        for line in concatenated.lines() {
            if inside_import_block {
                if line.trim() == ")" {
                    inside_import_block = false;
                } else if !line.trim().is_empty() && !is_generic_import(line.trim()) {
                    imports.insert(line.trim());
                }
                continue;
            }

            if line.starts_with("package") {
                // 最初のpackage句だけを残す
                if package_line.is_none() {
                    package_line = Some(line.to_string());
                }
                continue;
            }

            if line.starts_with("import") {
                if line.trim_end().ends_with('(') {
                    inside_import_block = true;
                } else {
                    // 単一行形式からインポートパス部分だけを取り出す
                    let entry = line["import".len()..].trim();
                    if !entry.is_empty() && !is_generic_import(entry) {
                        imports.insert(entry);
                    }
                }
                continue;
            }

            if self.unwanted_prefixes.iter().any(|p| line.starts_with(p)) {
                continue;
            }

            body.push(line);
        }

        let mut out = String::new();
        out.push_str(GENERATED_HEADER);
        if let Some(package_line) = package_line {
            out.push_str(&package_line);
            out.push('\n');
        }
        if !imports.is_empty() {
            out.push_str("import (\n");
            for entry in imports.iter() {
                out.push('\t');
                out.push_str(entry);
                out.push('\n');
            }
            out.push_str(")\n");
        }
        for line in body {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

/// 予約`generic`パッケージのインポートエントリか
///
/// プレースホルダ宣言は特殊化で必ず除去されるため、`generic`
/// パッケージへのインポートは出力では未使用になる。ここで
/// 落としておくことで、未使用インポートの削除を整形ツールに
/// 頼らずに済む。
fn is_generic_import(entry: &str) -> bool {
    let Some(start) = entry.find('"') else {
        return false;
    };
    let path = entry[start + 1..].trim_end_matches('"');
    path == "generic" || path.ends_with("/generic")
}
