//! インポート整形コラボレータ

use std::io::Write;
use std::process::{Command, Stdio};

use crate::aggregate::ImportSet;
use crate::error::ImportsError;
use crate::validate::Validator;

/// インポート整形コラボレータのインタフェース
///
/// `filename`は言語バージョンなどの文脈情報のためだけに渡され、
/// ソース本体は`source`で与えられる。整形に失敗した場合
/// （典型的には置換が不正な構文を生成したバグ）はエラーを返す。
pub trait ImportNormalizer {
    fn normalize(&self, filename: &str, source: &[u8]) -> Result<Vec<u8>, ImportsError>;
}

/// 純Rustの組み込み整形実装
///
/// 生成結果を構造的に再検証し、すべてのインポート宣言を1つの
/// ソート・重複排除済みブロックにまとめ、空行の連続を詰める。
/// `goimports`のような未使用インポートの削除やグループ分けは行わない。
#[derive(Debug, Default)]
pub struct BuiltinNormalizer;

impl BuiltinNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl ImportNormalizer for BuiltinNormalizer {
    fn normalize(&self, _filename: &str, source: &[u8]) -> Result<Vec<u8>, ImportsError> {
        let text = std::str::from_utf8(source).map_err(|e| ImportsError::Normalize {
            message: e.to_string(),
        })?;

        // 生成結果が構造的に妥当であることを確認する
        let mut validator = Validator::new(text).map_err(|e| ImportsError::Normalize {
            message: e.to_string(),
        })?;
        validator
            .collect_placeholders()
            .map_err(|e| ImportsError::Normalize {
                message: e.to_string(),
            })?;

        let mut prelude: Vec<&str> = Vec::new();
        let mut package_line: Option<&str> = None;
        let mut imports = ImportSet::new();
        let mut body: Vec<&str> = Vec::new();
        let mut inside_import_block = false;

        for line in text.lines() {
            if inside_import_block {
                if line.trim() == ")" {
                    inside_import_block = false;
                } else if !line.trim().is_empty() {
                    imports.insert(line.trim());
                }
                continue;
            }

            if line.starts_with("package") {
                if package_line.is_none() {
                    package_line = Some(line);
                }
                continue;
            }

            if line.starts_with("import") {
                if line.trim_end().ends_with('(') {
                    inside_import_block = true;
                } else {
                    let entry = line["import".len()..].trim();
                    if !entry.is_empty() {
                        imports.insert(entry);
                    }
                }
                continue;
            }

            if package_line.is_none() {
                prelude.push(line);
            } else {
                body.push(line);
            }
        }

        let package_line = package_line.ok_or_else(|| ImportsError::Normalize {
            message: "package句が見つかりません".to_string(),
        })?;

        let mut entries: Vec<&str> = imports.iter().collect();
        entries.sort_unstable();

        let mut out = String::with_capacity(text.len());
        let prelude = trim_blank_runs(&prelude);
        for line in &prelude {
            out.push_str(line);
            out.push('\n');
        }
        if !prelude.is_empty() {
            out.push('\n');
        }
        out.push_str(package_line);
        out.push('\n');
        if !entries.is_empty() {
            out.push('\n');
            out.push_str("import (\n");
            for entry in entries {
                out.push('\t');
                out.push_str(entry);
                out.push('\n');
            }
            out.push_str(")\n");
        }
        let body = trim_blank_runs(&body);
        if !body.is_empty() {
            out.push('\n');
            for line in body {
                out.push_str(line);
                out.push('\n');
            }
        }

        Ok(out.into_bytes())
    }
}

/// 空行の連続を1行に詰め、先頭と末尾の空行を落とす
fn trim_blank_runs<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    let mut out: Vec<&str> = Vec::with_capacity(lines.len());
    let mut last_blank = true;
    for line in lines {
        let blank = line.trim().is_empty();
        if blank && last_blank {
            continue;
        }
        out.push(line);
        last_blank = blank;
    }
    while matches!(out.last(), Some(l) if l.trim().is_empty()) {
        out.pop();
    }
    out
}

/// `goimports`バイナリに委譲する整形実装
///
/// ソースを標準入力で渡し、整形済みの標準出力を受け取る。
/// ツールの起動失敗や非ゼロ終了はエラーとして報告される。
#[derive(Debug)]
pub struct GoimportsNormalizer {
    tool: String,
}

impl GoimportsNormalizer {
    pub fn new() -> Self {
        Self::with_tool("goimports")
    }

    /// 別の整形ツール（`gofmt`など）を指定する
    pub fn with_tool(tool: impl Into<String>) -> Self {
        Self { tool: tool.into() }
    }
}

impl Default for GoimportsNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportNormalizer for GoimportsNormalizer {
    fn normalize(&self, _filename: &str, source: &[u8]) -> Result<Vec<u8>, ImportsError> {
        let mut child = Command::new(&self.tool)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ImportsError::Tool {
                tool: self.tool.clone(),
                message: e.to_string(),
            })?;

        if let Some(stdin) = child.stdin.as_mut() {
            stdin.write_all(source).map_err(|e| ImportsError::Tool {
                tool: self.tool.clone(),
                message: e.to_string(),
            })?;
        }

        let output = child.wait_with_output().map_err(|e| ImportsError::Tool {
            tool: self.tool.clone(),
            message: e.to_string(),
        })?;

        if !output.status.success() {
            return Err(ImportsError::Tool {
                tool: self.tool.clone(),
                message: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(output.stdout)
    }
}
