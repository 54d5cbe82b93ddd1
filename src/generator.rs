//! 生成パイプラインのメイン処理モジュール
//!
//! このモジュールは、検証 → 置換 → 集約 → 後処理という
//! 生成パイプライン全体を管理します。各呼び出しは入力から出力への
//! 純粋な関数であり、呼び出しをまたいで状態は残りません。

use log::{debug, info};

use crate::aggregate::Aggregator;
use crate::bindings::TypeSet;
use crate::error::{BindingError, MonogoResult};
use crate::postprocess::{add_imports, change_package, BuiltinNormalizer, ImportNormalizer};
use crate::validate::Validator;

/// 生成パイプラインのオプション
#[derive(Debug, Default)]
pub struct GenerateOptions {
    /// 出力のパッケージ名を差し替える（`None`ならテンプレートのまま）
    pub pkg_name: Option<String>,
    /// package句直後に注入する追加インポートパス
    pub import_paths: Vec<String>,
    /// このタグのビルドタグ行を出力から除去する
    pub strip_tag: Option<String>,
}

/// 生成パイプライン
pub struct Generator {
    options: GenerateOptions,
    normalizer: Box<dyn ImportNormalizer>,
}

impl Generator {
    /// 組み込みの整形実装を使うジェネレータを作成
    pub fn new(options: GenerateOptions) -> Self {
        Self::with_normalizer(options, Box::new(BuiltinNormalizer::new()))
    }

    /// 整形コラボレータを指定してジェネレータを作成
    pub fn with_normalizer(options: GenerateOptions, normalizer: Box<dyn ImportNormalizer>) -> Self {
        Self {
            options,
            normalizer,
        }
    }

    /// テンプレートを`TypeSet`の列で特殊化し、最終的なソースを生成する
    ///
    /// いずれかの`TypeSet`で未束縛のプレースホルダが見つかった場合、
    /// リクエスト全体が失敗し、部分的な出力は一切生成されない。
    pub fn generate(
        &self,
        filename: &str,
        template: &str,
        typesets: &[TypeSet],
    ) -> MonogoResult<Vec<u8>> {
        if typesets.is_empty() {
            return Err(BindingError::EmptyTypeSet.into());
        }

        // 1. 検証：構造チェックとプレースホルダの束縛網羅性
        info!("validating template {}", filename);
        let mut validator = Validator::new(template)?;
        for typeset in typesets {
            validator.validate(typeset)?;
        }

        // 2. 置換と集約
        info!("generating {} specialization(s)", typesets.len());
        let aggregator = Aggregator::new(self.options.strip_tag.as_deref());
        let mut output = aggregator.aggregate(template, typesets);

        // 3. 後処理：パッケージ名差し替えと追加インポート
        if let Some(pkg_name) = &self.options.pkg_name {
            debug!("renaming package to {}", pkg_name);
            output = change_package(&output, pkg_name);
        }
        if !self.options.import_paths.is_empty() {
            debug!("injecting {} import path(s)", self.options.import_paths.len());
            output = add_imports(&output, &self.options.import_paths);
        }

        // 4. 外部コラボレータによるインポート整形
        let normalized = self.normalizer.normalize(filename, output.as_bytes())?;
        Ok(normalized)
    }
}
