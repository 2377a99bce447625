//! Builder Module
//!
//! Fluent Builder APIを提供し、`Converter`インスタンスを段階的に構築する。

use crate::api::RaggedRowPolicy;
use crate::cleaner::TableCleaner;
use crate::error::SheetToMdError;
use crate::render;
use crate::table::Table;

/// 欠損セルに代入する既定のセンチネル文字列
pub const DEFAULT_SENTINEL: &str = "No";

/// 変換処理の設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct ConversionConfig {
    /// 欠損セルのセンチネル文字列
    pub sentinel: String,

    /// 幅が不揃いなレコードの処理方式
    pub ragged_row_policy: RaggedRowPolicy,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL.to_string(),
            ragged_row_policy: RaggedRowPolicy::PadMissing,
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// `Converter`インスタンスを段階的に構築するためのビルダーです。
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみを
/// オーバーライドできます。
///
/// # 使用例
///
/// ```rust
/// use gsheet2md::{ConverterBuilder, RaggedRowPolicy};
///
/// # fn main() -> Result<(), gsheet2md::SheetToMdError> {
/// let converter = ConverterBuilder::new()
///     .with_sentinel("N/A")
///     .with_ragged_row_policy(RaggedRowPolicy::Reject)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ConverterBuilder {
    /// 内部設定（構築中）
    config: ConversionConfig,
}

impl Default for ConverterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - センチネル: `"No"`
    /// - 不揃いレコード: 欠損セルで補完（`PadMissing`）
    pub fn new() -> Self {
        Self {
            config: ConversionConfig::default(),
        }
    }

    /// 欠損セルに代入するセンチネル文字列を指定する
    ///
    /// # 引数
    ///
    /// * `sentinel` - センチネル文字列
    ///
    /// # 制約
    ///
    /// * 空文字列であってはならない
    /// * `|`・改行を含んではならない（パイプテーブルをエスケープなしで
    ///   通過できること）
    /// * 前後に空白を含んではならない（trim工程の後段で変化しないこと）
    /// * 制約違反の場合、`build()`時に`SheetToMdError::Config`を返す
    pub fn with_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.config.sentinel = sentinel.into();
        self
    }

    /// 幅が不揃いなレコードの処理方式を指定する
    ///
    /// # 使用例
    ///
    /// ```rust
    /// use gsheet2md::{ConverterBuilder, RaggedRowPolicy};
    ///
    /// let builder = ConverterBuilder::new()
    ///     .with_ragged_row_policy(RaggedRowPolicy::Reject);
    /// ```
    pub fn with_ragged_row_policy(mut self, policy: RaggedRowPolicy) -> Self {
        self.config.ragged_row_policy = policy;
        self
    }

    /// 設定を検証し、`Converter`インスタンスを生成する
    ///
    /// # 戻り値
    ///
    /// * `Ok(Converter)` - 設定が有効な場合
    /// * `Err(SheetToMdError::Config)` - センチネルが制約に違反する場合
    pub fn build(self) -> Result<Converter, SheetToMdError> {
        // 1. センチネルの検証
        let sentinel = &self.config.sentinel;
        if sentinel.is_empty() {
            return Err(SheetToMdError::Config(
                "sentinel must not be empty".to_string(),
            ));
        }
        if sentinel.contains('|') || sentinel.contains('\n') || sentinel.contains('\r') {
            return Err(SheetToMdError::Config(format!(
                "sentinel must not contain '|' or line breaks: {:?}",
                sentinel
            )));
        }
        if sentinel.trim() != sentinel {
            return Err(SheetToMdError::Config(format!(
                "sentinel must not have leading or trailing whitespace: {:?}",
                sentinel
            )));
        }

        // 2. Converterインスタンス生成
        Ok(Converter::new(self.config))
    }
}

/// 変換処理のファサード
///
/// CSVテキストをMarkdownテーブルに変換するためのメインエントリー
/// ポイントです。`ConverterBuilder`を使用して構築された設定に基づいて
/// パース → クリーニング → 出力を実行します。
///
/// # 使用例
///
/// ```rust
/// use gsheet2md::ConverterBuilder;
///
/// # fn main() -> Result<(), gsheet2md::SheetToMdError> {
/// let converter = ConverterBuilder::new().build()?;
/// let markdown = converter.convert_csv("Name,Age\nAlice,30\n")?;
/// assert!(markdown.starts_with("| Name"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Converter {
    /// 変換設定
    config: ConversionConfig,

    /// テーブルクリーナー
    cleaner: TableCleaner,
}

impl Converter {
    pub(crate) fn new(config: ConversionConfig) -> Self {
        Self {
            cleaner: TableCleaner::new(config.sentinel.clone()),
            config,
        }
    }

    /// CSVテキストを`Table`にパース
    ///
    /// クリーニングは適用しません。
    pub fn parse_csv(&self, text: &str) -> Result<Table, SheetToMdError> {
        crate::parser::parse_table(text, self.config.ragged_row_policy)
    }

    /// クリーニングパイプラインを適用
    ///
    /// 無名列の除去 → 欠損セルの充填 → テキストのtrim の順で
    /// 適用します。冪等です。
    pub fn clean_table(&self, table: Table) -> Table {
        self.cleaner.clean(table)
    }

    /// テーブルをMarkdown文字列に変換
    pub fn render_markdown(&self, table: &Table) -> Result<String, SheetToMdError> {
        render::render_to_string(table)
    }

    /// CSVテキストをMarkdown文字列に変換
    ///
    /// # 処理フロー
    ///
    /// 1. CSVのパース
    /// 2. クリーニング
    /// 3. Markdown出力
    pub fn convert_csv(&self, text: &str) -> Result<String, SheetToMdError> {
        let table = self.parse_csv(text)?;
        let table = self.clean_table(table);
        self.render_markdown(&table)
    }
}
