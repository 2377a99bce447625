//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

/// 幅が不揃いなレコードの処理方式
///
/// ヘッダー行より短いレコードをどう扱うかを指定します。
/// ヘッダー行より*長い*レコードは、余剰フィールドをどの列にも
/// 帰属させられないため、方式に関わらず常にパースエラーになります。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RaggedRowPolicy {
    /// 不足フィールドを欠損セルとして補完（デフォルト）
    ///
    /// ヘッダーより短いレコードは、欠損セルでヘッダー幅まで
    /// 埋められます。欠損セルは後段のクリーニングでセンチネル文字列に
    /// 置換されます。
    ///
    /// # 出力例
    ///
    /// ```csv
    /// Name,Age
    /// Alice
    /// ```
    ///
    /// ```markdown
    /// | Name  | Age |
    /// |-------|-----|
    /// | Alice | No  |
    /// ```
    PadMissing,

    /// 幅の不一致をエラーとして拒否
    ///
    /// ヘッダーと幅が一致しないレコードを検出した時点で
    /// 変換全体を`Parse`エラーで終了します。
    Reject,
}
