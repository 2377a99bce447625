//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use std::path::PathBuf;

use thiserror::Error;

/// gsheet2mdクレート全体で使用するエラー型
///
/// このエラー型は、設定の読み書き、シートの取得、CSVの解析、
/// Markdownの書き出し処理中に発生するすべてのエラーを統一的に扱うために
/// 使用されます。
///
/// # エラーの種類
///
/// - `ConfigMissing`: 設定ファイルが存在しない（`init`未実行）
/// - `ConfigCorrupt`: 設定ファイルは存在するがパースできない
/// - `Fetch` / `FetchStatus`: HTTP通信の失敗
/// - `Parse`: レスポンス本文が有効なCSVではない
/// - `Config`: 設定値・オプションの検証に失敗
/// - `Io`: I/O操作中に発生したエラー
/// - `Write`: 出力ファイルの書き込みに失敗
///
/// いずれのエラーも当該コマンド実行に対して終端的です。リトライや
/// ローカルでの回復は行いません。
///
/// # 使用例
///
/// ```rust,no_run
/// use gsheet2md::SheetToMdError;
/// use std::fs::File;
///
/// fn read_local_csv(path: &str) -> Result<(), SheetToMdError> {
///     let file = File::open(path)?;  // Ioエラーが自動的に変換される
///     // ... 処理 ...
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum SheetToMdError {
    /// 設定ファイルが存在しない
    ///
    /// `fetch`や`config`コマンドが、`init`で保存された設定を
    /// 見つけられなかった場合に使用されます。
    #[error("no config found; run: gsheet2md init --sheet-id <ID> --out <path>")]
    ConfigMissing,

    /// 設定ファイルは存在するがパースできない
    ///
    /// 固定パスのJSONレコードが壊れている、または必須フィールドを
    /// 欠いている場合に使用されます。
    #[error("config file is corrupt: {0}")]
    ConfigCorrupt(#[source] serde_json::Error),

    /// HTTP通信中に発生したエラー
    ///
    /// 接続失敗、タイムアウト、本文の読み取り失敗などの
    /// トランスポート層のエラーです。
    ///
    /// `#[from]`属性により、`reqwest::Error`から自動的に変換されます。
    #[error("failed to fetch sheet: {0}")]
    Fetch(#[from] reqwest::Error),

    /// HTTPステータスが成功（2xx）ではなかった
    ///
    /// シートが公開されていない場合や、存在しないシートIDを
    /// 指定した場合に発生します。
    #[error("fetch failed with HTTP {status} for {url}")]
    FetchStatus {
        /// レスポンスのHTTPステータスコード
        status: u16,
        /// リクエストしたエクスポートURL
        url: String,
    },

    /// CSVの解析に失敗
    ///
    /// ヘッダー行が存在しない、レコードの幅がヘッダーと一致しない
    /// （`RaggedRowPolicy::Reject`指定時）、レコードがヘッダーより長い、
    /// などの場合に発生します。
    #[error("failed to parse CSV: {0}")]
    Parse(String),

    /// 設定値の検証に失敗したエラー
    ///
    /// `ConverterBuilder::build()`時の検証や、`init`コマンドの
    /// 引数検証に失敗した場合に発生します。
    ///
    /// # 例
    ///
    /// ```rust
    /// use gsheet2md::{ConverterBuilder, SheetToMdError};
    ///
    /// let result = ConverterBuilder::new()
    ///     .with_sentinel("")  // 空のセンチネルは無効
    ///     .build();
    ///
    /// match result {
    ///     Err(SheetToMdError::Config(msg)) => {
    ///         println!("設定エラー: {}", msg);
    ///     }
    ///     _ => {}
    /// }
    /// ```
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O操作中に発生したエラー
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 出力ファイルの書き込みに失敗
    ///
    /// 書き込み先パスをコンテキストとして保持します。権限不足や
    /// ディスク容量不足が主な原因です。
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// 書き込みを試みたパス
        path: PathBuf,
        /// 元となったI/Oエラー
        source: std::io::Error,
    },
}
