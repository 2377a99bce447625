//! Sheet Fetcher Module
//!
//! スプレッドシートのCSVエクスポートURLの構築と、HTTP経由での取得を
//! 提供するモジュール。
//!
//! リトライは行いません。1回の取得失敗でコマンド全体がエラー終了します。

use std::time::Duration;

use log::{debug, info};

use crate::api::RaggedRowPolicy;
use crate::error::SheetToMdError;
use crate::table::Table;

/// HTTPリクエストのタイムアウト
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// CSVエクスポートURLを構築
///
/// `https://docs.google.com/spreadsheets/d/<sheet_id>/export?format=csv`
/// に、`gid`が指定されている場合のみ`&gid=<gid>`を付加します。
///
/// `sheet_id`の形式は検証しません。不正なIDはそのままURLになり、
/// 取得時にHTTPエラーとなります。
///
/// # 使用例
///
/// ```rust
/// use gsheet2md::export_url;
///
/// let url = export_url("ABC123", Some("42"));
/// assert_eq!(
///     url,
///     "https://docs.google.com/spreadsheets/d/ABC123/export?format=csv&gid=42"
/// );
/// ```
pub fn export_url(sheet_id: &str, gid: Option<&str>) -> String {
    let mut url = format!(
        "https://docs.google.com/spreadsheets/d/{}/export?format=csv",
        sheet_id
    );
    if let Some(gid) = gid {
        url.push_str("&gid=");
        url.push_str(gid);
    }
    debug!("export url: {}", url);
    url
}

/// シートフェッチャー
///
/// エクスポートURLへのブロッキングGETリクエストを発行します。
pub struct SheetFetcher {
    /// HTTPクライアント
    client: reqwest::blocking::Client,
}

impl SheetFetcher {
    /// フェッチャーを生成
    ///
    /// タイムアウト30秒のブロッキングHTTPクライアントを構築します。
    pub fn new() -> Result<Self, SheetToMdError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(concat!("gsheet2md/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// URLへGETリクエストを発行し、本文をCSVテキストとして返す
    ///
    /// # 戻り値
    ///
    /// * `Ok(String)` - レスポンス本文
    /// * `Err(SheetToMdError::Fetch)` - トランスポート層の失敗
    /// * `Err(SheetToMdError::FetchStatus)` - ステータスが2xx以外
    pub fn fetch_csv(&self, url: &str) -> Result<String, SheetToMdError> {
        info!("GET {}", url);
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(SheetToMdError::FetchStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text()?;
        debug!("fetched {} bytes", body.len());
        Ok(body)
    }

    /// CSVを取得して`Table`にパース
    ///
    /// 取得とパースのみを行い、クリーニングは適用しません。
    pub fn fetch_table(
        &self,
        url: &str,
        policy: RaggedRowPolicy,
    ) -> Result<Table, SheetToMdError> {
        let body = self.fetch_csv(url)?;
        crate::parser::parse_table(&body, policy)
    }
}
