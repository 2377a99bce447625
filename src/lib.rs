//! gsheet2md - Google Sheets CSV fetcher and Markdown table converter
//!
//! 公開設定されたGoogleスプレッドシートをCSVとして取得し、クリーニング
//! した上でMarkdownテーブルとしてローカルファイルに書き出すための
//! クレート。設定（シートID・ワークシートgid・出力先パス）はユーザー
//! ごとの固定パスに永続化され、実行のたびに再利用されます。
//!
//! パイプラインは 取得 → パース → クリーニング → 出力 → 書き込み の
//! 一方向です。リトライ・キャッシュ・スケジューラは持ちません。
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use gsheet2md::{export_url, ConverterBuilder, SheetFetcher};
//!
//! fn main() -> Result<(), gsheet2md::SheetToMdError> {
//!     // Create a converter with default settings
//!     let converter = ConverterBuilder::new().build()?;
//!
//!     // Fetch the published sheet as CSV
//!     let fetcher = SheetFetcher::new()?;
//!     let url = export_url("YOUR_SHEET_ID", None);
//!     let csv = fetcher.fetch_csv(&url)?;
//!
//!     // Convert CSV to Markdown
//!     let markdown = converter.convert_csv(&csv)?;
//!     println!("{}", markdown);
//!
//!     Ok(())
//! }
//! ```
//!
//! # In-memory conversion
//!
//! ネットワークを介さず、手元のCSVテキストを直接変換することもできます:
//!
//! ```rust
//! use gsheet2md::ConverterBuilder;
//!
//! # fn main() -> Result<(), gsheet2md::SheetToMdError> {
//! let converter = ConverterBuilder::new().build()?;
//! let markdown = converter.convert_csv("Name,Age\nAlice,30\n")?;
//! assert!(markdown.contains("| Alice |"));
//! # Ok(())
//! # }
//! ```
//!
//! # Custom Configuration
//!
//! ```rust
//! use gsheet2md::{ConverterBuilder, RaggedRowPolicy};
//!
//! # fn main() -> Result<(), gsheet2md::SheetToMdError> {
//! let converter = ConverterBuilder::new()
//!     .with_sentinel("N/A")                           // 欠損セルの表示
//!     .with_ragged_row_policy(RaggedRowPolicy::Reject) // 幅の不一致を拒否
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Persisted configuration
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use gsheet2md::{ConfigStore, SheetConfig};
//!
//! # fn main() -> Result<(), gsheet2md::SheetToMdError> {
//! let store = ConfigStore::default_location()?;
//! store.save(&SheetConfig {
//!     sheet_id: "YOUR_SHEET_ID".to_string(),
//!     out: PathBuf::from("/home/user/notes/table.md"),
//!     gid: None,
//! })?;
//! let config = store.load()?;
//! # Ok(())
//! # }
//! ```

mod api;
mod builder;
mod cleaner;
mod config;
mod error;
mod fetch;
mod parser;
mod render;
mod table;
mod types;
mod writer;

// 公開API
pub use api::RaggedRowPolicy;
pub use builder::{Converter, ConverterBuilder, DEFAULT_SENTINEL};
pub use config::{ConfigStore, SheetConfig};
pub use error::SheetToMdError;
pub use fetch::{export_url, SheetFetcher};
pub use table::{Column, Table};
pub use types::CellValue;
pub use writer::write_markdown;
