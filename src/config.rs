//! Config Store Module
//!
//! シートID・出力先パス・ワークシートgidからなる設定レコードを、
//! ユーザーごとの固定パスにJSONとして永続化するモジュール。
//!
//! ロックは行いません（シングルユーザー・シングルプロセス前提、
//! 同時書き込みは後勝ち）。

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::SheetToMdError;

/// 永続化される設定レコード
///
/// `init`コマンドで作成され、`fetch` / `config`コマンドで読み取られ、
/// `reset`コマンドで削除されます。`init`のたびに全体が上書きされます
/// （部分マージなし）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetConfig {
    /// GoogleスプレッドシートのID
    pub sheet_id: String,

    /// 出力先Markdownファイルのパス（絶対パス）
    pub out: PathBuf,

    /// ワークシートgid（省略可）
    pub gid: Option<String>,
}

impl SheetConfig {
    /// 整形済みJSON文字列に変換
    ///
    /// `config`コマンドの表示と保存ファイルの内容の両方で使用します。
    pub fn to_pretty_json(&self) -> Result<String, SheetToMdError> {
        serde_json::to_string_pretty(self).map_err(SheetToMdError::ConfigCorrupt)
    }
}

/// 設定ストア
///
/// 1つの固定パスに対するload / save / delete操作を提供します。
/// パスはプロセス起動時に一度だけ解決し、以後は引数として引き回します。
#[derive(Debug, Clone)]
pub struct ConfigStore {
    /// 設定ファイルのパス
    path: PathBuf,
}

impl ConfigStore {
    /// 指定パスのストアを生成
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// ユーザーごとの既定の設定ファイルパスを持つストアを生成
    ///
    /// パスは`<OSごとの設定ディレクトリ>/gsheet2md/config.json`です。
    /// 設定ディレクトリの解決には`directories`クレートを使用します。
    pub fn default_location() -> Result<Self, SheetToMdError> {
        let dirs = ProjectDirs::from("com", "gsheet2md", "gsheet2md").ok_or_else(|| {
            SheetToMdError::Config("could not determine config directory".to_string())
        })?;
        Ok(Self::new(dirs.config_dir().join("config.json")))
    }

    /// 設定ファイルのパスを取得
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 設定レコードを読み込む
    ///
    /// # 戻り値
    ///
    /// * `Ok(SheetConfig)` - 読み込みに成功した場合
    /// * `Err(SheetToMdError::ConfigMissing)` - ファイルが存在しない場合
    /// * `Err(SheetToMdError::ConfigCorrupt)` - ファイルは存在するが
    ///   JSONとしてパースできない、または必須フィールドを欠く場合
    pub fn load(&self) -> Result<SheetConfig, SheetToMdError> {
        if !self.path.exists() {
            return Err(SheetToMdError::ConfigMissing);
        }

        let content = fs::read_to_string(&self.path)?;
        let config = serde_json::from_str(&content).map_err(SheetToMdError::ConfigCorrupt)?;
        debug!("loaded config from {}", self.path.display());
        Ok(config)
    }

    /// 設定レコードを書き込む（全置換）
    ///
    /// 必須フィールドを検証し、親ディレクトリを作成した上で、
    /// レコード全体を書き込みます。既存の内容はすべて置き換えられます。
    ///
    /// # 戻り値
    ///
    /// * `Ok(())` - 書き込みに成功した場合
    /// * `Err(SheetToMdError::Config)` - 必須フィールドが空の場合
    pub fn save(&self, config: &SheetConfig) -> Result<(), SheetToMdError> {
        // 1. 必須フィールドの検証
        if config.sheet_id.trim().is_empty() {
            return Err(SheetToMdError::Config(
                "sheet_id must not be empty".to_string(),
            ));
        }
        if config.out.as_os_str().is_empty() {
            return Err(SheetToMdError::Config(
                "out path must not be empty".to_string(),
            ));
        }

        // 2. 親ディレクトリの作成
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // 3. レコード全体の書き込み
        let content = config.to_pretty_json()?;
        fs::write(&self.path, content)?;
        info!("saved config to {}", self.path.display());
        Ok(())
    }

    /// 設定レコードを削除
    ///
    /// # 戻り値
    ///
    /// * `Ok(true)` - ファイルを削除した場合
    /// * `Ok(false)` - ファイルが元々存在しなかった場合（エラーではない）
    pub fn delete(&self) -> Result<bool, SheetToMdError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            info!("deleted config at {}", self.path.display());
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
