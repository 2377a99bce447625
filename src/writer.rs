//! File Writer Module
//!
//! レンダリング済みMarkdownを出力先パスへ書き込むモジュール。

use std::fs;
use std::path::Path;

use log::info;

use crate::error::SheetToMdError;

/// 内容をファイルへ書き込む
///
/// 親ディレクトリが存在しない場合は再帰的に作成し、既存のファイル
/// 内容を完全に置き換えます。アトミックな書き込みは保証しません。
/// 書き込み途中で中断された場合、ファイルは部分的に上書きされた
/// 状態になり得ます。
///
/// # 戻り値
///
/// * `Ok(())` - 書き込みに成功した場合
/// * `Err(SheetToMdError::Write)` - ディレクトリ作成または書き込みに
///   失敗した場合（試行したパスを含む）
pub fn write_markdown(path: &Path, content: &str) -> Result<(), SheetToMdError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| SheetToMdError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }

    fs::write(path, content).map_err(|source| SheetToMdError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.md");

        write_markdown(&path, "| A |\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "| A |\n");
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deep").join("out.md");

        write_markdown(&path, "content").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_write_replaces_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.md");

        write_markdown(&path, "first version with more text").unwrap();
        write_markdown(&path, "second").unwrap();

        // 前の内容は一切残らない
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_relative_path_without_parent() {
        let dir = TempDir::new().unwrap();
        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();

        let result = write_markdown(Path::new("bare.md"), "x");
        std::env::set_current_dir(previous).unwrap();
        result.unwrap();
    }

    #[test]
    fn test_write_error_carries_path() {
        let dir = TempDir::new().unwrap();
        // ディレクトリ自体を出力先に指定して書き込みを失敗させる
        let result = write_markdown(dir.path(), "x");

        match result {
            Err(SheetToMdError::Write { path, .. }) => {
                assert_eq!(path, dir.path());
            }
            _ => panic!("Expected Write error"),
        }
    }
}
