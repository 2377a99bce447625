//! Markdown Renderer Module
//!
//! クリーニング済みテーブルをMarkdownパイプテーブルとして出力する
//! モジュール。同一のテーブルからは常にバイト単位で同一の出力が
//! 得られます。
//!
//! セル内容に含まれる`|`はエスケープしません（既知の制限）。

use std::io::Write;

use unicode_width::UnicodeWidthStr;

use crate::error::SheetToMdError;
use crate::table::Table;

/// 列の最小表示幅（区切り行の最小幅）
const MIN_COLUMN_WIDTH: usize = 3;

/// テーブルをMarkdownパイプテーブルとして出力
///
/// ヘッダー行、ハイフンの区切り行、データ行の順に出力します。
/// セルは列ごとの最大表示幅まで空白で埋めて左揃えにします。
/// 表示幅は全角文字を2、半角文字を1として計算します。
///
/// # 引数
///
/// * `table` - 出力するテーブル
/// * `writer` - 出力先のライター
///
/// # 戻り値
///
/// * `Ok(())` - 出力に成功した場合
/// * `Err(SheetToMdError)` - 書き込みに失敗した場合
pub(crate) fn render_markdown<W: Write>(
    table: &Table,
    writer: &mut W,
) -> Result<(), SheetToMdError> {
    if table.col_count() == 0 {
        return Ok(());
    }

    // 1. 各セルの表示文字列を確定
    let headers: Vec<String> = table.headers().iter().map(|h| h.to_string()).collect();
    let rows: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|row| row.iter().map(|cell| cell.render()).collect())
        .collect();

    // 2. 列幅の計算
    let widths = column_widths(&headers, &rows);

    // 3. ヘッダー行と区切り行
    write_row(writer, &headers, &widths)?;
    writeln!(writer, "{}", separator(&widths))?;

    // 4. データ行
    for row in &rows {
        write_row(writer, row, &widths)?;
    }

    // 5. フラッシュ
    writer.flush()?;

    Ok(())
}

/// テーブルをMarkdown文字列に変換
pub(crate) fn render_to_string(table: &Table) -> Result<String, SheetToMdError> {
    let mut buffer = Vec::new();
    render_markdown(table, &mut buffer)?;

    let result = String::from_utf8(buffer).map_err(|e| {
        SheetToMdError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })?;

    Ok(result)
}

/// 列ごとの表示幅を計算（内部ヘルパー）
///
/// ヘッダーとすべてのデータ行について表示幅を計算し、列ごとの
/// 最大値を返します。最小幅は3文字です。
fn column_widths(headers: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers
        .iter()
        .map(|h| h.width().max(MIN_COLUMN_WIDTH))
        .collect();

    for row in rows {
        for (col, cell) in row.iter().enumerate() {
            widths[col] = widths[col].max(cell.width());
        }
    }

    widths
}

/// 1行を出力（内部ヘルパー）
///
/// セルの前後にスペースを1つずつ入れ、列幅まで空白で埋めます。
fn write_row<W: Write>(
    writer: &mut W,
    cells: &[String],
    widths: &[usize],
) -> Result<(), SheetToMdError> {
    write!(writer, "|")?;

    for (col, cell) in cells.iter().enumerate() {
        let padding = widths[col].saturating_sub(cell.width());
        write!(writer, " {}{} |", cell, " ".repeat(padding))?;
    }

    writeln!(writer)?;
    Ok(())
}

/// 区切り行を生成（内部ヘルパー）
///
/// セルの前後のスペース（各1文字）を含めた幅のハイフンを"|"で連結します。
fn separator(widths: &[usize]) -> String {
    let mut parts = vec!["|".to_string()];

    for &width in widths {
        parts.push("-".repeat(width + 2));
        parts.push("|".to_string());
    }

    parts.join("")
}
