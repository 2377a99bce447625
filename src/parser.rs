//! CSV Parser Module
//!
//! CSVテキストを`Table`へ変換するモジュール。クォート対応・改行耐性の
//! パーサを実装します。
//!
//! # 解析規則
//!
//! - `"`によるクォートと`""`エスケープに対応
//! - LF / CRLF / CR の行末に対応
//! - 空行（単一の空フィールドのみからなる行）はスキップ
//! - 先頭レコードをヘッダー行として扱う
//! - ヘッダーより短いレコードは`RaggedRowPolicy`に従って処理、
//!   長いレコードは常にエラー

use log::debug;

use crate::api::RaggedRowPolicy;
use crate::error::SheetToMdError;
use crate::table::{Column, Table};
use crate::types::CellValue;

/// CSVテキストをレコード（フィールドの列）の並びにパース
///
/// クォートの内側では区切り文字・改行は文字として扱います。閉じられて
/// いないクォートがあっても、読み取れた内容を末尾レコードとして返します。
fn parse_records(text: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if chars.peek() == Some(&'"') {
                        // ""はエスケープされたクォート
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            ',' if !in_quotes => {
                record.push(std::mem::take(&mut field));
            }
            '\r' | '\n' if !in_quotes => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                record.push(std::mem::take(&mut field));
                // 空行はレコードとして扱わない
                if record.len() > 1 || !record[0].is_empty() {
                    records.push(std::mem::take(&mut record));
                } else {
                    record.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // 末尾に改行がない場合の最終レコードをフラッシュ
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }

    records
}

/// CSVテキストを`Table`にパース
///
/// # 引数
///
/// * `text` - CSVテキスト全体
/// * `policy` - 幅が不揃いなレコードの処理方式
///
/// # 戻り値
///
/// * `Ok(Table)` - パースに成功した場合
/// * `Err(SheetToMdError::Parse)` - ヘッダー行が存在しない、
///   レコードがヘッダーより長い、または`Reject`方式で幅が一致しない場合
pub(crate) fn parse_table(text: &str, policy: RaggedRowPolicy) -> Result<Table, SheetToMdError> {
    let mut records = parse_records(text).into_iter();

    // 1. ヘッダー行の取り出し
    let headers = records
        .next()
        .ok_or_else(|| SheetToMdError::Parse("empty CSV input: no header row".to_string()))?;
    let width = headers.len();

    let mut columns: Vec<Column> = headers
        .into_iter()
        .map(|name| Column::new(name, Vec::new()))
        .collect();

    // 2. データレコードの取り込み
    for (index, record) in records.enumerate() {
        // レコード番号は1始まり、ヘッダーを1行目として数える
        let record_no = index + 2;

        if record.len() > width {
            return Err(SheetToMdError::Parse(format!(
                "record {} has {} fields, header has {}",
                record_no,
                record.len(),
                width
            )));
        }
        if record.len() < width && policy == RaggedRowPolicy::Reject {
            return Err(SheetToMdError::Parse(format!(
                "record {} has {} fields, header has {}",
                record_no,
                record.len(),
                width
            )));
        }

        // 3. セルの型付け。不足フィールドは欠損セルとして補完
        for (col, column) in columns.iter_mut().enumerate() {
            match record.get(col) {
                Some(field) => column.cells.push(CellValue::from_field(field)),
                None => column.cells.push(CellValue::Missing),
            }
        }
    }

    let table = Table::from_columns_unchecked(columns);
    debug!(
        "parsed CSV into {} columns x {} rows",
        table.col_count(),
        table.row_count()
    );
    Ok(table)
}
