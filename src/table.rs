//! Table Module
//!
//! 順序付きの名前付き列の集合としてテーブルを表現するモジュール。
//! 不変条件: すべての列は同じ行数を持つ。

use crate::error::SheetToMdError;
use crate::types::CellValue;

/// 名前付きの列
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// 列ヘッダー
    pub name: String,

    /// セル値（行インデックスで整列）
    pub cells: Vec<CellValue>,
}

impl Column {
    /// 新しい列を生成
    pub fn new(name: impl Into<String>, cells: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }
}

/// テーブル
///
/// 列は挿入順を保持します。行はすべての列にまたがる同一インデックスの
/// セルの並びとして表現されます。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    /// 列（順序付き）
    columns: Vec<Column>,
}

impl Table {
    /// 列の集合からテーブルを構築
    ///
    /// # 戻り値
    ///
    /// * `Ok(Table)` - すべての列の行数が一致する場合
    /// * `Err(SheetToMdError::Parse)` - 行数が一致しない列が存在する場合
    pub fn from_columns(columns: Vec<Column>) -> Result<Self, SheetToMdError> {
        if let Some(first) = columns.first() {
            let rows = first.cells.len();
            for column in &columns {
                if column.cells.len() != rows {
                    return Err(SheetToMdError::Parse(format!(
                        "column '{}' has {} rows, expected {}",
                        column.name,
                        column.cells.len(),
                        rows
                    )));
                }
            }
        }
        Ok(Self { columns })
    }

    /// 行数検証をスキップしてテーブルを構築（クレート内部用）
    ///
    /// 呼び出し側が行数の一致を保証している場合にのみ使用します。
    pub(crate) fn from_columns_unchecked(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// ヘッダーの一覧を取得
    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// 列数を取得
    pub fn col_count(&self) -> usize {
        self.columns.len()
    }

    /// 行数を取得
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.cells.len())
    }

    /// 列への参照を取得
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// 列の可変参照を取得（クレート内部用）
    pub(crate) fn columns_mut(&mut self) -> &mut Vec<Column> {
        &mut self.columns
    }

    /// 列を消費して取り出す（クレート内部用）
    pub(crate) fn into_columns(self) -> Vec<Column> {
        self.columns
    }

    /// 名前で列を取得
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// 行単位のビューを取得（row-major）
    pub fn rows(&self) -> Vec<Vec<&CellValue>> {
        (0..self.row_count())
            .map(|row| self.columns.iter().map(|c| &c.cells[row]).collect())
            .collect()
    }

    /// 先頭`n`行のコピーを取得
    ///
    /// ターミナルプレビューで使用します。`n`が行数以上の場合は
    /// テーブル全体のコピーになります。
    pub fn head(&self, n: usize) -> Table {
        let columns = self
            .columns
            .iter()
            .map(|c| Column {
                name: c.name.clone(),
                cells: c.cells.iter().take(n).cloned().collect(),
            })
            .collect();
        Self { columns }
    }
}
