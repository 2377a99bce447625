//! Table Cleaner Module
//!
//! パース済みテーブルの正規化処理を提供するモジュール。
//!
//! 処理順序は固定です: 無名列の除去 → 欠損セルの充填 → テキストのtrim。
//! センチネル文字列は前後に空白を持たないことが`ConverterBuilder`で
//! 検証済みのため、充填の後にtrimを行っても結果は変わりません。

use crate::table::Table;
use crate::types::CellValue;

/// テーブルクリーナー
#[derive(Debug, Clone)]
pub(crate) struct TableCleaner {
    /// 欠損セルに代入するセンチネル文字列
    sentinel: String,
}

impl TableCleaner {
    /// 指定されたセンチネルでクリーナーを生成
    pub fn new(sentinel: String) -> Self {
        Self { sentinel }
    }

    /// クリーニングパイプラインを適用
    ///
    /// この操作は冪等です: `clean(clean(t)) == clean(t)`。
    pub fn clean(&self, table: Table) -> Table {
        // 1. 無名列の除去
        let table = self.drop_unnamed_columns(table);
        // 2. 欠損セルの充填
        let table = self.fill_missing(table);
        // 3. テキストセルのtrim
        self.trim_text(table)
    }

    /// ヘッダーが空または空白のみの列を除去
    ///
    /// 残った列は元の順序を保持します。
    pub fn drop_unnamed_columns(&self, table: Table) -> Table {
        let columns = table
            .into_columns()
            .into_iter()
            .filter(|c| !c.name.trim().is_empty())
            .collect();
        Table::from_columns_unchecked(columns)
    }

    /// 欠損セルをセンチネル文字列で置換
    ///
    /// すべての列に一様に適用します。列ごとの型に応じた既定値は
    /// 使用しません。
    pub fn fill_missing(&self, mut table: Table) -> Table {
        for column in table.columns_mut() {
            for cell in &mut column.cells {
                if cell.is_missing() {
                    *cell = CellValue::Text(self.sentinel.clone());
                }
            }
        }
        table
    }

    /// テキストセルの前後空白を除去
    ///
    /// 数値セルは変更しません。
    pub fn trim_text(&self, mut table: Table) -> Table {
        for column in table.columns_mut() {
            for cell in &mut column.cells {
                if let CellValue::Text(s) = cell {
                    let trimmed = s.trim();
                    if trimmed.len() != s.len() {
                        *cell = CellValue::Text(trimmed.to_string());
                    }
                }
            }
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Column;

    fn cleaner() -> TableCleaner {
        TableCleaner::new("No".to_string())
    }

    fn table(columns: Vec<Column>) -> Table {
        Table::from_columns(columns).unwrap()
    }

    #[test]
    fn test_drop_unnamed_columns() {
        let t = table(vec![
            Column::new("Name", vec![CellValue::Text("Alice".to_string())]),
            Column::new("", vec![CellValue::Text("x".to_string())]),
            Column::new("  ", vec![CellValue::Text("y".to_string())]),
            Column::new("Age", vec![CellValue::Number(30.0)]),
        ]);

        let cleaned = cleaner().drop_unnamed_columns(t);
        assert_eq!(cleaned.headers(), vec!["Name", "Age"]);
    }

    #[test]
    fn test_drop_unnamed_keeps_order() {
        let t = table(vec![
            Column::new("C", vec![]),
            Column::new("", vec![]),
            Column::new("A", vec![]),
            Column::new("B", vec![]),
        ]);

        let cleaned = cleaner().drop_unnamed_columns(t);
        assert_eq!(cleaned.headers(), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_fill_missing() {
        let t = table(vec![Column::new(
            "Name",
            vec![CellValue::Missing, CellValue::Text("Bob".to_string())],
        )]);

        let filled = cleaner().fill_missing(t);
        let cells = &filled.column("Name").unwrap().cells;
        assert_eq!(cells[0], CellValue::Text("No".to_string()));
        assert_eq!(cells[1], CellValue::Text("Bob".to_string()));
    }

    #[test]
    fn test_fill_missing_custom_sentinel() {
        let t = table(vec![Column::new("A", vec![CellValue::Missing])]);

        let filled = TableCleaner::new("N/A".to_string()).fill_missing(t);
        assert_eq!(
            filled.column("A").unwrap().cells[0],
            CellValue::Text("N/A".to_string())
        );
    }

    #[test]
    fn test_trim_text() {
        let t = table(vec![Column::new(
            "A",
            vec![
                CellValue::Text("  Alice  ".to_string()),
                CellValue::Number(30.0),
            ],
        )]);

        let trimmed = cleaner().trim_text(t);
        let cells = &trimmed.column("A").unwrap().cells;
        assert_eq!(cells[0], CellValue::Text("Alice".to_string()));
        // 数値セルは変更されない
        assert_eq!(cells[1], CellValue::Number(30.0));
    }

    #[test]
    fn test_trim_text_whitespace_only_becomes_empty() {
        // 空白のみのセルは空文字列になる（センチネルには置換されない）
        let t = table(vec![Column::new(
            "A",
            vec![CellValue::Text("   ".to_string())],
        )]);

        let cleaned = cleaner().clean(t);
        assert_eq!(
            cleaned.column("A").unwrap().cells[0],
            CellValue::Text(String::new())
        );
    }

    #[test]
    fn test_clean_order_and_result() {
        // "Name,Age\nAlice, 30\n,25"相当のテーブル
        let t = table(vec![
            Column::new(
                "Name",
                vec![CellValue::Text("Alice".to_string()), CellValue::Missing],
            ),
            Column::new(
                "Age",
                vec![CellValue::Number(30.0), CellValue::Number(25.0)],
            ),
        ]);

        let cleaned = cleaner().clean(t);
        let name = &cleaned.column("Name").unwrap().cells;
        let age = &cleaned.column("Age").unwrap().cells;
        assert_eq!(name[0].render(), "Alice");
        assert_eq!(name[1].render(), "No");
        assert_eq!(age[0].render(), "30");
        assert_eq!(age[1].render(), "25");
    }

    #[test]
    fn test_clean_is_idempotent() {
        let t = table(vec![
            Column::new(
                "Name",
                vec![
                    CellValue::Text(" Alice ".to_string()),
                    CellValue::Missing,
                ],
            ),
            Column::new("", vec![CellValue::Missing, CellValue::Missing]),
        ]);

        let once = cleaner().clean(t);
        let twice = cleaner().clean(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_clean_leaves_no_missing_cells() {
        let t = table(vec![Column::new(
            "A",
            vec![CellValue::Missing, CellValue::Text("x".to_string())],
        )]);

        let cleaned = cleaner().clean(t);
        for column in cleaned.columns() {
            for cell in &column.cells {
                assert!(!cell.is_missing());
            }
        }
    }
}
