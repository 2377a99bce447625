//! Property Tests for gsheet2md
//!
//! proptest-based checks of the cleaning and rendering invariants over
//! randomly generated CSV inputs.

use gsheet2md::ConverterBuilder;
use proptest::prelude::*;

/// CSV-safe field: no quotes, commas or newlines, so records can be
/// embedded directly without escaping.
fn field_strategy() -> impl Strategy<Value = String> {
    "[ A-Za-z0-9._-]{0,8}"
}

/// Header cell: mix of real names and blank/whitespace-only headers.
fn header_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[A-Za-z][A-Za-z0-9_]{0,6}",
        1 => Just(String::new()),
        1 => Just("  ".to_string()),
    ]
}

prop_compose! {
    /// Well-formed CSV text: one header record plus zero or more data
    /// records, none wider than the header. The first header is always
    /// named so the header line can never be skipped as blank.
    fn csv_strategy()(
        first_header in "[A-Za-z][A-Za-z0-9_]{0,6}",
        other_headers in prop::collection::vec(header_strategy(), 0..4),
        rows in prop::collection::vec(
            prop::collection::vec(field_strategy(), 0..5),
            0..6,
        ),
    ) -> String {
        let mut headers = vec![first_header];
        headers.extend(other_headers);

        let width = headers.len();
        let mut text = headers.join(",");
        text.push('\n');
        for mut row in rows {
            row.truncate(width);
            text.push_str(&row.join(","));
            text.push('\n');
        }
        text
    }
}

proptest! {
    #[test]
    fn prop_clean_is_idempotent(csv in csv_strategy()) {
        let converter = ConverterBuilder::new().build().unwrap();
        let table = converter.parse_csv(&csv).unwrap();

        let once = converter.clean_table(table);
        let twice = converter.clean_table(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_no_missing_cells_after_clean(csv in csv_strategy()) {
        let converter = ConverterBuilder::new().build().unwrap();
        let table = converter.clean_table(converter.parse_csv(&csv).unwrap());

        for column in table.columns() {
            for cell in &column.cells {
                prop_assert!(!cell.is_missing());
            }
        }
    }

    #[test]
    fn prop_unnamed_columns_absent_after_clean(csv in csv_strategy()) {
        let converter = ConverterBuilder::new().build().unwrap();
        let table = converter.clean_table(converter.parse_csv(&csv).unwrap());

        for header in table.headers() {
            prop_assert!(!header.trim().is_empty());
        }
    }

    #[test]
    fn prop_render_is_deterministic(csv in csv_strategy()) {
        let converter = ConverterBuilder::new().build().unwrap();
        let first = converter.convert_csv(&csv).unwrap();
        let second = converter.convert_csv(&csv).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_render_shape(csv in csv_strategy()) {
        let converter = ConverterBuilder::new().build().unwrap();
        let table = converter.clean_table(converter.parse_csv(&csv).unwrap());
        let markdown = converter.render_markdown(&table).unwrap();

        if table.col_count() == 0 {
            prop_assert_eq!(markdown, "");
        } else {
            // Header line + separator line + one line per data row,
            // each framed by pipes. Fields cannot contain newlines here.
            let lines: Vec<&str> = markdown.lines().collect();
            prop_assert_eq!(lines.len(), table.row_count() + 2);
            for line in lines {
                prop_assert!(line.starts_with('|'));
                prop_assert!(line.ends_with('|'));
            }
        }
    }
}
