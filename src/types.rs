//! Types Module
//!
//! クレート全体で使用する共通データ型を定義するモジュール。

/// セルの値を表す列挙型
///
/// CSVの各フィールドは取り込み時に型付けされます。暗黙の型強制を
/// 避けるため、判定規則は以下に固定されています。
///
/// - 長さ0のフィールド → `Missing`
/// - trim後の文字列が有限の`f64`としてパースできる → `Number`
/// - それ以外 → `Text`（元の文字列を改変せずに保持）
///
/// 空白のみのフィールドは`Missing`ではなく`Text`です。クリーニングの
/// trim工程で空文字列になりますが、センチネルには置換されません。
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// テキスト
    Text(String),

    /// 数値（f64）
    Number(f64),

    /// 欠損セル
    Missing,
}

impl CellValue {
    /// CSVフィールド文字列から値を生成（取り込み時の型判定）
    pub fn from_field(field: &str) -> Self {
        if field.is_empty() {
            return CellValue::Missing;
        }

        let trimmed = field.trim();
        if !trimmed.is_empty() {
            if let Ok(n) = trimmed.parse::<f64>() {
                // "inf"や"NaN"はf64としてはパースできるが、数値セルとしては扱わない
                if n.is_finite() {
                    return CellValue::Number(n);
                }
            }
        }

        CellValue::Text(field.to_string())
    }

    /// 値が欠損かどうかを判定
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// 表示文字列に変換
    ///
    /// 数値は`f64`の標準表記で出力します（`30.0` → `"30"`）。
    /// 欠損セルは空文字列になります（クリーニング後には存在しません）。
    pub fn render(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Missing => String::new(),
        }
    }
}
