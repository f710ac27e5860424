//! # CSV Export Rendering
//!
//! Renders a calculation result into the delivery-slip CSV shape: UTF-8 BOM
//! for spreadsheet compatibility on Windows, one row per bill line in the
//! contract order, a grand-total row, and an optional free-memo block. These
//! functions only build strings — writing bytes anywhere is the caller's
//! concern.

use chrono::NaiveDate;

use crate::calculations::CalculationResult;

/// Byte-order mark expected by Excel for UTF-8 CSV
pub const CSV_BOM: &str = "\u{feff}";

/// Quote a CSV field, doubling embedded quotes.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Render the bill of materials as CSV text.
///
/// Layout: header, one row per material (name, quantity, unit weight,
/// total weight at 2 decimals), a `🟦 総重量` row carrying only the grand
/// total, and — when `memo` is non-empty — a trailing memo block.
pub fn render_csv(result: &CalculationResult, memo: &str) -> String {
    let mut csv = String::from(CSV_BOM);
    csv.push_str("部材名,数量,単位重量（kg）,合計重量（kg）\n");

    for item in &result.materials {
        csv.push_str(&format!(
            "{},{},{:.2},{:.2}\n",
            quote(&item.name),
            item.quantity,
            item.unit_weight,
            item.total_weight
        ));
    }

    csv.push_str(&format!("{},,,{:.2}\n", quote("🟦 総重量"), result.total_weight));

    if !memo.is_empty() {
        csv.push('\n');
        csv.push_str("\"📝フリーメモ\",,,\n");
        csv.push_str(&format!("{},,,\n", quote(memo)));
    }

    csv
}

/// Export filename for a given date: `yymmdd_枠組足場数量.csv`.
pub fn csv_filename(date: NaiveDate) -> String {
    format!("{}_枠組足場数量.csv", date.format("%y%m%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::calculate;
    use crate::config::{FrameWidth, ScaffoldConfig};

    fn sample_result() -> CalculationResult {
        let mut config = ScaffoldConfig {
            span1800: 10,
            ..ScaffoldConfig::default()
        };
        config.frame_cols.insert(FrameWidth::W900, 2);
        calculate(&config)
    }

    #[test]
    fn test_csv_starts_with_bom_and_header() {
        let csv = render_csv(&sample_result(), "");
        assert!(csv.starts_with(CSV_BOM));
        let first_line = csv.trim_start_matches(CSV_BOM).lines().next().unwrap();
        assert_eq!(first_line, "部材名,数量,単位重量（kg）,合計重量（kg）");
    }

    #[test]
    fn test_rows_follow_bill_order_and_precision() {
        let result = sample_result();
        let csv = render_csv(&result, "");
        let lines: Vec<&str> = csv.trim_start_matches(CSV_BOM).lines().collect();

        // One line per material + header + total row
        assert_eq!(lines.len(), result.materials.len() + 2);

        let first_item = &result.materials[0];
        assert_eq!(
            lines[1],
            format!(
                "\"{}\",{},{:.2},{:.2}",
                first_item.name, first_item.quantity, first_item.unit_weight, first_item.total_weight
            )
        );

        let total_line = lines[lines.len() - 1];
        assert!(total_line.starts_with("\"🟦 総重量\",,,"));
    }

    #[test]
    fn test_memo_block_escapes_quotes() {
        let csv = render_csv(&sample_result(), "搬入は\"朝一\"指定");
        assert!(csv.contains("\"📝フリーメモ\",,,\n"));
        assert!(csv.contains("\"搬入は\"\"朝一\"\"指定\",,,\n"));

        let without = render_csv(&sample_result(), "");
        assert!(!without.contains("フリーメモ"));
    }

    #[test]
    fn test_filename_uses_two_digit_year() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(csv_filename(date), "260807_枠組足場数量.csv");
    }
}
