//! # Foreign-Input Sanitizer
//!
//! Drawing-recognition responses (and any other loosely-typed source) arrive
//! as free-form JSON that has not been through the form layer. This module
//! normalizes such a document into a [`ScaffoldConfig`] the engine can
//! consume, classifying every problem on the way:
//!
//! - **errors** — the extraction is unusable (wrong types, negative counts,
//!   nothing recognized at all); processing should stop;
//! - **warnings** — a value is suspicious but usable (implausibly large span
//!   counts usually mean the recognizer read a building dimension); the value
//!   is kept and the caller decides whether to surface it.
//!
//! Inch-series dimensions (1829/1524/1219/914/610 mm) are mapped onto the
//! standard metric families before field checks run, so a recognizer that
//! reports catalog inch sizes still lands on the four allowed frame widths.
//!
//! The engine itself never sees rejected data: callers are expected to stop
//! on a non-empty error list.

use serde_json::Value;

use crate::config::{FrameWidth, ScaffoldConfig};

/// Sanitization outcome: the classified problem lists plus a configuration
/// built from defaults with every surviving field overlaid.
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizeOutcome {
    /// Hard problems; a non-empty list means the document must not be used
    pub errors: Vec<String>,
    /// Suspicious but usable values, kept as-is
    pub warnings: Vec<String>,
    /// Defaults overlaid with the sanitized fields
    pub config: ScaffoldConfig,
}

impl SanitizeOutcome {
    /// Whether the document survived without hard errors
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Canonical span keys with their inch-series aliases
const SPAN_KEYS: [(&str, &str); 5] = [
    ("span600", "span610"),
    ("span900", "span914"),
    ("span1200", "span1219"),
    ("span1500", "span1524"),
    ("span1800", "span1829"),
];

/// Inch-series alias for a standard frame width, if one exists
fn width_alias(width: u32) -> Option<&'static str> {
    match width {
        600 => Some("610"),
        900 => Some("914"),
        1200 => Some("1219"),
        _ => None,
    }
}

/// Sanitize a loosely-typed extraction document.
pub fn sanitize_extracted(raw: &Value) -> SanitizeOutcome {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut config = ScaffoldConfig::default();

    // --- span counts ---
    let mut span_values = [0u32; 5];
    for (i, (key, alias)) in SPAN_KEYS.iter().enumerate() {
        let value = raw.get(*key).or_else(|| raw.get(*alias)).cloned().unwrap_or(Value::Null);
        span_values[i] = match value.as_i64() {
            None => {
                errors.push(format!("{}が整数ではありません（値: {}）", key, value));
                0
            }
            Some(v) if v < 0 => {
                errors.push(format!("{}が負数です（値: {}）", key, v));
                0
            }
            Some(v) => {
                if v > 100 {
                    warnings.push(format!(
                        "{}が異常に大きい値です（値: {}）- 建物寸法と誤認している可能性",
                        key, v
                    ));
                }
                v as u32
            }
        };
    }
    config.span600 = span_values[0];
    config.span900 = span_values[1];
    config.span1200 = span_values[2];
    config.span1500 = span_values[3];
    config.span1800 = span_values[4];

    // --- level count ---
    let level_value = raw.get("levelCount").cloned().unwrap_or(Value::Null);
    config.level_count = match level_value.as_i64() {
        None => {
            errors.push(format!("levelCountが整数ではありません（値: {}）", level_value));
            3
        }
        Some(v) if v < 1 => {
            errors.push(format!("levelCountが1未満です（値: {}）", v));
            3
        }
        Some(v) => {
            if v > 50 {
                warnings.push(format!("levelCountが異常に大きい値です（値: {}）", v));
            }
            v as u32
        }
    };

    // --- frame columns ---
    match raw.get("frameCols") {
        Some(Value::Object(cols_raw)) => {
            for frame_width in FrameWidth::ALL {
                let width = frame_width.mm();
                let value = cols_raw
                    .get(&width.to_string())
                    .or_else(|| width_alias(width).and_then(|alias| cols_raw.get(alias)))
                    .cloned()
                    .unwrap_or(Value::Null);
                let count = match value.as_i64() {
                    None => {
                        warnings.push(format!(
                            "frameCols.{}が整数ではありません（値: {}）- 0として扱います",
                            width, value
                        ));
                        0
                    }
                    Some(v) if v < 0 => {
                        warnings.push(format!(
                            "frameCols.{}が負数です（値: {}）- 0として扱います",
                            width, v
                        ));
                        0
                    }
                    Some(v) => {
                        if v > 20 {
                            warnings
                                .push(format!("frameCols.{}が異常に大きい値です（値: {}）", width, v));
                        }
                        v as u32
                    }
                };
                config.frame_cols.insert(frame_width, count);
            }
        }
        _ => {
            errors.push("frameColsがオブジェクトではありません".to_string());
        }
    }

    // --- plausibility ---
    let span_total: u32 = span_values.iter().sum();
    let col_total = config.face_col_total();
    if span_total == 0 {
        warnings.push(
            "全スパン数が0です - 図面からスパン情報を読み取れなかった可能性があります".to_string(),
        );
    }
    if col_total == 0 {
        warnings.push(
            "全枠列数が0です - 図面から枠方向の情報を読み取れなかった可能性があります".to_string(),
        );
    }
    if span_total == 0 && col_total == 0 {
        errors.push("スパンと枠方向の両方が0です - AI解析が失敗した可能性が高いです".to_string());
    }

    SanitizeOutcome { errors, warnings, config }
}
