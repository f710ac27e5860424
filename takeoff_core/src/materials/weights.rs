//! Unit Weight Dictionary
//!
//! Static kg-per-unit weights for every standard catalog name, looked up by
//! the aggregator when it turns accumulated quantities into bill lines.
//! Names missing from the table (a non-standard custom stage height, for
//! example) resolve to 0.0: the quantity still appears on the bill, it just
//! contributes nothing to the transport weight.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// (catalog name, unit weight kg)
const WEIGHT_TABLE: &[(&str, f64)] = &[
    // Ground boards
    ("敷板（4m）", 16.0),
    ("敷板（3m）", 12.0),
    ("敷板（2m）", 8.0),
    // Jack bases / taiko spacers
    ("ジャッキベース（20）", 3.4),
    ("ジャッキベース（40）", 5.0),
    ("タイコ（40）", 2.7),
    ("タイコ（80）", 4.9),
    // Main frames, width/stage height
    ("建枠（450/1700）", 9.4),
    ("建枠（600/1700）", 10.9),
    ("建枠（900/1700）", 13.1),
    ("建枠（1200/1700）", 14.9),
    ("建枠（450/1200）", 7.6),
    ("建枠（600/1200）", 8.8),
    ("建枠（900/1200）", 10.4),
    ("建枠（1200/1200）", 12.0),
    ("建枠（450/900）", 6.2),
    ("建枠（600/900）", 7.2),
    ("建枠（900/900）", 8.6),
    ("建枠（1200/900）", 9.8),
    // Diagonal braces, stage height/span
    ("ブレス（1700/600）", 1.9),
    ("ブレス（1700/900）", 2.1),
    ("ブレス（1700/1200）", 2.4),
    ("ブレス（1700/1500）", 2.7),
    ("ブレス（1700/1800）", 3.0),
    ("ブレス（1200/600）", 1.6),
    ("ブレス（1200/900）", 1.8),
    ("ブレス（1200/1200）", 2.0),
    ("ブレス（1200/1500）", 2.3),
    ("ブレス（1200/1800）", 2.6),
    ("ブレス（900/600）", 1.4),
    ("ブレス（900/900）", 1.6),
    ("ブレス（900/1200）", 1.8),
    ("ブレス（900/1500）", 2.0),
    ("ブレス（900/1800）", 2.2),
    // Long-side lower rails
    ("長手下桟（600）", 1.3),
    ("長手下桟（900）", 1.7),
    ("長手下桟（1200）", 2.1),
    ("長手下桟（1500）", 2.5),
    ("長手下桟（1800）", 2.9),
    // End-wall handrails / toeboards, by frame width
    ("妻側手すり（450）", 1.4),
    ("妻側手すり（600）", 1.7),
    ("妻側手すり（900）", 2.2),
    ("妻側手すり（1200）", 2.8),
    ("妻側巾木（450）", 1.2),
    ("妻側巾木（600）", 1.5),
    ("妻側巾木（900）", 2.1),
    ("妻側巾木（1200）", 2.6),
    // Anti-slip deck panels, deck width code/span
    ("アンチ（50/600）", 5.4),
    ("アンチ（50/900）", 7.6),
    ("アンチ（50/1200）", 9.9),
    ("アンチ（50/1500）", 12.1),
    ("アンチ（50/1800）", 14.3),
    ("アンチ（40/600）", 4.5),
    ("アンチ（40/900）", 6.3),
    ("アンチ（40/1200）", 8.2),
    ("アンチ（40/1500）", 10.0),
    ("アンチ（40/1800）", 11.8),
    ("アンチ（24/600）", 3.0),
    ("アンチ（24/900）", 4.2),
    ("アンチ（24/1200）", 5.4),
    ("アンチ（24/1500）", 6.6),
    ("アンチ（24/1800）", 7.8),
    // Long-side toeboards
    ("巾木（600）", 1.5),
    ("巾木（900）", 2.1),
    ("巾木（1200）", 2.7),
    ("巾木（1500）", 3.2),
    ("巾木（1800）", 3.8),
    // Stairs
    ("階段", 18.5),
    ("階段部調整用拡幅わく（ST129J）", 7.5),
    // Wall ties by class
    ("KTS16", 1.0),
    ("KTS20", 1.1),
    ("KTS30", 1.3),
    ("KTS45", 1.6),
    ("KTS60", 1.9),
    ("KTS80", 2.3),
    ("KTS100", 2.7),
    // Interlayer protection
    ("層間ネット", 4.5),
    ("層間ネットブラケット", 1.8),
    // Mesh sheets
    ("妻側メッシュシート（450）", 1.0),
    ("妻側メッシュシート（600）", 1.3),
    ("妻側メッシュシート（900）", 1.9),
    ("妻側メッシュシート（1200）", 2.5),
    ("メッシュシート（600）", 1.3),
    ("メッシュシート（900）", 1.9),
    ("メッシュシート（1200）", 2.5),
    ("メッシュシート（1500）", 3.1),
    ("メッシュシート（1800）", 3.7),
];

static WEIGHT_DICT: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| WEIGHT_TABLE.iter().copied().collect());

/// Unit weight in kg for a catalog name; 0.0 for names not in the table.
pub fn unit_weight(name: &str) -> f64 {
    WEIGHT_DICT.get(name).copied().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::MaterialKey;

    #[test]
    fn test_known_weights() {
        assert_eq!(unit_weight("建枠（900/1700）"), 13.1);
        assert_eq!(unit_weight("アンチ（50/1800）"), 14.3);
        assert_eq!(unit_weight("階段"), 18.5);
    }

    #[test]
    fn test_unknown_name_is_weightless() {
        assert_eq!(unit_weight("建枠（900/2500）"), 0.0);
        assert_eq!(unit_weight(""), 0.0);
    }

    #[test]
    fn test_no_duplicate_names_in_table() {
        let mut seen = std::collections::HashSet::new();
        for (name, _) in WEIGHT_TABLE {
            assert!(seen.insert(*name), "duplicate weight entry: {}", name);
        }
    }

    #[test]
    fn test_standard_keys_are_covered() {
        for width in [450, 600, 900, 1200] {
            let frame = MaterialKey::Frame { width, height: 1700 };
            assert!(unit_weight(&frame.name()) > 0.0, "missing {}", frame.name());
        }
        for span in [600, 900, 1200, 1500, 1800] {
            let toeboard = MaterialKey::Toeboard { span };
            assert!(unit_weight(&toeboard.name()) > 0.0, "missing {}", toeboard.name());
        }
    }
}
