//! # Material Keys and Bill Items
//!
//! Every quantity the engine produces is accumulated under a [`MaterialKey`]:
//! a structured tag carrying the material category plus its numeric size
//! fields. Keys render to the canonical catalog names used on delivery slips
//! (e.g. `建枠（900/1700）`), and they define the fixed output ordering of the
//! bill of materials.
//!
//! Using a tagged key instead of the display string keeps rule branches that
//! hit the same material summing into one bucket (stair widening adds to the
//! same 1200 mm frame bucket the regular frame rule fills) while the rendered
//! name stays a projection, not an identity.
//!
//! ## Ordering
//!
//! The bill is ordered by category rank — floor plates, jack bases, taiko,
//! frames, braces, rails, end-wall accessories, panels, toeboards, stairs,
//! wall ties, nets, sheets — then within a category by the size number
//! embedded in the name, ascending (floor plates are the one descending
//! family: 4 m, 3 m, 2 m). This order is an output contract consumed verbatim
//! by exporters.

pub mod weights;

pub use weights::unit_weight;

use serde::{Deserialize, Serialize};

/// Structured identity of one material line in the bill.
///
/// Variants are declared in category-rank order; size fields are in mm unless
/// noted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MaterialKey {
    /// Ground board, 4/3/2 m
    FloorPlate { meters: u32 },
    /// Jack base, SB20/SB40
    JackBase { size: u32 },
    /// Taiko spacer base, 40/80
    Taiko { size: u32 },
    /// Main frame, width × stage height
    Frame { width: u32, height: u32 },
    /// Diagonal brace, stage height × span length
    Brace { height: u32, span: u32 },
    /// Long-side lower rail per span length
    Handrail { span: u32 },
    /// End-wall handrail per frame width
    TsumaHandrail { width: u32 },
    /// End-wall toeboard per frame width
    TsumaToeboard { width: u32 },
    /// Anti-slip deck panel: deck width code (24/40/50 cm) × span length
    Anti { deck: u32, span: u32 },
    /// Long-side toeboard per span length
    Toeboard { span: u32 },
    /// Stair unit
    Stair,
    /// Stair-bay widening frame (ST129J)
    StairWideningFrame,
    /// Wall tie, class size 16..100
    WallTie { size: u32 },
    /// Interlayer protection net
    LayerNet,
    /// Interlayer net mounting bracket
    LayerNetBracket,
    /// End-wall mesh sheet per frame width
    TsumaSheet { width: u32 },
    /// Perimeter mesh sheet per span length
    PerimeterSheet { span: u32 },
}

impl MaterialKey {
    /// Canonical catalog name, as printed on the bill and keyed in the
    /// weight dictionary.
    pub fn name(&self) -> String {
        match self {
            MaterialKey::FloorPlate { meters } => format!("敷板（{}m）", meters),
            MaterialKey::JackBase { size } => format!("ジャッキベース（{}）", size),
            MaterialKey::Taiko { size } => format!("タイコ（{}）", size),
            MaterialKey::Frame { width, height } => format!("建枠（{}/{}）", width, height),
            MaterialKey::Brace { height, span } => format!("ブレス（{}/{}）", height, span),
            MaterialKey::Handrail { span } => format!("長手下桟（{}）", span),
            MaterialKey::TsumaHandrail { width } => format!("妻側手すり（{}）", width),
            MaterialKey::TsumaToeboard { width } => format!("妻側巾木（{}）", width),
            MaterialKey::Anti { deck, span } => format!("アンチ（{}/{}）", deck, span),
            MaterialKey::Toeboard { span } => format!("巾木（{}）", span),
            MaterialKey::Stair => "階段".to_string(),
            MaterialKey::StairWideningFrame => "階段部調整用拡幅わく（ST129J）".to_string(),
            MaterialKey::WallTie { size } => format!("KTS{}", size),
            MaterialKey::LayerNet => "層間ネット".to_string(),
            MaterialKey::LayerNetBracket => "層間ネットブラケット".to_string(),
            MaterialKey::TsumaSheet { width } => format!("妻側メッシュシート（{}）", width),
            MaterialKey::PerimeterSheet { span } => format!("メッシュシート（{}）", span),
        }
    }

    /// Fixed category rank for output ordering
    pub fn category_rank(&self) -> u8 {
        match self {
            MaterialKey::FloorPlate { .. } => 0,
            MaterialKey::JackBase { .. } => 1,
            MaterialKey::Taiko { .. } => 2,
            MaterialKey::Frame { .. } => 3,
            MaterialKey::Brace { .. } => 4,
            MaterialKey::Handrail { .. } => 5,
            MaterialKey::TsumaHandrail { .. } => 6,
            MaterialKey::TsumaToeboard { .. } => 7,
            MaterialKey::Anti { .. } => 8,
            MaterialKey::Toeboard { .. } => 9,
            MaterialKey::Stair => 10,
            MaterialKey::StairWideningFrame => 11,
            MaterialKey::WallTie { .. } => 12,
            MaterialKey::LayerNet => 13,
            MaterialKey::LayerNetBracket => 14,
            MaterialKey::TsumaSheet { .. } => 15,
            MaterialKey::PerimeterSheet { .. } => 16,
        }
    }

    /// Within-category sort value: the size number embedded in the name
    /// (two-field names concatenate their digits, mirroring how the catalog
    /// names compare). Floor plates invert so 4 m sorts before 2 m.
    pub fn size_value(&self) -> u64 {
        fn concat(a: u32, b: u32) -> u64 {
            format!("{}{}", a, b).parse().unwrap_or(0)
        }
        match self {
            MaterialKey::FloorPlate { meters } => u64::from(10 - meters),
            MaterialKey::JackBase { size } | MaterialKey::Taiko { size } => u64::from(*size),
            MaterialKey::Frame { width, height } => concat(*width, *height),
            MaterialKey::Brace { height, span } => concat(*height, *span),
            MaterialKey::Handrail { span }
            | MaterialKey::Toeboard { span }
            | MaterialKey::PerimeterSheet { span } => u64::from(*span),
            MaterialKey::TsumaHandrail { width }
            | MaterialKey::TsumaToeboard { width }
            | MaterialKey::TsumaSheet { width } => u64::from(*width),
            MaterialKey::Anti { deck, span } => concat(*deck, *span),
            MaterialKey::WallTie { size } => u64::from(*size),
            MaterialKey::Stair
            | MaterialKey::StairWideningFrame
            | MaterialKey::LayerNet
            | MaterialKey::LayerNetBracket => 0,
        }
    }

    /// Complete ordering key for the bill
    pub fn order_key(&self) -> (u8, u64) {
        (self.category_rank(), self.size_value())
    }
}

/// One line of the final bill of materials.
///
/// Produced only by the aggregator: quantity is a whole unit count, weights
/// are kg rounded to 2 decimals, `total_weight = quantity × unit_weight`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialItem {
    /// Catalog name (category + size key)
    pub name: String,
    /// Unit count
    pub quantity: u64,
    /// Unit weight, kg
    pub unit_weight: f64,
    /// quantity × unit weight, kg, rounded to 2 decimals
    pub total_weight: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_catalog_spelling() {
        assert_eq!(
            MaterialKey::Frame { width: 900, height: 1700 }.name(),
            "建枠（900/1700）"
        );
        assert_eq!(MaterialKey::Anti { deck: 50, span: 1800 }.name(), "アンチ（50/1800）");
        assert_eq!(MaterialKey::WallTie { size: 30 }.name(), "KTS30");
        assert_eq!(MaterialKey::FloorPlate { meters: 4 }.name(), "敷板（4m）");
    }

    #[test]
    fn test_floor_plates_sort_descending() {
        let mut keys = vec![
            MaterialKey::FloorPlate { meters: 2 },
            MaterialKey::FloorPlate { meters: 4 },
            MaterialKey::FloorPlate { meters: 3 },
        ];
        keys.sort_by_key(|k| k.order_key());
        assert_eq!(
            keys.iter().map(|k| k.name()).collect::<Vec<_>>(),
            vec!["敷板（4m）", "敷板（3m）", "敷板（2m）"]
        );
    }

    #[test]
    fn test_frames_sort_by_embedded_size_number() {
        // Concatenated-digit comparison: 1200900 < 4501700, so a short
        // 1200-wide frame sorts ahead of a tall 450-wide one.
        let mut keys = vec![
            MaterialKey::Frame { width: 450, height: 1700 },
            MaterialKey::Frame { width: 1200, height: 900 },
            MaterialKey::Frame { width: 1200, height: 1700 },
            MaterialKey::Frame { width: 900, height: 1700 },
        ];
        keys.sort_by_key(|k| k.order_key());
        assert_eq!(
            keys.iter().map(|k| k.name()).collect::<Vec<_>>(),
            vec![
                "建枠（1200/900）",
                "建枠（1200/1700）",
                "建枠（450/1700）",
                "建枠（900/1700）",
            ]
        );
    }

    #[test]
    fn test_category_order_is_the_export_contract() {
        let mut keys = vec![
            MaterialKey::PerimeterSheet { span: 600 },
            MaterialKey::Stair,
            MaterialKey::Frame { width: 900, height: 1700 },
            MaterialKey::FloorPlate { meters: 4 },
            MaterialKey::WallTie { size: 16 },
            MaterialKey::LayerNet,
            MaterialKey::JackBase { size: 20 },
        ];
        keys.sort_by_key(|k| k.order_key());
        let ranks: Vec<u8> = keys.iter().map(|k| k.category_rank()).collect();
        let mut sorted = ranks.clone();
        sorted.sort_unstable();
        assert_eq!(ranks, sorted);
        assert_eq!(keys[0], MaterialKey::FloorPlate { meters: 4 });
        assert_eq!(keys[keys.len() - 1], MaterialKey::PerimeterSheet { span: 600 });
    }
}
