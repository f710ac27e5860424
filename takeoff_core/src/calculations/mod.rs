//! # Takeoff Calculation Pipeline
//!
//! The whole engine is one pure function: a [`ScaffoldConfig`](crate::config::ScaffoldConfig)
//! goes in, a [`CalculationResult`] comes out. No state survives between
//! invocations, nothing can fail, and identical inputs produce identical
//! outputs — callers are free to memoize on the configuration value.
//!
//! Pipeline order:
//!
//! 1. [`levels`] resolves each accessory's placement mode into concrete
//!    1-based level sets (toeboards after panels, because `sameAsAnti`
//!    copies the panel set).
//! 2. [`quantities`] runs every per-category rule, accumulating into a
//!    structured-key map ([`plates`] supplies the ground-board
//!    decomposition).
//! 3. The aggregator turns the map into the ordered bill: zero quantities
//!    dropped, unit weights attached, totals rounded to 2 decimals.
//! 4. [`transport`] converts the grand total weight into haulage advice.
//!
//! ## Example
//!
//! ```rust
//! use takeoff_core::calculations::calculate;
//! use takeoff_core::config::ScaffoldConfig;
//!
//! let config = ScaffoldConfig::from_json_str(r#"{
//!     "span1800": 10,
//!     "levelCount": 3,
//!     "frameCols": { "900": 2 }
//! }"#).unwrap();
//!
//! let result = calculate(&config);
//! assert_eq!(result.span_total, 10);
//! assert!(result.total_weight > 0.0);
//! ```

pub mod levels;
pub mod plates;
pub mod quantities;
pub mod transport;

use serde::{Deserialize, Serialize};

use crate::config::ScaffoldConfig;
use crate::materials::{unit_weight, MaterialItem};

use quantities::ResolvedLevels;

/// Complete calculation output: the ordered bill of materials plus the
/// derived figures the caller renders alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Bill of materials in the fixed category order (an output contract —
    /// exporters consume it verbatim)
    pub materials: Vec<MaterialItem>,
    /// Sum of rounded line weights, kg, rounded to 2 decimals
    pub total_weight: f64,
    /// Total span count along the long axis
    pub span_total: u32,
    /// Total span-run length, mm
    pub span_mm_total: u32,
    /// Total stack height, mm
    pub total_height: u32,
    /// Computed jack-base requirement (0 when disabled)
    pub jack_base_count: u64,
    /// Single-vehicle recommendation, crane-truck family
    pub transport_unic: String,
    /// Single-vehicle recommendation, flatbed family
    pub transport_flatbed: String,
    /// Ranked multi-vehicle split plans (empty when no split is needed)
    pub split_options: Vec<String>,
}

/// Round to 2 decimal places, the bill's weight precision.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Run the full takeoff calculation.
pub fn calculate(config: &ScaffoldConfig) -> CalculationResult {
    let anti =
        levels::resolve_anti_levels(config.anti_mode, config.level_count, &config.anti_levels);
    let toeboard = levels::resolve_toeboard_levels(
        config.toeboard_mode,
        config.level_count,
        &config.toeboard_levels,
        &anti,
    );
    let stairs =
        levels::resolve_stair_levels(config.stair_mode, config.level_count, &config.stair_levels);
    let resolved = ResolvedLevels { anti, toeboard, stairs };

    let accumulated = quantities::accumulate(config, &resolved);

    let mut entries: Vec<_> = accumulated
        .into_iter()
        .filter(|(_, quantity)| *quantity > 0)
        .collect();
    entries.sort_by_key(|(key, _)| key.order_key());

    let materials: Vec<MaterialItem> = entries
        .into_iter()
        .map(|(key, quantity)| {
            let name = key.name();
            let unit = unit_weight(&name);
            MaterialItem {
                name,
                quantity,
                unit_weight: unit,
                total_weight: round2(quantity as f64 * unit),
            }
        })
        .collect();

    let total_weight = round2(materials.iter().map(|item| item.total_weight).sum());

    CalculationResult {
        materials,
        total_weight,
        span_total: config.span_total(),
        span_mm_total: config.span_mm_total(),
        total_height: config.total_height(),
        jack_base_count: config.jack_base_required(),
        transport_unic: transport::recommend_unic(total_weight).to_string(),
        transport_flatbed: transport::recommend_flatbed(total_weight).to_string(),
        split_options: transport::split_plans(total_weight),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FootingType, FrameWidth, JackBaseMode, JackBaseOption};

    /// The reference scenario: 10 × 1800 mm spans, 3 uniform levels, two
    /// 900 mm columns, jack bases all SB20, panels on every level, one-side
    /// toeboard + one-side rail footing, both end walls fitted.
    fn reference_config() -> ScaffoldConfig {
        let mut config = ScaffoldConfig {
            span1800: 10,
            level_count: 3,
            jack_base_mode: JackBaseMode::JackBaseOnly,
            jack_base_option: JackBaseOption::AllSb20,
            footing_type: FootingType::OneSideToeboardOneSideHandrail,
            tsuma_count: 2,
            ..ScaffoldConfig::default()
        };
        config.frame_cols.insert(FrameWidth::W900, 2);
        config
    }

    fn quantity_of(result: &CalculationResult, name: &str) -> Option<u64> {
        result
            .materials
            .iter()
            .find(|item| item.name == name)
            .map(|item| item.quantity)
    }

    #[test]
    fn test_reference_scenario() {
        let result = calculate(&reference_config());

        assert_eq!(quantity_of(&result, "建枠（900/1700）"), Some(66));
        assert_eq!(quantity_of(&result, "ジャッキベース（20）"), Some(33));
        assert_eq!(quantity_of(&result, "アンチ（50/1800）"), Some(60));

        assert_eq!(result.span_total, 10);
        assert_eq!(result.span_mm_total, 18000);
        assert_eq!(result.total_height, 5100);
        assert_eq!(result.jack_base_count, 33);
    }

    #[test]
    fn test_zero_quantities_are_omitted() {
        let result = calculate(&reference_config());
        assert!(result.materials.iter().all(|item| item.quantity > 0));
        // No 450-wide columns, so no 40-class decks
        assert_eq!(quantity_of(&result, "アンチ（40/1800）"), None);
    }

    #[test]
    fn test_bill_order_is_the_category_contract() {
        let mut config = reference_config();
        config.wall_tie_mode = crate::config::WallTieMode::Kts30;
        config.layer_net_mode = crate::config::Necessity::Required;
        config.perimeter_sheet_mode = crate::config::Necessity::Required;
        config.tsuma_sheet_count = 2;
        let result = calculate(&config);

        let names: Vec<&str> = result.materials.iter().map(|item| item.name.as_str()).collect();
        let position = |name: &str| names.iter().position(|n| *n == name);

        // Plates lead, then bases, frames, braces, rails, end-wall
        // accessories, decks, toeboards, ties, nets, sheets.
        let order = [
            "敷板（4m）",
            "ジャッキベース（20）",
            "建枠（900/1700）",
            "ブレス（1700/1800）",
            "長手下桟（1800）",
            "妻側手すり（900）",
            "妻側巾木（900）",
            "アンチ（50/1800）",
            "巾木（1800）",
            "KTS30",
            "層間ネット",
            "層間ネットブラケット",
            "妻側メッシュシート（900）",
            "メッシュシート（1800）",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|name| position(name).unwrap_or_else(|| panic!("missing {}", name)))
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_weights_round_to_two_decimals() {
        let result = calculate(&reference_config());
        for item in &result.materials {
            assert_eq!(item.total_weight, round2(item.quantity as f64 * item.unit_weight));
            assert!(item.total_weight >= 0.0);
        }
        let expected_total: f64 = result.materials.iter().map(|item| item.total_weight).sum();
        assert_eq!(result.total_weight, round2(expected_total));
    }

    #[test]
    fn test_calculation_is_idempotent() {
        let config = reference_config();
        let first = calculate(&config);
        let second = calculate(&config);
        assert_eq!(first, second);

        let json_first = serde_json::to_string(&first).unwrap();
        let json_second = serde_json::to_string(&second).unwrap();
        assert_eq!(json_first, json_second);
    }

    #[test]
    fn test_empty_config_is_calm() {
        let config = ScaffoldConfig {
            level_count: 1,
            tsuma_count: 0,
            ..ScaffoldConfig::default()
        };
        let result = calculate(&config);
        // A single jack base at the lone standard position, no plates for a
        // zero-length run, nothing else.
        assert_eq!(quantity_of(&result, "ジャッキベース（20）"), Some(1));
        assert_eq!(quantity_of(&result, "敷板（2m）"), None);
        assert_eq!(result.total_weight, 3.4);
        assert!(result.split_options.is_empty());
    }

    #[test]
    fn test_transport_fields_follow_total_weight() {
        let result = calculate(&reference_config());
        assert_eq!(
            result.transport_unic,
            transport::recommend_unic(result.total_weight)
        );
        assert_eq!(
            result.transport_flatbed,
            transport::recommend_flatbed(result.total_weight)
        );
    }
}
