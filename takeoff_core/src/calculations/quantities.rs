//! Per-Category Quantity Rules
//!
//! Each material category has a closed-form rule: a product of resolved level
//! counts, span breakdowns and frame column counts. No rule iterates over
//! individual installed units. Everything accumulates into one
//! `BTreeMap<MaterialKey, u64>` through [`add`], so rule branches that land
//! on the same key sum — the stair-widening adjustment deliberately feeds the
//! same 1200 mm frame bucket the regular frame rule fills.
//!
//! Rule order is free except for one constraint: the stair-widening
//! adjustment reduces the main-run frame bucket, so frames must already be
//! accumulated when it runs.

use std::collections::BTreeMap;

use crate::calculations::plates;
use crate::config::{
    FootingType, FrameWidth, JackBaseMode, JackBaseOption, Necessity, ScaffoldConfig,
    SheetLevelMode, SpreadMode,
};
use crate::materials::MaterialKey;

/// Level sets resolved once by the pipeline and shared across rules.
pub(crate) struct ResolvedLevels {
    pub anti: Vec<u32>,
    pub toeboard: Vec<u32>,
    pub stairs: Vec<u32>,
}

/// Run every category rule against the configuration.
pub(crate) fn accumulate(
    config: &ScaffoldConfig,
    levels: &ResolvedLevels,
) -> BTreeMap<MaterialKey, u64> {
    let mut map = BTreeMap::new();

    add_bases_and_plates(config, &mut map);
    add_frames(config, &mut map);
    add_braces(config, &mut map);
    add_span_accessories(config, levels, &mut map);
    add_stairs(config, levels, &mut map);
    add_tsuma_accessories(config, levels, &mut map);
    add_wall_ties(config, &mut map);
    add_layer_nets(config, &mut map);
    add_perimeter_sheets(config, &mut map);
    add_tsuma_sheets(config, &mut map);

    map
}

fn add(map: &mut BTreeMap<MaterialKey, u64>, key: MaterialKey, quantity: u64) {
    if quantity > 0 {
        *map.entry(key).or_insert(0) += quantity;
    }
}

/// Jack bases, taiko spacers and ground boards.
///
/// The base requirement is one per standard position. Preset options put the
/// whole requirement into one bucket; custom mode emits the declared counts
/// unchecked (the validation engine reports any mismatch, it is not corrected
/// here). Ground boards ship with the base package, so they are only emitted
/// when jack bases are enabled at all.
fn add_bases_and_plates(config: &ScaffoldConfig, map: &mut BTreeMap<MaterialKey, u64>) {
    if config.jack_base_mode == JackBaseMode::None {
        return;
    }

    let required = config.jack_base_required();
    match config.jack_base_option {
        JackBaseOption::AllSb20 => add(map, MaterialKey::JackBase { size: 20 }, required),
        JackBaseOption::AllSb40 => add(map, MaterialKey::JackBase { size: 40 }, required),
        JackBaseOption::Custom => {
            add(map, MaterialKey::JackBase { size: 20 }, u64::from(config.sb20_count));
            add(map, MaterialKey::JackBase { size: 40 }, u64::from(config.sb40_count));
        }
    }

    if config.jack_base_mode == JackBaseMode::JackBaseWithTaiko {
        add(map, MaterialKey::Taiko { size: 40 }, u64::from(config.taiko40));
        add(map, MaterialKey::Taiko { size: 80 }, u64::from(config.taiko80));
    }

    let packed = plates::pack_layout(config.span_mm_total(), config.face_col_total());
    add(map, MaterialKey::FloorPlate { meters: 4 }, u64::from(packed.four_m));
    add(map, MaterialKey::FloorPlate { meters: 3 }, u64::from(packed.three_m));
    add(map, MaterialKey::FloorPlate { meters: 2 }, u64::from(packed.two_m));
}

/// Main frames per (width, stage height): `columns × (spans + 1) × levels`.
/// The +1 puts a frame line at both ends of the run.
fn add_frames(config: &ScaffoldConfig, map: &mut BTreeMap<MaterialKey, u64>) {
    let span_plus_one = u64::from(config.span_total() + 1);
    let height_counts = config.height_counts();

    for (&width, &columns) in &config.frame_cols {
        if columns == 0 {
            continue;
        }
        for (&height, &level_count) in &height_counts {
            if level_count == 0 {
                continue;
            }
            add(
                map,
                MaterialKey::Frame { width: width.mm(), height },
                u64::from(columns) * span_plus_one * u64::from(level_count),
            );
        }
    }
}

/// Diagonal braces per (stage height, span length): both faces of every row,
/// so `(columns + 1) × span count × levels`.
fn add_braces(config: &ScaffoldConfig, map: &mut BTreeMap<MaterialKey, u64>) {
    let rows = u64::from(config.face_col_total() + 1);
    let height_counts = config.height_counts();

    for (span, span_count) in config.span_lengths() {
        if span_count == 0 {
            continue;
        }
        for (&height, &level_count) in &height_counts {
            if level_count == 0 {
                continue;
            }
            add(
                map,
                MaterialKey::Brace { height, span },
                rows * u64::from(span_count) * u64::from(level_count),
            );
        }
    }
}

/// Anti-slip deck distribution across the three deck width codes, driven by
/// the frame column mix. The 1200 mm frame carries two 500-class decks per
/// bay; the 900 mm frame carries a 500-class and a 240-class side by side.
fn deck_buckets(config: &ScaffoldConfig) -> [(u32, u64); 3] {
    let c450 = u64::from(config.cols(FrameWidth::W450));
    let c600 = u64::from(config.cols(FrameWidth::W600));
    let c900 = u64::from(config.cols(FrameWidth::W900));
    let c1200 = u64::from(config.cols(FrameWidth::W1200));
    [(40, c450), (50, c600 + c900 + c1200 * 2), (24, c900)]
}

/// Toeboard sides along the long faces for a footing style.
fn toeboard_multiplier(footing: FootingType) -> u64 {
    match footing {
        FootingType::OneSideToeboardOneSideHandrail => 1,
        FootingType::BothSideToeboard | FootingType::BothSideToeboardAndHandrail => 2,
        FootingType::BothSideHandrail => 0,
    }
}

/// Lower-rail sides along the long faces; complementary to the toeboard table.
fn handrail_multiplier(footing: FootingType) -> u64 {
    match footing {
        FootingType::OneSideToeboardOneSideHandrail => 1,
        FootingType::BothSideToeboardAndHandrail | FootingType::BothSideHandrail => 2,
        FootingType::BothSideToeboard => 0,
    }
}

/// Per-span accessories: anti-slip deck panels, long-side toeboards and
/// lower rails.
fn add_span_accessories(
    config: &ScaffoldConfig,
    levels: &ResolvedLevels,
    map: &mut BTreeMap<MaterialKey, u64>,
) {
    let anti_levels = levels.anti.len() as u64;
    let toeboard_levels = levels.toeboard.len() as u64;
    let toe_mult = toeboard_multiplier(config.footing_type);
    let rail_mult = handrail_multiplier(config.footing_type);

    for (span, span_count) in config.span_lengths() {
        if span_count == 0 {
            continue;
        }
        let span_count = u64::from(span_count);

        for (deck, per_span) in deck_buckets(config) {
            add(
                map,
                MaterialKey::Anti { deck, span },
                per_span * span_count * anti_levels,
            );
        }

        add(
            map,
            MaterialKey::Toeboard { span },
            span_count * toeboard_levels * toe_mult,
        );
        add(
            map,
            MaterialKey::Handrail { span },
            span_count * toeboard_levels * rail_mult,
        );
    }
}

/// Stairs, plus the stair-bay widening adjustment.
///
/// When the main run is narrower than 1200 mm and widening is requested, each
/// stair bay swaps its narrow frames for 1200 mm ones: two ST129J widening
/// frames per bay per level, the same count of 1200/1700 frames added, and
/// four narrow frames per bay per level removed from the main-run bucket
/// (never below zero).
fn add_stairs(
    config: &ScaffoldConfig,
    levels: &ResolvedLevels,
    map: &mut BTreeMap<MaterialKey, u64>,
) {
    let stair_count = u64::from(config.stair_span_count) * levels.stairs.len() as u64;
    add(map, MaterialKey::Stair, stair_count);

    let widening_applies = config.stair_frame_widening
        && config.stair_span_count > 0
        && stair_count > 0
        && config.frame_width != FrameWidth::W1200;
    if !widening_applies {
        return;
    }

    let per_bay = u64::from(config.stair_span_count) * u64::from(config.level_count);
    add(map, MaterialKey::StairWideningFrame, per_bay * 2);
    add(map, MaterialKey::Frame { width: 1200, height: 1700 }, per_bay * 2);

    let original = MaterialKey::Frame {
        width: config.frame_width.mm(),
        height: 1700,
    };
    if let Some(count) = map.get_mut(&original) {
        *count = count.saturating_sub(per_bay * 4);
    }
}

/// End-wall handrails and toeboards ride the anti-slip level count and the
/// 0/1/2 end-wall side selection.
fn add_tsuma_accessories(
    config: &ScaffoldConfig,
    levels: &ResolvedLevels,
    map: &mut BTreeMap<MaterialKey, u64>,
) {
    let per_width = levels.anti.len() as u64 * u64::from(config.tsuma_count);

    for (&width, &columns) in &config.frame_cols {
        if columns == 0 {
            continue;
        }
        let quantity = u64::from(columns) * per_width;
        add(map, MaterialKey::TsumaHandrail { width: width.mm() }, quantity);
        add(map, MaterialKey::TsumaToeboard { width: width.mm() }, quantity);
    }
}

fn spread_level_count(mode: SpreadMode, level_count: u32, custom: u32) -> u64 {
    u64::from(match mode {
        SpreadMode::All => level_count,
        SpreadMode::Alternate => level_count.div_ceil(2),
        SpreadMode::Custom => custom,
    })
}

fn spread_span_count(mode: SpreadMode, span_total: u32, custom: u32) -> u64 {
    u64::from(match mode {
        SpreadMode::All => span_total,
        SpreadMode::Alternate => (span_total + 1).div_ceil(2),
        SpreadMode::Custom => custom,
    })
}

/// Wall ties: resolved level spread × per-level span spread, under the
/// selected tie class.
fn add_wall_ties(config: &ScaffoldConfig, map: &mut BTreeMap<MaterialKey, u64>) {
    let Some(size) = config.wall_tie_mode.tie_size() else {
        return;
    };

    let tie_levels = spread_level_count(
        config.wall_tie_level_mode,
        config.level_count,
        config.wall_tie_level_count,
    );
    let tie_spans = spread_span_count(
        config.wall_tie_span_mode,
        config.span_total(),
        config.wall_tie_span_count,
    );

    add(map, MaterialKey::WallTie { size }, tie_levels * tie_spans);
}

/// Interlayer nets: one net per 5.5 m of run per resolved level, one bracket
/// per frame line per resolved level.
fn add_layer_nets(config: &ScaffoldConfig, map: &mut BTreeMap<MaterialKey, u64>) {
    if config.layer_net_mode != Necessity::Required {
        return;
    }

    let net_levels = spread_level_count(
        config.layer_net_level_mode,
        config.level_count,
        config.layer_net_level_count,
    );
    if net_levels == 0 {
        return;
    }

    let runs = u64::from(config.span_mm_total().div_ceil(5500));
    add(map, MaterialKey::LayerNet, net_levels * runs);
    add(
        map,
        MaterialKey::LayerNetBracket,
        net_levels * u64::from(config.span_total() + 1),
    );
}

fn sheet_level_count(mode: SheetLevelMode, level_count: u32, custom: u32) -> u64 {
    u64::from(match mode {
        SheetLevelMode::All => level_count,
        SheetLevelMode::Custom => custom,
    })
}

/// Perimeter mesh sheets per span length; one sheet covers three levels.
fn add_perimeter_sheets(config: &ScaffoldConfig, map: &mut BTreeMap<MaterialKey, u64>) {
    if config.perimeter_sheet_mode != Necessity::Required {
        return;
    }

    let sheet_levels = sheet_level_count(
        config.perimeter_sheet_level_mode,
        config.level_count,
        config.perimeter_sheet_level_count,
    );
    if sheet_levels == 0 {
        return;
    }

    let sheets_per_run = sheet_levels.div_ceil(3);
    for (span, span_count) in config.span_lengths() {
        if span_count == 0 {
            continue;
        }
        add(
            map,
            MaterialKey::PerimeterSheet { span },
            u64::from(span_count) * sheets_per_run,
        );
    }
}

/// End-wall mesh sheets per frame width, times the selected side count.
fn add_tsuma_sheets(config: &ScaffoldConfig, map: &mut BTreeMap<MaterialKey, u64>) {
    if config.tsuma_sheet_count == 0 {
        return;
    }

    let sheet_levels = sheet_level_count(
        config.tsuma_sheet_level_mode,
        config.level_count,
        config.tsuma_sheet_level_count,
    );
    if sheet_levels == 0 {
        return;
    }

    let sheets_per_face = sheet_levels.div_ceil(3);
    for (&width, &columns) in &config.frame_cols {
        if columns == 0 {
            continue;
        }
        add(
            map,
            MaterialKey::TsumaSheet { width: width.mm() },
            u64::from(columns) * sheets_per_face * u64::from(config.tsuma_sheet_count),
        );
    }
}
