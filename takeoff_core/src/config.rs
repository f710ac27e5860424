//! # Scaffold Configuration
//!
//! The `ScaffoldConfig` struct is the sole input to the calculation engine:
//! span counts per standard length, frame column counts per standard width,
//! level layout, and the option set for every accessory category.
//!
//! The struct deserializes from the same camelCase JSON shape the upstream
//! form layer and drawing-extraction sanitizer produce, and every field has a
//! default so partial documents load cleanly.
//!
//! ## Example
//!
//! ```rust
//! use takeoff_core::config::ScaffoldConfig;
//!
//! let config = ScaffoldConfig::from_json_str(r#"{
//!     "span1800": 10,
//!     "levelCount": 3,
//!     "frameCols": { "900": 2 }
//! }"#).unwrap();
//!
//! assert_eq!(config.span_total(), 10);
//! assert_eq!(config.span_mm_total(), 18000);
//! assert_eq!(config.face_col_total(), 2);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Standard frame widths (short-axis), mm.
///
/// The configuration contract allows exactly these four widths; anything else
/// (e.g. inch-series 914 mm) is normalized by the upstream sanitizer before a
/// config reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FrameWidth {
    #[serde(rename = "450")]
    W450,
    #[serde(rename = "600")]
    W600,
    #[serde(rename = "900")]
    W900,
    #[serde(rename = "1200")]
    W1200,
}

impl FrameWidth {
    /// All standard widths, ascending
    pub const ALL: [FrameWidth; 4] = [
        FrameWidth::W450,
        FrameWidth::W600,
        FrameWidth::W900,
        FrameWidth::W1200,
    ];

    /// Width in millimetres
    pub fn mm(&self) -> u32 {
        match self {
            FrameWidth::W450 => 450,
            FrameWidth::W600 => 600,
            FrameWidth::W900 => 900,
            FrameWidth::W1200 => 1200,
        }
    }
}

/// One row of a custom height layout: `count` levels of `height` mm each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomHeight {
    pub height: u32,
    pub count: u32,
}

/// Level height layout: uniform 1700 mm stages, or an explicit list of
/// (height, count) rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeightMode {
    #[default]
    All1700,
    Custom,
}

/// Whether the stack sits on jack bases, and whether taiko spacers ride along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JackBaseMode {
    None,
    #[default]
    JackBaseOnly,
    JackBaseWithTaiko,
}

/// How the jack-base requirement is distributed across the SB20/SB40 buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JackBaseOption {
    #[default]
    #[serde(rename = "allSB20")]
    AllSb20,
    #[serde(rename = "allSB40")]
    AllSb40,
    #[serde(rename = "custom")]
    Custom,
}

/// Anti-slip panel placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AntiMode {
    #[default]
    All,
    NotBottom,
    Custom,
}

/// Toeboard placement. `SameAsAnti` reuses whatever set the anti-slip
/// resolution produced, so toeboards resolve after panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ToeboardMode {
    All,
    #[default]
    SameAsAnti,
    Custom,
}

/// Footing style along the long faces. Controls which of toeboard / lower
/// rail appear and whether they are fitted single- or double-sided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FootingType {
    #[default]
    OneSideToeboardOneSideHandrail,
    BothSideToeboard,
    BothSideToeboardAndHandrail,
    BothSideHandrail,
}

/// Stair placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StairMode {
    #[default]
    None,
    NotTop,
    Custom,
}

/// Wall-tie class selection; `None` disables the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WallTieMode {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "KTS16")]
    Kts16,
    #[serde(rename = "KTS20")]
    Kts20,
    #[serde(rename = "KTS30")]
    Kts30,
    #[serde(rename = "KTS45")]
    Kts45,
    #[serde(rename = "KTS60")]
    Kts60,
    #[serde(rename = "KTS80")]
    Kts80,
    #[serde(rename = "KTS100")]
    Kts100,
}

impl WallTieMode {
    /// The class size number (16..100), or `None` when the category is off.
    pub fn tie_size(&self) -> Option<u32> {
        match self {
            WallTieMode::None => None,
            WallTieMode::Kts16 => Some(16),
            WallTieMode::Kts20 => Some(20),
            WallTieMode::Kts30 => Some(30),
            WallTieMode::Kts45 => Some(45),
            WallTieMode::Kts60 => Some(60),
            WallTieMode::Kts80 => Some(80),
            WallTieMode::Kts100 => Some(100),
        }
    }
}

/// Level spread for wall ties and interlayer nets: every level, every other
/// level, or an explicit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpreadMode {
    #[default]
    All,
    Alternate,
    Custom,
}

/// On/off switch for a whole accessory category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Necessity {
    #[default]
    None,
    Required,
}

/// Level spread for sheet categories (no alternate option).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SheetLevelMode {
    #[default]
    All,
    Custom,
}

/// Complete scaffold configuration — the engine's sole input.
///
/// Invariants (guaranteed by the upstream form layer / sanitizer, not
/// re-checked here): all counts are non-negative integers, `level_count ≥ 1`,
/// level indices in the custom list strings are 1-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScaffoldConfig {
    /// Span counts per standard length (mm)
    pub span600: u32,
    pub span900: u32,
    pub span1200: u32,
    pub span1500: u32,
    pub span1800: u32,

    /// Frame column counts per standard width
    pub frame_cols: BTreeMap<FrameWidth, u32>,

    /// Frame width of the main run (short axis)
    pub frame_width: FrameWidth,

    /// Number of vertical levels (1-based stack height)
    pub level_count: u32,
    pub height_mode: HeightMode,
    pub custom_heights: Vec<CustomHeight>,

    pub jack_base_mode: JackBaseMode,
    pub jack_base_option: JackBaseOption,
    pub sb20_count: u32,
    pub sb40_count: u32,
    pub taiko40: u32,
    pub taiko80: u32,

    pub anti_mode: AntiMode,
    /// Comma-separated 1-based level list for `AntiMode::Custom`
    pub anti_levels: String,

    pub toeboard_mode: ToeboardMode,
    /// Comma-separated 1-based level list for `ToeboardMode::Custom`
    pub toeboard_levels: String,
    pub footing_type: FootingType,

    /// End-wall (tsuma) side count: 0, 1 or 2
    pub tsuma_count: u32,

    pub stair_mode: StairMode,
    /// Comma-separated 1-based level list for `StairMode::Custom`
    pub stair_levels: String,
    pub stair_span_count: u32,
    /// Widen stair bays to 1200 mm frames (meaningful when the main run is
    /// narrower than 1200)
    pub stair_frame_widening: bool,

    pub wall_tie_mode: WallTieMode,
    pub wall_tie_level_mode: SpreadMode,
    pub wall_tie_level_count: u32,
    pub wall_tie_span_mode: SpreadMode,
    pub wall_tie_span_count: u32,

    pub layer_net_mode: Necessity,
    pub layer_net_level_mode: SpreadMode,
    pub layer_net_level_count: u32,

    pub perimeter_sheet_mode: Necessity,
    pub perimeter_sheet_level_mode: SheetLevelMode,
    pub perimeter_sheet_level_count: u32,

    /// End-wall sheet side count: 0, 1 or 2
    pub tsuma_sheet_count: u32,
    pub tsuma_sheet_level_mode: SheetLevelMode,
    pub tsuma_sheet_level_count: u32,

    /// Free-form memo, passed through to exports unmodified
    pub memo: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        ScaffoldConfig {
            span600: 0,
            span900: 0,
            span1200: 0,
            span1500: 0,
            span1800: 0,
            frame_cols: FrameWidth::ALL.iter().map(|w| (*w, 0)).collect(),
            frame_width: FrameWidth::W900,
            level_count: 3,
            height_mode: HeightMode::All1700,
            custom_heights: vec![CustomHeight { height: 1700, count: 3 }],
            jack_base_mode: JackBaseMode::JackBaseOnly,
            jack_base_option: JackBaseOption::AllSb20,
            sb20_count: 0,
            sb40_count: 0,
            taiko40: 0,
            taiko80: 0,
            anti_mode: AntiMode::All,
            anti_levels: String::new(),
            toeboard_mode: ToeboardMode::SameAsAnti,
            toeboard_levels: String::new(),
            footing_type: FootingType::OneSideToeboardOneSideHandrail,
            tsuma_count: 2,
            stair_mode: StairMode::None,
            stair_levels: String::new(),
            stair_span_count: 1,
            stair_frame_widening: false,
            wall_tie_mode: WallTieMode::None,
            wall_tie_level_mode: SpreadMode::All,
            wall_tie_level_count: 0,
            wall_tie_span_mode: SpreadMode::All,
            wall_tie_span_count: 0,
            layer_net_mode: Necessity::None,
            layer_net_level_mode: SpreadMode::All,
            layer_net_level_count: 0,
            perimeter_sheet_mode: Necessity::None,
            perimeter_sheet_level_mode: SheetLevelMode::All,
            perimeter_sheet_level_count: 0,
            tsuma_sheet_count: 0,
            tsuma_sheet_level_mode: SheetLevelMode::All,
            tsuma_sheet_level_count: 0,
            memo: String::new(),
        }
    }
}

impl ScaffoldConfig {
    /// Parse a configuration from a JSON document.
    ///
    /// Missing fields fall back to their defaults; unknown fields are ignored.
    pub fn from_json_str(json: &str) -> CalcResult<Self> {
        serde_json::from_str(json).map_err(|e| CalcError::serialization(e.to_string()))
    }

    /// Span (length mm, count) pairs, ascending by length
    pub fn span_lengths(&self) -> [(u32, u32); 5] {
        [
            (600, self.span600),
            (900, self.span900),
            (1200, self.span1200),
            (1500, self.span1500),
            (1800, self.span1800),
        ]
    }

    /// Total number of spans along the long axis
    pub fn span_total(&self) -> u32 {
        self.span600 + self.span900 + self.span1200 + self.span1500 + self.span1800
    }

    /// Total span-run length in mm (one line of the layout)
    pub fn span_mm_total(&self) -> u32 {
        self.span_lengths().iter().map(|(len, count)| len * count).sum()
    }

    /// Column count for one frame width
    pub fn cols(&self, width: FrameWidth) -> u32 {
        self.frame_cols.get(&width).copied().unwrap_or(0)
    }

    /// Total face column count across all frame widths
    pub fn face_col_total(&self) -> u32 {
        self.frame_cols.values().sum()
    }

    /// Level counts aggregated per stage height (mm).
    ///
    /// Uniform mode yields a single 1700 mm row; custom mode sums rows that
    /// share a height.
    pub fn height_counts(&self) -> BTreeMap<u32, u32> {
        let mut counts = BTreeMap::new();
        match self.height_mode {
            HeightMode::All1700 => {
                counts.insert(1700, self.level_count);
            }
            HeightMode::Custom => {
                for row in &self.custom_heights {
                    *counts.entry(row.height).or_insert(0) += row.count;
                }
            }
        }
        counts
    }

    /// Total stack height in mm
    pub fn total_height(&self) -> u32 {
        match self.height_mode {
            HeightMode::All1700 => self.level_count * 1700,
            HeightMode::Custom => self
                .custom_heights
                .iter()
                .map(|row| row.height * row.count)
                .sum(),
        }
    }

    /// Computed jack-base requirement: one base per standard position,
    /// `(spans + 1) × (columns + 1)`. Zero when jack bases are disabled.
    pub fn jack_base_required(&self) -> u64 {
        if self.jack_base_mode == JackBaseMode::None {
            return 0;
        }
        u64::from(self.span_total() + 1) * u64::from(self.face_col_total() + 1)
    }
}
