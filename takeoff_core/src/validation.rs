//! # Configuration Validation
//!
//! Cross-checks the declared quantities in a configuration against the
//! requirements the engine computes from it. Validation never blocks a
//! calculation — a short jack-base order still produces a full bill using
//! the declared counts — it only reports each relationship as a structured
//! verdict the caller can render as a warning or a hard stop.
//!
//! Checked relationships:
//! - the custom height rows must account for exactly the declared level
//!   count;
//! - in custom jack-base mode, the SB20 + SB40 counts must sum to the
//!   computed base requirement.

use serde::{Deserialize, Serialize};

use crate::config::{JackBaseOption, ScaffoldConfig};

/// Three-state verdict for one checked relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Ok,
    Under,
    Over,
}

impl Verdict {
    fn compare(declared: u64, required: u64) -> Verdict {
        match declared.cmp(&required) {
            std::cmp::Ordering::Less => Verdict::Under,
            std::cmp::Ordering::Greater => Verdict::Over,
            std::cmp::Ordering::Equal => Verdict::Ok,
        }
    }
}

/// Per-relationship verdicts plus the numeric deltas needed to render a
/// user-facing message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Custom height rows vs declared level count
    pub custom_height_status: Verdict,
    /// `level_count - Σ custom row counts`; negative when over-declared
    pub remaining_levels: i64,
    /// Declared jack-base buckets vs computed requirement (only meaningful
    /// in custom option mode; `Ok` otherwise)
    pub jack_base_status: Verdict,
    pub jack_base_needed: u64,
    pub jack_base_provided: u64,
}

/// Validate a configuration. Pure and independent of
/// [`calculate`](crate::calculations::calculate); both consume the same
/// configuration value.
pub fn validate(config: &ScaffoldConfig) -> ValidationResult {
    let custom_level_total: u64 = config
        .custom_heights
        .iter()
        .map(|row| u64::from(row.count))
        .sum();
    let custom_height_status = Verdict::compare(custom_level_total, u64::from(config.level_count));

    let jack_base_needed = config.jack_base_required();
    let jack_base_provided = u64::from(config.sb20_count) + u64::from(config.sb40_count);
    let jack_base_status = if config.jack_base_option == JackBaseOption::Custom {
        Verdict::compare(jack_base_provided, jack_base_needed)
    } else {
        Verdict::Ok
    };

    ValidationResult {
        custom_height_status,
        remaining_levels: i64::from(config.level_count) - custom_level_total as i64,
        jack_base_status,
        jack_base_needed,
        jack_base_provided,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CustomHeight, FrameWidth, JackBaseMode};

    #[test]
    fn test_custom_heights_must_account_for_every_level() {
        let mut config = ScaffoldConfig {
            level_count: 5,
            custom_heights: vec![
                CustomHeight { height: 1700, count: 2 },
                CustomHeight { height: 1200, count: 2 },
            ],
            ..ScaffoldConfig::default()
        };
        let result = validate(&config);
        assert_eq!(result.custom_height_status, Verdict::Under);
        assert_eq!(result.remaining_levels, 1);

        config.custom_heights.push(CustomHeight { height: 900, count: 3 });
        let result = validate(&config);
        assert_eq!(result.custom_height_status, Verdict::Over);
        assert_eq!(result.remaining_levels, -2);
    }

    #[test]
    fn test_matching_heights_are_ok() {
        let config = ScaffoldConfig {
            level_count: 3,
            custom_heights: vec![CustomHeight { height: 1700, count: 3 }],
            ..ScaffoldConfig::default()
        };
        assert_eq!(validate(&config).custom_height_status, Verdict::Ok);
        assert_eq!(validate(&config).remaining_levels, 0);
    }

    #[test]
    fn test_custom_jack_base_buckets_checked_against_requirement() {
        let mut config = ScaffoldConfig {
            span1800: 10,
            jack_base_option: JackBaseOption::Custom,
            sb20_count: 20,
            sb40_count: 10,
            ..ScaffoldConfig::default()
        };
        config.frame_cols.insert(FrameWidth::W900, 2);

        let result = validate(&config);
        assert_eq!(result.jack_base_needed, 33);
        assert_eq!(result.jack_base_provided, 30);
        assert_eq!(result.jack_base_status, Verdict::Under);

        config.sb40_count = 13;
        assert_eq!(validate(&config).jack_base_status, Verdict::Ok);

        config.sb40_count = 20;
        assert_eq!(validate(&config).jack_base_status, Verdict::Over);
    }

    #[test]
    fn test_preset_options_skip_the_bucket_check() {
        let config = ScaffoldConfig {
            span1800: 10,
            sb20_count: 1, // stale bucket counts are ignored outside custom mode
            ..ScaffoldConfig::default()
        };
        assert_eq!(validate(&config).jack_base_status, Verdict::Ok);
    }

    #[test]
    fn test_disabled_jack_bases_need_nothing() {
        let config = ScaffoldConfig {
            jack_base_mode: JackBaseMode::None,
            jack_base_option: JackBaseOption::Custom,
            sb20_count: 2,
            ..ScaffoldConfig::default()
        };
        let result = validate(&config);
        assert_eq!(result.jack_base_needed, 0);
        assert_eq!(result.jack_base_status, Verdict::Over);
    }
}
