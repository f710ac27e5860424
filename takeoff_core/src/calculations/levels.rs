//! Level Resolution
//!
//! Turns a placement mode (all levels, all but bottom, explicit list, ...)
//! into the concrete ordered set of 1-based level indices a feature applies
//! to. Downstream quantity rules mostly consume the cardinality of the set,
//! but the indices themselves are part of the resolver contract.
//!
//! Explicit lists are parsed permissively: tokens that fail to parse as
//! unsigned integers are dropped, while duplicates and out-of-range indices
//! pass through untouched. Callers own the hygiene of their custom lists.

use crate::config::{AntiMode, StairMode, ToeboardMode};

/// Parse a comma-separated level list such as `"1, 3 ,x,5"` into `[1, 3, 5]`.
///
/// Tokens are trimmed; non-numeric tokens are dropped; surviving values keep
/// input order and are not deduplicated or range-checked.
pub fn parse_levels(levels: &str) -> Vec<u32> {
    if levels.is_empty() {
        return Vec::new();
    }
    levels
        .split(',')
        .filter_map(|token| token.trim().parse::<u32>().ok())
        .collect()
}

/// 1..=level_count
fn all_levels(level_count: u32) -> Vec<u32> {
    (1..=level_count).collect()
}

/// Resolve the anti-slip panel placement set.
pub fn resolve_anti_levels(mode: AntiMode, level_count: u32, custom: &str) -> Vec<u32> {
    match mode {
        AntiMode::All => all_levels(level_count),
        AntiMode::NotBottom => (2..=level_count).collect(),
        AntiMode::Custom => parse_levels(custom),
    }
}

/// Resolve the toeboard placement set.
///
/// `SameAsAnti` copies the already-resolved anti-slip set, which is why it is
/// an explicit parameter here: toeboard resolution depends on panel
/// resolution having run first.
pub fn resolve_toeboard_levels(
    mode: ToeboardMode,
    level_count: u32,
    custom: &str,
    anti_levels: &[u32],
) -> Vec<u32> {
    match mode {
        ToeboardMode::All => all_levels(level_count),
        ToeboardMode::SameAsAnti => anti_levels.to_vec(),
        ToeboardMode::Custom => parse_levels(custom),
    }
}

/// Resolve the stair placement set. `NotTop` runs stairs up to every level
/// except the last one.
pub fn resolve_stair_levels(mode: StairMode, level_count: u32, custom: &str) -> Vec<u32> {
    match mode {
        StairMode::None => Vec::new(),
        StairMode::NotTop => (1..level_count).collect(),
        StairMode::Custom => parse_levels(custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_levels_drops_bad_tokens() {
        assert_eq!(parse_levels("1, 3 ,x,5"), vec![1, 3, 5]);
        assert_eq!(parse_levels(""), Vec::<u32>::new());
        assert_eq!(parse_levels(" , ,"), Vec::<u32>::new());
    }

    #[test]
    fn test_parse_levels_is_permissive() {
        // Duplicates and out-of-range indices survive on purpose.
        assert_eq!(parse_levels("2,2,99"), vec![2, 2, 99]);
    }

    #[test]
    fn test_all_mode_has_level_count_entries() {
        let levels = resolve_anti_levels(AntiMode::All, 5, "");
        assert_eq!(levels, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_not_bottom_excludes_first_level() {
        assert_eq!(resolve_anti_levels(AntiMode::NotBottom, 4, ""), vec![2, 3, 4]);
        assert_eq!(resolve_anti_levels(AntiMode::NotBottom, 1, ""), Vec::<u32>::new());
    }

    #[test]
    fn test_not_top_excludes_last_level() {
        assert_eq!(resolve_stair_levels(StairMode::NotTop, 4, ""), vec![1, 2, 3]);
        assert_eq!(resolve_stair_levels(StairMode::NotTop, 1, ""), Vec::<u32>::new());
    }

    #[test]
    fn test_same_as_anti_copies_the_anti_set() {
        let anti = resolve_anti_levels(AntiMode::Custom, 5, "1,3,5");
        let toe = resolve_toeboard_levels(ToeboardMode::SameAsAnti, 5, "", &anti);
        assert_eq!(toe, anti);
    }

    #[test]
    fn test_stair_none_is_empty() {
        assert_eq!(resolve_stair_levels(StairMode::None, 10, "1,2"), Vec::<u32>::new());
    }
}
