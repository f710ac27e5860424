//! Transport Planning
//!
//! Turns the bill's grand total weight into haulage advice: one banded
//! recommendation per vehicle family (crane truck / flatbed), plus a ranked
//! list of multi-vehicle split plans when one truck is not enough.
//!
//! The split search enumerates every combination of up to five 4 t, four 6 t
//! and four 12 t crane trucks (≤150 combinations). A combination is feasible
//! when its capacity covers the load without exceeding 1.5× the load or the
//! 48 t fleet ceiling — enough headroom to load, not so much that trucks run
//! near-empty. Plans are ranked shortest-label first, which puts the fewest,
//! simplest fleets at the top.

/// Fallback text when no single vehicle of the family can take the load
const OVERFLOW: &str = "⚠️ 超過（車両を分割してください）";

/// Crane-truck capacity classes for the split search, kg
const SPLIT_CAPS: [u32; 3] = [2000, 6500, 12000];

/// Fleet capacity ceiling for split plans, kg
const FLEET_CAP_KG: f64 = 48000.0;

/// Banded single-vehicle recommendation, crane-truck family.
pub fn recommend_unic(total_weight: f64) -> &'static str {
    if total_weight <= 2000.0 {
        "✅ 4tユニック"
    } else if total_weight <= 4500.0 {
        "✅ 4t増ユニック　又は6ｔユニック"
    } else if total_weight <= 6500.0 {
        "✅ 6tユニック"
    } else if total_weight <= 12000.0 {
        "✅ 12tユニック"
    } else {
        OVERFLOW
    }
}

/// Banded single-vehicle recommendation, flatbed family.
pub fn recommend_flatbed(total_weight: f64) -> &'static str {
    if total_weight <= 4000.0 {
        "✅ 4t平車"
    } else if total_weight <= 6600.0 {
        "✅ 6t平車"
    } else if total_weight <= 12000.0 {
        "✅ 12t平車"
    } else {
        OVERFLOW
    }
}

/// Enumerate feasible load-splitting plans, ranked simplest-first.
///
/// A plan label joins the nonzero classes, e.g. `4tＵ×2 + 6tＵ×1`. Ties in
/// label length keep enumeration order (ascending 4 t, then 6 t, then 12 t
/// counts). A lone single-truck `×1` plan is suppressed — the caller already
/// holds a single-vehicle recommendation, so an empty list signals "no split
/// needed". At most 15 plans are returned.
pub fn split_plans(total_weight: f64) -> Vec<String> {
    let mut plans = Vec::new();

    for t1 in 0..=5u32 {
        for t2 in 0..=4u32 {
            for t3 in 0..=4u32 {
                if t1 + t2 + t3 == 0 {
                    continue;
                }
                let capacity =
                    f64::from(t1 * SPLIT_CAPS[0] + t2 * SPLIT_CAPS[1] + t3 * SPLIT_CAPS[2]);
                if capacity < total_weight
                    || capacity > total_weight * 1.5
                    || capacity > FLEET_CAP_KG
                {
                    continue;
                }

                let mut parts = Vec::new();
                if t1 > 0 {
                    parts.push(format!("4tＵ×{}", t1));
                }
                if t2 > 0 {
                    parts.push(format!("6tＵ×{}", t2));
                }
                if t3 > 0 {
                    parts.push(format!("12tＵ×{}", t3));
                }
                plans.push(parts.join(" + "));
            }
        }
    }

    plans.sort_by_key(|label| label.chars().count());

    if plans.len() == 1 && !plans[0].contains('+') && plans[0].ends_with("×1") {
        plans.clear();
    }

    plans.truncate(15);
    plans
}
