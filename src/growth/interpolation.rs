//! Age Interpolator
//!
//! Produces the five percentile anchors for an arbitrary age by linear
//! interpolation between the two bracketing table rows.

use crate::reference::{PercentileAnchors, ReferenceTable};

/// Anchors at `age_months` for the given table.
///
/// Algorithm:
/// 1. Ages at or before the first row (or at/after the last) clamp to that row
/// 2. Otherwise binary-search the adjacent rows [lo, hi] with lo < age <= hi
/// 3. Each anchor: lo + (age - lo) / (hi - lo) × (hi_value - lo_value)
///
/// An exact key age returns that row unchanged. A zero-width bracket
/// (duplicate keys) returns the lower row instead of dividing by zero.
pub fn interpolate_anchors(table: &ReferenceTable<'_>, age_months: f64) -> PercentileAnchors {
    let first = table.first_row();
    let last = table.last_row();

    // Edge cases
    if age_months <= f64::from(first.age_months) {
        return first.anchors;
    }
    if age_months >= f64::from(last.age_months) {
        return last.anchors;
    }

    // First row at or after the target; the clamps above keep it in 1..len-1
    let rows = table.rows();
    let idx = rows.partition_point(|row| f64::from(row.age_months) < age_months);
    let hi = &rows[idx];
    if f64::from(hi.age_months) == age_months {
        return hi.anchors;
    }

    // idx is 0 only for a NaN age
    let lo = match idx.checked_sub(1) {
        Some(i) => &rows[i],
        None => return first.anchors,
    };
    let lo_age = f64::from(lo.age_months);
    let span = f64::from(hi.age_months) - lo_age;
    if span <= 0.0 {
        return lo.anchors;
    }

    let ratio = (age_months - lo_age) / span;
    lerp_anchors(&lo.anchors, &hi.anchors, ratio)
}

fn lerp_anchors(lo: &PercentileAnchors, hi: &PercentileAnchors, ratio: f64) -> PercentileAnchors {
    let lerp = |a: f64, b: f64| a + ratio * (b - a);
    PercentileAnchors {
        p3: lerp(lo.p3, hi.p3),
        p15: lerp(lo.p15, hi.p15),
        p50: lerp(lo.p50, hi.p50),
        p85: lerp(lo.p85, hi.p85),
        p97: lerp(lo.p97, hi.p97),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{all_tables, reference_table, AgeRow, Gender, Metric};
    use approx::assert_relative_eq;
    use rand::Rng;

    #[test]
    fn test_exact_key_returns_row_values() {
        for table in all_tables() {
            for row in table.rows() {
                let anchors = interpolate_anchors(&table, f64::from(row.age_months));
                assert_eq!(anchors, row.anchors);
            }
        }
    }

    #[test]
    fn test_clamps_outside_table_range() {
        let table = reference_table(Metric::Height, Gender::Female);
        assert_eq!(interpolate_anchors(&table, -3.0), table.first_row().anchors);
        assert_eq!(interpolate_anchors(&table, 72.0), table.last_row().anchors);
    }

    #[test]
    fn test_midpoint_between_keys() {
        // Boys weight: 6 months p50 = 7.9, 9 months p50 = 8.6
        let table = reference_table(Metric::Weight, Gender::Male);
        let anchors = interpolate_anchors(&table, 7.5);
        assert_relative_eq!(anchors.p50, 8.25, epsilon = 1e-9);
        assert_relative_eq!(anchors.p3, 6.75, epsilon = 1e-9);
        assert_relative_eq!(anchors.p97, 10.15, epsilon = 1e-9);
    }

    #[test]
    fn test_no_overshoot_between_keys() {
        let mut rng = rand::thread_rng();
        for table in all_tables() {
            for pair in table.rows().windows(2) {
                let (lo, hi) = (&pair[0], &pair[1]);
                for _ in 0..20 {
                    let age = rng.gen_range(f64::from(lo.age_months)..f64::from(hi.age_months));
                    let got = interpolate_anchors(&table, age).values();
                    let a = lo.anchors.values();
                    let b = hi.anchors.values();
                    for i in 0..5 {
                        let (min, max) = (a[i].min(b[i]), a[i].max(b[i]));
                        assert!(got[i] >= min - 1e-9 && got[i] <= max + 1e-9);
                    }
                }
            }
        }
    }

    #[test]
    fn test_zero_width_bracket_returns_lower_row() {
        let rows = [
            AgeRow::new(0, 1.0, 2.0, 3.0, 4.0, 5.0),
            AgeRow::new(6, 2.0, 3.0, 4.0, 5.0, 6.0),
            AgeRow::new(6, 9.0, 9.5, 10.0, 10.5, 11.0),
            AgeRow::new(12, 3.0, 4.0, 5.0, 6.0, 7.0),
        ];
        let table = ReferenceTable::new(Metric::Weight, Gender::Male, &rows).unwrap();
        let anchors = interpolate_anchors(&table, 6.0);
        assert_eq!(anchors, rows[1].anchors);
        assert!(anchors.p50.is_finite());
    }

    #[test]
    fn test_brackets_either_side_of_every_key() {
        for table in all_tables() {
            let rows = table.rows();
            for pair in rows.windows(2) {
                let (lo, hi) = (&pair[0], &pair[1]);
                let (lo_age, hi_age) = (f64::from(lo.age_months), f64::from(hi.age_months));
                for age in [lo_age + 0.25, hi_age - 0.25] {
                    let ratio = (age - lo_age) / (hi_age - lo_age);
                    let got = interpolate_anchors(&table, age);
                    assert_relative_eq!(
                        got.p50,
                        lo.anchors.p50 + ratio * (hi.anchors.p50 - lo.anchors.p50),
                        epsilon = 1e-9
                    );
                }
            }
        }
    }

    #[test]
    fn test_nan_age_does_not_panic() {
        let table = reference_table(Metric::Weight, Gender::Female);
        assert_eq!(interpolate_anchors(&table, f64::NAN), table.first_row().anchors);
    }

    #[test]
    fn test_single_row_table() {
        let rows = [AgeRow::new(12, 1.0, 2.0, 3.0, 4.0, 5.0)];
        let table = ReferenceTable::new(Metric::Bmi, Gender::Female, &rows).unwrap();
        assert_eq!(interpolate_anchors(&table, 0.0), rows[0].anchors);
        assert_eq!(interpolate_anchors(&table, 30.0), rows[0].anchors);
    }
}
