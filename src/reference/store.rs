//! Reference table lookup and integrity checks

use super::tables;
use super::{AgeRow, Gender, Metric, PercentileAnchors};
use crate::error::{GrowthError, Result};

/// Read-only view over one (metric, gender) table.
///
/// Rows are expected sorted by strictly increasing age with monotonic anchors.
/// Only non-emptiness is enforced on construction; the rest is checked by
/// [`ReferenceTable::validate`], which the server runs once at startup.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceTable<'a> {
    metric: Metric,
    gender: Gender,
    rows: &'a [AgeRow],
}

impl<'a> ReferenceTable<'a> {
    pub fn new(metric: Metric, gender: Gender, rows: &'a [AgeRow]) -> Result<Self> {
        if rows.is_empty() {
            return Err(GrowthError::MalformedTable {
                metric,
                gender,
                reason: "table has no rows".to_string(),
            });
        }
        Ok(Self { metric, gender, rows })
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn rows(&self) -> &'a [AgeRow] {
        self.rows
    }

    /// Known ages, ascending
    pub fn ages(&self) -> impl Iterator<Item = u32> + 'a {
        self.rows.iter().map(|row| row.age_months)
    }

    /// Exact-age lookup (no interpolation)
    pub fn row_at(&self, age_months: u32) -> Option<&'a PercentileAnchors> {
        self.rows
            .binary_search_by_key(&age_months, |row| row.age_months)
            .ok()
            .map(|idx| &self.rows[idx].anchors)
    }

    pub fn first_row(&self) -> &'a AgeRow {
        &self.rows[0]
    }

    pub fn last_row(&self) -> &'a AgeRow {
        &self.rows[self.rows.len() - 1]
    }

    /// Check sorted, duplicate-free ages and monotonic anchors on every row
    pub fn validate(&self) -> Result<()> {
        let malformed = |reason: String| GrowthError::MalformedTable {
            metric: self.metric,
            gender: self.gender,
            reason,
        };

        for pair in self.rows.windows(2) {
            if pair[0].age_months >= pair[1].age_months {
                return Err(malformed(format!(
                    "age keys not strictly ascending ({} then {})",
                    pair[0].age_months, pair[1].age_months
                )));
            }
        }

        for row in self.rows {
            if !row.anchors.is_monotonic() {
                return Err(malformed(format!(
                    "non-monotonic anchors at {} months: {:?}",
                    row.age_months,
                    row.anchors.values()
                )));
            }
        }

        Ok(())
    }
}

/// Built-in table for a metric and gender
pub fn reference_table(metric: Metric, gender: Gender) -> ReferenceTable<'static> {
    let rows = match (metric, gender) {
        (Metric::Weight, Gender::Male) => tables::BOYS_WEIGHT,
        (Metric::Weight, Gender::Female) => tables::GIRLS_WEIGHT,
        (Metric::Height, Gender::Male) => tables::BOYS_HEIGHT,
        (Metric::Height, Gender::Female) => tables::GIRLS_HEIGHT,
        (Metric::HeadCircumference, Gender::Male) => tables::BOYS_HEAD_CIRCUMFERENCE,
        (Metric::HeadCircumference, Gender::Female) => tables::GIRLS_HEAD_CIRCUMFERENCE,
        (Metric::Bmi, Gender::Male) => tables::BOYS_BMI,
        (Metric::Bmi, Gender::Female) => tables::GIRLS_BMI,
    };

    // Embedded tables are never empty
    ReferenceTable { metric, gender, rows }
}

/// All eight built-in tables
pub fn all_tables() -> impl Iterator<Item = ReferenceTable<'static>> {
    Metric::ALL.into_iter().flat_map(|metric| {
        [Gender::Male, Gender::Female]
            .into_iter()
            .map(move |gender| reference_table(metric, gender))
    })
}

/// Startup assertion pass over every built-in table
pub fn validate_reference_tables() -> Result<()> {
    for table in all_tables() {
        if let Err(e) = table.validate() {
            tracing::error!("Reference table check failed: {}", e);
            return Err(e);
        }
    }
    tracing::debug!("Validated {} reference tables", all_tables().count());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_pass_validation() {
        assert!(validate_reference_tables().is_ok());
        assert_eq!(all_tables().count(), 8);
    }

    #[test]
    fn test_ages_are_sorted_ascending() {
        for table in all_tables() {
            let ages: Vec<u32> = table.ages().collect();
            let mut sorted = ages.clone();
            sorted.sort_unstable();
            assert_eq!(ages, sorted);
            assert_eq!(ages.first(), Some(&0));
            assert_eq!(ages.last(), Some(&60));
        }
    }

    #[test]
    fn test_row_at_exact_age() {
        let table = reference_table(Metric::Weight, Gender::Male);
        let anchors = table.row_at(12).unwrap();
        assert_eq!(anchors.p3, 7.7);
        assert_eq!(anchors.p50, 9.6);
        assert_eq!(anchors.p97, 12.0);

        // 7 months is between keys, not a key
        assert!(table.row_at(7).is_none());
    }

    #[test]
    fn test_empty_table_rejected() {
        let err = ReferenceTable::new(Metric::Bmi, Gender::Female, &[]).unwrap_err();
        assert!(matches!(err, GrowthError::MalformedTable { .. }));
    }

    #[test]
    fn test_validate_detects_unsorted_ages() {
        let rows = [
            AgeRow::new(6, 1.0, 2.0, 3.0, 4.0, 5.0),
            AgeRow::new(3, 1.0, 2.0, 3.0, 4.0, 5.0),
        ];
        let table = ReferenceTable::new(Metric::Weight, Gender::Male, &rows).unwrap();
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_validate_detects_duplicate_ages() {
        let rows = [
            AgeRow::new(3, 1.0, 2.0, 3.0, 4.0, 5.0),
            AgeRow::new(3, 1.5, 2.5, 3.5, 4.5, 5.5),
        ];
        let table = ReferenceTable::new(Metric::Height, Gender::Female, &rows).unwrap();
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_validate_detects_non_monotonic_anchors() {
        let rows = [AgeRow::new(0, 1.0, 3.0, 2.0, 4.0, 5.0)];
        let table = ReferenceTable::new(Metric::Weight, Gender::Male, &rows).unwrap();
        let err = table.validate().unwrap_err();
        assert!(err.to_string().contains("non-monotonic"));
    }
}
