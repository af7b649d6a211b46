//! Report composition: ranked table rows plus the HTML document.

pub mod html;

use crate::dataset::Dataset;

/// One row of the ranked driver table.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow<'a> {
    /// 1-based position after sorting by descending weight.
    pub rank: usize,
    pub name: &'a str,
    pub weight: f64,
    pub share_pct: f64,
    pub explanation: &'a str,
}

/// Rank drivers by descending weight (stable ties keep definition order)
/// and attach 1-based ranks and shares.
pub fn ranked_rows(dataset: &Dataset) -> Vec<ReportRow<'_>> {
    dataset
        .ranked()
        .into_iter()
        .enumerate()
        .map(|(i, driver)| ReportRow {
            rank: i + 1,
            name: &driver.name,
            weight: driver.weight,
            share_pct: dataset.share(driver.weight),
            explanation: &driver.explanation,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Driver;

    fn dataset(entries: &[(&str, f64)]) -> Dataset {
        Dataset::new(
            entries
                .iter()
                .map(|&(name, weight)| Driver::new(name, weight, "").unwrap())
                .collect(),
        )
    }

    #[test]
    fn rows_are_ranked_descending_with_one_based_ranks() {
        let ds = dataset(&[("B", 3.0), ("A", 1.0), ("C", 7.0)]);
        let rows = ranked_rows(&ds);

        let ordered: Vec<(usize, &str)> = rows.iter().map(|r| (r.rank, r.name)).collect();
        assert_eq!(ordered, [(1, "C"), (2, "B"), (3, "A")]);
    }

    #[test]
    fn equal_weights_keep_definition_order() {
        let ds = dataset(&[("first", 5.0), ("second", 5.0), ("third", 5.0)]);
        let names: Vec<&str> = ranked_rows(&ds).iter().map(|r| r.name).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn even_split_has_equal_shares() {
        let ds = dataset(&[("A", 50.0), ("B", 50.0)]);
        let rows = ranked_rows(&ds);
        assert_eq!(rows[0].share_pct, 50.0);
        assert_eq!(rows[1].share_pct, 50.0);
    }

    #[test]
    fn ranked_shares_sum_to_one_hundred() {
        let ds = Dataset::builtin();
        let sum: f64 = ranked_rows(&ds).iter().map(|r| r.share_pct).sum();
        assert!((sum - 100.0).abs() < 0.1, "sum was {sum}");
    }
}
