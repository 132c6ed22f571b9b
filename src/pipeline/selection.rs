//! Top-N selection by repeated maximum extraction.
//!
//! Works on a copy of the ranking values so the scan order, and with it the
//! tie-break, stays the insertion order of the filtered set: the first
//! maximal record found wins each round.

use tracing::info;

use crate::models::{FilteredRecord, RankColumn};

/// Select up to `top_n` records with the highest value of `rank_column`,
/// in descending rank order.
///
/// Fewer matches than `top_n` is not an error; the result is simply shorter.
/// Compatibility quirk carried over from the original tool: `top_n <= 1`
/// yields an empty selection, the extraction loop never runs.
pub fn select_top_n(
    filtered: &[FilteredRecord],
    top_n: usize,
    rank_column: RankColumn,
) -> Vec<FilteredRecord> {
    let mut selected = Vec::new();

    if top_n > 1 {
        // Working copy of just the ranking values; extraction marks a slot
        // as taken instead of reshuffling, preserving insertion order.
        let mut values: Vec<Option<f64>> = filtered
            .iter()
            .map(|record| Some(record.rank_value(rank_column)))
            .collect();

        while selected.len() < top_n {
            let mut best: Option<(usize, f64)> = None;
            for (index, value) in values.iter().enumerate() {
                if let Some(value) = *value {
                    match best {
                        Some((_, best_value)) if value <= best_value => {}
                        _ => best = Some((index, value)),
                    }
                }
            }

            match best {
                Some((index, _)) => {
                    values[index] = None;
                    selected.push(filtered[index].clone());
                }
                None => break, // working set exhausted
            }
        }
    }

    info!(
        "Selected {} of {} records by {}",
        selected.len(),
        filtered.len(),
        rank_column
    );
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, brightness: f64, distance: f64) -> FilteredRecord {
        FilteredRecord {
            id,
            ra: 0.0,
            dec: 0.0,
            brightness,
            distance,
        }
    }

    #[test]
    fn test_selects_in_descending_order() {
        let filtered = vec![
            record(1, 2.1, 0.5),
            record(2, 5.6, 0.1),
            record(3, 3.3, 0.9),
        ];
        let selected = select_top_n(&filtered, 2, RankColumn::Brightness);
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].id, 2);
        assert_eq!(selected[1].id, 3);
    }

    #[test]
    fn test_fewer_matches_than_n() {
        let filtered = vec![record(1, 2.1, 0.5), record(2, 5.6, 0.1)];
        let selected = select_top_n(&filtered, 10, RankColumn::Brightness);
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].id, 2);
        assert_eq!(selected[1].id, 1);
    }

    #[test]
    fn test_n_of_one_yields_nothing() {
        // Boundary behavior preserved from the original tool.
        let filtered = vec![record(1, 2.1, 0.5), record(2, 5.6, 0.1)];
        assert!(select_top_n(&filtered, 1, RankColumn::Brightness).is_empty());
        assert!(select_top_n(&filtered, 0, RankColumn::Brightness).is_empty());
    }

    #[test]
    fn test_tie_break_is_first_encountered() {
        let filtered = vec![
            record(10, 4.0, 0.5),
            record(20, 4.0, 0.1),
            record(30, 4.0, 0.9),
        ];
        let selected = select_top_n(&filtered, 3, RankColumn::Brightness);
        assert_eq!(selected[0].id, 10);
        assert_eq!(selected[1].id, 20);
        assert_eq!(selected[2].id, 30);
    }

    #[test]
    fn test_ranking_by_distance() {
        let filtered = vec![
            record(1, 2.1, 0.5),
            record(2, 5.6, 0.1),
            record(3, 3.3, 0.9),
        ];
        let selected = select_top_n(&filtered, 2, RankColumn::Distance);
        assert_eq!(selected[0].id, 3);
        assert_eq!(selected[1].id, 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(select_top_n(&[], 5, RankColumn::Brightness).is_empty());
    }
}
