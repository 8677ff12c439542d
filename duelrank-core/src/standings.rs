/// Final ranking from a completed score table.
use crate::types::{ScoreTable, Standing};

/// Rank items by win count, descending. Ties keep the caller's input order —
/// the sort is stable, so equal-win items never shuffle between runs.
///
/// `item_ids` is the same list the session was started with; IDs missing
/// from the table read as zero wins.
pub fn standings(scores: &ScoreTable, item_ids: &[i64]) -> Vec<Standing> {
    let comparisons = item_ids.len().saturating_sub(1);
    let mut rows: Vec<Standing> = item_ids
        .iter()
        .map(|&id| Standing {
            item: id,
            wins: scores.wins(id),
            comparisons,
        })
        .collect();
    rows.sort_by(|a, b| b.wins.cmp(&a.wins));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_from_session(item_ids: &[i64], picks: &[i64]) -> ScoreTable {
        let mut session = crate::session::RankingSession::new(item_ids).unwrap();
        for &pick in picks {
            session.record_choice(pick).unwrap();
            session.advance();
        }
        session.take_scores().unwrap()
    }

    #[test]
    fn test_sorted_by_wins_descending() {
        // Pairs over [1,2,3]: (1,2) (1,3) (2,3). Picks: 1, 3, 3.
        let table = table_from_session(&[1, 2, 3], &[1, 3, 3]);
        let rows = standings(&table, &[1, 2, 3]);

        assert_eq!(rows[0].item, 3);
        assert_eq!(rows[0].wins, 2);
        assert_eq!(rows[1].item, 1);
        assert_eq!(rows[2].item, 2);
        assert_eq!(rows[2].wins, 0);
    }

    #[test]
    fn test_ties_keep_input_order() {
        // Picks give every item exactly one win: 1, 3, 2.
        let table = table_from_session(&[1, 2, 3], &[1, 3, 2]);

        let rows = standings(&table, &[1, 2, 3]);
        assert_eq!(rows.iter().map(|r| r.item).collect::<Vec<_>>(), vec![1, 2, 3]);

        // Different input order, same tie — order follows input.
        let rows = standings(&table, &[3, 1, 2]);
        assert_eq!(rows.iter().map(|r| r.item).collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[test]
    fn test_comparisons_is_round_robin_participation() {
        let table = table_from_session(&[1, 2, 3, 4], &[1, 1, 1, 2, 2, 3]);
        let rows = standings(&table, &[1, 2, 3, 4]);
        for row in &rows {
            assert_eq!(row.comparisons, 3);
            assert!(row.wins as usize <= row.comparisons);
        }
    }

    #[test]
    fn test_empty_input() {
        let rows = standings(&ScoreTable::default(), &[]);
        assert!(rows.is_empty());
    }
}
