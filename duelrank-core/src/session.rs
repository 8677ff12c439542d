/// Session state machine for sequential pair presentation.
///
/// One `RankingSession` owns one pair queue and one score table — no
/// process-wide state, so independent sessions can run side by side.
/// The caller drives the machine: present `current_pair()`, feed the user's
/// pick to `record_choice()`, then `advance()` once any transition animation
/// or delay has played out. The score table reflects a choice the moment it
/// is recorded, before any such delay begins.
use std::collections::VecDeque;

use crate::error::{ChoiceError, SessionError};
use crate::pairing::enumerate_pairs;
use crate::types::{IdMap, Pair, ScoreTable};

/// Where the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// A pair is on display; exactly one choice signal will be accepted.
    Presenting,
    /// The choice for the current pair is tallied; waiting for `advance()`.
    Recorded,
    /// Every pair has been presented (or the session was aborted).
    Complete,
}

#[derive(Debug)]
pub struct RankingSession {
    id_map: IdMap,
    /// Pairs not yet presented, consumed front-to-back.
    queue: VecDeque<Pair>,
    /// The pair on display, while in `Presenting` or `Recorded`.
    current: Option<Pair>,
    scores: ScoreTable,
    state: SessionState,
    total_pairs: usize,
    pairs_presented: usize,
    scores_taken: bool,
    aborted: bool,
}

impl RankingSession {
    /// Start a session over `item_ids`, building the full pair queue up
    /// front. Duplicate IDs are rejected. With zero or one item there is
    /// nothing to compare: the session starts out `Complete` and
    /// `had_pairs()` returns false so the presenter can say so.
    pub fn new(item_ids: &[i64]) -> Result<Self, SessionError> {
        let id_map = IdMap::from_ids(item_ids)?;
        let mut queue: VecDeque<Pair> = enumerate_pairs(item_ids).into();
        let total_pairs = queue.len();

        let current = queue.pop_front();
        let state = if current.is_some() {
            SessionState::Presenting
        } else {
            SessionState::Complete
        };

        Ok(RankingSession {
            scores: ScoreTable::zeroed(id_map.ids()),
            id_map,
            queue,
            current,
            state,
            total_pairs,
            pairs_presented: 0,
            scores_taken: false,
            aborted: false,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Number of items being ranked.
    pub fn num_items(&self) -> usize {
        self.id_map.len()
    }

    /// Whether the session ever had pairs to present.
    pub fn had_pairs(&self) -> bool {
        self.total_pairs > 0
    }

    pub fn total_pairs(&self) -> usize {
        self.total_pairs
    }

    /// Pairs whose choice has been recorded so far.
    pub fn pairs_presented(&self) -> usize {
        self.pairs_presented
    }

    /// Pairs still to come, including the one on display.
    pub fn pairs_remaining(&self) -> usize {
        self.total_pairs - self.pairs_presented
    }

    pub fn is_complete(&self) -> bool {
        self.state == SessionState::Complete
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    /// The pair on display. `Some` only while `Presenting` — once a choice
    /// is recorded the pair is no longer up for choosing.
    pub fn current_pair(&self) -> Option<Pair> {
        match self.state {
            SessionState::Presenting => self.current,
            _ => None,
        }
    }

    /// Record the user's pick for the presented pair.
    ///
    /// Accepted only while `Presenting`, and only for one of the two
    /// presented IDs. Anything else — a second signal for the same pair, a
    /// signal during the `Recorded` gap, an ID from some other pair — is
    /// rejected without touching the score table.
    pub fn record_choice(&mut self, chosen: i64) -> Result<(), ChoiceError> {
        if self.state != SessionState::Presenting {
            return Err(ChoiceError::NotPresenting);
        }
        let (a, b) = self.current.expect("Presenting state always has a pair");
        if chosen != a && chosen != b {
            return Err(ChoiceError::NotInPair(chosen));
        }

        self.scores.record_win(chosen);
        self.pairs_presented += 1;
        self.state = SessionState::Recorded;
        Ok(())
    }

    /// Move from `Recorded` to the next `Presenting`, or to `Complete` when
    /// the queue is exhausted. A no-op in any other state, so a stray extra
    /// call from the presenter cannot skip a pair.
    pub fn advance(&mut self) -> SessionState {
        if self.state == SessionState::Recorded {
            self.current = self.queue.pop_front();
            self.state = if self.current.is_some() {
                SessionState::Presenting
            } else {
                SessionState::Complete
            };
        }
        self.state
    }

    /// Abort the session: the remaining queue and all recorded scores are
    /// discarded and the session becomes inert. `take_scores()` will never
    /// succeed afterwards.
    pub fn abort(&mut self) {
        self.queue.clear();
        self.current = None;
        self.scores = ScoreTable::default();
        self.state = SessionState::Complete;
        self.aborted = true;
    }

    /// Hand off the final score table. Succeeds exactly once, and only once
    /// the session is `Complete`; afterwards the session is inert.
    pub fn take_scores(&mut self) -> Result<ScoreTable, SessionError> {
        if self.aborted {
            return Err(SessionError::Aborted);
        }
        if self.state != SessionState::Complete {
            return Err(SessionError::NotComplete {
                remaining: self.pairs_remaining(),
            });
        }
        if self.scores_taken {
            return Err(SessionError::AlreadyTaken);
        }
        self.scores_taken = true;
        Ok(std::mem::take(&mut self.scores))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive a session to completion with a fixed list of picks.
    fn run_with_picks(item_ids: &[i64], picks: &[i64]) -> RankingSession {
        let mut session = RankingSession::new(item_ids).unwrap();
        for &pick in picks {
            session.record_choice(pick).unwrap();
            session.advance();
        }
        session
    }

    #[test]
    fn test_scenario_three_items() {
        // Items [X, Y, Z] as [1, 2, 3]: pairs (X,Y), (X,Z), (Y,Z) in order;
        // picks X, Z, Z — final scores X:1, Y:0, Z:2.
        let mut session = RankingSession::new(&[1, 2, 3]).unwrap();
        assert_eq!(session.total_pairs(), 3);

        assert_eq!(session.current_pair(), Some((1, 2)));
        session.record_choice(1).unwrap();
        assert_eq!(session.advance(), SessionState::Presenting);

        assert_eq!(session.current_pair(), Some((1, 3)));
        session.record_choice(3).unwrap();
        session.advance();

        assert_eq!(session.current_pair(), Some((2, 3)));
        session.record_choice(3).unwrap();
        assert_eq!(session.advance(), SessionState::Complete);

        let scores = session.take_scores().unwrap();
        assert_eq!(scores.wins(1), 1);
        assert_eq!(scores.wins(2), 0);
        assert_eq!(scores.wins(3), 2);
    }

    #[test]
    fn test_scenario_empty_collection() {
        let session = RankingSession::new(&[]).unwrap();
        assert!(session.is_complete());
        assert!(!session.had_pairs());
        assert_eq!(session.current_pair(), None);
    }

    #[test]
    fn test_scenario_two_items() {
        let mut session = run_with_picks(&[10, 20], &[10]);
        assert!(session.is_complete());
        assert_eq!(session.pairs_presented(), 1);
        let scores = session.take_scores().unwrap();
        assert_eq!(scores.wins(10), 1);
        assert_eq!(scores.wins(20), 0);
    }

    #[test]
    fn test_single_item_completes_without_presenting() {
        let session = RankingSession::new(&[42]).unwrap();
        assert!(session.is_complete());
        assert!(!session.had_pairs());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = RankingSession::new(&[1, 2, 2, 3]).unwrap_err();
        assert_eq!(err, SessionError::DuplicateItem(2));
    }

    #[test]
    fn test_second_choice_for_same_pair_is_rejected() {
        let mut session = RankingSession::new(&[1, 2, 3]).unwrap();
        session.record_choice(1).unwrap();

        // Rapid second click before the presenter advances.
        let err = session.record_choice(2).unwrap_err();
        assert_eq!(err, ChoiceError::NotPresenting);

        session.advance();
        session.record_choice(3).unwrap();
        session.advance();
        session.record_choice(3).unwrap();
        session.advance();

        let scores = session.take_scores().unwrap();
        // Total unchanged by the rejected signal: one increment per pair.
        assert_eq!(scores.total_wins(), 3);
        assert_eq!(scores.wins(2), 0);
    }

    #[test]
    fn test_choice_outside_presented_pair_is_ignored() {
        let mut session = RankingSession::new(&[1, 2, 3]).unwrap();
        assert_eq!(session.current_pair(), Some((1, 2)));

        let err = session.record_choice(3).unwrap_err();
        assert_eq!(err, ChoiceError::NotInPair(3));
        // Still presenting the same pair, nothing counted.
        assert_eq!(session.current_pair(), Some((1, 2)));
        assert_eq!(session.pairs_presented(), 0);
    }

    #[test]
    fn test_advance_while_presenting_skips_nothing() {
        let mut session = RankingSession::new(&[1, 2, 3]).unwrap();
        assert_eq!(session.advance(), SessionState::Presenting);
        assert_eq!(session.current_pair(), Some((1, 2)));
    }

    #[test]
    fn test_total_wins_equals_pairs_presented() {
        let ids: Vec<i64> = (0..6).collect();
        let picks: Vec<i64> = enumerate_pairs_of(&ids);
        let mut session = run_with_picks(&ids, &picks);

        let scores = session.take_scores().unwrap();
        assert_eq!(scores.total_wins() as usize, crate::pairing::pair_count(6));
    }

    /// Always pick the second member of each pair.
    fn enumerate_pairs_of(ids: &[i64]) -> Vec<i64> {
        crate::pairing::enumerate_pairs(ids)
            .into_iter()
            .map(|(_, b)| b)
            .collect()
    }

    #[test]
    fn test_no_item_exceeds_participation_count() {
        // Always pick the first member: item 0 wins everything it can.
        let ids: Vec<i64> = (0..5).collect();
        let picks: Vec<i64> = crate::pairing::enumerate_pairs(&ids)
            .into_iter()
            .map(|(a, _)| a)
            .collect();
        let mut session = run_with_picks(&ids, &picks);

        let scores = session.take_scores().unwrap();
        for (_, count) in scores.iter() {
            assert!(count as usize <= ids.len() - 1);
        }
        assert_eq!(scores.wins(0) as usize, ids.len() - 1);
    }

    #[test]
    fn test_scores_taken_exactly_once() {
        let mut session = run_with_picks(&[1, 2], &[2]);
        assert!(session.take_scores().is_ok());
        assert_eq!(session.take_scores().unwrap_err(), SessionError::AlreadyTaken);
    }

    #[test]
    fn test_scores_unavailable_before_completion() {
        let mut session = RankingSession::new(&[1, 2, 3]).unwrap();
        session.record_choice(1).unwrap();
        session.advance();

        let err = session.take_scores().unwrap_err();
        assert_eq!(err, SessionError::NotComplete { remaining: 2 });
    }

    #[test]
    fn test_abort_discards_everything() {
        let mut session = RankingSession::new(&[1, 2, 3]).unwrap();
        session.record_choice(1).unwrap();
        session.abort();

        assert!(session.is_complete());
        assert!(session.is_aborted());
        assert_eq!(session.current_pair(), None);
        assert_eq!(session.take_scores().unwrap_err(), SessionError::Aborted);
        assert_eq!(session.record_choice(1).unwrap_err(), ChoiceError::NotPresenting);
    }

    #[test]
    fn test_presentation_order_is_reproducible() {
        let ids = vec![30, 10, 20];
        let collect_order = || {
            let mut session = RankingSession::new(&ids).unwrap();
            let mut order = Vec::new();
            while let Some((a, b)) = session.current_pair() {
                order.push((a, b));
                session.record_choice(a).unwrap();
                session.advance();
            }
            order
        };
        assert_eq!(collect_order(), collect_order());
    }

    #[test]
    fn test_queue_shrinks_by_one_per_presentation() {
        let mut session = RankingSession::new(&[1, 2, 3, 4]).unwrap();
        let total = session.total_pairs();
        for expected_remaining in (1..=total).rev() {
            assert_eq!(session.pairs_remaining(), expected_remaining);
            let (a, _) = session.current_pair().unwrap();
            session.record_choice(a).unwrap();
            session.advance();
        }
        assert_eq!(session.pairs_remaining(), 0);
    }
}
