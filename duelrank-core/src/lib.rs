/// duelrank-core: Pairwise ranking sequencer.
///
/// Enumerate every unordered pair of a list exactly once, present pairs
/// sequentially, tally one win per recorded choice, hand the final score
/// table off exactly once. No IO, no HTTP, no filesystem — bring your own
/// presenter.
///
/// Items are identified by caller-provided `i64` IDs. The crate handles the
/// internal mapping to array indices — callers never think about indices.
///
/// # Quick start
///
/// ```rust
/// use duelrank_core::RankingSession;
///
/// let item_ids = vec![100, 200, 300]; // your IDs — any i64 values
/// let mut session = RankingSession::new(&item_ids).unwrap();
///
/// while let Some((a, _b)) = session.current_pair() {
///     session.record_choice(a).unwrap(); // always pick the first item
///     session.advance();
/// }
///
/// let scores = session.take_scores().unwrap();
/// assert_eq!(scores.wins(100), 2); // beat both 200 and 300
/// ```

pub mod error;
pub mod pairing;
pub mod session;
pub mod standings;
pub mod types;

// Re-export primary public API at crate root.
pub use error::{ChoiceError, SessionError};
pub use pairing::{enumerate_pairs, pair_count};
pub use session::{RankingSession, SessionState};
pub use standings::standings;
pub use types::{Pair, ScoreTable, Standing};
