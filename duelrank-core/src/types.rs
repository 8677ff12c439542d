use std::collections::{BTreeMap, HashSet};

use crate::error::SessionError;

/// A pair to be presented: two distinct item IDs, the first one earlier in
/// the caller's input order.
pub type Pair = (i64, i64);

/// Internal indexed pair (usize indices, not caller IDs).
pub(crate) type IndexedPair = (usize, usize);

/// Win counts per item, accumulated across one session.
///
/// Every item of the session has an entry, zero included — absence never has
/// to mean anything. Serializes (with the `serde` feature) as a flat JSON
/// object mapping ID to count, which is the shape the submission consumer
/// expects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ScoreTable {
    wins: BTreeMap<i64, u32>,
}

impl ScoreTable {
    /// A table with an explicit zero for every item.
    pub fn zeroed(item_ids: &[i64]) -> Self {
        ScoreTable {
            wins: item_ids.iter().map(|&id| (id, 0)).collect(),
        }
    }

    /// Win count for an item. Unknown IDs read as zero.
    pub fn wins(&self, item_id: i64) -> u32 {
        self.wins.get(&item_id).copied().unwrap_or(0)
    }

    /// Sum of all win counts — equals the number of pairs recorded.
    pub fn total_wins(&self) -> u32 {
        self.wins.values().sum()
    }

    /// Iterate entries in ascending ID order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, u32)> + '_ {
        self.wins.iter().map(|(&id, &count)| (id, count))
    }

    pub fn len(&self) -> usize {
        self.wins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wins.is_empty()
    }

    pub(crate) fn record_win(&mut self, item_id: i64) {
        *self.wins.entry(item_id).or_insert(0) += 1;
    }
}

/// One row of the final ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Standing {
    /// Item ID.
    pub item: i64,
    /// Pairs this item was chosen in.
    pub wins: u32,
    /// Pairs this item participated in (n − 1 for a full round-robin).
    pub comparisons: usize,
}

/// The session's item list, validated on construction: IDs are unique and
/// keep the caller's order.
#[derive(Debug)]
pub(crate) struct IdMap {
    ids: Vec<i64>,
}

impl IdMap {
    /// Build the map, rejecting duplicate IDs.
    pub fn from_ids(ids: &[i64]) -> Result<Self, SessionError> {
        let mut seen = HashSet::with_capacity(ids.len());
        for &id in ids {
            if !seen.insert(id) {
                return Err(SessionError::DuplicateItem(id));
            }
        }
        Ok(IdMap { ids: ids.to_vec() })
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn ids(&self) -> &[i64] {
        &self.ids
    }
}
