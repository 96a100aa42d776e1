//! Split import candidates into importable and conflicting users.
//!
//! A candidate conflicts when any of their existing commitments overlaps the
//! target window. Candidates are judged against existing commitments only,
//! never against each other. Touching windows are not conflicts.

use std::collections::HashSet;

use eventdesk_domain::{Commitment, TimeWindow, UserId};

/// Outcome of [`partition_candidates`]. Both lists keep request order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    /// Candidates with no overlapping commitment.
    pub importable: Vec<UserId>,
    /// Candidates already committed during the target window.
    pub conflicting: Vec<UserId>,
}

/// Partition `candidates` against `commitments` for the `target` window.
///
/// Duplicate candidate ids collapse to their first occurrence. A commitment
/// to the target event itself always overlaps, so re-importing an attendee
/// reports a conflict.
pub fn partition_candidates(
    target: &TimeWindow,
    candidates: &[UserId],
    commitments: &[Commitment],
) -> Partition {
    let busy: HashSet<UserId> = commitments
        .iter()
        .filter(|commitment| commitment.window.overlaps(target))
        .map(|commitment| commitment.user_id)
        .collect();

    let mut seen = HashSet::with_capacity(candidates.len());
    let mut partition = Partition::default();

    for &user_id in candidates {
        if !seen.insert(user_id) {
            continue;
        }
        if busy.contains(&user_id) {
            partition.conflicting.push(user_id);
        } else {
            partition.importable.push(user_id);
        }
    }

    partition
}
