use log::warn;

use crate::{ExerciseLog, LoggedSet, LoggedSetID, SetID};

/// Derive the identity under which a performed set is recorded. This is the
/// single source of truth for correlating planned and logged sets: every
/// lookup must derive the same id from the same inputs.
///
/// With more than one round the id is `"{planned}-round-{round_index}"`
/// (0-based); with a single round the planned id is used unchanged. A round
/// count of zero is invalid input and treated as one.
#[must_use]
pub fn logged_set_id(planned_set_id: SetID, round_index: u32, total_rounds: u32) -> LoggedSetID {
    if total_rounds.max(1) > 1 {
        LoggedSetID::new(&format!("{}-round-{round_index}", *planned_set_id))
    } else {
        LoggedSetID::from(planned_set_id)
    }
}

/// Look up the logged set fulfilling the given planned set and round. A miss
/// means "not yet performed", not an error. Two logged sets with the same
/// derived id are a data-integrity fault of the log's producer; the later
/// entry is treated as authoritative and a diagnostic is emitted.
#[must_use]
pub fn find_logged_set<'a>(
    exercise_log: &'a ExerciseLog,
    planned_set_id: SetID,
    round_index: u32,
    total_rounds: u32,
) -> Option<&'a LoggedSet> {
    let id = logged_set_id(planned_set_id, round_index, total_rounds);
    let mut matches = exercise_log.sets.iter().filter(|s| s.id == id);
    let first = matches.next()?;
    match matches.last() {
        Some(last) => {
            warn!(
                "duplicate logged set id {id} in exercise log {}, keeping latest entry",
                *exercise_log.id
            );
            Some(last)
        }
        None => Some(first),
    }
}
