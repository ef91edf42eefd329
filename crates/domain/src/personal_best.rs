use std::fmt::{self, Display};

use chrono::{DateTime, Utc};
use log::debug;

use crate::{ExerciseID, LoggedSet, ReadError, Reps, UpdateError, Weight, WorkoutLog};

pub trait PersonalBestRepository {
    fn read_personal_bests(
        &self,
        exercise_id: ExerciseID,
    ) -> Result<Vec<PersonalBestSet>, ReadError>;
    fn replace_personal_bests(
        &self,
        exercise_id: ExerciseID,
        personal_bests: Vec<PersonalBestSet>,
    ) -> Result<(), UpdateError>;
}

/// Category of a personal best record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PBType {
    RepMax(u32),
    EstimatedRepMax(u32),
}

impl Display for PBType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PBType::RepMax(reps) => write!(f, "{reps}RM"),
            PBType::EstimatedRepMax(reps) => write!(f, "{reps}RM estimated"),
        }
    }
}

/// A superseded record, kept when a new best is set.
#[derive(Debug, Clone, PartialEq)]
pub struct PBHistoryInstance {
    pub timestamp: DateTime<Utc>,
    pub weight: Option<Weight>,
    pub reps: Option<Reps>,
    pub estimated_one_rep_max: Option<f32>,
}

/// The current best set for one exercise and category, with every previous
/// record it displaced. Derived data: recomputed whenever a workout log is
/// committed, never edited directly.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonalBestSet {
    pub set: LoggedSet,
    pub pb_type: PBType,
    pub estimated_one_rep_max: Option<f32>,
    /// Most recent previous record first. Append-only.
    pub history: Vec<PBHistoryInstance>,
}

impl PersonalBestSet {
    /// Push a displaced record onto the history. The history never contains
    /// two entries with the same timestamp for one category.
    pub fn record_previous(
        &mut self,
        instance: PBHistoryInstance,
    ) -> Result<(), PersonalBestError> {
        if self
            .history
            .iter()
            .any(|h| h.timestamp == instance.timestamp)
        {
            return Err(PersonalBestError::DuplicateTimestamp(instance.timestamp));
        }
        self.history.insert(0, instance);
        Ok(())
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PersonalBestError {
    #[error("duplicate personal best history timestamp {0}")]
    DuplicateTimestamp(DateTime<Utc>),
}

/// Estimated one-rep max after Epley. Undefined for zero reps; a single rep
/// is the lift itself.
#[must_use]
pub fn estimated_one_rep_max(weight: Weight, reps: Reps) -> Option<f32> {
    let reps = u32::from(reps);
    if reps == 0 {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    Some(f32::from(weight) * (1.0 + (reps as f32 - 1.0) / 30.0))
}

const TRACKED_REP_MAXES: [u32; 2] = [1, 5];

/// Recompute the personal bests of one exercise from sealed workout logs.
/// Logs are scanned in chronological order so the history reflects the order
/// in which records were actually set.
#[must_use]
pub fn personal_bests(workout_logs: &[WorkoutLog], exercise_id: ExerciseID) -> Vec<PersonalBestSet> {
    let mut logs = workout_logs
        .iter()
        .filter(|log| log.is_sealed())
        .collect::<Vec<_>>();
    logs.sort_by_key(|log| log.start_time);

    let mut bests: Vec<PersonalBestSet> = Vec::new();

    for log in logs {
        for set in log
            .exercises
            .iter()
            .filter(|e| e.exercise_id == exercise_id)
            .flat_map(|e| &e.sets)
        {
            let (Some(weight), Some(reps)) = (set.weight, set.reps) else {
                continue;
            };
            for rep_max in TRACKED_REP_MAXES {
                if u32::from(reps) >= rep_max {
                    update_best(&mut bests, PBType::RepMax(rep_max), set, weight, None);
                }
            }
            if let Some(estimate) = estimated_one_rep_max(weight, reps) {
                update_best(
                    &mut bests,
                    PBType::EstimatedRepMax(1),
                    set,
                    weight,
                    Some(estimate),
                );
            }
        }
    }

    bests
}

fn update_best(
    bests: &mut Vec<PersonalBestSet>,
    pb_type: PBType,
    set: &LoggedSet,
    weight: Weight,
    estimate: Option<f32>,
) {
    let challenger = match pb_type {
        PBType::RepMax(_) => f32::from(weight),
        PBType::EstimatedRepMax(_) => estimate.unwrap_or_default(),
    };

    match bests.iter_mut().find(|b| b.pb_type == pb_type) {
        Some(best) => {
            let holder = match pb_type {
                PBType::RepMax(_) => best.set.weight.map(f32::from).unwrap_or_default(),
                PBType::EstimatedRepMax(_) => best.estimated_one_rep_max.unwrap_or_default(),
            };
            if challenger > holder {
                let previous = PBHistoryInstance {
                    timestamp: best.set.timestamp,
                    weight: best.set.weight,
                    reps: best.set.reps,
                    estimated_one_rep_max: best.estimated_one_rep_max,
                };
                if let Err(err) = best.record_previous(previous) {
                    debug!("discarding personal best history entry: {err}");
                }
                best.set = set.clone();
                best.estimated_one_rep_max = estimate;
            }
        }
        None => bests.push(PersonalBestSet {
            set: set.clone(),
            pb_type,
            estimated_one_rep_max: estimate,
            history: Vec::new(),
        }),
    }
}
