use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Utc};
use derive_more::{AsRef, Deref, Display};
use uuid::Uuid;

use crate::{
    CreateError, DeleteError, Distance, ExerciseID, MetricID, Name, PlannedExerciseID, RPE,
    ReadError, Reps, RepsTarget, RoutineID, SetID, SetType, SupersetMembership, Tempo, Time,
    UpdateError, Weight,
};

pub trait WorkoutLogRepository {
    fn read_workout_logs(&self) -> Result<Vec<WorkoutLog>, ReadError>;
    fn read_workout_log(&self, id: WorkoutLogID) -> Result<WorkoutLog, ReadError>;
    fn read_workout_logs_by_exercise(&self, id: ExerciseID) -> Result<Vec<WorkoutLog>, ReadError>;
    fn create_workout_log(&self, workout_log: WorkoutLog) -> Result<WorkoutLog, CreateError>;
    fn modify_workout_log(
        &self,
        id: WorkoutLogID,
        notes: Option<String>,
        end_time: Option<DateTime<Utc>>,
        exercises: Option<Vec<ExerciseLog>>,
    ) -> Result<WorkoutLog, UpdateError>;
    fn delete_workout_log(&self, id: WorkoutLogID) -> Result<WorkoutLogID, DeleteError>;
}

/// The record of one performed session.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutLog {
    pub id: WorkoutLogID,
    pub routine_id: Option<RoutineID>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub exercises: Vec<ExerciseLog>,
    pub notes: String,
    pub perceived_effort: Option<RPE>,
}

impl WorkoutLog {
    /// A log is sealed once its end time is set; sealed logs are never
    /// edited, only superseded.
    #[must_use]
    pub fn is_sealed(&self) -> bool {
        self.end_time.is_some()
    }

    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.end_time.map(|end_time| end_time - self.start_time)
    }

    #[must_use]
    pub fn exercise_ids(&self) -> BTreeSet<ExerciseID> {
        self.exercises
            .iter()
            .map(|e| e.exercise_id)
            .collect::<BTreeSet<_>>()
    }

    #[must_use]
    pub fn avg_reps(&self) -> Option<f32> {
        let reps = self
            .exercises
            .iter()
            .flat_map(|e| &e.sets)
            .filter_map(|s| s.reps)
            .collect::<Vec<_>>();
        if reps.is_empty() {
            None
        } else {
            #[allow(clippy::cast_precision_loss)]
            Some(reps.iter().map(|r| u32::from(*r)).sum::<u32>() as f32 / reps.len() as f32)
        }
    }

    #[must_use]
    pub fn avg_weight(&self) -> Option<f32> {
        let weights = self
            .exercises
            .iter()
            .flat_map(|e| &e.sets)
            .filter_map(|s| s.weight)
            .collect::<Vec<_>>();
        if weights.is_empty() {
            None
        } else {
            #[allow(clippy::cast_precision_loss)]
            Some(weights.iter().map(|w| f32::from(*w)).sum::<f32>() / weights.len() as f32)
        }
    }

    /// Total reps times weight across all sets that have both.
    #[must_use]
    pub fn volume_load(&self) -> u32 {
        self.exercises
            .iter()
            .flat_map(|e| &e.sets)
            .filter_map(|s| match (s.reps, s.weight) {
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_precision_loss,
                    clippy::cast_sign_loss
                )]
                (Some(reps), Some(weight)) => {
                    Some((u32::from(reps) as f32 * f32::from(weight)).round() as u32)
                }
                (Some(reps), None) => Some(u32::from(reps)),
                _ => None,
            })
            .sum::<u32>()
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutLogID(Uuid);

impl WorkoutLogID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutLogID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutLogID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// The performed counterpart of a planned exercise. The id mirrors the
/// planned exercise id so plan and log stay correlated.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseLog {
    pub id: PlannedExerciseID,
    pub exercise_id: ExerciseID,
    pub name: Name,
    pub sets: Vec<LoggedSet>,
    pub superset: Option<SupersetMembership>,
    pub session_status: Option<SessionStatus>,
}

/// In-session marker set by the user, not derived from logged data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Skipped,
    DoLater,
}

/// A performed set. Each metric is a mirrored pair: the logged value and a
/// copy of the target at the time of logging, kept for later comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedSet {
    pub id: LoggedSetID,
    pub planned_set_id: Option<SetID>,
    pub exercise_id: ExerciseID,
    pub set_type: SetType,
    pub reps: Option<Reps>,
    pub target_reps: Option<RepsTarget>,
    pub weight: Option<Weight>,
    pub target_weight: Option<Weight>,
    pub time: Option<Time>,
    pub target_time: Option<Time>,
    pub distance: Option<Distance>,
    pub target_distance: Option<Distance>,
    pub rest: Option<Time>,
    pub target_rest: Option<Time>,
    pub tempo: Option<Tempo>,
    pub target_tempo: Option<Tempo>,
    pub rpe: Option<RPE>,
    pub timestamp: DateTime<Utc>,
    pub field_order: Vec<MetricID>,
}

/// Printable identity of a logged set: the planned set id, suffixed with the
/// round ordinal when the plan repeats across rounds, or a fresh opaque token
/// for ad-hoc sets.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoggedSetID(String);

impl LoggedSetID {
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Random identity for a set that has no planned counterpart.
    #[must_use]
    pub fn fresh() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl From<SetID> for LoggedSetID {
    fn from(value: SetID) -> Self {
        Self(value.to_string())
    }
}
