#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;

mod error;
mod identity;
mod labels;
mod metrics;
mod name;
mod personal_best;
mod progress;
mod record;
mod routine;
mod section;
mod service;
mod session;
mod target;
mod units;
mod workout_log;

pub use error::{CreateError, DeleteError, ReadError, StorageError, UpdateError};
pub use identity::{find_logged_set, logged_set_id};
pub use labels::{DefaultLabels, LabelKey, Labels};
pub use metrics::{
    Distance, DistanceError, MetricID, RPE, RPEError, Reps, RepsError, Tempo, TempoError, Time,
    TimeError, Weight, WeightError,
};
pub use name::{Name, NameError};
pub use personal_best::{
    PBHistoryInstance, PBType, PersonalBestError, PersonalBestRepository, PersonalBestSet,
    estimated_one_rep_max, personal_bests,
};
pub use progress::{ExerciseStatus, Progress, compute_status, format_set};
pub use record::{
    FieldPair, RecordMode, RepsField, SetData, SetRecord, synthesize_set_record,
};
pub use routine::{
    ExerciseID, PlannedExercise, PlannedExerciseID, RoundInfo, Routine, RoutineID,
    RoutineRepository, SetID, SetType, SupersetID, SupersetMembership, SupersetType, TargetSet,
};
pub use section::{SectionColor, WorkoutSection, sort_by_section};
pub use service::Service;
pub use session::SectionSelection;
pub use target::{
    DisplayValue, RepsInput, RepsTarget, TargetContext, resolve_reps_target,
};
pub use units::{Converter, KG_PER_LB, UnitConverter, WeightUnit};
pub use workout_log::{
    ExerciseLog, LoggedSet, LoggedSetID, SessionStatus, WorkoutLog, WorkoutLogID,
    WorkoutLogRepository,
};
