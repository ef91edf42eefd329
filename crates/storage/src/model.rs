//! Wire models for the persistence boundary. Every optional field is always
//! serialized, `None` as an explicit `null`, so round-trips preserve the
//! null-vs-absent distinction of the stored records.

use chrono::{DateTime, Utc};
use liftlog_domain as domain;
use uuid::Uuid;

/// Structured reps target, discriminated by `type`.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RepsTarget {
    Exact { value: u32 },
    Range { min: u32, max: u32 },
    MinPlus { value: u32 },
    Amrap,
    Max,
    MaxFraction { divisor: u32 },
}

impl From<domain::RepsTarget> for RepsTarget {
    fn from(value: domain::RepsTarget) -> Self {
        match value {
            domain::RepsTarget::Exact { value } => RepsTarget::Exact {
                value: value.into(),
            },
            domain::RepsTarget::Range { min, max } => RepsTarget::Range {
                min: min.into(),
                max: max.into(),
            },
            domain::RepsTarget::MinPlus { value } => RepsTarget::MinPlus {
                value: value.into(),
            },
            domain::RepsTarget::Amrap => RepsTarget::Amrap,
            domain::RepsTarget::Max => RepsTarget::Max,
            domain::RepsTarget::MaxFraction { divisor } => RepsTarget::MaxFraction { divisor },
        }
    }
}

impl TryFrom<RepsTarget> for domain::RepsTarget {
    type Error = domain::RepsError;

    fn try_from(value: RepsTarget) -> Result<Self, Self::Error> {
        Ok(match value {
            RepsTarget::Exact { value } => domain::RepsTarget::Exact {
                value: domain::Reps::new(value)?,
            },
            RepsTarget::Range { min, max } => domain::RepsTarget::Range {
                min: domain::Reps::new(min)?,
                max: domain::Reps::new(max)?,
            },
            RepsTarget::MinPlus { value } => domain::RepsTarget::MinPlus {
                value: domain::Reps::new(value)?,
            },
            RepsTarget::Amrap => domain::RepsTarget::Amrap,
            RepsTarget::Max => domain::RepsTarget::Max,
            RepsTarget::MaxFraction { divisor } => domain::RepsTarget::MaxFraction { divisor },
        })
    }
}

/// Raw reps specification as found on the wire: a structured union, the
/// legacy flat bounds pair, or a bare number.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(untagged)]
pub enum RepsInput {
    Structured(RepsTarget),
    Number(u32),
    Bounds { min: Option<u32>, max: Option<u32> },
}

impl RepsInput {
    /// Resolve to a structured target. Malformed input yields `None`; a
    /// record with an unusable target still loads, with no target specified.
    #[must_use]
    pub fn resolve(&self) -> Option<domain::RepsTarget> {
        match self {
            RepsInput::Structured(target) => domain::RepsTarget::try_from(*target)
                .ok()
                .and_then(|t| domain::resolve_reps_target(&domain::RepsInput::Structured(t))),
            RepsInput::Number(value) => {
                domain::resolve_reps_target(&domain::RepsInput::Number(*value))
            }
            RepsInput::Bounds { min, max } => {
                domain::resolve_reps_target(&domain::RepsInput::Bounds {
                    min: *min,
                    max: *max,
                })
            }
        }
    }
}

impl From<domain::RepsTarget> for RepsInput {
    fn from(value: domain::RepsTarget) -> Self {
        RepsInput::Structured(value.into())
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SetType {
    Standard,
    WarmUp,
    Amrap,
    DropSet,
    Failure,
    MyoRep,
    RestPause,
    Custom,
    Superset,
}

impl From<domain::SetType> for SetType {
    fn from(value: domain::SetType) -> Self {
        match value {
            domain::SetType::Standard => SetType::Standard,
            domain::SetType::WarmUp => SetType::WarmUp,
            domain::SetType::Amrap => SetType::Amrap,
            domain::SetType::DropSet => SetType::DropSet,
            domain::SetType::Failure => SetType::Failure,
            domain::SetType::MyoRep => SetType::MyoRep,
            domain::SetType::RestPause => SetType::RestPause,
            domain::SetType::Custom => SetType::Custom,
            domain::SetType::Superset => SetType::Superset,
        }
    }
}

impl From<SetType> for domain::SetType {
    fn from(value: SetType) -> Self {
        match value {
            SetType::Standard => domain::SetType::Standard,
            SetType::WarmUp => domain::SetType::WarmUp,
            SetType::Amrap => domain::SetType::Amrap,
            SetType::DropSet => domain::SetType::DropSet,
            SetType::Failure => domain::SetType::Failure,
            SetType::MyoRep => domain::SetType::MyoRep,
            SetType::RestPause => domain::SetType::RestPause,
            SetType::Custom => domain::SetType::Custom,
            SetType::Superset => domain::SetType::Superset,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutSection {
    WarmUp,
    MainLift,
    Cardio,
    Finisher,
    CoolDown,
    None,
}

impl From<domain::WorkoutSection> for WorkoutSection {
    fn from(value: domain::WorkoutSection) -> Self {
        match value {
            domain::WorkoutSection::WarmUp => WorkoutSection::WarmUp,
            domain::WorkoutSection::MainLift => WorkoutSection::MainLift,
            domain::WorkoutSection::Cardio => WorkoutSection::Cardio,
            domain::WorkoutSection::Finisher => WorkoutSection::Finisher,
            domain::WorkoutSection::CoolDown => WorkoutSection::CoolDown,
            domain::WorkoutSection::None => WorkoutSection::None,
        }
    }
}

impl From<WorkoutSection> for domain::WorkoutSection {
    fn from(value: WorkoutSection) -> Self {
        match value {
            WorkoutSection::WarmUp => domain::WorkoutSection::WarmUp,
            WorkoutSection::MainLift => domain::WorkoutSection::MainLift,
            WorkoutSection::Cardio => domain::WorkoutSection::Cardio,
            WorkoutSection::Finisher => domain::WorkoutSection::Finisher,
            WorkoutSection::CoolDown => domain::WorkoutSection::CoolDown,
            WorkoutSection::None => domain::WorkoutSection::None,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MetricID {
    Reps,
    Weight,
    Time,
    Distance,
    Rest,
    Tempo,
}

impl From<domain::MetricID> for MetricID {
    fn from(value: domain::MetricID) -> Self {
        match value {
            domain::MetricID::Reps => MetricID::Reps,
            domain::MetricID::Weight => MetricID::Weight,
            domain::MetricID::Time => MetricID::Time,
            domain::MetricID::Distance => MetricID::Distance,
            domain::MetricID::Rest => MetricID::Rest,
            domain::MetricID::Tempo => MetricID::Tempo,
        }
    }
}

impl From<MetricID> for domain::MetricID {
    fn from(value: MetricID) -> Self {
        match value {
            MetricID::Reps => domain::MetricID::Reps,
            MetricID::Weight => domain::MetricID::Weight,
            MetricID::Time => domain::MetricID::Time,
            MetricID::Distance => domain::MetricID::Distance,
            MetricID::Rest => domain::MetricID::Rest,
            MetricID::Tempo => domain::MetricID::Tempo,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SupersetType {
    Standard,
    Giant,
    Emom,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Superset {
    pub id: Uuid,
    pub order: u32,
    pub kind: SupersetType,
    pub rounds: Option<u32>,
    pub emom_time: Option<u32>,
}

impl From<&domain::SupersetMembership> for Superset {
    fn from(value: &domain::SupersetMembership) -> Self {
        Self {
            id: *value.id,
            order: value.order,
            kind: match value.kind {
                domain::SupersetType::Standard => SupersetType::Standard,
                domain::SupersetType::Giant => SupersetType::Giant,
                domain::SupersetType::Emom => SupersetType::Emom,
            },
            rounds: value.rounds,
            emom_time: value.emom_time.map(Into::into),
        }
    }
}

impl TryFrom<Superset> for domain::SupersetMembership {
    type Error = domain::TimeError;

    fn try_from(value: Superset) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            order: value.order,
            kind: match value.kind {
                SupersetType::Standard => domain::SupersetType::Standard,
                SupersetType::Giant => domain::SupersetType::Giant,
                SupersetType::Emom => domain::SupersetType::Emom,
            },
            rounds: value.rounds,
            emom_time: value.emom_time.map(domain::Time::new).transpose()?,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct TargetSet {
    pub id: Uuid,
    pub set_type: SetType,
    pub target_reps: Option<RepsInput>,
    pub target_weight: Option<f32>,
    pub target_time: Option<u32>,
    pub target_distance: Option<f32>,
    pub target_rest: Option<u32>,
    pub target_tempo: Option<String>,
    pub notes: Option<String>,
    pub field_order: Vec<MetricID>,
}

impl From<&domain::TargetSet> for TargetSet {
    fn from(value: &domain::TargetSet) -> Self {
        Self {
            id: *value.id,
            set_type: value.set_type.into(),
            target_reps: value.target_reps.map(Into::into),
            target_weight: value.target_weight.map(Into::into),
            target_time: value.target_time.map(Into::into),
            target_distance: value.target_distance.map(Into::into),
            target_rest: value.target_rest.map(Into::into),
            target_tempo: value.target_tempo.as_ref().map(ToString::to_string),
            notes: value.notes.clone(),
            field_order: value.field_order.iter().map(|m| (*m).into()).collect(),
        }
    }
}

impl TryFrom<TargetSet> for domain::TargetSet {
    type Error = RoutineError;

    fn try_from(value: TargetSet) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            set_type: value.set_type.into(),
            target_reps: value.target_reps.as_ref().and_then(RepsInput::resolve),
            target_weight: value.target_weight.map(domain::Weight::new).transpose()?,
            target_time: value.target_time.map(domain::Time::new).transpose()?,
            target_distance: value
                .target_distance
                .map(domain::Distance::new)
                .transpose()?,
            target_rest: value.target_rest.map(domain::Time::new).transpose()?,
            target_tempo: value
                .target_tempo
                .as_deref()
                .map(domain::Tempo::new)
                .transpose()?,
            notes: value.notes,
            field_order: value.field_order.into_iter().map(Into::into).collect(),
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct PlannedExercise {
    pub id: Uuid,
    pub exercise_id: Uuid,
    pub name: String,
    pub section: WorkoutSection,
    pub sets: Vec<TargetSet>,
    pub rounds: Option<u32>,
    pub superset: Option<Superset>,
}

impl From<&domain::PlannedExercise> for PlannedExercise {
    fn from(value: &domain::PlannedExercise) -> Self {
        Self {
            id: *value.id,
            exercise_id: *value.exercise_id,
            name: value.name.to_string(),
            section: value.section.into(),
            sets: value.sets.iter().map(TargetSet::from).collect(),
            rounds: value.rounds,
            superset: value.superset.as_ref().map(Superset::from),
        }
    }
}

impl TryFrom<PlannedExercise> for domain::PlannedExercise {
    type Error = RoutineError;

    fn try_from(value: PlannedExercise) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            exercise_id: value.exercise_id.into(),
            name: domain::Name::new(&value.name)?,
            section: value.section.into(),
            sets: value
                .sets
                .into_iter()
                .map(domain::TargetSet::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            rounds: value.rounds,
            superset: value
                .superset
                .map(domain::SupersetMembership::try_from)
                .transpose()?,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Routine {
    pub id: Uuid,
    pub name: String,
    pub notes: String,
    pub archived: bool,
    pub exercises: Vec<PlannedExercise>,
}

impl From<domain::Routine> for Routine {
    fn from(value: domain::Routine) -> Self {
        Self::from(&value)
    }
}

impl From<&domain::Routine> for Routine {
    fn from(value: &domain::Routine) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            notes: value.notes.clone(),
            archived: value.archived,
            exercises: value.exercises.iter().map(PlannedExercise::from).collect(),
        }
    }
}

impl TryFrom<Routine> for domain::Routine {
    type Error = RoutineError;

    fn try_from(value: Routine) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            notes: value.notes,
            archived: value.archived,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::PlannedExercise::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

#[derive(thiserror::Error, Debug)]
pub enum RoutineError {
    #[error(transparent)]
    InvalidName(#[from] domain::NameError),
    #[error(transparent)]
    InvalidWeight(#[from] domain::WeightError),
    #[error(transparent)]
    InvalidTime(#[from] domain::TimeError),
    #[error(transparent)]
    InvalidDistance(#[from] domain::DistanceError),
    #[error(transparent)]
    InvalidTempo(#[from] domain::TempoError),
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Skipped,
    DoLater,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct LoggedSet {
    pub id: String,
    pub planned_set_id: Option<Uuid>,
    pub exercise_id: Uuid,
    pub set_type: SetType,
    pub reps: Option<u32>,
    pub target_reps: Option<RepsInput>,
    pub weight: Option<f32>,
    pub target_weight: Option<f32>,
    pub time: Option<u32>,
    pub target_time: Option<u32>,
    pub distance: Option<f32>,
    pub target_distance: Option<f32>,
    pub rest: Option<u32>,
    pub target_rest: Option<u32>,
    pub tempo: Option<String>,
    pub target_tempo: Option<String>,
    pub rpe: Option<f32>,
    pub timestamp: DateTime<Utc>,
    pub field_order: Vec<MetricID>,
}

impl From<&domain::LoggedSet> for LoggedSet {
    fn from(value: &domain::LoggedSet) -> Self {
        Self {
            id: value.id.to_string(),
            planned_set_id: value.planned_set_id.map(|id| *id),
            exercise_id: *value.exercise_id,
            set_type: value.set_type.into(),
            reps: value.reps.map(Into::into),
            target_reps: value.target_reps.map(Into::into),
            weight: value.weight.map(Into::into),
            target_weight: value.target_weight.map(Into::into),
            time: value.time.map(Into::into),
            target_time: value.target_time.map(Into::into),
            distance: value.distance.map(Into::into),
            target_distance: value.target_distance.map(Into::into),
            rest: value.rest.map(Into::into),
            target_rest: value.target_rest.map(Into::into),
            tempo: value.tempo.as_ref().map(ToString::to_string),
            target_tempo: value.target_tempo.as_ref().map(ToString::to_string),
            rpe: value.rpe.map(Into::into),
            timestamp: value.timestamp,
            field_order: value.field_order.iter().map(|m| (*m).into()).collect(),
        }
    }
}

impl TryFrom<LoggedSet> for domain::LoggedSet {
    type Error = WorkoutLogError;

    fn try_from(value: LoggedSet) -> Result<Self, Self::Error> {
        Ok(Self {
            id: domain::LoggedSetID::new(&value.id),
            planned_set_id: value.planned_set_id.map(Into::into),
            exercise_id: value.exercise_id.into(),
            set_type: value.set_type.into(),
            reps: value.reps.map(domain::Reps::new).transpose()?,
            target_reps: value.target_reps.as_ref().and_then(RepsInput::resolve),
            weight: value.weight.map(domain::Weight::new).transpose()?,
            target_weight: value.target_weight.map(domain::Weight::new).transpose()?,
            time: value.time.map(domain::Time::new).transpose()?,
            target_time: value.target_time.map(domain::Time::new).transpose()?,
            distance: value.distance.map(domain::Distance::new).transpose()?,
            target_distance: value
                .target_distance
                .map(domain::Distance::new)
                .transpose()?,
            rest: value.rest.map(domain::Time::new).transpose()?,
            target_rest: value.target_rest.map(domain::Time::new).transpose()?,
            tempo: value.tempo.as_deref().map(domain::Tempo::new).transpose()?,
            target_tempo: value
                .target_tempo
                .as_deref()
                .map(domain::Tempo::new)
                .transpose()?,
            rpe: value.rpe.map(domain::RPE::new).transpose()?,
            timestamp: value.timestamp,
            field_order: value.field_order.into_iter().map(Into::into).collect(),
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct ExerciseLog {
    pub id: Uuid,
    pub exercise_id: Uuid,
    pub name: String,
    pub sets: Vec<LoggedSet>,
    pub superset: Option<Superset>,
    pub session_status: Option<SessionStatus>,
}

impl From<&domain::ExerciseLog> for ExerciseLog {
    fn from(value: &domain::ExerciseLog) -> Self {
        Self {
            id: *value.id,
            exercise_id: *value.exercise_id,
            name: value.name.to_string(),
            sets: value.sets.iter().map(LoggedSet::from).collect(),
            superset: value.superset.as_ref().map(Superset::from),
            session_status: value.session_status.map(|s| match s {
                domain::SessionStatus::Skipped => SessionStatus::Skipped,
                domain::SessionStatus::DoLater => SessionStatus::DoLater,
            }),
        }
    }
}

impl TryFrom<ExerciseLog> for domain::ExerciseLog {
    type Error = WorkoutLogError;

    fn try_from(value: ExerciseLog) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            exercise_id: value.exercise_id.into(),
            name: domain::Name::new(&value.name)?,
            sets: value
                .sets
                .into_iter()
                .map(domain::LoggedSet::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            superset: value
                .superset
                .map(domain::SupersetMembership::try_from)
                .transpose()?,
            session_status: value.session_status.map(|s| match s {
                SessionStatus::Skipped => domain::SessionStatus::Skipped,
                SessionStatus::DoLater => domain::SessionStatus::DoLater,
            }),
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct WorkoutLog {
    pub id: Uuid,
    pub routine_id: Option<Uuid>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub exercises: Vec<ExerciseLog>,
    pub notes: String,
    pub perceived_effort: Option<f32>,
}

impl From<domain::WorkoutLog> for WorkoutLog {
    fn from(value: domain::WorkoutLog) -> Self {
        Self::from(&value)
    }
}

impl From<&domain::WorkoutLog> for WorkoutLog {
    fn from(value: &domain::WorkoutLog) -> Self {
        Self {
            id: *value.id,
            routine_id: value.routine_id.map(|id| *id),
            start_time: value.start_time,
            end_time: value.end_time,
            exercises: value.exercises.iter().map(ExerciseLog::from).collect(),
            notes: value.notes.clone(),
            perceived_effort: value.perceived_effort.map(Into::into),
        }
    }
}

impl TryFrom<WorkoutLog> for domain::WorkoutLog {
    type Error = WorkoutLogError;

    fn try_from(value: WorkoutLog) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            routine_id: value.routine_id.map(Into::into),
            start_time: value.start_time,
            end_time: value.end_time,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::ExerciseLog::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            notes: value.notes,
            perceived_effort: value.perceived_effort.map(domain::RPE::new).transpose()?,
        })
    }
}

#[derive(thiserror::Error, Debug)]
pub enum WorkoutLogError {
    #[error(transparent)]
    InvalidName(#[from] domain::NameError),
    #[error(transparent)]
    InvalidReps(#[from] domain::RepsError),
    #[error(transparent)]
    InvalidWeight(#[from] domain::WeightError),
    #[error(transparent)]
    InvalidTime(#[from] domain::TimeError),
    #[error(transparent)]
    InvalidDistance(#[from] domain::DistanceError),
    #[error(transparent)]
    InvalidTempo(#[from] domain::TempoError),
    #[error(transparent)]
    InvalidRPE(#[from] domain::RPEError),
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PBType {
    RepMax { reps: u32 },
    EstimatedRepMax { reps: u32 },
}

impl From<domain::PBType> for PBType {
    fn from(value: domain::PBType) -> Self {
        match value {
            domain::PBType::RepMax(reps) => PBType::RepMax { reps },
            domain::PBType::EstimatedRepMax(reps) => PBType::EstimatedRepMax { reps },
        }
    }
}

impl From<PBType> for domain::PBType {
    fn from(value: PBType) -> Self {
        match value {
            PBType::RepMax { reps } => domain::PBType::RepMax(reps),
            PBType::EstimatedRepMax { reps } => domain::PBType::EstimatedRepMax(reps),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct PBHistoryInstance {
    pub timestamp: DateTime<Utc>,
    pub weight: Option<f32>,
    pub reps: Option<u32>,
    pub estimated_one_rep_max: Option<f32>,
}

impl From<&domain::PBHistoryInstance> for PBHistoryInstance {
    fn from(value: &domain::PBHistoryInstance) -> Self {
        Self {
            timestamp: value.timestamp,
            weight: value.weight.map(Into::into),
            reps: value.reps.map(Into::into),
            estimated_one_rep_max: value.estimated_one_rep_max,
        }
    }
}

impl TryFrom<PBHistoryInstance> for domain::PBHistoryInstance {
    type Error = WorkoutLogError;

    fn try_from(value: PBHistoryInstance) -> Result<Self, Self::Error> {
        Ok(Self {
            timestamp: value.timestamp,
            weight: value.weight.map(domain::Weight::new).transpose()?,
            reps: value.reps.map(domain::Reps::new).transpose()?,
            estimated_one_rep_max: value.estimated_one_rep_max,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct PersonalBestSet {
    pub set: LoggedSet,
    pub pb_type: PBType,
    pub estimated_one_rep_max: Option<f32>,
    pub history: Vec<PBHistoryInstance>,
}

impl From<&domain::PersonalBestSet> for PersonalBestSet {
    fn from(value: &domain::PersonalBestSet) -> Self {
        Self {
            set: LoggedSet::from(&value.set),
            pb_type: value.pb_type.into(),
            estimated_one_rep_max: value.estimated_one_rep_max,
            history: value.history.iter().map(PBHistoryInstance::from).collect(),
        }
    }
}

impl TryFrom<PersonalBestSet> for domain::PersonalBestSet {
    type Error = WorkoutLogError;

    fn try_from(value: PersonalBestSet) -> Result<Self, Self::Error> {
        Ok(Self {
            set: domain::LoggedSet::try_from(value.set)?,
            pb_type: value.pb_type.into(),
            estimated_one_rep_max: value.estimated_one_rep_max,
            history: value
                .history
                .into_iter()
                .map(domain::PBHistoryInstance::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case(json!(10), RepsInput::Number(10))]
    #[case(
        json!({"min": 8, "max": 12}),
        RepsInput::Bounds { min: Some(8), max: Some(12) }
    )]
    #[case(
        json!({"min": 10, "max": null}),
        RepsInput::Bounds { min: Some(10), max: None }
    )]
    #[case(
        json!({"type": "exact", "value": 10}),
        RepsInput::Structured(RepsTarget::Exact { value: 10 })
    )]
    #[case(
        json!({"type": "amrap"}),
        RepsInput::Structured(RepsTarget::Amrap)
    )]
    #[case(
        json!({"type": "max_fraction", "divisor": 2}),
        RepsInput::Structured(RepsTarget::MaxFraction { divisor: 2 })
    )]
    fn test_reps_input_wire_format(#[case] value: serde_json::Value, #[case] expected: RepsInput) {
        assert_eq!(
            serde_json::from_value::<RepsInput>(value).unwrap(),
            expected
        );
    }

    #[rstest]
    #[case(RepsInput::Number(10), Some("exact"))]
    #[case(RepsInput::Bounds { min: Some(8), max: Some(12) }, Some("range"))]
    #[case(RepsInput::Bounds { min: None, max: None }, None)]
    #[case(RepsInput::Structured(RepsTarget::Exact { value: 2000 }), None)]
    fn test_reps_input_resolve(#[case] input: RepsInput, #[case] expected_tag: Option<&str>) {
        let resolved = input.resolve();
        match expected_tag {
            Some("exact") => assert!(matches!(resolved, Some(domain::RepsTarget::Exact { .. }))),
            Some("range") => assert!(matches!(resolved, Some(domain::RepsTarget::Range { .. }))),
            Some(_) => unreachable!(),
            None => assert_eq!(resolved, None),
        }
    }

    #[test]
    fn test_set_type_wire_names() {
        assert_eq!(serde_json::to_value(SetType::WarmUp).unwrap(), json!("warmup"));
        assert_eq!(
            serde_json::to_value(SetType::RestPause).unwrap(),
            json!("restpause")
        );
        assert_eq!(
            serde_json::from_value::<SetType>(json!("dropset")).unwrap(),
            SetType::DropSet
        );
    }

    #[test]
    fn test_session_status_wire_names() {
        assert_eq!(
            serde_json::to_value(SessionStatus::DoLater).unwrap(),
            json!("do_later")
        );
        assert_eq!(
            serde_json::to_value(SessionStatus::Skipped).unwrap(),
            json!("skipped")
        );
    }
}
