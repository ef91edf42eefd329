use std::collections::BTreeSet;

use derive_more::Deref;
use uuid::Uuid;

use crate::{
    CreateError, DeleteError, Distance, MetricID, Name, ReadError, RepsTarget, Tempo, Time,
    UpdateError, Weight, WorkoutSection,
};

pub trait RoutineRepository {
    fn read_routines(&self) -> Result<Vec<Routine>, ReadError>;
    fn read_routine(&self, id: RoutineID) -> Result<Routine, ReadError>;
    fn create_routine(&self, routine: Routine) -> Result<Routine, CreateError>;
    fn modify_routine(
        &self,
        id: RoutineID,
        name: Option<Name>,
        archived: Option<bool>,
        exercises: Option<Vec<PlannedExercise>>,
    ) -> Result<Routine, UpdateError>;
    fn delete_routine(&self, id: RoutineID) -> Result<RoutineID, DeleteError>;
}

/// A reusable workout plan: ordered exercises, each with target sets.
#[derive(Debug, Clone, PartialEq)]
pub struct Routine {
    pub id: RoutineID,
    pub name: Name,
    pub notes: String,
    pub archived: bool,
    pub exercises: Vec<PlannedExercise>,
}

impl Routine {
    /// Total number of planned sets, counting every round.
    #[must_use]
    pub fn num_sets(&self) -> u32 {
        self.exercises
            .iter()
            .map(|e| u32::try_from(e.sets.len()).unwrap_or(u32::MAX) * e.round_info().total_rounds)
            .sum()
    }

    #[must_use]
    pub fn exercise_ids(&self) -> BTreeSet<ExerciseID> {
        self.exercises
            .iter()
            .map(|e| e.exercise_id)
            .collect::<BTreeSet<_>>()
    }

    /// Sections present in this routine, in canonical order.
    #[must_use]
    pub fn sections(&self) -> Vec<WorkoutSection> {
        let mut sections = self
            .exercises
            .iter()
            .map(|e| e.section)
            .collect::<Vec<_>>();
        crate::sort_by_section(&mut sections, |s| *s);
        sections.dedup();
        sections
    }

    /// Every member of a superset group must expose the same round count.
    #[must_use]
    pub fn superset_rounds_consistent(&self) -> bool {
        let mut rounds_by_group: std::collections::BTreeMap<SupersetID, u32> =
            std::collections::BTreeMap::new();
        for exercise in &self.exercises {
            if let Some(superset) = &exercise.superset {
                let rounds = exercise.round_info().total_rounds;
                if *rounds_by_group.entry(superset.id).or_insert(rounds) != rounds {
                    return false;
                }
            }
        }
        true
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RoutineID(Uuid);

impl RoutineID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for RoutineID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for RoutineID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// Reference to a base exercise in the exercise catalog.
#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(Uuid);

impl ExerciseID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// An exercise within a routine, possibly repeated across rounds or grouped
/// into a superset.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedExercise {
    pub id: PlannedExerciseID,
    pub exercise_id: ExerciseID,
    pub name: Name,
    pub section: WorkoutSection,
    pub sets: Vec<TargetSet>,
    pub rounds: Option<u32>,
    pub superset: Option<SupersetMembership>,
}

impl PlannedExercise {
    /// The round multiplicity of this exercise. Superset members take the
    /// round count shared by the whole group; a round count of zero is
    /// invalid input and treated as one.
    #[must_use]
    pub fn round_info(&self) -> RoundInfo {
        let rounds = match &self.superset {
            Some(superset) => superset.rounds.unwrap_or(1),
            None => self.rounds.unwrap_or(1),
        };
        RoundInfo {
            total_rounds: rounds.max(1),
        }
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PlannedExerciseID(Uuid);

impl PlannedExerciseID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for PlannedExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for PlannedExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundInfo {
    pub total_rounds: u32,
}

impl RoundInfo {
    #[must_use]
    pub fn uses_multi_round(&self) -> bool {
        self.total_rounds > 1
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SupersetMembership {
    pub id: SupersetID,
    pub order: u32,
    pub kind: SupersetType,
    /// Round count shared by every member of the group.
    pub rounds: Option<u32>,
    pub emom_time: Option<Time>,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SupersetID(Uuid);

impl SupersetID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for SupersetID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for SupersetID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupersetType {
    Standard,
    Giant,
    Emom,
}

/// A planned set: one target per metric plus display metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetSet {
    pub id: SetID,
    pub set_type: SetType,
    pub target_reps: Option<RepsTarget>,
    pub target_weight: Option<Weight>,
    pub target_time: Option<Time>,
    pub target_distance: Option<Distance>,
    pub target_rest: Option<Time>,
    pub target_tempo: Option<Tempo>,
    pub notes: Option<String>,
    pub field_order: Vec<MetricID>,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SetID(Uuid);

impl SetID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for SetID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for SetID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SetType {
    #[default]
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
