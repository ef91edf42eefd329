//! In-process implementation of the persistence boundary. Every record is
//! stored as its JSON wire model, so each read and write exercises the full
//! serialization round-trip.

use std::{collections::BTreeMap, sync::Mutex};

use chrono::{DateTime, Utc};
use liftlog_domain as domain;
use serde_json::Value;

use crate::{Store, model};

#[derive(Default)]
pub struct MemoryStore {
    stores: Mutex<BTreeMap<String, BTreeMap<String, Value>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read_all<M, T>(&self, store: Store) -> Result<Vec<T>, domain::ReadError>
    where
        M: serde::de::DeserializeOwned,
        T: TryFrom<M>,
        <T as TryFrom<M>>::Error: std::fmt::Display,
    {
        let stores = self.stores.lock().unwrap();
        let Some(records) = stores.get(store.as_ref()) else {
            return Ok(Vec::new());
        };
        Ok(records
            .values()
            .map(|value| convert::<M, T>(value.clone()))
            .collect::<Result<Vec<_>, _>>()?)
    }

    fn read_one<M, T>(&self, store: Store, key: &str) -> Result<T, domain::ReadError>
    where
        M: serde::de::DeserializeOwned,
        T: TryFrom<M>,
        <T as TryFrom<M>>::Error: std::fmt::Display,
    {
        let stores = self.stores.lock().unwrap();
        let value = stores
            .get(store.as_ref())
            .and_then(|records| records.get(key))
            .ok_or(domain::ReadError::NotFound)?;
        Ok(convert::<M, T>(value.clone())?)
    }

    fn write(&self, store: Store, key: String, value: Value) {
        let mut stores = self.stores.lock().unwrap();
        stores
            .entry(store.as_ref().to_string())
            .or_default()
            .insert(key, value);
    }

    fn contains(&self, store: Store, key: &str) -> bool {
        let stores = self.stores.lock().unwrap();
        stores
            .get(store.as_ref())
            .is_some_and(|records| records.contains_key(key))
    }

    fn remove(&self, store: Store, key: &str) -> bool {
        let mut stores = self.stores.lock().unwrap();
        stores
            .get_mut(store.as_ref())
            .is_some_and(|records| records.remove(key).is_some())
    }
}

fn serialize<M: serde::Serialize>(model: &M) -> Result<Value, domain::StorageError> {
    serde_json::to_value(model)
        .map_err(|err| domain::StorageError::Serialization(err.to_string()))
}

fn convert<M, T>(value: Value) -> Result<T, domain::StorageError>
where
    M: serde::de::DeserializeOwned,
    T: TryFrom<M>,
    <T as TryFrom<M>>::Error: std::fmt::Display,
{
    let model = serde_json::from_value::<M>(value)
        .map_err(|err| domain::StorageError::Serialization(err.to_string()))?;
    T::try_from(model).map_err(|err| domain::StorageError::Serialization(err.to_string()))
}

impl domain::RoutineRepository for MemoryStore {
    fn read_routines(&self) -> Result<Vec<domain::Routine>, domain::ReadError> {
        self.read_all::<model::Routine, _>(Store::Routines)
    }

    fn read_routine(&self, id: domain::RoutineID) -> Result<domain::Routine, domain::ReadError> {
        self.read_one::<model::Routine, _>(Store::Routines, &id.to_string())
    }

    fn create_routine(
        &self,
        routine: domain::Routine,
    ) -> Result<domain::Routine, domain::CreateError> {
        let key = routine.id.to_string();
        if self.contains(Store::Routines, &key) {
            return Err(domain::CreateError::Conflict);
        }
        let value = serialize(&model::Routine::from(&routine))?;
        self.write(Store::Routines, key, value);
        Ok(routine)
    }

    fn modify_routine(
        &self,
        id: domain::RoutineID,
        name: Option<domain::Name>,
        archived: Option<bool>,
        exercises: Option<Vec<domain::PlannedExercise>>,
    ) -> Result<domain::Routine, domain::UpdateError> {
        let mut routine: domain::Routine = self
            .read_one::<model::Routine, _>(Store::Routines, &id.to_string())
            .map_err(domain::UpdateError::from)?;
        if let Some(name) = name {
            routine.name = name;
        }
        if let Some(archived) = archived {
            routine.archived = archived;
        }
        if let Some(exercises) = exercises {
            routine.exercises = exercises;
        }
        let value = serialize(&model::Routine::from(&routine))?;
        self.write(Store::Routines, id.to_string(), value);
        Ok(routine)
    }

    fn delete_routine(&self, id: domain::RoutineID) -> Result<domain::RoutineID, domain::DeleteError> {
        if self.remove(Store::Routines, &id.to_string()) {
            Ok(id)
        } else {
            Err(domain::DeleteError::NotFound)
        }
    }
}

impl domain::WorkoutLogRepository for MemoryStore {
    fn read_workout_logs(&self) -> Result<Vec<domain::WorkoutLog>, domain::ReadError> {
        self.read_all::<model::WorkoutLog, _>(Store::WorkoutLogs)
    }

    fn read_workout_log(
        &self,
        id: domain::WorkoutLogID,
    ) -> Result<domain::WorkoutLog, domain::ReadError> {
        self.read_one::<model::WorkoutLog, _>(Store::WorkoutLogs, &id.to_string())
    }

    fn read_workout_logs_by_exercise(
        &self,
        id: domain::ExerciseID,
    ) -> Result<Vec<domain::WorkoutLog>, domain::ReadError> {
        let logs: Vec<domain::WorkoutLog> = self.read_all::<model::WorkoutLog, _>(Store::WorkoutLogs)?;
        Ok(logs
            .into_iter()
            .filter(|log| log.exercise_ids().contains(&id))
            .collect())
    }

    fn create_workout_log(
        &self,
        workout_log: domain::WorkoutLog,
    ) -> Result<domain::WorkoutLog, domain::CreateError> {
        let key = workout_log.id.to_string();
        if self.contains(Store::WorkoutLogs, &key) {
            return Err(domain::CreateError::Conflict);
        }
        let value = serialize(&model::WorkoutLog::from(&workout_log))?;
        self.write(Store::WorkoutLogs, key, value);
        Ok(workout_log)
    }

    fn modify_workout_log(
        &self,
        id: domain::WorkoutLogID,
        notes: Option<String>,
        end_time: Option<DateTime<Utc>>,
        exercises: Option<Vec<domain::ExerciseLog>>,
    ) -> Result<domain::WorkoutLog, domain::UpdateError> {
        let mut workout_log: domain::WorkoutLog = self
            .read_one::<model::WorkoutLog, _>(Store::WorkoutLogs, &id.to_string())
            .map_err(domain::UpdateError::from)?;
        if let Some(notes) = notes {
            workout_log.notes = notes;
        }
        if let Some(end_time) = end_time {
            workout_log.end_time = Some(end_time);
        }
        if let Some(exercises) = exercises {
            workout_log.exercises = exercises;
        }
        let value = serialize(&model::WorkoutLog::from(&workout_log))?;
        self.write(Store::WorkoutLogs, id.to_string(), value);
        Ok(workout_log)
    }

    fn delete_workout_log(
        &self,
        id: domain::WorkoutLogID,
    ) -> Result<domain::WorkoutLogID, domain::DeleteError> {
        if self.remove(Store::WorkoutLogs, &id.to_string()) {
            Ok(id)
        } else {
            Err(domain::DeleteError::NotFound)
        }
    }
}

impl domain::PersonalBestRepository for MemoryStore {
    fn read_personal_bests(
        &self,
        exercise_id: domain::ExerciseID,
    ) -> Result<Vec<domain::PersonalBestSet>, domain::ReadError> {
        let stores = self.stores.lock().unwrap();
        let Some(value) = stores
            .get(Store::PersonalBests.as_ref())
            .and_then(|records| records.get(&exercise_id.to_string()))
        else {
            return Ok(Vec::new());
        };
        let models = serde_json::from_value::<Vec<model::PersonalBestSet>>(value.clone())
            .map_err(|err| domain::StorageError::Serialization(err.to_string()))?;
        Ok(models
            .into_iter()
            .map(|m| {
                domain::PersonalBestSet::try_from(m)
                    .map_err(|err| domain::StorageError::Serialization(err.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?)
    }

    fn replace_personal_bests(
        &self,
        exercise_id: domain::ExerciseID,
        personal_bests: Vec<domain::PersonalBestSet>,
    ) -> Result<(), domain::UpdateError> {
        let models = personal_bests
            .iter()
            .map(model::PersonalBestSet::from)
            .collect::<Vec<_>>();
        let value = serialize(&models).map_err(domain::UpdateError::from)?;
        self.write(Store::PersonalBests, exercise_id.to_string(), value);
        Ok(())
    }
}
