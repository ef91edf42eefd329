use chrono::{DateTime, Utc};
use log::{debug, error};

use crate::{
    CreateError, DeleteError, ExerciseID, ExerciseLog, Name, PersonalBestRepository,
    PersonalBestSet, PlannedExercise, ReadError, Routine, RoutineID, RoutineRepository,
    UpdateError, WorkoutLog, WorkoutLogID, WorkoutLogRepository, personal_bests,
};

pub struct Service<R> {
    repository: R,
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::Serialization(_)) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R: RoutineRepository> Service<R> {
    pub fn get_routines(&self) -> Result<Vec<Routine>, ReadError> {
        log_on_error!(
            self.repository.read_routines(),
            ReadError,
            "get",
            "routines"
        )
    }

    pub fn get_routine(&self, id: RoutineID) -> Result<Routine, ReadError> {
        log_on_error!(
            self.repository.read_routine(id),
            ReadError,
            "get",
            "routine"
        )
    }

    pub fn create_routine(&self, routine: Routine) -> Result<Routine, CreateError> {
        if !routine.superset_rounds_consistent() {
            return Err(CreateError::Conflict);
        }
        log_on_error!(
            self.repository.create_routine(routine),
            CreateError,
            "create",
            "routine"
        )
    }

    pub fn modify_routine(
        &self,
        id: RoutineID,
        name: Option<Name>,
        archived: Option<bool>,
        exercises: Option<Vec<PlannedExercise>>,
    ) -> Result<Routine, UpdateError> {
        log_on_error!(
            self.repository.modify_routine(id, name, archived, exercises),
            UpdateError,
            "modify",
            "routine"
        )
    }

    pub fn delete_routine(&self, id: RoutineID) -> Result<RoutineID, DeleteError> {
        log_on_error!(
            self.repository.delete_routine(id),
            DeleteError,
            "delete",
            "routine"
        )
    }
}

impl<R: WorkoutLogRepository> Service<R> {
    pub fn get_workout_logs(&self) -> Result<Vec<WorkoutLog>, ReadError> {
        log_on_error!(
            self.repository.read_workout_logs(),
            ReadError,
            "get",
            "workout logs"
        )
    }

    pub fn get_workout_log(&self, id: WorkoutLogID) -> Result<WorkoutLog, ReadError> {
        log_on_error!(
            self.repository.read_workout_log(id),
            ReadError,
            "get",
            "workout log"
        )
    }

    pub fn create_workout_log(&self, workout_log: WorkoutLog) -> Result<WorkoutLog, CreateError> {
        log_on_error!(
            self.repository.create_workout_log(workout_log),
            CreateError,
            "create",
            "workout log"
        )
    }

    pub fn modify_workout_log(
        &self,
        id: WorkoutLogID,
        notes: Option<String>,
        exercises: Option<Vec<ExerciseLog>>,
    ) -> Result<WorkoutLog, UpdateError> {
        log_on_error!(
            self.repository.modify_workout_log(id, notes, None, exercises),
            UpdateError,
            "modify",
            "workout log"
        )
    }

    pub fn delete_workout_log(&self, id: WorkoutLogID) -> Result<WorkoutLogID, DeleteError> {
        log_on_error!(
            self.repository.delete_workout_log(id),
            DeleteError,
            "delete",
            "workout log"
        )
    }
}

impl<R: WorkoutLogRepository + PersonalBestRepository> Service<R> {
    pub fn get_personal_bests(
        &self,
        exercise_id: ExerciseID,
    ) -> Result<Vec<PersonalBestSet>, ReadError> {
        log_on_error!(
            self.repository.read_personal_bests(exercise_id),
            ReadError,
            "get",
            "personal bests"
        )
    }

    /// Seal a workout log and recompute the personal bests of every exercise
    /// it contains.
    pub fn commit_workout_log(
        &self,
        id: WorkoutLogID,
        end_time: DateTime<Utc>,
    ) -> Result<WorkoutLog, UpdateError> {
        let workout_log = log_on_error!(
            self.repository
                .modify_workout_log(id, None, Some(end_time), None),
            UpdateError,
            "commit",
            "workout log"
        )?;

        for exercise_id in workout_log.exercise_ids() {
            let logs = self
                .repository
                .read_workout_logs_by_exercise(exercise_id)
                .map_err(UpdateError::from)?;
            let bests = personal_bests(&logs, exercise_id);
            log_on_error!(
                self.repository.replace_personal_bests(exercise_id, bests),
                UpdateError,
                "replace",
                "personal bests"
            )?;
        }

        Ok(workout_log)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use chrono::DateTime;
    use pretty_assertions::assert_eq;

    use crate::{LoggedSet, LoggedSetID, MetricID, Reps, SetType, StorageError, Weight};

    use super::*;

    struct FakeRepository {
        workout_logs: RefCell<Vec<WorkoutLog>>,
        personal_bests: RefCell<Vec<(ExerciseID, Vec<PersonalBestSet>)>>,
    }

    impl FakeRepository {
        fn with_log(workout_log: WorkoutLog) -> Self {
            Self {
                workout_logs: RefCell::new(vec![workout_log]),
                personal_bests: RefCell::new(Vec::new()),
            }
        }
    }

    impl WorkoutLogRepository for FakeRepository {
        fn read_workout_logs(&self) -> Result<Vec<WorkoutLog>, ReadError> {
            Ok(self.workout_logs.borrow().clone())
        }

        fn read_workout_log(&self, id: WorkoutLogID) -> Result<WorkoutLog, ReadError> {
            self.workout_logs
                .borrow()
                .iter()
                .find(|log| log.id == id)
                .cloned()
                .ok_or(ReadError::NotFound)
        }

        fn read_workout_logs_by_exercise(
            &self,
            id: ExerciseID,
        ) -> Result<Vec<WorkoutLog>, ReadError> {
            Ok(self
                .workout_logs
                .borrow()
                .iter()
                .filter(|log| log.exercise_ids().contains(&id))
                .cloned()
                .collect())
        }

        fn create_workout_log(&self, workout_log: WorkoutLog) -> Result<WorkoutLog, CreateError> {
            self.workout_logs.borrow_mut().push(workout_log.clone());
            Ok(workout_log)
        }

        fn modify_workout_log(
            &self,
            id: WorkoutLogID,
            notes: Option<String>,
            end_time: Option<DateTime<Utc>>,
            exercises: Option<Vec<ExerciseLog>>,
        ) -> Result<WorkoutLog, UpdateError> {
            let mut logs = self.workout_logs.borrow_mut();
            let log = logs
                .iter_mut()
                .find(|log| log.id == id)
                .ok_or(UpdateError::NotFound)?;
            if let Some(notes) = notes {
                log.notes = notes;
            }
            if let Some(end_time) = end_time {
                log.end_time = Some(end_time);
            }
            if let Some(exercises) = exercises {
                log.exercises = exercises;
            }
            Ok(log.clone())
        }

        fn delete_workout_log(&self, id: WorkoutLogID) -> Result<WorkoutLogID, DeleteError> {
            self.workout_logs.borrow_mut().retain(|log| log.id != id);
            Ok(id)
        }
    }

    impl PersonalBestRepository for FakeRepository {
        fn read_personal_bests(
            &self,
            exercise_id: ExerciseID,
        ) -> Result<Vec<PersonalBestSet>, ReadError> {
            Ok(self
                .personal_bests
                .borrow()
                .iter()
                .find(|(id, _)| *id == exercise_id)
                .map(|(_, bests)| bests.clone())
                .unwrap_or_default())
        }

        fn replace_personal_bests(
            &self,
            exercise_id: ExerciseID,
            personal_bests: Vec<PersonalBestSet>,
        ) -> Result<(), UpdateError> {
            let mut entries = self.personal_bests.borrow_mut();
            entries.retain(|(id, _)| *id != exercise_id);
            entries.push((exercise_id, personal_bests));
            Ok(())
        }
    }

    fn logged_set(reps: u32, weight: f32) -> LoggedSet {
        LoggedSet {
            id: LoggedSetID::fresh(),
            planned_set_id: None,
            exercise_id: 1.into(),
            set_type: SetType::Standard,
            reps: Some(Reps::new(reps).unwrap()),
            target_reps: None,
            weight: Some(Weight::new(weight).unwrap()),
            target_weight: None,
            time: None,
            target_time: None,
            distance: None,
            target_distance: None,
            rest: None,
            target_rest: None,
            tempo: None,
            target_tempo: None,
            rpe: None,
            timestamp: DateTime::from_timestamp(1_700_000_100, 0).unwrap(),
            field_order: MetricID::default_order(),
        }
    }

    fn workout_log() -> WorkoutLog {
        WorkoutLog {
            id: 1.into(),
            routine_id: None,
            start_time: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            end_time: None,
            exercises: vec![ExerciseLog {
                id: 1.into(),
                exercise_id: 1.into(),
                name: Name::new("Bench Press").unwrap(),
                sets: vec![logged_set(5, 100.0)],
                superset: None,
                session_status: None,
            }],
            notes: String::new(),
            perceived_effort: None,
        }
    }

    #[test]
    fn test_commit_workout_log_seals_and_recomputes_personal_bests() {
        let service = Service::new(FakeRepository::with_log(workout_log()));
        let end_time = DateTime::from_timestamp(1_700_003_600, 0).unwrap();

        let committed = service.commit_workout_log(1.into(), end_time).unwrap();
        assert_eq!(committed.end_time, Some(end_time));

        let bests = service.get_personal_bests(1.into()).unwrap();
        assert!(!bests.is_empty());
        assert!(
            bests
                .iter()
                .all(|b| b.set.weight == Some(Weight::new(100.0).unwrap()))
        );
    }

    #[test]
    fn test_commit_workout_log_not_found() {
        let service = Service::new(FakeRepository::with_log(workout_log()));
        let end_time = DateTime::from_timestamp(1_700_003_600, 0).unwrap();

        assert!(matches!(
            service.commit_workout_log(2.into(), end_time),
            Err(UpdateError::NotFound)
        ));
    }

    #[test]
    fn test_storage_errors_are_logged_not_transformed() {
        struct FailingRepository;

        impl WorkoutLogRepository for FailingRepository {
            fn read_workout_logs(&self) -> Result<Vec<WorkoutLog>, ReadError> {
                Err(ReadError::Storage(StorageError::Serialization(
                    String::from("bad record"),
                )))
            }

            fn read_workout_log(&self, _: WorkoutLogID) -> Result<WorkoutLog, ReadError> {
                unimplemented!()
            }

            fn read_workout_logs_by_exercise(
                &self,
                _: ExerciseID,
            ) -> Result<Vec<WorkoutLog>, ReadError> {
                unimplemented!()
            }

            fn create_workout_log(&self, _: WorkoutLog) -> Result<WorkoutLog, CreateError> {
                unimplemented!()
            }

            fn modify_workout_log(
                &self,
                _: WorkoutLogID,
                _: Option<String>,
                _: Option<DateTime<Utc>>,
                _: Option<Vec<ExerciseLog>>,
            ) -> Result<WorkoutLog, UpdateError> {
                unimplemented!()
            }

            fn delete_workout_log(&self, _: WorkoutLogID) -> Result<WorkoutLogID, DeleteError> {
                unimplemented!()
            }
        }

        let service = Service::new(FailingRepository);
        assert!(matches!(
            service.get_workout_logs(),
            Err(ReadError::Storage(StorageError::Serialization(message))) if message == "bad record"
        ));
    }
}
