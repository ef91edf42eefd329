use chrono::DateTime;
use liftlog_domain as domain;
use liftlog_domain::catalog;

pub static ROUTINE: std::sync::LazyLock<domain::Routine> =
    std::sync::LazyLock::new(|| catalog::ROUTINES[0].clone());

/// A sealed log of the catalog's first routine: the squat sets, one fully
/// logged, one with several metrics explicitly absent.
pub static WORKOUT_LOG: std::sync::LazyLock<domain::WorkoutLog> = std::sync::LazyLock::new(|| {
    let squat = &ROUTINE.exercises[1];
    let round_info = squat.round_info();
    domain::WorkoutLog {
        id: 1.into(),
        routine_id: Some(ROUTINE.id),
        start_time: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        end_time: Some(DateTime::from_timestamp(1_700_003_600, 0).unwrap()),
        exercises: vec![domain::ExerciseLog {
            id: squat.id,
            exercise_id: squat.exercise_id,
            name: squat.name.clone(),
            sets: vec![
                domain::LoggedSet {
                    id: domain::logged_set_id(squat.sets[0].id, 0, round_info.total_rounds),
                    planned_set_id: Some(squat.sets[0].id),
                    exercise_id: squat.exercise_id,
                    set_type: domain::SetType::Standard,
                    reps: Some(domain::Reps::new(5).unwrap()),
                    target_reps: squat.sets[0].target_reps,
                    weight: Some(domain::Weight::new(100.0).unwrap()),
                    target_weight: squat.sets[0].target_weight,
                    time: None,
                    target_time: None,
                    distance: None,
                    target_distance: None,
                    rest: Some(domain::Time::new(180).unwrap()),
                    target_rest: squat.sets[0].target_rest,
                    tempo: None,
                    target_tempo: None,
                    rpe: Some(domain::RPE::EIGHT),
                    timestamp: DateTime::from_timestamp(1_700_000_300, 0).unwrap(),
                    field_order: squat.sets[0].field_order.clone(),
                },
                domain::LoggedSet {
                    id: domain::logged_set_id(squat.sets[1].id, 0, round_info.total_rounds),
                    planned_set_id: Some(squat.sets[1].id),
                    exercise_id: squat.exercise_id,
                    set_type: domain::SetType::Standard,
                    reps: Some(domain::Reps::new(8).unwrap()),
                    target_reps: squat.sets[1].target_reps,
                    weight: None,
                    target_weight: squat.sets[1].target_weight,
                    time: None,
                    target_time: None,
                    distance: None,
                    target_distance: None,
                    rest: None,
                    target_rest: squat.sets[1].target_rest,
                    tempo: None,
                    target_tempo: None,
                    rpe: None,
                    timestamp: DateTime::from_timestamp(1_700_000_600, 0).unwrap(),
                    field_order: squat.sets[1].field_order.clone(),
                },
            ],
            superset: None,
            session_status: None,
        }],
        notes: String::from("Felt strong."),
        perceived_effort: Some(domain::RPE::SEVEN),
    }
});

/// An unsealed log of a different exercise.
pub static WORKOUT_LOG_2: std::sync::LazyLock<domain::WorkoutLog> =
    std::sync::LazyLock::new(|| {
        let press = &catalog::ROUTINES[1].exercises[0];
        let round_info = press.round_info();
        domain::WorkoutLog {
            id: 2.into(),
            routine_id: Some(catalog::ROUTINES[1].id),
            start_time: DateTime::from_timestamp(1_700_100_000, 0).unwrap(),
            end_time: None,
            exercises: vec![domain::ExerciseLog {
                id: press.id,
                exercise_id: press.exercise_id,
                name: press.name.clone(),
                sets: vec![domain::LoggedSet {
                    id: domain::logged_set_id(press.sets[0].id, 1, round_info.total_rounds),
                    planned_set_id: Some(press.sets[0].id),
                    exercise_id: press.exercise_id,
                    set_type: domain::SetType::Standard,
                    reps: Some(domain::Reps::new(8).unwrap()),
                    target_reps: press.sets[0].target_reps,
                    weight: Some(domain::Weight::new(40.0).unwrap()),
                    target_weight: press.sets[0].target_weight,
                    time: None,
                    target_time: None,
                    distance: None,
                    target_distance: None,
                    rest: None,
                    target_rest: None,
                    tempo: None,
                    target_tempo: None,
                    rpe: None,
                    timestamp: DateTime::from_timestamp(1_700_100_300, 0).unwrap(),
                    field_order: press.sets[0].field_order.clone(),
                }],
                superset: press.superset.clone(),
                session_status: Some(domain::SessionStatus::DoLater),
            }],
            notes: String::new(),
            perceived_effort: None,
        }
    });
