//! Static catalog of prebuilt routines. Sample data only: consumed by the
//! record synthesizer in plan mode and used as realistic fixtures in tests.

use std::sync::LazyLock;

use crate::{
    Distance, MetricID, Name, PlannedExercise, Reps, RepsTarget, Routine, SetID, SetType,
    SupersetMembership, SupersetType, TargetSet, Tempo, Time, Weight, WorkoutSection,
};

pub static ROUTINES: LazyLock<Vec<Routine>> = LazyLock::new(|| {
    vec![
        strength_foundation(),
        push_pull_supersets(),
        garage_conditioning(),
    ]
});

fn strength_foundation() -> Routine {
    Routine {
        id: 0x11.into(),
        name: Name::new("Strength Foundation").unwrap(),
        notes: String::from("Linear progression over three main lifts."),
        archived: false,
        exercises: vec![
            PlannedExercise {
                id: 0x111.into(),
                exercise_id: 0x1.into(),
                name: Name::new("Rowing Machine").unwrap(),
                section: WorkoutSection::WarmUp,
                sets: vec![cardio_set(0x1111, Some(300), Some(1.0))],
                rounds: None,
                superset: None,
            },
            PlannedExercise {
                id: 0x112.into(),
                exercise_id: 0x2.into(),
                name: Name::new("Squat").unwrap(),
                section: WorkoutSection::MainLift,
                sets: vec![
                    lift_set(0x1121, exact(5), Some(60.0), Some(180), None),
                    lift_set(0x1122, exact(5), Some(80.0), Some(180), None),
                    lift_set(0x1123, exact(5), Some(100.0), Some(180), None),
                ],
                rounds: None,
                superset: None,
            },
            PlannedExercise {
                id: 0x113.into(),
                exercise_id: 0x3.into(),
                name: Name::new("Bench Press").unwrap(),
                section: WorkoutSection::MainLift,
                sets: vec![lift_set(
                    0x1131,
                    range(8, 12),
                    Some(60.0),
                    Some(120),
                    Some("3-1-2-0"),
                )],
                rounds: Some(3),
                superset: None,
            },
            PlannedExercise {
                id: 0x114.into(),
                exercise_id: 0x4.into(),
                name: Name::new("Chin Up").unwrap(),
                section: WorkoutSection::Finisher,
                sets: vec![lift_set(0x1141, Some(RepsTarget::Amrap), None, Some(120), None)],
                rounds: None,
                superset: None,
            },
        ],
    }
}

fn push_pull_supersets() -> Routine {
    let superset = |order| SupersetMembership {
        id: 0x21.into(),
        order,
        kind: SupersetType::Standard,
        rounds: Some(3),
        emom_time: None,
    };
    Routine {
        id: 0x12.into(),
        name: Name::new("Push Pull Supersets").unwrap(),
        notes: String::from("Antagonist pairs, shared round count."),
        archived: false,
        exercises: vec![
            PlannedExercise {
                id: 0x121.into(),
                exercise_id: 0x5.into(),
                name: Name::new("Overhead Press").unwrap(),
                section: WorkoutSection::MainLift,
                sets: vec![lift_set(0x1211, range(6, 10), Some(40.0), None, None)],
                rounds: None,
                superset: Some(superset(0)),
            },
            PlannedExercise {
                id: 0x122.into(),
                exercise_id: 0x6.into(),
                name: Name::new("Barbell Row").unwrap(),
                section: WorkoutSection::MainLift,
                sets: vec![lift_set(0x1221, range(6, 10), Some(60.0), None, None)],
                rounds: None,
                superset: Some(superset(1)),
            },
            PlannedExercise {
                id: 0x123.into(),
                exercise_id: 0x7.into(),
                name: Name::new("Kettlebell Swing").unwrap(),
                section: WorkoutSection::Finisher,
                sets: vec![lift_set(0x1231, min_plus(15), Some(24.0), None, None)],
                rounds: None,
                superset: Some(SupersetMembership {
                    id: 0x22.into(),
                    order: 0,
                    kind: SupersetType::Emom,
                    rounds: Some(5),
                    emom_time: Some(Time::new(60).unwrap()),
                }),
            },
        ],
    }
}

fn garage_conditioning() -> Routine {
    Routine {
        id: 0x13.into(),
        name: Name::new("Garage Conditioning").unwrap(),
        notes: String::new(),
        archived: false,
        exercises: vec![
            PlannedExercise {
                id: 0x131.into(),
                exercise_id: 0x8.into(),
                name: Name::new("Air Bike").unwrap(),
                section: WorkoutSection::Cardio,
                sets: vec![cardio_set(0x1311, Some(600), Some(5.0))],
                rounds: None,
                superset: None,
            },
            PlannedExercise {
                id: 0x132.into(),
                exercise_id: 0x9.into(),
                name: Name::new("Farmer Carry").unwrap(),
                section: WorkoutSection::MainLift,
                sets: vec![lift_set(
                    0x1321,
                    Some(RepsTarget::MaxFraction { divisor: 2 }),
                    Some(32.0),
                    Some(90),
                    None,
                )],
                rounds: Some(4),
                superset: None,
            },
            PlannedExercise {
                id: 0x133.into(),
                exercise_id: 0xa.into(),
                name: Name::new("Burpee").unwrap(),
                section: WorkoutSection::Finisher,
                sets: vec![lift_set(0x1331, Some(RepsTarget::Max), None, None, None)],
                rounds: None,
                superset: None,
            },
            PlannedExercise {
                id: 0x134.into(),
                exercise_id: 0xb.into(),
                name: Name::new("Stretching").unwrap(),
                section: WorkoutSection::CoolDown,
                sets: vec![cardio_set(0x1341, Some(300), None)],
                rounds: None,
                superset: None,
            },
        ],
    }
}

fn exact(value: u32) -> Option<RepsTarget> {
    Some(RepsTarget::Exact {
        value: Reps::new(value).unwrap(),
    })
}

fn range(min: u32, max: u32) -> Option<RepsTarget> {
    Some(RepsTarget::Range {
        min: Reps::new(min).unwrap(),
        max: Reps::new(max).unwrap(),
    })
}

fn min_plus(value: u32) -> Option<RepsTarget> {
    Some(RepsTarget::MinPlus {
        value: Reps::new(value).unwrap(),
    })
}

fn lift_set(
    id: u128,
    target_reps: Option<RepsTarget>,
    weight: Option<f32>,
    rest: Option<u32>,
    tempo: Option<&str>,
) -> TargetSet {
    TargetSet {
        id: SetID::from(id),
        set_type: SetType::Standard,
        target_reps,
        target_weight: weight.map(|w| Weight::new(w).unwrap()),
        target_time: None,
        target_distance: None,
        target_rest: rest.map(|r| Time::new(r).unwrap()),
        target_tempo: tempo.map(|t| Tempo::new(t).unwrap()),
        notes: None,
        field_order: MetricID::default_order(),
    }
}

fn cardio_set(id: u128, time: Option<u32>, distance: Option<f32>) -> TargetSet {
    TargetSet {
        id: SetID::from(id),
        set_type: SetType::Standard,
        target_reps: None,
        target_weight: None,
        target_time: time.map(|t| Time::new(t).unwrap()),
        target_distance: distance.map(|d| Distance::new(d).unwrap()),
        target_rest: None,
        target_tempo: None,
        notes: None,
        field_order: vec![MetricID::Time, MetricID::Distance],
    }
}
