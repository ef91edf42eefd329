use crate::{
    ExerciseLog, LabelKey, Labels, LoggedSet, PlannedExercise, SessionStatus, UnitConverter,
    WeightUnit, find_logged_set,
};

/// Displayed completion state of one exercise during a session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Skipped,
    DoLater,
}

impl ExerciseStatus {
    #[must_use]
    pub fn label_key(&self) -> LabelKey {
        match self {
            ExerciseStatus::Pending => LabelKey::Pending,
            ExerciseStatus::InProgress => LabelKey::InProgress,
            ExerciseStatus::Completed => LabelKey::Completed,
            ExerciseStatus::Skipped => LabelKey::Skipped,
            ExerciseStatus::DoLater => LabelKey::DoLater,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub state: ExerciseStatus,
    pub logged_count: u32,
    pub total_planned: u32,
}

/// Derive the completion state of a planned exercise from the logged sets so
/// far. Stateless: always recomputed from current inputs.
///
/// A logged set counts only if it is discoverable under a derived identity;
/// sets orphaned by later plan edits are excluded. The session markers take
/// priority over any derived state.
#[must_use]
pub fn compute_status(planned: &PlannedExercise, logged_exercises: &[ExerciseLog]) -> Progress {
    let round_info = planned.round_info();
    let total_planned =
        u32::try_from(planned.sets.len()).unwrap_or(u32::MAX) * round_info.total_rounds;

    let exercise_log = logged_exercises.iter().find(|log| log.id == planned.id);

    let logged_count = exercise_log.map_or(0, |log| {
        planned
            .sets
            .iter()
            .map(|set| {
                let rounds_done = (0..round_info.total_rounds)
                    .filter(|round_index| {
                        find_logged_set(log, set.id, *round_index, round_info.total_rounds)
                            .is_some()
                    })
                    .count();
                u32::try_from(rounds_done).unwrap_or(u32::MAX)
            })
            .sum()
    });

    let state = match exercise_log.and_then(|log| log.session_status) {
        Some(SessionStatus::Skipped) => ExerciseStatus::Skipped,
        Some(SessionStatus::DoLater) => ExerciseStatus::DoLater,
        None => {
            if total_planned > 0 && logged_count >= total_planned {
                ExerciseStatus::Completed
            } else if logged_count > 0 {
                ExerciseStatus::InProgress
            } else {
                ExerciseStatus::Pending
            }
        }
    };

    Progress {
        state,
        logged_count,
        total_planned,
    }
}

/// One-line summary of a performed set: weight, reps, duration, and distance
/// segments, omitting anything absent or non-positive. Weight is rendered in
/// the converter's current unit; the core itself stores kilograms.
#[must_use]
pub fn format_set(set: &LoggedSet, units: &impl UnitConverter, labels: &impl Labels) -> String {
    let mut segments = Vec::new();

    if let Some(weight) = set.weight {
        if f32::from(weight) > 0.0 {
            let unit = units.current_unit();
            let value = units.convert(f32::from(weight), WeightUnit::Kg, unit);
            segments.push(format!("{value}{}", unit.suffix()));
        }
    }
    if let Some(reps) = set.reps {
        if u32::from(reps) > 0 {
            segments.push(format!("{reps} reps"));
        }
    }
    if let Some(time) = set.time {
        if u32::from(time) > 0 {
            segments.push(format!("{time}s"));
        }
    }
    if let Some(distance) = set.distance {
        if f32::from(distance) > 0.0 {
            segments.push(format!("{distance}km"));
        }
    }

    if segments.is_empty() {
        labels.translate(LabelKey::NoData)
    } else {
        segments.join(" / ")
    }
}
