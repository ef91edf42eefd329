use crate::{
    Distance, LoggedSet, LoggedSetID, MetricID, Reps, RepsTarget, SetType, TargetSet, Tempo, Time,
    Weight,
};

/// Which form is being assembled: building a plan, or logging against one.
/// The two modes have different population rules and are selected
/// explicitly, never via flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordMode {
    Plan,
    Log,
}

/// Source data for a synthesized record.
#[derive(Debug, Clone, Copy)]
pub enum SetData<'a> {
    Planned(&'a TargetSet),
    Logged(&'a LoggedSet),
}

/// Current and original target value of one metric, side by side, so the
/// caller can show variance.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldPair<T> {
    pub current: Option<T>,
    pub target: Option<T>,
}

// Hand-written to avoid the derive's spurious `T: Default` bound: the fields
// are `Option<T>`, which default to `None` regardless of `T`.
impl<T> Default for FieldPair<T> {
    fn default() -> Self {
        Self {
            current: None,
            target: None,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RepsField {
    pub current: Option<Reps>,
    pub target: Option<RepsTarget>,
}

/// Canonical editable record for one set.
#[derive(Debug, Clone, PartialEq)]
pub struct SetRecord {
    pub id: LoggedSetID,
    pub set_type: SetType,
    pub reps: RepsField,
    pub weight: FieldPair<Weight>,
    pub time: FieldPair<Time>,
    pub distance: FieldPair<Distance>,
    pub rest: FieldPair<Time>,
    pub tempo: FieldPair<Tempo>,
    pub notes: Option<String>,
    pub field_order: Vec<MetricID>,
}

impl SetRecord {
    /// An empty record with a fresh identity, for a brand-new set with no
    /// planned or logged counterpart.
    #[must_use]
    pub fn blank(set_type: SetType) -> Self {
        Self {
            id: LoggedSetID::fresh(),
            set_type,
            reps: RepsField::default(),
            weight: FieldPair::default(),
            time: FieldPair::default(),
            distance: FieldPair::default(),
            rest: FieldPair::default(),
            tempo: FieldPair::default(),
            notes: None,
            field_order: MetricID::default_order(),
        }
    }

    /// Lazy validation predicate: reps are required unless a weight or a
    /// duration is present. The synthesizer assembles values only; whether
    /// and when to enforce this is the caller's decision.
    #[must_use]
    pub fn reps_required(&self) -> bool {
        self.weight.current.is_none() && self.time.current.is_none()
    }
}

/// Produce the canonical editable record for a set. Pure; the input is never
/// mutated.
#[must_use]
pub fn synthesize_set_record(data: &SetData, mode: RecordMode) -> SetRecord {
    match mode {
        RecordMode::Plan => plan_record(data),
        RecordMode::Log => log_record(data),
    }
}

/// Plan mode: target values only, no fallback chain. Structured reps targets
/// are preserved as-is.
fn plan_record(data: &SetData) -> SetRecord {
    match data {
        SetData::Planned(set) => SetRecord {
            id: LoggedSetID::from(set.id),
            set_type: set.set_type,
            reps: RepsField {
                current: None,
                target: set.target_reps,
            },
            weight: assemble(None, set.target_weight.as_ref()),
            time: assemble(None, set.target_time.as_ref()),
            distance: assemble(None, set.target_distance.as_ref()),
            rest: assemble(None, set.target_rest.as_ref()),
            tempo: assemble(None, set.target_tempo.as_ref()),
            notes: set.notes.clone(),
            field_order: set.field_order.clone(),
        },
        SetData::Logged(set) => SetRecord {
            id: set.id.clone(),
            set_type: set.set_type,
            reps: RepsField {
                current: None,
                target: set.target_reps,
            },
            weight: assemble(None, set.target_weight.as_ref()),
            time: assemble(None, set.target_time.as_ref()),
            distance: assemble(None, set.target_distance.as_ref()),
            rest: assemble(None, set.target_rest.as_ref()),
            tempo: assemble(None, set.target_tempo.as_ref()),
            notes: None,
            field_order: set.field_order.clone(),
        },
    }
}

/// Log mode: per metric, the logged value wins, else the target value, else
/// nothing. Each metric falls back independently.
fn log_record(data: &SetData) -> SetRecord {
    match data {
        SetData::Planned(set) => SetRecord {
            id: LoggedSetID::from(set.id),
            set_type: set.set_type,
            reps: RepsField {
                current: exact_value(set.target_reps.as_ref()),
                target: set.target_reps,
            },
            weight: assemble(None, set.target_weight.as_ref()),
            time: assemble(None, set.target_time.as_ref()),
            distance: assemble(None, set.target_distance.as_ref()),
            rest: assemble(None, set.target_rest.as_ref()),
            tempo: assemble(None, set.target_tempo.as_ref()),
            notes: set.notes.clone(),
            field_order: set.field_order.clone(),
        },
        SetData::Logged(set) => SetRecord {
            id: set.id.clone(),
            set_type: set.set_type,
            reps: RepsField {
                current: set.reps.or_else(|| exact_value(set.target_reps.as_ref())),
                target: set.target_reps,
            },
            weight: assemble(set.weight.as_ref(), set.target_weight.as_ref()),
            time: assemble(set.time.as_ref(), set.target_time.as_ref()),
            distance: assemble(set.distance.as_ref(), set.target_distance.as_ref()),
            rest: assemble(set.rest.as_ref(), set.target_rest.as_ref()),
            tempo: assemble(set.tempo.as_ref(), set.target_tempo.as_ref()),
            notes: None,
            field_order: set.field_order.clone(),
        },
    }
}

/// Low-level field assembly shared by both builders. In log mode the
/// fallback is encoded by passing the logged value first; plan mode passes
/// no logged value at all.
fn assemble<T: Clone>(logged: Option<&T>, target: Option<&T>) -> FieldPair<T> {
    FieldPair {
        current: logged.or(target).cloned(),
        target: target.cloned(),
    }
}

/// Only an exact target is numerically concrete enough to prefill a logged
/// value; ranges, floors, and the textual variants are not.
fn exact_value(target: Option<&RepsTarget>) -> Option<Reps> {
    match target {
        Some(RepsTarget::Exact { value }) => Some(*value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use pretty_assertions::assert_eq;

    use crate::{SetID, logged_set_id};

    use super::*;

    fn reps(value: u32) -> Reps {
        Reps::new(value).unwrap()
    }

    static TARGET_SET: std::sync::LazyLock<TargetSet> = std::sync::LazyLock::new(|| TargetSet {
        id: 1.into(),
        set_type: SetType::Standard,
        target_reps: Some(RepsTarget::Range {
            min: reps(8),
            max: reps(12),
        }),
        target_weight: Some(Weight::new(60.0).unwrap()),
        target_time: None,
        target_distance: None,
        target_rest: Some(Time::new(120).unwrap()),
        target_tempo: Some(Tempo::new("3-1-2-0").unwrap()),
        notes: Some(String::from("pause at the bottom")),
        field_order: MetricID::default_order(),
    });

    static LOGGED_SET: std::sync::LazyLock<LoggedSet> = std::sync::LazyLock::new(|| LoggedSet {
        id: logged_set_id(SetID::from(1), 1, 2),
        planned_set_id: Some(1.into()),
        exercise_id: 1.into(),
        set_type: SetType::Standard,
        reps: Some(reps(10)),
        target_reps: Some(RepsTarget::Exact { value: reps(8) }),
        weight: None,
        target_weight: Some(Weight::new(60.0).unwrap()),
        time: Some(Time::new(45).unwrap()),
        target_time: None,
        distance: None,
        target_distance: None,
        rest: None,
        target_rest: Some(Time::new(120).unwrap()),
        tempo: None,
        target_tempo: None,
        rpe: None,
        timestamp: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        field_order: MetricID::default_order(),
    });

    #[test]
    fn test_plan_record_populates_targets_only() {
        let record = synthesize_set_record(&SetData::Planned(&TARGET_SET), RecordMode::Plan);

        assert_eq!(record.id, LoggedSetID::from(TARGET_SET.id));
        assert_eq!(record.reps.current, None);
        assert_eq!(record.reps.target, TARGET_SET.target_reps);
        assert_eq!(record.weight.current, None);
        assert_eq!(record.weight.target, TARGET_SET.target_weight);
        assert_eq!(record.rest.target, TARGET_SET.target_rest);
        assert_eq!(record.tempo.target, TARGET_SET.target_tempo);
        assert_eq!(record.notes, TARGET_SET.notes);
    }

    #[test]
    fn test_log_record_prefers_logged_values() {
        let record = synthesize_set_record(&SetData::Logged(&LOGGED_SET), RecordMode::Log);

        assert_eq!(record.id, LOGGED_SET.id);
        // logged value wins
        assert_eq!(record.reps.current, Some(reps(10)));
        // no logged weight, target fills in
        assert_eq!(record.weight.current, Some(Weight::new(60.0).unwrap()));
        // logged time present despite absent target
        assert_eq!(record.time.current, Some(Time::new(45).unwrap()));
        // neither logged nor target
        assert_eq!(record.distance.current, None);
        // targets preserved side by side
        assert_eq!(record.weight.target, LOGGED_SET.target_weight);
        assert_eq!(record.reps.target, LOGGED_SET.target_reps);
    }

    #[test]
    fn test_log_record_prefills_exact_target_reps() {
        let mut set = LOGGED_SET.clone();
        set.reps = None;
        let record = synthesize_set_record(&SetData::Logged(&set), RecordMode::Log);
        assert_eq!(record.reps.current, Some(reps(8)));

        set.target_reps = Some(RepsTarget::Range {
            min: reps(8),
            max: reps(12),
        });
        let record = synthesize_set_record(&SetData::Logged(&set), RecordMode::Log);
        assert_eq!(record.reps.current, None);
    }

    #[test]
    fn test_log_record_from_plan_falls_back_to_targets() {
        let record = synthesize_set_record(&SetData::Planned(&TARGET_SET), RecordMode::Log);

        // nothing logged yet, every metric falls back to its target
        assert_eq!(record.weight.current, Some(Weight::new(60.0).unwrap()));
        assert_eq!(record.rest.current, Some(Time::new(120).unwrap()));
        // a range target is not a concrete number
        assert_eq!(record.reps.current, None);
    }

    #[test]
    fn test_plan_record_from_logged_reads_targets_not_logged_values() {
        let record = synthesize_set_record(&SetData::Logged(&LOGGED_SET), RecordMode::Plan);

        assert_eq!(record.reps.current, None);
        assert_eq!(record.weight.current, None);
        assert_eq!(record.weight.target, LOGGED_SET.target_weight);
        // the logged time never leaks into plan mode
        assert_eq!(record.time.current, None);
        assert_eq!(record.time.target, None);
    }

    #[test]
    fn test_blank_record_has_fresh_unique_id() {
        let a = SetRecord::blank(SetType::Standard);
        let b = SetRecord::blank(SetType::Standard);
        assert_ne!(a.id, b.id);
        assert_eq!(a.reps, RepsField::default());
    }

    #[test]
    fn test_reps_required() {
        let mut record = SetRecord::blank(SetType::Standard);
        assert!(record.reps_required());

        record.weight.current = Some(Weight::new(60.0).unwrap());
        assert!(!record.reps_required());

        record.weight.current = None;
        record.time.current = Some(Time::new(30).unwrap());
        assert!(!record.reps_required());
    }

    #[test]
    fn test_synthesis_is_referentially_transparent() {
        let data = SetData::Logged(&LOGGED_SET);
        assert_eq!(
            synthesize_set_record(&data, RecordMode::Log),
            synthesize_set_record(&data, RecordMode::Log)
        );
    }
}
