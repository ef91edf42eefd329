/// Keys for every human-readable label the core emits. Labels are display
/// concerns only and must never feed identity computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKey {
    Amrap,
    MaxEffort,
    WarmUp,
    MainLift,
    Cardio,
    Finisher,
    CoolDown,
    NoSection,
    Pending,
    InProgress,
    Completed,
    Skipped,
    DoLater,
    NoData,
}

pub trait Labels {
    fn translate(&self, key: LabelKey) -> String;
}

/// Built-in English labels.
pub struct DefaultLabels;

impl Labels for DefaultLabels {
    fn translate(&self, key: LabelKey) -> String {
        match key {
            LabelKey::Amrap => "AMRAP",
            LabelKey::MaxEffort => "max",
            LabelKey::WarmUp => "Warm-up",
            LabelKey::MainLift => "Main lift",
            LabelKey::Cardio => "Cardio",
            LabelKey::Finisher => "Finisher",
            LabelKey::CoolDown => "Cool-down",
            LabelKey::NoSection => "Unsectioned",
            LabelKey::Pending => "Pending",
            LabelKey::InProgress => "In progress",
            LabelKey::Completed => "Completed",
            LabelKey::Skipped => "Skipped",
            LabelKey::DoLater => "Do later",
            LabelKey::NoData => "no data",
        }
        .to_string()
    }
}
