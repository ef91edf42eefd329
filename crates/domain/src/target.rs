use std::fmt::{self, Display};

use crate::{LabelKey, Labels, Reps};

/// Specification of the intended rep count of a planned set.
///
/// The textual variants (`Amrap`, `Max`, `MaxFraction`) carry no numeric
/// target; textuality is derived from the variant and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepsTarget {
    Exact { value: Reps },
    Range { min: Reps, max: Reps },
    MinPlus { value: Reps },
    Amrap,
    Max,
    MaxFraction { divisor: u32 },
}

impl RepsTarget {
    #[must_use]
    pub fn is_textual(&self) -> bool {
        match self {
            RepsTarget::Exact { .. } | RepsTarget::Range { .. } | RepsTarget::MinPlus { .. } => {
                false
            }
            RepsTarget::Amrap | RepsTarget::Max | RepsTarget::MaxFraction { .. } => true,
        }
    }

    /// Whether this variant may appear in the given context. Every variant
    /// can be planned; a performed set is always a concrete number.
    #[must_use]
    pub fn allowed_in(&self, context: TargetContext) -> bool {
        match context {
            TargetContext::Builder => true,
            TargetContext::Player => matches!(self, RepsTarget::Exact { .. }),
        }
    }

    /// Round-trip to the legacy flat `{min, max}` pair. `MinPlus` degrades to
    /// its floor and the textual variants carry no bounds at all.
    #[must_use]
    pub fn legacy_bounds(&self) -> (Option<Reps>, Option<Reps>) {
        match self {
            RepsTarget::Exact { value } | RepsTarget::MinPlus { value } => (Some(*value), None),
            RepsTarget::Range { min, max } => (Some(*min), Some(*max)),
            RepsTarget::Amrap | RepsTarget::Max | RepsTarget::MaxFraction { .. } => (None, None),
        }
    }

    /// Resolve the value shown for this target. A supplied `actual` (a logged
    /// result) takes display precedence; the target itself stays untouched
    /// for later comparison.
    #[must_use]
    pub fn display_value(&self, actual: Option<Reps>, labels: &impl Labels) -> DisplayValue {
        if let Some(actual) = actual {
            return DisplayValue::Number(actual);
        }
        match self {
            RepsTarget::Exact { value } => DisplayValue::Number(*value),
            RepsTarget::Range { min, max } => DisplayValue::Text(format!("{min}-{max}")),
            RepsTarget::MinPlus { value } => DisplayValue::Text(format!("{value}+")),
            RepsTarget::Amrap => DisplayValue::Text(labels.translate(LabelKey::Amrap)),
            RepsTarget::Max => DisplayValue::Text(labels.translate(LabelKey::MaxEffort)),
            RepsTarget::MaxFraction { divisor } => DisplayValue::Text(format!(
                "1/{divisor} {}",
                labels.translate(LabelKey::MaxEffort)
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetContext {
    Builder,
    Player,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayValue {
    Number(Reps),
    Text(String),
}

impl Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayValue::Number(value) => write!(f, "{value}"),
            DisplayValue::Text(value) => write!(f, "{value}"),
        }
    }
}

/// Raw input to the resolver: an already-structured target, the legacy flat
/// bounds pair, or a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepsInput {
    Structured(RepsTarget),
    Bounds { min: Option<u32>, max: Option<u32> },
    Number(u32),
}

/// Interpret a raw reps specification. Structured input is returned as-is,
/// a complete bounds pair becomes `Range` (even when `min == max`), a single
/// number becomes `Exact`. There is no implicit promotion to the textual
/// variants. Malformed input resolves to `None`, never an error, so callers
/// can always render "no target specified".
#[must_use]
pub fn resolve_reps_target(input: &RepsInput) -> Option<RepsTarget> {
    match input {
        RepsInput::Structured(target) => {
            match target {
                RepsTarget::Range { min, max } if min > max => return None,
                RepsTarget::MaxFraction { divisor } if *divisor < 2 => return None,
                _ => {}
            }
            Some(*target)
        }
        RepsInput::Bounds {
            min: Some(min),
            max: Some(max),
        } => {
            let min = Reps::new(*min).ok()?;
            let max = Reps::new(*max).ok()?;
            if min > max {
                return None;
            }
            Some(RepsTarget::Range { min, max })
        }
        RepsInput::Bounds {
            min: Some(value),
            max: None,
        }
        | RepsInput::Bounds {
            min: None,
            max: Some(value),
        }
        | RepsInput::Number(value) => Some(RepsTarget::Exact {
            value: Reps::new(*value).ok()?,
        }),
        RepsInput::Bounds {
            min: None,
            max: None,
        } => None,
    }
}
