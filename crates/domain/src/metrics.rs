use derive_more::{AsRef, Display, Into};

/// Number of repetitions of a single set.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(0..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 0 to 999")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

/// Duration in seconds, used for set duration and rest.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Time(u32);

impl Time {
    pub fn new(value: u32) -> Result<Self, TimeError> {
        if !(0..1000).contains(&value) {
            return Err(TimeError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Time {
    type Error = TimeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Time::new(parsed_value),
            Err(_) => Err(TimeError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TimeError {
    #[error("Time must be in the range 0 to 999 s")]
    OutOfRange,
    #[error("Time must be an integer")]
    ParseError,
}

/// Weight in kilograms. Unit conversion happens exclusively at the display
/// boundary (`UnitConverter`).
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !(0.0..1000.0).contains(&value) {
            return Err(WeightError::OutOfRange);
        }

        if (value * 10.0 % 1.0).abs() > f32::EPSILON {
            return Err(WeightError::InvalidResolution);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<f32>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be in the range 0.0 to 999.9 kg")]
    OutOfRange,
    #[error("Weight must be a multiple of 0.1 kg")]
    InvalidResolution,
    #[error("Weight must be a decimal")]
    ParseError,
}

/// Distance in kilometres.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Distance(f32);

impl Distance {
    pub fn new(value: f32) -> Result<Self, DistanceError> {
        if !(0.0..1000.0).contains(&value) {
            return Err(DistanceError::OutOfRange);
        }

        if (value * 100.0 % 1.0).abs() > f32::EPSILON {
            return Err(DistanceError::InvalidResolution);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Distance {
    type Error = DistanceError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<f32>() {
            Ok(parsed_value) => Distance::new(parsed_value),
            Err(_) => Err(DistanceError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DistanceError {
    #[error("Distance must be in the range 0.0 to 999.99 km")]
    OutOfRange,
    #[error("Distance must be a multiple of 0.01 km")]
    InvalidResolution,
    #[error("Distance must be a decimal")]
    ParseError,
}

/// Lifting tempo as dash-separated phases, e.g. "3-1-2-0".
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq)]
pub struct Tempo(String);

impl Tempo {
    pub fn new(value: &str) -> Result<Self, TempoError> {
        let phases = value.split('-').collect::<Vec<_>>();

        if !(2..=4).contains(&phases.len()) {
            return Err(TempoError::InvalidPhaseCount(phases.len()));
        }

        if phases
            .iter()
            .any(|p| p.is_empty() || p.len() > 2 || !p.chars().all(|c| c.is_ascii_digit()))
        {
            return Err(TempoError::InvalidPhase);
        }

        Ok(Self(value.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TempoError {
    #[error("Tempo must have 2 to 4 phases ({0} given)")]
    InvalidPhaseCount(usize),
    #[error("Tempo phases must be 1 or 2 digits")]
    InvalidPhase,
}

/// Rating of perceived exertion, stored in tenths.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct RPE(u8);

impl RPE {
    pub const ZERO: RPE = RPE(0);
    pub const FIVE: RPE = RPE(50);
    pub const SEVEN: RPE = RPE(70);
    pub const EIGHT: RPE = RPE(80);
    pub const NINE: RPE = RPE(90);
    pub const TEN: RPE = RPE(100);

    pub fn new(value: f32) -> Result<Self, RPEError> {
        if !(0.0..=10.0).contains(&value) {
            return Err(RPEError::OutOfRange);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let v = (value * 10.0) as u8;

        if v % 5 != 0 {
            return Err(RPEError::InvalidResolution);
        }

        Ok(Self(v))
    }
}

impl From<RPE> for f32 {
    fn from(value: RPE) -> Self {
        f32::from(value.0) / 10.0
    }
}

impl TryFrom<&str> for RPE {
    type Error = RPEError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<f32>() {
            Ok(parsed_value) => RPE::new(parsed_value),
            Err(_) => Err(RPEError::ParseError),
        }
    }
}

impl std::fmt::Display for RPE {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", f32::from(*self))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RPEError {
    #[error("RPE must be in the range 0.0 to 10.0")]
    OutOfRange,
    #[error("RPE must be a multiple of 0.5")]
    InvalidResolution,
    #[error("RPE must be a decimal")]
    ParseError,
}

/// The metrics a set can carry, in the order they are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricID {
    Reps,
    Weight,
    Time,
    Distance,
    Rest,
    Tempo,
}

impl MetricID {
    #[must_use]
    pub fn default_order() -> Vec<MetricID> {
        vec![
            MetricID::Reps,
            MetricID::Weight,
            MetricID::Time,
            MetricID::Distance,
            MetricID::Rest,
            MetricID::Tempo,
        ]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, Ok(Reps::default()))]
    #[case(999, Ok(Reps(999)))]
    #[case(1000, Err(RepsError::OutOfRange))]
    fn test_reps_new(#[case] value: u32, #[case] expected: Result<Reps, RepsError>) {
        assert_eq!(Reps::new(value), expected);
    }

    #[rstest]
    #[case("12", Ok(Reps(12)))]
    #[case("1000", Err(RepsError::OutOfRange))]
    #[case("x", Err(RepsError::ParseError))]
    #[case("1.5", Err(RepsError::ParseError))]
    fn test_reps_try_from(#[case] value: &str, #[case] expected: Result<Reps, RepsError>) {
        assert_eq!(Reps::try_from(value), expected);
    }

    #[rstest]
    #[case("60", Ok(Time(60)))]
    #[case("999", Ok(Time(999)))]
    #[case("1000", Err(TimeError::OutOfRange))]
    #[case("a minute", Err(TimeError::ParseError))]
    fn test_time_try_from(#[case] value: &str, #[case] expected: Result<Time, TimeError>) {
        assert_eq!(Time::try_from(value), expected);
    }

    #[rstest]
    #[case("80.0", Ok(Weight(80.0)))]
    #[case("80.05", Err(WeightError::InvalidResolution))]
    #[case("1000.0", Err(WeightError::OutOfRange))]
    #[case("heavy", Err(WeightError::ParseError))]
    fn test_weight_try_from(#[case] value: &str, #[case] expected: Result<Weight, WeightError>) {
        assert_eq!(Weight::try_from(value), expected);
    }

    #[rstest]
    #[case("5.0", Ok(Distance(5.0)))]
    #[case("5.25", Ok(Distance(5.25)))]
    #[case("1000.0", Err(DistanceError::OutOfRange))]
    #[case("far", Err(DistanceError::ParseError))]
    fn test_distance_try_from(
        #[case] value: &str,
        #[case] expected: Result<Distance, DistanceError>,
    ) {
        assert_eq!(Distance::try_from(value), expected);
    }

    #[rstest]
    #[case("3-1-2-0", Ok(Tempo(String::from("3-1-2-0"))))]
    #[case("2-0", Ok(Tempo(String::from("2-0"))))]
    #[case("3", Err(TempoError::InvalidPhaseCount(1)))]
    #[case("3-1-2-0-1", Err(TempoError::InvalidPhaseCount(5)))]
    #[case("3--2", Err(TempoError::InvalidPhase))]
    #[case("3-x", Err(TempoError::InvalidPhase))]
    fn test_tempo_new(#[case] value: &str, #[case] expected: Result<Tempo, TempoError>) {
        assert_eq!(Tempo::new(value), expected);
    }

    #[rstest]
    #[case("8.0", Ok(RPE::EIGHT))]
    #[case("7.5", Ok(RPE(75)))]
    #[case("7.3", Err(RPEError::InvalidResolution))]
    #[case("10.5", Err(RPEError::OutOfRange))]
    #[case("hard", Err(RPEError::ParseError))]
    fn test_rpe_try_from(#[case] value: &str, #[case] expected: Result<RPE, RPEError>) {
        assert_eq!(RPE::try_from(value), expected);
    }

    #[test]
    fn test_rpe_display() {
        assert_eq!(RPE::EIGHT.to_string(), "8");
        assert_eq!(RPE(75).to_string(), "7.5");
    }

    #[test]
    fn test_metric_id_default_order() {
        assert_eq!(MetricID::default_order().len(), 6);
        assert_eq!(MetricID::default_order()[0], MetricID::Reps);
    }
}
