#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod memory;
pub mod model;


pub use memory::MemoryStore;

use strum::AsRefStr;

/// Object store keys of the persistence boundary.
#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Store {
    #[strum(serialize = "routines")]
    Routines,
    #[strum(serialize = "workout_logs")]
    WorkoutLogs,
    #[strum(serialize = "personal_bests")]
    PersonalBests,
}
