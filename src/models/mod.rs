pub mod event;
pub mod race;
pub mod workout;

pub use event::TrainingEvent;
pub use race::RaceAnchor;
pub use workout::WorkoutDescriptor;
