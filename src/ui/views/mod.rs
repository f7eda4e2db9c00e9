pub mod stage;
pub mod usage;
