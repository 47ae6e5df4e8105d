pub mod compose;
pub mod potential;
pub mod problem;
pub mod version;
