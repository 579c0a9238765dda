//! Validation of predicted poses before they are trusted

pub mod pose;

pub use pose::PoseValidator;
