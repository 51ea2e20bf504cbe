//! Swimlanes Core Library
//!
//! Domain models and business logic for the swimlane dashboard: grouping
//! stories into per-developer lanes and advancing them through the workflow.

pub mod bug;
pub mod config;
pub mod error;
pub mod member;
pub mod project;
pub mod story;
pub mod swimlane;

pub use error::{SwimError, SwimResult};
