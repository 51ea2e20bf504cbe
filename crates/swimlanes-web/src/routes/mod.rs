//! Route handlers.

pub mod board;
pub mod bug;
pub mod projects;
pub mod stories;
