//! CLI command implementations

pub mod add;
pub mod coins;
pub mod refresh;
pub mod remove;
pub mod search;
pub mod show;
pub mod version;
