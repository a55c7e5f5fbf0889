//! CLI commands

pub mod copy;
pub mod inspect;
pub mod mirrors;
pub mod utils;
