//! rxgithub-link library
//!
//! Rewrites GitHub links to an rxgithub mirror, which renders preview cards
//! for source files, and hands the result to the clipboard.

pub mod commands;
pub mod config;
pub mod host;
pub mod logging;
pub mod mirror;
