//! CLI library components for the accident EDA.

pub mod commands;
pub mod logging;
