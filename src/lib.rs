//! A product catalog: validated products behind a pluggable repository.

pub mod core;
pub mod infra;
