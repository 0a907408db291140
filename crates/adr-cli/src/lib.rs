//! CLI library components for ADR Lookup.

pub mod logging;
pub mod view;
