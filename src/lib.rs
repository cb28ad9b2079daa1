//! cc-depcheck library — build-graph loading, include scanning, and dependency reconciliation.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
