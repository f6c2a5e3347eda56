//! The wave deployment: its steps and the orchestrator sequencing them

pub mod orchestrator;
pub mod steps;
