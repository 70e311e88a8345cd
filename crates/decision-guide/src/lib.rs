//! Leadership decision guide built on Vroom's Time-Driven normative model.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
