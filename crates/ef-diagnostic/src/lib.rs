//! Core library for the Whetstone executive function diagnostic: the
//! scoring engine that turns self-reported capacity ratings into a tier
//! recommendation, and the renderer that lays the results out as a
//! branded PDF report.

pub mod config;
pub mod diagnostic;
pub mod error;
pub mod telemetry;
