//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates pure domain services into request-level results.
//! Handlers are synchronous and hold only immutable state.

pub mod handlers;

pub use handlers::{GenerateRoiReportCommand, GenerateRoiReportHandler, ROIReport};
