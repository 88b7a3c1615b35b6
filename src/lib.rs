//! ROI Advisor - Fuzzy-logic marketing recommendation engine
//!
//! This crate fills missing business KPIs from industry benchmarks, computes
//! ROI and opportunity costs, and scores untried marketing channels with a
//! Mamdani-style fuzzy inference system.

pub mod application;
pub mod config;
pub mod domain;
