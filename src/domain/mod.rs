//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared numeric primitives (clamps, guarded division)
//! - `fuzzy` - Membership functions, knowledge base and inference
//! - `marketing` - ROI metrics, opportunity costs, recommendations and plans

pub mod foundation;
pub mod fuzzy;
pub mod marketing;
