//! # voltlog-domain
//!
//! Pure domain model for the voltlog reading-intake service.
//!
//! ## Responsibilities
//! - Define **Readings** (one accepted device/voltage/date measurement)
//! - Parse and validate raw form submissions into readings
//! - Define the error taxonomy shared across the workspace
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod reading;
