//! # voltlog-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **server-side-rendered HTML intake page** that works with
//!   **zero JavaScript** — a plain HTML form plus a table of accepted
//!   readings
//! - Map form submissions into application service calls (driving adapter)
//! - Map application results into HTTP responses: a redirect on success
//!   (PRG pattern) or the re-rendered page with the validation message and
//!   the user's text input preserved
//!
//! ## Dependency rule
//! Depends on `voltlog-app` (for the port trait and service) and
//! `voltlog-domain` (for domain types used in response mapping). Never
//! leaks axum types into the domain.

pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
