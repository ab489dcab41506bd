//! Core library for the relocation destination recommender.
//!
//! The crate hosts the multi-criteria scoring and ranking engine together
//! with the collaborator seams it consumes (country catalog, indicator
//! dataset, narrative assistant) and the axum router that exposes the
//! ranking as a JSON endpoint. The HTTP service shell lives in
//! `services/api`.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
