//! AEGIS analysis API: the contract stub behind the resume-analysis dashboard.
//!
//! `POST /api/v1/analyze` and `POST /api/v1/interview` validate presence of
//! their required fields and return fixed payloads from pluggable analyzers.

pub mod analysis;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod interview;
pub mod payload;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
