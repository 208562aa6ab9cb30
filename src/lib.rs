//! readyz: a minimal health-check endpoint service for containers.
//!
//! One route answers orchestrator probes with a fixed JSON payload. An
//! explicitly constructed [`logging::Logger`] records each probe to a console
//! sink and an append-only file on a mounted volume.

pub mod config;
pub mod logging;
pub mod routes;
pub mod server;
pub mod state;
