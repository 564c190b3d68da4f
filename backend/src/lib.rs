//! # Semaforo Rust Backend
//!
//! Traffic-signal timing engine following the Manual Brasileiro de
//! Sinalização de Trânsito (Volume V).
//!
//! This crate computes the timing parameters of a fixed-time signalized
//! intersection from geometric and traffic-flow inputs: per-phase
//! inter-green ("entreverdes") intervals, Webster's optimal cycle length,
//! and the effective green-time split with a 12 s safety floor. Results
//! accumulate in an in-memory session and can be exported as a single CSV.
//! The backend exposes a REST API via Axum for the form-based frontend.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`models`]: Validated input value objects (phases, flow sets)
//! - [`services`]: Timing calculators, CSV export, and session state
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`routes`]: Route-specific data types
//!
//! ## Computation pipeline
//!
//! Per-phase inter-green totals sum into the cycle's lost time Tp; Tp
//! feeds Webster's optimal-cycle formula; the resulting cycle feeds the
//! green-time allocator. Every stage takes its inputs explicitly — the
//! session store only fills in defaults a request left out and collects
//! results for export.

pub mod api;

pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
