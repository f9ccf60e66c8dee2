//! # tourplan
//!
//! Clustering and time-window scheduling engine for multi-group visit
//! planning. Given a list of locations with opening hours, a target group
//! count and a daily time window, the engine:
//!
//! 1. assigns locations to groups with a soft-penalty weighted k-means,
//!    searched over multiple random restarts and ranked by a composite
//!    cohesion/balance score;
//! 2. builds a feasible visit order per group with a greedy, priority-driven
//!    scheduler, itself searched over multiple restarts per group;
//! 3. runs a final cross-group rescue pass that tries to place locations the
//!    per-group searches could not fit.
//!
//! The result is an ordered, non-overlapping schedule per group and the list
//! of locations that remain unvisitable, minimized by construction.
//!
//! ## Architecture
//!
//! - [`api`]: request/response DTOs consumed by transport layers
//! - [`models`]: location, time-of-day and schedule types
//! - [`clustering`]: weighted k-means, quality scoring and the restart search
//! - [`scheduler`]: placement procedure, greedy scheduler, per-group search
//!   and the rescue pass
//! - [`engine`]: pipeline orchestration with full barriers between phases
//!
//! Both concurrent phases (clustering restarts, per-group scheduling) run on
//! a bounded worker pool; every task owns a private copy of its working data.

pub mod api;
pub mod clustering;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod utils;

pub use api::{PlanRequest, PlanResponse};
pub use config::EngineConfig;
pub use engine::{plan, PlanOutcome};
pub use error::{EngineError, EngineResult};
