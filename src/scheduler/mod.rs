//! Greedy visit scheduling: per-group multi-start search plus a sequential
//! cross-group rescue pass, all built on one shared placement procedure.

pub mod greedy;
pub mod placement;
pub mod rescue;
pub mod search;

pub use greedy::schedule_group;
pub use placement::try_place;
pub use rescue::{rescue_unvisitable, UNVISITABLE_REASON};
pub use search::search_schedules;
