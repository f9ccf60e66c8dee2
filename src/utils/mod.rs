pub mod geo;
pub mod parallel;

pub use geo::haversine_km;
pub use parallel::{parallel_into_collect, ThreadPool};
