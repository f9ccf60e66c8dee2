pub mod location;
pub mod schedule;
pub mod time;

pub use location::*;
pub use schedule::*;
pub use time::*;
