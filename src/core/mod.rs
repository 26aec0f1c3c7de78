// Core algorithm exports
pub mod compatibility;
pub mod matcher;
pub mod ordering;
pub mod registry;

pub use compatibility::{is_compatible, preference_order};
pub use matcher::{find_matches, MatchResult};
pub use ordering::query_order;
pub use registry::Registry;
