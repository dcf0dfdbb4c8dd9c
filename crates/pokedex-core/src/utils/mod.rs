//! Small shared helpers.

pub mod formatting;
pub mod live_query;

pub use live_query::live_query;
