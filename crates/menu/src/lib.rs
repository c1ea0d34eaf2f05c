mod filter;
mod slug;
mod stats;
mod store;
mod types;

pub use filter::*;
pub use slug::*;
pub use stats::*;
pub use store::*;
pub use types::*;
