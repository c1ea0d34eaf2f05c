mod projector;
mod selection;
mod store;
mod types;

pub use projector::*;
pub use selection::*;
pub use store::*;
pub use types::*;
