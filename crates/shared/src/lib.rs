mod date;
mod defaults;
mod error;
pub mod js_number;
pub mod storage;

pub use date::*;
pub use defaults::*;
pub use error::*;
pub use storage::{FileStorage, MemoryStorage, Storage};
