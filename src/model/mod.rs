//! Shared entity definitions consumed by both stores and by callers.

pub mod alert;
pub mod machine;
pub mod order;
pub mod process;
pub mod todo;

pub use alert::*;
pub use machine::*;
pub use order::*;
pub use process::*;
pub use todo::*;
