pub mod alloc;
pub mod error;
#[cfg(feature = "binary_tree")]
pub mod fmt;
pub mod panic;
pub mod result;
