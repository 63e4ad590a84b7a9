//! Capabilities shared by several collections, so that code like a breadth-first traversal can
//! ask for "a queue" rather than a particular one.

pub mod queue;
pub mod set;
pub mod stack;

#[doc(inline)]
pub use queue::Queue;
#[doc(inline)]
pub use set::Set;
#[doc(inline)]
pub use stack::Stack;
