//! A module containing [`DynamicArray`] and associated types.
//!
//! The only other included type is [`IntoIter`] for owned iteration. [`Iter`](std::slice::Iter)
//! and [`IterMut`](std::slice::IterMut) from [`std::slice`] are used for borrowed iteration.
//!
//! [`DynamicArray`] is also re-exported under the parent module.

mod dynamic_array;
mod iter;
mod tests;

pub use dynamic_array::*;
pub use iter::*;
