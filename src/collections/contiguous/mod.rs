//! Contiguous collection types. At the moment, this is only [`DynamicArray`], which every other
//! array-backed structure in the crate stores its elements in.

pub mod dynamic_array;

#[doc(inline)]
pub use dynamic_array::DynamicArray;
