pub mod binary_heap;
pub mod bounded_heap;
pub mod comparator;
pub mod heap_error;

pub use binary_heap::BinaryHeap;
pub use bounded_heap::BoundedHeap;
pub use comparator::{Comparator, MaxFirst, MinFirst, Reversed};
pub use heap_error::HeapError;
