use super::{binary_heap::BinaryHeap, comparator::Comparator};

/// Keeps the `capacity` elements that rank last under the comparator.
///
/// The root is the weakest element kept, so a new element only gets in by
/// displacing it.
#[derive(Debug, Clone)]
pub struct BoundedHeap<T, C> {
  heap: BinaryHeap<T, C>,
  capacity: usize,
}

impl<T, C: Comparator<T>> BoundedHeap<T, C> {
  pub fn new(capacity: usize, comparator: C) -> Self {
    Self {
      heap: BinaryHeap::with_capacity(capacity, comparator),
      capacity,
    }
  }

  /// Offers `item` to the heap. Returns whatever did not fit: `None` while there
  /// is room, otherwise the evicted root or `item` itself.
  pub fn push(&mut self, item: T) -> Option<T> {
    if self.heap.len() < self.capacity {
      self.heap.push(item);
      return None;
    }

    let displaces_root = match self.heap.peek() {
      Some(root) => self.heap.comparator().before(root, &item),
      None => false,
    };
    if !displaces_root {
      return Some(item);
    }

    self.heap.replace_root(item)
  }

  pub fn pop(&mut self) -> Option<T> {
    self.heap.pop()
  }

  pub fn peek(&self) -> Option<&T> {
    self.heap.peek()
  }

  pub fn len(&self) -> usize {
    self.heap.len()
  }

  pub fn is_empty(&self) -> bool {
    self.heap.is_empty()
  }

  pub fn capacity(&self) -> usize {
    self.capacity
  }

  /// Weakest first.
  pub fn into_sorted_vec(self) -> Vec<T> {
    self.heap.into_sorted_vec()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::heap::comparator::{MaxFirst, MinFirst};

  #[test]
  fn test_keeps_largest() {
    let mut heap = BoundedHeap::new(3, MinFirst);
    for value in [5, 1, 9, 3, 7, 2, 8] {
      heap.push(value);
    }
    assert_eq!(heap.len(), 3);
    assert_eq!(heap.peek(), Some(&7));
    assert_eq!(heap.into_sorted_vec(), vec![7, 8, 9]);
  }

  #[test]
  fn test_keeps_smallest_with_max_first() {
    let mut heap = BoundedHeap::new(2, MaxFirst);
    for value in [4, 6, 1, 3] {
      heap.push(value);
    }
    assert_eq!(heap.into_sorted_vec(), vec![3, 1]);
  }

  #[test]
  fn test_push_reports_overflow() {
    let mut heap = BoundedHeap::new(2, MinFirst);
    assert_eq!(heap.push(4), None);
    assert_eq!(heap.push(6), None);
    assert_eq!(heap.push(1), Some(1));
    assert_eq!(heap.push(5), Some(4));
    // Ties do not displace the root.
    assert_eq!(heap.push(5), Some(5));
    assert_eq!(heap.pop(), Some(5));
    assert_eq!(heap.pop(), Some(6));
    assert!(heap.is_empty());
  }

  #[test]
  fn test_zero_capacity() {
    let mut heap = BoundedHeap::new(0, MinFirst);
    assert_eq!(heap.push(1), Some(1));
    assert_eq!(heap.capacity(), 0);
    assert!(heap.peek().is_none());
  }
}
