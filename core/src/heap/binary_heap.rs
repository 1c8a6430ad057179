use super::{comparator::Comparator, heap_error::HeapError};
use std::fmt;
use tracing::{instrument, warn};

/// An array-backed binary heap ordered by a caller supplied [`Comparator`].
///
/// The element at index 0 is always the one the comparator puts first. Uses
/// 0-indexed storage with parent = (i-1)/2, children = 2i+1, 2i+2.
///
/// Elements mutated through [`BinaryHeap::get_mut`] must be followed by a call to
/// [`BinaryHeap::fix_at`] with the same index, otherwise the heap order silently
/// breaks. Equal elements come out in no particular order.
#[derive(Clone)]
pub struct BinaryHeap<T, C> {
  elements: Vec<T>,
  comparator: C,
}

impl<T, C: Comparator<T>> BinaryHeap<T, C> {
  /// Builds a heap over `elements` in O(n), reusing the vector's storage.
  #[instrument(level = "trace", skip_all, fields(count = elements.len()))]
  pub fn new(elements: Vec<T>, comparator: C) -> Self {
    let mut heap = Self {
      elements,
      comparator,
    };
    heap.heapify();
    heap
  }

  pub fn with_capacity(capacity: usize, comparator: C) -> Self {
    Self {
      elements: Vec::with_capacity(capacity),
      comparator,
    }
  }

  pub fn len(&self) -> usize {
    self.elements.len()
  }

  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  pub fn comparator(&self) -> &C {
    &self.comparator
  }

  /// Returns the first element in comparator order without removing it.
  pub fn peek(&self) -> Option<&T> {
    self.elements.first()
  }

  pub fn get(&self, index: usize) -> Option<&T> {
    self.elements.get(index)
  }

  /// Mutable access to the element at `index`.
  ///
  /// Call [`BinaryHeap::fix_at`] with the same index once the ordering-relevant
  /// data has changed.
  pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
    self.elements.get_mut(index)
  }

  /// Index of the first element in storage order matching `predicate`.
  pub fn position<P>(&self, predicate: P) -> Option<usize>
  where
    P: FnMut(&T) -> bool,
  {
    self.elements.iter().position(predicate)
  }

  /// The elements in heap (storage) order.
  pub fn as_slice(&self) -> &[T] {
    &self.elements
  }

  pub fn into_vec(self) -> Vec<T> {
    self.elements
  }

  /// Drains the heap in comparator order.
  pub fn into_sorted_vec(mut self) -> Vec<T> {
    let mut sorted = Vec::with_capacity(self.len());
    while let Some(element) = self.pop() {
      sorted.push(element);
    }
    sorted
  }

  pub fn clear(&mut self) {
    self.elements.clear();
  }

  pub fn push(&mut self, value: T) {
    self.elements.push(value);
    self.sift_up(self.elements.len() - 1);
  }

  /// Removes the first element in comparator order.
  ///
  /// Returns `None` if the heap is empty.
  pub fn pop(&mut self) -> Option<T> {
    let last = self.elements.len().checked_sub(1)?;
    self.elements.swap(0, last);
    let root = self.elements.pop()?;
    self.sift_down(0, last);
    Some(root)
  }

  /// Swaps `value` in for the root and sifts it down, returning the old root.
  /// On an empty heap `value` is pushed and `None` returned.
  pub fn replace_root(&mut self, value: T) -> Option<T> {
    let Some(root) = self.elements.first_mut() else {
      self.push(value);
      return None;
    };
    let old_root = std::mem::replace(root, value);
    self.sift_down(0, self.elements.len());
    Some(old_root)
  }

  /// Removes and returns the element at `index`, which need not be the root.
  pub fn remove_at(&mut self, index: usize) -> Result<T, HeapError> {
    self.check_index(index)?;
    // The last element takes the vacated slot.
    let removed = self.elements.swap_remove(index);
    let len = self.elements.len();
    if index < len && !self.sift_down(index, len) {
      self.sift_up(index);
    }
    Ok(removed)
  }

  /// Restores the heap order after the element at `index` changed in place.
  ///
  /// Equivalent to `remove_at(index)` followed by a `push` of the changed value,
  /// without moving the element out of the heap.
  pub fn fix_at(&mut self, index: usize) -> Result<(), HeapError> {
    self.check_index(index)?;
    if !self.sift_down(index, self.elements.len()) {
      self.sift_up(index);
    }
    Ok(())
  }

  /// Applies `update` to the element at `index`, then fixes its position.
  pub fn update_at<F>(&mut self, index: usize, update: F) -> Result<(), HeapError>
  where
    F: FnOnce(&mut T),
  {
    self.check_index(index)?;
    update(&mut self.elements[index]);
    self.fix_at(index)
  }

  fn check_index(&self, index: usize) -> Result<(), HeapError> {
    let len = self.elements.len();
    if index >= len {
      warn!(index, len, "Heap index out of range");
      return Err(HeapError::IndexOutOfRange { index, len });
    }
    Ok(())
  }

  fn heapify(&mut self) {
    let n = self.elements.len();
    for i in (0..n / 2).rev() {
      self.sift_down(i, n);
    }
  }

  fn less(&self, i: usize, j: usize) -> bool {
    self
      .comparator
      .before(&self.elements[i], &self.elements[j])
  }

  fn sift_up(&mut self, mut index: usize) {
    while index > 0 {
      let parent = (index - 1) / 2;
      if !self.less(index, parent) {
        break;
      }
      self.elements.swap(index, parent);
      index = parent;
    }
  }

  /// Moves the element at `start` toward the leaves of the first `n` slots.
  /// Returns whether it moved.
  fn sift_down(&mut self, start: usize, n: usize) -> bool {
    let mut index = start;
    loop {
      let left = match index.checked_mul(2).and_then(|i| i.checked_add(1)) {
        Some(left) if left < n => left,
        _ => break,
      };
      // Right child only wins when strictly before the left one.
      let right = left + 1;
      let child = if right < n && self.less(right, left) {
        right
      } else {
        left
      };
      if !self.less(child, index) {
        break;
      }
      self.elements.swap(index, child);
      index = child;
    }
    index > start
  }
}

impl<T, C: Comparator<T>> Extend<T> for BinaryHeap<T, C> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    for value in iter {
      self.push(value);
    }
  }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("BinaryHeap")
      .field("elements", &self.elements)
      .finish_non_exhaustive()
  }
}
