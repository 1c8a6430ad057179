/// Ordering strategy for a heap.
///
/// `before(a, b)` returns true when `a` must come out of the heap ahead of `b`.
/// It has to be a strict weak ordering (irreflexive, asymmetric, transitive) and
/// must not change its answer for two elements while both are in the heap.
pub trait Comparator<T> {
  fn before(&self, a: &T, b: &T) -> bool;
}

impl<T, F> Comparator<T> for F
where
  F: Fn(&T, &T) -> bool,
{
  fn before(&self, a: &T, b: &T) -> bool {
    self(a, b)
  }
}

/// Smallest element first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinFirst;

impl<T: Ord> Comparator<T> for MinFirst {
  fn before(&self, a: &T, b: &T) -> bool {
    a < b
  }
}

/// Largest element first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxFirst;

impl<T: Ord> Comparator<T> for MaxFirst {
  fn before(&self, a: &T, b: &T) -> bool {
    a > b
  }
}

/// Flips the sense of the wrapped comparator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T, C: Comparator<T>> Comparator<T> for Reversed<C> {
  fn before(&self, a: &T, b: &T) -> bool {
    self.0.before(b, a)
  }
}
