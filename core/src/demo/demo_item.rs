use crate::{heap::Comparator, settings::HeapOrder};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoItem {
  pub value: String,
  pub priority: i64,
}

impl DemoItem {
  pub fn new(value: impl Into<String>, priority: i64) -> Self {
    Self {
      value: value.into(),
      priority,
    }
  }
}

/// Orders demo items by priority. `Descending` puts the highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityOrder(pub HeapOrder);

impl Comparator<DemoItem> for PriorityOrder {
  fn before(&self, a: &DemoItem, b: &DemoItem) -> bool {
    match self.0 {
      HeapOrder::Ascending => a.priority < b.priority,
      HeapOrder::Descending => a.priority > b.priority,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_priority_order() {
    let low = DemoItem::new("low", 1);
    let high = DemoItem::new("high", 9);
    assert!(PriorityOrder(HeapOrder::Descending).before(&high, &low));
    assert!(PriorityOrder(HeapOrder::Ascending).before(&low, &high));
    assert!(!PriorityOrder(HeapOrder::Ascending).before(&low, &low));
  }
}
