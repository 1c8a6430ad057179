use super::demo_item::{DemoItem, PriorityOrder};
use crate::{heap::BinaryHeap, settings::DemoSettings};
use tracing::{info, instrument};

fn initial_items() -> Vec<DemoItem> {
  vec![
    DemoItem::new("init1", 6),
    DemoItem::new("init2", 9),
    DemoItem::new("init3", 8),
  ]
}

fn pushed_items() -> Vec<DemoItem> {
  vec![
    DemoItem::new("value1", 5),
    DemoItem::new("value2", 3),
    DemoItem::new("value3", 4),
    DemoItem::new("value4", 1),
  ]
}

/// Seeds a heap with a few prioritized items, pushes more, then pops
/// `pop_count` times. Returns the items in the order they were popped.
#[instrument(skip_all, fields(order = %settings.order, pop_count = settings.pop_count))]
pub fn run_demo(settings: &DemoSettings) -> Vec<DemoItem> {
  let mut heap = BinaryHeap::new(initial_items(), PriorityOrder(settings.order));
  heap.extend(pushed_items());
  info!(count = heap.len(), "Heap populated");

  let mut popped = Vec::new();
  for _ in 0..settings.pop_count {
    match heap.pop() {
      Some(item) => {
        info!(value = item.value.as_str(), priority = item.priority, "Popped item");
        popped.push(item);
      }
      None => {
        info!("Heap is empty");
        break;
      }
    }
  }

  popped
}
