pub mod demo_item;
pub mod demo_runner;
