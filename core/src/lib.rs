pub mod demo;
pub mod heap;
pub mod log;
pub mod settings;
