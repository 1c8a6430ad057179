use anyhow::Result;
use dotenv::dotenv;
use mimalloc::MiMalloc;
use pqueue::{demo::demo_runner::run_demo, log::setup_logging, settings::Settings};
use tracing::info;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> Result<()> {
  dotenv().ok();
  let settings = Settings::new()?;
  setup_logging(&settings.log)?;

  let popped = run_demo(&settings.demo);
  info!(count = popped.len(), "Demo finished");

  Ok(())
}
