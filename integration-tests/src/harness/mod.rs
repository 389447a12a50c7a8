mod config;
pub mod tracing;

pub use config::{INSTANCE_ID, fixture_path, render_fixture, render_fixture_document};
pub use tracing::{CapturedEvent, captured_events, init_test_tracing};
