pub mod fixtures;
pub mod tracing;

pub use fixtures::{fixture_path, load_fixture, load_json_fixture};
pub use self::tracing::{CapturedEvent, capture_events};
