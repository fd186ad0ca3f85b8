#![allow(dead_code)]

mod mock_resolver;
mod recording_reporter;

pub use mock_resolver::{unused_port, MockResolver};
pub use recording_reporter::RecordingReporter;
