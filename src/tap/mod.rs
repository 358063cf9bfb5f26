pub mod observer;

// Re-export commonly used types
pub use observer::{LogTap, NoopTap, RecordingTap, StreamTap, TapStage};
