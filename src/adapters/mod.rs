// Adapters layer: concrete implementations for external systems (child process, filesystem).

pub mod process;
pub mod publisher;

pub use process::ProcessRunner;
pub use publisher::LocalPublisher;
