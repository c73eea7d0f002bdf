//! Shelf engine: library service client, toast timers and effect execution.
mod client;
mod engine;
mod timer;
mod types;

pub use client::{ClientSettings, LibraryClient, ReqwestLibraryClient, DEFAULT_BASE_URL};
pub use engine::EngineHandle;
pub use timer::ExpiryTimer;
pub use types::{ClientError, EngineEvent, FailureKind};
