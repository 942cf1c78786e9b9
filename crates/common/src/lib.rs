//! Wire types shared by the echo fixture server, its tests and benchmarks.

pub mod types;

pub use types::ResponsePayload;
