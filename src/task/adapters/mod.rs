//! Adapter implementations for task storage.

pub mod fixture;
pub mod latency;
pub mod memory;

pub use latency::LatencyTaskRepository;
