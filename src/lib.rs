//! Helpdesk: IT task tracking core.
//!
//! This crate provides the logic behind a helpdesk dashboard: listing,
//! filtering, sorting, creating, and updating IT tasks, plus the dashboard
//! counters derived from them. Storage is an in-memory collection behind an
//! async repository port, optionally slowed down to mimic a remote backend.
//!
//! # Architecture
//!
//! Helpdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`task`]: Task model, querying, lifecycle, and services
//! - [`config`]: Layered configuration

pub mod config;
pub mod task;
