//! Helpdesk task tracking.
//!
//! Tasks are IT tickets with status, priority, and type metadata. The module
//! follows hexagonal architecture:
//!
//! - Domain types and the pure status transition in [`domain`]
//! - Filtering, sorting, and dashboard projections in [`query`]
//! - Page state reducers in [`view`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod query;
pub mod services;
pub mod view;

#[cfg(test)]
mod tests;
