//! # waymark-std
//!
//! Standard implementations for the Waymark screen routing registry.
//!
//! This crate provides:
//! - **Registry**: [`RouteRegistry`](registry::RouteRegistry) and its builder
//! - **Locator**: the container-tree walks in [`locate`]
//! - **Dispatch**: [`Dispatcher`](dispatch::Dispatcher), resolve plus push/present
//! - **Target methods**: [`RoutableTargetExt`](target::RoutableTargetExt)
//! - **Testing**: stand-in hosts in [`testing`]
//! - **Distributed registration** (feature `inventory`): `define_route_table!`, `submit_route!`

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use waymark_core;

// Modules
pub mod dispatch;
pub mod locate;
pub mod registry;
pub mod target;
pub mod testing;

#[cfg(feature = "inventory")]
pub use inventory;
