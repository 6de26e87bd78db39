//! # waymark-core
//!
//! Core types and traits for the Waymark screen routing registry.
//!
//! This crate has minimal dependencies and is meant to be imported by feature
//! modules that only need to *describe* destinations and handlers, without
//! pulling in the registry and dispatcher from `waymark-std`.
//!
//! # Building Blocks
//!
//! ## Destinations ([`RoutableTarget`])
//!
//! A target names a [`RoutePath`] and optionally carries [`Params`]. Targets are
//! cheap values built per navigation attempt.
//!
//! ## Handlers ([`Invoker`])
//!
//! An invoker wraps the function a feature module registers for a path. It turns
//! a [`RouteContext`] into a screen, or declines with `None`.
//!
//! ## Presentation ([`Container`], [`PresentationHost`])
//!
//! The container tree is an owned snapshot of the host's hierarchy: stacks, tabs,
//! pagers and plain containers, each able to carry a presented modal. The host
//! performs the push or present once a target container has been located.
//!
//! # Error Types
//!
//! Navigation never errors; absence is reported as `None` or `false`.
//!
//! - [`WaymarkError`] - Top-level error type
//! - [`RegistryError`] - Strict registration errors
//! - [`ParamError`] - Typed parameter extraction errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod container;
mod context;
mod error;
mod host;
mod invoker;
mod params;
mod path;
mod target;

// Re-exports
pub use container::{Container, ContainerId, ContainerKind, RenderedElement};
pub use context::RouteContext;
pub use error::{BoxError, ParamError, RegistryError, WaymarkError};
pub use host::{Completion, PresentationHost};
pub use invoker::Invoker;
pub use params::{FromParam, ParamValue, Params};
pub use path::RoutePath;
pub use target::{RoutableTarget, Route};
