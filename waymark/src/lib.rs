//! # waymark - Screen Routing Registry
//!
//! `waymark` maps route paths to handlers that build screens, and hands the
//! resulting screens to whatever container the user is currently looking at.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use waymark::prelude::*;
//!
//! // Feature modules register destinations by path.
//! let registry = RegistryBuilder::new()
//!     .route("user/profile", |ctx: RouteContext| {
//!         let id: i64 = ctx.get("id").ok()?;
//!         Some(Screen::profile(id))
//!     })
//!     .build()?;
//! let dispatcher = Dispatcher::new(registry);
//!
//! // Callers navigate by target; failure is a silent `false`.
//! let target = Route::new("user/profile").param("id", 42);
//! dispatcher.push(&mut host, &target, true);
//! ```
//!
//! ## Where screens go
//!
//! - **push** lands on the active navigation stack: the root stack, or the
//!   selected tab's stack, followed through any modals to a stack at the end.
//! - **present** lands on the topmost visible node: modals first, then the
//!   selected tab, the top of a stack, a single visible page, or an embedded
//!   child, in that order.
//!
//! See [`locate`] for the exact rules.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use waymark_core::{
    // Errors
    BoxError,
    // Host
    Completion,
    // Container tree
    Container,
    ContainerId,
    ContainerKind,
    // Parameters
    FromParam,
    // Handlers
    Invoker,
    ParamError,
    ParamValue,
    Params,
    PresentationHost,
    RegistryError,
    RenderedElement,
    // Targets
    RoutableTarget,
    Route,
    RouteContext,
    RoutePath,
    WaymarkError,
    params,
};

// Registry
pub use waymark_std::registry::{RegistryBuilder, RouteRegistry};

// Dispatch
pub use waymark_std::dispatch::{Canceled, Dispatcher, Presented};

// Target methods
pub use waymark_std::target::RoutableTargetExt;

/// Container-tree walks used to place pushed and presented screens.
pub mod locate {
    pub use waymark_std::locate::{
        active_navigation, covering_modal, topmost_visible, visible_child, visible_path,
    };
}

/// Testing utilities.
pub mod testing {
    pub use waymark_std::testing::{HostCall, RecordingHost, TreeHost};
}

/// Prelude module - common imports for Waymark.
///
/// # Usage
///
/// ```rust,ignore
/// use waymark::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Tree
        Container,
        // Dispatch
        Dispatcher,
        // Parameters
        FromParam,
        ParamValue,
        Params,
        // Host
        PresentationHost,
        // Registry
        RegistryBuilder,
        // Targets
        RoutableTarget,
        RoutableTargetExt,
        Route,
        RouteContext,
        RoutePath,
        RouteRegistry,
        params,
    };
}

#[cfg(feature = "macros")]
pub use waymark_macros::Routable;

#[cfg(feature = "inventory")]
pub use waymark_std::{define_route_table, inventory, submit_route};
