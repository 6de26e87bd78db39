#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use waymark::{Container, Params, RoutableTarget, RouteContext, RoutePath, params};

// ============================================================================
// Test Screens and Targets
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Screen {
    pub name: String,
}

impl Screen {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

pub struct Profile {
    pub id: i64,
}

impl RoutableTarget for Profile {
    fn path(&self) -> RoutePath {
        RoutePath::new("user/profile")
    }

    fn parameters(&self) -> Option<Params> {
        Some(params! { "id" => self.id })
    }
}

pub struct Unregistered;

impl RoutableTarget for Unregistered {
    fn path(&self) -> RoutePath {
        RoutePath::new("unregistered")
    }

    fn parameters(&self) -> Option<Params> {
        Some(params! { "anything" => true })
    }
}

// ============================================================================
// Handler Probes
// ============================================================================

/// Captures every context a handler receives.
#[derive(Clone, Default)]
pub struct ContextProbe {
    seen: Arc<Mutex<Vec<RouteContext>>>,
}

impl ContextProbe {
    pub fn record(&self, ctx: RouteContext) {
        self.seen.lock().unwrap().push(ctx);
    }

    pub fn seen(&self) -> Vec<RouteContext> {
        self.seen.lock().unwrap().clone()
    }
}

// ============================================================================
// Trees
// ============================================================================

/// Tab root with two tabs; tab 0 is a stack [A, B] and B presents a plain modal M.
pub fn tabbed_stack_with_modal() -> Container {
    let b = Container::plain("B").presenting(Container::plain("M"));
    let nav = Container::stack("nav", vec![Container::plain("A"), b]);
    Container::tabbed("tabs", vec![nav, Container::plain("settings")], Some(0))
}

/// A stack presenting M1, which presents M2.
pub fn stack_with_deep_modals() -> Container {
    Container::stack("nav", vec![Container::plain("A")])
        .presenting(Container::plain("M1").presenting(Container::plain("M2")))
}

/// Tab root presenting a plain modal M over its selected stack.
pub fn tab_root_with_modal() -> Container {
    let nav = Container::stack("nav", vec![Container::plain("A")]);
    Container::tabbed("tabs", vec![nav], Some(0)).presenting(Container::plain("M"))
}
