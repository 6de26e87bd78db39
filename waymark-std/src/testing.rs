//! Testing utilities for Waymark.
//!
//! Hosts that stand in for a real platform so handlers, registries and the
//! dispatcher can be exercised without a window system.
//!
//! # Features
//!
//! - [`RecordingHost`]: records every push and present against a fixed tree
//! - [`TreeHost`]: applies pushes and presents to its own container tree

use waymark_core::{Completion, Container, ContainerId, PresentationHost};

// ============================================================================
// Recording Host
// ============================================================================

/// A call received by a [`RecordingHost`].
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall<S> {
    /// A push onto a navigation stack.
    Push {
        /// Receiving stack.
        navigation: ContainerId,
        /// Pushed screen.
        screen: S,
        /// Animation flag as passed.
        animated: bool,
    },
    /// A modal presentation.
    Present {
        /// Presenting node.
        presenter: ContainerId,
        /// Presented screen.
        screen: S,
        /// Animation flag as passed.
        animated: bool,
        /// Whether a completion callback was supplied.
        with_completion: bool,
    },
}

/// A host that records calls without changing its tree.
///
/// Completions are held until [`complete_all`](Self::complete_all) runs them,
/// unless the host was built with [`complete_immediately`](Self::complete_immediately).
///
/// # Example
///
/// ```rust,ignore
/// let mut host = RecordingHost::new(Container::stack("nav", vec![]));
/// dispatcher.push(&mut host, &Route::new("detail"), true);
/// assert_eq!(host.calls().len(), 1);
/// ```
pub struct RecordingHost<S> {
    root: Option<Container>,
    calls: Vec<HostCall<S>>,
    pending: Vec<Completion>,
    complete_immediately: bool,
}

impl<S> RecordingHost<S> {
    /// Create a host over `root`.
    pub fn new(root: Container) -> Self {
        Self {
            root: Some(root),
            calls: Vec::new(),
            pending: Vec::new(),
            complete_immediately: false,
        }
    }

    /// Create a host with no root, as before a window is attached.
    pub fn empty() -> Self {
        Self {
            root: None,
            calls: Vec::new(),
            pending: Vec::new(),
            complete_immediately: false,
        }
    }

    /// Run completions as soon as a presentation is requested.
    pub fn complete_immediately(mut self) -> Self {
        self.complete_immediately = true;
        self
    }

    /// The calls received so far, oldest first.
    pub fn calls(&self) -> &[HostCall<S>] {
        &self.calls
    }

    /// Forget recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Replace the tree, e.g. after simulating a tab switch.
    pub fn set_root(&mut self, root: Option<Container>) {
        self.root = root;
    }

    /// Number of completions waiting to run.
    pub fn pending_completions(&self) -> usize {
        self.pending.len()
    }

    /// Run every held completion in arrival order.
    pub fn complete_all(&mut self) {
        for completion in self.pending.drain(..) {
            completion();
        }
    }

    /// Drop every held completion without running it.
    pub fn drop_completions(&mut self) {
        self.pending.clear();
    }
}

impl<S> PresentationHost for RecordingHost<S> {
    type Screen = S;

    fn root(&self) -> Option<&Container> {
        self.root.as_ref()
    }

    fn push(&mut self, navigation: ContainerId, screen: S, animated: bool) {
        self.calls.push(HostCall::Push {
            navigation,
            screen,
            animated,
        });
    }

    fn present(
        &mut self,
        presenter: ContainerId,
        screen: S,
        animated: bool,
        on_complete: Option<Completion>,
    ) {
        self.calls.push(HostCall::Present {
            presenter,
            screen,
            animated,
            with_completion: on_complete.is_some(),
        });
        if let Some(completion) = on_complete {
            if self.complete_immediately {
                completion();
            } else {
                self.pending.push(completion);
            }
        }
    }
}

// ============================================================================
// Tree Host
// ============================================================================

/// A host whose screens are containers, grafted into its own tree.
///
/// Pushes append to the located stack and presents set the located node's
/// modal, so a sequence of navigations can be checked against the resulting
/// tree. Completions run immediately.
#[derive(Debug, Default)]
pub struct TreeHost {
    root: Option<Container>,
}

impl TreeHost {
    /// Create a host over `root`.
    pub fn new(root: Container) -> Self {
        Self { root: Some(root) }
    }

    /// The current tree.
    pub fn tree(&self) -> Option<&Container> {
        self.root.as_ref()
    }

    /// Mutable access to the current tree.
    pub fn tree_mut(&mut self) -> Option<&mut Container> {
        self.root.as_mut()
    }

    fn node_mut(&mut self, id: ContainerId) -> Option<&mut Container> {
        self.root.as_mut().and_then(|root| root.find_mut(id))
    }
}

impl PresentationHost for TreeHost {
    type Screen = Container;

    fn root(&self) -> Option<&Container> {
        self.root.as_ref()
    }

    fn push(&mut self, navigation: ContainerId, screen: Container, _animated: bool) {
        if let Some(node) = self.node_mut(navigation) {
            node.push(screen);
        }
    }

    fn present(
        &mut self,
        presenter: ContainerId,
        screen: Container,
        _animated: bool,
        on_complete: Option<Completion>,
    ) {
        if let Some(node) = self.node_mut(presenter) {
            node.present(screen);
        }
        if let Some(completion) = on_complete {
            completion();
        }
    }
}
