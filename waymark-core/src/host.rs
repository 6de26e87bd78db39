//! # Presentation Host
//!
//! The seam between routing and the platform. A host owns the live container
//! tree and performs the actual push and present; the routing side only decides
//! *which* container receives the screen.

use crate::container::{Container, ContainerId};

/// Callback the host runs once a presentation has finished.
pub type Completion = Box<dyn FnOnce() + Send + 'static>;

/// The platform adapter that owns the container tree.
///
/// # Example
///
/// ```rust,ignore
/// impl PresentationHost for AppWindow {
///     type Screen = ViewHandle;
///
///     fn root(&self) -> Option<&Container> {
///         self.root.as_ref()
///     }
///
///     fn push(&mut self, navigation: ContainerId, screen: ViewHandle, animated: bool) {
///         self.platform.push(navigation, screen, animated);
///     }
///
///     fn present(
///         &mut self,
///         presenter: ContainerId,
///         screen: ViewHandle,
///         animated: bool,
///         on_complete: Option<Completion>,
///     ) {
///         self.platform.present(presenter, screen, animated, on_complete);
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot host presentations",
    label = "missing `PresentationHost` implementation",
    note = "Implement `PresentationHost` to let the dispatcher push and present screens."
)]
pub trait PresentationHost {
    /// The screen type produced by registered handlers.
    type Screen;

    /// The root of the live container tree, if a window is up.
    fn root(&self) -> Option<&Container>;

    /// Push `screen` onto the navigation stack `navigation`.
    fn push(&mut self, navigation: ContainerId, screen: Self::Screen, animated: bool);

    /// Present `screen` modally over `presenter`.
    ///
    /// The host runs `on_complete` when the platform reports completion.
    fn present(
        &mut self,
        presenter: ContainerId,
        screen: Self::Screen,
        animated: bool,
        on_complete: Option<Completion>,
    );
}

impl<H: PresentationHost + ?Sized> PresentationHost for &mut H {
    type Screen = H::Screen;

    fn root(&self) -> Option<&Container> {
        (**self).root()
    }

    fn push(&mut self, navigation: ContainerId, screen: Self::Screen, animated: bool) {
        (**self).push(navigation, screen, animated)
    }

    fn present(
        &mut self,
        presenter: ContainerId,
        screen: Self::Screen,
        animated: bool,
        on_complete: Option<Completion>,
    ) {
        (**self).present(presenter, screen, animated, on_complete)
    }
}
