//! # Presentation Locator
//!
//! Finds, in a live container tree, where a new screen should go:
//!
//! - [`active_navigation`]: the navigation stack that receives a push.
//! - [`topmost_visible`]: the node the user is looking at, which receives a
//!   modal presentation.
//!
//! Both walks are recomputed on every call. Tab selection, paging and modal
//! presentation change without telling the router, so there is no pointer to
//! keep in sync. The walks are pure functions of the tree.

use waymark_core::{Container, ContainerKind};

/// The navigation stack that should receive a push.
///
/// The starting point is the root itself when it is a stack, or the selected
/// tab of a tab root when that tab is a stack. A modal presented by the tab root
/// covers every tab, so in that case the walk starts from the modal instead.
/// From there the walk follows modals to the end of the chain (see
/// [`covering_modal`]). The result is the last node of that chain, and only if
/// it is itself a stack.
pub fn active_navigation(root: &Container) -> Option<&Container> {
    let start = match root.kind() {
        ContainerKind::Stack { .. } => root,
        ContainerKind::Tabbed { .. } => {
            let selected = root.selected_child().filter(|c| c.is_navigation())?;
            root.presented().unwrap_or(selected)
        }
        _ => return None,
    };

    let mut current = start;
    while let Some(modal) = covering_modal(current) {
        current = modal;
    }

    current.is_navigation().then_some(current)
}

/// The modal covering `node`, if any.
///
/// A modal presented by `node` itself or by any node on its visible path covers
/// it: presentation happens in the enclosing context, so a sheet raised from the
/// top entry of a stack hides the whole stack.
pub fn covering_modal(node: &Container) -> Option<&Container> {
    let mut current = node;
    loop {
        if let Some(modal) = current.presented() {
            return Some(modal);
        }
        current = structural_child(current)?;
    }
}

/// The topmost visible node under `root`.
///
/// At each node the first applicable rule wins:
///
/// 1. a presented modal shadows its presenter;
/// 2. a tab container descends into its selected tab;
/// 3. a stack descends into its visible (last) entry;
/// 4. a pager showing exactly one page descends into it;
/// 5. a plain container descends into the first embedded child whose root
///    element it renders;
/// 6. otherwise the node itself is the answer.
///
/// A rule whose child does not exist (no selection, empty stack, index out of
/// range) does not apply, and the walk falls through to the next rule.
pub fn topmost_visible(root: &Container) -> &Container {
    let mut current = root;
    while let Some(next) = visible_child(current) {
        current = next;
    }
    current
}

/// One descent step of [`topmost_visible`], or `None` when `node` is the leaf.
pub fn visible_child(node: &Container) -> Option<&Container> {
    node.presented().or_else(|| structural_child(node))
}

/// Rules 2 to 5 of [`topmost_visible`]: the child shown by the node's own structure.
fn structural_child(node: &Container) -> Option<&Container> {
    match node.kind() {
        ContainerKind::Tabbed { .. } => node.selected_child(),
        ContainerKind::Stack { .. } => node.visible_entry(),
        ContainerKind::Paged { .. } => node.single_visible_page(),
        ContainerKind::Plain { .. } => node.first_rendered_child(),
    }
}

/// The full descent path from `root` to its topmost visible node, root first.
pub fn visible_path(root: &Container) -> Vec<&Container> {
    let mut path = vec![root];
    let mut current = root;
    while let Some(next) = visible_child(current) {
        path.push(next);
        current = next;
    }
    path
}
