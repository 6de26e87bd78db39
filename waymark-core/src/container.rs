//! # Container Tree
//!
//! An owned model of the host's presentation hierarchy. Every node may carry a
//! presented (modal) child; what else it holds depends on its [`ContainerKind`]:
//!
//! | kind     | structure                                        |
//! |----------|--------------------------------------------------|
//! | `Stack`  | navigation stack, the last entry is visible      |
//! | `Tabbed` | children plus an optional selected index         |
//! | `Paged`  | pages plus the indices currently on screen       |
//! | `Plain`  | embedded child containers and rendered elements  |
//!
//! Rendered elements of a plain container may point back at the embedded child
//! that owns them. That pointer is an id lookup, never an ownership edge: the
//! child itself lives in `children`.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identifier of a container node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(u64);

impl ContainerId {
    /// Allocate a fresh identifier.
    pub fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A visual element rendered directly by a plain container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderedElement {
    owner: Option<ContainerId>,
}

impl RenderedElement {
    /// An element with no owning container.
    pub const fn view() -> Self {
        Self { owner: None }
    }

    /// The root element of the container `owner`.
    pub const fn owned_by(owner: ContainerId) -> Self {
        Self { owner: Some(owner) }
    }

    /// The container this element belongs to, if any.
    pub const fn owner(&self) -> Option<ContainerId> {
        self.owner
    }
}

/// The structural variant of a container.
#[derive(Debug, PartialEq)]
pub enum ContainerKind {
    /// A navigation stack. The last entry is the visible one.
    Stack {
        /// Stack entries, bottom first.
        entries: Vec<Container>,
    },
    /// A tab container.
    Tabbed {
        /// One child per tab.
        children: Vec<Container>,
        /// Index of the selected tab.
        selected: Option<usize>,
    },
    /// A paging container.
    Paged {
        /// All pages.
        pages: Vec<Container>,
        /// Indices of the pages currently on screen.
        visible: Vec<usize>,
    },
    /// A container with no navigation structure of its own.
    Plain {
        /// Embedded child containers.
        children: Vec<Container>,
        /// Elements rendered directly, in visual order.
        rendered: Vec<RenderedElement>,
    },
}

/// A node in the presentation hierarchy.
///
/// Cloning allocates fresh ids for the copy and every node below it, and
/// rewires rendered-element owners to the copied children. A clone can
/// therefore be grafted into the tree it came from without aliasing ids.
#[derive(Debug, PartialEq)]
pub struct Container {
    id: ContainerId,
    name: String,
    presented: Option<Box<Container>>,
    kind: ContainerKind,
}

impl Container {
    /// Create a container of the given kind with a fresh id.
    pub fn new(name: impl Into<String>, kind: ContainerKind) -> Self {
        Self {
            id: ContainerId::next(),
            name: name.into(),
            presented: None,
            kind,
        }
    }

    /// A plain container with nothing embedded or rendered.
    pub fn plain(name: impl Into<String>) -> Self {
        Self::new(
            name,
            ContainerKind::Plain {
                children: Vec::new(),
                rendered: Vec::new(),
            },
        )
    }

    /// A navigation stack, bottom entry first.
    pub fn stack(name: impl Into<String>, entries: Vec<Container>) -> Self {
        Self::new(name, ContainerKind::Stack { entries })
    }

    /// A tab container.
    pub fn tabbed(
        name: impl Into<String>,
        children: Vec<Container>,
        selected: Option<usize>,
    ) -> Self {
        Self::new(name, ContainerKind::Tabbed { children, selected })
    }

    /// A paging container showing the pages at `visible`.
    pub fn paged(name: impl Into<String>, pages: Vec<Container>, visible: Vec<usize>) -> Self {
        Self::new(name, ContainerKind::Paged { pages, visible })
    }

    /// Builder-style: present `modal` over this container.
    pub fn presenting(mut self, modal: Container) -> Self {
        self.presented = Some(Box::new(modal));
        self
    }

    /// Builder-style: embed `child`, rendering its root element after the existing ones.
    ///
    /// Only plain containers embed children; on other kinds this has no effect.
    pub fn embedding(mut self, child: Container) -> Self {
        self.embed(child);
        self
    }

    /// Builder-style: render an element that belongs to no container.
    ///
    /// Only plain containers render elements; on other kinds this has no effect.
    pub fn rendering(mut self, element: RenderedElement) -> Self {
        if let ContainerKind::Plain { rendered, .. } = &mut self.kind {
            rendered.push(element);
        }
        self
    }

    /// Embed `child` and record its root element as owned by it.
    ///
    /// Returns `false` when this container is not plain.
    pub fn embed(&mut self, child: Container) -> bool {
        match &mut self.kind {
            ContainerKind::Plain { children, rendered } => {
                rendered.push(RenderedElement::owned_by(child.id));
                children.push(child);
                true
            }
            _ => false,
        }
    }

    /// The node's identifier.
    pub fn id(&self) -> ContainerId {
        self.id
    }

    /// The node's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The structural variant.
    pub fn kind(&self) -> &ContainerKind {
        &self.kind
    }

    /// Whether this node is a navigation stack.
    pub fn is_navigation(&self) -> bool {
        matches!(self.kind, ContainerKind::Stack { .. })
    }

    /// The modal currently presented over this node.
    pub fn presented(&self) -> Option<&Container> {
        self.presented.as_deref()
    }

    /// Present `modal` over this node, returning any modal it replaces.
    pub fn present(&mut self, modal: Container) -> Option<Container> {
        self.presented.replace(Box::new(modal)).map(|b| *b)
    }

    /// Remove and return the presented modal.
    pub fn dismiss(&mut self) -> Option<Container> {
        self.presented.take().map(|b| *b)
    }

    /// Push `entry` onto a stack. Returns `false` for non-stack nodes.
    pub fn push(&mut self, entry: Container) -> bool {
        match &mut self.kind {
            ContainerKind::Stack { entries } => {
                entries.push(entry);
                true
            }
            _ => false,
        }
    }

    /// Pop the visible entry off a stack.
    pub fn pop(&mut self) -> Option<Container> {
        match &mut self.kind {
            ContainerKind::Stack { entries } => entries.pop(),
            _ => None,
        }
    }

    /// Select a tab. Returns `false` for non-tab nodes or an out-of-range index.
    pub fn select(&mut self, index: usize) -> bool {
        match &mut self.kind {
            ContainerKind::Tabbed { children, selected } if index < children.len() => {
                *selected = Some(index);
                true
            }
            _ => false,
        }
    }

    /// The selected child of a tab container, if the selection points at one.
    pub fn selected_child(&self) -> Option<&Container> {
        match &self.kind {
            ContainerKind::Tabbed { children, selected } => {
                selected.and_then(|index| children.get(index))
            }
            _ => None,
        }
    }

    /// The top-of-stack entry of a navigation stack.
    pub fn visible_entry(&self) -> Option<&Container> {
        match &self.kind {
            ContainerKind::Stack { entries } => entries.last(),
            _ => None,
        }
    }

    /// The single page of a paging container, when exactly one is on screen.
    pub fn single_visible_page(&self) -> Option<&Container> {
        match &self.kind {
            ContainerKind::Paged { pages, visible } => match visible.as_slice() {
                [index] => pages.get(*index),
                _ => None,
            },
            _ => None,
        }
    }

    /// The first embedded child whose root element is rendered by this node.
    ///
    /// Elements are scanned in visual order. Elements without an owner, owned by
    /// this node itself, or naming a container that is not embedded here are skipped.
    pub fn first_rendered_child(&self) -> Option<&Container> {
        let ContainerKind::Plain { children, rendered } = &self.kind else {
            return None;
        };
        rendered
            .iter()
            .filter_map(RenderedElement::owner)
            .filter(|owner| *owner != self.id)
            .find_map(|owner| children.iter().find(|child| child.id == owner))
    }

    /// Direct structural children, excluding the presented modal.
    pub fn children(&self) -> &[Container] {
        match &self.kind {
            ContainerKind::Stack { entries } => entries,
            ContainerKind::Tabbed { children, .. } => children,
            ContainerKind::Paged { pages, .. } => pages,
            ContainerKind::Plain { children, .. } => children,
        }
    }

    /// Find a node by id anywhere in this subtree, modals included.
    pub fn find(&self, id: ContainerId) -> Option<&Container> {
        if self.id == id {
            return Some(self);
        }
        if let Some(found) = self.presented().and_then(|modal| modal.find(id)) {
            return Some(found);
        }
        self.children().iter().find_map(|child| child.find(id))
    }

    /// Mutable variant of [`find`](Self::find).
    pub fn find_mut(&mut self, id: ContainerId) -> Option<&mut Container> {
        if self.id == id {
            return Some(self);
        }
        let Self {
            presented, kind, ..
        } = self;
        if let Some(found) = presented
            .as_deref_mut()
            .and_then(|modal| modal.find_mut(id))
        {
            return Some(found);
        }
        let children = match kind {
            ContainerKind::Stack { entries } => entries,
            ContainerKind::Tabbed { children, .. } => children,
            ContainerKind::Paged { pages, .. } => pages,
            ContainerKind::Plain { children, .. } => children,
        };
        children.iter_mut().find_map(|child| child.find_mut(id))
    }
}

impl Clone for Container {
    fn clone(&self) -> Self {
        let id = ContainerId::next();
        let kind = match &self.kind {
            ContainerKind::Stack { entries } => ContainerKind::Stack {
                entries: entries.clone(),
            },
            ContainerKind::Tabbed { children, selected } => ContainerKind::Tabbed {
                children: children.clone(),
                selected: *selected,
            },
            ContainerKind::Paged { pages, visible } => ContainerKind::Paged {
                pages: pages.clone(),
                visible: visible.clone(),
            },
            ContainerKind::Plain { children, rendered } => {
                let copies = children.clone();
                let rendered = rendered
                    .iter()
                    .map(|element| match element.owner {
                        Some(owner) if owner == self.id => RenderedElement::owned_by(id),
                        Some(owner) => children
                            .iter()
                            .position(|child| child.id == owner)
                            .map_or(*element, |index| RenderedElement::owned_by(copies[index].id)),
                        None => *element,
                    })
                    .collect();
                ContainerKind::Plain {
                    children: copies,
                    rendered,
                }
            }
        };
        Self {
            id,
            name: self.name.clone(),
            presented: self.presented.clone(),
            kind,
        }
    }
}
