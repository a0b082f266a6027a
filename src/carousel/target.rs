// SPDX-License-Identifier: MPL-2.0
//! In-memory element targets.
//!
//! [`PanelTarget`] and [`ArrowTarget`] implement the element surface over
//! shared cells so the demo application, tests, and benches can drive the
//! carousel without a windowing backend. [`ArrowTarget::click`] plays the role
//! of the host's event dispatch.

use super::element::{ArrowHandle, ClickEvent, ClickHandler, HandlerId, PanelHandle};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Panel element backed by a shared active flag.
#[derive(Debug, Clone, Default)]
pub struct PanelTarget {
    active: Rc<Cell<bool>>,
}

impl PanelTarget {
    /// Creates an inactive panel target.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this panel currently carries the active marker.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl PanelHandle for PanelTarget {
    fn set_active(&self, active: bool) {
        self.active.set(active);
    }
}

/// Arrow element backed by a shared listener table.
#[derive(Clone, Default)]
pub struct ArrowTarget {
    inner: Rc<RefCell<Listeners>>,
}

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(HandlerId, Rc<RefCell<ClickHandler>>)>,
}

impl ArrowTarget {
    /// Creates an arrow target with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatches a click to every listener connected at dispatch time.
    ///
    /// The listener table is snapshotted first, so a running listener may
    /// connect or disconnect listeners without affecting the current dispatch.
    pub fn click(&self, event: &ClickEvent) {
        let snapshot: Vec<_> = self
            .inner
            .borrow()
            .entries
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();
        for handler in snapshot {
            (handler.borrow_mut())(event);
        }
    }

    /// Number of currently connected listeners.
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }
}

impl fmt::Debug for ArrowTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrowTarget")
            .field("handlers", &self.handler_count())
            .finish()
    }
}

impl ArrowHandle for ArrowTarget {
    fn connect_click(&self, handler: ClickHandler) -> HandlerId {
        let mut inner = self.inner.borrow_mut();
        let id = HandlerId::new(inner.next_id);
        inner.next_id += 1;
        inner.entries.push((id, Rc::new(RefCell::new(handler))));
        id
    }

    fn disconnect_click(&self, id: HandlerId) {
        self.inner
            .borrow_mut()
            .entries
            .retain(|(entry_id, _)| *entry_id != id);
    }
}
