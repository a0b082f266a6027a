// SPDX-License-Identifier: MPL-2.0
//! Element handle surface consumed by the carousel.
//!
//! The carousel never owns the visual elements it manages. The host hands it
//! opaque handles: panels that can carry the active marker and arrows that
//! accept click listeners. The [`target`](super::target) module provides
//! ready-made single-threaded implementations of both traits.

use std::rc::Rc;

/// Opaque payload delivered to click listeners.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClickEvent {
    /// Pointer position relative to the clicked element, when known.
    pub position: Option<(f32, f32)>,
}

impl ClickEvent {
    /// Creates a click event carrying a pointer position.
    #[must_use]
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Some((x, y)),
        }
    }
}

/// Identifies one click-listener registration on an [`ArrowHandle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

impl HandlerId {
    /// Creates a handler id from a raw value chosen by the element
    /// implementation.
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw value this id was created with.
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Boxed click listener invoked with the originating event.
pub type ClickHandler = Box<dyn FnMut(&ClickEvent)>;

/// A visual panel that can carry the active marker.
///
/// Exactly one panel of a carousel is marked active at a time. The carousel
/// moves the marker; the host decides what "active" looks like.
pub trait PanelHandle {
    /// Applies or clears the active marker on this panel.
    fn set_active(&self, active: bool);
}

/// A clickable arrow element.
pub trait ArrowHandle {
    /// Connects a click listener and returns its registration id.
    fn connect_click(&self, handler: ClickHandler) -> HandlerId;

    /// Disconnects a previously connected listener.
    ///
    /// Disconnecting an id that is unknown or already disconnected is a no-op.
    fn disconnect_click(&self, id: HandlerId);
}

/// Shared handle to a panel element. Clones are cheap and refer to the same
/// element.
pub type PanelRef = Rc<dyn PanelHandle>;

/// Shared handle to an arrow element.
pub type ArrowRef = Rc<dyn ArrowHandle>;
