// SPDX-License-Identifier: MPL-2.0
//! Arrow-control delegate for the carousel.
//!
//! The controller is a stateless translator from arrow clicks to navigation
//! intent plus user-callback fan-out. It holds no index of its own and never
//! references the owning carousel type; the owner injects a
//! [`NavigationHandle`] through which the controller reports relative
//! "go forward"/"go back" requests, so correctness does not depend on the
//! delegate's view of the owner's state.

use super::element::{ArrowRef, ClickEvent, HandlerId, PanelRef};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Direction of a navigation request emitted by an arrow click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Advance to the next panel.
    Next,
    /// Go back to the previous panel.
    Previous,
}

/// Owner-injected sink for navigation intent.
///
/// Clones share the same sink.
#[derive(Clone)]
pub struct NavigationHandle {
    sink: Rc<RefCell<dyn FnMut(Direction)>>,
}

impl NavigationHandle {
    /// Wraps a navigation sink.
    pub fn new(sink: impl FnMut(Direction) + 'static) -> Self {
        Self {
            sink: Rc::new(RefCell::new(sink)),
        }
    }

    /// Emits one navigation request.
    pub fn request(&self, direction: Direction) {
        (self.sink.borrow_mut())(direction);
    }
}

impl fmt::Debug for NavigationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NavigationHandle")
    }
}

/// User callback invoked with the click event of the arrow it was supplied for.
pub type ClickCallback = Box<dyn FnMut(&ClickEvent)>;

/// Options accepted by [`ArrowsController::initialize`].
#[derive(Default)]
pub struct ArrowsOptions {
    /// Panels handed down by the owner. Read-only; used for bound queries.
    pub panels: Vec<PanelRef>,
    /// Element that navigates backward when clicked.
    pub left_arrow: Option<ArrowRef>,
    /// Element that navigates forward when clicked.
    pub right_arrow: Option<ArrowRef>,
    /// Invoked with the click event whenever the left arrow is clicked.
    pub on_left_arrow_click: Option<ClickCallback>,
    /// Invoked with the click event whenever the right arrow is clicked.
    pub on_right_arrow_click: Option<ClickCallback>,
}

struct Connection {
    arrow: ArrowRef,
    handler: HandlerId,
}

/// Listens for clicks on the supplied arrow elements for as long as it is
/// attached.
pub struct ArrowsController {
    panels: Vec<PanelRef>,
    left: Option<Connection>,
    right: Option<Connection>,
}

impl ArrowsController {
    /// Connects a click listener to each supplied arrow.
    ///
    /// On click the listener emits the arrow's direction through `navigation`
    /// and invokes the matching user callback with the click event when one
    /// was supplied. Both effects occur for the same click; neither is skipped
    /// when the other is absent.
    pub fn initialize(options: ArrowsOptions, navigation: NavigationHandle) -> Self {
        let ArrowsOptions {
            panels,
            left_arrow,
            right_arrow,
            on_left_arrow_click,
            on_right_arrow_click,
        } = options;

        let left = left_arrow.map(|arrow| {
            connect(
                arrow,
                Direction::Previous,
                navigation.clone(),
                on_left_arrow_click,
            )
        });
        let right = right_arrow.map(|arrow| {
            connect(
                arrow,
                Direction::Next,
                navigation.clone(),
                on_right_arrow_click,
            )
        });

        Self {
            panels,
            left,
            right,
        }
    }

    /// Disconnects every listener connected by
    /// [`initialize`](Self::initialize).
    ///
    /// Idempotent: a second call finds nothing left to disconnect.
    pub fn destroy(&mut self) {
        for connection in self.left.take().into_iter().chain(self.right.take()) {
            connection.arrow.disconnect_click(connection.handler);
        }
    }

    /// Number of panels the arrows navigate over.
    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }
}

impl Drop for ArrowsController {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl fmt::Debug for ArrowsController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrowsController")
            .field("panels", &self.panels.len())
            .field("left_wired", &self.left.is_some())
            .field("right_wired", &self.right.is_some())
            .finish()
    }
}

fn connect(
    arrow: ArrowRef,
    direction: Direction,
    navigation: NavigationHandle,
    mut callback: Option<ClickCallback>,
) -> Connection {
    let handler = arrow.connect_click(Box::new(move |event: &ClickEvent| {
        navigation.request(direction);
        if let Some(callback) = callback.as_mut() {
            callback(event);
        }
    }));
    Connection { arrow, handler }
}
