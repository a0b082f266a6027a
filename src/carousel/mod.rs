// SPDX-License-Identifier: MPL-2.0
//! Panel carousel core.
//!
//! [`Carousel`] owns the panel collection and the current index and is the
//! sole authority over both. Transitions follow a single-wrap boundary rule:
//! an index past the end lands on the first panel, an index before the start
//! lands on the last, and in-range indices pass through unchanged. A
//! transition to the already-current index is a no-op: no marker change, no
//! change notification.

pub mod arrows;
pub mod element;
pub mod target;

pub use arrows::{ArrowsController, ArrowsOptions, ClickCallback, Direction, NavigationHandle};
pub use element::{
    ArrowHandle, ArrowRef, ClickEvent, ClickHandler, HandlerId, PanelHandle, PanelRef,
};

use crate::error::{Error, Result};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Callback invoked with the new index after every effective transition.
pub type PanelChangeCallback = Box<dyn FnMut(usize)>;

/// Options accepted by [`Carousel::new`].
pub struct CarouselOptions {
    /// Ordered panel handles. Must not be empty.
    pub panels: Vec<PanelRef>,
    /// Index the carousel transitions to on construction. Normalized with the
    /// same boundary rule as [`Carousel::go_to`].
    pub initial_index: isize,
    /// Invoked once per effective transition with the new index.
    pub on_panel_change: Option<PanelChangeCallback>,
    /// Element that navigates backward when clicked.
    pub left_arrow: Option<ArrowRef>,
    /// Element that navigates forward when clicked.
    pub right_arrow: Option<ArrowRef>,
    /// Invoked with the click event whenever the left arrow is clicked.
    pub on_left_arrow_click: Option<ClickCallback>,
    /// Invoked with the click event whenever the right arrow is clicked.
    pub on_right_arrow_click: Option<ClickCallback>,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            panels: Vec::new(),
            initial_index: 0,
            on_panel_change: None,
            left_arrow: None,
            right_arrow: None,
            on_left_arrow_click: None,
            on_right_arrow_click: None,
        }
    }
}

/// Panel collection plus the index of the marked panel.
struct Deck {
    panels: Vec<PanelRef>,
    current: Option<usize>,
}

impl Deck {
    /// Normalizes a requested index with the single-wrap boundary rule.
    fn normalize(&self, index: isize) -> usize {
        let count = self.panels.len() as isize;
        if index >= count {
            0
        } else if index < 0 {
            (count - 1) as usize
        } else {
            index as usize
        }
    }

    /// Moves the active marker. Returns the new index for an effective
    /// transition, `None` for a no-op. Transitioning an empty deck is a no-op.
    fn transition(&mut self, index: isize) -> Option<usize> {
        if self.panels.is_empty() {
            return None;
        }
        let target = self.normalize(index);
        if self.current == Some(target) {
            return None;
        }
        if let Some(current) = self.current {
            self.panels[current].set_active(false);
        }
        self.panels[target].set_active(true);
        self.current = Some(target);
        Some(target)
    }
}

type ChangeListener = Rc<RefCell<Option<PanelChangeCallback>>>;

/// Shows exactly one panel of an ordered collection at a time.
///
/// Construction immediately transitions to the configured initial index,
/// marking a panel active and firing `on_panel_change` once. When at least one
/// arrow element is supplied, an [`ArrowsController`] is built alongside and
/// torn down again by [`destroy`](Self::destroy).
pub struct Carousel {
    deck: Rc<RefCell<Deck>>,
    change_listener: ChangeListener,
    arrows: Option<ArrowsController>,
}

impl Carousel {
    /// Builds a carousel over `options.panels` and transitions to the
    /// configured initial index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when `options.panels` is empty.
    pub fn new(options: CarouselOptions) -> Result<Self> {
        let CarouselOptions {
            panels,
            initial_index,
            on_panel_change,
            left_arrow,
            right_arrow,
            on_left_arrow_click,
            on_right_arrow_click,
        } = options;

        if panels.is_empty() {
            return Err(Error::Config(
                "carousel requires at least one panel".into(),
            ));
        }

        let deck = Rc::new(RefCell::new(Deck {
            panels,
            current: None,
        }));
        let change_listener: ChangeListener = Rc::new(RefCell::new(on_panel_change));

        let arrows = if left_arrow.is_some() || right_arrow.is_some() {
            let navigation = {
                let deck = Rc::clone(&deck);
                let change_listener = Rc::clone(&change_listener);
                NavigationHandle::new(move |direction| {
                    let target = step_target(&deck, direction);
                    drive(&deck, &change_listener, target);
                })
            };
            let handed_down = deck.borrow().panels.clone();
            Some(ArrowsController::initialize(
                ArrowsOptions {
                    panels: handed_down,
                    left_arrow,
                    right_arrow,
                    on_left_arrow_click,
                    on_right_arrow_click,
                },
                navigation,
            ))
        } else {
            None
        };

        let mut carousel = Self {
            deck,
            change_listener,
            arrows,
        };
        carousel.go_to(initial_index);
        Ok(carousel)
    }

    /// Transitions to `index`.
    ///
    /// An index at or past the panel count lands on the first panel; a
    /// negative index lands on the last. Transitioning to the already-current
    /// index does nothing: the marker stays put and `on_panel_change` is not
    /// fired.
    pub fn go_to(&mut self, index: isize) {
        drive(&self.deck, &self.change_listener, index);
    }

    /// Advances to the next panel, wrapping past the last panel to the first.
    pub fn next(&mut self) {
        let target = step_target(&self.deck, Direction::Next);
        drive(&self.deck, &self.change_listener, target);
    }

    /// Goes back to the previous panel, wrapping past the first panel to the
    /// last.
    pub fn prev(&mut self) {
        let target = step_target(&self.deck, Direction::Previous);
        drive(&self.deck, &self.change_listener, target);
    }

    /// Index of the currently active panel.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.deck.borrow().current.unwrap_or(0)
    }

    /// Number of panels in the carousel.
    #[must_use]
    pub fn len(&self) -> usize {
        self.deck.borrow().panels.len()
    }

    /// Whether the carousel holds no panels. Always false for a live
    /// carousel; construction rejects an empty panel list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deck.borrow().panels.is_empty()
    }

    /// Whether the first panel is active.
    #[must_use]
    pub fn is_at_first(&self) -> bool {
        self.current_index() == 0
    }

    /// Whether the last panel is active.
    #[must_use]
    pub fn is_at_last(&self) -> bool {
        !self.is_empty() && self.current_index() == self.len() - 1
    }

    /// Whether an arrows controller was built for this carousel.
    #[must_use]
    pub fn has_arrows(&self) -> bool {
        self.arrows.is_some()
    }

    /// Tears the carousel down.
    ///
    /// Delegates to the arrows controller's `destroy()` when one exists, then
    /// releases panels and callbacks so no further transitions are possible.
    /// Consuming `self` makes a second call unrepresentable.
    pub fn destroy(mut self) {
        if let Some(mut arrows) = self.arrows.take() {
            arrows.destroy();
        }
        self.deck.borrow_mut().panels.clear();
        *self.change_listener.borrow_mut() = None;
    }
}

impl fmt::Debug for Carousel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("len", &self.len())
            .field("current_index", &self.current_index())
            .field("has_arrows", &self.has_arrows())
            .finish()
    }
}

/// Computes the transition target one step away from the current index.
fn step_target(deck: &Rc<RefCell<Deck>>, direction: Direction) -> isize {
    let current = deck.borrow().current.unwrap_or(0) as isize;
    match direction {
        Direction::Next => current + 1,
        Direction::Previous => current - 1,
    }
}

/// Applies one transition and notifies the change listener when it was
/// effective.
///
/// The deck borrow is released before the listener runs, so a listener may
/// issue further transitions. The listener itself is not re-entered while it
/// is already running; a nested effective transition moves the marker without
/// a second notification.
fn drive(deck: &Rc<RefCell<Deck>>, listener: &ChangeListener, index: isize) {
    let landed = deck.borrow_mut().transition(index);
    if let Some(new_index) = landed {
        let taken = listener.borrow_mut().take();
        if let Some(mut callback) = taken {
            callback(new_index);
            let mut slot = listener.borrow_mut();
            if slot.is_none() {
                *slot = Some(callback);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::target::{ArrowTarget, PanelTarget};
    use super::*;
    use std::cell::Cell;

    fn panel_targets(count: usize) -> Vec<PanelTarget> {
        (0..count).map(|_| PanelTarget::new()).collect()
    }

    fn panel_refs(panels: &[PanelTarget]) -> Vec<PanelRef> {
        panels
            .iter()
            .map(|panel| Rc::new(panel.clone()) as PanelRef)
            .collect()
    }

    fn active_indices(panels: &[PanelTarget]) -> Vec<usize> {
        panels
            .iter()
            .enumerate()
            .filter(|(_, panel)| panel.is_active())
            .map(|(index, _)| index)
            .collect()
    }

    #[test]
    fn construction_activates_first_panel_and_notifies_once() {
        let panels = panel_targets(3);
        let announced = Rc::new(RefCell::new(Vec::new()));

        let log = Rc::clone(&announced);
        let carousel = Carousel::new(CarouselOptions {
            panels: panel_refs(&panels),
            on_panel_change: Some(Box::new(move |index| log.borrow_mut().push(index))),
            ..CarouselOptions::default()
        })
        .expect("three panels are a valid deck");

        assert_eq!(carousel.current_index(), 0);
        assert_eq!(active_indices(&panels), vec![0]);
        assert_eq!(announced.borrow().as_slice(), &[0]);
    }

    #[test]
    fn construction_honors_initial_index() {
        let panels = panel_targets(3);
        let carousel = Carousel::new(CarouselOptions {
            panels: panel_refs(&panels),
            initial_index: 2,
            ..CarouselOptions::default()
        })
        .expect("three panels are a valid deck");

        assert_eq!(carousel.current_index(), 2);
        assert_eq!(active_indices(&panels), vec![2]);
    }

    #[test]
    fn out_of_range_initial_index_wraps_like_go_to() {
        let panels = panel_targets(3);
        let carousel = Carousel::new(CarouselOptions {
            panels: panel_refs(&panels),
            initial_index: 7,
            ..CarouselOptions::default()
        })
        .expect("three panels are a valid deck");

        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn empty_panel_list_is_a_config_error() {
        let result = Carousel::new(CarouselOptions::default());
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn go_to_moves_the_active_marker() {
        let panels = panel_targets(3);
        let mut carousel = Carousel::new(CarouselOptions {
            panels: panel_refs(&panels),
            ..CarouselOptions::default()
        })
        .expect("three panels are a valid deck");

        carousel.go_to(2);
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(active_indices(&panels), vec![2]);
    }

    #[test]
    fn transition_to_current_index_is_inert() {
        let panels = panel_targets(3);
        let calls = Rc::new(Cell::new(0));

        let counter = Rc::clone(&calls);
        let mut carousel = Carousel::new(CarouselOptions {
            panels: panel_refs(&panels),
            on_panel_change: Some(Box::new(move |_index| counter.set(counter.get() + 1))),
            ..CarouselOptions::default()
        })
        .expect("three panels are a valid deck");
        assert_eq!(calls.get(), 1);

        carousel.go_to(0);
        assert_eq!(calls.get(), 1);
        assert_eq!(active_indices(&panels), vec![0]);
    }

    #[test]
    fn high_index_wraps_to_first_panel() {
        let panels = panel_targets(3);
        let mut carousel = Carousel::new(CarouselOptions {
            panels: panel_refs(&panels),
            initial_index: 1,
            ..CarouselOptions::default()
        })
        .expect("three panels are a valid deck");

        carousel.go_to(10);
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(active_indices(&panels), vec![0]);
    }

    #[test]
    fn low_index_wraps_to_last_panel() {
        let panels = panel_targets(3);
        let mut carousel = Carousel::new(CarouselOptions {
            panels: panel_refs(&panels),
            ..CarouselOptions::default()
        })
        .expect("three panels are a valid deck");

        carousel.go_to(-3);
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(active_indices(&panels), vec![2]);
    }

    #[test]
    fn next_and_prev_step_with_wraparound() {
        let panels = panel_targets(3);
        let mut carousel = Carousel::new(CarouselOptions {
            panels: panel_refs(&panels),
            initial_index: 1,
            ..CarouselOptions::default()
        })
        .expect("three panels are a valid deck");

        carousel.next();
        assert_eq!(carousel.current_index(), 2);
        carousel.next();
        assert_eq!(carousel.current_index(), 0);
        carousel.prev();
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn exactly_one_panel_is_active_after_any_sequence() {
        let panels = panel_targets(4);
        let mut carousel = Carousel::new(CarouselOptions {
            panels: panel_refs(&panels),
            ..CarouselOptions::default()
        })
        .expect("four panels are a valid deck");

        for index in [3, -1, 9, 2, 2, 0] {
            carousel.go_to(index);
            assert_eq!(active_indices(&panels).len(), 1);
            assert_eq!(active_indices(&panels), vec![carousel.current_index()]);
        }
    }

    #[test]
    fn boundary_accessors_track_the_current_index() {
        let panels = panel_targets(3);
        let mut carousel = Carousel::new(CarouselOptions {
            panels: panel_refs(&panels),
            ..CarouselOptions::default()
        })
        .expect("three panels are a valid deck");

        assert_eq!(carousel.len(), 3);
        assert!(carousel.is_at_first());
        assert!(!carousel.is_at_last());

        carousel.go_to(2);
        assert!(!carousel.is_at_first());
        assert!(carousel.is_at_last());
    }

    #[test]
    fn arrows_are_built_only_when_an_arrow_is_supplied() {
        let panels = panel_targets(3);
        let without = Carousel::new(CarouselOptions {
            panels: panel_refs(&panels),
            ..CarouselOptions::default()
        })
        .expect("three panels are a valid deck");
        assert!(!without.has_arrows());

        let left = ArrowTarget::new();
        let with = Carousel::new(CarouselOptions {
            panels: panel_refs(&panels),
            left_arrow: Some(Rc::new(left.clone())),
            ..CarouselOptions::default()
        })
        .expect("three panels are a valid deck");
        assert!(with.has_arrows());
        assert_eq!(left.handler_count(), 1);
    }

    #[test]
    fn destroy_detaches_arrow_listeners() {
        let panels = panel_targets(3);
        let left = ArrowTarget::new();
        let right = ArrowTarget::new();
        let carousel = Carousel::new(CarouselOptions {
            panels: panel_refs(&panels),
            left_arrow: Some(Rc::new(left.clone())),
            right_arrow: Some(Rc::new(right.clone())),
            ..CarouselOptions::default()
        })
        .expect("three panels are a valid deck");
        assert_eq!(left.handler_count(), 1);
        assert_eq!(right.handler_count(), 1);

        carousel.destroy();
        assert_eq!(left.handler_count(), 0);
        assert_eq!(right.handler_count(), 0);
    }

    #[test]
    fn arrow_clicks_drive_navigation() {
        let panels = panel_targets(3);
        let left = ArrowTarget::new();
        let right = ArrowTarget::new();
        let carousel = Carousel::new(CarouselOptions {
            panels: panel_refs(&panels),
            left_arrow: Some(Rc::new(left.clone())),
            right_arrow: Some(Rc::new(right.clone())),
            ..CarouselOptions::default()
        })
        .expect("three panels are a valid deck");

        right.click(&ClickEvent::default());
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(active_indices(&panels), vec![1]);

        left.click(&ClickEvent::default());
        left.click(&ClickEvent::default());
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(active_indices(&panels), vec![2]);
    }
}
