// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration for the carousel demo.
//!
//! The `App` struct wires a [`Carousel`] over in-memory panel and arrow
//! targets and translates gallery messages into clicks and jumps. Arrow
//! presses go through the real click-dispatch path (`ArrowTarget::click`), so
//! the demo exercises the same listener wiring the tests do. This file keeps
//! policy decisions (panel-count clamping, config fallbacks) close to the
//! main update loop so user-facing behavior is easy to audit.

use crate::carousel::target::{ArrowTarget, PanelTarget};
use crate::carousel::{
    ArrowRef, Carousel, CarouselOptions, ClickEvent, PanelChangeCallback, PanelRef,
};
use crate::config;
use crate::ui::gallery;
use iced::{window, Element, Task};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Root Iced application state for the demo.
pub struct App {
    panels: Vec<PanelTarget>,
    left_arrow: ArrowTarget,
    right_arrow: ArrowTarget,
    carousel: Option<Carousel>,
    /// Last index announced through the carousel change callback.
    announced: Rc<Cell<usize>>,
    show_arrows: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("panels", &self.panels.len())
            .field("announced", &self.announced.get())
            .finish()
    }
}

/// Top-level messages consumed by [`App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone, Copy)]
pub struct Flags {
    /// Optional number of demo panels, overriding the persisted config.
    pub panel_count: Option<usize>,
    /// Optional index of the panel shown first.
    pub start_index: Option<isize>,
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 400;
pub const WINDOW_DEFAULT_WIDTH: u32 = 640;

/// Keeps panel counts inside the supported range so persisted configs cannot
/// request a deck the demo cannot render.
fn clamp_panel_count(value: usize) -> usize {
    value.clamp(
        config::defaults::MIN_PANEL_COUNT,
        config::defaults::MAX_PANEL_COUNT,
    )
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(flags), App::update, App::view)
        .title(|state: &App| state.title())
        .window(window_settings())
        .run()
}

impl App {
    /// Initializes application state from CLI flags and persisted config.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();

        let panel_count = clamp_panel_count(
            flags
                .panel_count
                .or(config.panel_count)
                .unwrap_or(config::defaults::DEFAULT_PANEL_COUNT),
        );
        let initial_index = flags.start_index.or(config.initial_panel).unwrap_or(0);
        let show_arrows = config.show_arrows.unwrap_or(true);

        (Self::build(panel_count, initial_index, show_arrows), Task::none())
    }

    /// Builds the demo state and wires the carousel over fresh targets.
    fn build(panel_count: usize, initial_index: isize, show_arrows: bool) -> Self {
        let panels: Vec<PanelTarget> = (0..panel_count).map(|_| PanelTarget::new()).collect();
        let left_arrow = ArrowTarget::new();
        let right_arrow = ArrowTarget::new();
        let announced = Rc::new(Cell::new(0));

        let panel_refs: Vec<PanelRef> = panels
            .iter()
            .map(|panel| Rc::new(panel.clone()) as PanelRef)
            .collect();
        let on_panel_change: PanelChangeCallback = {
            let announced = Rc::clone(&announced);
            Box::new(move |index| announced.set(index))
        };

        let carousel = Carousel::new(CarouselOptions {
            panels: panel_refs,
            initial_index,
            on_panel_change: Some(on_panel_change),
            left_arrow: show_arrows.then(|| Rc::new(left_arrow.clone()) as ArrowRef),
            right_arrow: show_arrows.then(|| Rc::new(right_arrow.clone()) as ArrowRef),
            on_left_arrow_click: None,
            on_right_arrow_click: None,
        });

        let carousel = match carousel {
            Ok(carousel) => Some(carousel),
            Err(err) => {
                eprintln!("Failed to build carousel: {err}");
                None
            }
        };

        Self {
            panels,
            left_arrow,
            right_arrow,
            carousel,
            announced,
            show_arrows,
        }
    }

    fn title(&self) -> String {
        format!(
            "Iced Carousel - panel {} of {}",
            self.announced.get() + 1,
            self.panels.len()
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(gallery::Message::LeftArrowPressed) => {
                self.left_arrow.click(&ClickEvent::default());
            }
            Message::Gallery(gallery::Message::RightArrowPressed) => {
                self.right_arrow.click(&ClickEvent::default());
            }
            Message::Gallery(gallery::Message::DotPressed(index)) => {
                if let Some(carousel) = self.carousel.as_mut() {
                    carousel.go_to(index as isize);
                }
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let current_index = self
            .carousel
            .as_ref()
            .map(Carousel::current_index)
            .unwrap_or(0);

        gallery::view(gallery::ViewContext {
            panels: &self.panels,
            current_index,
            show_arrows: self.show_arrows,
        })
        .map(Message::Gallery)
    }
}
