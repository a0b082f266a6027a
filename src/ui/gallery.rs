// SPDX-License-Identifier: MPL-2.0
//! Gallery view: navigation arrows, the active panel card, and jump dots.

use crate::carousel::target::PanelTarget;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, Column, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    /// Panel targets in carousel order; the marked one is rendered.
    pub panels: &'a [PanelTarget],
    /// Index reported by the carousel, used as a fallback label.
    pub current_index: usize,
    /// Whether the navigation arrows are rendered.
    pub show_arrows: bool,
}

/// Messages emitted by the gallery.
#[derive(Debug, Clone)]
pub enum Message {
    /// The left navigation arrow was pressed.
    LeftArrowPressed,
    /// The right navigation arrow was pressed.
    RightArrowPressed,
    /// A jump dot was pressed.
    DotPressed(usize),
}

/// Render the gallery.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let active_index = ctx
        .panels
        .iter()
        .position(PanelTarget::is_active)
        .unwrap_or(ctx.current_index);

    let card = build_panel_card(active_index, ctx.panels.len());

    let mut strip = Row::new().spacing(12).align_y(Vertical::Center);
    if ctx.show_arrows {
        let left_button = button(Text::new("\u{2190}").size(24))
            .on_press(Message::LeftArrowPressed)
            .padding([6, 12]);
        strip = strip.push(left_button);
    }
    strip = strip.push(card);
    if ctx.show_arrows {
        let right_button = button(Text::new("\u{2192}").size(24))
            .on_press(Message::RightArrowPressed)
            .padding([6, 12]);
        strip = strip.push(right_button);
    }

    let dots = build_dots(ctx.panels, active_index);

    let content = Column::new()
        .spacing(16)
        .push(strip)
        .push(dots)
        .push(
            Space::new()
                .width(Length::Shrink)
                .height(Length::Fixed(8.0)),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

/// Build the card for the panel currently carrying the active marker.
fn build_panel_card<'a>(active_index: usize, panel_count: usize) -> Element<'a, Message> {
    let title = Text::new(format!("Panel {}", active_index + 1)).size(32);
    let position = Text::new(format!("{} of {}", active_index + 1, panel_count)).size(16);

    let body = Column::new()
        .spacing(8)
        .push(title)
        .push(position);

    Container::new(body)
        .width(Length::Fixed(280.0))
        .padding(32)
        .align_x(Horizontal::Center)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: 8.0.into(),
                width: 1.0,
                color: theme.extended_palette().background.strong.color,
            },
            ..Default::default()
        })
        .into()
}

/// Build one jump dot per panel; the active panel's dot is filled.
fn build_dots<'a>(panels: &[PanelTarget], active_index: usize) -> Element<'a, Message> {
    let mut dots = Row::new().spacing(6).align_y(Vertical::Center);
    for (index, _) in panels.iter().enumerate() {
        let glyph = if index == active_index {
            "\u{25CF}"
        } else {
            "\u{25CB}"
        };
        let dot = button(Text::new(glyph).size(14))
            .on_press(Message::DotPressed(index))
            .padding([2, 6]);
        dots = dots.push(dot);
    }

    Container::new(dots)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}
