// SPDX-License-Identifier: MPL-2.0
//! `iced_carousel` is an interactive panel carousel built with the Iced GUI
//! framework.
//!
//! The carousel shows exactly one panel from an ordered collection at a time,
//! moves between panels on command with wraparound at the boundaries, and
//! optionally wires navigation arrows that drive those transitions. Panels
//! and arrows are opaque element handles supplied by the host; the crate also
//! ships in-memory targets so the widget can be driven headlessly.

pub mod app;
pub mod carousel;
pub mod config;
pub mod error;
pub mod ui;
