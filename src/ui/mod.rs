// SPDX-License-Identifier: MPL-2.0
//! User interface for the demo application.
//!
//! Follows the Elm-style "state down, messages up" pattern: views are plain
//! functions over a `ViewContext`, and messages bubble up to the application
//! root.

pub mod gallery;
