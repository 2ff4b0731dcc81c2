// SPDX-License-Identifier: MPL-2.0
//! `podium` is a simple slide-deck presenter built with the Iced GUI framework.
//!
//! It navigates an ordered deck of slide panels loaded from a TOML file and
//! demonstrates internationalization with Fluent, user preference management,
//! and modular UI design.

#![doc(html_root_url = "https://docs.rs/podium/0.1.0")]

pub mod app;
pub mod config;
pub mod deck;
pub mod error;
pub mod fragment;
pub mod i18n;
pub mod icon;
pub mod input;
pub mod navigation;
pub mod ui;
