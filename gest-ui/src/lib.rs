//! Shared Dioxus components and DOM adapter for the gestation dashboard.
//!
//! This crate provides:
//! - `dom`: web-sys implementation of `DashboardView` and the scroll helper
//! - `state`: AppState with Dioxus Signals
//! - `components`: RSX pieces of the page (menu, home, dashboard, cards)

pub mod components;
pub mod dom;
pub mod state;
