//! Dioxus components, browser client and Chart.js bridge for the créditos app.
//!
//! This crate provides:
//! - `js_bridge`: Chart.js glue and browser dialogs via `js_sys::eval()` / `web_sys`
//! - `client`: `window.fetch` calls against the REST backend
//! - `state`: reactive `AppState` with Dioxus Signals
//! - `actions`: refresh, submit, edit, cancel and delete flows
//! - `components`: RSX components for the form, table and charts

pub mod actions;
pub mod client;
pub mod components;
pub mod js_bridge;
pub mod state;
