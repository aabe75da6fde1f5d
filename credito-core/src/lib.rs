//! Core types and client-side logic for the créditos (loans) CRUD apps.
//!
//! Everything here is target-independent so the same rules run in the
//! Dioxus WASM frontend and in the native CLI:
//! - `credito`: the `Credito` record and its request payload
//! - `validation`: raw form input checks, in the order the UI reports them
//! - `form`: the create/edit form state machine
//! - `api`: REST request descriptions and response decoding
//! - `summary`: chart aggregates (total, per-client distribution)
//! - `chart`: Chart.js configuration builders
//! - `table`: display formatting for table rows

pub mod api;
pub mod chart;
pub mod credito;
pub mod error;
pub mod form;
pub mod summary;
pub mod table;
pub mod validation;

pub use credito::{Credito, CreditoPayload};
pub use error::CreditoError;
pub use form::FormState;
