//! Shared logic for the video link extraction page.
//!
//! Everything here is target-independent: wire schemas and their validation,
//! display formatters, the render model for a result panel, the page state
//! object and the async submission controller. The browser crate only wires
//! these to the DOM and to `fetch`.

pub mod badge;
pub mod controller;
pub mod error;
pub mod formatting;
pub mod messages;
pub mod state;
pub mod types;
pub mod view;
