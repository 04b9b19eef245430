//! Session state shared through Leptos context.
//!
//! Each module holds plain data with explicit transitions; components wrap
//! them in `RwSignal` and call the transitions from event handlers.

pub mod edit_session;
pub mod feedback;
pub mod feedback_form;
pub mod messages;
pub mod notification;
pub mod simulate;
pub mod ui;
