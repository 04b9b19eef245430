//! Helpers shared across studio UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep browser concerns (timers, storage, layout math) out of
//! components so the logic can be unit tested without a DOM.

pub mod auto_scroll;
pub mod delay;
pub mod drag_position;
pub mod markdown;
pub mod pinned_scroll;
pub mod report;
pub mod settings;
