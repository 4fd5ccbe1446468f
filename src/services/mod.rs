//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own query composition and persistence concerns so route
//! handlers can stay focused on parameter parsing and response shaping. Every
//! operation takes the pool explicitly; nothing here reaches for ambient
//! state.

pub mod component;
pub mod saved;
