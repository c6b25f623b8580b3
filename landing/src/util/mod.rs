//! Utility helpers shared across page modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps text formatting out of components so it can be tested without
//! rendering.

pub mod format;
