//! View state for the landing page.
//!
//! DESIGN
//! ======
//! State types are plain structs wrapped in `RwSignal` by their owning
//! component. Transitions live here as methods so they can be tested without
//! a browser or a reactive runtime.

pub mod playground;
pub mod shell;
