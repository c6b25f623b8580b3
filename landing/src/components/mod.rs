//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Static marketing sections plus the playground widget. Only `playground`
//! and `hero` read signals; everything else renders fixed content.

pub mod agent_output;
pub mod badge;
pub mod feature_card;
pub mod hero;
pub mod playground;
pub mod pricing;
pub mod showcase;
pub mod site_footer;
pub mod site_header;
