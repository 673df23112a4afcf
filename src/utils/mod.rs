//! Utility modules

pub mod slug;
pub mod validation;
