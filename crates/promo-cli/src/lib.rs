//! CLI library components for the promo console.

pub mod load;
pub mod logging;
