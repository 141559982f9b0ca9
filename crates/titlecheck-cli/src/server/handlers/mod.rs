//! API request handlers.

mod meta;
mod validate;

pub use meta::*;
pub use validate::*;
