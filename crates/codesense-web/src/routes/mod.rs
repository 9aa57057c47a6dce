//! Route handlers.

pub mod ping;
pub mod review;
