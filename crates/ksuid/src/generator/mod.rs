mod basic;
#[cfg(feature = "std")]
mod global;

pub use basic::*;
#[cfg(feature = "std")]
pub use global::*;
