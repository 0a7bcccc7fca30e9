mod ksuid;

pub use ksuid::*;
