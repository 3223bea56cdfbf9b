#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod convert;
mod func;
mod hash;
mod map;
mod value;

pub mod serde;

// -----------------------------------------------------------------------------
// Exports

pub use func::NativeFn;
pub use hash::{FixedHashState, FixedHasher};
pub use map::{Entries, Map};
pub use value::{Value, ValueKind};
