#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod deep;
mod invoke;
mod key;
mod map_values;
mod parse;
mod path;
mod set;
mod walk;

// -----------------------------------------------------------------------------
// Exports

pub use deep::DeepAccess;
pub use key::{Key, escape_property_name};
pub use map_values::map_values;
pub use parse::PathSyntaxError;
pub use path::{AsPath, Path};

pub use dw_value as value;
