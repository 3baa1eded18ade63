//! Field registration.
//!
//! This module provides:
//! - Value sources, the capability to read/write an input's raw value
//! - Field handles carrying focus/fill/error state
//! - The form-scoped registry that maps names to handles
//! - The `Input` surface, which registers itself when mounted

mod data;
mod handle;
mod input;
mod registry;
mod value;

pub use data::FormData;
pub use handle::{FieldHandle, VisualState};
pub use input::Input;
pub use registry::FieldRegistry;
pub use value::{ValueCell, ValueSource};
