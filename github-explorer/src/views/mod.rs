//! Terminal views.
//!
//! Views are pure presentation: they turn a state snapshot published by a
//! view-model into text using Handlebars templates embedded in the crate.

mod error;
mod renderer;

pub use error::ViewError;
pub use renderer::{create_handlebars_registry, ViewRenderer};
