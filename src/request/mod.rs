//! Image request module
//!
//! The configuration record describing the desired image, plus the
//! preset templates that replace it wholesale.

mod models;
mod templates;

pub use models::{Architecture, Distribution, ImageRequest};
pub use templates::{find_template, templates, Template};
