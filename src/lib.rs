//! Distro Blueprint - Generate configuration bundles for custom Linux images
//!
//! Collects the parameters of a desired bootable image and asks a hosted
//! completion service for the matching installer answer file, boot-loader
//! menu, build script and usage guide.

pub mod blueprint;
pub mod commands;
pub mod completion;
pub mod config;
pub mod logging;
pub mod request;
pub mod settings;
pub mod utils;
