#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

mod album;
mod client;
mod error;
pub mod interfaces;
pub mod media;
pub mod mosaic;

pub use client::{VamsClient, unwrap_envelope};
pub use error::VamsError;
