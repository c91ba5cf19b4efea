#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod api_state;
pub mod routes;
mod server;

pub use routes::create_router;
pub use server::serve;
