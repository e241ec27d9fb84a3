//! Deep Research Job Portal: a thin JSON API over a mock listing generator,
//! plus the portal client that renders those listings.

pub mod config;
pub mod errors;
pub mod listings;
pub mod portal;
pub mod routes;
pub mod state;
