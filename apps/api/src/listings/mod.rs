//! Listings: the shared search core used by both the API server and the
//! portal client. Validation, generation, envelope, detail stub, sources.

pub mod detail;
pub mod envelope;
pub mod generator;
pub mod handlers;
pub mod locale;
pub mod models;
pub mod source;
pub mod validation;

pub use generator::MockJobGenerator;
pub use locale::{LocaleProfile, ProfileKind};
pub use models::{JobListing, SearchRequest, ValidatedSearch};
pub use source::{ApiJobSource, JobSource};
