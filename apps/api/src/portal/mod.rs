//! Portal: the client side of the job portal. Drives a search session
//! against any JobSource and renders results as an escaped node tree.

pub mod animation;
pub mod render;
pub mod session;

pub use render::Node;
pub use session::{SearchSession, SessionConfig, SubmitOutcome};
