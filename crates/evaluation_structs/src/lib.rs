//! Common structs for evaluation scoring shared across crates.

mod country;
mod indicator;
mod scoring;
mod settings;
mod source;

pub use country::*;
pub use indicator::*;
pub use scoring::*;
pub use settings::*;
pub use source::*;
