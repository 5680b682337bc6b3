//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod endpoints;
mod header;
mod response;

pub use endpoints::EndpointsCard;
pub use header::Header;
pub use response::ResponsePanel;
