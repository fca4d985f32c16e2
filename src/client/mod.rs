//! Endpoint wrappers and the HTTP collaborator seam.

pub mod regions;
pub mod riot;
pub mod transport;

pub use regions::{Platform, Region};
pub use riot::RiotClient;
pub use transport::{HttpTransport, Transport};
