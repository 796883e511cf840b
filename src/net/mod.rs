//! Network layer: wire types, the HTTP transport seam, and the API client.

pub mod api;
pub mod transport;
pub mod types;
