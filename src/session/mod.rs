//! HTTP session and generic resource client

/// Authenticated HTTP transport
pub mod client;

/// Resource trait and create/retrieve primitives
pub mod resource;
