//! Generic resource client
//!
//! Every Cuenca resource exposes the same two primitives: create via
//! POST to `/{resource}` and retrieve via GET from `/{resource}/{id}`.
//! Instead of per-resource client code, a resource declares its URL
//! name through [`Resource`] and reuses the single [`ResourceClient`]
//! implementation on [`Session`](crate::session::client::Session).

use crate::error::AppError;
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A server-side entity type addressable through the shared session
pub trait Resource: DeserializeOwned {
    /// Resource name as it appears in the URL path (e.g. `curp_validations`)
    const NAME: &'static str;
}

/// Create/retrieve primitives over the Cuenca API
///
/// Implemented once by `Session`; kept as a trait so resource
/// operations can be exercised against test doubles.
#[async_trait]
pub trait ResourceClient: Send + Sync {
    /// Creates a resource server-side from the given payload
    ///
    /// # Returns
    /// * `Ok(R)` - The decoded record
    /// * `Err(AppError)` - Transport or API failure
    async fn create<R, B>(&self, body: &B) -> Result<R, AppError>
    where
        R: Resource + Send,
        B: Serialize + Sync;

    /// Fetches a resource by its server-assigned identifier
    ///
    /// # Returns
    /// * `Ok(R)` - The decoded record
    /// * `Err(AppError::NotFound)` - If the identifier is unknown
    async fn retrieve<R>(&self, id: &str) -> Result<R, AppError>
    where
        R: Resource + Send;
}
