//! CURP validation resource
//!
//! A `CurpValidation` is created server-side from the identity fields
//! in a [`CurpValidationRequest`] and reflects the outcome of the
//! lookup against RENAPO. Records are immutable once created; they can
//! only be re-fetched by id.

use crate::error::AppError;
use crate::model::identity::{Country, Curp, Gender, State};
use crate::model::requests::CurpValidationRequest;
use crate::session::resource::{Resource, ResourceClient};
use chrono::{DateTime, NaiveDate, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Outcome of validating a person's identity against RENAPO
///
/// `calculated_curp` is always present. The remaining personal fields
/// are populated only when the registry returned information to
/// compare against, and carry the official values from RENAPO rather
/// than echoing the request.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurpValidation {
    /// Server-assigned record identifier (e.g. `CV-123`)
    pub id: String,
    /// Record creation time
    pub created_at: DateTime<Utc>,
    /// Official given names from RENAPO
    pub names: Option<String>,
    /// Official first surname from RENAPO
    pub first_surname: Option<String>,
    /// Official second surname from RENAPO
    pub second_surname: Option<String>,
    /// Date of birth
    pub date_of_birth: Option<NaiveDate>,
    /// Country of birth in ISO 3166 alpha-2 format
    pub country_of_birth: Option<Country>,
    /// Birth state in RENAPO two-letter code format
    pub state_of_birth: Option<State>,
    /// Gender as registered
    pub gender: Option<Gender>,
    /// Nationality in ISO 3166 alpha-2 format
    pub nationality: Option<Country>,
    /// CURP provided in the request, if any
    pub manual_curp: Option<Curp>,
    /// CURP calculated by the server from the request data
    pub calculated_curp: Curp,
    /// CURP validated in RENAPO, null if it does not exist
    pub validated_curp: Option<Curp>,
    /// True if the CURP exists and is valid in the registry
    pub renapo_curp_match: bool,
    /// True if all provided fields match the RENAPO response.
    /// Accents in names are ignored. Implies `renapo_curp_match`.
    pub renapo_full_match: bool,
}

impl Resource for CurpValidation {
    const NAME: &'static str = "curp_validations";
}

impl CurpValidation {
    /// Requests a new CURP validation
    ///
    /// Issues a single POST round trip; the returned record reflects
    /// the registry lookup outcome. Validation errors on the request
    /// fields surface before this call through the typed fields of
    /// [`CurpValidationRequest`].
    ///
    /// # Arguments
    /// * `client` - The session handle to issue the request through
    /// * `request` - The validated identity fields
    ///
    /// # Returns
    /// * `Ok(CurpValidation)` - The populated record
    /// * `Err(AppError)` - Transport or API failure, propagated unchanged
    pub async fn create<C: ResourceClient>(
        client: &C,
        request: &CurpValidationRequest,
    ) -> Result<Self, AppError> {
        client.create(request).await
    }

    /// Fetches a previously created CURP validation by id
    ///
    /// # Arguments
    /// * `client` - The session handle to issue the request through
    /// * `id` - Server-assigned record identifier
    ///
    /// # Returns
    /// * `Ok(CurpValidation)` - The record
    /// * `Err(AppError::NotFound)` - If the id is unknown to the server
    pub async fn retrieve<C: ResourceClient>(client: &C, id: &str) -> Result<Self, AppError> {
        client.retrieve(id).await
    }
}
