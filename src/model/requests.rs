use crate::model::identity::{Country, Curp, Gender, State};
use chrono::NaiveDate;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Payload for requesting a new CURP validation
///
/// Field constraints are enforced by the types themselves: a
/// [`Curp`] or [`Country`] can only be obtained through validated
/// parsing, so an ill-formed payload cannot be constructed. Optional
/// fields are omitted from serialization when absent, never sent as
/// empty strings.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct CurpValidationRequest {
    /// Given names as registered
    pub names: String,
    /// First (paternal) surname
    pub first_surname: String,
    /// Second (maternal) surname, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_surname: Option<String>,
    /// Date of birth
    pub date_of_birth: NaiveDate,
    /// Country of birth in ISO 3166 alpha-2 format
    pub country_of_birth: Country,
    /// Birth state in RENAPO two-letter code format
    pub state_of_birth: State,
    /// Gender as registered
    pub gender: Gender,
    /// Pre-known CURP to validate instead of computing one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_curp: Option<Curp>,
}

impl CurpValidationRequest {
    /// Creates a new request with the required identity fields
    pub fn new(
        names: impl Into<String>,
        first_surname: impl Into<String>,
        date_of_birth: NaiveDate,
        country_of_birth: Country,
        state_of_birth: State,
        gender: Gender,
    ) -> Self {
        Self {
            names: names.into(),
            first_surname: first_surname.into(),
            second_surname: None,
            date_of_birth,
            country_of_birth,
            state_of_birth,
            gender,
            manual_curp: None,
        }
    }

    /// Sets the second surname
    pub fn with_second_surname(mut self, second_surname: impl Into<String>) -> Self {
        self.second_surname = Some(second_surname.into());
        self
    }

    /// Sets a pre-known CURP to validate against the registry
    pub fn with_manual_curp(mut self, manual_curp: Curp) -> Self {
        self.manual_curp = Some(manual_curp);
        self
    }
}
