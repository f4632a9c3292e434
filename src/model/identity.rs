//! Identity field types used by CURP validation
//!
//! These types enforce field-level format constraints at construction
//! time, so a malformed value can never reach the wire. Registry
//! semantics (checksum verification, RENAPO matching) are server-side
//! and out of scope here.

use crate::error::AppError;
use once_cell::sync::Lazy;
use pretty_simple_display::DisplaySimple;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// CURP format: four letters, six digits of birth date, sex marker,
/// five consonants, homonymy differentiator, check digit.
static CURP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{4}[0-9]{6}[HM][A-Z]{5}[A-Z0-9][0-9]$").unwrap());

static COUNTRY_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{2}$").unwrap());

/// A CURP, Mexico's unique population registry code
///
/// The inner string is guaranteed to match the official 18-character
/// format. Construction goes through [`Curp::parse`] or serde, both of
/// which reject malformed values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Curp(String);

impl Curp {
    /// Parses and validates a CURP string
    ///
    /// # Returns
    /// * `Ok(Curp)` - If the value matches the CURP format
    /// * `Err(AppError::Validation)` - Otherwise
    pub fn parse(value: &str) -> Result<Self, AppError> {
        if CURP_REGEX.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(AppError::validation(
                "curp",
                format!("'{value}' does not match the CURP format"),
            ))
        }
    }

    /// Returns the CURP as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Curp {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Curp> for String {
    fn from(value: Curp) -> Self {
        value.0
    }
}

impl FromStr for Curp {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Curp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An ISO 3166 alpha-2 country code (e.g. "MX")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Country(String);

impl Country {
    /// Parses and validates a two-letter country code
    pub fn parse(value: &str) -> Result<Self, AppError> {
        if COUNTRY_REGEX.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(AppError::validation(
                "country",
                format!("'{value}' is not an ISO 3166 alpha-2 code"),
            ))
        }
    }

    /// Returns the country code as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Country {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Country> for String {
    fn from(value: Country) -> Self {
        value.0
    }
}

impl FromStr for Country {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Birth state as encoded in a CURP
///
/// These are RENAPO's own two-letter codes, not ISO 3166-2 (Veracruz
/// is `VZ` here, `VER` in ISO). `NE` covers people born abroad.
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum State {
    /// Aguascalientes
    #[serde(rename = "AS")]
    Aguascalientes,
    /// Baja California
    #[serde(rename = "BC")]
    BajaCalifornia,
    /// Baja California Sur
    #[serde(rename = "BS")]
    BajaCaliforniaSur,
    /// Campeche
    #[serde(rename = "CC")]
    Campeche,
    /// Coahuila
    #[serde(rename = "CL")]
    Coahuila,
    /// Colima
    #[serde(rename = "CM")]
    Colima,
    /// Chiapas
    #[serde(rename = "CS")]
    Chiapas,
    /// Chihuahua
    #[serde(rename = "CH")]
    Chihuahua,
    /// Ciudad de México
    #[serde(rename = "DF")]
    CiudadDeMexico,
    /// Durango
    #[serde(rename = "DG")]
    Durango,
    /// Guanajuato
    #[serde(rename = "GT")]
    Guanajuato,
    /// Guerrero
    #[serde(rename = "GR")]
    Guerrero,
    /// Hidalgo
    #[serde(rename = "HG")]
    Hidalgo,
    /// Jalisco
    #[serde(rename = "JC")]
    Jalisco,
    /// Estado de México
    #[serde(rename = "MC")]
    EstadoDeMexico,
    /// Michoacán
    #[serde(rename = "MN")]
    Michoacan,
    /// Morelos
    #[serde(rename = "MS")]
    Morelos,
    /// Nayarit
    #[serde(rename = "NT")]
    Nayarit,
    /// Nuevo León
    #[serde(rename = "NL")]
    NuevoLeon,
    /// Oaxaca
    #[serde(rename = "OC")]
    Oaxaca,
    /// Puebla
    #[serde(rename = "PL")]
    Puebla,
    /// Querétaro
    #[serde(rename = "QT")]
    Queretaro,
    /// Quintana Roo
    #[serde(rename = "QR")]
    QuintanaRoo,
    /// San Luis Potosí
    #[serde(rename = "SP")]
    SanLuisPotosi,
    /// Sinaloa
    #[serde(rename = "SL")]
    Sinaloa,
    /// Sonora
    #[serde(rename = "SR")]
    Sonora,
    /// Tabasco
    #[serde(rename = "TC")]
    Tabasco,
    /// Tamaulipas
    #[serde(rename = "TS")]
    Tamaulipas,
    /// Tlaxcala
    #[serde(rename = "TL")]
    Tlaxcala,
    /// Veracruz
    #[serde(rename = "VZ")]
    Veracruz,
    /// Yucatán
    #[serde(rename = "YN")]
    Yucatan,
    /// Zacatecas
    #[serde(rename = "ZS")]
    Zacatecas,
    /// Born abroad (nacido en el extranjero)
    #[serde(rename = "NE")]
    NacidoEnElExtranjero,
}

impl State {
    /// Returns the two-letter RENAPO code for this state
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            State::Aguascalientes => "AS",
            State::BajaCalifornia => "BC",
            State::BajaCaliforniaSur => "BS",
            State::Campeche => "CC",
            State::Coahuila => "CL",
            State::Colima => "CM",
            State::Chiapas => "CS",
            State::Chihuahua => "CH",
            State::CiudadDeMexico => "DF",
            State::Durango => "DG",
            State::Guanajuato => "GT",
            State::Guerrero => "GR",
            State::Hidalgo => "HG",
            State::Jalisco => "JC",
            State::EstadoDeMexico => "MC",
            State::Michoacan => "MN",
            State::Morelos => "MS",
            State::Nayarit => "NT",
            State::NuevoLeon => "NL",
            State::Oaxaca => "OC",
            State::Puebla => "PL",
            State::Queretaro => "QT",
            State::QuintanaRoo => "QR",
            State::SanLuisPotosi => "SP",
            State::Sinaloa => "SL",
            State::Sonora => "SR",
            State::Tabasco => "TC",
            State::Tamaulipas => "TS",
            State::Tlaxcala => "TL",
            State::Veracruz => "VZ",
            State::Yucatan => "YN",
            State::Zacatecas => "ZS",
            State::NacidoEnElExtranjero => "NE",
        }
    }
}

impl FromStr for State {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let state = match s {
            "AS" => State::Aguascalientes,
            "BC" => State::BajaCalifornia,
            "BS" => State::BajaCaliforniaSur,
            "CC" => State::Campeche,
            "CL" => State::Coahuila,
            "CM" => State::Colima,
            "CS" => State::Chiapas,
            "CH" => State::Chihuahua,
            "DF" => State::CiudadDeMexico,
            "DG" => State::Durango,
            "GT" => State::Guanajuato,
            "GR" => State::Guerrero,
            "HG" => State::Hidalgo,
            "JC" => State::Jalisco,
            "MC" => State::EstadoDeMexico,
            "MN" => State::Michoacan,
            "MS" => State::Morelos,
            "NT" => State::Nayarit,
            "NL" => State::NuevoLeon,
            "OC" => State::Oaxaca,
            "PL" => State::Puebla,
            "QT" => State::Queretaro,
            "QR" => State::QuintanaRoo,
            "SP" => State::SanLuisPotosi,
            "SL" => State::Sinaloa,
            "SR" => State::Sonora,
            "TC" => State::Tabasco,
            "TS" => State::Tamaulipas,
            "TL" => State::Tlaxcala,
            "VZ" => State::Veracruz,
            "YN" => State::Yucatan,
            "ZS" => State::Zacatecas,
            "NE" => State::NacidoEnElExtranjero,
            other => {
                return Err(AppError::validation(
                    "state",
                    format!("'{other}' is not a RENAPO state code"),
                ));
            }
        };
        Ok(state)
    }
}

/// Gender as registered in RENAPO
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(AppError::validation(
                "gender",
                format!("'{other}' is not a valid gender"),
            )),
        }
    }
}
