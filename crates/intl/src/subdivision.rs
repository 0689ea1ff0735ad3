//! ISO 3166-2 country subdivisions.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use SubdivisionCategory::{District, OutlyingTerritory, State};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubdivisionError {
    #[error("Invalid subdivision code: {0}")]
    InvalidCode(String),
}

/// Kind of subdivision: state, district, outlying territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubdivisionCategory {
    State,
    District,
    #[serde(rename = "outlying territory")]
    OutlyingTerritory,
}

impl fmt::Display for SubdivisionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::State => "state",
            Self::District => "district",
            Self::OutlyingTerritory => "outlying territory",
        })
    }
}

/// One row of the subdivision table, keyed by its `CC-SUB` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CountrySubdivision {
    pub code: &'static str,
    pub name: &'static str,
    pub category: SubdivisionCategory,
}

impl CountrySubdivision {
    /// The ISO 3166-1 alpha-2 part, e.g. `US`.
    pub fn country_code(&self) -> &'static str {
        &self.code[..2]
    }

    /// The part after the dash, e.g. `CA` for `US-CA`.
    pub fn subdivision_code(&self) -> &'static str {
        &self.code[3..]
    }
}

const fn sub(
    code: &'static str,
    name: &'static str,
    category: SubdivisionCategory,
) -> CountrySubdivision {
    CountrySubdivision { code, name, category }
}

pub static SUBDIVISIONS: &[CountrySubdivision] = &[
    sub("US-AL", "Alabama", State),
    sub("US-AK", "Alaska", State),
    sub("US-AZ", "Arizona", State),
    sub("US-AR", "Arkansas", State),
    sub("US-CA", "California", State),
    sub("US-CO", "Colorado", State),
    sub("US-CT", "Connecticut", State),
    sub("US-DE", "Delaware", State),
    sub("US-FL", "Florida", State),
    sub("US-GA", "Georgia", State),
    sub("US-HI", "Hawaii", State),
    sub("US-ID", "Idaho", State),
    sub("US-IL", "Illinois", State),
    sub("US-IN", "Indiana", State),
    sub("US-IA", "Iowa", State),
    sub("US-KS", "Kansas", State),
    sub("US-KY", "Kentucky", State),
    sub("US-LA", "Louisiana", State),
    sub("US-ME", "Maine", State),
    sub("US-MD", "Maryland", State),
    sub("US-MA", "Massachusetts", State),
    sub("US-MI", "Michigan", State),
    sub("US-MN", "Minnesota", State),
    sub("US-MS", "Mississippi", State),
    sub("US-MO", "Missouri", State),
    sub("US-MT", "Montana", State),
    sub("US-NE", "Nebraska", State),
    sub("US-NV", "Nevada", State),
    sub("US-NH", "New Hampshire", State),
    sub("US-NJ", "New Jersey", State),
    sub("US-NM", "New Mexico", State),
    sub("US-NY", "New York", State),
    sub("US-NC", "North Carolina", State),
    sub("US-ND", "North Dakota", State),
    sub("US-OH", "Ohio", State),
    sub("US-OK", "Oklahoma", State),
    sub("US-OR", "Oregon", State),
    sub("US-PA", "Pennsylvania", State),
    sub("US-RI", "Rhode Island", State),
    sub("US-SC", "South Carolina", State),
    sub("US-SD", "South Dakota", State),
    sub("US-TN", "Tennessee", State),
    sub("US-TX", "Texas", State),
    sub("US-UT", "Utah", State),
    sub("US-VT", "Vermont", State),
    sub("US-VA", "Virginia", State),
    sub("US-WA", "Washington", State),
    sub("US-WV", "West Virginia", State),
    sub("US-WI", "Wisconsin", State),
    sub("US-WY", "Wyoming", State),
    sub("US-DC", "District of Columbia", District),
    sub("US-AS", "American Samoa", OutlyingTerritory),
    sub("US-GU", "Guam", OutlyingTerritory),
    sub("US-MP", "Northern Mariana Islands", OutlyingTerritory),
    sub("US-PR", "Puerto Rico", OutlyingTerritory),
    sub("US-UM", "United States Minor Outlying Islands", OutlyingTerritory),
    sub("US-VI", "Virgin Islands, U.S.", OutlyingTerritory),
];

/// Splits `CC-SUB` into its country and subdivision parts.
///
/// # Examples
///
/// ```
/// use weft_intl::parse_code;
///
/// assert_eq!(parse_code("US-NY"), Ok(("US", "NY")));
/// assert!(parse_code("USNY").is_err());
/// ```
pub fn parse_code(code: &str) -> Result<(&str, &str), SubdivisionError> {
    let invalid = || SubdivisionError::InvalidCode(code.to_string());
    let (country, subdivision) = code.split_once('-').ok_or_else(invalid)?;

    let country_ok = country.len() == 2 && country.bytes().all(|b| b.is_ascii_alphabetic());
    let subdivision_ok = (1..=3).contains(&subdivision.len())
        && subdivision.bytes().all(|b| b.is_ascii_alphanumeric());
    if !country_ok || !subdivision_ok {
        return Err(invalid());
    }
    Ok((country, subdivision))
}

/// Looks up a subdivision by code, ignoring ASCII case.
pub fn find(code: &str) -> Option<&'static CountrySubdivision> {
    SUBDIVISIONS
        .iter()
        .find(|subdivision| subdivision.code.eq_ignore_ascii_case(code))
}

/// All subdivisions of a country, in table order.
pub fn by_country(country_code: &str) -> impl Iterator<Item = &'static CountrySubdivision> + '_ {
    SUBDIVISIONS
        .iter()
        .filter(move |subdivision| subdivision.country_code().eq_ignore_ascii_case(country_code))
}
