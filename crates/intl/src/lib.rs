//! weft-intl - International reference data.
//!
//! # Example
//!
//! ```
//! use weft_intl::{find, SubdivisionCategory};
//!
//! let dc = find("us-dc").unwrap();
//! assert_eq!(dc.name, "District of Columbia");
//! assert_eq!(dc.category, SubdivisionCategory::District);
//! assert_eq!(dc.subdivision_code(), "DC");
//! ```

pub mod subdivision;

pub use subdivision::{
    by_country, find, parse_code, CountrySubdivision, SubdivisionCategory, SubdivisionError,
    SUBDIVISIONS,
};
