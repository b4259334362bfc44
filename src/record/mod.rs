//! Vehicle record model.
//!
//! - [`part`] - Parts, part types and conditions
//! - [`requirements`] - The required-parts table
//! - [`vehicle`] - The vehicle record and its missing-parts tally
//! - [`loader`] - Reading records from XML, JSON and YAML documents
//!
//! # Example
//!
//! ```
//! use car_diagnostics::record::{ConditionType, Part, PartType, RequiredParts, VehicleRecord};
//!
//! let record = VehicleRecord {
//!     year: Some("1992".to_string()),
//!     parts: vec![Part::new("t-1", PartType::Tire, ConditionType::Good)],
//!     ..Default::default()
//! };
//!
//! let missing = record.missing_parts(&RequiredParts::standard());
//! assert_eq!(missing.get(&PartType::Tire), Some(&3));
//! ```

pub mod loader;
pub mod part;
pub mod requirements;
pub mod vehicle;

pub use loader::{
    load_record, load_record_file, parse_record, RecordFormat, RecordSource, SAMPLE_RECORD_NAME,
};
pub use part::{ConditionType, Part, PartType};
pub use requirements::RequiredParts;
pub use vehicle::{DataField, MissingParts, VehicleRecord};
