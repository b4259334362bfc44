//! Built-in diagnostic stages, in the order the engine runs them.

pub mod data_fields;
pub mod part_completeness;
pub mod part_condition;

pub use data_fields::DataFieldsStage;
pub use part_completeness::PartCompletenessStage;
pub use part_condition::PartConditionStage;
