//! Domain layer for Haven
//!
//! Contains the value objects exchanged with the support services, the fixed
//! keyword lexicons and the wellbeing assessment engine. This layer performs
//! no I/O and defines the ubiquitous language.

pub mod assessment;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use assessment::{AssessmentAnswer, AssessmentResult, KeywordCounts, assess};
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
