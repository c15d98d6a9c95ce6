pub mod case;
pub mod config;
pub mod error;
pub mod reference;
pub mod timeline;

pub use case::{validate_solution, CaseRequest, HomeForm, SolutionForm, COUNTRY};
pub use config::Config;
pub use error::{LegalHelpError, ValidationError};
pub use reference::{Region, CATEGORIES, REGIONS};
pub use timeline::Timeline;
