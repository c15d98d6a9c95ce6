use thiserror::Error;

#[derive(Error, Debug)]
pub enum LegalHelpError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Generation error: {0}")]
    Generation(String),
}

/// Input problems caught before any model call. The `Display` text is shown
/// to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid date format. Please use the format YYYY-MM-DD.")]
    InvalidDate,

    #[error("Please fill out all fields to generate the case scenario.")]
    MissingFields,

    #[error("Unknown state: {0}")]
    UnknownRegion(String),

    #[error("{locality} is not listed under {region}. Update the city list and choose again.")]
    LocalityNotInRegion { region: String, locality: String },

    #[error("Unknown case category: {0}")]
    UnknownCategory(String),

    #[error("You must enter a solution before submitting.")]
    EmptySolution,

    #[error("No case scenario found. Please return to Home and generate one.")]
    NoScenario,
}
