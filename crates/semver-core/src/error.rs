/// A string that is not a valid semantic version.
///
/// This is the only error the crate produces. The [`Reason`] names the grammar
/// rule the input broke.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid version {input:?}: {reason}")]
pub struct ValidationError {
    input: String,
    reason: Reason,
}

impl ValidationError {
    pub(crate) fn new(input: impl Into<String>, reason: Reason) -> Self {
        Self {
            input: input.into(),
            reason,
        }
    }

    /// The rejected input, exactly as it was given.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn reason(&self) -> &Reason {
        &self.reason
    }
}

/// Which grammar rule a rejected version string broke.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Reason {
    #[error("empty input")]
    Empty,
    #[error("missing {0}")]
    MissingPart(&'static str),
    #[error("too many numbers in version core, expected MAJOR.MINOR.PATCH")]
    TooManyParts,
    #[error("{part} {value:?} is not a number")]
    NotANumber { part: &'static str, value: String },
    #[error("{part} {value:?} has a leading zero")]
    LeadingZero { part: &'static str, value: String },
    #[error("{part} {value:?} is too large")]
    TooLarge { part: &'static str, value: String },
    #[error("empty {0} identifier")]
    EmptyIdentifier(&'static str),
    #[error("{part} identifier {value:?} may only contain [0-9A-Za-z-]")]
    InvalidCharacter { part: &'static str, value: String },
}
