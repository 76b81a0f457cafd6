use std::{fmt, str::FromStr};

use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::{BuildMetadata, Prerelease, ValidationError};

/// A parsed semantic version, `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.
///
/// Versions only come from parsing a string and cannot be changed afterwards.
/// `Display` reproduces the parsed string byte for byte.
///
/// Equality, ordering and hashing follow version precedence, so two versions
/// that differ only in build metadata are `==`. Use [`Version::is_identical`]
/// to tell them apart.
#[derive(Debug, Clone, DeserializeFromStr, SerializeDisplay)]
pub struct Version {
    pub(crate) major: u64,
    pub(crate) minor: u64,
    pub(crate) patch: u64,
    pub(crate) pre_release: Prerelease,
    pub(crate) build_metadata: BuildMetadata,
}

impl Version {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        crate::parse(input)
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn pre_release(&self) -> &Prerelease {
        &self.pre_release
    }

    pub fn build_metadata(&self) -> &BuildMetadata {
        &self.build_metadata
    }

    pub fn is_prerelease(&self) -> bool {
        !self.pre_release.is_empty()
    }

    pub fn has_build_metadata(&self) -> bool {
        !self.build_metadata.is_empty()
    }

    /// Are these the same version down to the build metadata?
    ///
    /// Two identical versions always render to the same string.
    pub fn is_identical(&self, other: &Self) -> bool {
        self == other && self.build_metadata == other.build_metadata
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;

        if !self.pre_release.is_empty() {
            write!(f, "-{}", self.pre_release)?;
        }

        if !self.build_metadata.is_empty() {
            write!(f, "+{}", self.build_metadata)?;
        }

        Ok(())
    }
}

impl FromStr for Version {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        crate::parse(value)
    }
}
