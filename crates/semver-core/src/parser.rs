use tracing::{debug, instrument};

use crate::{
    Version,
    error::{Reason, ValidationError},
    identifier::{BuildMetadata, Prerelease, parse_number},
};

/// Parse a semantic version string.
///
/// The whole string must match `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`; there
/// is no lenient mode, no `v` prefix and no surrounding whitespace. On success
/// the returned version renders back to exactly `input`.
#[instrument(level = "trace")]
pub fn parse(input: &str) -> Result<Version, ValidationError> {
    parse_version(input).map_err(|reason| {
        debug!(input, %reason, "rejected version string");
        ValidationError::new(input, reason)
    })
}

fn parse_version(input: &str) -> Result<Version, Reason> {
    if input.is_empty() {
        return Err(Reason::Empty);
    }

    // Build metadata is everything after the first `+`, and is never split again on `+`.
    let (rest, build) = match input.split_once('+') {
        Some((rest, build)) => (rest, Some(build)),
        None => (input, None),
    };
    // The core is only digits and dots, so the first `-` starts the pre-release.
    let (core, pre) = match rest.split_once('-') {
        Some((core, pre)) => (core, Some(pre)),
        None => (rest, None),
    };

    let mut numbers = core.split('.');
    let mut next_number = |part: &'static str| {
        numbers
            .next()
            .ok_or(Reason::MissingPart(part))
            .and_then(|digits| parse_number(digits, part))
    };
    let major = next_number("major version")?;
    let minor = next_number("minor version")?;
    let patch = next_number("patch version")?;
    if numbers.next().is_some() {
        return Err(Reason::TooManyParts);
    }

    let pre_release = pre
        .map(Prerelease::parse)
        .transpose()?
        .unwrap_or_default();
    let build_metadata = build
        .map(BuildMetadata::parse)
        .transpose()?
        .unwrap_or_default();

    Ok(Version {
        major,
        minor,
        patch,
        pre_release,
        build_metadata,
    })
}
