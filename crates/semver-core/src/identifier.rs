use std::fmt;

use crate::error::Reason;

/// One dot-separated pre-release identifier.
///
/// The kind is fixed when the version is parsed: an identifier made only of
/// digits is `Numeric`, anything else is `Alphanumeric`. Variant order matters,
/// the derived `Ord` puts every numeric identifier before every alphanumeric
/// one, and compares alphanumeric identifiers by ASCII bytes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Identifier {
    Numeric(u64),
    Alphanumeric(String),
}

impl Identifier {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }

    pub fn is_alphanumeric(&self) -> bool {
        matches!(self, Self::Alphanumeric(_))
    }

    fn parse(segment: &str) -> Result<Self, Reason> {
        check_characters(segment, "pre-release")?;
        if segment.bytes().all(|b| b.is_ascii_digit()) {
            parse_number(segment, "pre-release identifier").map(Self::Numeric)
        } else {
            Ok(Self::Alphanumeric(segment.to_string()))
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{n}"),
            Identifier::Alphanumeric(s) => write!(f, "{s}"),
        }
    }
}

/// The pre-release section of a version, the part between `-` and `+`.
///
/// Empty when the version has no pre-release section. The derived `Ord`
/// compares identifiers position by position, and a sequence that runs out
/// first is the lesser one.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Prerelease {
    identifiers: Vec<Identifier>,
}

impl Prerelease {
    pub(crate) fn parse(section: &str) -> Result<Self, Reason> {
        let identifiers = section
            .split('.')
            .map(Identifier::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { identifiers })
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Identifier> {
        self.identifiers.iter()
    }
}

impl<'a> IntoIterator for &'a Prerelease {
    type Item = &'a Identifier;
    type IntoIter = std::slice::Iter<'a, Identifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Prerelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_dotted(f, &self.identifiers)
    }
}

/// The build metadata section of a version, everything after the first `+`.
///
/// Identifiers are kept verbatim, leading zeros included. Build metadata has
/// no bearing on precedence, so this type has no ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BuildMetadata {
    identifiers: Vec<String>,
}

impl BuildMetadata {
    pub(crate) fn parse(section: &str) -> Result<Self, Reason> {
        let identifiers = section
            .split('.')
            .map(|segment| check_characters(segment, "build metadata").map(|()| segment.to_string()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { identifiers })
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.identifiers.iter().map(String::as_str)
    }
}

impl fmt::Display for BuildMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_dotted(f, &self.identifiers)
    }
}

fn write_dotted<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(".")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn check_characters(segment: &str, part: &'static str) -> Result<(), Reason> {
    if segment.is_empty() {
        return Err(Reason::EmptyIdentifier(part));
    }
    if !segment
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-')
    {
        return Err(Reason::InvalidCharacter {
            part,
            value: segment.to_string(),
        });
    }
    Ok(())
}

/// Parses a run of ASCII digits that must not start with `0` unless it is `0`.
pub(crate) fn parse_number(digits: &str, part: &'static str) -> Result<u64, Reason> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Reason::NotANumber {
            part,
            value: digits.to_string(),
        });
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return Err(Reason::LeadingZero {
            part,
            value: digits.to_string(),
        });
    }
    // Only overflow is left once the digits are checked.
    digits.parse::<u64>().map_err(|_| Reason::TooLarge {
        part,
        value: digits.to_string(),
    })
}
