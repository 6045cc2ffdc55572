//! Dot-separated version comparison
//!
//! Versions are one or more dot-separated decimal segments. Leading zeros
//! inside a segment and trailing zero segments carry no meaning, so
//! `1.01.0` and `1.1` compare equal.

use crate::error::{HelperError, Result};
use std::{cmp::Ordering, fmt, str::FromStr};

/// A single numeric segment, stored as its canonical digit string.
///
/// Ordering by (length, digits) is numeric ordering for canonical decimal
/// strings, without any fixed-width integer limit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Component(Box<str>);

impl Component {
    fn parse(segment: &str) -> Option<Self> {
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let trimmed = segment.trim_start_matches('0');
        let digits = if trimmed.is_empty() { "0" } else { trimmed };
        Some(Self(digits.into()))
    }

    fn is_zero(&self) -> bool {
        &*self.0 == "0"
    }
}

impl Ord for Component {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Component {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A normalized version: never empty, no trailing zero components beyond the first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    components: Vec<Component>,
}

impl Version {
    /// Parse and normalize a version string
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(HelperError::malformed_version(input, "empty version string"));
        }

        let mut components = Vec::new();
        for (index, segment) in input.split('.').enumerate() {
            let component = Component::parse(segment).ok_or_else(|| {
                let reason = if segment.is_empty() {
                    format!("empty segment at position {}", index + 1)
                } else {
                    format!("segment '{segment}' is not a non-negative integer")
                };
                HelperError::malformed_version(input, reason)
            })?;
            components.push(component);
        }

        while components.len() > 1 && components.last().is_some_and(Component::is_zero) {
            components.pop();
        }

        Ok(Self { components })
    }

    /// Canonical digit strings of the normalized components
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.components.iter().map(|c| &*c.0)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        for (left, right) in self.components.iter().zip(&other.components) {
            match left.cmp(right) {
                Ordering::Equal => {}
                decided => return decided,
            }
        }
        self.components.len().cmp(&other.components.len())
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Version {
    type Err = HelperError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(&component.0)?;
        }
        Ok(())
    }
}

/// Compare two version strings.
///
/// `version1` is validated first, so if both inputs are malformed the error
/// names `version1`.
pub fn compare(version1: &str, version2: &str) -> Result<Ordering> {
    let left = Version::parse(version1)?;
    let right = Version::parse(version2)?;
    Ok(left.cmp(&right))
}

/// Whether `candidate` is strictly newer than `current`
pub fn is_newer(candidate: &str, current: &str) -> Result<bool> {
    Ok(compare(candidate, current)? == Ordering::Greater)
}

/// Sort raw version strings in ascending order, keeping equal versions in input order
pub fn sort_versions<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<String>> {
    let mut keyed = inputs
        .iter()
        .map(|raw| {
            let raw = raw.as_ref();
            Version::parse(raw).map(|version| (version, raw.to_string()))
        })
        .collect::<Result<Vec<_>>>()?;

    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
    Ok(keyed.into_iter().map(|(_, raw)| raw).collect())
}
