use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::compare::{compare_digits, segment_digits};

/// One numeric component of a [`Version`], of any width.
///
/// Stored as its significant digits; zero is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Segment(String);

static ZERO: Segment = Segment(String::new());

impl Segment {
    fn parse(input: &str) -> Self {
        Self(segment_digits(Some(input)).to_string())
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    /// The segment as a `u64`, or `None` if it does not fit.
    #[must_use]
    pub fn value(&self) -> Option<u64> {
        if self.is_zero() {
            return Some(0);
        }
        self.0.parse().ok()
    }
}

impl From<u64> for Segment {
    fn from(value: u64) -> Self {
        if value == 0 {
            return Self::default();
        }
        Self(value.to_string())
    }
}

impl Ord for Segment {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_digits(&self.0, &other.0)
    }
}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            f.write_str("0")
        } else {
            f.write_str(&self.0)
        }
    }
}

/// A parsed dotted version such as `1.4.2`.
///
/// Parsing never fails: malformed segments become `0`. Comparison pads the
/// shorter version with zeros, so `1.2` and `1.2.0` are equal and hash the
/// same.
#[derive(Debug, Clone)]
pub struct Version {
    segments: Vec<Segment>,
}

impl Version {
    /// Build a version from raw segments. An empty list is treated as `0`.
    #[must_use]
    pub fn new(segments: Vec<u64>) -> Self {
        if segments.is_empty() {
            return Self::default();
        }
        Self {
            segments: segments.into_iter().map(Segment::from).collect(),
        }
    }

    #[must_use]
    pub fn parse(input: &str) -> Self {
        Self {
            segments: input.split('.').map(Segment::parse).collect(),
        }
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Segment at `index`, or zero past the end.
    #[must_use]
    pub fn segment(&self, index: usize) -> &Segment {
        self.segments.get(index).unwrap_or(&ZERO)
    }

    #[must_use]
    pub fn major(&self) -> Option<u64> {
        self.segment(0).value()
    }

    #[must_use]
    pub fn minor(&self) -> Option<u64> {
        self.segment(1).value()
    }

    #[must_use]
    pub fn patch(&self) -> Option<u64> {
        self.segment(2).value()
    }

    /// Index of the first segment where `self` and `other` differ.
    #[must_use]
    pub fn differing_segment(&self, other: &Self) -> Option<usize> {
        let len = self.segments.len().max(other.segments.len());
        (0..len).find(|&i| self.segment(i) != other.segment(i))
    }

    /// Conversion keeping only the first three segments, `None` when one of
    /// them does not fit in a `u64`.
    #[must_use]
    pub fn to_semver(&self) -> Option<semver::Version> {
        Some(semver::Version::new(
            self.major()?,
            self.minor()?,
            self.patch()?,
        ))
    }

    fn significant(&self) -> &[Segment] {
        let end = self
            .segments
            .iter()
            .rposition(|s| !s.is_zero())
            .map_or(0, |pos| pos + 1);
        &self.segments[..end]
    }
}

impl Default for Version {
    fn default() -> Self {
        Self {
            segments: vec![Segment::default()],
        }
    }
}

impl FromStr for Version {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&semver::Version> for Version {
    fn from(version: &semver::Version) -> Self {
        Self::new(vec![version.major, version.minor, version.patch])
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.differing_segment(other)
            .map_or(Ordering::Equal, |i| self.segment(i).cmp(other.segment(i)))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.significant() == other.significant()
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant().hash(state);
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
