use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::utils::error::{Result, VersionError};

/// Four-part version identifier: major, minor, build and name.
///
/// Each part is a signed 16-bit integer. The value is immutable once built
/// and has two canonical encodings:
///
/// * the string form `major.minor.build.name`, see [`Version::parse`]
/// * the packed form, the four parts concatenated big-endian into an `i64`,
///   see [`Version::to_packed`]
///
/// The derived ordering compares major, then minor, then build, then name.
/// The `is_*` predicates are separate relations with their own rules and are
/// not interchangeable with `<`/`>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    major: i16,
    minor: i16,
    build: i16,
    name: i16,
}

impl Version {
    /// Version identifier parts separator
    pub const SEPARATOR: char = '.';

    /// Create a version from four integers, truncating each to 16 bits.
    ///
    /// No validation is performed: out-of-range inputs wrap the same way a
    /// two's-complement narrowing cast does.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn new(major: i64, minor: i64, build: i64, name: i64) -> Self {
        Self::from_parts(major as i16, minor as i16, build as i16, name as i16)
    }

    /// Create a version from parts that are already 16-bit
    pub const fn from_parts(major: i16, minor: i16, build: i16, name: i16) -> Self {
        Self {
            major,
            minor,
            build,
            name,
        }
    }

    /// Parse the dotted string form.
    ///
    /// Empty segments (leading, trailing or doubled separators) are skipped.
    /// Parts missing from the right are zero, and anything after the fourth
    /// segment is ignored. No whitespace trimming is done.
    pub fn parse(input: &str) -> Result<Self> {
        let mut parts = [0i16; 4];
        let segments = input.split(Self::SEPARATOR).filter(|s| !s.is_empty());

        for (slot, segment) in parts.iter_mut().zip(segments) {
            *slot = segment.parse::<i16>().map_err(|source| {
                log::debug!("rejecting version segment '{segment}' in '{input}': {source}");
                VersionError::InvalidFormat {
                    input: input.to_string(),
                    segment: segment.to_string(),
                    source,
                }
            })?;
        }

        let [major, minor, build, name] = parts;
        Ok(Self::from_parts(major, minor, build, name))
    }

    /// Unpack a version from its 64-bit big-endian packed form
    pub const fn from_packed(value: i64) -> Self {
        let b = value.to_be_bytes();
        Self::from_parts(
            i16::from_be_bytes([b[0], b[1]]),
            i16::from_be_bytes([b[2], b[3]]),
            i16::from_be_bytes([b[4], b[5]]),
            i16::from_be_bytes([b[6], b[7]]),
        )
    }

    /// Pack the four parts big-endian into one 64-bit value
    pub const fn to_packed(self) -> i64 {
        let [m0, m1] = self.major.to_be_bytes();
        let [n0, n1] = self.minor.to_be_bytes();
        let [b0, b1] = self.build.to_be_bytes();
        let [a0, a1] = self.name.to_be_bytes();
        i64::from_be_bytes([m0, m1, n0, n1, b0, b1, a0, a1])
    }

    /// Major version number
    pub const fn major(&self) -> i16 {
        self.major
    }

    /// Minor version number
    pub const fn minor(&self) -> i16 {
        self.minor
    }

    /// Build number
    pub const fn build(&self) -> i16 {
        self.build
    }

    /// Build name
    pub const fn name(&self) -> i16 {
        self.name
    }

    /// Multi-decimal "greater than".
    ///
    /// Major and minor are compared lexicographically. Once both are equal,
    /// a greater build wins, and otherwise a greater name wins even when the
    /// build is lower. So `1.2.3.9` is greater than `1.2.4.0` and vice versa.
    /// Equal versions are never greater. This differs from the derived `>`.
    pub fn is_greater_than<'a>(&self, other: impl Into<Option<&'a Self>>) -> bool {
        let Some(other) = other.into() else {
            return false;
        };

        match self.major.cmp(&other.major).then(self.minor.cmp(&other.minor)) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => self.build > other.build || self.name > other.name,
        }
    }

    /// True if major is greater, or major is equal and minor greater, or
    /// major and minor are equal and build greater, or all four parts equal.
    ///
    /// A version that differs from `other` only in a greater name is *not*
    /// greater-or-equal.
    pub fn is_greater_or_equal_to<'a>(&self, other: impl Into<Option<&'a Self>>) -> bool {
        let Some(other) = other.into() else {
            return false;
        };

        let same_major = self.major == other.major;
        let same_minor = same_major && self.minor == other.minor;

        self.major > other.major
            || (same_major && self.minor > other.minor)
            || (same_minor && self.build > other.build)
            || self == other
    }

    /// Same major, and either a greater minor or an equal minor with a build
    /// at least as high.
    pub fn is_compatible_with<'a>(&self, other: impl Into<Option<&'a Self>>) -> bool {
        let Some(other) = other.into() else {
            return false;
        };

        if self.major != other.major {
            return false;
        }
        match self.minor.cmp(&other.minor) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => self.build >= other.build,
        }
    }

    /// Same major and minor with a build at least as high; name is ignored
    pub fn is_equivalent_to<'a>(&self, other: impl Into<Option<&'a Self>>) -> bool {
        other.into().is_some_and(|other| {
            self.major == other.major && self.minor == other.minor && self.build >= other.build
        })
    }

    /// Signed difference of the first part that differs, or 0 when equal
    pub fn compare_to(&self, other: &Self) -> i32 {
        if self == other {
            return 0;
        }

        [
            (self.major, other.major),
            (self.minor, other.minor),
            (self.build, other.build),
            (self.name, other.name),
        ]
        .into_iter()
        .find(|(a, b)| a != b)
        .map_or(0, |(a, b)| i32::from(a) - i32::from(b))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = Self::SEPARATOR;
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}",
            self.major, self.minor, self.build, self.name
        )
    }
}

// Hashing goes through the string form so it always agrees with equality.
impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<i64> for Version {
    fn from(value: i64) -> Self {
        Self::from_packed(value)
    }
}

impl From<Version> for i64 {
    fn from(version: Version) -> Self {
        version.to_packed()
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            serializer.serialize_i64(self.to_packed())
        }
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(VersionVisitor)
        } else {
            deserializer.deserialize_i64(VersionVisitor)
        }
    }
}

struct VersionVisitor;

impl Visitor<'_> for VersionVisitor {
    type Value = Version;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a dotted version string or a packed 64-bit version")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Version, E> {
        Version::parse(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Version, E> {
        Ok(Version::from_packed(v))
    }

    #[allow(clippy::cast_possible_wrap)]
    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Version, E> {
        Ok(Version::from_packed(v as i64))
    }
}
