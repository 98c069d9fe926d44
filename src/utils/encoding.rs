// Fixed 8-byte stream encoding for versions

use std::io::{ErrorKind, Read, Write};

use crate::models::version::Version;
use crate::utils::error::Result;

/// Size in bytes of an encoded version
pub const ENCODED_LEN: usize = 8;

/// Reads and writes versions in their packed big-endian form.
///
/// The byte layout is the packed `i64` written most-significant first, so a
/// stream produced here can be read back by anything that stores the packed
/// value as a big-endian long.
pub struct VersionCodec;

impl VersionCodec {
    /// Encode a version into its 8-byte form
    pub const fn to_bytes(version: &Version) -> [u8; ENCODED_LEN] {
        version.to_packed().to_be_bytes()
    }

    /// Decode a version from its 8-byte form
    pub const fn from_bytes(bytes: [u8; ENCODED_LEN]) -> Version {
        Version::from_packed(i64::from_be_bytes(bytes))
    }

    /// Write exactly 8 bytes to the given writer
    pub fn write<W: Write>(version: &Version, mut writer: W) -> Result<()> {
        writer.write_all(&Self::to_bytes(version))?;
        Ok(())
    }

    /// Read exactly 8 bytes from the given reader
    pub fn read<R: Read>(mut reader: R) -> Result<Version> {
        let mut buf = [0u8; ENCODED_LEN];
        reader.read_exact(&mut buf).inspect_err(|e| {
            if e.kind() == ErrorKind::UnexpectedEof {
                log::debug!("version stream ended before {ENCODED_LEN} bytes were read");
            }
        })?;
        Ok(Self::from_bytes(buf))
    }
}
