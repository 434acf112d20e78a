//! Framed blob format for stored games: the JSON wire state behind a
//! magic/version/CRC32 header, so a corrupted or truncated row is
//! rejected instead of loaded.

use thiserror::Error;

use crate::types::GameState;

const MAGIC: &[u8; 4] = b"CKGS";
const VERSION: u32 = 1;
const HEADER_SIZE: usize = 16;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot too short to hold a header ({0} bytes)")]
    TooShort(usize),
    #[error("invalid snapshot magic (expected CKGS)")]
    BadMagic,
    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u32),
    #[error("CRC32 mismatch: expected {expected:#010x}, got {actual:#010x}")]
    CrcMismatch { expected: u32, actual: u32 },
    #[error("snapshot payload is not a valid game state: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Serializes a game state into a framed snapshot blob.
pub fn encode(state: &GameState) -> Result<Vec<u8>, SnapshotError> {
    let payload = serde_json::to_vec(state)?;
    let crc = crc32fast::hash(&payload);

    let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&VERSION.to_le_bytes());
    out.extend_from_slice(&crc.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&payload);
    Ok(out)
}

/// Parses and verifies a snapshot produced by [`encode`].
pub fn decode(data: &[u8]) -> Result<GameState, SnapshotError> {
    if data.len() < HEADER_SIZE {
        return Err(SnapshotError::TooShort(data.len()));
    }
    if &data[0..4] != MAGIC {
        return Err(SnapshotError::BadMagic);
    }

    let version = read_u32_le(data, 4);
    if version != VERSION {
        return Err(SnapshotError::UnsupportedVersion(version));
    }

    let expected_crc = read_u32_le(data, 8);
    let payload = &data[HEADER_SIZE..];
    let actual_crc = crc32fast::hash(payload);
    if actual_crc != expected_crc {
        return Err(SnapshotError::CrcMismatch {
            expected: expected_crc,
            actual: actual_crc,
        });
    }

    Ok(serde_json::from_slice(payload)?)
}

fn read_u32_le(data: &[u8], offset: usize) -> u32 {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&data[offset..offset + 4]);
    u32::from_le_bytes(bytes)
}
