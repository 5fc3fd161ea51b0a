//! Reading GLB containers back into their chunks

use crate::error::GlbError;
use crate::writer::{CHUNK_HEADER_LEN, ChunkType, GLB_MAGIC, GLB_VERSION, HEADER_LEN};

/// Fields of the 12-byte file header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlbHeader {
    pub magic: u32,
    pub version: u32,
    pub length: u32,
}

/// Borrowed view of a parsed GLB
#[derive(Debug, Clone, Copy)]
pub struct GlbChunks<'a> {
    pub header: GlbHeader,
    /// JSON chunk payload including trailing padding
    pub json: &'a [u8],
    /// BIN chunk payload including trailing padding, if present
    pub bin: Option<&'a [u8]>,
}

impl GlbChunks<'_> {
    /// Parse the JSON chunk. Trailing space padding is valid JSON whitespace.
    pub fn json_value(&self) -> Result<serde_json::Value, GlbError> {
        Ok(serde_json::from_slice(self.json)?)
    }
}

fn read_u32(bytes: &[u8], offset: usize) -> Result<u32, GlbError> {
    let end = offset + 4;
    let field = bytes.get(offset..end).ok_or(GlbError::Truncated {
        needed: end,
        available: bytes.len(),
    })?;
    Ok(u32::from_le_bytes([field[0], field[1], field[2], field[3]]))
}

/// Read one chunk starting at `offset`, returning its payload and the next offset
fn read_chunk(
    bytes: &[u8],
    offset: usize,
    expected: ChunkType,
) -> Result<(&[u8], usize), GlbError> {
    let length = read_u32(bytes, offset)? as usize;
    let chunk_type = read_u32(bytes, offset + 4)?;
    if chunk_type != expected.tag() {
        return Err(GlbError::UnexpectedChunk {
            expected: expected.name(),
            found: chunk_type,
        });
    }
    let start = offset + CHUNK_HEADER_LEN;
    let end = start + length;
    let payload = bytes.get(start..end).ok_or(GlbError::Truncated {
        needed: end,
        available: bytes.len(),
    })?;
    Ok((payload, end))
}

/// Split a GLB into header, JSON chunk and optional BIN chunk.
///
/// Bytes past the declared length are ignored.
pub fn parse_glb(bytes: &[u8]) -> Result<GlbChunks<'_>, GlbError> {
    let magic = read_u32(bytes, 0)?;
    if magic != GLB_MAGIC {
        return Err(GlbError::InvalidMagic(magic));
    }
    let version = read_u32(bytes, 4)?;
    if version != GLB_VERSION {
        return Err(GlbError::UnsupportedVersion(version));
    }
    let length = read_u32(bytes, 8)?;
    let declared = length as usize;
    let bytes = bytes.get(..declared).ok_or(GlbError::Truncated {
        needed: declared,
        available: bytes.len(),
    })?;

    let (json, next) = read_chunk(bytes, HEADER_LEN, ChunkType::Json)?;
    let bin = if next < bytes.len() {
        let (bin, _) = read_chunk(bytes, next, ChunkType::Bin)?;
        Some(bin)
    } else {
        None
    };

    Ok(GlbChunks {
        header: GlbHeader {
            magic,
            version,
            length,
        },
        json,
        bin,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::{GlbWriter, glb_length};

    fn sample() -> Vec<u8> {
        let json = br#"{"asset":{"version":"2.0"}}"#;
        let bin = [7u8; 8];
        let total = glb_length(json.len(), bin.len());
        let mut writer = GlbWriter::with_capacity(total);
        writer.write_header(total).unwrap();
        writer.write_chunk(ChunkType::Json, json).unwrap();
        writer.write_chunk(ChunkType::Bin, &bin).unwrap();
        writer.finish().unwrap()
    }

    #[test]
    fn test_parse_written_glb() {
        let bytes = sample();
        let chunks = parse_glb(&bytes).unwrap();
        assert_eq!(chunks.header.magic, GLB_MAGIC);
        assert_eq!(chunks.header.version, 2);
        assert_eq!(chunks.header.length as usize, bytes.len());
        assert_eq!(chunks.json.len() % 4, 0);
        assert_eq!(chunks.bin, Some(&[7u8; 8][..]));
        assert_eq!(chunks.json_value().unwrap()["asset"]["version"], "2.0");
    }

    #[test]
    fn test_parse_rejects_bad_magic() {
        let mut bytes = sample();
        bytes[0] = b'x';
        assert!(matches!(parse_glb(&bytes), Err(GlbError::InvalidMagic(_))));
    }

    #[test]
    fn test_parse_rejects_other_versions() {
        let mut bytes = sample();
        bytes[4..8].copy_from_slice(&1u32.to_le_bytes());
        assert!(matches!(
            parse_glb(&bytes),
            Err(GlbError::UnsupportedVersion(1))
        ));
    }

    #[test]
    fn test_parse_rejects_truncation() {
        let bytes = sample();
        let err = parse_glb(&bytes[..bytes.len() - 1]).unwrap_err();
        assert!(matches!(err, GlbError::Truncated { .. }));
    }

    #[test]
    fn test_parse_rejects_swapped_chunk() {
        let mut bytes = sample();
        bytes[16..20].copy_from_slice(b"BIN\0");
        let err = parse_glb(&bytes).unwrap_err();
        assert!(matches!(
            err,
            GlbError::UnexpectedChunk {
                expected: "JSON",
                ..
            }
        ));
    }
}
