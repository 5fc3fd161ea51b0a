//! Cursor-tracking writer for the GLB container layout
//!
//! Every integer is written as u32 little-endian. Chunks must start on a
//! 4-byte boundary and their payload is padded so the next one does too.

use crate::error::GlbError;

/// `glTF` read as a little-endian u32
pub const GLB_MAGIC: u32 = 0x4654_6C67;
/// Container version written to the header
pub const GLB_VERSION: u32 = 2;
/// Size of the file header (magic, version, length)
pub const HEADER_LEN: usize = 12;
/// Size of a chunk header (length, type)
pub const CHUNK_HEADER_LEN: usize = 8;
/// Alignment required for every chunk start and chunk length
pub const ALIGNMENT: usize = 4;

/// Chunk type tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkType {
    /// Scene description, padded with spaces
    Json,
    /// Binary buffer, padded with zeros
    Bin,
}

impl ChunkType {
    /// Tag value as stored in the chunk header
    pub const fn tag(self) -> u32 {
        match self {
            ChunkType::Json => 0x4E4F_534A,
            ChunkType::Bin => 0x004E_4942,
        }
    }

    /// Byte used to pad the payload up to alignment
    pub const fn fill(self) -> u8 {
        match self {
            ChunkType::Json => b' ',
            ChunkType::Bin => 0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ChunkType::Json => "JSON",
            ChunkType::Bin => "BIN",
        }
    }
}

/// Number of padding bytes needed to bring `len` up to alignment
pub const fn padding_for(len: usize) -> usize {
    (ALIGNMENT - len % ALIGNMENT) % ALIGNMENT
}

/// `len` rounded up to alignment
pub const fn padded_len(len: usize) -> usize {
    len + padding_for(len)
}

/// Total container length for the given unpadded chunk payloads
pub const fn glb_length(json_len: usize, bin_len: usize) -> usize {
    HEADER_LEN + CHUNK_HEADER_LEN + padded_len(json_len) + CHUNK_HEADER_LEN + padded_len(bin_len)
}

fn to_u32(len: usize) -> Result<u32, GlbError> {
    u32::try_from(len).map_err(|_| GlbError::TooLarge(len))
}

/// Append-only byte writer that knows where it is
pub struct GlbWriter {
    bytes: Vec<u8>,
    declared_length: Option<usize>,
}

impl GlbWriter {
    /// Create a writer with room for `capacity` bytes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
            declared_length: None,
        }
    }

    /// Current cursor position
    pub fn position(&self) -> usize {
        self.bytes.len()
    }

    pub fn write_u32(&mut self, value: u32) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_bytes(&mut self, data: &[u8]) {
        self.bytes.extend_from_slice(data);
    }

    /// Pad with `fill` until the cursor is aligned, returning the bytes added
    pub fn pad_to_alignment(&mut self, fill: u8) -> usize {
        let padding = padding_for(self.position());
        self.bytes.extend(std::iter::repeat_n(fill, padding));
        padding
    }

    /// Fail unless the cursor sits on an aligned offset
    pub fn expect_aligned(&self, what: &'static str) -> Result<(), GlbError> {
        let offset = self.position();
        if offset % ALIGNMENT != 0 {
            return Err(GlbError::Misaligned { what, offset });
        }
        Ok(())
    }

    /// Write the 12-byte header. Must be the first write.
    pub fn write_header(&mut self, total_length: usize) -> Result<(), GlbError> {
        if self.position() != 0 {
            return Err(GlbError::Misaligned {
                what: "GLB header",
                offset: self.position(),
            });
        }
        let length = to_u32(total_length)?;
        self.write_u32(GLB_MAGIC);
        self.write_u32(GLB_VERSION);
        self.write_u32(length);
        self.declared_length = Some(total_length);
        Ok(())
    }

    /// Write a chunk header, its payload, and alignment padding.
    ///
    /// The recorded chunk length is the padded payload length.
    pub fn write_chunk(&mut self, chunk_type: ChunkType, payload: &[u8]) -> Result<(), GlbError> {
        self.expect_aligned(chunk_type.name())?;
        let length = to_u32(padded_len(payload.len()))?;
        self.write_u32(length);
        self.write_u32(chunk_type.tag());
        self.write_bytes(payload);
        self.pad_to_alignment(chunk_type.fill());
        Ok(())
    }

    /// Return the bytes, checking they match the declared header length
    pub fn finish(self) -> Result<Vec<u8>, GlbError> {
        let actual = self.bytes.len();
        match self.declared_length {
            Some(declared) if declared == actual => Ok(self.bytes),
            Some(declared) => Err(GlbError::LengthMismatch { declared, actual }),
            None => Err(GlbError::Truncated {
                needed: HEADER_LEN,
                available: 0,
            }),
        }
    }
}
