//! Errors raised while assembling or reading GLB containers

/// Failure to produce or read a structurally valid GLB
#[derive(Debug, thiserror::Error)]
pub enum GlbError {
    /// A chunk or the header did not start on a 4-byte boundary
    #[error("{what} at offset {offset} is not 4-byte aligned")]
    Misaligned { what: &'static str, offset: usize },

    /// Bytes written do not match the length declared in the header
    #[error("declared GLB length {declared} but wrote {actual} bytes")]
    LengthMismatch { declared: usize, actual: usize },

    /// A length or count does not fit the u32 fields of the container
    #[error("{0} bytes exceeds the 4 GiB GLB limit")]
    TooLarge(usize),

    /// `buffers[0].byteLength` disagrees with the BIN chunk payload
    #[error("buffer 0 declares {declared} bytes but binary blob is {actual} bytes")]
    BufferLengthMismatch { declared: u64, actual: u64 },

    /// The document has no buffer entry to describe the BIN chunk
    #[error("document declares no buffers")]
    MissingBuffer,

    /// A buffer view reaches past the end of its buffer
    #[error("buffer view {view} spans {start}..{end} past buffer length {buffer_length}")]
    ViewOutOfBounds {
        view: usize,
        start: u64,
        end: u64,
        buffer_length: u64,
    },

    /// An accessor needs more bytes than its buffer view provides
    #[error("accessor {accessor} needs {required} bytes but buffer view holds {available}")]
    AccessorOverflow {
        accessor: usize,
        required: u64,
        available: u64,
    },

    /// An accessor's byte length does not fit in 64 bits
    #[error("accessor {0} byte length overflows")]
    AccessorLengthOverflow(usize),

    /// An accessor's `min` or `max` holds something other than numbers
    #[error("accessor {0} has non-numeric bounds")]
    NonNumericBounds(usize),

    /// An accessor refers to a buffer view that does not exist
    #[error("accessor {accessor} references missing buffer view {view}")]
    MissingView { accessor: usize, view: usize },

    /// An accessor uses a component type or element type this crate does not emit
    #[error("accessor {0} has an invalid component or element type")]
    InvalidAccessorType(usize),

    /// A mesh was built with no vertex positions
    #[error("mesh has no vertex positions")]
    EmptyMesh,

    /// Index count is not a multiple of three
    #[error("{0} indices do not form whole triangles")]
    IncompleteTriangle(usize),

    /// An index points past the last vertex
    #[error("index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },

    /// Input is shorter than the structure being read
    #[error("truncated GLB: need {needed} bytes, have {available}")]
    Truncated { needed: usize, available: usize },

    /// First four bytes are not `glTF`
    #[error("invalid GLB magic 0x{0:08X}")]
    InvalidMagic(u32),

    /// Container version other than 2
    #[error("unsupported GLB version {0}")]
    UnsupportedVersion(u32),

    /// A chunk carries the wrong type tag for its position
    #[error("expected {expected} chunk, found type 0x{found:08X}")]
    UnexpectedChunk { expected: &'static str, found: u32 },

    /// JSON chunk could not be produced or parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
