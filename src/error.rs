/// Everything that can make a decode call fail. Every variant is fatal: no
/// partial result is ever returned, and nothing is retried internally.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DecodeError {
    /// The upstream pixel buffer could not be read (zero-sized image, etc).
    #[error("image unreadable: {reason}")]
    ImageUnreadable { reason: &'static str },

    /// Fewer than three position-detection-pattern candidates were found.
    #[error("fewer than 3 finder patterns found (got {found})")]
    FinderNotFound { found: usize },

    /// Three or more PDP candidates exist, but no triple forms a right angle
    /// within tolerance.
    #[error("no finder triple forms a right angle within tolerance")]
    FinderAmbiguous,

    /// The timing-pattern run-length analysis failed, or the resulting
    /// module count does not correspond to a legal version.
    #[error("grid sampling failed: {reason}")]
    GridSampleFailed { reason: &'static str },

    /// Neither format-info copy passed the BCH(15,5) check.
    #[error("format info unreadable at both redundant locations")]
    FormatUnreadable,

    /// A Reed-Solomon block exceeded its error correction capacity.
    #[error("block {block_index} uncorrectable by Reed-Solomon")]
    UncorrectableBlock { block_index: usize },

    /// The mode indicator did not match any known mode.
    #[error("unknown mode indicator 0b{mode:04b} at bit offset {bit_offset}")]
    UnknownMode { mode: u8, bit_offset: usize },

    /// The bit stream ran out before a character finished decoding.
    #[error("payload bit stream truncated at bit offset {bit_offset}")]
    TruncatedPayload { bit_offset: usize },
}

pub type DecodeResult<T> = Result<T, DecodeError>;
