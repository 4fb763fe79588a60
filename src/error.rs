use core::fmt;

/// Errors raised by tree construction and proof decoding.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// Tree depth must be in `1..=MAX_TREE_DEPTH`
    InvalidDepth(usize),
    /// Leaf index does not fit the tree's index space
    IndexOutOfRange { index: u64, depth: usize },
    /// Proof exceeds the maximum size for the given depth
    ProofTooLarge { actual: usize, max: usize },
    /// Proof is shorter than the 8-byte presence bitmask
    CorruptedProofHeader,
    /// Bitmask claims a sibling at or above the tree depth
    UnexpectedProofBits { depth: usize },
    /// Proof body length disagrees with the bitmask
    CorruptedProofBody { expected: usize, actual: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidDepth(depth) => {
                write!(f, "Depth {} is outside the supported range", depth)
            }
            Error::IndexOutOfRange { index, depth } => write!(
                f,
                "Leaf index {} does not fit a tree of depth {}",
                index, depth
            ),
            Error::ProofTooLarge { actual, max } => {
                write!(f, "Proof is {} bytes, at most {} allowed", actual, max)
            }
            Error::CorruptedProofHeader => {
                write!(f, "Proof is shorter than the presence bitmask")
            }
            Error::UnexpectedProofBits { depth } => write!(
                f,
                "Proof bitmask claims siblings at or above depth {}",
                depth
            ),
            Error::CorruptedProofBody { expected, actual } => write!(
                f,
                "Proof body is {} bytes, bitmask claims {}",
                actual, expected
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
