use crate::string::String;

/// Fixed-width 32-byte hash value.
///
/// Node values are carried as exactly 32 bytes everywhere; leading zero
/// bytes are significant and survive storage, concatenation and encoding.
/// The derived ordering is byte-wise, which matches the big-endian numeric
/// interpretation.
#[derive(Eq, PartialEq, Debug, Default, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct H256([u8; 32]);

impl H256 {
    pub const fn zero() -> Self {
        H256([0u8; 32])
    }

    pub fn is_zero(&self) -> bool {
        self == &Self::zero()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0[..]
    }

    /// Lowercase hex rendering, always 64 digits.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; 32]> for H256 {
    fn from(v: [u8; 32]) -> Self {
        H256(v)
    }
}

impl From<H256> for [u8; 32] {
    fn from(h: H256) -> [u8; 32] {
        h.0
    }
}

impl AsRef<[u8]> for H256 {
    fn as_ref(&self) -> &[u8] {
        &self.0[..]
    }
}
