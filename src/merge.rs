use crate::h256::H256;
use crate::traits::Hasher;

/// Hash the concatenation of two node values.
///
/// Operands are fed to the hasher as raw bytes: leaf values may be of any
/// length, computed nodes are always 32 bytes. Every combination really
/// hashes; absent positions are represented by per-level default nodes,
/// never short-circuited.
pub fn merge<H: Hasher + Default>(lhs: &[u8], rhs: &[u8]) -> H256 {
    let mut hasher = H::default();
    hasher.write_bytes(lhs);
    hasher.write_bytes(rhs);
    hasher.finish()
}
