use crate::{
    default_nodes::DefaultNodes,
    error::{Error, Result},
    h256::H256,
    merge::merge,
    traits::Hasher,
    vec::Vec,
    MAX_TREE_DEPTH,
};

/// Size of the proof's presence bitmask in bytes.
pub const BITMAP_BYTES: usize = 8;

/// Largest well-formed proof for a tree of the given depth.
pub fn max_proof_size(depth: usize) -> usize {
    BITMAP_BYTES + 32 * depth
}

/// Decoded membership proof: which levels carry a non-default sibling,
/// and those siblings in level order.
///
/// A proof is only meaningful against the (depth, hash function) pair
/// that produced it; the verifier supplies both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleProof {
    bitmap: u64,
    siblings: Vec<H256>,
}

impl MerkleProof {
    pub fn new(bitmap: u64, siblings: Vec<H256>) -> Self {
        MerkleProof { bitmap, siblings }
    }

    /// Presence bitmask; bit `L` marks a non-default sibling at level `L`.
    pub fn bitmap(&self) -> u64 {
        self.bitmap
    }

    pub fn siblings(&self) -> &[H256] {
        &self.siblings
    }

    /// Wire encoding: 8-byte big-endian bitmask, then the siblings.
    pub fn encode(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(BITMAP_BYTES + 32 * self.siblings.len());
        data.extend_from_slice(&self.bitmap.to_be_bytes());
        for sibling in &self.siblings {
            data.extend_from_slice(sibling.as_slice());
        }
        data
    }

    /// Parse and validate a wire-encoded proof for a tree of `depth`.
    ///
    /// Every length is checked here, so no later step can read past the
    /// buffer: the total size is capped, the bitmask must not claim
    /// levels the tree does not have, and the body must hold exactly one
    /// 32-byte sibling per set bit.
    pub fn decode(depth: usize, data: &[u8]) -> Result<Self> {
        let max = max_proof_size(depth);
        if data.len() > max {
            return Err(Error::ProofTooLarge {
                actual: data.len(),
                max,
            });
        }
        if data.len() < BITMAP_BYTES {
            return Err(Error::CorruptedProofHeader);
        }
        let mut header = [0u8; BITMAP_BYTES];
        header.copy_from_slice(&data[..BITMAP_BYTES]);
        let bitmap = u64::from_be_bytes(header);
        if bitmap.checked_shr(depth as u32).unwrap_or(0) != 0 {
            return Err(Error::UnexpectedProofBits { depth });
        }
        let body = &data[BITMAP_BYTES..];
        let expected = 32 * bitmap.count_ones() as usize;
        if body.len() != expected {
            return Err(Error::CorruptedProofBody {
                expected,
                actual: body.len(),
            });
        }
        let mut siblings = Vec::with_capacity(bitmap.count_ones() as usize);
        for chunk in body.chunks_exact(32) {
            let mut node = [0u8; 32];
            node.copy_from_slice(chunk);
            siblings.push(node.into());
        }
        Ok(MerkleProof { bitmap, siblings })
    }

    /// Replay the combine walk from `leaf` at `index` up to a candidate
    /// root.
    ///
    /// An empty `leaf` claims the index is absent and starts the walk
    /// from the deepest default node instead.
    pub fn compute_root<H: Hasher + Default>(
        &self,
        index: u64,
        leaf: &[u8],
        default_nodes: &DefaultNodes,
    ) -> H256 {
        let depth = default_nodes.depth();
        let mut siblings = self.siblings.iter();
        let mut index = index;
        let mut current = H256::zero();
        for level in 0..depth {
            let sibling = match self.bitmap.checked_shr(level as u32).unwrap_or(0) & 1 {
                0 => *default_nodes.node(level),
                _ => match siblings.next() {
                    Some(node) => *node,
                    // bitmask claims more siblings than the proof holds
                    None => return H256::zero(),
                },
            };
            let node: &[u8] = if level == 0 {
                if leaf.is_empty() {
                    default_nodes.top().as_slice()
                } else {
                    leaf
                }
            } else {
                current.as_slice()
            };
            current = if index & 1 == 0 {
                merge::<H>(node, sibling.as_slice())
            } else {
                merge::<H>(sibling.as_slice(), node)
            };
            index >>= 1;
        }
        current
    }
}

/// Verify a wire-encoded proof against a root, independent of any tree.
///
/// Only the depth and hash function need to match the prover; the
/// default-node table is rebuilt from them here. Malformed proofs and
/// root mismatches are both `false`.
pub fn verify<H: Hasher + Default>(
    depth: usize,
    index: u64,
    leaf: &[u8],
    root: &H256,
    proof: &[u8],
) -> bool {
    if depth == 0 || depth > MAX_TREE_DEPTH {
        return false;
    }
    let default_nodes = DefaultNodes::build::<H>(depth);
    match MerkleProof::decode(depth, proof) {
        Ok(decoded) => decoded.compute_root::<H>(index, leaf, &default_nodes) == *root,
        Err(_) => false,
    }
}
