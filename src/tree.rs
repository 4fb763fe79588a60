use crate::{
    default_nodes::DefaultNodes,
    error::{Error, Result},
    h256::H256,
    level_map::LevelMap,
    merge::merge,
    merkle_proof::{MerkleProof, BITMAP_BYTES},
    string::String,
    traits::Hasher,
    vec::Vec,
    MAX_TREE_DEPTH,
};
use core::marker::PhantomData;

/// Sparse merkle tree
///
/// Commits to a sparse `index -> value` mapping over `2^depth` leaf
/// positions. Everything is computed eagerly at construction; afterward
/// the tree only serves root lookups and proof generation, so shared
/// references are safe across readers.
pub struct SparseMerkleTree<H> {
    depth: usize,
    leaves: LevelMap<Vec<u8>>,
    default_nodes: DefaultNodes,
    levels: Vec<LevelMap<H256>>,
    root: H256,
    phantom: PhantomData<H>,
}

impl<H: Hasher + Default> SparseMerkleTree<H> {
    /// Build a tree of the given depth from a complete leaf set.
    ///
    /// Iteration order of `leaves` does not affect the resulting root.
    /// Leaf values are taken as pre-hashed bytes of any length and are
    /// never re-hashed before entering the combine step.
    pub fn new(leaves: impl IntoIterator<Item = (u64, Vec<u8>)>, depth: usize) -> Result<Self> {
        if depth == 0 || depth > MAX_TREE_DEPTH {
            return Err(Error::InvalidDepth(depth));
        }
        let mut leaf_map = LevelMap::new();
        for (index, value) in leaves {
            if index.checked_shr(depth as u32).unwrap_or(0) != 0 {
                return Err(Error::IndexOutOfRange { index, depth });
            }
            leaf_map.set(index, value);
        }
        let default_nodes = DefaultNodes::build::<H>(depth);
        let (levels, root) = if leaf_map.is_empty() {
            (Vec::new(), *default_nodes.top())
        } else {
            let levels = build_levels::<H>(&leaf_map, depth, &default_nodes);
            let top = levels.last().expect("depth is at least one");
            debug_assert_eq!(top.len(), 1);
            // every in-range index converges to 0 after `depth` halvings
            let root = *top
                .get(0)
                .expect("a non-empty tree always produces the top node at index 0");
            (levels, root)
        };
        Ok(SparseMerkleTree {
            depth,
            leaves: leaf_map,
            default_nodes,
            levels,
            root,
            phantom: PhantomData,
        })
    }

    /// Build a tree with no leaves; its root is the top default node.
    pub fn empty(depth: usize) -> Result<Self> {
        Self::new(Vec::new(), depth)
    }

    /// Merkle root
    pub fn root(&self) -> &H256 {
        &self.root
    }

    /// Lowercase hex rendering of the root.
    pub fn root_hex(&self) -> String {
        self.root.to_hex()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of leaves the tree commits to.
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    /// Check empty of the tree
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// The default-node table for this tree's (depth, hasher) pair.
    pub fn default_nodes(&self) -> &DefaultNodes {
        &self.default_nodes
    }

    /// Generate a membership proof for `index`.
    ///
    /// The proof is the 8-byte big-endian presence bitmask followed by
    /// the present siblings in level order, at most `8 + 32 * depth`
    /// bytes. An empty tree yields the fixed 32-zero-byte marker: there
    /// is nothing to prove against.
    pub fn merkle_proof(&self, index: u64) -> Vec<u8> {
        if self.levels.is_empty() {
            return [0u8; 32].to_vec();
        }
        let mut bitmap: u64 = 0;
        let mut body = Vec::with_capacity(32 * self.depth);
        let mut index = index;
        for level in 0..self.depth {
            let sibling = if index & 1 == 0 { index + 1 } else { index - 1 };
            let sibling_value = if level == 0 {
                self.leaves.get(sibling).map(|leaf| leaf.as_slice())
            } else {
                self.levels[level - 1].get(sibling).map(H256::as_slice)
            };
            if let Some(value) = sibling_value {
                body.extend_from_slice(value);
                bitmap |= 1 << level;
            }
            index >>= 1;
        }
        let mut proof = Vec::with_capacity(BITMAP_BYTES + body.len());
        proof.extend_from_slice(&bitmap.to_be_bytes());
        proof.extend_from_slice(&body);
        proof
    }

    /// Check a proof against a claimed root.
    ///
    /// Uses this tree's default-node table but is otherwise independent
    /// of its contents, so an empty reference tree of matching depth and
    /// hasher verifies proofs generated elsewhere.
    pub fn verify(&self, index: u64, leaf: &[u8], root: &H256, proof: &[u8]) -> bool {
        match MerkleProof::decode(self.depth, proof) {
            Ok(decoded) => decoded.compute_root::<H>(index, leaf, &self.default_nodes) == *root,
            Err(_) => false,
        }
    }
}

/// Derive all levels above the leaves, bottom-up.
fn build_levels<H: Hasher + Default>(
    leaves: &LevelMap<Vec<u8>>,
    depth: usize,
    default_nodes: &DefaultNodes,
) -> Vec<LevelMap<H256>> {
    let mut levels = Vec::with_capacity(depth);
    let mut current = combine_level::<H, _>(leaves, default_nodes.node(0));
    for level in 1..depth {
        let next = combine_level::<H, _>(&current, default_nodes.node(level));
        levels.push(current);
        current = next;
    }
    levels.push(current);
    levels
}

/// Combine one level pairwise into its parent level.
///
/// An even index pairs with `index + 1`, substituting the level default
/// when that sibling is absent. An odd index emits a parent only when its
/// left sibling is absent: a fully populated pair is combined exactly
/// once, by the even pass.
fn combine_level<H, V>(level: &LevelMap<V>, default_node: &H256) -> LevelMap<H256>
where
    H: Hasher + Default,
    V: AsRef<[u8]>,
{
    let mut parents = LevelMap::new();
    for (index, value) in level.iter() {
        if index & 1 == 0 {
            let parent = match level.get(index + 1) {
                Some(sibling) => merge::<H>(value.as_ref(), sibling.as_ref()),
                None => merge::<H>(value.as_ref(), default_node.as_slice()),
            };
            parents.set(index >> 1, parent);
        } else if !level.contains(index - 1) {
            parents.set(index >> 1, merge::<H>(default_node.as_slice(), value.as_ref()));
        }
    }
    parents
}
