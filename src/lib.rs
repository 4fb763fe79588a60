//! Fixed-depth sparse merkle tree over a sparse `u64` index space.
//!
//! A tree is built once from a complete leaf set and is read-only
//! afterward. Only nodes that differ from the per-level default nodes are
//! stored, so the tree commits to an index space of `2^depth` positions
//! without materializing it. Membership proofs are compact: an 8-byte
//! presence bitmask plus the non-default siblings on the leaf's path, and
//! they verify against a bare root without access to the tree.
//!
//! # Examples
//!
//! ```
//! use sparse_merkle_root::{
//!     sha256::Sha256Hasher, verify, SparseMerkleTree, DEFAULT_TREE_DEPTH,
//! };
//!
//! // commit to a sparse slot -> transaction-hash mapping
//! let slots = vec![
//!     (101u64, b"tx1".to_vec()),
//!     (201, b"tx2".to_vec()),
//!     (303, b"tx3".to_vec()),
//! ];
//! let tree = SparseMerkleTree::<Sha256Hasher>::new(slots, DEFAULT_TREE_DEPTH)
//!     .expect("construct");
//! println!("tree root is {}", tree.root_hex());
//!
//! // anyone holding only the root can check a claimed slot value
//! let proof = tree.merkle_proof(303);
//! assert!(verify::<Sha256Hasher>(
//!     DEFAULT_TREE_DEPTH,
//!     303,
//!     b"tx3",
//!     tree.root(),
//!     &proof,
//! ));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "blake2b")]
pub mod blake2b;
pub mod default_nodes;
pub mod error;
pub mod h256;
pub mod level_map;
pub mod merge;
pub mod merkle_proof;
pub mod sha256;
pub mod traits;
pub mod tree;

pub use default_nodes::DefaultNodes;
pub use error::{Error, Result};
pub use h256::H256;
pub use level_map::LevelMap;
pub use merkle_proof::{verify, MerkleProof};
pub use traits::Hasher;
pub use tree::SparseMerkleTree;

/// Tree depth used by the slot commitment trees
pub const DEFAULT_TREE_DEPTH: usize = 64;
/// Deepest tree the 64-bit proof bitmask can describe
pub const MAX_TREE_DEPTH: usize = 64;

cfg_if::cfg_if! {
    if #[cfg(feature = "std")] {
        use std::collections;
        use std::vec;
        use std::string;
    } else {
        extern crate alloc;
        use alloc::collections;
        use alloc::vec;
        use alloc::string;
    }
}
