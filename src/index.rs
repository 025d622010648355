//! The `DescriptorsIndex` contract: the lazy, on-disk B-tree the builder
//! consumes. Only the contract lives here; the physical PFF page format is
//! out of scope for this crate (see module-level docs in `lib.rs`).
use crate::error::Result;

/// One record as stored in the descriptors index. Tiny and `Copy`, so
/// [`DescriptorsIndex::read_value`] can return it by value instead of a
/// cache-scoped borrow tied to the index's internal cache lifetime (see
/// DESIGN.md).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexValue {
    /// 64-bit on disk; must fit in `u32` to be a valid descriptor id.
    pub identifier: u64,
    pub parent_identifier: u32,
    pub data_identifier: u64,
    pub local_descriptors_identifier: u64,
}

/// Capability set the builder needs from the on-disk descriptors index.
///
/// `IoHandle`/`IndexCache` from the original design are not separate
/// parameters here -- they are whatever state an implementation of this
/// trait keeps internally. A real PFF-backed implementation and an
/// in-memory test fixture are equally legal implementors.
pub trait DescriptorsIndex {
    /// Opaque handle identifying a node of the lazy on-disk tree.
    type Node: Copy + Eq;

    /// The root of the index.
    fn root(&self) -> Self::Node;

    /// Whether `node` is marked deleted. Never fails; a deleted node is
    /// always skipped silently.
    fn is_deleted(&self, node: Self::Node) -> bool;

    /// Whether `node` is a leaf (carries an `IndexValue`) rather than an
    /// interior node (carries sub-nodes). May perform I/O.
    fn is_leaf(&mut self, node: Self::Node) -> Result<bool>;

    /// Number of sub-nodes of an interior `node`. This is the one call
    /// whose failure the builder treats as non-fatal (the degraded
    /// traversal rule).
    fn number_of_sub_nodes(&mut self, node: Self::Node) -> Result<usize>;

    /// The `i`th sub-node of interior `node`.
    fn sub_node_at(&mut self, node: Self::Node, i: usize) -> Result<Self::Node>;

    /// Reads the value of a leaf `node`.
    fn read_value(&mut self, node: Self::Node) -> Result<IndexValue>;

    /// Point lookup used for parent read-ahead: finds the leaf whose
    /// `IndexValue::identifier` equals `id`, if present and not deleted.
    fn get_leaf_by_identifier(&mut self, id: u32) -> Result<Option<Self::Node>>;
}
