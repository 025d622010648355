//! The eagerly materialized item tree and its public build/query surface.
use crate::builder;
use crate::config::BuilderConfig;
use crate::descriptor::ItemDescriptor;
use crate::error::Result;
use crate::index::DescriptorsIndex;
use crate::node::ItemTreeNode;
use crate::orphan::OrphanList;

/// Descriptor id of the synthetic root every `ItemTree` is built around.
pub const SYNTHETIC_ROOT_ID: u32 = 0;

/// The materialized hierarchy of a mailbox's items.
///
/// Rooted at a synthetic node with `descriptor_id == 0`. At most one direct
/// child of that root is the *root folder* -- the unique self-parented
/// descriptor -- everything else hangs off the tree built up from ordinary
/// parent/child relationships.
#[derive(Debug)]
pub struct ItemTree {
    root: ItemTreeNode,
}

impl ItemTree {
    /// A new, empty tree: just the synthetic root, no children.
    pub fn new() -> Self {
        ItemTree {
            root: ItemTreeNode::new(ItemDescriptor::new(SYNTHETIC_ROOT_ID, 0, 0, false, SYNTHETIC_ROOT_ID)),
        }
    }

    pub fn root(&self) -> &ItemTreeNode {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut ItemTreeNode {
        &mut self.root
    }

    /// Walks `index` depth-first and materializes `self`, diverting
    /// unresolvable descriptors into `orphans`. Returns the identifier of
    /// the root folder, if one was found. Uses [`BuilderConfig::default`].
    pub fn build<D: DescriptorsIndex>(
        &mut self,
        index: &mut D,
        orphans: &mut OrphanList,
    ) -> Result<Option<u32>> {
        builder::build(self, index, orphans)
    }

    /// Same as [`ItemTree::build`], with an explicit [`BuilderConfig`].
    pub fn build_with_config<D: DescriptorsIndex>(
        &mut self,
        index: &mut D,
        orphans: &mut OrphanList,
        config: &BuilderConfig,
    ) -> Result<Option<u32>> {
        builder::build_with_config(self, index, orphans, config)
    }

    /// Looks up a node by its descriptor id, anywhere in the tree. Returns
    /// `None` both when the id is absent and in the (practically
    /// unreachable, since `build` enforces the same bound while
    /// constructing the tree) case where the search would exceed the
    /// recursion bound.
    pub fn find_by_identifier(&self, id: u32) -> Option<&ItemTreeNode> {
        self.root.find_by_identifier(id, 0).unwrap_or(None)
    }

    /// Consumes the tree, dropping every descriptor it owns.
    pub fn free(self) {
        drop(self);
    }
}

impl Default for ItemTree {
    fn default() -> Self {
        ItemTree::new()
    }
}
