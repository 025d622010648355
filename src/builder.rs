//! The item tree builder: the heart of this crate. Walks a
//! [`DescriptorsIndex`] depth-first and materializes an [`ItemTree`],
//! performing on-demand parent read-ahead and diverting unresolvable
//! descriptors into an [`OrphanList`].
use log::{debug, info, trace, warn};

use crate::config::BuilderConfig;
use crate::descriptor::ItemDescriptor;
use crate::error::{ErrorKind, Result, ResultExt};
use crate::index::DescriptorsIndex;
use crate::node::{Insertion, ItemTreeNode, MAX_DEPTH};
use crate::orphan::OrphanList;
use crate::tree::ItemTree;

/// Counts materialized while a build runs, surfaced in the `info!` summary
/// logged on completion.
#[derive(Debug, Default, Clone, Copy)]
struct BuildStats {
    nodes: usize,
    orphans: usize,
}

/// Walks `index` and materializes `tree`, diverting unresolvable
/// descriptors into `orphans`. Returns the identifier of the root folder
/// (the unique self-parented descriptor), if one was found.
///
/// Preconditions: `tree` is freshly constructed (childless root). This is
/// not re-checked here; calling `build` twice on the same tree will simply
/// continue inserting into whatever is already there.
pub fn build<D: DescriptorsIndex>(
    tree: &mut ItemTree,
    index: &mut D,
    orphans: &mut OrphanList,
) -> Result<Option<u32>> {
    build_with_config(tree, index, orphans, &BuilderConfig::default())
}

/// Same as [`build`], but with an explicit [`BuilderConfig`] instead of the
/// default policy.
pub fn build_with_config<D: DescriptorsIndex>(
    tree: &mut ItemTree,
    index: &mut D,
    orphans: &mut OrphanList,
    config: &BuilderConfig,
) -> Result<Option<u32>> {
    let mut root_folder_id: Option<u32> = None;
    let mut stats = BuildStats::default();
    let root = index.root();
    visit(index, root, 0, tree, orphans, config, &mut root_folder_id, &mut stats)?;
    info!(
        "build finished: {} node(s) materialized, {} orphan(s), root folder {}",
        stats.nodes,
        stats.orphans,
        root_folder_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "none".to_string())
    );
    Ok(root_folder_id)
}

fn visit<D: DescriptorsIndex>(
    index: &mut D,
    index_node: D::Node,
    depth: u32,
    tree: &mut ItemTree,
    orphans: &mut OrphanList,
    config: &BuilderConfig,
    root_folder_id: &mut Option<u32>,
    stats: &mut BuildStats,
) -> Result<()> {
    if depth > MAX_DEPTH {
        return Err(ErrorKind::OutOfBounds(format!(
            "index traversal exceeded max depth {}",
            MAX_DEPTH
        ))
        .into());
    }

    // Degraded-traversal rule: this is the single intentional error
    // swallow in the whole builder. Everywhere else errors propagate.
    let count = match index.number_of_sub_nodes(index_node) {
        Ok(count) => count,
        Err(err) => {
            debug!(
                "skipping corrupt subtree at depth {}: number_of_sub_nodes failed: {}",
                depth, err
            );
            return Ok(());
        }
    };

    if index.is_deleted(index_node) {
        return Ok(());
    }

    if index.is_leaf(index_node).chain_err(|| ErrorKind::GetFailed("is_leaf".into()))? {
        process_leaf(index, index_node, depth, tree, orphans, config, root_folder_id, stats)?;
    } else {
        for i in 0..count {
            let child = index
                .sub_node_at(index_node, i)
                .chain_err(|| ErrorKind::GetFailed(format!("sub_node_at({})", i)))?;
            visit(index, child, depth + 1, tree, orphans, config, root_folder_id, stats)?;
        }
    }
    Ok(())
}

fn process_leaf<D: DescriptorsIndex>(
    index: &mut D,
    index_node: D::Node,
    depth: u32,
    tree: &mut ItemTree,
    orphans: &mut OrphanList,
    config: &BuilderConfig,
    root_folder_id: &mut Option<u32>,
    stats: &mut BuildStats,
) -> Result<()> {
    let value = index
        .read_value(index_node)
        .chain_err(|| ErrorKind::GetFailed("read_value".into()))?;

    if value.identifier > u32::MAX as u64 {
        return Err(ErrorKind::OutOfBounds(format!(
            "descriptor identifier {} exceeds u32 range",
            value.identifier
        ))
        .into());
    }

    // Copied out before any further index call, for symmetry with the
    // source's cache-invalidation discipline, even though `read_value`
    // already returns owned scalars (see DESIGN.md).
    let id = value.identifier as u32;
    let pid = value.parent_identifier;

    let descriptor = ItemDescriptor::new(id, value.data_identifier, value.local_descriptors_identifier, false, pid);

    if id == pid {
        if root_folder_id.is_some() {
            if config.duplicate_root_folder_is_fatal {
                return Err(ErrorKind::AlreadySet(format!(
                    "second self-parented descriptor {}",
                    id
                ))
                .into());
            }
            warn!("dropping second self-parented descriptor {}", id);
            return Ok(());
        }
        match tree
            .root_mut()
            .insert_subtree_unique(Box::new(ItemTreeNode::new(descriptor)))
        {
            Ok(_inserted) => {
                *root_folder_id = Some(id);
                stats.nodes += 1;
            }
            // A descriptor with this id was already a direct child of the
            // synthetic root (e.g. a normal entry with parent_id == 0).
            // Ordinary duplicate-drop rules apply; this is not the
            // "two root folders" case, so it is not fatal.
            Err(_duplicate) => {
                trace!("dropping self-parented descriptor {} colliding with an existing root child", id);
            }
        }
        return Ok(());
    }

    if tree.root().find_by_identifier(pid, 0)?.is_none() {
        if let Some(parent_index_node) = index
            .get_leaf_by_identifier(pid)
            .chain_err(|| ErrorKind::GetFailed("get_leaf_by_identifier".into()))?
        {
            visit(index, parent_index_node, depth + 1, tree, orphans, config, root_folder_id, stats)?;
        }
    }

    match tree.root_mut().find_by_identifier_mut(pid, 0)? {
        Some(parent) => match parent.insert_child_unique(descriptor) {
            Insertion::Inserted => stats.nodes += 1,
            Insertion::Duplicate => {
                trace!("dropping duplicate descriptor {} under parent {}", id, pid);
            }
        },
        None => {
            orphans.push(Box::new(ItemTreeNode::new(descriptor)));
            stats.orphans += 1;
        }
    }
    Ok(())
}
