//! Reconstructs the item/folder hierarchy of a PFF mailbox (PST/OST/PAB)
//! from its flat descriptors index.
//!
//! The physical PFF container format, its block/page I/O layer, the
//! offsets index, the local-descriptors tree, and message/folder value
//! parsing are all out of scope here: this crate only consumes a
//! [`DescriptorsIndex`] implementation and produces an [`ItemTree`].
//!
//! ```no_run
//! use pff_item_tree::{ItemTree, OrphanList};
//! # fn example<D: pff_item_tree::DescriptorsIndex>(mut index: D) -> pff_item_tree::Result<()> {
//! let mut tree = ItemTree::new();
//! let mut orphans = OrphanList::new();
//! let root_folder_id = tree.build(&mut index, &mut orphans)?;
//! # let _ = root_folder_id;
//! # Ok(())
//! # }
//! ```

mod builder;
mod config;
mod descriptor;
mod error;
mod index;
mod node;
mod orphan;
mod tree;

pub use config::BuilderConfig;
pub use descriptor::ItemDescriptor;
pub use error::{Error, ErrorKind, Result, ResultExt};
pub use index::{DescriptorsIndex, IndexValue};
pub use node::{Insertion, ItemTreeNode, MAX_DEPTH};
pub use orphan::OrphanList;
pub use tree::{ItemTree, SYNTHETIC_ROOT_ID};
