//! In-memory projection of a single `IndexValue` record.
use std::cmp::Ordering;

/// Immutable record describing one logical mailbox object (folder, message,
/// attachment). Totally ordered by [`ItemDescriptor::descriptor_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemDescriptor {
    descriptor_id: u32,
    data_id: u64,
    local_descriptors_id: u64,
    recovered: bool,
    parent_id: u32,
}

impl ItemDescriptor {
    /// Builds a new descriptor. `parent_id == descriptor_id` marks the root
    /// folder (the unique self-parented descriptor).
    pub fn new(
        descriptor_id: u32,
        data_id: u64,
        local_descriptors_id: u64,
        recovered: bool,
        parent_id: u32,
    ) -> Self {
        ItemDescriptor {
            descriptor_id,
            data_id,
            local_descriptors_id,
            recovered,
            parent_id,
        }
    }

    pub fn descriptor_id(&self) -> u32 {
        self.descriptor_id
    }

    pub fn data_id(&self) -> u64 {
        self.data_id
    }

    pub fn local_descriptors_id(&self) -> u64 {
        self.local_descriptors_id
    }

    pub fn recovered(&self) -> bool {
        self.recovered
    }

    pub fn parent_id(&self) -> u32 {
        self.parent_id
    }

    /// Returns whether this descriptor is its own parent, i.e. is the root
    /// folder candidate.
    pub fn is_self_parented(&self) -> bool {
        self.descriptor_id == self.parent_id
    }

    /// Signed ordering of two descriptors by `descriptor_id`.
    pub fn compare(a: &ItemDescriptor, b: &ItemDescriptor) -> Ordering {
        a.descriptor_id.cmp(&b.descriptor_id)
    }
}

impl PartialOrd for ItemDescriptor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ItemDescriptor {
    fn cmp(&self, other: &Self) -> Ordering {
        ItemDescriptor::compare(self, other)
    }
}
