//! The six end-to-end build scenarios plus a handful of edge cases.
use pff_item_tree::{BuilderConfig, ErrorKind, ItemTree, OrphanList};
use pff_item_tree_tests::fixture::FakeIndex;

fn child_ids(node: &pff_item_tree::ItemTreeNode) -> Vec<u32> {
    (0..node.number_of_children())
        .map(|i| node.child_at(i).unwrap().value().descriptor_id())
        .collect()
}

#[test]
fn linear_chain() {
    let _ = env_logger::try_init();
    let mut index = FakeIndex::from_leaves(&[(1, 1, 0, 0), (2, 1, 0, 0), (3, 2, 0, 0)]);
    let mut tree = ItemTree::new();
    let mut orphans = OrphanList::new();

    let root_folder = tree.build(&mut index, &mut orphans).unwrap();

    assert_eq!(root_folder, Some(1));
    assert!(orphans.is_empty());

    assert_eq!(child_ids(tree.root()), vec![1]);
    let one = tree.find_by_identifier(1).unwrap();
    assert_eq!(child_ids(one), vec![2]);
    let two = tree.find_by_identifier(2).unwrap();
    assert_eq!(child_ids(two), vec![3]);
    assert!(tree.find_by_identifier(3).unwrap().number_of_children() == 0);
}

#[test]
fn out_of_order_discovery_requires_read_ahead() {
    let _ = env_logger::try_init();
    // Discovered in reverse order; all are independently reachable via
    // get_leaf_by_identifier since they all live in the flat fixture.
    let mut index = FakeIndex::from_leaves(&[(3, 2, 0, 0), (2, 1, 0, 0), (1, 1, 0, 0)]);
    let mut tree = ItemTree::new();
    let mut orphans = OrphanList::new();

    let root_folder = tree.build(&mut index, &mut orphans).unwrap();

    assert_eq!(root_folder, Some(1));
    assert!(orphans.is_empty());
    assert_eq!(child_ids(tree.root()), vec![1]);
    assert_eq!(child_ids(tree.find_by_identifier(1).unwrap()), vec![2]);
    assert_eq!(child_ids(tree.find_by_identifier(2).unwrap()), vec![3]);
}

#[test]
fn true_orphan_when_parent_is_unresolvable() {
    let _ = env_logger::try_init();
    let mut index = FakeIndex::from_leaves(&[(1, 1, 0, 0), (4, 99, 0, 0)]);
    let mut tree = ItemTree::new();
    let mut orphans = OrphanList::new();

    let root_folder = tree.build(&mut index, &mut orphans).unwrap();

    assert_eq!(root_folder, Some(1));
    assert_eq!(child_ids(tree.root()), vec![1]);
    assert_eq!(orphans.len(), 1);
    assert_eq!(orphans.iter().next().unwrap().value().descriptor_id(), 4);
}

#[test]
fn duplicate_descriptor_is_silently_dropped() {
    let _ = env_logger::try_init();
    let mut index = FakeIndex::from_leaves(&[(1, 1, 0, 0), (2, 1, 0, 0), (2, 1, 7, 0)]);
    let mut tree = ItemTree::new();
    let mut orphans = OrphanList::new();

    tree.build(&mut index, &mut orphans).unwrap();

    let one = tree.find_by_identifier(1).unwrap();
    assert_eq!(one.number_of_children(), 1);
    let two = one.child_at(0).unwrap();
    assert_eq!(two.value().descriptor_id(), 2);
    assert_eq!(two.value().data_id(), 0, "first insertion wins, second is dropped");
}

#[test]
fn double_root_folder_is_fatal_by_default() {
    let _ = env_logger::try_init();
    let mut index = FakeIndex::from_leaves(&[(1, 1, 0, 0), (5, 5, 0, 0)]);
    let mut tree = ItemTree::new();
    let mut orphans = OrphanList::new();
    let orphans_len_before = orphans.len();

    let err = tree.build(&mut index, &mut orphans).unwrap_err();

    assert!(matches!(err.kind(), ErrorKind::AlreadySet(_)));
    assert_eq!(orphans.len(), orphans_len_before);
}

#[test]
fn double_root_folder_can_be_configured_to_warn_and_drop() {
    let _ = env_logger::try_init();
    let mut index = FakeIndex::from_leaves(&[(1, 1, 0, 0), (5, 5, 0, 0)]);
    let mut tree = ItemTree::new();
    let mut orphans = OrphanList::new();
    let config = BuilderConfig {
        duplicate_root_folder_is_fatal: false,
    };

    let root_folder = tree
        .build_with_config(&mut index, &mut orphans, &config)
        .unwrap();

    assert_eq!(root_folder, Some(1), "first self-parented descriptor still wins");
    assert!(tree.find_by_identifier(5).is_none());
}

#[test]
fn corrupt_subtree_is_tolerated() {
    let _ = env_logger::try_init();
    let mut index = FakeIndex::new();
    let a = index.add_interior(0);
    index.add_leaf(a, 10, 1, 0, 0);
    index.mark_corrupt(a);

    let b = index.add_interior(0);
    index.add_leaf(b, 1, 1, 0, 0);
    index.add_leaf(b, 2, 1, 0, 0);

    let mut tree = ItemTree::new();
    let mut orphans = OrphanList::new();

    let root_folder = tree.build(&mut index, &mut orphans).unwrap();

    assert_eq!(root_folder, Some(1));
    assert!(tree.find_by_identifier(10).is_none(), "corrupt subtree A contributes nothing");
    assert_eq!(child_ids(tree.find_by_identifier(1).unwrap()), vec![2]);
    assert!(orphans.is_empty());
}

#[test]
fn deleted_interior_node_masks_its_subtree() {
    let _ = env_logger::try_init();
    let mut index = FakeIndex::new();
    let a = index.add_interior(0);
    index.add_leaf(a, 10, 1, 0, 0);
    index.mark_deleted(a);

    let b = index.add_interior(0);
    index.add_leaf(b, 1, 1, 0, 0);

    let mut tree = ItemTree::new();
    let mut orphans = OrphanList::new();
    tree.build(&mut index, &mut orphans).unwrap();

    assert!(tree.find_by_identifier(10).is_none());
    assert!(tree.find_by_identifier(1).is_some());
}

#[test]
fn depth_guard_fails_closed_without_leaking() {
    let _ = env_logger::try_init();
    let mut index = FakeIndex::new();
    let mut cursor = 0usize;
    for _ in 0..(pff_item_tree::MAX_DEPTH as usize + 2) {
        cursor = index.add_interior(cursor);
    }
    index.add_leaf(cursor, 1, 1, 0, 0);

    let mut tree = ItemTree::new();
    let mut orphans = OrphanList::new();

    let err = tree.build(&mut index, &mut orphans).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::OutOfBounds(_)));
}

#[test]
fn identifier_overflowing_u32_is_rejected() {
    let _ = env_logger::try_init();
    let mut index = FakeIndex::from_leaves(&[(u32::MAX as u64 + 1, 0, 0, 0)]);
    let mut tree = ItemTree::new();
    let mut orphans = OrphanList::new();

    let err = tree.build(&mut index, &mut orphans).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::OutOfBounds(_)));
}
