//! Property-based tests for LinkStore operations.
//!
//! These check the store against a simple model for arbitrary sequences of
//! upserts and removes, and check that the category groups partition the store.

use std::collections::{HashMap, HashSet};

use linkshelf::managers::link_store::{LinkStore, LinkStoreTrait};
use linkshelf::services::category_grouper::group_links;
use linkshelf::types::link::{Category, Link, LinkId};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum StoreOp {
    Upsert(Link),
    Remove(String),
}

fn arb_category() -> impl Strategy<Value = Category> {
    proptest::sample::select(Category::ALL.to_vec())
}

/// Ids come from a small pool so upserts and removes collide often.
fn arb_id() -> impl Strategy<Value = String> {
    (0..8u8).prop_map(|n| format!("id-{}", n))
}

fn arb_link() -> impl Strategy<Value = Link> {
    (
        arb_id(),
        "[a-zA-Z][a-zA-Z0-9 ]{0,20}",
        "https://[a-z]{3,10}\\.com",
        proptest::option::of("[a-z ]{0,20}"),
        arb_category(),
    )
        .prop_map(|(id, title, url, description, category)| Link {
            id: LinkId::from(id),
            title,
            url,
            description,
            category,
        })
}

fn arb_ops() -> impl Strategy<Value = Vec<StoreOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => arb_link().prop_map(StoreOp::Upsert),
            1 => arb_id().prop_map(StoreOp::Remove),
        ],
        0..60,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// After any sequence of upserts and removes, the store holds exactly one
    /// entry per live id, carrying the most recent values for it.
    #[test]
    fn store_matches_latest_value_per_id(ops in arb_ops()) {
        let mut store = LinkStore::new();
        let mut model: HashMap<LinkId, Link> = HashMap::new();

        for op in &ops {
            match op {
                StoreOp::Upsert(link) => {
                    store.upsert(link.clone());
                    model.insert(link.id.clone(), link.clone());
                }
                StoreOp::Remove(id) => {
                    let id = LinkId::from(id.as_str());
                    store.remove(&id);
                    model.remove(&id);
                    prop_assert!(!store.list().iter().any(|l| l.id == id));
                }
            }
        }

        let ids: HashSet<&LinkId> = store.list().iter().map(|l| &l.id).collect();
        prop_assert_eq!(ids.len(), store.len(), "ids must be unique");
        prop_assert_eq!(store.len(), model.len());
        for link in store.list() {
            prop_assert_eq!(Some(link), model.get(&link.id));
        }
    }

    /// Removing an id that is not stored leaves the list unchanged.
    #[test]
    fn removing_absent_id_is_noop(links in prop::collection::vec(arb_link(), 0..20)) {
        let mut store = LinkStore::with_links(links);
        let before = store.list().to_vec();

        store.remove(&LinkId::from("not-in-pool"));
        prop_assert_eq!(store.list(), before.as_slice());
    }

    /// Every stored link lands in exactly one category group, and the union of
    /// `filter_by_category` over all categories rebuilds the list.
    #[test]
    fn categories_partition_the_store(links in prop::collection::vec(arb_link(), 0..30)) {
        let store = LinkStore::with_links(links);

        let mut rebuilt: Vec<&Link> = Category::ALL
            .iter()
            .flat_map(|&c| store.filter_by_category(c))
            .collect();
        let mut expected: Vec<&Link> = store.list().iter().collect();
        rebuilt.sort_by(|a, b| a.id.cmp(&b.id));
        expected.sort_by(|a, b| a.id.cmp(&b.id));
        prop_assert_eq!(rebuilt, expected);

        let groups = group_links(store.list());
        prop_assert_eq!(groups.len(), Category::ALL.len());
        let grouped: usize = groups.iter().map(|g| g.count).sum();
        prop_assert_eq!(grouped, store.len());
        for group in &groups {
            prop_assert_eq!(group.count, group.links.len());
            prop_assert!(group.links.iter().all(|l| l.category == group.category));
        }
    }
}
