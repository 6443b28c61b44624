//! Link Store for Linkshelf.
//!
//! Implements `LinkStoreTrait`, the ordered, in-memory collection of links.
//! Nothing here validates: anything handed to `upsert` is stored as given,
//! and removing an unknown id is a no-op.

use tracing::debug;

use crate::types::link::{Category, Link, LinkId};

/// Whether an `upsert` appended a new link or replaced an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Replaced,
}

/// Trait defining link store operations.
pub trait LinkStoreTrait {
    fn list(&self) -> &[Link];
    fn upsert(&mut self, link: Link) -> UpsertOutcome;
    fn remove(&mut self, id: &LinkId) -> Option<Link>;
    fn filter_by_category(&self, category: Category) -> Vec<&Link>;
    fn get(&self, id: &LinkId) -> Option<&Link>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn contains(&self, id: &LinkId) -> bool {
        self.get(id).is_some()
    }
}

/// In-memory link store; insertion order is display order.
#[derive(Debug, Clone, Default)]
pub struct LinkStore {
    links: Vec<Link>,
}

impl LinkStore {
    pub fn new() -> Self {
        Self { links: Vec::new() }
    }

    /// Builds a store by upserting each link in turn, so a later link with a
    /// repeated id replaces the earlier one.
    pub fn with_links<I: IntoIterator<Item = Link>>(links: I) -> Self {
        let mut store = Self::new();
        for link in links {
            store.upsert(link);
        }
        store
    }

    /// A store preloaded with the starter links shown on a fresh shelf.
    pub fn with_sample_links() -> Self {
        Self::with_links(sample_links())
    }

    fn position(&self, id: &LinkId) -> Option<usize> {
        self.links.iter().position(|l| &l.id == id)
    }
}

impl LinkStoreTrait for LinkStore {
    /// All links, in insertion order.
    fn list(&self) -> &[Link] {
        &self.links
    }

    /// Replaces the link with the same id in place, or appends it.
    fn upsert(&mut self, link: Link) -> UpsertOutcome {
        match self.position(&link.id) {
            Some(idx) => {
                debug!(id = %link.id, "replacing link");
                self.links[idx] = link;
                UpsertOutcome::Replaced
            }
            None => {
                debug!(id = %link.id, "appending link");
                self.links.push(link);
                UpsertOutcome::Inserted
            }
        }
    }

    /// Removes the link with this id, returning it if it was present.
    fn remove(&mut self, id: &LinkId) -> Option<Link> {
        let idx = self.position(id)?;
        debug!(%id, "removing link");
        Some(self.links.remove(idx))
    }

    fn filter_by_category(&self, category: Category) -> Vec<&Link> {
        self.links.iter().filter(|l| l.category == category).collect()
    }

    fn get(&self, id: &LinkId) -> Option<&Link> {
        self.links.iter().find(|l| &l.id == id)
    }

    fn len(&self) -> usize {
        self.links.len()
    }
}

/// The starter links of a fresh shelf.
pub fn sample_links() -> Vec<Link> {
    vec![
        Link::new(
            "1",
            "Personal Portfolio",
            "https://example.com/portfolio",
            Category::Profile,
        )
        .with_description("My personal website and portfolio"),
        Link::new(
            "2",
            "GitHub Profile",
            "https://github.com/username",
            Category::Work,
        )
        .with_description("My coding projects and contributions"),
        Link::new(
            "3",
            "Favorite Recipe Blog",
            "https://example.com/recipes",
            Category::Favorites,
        )
        .with_description("Amazing cooking recipes I love"),
        Link::new(
            "4",
            "The Design of Everyday Things",
            "https://example.com/book1",
            Category::Books,
        )
        .with_description("Great book about design principles"),
    ]
}
