// Linkshelf Category Grouper
// Pure projection of the link collection into the fixed category groups.
// Nothing is cached: callers re-derive the view from the store on every render.

use serde::Serialize;

use crate::types::link::{Category, Link};

/// Hint shown in place of links when a group is empty.
pub const EMPTY_GROUP_HINT: &str = "No links in this category yet";

/// The links of one category, in store order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup<'a> {
    pub category: Category,
    pub label: &'static str,
    pub count: usize,
    pub links: Vec<&'a Link>,
}

impl CategoryGroup<'_> {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Aggregate counts shown under the groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LinkStats {
    pub total: usize,
    /// Categories holding at least one link.
    pub active_categories: usize,
}

/// Partitions `links` into one group per category, in `Category::ALL` order.
/// Empty categories are kept with a count of 0.
pub fn group_links(links: &[Link]) -> Vec<CategoryGroup<'_>> {
    Category::ALL
        .iter()
        .map(|&category| {
            let members: Vec<&Link> = links.iter().filter(|l| l.category == category).collect();
            CategoryGroup {
                category,
                label: category.label(),
                count: members.len(),
                links: members,
            }
        })
        .collect()
}

pub fn link_stats(links: &[Link]) -> LinkStats {
    let active_categories = Category::ALL
        .iter()
        .filter(|&&c| links.iter().any(|l| l.category == c))
        .count();
    LinkStats {
        total: links.len(),
        active_categories,
    }
}
