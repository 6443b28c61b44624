// Linkshelf state managers
// Managers own the mutable state: the stored links and the add/edit form draft.

pub mod form_controller;
pub mod link_store;
