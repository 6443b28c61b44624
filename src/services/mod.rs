// Linkshelf services
// Stateless projections and the collaborators the core talks to: grouping,
// notifications, link opening and settings.

pub mod category_grouper;
pub mod link_opener;
pub mod notification;
pub mod settings_engine;
