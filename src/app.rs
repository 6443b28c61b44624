//! App Core for Linkshelf.
//!
//! Owns the link store, the add/edit form and the outside collaborators, and
//! turns user actions into calls on them. Every action runs to completion
//! before the next one; nothing here blocks or spawns.

use tracing::info;

use crate::managers::form_controller::{id_generator_for, FormController, FormControllerTrait};
use crate::managers::link_store::{LinkStore, LinkStoreTrait, UpsertOutcome};
use crate::services::category_grouper::{self, CategoryGroup, LinkStats};
use crate::services::link_opener::LinkOpener;
use crate::services::notification::NotificationSink;
use crate::types::draft::{Draft, DraftField};
use crate::types::errors::{LinkError, ValidationError};
use crate::types::link::{Link, LinkId};
use crate::types::notification::Notification;
use crate::types::settings::LinkshelfSettings;

pub const MSG_ADDED: &str = "Link added successfully";
pub const MSG_UPDATED: &str = "Link updated successfully";
pub const MSG_DELETED: &str = "Link deleted successfully";

pub struct App {
    store: LinkStore,
    form: FormController,
    notifications: Box<dyn NotificationSink>,
    opener: Box<dyn LinkOpener>,
    dialog_open: bool,
}

impl App {
    /// Builds an app from settings: seeds the starter links if asked to and
    /// picks the id scheme.
    pub fn new(
        settings: &LinkshelfSettings,
        notifications: Box<dyn NotificationSink>,
        opener: Box<dyn LinkOpener>,
    ) -> Self {
        let store = if settings.general.seed_sample_links {
            LinkStore::with_sample_links()
        } else {
            LinkStore::new()
        };
        let ids = id_generator_for(settings.general.id_scheme, store.list());
        Self::from_parts(
            store,
            FormController::with_id_generator(ids),
            notifications,
            opener,
        )
    }

    pub fn from_parts(
        store: LinkStore,
        form: FormController,
        notifications: Box<dyn NotificationSink>,
        opener: Box<dyn LinkOpener>,
    ) -> Self {
        Self {
            store,
            form,
            notifications,
            opener,
            dialog_open: false,
        }
    }

    pub fn links(&self) -> &[Link] {
        self.store.list()
    }

    pub fn store(&self) -> &LinkStore {
        &self.store
    }

    pub fn draft(&self) -> &Draft {
        self.form.draft()
    }

    pub fn is_editing(&self) -> bool {
        self.form.is_editing()
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn dialog_title(&self) -> &'static str {
        if self.form.is_editing() {
            "Edit Link"
        } else {
            "Add New Link"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.form.is_editing() {
            "Update Link"
        } else {
            "Add Link"
        }
    }

    /// Opens the dialog on an empty draft.
    pub fn begin_create(&mut self) {
        self.form.begin_create();
        self.dialog_open = true;
    }

    /// Opens the dialog on a copy of the stored link `id`.
    pub fn begin_edit(&mut self, id: &LinkId) -> Result<(), LinkError> {
        let link = self
            .store
            .get(id)
            .ok_or_else(|| LinkError::NotFound(id.to_string()))?;
        self.form.begin_edit(link);
        self.dialog_open = true;
        Ok(())
    }

    pub fn update_field(&mut self, field: DraftField) {
        self.form.update_field(field);
    }

    /// Submits the draft. A valid draft is stored and the dialog closes; an
    /// invalid one is reported and the dialog stays open with the draft intact.
    pub fn submit(&mut self) -> Result<Link, ValidationError> {
        let link = match self.form.submit() {
            Ok(link) => link,
            Err(e) => {
                self.notifications.notify(Notification::error(e.to_string()));
                return Err(e);
            }
        };

        let message = match self.store.upsert(link.clone()) {
            UpsertOutcome::Inserted => MSG_ADDED,
            UpsertOutcome::Replaced => MSG_UPDATED,
        };
        info!(id = %link.id, category = %link.category, "{}", message);
        self.notifications.notify(Notification::success(message));
        self.dialog_open = false;
        Ok(link)
    }

    /// Discards the draft and closes the dialog. The store is untouched.
    pub fn cancel(&mut self) {
        self.form.cancel();
        self.dialog_open = false;
    }

    /// Deletes the link `id`. Deleting an unknown id is not an error and is
    /// confirmed the same way.
    pub fn delete(&mut self, id: &LinkId) -> Option<Link> {
        let removed = self.store.remove(id);
        info!(%id, found = removed.is_some(), "{}", MSG_DELETED);
        self.notifications.notify(Notification::success(MSG_DELETED));
        removed
    }

    /// Hands the link's URL to the opener and returns it.
    pub fn open_link(&mut self, id: &LinkId) -> Result<String, LinkError> {
        let url = self
            .store
            .get(id)
            .map(|l| l.url.clone())
            .ok_or_else(|| LinkError::NotFound(id.to_string()))?;
        self.opener.open(&url);
        Ok(url)
    }

    /// The grouped view, derived fresh from the store.
    pub fn groups(&self) -> Vec<CategoryGroup<'_>> {
        category_grouper::group_links(self.store.list())
    }

    pub fn stats(&self) -> LinkStats {
        category_grouper::link_stats(self.store.list())
    }
}
