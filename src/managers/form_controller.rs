//! Form Controller for Linkshelf.
//!
//! Holds the draft behind the add/edit dialog and turns it into a finished
//! `Link` on submit. Storing the result is the caller's job.

use std::fmt;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::types::draft::{Draft, DraftField};
use crate::types::errors::ValidationError;
use crate::types::link::{Link, LinkId};
use crate::types::settings::IdScheme;

/// Source of fresh link ids.
pub trait IdGenerator: Send {
    fn next_id(&mut self) -> LinkId;
}

/// Random UUID v4 ids.
#[derive(Debug, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> LinkId {
        LinkId::new(Uuid::new_v4().to_string())
    }
}

/// Monotonic counter ids, optionally prefixed.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }

    /// Starts numbering past the highest `<prefix><n>` id among `existing`.
    pub fn after<'a, I>(prefix: impl Into<String>, existing: I) -> Self
    where
        I: IntoIterator<Item = &'a Link>,
    {
        let prefix = prefix.into();
        let highest = existing
            .into_iter()
            .filter_map(|l| l.id.as_str().strip_prefix(prefix.as_str()))
            .filter_map(|n| n.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            prefix,
            next: highest + 1,
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> LinkId {
        let id = LinkId::new(format!("{}{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

/// Picks the generator for a configured scheme. Sequential ids continue after `existing`.
pub fn id_generator_for<'a, I>(scheme: IdScheme, existing: I) -> Box<dyn IdGenerator>
where
    I: IntoIterator<Item = &'a Link>,
{
    match scheme {
        IdScheme::Uuid => Box::new(UuidIds),
        IdScheme::Sequential => Box::new(SequentialIds::after("", existing)),
    }
}

/// Trait defining the add/edit form interface.
pub trait FormControllerTrait {
    fn begin_create(&mut self);
    fn begin_edit(&mut self, link: &Link);
    fn update_field(&mut self, field: DraftField);
    fn submit(&mut self) -> Result<Link, ValidationError>;
    fn cancel(&mut self);
    fn draft(&self) -> &Draft;
    fn editing_id(&self) -> Option<&LinkId>;
    fn is_editing(&self) -> bool {
        self.editing_id().is_some()
    }
}

pub struct FormController {
    draft: Draft,
    ids: Box<dyn IdGenerator>,
}

impl FormController {
    pub fn new() -> Self {
        Self::with_id_generator(Box::new(UuidIds))
    }

    pub fn with_id_generator(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            draft: Draft::default(),
            ids,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let title_missing = self.draft.title.trim().is_empty();
        let url_missing = self.draft.url.trim().is_empty();
        match (title_missing, url_missing) {
            (true, true) => Err(ValidationError::MissingTitleAndUrl),
            (true, false) => Err(ValidationError::MissingTitle),
            (false, true) => Err(ValidationError::MissingUrl),
            (false, false) => Ok(()),
        }
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FormController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormController")
            .field("draft", &self.draft)
            .finish_non_exhaustive()
    }
}

impl FormControllerTrait for FormController {
    /// Clears the draft and drops any edit target.
    fn begin_create(&mut self) {
        self.draft = Draft::default();
    }

    /// Loads the draft from `link` and targets it for replacement.
    fn begin_edit(&mut self, link: &Link) {
        debug!(id = %link.id, "editing link");
        self.draft = Draft::from_link(link);
    }

    fn update_field(&mut self, field: DraftField) {
        match field {
            DraftField::Title(v) => self.draft.title = v,
            DraftField::Url(v) => self.draft.url = v,
            DraftField::Description(v) => self.draft.description = v,
            DraftField::Category(c) => self.draft.category = c,
        }
    }

    /// Validates the draft and produces the finished link.
    ///
    /// On failure the draft is left as it was so the user can fix it. On
    /// success the draft is reset and the returned link carries either the
    /// edit target's id or a freshly generated one.
    fn submit(&mut self) -> Result<Link, ValidationError> {
        if let Err(e) = self.validate() {
            warn!(missing = ?e.missing_fields(), "rejecting link draft");
            return Err(e);
        }

        let draft = std::mem::take(&mut self.draft);
        let id = match draft.editing {
            Some(id) => id,
            None => self.ids.next_id(),
        };
        let description = draft.description.trim();

        Ok(Link {
            id,
            title: draft.title.trim().to_string(),
            url: draft.url.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            category: draft.category,
        })
    }

    fn cancel(&mut self) {
        self.begin_create();
    }

    fn draft(&self) -> &Draft {
        &self.draft
    }

    fn editing_id(&self) -> Option<&LinkId> {
        self.draft.editing.as_ref()
    }
}
