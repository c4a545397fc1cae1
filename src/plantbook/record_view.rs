//! # Record View Controller
//!
//! One [`RecordView`] backs one screen. It owns the screen's draft and decides when the
//! draft may reach the store.
//!
//! ```text
//!            open(id)                         create()
//!               │                                │
//!               ▼         edit                   ▼
//!          ┌─────────┐ ─────────▶ ┌─────────┐  ┌──────────┐  save   ┌─────────┐
//!          │ Viewing │            │ Editing │  │ Creating │ ──────▶ │ Created │
//!          └─────────┘ ◀───────── └─────────┘  └──────────┘         └─────────┘
//!                     save / cancel
//! ```
//!
//! - `edit` seeds the draft from the committed record, never from an earlier draft.
//! - `cancel` drops the draft without touching the store.
//! - `save` with a name that is blank after trimming is refused with
//!   [`PlantbookError::NameRequired`]; state, draft and store stay as they were.
//! - An edit commits [`PlantFields::for_update`]; the add flow commits
//!   [`PlantFields::for_create`].
//!
//! The store is never held by the view. Each call that needs it borrows it, so any number
//! of views can be open against the same store, and a draft is invisible to everything
//! but its own view until saved.

use crate::commands::{self, CmdResult};
use crate::error::{PlantbookError, Result};
use crate::model::{PlantFields, PlantId, PlantRecord};
use crate::photo::PhotoSource;
use crate::store::PlantStore;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Viewing,
    Editing,
    Creating,
    Created,
}

impl ViewState {
    fn label(self) -> &'static str {
        match self {
            ViewState::Viewing => "viewing",
            ViewState::Editing => "editing",
            ViewState::Creating => "creating",
            ViewState::Created => "created",
        }
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What a successful `cancel` leaves behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelOutcome {
    /// Back to the read-only record
    Viewing,
    /// The add screen was abandoned and may be closed by the caller
    Closed,
}

#[derive(Debug, Clone)]
enum Mode {
    Viewing { id: PlantId },
    Editing { id: PlantId, draft: PlantFields },
    Creating { draft: PlantFields },
    Created { id: PlantId },
}

#[derive(Debug, Clone)]
pub struct RecordView {
    mode: Mode,
}

impl RecordView {
    /// A read-only view of an existing record.
    pub fn open<S: PlantStore>(store: &S, id: PlantId) -> Result<Self> {
        if store.find(id)?.is_none() {
            return Err(PlantbookError::PlantNotFound(id));
        }
        Ok(Self {
            mode: Mode::Viewing { id },
        })
    }

    /// The "add new plant" flow, starting from an empty draft.
    pub fn create() -> Self {
        Self {
            mode: Mode::Creating {
                draft: PlantFields::default(),
            },
        }
    }

    pub fn state(&self) -> ViewState {
        match self.mode {
            Mode::Viewing { .. } => ViewState::Viewing,
            Mode::Editing { .. } => ViewState::Editing,
            Mode::Creating { .. } => ViewState::Creating,
            Mode::Created { .. } => ViewState::Created,
        }
    }

    /// The record this view is bound to, if one exists yet.
    pub fn record_id(&self) -> Option<PlantId> {
        match self.mode {
            Mode::Viewing { id } | Mode::Editing { id, .. } | Mode::Created { id } => Some(id),
            Mode::Creating { .. } => None,
        }
    }

    pub fn draft(&self) -> Option<&PlantFields> {
        match &self.mode {
            Mode::Editing { draft, .. } | Mode::Creating { draft } => Some(draft),
            _ => None,
        }
    }

    /// The committed record, freshly read from the store.
    pub fn current<S: PlantStore>(&self, store: &S) -> Result<Option<PlantRecord>> {
        match self.record_id() {
            Some(id) => store.find(id),
            None => Ok(None),
        }
    }

    pub fn edit<S: PlantStore>(&mut self, store: &S) -> Result<&PlantFields> {
        let id = match self.mode {
            Mode::Viewing { id } => id,
            _ => return Err(self.invalid("edit")),
        };
        let record = store.find(id)?.ok_or(PlantbookError::PlantNotFound(id))?;
        self.mode = Mode::Editing {
            id,
            draft: record.fields(),
        };
        self.draft_mut("edit").map(|draft| &*draft)
    }

    pub fn cancel(&mut self) -> Result<CancelOutcome> {
        match self.mode {
            Mode::Editing { id, .. } => {
                self.mode = Mode::Viewing { id };
                Ok(CancelOutcome::Viewing)
            }
            Mode::Creating { ref mut draft } => {
                *draft = PlantFields::default();
                Ok(CancelOutcome::Closed)
            }
            _ => Err(self.invalid("cancel")),
        }
    }

    pub fn save<S: PlantStore>(&mut self, store: &mut S) -> Result<CmdResult> {
        match &self.mode {
            Mode::Editing { id, draft } => {
                let id = *id;
                Self::validate(draft)?;
                let result = commands::update::run(store, id, draft.for_update())?;
                self.mode = Mode::Viewing { id };
                Ok(result)
            }
            Mode::Creating { draft } => {
                Self::validate(draft)?;
                let result = commands::create::run(store, draft.for_create())?;
                let id = result
                    .affected_plants
                    .first()
                    .map(|plant| plant.id)
                    .ok_or_else(|| PlantbookError::Api("Create returned no plant".into()))?;
                self.mode = Mode::Created { id };
                Ok(result)
            }
            _ => Err(self.invalid("save")),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        self.draft_mut("change the name")?.name = name.into();
        Ok(())
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) -> Result<()> {
        self.draft_mut("change the notes")?.notes = Some(notes.into());
        Ok(())
    }

    pub fn clear_notes(&mut self) -> Result<()> {
        self.draft_mut("clear the notes")?.notes = None;
        Ok(())
    }

    pub fn set_photo(&mut self, photo: impl Into<String>) -> Result<()> {
        self.draft_mut("change the photo")?.photo = Some(photo.into());
        Ok(())
    }

    pub fn clear_photo(&mut self) -> Result<()> {
        self.draft_mut("clear the photo")?.photo = None;
        Ok(())
    }

    /// Takes whatever the photo collaborator produced. `None` leaves the draft photo as
    /// it was. Returns whether the draft changed.
    pub fn apply_photo(&mut self, photo: Option<String>) -> Result<bool> {
        let draft = self.draft_mut("change the photo")?;
        match photo {
            Some(reference) => {
                draft.photo = Some(reference);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Runs `source` and applies its result. The source is not consulted unless the
    /// view holds a draft.
    pub fn acquire_photo<P: PhotoSource>(&mut self, source: &mut P) -> Result<bool> {
        self.draft_mut("change the photo")?;
        let photo = source.acquire();
        self.apply_photo(photo)
    }

    fn draft_mut(&mut self, action: &'static str) -> Result<&mut PlantFields> {
        let state = self.state();
        match &mut self.mode {
            Mode::Editing { draft, .. } | Mode::Creating { draft } => Ok(draft),
            _ => Err(PlantbookError::InvalidTransition {
                action,
                state: state.label(),
            }),
        }
    }

    fn validate(draft: &PlantFields) -> Result<()> {
        if !draft.has_name() {
            tracing::info!(
                target: "plantbook",
                event = "plant_save_rejected",
                reason = "name_required"
            );
            return Err(PlantbookError::NameRequired);
        }
        Ok(())
    }

    fn invalid(&self, action: &'static str) -> PlantbookError {
        PlantbookError::InvalidTransition {
            action,
            state: self.state().label(),
        }
    }
}
