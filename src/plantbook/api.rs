//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the record view
//! controller. It is the single entry point for every plantbook client.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the store**: one `PlantbookApi` per running application, created at startup
//!   and passed to whatever needs the catalog
//! - **Dispatches** to the appropriate command function
//! - **Opens screens**: hands out [`RecordView`]s and drives them against its store
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs` and `record_view.rs`
//! - **I/O operations**: no stdout, stderr, or formatting
//!
//! ## Generic Over PlantStore
//!
//! `PlantbookApi<S: PlantStore>` is generic over the storage backend, so the same facade
//! runs against any store implementation.

use crate::commands;
use crate::error::Result;
use crate::model::{PlantFields, PlantId};
use crate::photo::PhotoSource;
use crate::record_view::{CancelOutcome, RecordView};
use crate::store::PlantStore;
use std::path::PathBuf;

/// The main API facade for plantbook operations.
pub struct PlantbookApi<S: PlantStore> {
    store: S,
    config_dir: PathBuf,
}

impl<S: PlantStore> PlantbookApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    pub fn create_plant(&mut self, fields: PlantFields) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, fields)
    }

    pub fn update_plant(
        &mut self,
        id: PlantId,
        fields: PlantFields,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, fields)
    }

    pub fn list_plants(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn view_plant(&self, id: PlantId) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, id)
    }

    pub fn open_record(&self, id: PlantId) -> Result<RecordView> {
        RecordView::open(&self.store, id)
    }

    pub fn new_record(&self) -> RecordView {
        RecordView::create()
    }

    pub fn edit(&self, view: &mut RecordView) -> Result<()> {
        view.edit(&self.store).map(|_| ())
    }

    pub fn save(&mut self, view: &mut RecordView) -> Result<commands::CmdResult> {
        view.save(&mut self.store)
    }

    pub fn cancel(&self, view: &mut RecordView) -> Result<CancelOutcome> {
        view.cancel()
    }

    pub fn acquire_photo<P: PhotoSource>(
        &self,
        view: &mut RecordView,
        source: &mut P,
    ) -> Result<bool> {
        view.acquire_photo(source)
    }

    /// The committed record behind `view`, as the store has it now.
    pub fn current(&self, view: &RecordView) -> Result<commands::CmdResult> {
        let plants = view.current(&self.store)?.into_iter().collect();
        Ok(commands::CmdResult::default().with_listed_plants(plants))
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlantbookError;
    use crate::record_view::ViewState;
    use crate::store::memory::InMemoryStore;

    fn api() -> PlantbookApi<InMemoryStore> {
        PlantbookApi::new(InMemoryStore::new(), PathBuf::from(".plantbook"))
    }

    #[test]
    fn create_and_update_dispatch_to_commands() {
        let mut api = api();
        let created = api.create_plant(PlantFields::new("Ficus")).unwrap();
        assert_eq!(created.affected_plants[0].id, PlantId(1));

        let updated = api
            .update_plant(PlantId(1), PlantFields::new("Ficus Lyrata"))
            .unwrap();
        assert_eq!(updated.affected_plants[0].name, "Ficus Lyrata");
        assert_eq!(api.list_plants().unwrap().listed_plants.len(), 1);
    }

    #[test]
    fn update_unknown_id_surfaces_not_found() {
        let mut api = api();
        assert!(matches!(
            api.update_plant(PlantId(4), PlantFields::new("x")),
            Err(PlantbookError::PlantNotFound(PlantId(4)))
        ));
    }

    #[test]
    fn screens_are_driven_against_owned_store() {
        let mut api = api();
        let mut add = api.new_record();
        add.set_name("Aloe").unwrap();
        api.save(&mut add).unwrap();
        assert_eq!(add.state(), ViewState::Created);

        let mut detail = api.open_record(PlantId(1)).unwrap();
        api.edit(&mut detail).unwrap();
        detail.set_notes("sunny").unwrap();
        api.save(&mut detail).unwrap();

        let current = api.current(&detail).unwrap().listed_plants;
        assert_eq!(current[0].notes.as_deref(), Some("sunny"));
    }

    #[test]
    fn current_of_add_screen_is_empty() {
        let api = api();
        let view = api.new_record();
        assert!(api.current(&view).unwrap().listed_plants.is_empty());
    }
}
