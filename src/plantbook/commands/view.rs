use crate::commands::CmdResult;
use crate::error::{PlantbookError, Result};
use crate::model::PlantId;
use crate::store::PlantStore;

pub fn run<S: PlantStore>(store: &S, id: PlantId) -> Result<CmdResult> {
    let plant = store.find(id)?.ok_or(PlantbookError::PlantNotFound(id))?;
    Ok(CmdResult::default().with_listed_plants(vec![plant]))
}
