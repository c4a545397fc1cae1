use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::PlantStore;

pub fn run<S: PlantStore>(store: &S) -> Result<CmdResult> {
    let plants = store.list()?;
    Ok(CmdResult::default().with_listed_plants(plants))
}
