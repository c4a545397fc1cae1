use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PlantbookError, Result};
use crate::model::{PlantFields, PlantId};
use crate::store::PlantStore;

pub fn run<S: PlantStore>(store: &mut S, id: PlantId, fields: PlantFields) -> Result<CmdResult> {
    let plant = match store.update(id, fields) {
        Ok(plant) => plant,
        Err(err @ PlantbookError::PlantNotFound(_)) => {
            tracing::warn!(
                target: "plantbook",
                event = "plant_update_rejected",
                reason = "not_found",
                id = %id
            );
            return Err(err);
        }
        Err(err) => return Err(err),
    };
    tracing::debug!(target: "plantbook", event = "plant_updated", id = %plant.id);

    let message = CmdMessage::success(format!("Plant updated ({}): {}", plant.id, plant.name));
    let mut result = CmdResult::default().with_affected_plants(vec![plant]);
    result.add_message(message);
    Ok(result)
}
