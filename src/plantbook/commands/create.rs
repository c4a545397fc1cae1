use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::PlantFields;
use crate::store::PlantStore;

pub fn run<S: PlantStore>(store: &mut S, fields: PlantFields) -> Result<CmdResult> {
    let plant = store.create(fields)?;
    tracing::debug!(
        target: "plantbook",
        event = "plant_created",
        id = %plant.id,
        has_photo = plant.photo.is_some()
    );

    let message = CmdMessage::success(format!("Plant added: {}", plant.name));
    let mut result = CmdResult::default().with_affected_plants(vec![plant]);
    result.add_message(message);
    Ok(result)
}
