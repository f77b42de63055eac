// src/application/commands/records/update.rs
use super::RecordCommandService;
use crate::{
    application::{
        dto::RecordDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        record::{AttributeValues, RecordId},
        slug::SaveEvent,
    },
};

pub struct UpdateRecordCommand {
    pub id: i64,
    /// Attributes to overwrite; others keep their stored value.
    pub attributes: AttributeValues,
}

impl RecordCommandService {
    pub async fn update_record(&self, command: UpdateRecordCommand) -> ApplicationResult<RecordDto> {
        let id = RecordId::new(command.id)?;
        let mut record = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("record not found"))?;

        let now = self.clock.now();
        record.merge_attributes(command.attributes, now);

        let slugs = self
            .slugs
            .orchestrate(&self.slug_config, &record.attributes, SaveEvent::Update, Some(id))
            .await?;
        if let Some(mapping) = slugs {
            record.attach_slugs(self.slug_config.target_field(), mapping, now);
        }

        let updated = self.write_repo.update(record).await?;
        Ok(updated.into())
    }
}
