// src/application/commands/records/create.rs
use super::RecordCommandService;
use crate::{
    application::{
        dto::RecordDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        record::{AttributeValues, NewRecord},
        slug::SaveEvent,
    },
};

pub struct CreateRecordCommand {
    pub attributes: AttributeValues,
}

impl CreateRecordCommand {
    pub fn builder() -> CreateRecordCommandBuilder {
        CreateRecordCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateRecordCommandBuilder {
    attributes: AttributeValues,
}

impl CreateRecordCommandBuilder {
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn build(self) -> Result<CreateRecordCommand, &'static str> {
        if self.attributes.keys().any(String::is_empty) {
            return Err("attribute names cannot be empty");
        }
        Ok(CreateRecordCommand {
            attributes: self.attributes,
        })
    }
}

impl RecordCommandService {
    pub async fn create_record(&self, command: CreateRecordCommand) -> ApplicationResult<RecordDto> {
        if command.attributes.keys().any(String::is_empty) {
            return Err(ApplicationError::validation("attribute names cannot be empty"));
        }

        let now = self.clock.now();
        let mut record = NewRecord::new(command.attributes, now);

        let slugs = self
            .slugs
            .orchestrate(&self.slug_config, &record.attributes, SaveEvent::Create, None)
            .await?;
        if let Some(mapping) = slugs {
            record.attach_slugs(self.slug_config.target_field(), mapping);
        }

        let created = self.write_repo.insert(record).await?;
        tracing::debug!(id = %created.id, "record created");
        Ok(created.into())
    }
}
