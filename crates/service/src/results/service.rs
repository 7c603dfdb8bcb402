use std::sync::Arc;

use sea_orm::{ActiveValue::NotSet, Set};
use tracing::{info, instrument};

use models::lab_result;

use super::domain::ResultInput;
use super::repository::ResultRepository;
use crate::errors::ServiceError;
use crate::ids::next_external_id;

/// Result business service. Same contract as the lab service: reads return
/// `Ok(None)` on a miss, update and delete fail with `NotFound`.
pub struct ResultService<R: ResultRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: ResultRepository + ?Sized> ResultService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self, input), fields(lab_id = input.lab_id))]
    pub async fn create(&self, input: ResultInput) -> Result<lab_result::Model, ServiceError> {
        let external_id = next_external_id()?;
        let am = lab_result::ActiveModel {
            id: NotSet,
            external_id: Set(external_id.clone()),
            lab_id: Set(input.lab_id),
            nif: Set(input.nif),
            patient_name: Set(input.patient_name),
            date: Set(input.date),
            data: Set(input.data),
            status: Set(input.status),
        };
        self.repo.save(am).await?;

        let created = self
            .repo
            .find_by_external_id(&external_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("result"))?;
        info!(id = created.id, external_id = %created.external_id, "result_created");
        Ok(created)
    }

    /// Full replacement of every mutable field, including `lab_id`.
    #[instrument(skip(self, input), fields(external_id = %external_id))]
    pub async fn update(&self, external_id: &str, input: ResultInput) -> Result<lab_result::Model, ServiceError> {
        let existing = self
            .repo
            .find_by_external_id(external_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("result"))?;

        let mut am: lab_result::ActiveModel = existing.into();
        am.lab_id = Set(input.lab_id);
        am.nif = Set(input.nif);
        am.patient_name = Set(input.patient_name);
        am.date = Set(input.date);
        am.data = Set(input.data);
        am.status = Set(input.status);
        self.repo.save(am).await?;

        let updated = self
            .repo
            .find_by_external_id(external_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("result"))?;
        info!(id = updated.id, status = %updated.status, "result_updated");
        Ok(updated)
    }

    pub async fn get_all(&self) -> Result<Vec<lab_result::Model>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn get_by_external_id(&self, external_id: &str) -> Result<Option<lab_result::Model>, ServiceError> {
        self.repo.find_by_external_id(external_id).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<lab_result::Model>, ServiceError> {
        self.repo.find_by_id(id).await
    }

    pub async fn get_by_nif(&self, nif: &str) -> Result<Option<lab_result::Model>, ServiceError> {
        self.repo.find_by_nif(nif).await
    }

    pub async fn get_by_lab_id(&self, lab_id: i32) -> Result<Vec<lab_result::Model>, ServiceError> {
        self.repo.find_all_by_lab_id(lab_id).await
    }

    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("result"))?;
        self.repo.delete(existing).await?;
        info!(id, "result_deleted");
        Ok(())
    }
}
