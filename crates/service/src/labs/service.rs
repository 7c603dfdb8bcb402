use std::sync::Arc;

use sea_orm::{ActiveValue::NotSet, Set};
use tracing::{debug, info, instrument};

use models::lab;

use super::domain::LabInput;
use super::repository::LabRepository;
use crate::errors::ServiceError;
use crate::ids::next_external_id;

/// Lab business service independent of web framework.
///
/// Reads report absence as `Ok(None)`; update and delete report it as
/// `ServiceError::NotFound`.
pub struct LabService<R: LabRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: LabRepository + ?Sized> LabService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Create a lab with a freshly generated external id.
    ///
    /// # Examples
    /// ```
    /// use service::labs::{domain::LabInput, repository::mock::MockLabRepository, LabService};
    /// use std::sync::Arc;
    /// let svc = LabService::new(Arc::new(MockLabRepository::default()));
    /// let input = LabInput { key_name: "LAB-X".into(), name: "X Lab".into(), description: Some("d".into()) };
    /// let lab = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(lab.key_name, "LAB-X");
    /// assert!(lab.id > 0);
    /// assert_eq!(lab.external_id.len(), 26);
    /// ```
    #[instrument(skip(self, input), fields(key_name = %input.key_name))]
    pub async fn create(&self, input: LabInput) -> Result<lab::Model, ServiceError> {
        let external_id = next_external_id()?;
        let am = lab::ActiveModel {
            id: NotSet,
            external_id: Set(external_id.clone()),
            key_name: Set(input.key_name),
            name: Set(input.name),
            description: Set(input.description),
        };
        self.repo.save(am).await?;

        let created = self
            .repo
            .find_by_external_id(&external_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("lab"))?;
        info!(id = created.id, external_id = %created.external_id, "lab_created");
        Ok(created)
    }

    /// Replace every mutable field of the lab identified by `external_id`.
    #[instrument(skip(self, input), fields(external_id = %external_id))]
    pub async fn update(&self, external_id: &str, input: LabInput) -> Result<lab::Model, ServiceError> {
        let existing = self
            .repo
            .find_by_external_id(external_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("lab"))?;

        let mut am: lab::ActiveModel = existing.into();
        am.key_name = Set(input.key_name);
        am.name = Set(input.name);
        am.description = Set(input.description);
        self.repo.save(am).await?;

        let updated = self
            .repo
            .find_by_external_id(external_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("lab"))?;
        info!(id = updated.id, "lab_updated");
        Ok(updated)
    }

    pub async fn get_all(&self) -> Result<Vec<lab::Model>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn get_by_external_id(&self, external_id: &str) -> Result<Option<lab::Model>, ServiceError> {
        self.repo.find_by_external_id(external_id).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<lab::Model>, ServiceError> {
        self.repo.find_by_id(id).await
    }

    pub async fn get_by_key_name(&self, key_name: &str) -> Result<Option<lab::Model>, ServiceError> {
        self.repo.find_by_key_name(key_name).await
    }

    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        let Some(existing) = self.repo.find_by_id(id).await? else {
            debug!("lab missing");
            return Err(ServiceError::not_found("lab"));
        };
        self.repo.delete(existing).await?;
        info!(id, "lab_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labs::repo::seaorm::SeaOrmLabRepository;
    use crate::labs::repository::mock::MockLabRepository;
    use crate::test_support::get_db;

    fn input(key_name: &str, name: &str, description: &str) -> LabInput {
        LabInput { key_name: key_name.into(), name: name.into(), description: Some(description.into()) }
    }

    fn mock_service() -> LabService<MockLabRepository> {
        LabService::new(Arc::new(MockLabRepository::default()))
    }

    #[tokio::test]
    async fn create_then_get_by_id_returns_equal_record() -> Result<(), anyhow::Error> {
        let svc = mock_service();
        let created = svc.create(input("LAB-X", "X Lab", "d")).await?;
        assert!(created.id > 0);
        assert!(!created.external_id.is_empty());

        let found = svc.get_by_id(created.id).await?;
        assert_eq!(found, Some(created));
        Ok(())
    }

    #[tokio::test]
    async fn sequential_creates_have_increasing_external_ids() -> Result<(), anyhow::Error> {
        let svc = mock_service();
        let mut previous = String::new();
        for i in 0..20 {
            let lab = svc.create(input(&format!("LAB-{i:02}"), "Seq Lab", "d")).await?;
            assert!(lab.external_id > previous);
            previous = lab.external_id;
        }
        Ok(())
    }

    #[tokio::test]
    async fn update_replaces_all_fields_and_keeps_ids() -> Result<(), anyhow::Error> {
        let svc = mock_service();
        let created = svc.create(input("LAB-X", "X Lab", "d")).await?;

        let replacement = LabInput { key_name: "LAB-Y".into(), name: "Y Lab".into(), description: None };
        let updated = svc.update(&created.external_id, replacement).await?;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.external_id, created.external_id);
        assert_eq!(updated.key_name, "LAB-Y");
        assert_eq!(updated.name, "Y Lab");
        assert_eq!(updated.description, None);

        assert!(svc.get_by_key_name("LAB-X").await?.is_none());
        assert_eq!(svc.get_by_key_name("LAB-Y").await?.map(|l| l.id), Some(created.id));
        Ok(())
    }

    #[tokio::test]
    async fn update_unknown_external_id_is_not_found() {
        let svc = mock_service();
        let err = svc.update("01ARZ3NDEKTSV4RRFFQ69G5FAV", input("LAB-Z", "Z Lab", "d")).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_then_second_delete_is_not_found() -> Result<(), anyhow::Error> {
        let svc = mock_service();
        let created = svc.create(input("LAB-DEL", "Del Lab", "d")).await?;

        svc.delete_by_id(created.id).await?;
        assert!(svc.get_by_id(created.id).await?.is_none());
        assert!(svc.get_by_external_id(&created.external_id).await?.is_none());

        let err = svc.delete_by_id(created.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        Ok(())
    }

    #[tokio::test]
    async fn deleted_ids_are_never_reassigned() -> Result<(), anyhow::Error> {
        let stores: Vec<Arc<dyn LabRepository>> = vec![
            Arc::new(MockLabRepository::default()),
            Arc::new(SeaOrmLabRepository::new(get_db().await?)),
        ];
        for repo in stores {
            let svc: LabService<dyn LabRepository> = LabService::new(repo);
            let first = svc.create(input("LAB-A", "First Lab", "d")).await?;
            let last = svc.create(input("LAB-B", "Second Lab", "d")).await?;
            svc.delete_by_id(last.id).await?;

            let next = svc.create(input("LAB-C", "Third Lab", "d")).await?;
            assert!(next.id > last.id);
            assert!(svc.get_by_id(last.id).await?.is_none());
            assert_eq!(svc.get_by_id(first.id).await?.map(|l| l.key_name), Some("LAB-A".to_string()));
        }
        Ok(())
    }

    #[tokio::test]
    async fn missing_reads_are_empty_not_errors() -> Result<(), anyhow::Error> {
        let svc = mock_service();
        assert!(svc.get_by_id(404).await?.is_none());
        assert!(svc.get_by_external_id("nope").await?.is_none());
        assert!(svc.get_by_key_name("nope").await?.is_none());
        assert!(svc.get_all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_key_name_conflicts() -> Result<(), anyhow::Error> {
        let svc = mock_service();
        svc.create(input("LAB-DUP", "Dup Lab", "d")).await?;
        let err = svc.create(input("LAB-DUP", "Dup Lab 2", "d")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        Ok(())
    }

    #[tokio::test]
    async fn lab_crud_service_seaorm() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let svc = LabService::new(Arc::new(SeaOrmLabRepository::new(db)));

        let a = svc.create(input("LAB-SQL", "Sql Lab", "d")).await?;
        let b = svc.create(input("LAB-SQL-2", "Sql Lab 2", "d")).await?;
        assert!(b.id > a.id);
        assert!(b.external_id > a.external_id);

        let all = svc.get_all().await?;
        assert_eq!(all.iter().map(|l| l.id).collect::<Vec<_>>(), vec![a.id, b.id]);

        let updated = svc.update(&a.external_id, input("LAB-SQL-Y", "Y Lab", "d2")).await?;
        assert_eq!(updated.key_name, "LAB-SQL-Y");
        assert_eq!(svc.get_by_id(a.id).await?.map(|l| l.key_name), Some("LAB-SQL-Y".to_string()));

        let clash = svc.update(&a.external_id, input("LAB-SQL-2", "Clash", "d")).await.unwrap_err();
        assert!(matches!(clash, ServiceError::Conflict(_)));

        svc.delete_by_id(a.id).await?;
        assert!(svc.get_by_id(a.id).await?.is_none());
        assert!(matches!(svc.delete_by_id(a.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
