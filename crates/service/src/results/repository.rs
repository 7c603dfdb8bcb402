use async_trait::async_trait;
use models::lab_result;

use crate::errors::ServiceError;

/// Record store for results.
#[async_trait]
pub trait ResultRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<lab_result::Model>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<lab_result::Model>, ServiceError>;
    async fn find_by_external_id(&self, external_id: &str) -> Result<Option<lab_result::Model>, ServiceError>;
    /// `nif` is not unique; the earliest stored match wins.
    async fn find_by_nif(&self, nif: &str) -> Result<Option<lab_result::Model>, ServiceError>;
    async fn find_all_by_lab_id(&self, lab_id: i32) -> Result<Vec<lab_result::Model>, ServiceError>;

    /// Inserts when `id` is `NotSet`, otherwise overwrites every column of that row.
    async fn save(&self, result: lab_result::ActiveModel) -> Result<lab_result::Model, ServiceError>;
    async fn delete(&self, result: lab_result::Model) -> Result<(), ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use sea_orm::{ActiveValue, Set, TryIntoModel};
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    pub struct MockResultRepository {
        rows: Mutex<BTreeMap<i32, lab_result::Model>>, // key: id
        next_id: AtomicI32,
    }

    impl MockResultRepository {
        fn rows(&self) -> Result<MutexGuard<'_, BTreeMap<i32, lab_result::Model>>, ServiceError> {
            self.rows.lock().map_err(|_| ServiceError::Db("mock result store poisoned".into()))
        }
    }

    #[async_trait]
    impl ResultRepository for MockResultRepository {
        async fn find_all(&self) -> Result<Vec<lab_result::Model>, ServiceError> {
            Ok(self.rows()?.values().cloned().collect())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<lab_result::Model>, ServiceError> {
            Ok(self.rows()?.get(&id).cloned())
        }

        async fn find_by_external_id(&self, external_id: &str) -> Result<Option<lab_result::Model>, ServiceError> {
            Ok(self.rows()?.values().find(|r| r.external_id == external_id).cloned())
        }

        async fn find_by_nif(&self, nif: &str) -> Result<Option<lab_result::Model>, ServiceError> {
            Ok(self.rows()?.values().find(|r| r.nif == nif).cloned())
        }

        async fn find_all_by_lab_id(&self, lab_id: i32) -> Result<Vec<lab_result::Model>, ServiceError> {
            Ok(self.rows()?.values().filter(|r| r.lab_id == lab_id).cloned().collect())
        }

        async fn save(&self, mut result: lab_result::ActiveModel) -> Result<lab_result::Model, ServiceError> {
            let mut rows = self.rows()?;
            let existing = match &result.id {
                ActiveValue::NotSet => None,
                ActiveValue::Set(id) | ActiveValue::Unchanged(id) => Some(*id),
            };
            match existing {
                None => result.id = Set(self.next_id.fetch_add(1, Ordering::SeqCst) + 1),
                Some(id) if !rows.contains_key(&id) => return Err(ServiceError::not_found("result")),
                Some(_) => {}
            }
            let model = result.try_into_model()?;
            if rows.values().any(|r| r.id != model.id && r.external_id == model.external_id) {
                return Err(ServiceError::Conflict(format!("result external_id {} already exists", model.external_id)));
            }
            rows.insert(model.id, model.clone());
            Ok(model)
        }

        async fn delete(&self, result: lab_result::Model) -> Result<(), ServiceError> {
            self.rows()?.remove(&result.id);
            Ok(())
        }
    }
}
