use async_trait::async_trait;
use models::lab;

use crate::errors::ServiceError;

/// Record store for labs.
#[async_trait]
pub trait LabRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<lab::Model>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<lab::Model>, ServiceError>;
    async fn find_by_external_id(&self, external_id: &str) -> Result<Option<lab::Model>, ServiceError>;
    async fn find_by_key_name(&self, key_name: &str) -> Result<Option<lab::Model>, ServiceError>;

    /// Inserts when `id` is `NotSet`, otherwise overwrites every column of that row.
    async fn save(&self, lab: lab::ActiveModel) -> Result<lab::Model, ServiceError>;
    async fn delete(&self, lab: lab::Model) -> Result<(), ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use sea_orm::{ActiveValue, Set, TryIntoModel};
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    pub struct MockLabRepository {
        rows: Mutex<BTreeMap<i32, lab::Model>>, // key: id, iteration order == insertion order
        next_id: AtomicI32,
    }

    impl MockLabRepository {
        fn rows(&self) -> Result<MutexGuard<'_, BTreeMap<i32, lab::Model>>, ServiceError> {
            self.rows.lock().map_err(|_| ServiceError::Db("mock lab store poisoned".into()))
        }

        fn check_unique(rows: &BTreeMap<i32, lab::Model>, candidate: &lab::Model) -> Result<(), ServiceError> {
            let clash = rows.values().any(|r| {
                r.id != candidate.id && (r.key_name == candidate.key_name || r.external_id == candidate.external_id)
            });
            if clash {
                return Err(ServiceError::Conflict(format!("lab key_name {} already exists", candidate.key_name)));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl LabRepository for MockLabRepository {
        async fn find_all(&self) -> Result<Vec<lab::Model>, ServiceError> {
            Ok(self.rows()?.values().cloned().collect())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<lab::Model>, ServiceError> {
            Ok(self.rows()?.get(&id).cloned())
        }

        async fn find_by_external_id(&self, external_id: &str) -> Result<Option<lab::Model>, ServiceError> {
            Ok(self.rows()?.values().find(|r| r.external_id == external_id).cloned())
        }

        async fn find_by_key_name(&self, key_name: &str) -> Result<Option<lab::Model>, ServiceError> {
            Ok(self.rows()?.values().find(|r| r.key_name == key_name).cloned())
        }

        async fn save(&self, mut lab: lab::ActiveModel) -> Result<lab::Model, ServiceError> {
            let mut rows = self.rows()?;
            let existing = match &lab.id {
                ActiveValue::NotSet => None,
                ActiveValue::Set(id) | ActiveValue::Unchanged(id) => Some(*id),
            };
            match existing {
                None => lab.id = Set(self.next_id.fetch_add(1, Ordering::SeqCst) + 1),
                Some(id) if !rows.contains_key(&id) => return Err(ServiceError::not_found("lab")),
                Some(_) => {}
            }
            let model = lab.try_into_model()?;
            Self::check_unique(&rows, &model)?;
            rows.insert(model.id, model.clone());
            Ok(model)
        }

        async fn delete(&self, lab: lab::Model) -> Result<(), ServiceError> {
            self.rows()?.remove(&lab.id);
            Ok(())
        }
    }
}
