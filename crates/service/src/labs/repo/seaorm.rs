use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, QueryOrder, TryIntoModel};

use models::lab;

use crate::errors::ServiceError;
use crate::labs::repository::LabRepository;

pub struct SeaOrmLabRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmLabRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl LabRepository for SeaOrmLabRepository {
    async fn find_all(&self) -> Result<Vec<lab::Model>, ServiceError> {
        Ok(lab::Entity::find().order_by_asc(lab::Column::Id).all(&self.db).await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<lab::Model>, ServiceError> {
        Ok(lab::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn find_by_external_id(&self, external_id: &str) -> Result<Option<lab::Model>, ServiceError> {
        let res = lab::Entity::find()
            .filter(lab::Column::ExternalId.eq(external_id))
            .one(&self.db)
            .await?;
        Ok(res)
    }

    async fn find_by_key_name(&self, key_name: &str) -> Result<Option<lab::Model>, ServiceError> {
        let res = lab::Entity::find()
            .filter(lab::Column::KeyName.eq(key_name))
            .one(&self.db)
            .await?;
        Ok(res)
    }

    async fn save(&self, lab: lab::ActiveModel) -> Result<lab::Model, ServiceError> {
        let saved = lab.save(&self.db).await?;
        Ok(saved.try_into_model()?)
    }

    async fn delete(&self, lab: lab::Model) -> Result<(), ServiceError> {
        lab.delete(&self.db).await?;
        Ok(())
    }
}
