use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, QueryOrder, TryIntoModel};

use models::lab_result;

use crate::errors::ServiceError;
use crate::results::repository::ResultRepository;

pub struct SeaOrmResultRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmResultRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl ResultRepository for SeaOrmResultRepository {
    async fn find_all(&self) -> Result<Vec<lab_result::Model>, ServiceError> {
        Ok(lab_result::Entity::find().order_by_asc(lab_result::Column::Id).all(&self.db).await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<lab_result::Model>, ServiceError> {
        Ok(lab_result::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn find_by_external_id(&self, external_id: &str) -> Result<Option<lab_result::Model>, ServiceError> {
        let res = lab_result::Entity::find()
            .filter(lab_result::Column::ExternalId.eq(external_id))
            .one(&self.db)
            .await?;
        Ok(res)
    }

    async fn find_by_nif(&self, nif: &str) -> Result<Option<lab_result::Model>, ServiceError> {
        let res = lab_result::Entity::find()
            .filter(lab_result::Column::Nif.eq(nif))
            .order_by_asc(lab_result::Column::Id)
            .one(&self.db)
            .await?;
        Ok(res)
    }

    async fn find_all_by_lab_id(&self, lab_id: i32) -> Result<Vec<lab_result::Model>, ServiceError> {
        let rows = lab_result::Entity::find()
            .filter(lab_result::Column::LabId.eq(lab_id))
            .order_by_asc(lab_result::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn save(&self, result: lab_result::ActiveModel) -> Result<lab_result::Model, ServiceError> {
        let saved = result.save(&self.db).await?;
        Ok(saved.try_into_model()?)
    }

    async fn delete(&self, result: lab_result::Model) -> Result<(), ServiceError> {
        result.delete(&self.db).await?;
        Ok(())
    }
}
