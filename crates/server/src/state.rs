use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::labs::{repo::seaorm::SeaOrmLabRepository, repository::LabRepository, LabService};
use service::results::{repo::seaorm::SeaOrmResultRepository, repository::ResultRepository, ResultService};

pub type Labs = LabService<dyn LabRepository>;
pub type Results = ResultService<dyn ResultRepository>;

#[derive(Clone)]
pub struct ServerState {
    pub labs: Arc<Labs>,
    pub results: Arc<Results>,
}

impl ServerState {
    pub fn new(labs: Arc<dyn LabRepository>, results: Arc<dyn ResultRepository>) -> Self {
        Self {
            labs: Arc::new(LabService::new(labs)),
            results: Arc::new(ResultService::new(results)),
        }
    }

    /// State backed by SeaORM record stores sharing one connection pool.
    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::new(
            Arc::new(SeaOrmLabRepository::new(db.clone())),
            Arc::new(SeaOrmResultRepository::new(db)),
        )
    }
}
