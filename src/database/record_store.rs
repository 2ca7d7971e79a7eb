use crate::entities::assignment_result_entity as results;
use crate::error::{AppError, AppResult};
use crate::models::AssignmentRecord;
use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set, TransactionTrait,
};

/// Persistence boundary for assignment records.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persists a whole draw. Either every record becomes retrievable or none
    /// does.
    async fn insert_all(&self, records: &[AssignmentRecord]) -> AppResult<()>;

    /// Point lookup by retrieval identifier.
    async fn find_by_result_id(&self, result_id: &str) -> AppResult<Option<AssignmentRecord>>;
}

fn store_write(err: DbErr) -> AppError {
    AppError::StoreWriteFailure(err.to_string())
}

/// PostgreSQL store backed by the `results` table
pub struct SeaOrmRecordStore {
    pool: DatabaseConnection,
}

impl SeaOrmRecordStore {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for SeaOrmRecordStore {
    async fn insert_all(&self, records: &[AssignmentRecord]) -> AppResult<()> {
        if records.is_empty() {
            return Ok(());
        }

        let models = records.iter().map(|r| results::ActiveModel {
            draw_id: Set(r.draw_id.clone()),
            draw_name: Set(r.draw_name.clone()),
            giver: Set(r.giver.clone()),
            receiver: Set(r.receiver.clone()),
            result_id: Set(r.result_id.clone()),
            created_at: Set(r.created_at),
            ..Default::default()
        });

        // single statement, but keep it in a transaction so a failed commit
        // leaves nothing behind
        let txn = self.pool.begin().await.map_err(store_write)?;
        results::Entity::insert_many(models)
            .exec(&txn)
            .await
            .map_err(store_write)?;
        txn.commit().await.map_err(store_write)?;

        Ok(())
    }

    async fn find_by_result_id(&self, result_id: &str) -> AppResult<Option<AssignmentRecord>> {
        let model = results::Entity::find()
            .filter(results::Column::ResultId.eq(result_id))
            .one(&self.pool)
            .await?;
        Ok(model.map(Into::into))
    }
}
