use sea_orm_migration::prelude::*;

/// Assignment results (one row per giver in a draw)
#[derive(DeriveIden)]
enum Results {
    Table,
    Id,
    DrawId,
    DrawName,
    Giver,
    Receiver,
    ResultId,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Rows are written once per draw in a single batch and never updated.
/// `result_id` is the only lookup key exposed to participants.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Results::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Results::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Results::DrawId).string_len(64).not_null())
                    .col(ColumnDef::new(Results::DrawName).string_len(255).not_null())
                    .col(ColumnDef::new(Results::Giver).string_len(255).not_null())
                    .col(ColumnDef::new(Results::Receiver).string_len(255).not_null())
                    .col(ColumnDef::new(Results::ResultId).string_len(96).not_null())
                    .col(
                        ColumnDef::new(Results::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_results_result_id_unique")
                    .table(Results::Table)
                    .col(Results::ResultId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // draw-level cleanup by retention jobs
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_results_draw_id")
                    .table(Results::Table)
                    .col(Results::DrawId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(Results::Table).to_owned())
            .await?;
        Ok(())
    }
}
