use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).big_integer().not_null().primary_key())
                    .col(ColumnDef::new(Users::Username).text().null())
                    .col(ColumnDef::new(Users::FirstName).text().null())
                    .col(ColumnDef::new(Users::IsVip).boolean().not_null().default(false))
                    .col(ColumnDef::new(Users::VipExpiresAt).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(Users::CreatedAt).timestamp_with_time_zone().null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .to_owned(),
            )
            .await?;

        // Create signals table
        manager
            .create_table(
                Table::create()
                    .table(Signals::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Signals::Id).big_integer().auto_increment().primary_key())
                    .col(ColumnDef::new(Signals::Asset).text().not_null())
                    .col(ColumnDef::new(Signals::Direction).text().not_null())
                    .col(ColumnDef::new(Signals::TimeframeMinutes).integer().not_null())
                    .col(ColumnDef::new(Signals::Status).text().not_null().default("pending"))
                    .col(ColumnDef::new(Signals::IsFree).boolean().not_null().default(false))
                    .col(ColumnDef::new(Signals::CreatedAt).timestamp_with_time_zone().null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .col(ColumnDef::new(Signals::ExpiresAt).timestamp_with_time_zone().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Signals::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    FirstName,
    IsVip,
    VipExpiresAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Signals {
    Table,
    Id,
    Asset,
    Direction,
    TimeframeMinutes,
    Status,
    IsFree,
    CreatedAt,
    ExpiresAt,
}
