//! Create pod_reservations table
//!
//! The unique index on (voyage_id, pod_code) is what arbitrates concurrent
//! reservations of the same pod; passenger_id is unique on its own.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PodReservations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PodReservations::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PodReservations::PodCode)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PodReservations::CreationDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PodReservations::PassengerId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PodReservations::VoyageId)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pod_reservations_voyage_pod")
                    .table(PodReservations::Table)
                    .col(PodReservations::VoyageId)
                    .col(PodReservations::PodCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pod_reservations_passenger")
                    .table(PodReservations::Table)
                    .col(PodReservations::PassengerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pod_reservations_voyage")
                    .table(PodReservations::Table)
                    .col(PodReservations::VoyageId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PodReservations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum PodReservations {
    Table,
    Id,
    PodCode,
    CreationDate,
    PassengerId,
    VoyageId,
}
