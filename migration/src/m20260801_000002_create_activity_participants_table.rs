use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000001_create_activities_table::Activities;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ActivityParticipants::Table)
                    .if_not_exists()
                    .col(integer(ActivityParticipants::ActivityId))
                    .col(string(ActivityParticipants::ParticipantEmail))
                    .col(timestamp_with_time_zone(ActivityParticipants::SignedUpAt))
                    .primary_key(
                        Index::create()
                            .col(ActivityParticipants::ActivityId)
                            .col(ActivityParticipants::ParticipantEmail),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activity_participants_activity_id")
                            .from(
                                ActivityParticipants::Table,
                                ActivityParticipants::ActivityId,
                            )
                            .to(Activities::Table, Activities::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ActivityParticipants::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ActivityParticipants {
    Table,
    ActivityId,
    ParticipantEmail,
    SignedUpAt,
}
