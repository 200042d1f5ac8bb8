//! Secondary indexes for the membership join and group lookups.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Composite PK already covers (group_id, user_id); reverse lookups
        // by user need their own index.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_membership_user")
                    .table(Membership::Table)
                    .col(Membership::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_group_name")
                    .table(Group::Table)
                    .col(Group::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_membership_user").table(Membership::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_group_name").table(Group::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Membership {
    #[sea_orm(iden = "memberships")]
    Table,
    UserId,
}

#[derive(DeriveIden)]
enum Group {
    #[sea_orm(iden = "groups")]
    Table,
    Name,
}
