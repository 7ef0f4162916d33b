use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Workouts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Workouts::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Workouts::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Workouts::Description).text().not_null())
                    .col(
                        ColumnDef::new(Workouts::WorkoutType)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Workouts::DurationMinutes)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Workouts::DifficultyLevel)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Workouts::Instructions)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Workouts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Workouts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Workouts {
    Table,
    Id,
    Name,
    Description,
    WorkoutType,
    DurationMinutes,
    DifficultyLevel,
    Instructions,
    CreatedAt,
}
