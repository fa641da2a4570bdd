use sea_orm_migration::{prelude::*, schema::*};

use super::m20240301_000001_create_school_table::School;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::Id))
                    .col(string(Student::StudentName))
                    .col(string(Student::Grade))
                    .col(string(Student::RollNumber))
                    .col(string(Student::MobileNumber))
                    .col(string(Student::GuardianName))
                    .col(integer(Student::SchoolId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_school_id")
                            .from(Student::Table, Student::SchoolId)
                            .to(School::Table, School::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookups by roll number go through this index; duplicates are allowed.
        manager
            .create_index(
                Index::create()
                    .name("idx_student_roll_number")
                    .table(Student::Table)
                    .col(Student::RollNumber)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Student {
    Table,
    Id,
    StudentName,
    Grade,
    RollNumber,
    MobileNumber,
    GuardianName,
    SchoolId,
}
