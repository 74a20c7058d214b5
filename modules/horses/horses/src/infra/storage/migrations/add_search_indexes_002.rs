use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();

        // Same DDL for Postgres and SQLite
        let sql = r"
CREATE INDEX IF NOT EXISTS idx_horse_owner ON horse(owner_id);
CREATE INDEX IF NOT EXISTS idx_horse_name ON horse(name);
CREATE INDEX IF NOT EXISTS idx_horse_date_of_birth ON horse(date_of_birth);
        ";

        conn.execute_unprepared(sql).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        let sql = r"
DROP INDEX IF EXISTS idx_horse_date_of_birth;
DROP INDEX IF EXISTS idx_horse_name;
DROP INDEX IF EXISTS idx_horse_owner;
        ";
        conn.execute_unprepared(sql).await?;
        Ok(())
    }
}
