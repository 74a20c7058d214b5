use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let conn = manager.get_connection();

        let sql = match backend {
            sea_orm::DatabaseBackend::Postgres => {
                r"
CREATE TABLE IF NOT EXISTS owner (
    id BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
    first_name VARCHAR(255) NOT NULL,
    last_name VARCHAR(255) NOT NULL,
    email VARCHAR(255),
    description VARCHAR(4095)
);

-- Parent links are cleared when the parent is deleted
CREATE TABLE IF NOT EXISTS horse (
    id BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    description VARCHAR(4095),
    date_of_birth DATE NOT NULL,
    sex VARCHAR(6) NOT NULL CHECK (sex IN ('FEMALE', 'MALE')),
    image VARCHAR(4095),
    owner_id BIGINT,
    parent_female_id BIGINT,
    parent_male_id BIGINT,
    CONSTRAINT fk_horse_owner FOREIGN KEY (owner_id) REFERENCES owner(id) ON DELETE RESTRICT,
    CONSTRAINT fk_horse_parent_female FOREIGN KEY (parent_female_id) REFERENCES horse(id) ON DELETE SET NULL,
    CONSTRAINT fk_horse_parent_male FOREIGN KEY (parent_male_id) REFERENCES horse(id) ON DELETE SET NULL
);
                "
            }
            sea_orm::DatabaseBackend::Sqlite => {
                r"
CREATE TABLE IF NOT EXISTS owner (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    email TEXT,
    description TEXT
);

-- Parent links are cleared when the parent is deleted
CREATE TABLE IF NOT EXISTS horse (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT,
    date_of_birth TEXT NOT NULL,
    sex TEXT NOT NULL CHECK (sex IN ('FEMALE', 'MALE')),
    image TEXT,
    owner_id INTEGER REFERENCES owner(id) ON DELETE RESTRICT,
    parent_female_id INTEGER REFERENCES horse(id) ON DELETE SET NULL,
    parent_male_id INTEGER REFERENCES horse(id) ON DELETE SET NULL
);
                "
            }
            sea_orm::DatabaseBackend::MySql => {
                return Err(DbErr::Migration(
                    "MySQL is not a supported backend for the horses module".to_owned(),
                ));
            }
        };

        conn.execute_unprepared(sql).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        let sql = "DROP TABLE IF EXISTS horse; DROP TABLE IF EXISTS owner;";
        conn.execute_unprepared(sql).await?;
        Ok(())
    }
}
