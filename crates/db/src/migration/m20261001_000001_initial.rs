//! Initial database migration.
//!
//! Creates the users, clients and project requirements tables plus the
//! shared `updated_at` trigger.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: ACCOUNTS
        // ============================================================
        db.execute_unprepared(USERS_SQL).await?;

        // ============================================================
        // PART 2: STUDIO RECORDS
        // ============================================================
        db.execute_unprepared(CLIENTS_SQL).await?;
        db.execute_unprepared(PROJECT_REQUIREMENTS_SQL).await?;

        // ============================================================
        // PART 3: TRIGGERS
        // ============================================================
        db.execute_unprepared(TRIGGERS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const USERS_SQL: &str = r"
CREATE TABLE users (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    username VARCHAR(50) NOT NULL UNIQUE,
    password_hash VARCHAR(255) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_username_not_blank CHECK (length(trim(username)) > 0)
);
";

const CLIENTS_SQL: &str = r"
CREATE TABLE clients (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    nombre VARCHAR(255) NOT NULL,
    celular VARCHAR(50) NOT NULL,
    email VARCHAR(255) NOT NULL,
    ciudad VARCHAR(100) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

-- Listing is newest first, optionally by city
CREATE INDEX idx_clients_created ON clients(created_at DESC);
CREATE INDEX idx_clients_ciudad ON clients(ciudad, created_at DESC);
";

const PROJECT_REQUIREMENTS_SQL: &str = r"
CREATE TABLE project_requirements (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    date DATE NOT NULL,
    project_title VARCHAR(255) NOT NULL,
    requestor_name VARCHAR(255) NOT NULL,
    requestor_phone VARCHAR(50) NOT NULL,
    requestor_email VARCHAR(255) NOT NULL,
    department VARCHAR(100) NOT NULL,
    sponsor_name VARCHAR(255) NOT NULL,
    sponsor_phone VARCHAR(50) NOT NULL,
    sponsor_email VARCHAR(255) NOT NULL,
    description TEXT NOT NULL,
    dependencies TEXT NOT NULL,
    requested_end_date DATE NOT NULL,
    estimated_budget NUMERIC(15, 2) NOT NULL,
    status VARCHAR(50) NOT NULL,
    priority VARCHAR(50) NOT NULL,
    project_type VARCHAR(100) NOT NULL,
    technical_requirements TEXT NOT NULL,
    business_justification TEXT NOT NULL,
    risk_assessment TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_budget_non_negative CHECK (estimated_budget >= 0)
);

CREATE INDEX idx_requirements_created ON project_requirements(created_at DESC);
CREATE INDEX idx_requirements_status ON project_requirements(status);
CREATE INDEX idx_requirements_priority ON project_requirements(priority);
CREATE INDEX idx_requirements_department ON project_requirements(department);
";

const TRIGGERS_SQL: &str = r"
CREATE OR REPLACE FUNCTION touch_updated_at()
RETURNS TRIGGER AS $$
BEGIN
    NEW.updated_at = now();
    RETURN NEW;
END;
$$ LANGUAGE plpgsql;

CREATE TRIGGER trg_users_updated_at
    BEFORE UPDATE ON users
    FOR EACH ROW EXECUTE FUNCTION touch_updated_at();

CREATE TRIGGER trg_clients_updated_at
    BEFORE UPDATE ON clients
    FOR EACH ROW EXECUTE FUNCTION touch_updated_at();

CREATE TRIGGER trg_requirements_updated_at
    BEFORE UPDATE ON project_requirements
    FOR EACH ROW EXECUTE FUNCTION touch_updated_at();
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS project_requirements CASCADE;
DROP TABLE IF EXISTS clients CASCADE;
DROP TABLE IF EXISTS users CASCADE;
DROP FUNCTION IF EXISTS touch_updated_at() CASCADE;
";
