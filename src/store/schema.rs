use deadpool_postgres::Pool;
use tracing::info;

use crate::store::error::Result;

/// Table definitions, applied idempotently at startup
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS groups (
    id           SERIAL PRIMARY KEY,
    group_name   TEXT   NOT NULL,
    token_amount BIGINT NOT NULL
);

CREATE TABLE IF NOT EXISTS messages (
    id       SERIAL  PRIMARY KEY,
    content  TEXT    NOT NULL,
    group_id INTEGER NOT NULL REFERENCES groups (id)
);

CREATE INDEX IF NOT EXISTS messages_group_id_idx ON messages (group_id);
"#;

/// Create the `groups` and `messages` tables if they do not exist yet
pub async fn migrate(pool: &Pool) -> Result<()> {
    let conn = pool.get().await?;
    conn.batch_execute(SCHEMA_SQL).await?;
    info!("store schema is up to date");
    Ok(())
}
