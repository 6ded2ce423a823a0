use deadpool_postgres::Pool;
use tokio_postgres::Row;

use crate::models::Group;
use crate::store::error::Result;

/// Map a `groups` row onto a [`Group`]
pub(crate) fn parse_group_row(row: &Row) -> Result<Group> {
    Ok(Group {
        id: row.try_get("id")?,
        group_name: row.try_get("group_name")?,
        token_amount: row.try_get("token_amount")?,
    })
}

/// Insert a group
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `group_name` - Display name of the group
/// * `token_amount` - Token amount associated with the group
///
/// # Returns
///
/// The stored group, including the id assigned by the database
pub async fn create_group(pool: &Pool, group_name: &str, token_amount: i64) -> Result<Group> {
    let conn = pool.get().await?;

    let row = conn
        .query_one(
            "INSERT INTO groups (group_name, token_amount) VALUES ($1, $2) \
             RETURNING id, group_name, token_amount",
            &[&group_name, &token_amount],
        )
        .await?;

    parse_group_row(&row)
}

/// Retrieve every group, ordered by id
pub async fn get_all_groups(pool: &Pool) -> Result<Vec<Group>> {
    let conn = pool.get().await?;

    let rows = conn
        .query(
            "SELECT id, group_name, token_amount FROM groups ORDER BY id",
            &[],
        )
        .await?;

    rows.iter().map(parse_group_row).collect()
}

/// Retrieve a page of groups in ascending id order
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `start_after` - Exclusive lower bound on the id; `None` starts from the first group
/// * `limit` - Maximum number of groups to return
pub async fn list_groups(pool: &Pool, start_after: Option<i32>, limit: u32) -> Result<Vec<Group>> {
    let conn = pool.get().await?;

    let lower_bound = start_after.unwrap_or(i32::MIN);
    let limit = i64::from(limit);

    let rows = conn
        .query(
            "SELECT id, group_name, token_amount FROM groups \
             WHERE id > $1 ORDER BY id LIMIT $2",
            &[&lower_bound, &limit],
        )
        .await?;

    rows.iter().map(parse_group_row).collect()
}

/// Look up a group by id
///
/// Returns `None` if no group has that id.
pub async fn get_group(pool: &Pool, group_id: i32) -> Result<Option<Group>> {
    let conn = pool.get().await?;

    let row = conn
        .query_opt(
            "SELECT id, group_name, token_amount FROM groups WHERE id = $1",
            &[&group_id],
        )
        .await?;

    row.as_ref().map(parse_group_row).transpose()
}
