// src/infrastructure/repositories/users/postgres.rs
use super::super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    Age, Email, NewUser, PageRequest, PasswordHash, User, UserFilter, UserId, UserListQuery,
    UserName, UserRepository, UserSearchQuery, UserSort,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const USER_COLUMNS: &str = "id, name, email, password_hash, age, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_page(
        &self,
        mut count: QueryBuilder<'_, Postgres>,
        mut select: QueryBuilder<'_, Postgres>,
    ) -> DomainResult<(Vec<User>, u64)> {
        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let rows = select
            .build_query_as::<UserRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let users = rows
            .into_iter()
            .map(User::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((users, u64::try_from(total).unwrap_or_default()))
    }
}

/// Appends the `WHERE` clause for a list filter. Shared by the count and the
/// page query so both see the same rows.
fn push_filter<'args>(builder: &mut QueryBuilder<'args, Postgres>, filter: &UserFilter) {
    let mut separator = " WHERE ";

    if let Some(pattern) = filter.keyword_pattern() {
        builder.push(separator);
        push_keyword_match(builder, pattern);
        separator = " AND ";
    }

    if let Some(min) = filter.age_min() {
        builder.push(separator);
        builder.push("age >= ");
        builder.push_bind(min);
        separator = " AND ";
    }

    if let Some(max) = filter.age_max() {
        builder.push(separator);
        builder.push("age <= ");
        builder.push_bind(max);
    }
}

fn push_keyword_match<'args>(builder: &mut QueryBuilder<'args, Postgres>, pattern: String) {
    builder.push("(name ILIKE ");
    builder.push_bind(pattern.clone());
    builder.push(" OR email ILIKE ");
    builder.push_bind(pattern);
    builder.push(")");
}

/// The column comes from a closed enum, never from request text.
fn push_order_and_page<'args>(
    builder: &mut QueryBuilder<'args, Postgres>,
    sort: UserSort,
    page: PageRequest,
) {
    builder.push(" ORDER BY ");
    builder.push(sort.field.column());
    builder.push(" ");
    builder.push(sort.direction.as_sql());
    if sort.needs_tie_break() {
        builder.push(", id ASC");
    }

    builder.push(" LIMIT ");
    builder.push_bind(i64::from(page.limit()));
    builder.push(" OFFSET ");
    builder.push_bind(i64::try_from(page.offset()).unwrap_or(i64::MAX));
}

fn list_queries(
    query: &UserListQuery,
) -> (QueryBuilder<'static, Postgres>, QueryBuilder<'static, Postgres>) {
    let mut count = QueryBuilder::new("SELECT COUNT(*) FROM users");
    push_filter(&mut count, &query.filter);

    let mut select = QueryBuilder::new(format!("SELECT {USER_COLUMNS} FROM users"));
    push_filter(&mut select, &query.filter);
    push_order_and_page(&mut select, query.sort, query.page);

    (count, select)
}

fn search_queries(
    query: &UserSearchQuery,
) -> (QueryBuilder<'static, Postgres>, QueryBuilder<'static, Postgres>) {
    let mut count = QueryBuilder::new("SELECT COUNT(*) FROM users WHERE ");
    push_keyword_match(&mut count, query.pattern());

    let mut select = QueryBuilder::new(format!("SELECT {USER_COLUMNS} FROM users WHERE "));
    push_keyword_match(&mut select, query.pattern());
    push_order_and_page(&mut select, UserSort::default(), query.page);

    (count, select)
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    password_hash: String,
    age: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            name: UserName::new(row.name)?,
            email: Email::new(row.email)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            age: Age::new(row.age)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            name,
            email,
            password_hash,
            age,
            created_at,
            updated_at,
        } = new_user;

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "INSERT INTO users (name, email, password_hash, age, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(name.as_str())
        .bind(email.as_str())
        .bind(password_hash.as_str())
        .bind(age.value())
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn get_by_id(&self, id: UserId) -> DomainResult<User> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        User::try_from(row)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn update(&self, user: &User) -> DomainResult<User> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "UPDATE users
             SET name = $1, email = $2, password_hash = $3, age = $4, updated_at = $5
             WHERE id = $6
             RETURNING {USER_COLUMNS}"
        ))
        .bind(user.name.as_str())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_str())
        .bind(user.age.value())
        .bind(user.updated_at)
        .bind(i64::from(user.id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        User::try_from(row)
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("user not found".into()));
        }
        Ok(())
    }

    async fn list(&self, query: &UserListQuery) -> DomainResult<(Vec<User>, u64)> {
        let (count, select) = list_queries(query);
        self.fetch_page(count, select).await
    }

    async fn search(&self, query: &UserSearchQuery) -> DomainResult<(Vec<User>, u64)> {
        let (count, select) = search_queries(query);
        self.fetch_page(count, select).await
    }
}
