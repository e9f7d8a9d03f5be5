use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxProjectRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxBlogPostRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxResumeRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxContactMessageRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxHealthRepo {
    pub pool: PgPool,
}

/// Maps a unique violation on `constraint` to a `Conflict` with `message`.
pub(crate) fn map_unique_violation(err: sqlx::Error, constraint: &str, message: &str) -> crate::errors::AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.constraint() == Some(constraint) {
            return crate::errors::AppError::Conflict(message.into());
        }
    }
    crate::errors::AppError::from(err)
}
