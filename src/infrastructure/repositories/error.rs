// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

// SQLITE_CONSTRAINT_UNIQUE / SQLITE_CONSTRAINT_PRIMARYKEY extended codes.
const CODE_UNIQUE: &str = "2067";
const CODE_PRIMARY_KEY: &str = "1555";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let constraint_code = db_err
                .code()
                .is_some_and(|code| matches!(code.as_ref(), CODE_UNIQUE | CODE_PRIMARY_KEY));
            if db_err.is_unique_violation() || constraint_code {
                return DomainError::Conflict("slug already exists".into());
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("post not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
