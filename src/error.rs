use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Could not connect to database: {0}")]
    Connection(#[source] sea_orm::DbErr),

    #[error("Database error: {0}")]
    Db(#[from] sea_orm::DbErr),

    #[error("Migration I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Password hashing failed: {0}")]
    Hash(String),

    #[error("Invalid {field} value: {value}")]
    InvalidValue { field: &'static str, value: String },

    #[error("Amount overflow computing {field}")]
    AmountOverflow { field: &'static str },

    #[error("Order must contain at least one item")]
    EmptyOrder,
}

pub type SeedResult<T> = Result<T, SeedError>;
