//! Narrow repository interfaces, one per entity, with Postgres-backed
//! implementations. Services depend on the traits so orchestration logic can
//! be exercised against in-memory stores in tests.

mod application;
mod resume;
mod vacancy;

pub use application::{ApplicationRepo, PgApplicationRepo};
pub use resume::{PgResumeRepo, ResumeRepo};
pub use vacancy::{PgVacancyRepo, VacancyRepo};

use thiserror::Error;

/// Persistence failure surfaced by the repository traits.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
