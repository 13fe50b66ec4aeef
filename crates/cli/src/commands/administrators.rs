//! Administrator management commands.
//!
//! Every command goes through [`AdministratorsHandler`], so input is validated
//! exactly as it is for the HTTP API.

use std::sync::Arc;

use keyholder_admin::db::PgAdministratorsRepository;
use keyholder_admin::models::Administrator;
use keyholder_admin::services::AdministratorsHandler;

use super::{CommandError, connect};

async fn handler() -> Result<AdministratorsHandler, CommandError> {
    let pool = connect().await?;
    Ok(AdministratorsHandler::new(Arc::new(
        PgAdministratorsRepository::new(pool),
    )))
}

/// One `id<TAB>email` line per administrator.
fn format_rows(administrators: &[Administrator]) -> String {
    administrators
        .iter()
        .map(|a| format!("{}\t{}\n", a.id, a.email))
        .collect()
}

/// Print all administrators.
pub async fn list() -> Result<(), CommandError> {
    let administrators = handler().await?.get_administrators().await?;

    #[allow(clippy::print_stdout)]
    {
        print!("{}", format_rows(&administrators));
    }
    tracing::info!(count = administrators.len(), "Listed administrators");
    Ok(())
}

/// Invite an administrator.
pub async fn add(email: &str) -> Result<(), CommandError> {
    handler().await?.add_administrator(email).await?;
    tracing::info!("Administrator invited: {}", email.trim());
    Ok(())
}

/// Remove an administrator.
pub async fn remove(id: &str) -> Result<(), CommandError> {
    handler().await?.remove_administrator(id).await?;
    tracing::info!("Administrator removed (if it existed): {id}");
    Ok(())
}

/// Check that the database answers.
pub async fn healthcheck() -> Result<(), CommandError> {
    handler().await?.health_check().await?;
    tracing::info!("Database is healthy");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use keyholder_core::{AdministratorId, Email};

    use super::*;

    #[test]
    fn test_format_rows() {
        let id: AdministratorId = "67e55044-10b1-426f-9247-bb680e5fe0c8".parse().unwrap();
        let rows = format_rows(&[Administrator::new(id, Email::parse("a@b.com").unwrap())]);
        assert_eq!(rows, "67e55044-10b1-426f-9247-bb680e5fe0c8\ta@b.com\n");
    }

    #[test]
    fn test_format_rows_empty() {
        assert_eq!(format_rows(&[]), "");
    }
}
