use std::time::Duration;

use diesel::pg::PgConnection;
use diesel::r2d2::ConnectionManager;
use log::{error, info};
use rocket::fairing::AdHoc;
use rocket::tokio::task;

use crate::error::{ErrorResponse, StartupError};
use crate::settings::Settings;

pub(crate) type Pool = r2d2::Pool<ConnectionManager<PgConnection>>;

embed_migrations!();

fn build_pool(settings: &Settings) -> Pool {
    let manager = ConnectionManager::<PgConnection>::new(settings.database_url.as_str());

    // No idle connections are opened up front, so an unreachable database
    // only shows up once a connection is actually requested.
    r2d2::Pool::builder()
        .max_size(settings.database_pool_size)
        .min_idle(Some(0))
        .connection_timeout(Duration::from_secs(settings.database_connect_timeout))
        .build_unchecked(manager)
}

/// Builds the pool shared by every request for the lifetime of the process.
///
/// With `database_probe` set, one connection is requested straight away. A
/// failed probe is logged and a fresh pool is handed out regardless.
pub(crate) fn establish_connection(settings: &Settings) -> Pool {
    let pool = build_pool(settings);

    if settings.database_probe {
        if let Err(err) = pool.get() {
            error!("Couldn't connect to database: {}", err);
            return build_pool(settings);
        }
        info!("Database connection verified");
    }

    pool
}

pub(crate) fn provider(settings: Settings) -> AdHoc {
    AdHoc::try_on_ignite("Database Pool", move |rocket| async move {
        match task::spawn_blocking(move || establish_connection(&settings)).await {
            Ok(pool) => {
                info!("Database pool ready");
                Ok(rocket.manage(pool))
            }
            Err(err) => {
                error!("Couldn't build database pool: {}", err);
                Err(rocket)
            }
        }
    })
}

/// Creates the `item` table if it doesn't exist yet. Safe to call repeatedly.
pub(crate) fn init_schema(conn: &PgConnection) -> Result<(), StartupError> {
    embedded_migrations::run(conn)?;

    Ok(())
}

pub(crate) async fn init_schema_with(pool: &Pool) -> Result<(), StartupError> {
    let pool = pool.clone();

    task::spawn_blocking(move || {
        let conn = pool.get()?;
        init_schema(&conn)
    })
    .await?
}

/// Runs `f` against one pooled connection on the blocking thread pool.
///
/// The connection goes back to the pool when `f` returns, whatever the outcome.
pub(crate) async fn run<F, T>(pool: &Pool, f: F) -> Result<T, ErrorResponse>
where
    F: FnOnce(&PgConnection) -> Result<T, ErrorResponse> + Send + 'static,
    T: Send + 'static,
{
    let pool = pool.clone();

    task::spawn_blocking(move || {
        let conn = pool.get().map_err(|err| {
            error!("Couldn't connect to database: {}", err);
            ErrorResponse::internal("Couldn't connect to database".to_string())
        })?;

        f(&*conn)
    })
    .await
    .map_err(|err| ErrorResponse::internal(format!("Database task failed: {}", err)))?
}
