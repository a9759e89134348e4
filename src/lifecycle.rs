use log::{error, info};
use rocket::fairing::AdHoc;

use crate::db::{self, Pool};
use crate::settings::StartupPolicy;

/// Ensures the schema exists before the server starts accepting requests.
pub(crate) fn on_start(policy: StartupPolicy) -> AdHoc {
    AdHoc::try_on_ignite("Schema Initializer", move |rocket| async move {
        let result = match rocket.state::<Pool>().cloned() {
            Some(pool) => db::init_schema_with(&pool).await,
            None => {
                error!("Schema Initializer ran before the database pool was attached");
                return Err(rocket);
            }
        };

        match (result, policy) {
            (Ok(()), _) => {
                info!("Tables created");
                Ok(rocket)
            }
            (Err(err), StartupPolicy::Lenient) => {
                error!("{}; continuing without a verified schema", err);
                Ok(rocket)
            }
            (Err(err), StartupPolicy::Strict) => {
                error!("{}", err);
                Err(rocket)
            }
        }
    })
}

pub(crate) fn on_stop() -> AdHoc {
    AdHoc::on_shutdown("Shutdown", |_| {
        Box::pin(async move {
            info!("Shutting down");
        })
    })
}
