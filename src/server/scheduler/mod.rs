//! Scheduler for periodic character data refresh.
//!
//! A cron-based job scheduler re-fetches stored character profiles from the Nexon Open API
//! once their cached data expires, so rosters stay current without users refreshing by hand.

use std::sync::Arc;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::error::Error;

pub mod character;
pub mod config;

use self::{character::refresh_stale_characters, config::character as character_config};

/// Job scheduler for background character refresh tasks.
pub struct Scheduler {
    db: DatabaseConnection,
    nexon_client: nexon_api::Client,
    sched: JobScheduler,
}

impl Scheduler {
    /// Creates a new instance of [`Scheduler`].
    ///
    /// # Returns
    /// - `Ok(Scheduler)` - Successfully created scheduler instance
    /// - `Err(Error)` - Failed to initialize the underlying job scheduler
    pub async fn new(db: DatabaseConnection, nexon_client: nexon_api::Client) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;
        Ok(Self {
            db,
            nexon_client,
            sched,
        })
    }

    /// Registers all scheduled jobs and starts the scheduler.
    pub async fn start(mut self) -> Result<(), Error> {
        self.schedule_job(
            character_config::CRON_EXPRESSION,
            "character info",
            refresh_stale_characters,
        )
        .await?;

        self.sched.start().await?;

        Ok(())
    }

    /// Schedules a recurring job with the specified cron expression.
    ///
    /// On execution, the job logs the number of entries it refreshed or the error that stopped
    /// it.
    ///
    /// # Arguments
    /// - `cron` - Cron expression defining when the job should run (e.g., "0 0 * * * *" for hourly)
    /// - `name` - Human-readable name for the job (used in log messages)
    /// - `function` - Async function performing the refresh, returning the count of refreshed entries
    pub async fn schedule_job<F, Fut>(
        &mut self,
        cron: &str,
        name: &str,
        function: F,
    ) -> Result<(), Error>
    where
        F: Fn(DatabaseConnection, nexon_api::Client) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<usize, Error>> + Send + 'static,
    {
        let db = self.db.clone();
        let nexon_client = self.nexon_client.clone();
        let name = name.to_string();
        let function = Arc::new(function);

        self.sched
            .add(Job::new_async(cron, move |_, _| {
                let db = db.clone();
                let nexon_client = nexon_client.clone();
                let name = name.clone();
                let function = Arc::clone(&function);

                Box::pin(async move {
                    match function(db, nexon_client).await {
                        Ok(count) => tracing::debug!("Refreshed {} {} entries", count, name),
                        Err(e) => tracing::error!("Error refreshing {}: {:?}", name, e),
                    }
                })
            })?)
            .await?;

        Ok(())
    }
}
