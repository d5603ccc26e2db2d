pub(crate) mod config;
pub(crate) mod query;

use std::future::Future;

use bgg_client::{BggClient, ClientSettings};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tokio::runtime::Runtime;

use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// A runtime plus a client configured from the settings file and environment.
pub(crate) struct Session {
    rt: Runtime,
    pub(crate) client: BggClient,
}

impl Session {
    pub(crate) fn open() -> Result<Self, CliError> {
        let settings = ClientSettings::load();
        let rt = Runtime::new().map_err(|e| CliError::runtime(e.to_string()))?;
        let client = {
            let _guard = rt.enter();
            BggClient::new(&settings)?
        };
        Ok(Self { rt, client })
    }

    /// Drive `work` to completion behind a spinner.
    pub(crate) fn run<F: Future>(&self, message: &str, work: F) -> F::Output {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("  {spinner:.cyan} {msg}") {
            pb.set_style(style.tick_chars("/-\\|"));
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));

        let output = self.rt.block_on(work);
        pb.finish_and_clear();
        output
    }
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
