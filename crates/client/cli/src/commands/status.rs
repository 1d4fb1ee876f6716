//! Read-only views of the session.

use anyhow::Result;
use clap::Args;

use tank_runtime::SessionHandle;

use crate::output::{print_status, print_tasks};

/// Show needs, mood and progress
#[derive(Args, Debug)]
pub struct Status {}

impl Status {
    pub async fn execute(self, handle: &SessionHandle) -> Result<()> {
        print_status(&handle.status().await?);
        Ok(())
    }
}

/// List today's tasks
#[derive(Args, Debug)]
pub struct Tasks {}

impl Tasks {
    pub async fn execute(self, handle: &SessionHandle) -> Result<()> {
        // Refresh first so a new day shows its fresh task list.
        let outcome = handle.refresh().await?;
        print_tasks(&outcome.state.daily_tasks);
        Ok(())
    }
}
