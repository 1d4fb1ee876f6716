//! Care actions: feeding, cleaning and attention.

use anyhow::Result;
use clap::Args;

use tank_runtime::SessionHandle;

use crate::output::print_outcome;

/// Feed the fish
#[derive(Args, Debug)]
pub struct Feed {}

impl Feed {
    pub async fn execute(self, handle: &SessionHandle) -> Result<()> {
        print_outcome(&handle.feed().await?);
        Ok(())
    }
}

/// Clean the tank
#[derive(Args, Debug)]
pub struct Clean {}

impl Clean {
    pub async fn execute(self, handle: &SessionHandle) -> Result<()> {
        print_outcome(&handle.clean().await?);
        Ok(())
    }
}

/// Cheer the fish up
#[derive(Args, Debug)]
pub struct Pet {
    /// Happiness to add
    #[arg(default_value_t = 10.0)]
    pub amount: f32,
}

impl Pet {
    pub async fn execute(self, handle: &SessionHandle) -> Result<()> {
        print_outcome(&handle.increase_happiness(self.amount).await?);
        Ok(())
    }
}

/// Mark a daily task as done
#[derive(Args, Debug)]
pub struct CompleteTask {
    /// Task id, e.g. `feed_fish`
    pub task_id: String,
}

impl CompleteTask {
    pub async fn execute(self, handle: &SessionHandle) -> Result<()> {
        print_outcome(&handle.complete_task(self.task_id).await?);
        Ok(())
    }
}
