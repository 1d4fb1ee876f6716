//! Command implementations for the terminal client.
//!
//! Each command is a separate module that declares its own arguments and
//! runs against a [`SessionHandle`].

mod care;
mod nudge;
mod play;
mod settings;
mod shop;
mod status;

use anyhow::Result;
use clap::Subcommand;

use tank_runtime::SessionHandle;

pub use care::{Clean, CompleteTask, Feed, Pet};
pub use nudge::Nudge;
pub use play::{HighScores, Play};
pub use settings::Settings;
pub use shop::{Buy, Catalog, Place, Remove};
pub use status::{Status, Tasks};

#[derive(Subcommand)]
pub enum Command {
    /// Show needs, mood and progress
    Status(Status),

    /// List today's tasks
    Tasks(Tasks),

    /// Feed the fish
    Feed(Feed),

    /// Clean the tank
    Clean(Clean),

    /// Cheer the fish up
    Pet(Pet),

    /// Mark a daily task as done
    Complete(CompleteTask),

    /// Show the decoration shop
    Catalog(Catalog),

    /// Buy a decoration
    Buy(Buy),

    /// Place an owned decoration in the tank
    Place(Place),

    /// Take a placed decoration back into the inventory
    Remove(Remove),

    /// Record a finished mini-game round
    Play(Play),

    /// Show the best score of every mini-game
    HighScores(HighScores),

    /// Change preferences
    #[command(subcommand)]
    Settings(Settings),

    /// Show which status reminder would be due now
    Nudge(Nudge),
}

impl Command {
    pub async fn execute(self, handle: &SessionHandle) -> Result<()> {
        match self {
            Command::Status(cmd) => cmd.execute(handle).await,
            Command::Tasks(cmd) => cmd.execute(handle).await,
            Command::Feed(cmd) => cmd.execute(handle).await,
            Command::Clean(cmd) => cmd.execute(handle).await,
            Command::Pet(cmd) => cmd.execute(handle).await,
            Command::Complete(cmd) => cmd.execute(handle).await,
            Command::Catalog(cmd) => cmd.execute(handle),
            Command::Buy(cmd) => cmd.execute(handle).await,
            Command::Place(cmd) => cmd.execute(handle).await,
            Command::Remove(cmd) => cmd.execute(handle).await,
            Command::Play(cmd) => cmd.execute(handle).await,
            Command::HighScores(cmd) => cmd.execute(handle).await,
            Command::Settings(cmd) => cmd.execute(handle).await,
            Command::Nudge(cmd) => cmd.execute(handle).await,
        }
    }
}
