//! Mini-game results and high scores.

use anyhow::Result;
use clap::Args;
use console::style;

use tank_core::{Difficulty, MiniGameKind};
use tank_runtime::SessionHandle;

/// Record a finished mini-game round
#[derive(Args, Debug)]
pub struct Play {
    /// Mini-game, e.g. `bubble_pop`
    pub game: MiniGameKind,

    /// Final score of the round
    pub score: u32,

    /// easy, medium or hard
    #[arg(long, default_value = "medium")]
    pub difficulty: Difficulty,
}

impl Play {
    pub async fn execute(self, handle: &SessionHandle) -> Result<()> {
        let result = handle
            .record_minigame(self.game, self.difficulty, self.score)
            .await?;

        println!(
            "{} {} scored {}",
            style("✓").green().bold(),
            result.kind,
            result.score
        );
        println!(
            "  Earned {} coins and {} XP",
            style(result.coins_earned).yellow(),
            style(result.xp_earned).yellow()
        );
        if result.is_high_score {
            println!("  {}", style("New high score!").magenta().bold());
        }
        Ok(())
    }
}

/// Show the best score of every mini-game
#[derive(Args, Debug)]
pub struct HighScores {}

impl HighScores {
    pub async fn execute(self, handle: &SessionHandle) -> Result<()> {
        for kind in MiniGameKind::ALL {
            let best = handle.high_score(kind).await?;
            println!("{:<14} {:>6}", kind.as_ref(), best);
        }
        Ok(())
    }
}
