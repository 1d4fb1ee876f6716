//! Decoration shop and tank layout.

use anyhow::Result;
use clap::Args;
use console::style;

use tank_runtime::SessionHandle;

use crate::output::print_outcome;

/// Show the decoration shop
#[derive(Args, Debug)]
pub struct Catalog {}

impl Catalog {
    pub fn execute(self, handle: &SessionHandle) -> Result<()> {
        for item in handle.catalog().all() {
            println!(
                "{:<10} {:<18} {:>4} coins  ({})",
                style(&item.id).cyan(),
                item.name,
                style(item.price).yellow(),
                item.kind
            );
        }
        Ok(())
    }
}

/// Buy a decoration
#[derive(Args, Debug)]
pub struct Buy {
    /// Catalog id, e.g. `plant_1`
    pub item_id: String,
}

impl Buy {
    pub async fn execute(self, handle: &SessionHandle) -> Result<()> {
        print_outcome(&handle.purchase(self.item_id).await?);
        Ok(())
    }
}

/// Place an owned decoration in the tank
#[derive(Args, Debug)]
pub struct Place {
    /// Catalog id of an owned decoration
    pub item_id: String,

    /// Horizontal position, 0.0 (left) to 1.0 (right)
    #[arg(default_value_t = 0.5)]
    pub x: f32,

    /// Vertical position, 0.0 (top) to 1.0 (bottom)
    #[arg(default_value_t = 0.5)]
    pub y: f32,
}

impl Place {
    pub async fn execute(self, handle: &SessionHandle) -> Result<()> {
        let outcome = handle
            .place_decoration(self.item_id, self.x, self.y)
            .await?;
        print_outcome(&outcome);
        if outcome.is_accepted()
            && let Some(placed) = outcome.state.tank.placed.last()
        {
            println!("  Placement id: {}", style(&placed.id).dim());
        }
        Ok(())
    }
}

/// Take a placed decoration back into the inventory
#[derive(Args, Debug)]
pub struct Remove {
    /// Placement id printed by `place`
    pub placement_id: String,
}

impl Remove {
    pub async fn execute(self, handle: &SessionHandle) -> Result<()> {
        print_outcome(&handle.remove_decoration(self.placement_id).await?);
        Ok(())
    }
}
