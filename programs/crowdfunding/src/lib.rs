use crate::instructions::*;
use anchor_lang::prelude::*;

pub mod config;
pub mod error;
pub mod instructions;
pub mod state;

declare_id!("6ZDponCvcQ6bTmfBn8G4jAKy4P4iZPpkukXrqXeVSdF7");

#[program]
pub mod crowdfunding {
    use super::*;

    pub fn create(ctx: Context<Create>, name: String, description: String) -> Result<()> {
        instructions::create(ctx, name, description)
    }
}
