use crate::{config::*, error::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Create<'info> {
    #[account(
        init,
        payer = user,
        seeds = [CAMPAIGN_SEED, user.key().as_ref()],
        bump,
        space = 8 + Campaign::SPACE,
    )]
    campaign: Account<'info, Campaign>,
    #[account(mut)]
    user: Signer<'info>,
    system_program: Program<'info, System>,
}

pub fn create(ctx: Context<Create>, name: String, description: String) -> Result<()> {
    require!(name.len() <= MAX_NAME_LEN, CrowdfundingError::NameTooLong);
    require!(
        description.len() <= MAX_DESCRIPTION_LEN,
        CrowdfundingError::DescriptionTooLong
    );

    let campaign = &mut ctx.accounts.campaign;
    campaign.bump = ctx.bumps.campaign;
    campaign.admin = ctx.accounts.user.key();
    campaign.name = name;
    campaign.description = description;
    campaign.amount_donated = 0;

    msg!("created campaign {}", campaign.key());

    emit!(CreateEvent {
        campaign: campaign.key(),
        admin: campaign.admin,
    });

    Ok(())
}

#[event]
struct CreateEvent {
    campaign: Pubkey,
    admin: Pubkey,
}
