use crate::config::*;
use anchor_lang::prelude::*;

#[account]
pub struct Campaign {
    pub bump: u8,
    pub admin: Pubkey,
    pub name: String,
    pub description: String,
    pub amount_donated: u64,
}
impl Campaign {
    pub const SPACE: usize = 1 + 32 + (4 + MAX_NAME_LEN) + (4 + MAX_DESCRIPTION_LEN) + 8;
}
