use anchor_lang::prelude::*;

#[constant]
pub const CAMPAIGN_SEED: &[u8] = b"CAMPAIGN_DEMO";
#[constant]
pub const MAX_NAME_LEN: usize = 64;
#[constant]
pub const MAX_DESCRIPTION_LEN: usize = 512;
