use crate::error::ClientError;
use anchor_lang::prelude::Pubkey;
use core::fmt;
use log::debug;

/// Program-derived address of a campaign account and the bump that takes it
/// off the ed25519 curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CampaignAddress {
    pub address: Pubkey,
    pub bump: u8,
}

impl fmt::Display for CampaignAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.address, f)
    }
}

/// Derives the campaign account owned by `program_id` for `identity`.
///
/// Seeds are `[namespace_tag, identity]`, matching the program's `create`
/// accounts constraint, so the result only depends on its three inputs.
pub fn derive_campaign_address(
    namespace_tag: &[u8],
    identity: &Pubkey,
    program_id: &Pubkey,
) -> Result<CampaignAddress, ClientError> {
    let (address, bump) =
        Pubkey::try_find_program_address(&[namespace_tag, identity.as_ref()], program_id)
            .ok_or(ClientError::DerivationExhausted)?;
    debug!("derived campaign {} (bump {}) for {}", address, bump, identity);
    Ok(CampaignAddress { address, bump })
}
