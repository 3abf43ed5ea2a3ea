use crate::{
    address::{derive_campaign_address, CampaignAddress},
    config::{CAMPAIGN_SEED, MAX_DESCRIPTION_LEN, MAX_NAME_LEN},
    connection::LedgerTransport,
    error::{ClientError, InvocationError, TransportError},
    program::ProgramHandle,
    wallet::WalletCapability,
};
use anchor_lang::{prelude::Pubkey, InstructionData, ToAccountMetas};
use crowdfunding::state::Campaign;
use log::{error, info};
use solana_sdk::{instruction::Instruction, system_program};

pub fn create_instruction(
    program_id: Pubkey,
    campaign: Pubkey,
    user: Pubkey,
    name: &str,
    description: &str,
) -> Result<Instruction, InvocationError> {
    if name.len() > MAX_NAME_LEN {
        return Err(InvocationError::InvalidPayload(format!(
            "name is {} bytes, at most {} allowed",
            name.len(),
            MAX_NAME_LEN
        )));
    }
    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(InvocationError::InvalidPayload(format!(
            "description is {} bytes, at most {} allowed",
            description.len(),
            MAX_DESCRIPTION_LEN
        )));
    }
    Ok(Instruction {
        program_id,
        data: crowdfunding::instruction::Create {
            name: name.to_string(),
            description: description.to_string(),
        }
        .data(),
        accounts: crowdfunding::accounts::Create {
            campaign,
            user,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
    })
}

/// Creates the caller's campaign account and returns its address.
///
/// Nothing guards against a second submission for the same identity: the
/// program rejects it and the error comes back as `AccountAlreadyExists`.
pub async fn create_campaign<T: LedgerTransport, W: WalletCapability>(
    handle: &ProgramHandle<'_, T, W>,
    name: &str,
    description: &str,
) -> Result<CampaignAddress, ClientError> {
    let user = handle.identity();
    let campaign = match derive_campaign_address(CAMPAIGN_SEED, &user, handle.program_id())
        .and_then(|campaign| handle.interface().check_create().map(|_| campaign))
    {
        Ok(campaign) => campaign,
        Err(err) => {
            error!("failed to prepare campaign for {}: {}", user, err);
            return Err(err);
        }
    };

    let result = match create_instruction(
        *handle.program_id(),
        campaign.address,
        user,
        name,
        description,
    ) {
        Ok(ix) => handle.send(&[ix]).await.map_err(|err| match err {
            InvocationError::Transport(err) => InvocationError::classify(err, campaign.address),
            other => other,
        }),
        Err(err) => Err(err),
    };

    match result {
        Ok(signature) => {
            info!(
                "created a new campaign with address {} ({})",
                campaign, signature
            );
            Ok(campaign)
        }
        Err(err) => {
            error!("failed to create campaign {}: {}", campaign, err);
            Err(err.into())
        }
    }
}

/// Reads a campaign record back at the connection's commitment.
pub async fn fetch_campaign<T: LedgerTransport, W: WalletCapability>(
    handle: &ProgramHandle<'_, T, W>,
    campaign: &Pubkey,
) -> Result<Option<Campaign>, TransportError> {
    handle.fetch(campaign).await
}
