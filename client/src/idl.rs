//! Program interface definition, read from the Anchor IDL.

use crate::error::ClientError;
use anchor_lang::{prelude::Pubkey, Discriminator};
use core::str::FromStr;
use serde::Deserialize;

const BUNDLED_IDL: &str = include_str!("../idl/crowdfunding.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IdlMetadata {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IdlInstructionAccount {
    pub name: String,
    #[serde(default)]
    pub writable: bool,
    #[serde(default)]
    pub signer: bool,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IdlField {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IdlInstruction {
    pub name: String,
    pub discriminator: Vec<u8>,
    #[serde(default)]
    pub accounts: Vec<IdlInstructionAccount>,
    #[serde(default)]
    pub args: Vec<IdlField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IdlAccount {
    pub name: String,
    pub discriminator: Vec<u8>,
}

/// The parts of the program's published interface the client encodes against.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InterfaceDefinition {
    pub address: String,
    pub metadata: IdlMetadata,
    pub instructions: Vec<IdlInstruction>,
    #[serde(default)]
    pub accounts: Vec<IdlAccount>,
}

impl InterfaceDefinition {
    pub fn from_json(json: &str) -> Result<Self, ClientError> {
        serde_json::from_str(json).map_err(|e| ClientError::Interface(e.to_string()))
    }

    /// The IDL shipped with this client.
    pub fn bundled() -> Result<Self, ClientError> {
        Self::from_json(BUNDLED_IDL)
    }

    pub fn program_id(&self) -> Result<Pubkey, ClientError> {
        Pubkey::from_str(&self.address)
            .map_err(|_| ClientError::Interface(format!("invalid program address {}", self.address)))
    }

    pub fn instruction(&self, name: &str) -> Result<&IdlInstruction, ClientError> {
        self.instructions
            .iter()
            .find(|ix| ix.name == name)
            .ok_or_else(|| ClientError::Interface(format!("no `{}` instruction", name)))
    }

    /// Checks that the `create` instruction has the shape the compiled
    /// bindings encode: discriminator, `(name: string, description: string)`
    /// and accounts `campaign`, `user`, `system_program` in that order.
    pub fn check_create(&self) -> Result<(), ClientError> {
        let ix = self.instruction("create")?;
        if ix.discriminator != crowdfunding::instruction::Create::DISCRIMINATOR {
            return Err(mismatch("create discriminator"));
        }

        let args: Vec<_> = ix
            .args
            .iter()
            .map(|arg| (arg.name.as_str(), arg.ty.as_str()))
            .collect();
        if args != [("name", Some("string")), ("description", Some("string"))] {
            return Err(mismatch("create arguments"));
        }

        match ix.accounts.as_slice() {
            [campaign, user, system_program]
                if campaign.name == "campaign"
                    && campaign.writable
                    && !campaign.signer
                    && user.name == "user"
                    && user.writable
                    && user.signer
                    && system_program.name == "system_program"
                    && system_program.address.as_deref()
                        == Some(&*solana_sdk::system_program::ID.to_string()) =>
            {
                Ok(())
            }
            _ => Err(mismatch("create accounts")),
        }
    }
}

fn mismatch(what: &str) -> ClientError {
    ClientError::Interface(format!("{} differ from the compiled program", what))
}
