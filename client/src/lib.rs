//! Wallet session and campaign creation client for the `crowdfunding`
//! program.
//!
//! The host injects a [`WalletCapability`] and a [`LedgerTransport`], drives
//! the [`CampaignApp`] lifecycle (`init`, `connect`, `create_campaign`,
//! `teardown`) and renders whichever [`Action`] is live.

pub mod address;
pub mod app;
pub mod campaign;
pub mod config;
pub mod connection;
pub mod error;
pub mod idl;
pub mod program;
pub mod wallet;

pub use address::{derive_campaign_address, CampaignAddress};
pub use app::{Action, CampaignApp, Notice};
pub use campaign::{create_campaign, create_instruction, fetch_campaign};
pub use config::{ClientConfig, Cluster};
pub use connection::{LedgerConnection, LedgerTransport};
pub use error::{ClientError, ErrorKind, InvocationError, TransportError, WalletError};
pub use idl::InterfaceDefinition;
pub use program::{build_program_handle, ProgramHandle, Provider};
pub use wallet::{ConnectOptions, KeypairWallet, SessionState, WalletCapability, WalletSession};
