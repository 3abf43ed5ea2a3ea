use crate::{
    address::CampaignAddress,
    campaign::create_campaign,
    config::ClientConfig,
    connection::{LedgerConnection, LedgerTransport},
    error::{ClientError, WalletError},
    idl::InterfaceDefinition,
    program::{build_program_handle, Provider},
    wallet::{SessionState, WalletCapability, WalletSession},
};
use anchor_lang::prelude::Pubkey;
use log::{error, info, warn};

/// The single control the host should offer for the current session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ConnectWallet,
    CreateCampaign,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::ConnectWallet => "Connect to Wallet",
            Action::CreateCampaign => "Create a Campaign",
        }
    }
}

/// User-facing message the host should surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    WalletNotFound,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::WalletNotFound => "Wallet not found! Install a Solana wallet.",
        }
    }
}

/// Session lifecycle driven by the hosting application.
pub struct CampaignApp<T, W> {
    interface: InterfaceDefinition,
    connection: LedgerConnection<T>,
    session: WalletSession<W>,
    notice: Option<Notice>,
}

impl<T: LedgerTransport, W: WalletCapability> CampaignApp<T, W> {
    pub fn new(
        config: &ClientConfig,
        interface: InterfaceDefinition,
        transport: T,
        wallet: Option<W>,
    ) -> Self {
        CampaignApp {
            interface,
            connection: LedgerConnection::open(config.cluster.url(), config.commitment, transport),
            session: WalletSession::new(wallet),
            notice: None,
        }
    }

    pub fn connection(&self) -> &LedgerConnection<T> {
        &self.connection
    }

    pub fn session(&self) -> &WalletSession<W> {
        &self.session
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn action(&self) -> Action {
        match self.session.state() {
            SessionState::Disconnected => Action::ConnectWallet,
            SessionState::Connected(_) => Action::CreateCampaign,
        }
    }

    /// Page load: reconnects silently if the wallet already trusts us.
    /// Never fails; the resulting state says whether it worked.
    pub async fn init(&mut self) -> SessionState {
        match self.session.silent_connect().await {
            Ok(_) => self.notice = None,
            Err(ClientError::NoWalletFound) => {
                warn!("wallet not found");
                self.notice = Some(Notice::WalletNotFound);
            }
            Err(ClientError::Authorization(WalletError::NotTrusted)) => {
                info!("wallet has not approved this origin yet");
            }
            Err(err) => error!("silent connect failed: {}", err),
        }
        self.session.state()
    }

    pub async fn connect(&mut self) -> Result<Pubkey, ClientError> {
        match self.session.connect().await {
            Ok(identity) => {
                self.notice = None;
                Ok(identity)
            }
            Err(err) => {
                if err == ClientError::NoWalletFound {
                    self.notice = Some(Notice::WalletNotFound);
                }
                error!("wallet connect failed: {}", err);
                Err(err)
            }
        }
    }

    /// Builds a fresh program handle for the current identity and submits
    /// the `create` instruction.
    pub async fn create_campaign(
        &self,
        name: &str,
        description: &str,
    ) -> Result<CampaignAddress, ClientError> {
        let provider = Provider::new(&self.connection, &self.session)?;
        let program_id = self.interface.program_id()?;
        let handle = build_program_handle(&self.interface, program_id, provider)?;
        create_campaign(&handle, name, description).await
    }

    /// Page unload: the identity and any pending notice are forgotten.
    pub fn teardown(&mut self) {
        self.session.teardown();
        self.notice = None;
    }
}
