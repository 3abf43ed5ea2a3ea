use crate::error::{ClientError, WalletError};
use anchor_lang::prelude::Pubkey;
use log::{info, warn};
use solana_sdk::{
    signature::{Keypair, Signer},
    transaction::Transaction,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConnectOptions {
    /// Connect only if the wallet already trusts this origin, without prompting.
    pub only_if_trusted: bool,
}

/// Connect/sign capability exposed by a wallet. Key material never leaves it.
#[allow(async_fn_in_trait)]
pub trait WalletCapability {
    fn name(&self) -> &str;

    async fn connect(&mut self, options: ConnectOptions) -> Result<Pubkey, WalletError>;

    /// Returns `transaction` with the wallet's signature added.
    async fn sign_transaction(&self, transaction: Transaction) -> Result<Transaction, WalletError>;
}

/// Wallet backed by a local keypair.
///
/// Like a browser wallet it remembers that it trusts the origin after the
/// first explicit connect, so a later silent connect succeeds.
pub struct KeypairWallet {
    keypair: Keypair,
    trusted: bool,
    connected: bool,
}

impl KeypairWallet {
    pub fn new(keypair: Keypair) -> Self {
        KeypairWallet {
            keypair,
            trusted: false,
            connected: false,
        }
    }

    /// Wallet that has already approved this origin.
    pub fn trusted(keypair: Keypair) -> Self {
        KeypairWallet {
            trusted: true,
            ..KeypairWallet::new(keypair)
        }
    }

    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    pub fn is_trusted(&self) -> bool {
        self.trusted
    }
}

impl WalletCapability for KeypairWallet {
    fn name(&self) -> &str {
        "keypair"
    }

    async fn connect(&mut self, options: ConnectOptions) -> Result<Pubkey, WalletError> {
        if options.only_if_trusted && !self.trusted {
            return Err(WalletError::NotTrusted);
        }
        self.trusted = true;
        self.connected = true;
        Ok(self.keypair.pubkey())
    }

    async fn sign_transaction(&self, mut transaction: Transaction) -> Result<Transaction, WalletError> {
        if !self.connected {
            return Err(WalletError::NotConnected);
        }
        let recent_blockhash = transaction.message.recent_blockhash;
        transaction
            .try_partial_sign(&[&self.keypair], recent_blockhash)
            .map_err(|e| WalletError::Signing(e.to_string()))?;
        Ok(transaction)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Disconnected,
    Connected(Pubkey),
}

/// The user's connection to an injected wallet.
///
/// `wallet` is `None` when no wallet capability was found in the host.
pub struct WalletSession<W> {
    wallet: Option<W>,
    identity: Option<Pubkey>,
}

impl<W: WalletCapability> WalletSession<W> {
    pub fn new(wallet: Option<W>) -> Self {
        WalletSession {
            wallet,
            identity: None,
        }
    }

    pub fn state(&self) -> SessionState {
        match self.identity {
            Some(identity) => SessionState::Connected(identity),
            None => SessionState::Disconnected,
        }
    }

    pub fn identity(&self) -> Option<Pubkey> {
        self.identity
    }

    pub fn wallet(&self) -> Option<&W> {
        self.wallet.as_ref()
    }

    /// Connects without prompting, only if the wallet already trusts us.
    pub async fn silent_connect(&mut self) -> Result<Pubkey, ClientError> {
        let wallet = self.wallet.as_mut().ok_or(ClientError::NoWalletFound)?;
        info!("{} wallet found", wallet.name());
        let identity = wallet
            .connect(ConnectOptions {
                only_if_trusted: true,
            })
            .await?;
        info!("connected with public key {}", identity);
        self.identity = Some(identity);
        Ok(identity)
    }

    /// User-initiated connect; the wallet may prompt.
    pub async fn connect(&mut self) -> Result<Pubkey, ClientError> {
        let wallet = match self.wallet.as_mut() {
            Some(wallet) => wallet,
            None => {
                warn!("no wallet capability available");
                return Err(ClientError::NoWalletFound);
            }
        };
        let identity = wallet.connect(ConnectOptions::default()).await?;
        info!("connected to public key {}", identity);
        self.identity = Some(identity);
        Ok(identity)
    }

    /// Forgets the identity, as a page reload would. Wallet-side trust is kept.
    pub fn teardown(&mut self) {
        self.identity = None;
    }
}
