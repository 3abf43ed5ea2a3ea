use crate::error::TransportError;
use anchor_lang::prelude::Pubkey;
use log::debug;
use solana_sdk::{
    account::Account, commitment_config::CommitmentLevel, hash::Hash, signature::Signature,
    transaction::Transaction,
};

/// Request/response channel to a ledger node.
///
/// Every call carries the commitment level the caller wants the node to
/// answer at; implementations must not substitute their own.
#[allow(async_fn_in_trait)]
pub trait LedgerTransport {
    async fn latest_blockhash(&self, commitment: CommitmentLevel) -> Result<Hash, TransportError>;

    /// Submits `transaction` and resolves once it reaches `commitment`.
    async fn send_transaction(
        &self,
        transaction: Transaction,
        commitment: CommitmentLevel,
    ) -> Result<(), TransportError>;

    async fn get_account(
        &self,
        address: &Pubkey,
        commitment: CommitmentLevel,
    ) -> Result<Option<Account>, TransportError>;
}

pub struct LedgerConnection<T> {
    endpoint: String,
    commitment: CommitmentLevel,
    transport: T,
}

impl<T: LedgerTransport> LedgerConnection<T> {
    /// Binds `transport` to `endpoint`. Nothing is sent until the first request,
    /// which is also where a malformed endpoint is reported.
    pub fn open(endpoint: impl Into<String>, commitment: CommitmentLevel, transport: T) -> Self {
        LedgerConnection {
            endpoint: endpoint.into(),
            commitment,
            transport,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn commitment(&self) -> CommitmentLevel {
        self.commitment
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn check_endpoint(&self) -> Result<(), TransportError> {
        let rest = self
            .endpoint
            .strip_prefix("https://")
            .or_else(|| self.endpoint.strip_prefix("http://"));
        match rest {
            Some(host) if !host.is_empty() && !host.starts_with('/') => Ok(()),
            _ => Err(TransportError::MalformedEndpoint(self.endpoint.clone())),
        }
    }

    pub async fn latest_blockhash(&self) -> Result<Hash, TransportError> {
        self.check_endpoint()?;
        self.transport.latest_blockhash(self.commitment).await
    }

    /// Sends a signed transaction and waits for the connection's commitment.
    pub async fn send_and_confirm(&self, transaction: Transaction) -> Result<Signature, TransportError> {
        self.check_endpoint()?;
        let signature = transaction.signatures.first().cloned().unwrap_or_default();
        debug!(
            "sending {} to {} at {:?}",
            signature, self.endpoint, self.commitment
        );
        self.transport
            .send_transaction(transaction, self.commitment)
            .await?;
        Ok(signature)
    }

    pub async fn get_account(&self, address: &Pubkey) -> Result<Option<Account>, TransportError> {
        self.check_endpoint()?;
        self.transport.get_account(address, self.commitment).await
    }
}

#[cfg(feature = "banks-client")]
mod banks {
    use super::*;
    use solana_program_test::{BanksClient, BanksClientError};

    impl From<BanksClientError> for TransportError {
        fn from(err: BanksClientError) -> Self {
            match err {
                BanksClientError::TransactionError(err)
                | BanksClientError::SimulationError { err, .. } => TransportError::Transaction(err),
                other => TransportError::Rpc(other.to_string()),
            }
        }
    }

    impl LedgerTransport for BanksClient {
        async fn latest_blockhash(&self, commitment: CommitmentLevel) -> Result<Hash, TransportError> {
            self.clone()
                .get_latest_blockhash_with_commitment(commitment)
                .await?
                .map(|(hash, _)| hash)
                .ok_or(TransportError::BlockhashNotFound)
        }

        async fn send_transaction(
            &self,
            transaction: Transaction,
            commitment: CommitmentLevel,
        ) -> Result<(), TransportError> {
            self.clone()
                .process_transaction_with_commitment(transaction, commitment)
                .await?;
            Ok(())
        }

        async fn get_account(
            &self,
            address: &Pubkey,
            commitment: CommitmentLevel,
        ) -> Result<Option<Account>, TransportError> {
            Ok(self
                .clone()
                .get_account_with_commitment(*address, commitment)
                .await?)
        }
    }
}
