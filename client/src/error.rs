use anchor_lang::prelude::Pubkey;
use solana_sdk::{instruction::InstructionError, transaction::TransactionError};
use thiserror::Error;

/// Custom error returned by the system program when the target account is in use.
const SYSTEM_ACCOUNT_ALREADY_IN_USE: u32 = 0;
/// Custom error returned by the system program when the payer cannot cover rent.
const SYSTEM_RESULT_WITH_NEGATIVE_LAMPORTS: u32 = 1;
/// First custom error code Anchor assigns to program-defined errors.
const ANCHOR_ERROR_CODE_OFFSET: u32 = 6000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("user rejected the request")]
    UserRejected,
    #[error("origin is not trusted by the wallet")]
    NotTrusted,
    #[error("wallet is not connected")]
    NotConnected,
    #[error("signing failed: {0}")]
    Signing(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("transaction failed: {0}")]
    Transaction(#[from] TransactionError),
    #[error("rpc error: {0}")]
    Rpc(String),
    #[error("malformed endpoint `{0}`")]
    MalformedEndpoint(String),
    #[error("no recent blockhash available")]
    BlockhashNotFound,
    #[error("unexpected account {0}: {1}")]
    UnexpectedAccount(Pubkey, String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvocationError {
    #[error("wallet rejected the signature request: {0}")]
    SignatureRejected(#[source] WalletError),
    #[error("campaign account {0} already exists")]
    AccountAlreadyExists(Pubkey),
    #[error("insufficient funds to pay for the campaign account")]
    InsufficientFunds,
    #[error("program rejected the instruction with error code {0}")]
    Program(u32),
    #[error("transaction rejected: {0}")]
    Rejected(TransactionError),
    #[error("invalid instruction payload: {0}")]
    InvalidPayload(String),
    #[error(transparent)]
    Transport(TransportError),
}

impl InvocationError {
    /// Classifies a transport failure of a transaction that targeted `campaign`.
    pub fn classify(err: TransportError, campaign: Pubkey) -> Self {
        let tx_err = match err {
            TransportError::Transaction(tx_err) => tx_err,
            other => return InvocationError::Transport(other),
        };
        match tx_err {
            TransactionError::InstructionError(_, InstructionError::Custom(code)) => match code {
                SYSTEM_ACCOUNT_ALREADY_IN_USE => InvocationError::AccountAlreadyExists(campaign),
                SYSTEM_RESULT_WITH_NEGATIVE_LAMPORTS => InvocationError::InsufficientFunds,
                code if code >= ANCHOR_ERROR_CODE_OFFSET => InvocationError::Program(code),
                _ => InvocationError::Rejected(tx_err),
            },
            TransactionError::AccountNotFound
            | TransactionError::InsufficientFundsForFee
            | TransactionError::InsufficientFundsForRent { .. } => {
                InvocationError::InsufficientFunds
            }
            _ => InvocationError::Rejected(tx_err),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("wallet not found")]
    NoWalletFound,
    #[error("wallet authorization failed: {0}")]
    Authorization(#[from] WalletError),
    #[error("wallet is not connected")]
    NotConnected,
    #[error("interface definition mismatch: {0}")]
    Interface(String),
    #[error("no bump yields an off-curve campaign address")]
    DerivationExhausted,
    #[error("campaign creation failed: {0}")]
    Invocation(#[from] InvocationError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No wallet capability is available.
    Absence,
    /// The wallet refused or has not been connected.
    Authorization,
    /// The instruction could not be encoded, signed, sent or executed.
    Invocation,
    /// Unexpected condition that a retry will not fix.
    Fatal,
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::NoWalletFound => ErrorKind::Absence,
            ClientError::Authorization(_) | ClientError::NotConnected => ErrorKind::Authorization,
            ClientError::Interface(_) | ClientError::Invocation(_) => ErrorKind::Invocation,
            ClientError::DerivationExhausted => ErrorKind::Fatal,
        }
    }
}
