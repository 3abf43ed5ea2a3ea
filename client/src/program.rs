use crate::{
    connection::{LedgerConnection, LedgerTransport},
    error::{ClientError, InvocationError, TransportError},
    idl::InterfaceDefinition,
    wallet::{WalletCapability, WalletSession},
};
use anchor_lang::{prelude::Pubkey, AccountDeserialize};
use solana_sdk::{
    instruction::Instruction, message::Message, signature::Signature, transaction::Transaction,
};

/// Authenticated connection to the ledger: who signs and where it is sent.
pub struct Provider<'a, T, W> {
    connection: &'a LedgerConnection<T>,
    wallet: &'a W,
    identity: Pubkey,
}

impl<'a, T: LedgerTransport, W: WalletCapability> Provider<'a, T, W> {
    /// Captures the session's current identity. Fails if it is not connected.
    pub fn new(
        connection: &'a LedgerConnection<T>,
        session: &'a WalletSession<W>,
    ) -> Result<Self, ClientError> {
        let identity = session.identity().ok_or(ClientError::NotConnected)?;
        let wallet = session.wallet().ok_or(ClientError::NoWalletFound)?;
        Ok(Provider {
            connection,
            wallet,
            identity,
        })
    }
}

pub struct ProgramHandle<'a, T, W> {
    interface: &'a InterfaceDefinition,
    program_id: Pubkey,
    provider: Provider<'a, T, W>,
}

pub fn build_program_handle<'a, T: LedgerTransport, W: WalletCapability>(
    interface: &'a InterfaceDefinition,
    program_id: Pubkey,
    provider: Provider<'a, T, W>,
) -> Result<ProgramHandle<'a, T, W>, ClientError> {
    if interface.program_id()? != program_id {
        return Err(ClientError::Interface(format!(
            "interface describes {} but handle targets {}",
            interface.address, program_id
        )));
    }
    Ok(ProgramHandle {
        interface,
        program_id,
        provider,
    })
}

impl<'a, T: LedgerTransport, W: WalletCapability> ProgramHandle<'a, T, W> {
    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    pub fn interface(&self) -> &InterfaceDefinition {
        self.interface
    }

    /// Public key of the wallet this handle signs with.
    pub fn identity(&self) -> Pubkey {
        self.provider.identity
    }

    pub fn connection(&self) -> &LedgerConnection<T> {
        self.provider.connection
    }

    /// Signs `instructions` with the wallet as fee payer and sends them at the
    /// connection's commitment.
    pub async fn send(&self, instructions: &[Instruction]) -> Result<Signature, InvocationError> {
        let connection = self.provider.connection;
        let recent_blockhash = connection
            .latest_blockhash()
            .await
            .map_err(InvocationError::Transport)?;
        let message = Message::new_with_blockhash(
            instructions,
            Some(&self.provider.identity),
            &recent_blockhash,
        );
        let transaction = self
            .provider
            .wallet
            .sign_transaction(Transaction::new_unsigned(message))
            .await
            .map_err(InvocationError::SignatureRejected)?;
        connection
            .send_and_confirm(transaction)
            .await
            .map_err(InvocationError::Transport)
    }

    /// Reads and deserializes an account owned by the program.
    pub async fn fetch<A: AccountDeserialize>(
        &self,
        address: &Pubkey,
    ) -> Result<Option<A>, TransportError> {
        let account = match self.provider.connection.get_account(address).await? {
            Some(account) if account.owner == self.program_id => account,
            Some(_) => {
                return Err(TransportError::UnexpectedAccount(
                    *address,
                    format!("not owned by {}", self.program_id),
                ))
            }
            None => return Ok(None),
        };
        A::try_deserialize(&mut account.data.as_slice())
            .map(Some)
            .map_err(|e| TransportError::UnexpectedAccount(*address, e.to_string()))
    }
}
