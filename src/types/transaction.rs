use super::{ContractCall, TokenTransfer};
use ethers::types::U256;
use serde::{Deserialize, Serialize};

/// Who signs a transaction. The nonce is only set when the caller knows it,
/// otherwise the signer resolves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    pub address: String,
    #[serde(default)]
    pub nonce: Option<u64>,
}

impl Sender {
    pub fn new(address: &str) -> Sender {
        Sender {
            address: address.to_string(),
            nonce: None,
        }
    }

    pub fn with_nonce(mut self, nonce: u64) -> Sender {
        self.nonce = Some(nonce);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferKind {
    None,
    Native,
    SingleToken,
    MultiToken,
}

/// Unsigned transaction description, handed to the external signer as is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub sender: String,
    pub receiver: String,
    pub nonce: Option<u64>,
    pub value: U256,
    pub chain_id: String,
    pub gas_limit: u64,
    pub call: ContractCall,
    pub token_transfers: Vec<TokenTransfer>,
}

impl Transaction {
    pub fn transfer_kind(&self) -> TransferKind {
        match (self.value.is_zero(), self.token_transfers.len()) {
            (true, 0) => TransferKind::None,
            (false, _) => TransferKind::Native,
            (true, 1) => TransferKind::SingleToken,
            (true, _) => TransferKind::MultiToken,
        }
    }
}

/// Collects the pieces of a [`Transaction`] before it is sealed.
pub struct TransactionBuilder {
    call: ContractCall,
    sender: Sender,
    value: U256,
    token_transfers: Vec<TokenTransfer>,
    gas_limit: u64,
}

impl TransactionBuilder {
    pub fn new(call: ContractCall, sender: &Sender) -> TransactionBuilder {
        TransactionBuilder {
            call,
            sender: sender.clone(),
            value: U256::zero(),
            token_transfers: Vec::new(),
            gas_limit: 0,
        }
    }

    pub fn value(mut self, value: U256) -> TransactionBuilder {
        self.value = value;
        self
    }

    pub fn token_transfer(mut self, transfer: TokenTransfer) -> TransactionBuilder {
        self.token_transfers.push(transfer);
        self
    }

    pub fn token_transfers(
        mut self,
        transfers: impl IntoIterator<Item = TokenTransfer>,
    ) -> TransactionBuilder {
        self.token_transfers.extend(transfers);
        self
    }

    pub fn gas_limit(mut self, gas_limit: u64) -> TransactionBuilder {
        self.gas_limit = gas_limit;
        self
    }

    pub fn build(self, chain_id: &str) -> Transaction {
        Transaction {
            receiver: self.call.contract.clone(),
            sender: self.sender.address,
            nonce: self.sender.nonce,
            value: self.value,
            chain_id: chain_id.to_string(),
            gas_limit: self.gas_limit,
            call: self.call,
            token_transfers: self.token_transfers,
        }
    }
}
