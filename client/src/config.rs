use core::{fmt, str::FromStr};
use solana_sdk::commitment_config::CommitmentLevel;

pub use crowdfunding::config::{CAMPAIGN_SEED, MAX_DESCRIPTION_LEN, MAX_NAME_LEN};

pub const DEFAULT_CAMPAIGN_NAME: &str = "Campaign Name";
pub const DEFAULT_CAMPAIGN_DESCRIPTION: &str = "Campaign Description";

/// Named network whose public RPC endpoint the client talks to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cluster {
    #[default]
    Devnet,
    Testnet,
    MainnetBeta,
    Localnet,
    Custom(String),
}

impl Cluster {
    pub fn url(&self) -> &str {
        match self {
            Cluster::Devnet => "https://api.devnet.solana.com",
            Cluster::Testnet => "https://api.testnet.solana.com",
            Cluster::MainnetBeta => "https://api.mainnet-beta.solana.com",
            Cluster::Localnet => "http://127.0.0.1:8899",
            Cluster::Custom(url) => url,
        }
    }
}

impl FromStr for Cluster {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "devnet" | "d" => Cluster::Devnet,
            "testnet" | "t" => Cluster::Testnet,
            "mainnet-beta" | "mainnet" | "m" => Cluster::MainnetBeta,
            "localnet" | "localhost" | "l" => Cluster::Localnet,
            _ => Cluster::Custom(s.to_string()),
        })
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cluster::Devnet => f.write_str("devnet"),
            Cluster::Testnet => f.write_str("testnet"),
            Cluster::MainnetBeta => f.write_str("mainnet-beta"),
            Cluster::Localnet => f.write_str("localnet"),
            Cluster::Custom(url) => f.write_str(url),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub cluster: Cluster,
    pub commitment: CommitmentLevel,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            cluster: Cluster::Devnet,
            commitment: CommitmentLevel::Processed,
        }
    }
}
