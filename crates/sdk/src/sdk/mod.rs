mod factory;
mod read;
mod write;

use alloy::{
    network::EthereumWallet,
    primitives::{Address, TxHash},
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
};
use alloy_sol_types::SolCall;
use url::Url;

use crate::{
    Config, Environment,
    abi::{
        factory::LeaderboardFactory::{self, LeaderboardFactoryInstance},
        leaderboard::Leaderboard::{self, LeaderboardInstance},
    },
    error::{ContractKind, LeaderboardError},
    transport::{HttpTransport, ReqwestTransport},
};

/// Client of the leaderboard contracts and of the leaderboard indexer.
///
/// Holds the selected [`Config`], an optional signing key and an optional
/// leaderboard contract address. Contract bindings are created by
/// [`Self::factory_connect`] and [`Self::leaderboard_connect`], which must be
/// called before any operation of the respective contract.
///
/// Writes require the signing key and are signed by the account derived from
/// it. Reads never need it.
#[derive(derive_more::Debug)]
pub struct LeaderboardSdk<H = ReqwestTransport> {
    config: Config,
    #[debug(skip)]
    wallet_key: Option<String>,
    leaderboard_address: Option<String>,
    #[debug(skip)]
    factory: Option<LeaderboardFactoryInstance<DynProvider>>,
    #[debug(skip)]
    leaderboard: Option<LeaderboardInstance<DynProvider>>,
    #[debug(skip)]
    http: H,
}

impl LeaderboardSdk {
    /// Creates SDK for the environment. Performs no I/O.
    ///
    /// Both the key and the address are accepted with or without `0x`
    /// prefix.
    pub fn new(
        env: Environment,
        wallet_key: Option<&str>,
        contract_address: Option<&str>,
    ) -> Self {
        Self::with_config(env.config(), wallet_key, contract_address)
    }

    /// Creates SDK for a custom deployment.
    pub fn with_config(
        config: Config,
        wallet_key: Option<&str>,
        contract_address: Option<&str>,
    ) -> Self {
        Self {
            config,
            wallet_key: wallet_key.and_then(normalize_hex),
            leaderboard_address: contract_address.and_then(normalize_hex),
            factory: None,
            leaderboard: None,
            http: ReqwestTransport::default(),
        }
    }
}

impl<H: HttpTransport> LeaderboardSdk<H> {
    /// Replaces the transport of the indexer and profile service requests.
    pub fn with_http<T: HttpTransport>(self, http: T) -> LeaderboardSdk<T> {
        LeaderboardSdk {
            config: self.config,
            wallet_key: self.wallet_key,
            leaderboard_address: self.leaderboard_address,
            factory: self.factory,
            leaderboard: self.leaderboard,
            http,
        }
    }

    pub fn config(&self) -> &Config { &self.config }

    /// Normalized signing key, if set.
    pub fn wallet_key(&self) -> Option<&str> { self.wallet_key.as_deref() }

    /// Normalized leaderboard contract address, if set.
    pub fn leaderboard_address(&self) -> Option<&str> { self.leaderboard_address.as_deref() }

    pub fn http(&self) -> &H { &self.http }

    /// Binds the factory contract of the configured environment.
    ///
    /// Uses `provider` if given, otherwise an HTTP provider connected to
    /// [`Config::rpc_url`]. Returns `false` if the binding could not be
    /// created, the reason is logged. A zero factory address still binds, but
    /// factory operations then fail with
    /// [`LeaderboardError::FactoryAddressNotSet`].
    pub fn factory_connect(&mut self, provider: Option<DynProvider>) -> bool {
        match self.signing_provider(provider) {
            Ok(provider) => {
                self.factory = Some(LeaderboardFactory::new(
                    self.config.leaderboard_factory(),
                    provider,
                ));
                true
            },
            Err(err) => {
                tracing::error!(contract = %ContractKind::Factory, %err, "connection failed");
                false
            },
        }
    }

    /// Binds the leaderboard contract at the address given on construction.
    ///
    /// Without an address the binding points nowhere and all leaderboard
    /// operations keep failing with [`LeaderboardError::ContractAddressNotSet`]
    /// (or returning their empty value). Returns `false` if the binding could
    /// not be created, the reason is logged.
    pub fn leaderboard_connect(&mut self, provider: Option<DynProvider>) -> bool {
        let binding = parse_address(self.leaderboard_address.as_deref())
            .and_then(|address| Ok((address, self.signing_provider(provider)?)));
        match binding {
            Ok((address, provider)) => {
                self.leaderboard =
                    Some(Leaderboard::new(address.unwrap_or(Address::ZERO), provider));
                true
            },
            Err(err) => {
                tracing::error!(contract = %ContractKind::Leaderboard, %err, "connection failed");
                false
            },
        }
    }

    /// Wraps `provider` with the wallet of the signing key, if there is one.
    ///
    /// Transactions are signed for [`Config::chain_id`].
    fn signing_provider(
        &self,
        provider: Option<DynProvider>,
    ) -> Result<DynProvider, LeaderboardError> {
        let signer = self
            .wallet_key
            .as_deref()
            .map(parse_signer)
            .transpose()?;
        let Some(signer) = signer else {
            return Ok(match provider {
                Some(provider) => provider,
                None => ProviderBuilder::new()
                    .connect_http(Url::parse(self.config.rpc_url())?)
                    .erased(),
            });
        };
        // Chain ID is configured, only gas and nonce are fetched
        let builder = ProviderBuilder::new()
            .disable_recommended_fillers()
            .with_gas_estimation()
            .with_simple_nonce_management()
            .with_chain_id(self.config.chain_id())
            .wallet(EthereumWallet::from(signer));
        Ok(match provider {
            Some(provider) => builder.connect_provider(provider).erased(),
            None => builder
                .connect_http(Url::parse(self.config.rpc_url())?)
                .erased(),
        })
    }

    fn require_wallet_key(&self) -> Result<(), LeaderboardError> {
        match self.wallet_key {
            Some(_) => Ok(()),
            None => Err(LeaderboardError::WalletKeyNotSet),
        }
    }

    fn factory(&self) -> Result<&LeaderboardFactoryInstance<DynProvider>, LeaderboardError> {
        if self.config.leaderboard_factory() == Address::ZERO {
            return Err(LeaderboardError::FactoryAddressNotSet);
        }
        self.factory
            .as_ref()
            .ok_or(LeaderboardError::NotConnected(ContractKind::Factory))
    }

    fn leaderboard(&self) -> Result<&LeaderboardInstance<DynProvider>, LeaderboardError> {
        if self.leaderboard_address.is_none() {
            return Err(LeaderboardError::ContractAddressNotSet);
        }
        self.leaderboard
            .as_ref()
            .ok_or(LeaderboardError::NotConnected(ContractKind::Leaderboard))
    }

    fn signing_factory(
        &self,
    ) -> Result<&LeaderboardFactoryInstance<DynProvider>, LeaderboardError> {
        self.require_wallet_key()?;
        self.factory()
    }

    fn signing_leaderboard(&self) -> Result<&LeaderboardInstance<DynProvider>, LeaderboardError> {
        self.require_wallet_key()?;
        self.leaderboard()
    }
}

/// Prefixes `0x` unless already present.
///
/// Empty values and a bare `0x` count as absent.
pub fn normalize_hex(value: &str) -> Option<String> {
    let value = if value.starts_with("0x") { value.to_string() } else { format!("0x{value}") };
    (value.len() > 2).then_some(value)
}

fn parse_address(address: Option<&str>) -> Result<Option<Address>, LeaderboardError> {
    address
        .map(|address| {
            address
                .parse::<Address>()
                .map_err(|err| LeaderboardError::InvalidAddress(format!("{address}: {err}")))
        })
        .transpose()
}

fn parse_signer(key: &str) -> Result<PrivateKeySigner, LeaderboardError> {
    key.parse::<PrivateKeySigner>()
        .map_err(|err| LeaderboardError::InvalidKey(err.to_string()))
}

/// Submits the transaction and returns its hash without waiting for the
/// receipt.
async fn submit<P, C>(
    call: alloy::contract::SolCallBuilder<P, C>,
    operation: &'static str,
) -> Result<TxHash, LeaderboardError>
where
    P: Provider,
    C: SolCall,
{
    let pending = call.send().await?;
    let tx_hash = *pending.tx_hash();
    tracing::debug!(operation, %tx_hash, "transaction submitted");
    Ok(tx_hash)
}

/// Logs a failed read and falls back to the empty value.
fn or_empty<T: Default>(operation: &'static str, result: Result<T, LeaderboardError>) -> T {
    result.unwrap_or_else(|err| {
        tracing::debug!(operation, %err, "read failed");
        T::default()
    })
}
