//! The engine's TOML configuration file.

use {
    crate::{
        domain::{eth, quote},
        infra::contracts,
    },
    anyhow::{Context, Result, ensure},
    serde::Deserialize,
    serde_ext::HexAddress,
    serde_with::serde_as,
    std::{path::Path, time::Duration},
    tokio::fs,
};

/// The response shape of `/quote`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuoteFormat {
    #[default]
    Standard,
    Legacy,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// The solver account reported in quotes.
    pub solver_address: eth::Address,
    pub settlement_contract: eth::ContractAddress,
    pub quote_gas: eth::Gas,
    pub solution_gas: eth::Gas,
    pub quote_ratio: quote::Ratio,
    pub quote_format: QuoteFormat,
    pub cache_sweep_interval: Duration,
    pub solution_retention: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            solver_address: eth::Address::ZERO,
            settlement_contract: contracts::SETTLEMENT,
            quote_gas: eth::Gas(150_000),
            solution_gas: eth::Gas(250_000),
            quote_ratio: quote::Ratio::default(),
            quote_format: QuoteFormat::Standard,
            cache_sweep_interval: Duration::from_secs(30),
            solution_retention: Duration::from_secs(60),
        }
    }
}

#[serde_as]
#[derive(Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct File {
    /// The solver account reported in quotes.
    #[serde_as(as = "Option<HexAddress>")]
    #[serde(default)]
    solver_address: Option<eth::Address>,

    /// The settlement contract solutions are encoded for.
    #[serde_as(as = "Option<HexAddress>")]
    #[serde(default)]
    settlement_contract: Option<eth::Address>,

    /// The gas estimate reported in quotes.
    quote_gas: Option<u64>,

    /// The gas estimate reported for solutions.
    solution_gas: Option<u64>,

    /// Exchange ratio `[numerator, denominator]` used for quoting.
    quote_price_ratio: Option<[u64; 2]>,

    #[serde(default)]
    quote_format: QuoteFormat,

    /// How often expired solutions are evicted.
    #[serde(default, with = "humantime_serde")]
    cache_sweep_interval: Option<Duration>,

    /// How long solutions remain revealable after their auction deadline.
    #[serde(default, with = "humantime_serde")]
    solution_retention: Option<Duration>,
}

/// Loads the configuration from a TOML file, or the default configuration if
/// no file is given.
pub async fn load(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let data = fs::read_to_string(path)
        .await
        .with_context(|| format!("I/O error while reading {path:?}"))?;
    parse(&data).with_context(|| format!("invalid configuration in {path:?}"))
}

/// Parses the configuration from TOML.
pub fn parse(data: &str) -> Result<Config> {
    let file = toml::de::from_str::<File>(data).context("TOML syntax error")?;
    let default = Config::default();

    let quote_ratio = match file.quote_price_ratio {
        Some([numerator, denominator]) => quote::Ratio::new(numerator, denominator)?,
        None => default.quote_ratio,
    };
    let cache_sweep_interval = file
        .cache_sweep_interval
        .unwrap_or(default.cache_sweep_interval);
    ensure!(
        !cache_sweep_interval.is_zero(),
        "cache-sweep-interval must not be zero"
    );

    Ok(Config {
        solver_address: file.solver_address.unwrap_or(default.solver_address),
        settlement_contract: file
            .settlement_contract
            .map(eth::ContractAddress)
            .unwrap_or(default.settlement_contract),
        quote_gas: file.quote_gas.map(eth::Gas).unwrap_or(default.quote_gas),
        solution_gas: file
            .solution_gas
            .map(eth::Gas)
            .unwrap_or(default.solution_gas),
        quote_ratio,
        quote_format: file.quote_format,
        cache_sweep_interval,
        solution_retention: file
            .solution_retention
            .unwrap_or(default.solution_retention),
    })
}
