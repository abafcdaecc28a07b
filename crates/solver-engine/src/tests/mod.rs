//! End-to-end tests running the engine's HTTP API in-process.

use {
    reqwest::StatusCode,
    serde_json::{Value, json},
    std::{io::Write, net::SocketAddr},
    tokio::{sync::oneshot, task::JoinHandle},
};

mod reveal;

/// The configuration file the engine is started with.
pub enum Config {
    None,
    String(String),
}

/// A running solver engine listening on a random local port.
pub struct SolverEngine {
    url: String,
    client: reqwest::Client,
    handle: JoinHandle<anyhow::Result<()>>,
    _config: Option<tempfile::NamedTempFile>,
}

impl SolverEngine {
    pub async fn new(config: Config) -> Self {
        let mut args = vec![
            "/test/solver-engine/path".to_owned(),
            "--addr=127.0.0.1:0".to_owned(),
            "--log=warn,solver_engine=debug".to_owned(),
        ];
        let file = match config {
            Config::None => None,
            Config::String(contents) => {
                let mut file = tempfile::NamedTempFile::new().unwrap();
                file.write_all(contents.as_bytes()).unwrap();
                args.push(format!("--config={}", file.path().display()));
                Some(file)
            }
        };

        let (bind, bound) = oneshot::channel::<SocketAddr>();
        let handle = tokio::spawn(crate::run(args, Some(bind)));
        let addr = bound.await.unwrap();

        Self {
            url: format!("http://{addr}"),
            client: reqwest::Client::new(),
            handle,
            _config: file,
        }
    }

    /// Solves an auction, expecting success.
    pub async fn solve(&self, auction: Value) -> Value {
        let (status, body) = self.post("/solve", auction).await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body
    }

    pub async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.post_raw(path, body.to_string()).await
    }

    pub async fn post_raw(&self, path: &str, body: String) -> (StatusCode, Value) {
        let res = self
            .client
            .post(format!("{}{path}", self.url))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap();
        let status = res.status();
        (status, res.json().await.unwrap())
    }

    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let res = self
            .client
            .get(format!("{}{path}", self.url))
            .send()
            .await
            .unwrap();
        let status = res.status();
        (status, res.text().await.unwrap())
    }
}

impl Drop for SolverEngine {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub const SELL_TOKEN: &str = "0x000000000000000000000000000000000000000a";
pub const BUY_TOKEN: &str = "0x000000000000000000000000000000000000000b";

/// An order UID made of the repeated byte.
pub fn uid(byte: u8) -> String {
    format!("0x{}", format!("{byte:02x}").repeat(56))
}

pub fn order(uid_byte: u8) -> Value {
    json!({
        "uid": uid(uid_byte),
        "sellToken": SELL_TOKEN,
        "buyToken": BUY_TOKEN,
        "sellAmount": "1000000000000000000",
        "buyAmount": "950000000000000000",
        "fullSellAmount": "1000000000000000000",
        "fullBuyAmount": "950000000000000000",
        "validTo": 4_000_000_000_u32,
        "kind": "sell",
        "owner": "0x5b1e2c2762667331bc91648052f646d1b0d35984",
        "partiallyFillable": false,
        "executed": "0",
        "preInteractions": [],
        "postInteractions": [],
        "sellTokenSource": "erc20",
        "buyTokenDestination": "erc20",
        "class": "market",
        "appData": format!("0x{}", "00".repeat(32)),
        "signingScheme": "presign",
        "signature": "0x",
        "protocolFees": [],
    })
}

pub fn liquidity() -> Value {
    json!({
        "id": "0",
        "address": "0xffffffffffffffffffffffffffffffffffffffff",
        "router": "0x7a250d5630b4cf539739df2c5dacb4c659f2488d",
        "fee": "0.003",
        "gasEstimate": "110000",
        "kind": "constantProduct",
        "tokens": {
            SELL_TOKEN: { "balance": "1000000000000000000000" },
            BUY_TOKEN: { "balance": "1000000000000000000000" },
        },
    })
}

pub fn token(trusted: bool) -> Value {
    json!({
        "decimals": 18,
        "availableBalance": "0",
        "trusted": trusted,
    })
}

/// An auction with a deadline `seconds` from now.
pub fn auction(id: i64, orders: Vec<Value>, liquidity: Vec<Value>, seconds: i64) -> Value {
    json!({
        "id": id.to_string(),
        "tokens": {
            SELL_TOKEN: token(true),
            BUY_TOKEN: token(true),
        },
        "orders": orders,
        "liquidity": liquidity,
        "effectiveGasPrice": "15000000000",
        "deadline": (chrono::Utc::now() + chrono::Duration::seconds(seconds)).to_rfc3339(),
        "surplusCapturingJitOrderOwners": [],
    })
}
