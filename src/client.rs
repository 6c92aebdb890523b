use crate::common::{
    BithumbError, Result, Transport, create_http_client, format_decimal8, format_symbol,
    get_timestamp_millis,
};
use crate::config::{ClientConfig, credentials_from_env};
use crate::signer::{Credentials, Signer};
use crate::types::{
    Action, ApiResponse, AssetType, Depth, MarketResponse, OpenOrdersPage, OrderListQuery,
    OrderType, Params, Side, WithdrawRequest,
};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

const DEPTH_PATH: &str = "/market/data/orderBook";
const CONFIG_PATH: &str = "/market/data/config";

/// `openOrders` page size.
pub const OPEN_ORDERS_PAGE_SIZE: u32 = 50;

/// Bithumb Global spot client.
///
/// Holds one HTTP session for its lifetime and, when built with credentials,
/// a [`Signer`] for the private actions. Every method issues its request(s)
/// sequentially and returns the first failure as is: there is no retry.
pub struct BithumbGlobal<T = reqwest::Client> {
    transport: T,
    signer: Option<Signer>,
    config: ClientConfig,
}

impl BithumbGlobal<reqwest::Client> {
    /// Authenticated client against the production endpoint.
    pub fn new(api_key: impl Into<String>, secret: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::default(), Some(Credentials::new(api_key, secret)))
    }

    /// Client for the public market-data endpoints only.
    pub fn public() -> Result<Self> {
        Self::with_config(ClientConfig::default(), None)
    }

    /// Credentials and optional base URL from the environment / `.env`.
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env(), Some(credentials_from_env()?))
    }

    pub fn with_config(config: ClientConfig, credentials: Option<Credentials>) -> Result<Self> {
        Self::with_transport(create_http_client()?, config, credentials)
    }
}

impl<T: Transport> BithumbGlobal<T> {
    /// Incomplete credentials (empty key or secret) yield a public-only client.
    pub fn with_transport(
        transport: T,
        config: ClientConfig,
        credentials: Option<Credentials>,
    ) -> Result<Self> {
        let signer = match credentials {
            Some(credentials) if credentials.is_valid() => Some(Signer::new(credentials)?),
            _ => None,
        };

        info!(
            base_url = %config.base_url,
            authenticated = signer.is_some(),
            "Bithumb Global client created"
        );

        Ok(Self {
            transport,
            signer,
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn is_authenticated(&self) -> bool {
        self.signer.is_some()
    }

    /// Signs `params` for `action`, posts them and returns the `data` payload.
    ///
    /// A non-"0" response code becomes [`BithumbError::Api`]; transport and
    /// body failures propagate untranslated.
    pub async fn execute(&self, action: Action, params: Params) -> Result<Value> {
        let signer = self.signer.as_ref().ok_or_else(|| {
            BithumbError::MissingCredentials(format!("{} requires an API key and secret", action))
        })?;

        let timestamp = get_timestamp_millis();
        let body = signer.sign_envelope(action, params, timestamp);
        let url = format!("{}{}", self.config.base_url, action.path());

        debug!(action = %action, url = %url, nonce = timestamp, "Sending signed request");
        let raw = self
            .transport
            .post_json(&url, &body, self.config.timeout)
            .await?;

        let response: ApiResponse = serde_json::from_value(raw)?;
        if response.code != "0" {
            let msg = response.msg.unwrap_or_default();
            warn!(action = %action, code = %response.code, msg = %msg, "Bithumb Global API error");
            return Err(BithumbError::Api {
                code: response.code,
                msg,
            });
        }

        Ok(response.data)
    }

    async fn get_public(&self, url: &str, timeout: Duration) -> Result<Value> {
        debug!(url = %url, "Sending public request");
        let raw = self.transport.get_json(url, timeout).await?;

        let response: MarketResponse = serde_json::from_value(raw)?;
        match response.code {
            Some(code) if code.as_str() != "0" => {
                let msg = response.msg.unwrap_or_default();
                warn!(url = %url, code = %code, msg = %msg, "Bithumb Global API error");
                Err(BithumbError::Api { code, msg })
            }
            _ => Ok(response.info),
        }
    }

    // =========================================================================
    // Market data
    // =========================================================================

    /// Order-book snapshot, at most `count` levels per side, in server order.
    pub async fn depth(&self, symbol: &str, count: usize) -> Result<Depth> {
        let url = format!(
            "{}{}?symbol={}",
            self.config.base_url,
            DEPTH_PATH,
            format_symbol(symbol)
        );
        let info = self.get_public(&url, self.config.depth_timeout).await?;
        Depth::from_info(&info, count)
    }

    /// Exchange-wide trading-pair configuration (`info.spotConfig`), verbatim.
    pub async fn all_pairs(&self) -> Result<Value> {
        let url = format!("{}{}", self.config.base_url, CONFIG_PATH);
        let info = self.get_public(&url, self.config.timeout).await?;
        info.get("spotConfig").cloned().ok_or_else(|| {
            BithumbError::InvalidResponse("Config is missing info.spotConfig".to_string())
        })
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Places a limit order and returns the exchange-assigned order id.
    pub async fn place_order(
        &self,
        symbol: &str,
        side: Side,
        price: f64,
        quantity: f64,
    ) -> Result<String> {
        let mut params = Params::new();
        params.insert("symbol".into(), format_symbol(symbol).into());
        params.insert("type".into(), OrderType::Limit.as_str().into());
        params.insert("side".into(), side.as_str().into());
        params.insert("price".into(), format_decimal8(price, "price")?.into());
        params.insert("quantity".into(), format_decimal8(quantity, "quantity")?.into());

        let data = self.execute(Action::PlaceOrder, params).await?;
        order_id_of(&data).ok_or_else(|| {
            BithumbError::InvalidResponse("placeOrder response is missing orderId".to_string())
        })
    }

    pub async fn cancel_order(&self, symbol: &str, order_id: &str) -> Result<Value> {
        let mut params = Params::new();
        params.insert("symbol".into(), format_symbol(symbol).into());
        params.insert("orderID".into(), order_id.into());
        self.execute(Action::CancelOrder, params).await
    }

    pub async fn query_order(&self, symbol: &str, order_id: &str) -> Result<Value> {
        let mut params = Params::new();
        params.insert("symbol".into(), format_symbol(symbol).into());
        params.insert("orderId".into(), order_id.into());
        self.execute(Action::SingleOrder, params).await
    }

    /// Order history filtered by `query`.
    pub async fn orders(&self, query: &OrderListQuery) -> Result<Value> {
        self.execute(Action::OrderList, query.to_params()).await
    }

    /// Fills of one order.
    pub async fn order_detail(&self, order_id: &str, page: u32, count: u32) -> Result<Value> {
        let mut params = Params::new();
        params.insert("orderId".into(), order_id.into());
        params.insert("page".into(), page.to_string().into());
        params.insert("count".into(), count.to_string().into());
        self.execute(Action::StrikeOrderList, params).await
    }

    /// Every open order for `symbol`, fetched 50 per page.
    ///
    /// Stops once `page * 50 >= num` or a page comes back empty. More than
    /// `max_open_order_pages` pages fails with [`BithumbError::PaginationLimit`].
    /// Any failure discards the pages already fetched.
    pub async fn open_orders(&self, symbol: &str) -> Result<Vec<Value>> {
        let symbol = format_symbol(symbol);
        let max_pages = self.config.max_open_order_pages.max(1);
        let mut orders = Vec::new();

        for page in 1..=max_pages {
            let mut params = Params::new();
            params.insert("count".into(), OPEN_ORDERS_PAGE_SIZE.into());
            params.insert("page".into(), page.into());
            params.insert("symbol".into(), symbol.clone().into());

            let data = self.execute(Action::OpenOrders, params).await?;
            let batch: OpenOrdersPage = serde_json::from_value(data).map_err(|e| {
                BithumbError::InvalidResponse(format!("Malformed openOrders page: {}", e))
            })?;
            let fetched = batch.list.len();
            orders.extend(batch.list);

            if batch.num <= u64::from(page) * u64::from(OPEN_ORDERS_PAGE_SIZE) {
                return Ok(orders);
            }
            if fetched == 0 {
                warn!(
                    symbol = %symbol,
                    page,
                    reported = batch.num,
                    received = orders.len(),
                    "Empty open orders page before reported total"
                );
                return Ok(orders);
            }
        }

        Err(BithumbError::PaginationLimit(max_pages))
    }

    /// Ids of every open order for `symbol`.
    pub async fn open_order_ids(&self, symbol: &str) -> Result<Vec<String>> {
        self.open_orders(symbol)
            .await?
            .iter()
            .map(|order| {
                order_id_of(order).ok_or_else(|| {
                    BithumbError::InvalidResponse("Open order is missing orderId".to_string())
                })
            })
            .collect()
    }

    // =========================================================================
    // Account
    // =========================================================================

    /// Spot balances, optionally for a single coin.
    pub async fn balance(&self, coin: Option<&str>) -> Result<Value> {
        let mut params = Params::new();
        params.insert("assetType".into(), AssetType::Spot.as_str().into());
        if let Some(coin) = coin {
            params.insert("coinType".into(), coin.into());
        }
        self.execute(Action::AssetList, params).await
    }

    /// Spot market settings, optionally narrowed to a coin and/or market.
    pub async fn market(&self, coin: Option<&str>, market: Option<&str>) -> Result<Value> {
        let mut params = Params::new();
        if let Some(coin) = coin {
            params.insert("fcoinId".into(), coin.into());
        }
        if let Some(market) = market {
            params.insert("fmarketId".into(), market.into());
        }
        self.execute(Action::MarketSpot, params).await
    }

    pub async fn withdraw(&self, request: &WithdrawRequest) -> Result<Value> {
        self.execute(Action::Withdraw, request.to_params()).await
    }
}

// orderId arrives as a string or a number depending on the endpoint
fn order_id_of(value: &Value) -> Option<String> {
    match value.get("orderId")? {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}
