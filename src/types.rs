use crate::common::{BithumbError, parse_f64};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Request parameters, kept ordered by key so the signing input is canonical.
pub type Params = BTreeMap<String, ParamValue>;

/// One `(price, quantity)` level of the order book.
pub type Level = (f64, f64);

/// A request value. Serializes as a JSON string or number and renders bare
/// (no quotes) in the canonical signing string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Text(String),
    Integer(i64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(s) => f.write_str(s),
            ParamValue::Integer(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Integer(value.into())
    }
}

/// Order side. Parsing accepts the exchange aliases case-insensitively:
/// `ask`, `sell`, `s`, `a` are sells; `bid`, `buy`, `b` are buys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = BithumbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ask" | "sell" | "s" | "a" => Ok(Side::Sell),
            "bid" | "buy" | "b" => Ok(Side::Buy),
            _ => Err(BithumbError::InvalidArgument(format!("Unknown side alias: {}", s))),
        }
    }
}

/// Canonical side for an exchange alias.
pub fn direction(alias: &str) -> Result<Side, BithumbError> {
    alias.parse()
}

/// Order status filter accepted by `orderList`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Traded,
    Trading,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Traded => "traded",
            OrderStatus::Trading => "trading",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = BithumbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "traded" => Ok(OrderStatus::Traded),
            "trading" => Ok(OrderStatus::Trading),
            _ => Err(BithumbError::InvalidArgument(format!(
                "Order status must be traded or trading, got {}",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderType {
    Limit,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Limit => "limit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetType {
    Spot,
}

impl AssetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Spot => "spot",
        }
    }
}

/// Authenticated actions. The `bizCode` doubles as the last path segment,
/// except for withdrawals which have their own endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    PlaceOrder,
    CancelOrder,
    AssetList,
    OrderList,
    StrikeOrderList,
    MarketSpot,
    SingleOrder,
    OpenOrders,
    Withdraw,
}

impl Action {
    pub fn biz_code(&self) -> &'static str {
        match self {
            Action::PlaceOrder => "placeOrder",
            Action::CancelOrder => "cancelOrder",
            Action::AssetList => "assetList",
            Action::OrderList => "orderList",
            Action::StrikeOrderList => "strikeOrderListApi",
            Action::MarketSpot => "MARKET_SPOT",
            Action::SingleOrder => "singleOrder",
            Action::OpenOrders => "openOrders",
            Action::Withdraw => "withdraw",
        }
    }

    pub fn path(&self) -> String {
        match self {
            Action::Withdraw => "/openapi/v1/withdraw".to_string(),
            other => format!("/openapi/v1/spot/{}", other.biz_code()),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.biz_code())
    }
}

/// `{code, msg, data}` envelope of authenticated actions. `code == "0"` is success.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    #[serde(deserialize_with = "string_or_number")]
    pub code: String,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub data: Value,
}

/// Public market-data envelope; the payload lives under `info`.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketResponse {
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub code: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub info: Value,
}

/// Order-book snapshot in server order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Depth {
    pub asks: Vec<Level>,
    pub bids: Vec<Level>,
}

impl Depth {
    /// Parses `info.s` (asks) and `info.b` (bids), keeping at most `count` levels per side.
    pub fn from_info(info: &Value, count: usize) -> Result<Self, BithumbError> {
        Ok(Depth {
            asks: parse_levels(info, "s", count)?,
            bids: parse_levels(info, "b", count)?,
        })
    }
}

fn parse_levels(info: &Value, side: &str, count: usize) -> Result<Vec<Level>, BithumbError> {
    let rows = info[side].as_array().ok_or_else(|| {
        BithumbError::InvalidResponse(format!("Order book is missing info.{}", side))
    })?;

    rows.iter()
        .take(count)
        .map(|row| -> Result<Level, BithumbError> {
            let price = level_field(row.get(0), "price")?;
            let quantity = level_field(row.get(1), "quantity")?;
            Ok((price, quantity))
        })
        .collect()
}

fn level_field(value: Option<&Value>, field_name: &str) -> Result<f64, BithumbError> {
    match value {
        Some(Value::String(s)) => parse_f64(s, field_name),
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| {
            BithumbError::InvalidResponse(format!("Invalid {} format: {}", field_name, n))
        }),
        _ => Err(BithumbError::InvalidResponse(format!(
            "Order book level is missing its {}",
            field_name
        ))),
    }
}

/// One page of `openOrders`.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenOrdersPage {
    /// Total open orders reported by the server.
    #[serde(deserialize_with = "count_from_string_or_number")]
    pub num: u64,
    #[serde(default)]
    pub list: Vec<Value>,
}

/// Filters for `orderList`. Defaults: this week, page 1, ten per page.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderListQuery {
    pub side: Option<Side>,
    pub query_range: String,
    pub coin_type: Option<String>,
    pub market_type: Option<String>,
    pub status: Option<OrderStatus>,
    pub page: u32,
    pub count: u32,
}

impl Default for OrderListQuery {
    fn default() -> Self {
        Self {
            side: None,
            query_range: "thisweek".to_string(),
            coin_type: None,
            market_type: None,
            status: None,
            page: 1,
            count: 10,
        }
    }
}

impl OrderListQuery {
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    pub fn with_query_range(mut self, query_range: impl Into<String>) -> Self {
        self.query_range = query_range.into();
        self
    }

    pub fn with_coin_type(mut self, coin_type: impl Into<String>) -> Self {
        self.coin_type = Some(coin_type.into());
        self
    }

    pub fn with_market_type(mut self, market_type: impl Into<String>) -> Self {
        self.market_type = Some(market_type.into());
        self
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub(crate) fn to_params(&self) -> Params {
        let mut params = Params::new();
        params.insert("page".into(), self.page.to_string().into());
        params.insert("count".into(), self.count.to_string().into());
        params.insert("queryRange".into(), self.query_range.clone().into());
        if let Some(side) = self.side {
            params.insert("side".into(), side.as_str().into());
        }
        if let Some(coin_type) = &self.coin_type {
            params.insert("coinType".into(), coin_type.clone().into());
        }
        if let Some(market_type) = &self.market_type {
            params.insert("marketType".into(), market_type.clone().into());
        }
        if let Some(status) = self.status {
            params.insert("status".into(), status.as_str().into());
        }
        params
    }
}

/// Withdrawal instruction. `mark` defaults to `AUTO`; `memo` is sent as `extendParam`.
#[derive(Debug, Clone, PartialEq)]
pub struct WithdrawRequest {
    pub coin_type: String,
    pub address: String,
    pub quantity: String,
    pub mark: String,
    pub memo: Option<String>,
}

impl WithdrawRequest {
    pub fn new(
        coin_type: impl Into<String>,
        address: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Self {
        Self {
            coin_type: coin_type.into(),
            address: address.into(),
            quantity: quantity.into(),
            mark: "AUTO".to_string(),
            memo: None,
        }
    }

    pub fn with_mark(mut self, mark: impl Into<String>) -> Self {
        self.mark = mark.into();
        self
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    pub(crate) fn to_params(&self) -> Params {
        let mut params = Params::new();
        params.insert("coinType".into(), self.coin_type.clone().into());
        params.insert("address".into(), self.address.clone().into());
        params.insert("quantity".into(), self.quantity.clone().into());
        params.insert("mark".into(), self.mark.clone().into());
        // empty memo is treated as absent
        if let Some(memo) = self.memo.as_deref().filter(|m| !m.is_empty()) {
            params.insert("extendParam".into(), memo.into());
        }
        params
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "expected a string or number, got {}",
            other
        ))),
    }
}

fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(D::Error::custom(format!(
            "expected a string or number, got {}",
            other
        ))),
    }
}

fn count_from_string_or_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| D::Error::custom(format!("invalid count: {}", n))),
        Value::String(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| D::Error::custom(format!("invalid count: {}", s))),
        other => Err(D::Error::custom(format!("invalid count: {}", other))),
    }
}
