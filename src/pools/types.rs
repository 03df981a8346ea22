/// Core types for the pools module
///
/// `RawPoolRecord` mirrors the indexer's JSON row. It is validated once into
/// `PoolRecord`, the typed input of the engine. `PoolView` is the output row.
use std::str::FromStr;

use bigdecimal::num_bigint::{ BigUint, Sign };
use bigdecimal::BigDecimal;
use serde::{ Deserialize, Serialize, Serializer };
use serde_json::Value;

use crate::errors::{ PoolScopeError, Result };
use crate::pools::constants::{ FLAT_RATE_COMMISSION_TOOLTIP, GAS_TAX_COMMISSION_TOOLTIP };
use crate::pools::format;

/// Largest power of ten accepted in a JSON-number amount
const MAX_AMOUNT_EXPONENT: i64 = 128;

/// Configured commission policy of a pool
///
/// Built once at the input boundary. A flat rate wins over a gas tax when the
/// indexer reports both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commission {
    /// Flat percentage of rewards, in basis points
    FlatRate(u64),
    /// Gas-cost based charge, in gas units
    GasTax(u64),
    None,
}

impl Commission {
    pub fn from_fees(fee_commission: Option<u64>, fee_gas: Option<u64>) -> Self {
        match (fee_commission, fee_gas) {
            (Some(bps), _) => Commission::FlatRate(bps),
            (None, Some(gas)) => Commission::GasTax(gas),
            (None, None) => Commission::None,
        }
    }

    /// Label and tooltip, decided by the same branch
    pub fn display(&self) -> (String, Option<&'static str>) {
        match self {
            Commission::FlatRate(bps) => (format::flat_rate_label(*bps), Some(FLAT_RATE_COMMISSION_TOOLTIP)),
            Commission::GasTax(gas) => (format::gas_tax_label(*gas), Some(GAS_TAX_COMMISSION_TOOLTIP)),
            Commission::None => (String::new(), None),
        }
    }
}

/// Pool row exactly as the indexer serves it
///
/// Every field is optional here; `PoolRecord::try_from` decides what is
/// required. Numbers may arrive as JSON numbers or decimal strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPoolRecord {
    pub id: Option<Value>,
    pub manager: Option<Value>,
    pub total_users: Option<Value>,
    pub amount: Option<Value>,
    pub user_total_reward: Option<Value>,
    pub week_performance: Option<Value>,
    pub month_performance: Option<Value>,
    pub commission_percentage: Option<Value>,
    pub fee_commission: Option<Value>,
    pub fee_gas: Option<Value>,
    pub paused: Option<Value>,
}

/// Validated staking pool counters
#[derive(Debug, Clone, PartialEq)]
pub struct PoolRecord {
    pub id: String,
    pub manager: Option<String>,
    pub total_users: u64,
    /// Total staked principal in base token units
    pub amount: BigUint,
    /// Cumulative rewards paid to users in base token units
    pub user_total_reward: BigUint,
    pub week_performance: Option<f64>,
    pub month_performance: Option<f64>,
    pub commission_percentage: Option<f64>,
    pub fee_commission: Option<u64>,
    pub fee_gas: Option<u64>,
    pub paused: bool,
}

impl PoolRecord {
    /// Empty pool with the given id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            manager: None,
            total_users: 0,
            amount: BigUint::default(),
            user_total_reward: BigUint::default(),
            week_performance: None,
            month_performance: None,
            commission_percentage: None,
            fee_commission: None,
            fee_gas: None,
            paused: false,
        }
    }

    pub fn with_manager(mut self, manager: impl Into<String>) -> Self {
        self.manager = Some(manager.into());
        self
    }

    pub fn with_total_users(mut self, total_users: u64) -> Self {
        self.total_users = total_users;
        self
    }

    pub fn with_amount(mut self, amount: impl Into<BigUint>) -> Self {
        self.amount = amount.into();
        self
    }

    pub fn with_user_total_reward(mut self, reward: impl Into<BigUint>) -> Self {
        self.user_total_reward = reward.into();
        self
    }

    pub fn with_week_performance(mut self, ratio: f64) -> Self {
        self.week_performance = Some(ratio);
        self
    }

    pub fn with_month_performance(mut self, ratio: f64) -> Self {
        self.month_performance = Some(ratio);
        self
    }

    pub fn with_commission_percentage(mut self, ratio: f64) -> Self {
        self.commission_percentage = Some(ratio);
        self
    }

    pub fn with_fee_commission(mut self, bps: u64) -> Self {
        self.fee_commission = Some(bps);
        self
    }

    pub fn with_fee_gas(mut self, gas: u64) -> Self {
        self.fee_gas = Some(gas);
        self
    }

    pub fn with_paused(mut self, paused: bool) -> Self {
        self.paused = paused;
        self
    }

    pub fn commission(&self) -> Commission {
        Commission::from_fees(self.fee_commission, self.fee_gas)
    }

    /// Configured commission, e.g. `"2.50 %"` or `"1000 Gas"`
    pub fn commission_label(&self) -> String {
        format::commission_label(&self.commission())
    }

    /// Accrued commission as a percentage, `"-"` when unknown
    pub fn accrued_commission_label(&self) -> String {
        format::accrued_commission_label(self.commission_percentage)
    }
}

impl TryFrom<RawPoolRecord> for PoolRecord {
    type Error = PoolScopeError;

    fn try_from(raw: RawPoolRecord) -> Result<Self> {
        let id = match raw.id.as_ref().and_then(Value::as_str) {
            Some(id) if !id.trim().is_empty() => id.to_string(),
            Some(_) => {
                return Err(PoolScopeError::invalid_record("<unknown>", "id", "must not be empty"));
            }
            None => {
                return Err(
                    PoolScopeError::invalid_record("<unknown>", "id", "is missing or not a string")
                );
            }
        };

        let manager = match optional(&raw.manager) {
            None => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                return Err(
                    PoolScopeError::invalid_record(&id, "manager", format!("expected a string, got {}", other))
                );
            }
        };

        let total_users = required_u64(&id, "totalUsers", &raw.total_users)?;
        let amount = required_big(&id, "amount", &raw.amount)?;
        let user_total_reward = required_big(&id, "userTotalReward", &raw.user_total_reward)?;
        let week_performance = optional_performance(&id, "weekPerformance", &raw.week_performance)?;
        let month_performance = optional_performance(&id, "monthPerformance", &raw.month_performance)?;
        let commission_percentage = optional_ratio(
            &id,
            "commissionPercentage",
            &raw.commission_percentage
        )?;
        let fee_commission = optional_u64(&id, "feeCommission", &raw.fee_commission)?;
        let fee_gas = optional_u64(&id, "feeGas", &raw.fee_gas)?;

        let paused = match optional(&raw.paused) {
            None => false,
            Some(Value::Bool(b)) => *b,
            Some(other) => {
                return Err(
                    PoolScopeError::invalid_record(&id, "paused", format!("expected a boolean, got {}", other))
                );
            }
        };

        Ok(Self {
            id,
            manager,
            total_users,
            amount,
            user_total_reward,
            week_performance,
            month_performance,
            commission_percentage,
            fee_commission,
            fee_gas,
            paused,
        })
    }
}

/// `null` and a missing key both mean absent
fn optional(value: &Option<Value>) -> Option<&Value> {
    match value {
        None | Some(Value::Null) => None,
        Some(v) => Some(v),
    }
}

fn parse_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}

fn required_u64(id: &str, field: &str, value: &Option<Value>) -> Result<u64> {
    let value = optional(value).ok_or_else(|| PoolScopeError::invalid_record(id, field, "is missing"))?;
    parse_u64(value).ok_or_else(|| {
        PoolScopeError::invalid_record(id, field, format!("expected a non-negative integer, got {}", value))
    })
}

fn optional_u64(id: &str, field: &str, value: &Option<Value>) -> Result<Option<u64>> {
    match optional(value) {
        None => Ok(None),
        Some(v) =>
            parse_u64(v)
                .map(Some)
                .ok_or_else(|| {
                    PoolScopeError::invalid_record(id, field, format!("expected a non-negative integer, got {}", v))
                }),
    }
}

fn required_big(id: &str, field: &str, value: &Option<Value>) -> Result<BigUint> {
    let value = optional(value).ok_or_else(|| PoolScopeError::invalid_record(id, field, "is missing"))?;
    let parsed = match value {
        Value::Number(n) => parse_integral_number(&n.to_string()),
        Value::String(s) => {
            let s = s.trim();
            if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
                BigUint::from_str(s).ok()
            } else {
                None
            }
        }
        _ => None,
    };
    parsed.ok_or_else(|| {
        PoolScopeError::invalid_record(id, field, format!("expected a non-negative integer, got {}", value))
    })
}

/// Non-negative integral JSON number of any size, such as `1e24` or a
/// 30-digit literal
fn parse_integral_number(text: &str) -> Option<BigUint> {
    let decimal = BigDecimal::from_str(text).ok()?;
    let (_, scale) = decimal.as_bigint_and_exponent();
    if scale < -MAX_AMOUNT_EXPONENT || !decimal.is_integer() || decimal.sign() == Sign::Minus {
        return None;
    }
    let (digits, _) = decimal.with_scale(0).into_bigint_and_exponent();
    digits.to_biguint()
}

/// Period return; anything below a total loss is rejected
fn optional_performance(id: &str, field: &str, value: &Option<Value>) -> Result<Option<f64>> {
    match optional_ratio(id, field, value)? {
        Some(ratio) if ratio < -1.0 => {
            Err(PoolScopeError::invalid_record(id, field, format!("return {} loses more than 100%", ratio)))
        }
        other => Ok(other),
    }
}

fn optional_ratio(id: &str, field: &str, value: &Option<Value>) -> Result<Option<f64>> {
    let value = match optional(value) {
        None => {
            return Ok(None);
        }
        Some(v) => v,
    };
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(ratio) if ratio.is_finite() => Ok(Some(ratio)),
        _ => Err(PoolScopeError::invalid_record(id, field, format!("expected a finite number, got {}", value))),
    }
}

fn serialize_biguint<S: Serializer>(value: &BigUint, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_string())
}

/// One rendered table row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolView {
    pub id: String,
    pub manager: Option<String>,
    pub total_users: u64,
    #[serde(serialize_with = "serialize_biguint")]
    pub amount: BigUint,
    #[serde(serialize_with = "serialize_biguint")]
    pub user_total_reward: BigUint,
    pub week_performance: Option<f64>,
    pub month_performance: Option<f64>,
    pub commission_percentage: Option<f64>,
    pub fee_commission: Option<u64>,
    pub fee_gas: Option<u64>,
    pub paused: bool,

    /// Annualized 7-day performance
    pub week_apr: Option<f64>,
    /// Annualized 30-day performance
    pub month_apr: Option<f64>,
    pub commission_label: String,
    pub commission_tooltip: Option<String>,
    pub accrued_commission_label: String,
    pub amount_label: String,
    pub user_total_reward_label: String,
    pub week_performance_label: String,
    pub month_performance_label: String,
    pub paused_label: Option<String>,
}
