use cosmwasm_std::{Addr, Uint128};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InstantiateMsg {
    /// Deposit charged per character of a name, in `denom`
    pub price_per_char: Uint128,
    /// Seconds a deposit stays locked after a registration or renewal
    pub lock_duration: u64,
    /// Native coin accepted for deposits
    pub denom: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Claim a free name. Attached funds must cover `price_per_char * length(name)`,
    /// any excess is sent back.
    Register {
        name: String,
    },
    /// Relock a name whose lock has matured, at the current price and duration.
    Renew {
        name: String,
    },
    /// Drop ownership of a name. Outstanding orders are refunded through `Claim`.
    Release {
        name: String,
    },
    /// Refund every matured order of the sender, at most `limit` per call.
    Claim {
        limit: Option<u32>,
    },

    // Only admin
    SetPricePerChar {
        price_per_char: Uint128,
    },
    SetLockDuration {
        lock_duration: u64,
    },
    /// Returns `PricePerCharResponse` as response data
    PricePerChar {},
    /// Returns `LockDurationResponse` as response data
    LockDuration {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Record {
        name: String,
    },
    IsAvailable {
        name: String,
    },
    /// Orders of `owner` sorted by maturity
    Orders {
        owner: String,
        start_after: Option<OrderCursor>,
        limit: Option<u32>,
    },
    /// What `Claim { limit }` sent by `owner` would refund at the current block time
    Claimable {
        owner: String,
        limit: Option<u32>,
    },
    OrderSequence {},
    Admin {},
}

/// Position in an owner's order listing. Take it from the last order of a page.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct OrderCursor {
    pub unlock_at: u64,
    pub order_id: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct RecordResponse {
    pub name: String,
    pub owner: Addr,
    pub locked_balance: Uint128,
    pub locked_until: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct IsAvailableResponse {
    pub available: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct OrderResponse {
    pub order_id: u64,
    pub owner: Addr,
    pub amount: Uint128,
    pub unlock_at: u64,
}

impl OrderResponse {
    pub fn cursor(&self) -> OrderCursor {
        OrderCursor {
            unlock_at: self.unlock_at,
            order_id: self.order_id,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct OrdersResponse {
    pub orders: Vec<OrderResponse>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ClaimableResponse {
    pub amount: Uint128,
    pub orders: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct OrderSequenceResponse {
    pub order_sequence: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct AdminResponse {
    pub admin: Addr,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct PricePerCharResponse {
    pub price_per_char: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct LockDurationResponse {
    pub lock_duration: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MigrateMsg {}
