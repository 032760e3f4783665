use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{Addr, CanonicalAddr, Uint128};
use cw_storage_plus::{Index, IndexList, IndexedMap, Item, Map, MultiIndex, U64Key};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub admin: CanonicalAddr,
    pub price_per_char: Uint128,
    pub lock_duration: u64,
    pub denom: String,
}

pub const CONFIG: Item<Config> = Item::new("CONFIG");

/// Last order id handed out. Ids start at 1 and are never reused.
pub const ORDER_SEQUENCE: Item<u64> = Item::new("ORDER_SEQUENCE");

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct NameRecord {
    pub owner: Addr,
    pub locked_balance: Uint128,
    pub locked_until: u64,
}

pub const NAMES: Map<&str, NameRecord> = Map::new("NAMES");

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct EscrowOrder {
    pub order_id: u64,
    pub owner: Addr,
    pub amount: Uint128,
    pub unlock_at: u64,
}

pub struct OrderIndexes<'a> {
    // (owner, unlock_at ++ pk): an owner's matured orders form a prefix range
    pub maturity: MultiIndex<'a, (Addr, Vec<u8>), EscrowOrder>,
}

impl<'a> IndexList<EscrowOrder> for OrderIndexes<'a> {
    fn get_indexes(&'_ self) -> Box<dyn Iterator<Item = &'_ dyn Index<EscrowOrder>> + '_> {
        let v: Vec<&dyn Index<EscrowOrder>> = vec![&self.maturity];
        Box::new(v.into_iter())
    }
}

/// Index suffix for an order: big-endian unlock time followed by the primary key.
pub fn maturity_key(unlock_at: u64, pk: &[u8]) -> Vec<u8> {
    [&unlock_at.to_be_bytes()[..], pk].concat()
}

pub fn order_maturity_idx(d: &EscrowOrder, k: Vec<u8>) -> (Addr, Vec<u8>) {
    (d.owner.clone(), maturity_key(d.unlock_at, &k))
}

pub fn orders<'a>() -> IndexedMap<'a, U64Key, EscrowOrder, OrderIndexes<'a>> {
    let indexes = OrderIndexes {
        maturity: MultiIndex::new(order_maturity_idx, "ORDERS", "ORDERS__maturity"),
    };
    IndexedMap::new("ORDERS", indexes)
}
