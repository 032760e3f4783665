use crate::escrow::{claim_limit, matured_orders};
use crate::state::{maturity_key, orders, EscrowOrder, CONFIG, NAMES, ORDER_SEQUENCE};
use cosmwasm_std::{Deps, Env, Order, StdResult, Uint128};
use cw_storage_plus::Bound;
use vns::registry::{
    AdminResponse, ClaimableResponse, IsAvailableResponse, OrderCursor, OrderResponse,
    OrderSequenceResponse, OrdersResponse, RecordResponse,
};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

fn to_order_response(order: EscrowOrder) -> OrderResponse {
    OrderResponse {
        order_id: order.order_id,
        owner: order.owner,
        amount: order.amount,
        unlock_at: order.unlock_at,
    }
}

pub fn query_record(deps: Deps, name: String) -> StdResult<RecordResponse> {
    let record = NAMES.load(deps.storage, name.as_str())?;
    Ok(RecordResponse {
        name,
        owner: record.owner,
        locked_balance: record.locked_balance,
        locked_until: record.locked_until,
    })
}

pub fn query_is_available(deps: Deps, name: String) -> StdResult<IsAvailableResponse> {
    let available = NAMES.may_load(deps.storage, name.as_str())?.is_none();
    Ok(IsAvailableResponse { available })
}

pub fn query_orders(
    deps: Deps,
    owner: String,
    start_after: Option<OrderCursor>,
    limit: Option<u32>,
) -> StdResult<OrdersResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let owner_addr = deps.api.addr_validate(&owner)?;

    // The cursor carries its own position in the maturity index, so it stays
    // valid after the order it names has been claimed.
    let start = start_after.map(|cursor| {
        Bound::exclusive(maturity_key(
            cursor.unlock_at,
            &cursor.order_id.to_be_bytes(),
        ))
    });

    let res: StdResult<Vec<_>> = orders()
        .idx
        .maturity
        .prefix(owner_addr)
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, order)| to_order_response(order)))
        .collect();
    Ok(OrdersResponse { orders: res? })
}

pub fn query_claimable(
    deps: Deps,
    env: Env,
    owner: String,
    limit: Option<u32>,
) -> StdResult<ClaimableResponse> {
    let owner_addr = deps.api.addr_validate(&owner)?;
    let matured = matured_orders(
        deps.storage,
        &owner_addr,
        env.block.time.seconds(),
        claim_limit(limit),
    )?;
    let amount = matured
        .iter()
        .try_fold(Uint128::zero(), |total, order| total.checked_add(order.amount))?;
    Ok(ClaimableResponse {
        amount,
        orders: matured.len() as u32,
    })
}

pub fn query_order_sequence(deps: Deps) -> StdResult<OrderSequenceResponse> {
    let order_sequence = ORDER_SEQUENCE.load(deps.storage)?;
    Ok(OrderSequenceResponse { order_sequence })
}

pub fn query_admin(deps: Deps) -> StdResult<AdminResponse> {
    let config = CONFIG.load(deps.storage)?;
    let admin = deps.api.addr_humanize(&config.admin)?;
    Ok(AdminResponse { admin })
}
