use crate::error::ContractError;
use crate::state::{maturity_key, orders, EscrowOrder, CONFIG, ORDER_SEQUENCE};
use cosmwasm_std::{
    coins, Addr, BankMsg, DepsMut, Env, MessageInfo, Order, Response, StdError, StdResult,
    Storage, Uint128,
};
use cw0::nonpayable;
use cw_storage_plus::{Bound, U64Key};

pub const DEFAULT_CLAIM_LIMIT: u32 = 30;
pub const MAX_CLAIM_LIMIT: u32 = 100;

/// Number of matured orders a single sweep may refund.
pub fn claim_limit(limit: Option<u32>) -> usize {
    limit.unwrap_or(DEFAULT_CLAIM_LIMIT).min(MAX_CLAIM_LIMIT) as usize
}

/// Records a new deposit for `owner`, refundable once `unlock_at` is reached.
pub fn append_order(
    storage: &mut dyn Storage,
    owner: &Addr,
    amount: Uint128,
    unlock_at: u64,
) -> StdResult<EscrowOrder> {
    let order_id = ORDER_SEQUENCE.update(storage, |sequence| -> StdResult<u64> {
        sequence
            .checked_add(1)
            .ok_or_else(|| StdError::generic_err("order sequence exhausted"))
    })?;
    let order = EscrowOrder {
        order_id,
        owner: owner.clone(),
        amount,
        unlock_at,
    };
    orders().save(storage, U64Key::from(order_id), &order)?;
    Ok(order)
}

/// Orders of `owner` with `unlock_at <= now`, earliest maturity first.
pub fn matured_orders(
    storage: &dyn Storage,
    owner: &Addr,
    now: u64,
    limit: usize,
) -> StdResult<Vec<EscrowOrder>> {
    // highest possible index suffix for an order maturing exactly at `now`
    let max = Bound::inclusive(maturity_key(now, &u64::MAX.to_be_bytes()));
    orders()
        .idx
        .maturity
        .prefix(owner.clone())
        .range(storage, None, Some(max), Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, order)| order))
        .collect()
}

pub fn claim(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    limit: Option<u32>,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;

    let matured = matured_orders(
        deps.storage,
        &info.sender,
        env.block.time.seconds(),
        claim_limit(limit),
    )?;

    let mut amount = Uint128::zero();
    for order in matured.iter() {
        amount = amount.checked_add(order.amount)?;
        orders().remove(deps.storage, U64Key::from(order.order_id))?;
    }

    // Nothing matured: no transfer and no claim payload.
    if amount.is_zero() {
        return Ok(Response::new().add_attribute("method", "claim"));
    }

    Ok(Response::new()
        .add_message(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: coins(amount.u128(), config.denom),
        })
        .add_attribute("method", "claim")
        .add_attribute("owner", info.sender)
        .add_attribute("amount", amount)
        .add_attribute("orders", matured.len().to_string()))
}
