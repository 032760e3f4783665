use crate::error::ContractError;
use crate::escrow::claim;
use crate::handler::{
    read_lock_duration, read_price_per_char, register, release, renew, set_lock_duration,
    set_price_per_char,
};
use crate::query::{
    query_admin, query_claimable, query_is_available, query_order_sequence, query_orders,
    query_record,
};
use crate::state::{Config, CONFIG, ORDER_SEQUENCE};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;
use vns::registry::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:vns-registry";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    if msg.price_per_char.is_zero() {
        return Err(ContractError::InvalidConfig {
            field: String::from("price_per_char"),
        });
    }
    if msg.lock_duration == 0 {
        return Err(ContractError::InvalidConfig {
            field: String::from("lock_duration"),
        });
    }
    if msg.denom.is_empty() {
        return Err(ContractError::InvalidConfig {
            field: String::from("denom"),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    let admin = deps.api.addr_canonicalize(info.sender.as_str())?;
    CONFIG.save(
        deps.storage,
        &Config {
            admin,
            price_per_char: msg.price_per_char,
            lock_duration: msg.lock_duration,
            denom: msg.denom.clone(),
        },
    )?;
    ORDER_SEQUENCE.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", info.sender)
        .add_attribute("price_per_char", msg.price_per_char)
        .add_attribute("lock_duration", msg.lock_duration.to_string())
        .add_attribute("denom", msg.denom))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Register { name } => register(deps, env, info, name),
        ExecuteMsg::Renew { name } => renew(deps, env, info, name),
        ExecuteMsg::Release { name } => release(deps, env, info, name),
        ExecuteMsg::Claim { limit } => claim(deps, env, info, limit),

        // Only admin
        ExecuteMsg::SetPricePerChar { price_per_char } => {
            set_price_per_char(deps, env, info, price_per_char)
        }
        ExecuteMsg::SetLockDuration { lock_duration } => {
            set_lock_duration(deps, env, info, lock_duration)
        }
        ExecuteMsg::PricePerChar {} => read_price_per_char(deps.as_ref(), info),
        ExecuteMsg::LockDuration {} => read_lock_duration(deps.as_ref(), info),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Record { name } => to_binary(&query_record(deps, name)?),
        QueryMsg::IsAvailable { name } => to_binary(&query_is_available(deps, name)?),
        QueryMsg::Orders {
            owner,
            start_after,
            limit,
        } => to_binary(&query_orders(deps, owner, start_after, limit)?),
        QueryMsg::Claimable { owner, limit } => {
            to_binary(&query_claimable(deps, env, owner, limit)?)
        }
        QueryMsg::OrderSequence {} => to_binary(&query_order_sequence(deps)?),
        QueryMsg::Admin {} => to_binary(&query_admin(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::default())
}
