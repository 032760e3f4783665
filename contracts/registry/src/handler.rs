use crate::error::ContractError;
use crate::escrow::append_order;
use crate::state::{Config, NameRecord, CONFIG, NAMES};
use cosmwasm_std::{
    coins, to_binary, BankMsg, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Response, Uint128,
    Uint64,
};
use cw0::{may_pay, nonpayable};
use vns::registry::{LockDurationResponse, PricePerCharResponse};
use vns::utils::lock_cost;

fn only_admin(deps: Deps, info: &MessageInfo) -> Result<Config, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
    if sender != config.admin {
        return Err(ContractError::Unauthorized {
            sender: info.sender.to_string(),
        });
    }
    Ok(config)
}

fn only_name_owner(info: &MessageInfo, record: &NameRecord) -> Result<(), ContractError> {
    if info.sender != record.owner {
        return Err(ContractError::NotOwner {
            sender: info.sender.to_string(),
            owner: record.owner.to_string(),
        });
    }
    Ok(())
}

fn load_record(deps: Deps, name: &str) -> Result<NameRecord, ContractError> {
    NAMES
        .may_load(deps.storage, name)?
        .ok_or_else(|| ContractError::NotRegistered {
            name: name.to_string(),
        })
}

fn lock_expiry(current: u64, lock_duration: u64) -> Result<u64, ContractError> {
    Ok(Uint64::from(current)
        .checked_add(Uint64::from(lock_duration))?
        .u64())
}

fn validate_register_fund(
    info: &MessageInfo,
    config: &Config,
    name: &str,
) -> Result<(Uint128, Uint128), ContractError> {
    let required = lock_cost(config.price_per_char, name)?;
    let paid = may_pay(info, &config.denom)?;
    if paid < required {
        return Err(ContractError::InsufficientFunds {
            amount: paid,
            required,
        });
    }
    Ok((required, paid.checked_sub(required)?))
}

pub fn register(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    name: String,
) -> Result<Response, ContractError> {
    if name.is_empty() {
        return Err(ContractError::EmptyName {});
    }
    if NAMES.may_load(deps.storage, name.as_str())?.is_some() {
        return Err(ContractError::NameTaken { name });
    }

    let config = CONFIG.load(deps.storage)?;
    let (locked_balance, refund) = validate_register_fund(&info, &config, &name)?;
    let locked_until = lock_expiry(env.block.time.seconds(), config.lock_duration)?;

    NAMES.save(
        deps.storage,
        name.as_str(),
        &NameRecord {
            owner: info.sender.clone(),
            locked_balance,
            locked_until,
        },
    )?;
    let order = append_order(deps.storage, &info.sender, locked_balance, locked_until)?;

    // Only the required lock stays in escrow.
    let mut messages: Vec<CosmosMsg> = vec![];
    if !refund.is_zero() {
        messages.push(CosmosMsg::Bank(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: coins(refund.u128(), config.denom),
        }));
    }

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "register")
        .add_attribute("owner", info.sender)
        .add_attribute("name", name)
        .add_attribute("locked_balance", locked_balance)
        .add_attribute("locked_until", locked_until.to_string())
        .add_attribute("order_id", order.order_id.to_string())
        .add_attribute("refund", refund))
}

/// Relocks a matured name. No payment is taken: the new order recommits the
/// current lock cost on top of whatever orders are still outstanding.
pub fn renew(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    name: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let mut record = load_record(deps.as_ref(), &name)?;
    only_name_owner(&info, &record)?;

    let current = env.block.time.seconds();
    if current < record.locked_until {
        return Err(ContractError::StillLocked {
            locked_until: record.locked_until,
            current,
        });
    }

    let config = CONFIG.load(deps.storage)?;
    record.locked_balance = lock_cost(config.price_per_char, &name)?;
    record.locked_until = lock_expiry(current, config.lock_duration)?;
    NAMES.save(deps.storage, name.as_str(), &record)?;
    let order = append_order(
        deps.storage,
        &info.sender,
        record.locked_balance,
        record.locked_until,
    )?;

    Ok(Response::new()
        .add_attribute("method", "renew")
        .add_attribute("owner", info.sender)
        .add_attribute("name", name)
        .add_attribute("locked_balance", record.locked_balance)
        .add_attribute("locked_until", record.locked_until.to_string())
        .add_attribute("order_id", order.order_id.to_string()))
}

pub fn release(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    name: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let record = load_record(deps.as_ref(), &name)?;
    only_name_owner(&info, &record)?;

    // Orders funded by this name stay in the ledger until claimed.
    NAMES.remove(deps.storage, name.as_str());

    Ok(Response::new()
        .add_attribute("method", "release")
        .add_attribute("owner", info.sender)
        .add_attribute("name", name))
}

pub fn set_price_per_char(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    price_per_char: Uint128,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let mut config = only_admin(deps.as_ref(), &info)?;
    if price_per_char.is_zero() {
        return Err(ContractError::InvalidConfig {
            field: String::from("price_per_char"),
        });
    }
    config.price_per_char = price_per_char;
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "set_price_per_char")
        .add_attribute("field", "price_per_char")
        .add_attribute("value", price_per_char))
}

pub fn set_lock_duration(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    lock_duration: u64,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let mut config = only_admin(deps.as_ref(), &info)?;
    if lock_duration == 0 {
        return Err(ContractError::InvalidConfig {
            field: String::from("lock_duration"),
        });
    }
    config.lock_duration = lock_duration;
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "set_lock_duration")
        .add_attribute("field", "lock_duration")
        .add_attribute("value", lock_duration.to_string()))
}

// Configuration reads are admin-only, so they go through execute where the
// sender is authenticated.
pub fn read_price_per_char(deps: Deps, info: MessageInfo) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = only_admin(deps, &info)?;
    Ok(Response::new()
        .set_data(to_binary(&PricePerCharResponse {
            price_per_char: config.price_per_char,
        })?)
        .add_attribute("method", "price_per_char"))
}

pub fn read_lock_duration(deps: Deps, info: MessageInfo) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = only_admin(deps, &info)?;
    Ok(Response::new()
        .set_data(to_binary(&LockDurationResponse {
            lock_duration: config.lock_duration,
        })?)
        .add_attribute("method", "lock_duration"))
}
