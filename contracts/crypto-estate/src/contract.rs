#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    coins, to_json_binary, Addr, BankMsg, Binary, Deps, DepsMut, Env, Event, MessageInfo,
    Order, Response, StdResult, Timestamp, Uint128,
};
use cw2::{get_contract_version, set_contract_version};
use cw_storage_plus::Bound;
use cw_utils::must_pay;

use crate::error::ContractError;
use crate::msg::{
    BeneficiaryListResponse, BeneficiaryResponse, ConfigResponse, DeceasedStatusResponse,
    ExecuteMsg, InstantiateMsg, MigrateMsg, PausedResponse, QueryMsg,
};
use crate::state::{Config, Declaration, BENEFICIARIES, CONFIG, DECLARATION, OWNERSHIP, PAUSE};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:crypto-estate";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    if msg.denom.is_empty() {
        return Err(ContractError::InvalidDenom {});
    }

    OWNERSHIP.initialize(deps.storage, &info.sender)?;
    PAUSE.initialize(deps.storage)?;
    CONFIG.save(
        deps.storage,
        &Config {
            denom: msg.denom.clone(),
        },
    )?;
    DECLARATION.save(
        deps.storage,
        &Declaration {
            is_deceased: false,
            unlock_time: Timestamp::from_seconds(0),
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", info.sender)
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
        ExecuteMsg::AddBeneficiary {
            beneficiary,
            amount,
        } => add_beneficiary(deps, info, beneficiary, amount),
        ExecuteMsg::RemoveBeneficiary { beneficiary } => {
            remove_beneficiary(deps, info, beneficiary)
        }
        ExecuteMsg::DeclareDeceased { unlock_time } => declare_deceased(deps, info, unlock_time),
        ExecuteMsg::TransferAssets {} => transfer_assets(deps, env, info),
        ExecuteMsg::Deposit {} => deposit(deps, info),
        ExecuteMsg::Pause {} => pause(deps, info),
        ExecuteMsg::Unpause {} => unpause(deps, info),
    }
}

pub fn add_beneficiary(
    deps: DepsMut,
    info: MessageInfo,
    beneficiary: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    OWNERSHIP.assert_owner(deps.storage, &info.sender)?;
    PAUSE.assert_not_paused(deps.storage)?;
    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount {});
    }

    let beneficiary = deps.api.addr_validate(&beneficiary)?;
    BENEFICIARIES.save(deps.storage, &beneficiary, &amount)?;

    Ok(Response::new()
        .add_attribute("method", "add_beneficiary")
        .add_event(
            Event::new("beneficiary_added")
                .add_attribute("beneficiary", beneficiary)
                .add_attribute("amount", amount),
        ))
}

/// Removing an address that holds no allocation still succeeds.
pub fn remove_beneficiary(
    deps: DepsMut,
    info: MessageInfo,
    beneficiary: String,
) -> Result<Response, ContractError> {
    OWNERSHIP.assert_owner(deps.storage, &info.sender)?;
    PAUSE.assert_not_paused(deps.storage)?;

    let beneficiary = deps.api.addr_validate(&beneficiary)?;
    BENEFICIARIES.remove(deps.storage, &beneficiary);

    Ok(Response::new()
        .add_attribute("method", "remove_beneficiary")
        .add_event(Event::new("beneficiary_removed").add_attribute("beneficiary", beneficiary)))
}

pub fn declare_deceased(
    deps: DepsMut,
    info: MessageInfo,
    unlock_time: Timestamp,
) -> Result<Response, ContractError> {
    OWNERSHIP.assert_owner(deps.storage, &info.sender)?;
    PAUSE.assert_not_paused(deps.storage)?;

    // a repeated declaration moves the unlock time
    DECLARATION.save(
        deps.storage,
        &Declaration {
            is_deceased: true,
            unlock_time,
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "declare_deceased")
        .add_event(
            Event::new("deceased_declared").add_attribute("unlock_time", unlock_time.to_string()),
        ))
}

/// Pays the sender's whole allocation. The allocation is removed before the
/// bank message is emitted, and the message only runs after this handler's
/// writes are committed, so a second claim always finds nothing to pay.
pub fn transfer_assets(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    PAUSE.assert_not_paused(deps.storage)?;

    let declaration = DECLARATION.load(deps.storage)?;
    if !declaration.is_deceased {
        return Err(ContractError::NotDeceased {});
    }
    if env.block.time < declaration.unlock_time {
        return Err(ContractError::Locked {
            unlock_time: declaration.unlock_time,
        });
    }

    let amount = BENEFICIARIES
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();
    if amount.is_zero() {
        return Err(ContractError::NoAllocation {
            beneficiary: info.sender,
        });
    }

    let config = CONFIG.load(deps.storage)?;
    let available = deps
        .querier
        .query_balance(&env.contract.address, &config.denom)?
        .amount;
    if available < amount {
        return Err(ContractError::InsufficientFunds {
            available,
            required: amount,
        });
    }

    BENEFICIARIES.remove(deps.storage, &info.sender);

    Ok(Response::new()
        .add_message(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: coins(amount.u128(), config.denom),
        })
        .add_attribute("method", "transfer_assets")
        .add_event(
            Event::new("asset_transferred")
                .add_attribute("beneficiary", info.sender)
                .add_attribute("amount", amount),
        ))
}

pub fn deposit(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    PAUSE.assert_not_paused(deps.storage)?;
    let config = CONFIG.load(deps.storage)?;
    let amount = must_pay(&info, &config.denom)?;

    Ok(Response::new().add_attribute("method", "deposit").add_event(
        Event::new("estate_funded")
            .add_attribute("from", info.sender)
            .add_attribute("amount", amount),
    ))
}

pub fn pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    OWNERSHIP.assert_owner(deps.storage, &info.sender)?;
    let event = PAUSE.pause(deps.storage, &info.sender)?;
    Ok(Response::new()
        .add_attribute("method", "pause")
        .add_event(event))
}

pub fn unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    OWNERSHIP.assert_owner(deps.storage, &info.sender)?;
    let event = PAUSE.unpause(deps.storage, &info.sender)?;
    Ok(Response::new()
        .add_attribute("method", "unpause")
        .add_event(event))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Beneficiary { address } => to_json_binary(&query_beneficiary(deps, address)?),
        QueryMsg::Beneficiaries { start_after, limit } => {
            to_json_binary(&query_beneficiaries(deps, start_after, limit)?)
        }
        QueryMsg::DeceasedStatus {} => to_json_binary(&query_deceased_status(deps)?),
        QueryMsg::Paused {} => to_json_binary(&PausedResponse {
            paused: PAUSE.is_paused(deps.storage)?,
        }),
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: OWNERSHIP.owner(deps.storage)?,
        denom: config.denom,
    })
}

fn query_beneficiary(deps: Deps, address: String) -> StdResult<BeneficiaryResponse> {
    let beneficiary = deps.api.addr_validate(&address)?;
    let amount = BENEFICIARIES
        .may_load(deps.storage, &beneficiary)?
        .unwrap_or_default();
    Ok(BeneficiaryResponse {
        beneficiary,
        amount,
    })
}

fn query_beneficiaries(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<BeneficiaryListResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start: Option<Addr> = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    let start = start.as_ref().map(Bound::exclusive);

    let beneficiaries = BENEFICIARIES
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (beneficiary, amount) = item?;
            Ok(BeneficiaryResponse {
                beneficiary,
                amount,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(BeneficiaryListResponse { beneficiaries })
}

fn query_deceased_status(deps: Deps) -> StdResult<DeceasedStatusResponse> {
    let declaration = DECLARATION.load(deps.storage)?;
    Ok(DeceasedStatusResponse {
        is_deceased: declaration.is_deceased,
        unlock_time: declaration.unlock_time,
    })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let previous = get_contract_version(deps.storage)?;
    if previous.contract != CONTRACT_NAME {
        return Err(ContractError::CannotMigrate {
            previous_contract: previous.contract,
        });
    }
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("from_version", previous.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}
