#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    coins, to_json_binary, BankMsg, Binary, Deps, DepsMut, Env, Event, MessageInfo, Response,
    StdResult, Uint128,
};
use cw2::{get_contract_version, set_contract_version};
use cw_utils::must_pay;

use crate::error::ContractError;
use crate::msg::{ConfigResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, StateResponse};
use crate::state::{Config, Escrow, EscrowState, CONFIG, ESCROW};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:escrow";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let buyer = deps.api.addr_validate(&msg.buyer)?;
    let seller = deps.api.addr_validate(&msg.seller)?;
    if buyer == seller {
        return Err(ContractError::SameParty {});
    }
    if msg.denom.is_empty() {
        return Err(ContractError::InvalidDenom {});
    }

    CONFIG.save(
        deps.storage,
        &Config {
            buyer: buyer.clone(),
            seller: seller.clone(),
            denom: msg.denom,
        },
    )?;
    ESCROW.save(
        deps.storage,
        &Escrow {
            state: EscrowState::AwaitingPayment,
            deposit: Uint128::zero(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("buyer", buyer)
        .add_attribute("seller", seller))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::ConfirmPayment {} => confirm_payment(deps, info),
        ExecuteMsg::ConfirmDelivery {} => confirm_delivery(deps, info),
    }
}

/// Checks the caller before the state, so a stranger is always told they
/// are not the buyer.
fn load_for_buyer(
    deps: Deps,
    info: &MessageInfo,
    expected: EscrowState,
) -> Result<(Config, Escrow), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.buyer {
        return Err(ContractError::NotBuyer {});
    }
    let escrow = ESCROW.load(deps.storage)?;
    if escrow.state != expected {
        return Err(ContractError::InvalidState {
            expected,
            found: escrow.state,
        });
    }
    Ok((config, escrow))
}

pub fn confirm_payment(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let (config, _) = load_for_buyer(deps.as_ref(), &info, EscrowState::AwaitingPayment)?;
    let amount = must_pay(&info, &config.denom)?;

    ESCROW.save(
        deps.storage,
        &Escrow {
            state: EscrowState::AwaitingDelivery,
            deposit: amount,
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "confirm_payment")
        .add_event(
            Event::new("payment_confirmed")
                .add_attribute("buyer", info.sender)
                .add_attribute("amount", amount),
        ))
}

pub fn confirm_delivery(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let (config, escrow) =
        load_for_buyer(deps.as_ref(), &info, EscrowState::AwaitingDelivery)?;

    ESCROW.save(
        deps.storage,
        &Escrow {
            state: EscrowState::Complete,
            deposit: Uint128::zero(),
        },
    )?;

    Ok(Response::new()
        .add_message(BankMsg::Send {
            to_address: config.seller.to_string(),
            amount: coins(escrow.deposit.u128(), config.denom),
        })
        .add_attribute("method", "confirm_delivery")
        .add_event(
            Event::new("delivery_confirmed")
                .add_attribute("seller", config.seller)
                .add_attribute("amount", escrow.deposit),
        ))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::CurrentState {} => {
            let escrow = ESCROW.load(deps.storage)?;
            to_json_binary(&StateResponse {
                state: escrow.state,
                code: escrow.state.code(),
            })
        }
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let escrow = ESCROW.load(deps.storage)?;
    Ok(ConfigResponse {
        buyer: config.buyer,
        seller: config.seller,
        denom: config.denom,
        deposit: escrow.deposit,
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
