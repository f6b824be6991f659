#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, Event, MessageInfo, Response, StdResult,
};
use cw2::{get_contract_version, set_contract_version};

use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, DeceasedResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg,
};
use crate::state::{Config, CONFIG, DECEASED, OWNERSHIP};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:death-oracle";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let mut approvers: Vec<Addr> = Vec::with_capacity(msg.approvers.len());
    for approver in &msg.approvers {
        let approver = deps.api.addr_validate(approver)?;
        if approvers.contains(&approver) {
            return Err(ContractError::DuplicateApprover {
                approver: approver.into_string(),
            });
        }
        approvers.push(approver);
    }

    let approver_count = approvers.len() as u32;
    if msg.required_approvals == 0 || msg.required_approvals > approver_count {
        return Err(ContractError::InvalidThreshold {
            required: msg.required_approvals,
            approvers: approver_count,
        });
    }

    OWNERSHIP.initialize(deps.storage, &info.sender)?;
    CONFIG.save(
        deps.storage,
        &Config {
            approvers,
            required_approvals: msg.required_approvals,
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", info.sender)
        .add_attribute("approvers", approver_count.to_string())
        .add_attribute("required_approvals", msg.required_approvals.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::UpdateDeceasedStatus { subject, deceased } => {
            update_deceased_status(deps, info, subject, deceased)
        }
    }
}

pub fn update_deceased_status(
    deps: DepsMut,
    info: MessageInfo,
    subject: String,
    deceased: bool,
) -> Result<Response, ContractError> {
    // TODO: count approvals from CONFIG.approvers once a voting flow is agreed on
    OWNERSHIP.assert_owner(deps.storage, &info.sender)?;

    let subject = deps.api.addr_validate(&subject)?;
    DECEASED.save(deps.storage, &subject, &deceased)?;

    Ok(Response::new()
        .add_attribute("method", "update_deceased_status")
        .add_event(
            Event::new("deceased_status_updated")
                .add_attribute("subject", subject)
                .add_attribute("deceased", deceased.to_string()),
        ))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::IsDeceased { subject } => to_json_binary(&query_is_deceased(deps, subject)?),
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
    }
}

fn query_is_deceased(deps: Deps, subject: String) -> StdResult<DeceasedResponse> {
    let subject = deps.api.addr_validate(&subject)?;
    let deceased = DECEASED
        .may_load(deps.storage, &subject)?
        .unwrap_or(false);
    Ok(DeceasedResponse { subject, deceased })
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: OWNERSHIP.owner(deps.storage)?,
        approvers: config.approvers,
        required_approvals: config.required_approvals,
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
