#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, Event, MessageInfo, Response, StdResult, Uint128,
};
use cw2::{get_contract_version, set_contract_version};
use estate_controls::Role;

use crate::error::ContractError;
use crate::msg::{
    BalanceResponse, ExecuteMsg, HasRoleResponse, InstantiateMsg, MigrateMsg, PausedResponse,
    QueryMsg, RoleMembersResponse, RoleResponse, TokenInfoResponse,
};
use crate::state::{TokenInfo, BALANCES, PAUSE, ROLES, TOKEN_INFO};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:estate-token";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const MAX_DECIMALS: u8 = 18;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    if msg.cap.is_zero() {
        return Err(ContractError::InvalidCap {});
    }
    if msg.decimals > MAX_DECIMALS {
        return Err(ContractError::InvalidDecimals {});
    }
    if msg.name.trim().is_empty() || msg.symbol.trim().is_empty() {
        return Err(ContractError::InvalidTokenInfo {});
    }

    TOKEN_INFO.save(
        deps.storage,
        &TokenInfo {
            name: msg.name,
            symbol: msg.symbol,
            decimals: msg.decimals,
            total_supply: Uint128::zero(),
            cap: msg.cap,
        },
    )?;
    ROLES.grant(deps.storage, Role::Admin, &info.sender)?;
    PAUSE.initialize(deps.storage)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", info.sender)
        .add_attribute("cap", msg.cap))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Mint { recipient, amount } => mint(deps, info, recipient, amount),
        ExecuteMsg::Burn { amount } => burn(deps, info, amount),
        ExecuteMsg::Transfer { recipient, amount } => transfer(deps, info, recipient, amount),
        ExecuteMsg::GrantRole { role, account } => grant_role(deps, info, role, account),
        ExecuteMsg::RevokeRole { role, account } => revoke_role(deps, info, role, account),
        ExecuteMsg::Pause {} => pause(deps, info),
        ExecuteMsg::Unpause {} => unpause(deps, info),
    }
}

pub fn mint(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ROLES.assert_role(deps.storage, Role::Minter, &info.sender)?;
    PAUSE.assert_not_paused(deps.storage)?;
    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount {});
    }
    let recipient = deps.api.addr_validate(&recipient)?;

    let mut token = TOKEN_INFO.load(deps.storage)?;
    let requested = token.total_supply.checked_add(amount)?;
    if requested > token.cap {
        return Err(ContractError::CapExceeded {
            cap: token.cap,
            requested,
        });
    }
    token.total_supply = requested;
    TOKEN_INFO.save(deps.storage, &token)?;

    BALANCES.update(deps.storage, &recipient, |balance| -> StdResult<_> {
        Ok(balance.unwrap_or_default().checked_add(amount)?)
    })?;

    Ok(Response::new().add_attribute("method", "mint").add_event(
        Event::new("mint")
            .add_attribute("minter", info.sender)
            .add_attribute("recipient", recipient)
            .add_attribute("amount", amount),
    ))
}

pub fn burn(deps: DepsMut, info: MessageInfo, amount: Uint128) -> Result<Response, ContractError> {
    PAUSE.assert_not_paused(deps.storage)?;
    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount {});
    }

    let balance = BALANCES
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();
    if amount > balance {
        return Err(ContractError::BurnExceedsBalance {});
    }
    BALANCES.save(deps.storage, &info.sender, &(balance - amount))?;
    TOKEN_INFO.update(deps.storage, |mut token| -> StdResult<_> {
        token.total_supply = token.total_supply.checked_sub(amount)?;
        Ok(token)
    })?;

    Ok(Response::new().add_attribute("method", "burn").add_event(
        Event::new("burn")
            .add_attribute("from", info.sender)
            .add_attribute("amount", amount),
    ))
}

pub fn transfer(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    PAUSE.assert_not_paused(deps.storage)?;
    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount {});
    }
    let recipient = deps.api.addr_validate(&recipient)?;

    let balance = BALANCES
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();
    if amount > balance {
        return Err(ContractError::TransferExceedsBalance {});
    }
    BALANCES.save(deps.storage, &info.sender, &(balance - amount))?;
    BALANCES.update(deps.storage, &recipient, |balance| -> StdResult<_> {
        Ok(balance.unwrap_or_default().checked_add(amount)?)
    })?;

    Ok(Response::new().add_attribute("method", "transfer").add_event(
        Event::new("transfer")
            .add_attribute("from", info.sender)
            .add_attribute("to", recipient)
            .add_attribute("amount", amount),
    ))
}

pub fn grant_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Role,
    account: String,
) -> Result<Response, ContractError> {
    ROLES.assert_role(deps.storage, Role::Admin, &info.sender)?;
    let account = deps.api.addr_validate(&account)?;

    let mut res = Response::new().add_attribute("method", "grant_role");
    if ROLES.grant(deps.storage, role, &account)? {
        res = res.add_event(
            Event::new("role_granted")
                .add_attribute("role", role.as_str())
                .add_attribute("account", account)
                .add_attribute("sender", info.sender),
        );
    }
    Ok(res)
}

pub fn revoke_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Role,
    account: String,
) -> Result<Response, ContractError> {
    ROLES.assert_role(deps.storage, Role::Admin, &info.sender)?;
    let account = deps.api.addr_validate(&account)?;

    let mut res = Response::new().add_attribute("method", "revoke_role");
    if ROLES.revoke(deps.storage, role, &account) {
        res = res.add_event(
            Event::new("role_revoked")
                .add_attribute("role", role.as_str())
                .add_attribute("account", account)
                .add_attribute("sender", info.sender),
        );
    }
    Ok(res)
}

pub fn pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    ROLES.assert_role(deps.storage, Role::Admin, &info.sender)?;
    let event = PAUSE.pause(deps.storage, &info.sender)?;
    Ok(Response::new()
        .add_attribute("method", "pause")
        .add_event(event))
}

pub fn unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    ROLES.assert_role(deps.storage, Role::Admin, &info.sender)?;
    let event = PAUSE.unpause(deps.storage, &info.sender)?;
    Ok(Response::new()
        .add_attribute("method", "unpause")
        .add_event(event))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
        QueryMsg::MinterRole {} => to_json_binary(&RoleResponse { role: Role::Minter }),
        QueryMsg::HasRole { role, account } => {
            let account = deps.api.addr_validate(&account)?;
            to_json_binary(&HasRoleResponse {
                has_role: ROLES.has_role(deps.storage, role, &account),
            })
        }
        QueryMsg::RoleMembers { role } => to_json_binary(&RoleMembersResponse {
            members: ROLES
                .members(deps.storage, role)?
                .into_iter()
                .map(String::from)
                .collect(),
        }),
        QueryMsg::Paused {} => to_json_binary(&PausedResponse {
            paused: PAUSE.is_paused(deps.storage)?,
        }),
    }
}

fn query_balance(deps: Deps, address: String) -> StdResult<BalanceResponse> {
    let address = deps.api.addr_validate(&address)?;
    let balance = BALANCES
        .may_load(deps.storage, &address)?
        .unwrap_or_default();
    Ok(BalanceResponse { balance })
}

fn query_token_info(deps: Deps) -> StdResult<TokenInfoResponse> {
    let token = TOKEN_INFO.load(deps.storage)?;
    Ok(TokenInfoResponse {
        name: token.name,
        symbol: token.symbol,
        decimals: token.decimals,
        total_supply: token.total_supply,
        cap: token.cap,
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

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};
    use cosmwasm_std::{from_json, Addr};
    use estate_controls::ControlError;

    const OWNER: &str = "owner";
    const MINTER: &str = "minter";
    const CAP: u128 = 10_000;

    fn setup(deps: DepsMut) {
        let msg = InstantiateMsg {
            name: "Estate Token".to_string(),
            symbol: "EST".to_string(),
            decimals: 6,
            cap: Uint128::new(CAP),
        };
        instantiate(deps, mock_env(), mock_info(OWNER, &[]), msg).unwrap();
    }

    fn grant_minter(deps: DepsMut) {
        execute(
            deps,
            mock_env(),
            mock_info(OWNER, &[]),
            ExecuteMsg::GrantRole {
                role: Role::Minter,
                account: MINTER.to_string(),
            },
        )
        .unwrap();
    }

    fn do_mint(deps: DepsMut, sender: &str, amount: u128) -> Result<Response, ContractError> {
        execute(
            deps,
            mock_env(),
            mock_info(sender, &[]),
            ExecuteMsg::Mint {
                recipient: MINTER.to_string(),
                amount: Uint128::new(amount),
            },
        )
    }

    fn do_burn(deps: DepsMut, sender: &str, amount: u128) -> Result<Response, ContractError> {
        execute(
            deps,
            mock_env(),
            mock_info(sender, &[]),
            ExecuteMsg::Burn {
                amount: Uint128::new(amount),
            },
        )
    }

    fn balance_of(deps: Deps, address: &str) -> u128 {
        query_balance(deps, address.to_string()).unwrap().balance.u128()
    }

    #[test]
    fn proper_initialization() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let info = query_token_info(deps.as_ref()).unwrap();
        assert_eq!(info.symbol, "EST");
        assert_eq!(info.total_supply, Uint128::zero());
        assert_eq!(info.cap, Uint128::new(CAP));
        assert!(ROLES.has_role(&deps.storage, Role::Admin, &Addr::unchecked(OWNER)));
    }

    #[test]
    fn invalid_instantiation() {
        let mut deps = mock_dependencies();
        let msg = InstantiateMsg {
            name: "Estate Token".to_string(),
            symbol: "EST".to_string(),
            decimals: 6,
            cap: Uint128::zero(),
        };
        let err = instantiate(deps.as_mut(), mock_env(), mock_info(OWNER, &[]), msg.clone())
            .unwrap_err();
        assert_eq!(err, ContractError::InvalidCap {});

        let msg = InstantiateMsg {
            decimals: 19,
            cap: Uint128::new(CAP),
            ..msg
        };
        let err = instantiate(deps.as_mut(), mock_env(), mock_info(OWNER, &[]), msg).unwrap_err();
        assert_eq!(err, ContractError::InvalidDecimals {});
    }

    #[test]
    fn minter_mints() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());
        grant_minter(deps.as_mut());

        let res = do_mint(deps.as_mut(), MINTER, 1000).unwrap();
        assert_eq!(res.events[0].ty, "mint");
        assert_eq!(balance_of(deps.as_ref(), MINTER), 1000);
        assert_eq!(
            query_token_info(deps.as_ref()).unwrap().total_supply,
            Uint128::new(1000)
        );
    }

    #[test]
    fn non_minter_cannot_mint() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        // the admin does not implicitly hold the minter role
        for sender in ["stranger", OWNER] {
            let err = do_mint(deps.as_mut(), sender, 1000).unwrap_err();
            assert_eq!(
                err,
                ContractError::Control(ControlError::MissingRole {
                    role: Role::Minter,
                    account: Addr::unchecked(sender),
                })
            );
            assert!(err
                .to_string()
                .starts_with("AccessControl: account is missing role"));
        }
        assert_eq!(balance_of(deps.as_ref(), MINTER), 0);
    }

    #[test]
    fn only_admin_grants_roles() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("stranger", &[]),
            ExecuteMsg::GrantRole {
                role: Role::Minter,
                account: "stranger".to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ContractError::Control(ControlError::MissingRole {
                role: Role::Admin,
                ..
            })
        ));

        grant_minter(deps.as_mut());
        let res = execute(
            deps.as_mut(),
            mock_env(),
            mock_info(OWNER, &[]),
            ExecuteMsg::GrantRole {
                role: Role::Minter,
                account: MINTER.to_string(),
            },
        )
        .unwrap();
        // already granted, nothing to announce
        assert!(res.events.is_empty());

        let res = execute(
            deps.as_mut(),
            mock_env(),
            mock_info(OWNER, &[]),
            ExecuteMsg::RevokeRole {
                role: Role::Minter,
                account: MINTER.to_string(),
            },
        )
        .unwrap();
        assert_eq!(res.events[0].ty, "role_revoked");
        assert!(do_mint(deps.as_mut(), MINTER, 1).is_err());
    }

    #[test]
    fn mint_respects_cap() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());
        grant_minter(deps.as_mut());

        let err = do_mint(deps.as_mut(), MINTER, CAP + 1).unwrap_err();
        assert_eq!(
            err,
            ContractError::CapExceeded {
                cap: Uint128::new(CAP),
                requested: Uint128::new(CAP + 1),
            }
        );
        assert!(err.to_string().starts_with("ERC20Capped: cap exceeded"));

        do_mint(deps.as_mut(), MINTER, CAP).unwrap();
        assert_eq!(balance_of(deps.as_ref(), MINTER), CAP);
        assert!(do_mint(deps.as_mut(), MINTER, 1).is_err());
    }

    #[test]
    fn burn_reduces_balance_and_supply() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());
        grant_minter(deps.as_mut());
        do_mint(deps.as_mut(), MINTER, 1000).unwrap();

        do_burn(deps.as_mut(), MINTER, 500).unwrap();
        assert_eq!(balance_of(deps.as_ref(), MINTER), 500);
        assert_eq!(
            query_token_info(deps.as_ref()).unwrap().total_supply,
            Uint128::new(500)
        );

        do_burn(deps.as_mut(), MINTER, 500).unwrap();
        assert_eq!(balance_of(deps.as_ref(), MINTER), 0);
    }

    #[test]
    fn burn_more_than_balance_fails() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let err = do_burn(deps.as_mut(), MINTER, 1000).unwrap_err();
        assert_eq!(err.to_string(), "ERC20: burn amount exceeds balance");

        let err = do_burn(deps.as_mut(), MINTER, 0).unwrap_err();
        assert_eq!(err, ContractError::InvalidZeroAmount {});
    }

    #[test]
    fn transfer_moves_balance() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());
        grant_minter(deps.as_mut());
        do_mint(deps.as_mut(), MINTER, 1000).unwrap();

        let transfer = |amount: u128| ExecuteMsg::Transfer {
            recipient: "heir".to_string(),
            amount: Uint128::new(amount),
        };
        execute(deps.as_mut(), mock_env(), mock_info(MINTER, &[]), transfer(300)).unwrap();
        assert_eq!(balance_of(deps.as_ref(), MINTER), 700);
        assert_eq!(balance_of(deps.as_ref(), "heir"), 300);

        let err = execute(deps.as_mut(), mock_env(), mock_info(MINTER, &[]), transfer(701))
            .unwrap_err();
        assert_eq!(err, ContractError::TransferExceedsBalance {});
    }

    #[test]
    fn pause_blocks_minting() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());
        grant_minter(deps.as_mut());

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info(MINTER, &[]),
            ExecuteMsg::Pause {},
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::Control(ControlError::MissingRole { .. })));

        execute(deps.as_mut(), mock_env(), mock_info(OWNER, &[]), ExecuteMsg::Pause {}).unwrap();
        let err = do_mint(deps.as_mut(), MINTER, 10).unwrap_err();
        assert_eq!(err, ContractError::Control(ControlError::Paused {}));

        execute(deps.as_mut(), mock_env(), mock_info(OWNER, &[]), ExecuteMsg::Unpause {}).unwrap();
        do_mint(deps.as_mut(), MINTER, 10).unwrap();
    }

    #[test]
    fn minter_role_query_matches_grantable_role() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let res = query(deps.as_ref(), mock_env(), QueryMsg::MinterRole {}).unwrap();
        let role: RoleResponse = from_json(&res).unwrap();
        assert_eq!(role.role, Role::Minter);

        execute(
            deps.as_mut(),
            mock_env(),
            mock_info(OWNER, &[]),
            ExecuteMsg::GrantRole {
                role: role.role,
                account: MINTER.to_string(),
            },
        )
        .unwrap();
        let res = query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::HasRole {
                role: Role::Minter,
                account: MINTER.to_string(),
            },
        )
        .unwrap();
        assert!(from_json::<HasRoleResponse>(&res).unwrap().has_role);

        let res = query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::RoleMembers { role: Role::Minter },
        )
        .unwrap();
        assert_eq!(
            from_json::<RoleMembersResponse>(&res).unwrap().members,
            vec![MINTER.to_string()]
        );
    }
}
