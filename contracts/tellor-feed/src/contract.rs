use cosmwasm_std::{
    coins, ensure, ensure_eq, entry_point, to_json_binary, Addr, BankMsg, CosmosMsg, Deps, DepsMut,
    Env, HexBinary, MessageInfo, QueryResponse, Response, StdError, StdResult, Timestamp, Uint128,
    Uint64, WasmMsg,
};
use cw2::{ensure_from_older_version, set_contract_version};
use tellor_protocol::{
    is_fresh, validate_query_bytes, validate_timestamp_freshness, LastValue, MedianizerExecuteMsg,
    MedianizerQueryMsg, QueryIdResponse, DEFAULT_TIMESTAMP_FRESHNESS,
};

use crate::attributes::{
    ATTR_ACTION, ATTR_AMOUNT, ATTR_GOVERNANCE_FEE, ATTR_RECIPIENT, ATTR_REPORTER,
    ATTR_REPORTER_REWARD, ATTR_STAKING_STATUS, ATTR_TIMESTAMP, ATTR_VALUE,
};
use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ExecuteMsg, HistoryResponse, InstantiateMsg, LastValueResponse, MigrateMsg,
    QueryMsg, StakerResponse, TipAmountResponse,
};
use crate::state::{
    history_asc, history_desc, history_push, load_last_value, save_last_value, Config, Staker,
    CONFIG, STAKER, TIP_AMOUNT,
};

const CONTRACT_NAME: &str = "crates.io:tellor-feed";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_STAKE_AMOUNT: u128 = 200_000;

/// Time between a withdrawal request and the earliest withdrawal
const LOCK_PERIOD: u64 = 86_400; // seconds

/// Share of the tip the reporter receives. Governance gets the rest.
const REPORTER_SHARE_PERCENT: u128 = 98;

const DEFAULT_HISTORY_LIMIT: u32 = 15;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let InstantiateMsg {
        governance,
        query_id,
        query_data,
        medianizer,
        timestamp_freshness,
        stake_amount,
        denom,
    } = msg;

    ensure!(!query_id.is_empty(), ContractError::EmptyQueryId);
    validate_query_bytes("query_id", &query_id)?;
    validate_query_bytes("query_data", &query_data)?;
    let timestamp_freshness = timestamp_freshness.unwrap_or(DEFAULT_TIMESTAMP_FRESHNESS);
    validate_timestamp_freshness(timestamp_freshness)?;
    let stake_amount = stake_amount.unwrap_or(Uint128::new(DEFAULT_STAKE_AMOUNT));
    ensure!(!stake_amount.is_zero(), ContractError::ZeroStakeAmount);
    ensure!(!denom.is_empty(), ContractError::EmptyDenom);

    let governance = deps.api.addr_validate(&governance)?;
    let medianizer = medianizer
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;

    let config = Config {
        governance,
        medianizer,
        query_id,
        query_data,
        stake_amount,
        denom,
        timestamp_freshness,
    };
    CONFIG.save(deps.storage, &config)?;
    STAKER.save(deps.storage, &Staker::Unstaked)?;
    TIP_AMOUNT.save(deps.storage, &Uint128::zero())?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "instantiate")
        .add_attribute("governance", config.governance)
        .add_attribute("query_id", config.query_id.to_hex()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    ensure_from_older_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute(ATTR_ACTION, "migrate"))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    if !matches!(msg, ExecuteMsg::Stake {} | ExecuteMsg::Tip {}) {
        nonpayable(&info)?;
    }
    match msg {
        ExecuteMsg::Stake {} => execute_stake(deps, info),
        ExecuteMsg::Tip {} => execute_tip(deps, info),
        ExecuteMsg::Report {
            query_id,
            value,
            timestamp,
        } => execute_report(deps, env, info, query_id, value, timestamp),
        ExecuteMsg::RequestWithdraw {} => execute_request_withdraw(deps, env, info),
        ExecuteMsg::Withdraw {} => execute_withdraw(deps, env, info),
        ExecuteMsg::SlashReporter {} => execute_slash_reporter(deps, env, info),
        ExecuteMsg::ChangeGovernance { new_governance } => {
            execute_change_governance(deps, info, new_governance)
        }
        ExecuteMsg::ChangeMedianizer { new_medianizer } => {
            execute_change_medianizer(deps, info, new_medianizer)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<QueryResponse> {
    let response = match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?)?,
        QueryMsg::Staker {} => to_json_binary(&query_staker(deps)?)?,
        QueryMsg::LastValue {} => to_json_binary(&query_last_value(deps)?)?,
        QueryMsg::HistoryAsc { offset, limit } => {
            to_json_binary(&query_history(deps, offset, limit, false)?)?
        }
        QueryMsg::HistoryDesc { offset, limit } => {
            to_json_binary(&query_history(deps, offset, limit, true)?)?
        }
        QueryMsg::TipAmount {} => to_json_binary(&query_tip_amount(deps)?)?,
    };
    Ok(response)
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(config)
}

fn query_staker(deps: Deps) -> StdResult<StakerResponse> {
    let staker = STAKER.load(deps.storage)?;
    Ok(StakerResponse {
        status: staker.status(),
        reporter: staker.reporter().cloned(),
        lock_timestamp: staker.lock_timestamp(),
    })
}

fn query_last_value(deps: Deps) -> StdResult<LastValueResponse> {
    let last_value = load_last_value(deps.storage)?;
    Ok(LastValueResponse { last_value })
}

fn query_history(
    deps: Deps,
    offset: Option<u32>,
    limit: Option<u32>,
    descending: bool,
) -> StdResult<HistoryResponse> {
    let offset = offset.unwrap_or_default() as usize;
    let limit = limit.unwrap_or(DEFAULT_HISTORY_LIMIT) as usize;
    let reports = if descending {
        history_desc(deps.storage, offset, limit)?
    } else {
        history_asc(deps.storage, offset, limit)?
    };
    Ok(HistoryResponse { reports })
}

fn query_tip_amount(deps: Deps) -> StdResult<TipAmountResponse> {
    let amount = TIP_AMOUNT.load(deps.storage)?;
    Ok(TipAmountResponse { amount })
}

fn nonpayable(info: &MessageInfo) -> Result<(), ContractError> {
    ensure!(info.funds.is_empty(), ContractError::UnexpectedFunds);
    Ok(())
}

/// Returns the amount of the single coin sent along, which must be in the feed's denom
fn must_pay(info: &MessageInfo, denom: &str) -> Result<Uint128, ContractError> {
    ensure_eq!(info.funds.len(), 1, ContractError::TooManyOrNoCoins);
    ensure_eq!(
        info.funds[0].denom,
        denom,
        ContractError::WrongDenom {
            expected: denom.to_string()
        }
    );
    Ok(info.funds[0].amount)
}

fn execute_stake(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let staker = STAKER.load(deps.storage)?;
    ensure!(staker.reporter().is_none(), ContractError::AlreadyStaked);

    let amount = must_pay(&info, &config.denom)?;
    ensure_eq!(
        amount,
        config.stake_amount,
        ContractError::WrongStakeAmount {
            expected: config.stake_amount,
            got: amount,
        }
    );

    let staker = Staker::Staked {
        reporter: info.sender.clone(),
    };
    STAKER.save(deps.storage, &staker)?;

    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "stake")
        .add_attribute(ATTR_REPORTER, info.sender)
        .add_attribute(ATTR_AMOUNT, amount.to_string())
        .add_attribute(ATTR_STAKING_STATUS, staker.status().code().to_string()))
}

fn execute_tip(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let amount = must_pay(&info, &config.denom)?;
    ensure!(!amount.is_zero(), ContractError::ZeroTip);

    let tip = TIP_AMOUNT
        .load(deps.storage)?
        .checked_add(amount)
        .map_err(StdError::from)?;
    TIP_AMOUNT.save(deps.storage, &tip)?;

    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "tip")
        .add_attribute("tipper", info.sender)
        .add_attribute(ATTR_AMOUNT, amount.to_string())
        .add_attribute("tip_amount", tip.to_string()))
}

/// Stores the report, triggers the medianizer and pays out the collected tip.
fn execute_report(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    query_id: HexBinary,
    value: Uint64,
    timestamp: Timestamp,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let staker = STAKER.load(deps.storage)?;
    ensure!(
        staker.reporter() == Some(&info.sender),
        ContractError::Unauthorized
    );
    ensure!(
        matches!(staker, Staker::Staked { .. }),
        ContractError::NotStaked
    );
    ensure_eq!(query_id, config.query_id, ContractError::QueryIdMismatch);
    ensure!(
        is_fresh(timestamp, env.block.time, config.timestamp_freshness),
        ContractError::StaleTimestamp
    );

    let Some(medianizer) = config.medianizer else {
        return Err(ContractError::MedianizerUnset);
    };
    let medianizer_query_id: QueryIdResponse = deps
        .querier
        .query_wasm_smart(&medianizer, &MedianizerQueryMsg::QueryId {})?;
    ensure_eq!(
        medianizer_query_id.query_id,
        config.query_id,
        ContractError::MedianizerQueryIdMismatch
    );

    let report = LastValue {
        timestamp: Timestamp::from_seconds(timestamp.seconds()),
        value,
    };
    history_push(deps.storage, &report)?;
    save_last_value(deps.storage, &report);

    let mut out_msgs: Vec<CosmosMsg> = Vec::with_capacity(3);
    out_msgs.push(
        WasmMsg::Execute {
            contract_addr: medianizer.to_string(),
            msg: to_json_binary(&MedianizerExecuteMsg::GetValues {})?,
            funds: vec![],
        }
        .into(),
    );

    let tip = TIP_AMOUNT.load(deps.storage)?;
    let reporter_reward = tip.multiply_ratio(REPORTER_SHARE_PERCENT, 100u128);
    let governance_fee = tip - reporter_reward;
    // bank send does not like zero coins
    if !reporter_reward.is_zero() {
        out_msgs.push(
            BankMsg::Send {
                to_address: info.sender.to_string(),
                amount: coins(reporter_reward.u128(), &config.denom),
            }
            .into(),
        );
    }
    if !governance_fee.is_zero() {
        out_msgs.push(
            BankMsg::Send {
                to_address: config.governance.to_string(),
                amount: coins(governance_fee.u128(), &config.denom),
            }
            .into(),
        );
    }
    TIP_AMOUNT.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new()
        .add_messages(out_msgs)
        .add_attribute(ATTR_ACTION, "report")
        .add_attribute(ATTR_REPORTER, info.sender)
        .add_attribute(ATTR_VALUE, report.value.to_string())
        .add_attribute(ATTR_TIMESTAMP, report.timestamp.seconds().to_string())
        .add_attribute(ATTR_REPORTER_REWARD, reporter_reward.to_string())
        .add_attribute(ATTR_GOVERNANCE_FEE, governance_fee.to_string()))
}

fn execute_request_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let staker = STAKER.load(deps.storage)?;
    ensure!(
        staker.reporter() == Some(&info.sender),
        ContractError::Unauthorized
    );
    let reporter = match staker {
        Staker::Staked { reporter } => reporter,
        Staker::Locked { .. } => return Err(ContractError::WithdrawalAlreadyRequested),
        Staker::Unstaked => return Err(ContractError::NotStaked),
    };

    let staker = Staker::Locked {
        reporter,
        since: env.block.time,
    };
    STAKER.save(deps.storage, &staker)?;

    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "request_withdraw")
        .add_attribute(ATTR_REPORTER, info.sender)
        .add_attribute(ATTR_STAKING_STATUS, staker.status().code().to_string())
        .add_attribute(
            "unlocked_at",
            env.block.time.plus_seconds(LOCK_PERIOD).seconds().to_string(),
        ))
}

fn execute_withdraw(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let staker = STAKER.load(deps.storage)?;
    ensure!(
        staker.reporter() == Some(&info.sender),
        ContractError::Unauthorized
    );
    let Staker::Locked { reporter, since } = staker else {
        return Err(ContractError::WithdrawalNotRequested);
    };

    let unlocked_at = since.plus_seconds(LOCK_PERIOD);
    ensure!(
        env.block.time.seconds() > unlocked_at.seconds(),
        ContractError::StakeLocked { unlocked_at }
    );

    let (msg, amount) = close_out(deps.as_ref(), &env, &reporter)?;
    STAKER.save(deps.storage, &Staker::Unstaked)?;
    TIP_AMOUNT.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new()
        .add_messages(msg)
        .add_attribute(ATTR_ACTION, "withdraw")
        .add_attribute(ATTR_RECIPIENT, reporter)
        .add_attribute(ATTR_AMOUNT, amount.to_string())
        .add_attribute(
            ATTR_STAKING_STATUS,
            Staker::Unstaked.status().code().to_string(),
        ))
}

fn execute_slash_reporter(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_eq!(info.sender, config.governance, ContractError::Unauthorized);

    let staker = STAKER.load(deps.storage)?;
    let Some(reporter) = staker.reporter() else {
        return Err(ContractError::NotStaked);
    };

    let (msg, amount) = close_out(deps.as_ref(), &env, &config.governance)?;
    let response = Response::new()
        .add_messages(msg)
        .add_attribute(ATTR_ACTION, "slash_reporter")
        .add_attribute(ATTR_REPORTER, reporter.as_str())
        .add_attribute(ATTR_RECIPIENT, config.governance)
        .add_attribute(ATTR_AMOUNT, amount.to_string());

    STAKER.save(deps.storage, &Staker::Unstaked)?;
    TIP_AMOUNT.save(deps.storage, &Uint128::zero())?;

    Ok(response)
}

/// Creates the message sending the contract's full balance of the stake denom to `recipient`.
/// No message is created for an empty balance.
fn close_out(
    deps: Deps,
    env: &Env,
    recipient: &Addr,
) -> Result<(Option<BankMsg>, Uint128), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let balance = deps
        .querier
        .query_balance(&env.contract.address, &config.denom)?;
    if balance.amount.is_zero() {
        return Ok((None, Uint128::zero()));
    }
    let amount = balance.amount;
    let msg = BankMsg::Send {
        to_address: recipient.to_string(),
        amount: vec![balance],
    };
    Ok((Some(msg), amount))
}

fn execute_change_governance(
    deps: DepsMut,
    info: MessageInfo,
    new_governance: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_eq!(info.sender, config.governance, ContractError::Unauthorized);

    config.governance = deps.api.addr_validate(&new_governance)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "change_governance")
        .add_attribute("governance", config.governance))
}

fn execute_change_medianizer(
    deps: DepsMut,
    info: MessageInfo,
    new_medianizer: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_eq!(info.sender, config.governance, ContractError::Unauthorized);

    let medianizer = deps.api.addr_validate(&new_medianizer)?;
    config.medianizer = Some(medianizer.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "change_medianizer")
        .add_attribute("medianizer", medianizer))
}
