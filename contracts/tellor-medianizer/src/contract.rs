use cosmwasm_std::{
    ensure, ensure_eq, entry_point, to_json_binary, Addr, Deps, DepsMut, Env, MessageInfo,
    QuerierWrapper, QueryResponse, Response, StdResult, Uint64,
};
use cw2::{ensure_from_older_version, set_contract_version};
use tellor_protocol::{
    is_within_window, validate_query_bytes, validate_timestamp_freshness, LastValue,
    QueryIdResponse, DEFAULT_TIMESTAMP_FRESHNESS, LAST_VALUE_KEY, MAX_FEEDS,
};

use crate::attributes::{
    ATTR_ACTION, ATTR_FEED, ATTR_FEEDS, ATTR_FRESH_VALUES, ATTR_MEDIAN, ATTR_MEDIAN_TIMESTAMP,
    ATTR_MEDIAN_UPDATED,
};
use crate::error::ContractError;
use crate::median::median;
use crate::msg::{
    ConfigResponse, ExecuteMsg, FeedsResponse, InstantiateMsg, MedianResponse, MigrateMsg,
    QueryMsg,
};
use crate::state::{Config, Median, CONFIG, FEEDS, MEDIAN};

const CONTRACT_NAME: &str = "crates.io:tellor-medianizer";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

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
        timestamp_freshness,
    } = msg;

    ensure!(!query_id.is_empty(), ContractError::EmptyQueryId);
    validate_query_bytes("query_id", &query_id)?;
    let timestamp_freshness = timestamp_freshness.unwrap_or(DEFAULT_TIMESTAMP_FRESHNESS);
    validate_timestamp_freshness(timestamp_freshness)?;

    let config = Config {
        governance: deps.api.addr_validate(&governance)?,
        query_id,
        timestamp_freshness,
    };
    CONFIG.save(deps.storage, &config)?;
    FEEDS.save(deps.storage, &Vec::new())?;

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
    ensure!(info.funds.is_empty(), ContractError::UnexpectedFunds);
    match msg {
        ExecuteMsg::ActivateContract { feeds } => execute_activate_contract(deps, info, feeds),
        ExecuteMsg::GetValues {} => execute_get_values(deps, env, info),
        ExecuteMsg::ChangeGovernance { new_governance } => {
            execute_change_governance(deps, info, new_governance)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<QueryResponse> {
    let response = match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?)?,
        QueryMsg::QueryId {} => to_json_binary(&query_query_id(deps)?)?,
        QueryMsg::Feeds {} => to_json_binary(&query_feeds(deps)?)?,
        QueryMsg::Median {} => to_json_binary(&query_median(deps)?)?,
    };
    Ok(response)
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(config)
}

fn query_query_id(deps: Deps) -> StdResult<QueryIdResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(QueryIdResponse {
        query_id: config.query_id,
    })
}

fn query_feeds(deps: Deps) -> StdResult<FeedsResponse> {
    let feeds = FEEDS.load(deps.storage)?;
    Ok(FeedsResponse { feeds })
}

fn query_median(deps: Deps) -> StdResult<MedianResponse> {
    let median = MEDIAN.may_load(deps.storage)?;
    Ok(MedianResponse { median })
}

fn execute_activate_contract(
    deps: DepsMut,
    info: MessageInfo,
    feeds: Vec<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_eq!(info.sender, config.governance, ContractError::Unauthorized);
    ensure!(!feeds.is_empty(), ContractError::NoFeeds);
    ensure!(feeds.len() <= MAX_FEEDS, ContractError::TooManyFeeds);

    let mut validated: Vec<Addr> = Vec::with_capacity(feeds.len());
    for feed in feeds {
        let addr = deps.api.addr_validate(&feed)?;
        ensure!(
            !validated.contains(&addr),
            ContractError::DuplicateFeed { feed }
        );
        validated.push(addr);
    }
    FEEDS.save(deps.storage, &validated)?;

    let list = validated
        .iter()
        .map(Addr::as_str)
        .collect::<Vec<_>>()
        .join(",");
    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "activate_contract")
        .add_attribute(ATTR_FEEDS, list))
}

/// Reads the raw last value a feed stores. `None` if the feed never reported.
fn read_last_value(
    querier: &QuerierWrapper,
    feed: &Addr,
) -> Result<Option<LastValue>, ContractError> {
    let Some(data) = querier.query_wasm_raw(feed, LAST_VALUE_KEY)? else {
        return Ok(None);
    };
    Ok(Some(LastValue::from_slice(&data)?))
}

fn execute_get_values(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let feeds = FEEDS.load(deps.storage)?;
    ensure!(feeds.contains(&info.sender), ContractError::UnknownFeed);

    // Slots of unregistered, silent or stale feeds stay empty
    let mut fresh: [Option<LastValue>; MAX_FEEDS] = [None; MAX_FEEDS];
    for (slot, feed) in fresh.iter_mut().zip(feeds.iter()) {
        if let Some(last) = read_last_value(&deps.querier, feed)? {
            if is_within_window(last.timestamp, env.block.time, config.timestamp_freshness) {
                *slot = Some(last);
            }
        }
    }
    let values = fresh.map(|last| last.map(|l| l.value.u64()).unwrap_or_default());
    let fresh_values = values.iter().filter(|v| **v != 0).count();

    let response = Response::new()
        .add_attribute(ATTR_ACTION, "get_values")
        .add_attribute(ATTR_FEED, info.sender)
        .add_attribute(ATTR_FRESH_VALUES, fresh_values.to_string());

    let Some(value) = median(values) else {
        // Keep the previous median
        return Ok(response.add_attribute(ATTR_MEDIAN_UPDATED, "false"));
    };

    // First feed in registration order wins on ties. An average of two values
    // has no source so it is stamped with the current time.
    let timestamp = fresh
        .iter()
        .flatten()
        .find(|last| last.value.u64() == value)
        .map(|last| last.timestamp)
        .unwrap_or(env.block.time);

    let median = Median {
        value: Uint64::new(value),
        timestamp,
    };
    MEDIAN.save(deps.storage, &median)?;

    Ok(response
        .add_attribute(ATTR_MEDIAN_UPDATED, "true")
        .add_attribute(ATTR_MEDIAN, median.value.to_string())
        .add_attribute(ATTR_MEDIAN_TIMESTAMP, median.timestamp.seconds().to_string()))
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
