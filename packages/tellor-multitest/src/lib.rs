// Testing utils. See tests folder for actual tests.

use cosmwasm_std::{Addr, Attribute, Coin, HexBinary, Timestamp, Uint64};
use cw_multi_test::{App, AppResponse, BankSudo, ContractWrapper, Executor, SudoMsg};
use tellor_feed::msg::ExecuteMsg as FeedExecuteMsg;

pub const DENOM: &str = "ualgo";
pub const STAKE: u128 = 200_000;
pub const QUERY_ID: &[u8] = b"1";

/// Gets the value of the first attribute with the given key
pub fn first_attr(data: impl AsRef<[Attribute]>, search_key: &str) -> Option<String> {
    data.as_ref().iter().find_map(|a| {
        if a.key == search_key {
            Some(a.value.clone())
        } else {
            None
        }
    })
}

/// Value of the first attribute with the given key in the first wasm event that has it
pub fn wasm_attr(res: &AppResponse, search_key: &str) -> Option<String> {
    res.events
        .iter()
        .filter(|ev| ev.ty == "wasm")
        .find_map(|ev| first_attr(&ev.attributes, search_key))
}

pub fn mint_native(app: &mut App, beneficiary: &Addr, denom: &str, amount: u128) {
    app.sudo(SudoMsg::Bank(BankSudo::Mint {
        to_address: beneficiary.to_string(),
        amount: vec![Coin::new(amount, denom)],
    }))
    .unwrap();
}

pub fn query_balance_native(app: &App, address: &Addr, denom: &str) -> Coin {
    app.wrap().query_balance(address, denom).unwrap()
}

pub fn advance_time(app: &mut App, seconds: u64) {
    app.update_block(|block| {
        block.time = block.time.plus_seconds(seconds);
        block.height += seconds / 5;
    });
}

/// A medianizer with its registered feeds, all tracking `QUERY_ID`
pub struct Deployment {
    pub governance: Addr,
    pub medianizer: Addr,
    pub feeds: Vec<Addr>,
}

/// Instantiates a medianizer and `feed_count` feeds linked to it,
/// then registers the feeds in the medianizer.
pub fn deploy(app: &mut App, feed_count: usize) -> Deployment {
    let governance = app.api().addr_make("governance");
    let deployer = app.api().addr_make("deployer");

    let code_medianizer = ContractWrapper::new(
        tellor_medianizer::contract::execute,
        tellor_medianizer::contract::instantiate,
        tellor_medianizer::contract::query,
    )
    .with_migrate(tellor_medianizer::contract::migrate);
    let code_id_medianizer = app.store_code(Box::new(code_medianizer));

    let code_feed = ContractWrapper::new(
        tellor_feed::contract::execute,
        tellor_feed::contract::instantiate,
        tellor_feed::contract::query,
    )
    .with_migrate(tellor_feed::contract::migrate);
    let code_id_feed = app.store_code(Box::new(code_feed));

    let medianizer = app
        .instantiate_contract(
            code_id_medianizer,
            deployer.clone(),
            &tellor_medianizer::msg::InstantiateMsg {
                governance: governance.to_string(),
                query_id: HexBinary::from(QUERY_ID),
                timestamp_freshness: None,
            },
            &[],
            "Tellor-Medianizer",
            Some(governance.to_string()),
        )
        .unwrap();

    let feeds: Vec<Addr> = (0..feed_count)
        .map(|i| {
            app.instantiate_contract(
                code_id_feed,
                deployer.clone(),
                &tellor_feed::msg::InstantiateMsg {
                    governance: governance.to_string(),
                    query_id: HexBinary::from(QUERY_ID),
                    query_data: br#"{"type":"SpotPrice","pair":"eth/usd"}"#.as_slice().into(),
                    medianizer: Some(medianizer.to_string()),
                    timestamp_freshness: None,
                    stake_amount: None,
                    denom: DENOM.to_string(),
                },
                &[],
                format!("Tellor-Feed-{i}"),
                Some(governance.to_string()),
            )
            .unwrap()
        })
        .collect();

    app.execute_contract(
        governance.clone(),
        medianizer.clone(),
        &tellor_medianizer::msg::ExecuteMsg::ActivateContract {
            feeds: feeds.iter().map(Addr::to_string).collect(),
        },
        &[],
    )
    .unwrap();

    Deployment {
        governance,
        medianizer,
        feeds,
    }
}

/// Mints the stake for `reporter` and stakes it on `feed`
pub fn stake(app: &mut App, feed: &Addr, reporter: &Addr) {
    mint_native(app, reporter, DENOM, STAKE);
    app.execute_contract(
        reporter.clone(),
        feed.clone(),
        &FeedExecuteMsg::Stake {},
        &[Coin::new(STAKE, DENOM)],
    )
    .unwrap();
}

pub fn report(
    app: &mut App,
    feed: &Addr,
    reporter: &Addr,
    value: u64,
    timestamp: Timestamp,
) -> anyhow::Result<AppResponse> {
    app.execute_contract(
        reporter.clone(),
        feed.clone(),
        &FeedExecuteMsg::Report {
            query_id: HexBinary::from(QUERY_ID),
            value: Uint64::new(value),
            timestamp,
        },
        &[],
    )
}
