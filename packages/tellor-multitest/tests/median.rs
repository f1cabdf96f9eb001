use cosmwasm_std::{Addr, Timestamp, Uint64};
use cw_multi_test::{App, Executor};
use tellor_medianizer::msg::{MedianResponse, QueryMsg as MedianizerQueryMsg};
use tellor_medianizer::state::Median;
use tellor_multitest::{advance_time, deploy, report, stake, wasm_attr};

fn query_median(app: &App, medianizer: &Addr) -> Option<Median> {
    let MedianResponse { median } = app
        .wrap()
        .query_wasm_smart(medianizer, &MedianizerQueryMsg::Median {})
        .unwrap();
    median
}

fn reporters(app: &App, count: usize) -> Vec<Addr> {
    (0..count)
        .map(|i| app.api().addr_make(&format!("reporter{i}")))
        .collect()
}

#[test]
fn median_of_five_feeds() {
    let mut app = App::default();
    let deployment = deploy(&mut app, 5);
    let reporters = reporters(&app, 5);
    let now = app.block_info().time;

    for (feed, reporter) in deployment.feeds.iter().zip(&reporters) {
        stake(&mut app, feed, reporter);
    }

    let values = [3500, 3550, 3600, 3650, 3700];
    for (i, value) in values.into_iter().enumerate() {
        let timestamp = now.minus_seconds(100 - i as u64);
        let res = report(
            &mut app,
            &deployment.feeds[i],
            &reporters[i],
            value,
            timestamp,
        )
        .unwrap();
        // every report refreshes the aggregate
        assert_eq!(wasm_attr(&res, "median_updated").unwrap(), "true");
        assert_eq!(
            wasm_attr(&res, "fresh_values").unwrap(),
            (i + 1).to_string()
        );
    }

    assert_eq!(
        query_median(&app, &deployment.medianizer),
        Some(Median {
            value: Uint64::new(3600),
            timestamp: Timestamp::from_seconds(now.seconds() - 98),
        })
    );
}

#[test]
fn median_of_two_feeds_is_average() {
    let mut app = App::default();
    let deployment = deploy(&mut app, 5);
    let reporters = reporters(&app, 2);
    let now = app.block_info().time;

    stake(&mut app, &deployment.feeds[0], &reporters[0]);
    stake(&mut app, &deployment.feeds[1], &reporters[1]);
    report(
        &mut app,
        &deployment.feeds[0],
        &reporters[0],
        3500,
        now.minus_seconds(60),
    )
    .unwrap();
    report(
        &mut app,
        &deployment.feeds[1],
        &reporters[1],
        3550,
        now.minus_seconds(30),
    )
    .unwrap();

    assert_eq!(
        query_median(&app, &deployment.medianizer),
        Some(Median {
            value: Uint64::new(3525),
            timestamp: now,
        })
    );
}

#[test]
fn median_of_three_feeds() {
    let mut app = App::default();
    let deployment = deploy(&mut app, 3);
    let reporters = reporters(&app, 3);
    let now = app.block_info().time;

    for (i, value) in [3700, 3500, 3550].into_iter().enumerate() {
        stake(&mut app, &deployment.feeds[i], &reporters[i]);
        report(
            &mut app,
            &deployment.feeds[i],
            &reporters[i],
            value,
            now.minus_seconds(10 * i as u64),
        )
        .unwrap();
    }

    assert_eq!(
        query_median(&app, &deployment.medianizer),
        Some(Median {
            value: Uint64::new(3550),
            timestamp: Timestamp::from_seconds(now.seconds() - 20),
        })
    );
}

#[test]
fn stale_feeds_are_excluded() {
    let mut app = App::default();
    let deployment = deploy(&mut app, 2);
    let reporters = reporters(&app, 2);
    stake(&mut app, &deployment.feeds[0], &reporters[0]);
    stake(&mut app, &deployment.feeds[1], &reporters[1]);

    let now = app.block_info().time;
    report(&mut app, &deployment.feeds[0], &reporters[0], 9000, now).unwrap();

    // just over an hour later the first value drops out
    advance_time(&mut app, 3601);
    let later = app.block_info().time;
    let res = report(&mut app, &deployment.feeds[1], &reporters[1], 3000, later).unwrap();
    assert_eq!(wasm_attr(&res, "fresh_values").unwrap(), "1");
    assert_eq!(
        query_median(&app, &deployment.medianizer),
        Some(Median {
            value: Uint64::new(3000),
            timestamp: Timestamp::from_seconds(later.seconds()),
        })
    );

    // when all values are stale the previous median stays
    advance_time(&mut app, 7200);
    let res = app
        .execute_contract(
            deployment.feeds[1].clone(),
            deployment.medianizer.clone(),
            &tellor_medianizer::msg::ExecuteMsg::GetValues {},
            &[],
        )
        .unwrap();
    assert_eq!(wasm_attr(&res, "median_updated").unwrap(), "false");
    assert_eq!(
        query_median(&app, &deployment.medianizer).unwrap().value,
        Uint64::new(3000)
    );
}

#[test]
fn report_fails_for_unregistered_feed() {
    let mut app = App::default();
    let deployment = deploy(&mut app, 2);
    let reporters = reporters(&app, 1);
    stake(&mut app, &deployment.feeds[1], &reporters[0]);

    // governance drops the second feed from the medianizer
    app.execute_contract(
        deployment.governance.clone(),
        deployment.medianizer.clone(),
        &tellor_medianizer::msg::ExecuteMsg::ActivateContract {
            feeds: vec![deployment.feeds[0].to_string()],
        },
        &[],
    )
    .unwrap();

    let now = app.block_info().time;
    let err = report(&mut app, &deployment.feeds[1], &reporters[0], 3500, now).unwrap_err();
    assert!(err.root_cause().to_string().contains("not a registered feed"));

    // the whole report was reverted
    let res: tellor_feed::msg::LastValueResponse = app
        .wrap()
        .query_wasm_smart(
            &deployment.feeds[1],
            &tellor_feed::msg::QueryMsg::LastValue {},
        )
        .unwrap();
    assert_eq!(res.last_value, None);
    assert_eq!(query_median(&app, &deployment.medianizer), None);
}
