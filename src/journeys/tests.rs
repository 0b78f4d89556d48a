use super::launch::{corrected_line1, EQ_LAUNCH_FRAGMENT};
use super::request_code::{address_selection, mobile_number, names, DEFAULT_MOBILE};
use super::*;
use crate::fixtures::PartitionRange;
use std::collections::HashSet;

fn record(uac: &str) -> FixtureRecord {
    FixtureRecord {
        uac: uac.to_string(),
        address_line1: "1 Gate Reach".to_string(),
        address_line2: String::new(),
        address_line3: String::new(),
        town_name: "Exeter".to_string(),
        postcode: "EX2 6GA".to_string(),
        uprn: "10023122451".to_string(),
        latitude: String::new(),
        longitude: String::new(),
        active: "true".to_string(),
        questionnaire_id: String::new(),
        case_type: "HH".to_string(),
        region: "E".to_string(),
        first_name: String::new(),
        last_name: String::new(),
        phone_number: String::new(),
    }
}

fn context(selection: Selection) -> RunContext {
    let fixtures = FixtureSet::new(
        vec![record("a"), record("b")],
        PartitionRange { first: 1, last: 2 },
        2,
    )
    .unwrap();
    RunContext {
        fixtures,
        selection,
        failure_delay: Duration::ZERO,
    }
}

#[test]
fn test_weights_add_up_to_one_hundred() {
    let total: usize = Journey::ALL.iter().map(|j| j.weight()).sum();
    assert_eq!(total, 100);
    assert_eq!(Journey::LaunchEq.weight(), 70);
    assert_eq!(Journey::WebChat.weight(), 5);
}

#[test]
fn test_scenario_names_are_unique() {
    let names: HashSet<_> = Journey::ALL.iter().map(|j| j.name()).collect();
    assert_eq!(names.len(), Journey::ALL.len());
    assert_eq!(Journey::LaunchEqWithAddressCorrection.to_string(), "LaunchEQWithAddressCorrection");
}

#[test]
fn test_scenario_has_on_start_client_and_journey() {
    let ctx = Arc::new(context(Selection::Random));
    let scenario = Journey::RequestCodeSms.scenario(ctx).unwrap();
    assert_eq!(scenario.name, "RequestCodeSms");
    assert_eq!(scenario.weight, 10);
    assert_eq!(scenario.transactions.len(), 2);
    assert!(scenario.transactions[0].on_start);
    assert!(!scenario.transactions[1].on_start);
    assert_eq!(scenario.transactions[1].name, "RequestCodeSms");
}

#[test]
fn test_sequential_context_walks_fixtures() {
    let ctx = context(Selection::Sequential);
    assert_eq!(ctx.next_fixture().uac, "a");
    assert_eq!(ctx.next_fixture().uac, "b");
    assert_eq!(ctx.next_fixture().uac, "a");
}

#[test]
fn test_each_scope_gets_a_new_journey_id() {
    let ctx = context(Selection::Random);
    let fixture = record("a");
    let first = ctx.scope(Journey::LaunchEq, &fixture);
    let second = ctx.scope(Journey::LaunchEq, &fixture);
    assert_ne!(first.journey_id, second.journey_id);
    assert_eq!(first.journey, "LaunchEQ");
    assert_eq!(first.uac, "a");
    assert_eq!(first.failure_delay, Duration::ZERO);
}

#[test]
fn test_leaves_host() {
    let rh = Url::parse("https://rh.example/en/start/confirm-address/").unwrap();
    let same = Url::parse("https://rh.example:443/en/start/").unwrap();
    let eq = Url::parse("https://eq.example/session?token=abc").unwrap();
    let other_port = Url::parse("https://rh.example:8443/en/start/").unwrap();
    assert!(!leaves_host(&rh, &same));
    assert!(leaves_host(&rh, &eq));
    assert!(leaves_host(&rh, &other_port));
    assert!(eq.as_str().contains(EQ_LAUNCH_FRAGMENT));
}

#[test]
fn test_form_body_encodes_fields() {
    assert_eq!(
        form_body(&[("uac", "w4nw wpph"), ("address-check-answer", "Yes")]),
        "uac=w4nw%20wpph&address-check-answer=Yes"
    );
    assert_eq!(
        form_body(&[("request-address-select", "{'uprn': '1'}")]),
        "request-address-select=%7B%27uprn%27%3A%20%271%27%7D"
    );
    assert_eq!(form_body(&[]), "");
}

#[test]
fn test_form_values_fall_back_for_old_fixtures() {
    let mut fixture = record("a");
    assert_eq!(mobile_number(&fixture), DEFAULT_MOBILE);
    assert_eq!(names(&fixture), ("Load", "Test"));

    fixture.phone_number = " 07700900123 ".to_string();
    fixture.first_name = "Ada".to_string();
    fixture.last_name = "Lovelace".to_string();
    assert_eq!(mobile_number(&fixture), "07700900123");
    assert_eq!(names(&fixture), ("Ada", "Lovelace"));
}

#[test]
fn test_address_values() {
    let fixture = record("a");
    assert_eq!(
        address_selection(&fixture),
        "{'uprn': '10023122451', 'address': '1 Gate Reach'}"
    );
    assert_eq!(corrected_line1(&fixture), "Flat 1, 1 Gate Reach");
}
