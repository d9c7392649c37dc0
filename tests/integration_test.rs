//! Integration tests for ipv4-subnet-calc
//!
//! These tests drive the complete path from raw front-end text to rendered
//! output, using the case table in src/tests/test_data.

use ipv4_subnet_calc::models::{get_cidr_mask, SubnetMask};
use ipv4_subnet_calc::output::{render_csv, render_json, render_text};
use ipv4_subnet_calc::{calculate, parse_request, ErrorKind, SubnetInfo};
use serde::Deserialize;
use std::net::Ipv4Addr;

const CASES_FILE: &str = "src/tests/test_data/subnet_cases.json";

#[derive(Deserialize, Debug)]
struct Expect {
    network_id: Ipv4Addr,
    broadcast: Ipv4Addr,
    first_usable: Ipv4Addr,
    last_usable: Ipv4Addr,
    usable_hosts: u64,
    prefix_len: u8,
}

#[derive(Deserialize, Debug)]
struct Case {
    name: String,
    address: String,
    mask: Option<String>,
    expect: Option<Expect>,
    error: Option<String>,
}

fn read_cases() -> Vec<Case> {
    let json = std::fs::read_to_string(CASES_FILE).expect("Error reading test cases");
    serde_json::from_str(&json).expect("Error parsing test cases")
}

fn run_case(case: &Case) -> ipv4_subnet_calc::Result<SubnetInfo> {
    parse_request(&case.address, case.mask.as_deref())?.calculate()
}

#[test]
fn test_case_table() {
    let cases = read_cases();
    assert_eq!(cases.len(), 17, "Expected 17 cases in {CASES_FILE}");

    for case in &cases {
        let result = run_case(case);
        match (&case.expect, &case.error) {
            (Some(expect), None) => {
                let info = result.unwrap_or_else(|e| panic!("{}: unexpected error {e}", case.name));
                assert_eq!(info.network_id, expect.network_id, "{}", case.name);
                assert_eq!(info.broadcast, expect.broadcast, "{}", case.name);
                assert_eq!(info.first_usable, expect.first_usable, "{}", case.name);
                assert_eq!(info.last_usable, expect.last_usable, "{}", case.name);
                assert_eq!(info.usable_hosts, expect.usable_hosts, "{}", case.name);
                assert_eq!(info.prefix_len, expect.prefix_len, "{}", case.name);
            }
            (None, Some(kind)) => {
                let err = result.expect_err(&case.name);
                assert_eq!(&format!("{:?}", err.kind()), kind, "{}", case.name);
            }
            _ => panic!("{}: case needs exactly one of expect/error", case.name),
        }
    }
}

/// Addresses striding across the whole space, both ends included.
fn address_sweep() -> Vec<Ipv4Addr> {
    let mut addrs: Vec<Ipv4Addr> = (0..=u32::MAX as u64)
        .step_by(2_147_483)
        .map(|x| Ipv4Addr::from(x as u32))
        .collect();
    addrs.push(Ipv4Addr::new(192, 168, 1, 70));
    addrs.push(Ipv4Addr::new(172, 16, 5, 9));
    addrs.push(Ipv4Addr::new(255, 255, 255, 255));
    addrs
}

#[test]
fn test_invariants_for_every_prefix() {
    let addresses = address_sweep();
    assert!(addresses.len() > 2000);

    for addr in addresses {
        let addr_text = addr.to_string();
        for n in 0..=32i64 {
            let info = calculate(&addr_text, None, Some(n)).unwrap();
            let mask = get_cidr_mask(n as u8);
            let network = u32::from(info.network_id);
            let broadcast = u32::from(info.broadcast);

            assert_eq!(network & mask, network, "{addr}/{n}");
            assert_eq!(broadcast | mask, u32::MAX, "{addr}/{n}");
            assert!(info.network_id <= addr && addr <= info.broadcast, "{addr}/{n}");
            assert!(info.contains(addr));
            assert!(info.first_usable <= info.last_usable, "{addr}/{n}");
            assert!(info.usable_hosts <= info.total_addresses, "{addr}/{n}");

            // the dotted form of the same mask gives the same answer
            let dotted = calculate(&addr_text, Some(&info.mask.to_string()), None).unwrap();
            assert_eq!(dotted, info, "{addr}/{n} via {}", info.mask);
        }
    }
}

#[test]
fn test_usable_hosts_by_prefix() {
    for n in 0..=30i64 {
        let mask = SubnetMask::from_prefix_len(n).unwrap();
        let info = calculate("10.0.0.1", Some(&mask.to_string()), None).unwrap();
        assert_eq!(info.usable_hosts, (1u64 << (32 - n)) - 2, "/{n}");
        assert_eq!(
            u32::from(info.last_usable) - u32::from(info.first_usable) + 1,
            info.usable_hosts as u32,
            "/{n}"
        );
    }
    assert_eq!(calculate("10.0.0.1", None, Some(31)).unwrap().usable_hosts, 2);
    assert_eq!(calculate("10.0.0.1", None, Some(32)).unwrap().usable_hosts, 1);
}

#[test]
fn test_error_kinds_are_stable() {
    assert_eq!(
        calculate("256.1.1.1", Some("255.255.255.0"), None)
            .unwrap_err()
            .kind(),
        ErrorKind::InvalidFormat
    );
    assert_eq!(
        calculate("192.168.1.1", Some("255.0.255.0"), None)
            .unwrap_err()
            .kind(),
        ErrorKind::NonContiguousMask
    );
    assert_eq!(
        calculate("192.168.1.1", None, Some(33)).unwrap_err().kind(),
        ErrorKind::OutOfRange
    );
}

#[test]
fn test_renderers_agree() {
    let info = parse_request("10.0.0.5/24", None).unwrap().calculate().unwrap();

    let text = render_text(&info);
    assert!(text.contains("Network_ID = 10.0.0.0 /24"));
    assert!(text.contains("IP Range = 10.0.0.1 ~ 10.0.0.254"));
    assert!(text.ends_with("Usable Hosts = 254"));

    let csv = render_csv(&info, false);
    assert!(csv.contains("\"10.0.0.0/24\""));

    let value: serde_json::Value = serde_json::from_str(&render_json(&info).unwrap()).unwrap();
    assert_eq!(value["last_usable"], "10.0.0.254");
    assert_eq!(value["usable_hosts"], 254);
}

#[test]
fn test_concurrent_callers() {
    let handles: Vec<_> = (0..8u8)
        .map(|i| {
            std::thread::spawn(move || {
                let text = format!("10.{i}.3.4");
                calculate(&text, None, Some(16)).unwrap()
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let info = handle.join().unwrap();
        assert_eq!(info.network_id, Ipv4Addr::new(10, i as u8, 0, 0));
    }
}
