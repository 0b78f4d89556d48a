use super::*;
use crate::config::{ConfigurationError, InstanceConfig};
use std::collections::HashSet;
use std::io::Write;

const HEADER: &str = "uac,addressLine1,addressLine2,addressLine3,townName,postcode,uprn,\
    latitude,longitude,active,questionnaireId,caseType,region,first_name,last_name,phone_number";

fn fixture_csv(rows: usize) -> String {
    let mut csv = String::from(HEADER);
    csv.push('\n');
    for i in 0..rows {
        csv.push_str(&format!(
            "uac{i:013},{i} High Street,,,Exeter,EX1 {i}AB,1002312{i:04},50.7,-3.5,true,\
             01000000{i:04},HH,E,First{i},Last{i},0771433{i:04}\n"
        ));
    }
    csv
}

#[test]
fn test_count_records_excludes_header() {
    assert_eq!(count_records(fixture_csv(10).as_bytes()).unwrap(), 10);
    assert_eq!(count_records(HEADER.as_bytes()).unwrap(), 0);
    assert_eq!(count_records("".as_bytes()).unwrap(), 0);
    assert_eq!(count_records("h\na\nb".as_bytes()).unwrap(), 2);
}

#[test]
fn test_compute_range_ten_rows_five_instances() {
    assert_eq!(compute_range(3, 5, 10).unwrap(), PartitionRange { first: 4, last: 5 });
    assert_eq!(compute_range(1, 5, 10).unwrap(), PartitionRange { first: 0, last: 1 });
    assert_eq!(compute_range(5, 5, 10).unwrap(), PartitionRange { first: 8, last: 9 });
}

#[test]
fn test_single_instance_owns_everything() {
    assert_eq!(compute_range(1, 1, 7).unwrap(), PartitionRange { first: 0, last: 6 });
    assert_eq!(coverage_gaps(1, 7).unwrap(), Vec::<usize>::new());
}

#[test]
fn test_compute_range_rejects_bad_instances() {
    assert_eq!(
        compute_range(0, 3, 10).unwrap_err(),
        ConfigurationError::InstanceOutOfRange {
            instance_num: 0,
            max_instances: 3
        }
    );
    assert_eq!(
        compute_range(4, 3, 10).unwrap_err(),
        ConfigurationError::InstanceOutOfRange {
            instance_num: 4,
            max_instances: 3
        }
    );
    assert_eq!(
        compute_range(1, 11, 10).unwrap_err(),
        ConfigurationError::TooManyInstances {
            max_instances: 11,
            total_records: 10
        }
    );
    assert!(compute_range(1, 1, 0).is_err());
}

#[test]
fn test_ranges_are_ordered_and_disjoint() {
    for total in 1..=60 {
        for max in 1..=total {
            let mut previous: Option<PartitionRange> = None;
            for n in 1..=max {
                let range = compute_range(n, max, total).unwrap();
                assert!(range.first <= range.last, "{n}/{max} of {total}: {range}");
                assert!(range.last < total, "{n}/{max} of {total}: {range}");
                if let Some(prev) = previous {
                    assert!(prev.last < range.first, "{n}/{max} of {total} overlaps");
                }
                previous = Some(range);
            }
        }
    }
}

#[test]
fn test_coverage_gaps_are_reported_not_fixed() {
    for total in 1..=60 {
        for max in 1..=total {
            let gaps = coverage_gaps(max, total).unwrap();
            let owned: usize = (1..=max)
                .map(|n| compute_range(n, max, total).unwrap().row_count())
                .sum();
            assert_eq!(owned + gaps.len(), total, "{max} instances of {total}");
        }
    }
    assert_eq!(coverage_gaps(5, 10).unwrap(), Vec::<usize>::new());
    assert!(coverage_gaps(4, 3).is_err());
}

#[test]
fn test_coverage_gaps_rejects_zero_instances() {
    assert!(matches!(
        coverage_gaps(0, 10),
        Err(ConfigurationError::Invalid { name: "MAX_INSTANCES", .. })
    ));
    assert!(coverage_gaps(0, 0).is_err());
}

#[test]
fn test_load_range_keeps_only_owned_rows() {
    let range = compute_range(3, 5, 10).unwrap();
    let records = load_range(fixture_csv(10).as_bytes(), range).unwrap();
    let uacs: Vec<_> = records.iter().map(|r| r.uac.as_str()).collect();
    assert_eq!(uacs, vec!["uac0000000000004", "uac0000000000005"]);
    assert_eq!(records[0].address_line1, "4 High Street");
    assert_eq!(records[1].phone_number, "07714330005");
}

#[test]
fn test_record_fields_decoded() {
    let records = load_range(fixture_csv(1).as_bytes(), PartitionRange { first: 0, last: 0 }).unwrap();
    let record = &records[0];
    assert_eq!(record.uac, "uac0000000000000");
    assert_eq!(record.address_line2, "");
    assert_eq!(record.town_name, "Exeter");
    assert_eq!(record.postcode, "EX1 0AB");
    assert_eq!(record.uprn, "10023120000");
    assert_eq!(record.latitude, "50.7");
    assert_eq!(record.longitude, "-3.5");
    assert!(record.is_active());
    assert_eq!(record.questionnaire_id, "010000000000");
    assert_eq!(record.case_type, "HH");
    assert_eq!(record.region, "E");
    assert_eq!(record.full_name(), "First0 Last0");
}

#[test]
fn test_older_column_set_is_tolerated() {
    let csv = "uac,addressLine1,postcode,extra\nabcd1234efgh5678,\"1 Gate Reach, Exeter\",EX2 6GA,x\n";
    let records = load_range(csv.as_bytes(), PartitionRange { first: 0, last: 0 }).unwrap();
    assert_eq!(records[0].uac, "abcd1234efgh5678");
    assert_eq!(records[0].address_line1, "1 Gate Reach, Exeter");
    assert_eq!(records[0].phone_number, "");
    assert!(records[0].is_active());
    assert_eq!(records[0].full_name(), "Load Test");
}

#[test]
fn test_missing_uac_column_is_an_error() {
    let csv = "addressLine1,postcode\n1 High Street,EX1 1AA\n";
    let err = load_range(csv.as_bytes(), PartitionRange { first: 0, last: 0 }).unwrap_err();
    assert!(matches!(err, FixtureError::Csv(_)));
}

#[test]
fn test_fixture_set_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(fixture_csv(10).as_bytes()).unwrap();

    let set = FixtureSet::load(
        file.path(),
        InstanceConfig {
            instance_num: 3,
            max_instances: 5,
        },
    )
    .unwrap();
    assert_eq!(set.total_records(), 10);
    assert_eq!(set.range(), PartitionRange { first: 4, last: 5 });
    assert_eq!(set.len(), 2);
    assert!(!set.is_empty());
}

#[test]
fn test_fixture_set_load_missing_file() {
    let err = FixtureSet::load(
        std::path::Path::new("/definitely/not/here.csv"),
        InstanceConfig::SOLE,
    )
    .unwrap_err();
    assert!(matches!(err, FixtureError::Open { .. }));
}

#[test]
fn test_fixture_set_load_too_many_instances() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(fixture_csv(2).as_bytes()).unwrap();
    let err = FixtureSet::load(
        file.path(),
        InstanceConfig {
            instance_num: 1,
            max_instances: 3,
        },
    )
    .unwrap_err();
    assert!(matches!(
        err,
        FixtureError::Partition(ConfigurationError::TooManyInstances { .. })
    ));
}

#[test]
fn test_empty_set_rejected() {
    let err = FixtureSet::new(Vec::new(), PartitionRange { first: 0, last: 0 }, 1).unwrap_err();
    assert!(matches!(err, FixtureError::Empty { .. }));
}

fn set_of(rows: usize) -> FixtureSet {
    let range = PartitionRange {
        first: 0,
        last: rows - 1,
    };
    let records = load_range(fixture_csv(rows).as_bytes(), range).unwrap();
    FixtureSet::new(records, range, rows).unwrap()
}

#[test]
fn test_pick_sequential_follows_file_order_and_wraps() {
    let set = set_of(3);
    let picked: Vec<_> = (0..7).map(|_| set.pick_sequential().uac.clone()).collect();
    assert_eq!(
        picked,
        vec![
            "uac0000000000000",
            "uac0000000000001",
            "uac0000000000002",
            "uac0000000000000",
            "uac0000000000001",
            "uac0000000000002",
            "uac0000000000000",
        ]
    );
}

#[test]
fn test_pick_sequential_is_shared_across_threads() {
    let set = std::sync::Arc::new(set_of(64));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let set = std::sync::Arc::clone(&set);
            std::thread::spawn(move || {
                (0..16)
                    .map(|_| set.pick_sequential().uac.clone())
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    let mut seen = HashSet::new();
    for handle in handles {
        for uac in handle.join().unwrap() {
            assert!(seen.insert(uac), "row handed out twice");
        }
    }
    assert_eq!(seen.len(), 64);
}

#[test]
fn test_pick_random_stays_in_set() {
    let set = set_of(5);
    let uacs: HashSet<_> = set.records().iter().map(|r| r.uac.clone()).collect();
    for _ in 0..200 {
        assert!(uacs.contains(&set.pick_random().uac));
    }
    assert!(uacs.contains(&set.pick(Selection::Random).uac));
    assert_eq!(set.pick(Selection::Sequential).uac, "uac0000000000000");
}

#[test]
fn test_selection_from_str() {
    assert_eq!("random".parse::<Selection>().unwrap(), Selection::Random);
    assert_eq!(" Sequential ".parse::<Selection>().unwrap(), Selection::Sequential);
    assert!("shuffle".parse::<Selection>().is_err());
}
