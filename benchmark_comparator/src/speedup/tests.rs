//!
//! Tests for the speedup calculator.
//!

use crate::issue::Issue;
use crate::model::group_key::GroupKey;
use crate::model::record::Record;
use crate::store::Store;

use super::comparison::Comparison;
use super::Speedup;

const ORDER: [&str; 3] = ["NAIVE", "AUTO", "LEN_FIRST"];

fn comparison(records: Vec<Record>) -> Comparison {
    let mut store = Store::default();
    store.extend(records);
    let (grouped, _issues) = store.by_group_key();
    Comparison::calculate(&grouped, "NAIVE")
}

#[test]
fn naive_versus_auto() {
    let comparison = comparison(vec![
        Record::new("Color", "NAIVE", "lookup", 100.0, Some(120.0)),
        Record::new("Color", "AUTO", "lookup", 25.0, Some(30.0)),
    ]);

    let (_, auto) = comparison
        .entries("AUTO")
        .next()
        .expect("Always exists");
    assert_eq!(auto.mean, Speedup::Ratio(4.0));
    assert_eq!(auto.p90, Some(Speedup::Ratio(4.0)));
    assert_eq!(format!("{}", auto.mean), "4.00x");
    assert_eq!(format!("{:.3}", auto.mean), "4.000x");
}

#[test]
fn baseline_is_identity() {
    let comparison = comparison(vec![
        Record::new("Color", "NAIVE", "lookup", 3.3, Some(7.1)),
        Record::new("Color", "AUTO", "lookup", 1.1, Some(2.0)),
        Record::new("Flags", "NAIVE", "", 0.1, None),
    ]);

    for (_, entry) in comparison.entries("NAIVE") {
        assert_eq!(entry.mean.ratio(), Some(1.0));
        assert!(entry.p90.map_or(true, |p90| p90 == Speedup::IDENTITY));
    }
    assert_eq!(comparison.entries("NAIVE").count(), 2);
}

#[test]
fn groups_without_baseline_are_excluded() {
    let comparison = comparison(vec![
        Record::new("Color", "NAIVE", "lookup", 100.0, Some(120.0)),
        Record::new("Color", "AUTO", "lookup", 25.0, Some(30.0)),
        Record::new("Flags", "AUTO", "lookup", 5.0, Some(6.0)),
        Record::new("Flags", "LEN_FIRST", "lookup", 4.0, Some(5.0)),
    ]);

    assert_eq!(comparison.groups.len(), 1);
    assert!(!comparison
        .groups
        .contains_key(&GroupKey::new("Flags", "lookup")));
    assert_eq!(comparison.skipped, vec![GroupKey::new("Flags", "lookup")]);
    assert_eq!(
        comparison.issues(),
        vec![Issue::MissingBaseline {
            group: GroupKey::new("Flags", "lookup"),
            baseline: "NAIVE".to_owned(),
        }]
    );
}

#[test]
fn zero_metric_is_unmeasurable() {
    let comparison = comparison(vec![
        Record::new("Color", "NAIVE", "lookup", 100.0, Some(120.0)),
        Record::new("Color", "AUTO", "lookup", 0.0, Some(-1.0)),
    ]);

    let (_, auto) = comparison.entries("AUTO").next().expect("Always exists");
    assert_eq!(auto.mean, Speedup::Unmeasurable);
    assert_eq!(auto.p90, Some(Speedup::Unmeasurable));
    assert_eq!(auto.mean.value(), 0.0);
    assert!(auto.mean.value().is_finite());
    assert_eq!(auto.mean.to_string(), "n/a");
}

#[test]
fn zero_baseline_keeps_identity() {
    let comparison = comparison(vec![
        Record::new("Color", "NAIVE", "lookup", 0.0, Some(0.0)),
        Record::new("Color", "AUTO", "lookup", 25.0, Some(30.0)),
        Record::new("Flags", "NAIVE", "lookup", 0.0, Some(120.0)),
        Record::new("Flags", "AUTO", "lookup", 25.0, Some(30.0)),
    ]);

    for (_, naive) in comparison.entries("NAIVE") {
        assert_eq!(naive.mean.value(), 1.0);
        assert_eq!(naive.p90, Some(Speedup::IDENTITY));
    }

    let auto: Vec<_> = comparison.entries("AUTO").map(|(_, entry)| entry).collect();
    assert_eq!(auto[0].mean, Speedup::Unmeasurable);
    assert_eq!(auto[0].p90, Some(Speedup::Unmeasurable));
    assert_eq!(auto[1].mean, Speedup::Unmeasurable);
    assert_eq!(auto[1].p90, Some(Speedup::Ratio(4.0)));
}

#[test]
fn aggregates_skip_unmeasurable() {
    let comparison = comparison(vec![
        Record::new("Color", "NAIVE", "lookup", 100.0, Some(100.0)),
        Record::new("Color", "AUTO", "lookup", 25.0, Some(50.0)),
        Record::new("Color", "LEN_FIRST", "lookup", 50.0, Some(50.0)),
        Record::new("Flags", "NAIVE", "lookup", 60.0, Some(60.0)),
        Record::new("Flags", "AUTO", "lookup", 30.0, Some(60.0)),
        Record::new("Mode", "NAIVE", "lookup", 10.0, Some(10.0)),
        Record::new("Mode", "AUTO", "lookup", 0.0, Some(5.0)),
    ]);

    let aggregates = comparison.aggregates(&ORDER);

    assert_eq!(aggregates.len(), 2);
    let auto = &aggregates[0];
    assert_eq!(auto.variant, "AUTO");
    assert_eq!(auto.groups, 3);
    assert_eq!(auto.unmeasurable, 1);
    assert_eq!(auto.mean, Some(3.0));
    assert_eq!(auto.p90, Some((2.0 + 1.0 + 2.0) / 3.0));
    let len_first = &aggregates[1];
    assert_eq!(len_first.variant, "LEN_FIRST");
    assert_eq!(len_first.mean, Some(2.0));
}

#[test]
fn rows_follow_configured_order() {
    let comparison = comparison(vec![
        Record::new("Color", "LEN_FIRST", "lookup", 50.0, Some(50.0)),
        Record::new("Color", "CUSTOM", "lookup", 20.0, Some(20.0)),
        Record::new("Color", "AUTO", "lookup", 25.0, Some(50.0)),
        Record::new("Color", "NAIVE", "lookup", 100.0, Some(100.0)),
        Record::new("Alpha", "NAIVE", "lookup", 1.0, Some(1.0)),
    ]);

    let rows: Vec<(&str, &str)> = comparison
        .rows(&ORDER)
        .into_iter()
        .map(|(group, entry)| (group.subject.as_str(), entry.variant()))
        .collect();

    assert_eq!(
        rows,
        vec![
            ("Alpha", "NAIVE"),
            ("Color", "NAIVE"),
            ("Color", "AUTO"),
            ("Color", "LEN_FIRST"),
            ("Color", "CUSTOM"),
        ]
    );
    assert_eq!(
        comparison.variants(&[]),
        vec!["NAIVE", "LEN_FIRST", "CUSTOM", "AUTO"]
    );
}

#[test]
fn geometric_mean_of_pairwise_comparison() {
    let mut store = Store::default();
    store.extend([
        Record::scalar("BM_A", "baseline", 8.0),
        Record::scalar("BM_A", "optimized", 4.0),
        Record::scalar("BM_B", "baseline", 16.0),
        Record::scalar("BM_B", "optimized", 2.0),
        Record::scalar("BM_C", "baseline", 5.0),
        Record::scalar("BM_C", "optimized", 0.0),
        Record::scalar("BM_D", "optimized", 1.0),
    ]);
    let (grouped, _) = store.by_group_key();
    let comparison = Comparison::calculate(&grouped, "baseline");

    let geometric = comparison.geometric_mean().expect("Always defined");

    assert!((geometric - 4.0).abs() < 1e-12);
    assert_eq!(comparison.skipped, vec![GroupKey::new("BM_D", "")]);
}

#[test]
fn geometric_mean_requires_two_variants() {
    let comparison = comparison(vec![
        Record::new("Color", "NAIVE", "lookup", 100.0, Some(100.0)),
        Record::new("Color", "AUTO", "lookup", 25.0, Some(50.0)),
        Record::new("Color", "LEN_FIRST", "lookup", 50.0, Some(50.0)),
    ]);

    assert_eq!(comparison.geometric_mean(), None);
}

#[test]
fn empty() {
    let comparison = comparison(Vec::new());

    assert!(comparison.is_empty());
    assert!(comparison.aggregates(&ORDER).is_empty());
    assert_eq!(comparison.geometric_mean(), None);
}
