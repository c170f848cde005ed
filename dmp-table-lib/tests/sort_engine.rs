use std::borrow::Cow;

use dmp_table_lib::model::{Column, Row, SortDirection, TableRow, Value};
use dmp_table_lib::sort::sort_rows;
use rstest::*;

fn keys(rows: &[Row]) -> Vec<String> {
    rows.iter().map(TableRow::key).collect()
}

fn sorted_by(id: &str, direction: SortDirection) -> Column {
    Column::new(id, id).sortable().with_direction(direction)
}

#[fixture]
fn plans() -> Vec<Row> {
    vec![
        Row::new(1).set("name", "Bob").set("created", "01/02/2024"),
        Row::new(2).set("name", "Amy").set("created", "01/02/2024"),
        Row::new(3).set("name", "Amy").set("created", "15/01/2024"),
    ]
}

#[rstest]
fn test_name_then_created(plans: Vec<Row>) {
    let columns = vec![
        sorted_by("name", SortDirection::Ascending),
        sorted_by("created", SortDirection::Ascending),
    ];
    assert_eq!(keys(&sort_rows(&plans, &columns)), ["3", "2", "1"]);
}

#[rstest]
fn test_inputs_are_not_mutated(plans: Vec<Row>) {
    let original = plans.clone();
    let columns = vec![sorted_by("name", SortDirection::Descending)];
    let columns_before = columns.clone();

    let sorted = sort_rows(&plans, &columns);
    assert!(matches!(sorted, Cow::Owned(_)));
    assert_eq!(keys(&sorted), ["1", "2", "3"]);
    assert_eq!(plans, original);
    assert_eq!(columns, columns_before);
}

#[rstest]
fn test_stable_for_ties(plans: Vec<Row>) {
    // Rows 1 and 2 share a created date and keep their input order.
    let columns = vec![sorted_by("created", SortDirection::Descending)];
    assert_eq!(keys(&sort_rows(&plans, &columns)), ["1", "2", "3"]);

    let reversed: Vec<Row> = plans.iter().rev().cloned().collect();
    assert_eq!(keys(&sort_rows(&reversed, &columns)), ["2", "1", "3"]);
}

#[rstest]
#[case::numeric(&["10", "9", "100"], &["9", "10", "100"])]
#[case::day_first_dates(&["01/12/2024", "15/01/2024"], &["15/01/2024", "01/12/2024"])]
#[case::lexicographic(&["beta", "Alpha", "alpha"], &["Alpha", "alpha", "beta"])]
fn test_type_aware_ascending(#[case] input: &[&str], #[case] expected: &[&str]) {
    let rows: Vec<Row> = input
        .iter()
        .enumerate()
        .map(|(i, v)| Row::new(i as i64).set("v", *v))
        .collect();
    let columns = vec![sorted_by("v", SortDirection::Ascending)];

    let sorted = sort_rows(&rows, &columns);
    let values: Vec<String> = sorted
        .iter()
        .map(|r| r.cell("v").map(Value::to_string).unwrap_or_default())
        .collect();
    assert_eq!(values, expected);
}

#[test]
fn test_tie_break_descending_secondary() {
    let rows = vec![
        Row::new("a").set("a", 1).set("b", 1),
        Row::new("b").set("a", 2).set("b", 5),
        Row::new("c").set("a", 1).set("b", 3),
        Row::new("d").set("a", 1).set("b", 2),
    ];
    let columns = vec![
        sorted_by("a", SortDirection::Ascending),
        sorted_by("b", SortDirection::Descending),
    ];
    assert_eq!(keys(&sort_rows(&rows, &columns)), ["c", "d", "a", "b"]);
}

#[test]
fn test_column_order_sets_priority() {
    let rows = vec![
        Row::new("a").set("a", 1).set("b", 2),
        Row::new("b").set("a", 2).set("b", 1),
    ];
    let b_first = vec![
        sorted_by("b", SortDirection::Ascending),
        sorted_by("a", SortDirection::Ascending),
    ];
    assert_eq!(keys(&sort_rows(&rows, &b_first)), ["b", "a"]);
}

#[rstest]
#[case(SortDirection::Ascending, &["x", "y", "missing", "null"])]
#[case(SortDirection::Descending, &["y", "x", "missing", "null"])]
fn test_nulls_sort_last(#[case] direction: SortDirection, #[case] expected: &[&str]) {
    let rows = vec![
        Row::new("missing"),
        Row::new("null").set("v", Value::Null),
        Row::new("y").set("v", 2),
        Row::new("x").set("v", 1),
    ];
    let columns = vec![sorted_by("v", direction)];
    assert_eq!(keys(&sort_rows(&rows, &columns)), expected);
}

fn mixed_rows(count: usize) -> Vec<Row> {
    (0..count)
        .map(|i| {
            let n = (i * 7919) % 1000;
            let row = Row::new(i as i64);
            match i % 5 {
                0 | 1 => row.set("v", n.to_string()),
                2 => row.set("v", format!("{n}x")),
                3 => row.set("v", "n/a"),
                _ if i % 10 == 4 => row.set("v", Value::Null),
                _ => row.set("v", format!("{:02}/{:02}/2024", n % 28 + 1, n % 12 + 1)),
            }
        })
        .collect()
}

#[rstest]
#[case(SortDirection::Ascending)]
#[case(SortDirection::Descending)]
fn test_mixed_column_keeps_every_row(#[case] direction: SortDirection) {
    // Numbers, suffixed numbers, text and dates compare on different tiers
    // pair by pair, which is not a total order.
    let rows = mixed_rows(600);
    let columns = vec![sorted_by("v", direction)];

    let sorted = sort_rows(&rows, &columns);
    assert_eq!(sorted.len(), rows.len());

    let mut sorted_keys = keys(&sorted);
    let mut input_keys = keys(&rows);
    sorted_keys.sort();
    input_keys.sort();
    assert_eq!(sorted_keys, input_keys);

    let nulls = rows.iter().filter(|r| r.get("v") == Some(&Value::Null)).count();
    assert!(nulls > 0);
    assert!(
        sorted[sorted.len() - nulls..]
            .iter()
            .all(|r| r.get("v") == Some(&Value::Null))
    );

    // Same input, same output.
    assert_eq!(keys(&sort_rows(&rows, &columns)), keys(&sorted));
}
