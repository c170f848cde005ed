use std::sync::{Arc, Mutex};

use dmp_table::{SortGlyph, SortOutcome, Table, TableProps};
use dmp_table_lib::TableDocument;
use dmp_table_lib::model::{Column, ColumnSet, Row, SortDirection};
use dmp_table_lib::page::Pagination;
use dmp_table_lib::query::OrderBy;
use rstest::*;

#[fixture]
fn columns() -> ColumnSet {
    ColumnSet::new(vec![
        Column::new("name", "Name").row_header().sortable(),
        Column::new("created", "Created").sortable(),
        Column::new("notes", "Notes"),
    ])
    .unwrap()
}

#[fixture]
fn rows() -> Vec<Row> {
    vec![
        Row::new(1).set("name", "Bob").set("created", "01/02/2024"),
        Row::new(2).set("name", "Amy").set("created", "01/02/2024"),
        Row::new(3).set("name", "Amy").set("created", "15/01/2024"),
    ]
}

#[fixture]
fn table(columns: ColumnSet, rows: Vec<Row>) -> Table<Row> {
    Table::new(TableProps::new("Plans", columns, rows))
}

#[rstest]
fn test_props_cloned_at_mount(table: Table<Row>, columns: ColumnSet, rows: Vec<Row>) {
    assert_eq!(table.label(), "Plans");
    assert_eq!(table.class_name(), None);
    assert_eq!(table.columns(), columns);
    assert_eq!(table.rows(), rows);
    assert!(!table.is_delegated());
    assert!(!table.is_dirty());
}

#[rstest]
fn test_multi_column_scenario(table: Table<Row>) {
    assert_eq!(
        table.sort_column("name", Some(SortDirection::Ascending)),
        SortOutcome::Sorted
    );
    assert_eq!(table.row_keys(), ["2", "3", "1"]);

    assert_eq!(
        table.sort_column("created", Some(SortDirection::Ascending)),
        SortOutcome::Sorted
    );
    assert_eq!(table.row_keys(), ["3", "2", "1"]);
    assert!(table.is_dirty());
}

#[rstest]
fn test_direction_toggle_independence(table: Table<Row>) {
    table.sort_column("created", Some(SortDirection::Descending));
    table.on_header_click("name");

    let columns = table.columns();
    assert_eq!(
        columns.get("created").unwrap().direction,
        Some(SortDirection::Descending)
    );
    assert_eq!(
        columns.get("name").unwrap().direction,
        Some(SortDirection::Ascending)
    );
}

#[rstest]
fn test_header_click_cycles_direction(table: Table<Row>) {
    table.on_header_click("name");
    assert_eq!(table.row_keys(), ["2", "3", "1"]);

    table.on_header_click("name");
    assert_eq!(
        table.columns().get("name").unwrap().direction,
        Some(SortDirection::Descending)
    );
    assert_eq!(table.row_keys(), ["1", "2", "3"]);

    table.on_header_click("name");
    assert_eq!(
        table.columns().get("name").unwrap().direction,
        Some(SortDirection::Ascending)
    );
}

#[rstest]
#[case::unknown("missing", Some(SortDirection::Ascending))]
#[case::not_sortable("notes", Some(SortDirection::Ascending))]
#[case::unchanged("name", None)]
fn test_ignored_interactions(
    table: Table<Row>,
    #[case] column_id: &str,
    #[case] direction: Option<SortDirection>,
) {
    let outcome = table.sort_column(column_id, direction);
    assert_eq!(outcome, SortOutcome::Ignored);
    assert!(!outcome.is_changed());
    assert_eq!(table.row_keys(), ["1", "2", "3"]);
    assert!(!table.is_dirty());
}

#[rstest]
fn test_clearing_a_column_keeps_others(table: Table<Row>) {
    table.sort_column("created", Some(SortDirection::Ascending));
    assert_eq!(table.row_keys(), ["3", "1", "2"]);
    // "name" comes first in the column set, so it becomes the primary key.
    table.sort_column("name", Some(SortDirection::Descending));
    assert_eq!(table.row_keys(), ["1", "3", "2"]);

    table.sort_column("created", None);
    assert_eq!(table.row_keys(), ["1", "3", "2"]);
    assert_eq!(table.columns().active().count(), 1);

    assert_eq!(table.clear_sort(), SortOutcome::Sorted);
    assert_eq!(table.row_keys(), ["1", "3", "2"]);
    assert_eq!(table.clear_sort(), SortOutcome::Ignored);
}

#[rstest]
fn test_delegated_sort_bypasses_engine(columns: ColumnSet, rows: Vec<Row>) {
    let calls: Arc<Mutex<Vec<ColumnSet>>> = Arc::default();
    let recorded = Arc::clone(&calls);
    let table = Table::new(
        TableProps::new("Plans", columns, rows)
            .on_sort_change(move |cols| recorded.lock().unwrap().push(cols.clone())),
    );

    assert!(table.is_delegated());
    assert_eq!(table.on_header_click("name"), SortOutcome::Delegated);
    assert_eq!(table.row_keys(), ["1", "2", "3"]);

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].get("name").unwrap().direction,
        Some(SortDirection::Ascending)
    );
    assert_eq!(calls[0], table.columns());
}

#[rstest]
fn test_delegated_handler_can_supply_rows(columns: ColumnSet, rows: Vec<Row>) {
    let table = Table::new(TableProps::new("Plans", columns, rows.clone()));
    let handle = table.downgrade();
    let backend = rows.clone();
    table.set_on_sort_change(Some(Arc::new(move |cols: &ColumnSet| {
        let order = OrderBy::from_columns(cols).unwrap();
        let table = handle.upgrade().unwrap();
        table.set_rows(dmp_table_lib::sort::sort_rows_by(&backend, &order));
    })));

    assert_eq!(
        table.sort_column("name", Some(SortDirection::Descending)),
        SortOutcome::Delegated
    );
    assert_eq!(table.row_keys(), ["1", "2", "3"]);
    assert_eq!(
        table.sort_column("created", Some(SortDirection::Ascending)),
        SortOutcome::Delegated
    );
    assert_eq!(table.row_keys(), ["1", "3", "2"]);
}

#[rstest]
fn test_handler_holding_weak_handle_does_not_leak(columns: ColumnSet, rows: Vec<Row>) {
    let table = Table::new(TableProps::new("Plans", columns, rows));
    let weak = table.downgrade();
    let handle = weak.clone();
    table.set_on_sort_change(Some(Arc::new(move |_: &ColumnSet| {
        if let Some(table) = handle.upgrade() {
            table.clear_dirty();
        }
    })));

    assert!(table.on_header_click("name").is_changed());
    assert!(!table.is_dirty());

    drop(table);
    assert!(weak.upgrade().is_none());
}

#[test]
fn test_mixed_value_column_stays_usable() {
    let columns = ColumnSet::new(vec![Column::new("size", "Size").sortable()]).unwrap();
    let rows: Vec<Row> = (0..400)
        .map(|i| {
            let n = (i * 7919) % 1000;
            let size = match i % 3 {
                0 => n.to_string(),
                1 => format!("{n}x"),
                _ => "n/a".to_string(),
            };
            Row::new(i as i64).set("size", size)
        })
        .collect();
    let table = Table::new(TableProps::new("Files", columns, rows));

    assert_eq!(table.on_header_click("size"), SortOutcome::Sorted);
    assert_eq!(table.len(), 400);
    assert_eq!(table.on_header_click("size"), SortOutcome::Sorted);
    assert_eq!(
        table.columns().get("size").unwrap().direction,
        Some(SortDirection::Descending)
    );

    table.set_rows(vec![Row::new(1).set("size", "9"), Row::new(2).set("size", "10")]);
    assert_eq!(table.row_keys(), ["2", "1"]);
}

#[rstest]
fn test_set_rows_resorts_when_sort_active(table: Table<Row>) {
    table.sort_column("name", Some(SortDirection::Ascending));
    table.set_rows(vec![
        Row::new(7).set("name", "Zoe"),
        Row::new(8).set("name", "Al"),
    ]);
    assert_eq!(table.row_keys(), ["8", "7"]);
}

#[rstest]
fn test_set_columns_does_not_sort(table: Table<Row>, columns: ColumnSet) {
    let sorted = columns
        .with_direction("name", Some(SortDirection::Ascending))
        .unwrap();
    table.set_columns(sorted.clone());
    assert_eq!(table.columns(), sorted);
    assert_eq!(table.row_keys(), ["1", "2", "3"]);
}

#[rstest]
fn test_view_headers_and_cells(table: Table<Row>) {
    table.sort_column("created", Some(SortDirection::Descending));
    let view = table.view();

    assert_eq!(view.label, "Plans");
    let glyphs: Vec<SortGlyph> = view.headers.iter().map(|h| h.glyph).collect();
    assert_eq!(
        glyphs,
        [SortGlyph::Neutral, SortGlyph::Descending, SortGlyph::None]
    );
    assert!(view.headers[0].is_row_header);

    assert_eq!(view.rows.len(), 3);
    let first = &view.rows[0];
    assert_eq!(first.key, "1");
    assert_eq!(first.cells[0].text, "Bob");
    assert!(first.cells[0].is_row_header);
    // The rows have no "notes" field.
    assert_eq!(first.cells[2].text, "");
    assert_eq!(view.page, None);
}

#[rstest]
fn test_pagination(columns: ColumnSet, rows: Vec<Row>) {
    let table = Table::new(
        TableProps::new("Plans", columns, rows)
            .class_name("plans")
            .paginate(Pagination::new(1, 2).unwrap()),
    );
    assert_eq!(table.total_pages(), 2);

    table.go_to_page(2).unwrap();
    let view = table.view();
    assert_eq!(view.class_name.as_deref(), Some("plans"));
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].key, "3");
    let page = view.page.unwrap();
    assert_eq!((page.number, page.total_pages, page.total_rows), (2, 2, 3));

    assert!(table.go_to_page(0).is_err());
    assert_eq!(table.current_page(), Some(2));

    table.on_header_click("name");
    assert_eq!(table.current_page(), Some(1));
}

#[test]
fn test_from_document() {
    let doc = TableDocument::from_json(
        r#"{
            "label": "Research outputs",
            "className": "outputs",
            "columnData": [
                {"id": "title", "name": "Title", "isRowHeader": true, "allowsSorting": true},
                {"id": "size", "name": "Size", "allowsSorting": true, "direction": "descending"}
            ],
            "rowData": [
                {"id": "a", "title": "Survey", "size": "9"},
                {"id": "b", "title": "Images", "size": "10"}
            ]
        }"#,
    )
    .unwrap();

    let table = Table::new(TableProps::from(doc));
    assert_eq!(table.class_name().as_deref(), Some("outputs"));
    // Props are taken as given; sorting happens on interaction.
    assert_eq!(table.row_keys(), ["a", "b"]);
    table.on_header_click("size");
    assert_eq!(table.row_keys(), ["a", "b"]);
    table.on_header_click("size");
    assert_eq!(table.row_keys(), ["b", "a"]);
}
