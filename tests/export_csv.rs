use defter::export::export_csv;
use serde::Serialize;

#[derive(Serialize)]
struct Row {
    title: String,
    amount: i64,
    details: Option<String>,
}

#[test]
fn headers_come_from_record_keys_in_sorted_order() {
    let rows = vec![Row {
        title: "Retainer".to_string(),
        amount: 1200,
        details: Some("March".to_string()),
    }];

    let csv = export_csv(&rows).unwrap();
    assert_eq!(csv, "amount,details,title\n1200,March,Retainer");
}

#[test]
fn values_containing_commas_are_quoted() {
    let rows = vec![Row {
        title: "Acme, Inc".to_string(),
        amount: 50,
        details: None,
    }];

    let csv = export_csv(&rows).unwrap();
    assert_eq!(csv, "amount,details,title\n50,,\"Acme, Inc\"");
}

#[test]
fn nulls_render_as_empty_fields() {
    let rows = vec![
        Row {
            title: "a".to_string(),
            amount: 1,
            details: None,
        },
        Row {
            title: "b".to_string(),
            amount: 2,
            details: Some("ok".to_string()),
        },
    ];

    let csv = export_csv(&rows).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines, vec!["amount,details,title", "1,,a", "2,ok,b"]);
}

#[test]
fn empty_input_produces_empty_output() {
    let rows: Vec<Row> = Vec::new();
    assert_eq!(export_csv(&rows).unwrap(), "");
}

#[test]
fn non_object_records_are_rejected() {
    let rows = vec![1, 2, 3];
    assert!(export_csv(&rows).is_err());
}
