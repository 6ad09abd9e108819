use crate::{Cell, ConnectionLimitTable};

use googletest::assert_that;
use googletest::prelude::eq;

#[test]
fn given_plain_digits_when_parse_then_integer() {
    assert_eq!(Cell::parse("1000"), Cell::Integer(1000));
}

#[test]
fn given_thousands_separator_when_parse_then_integer() {
    assert_eq!(Cell::parse(" 16,000 "), Cell::Integer(16000));
}

#[test]
fn given_decimal_when_parse_then_float() {
    assert_eq!(Cell::parse("1.5"), Cell::Float(1.5));
}

#[test]
fn given_instance_label_when_parse_then_text() {
    assert_eq!(
        Cell::parse("db.r5.large"),
        Cell::Text("db.r5.large".to_string())
    );
}

#[test]
fn given_multiline_text_when_parse_then_whitespace_collapsed() {
    assert_eq!(
        Cell::parse("db.r6g.\n     2xlarge  (Graviton)"),
        Cell::Text("db.r6g. 2xlarge (Graviton)".to_string())
    );
}

#[test]
fn given_nan_text_when_parse_then_text() {
    assert_eq!(Cell::parse("NaN"), Cell::Text("NaN".to_string()));
}

#[test]
fn given_whole_float_when_as_integer_then_some() {
    assert_eq!(Cell::Float(2000.0).as_integer(), Some(2000));
}

#[test]
fn given_fractional_float_when_as_integer_then_none() {
    assert_eq!(Cell::Float(2000.5).as_integer(), None);
}

#[test]
fn given_text_when_as_integer_then_none() {
    assert_eq!(Cell::from("n/a").as_integer(), None);
}

#[test]
fn given_pairs_when_from_pairs_then_rows_in_order() {
    let table = ConnectionLimitTable::from_pairs([("db.r5.large", 1000), ("db.r5.xlarge", 2000)]);

    assert_that!(table.len(), eq(2));
    assert_eq!(table.rows[1].get(0), Some(&Cell::from("db.r5.xlarge")));
    assert_eq!(table.rows[1].get(1), Some(&Cell::Integer(2000)));
    assert_eq!(table.rows[1].get(2), None);
}
