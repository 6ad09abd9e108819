use crate::{Evaluation, Report, write_report};

#[test]
fn given_good_evaluation_when_write_report_then_good_message() {
    // Given
    let evaluation = Evaluation {
        max_app_connections: 500,
        max_db_connections: 2000,
    };
    let mut out = Vec::new();

    // When
    write_report(&mut out, &evaluation).unwrap();

    // Then
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "You have requested 500 application connections on an RDS Instance configured for 2000 connections.\nYou are good!\n"
    );
}

#[test]
fn given_over_limit_evaluation_when_display_then_over_the_limit_message() {
    let evaluation = Evaluation {
        max_app_connections: 5000,
        max_db_connections: 1000,
    };

    let message = Report::from(&evaluation).to_string();

    assert_eq!(
        message,
        "You have requested 5000 application connections on an RDS Instance configured for 1000 connections.\nYou are over the limit!"
    );
}
