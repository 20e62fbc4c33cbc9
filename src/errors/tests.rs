//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "`".to_string(),
        },
        Position(10, Rc::new("scr_test".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("scr_test".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "until".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_unexpected_token_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "]".to_string(),
        },
        Position(0, Rc::new("scr_test".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_invalid_accessor_error() {
    let error = Error::new(
        ErrorImpl::InvalidAccessor {
            marker: "#".to_string(),
            message: "grid accessors take two indices".to_string(),
        },
        Position(0, Rc::new("scr_test".to_string())),
    );

    assert_eq!(error.get_error_name(), "InvalidAccessor");
}

#[test]
fn test_invalid_assignment_target_error() {
    let error = Error::new(
        ErrorImpl::InvalidAssignmentTarget,
        Position(0, Rc::new("scr_test".to_string())),
    );

    assert_eq!(error.get_error_name(), "InvalidAssignmentTarget");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "`".to_string(),
        },
        Position(0, Rc::new("scr_test".to_string())),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
        },
        Position(0, Rc::new("scr_test".to_string())),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "9999999999999999999999999999999999999".to_string(),
        },
        Position(0, Rc::new("scr_test".to_string())),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
}
