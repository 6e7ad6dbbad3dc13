#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;

#[test]
fn test_display_matches_as_str() {
    for code in ErrorCode::ALL {
        assert_eq!(code.to_string(), code.as_str());
    }
}

#[test]
fn test_from_str_round_trips_every_code() {
    for code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>().unwrap(), *code);
    }
}

#[test]
fn test_from_str_is_case_insensitive() {
    assert_eq!("e1003".parse::<ErrorCode>().unwrap(), ErrorCode::E1003);
}

#[test]
fn test_from_str_unknown() {
    let err = "E9999".parse::<ErrorCode>().unwrap_err();
    assert_eq!(err.to_string(), "unknown error code `E9999`");
}

#[test]
fn test_phases_partition_all_codes() {
    for code in ErrorCode::ALL {
        let phases = [
            code.is_lexer_error(),
            code.is_parser_error(),
            code.is_runtime_error(),
        ];
        assert_eq!(phases.iter().filter(|p| **p).count(), 1, "{code}");
    }
}

#[test]
fn test_phase_matches_leading_digit() {
    for code in ErrorCode::ALL {
        let digit = code.as_str().as_bytes()[1];
        match digit {
            b'0' => assert!(code.is_lexer_error()),
            b'1' => assert!(code.is_parser_error()),
            b'6' => assert!(code.is_runtime_error()),
            _ => panic!("unexpected phase digit in {code}"),
        }
    }
}
