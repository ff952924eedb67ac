//! Status codes returned by the verifyReceipt endpoint:
//! https://developer.apple.com/documentation/appstorereceipts/status

/// The receipt passed verification.
pub const SUCCESS: i64 = 0;

/// The receipt is from the test environment, but it was sent to the
/// production environment for verification.
pub const TEST_ENVIRONMENT: i64 = 21007;

/// Status codes on which verification fails.
pub const ERROR_STATUS_CODES: [i64; 11] = [
    21000, 21001, 21002, 21003, 21004, 21005, 21006, 21007, 21008, 21009, 21010,
];

pub(crate) fn is_from_test_environment(status: i64) -> bool {
    status == TEST_ENVIRONMENT
}

pub(crate) fn is_invalid(status: i64) -> bool {
    ERROR_STATUS_CODES.contains(&status)
}

/// Documented meaning of a status code. Codes outside the documented set
/// map to a generic description.
pub fn describe(status: i64) -> &'static str {
    match status {
        0 => "The receipt is valid.",
        21000 => "The request to the App Store was not made using the HTTP POST request method.",
        21001 => "This status code is no longer sent by the App Store.",
        21002 => "The data in the receipt-data property was malformed or the service experienced a temporary issue.",
        21003 => "The receipt could not be authenticated.",
        21004 => "The shared secret you provided does not match the shared secret on file for your account.",
        21005 => "The receipt server was temporarily unable to provide the receipt.",
        21006 => "This receipt is valid but the subscription has expired.",
        21007 => "This receipt is from the test environment, but it was sent to the production environment for verification.",
        21008 => "This receipt is from the production environment, but it was sent to the test environment for verification.",
        21009 => "Internal data access error. Try again later.",
        21010 => "The user account cannot be found or has been deleted.",
        _ => "Undocumented status code.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_test_environment_code_triggers_the_sandbox_retry() {
        assert!(is_from_test_environment(21007));
        assert!(!is_from_test_environment(0));
        assert!(!is_from_test_environment(21008));
    }

    #[test]
    fn every_documented_error_code_is_invalid() {
        for code in ERROR_STATUS_CODES {
            assert!(is_invalid(code), "{code} should be invalid");
        }
        assert!(!is_invalid(SUCCESS));
        assert!(!is_invalid(21100));
        assert!(!is_invalid(-1));
    }

    #[test]
    fn describes_documented_codes() {
        assert_eq!(
            describe(21004),
            "The shared secret you provided does not match the shared secret on file for your account."
        );
        assert_eq!(describe(1234), "Undocumented status code.");
    }
}
