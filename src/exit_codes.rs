//! Exit code constants for the pvault CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, missing files)
//! - 2: Parse failure (template/values/config could not be parsed)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, missing files, or invalid --var syntax.
pub const USER_ERROR: i32 = 1;

/// Parse failure: template, values, or config file could not be parsed.
pub const PARSE_FAILURE: i32 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, PARSE_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn exit_codes_match_contract() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(USER_ERROR, 1);
        assert_eq!(PARSE_FAILURE, 2);
    }
}
