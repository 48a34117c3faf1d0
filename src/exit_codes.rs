//! Exit code constants for the sprig CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config, unusable output root)
//! - 2: Render failure (template/schema mismatch)
//! - 3: Write failure (filesystem fault while materializing a project)
//! - 4: Internal failure (agent registry wiring fault)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or exhausted output paths.
pub const USER_ERROR: i32 = 1;

/// Render failure: a template referenced a placeholder the agent never supplied.
pub const RENDER_FAILURE: i32 = 2;

/// Write failure: an I/O fault while writing the generated project to disk.
pub const WRITE_FAILURE: i32 = 3;

/// Internal failure: no agent registered for a classified category.
pub const INTERNAL_FAILURE: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            USER_ERROR,
            RENDER_FAILURE,
            WRITE_FAILURE,
            INTERNAL_FAILURE,
        ];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
