//! Argument validation.
//!
//! Handlers have fixed arity. The check runs before the handler emits its
//! event or touches state.

use crate::error::{ContractError, ContractResult};

/// Require exactly `expected` arguments for `function`.
pub fn expect_args(function: &str, args: &[String], expected: usize) -> ContractResult<()> {
    if args.len() != expected {
        return Err(ContractError::ArgumentCount {
            function: function.to_string(),
            expected,
            got: args.len(),
        });
    }
    Ok(())
}
