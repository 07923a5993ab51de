//! engine::runner
//!
//! Runs an operation's async action to completion.
//!
//! The dispatcher is synchronous. Each invocation builds a current-thread
//! tokio runtime and blocks on the single action; nothing else runs
//! alongside it.

use std::future::Future;

use super::ActionResult;

/// Block on `action` until it completes.
///
/// Failing to build the runtime is reported like any other action failure.
pub fn run_to_completion<F>(action: F) -> ActionResult
where
    F: Future<Output = ActionResult>,
{
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CommandFailure;

    #[test]
    fn returns_action_success() {
        assert!(run_to_completion(async { Ok(()) }).is_ok());
    }

    #[test]
    fn returns_action_failure_unchanged() {
        let result = run_to_completion(async { Err(CommandFailure::with_code("boom", 7)) });
        assert_eq!(result.unwrap_err(), CommandFailure::with_code("boom", 7));
    }

    #[test]
    fn awaits_suspending_actions() {
        let result = run_to_completion(async {
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
            Ok(())
        });
        assert!(result.is_ok());
    }
}
