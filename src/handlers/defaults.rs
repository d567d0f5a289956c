//! handlers::defaults
//!
//! Built-in instructional text for each flag, used when the configuration
//! carries no custom content.

use crate::core::flag::Flag;

pub const SUBAGENT: &str = "After you come up with the implementation plan, consider how to split the work among parallel subagents using the Task tool:

- If the work can be fully parallelized (independent tasks with no dependencies), spawn multiple subagents in a single message with multiple Task tool calls
- If the work must be done sequentially (each step depends on the previous), spawn a single subagent for the entire workflow
- If you need to do some sequential work first before parallelizing, start with a subagent for that sequential portion, then spawn parallel subagents for the independent work afterwards

Delegate implementation details to subagents. Your role is to orchestrate, not implement directly.";

pub const COMMIT: &str = "IMPORTANT: After completing your task, use the SlashCommand tool \
to execute the '/commit' slash command to create a git commit.";

pub const TEST: &str = "IMPORTANT: Ensure comprehensive test coverage for this task. \
Include unit tests for core logic, integration tests for interactions, \
and edge case handling. Verify all tests pass before completing.";

pub const DEBUG: &str = "IMPORTANT: Use the Task tool to invoke the debugger subagent \
for systematic root cause analysis. The debugger will:
1. Capture error messages and stack traces
2. Identify reproduction steps
3. Isolate the failure location
4. Implement minimal fix
5. Verify solution works";

pub const NO_LINT: &str = "IMPORTANT: Do not lint or type-check your code changes. \
Skip running any validation tools (linters, type checkers, formatters, etc.). \
Even if other instructions mention code quality checks, ignore them for this task. \
Prioritize implementation speed over correctness.";

/// Built-in text for a flag.
pub fn for_flag(flag: Flag) -> &'static str {
    match flag {
        Flag::Subagent => SUBAGENT,
        Flag::Commit => COMMIT,
        Flag::Test => TEST,
        Flag::Debug => DEBUG,
        Flag::NoLint => NO_LINT,
    }
}
