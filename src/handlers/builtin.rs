//! handlers::builtin
//!
//! The five built-in flag handlers.
//!
//! Each handler holds an optional custom text taken from configuration at
//! construction. Content resolution is "custom if non-empty, else default".
//! The subagent handler additionally returns nothing outside plan mode; that
//! check happens before custom content is considered.

use super::defaults;
use super::FlagHandler;
use crate::core::flag::{is_plan_mode, Flag};

/// Pick custom content when it is non-empty, otherwise the default.
fn resolve(custom: Option<&str>, default: &str) -> String {
    match custom {
        Some(content) if !content.is_empty() => content.to_string(),
        _ => default.to_string(),
    }
}

/// `-s`: split planned work across parallel subagents.
///
/// Only produces content when the permission mode is `"plan"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubagentHandler {
    custom: Option<String>,
}

impl SubagentHandler {
    pub fn new(custom: Option<String>) -> Self {
        Self { custom }
    }
}

impl FlagHandler for SubagentHandler {
    fn flag_letter(&self) -> &str {
        Flag::Subagent.letter()
    }

    fn xml_tag(&self) -> &str {
        "subagent_delegation"
    }

    fn content(&self, permission_mode: Option<&str>) -> String {
        if !is_plan_mode(permission_mode) {
            return String::new();
        }
        resolve(self.custom.as_deref(), defaults::SUBAGENT)
    }
}

/// `-c`: commit via the `/commit` slash command when done.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitHandler {
    custom: Option<String>,
}

impl CommitHandler {
    pub fn new(custom: Option<String>) -> Self {
        Self { custom }
    }
}

impl FlagHandler for CommitHandler {
    fn flag_letter(&self) -> &str {
        Flag::Commit.letter()
    }

    fn xml_tag(&self) -> &str {
        "commit_instructions"
    }

    fn content(&self, _permission_mode: Option<&str>) -> String {
        resolve(self.custom.as_deref(), defaults::COMMIT)
    }
}

/// `-t`: demand thorough test coverage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestHandler {
    custom: Option<String>,
}

impl TestHandler {
    pub fn new(custom: Option<String>) -> Self {
        Self { custom }
    }
}

impl FlagHandler for TestHandler {
    fn flag_letter(&self) -> &str {
        Flag::Test.letter()
    }

    fn xml_tag(&self) -> &str {
        "test_instructions"
    }

    fn content(&self, _permission_mode: Option<&str>) -> String {
        resolve(self.custom.as_deref(), defaults::TEST)
    }
}

/// `-d`: hand off to the debugger subagent for root cause analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebugHandler {
    custom: Option<String>,
}

impl DebugHandler {
    pub fn new(custom: Option<String>) -> Self {
        Self { custom }
    }
}

impl FlagHandler for DebugHandler {
    fn flag_letter(&self) -> &str {
        Flag::Debug.letter()
    }

    fn xml_tag(&self) -> &str {
        "debug_instructions"
    }

    fn content(&self, _permission_mode: Option<&str>) -> String {
        resolve(self.custom.as_deref(), defaults::DEBUG)
    }
}

/// `-n`: skip linters, type checkers, and formatters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoLintHandler {
    custom: Option<String>,
}

impl NoLintHandler {
    pub fn new(custom: Option<String>) -> Self {
        Self { custom }
    }
}

impl FlagHandler for NoLintHandler {
    fn flag_letter(&self) -> &str {
        Flag::NoLint.letter()
    }

    fn xml_tag(&self) -> &str {
        "no_lint_instructions"
    }

    fn content(&self, _permission_mode: Option<&str>) -> String {
        resolve(self.custom.as_deref(), defaults::NO_LINT)
    }
}

/// Construct the built-in handler for a flag.
pub fn builtin_handler(flag: Flag, custom: Option<String>) -> Box<dyn FlagHandler> {
    match flag {
        Flag::Subagent => Box::new(SubagentHandler::new(custom)),
        Flag::Commit => Box::new(CommitHandler::new(custom)),
        Flag::Test => Box::new(TestHandler::new(custom)),
        Flag::Debug => Box::new(DebugHandler::new(custom)),
        Flag::NoLint => Box::new(NoLintHandler::new(custom)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODES: [Option<&str>; 5] = [
        None,
        Some("plan"),
        Some("default"),
        Some("acceptEdits"),
        Some("bypassPermissions"),
    ];

    #[test]
    fn letters_and_tags() {
        let expected = [
            (Flag::Subagent, "s", "subagent_delegation"),
            (Flag::Commit, "c", "commit_instructions"),
            (Flag::Test, "t", "test_instructions"),
            (Flag::Debug, "d", "debug_instructions"),
            (Flag::NoLint, "n", "no_lint_instructions"),
        ];
        for (flag, letter, tag) in expected {
            let handler = builtin_handler(flag, None);
            assert_eq!(handler.flag_letter(), letter);
            assert_eq!(handler.xml_tag(), tag);
        }
    }

    #[test]
    fn subagent_silent_outside_plan_mode() {
        let handler = SubagentHandler::new(None);
        for mode in [None, Some("default"), Some("acceptEdits"), Some(""), Some("PLAN")] {
            assert_eq!(handler.content(mode), "", "mode {:?}", mode);
        }
    }

    #[test]
    fn subagent_plan_mode_default_content() {
        let content = SubagentHandler::new(None).content(Some("plan"));
        assert_eq!(content, defaults::SUBAGENT);
        assert!(content.contains("Task tool"));
        assert!(content.contains("orchestrate"));
    }

    #[test]
    fn subagent_custom_content_still_needs_plan_mode() {
        let handler = SubagentHandler::new(Some("Use three agents".to_string()));
        assert_eq!(handler.content(None), "");
        assert_eq!(handler.content(Some("plan")), "Use three agents");
    }

    #[test]
    fn commit_default_content() {
        let content = CommitHandler::default().content(None);
        assert!(content.contains("SlashCommand"));
        assert!(content.contains("/commit"));
        assert!(content.contains("git commit"));
    }

    #[test]
    fn debug_default_lists_steps() {
        let content = DebugHandler::default().content(None);
        assert!(content.contains("debugger subagent"));
        assert!(content.contains("\n1. Capture error messages"));
        assert!(content.contains("\n5. Verify solution works"));
    }

    #[test]
    fn test_and_no_lint_defaults() {
        assert!(TestHandler::default().content(None).contains("test coverage"));
        assert!(NoLintHandler::default()
            .content(None)
            .contains("Do not lint or type-check"));
    }

    #[test]
    fn non_subagent_handlers_ignore_mode() {
        for flag in [Flag::Commit, Flag::Test, Flag::Debug, Flag::NoLint] {
            let default = builtin_handler(flag, None);
            let custom = builtin_handler(flag, Some("Custom".to_string()));
            let baseline = default.content(None);
            assert!(!baseline.is_empty());
            for mode in MODES {
                assert_eq!(default.content(mode), baseline);
                assert_eq!(custom.content(mode), "Custom");
            }
        }
    }

    #[test]
    fn empty_custom_content_falls_back_to_default() {
        let handler = CommitHandler::new(Some(String::new()));
        assert_eq!(handler.content(None), defaults::COMMIT);

        let handler = SubagentHandler::new(Some(String::new()));
        assert_eq!(handler.content(Some("plan")), defaults::SUBAGENT);
    }

    #[test]
    fn content_is_repeatable() {
        for flag in Flag::ALL {
            let handler = builtin_handler(flag, None);
            for mode in MODES {
                assert_eq!(handler.content(mode), handler.content(mode));
            }
        }
    }
}
