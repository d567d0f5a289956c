//! End-to-end tests for the prompt pipeline through the public API.
//!
//! These tests drive parse -> validate -> registry -> execute the way the
//! hook does, using in-memory configuration snapshots.

use std::collections::HashSet;

use ai_flags::core::config::{FlagConfig, FlagSettings, FlagsConfig};
use ai_flags::core::parser::parse_trailing_flags;
use ai_flags::core::validator::validate_flags;
use ai_flags::engine::{execute_flag_handlers, process_prompt, PromptOutcome};
use ai_flags::handlers::{defaults, CommitHandler, HandlerRegistry, TestHandler};
use ai_flags::ui::render::hook_additional_context;

/// Settings snapshot that is not backed by a config file.
struct FixedSettings {
    enabled: HashSet<String>,
    commit: FlagConfig,
}

impl FlagSettings for FixedSettings {
    fn enabled_flags(&self) -> HashSet<String> {
        self.enabled.clone()
    }

    fn flag_config(&self, letter: &str) -> Option<&FlagConfig> {
        (letter == "c").then_some(&self.commit)
    }
}

#[test]
fn debug_flag_with_defaults() {
    let parsed = parse_trailing_flags("fix the bug -d").unwrap();
    assert_eq!(parsed.clean_prompt, "fix the bug");
    assert_eq!(parsed.flags, vec!["d"]);

    let config = FlagsConfig::default();
    assert!(validate_flags(&parsed.flags, &config.enabled_flags()));

    let registry = HandlerRegistry::from_settings(&config);
    let context = execute_flag_handlers(&parsed.flags, &registry, None);
    assert_eq!(
        context,
        format!("<debug_instructions>\n{}\n</debug_instructions>", defaults::DEBUG)
    );
}

#[test]
fn lone_flag_is_not_a_match_but_two_are() {
    assert!(parse_trailing_flags("-s").is_none());

    let parsed = parse_trailing_flags("-s -c").unwrap();
    assert_eq!(parsed.clean_prompt, "-s");
    assert_eq!(parsed.flags, vec!["c"]);
}

#[test]
fn disabled_flag_rejects_whole_prompt() {
    let mut config = FlagsConfig::default();
    config.no_lint.enabled = false;

    let parsed = parse_trailing_flags("ship it -c -n").unwrap();
    assert!(!validate_flags(&parsed.flags, &config.enabled_flags()));

    assert!(matches!(
        process_prompt("ship it -c -n", &config, None),
        PromptOutcome::Rejected(_)
    ));
}

#[test]
fn missing_registry_entry_is_skipped() {
    let mut registry = HandlerRegistry::new();
    registry.register(Box::new(CommitHandler::new(None)));

    let flags = vec!["t".to_string(), "c".to_string()];
    let context = execute_flag_handlers(&flags, &registry, None);

    assert!(!context.contains("test_instructions"));
    assert_eq!(
        context,
        format!("<commit_instructions>\n{}\n</commit_instructions>", defaults::COMMIT)
    );
}

#[test]
fn output_follows_flag_order() {
    let mut registry = HandlerRegistry::new();
    registry.register(Box::new(CommitHandler::new(None)));
    registry.register(Box::new(TestHandler::new(None)));

    let flags = vec!["t".to_string(), "c".to_string()];
    let context = execute_flag_handlers(&flags, &registry, None);

    let test_at = context.find("<test_instructions>").unwrap();
    let commit_at = context.find("<commit_instructions>").unwrap();
    assert!(test_at < commit_at);
}

#[test]
fn custom_settings_source() {
    let settings = FixedSettings {
        enabled: ["c".to_string()].into_iter().collect(),
        commit: FlagConfig {
            enabled: true,
            content: Some("Squash before committing.".to_string()),
        },
    };

    let outcome = process_prompt("tidy up -c", &settings, None);
    let augmentation = outcome.augmentation().unwrap();
    assert_eq!(
        augmentation.context,
        "<commit_instructions>\nSquash before committing.\n</commit_instructions>"
    );

    // Enabled set excludes "t" even though a handler exists for it.
    assert!(matches!(
        process_prompt("tidy up -c -t", &settings, None),
        PromptOutcome::Rejected(_)
    ));
}

#[test]
fn full_hook_context_for_plan_mode() {
    let outcome = process_prompt(
        "migrate the schema\nthen backfill -s -t",
        &FlagsConfig::default(),
        Some("plan"),
    );
    let augmentation = outcome.augmentation().unwrap();
    let context = hook_additional_context(
        &augmentation.clean_prompt,
        &augmentation.flags,
        &augmentation.context,
    );

    assert!(context.starts_with(
        "<flag_metadata>\nNote: Processed flags -s -t\n\
         Your actual task (without flags): migrate the schema\nthen backfill\n</flag_metadata>\n\n"
    ));
    let subagent_at = context.find("<subagent_delegation>").unwrap();
    let test_at = context.find("<test_instructions>").unwrap();
    assert!(subagent_at < test_at);
}
