//! engine::executor
//!
//! Runs flag handlers in order and assembles their tagged output.
//!
//! # Rules
//!
//! For each flag, in the order given:
//! 1. `s` is skipped outright unless the permission mode is `"plan"`. The
//!    subagent handler applies the same rule itself; both must pass.
//! 2. Letters with no registered handler are skipped.
//! 3. Handlers returning empty content are skipped, so no bare tags appear.
//! 4. Everything else is wrapped as `<tag>\ncontent\n</tag>`.
//!
//! Fragments are joined with a single newline. Duplicates are kept.

use crate::core::flag::{is_plan_mode, Flag};
use crate::handlers::HandlerRegistry;

/// Wrap content in an XML-style tag, one line each for open and close.
///
/// # Example
///
/// ```
/// use ai_flags::engine::executor::wrap_in_xml_tag;
///
/// assert_eq!(wrap_in_xml_tag("test", "content"), "<test>\ncontent\n</test>");
/// ```
pub fn wrap_in_xml_tag(tag: &str, content: &str) -> String {
    format!("<{tag}>\n{content}\n</{tag}>")
}

/// Execute the handlers for `flags` and join the wrapped results.
///
/// The caller is expected to have validated `flags` already. Returns an
/// empty string when nothing contributes.
pub fn execute_flag_handlers(
    flags: &[String],
    registry: &HandlerRegistry,
    permission_mode: Option<&str>,
) -> String {
    let mut fragments = Vec::with_capacity(flags.len());

    for flag in flags {
        if flag == Flag::Subagent.letter() && !is_plan_mode(permission_mode) {
            tracing::debug!(flag = %flag, "skipping subagent flag outside plan mode");
            continue;
        }

        let Some(handler) = registry.get(flag) else {
            tracing::debug!(flag = %flag, "no handler registered, skipping");
            continue;
        };

        let content = handler.content(permission_mode);
        if content.is_empty() {
            tracing::debug!(flag = %flag, "handler produced no content");
            continue;
        }

        fragments.push(wrap_in_xml_tag(handler.xml_tag(), &content));
    }

    fragments.join("\n")
}
