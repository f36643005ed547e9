use crate::types::axe::{CheckBuckets, CheckResult};
use crate::util::{escape_for_markdown, is_not_empty};

pub const FIX_ALL_HEADING: &str = "Fix all of the following:";
pub const FIX_ANY_HEADING: &str = "Fix any of the following:";
/// Also used for open results; downstream consumers match on this text.
pub const PASSED_HEADING: &str = "The following tests passed:";

/// How a node's checks are grouped under headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Fail,
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedMessage {
    pub text: String,
    pub rich_text: String,
}

pub fn format_message(checks: &CheckBuckets, kind: MessageKind) -> FormattedMessage {
    let mut text_sections = Vec::new();
    let mut rich_sections = Vec::new();

    match kind {
        MessageKind::Fail => {
            let all_and_none = checks.all.iter().chain(&checks.none).collect::<Vec<_>>();
            push_section(FIX_ALL_HEADING, &all_and_none, &mut text_sections, &mut rich_sections);
            let any = checks.any.iter().collect::<Vec<_>>();
            push_section(FIX_ANY_HEADING, &any, &mut text_sections, &mut rich_sections);
        }
        MessageKind::Other => {
            let every = checks
                .all
                .iter()
                .chain(&checks.none)
                .chain(&checks.any)
                .collect::<Vec<_>>();
            push_section(PASSED_HEADING, &every, &mut text_sections, &mut rich_sections);
        }
    }

    FormattedMessage {
        text: text_sections.join(" "),
        rich_text: rich_sections.join("\n\n"),
    }
}

fn push_section(
    heading: &str,
    checks: &[&CheckResult],
    text_sections: &mut Vec<String>,
    rich_sections: &mut Vec<String>,
) {
    if checks.is_empty() {
        return;
    }

    let mut text_lines = vec![heading.to_string()];
    let mut rich_lines = vec![escape_for_markdown(heading)];
    for check in checks {
        let message = display_message(check);
        text_lines.push(format!("{message}."));
        rich_lines.push(format!("- {}.", escape_for_markdown(message)));
    }

    text_sections.push(text_lines.join(" "));
    rich_sections.push(rich_lines.join("\n"));
}

fn display_message(check: &CheckResult) -> &str {
    match check.message.as_deref() {
        Some(message) if is_not_empty(Some(message)) => message,
        _ => check.id.as_str(),
    }
}
