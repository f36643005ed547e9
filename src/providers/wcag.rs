/// Link metadata for one WCAG tag as axe-core reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WcagLinkData {
    pub tag: &'static str,
    pub text: &'static str,
    pub url: Option<&'static str>,
    pub title: Option<&'static str>,
}

const fn criterion(
    tag: &'static str,
    text: &'static str,
    url: &'static str,
    title: &'static str,
) -> WcagLinkData {
    WcagLinkData {
        tag,
        text,
        url: Some(url),
        title: Some(title),
    }
}

pub const BEST_PRACTICE_TAG: &str = "best-practice";

pub static WCAG_LINK_DATA: &[WcagLinkData] = &[
    WcagLinkData {
        tag: BEST_PRACTICE_TAG,
        text: "Best Practice",
        url: None,
        title: None,
    },
    criterion(
        "wcag111",
        "WCAG 1.1.1",
        "https://www.w3.org/WAI/WCAG21/Understanding/non-text-content.html",
        "Non-text Content",
    ),
    criterion(
        "wcag121",
        "WCAG 1.2.1",
        "https://www.w3.org/WAI/WCAG21/Understanding/audio-only-and-video-only-prerecorded.html",
        "Audio-only and Video-only (Prerecorded)",
    ),
    criterion(
        "wcag122",
        "WCAG 1.2.2",
        "https://www.w3.org/WAI/WCAG21/Understanding/captions-prerecorded.html",
        "Captions (Prerecorded)",
    ),
    criterion(
        "wcag123",
        "WCAG 1.2.3",
        "https://www.w3.org/WAI/WCAG21/Understanding/audio-description-or-media-alternative-prerecorded.html",
        "Audio Description or Media Alternative (Prerecorded)",
    ),
    criterion(
        "wcag124",
        "WCAG 1.2.4",
        "https://www.w3.org/WAI/WCAG21/Understanding/captions-live.html",
        "Captions (Live)",
    ),
    criterion(
        "wcag125",
        "WCAG 1.2.5",
        "https://www.w3.org/WAI/WCAG21/Understanding/audio-description-prerecorded.html",
        "Audio Description (Prerecorded)",
    ),
    criterion(
        "wcag131",
        "WCAG 1.3.1",
        "https://www.w3.org/WAI/WCAG21/Understanding/info-and-relationships.html",
        "Info and Relationships",
    ),
    criterion(
        "wcag132",
        "WCAG 1.3.2",
        "https://www.w3.org/WAI/WCAG21/Understanding/meaningful-sequence.html",
        "Meaningful Sequence",
    ),
    criterion(
        "wcag133",
        "WCAG 1.3.3",
        "https://www.w3.org/WAI/WCAG21/Understanding/sensory-characteristics.html",
        "Sensory Characteristics",
    ),
    criterion(
        "wcag134",
        "WCAG 1.3.4",
        "https://www.w3.org/WAI/WCAG21/Understanding/orientation.html",
        "Orientation",
    ),
    criterion(
        "wcag135",
        "WCAG 1.3.5",
        "https://www.w3.org/WAI/WCAG21/Understanding/identify-input-purpose.html",
        "Identify Input Purpose",
    ),
    criterion(
        "wcag141",
        "WCAG 1.4.1",
        "https://www.w3.org/WAI/WCAG21/Understanding/use-of-color.html",
        "Use of Color",
    ),
    criterion(
        "wcag142",
        "WCAG 1.4.2",
        "https://www.w3.org/WAI/WCAG21/Understanding/audio-control.html",
        "Audio Control",
    ),
    criterion(
        "wcag143",
        "WCAG 1.4.3",
        "https://www.w3.org/WAI/WCAG21/Understanding/contrast-minimum.html",
        "Contrast (Minimum)",
    ),
    criterion(
        "wcag144",
        "WCAG 1.4.4",
        "https://www.w3.org/WAI/WCAG21/Understanding/resize-text.html",
        "Resize text",
    ),
    criterion(
        "wcag145",
        "WCAG 1.4.5",
        "https://www.w3.org/WAI/WCAG21/Understanding/images-of-text.html",
        "Images of Text",
    ),
    criterion(
        "wcag1410",
        "WCAG 1.4.10",
        "https://www.w3.org/WAI/WCAG21/Understanding/reflow.html",
        "Reflow",
    ),
    criterion(
        "wcag1411",
        "WCAG 1.4.11",
        "https://www.w3.org/WAI/WCAG21/Understanding/non-text-contrast.html",
        "Non-text Contrast",
    ),
    criterion(
        "wcag1412",
        "WCAG 1.4.12",
        "https://www.w3.org/WAI/WCAG21/Understanding/text-spacing.html",
        "Text Spacing",
    ),
    criterion(
        "wcag1413",
        "WCAG 1.4.13",
        "https://www.w3.org/WAI/WCAG21/Understanding/content-on-hover-or-focus.html",
        "Content on Hover or Focus",
    ),
    criterion(
        "wcag211",
        "WCAG 2.1.1",
        "https://www.w3.org/WAI/WCAG21/Understanding/keyboard.html",
        "Keyboard",
    ),
    criterion(
        "wcag212",
        "WCAG 2.1.2",
        "https://www.w3.org/WAI/WCAG21/Understanding/no-keyboard-trap.html",
        "No Keyboard Trap",
    ),
    criterion(
        "wcag214",
        "WCAG 2.1.4",
        "https://www.w3.org/WAI/WCAG21/Understanding/character-key-shortcuts.html",
        "Character Key Shortcuts",
    ),
    criterion(
        "wcag221",
        "WCAG 2.2.1",
        "https://www.w3.org/WAI/WCAG21/Understanding/timing-adjustable.html",
        "Timing Adjustable",
    ),
    criterion(
        "wcag222",
        "WCAG 2.2.2",
        "https://www.w3.org/WAI/WCAG21/Understanding/pause-stop-hide.html",
        "Pause, Stop, Hide",
    ),
    criterion(
        "wcag231",
        "WCAG 2.3.1",
        "https://www.w3.org/WAI/WCAG21/Understanding/three-flashes-or-below-threshold.html",
        "Three Flashes or Below Threshold",
    ),
    criterion(
        "wcag241",
        "WCAG 2.4.1",
        "https://www.w3.org/WAI/WCAG21/Understanding/bypass-blocks.html",
        "Bypass Blocks",
    ),
    criterion(
        "wcag242",
        "WCAG 2.4.2",
        "https://www.w3.org/WAI/WCAG21/Understanding/page-titled.html",
        "Page Titled",
    ),
    criterion(
        "wcag243",
        "WCAG 2.4.3",
        "https://www.w3.org/WAI/WCAG21/Understanding/focus-order.html",
        "Focus Order",
    ),
    criterion(
        "wcag244",
        "WCAG 2.4.4",
        "https://www.w3.org/WAI/WCAG21/Understanding/link-purpose-in-context.html",
        "Link Purpose (In Context)",
    ),
    criterion(
        "wcag245",
        "WCAG 2.4.5",
        "https://www.w3.org/WAI/WCAG21/Understanding/multiple-ways.html",
        "Multiple Ways",
    ),
    criterion(
        "wcag246",
        "WCAG 2.4.6",
        "https://www.w3.org/WAI/WCAG21/Understanding/headings-and-labels.html",
        "Headings and Labels",
    ),
    criterion(
        "wcag247",
        "WCAG 2.4.7",
        "https://www.w3.org/WAI/WCAG21/Understanding/focus-visible.html",
        "Focus Visible",
    ),
    criterion(
        "wcag251",
        "WCAG 2.5.1",
        "https://www.w3.org/WAI/WCAG21/Understanding/pointer-gestures.html",
        "Pointer Gestures",
    ),
    criterion(
        "wcag252",
        "WCAG 2.5.2",
        "https://www.w3.org/WAI/WCAG21/Understanding/pointer-cancellation.html",
        "Pointer Cancellation",
    ),
    criterion(
        "wcag253",
        "WCAG 2.5.3",
        "https://www.w3.org/WAI/WCAG21/Understanding/label-in-name.html",
        "Label in Name",
    ),
    criterion(
        "wcag254",
        "WCAG 2.5.4",
        "https://www.w3.org/WAI/WCAG21/Understanding/motion-actuation.html",
        "Motion Actuation",
    ),
    criterion(
        "wcag311",
        "WCAG 3.1.1",
        "https://www.w3.org/WAI/WCAG21/Understanding/language-of-page.html",
        "Language of Page",
    ),
    criterion(
        "wcag312",
        "WCAG 3.1.2",
        "https://www.w3.org/WAI/WCAG21/Understanding/language-of-parts.html",
        "Language of Parts",
    ),
    criterion(
        "wcag321",
        "WCAG 3.2.1",
        "https://www.w3.org/WAI/WCAG21/Understanding/on-focus.html",
        "On Focus",
    ),
    criterion(
        "wcag322",
        "WCAG 3.2.2",
        "https://www.w3.org/WAI/WCAG21/Understanding/on-input.html",
        "On Input",
    ),
    criterion(
        "wcag323",
        "WCAG 3.2.3",
        "https://www.w3.org/WAI/WCAG21/Understanding/consistent-navigation.html",
        "Consistent Navigation",
    ),
    criterion(
        "wcag324",
        "WCAG 3.2.4",
        "https://www.w3.org/WAI/WCAG21/Understanding/consistent-identification.html",
        "Consistent Identification",
    ),
    criterion(
        "wcag331",
        "WCAG 3.3.1",
        "https://www.w3.org/WAI/WCAG21/Understanding/error-identification.html",
        "Error Identification",
    ),
    criterion(
        "wcag332",
        "WCAG 3.3.2",
        "https://www.w3.org/WAI/WCAG21/Understanding/labels-or-instructions.html",
        "Labels or Instructions",
    ),
    criterion(
        "wcag333",
        "WCAG 3.3.3",
        "https://www.w3.org/WAI/WCAG21/Understanding/error-suggestion.html",
        "Error Suggestion",
    ),
    criterion(
        "wcag334",
        "WCAG 3.3.4",
        "https://www.w3.org/WAI/WCAG21/Understanding/error-prevention-legal-financial-data.html",
        "Error Prevention (Legal, Financial, Data)",
    ),
    criterion(
        "wcag411",
        "WCAG 4.1.1",
        "https://www.w3.org/WAI/WCAG21/Understanding/parsing.html",
        "Parsing",
    ),
    criterion(
        "wcag412",
        "WCAG 4.1.2",
        "https://www.w3.org/WAI/WCAG21/Understanding/name-role-value.html",
        "Name, Role, Value",
    ),
    criterion(
        "wcag413",
        "WCAG 4.1.3",
        "https://www.w3.org/WAI/WCAG21/Understanding/status-messages.html",
        "Status Messages",
    ),
];

pub fn lookup(tag: &str) -> Option<&'static WcagLinkData> {
    WCAG_LINK_DATA.iter().find(|entry| entry.tag == tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_has_unique_tags() {
        let mut seen = HashSet::new();
        for entry in WCAG_LINK_DATA {
            assert!(seen.insert(entry.tag), "duplicate tag {}", entry.tag);
        }
    }

    #[test]
    fn best_practice_has_no_link() {
        let entry = lookup(BEST_PRACTICE_TAG).expect("best-practice should exist");
        assert!(entry.url.is_none());
        assert!(entry.title.is_none());
    }

    #[test]
    fn lookup_returns_criterion_details() {
        let entry = lookup("wcag111").expect("wcag111 should exist");
        assert_eq!(entry.text, "WCAG 1.1.1");
        assert_eq!(entry.title, Some("Non-text Content"));
        assert!(lookup("wcag2aa").is_none());
    }
}
