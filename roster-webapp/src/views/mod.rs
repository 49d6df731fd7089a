pub mod contact_form;
pub mod results;

/// Which result-presentation variant this instance runs. Exactly one is
/// active for the lifetime of the app; the variants do not compose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PresentationMode {
    ReadOnly,
    DraftEdit,
    InlineEdit,
}

impl PresentationMode {
    /// Selected once at startup from the location query, e.g. `?mode=inline`.
    pub fn from_search(search: &str) -> PresentationMode {
        let trimmed = search.trim_start_matches('?');

        for pair in trimmed.split('&') {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or("");
            let value = parts.next().unwrap_or("");

            if key == "mode" {
                return match value {
                    "draft" => PresentationMode::DraftEdit,
                    "inline" => PresentationMode::InlineEdit,
                    _ => PresentationMode::ReadOnly,
                };
            }
        }

        PresentationMode::ReadOnly
    }
}

#[cfg(test)]
mod mode_tests {
    use super::*;

    #[test]
    fn defaults_to_read_only() {
        assert_eq!(PresentationMode::ReadOnly, PresentationMode::from_search(""));
        assert_eq!(PresentationMode::ReadOnly, PresentationMode::from_search("?foo=bar"));
        assert_eq!(PresentationMode::ReadOnly, PresentationMode::from_search("?mode=bogus"));
    }

    #[test]
    fn recognises_the_edit_variants() {
        assert_eq!(PresentationMode::DraftEdit, PresentationMode::from_search("?mode=draft"));
        assert_eq!(PresentationMode::InlineEdit, PresentationMode::from_search("?mode=inline"));
        assert_eq!(
            PresentationMode::InlineEdit,
            PresentationMode::from_search("?foo=bar&mode=inline")
        );
    }
}
