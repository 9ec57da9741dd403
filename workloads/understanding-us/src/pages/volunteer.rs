//! Volunteer role tabs.

use shell_sdk::prelude::*;

use crate::config::TabSettings;

/// Tab buttons found when the volunteer view rendered, keyed by the tab they open.
#[derive(Debug, Clone)]
pub struct VolunteerTabs<E> {
    settings: TabSettings,
    buttons: Vec<(String, E)>,
}

impl<E: Clone> VolunteerTabs<E> {
    /// Collect the tab buttons in the current document.
    pub fn bind<D: Document<Element = E>>(document: &D, settings: &TabSettings) -> Self {
        let buttons = document
            .elements_by_class(&settings.button_class)
            .into_iter()
            .filter_map(|button| {
                let tab = document.attribute(&button, &settings.tab_attribute)?;
                Some((tab, button))
            })
            .collect();
        Self {
            settings: settings.clone(),
            buttons,
        }
    }

    /// Tab ids with a bound button, in document order.
    pub fn tabs(&self) -> Vec<&str> {
        self.buttons.iter().map(|(tab, _)| tab.as_str()).collect()
    }

    /// Show one tab panel and highlight its button.
    ///
    /// All panels and buttons are deactivated first. The highlighted button is
    /// `trigger` when given, otherwise the bound button for `tab`. Returns
    /// whether a panel for `tab` exists.
    pub fn switch<D: Document<Element = E>>(
        &self,
        document: &D,
        tab: &str,
        trigger: Option<&E>,
    ) -> bool {
        let active = &self.settings.active_class;

        for panel in document.elements_by_class(&self.settings.panel_class) {
            document.remove_class(&panel, active);
        }
        let panel_id = format!("{}{}", self.settings.panel_prefix, tab);
        let panel = document.element_by_id(&panel_id);
        if let Some(panel) = &panel {
            document.add_class(panel, active);
        }

        for button in document.elements_by_class(&self.settings.button_class) {
            document.remove_class(&button, active);
        }
        let button = trigger.or_else(|| {
            self.buttons
                .iter()
                .find(|(bound, _)| bound == tab)
                .map(|(_, button)| button)
        });
        if let Some(button) = button {
            document.add_class(button, active);
        }

        panel.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <button class="pill-btn active" data-tab="events">Events</button>
        <button class="pill-btn" data-tab="mentors">Mentors</button>
        <button class="pill-btn" data-tab="remote">Remote</button>
        <div id="tab-events" class="tab-content active"></div>
        <div id="tab-mentors" class="tab-content"></div>
    "#;

    fn active_ids(document: &MemoryDocument) -> Vec<String> {
        document
            .elements_by_class("tab-content")
            .iter()
            .filter(|p| document.has_class(p, "active"))
            .filter_map(|p| document.attribute(p, "id"))
            .collect()
    }

    fn active_tabs(document: &MemoryDocument) -> Vec<String> {
        document
            .elements_by_class("pill-btn")
            .iter()
            .filter(|b| document.has_class(b, "active"))
            .filter_map(|b| document.attribute(b, "data-tab"))
            .collect()
    }

    #[test]
    fn test_bind_maps_buttons() {
        let document = MemoryDocument::with_body(PAGE);
        let tabs = VolunteerTabs::bind(&document, &TabSettings::default());
        assert_eq!(tabs.tabs(), vec!["events", "mentors", "remote"]);
    }

    #[test]
    fn test_switch_activates_panel_and_button() {
        let document = MemoryDocument::with_body(PAGE);
        let tabs = VolunteerTabs::bind(&document, &TabSettings::default());

        assert!(tabs.switch(&document, "mentors", None));

        assert_eq!(active_ids(&document), vec!["tab-mentors"]);
        assert_eq!(active_tabs(&document), vec!["mentors"]);
    }

    #[test]
    fn test_switch_prefers_trigger() {
        let document = MemoryDocument::with_body(PAGE);
        let tabs = VolunteerTabs::bind(&document, &TabSettings::default());
        let remote = document.elements_by_class("pill-btn")[2];

        tabs.switch(&document, "mentors", Some(&remote));

        assert_eq!(active_tabs(&document), vec!["remote"]);
    }

    #[test]
    fn test_switch_to_missing_panel_leaves_none_active() {
        let document = MemoryDocument::with_body(PAGE);
        let tabs = VolunteerTabs::bind(&document, &TabSettings::default());

        assert!(!tabs.switch(&document, "remote", None));

        assert!(active_ids(&document).is_empty());
        assert_eq!(active_tabs(&document), vec!["remote"]);
    }

    #[test]
    fn test_unknown_tab_without_trigger() {
        let document = MemoryDocument::with_body(PAGE);
        let tabs = VolunteerTabs::bind(&document, &TabSettings::default());

        assert!(!tabs.switch(&document, "board", None));

        assert!(active_ids(&document).is_empty());
        assert!(active_tabs(&document).is_empty());
    }
}
