//! Page sizes the user picked, remembered per record type and search panel.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UserPrefs {
    /// Keyed by record type, then panel name.
    search_panel_page_sizes: BTreeMap<String, BTreeMap<String, u64>>,
    search_result_page_page_size: Option<u64>,
}

impl UserPrefs {
    pub fn set_search_panel_page_size(&mut self, record_type: &str, name: &str, page_size: u64) {
        self.search_panel_page_sizes
            .entry(record_type.to_string())
            .or_default()
            .insert(name.to_string(), page_size);
    }

    /// The size picked for a panel, if the user ever picked one.
    pub fn search_panel_page_size(&self, record_type: &str, name: &str) -> Option<u64> {
        self.search_panel_page_sizes
            .get(record_type)
            .and_then(|panels| panels.get(name))
            .copied()
    }

    pub fn set_search_result_page_page_size(&mut self, page_size: u64) {
        self.search_result_page_page_size = Some(page_size);
    }

    pub fn search_result_page_page_size(&self) -> Option<u64> {
        self.search_result_page_page_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn sizes_are_kept_per_record_type_and_panel() {
        let mut prefs = UserPrefs::default();
        assert_eq!(prefs.search_panel_page_size("group", "related"), None);

        prefs.set_search_panel_page_size("group", "related", 40);
        assert_eq!(prefs.search_panel_page_size("group", "related"), Some(40));
        assert_eq!(prefs.search_panel_page_size("group", "other"), None);
        assert_eq!(prefs.search_panel_page_size("media", "related"), None);

        prefs.set_search_panel_page_size("group", "related", 10);
        assert_eq!(prefs.search_panel_page_size("group", "related"), Some(10));
    }

    #[rstest]
    fn result_page_size_is_separate_from_panels() {
        let mut prefs = UserPrefs::default();
        prefs.set_search_panel_page_size("group", "related", 40);
        assert_eq!(prefs.search_result_page_page_size(), None);
        prefs.set_search_result_page_page_size(100);
        assert_eq!(prefs.search_result_page_page_size(), Some(100));
        assert_eq!(prefs.search_panel_page_size("group", "related"), Some(40));
    }
}
