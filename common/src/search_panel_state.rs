//! Decisions of a search panel: when to search, how user events turn into new
//! descriptors, what the header says, and how the relate modal is set up.
//!
//! The panel never stores the descriptor it shows. Its owner holds it, and
//! every change the panel wants travels back as
//! [`PanelEffect::NotifyDescriptorChange`].

use num_format::{Locale, ToFormattedString};

use crate::app_config::AppConfig;
use crate::errors::SearchError;
use crate::search_const::{DEFAULT_SEARCH_PANEL_PAGE_SIZE, UTILITY_SERVICE_TYPE};
use crate::search_descriptor::{SearchDescriptor, should_research};
use crate::search_result::SearchResultList;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchPanelEvent {
    PageChanged(u64),
    PageSizeChanged(u64),
    SortChanged(String),
    DescriptorChanged(SearchDescriptor),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelEffect {
    IssueSearch(SearchDescriptor),
    NotifyDescriptorChange(SearchDescriptor),
    PersistPageSize(u64),
}

impl SearchPanelEvent {
    /// Descriptor the owner should adopt after this event.
    pub fn next_descriptor(&self, current: &SearchDescriptor) -> SearchDescriptor {
        match self {
            SearchPanelEvent::PageChanged(page_num) => current.with_page(*page_num),
            SearchPanelEvent::PageSizeChanged(page_size) => current.with_page_size(*page_size),
            SearchPanelEvent::SortChanged(sort) => {
                current.with_sort(Some(sort.clone()).filter(|sort| !sort.is_empty()))
            }
            SearchPanelEvent::DescriptorChanged(descriptor) => descriptor.clone(),
        }
    }
}

/// Effects of a user event. Searching is left to the update that follows
/// once the owner passes the new descriptor back.
pub fn handle_panel_event(current: &SearchDescriptor, event: &SearchPanelEvent) -> Vec<PanelEffect> {
    let mut effects = Vec::new();
    if let SearchPanelEvent::PageSizeChanged(page_size) = event {
        effects.push(PanelEffect::PersistPageSize(*page_size));
    }
    effects.push(PanelEffect::NotifyDescriptorChange(event.next_descriptor(current)));
    effects
}

/// Tracks the descriptor a panel last searched with.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchPanelLifecycle {
    last_descriptor: Option<SearchDescriptor>,
}

impl SearchPanelLifecycle {
    /// Called on mount and on every update. Searches on mount, and again only
    /// when the descriptor is structurally different from the last one.
    pub fn observe(&mut self, descriptor: &SearchDescriptor) -> Vec<PanelEffect> {
        let changed = match &self.last_descriptor {
            None => true,
            Some(last) => should_research(last, descriptor),
        };
        if !changed {
            return Vec::new();
        }

        self.last_descriptor = Some(descriptor.clone());
        vec![
            PanelEffect::IssueSearch(descriptor.clone()),
            PanelEffect::NotifyDescriptorChange(descriptor.clone()),
        ]
    }
}

/// Panel header text. The count is shown once it is known.
pub fn panel_title(title: &str, total_items: Option<u64>, is_filtered: bool) -> String {
    match total_items {
        None => title.to_string(),
        Some(total_items) if is_filtered => {
            format!("{title}: {} (filtered)", total_items.to_formatted_string(&Locale::en))
        }
        Some(total_items) => format!("{title}: {}", total_items.to_formatted_string(&Locale::en)),
    }
}

/// Page size the footer pages by: the one the service answered with, then
/// the requested one.
pub fn footer_page_size(result: &SearchResultList, descriptor: &SearchDescriptor) -> u64 {
    result
        .page_size
        .or(descriptor.search_query.size)
        .unwrap_or(DEFAULT_SEARCH_PANEL_PAGE_SIZE)
}

/// Footer text for a failed search. Configuration failures are not shown.
pub fn footer_error_message(error: &SearchError) -> Option<String> {
    match error {
        SearchError::ConfigResolution(message) => {
            tracing::warn!("search panel: configuration error: {message}");
            None
        }
        error => Some(error.to_string()),
    }
}

/// Record that newly picked records get related to.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationSubject {
    pub csid: Option<String>,
    pub record_type: String,
}

pub fn relation_subject(descriptor: &SearchDescriptor, record_type: &str) -> RelationSubject {
    RelationSubject {
        csid: descriptor.search_query.rel.clone(),
        record_type: record_type.to_string(),
    }
}

/// Record types the relate modal may search. Utility record types may only be
/// related to their own type; anything else is unrestricted (`None`).
pub fn allowed_relation_target_types(config: &AppConfig, descriptor: &SearchDescriptor) -> Option<Vec<String>> {
    match config.service_type(&descriptor.record_type) {
        Some(UTILITY_SERVICE_TYPE) => Some(vec![descriptor.record_type.clone()]),
        _ => None,
    }
}

/// A record picked in the relate modal.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationTarget {
    pub csid: String,
    pub record_type: String,
}

/// What the relate modal hands back: the subjects and the records picked for them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RelateSelection {
    pub subjects: Vec<RelationSubject>,
    pub targets: Vec<RelationTarget>,
}

impl RelateSelection {
    /// Adds the target, or removes it if it was already picked.
    pub fn toggle_target(&mut self, target: RelationTarget) {
        if let Some(index) = self.targets.iter().position(|picked| *picked == target) {
            self.targets.remove(index);
        } else {
            self.targets.push(target);
        }
    }

    pub fn is_picked(&self, csid: &str) -> bool {
        self.targets.iter().any(|target| target.csid == csid)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelateModalEvent {
    AddButtonClicked,
    CancelButtonClicked,
    CloseButtonClicked,
    RelationsCreated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RelateModalState {
    pub is_open: bool,
}

impl RelateModalState {
    /// Applies a modal event. Returns true when the owner should refresh the
    /// search, i.e. after relations were created.
    pub fn apply(&mut self, event: RelateModalEvent) -> bool {
        match event {
            RelateModalEvent::AddButtonClicked => {
                self.is_open = true;
                false
            }
            RelateModalEvent::CancelButtonClicked | RelateModalEvent::CloseButtonClicked => {
                self.is_open = false;
                false
            }
            RelateModalEvent::RelationsCreated => {
                self.is_open = false;
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search_descriptor::SearchQuery;
    use rstest::rstest;

    fn descriptor() -> SearchDescriptor {
        SearchDescriptor::new("collectionobject").with_search_query(SearchQuery {
            p: 2,
            size: Some(20),
            sort: Some("title".to_string()),
            rel: Some("1234".to_string()),
            ..Default::default()
        })
    }

    fn searches(effects: &[PanelEffect]) -> usize {
        effects
            .iter()
            .filter(|effect| matches!(effect, PanelEffect::IssueSearch(_)))
            .count()
    }

    #[rstest]
    fn mount_searches_and_notifies() {
        let mut lifecycle = SearchPanelLifecycle::default();
        let effects = lifecycle.observe(&descriptor());
        assert_eq!(
            effects,
            vec![
                PanelEffect::IssueSearch(descriptor()),
                PanelEffect::NotifyDescriptorChange(descriptor()),
            ]
        );
    }

    #[rstest]
    fn equal_copy_does_not_search_again() {
        let mut lifecycle = SearchPanelLifecycle::default();
        lifecycle.observe(&descriptor());
        let copy = descriptor();
        assert!(lifecycle.observe(&copy).is_empty());
        assert!(lifecycle.observe(&copy.clone()).is_empty());
    }

    #[rstest]
    #[case::page(SearchPanelEvent::PageChanged(3))]
    #[case::size(SearchPanelEvent::PageSizeChanged(40))]
    #[case::sort(SearchPanelEvent::SortChanged("title desc".to_string()))]
    #[case::rel(SearchPanelEvent::DescriptorChanged(descriptor().with_search_query(SearchQuery { rel: Some("5678".to_string()), ..descriptor().search_query })))]
    #[case::record_type(SearchPanelEvent::DescriptorChanged(SearchDescriptor { record_type: "group".to_string(), ..descriptor() }))]
    fn each_semantic_change_searches_exactly_once(#[case] event: SearchPanelEvent) {
        let mut lifecycle = SearchPanelLifecycle::default();
        lifecycle.observe(&descriptor());

        let next = event.next_descriptor(&descriptor());
        assert_eq!(searches(&lifecycle.observe(&next)), 1);
        assert_eq!(searches(&lifecycle.observe(&next.clone())), 0);
    }

    #[rstest]
    fn page_change_notifies_without_searching() {
        let effects = handle_panel_event(&descriptor(), &SearchPanelEvent::PageChanged(5));
        assert_eq!(effects, vec![PanelEffect::NotifyDescriptorChange(descriptor().with_page(5))]);
    }

    #[rstest]
    fn page_size_change_persists_and_resets_page() {
        let effects = handle_panel_event(&descriptor(), &SearchPanelEvent::PageSizeChanged(10));
        assert_eq!(effects[0], PanelEffect::PersistPageSize(10));
        let PanelEffect::NotifyDescriptorChange(next) = &effects[1] else {
            panic!("expected a descriptor change");
        };
        assert_eq!(next.search_query.p, 0);
        assert_eq!(next.search_query.size, Some(10));
        assert_eq!(next.search_query.rel, descriptor().search_query.rel);
    }

    #[rstest]
    fn sort_change_keeps_page() {
        let next = SearchPanelEvent::SortChanged("objectNumber desc".to_string()).next_descriptor(&descriptor());
        assert_eq!(next.search_query.p, 2);
        assert_eq!(next.search_query.sort.as_deref(), Some("objectNumber desc"));
    }

    #[rstest]
    #[case(None, false, "Objects")]
    #[case(Some(0), false, "Objects: 0")]
    #[case(Some(45), false, "Objects: 45")]
    #[case(Some(1234567), false, "Objects: 1,234,567")]
    #[case(Some(1000), true, "Objects: 1,000 (filtered)")]
    fn titles(#[case] total: Option<u64>, #[case] filtered: bool, #[case] expected: &str) {
        assert_eq!(panel_title("Objects", total, filtered), expected);
    }

    #[rstest]
    #[case(Some(40), Some(20), 40)]
    #[case(None, Some(20), 20)]
    #[case(None, None, DEFAULT_SEARCH_PANEL_PAGE_SIZE)]
    fn footer_pages_by_answered_size(#[case] answered: Option<u64>, #[case] requested: Option<u64>, #[case] expected: u64) {
        let result = SearchResultList {
            total_items: Some(100),
            page_size: answered,
            ..Default::default()
        };
        let descriptor = SearchDescriptor::new("collectionobject").with_search_query(SearchQuery {
            size: requested,
            ..Default::default()
        });
        assert_eq!(footer_page_size(&result, &descriptor), expected);
    }

    #[rstest]
    #[case(SearchError::ConfigResolution("unknown record type: nope".to_string()), false)]
    #[case(SearchError::Transport("connection refused".to_string()), true)]
    #[case(SearchError::Service { status: Some(500), message: "boom".to_string() }, true)]
    fn config_errors_stay_out_of_the_footer(#[case] error: SearchError, #[case] shown: bool) {
        assert_eq!(footer_error_message(&error).is_some(), shown);
    }

    #[rstest]
    fn utility_types_relate_only_to_themselves() {
        let config = AppConfig::bundled().unwrap();
        let vocabulary = SearchDescriptor::new("vocabulary");
        assert_eq!(
            allowed_relation_target_types(&config, &vocabulary),
            Some(vec!["vocabulary".to_string()])
        );
        assert_eq!(allowed_relation_target_types(&config, &descriptor()), None);
        assert_eq!(allowed_relation_target_types(&config, &SearchDescriptor::new("missing")), None);
    }

    #[rstest]
    fn relation_subject_is_the_owning_record() {
        let related = SearchDescriptor::new("collectionobject").with_search_query(SearchQuery {
            rel: Some("G1".to_string()),
            ..Default::default()
        });
        assert_eq!(
            relation_subject(&related, "group"),
            RelationSubject { csid: Some("G1".to_string()), record_type: "group".to_string() }
        );
    }

    #[rstest]
    fn relation_subject_comes_from_rel() {
        let subject = relation_subject(&descriptor(), "group");
        assert_eq!(subject.csid.as_deref(), Some("1234"));
        assert_eq!(subject.record_type, "group");
    }

    #[rstest]
    fn toggling_targets() {
        let target = RelationTarget {
            csid: "a".to_string(),
            record_type: "group".to_string(),
        };
        let mut selection = RelateSelection::default();
        selection.toggle_target(target.clone());
        assert!(selection.is_picked("a"));
        selection.toggle_target(target);
        assert!(!selection.is_picked("a"));
        assert!(selection.targets.is_empty());
    }

    #[rstest]
    fn modal_open_and_close() {
        let mut modal = RelateModalState::default();
        assert!(!modal.apply(RelateModalEvent::AddButtonClicked));
        assert!(modal.is_open);
        assert!(!modal.apply(RelateModalEvent::CancelButtonClicked));
        assert!(!modal.is_open);
        modal.apply(RelateModalEvent::AddButtonClicked);
        assert!(!modal.apply(RelateModalEvent::CloseButtonClicked));
        assert!(!modal.is_open);
        modal.apply(RelateModalEvent::AddButtonClicked);
        assert!(modal.apply(RelateModalEvent::RelationsCreated));
        assert!(!modal.is_open);
    }
}
