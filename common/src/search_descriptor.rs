//! Search descriptors: immutable values describing what a search slot shows.
//!
//! Descriptors are compared structurally. Two descriptors built separately
//! with the same fields are equal, and every derived descriptor is a new
//! value; nothing here mutates a descriptor that was handed out.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchDescriptor {
    pub record_type: String,
    pub vocabulary: Option<String>,
    pub csid: Option<String>,
    pub subresource: Option<String>,
    pub search_query: SearchQuery,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchQuery {
    /// Page number, 0-based.
    pub p: u64,
    /// Page size. `None` lets the consumer apply its default or preferred size.
    pub size: Option<u64>,
    /// `"column"` or `"column desc"`.
    pub sort: Option<String>,
    /// Csid of a record the results must be related to.
    pub rel: Option<String>,
    /// Free-text keywords.
    pub kw: Option<String>,
    /// Any other field filters, passed through to the service.
    pub filters: BTreeMap<String, String>,
}

impl SearchQuery {
    pub fn is_relation_constrained(&self) -> bool {
        self.rel.as_deref().is_some_and(|rel| !rel.is_empty())
    }
}

impl SearchDescriptor {
    pub fn new(record_type: impl Into<String>) -> Self {
        Self {
            record_type: record_type.into(),
            ..Default::default()
        }
    }

    pub fn with_search_query(&self, search_query: SearchQuery) -> Self {
        Self {
            search_query,
            ..self.clone()
        }
    }

    /// Same search, another page.
    pub fn with_page(&self, page_num: u64) -> Self {
        self.with_search_query(SearchQuery {
            p: page_num,
            ..self.search_query.clone()
        })
    }

    /// Same search with another page size, back on the first page.
    pub fn with_page_size(&self, page_size: u64) -> Self {
        self.with_search_query(SearchQuery {
            p: 0,
            size: Some(page_size),
            ..self.search_query.clone()
        })
    }

    /// Same search and page, sorted differently.
    pub fn with_sort(&self, sort: Option<String>) -> Self {
        self.with_search_query(SearchQuery {
            sort,
            ..self.search_query.clone()
        })
    }

    /// Same search with other keywords, back on the first page.
    pub fn with_keywords(&self, kw: Option<String>) -> Self {
        let kw = kw.filter(|kw| !kw.trim().is_empty());
        self.with_search_query(SearchQuery {
            p: 0,
            kw,
            ..self.search_query.clone()
        })
    }

    /// Descriptor for the full search result page: first page, no page size, so
    /// that the result page applies its own default or preferred size.
    pub fn full_search_descriptor(&self) -> Self {
        self.with_search_query(SearchQuery {
            p: 0,
            size: None,
            ..self.search_query.clone()
        })
    }
}

/// True when a search slot showing `prev` must search again to show `next`.
pub fn should_research(prev: &SearchDescriptor, next: &SearchDescriptor) -> bool {
    prev != next
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn object_descriptor() -> SearchDescriptor {
        SearchDescriptor {
            record_type: "collectionobject".to_string(),
            search_query: SearchQuery {
                p: 2,
                size: Some(20),
                sort: Some("title desc".to_string()),
                rel: Some("1234".to_string()),
                kw: Some("vase".to_string()),
                filters: BTreeMap::from([("as".to_string(), "x".to_string())]),
            },
            ..Default::default()
        }
    }

    #[rstest]
    fn equal_copies_do_not_research() {
        let a = object_descriptor();
        let b = object_descriptor();
        assert!(!should_research(&a, &b));
    }

    #[rstest]
    #[case::page(object_descriptor().with_page(3))]
    #[case::size(object_descriptor().with_search_query(SearchQuery { size: Some(40), ..object_descriptor().search_query }))]
    #[case::sort(object_descriptor().with_sort(Some("title".to_string())))]
    #[case::rel(object_descriptor().with_search_query(SearchQuery { rel: None, ..object_descriptor().search_query }))]
    #[case::record_type(SearchDescriptor { record_type: "group".to_string(), ..object_descriptor() })]
    #[case::vocabulary(SearchDescriptor { vocabulary: Some("local".to_string()), ..object_descriptor() })]
    fn any_field_change_researches(#[case] changed: SearchDescriptor) {
        assert!(should_research(&object_descriptor(), &changed));
    }

    #[rstest]
    #[case(0)]
    #[case(7)]
    fn page_size_change_resets_page(#[case] page: u64) {
        let descriptor = object_descriptor().with_page(page).with_page_size(10);
        assert_eq!(descriptor.search_query.p, 0);
        assert_eq!(descriptor.search_query.size, Some(10));
        assert_eq!(descriptor.search_query.sort, object_descriptor().search_query.sort);
    }

    #[rstest]
    fn sort_change_keeps_page() {
        let descriptor = object_descriptor().with_sort(Some("objectNumber".to_string()));
        assert_eq!(descriptor.search_query.p, 2);
        assert_eq!(descriptor.search_query.sort.as_deref(), Some("objectNumber"));
    }

    #[rstest]
    fn derived_descriptors_leave_the_source_alone() {
        let original = object_descriptor();
        let _ = original.with_page(9);
        let _ = original.with_page_size(100);
        assert_eq!(original, object_descriptor());
    }

    #[rstest]
    fn full_search_descriptor_resets_page_and_drops_size() {
        let full = object_descriptor().full_search_descriptor();
        assert_eq!(full.search_query.p, 0);
        assert_eq!(full.search_query.size, None);

        let expected = SearchDescriptor {
            search_query: SearchQuery {
                p: 0,
                size: None,
                ..object_descriptor().search_query
            },
            ..object_descriptor()
        };
        assert_eq!(full, expected);
    }

    #[rstest]
    fn blank_keywords_are_dropped() {
        let descriptor = object_descriptor().with_keywords(Some("  ".to_string()));
        assert_eq!(descriptor.search_query.kw, None);
        assert_eq!(descriptor.search_query.p, 0);
    }

    #[rstest]
    #[case(None, false)]
    #[case(Some(""), false)]
    #[case(Some("1234"), true)]
    fn relation_constraint(#[case] rel: Option<&str>, #[case] expected: bool) {
        let query = SearchQuery {
            rel: rel.map(str::to_string),
            ..Default::default()
        };
        assert_eq!(query.is_relation_constrained(), expected);
    }
}
