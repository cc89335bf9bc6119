//! Translation of a search descriptor into a request against the records service.

use serde::{Deserialize, Serialize};

use crate::app_config::AppConfig;
use crate::errors::SearchError;
use crate::result_table_layout::{SortDirection, SortSpec, is_sortable};
use crate::search_const::DEFAULT_PAGE_SIZE;
use crate::search_descriptor::SearchDescriptor;

/// A fully resolved list request: service path, query parameters, and where
/// the list lives in the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSearchRequest {
    pub path: String,
    pub params: Vec<(String, String)>,
    pub list_node_name: String,
    pub item_node_name: String,
}

impl ServiceSearchRequest {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

pub fn build_service_search_request(
    config: &AppConfig,
    descriptor: &SearchDescriptor,
    list_type: &str,
    column_set_name: &str,
) -> Result<ServiceSearchRequest, SearchError> {
    let record_type = config.record_type(&descriptor.record_type).ok_or_else(|| {
        SearchError::ConfigResolution(format!("record type {}", descriptor.record_type))
    })?;
    let service_path = record_type.service_config.service_path.as_deref().ok_or_else(|| {
        SearchError::ConfigResolution(format!("service path of {}", descriptor.record_type))
    })?;
    let list_type_config = config
        .list_type(list_type)
        .ok_or_else(|| SearchError::ConfigResolution(format!("list type {list_type}")))?;

    let mut path = format!("/{}", service_path.trim_matches('/'));
    if let Some(vocabulary) = descriptor.vocabulary.as_deref() {
        path.push_str(&format!("/urn:cspace:name({vocabulary})/items"));
    }
    if let Some(subresource) = descriptor.subresource.as_deref() {
        let subresource_path = config
            .subresources
            .get(subresource)
            .and_then(|subresource| subresource.service_config.service_path.as_deref())
            .ok_or_else(|| SearchError::ConfigResolution(format!("subresource {subresource}")))?;
        let csid = descriptor.csid.as_deref().ok_or_else(|| {
            SearchError::ConfigResolution(format!("csid for subresource {subresource}"))
        })?;
        path.push_str(&format!("/{csid}/{}", subresource_path.trim_matches('/')));
    }

    let query = &descriptor.search_query;
    let mut params = vec![
        ("pgNum".to_string(), query.p.to_string()),
        ("pgSz".to_string(), query.size.unwrap_or(DEFAULT_PAGE_SIZE).to_string()),
        ("wf_deleted".to_string(), "false".to_string()),
    ];
    if let Some(kw) = query.kw.as_deref().filter(|kw| !kw.is_empty()) {
        params.push(("kw".to_string(), kw.to_string()));
    }
    if query.is_relation_constrained() {
        if let Some(rel) = query.rel.as_deref() {
            params.push(("rtSbj".to_string(), rel.to_string()));
        }
    }
    if let Some(sort_by) = sort_param(config, descriptor, column_set_name) {
        params.push(("sortBy".to_string(), sort_by));
    }
    for (name, value) in &query.filters {
        params.push((name.clone(), value.clone()));
    }

    Ok(ServiceSearchRequest {
        path,
        params,
        list_node_name: list_type_config.list_node_name.clone(),
        item_node_name: list_type_config.item_node_name.clone(),
    })
}

/// Service sort parameter for the descriptor's sort column, if that column
/// exists in the column set and may be sorted in this search.
fn sort_param(config: &AppConfig, descriptor: &SearchDescriptor, column_set_name: &str) -> Option<String> {
    let spec = SortSpec::parse(descriptor.search_query.sort.as_deref()?)?;
    let column = config
        .columns(&descriptor.record_type, column_set_name)?
        .iter()
        .find(|column| column.name == spec.column)
        .filter(|column| is_sortable(column, descriptor))?;
    let sort_by = column.sort_by.as_deref()?;
    Some(match spec.direction {
        SortDirection::Asc => sort_by.to_string(),
        SortDirection::Desc => format!("{sort_by} DESC"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search_descriptor::SearchQuery;
    use rstest::rstest;

    fn config() -> AppConfig {
        AppConfig::bundled().unwrap()
    }

    #[rstest]
    fn builds_a_paged_request() {
        let descriptor = SearchDescriptor::new("collectionobject").with_search_query(SearchQuery {
            p: 2,
            size: Some(40),
            kw: Some("vase".to_string()),
            ..Default::default()
        });
        let request = build_service_search_request(&config(), &descriptor, "common", "default").unwrap();
        assert_eq!(request.path, "/collectionobjects");
        assert_eq!(request.param("pgNum"), Some("2"));
        assert_eq!(request.param("pgSz"), Some("40"));
        assert_eq!(request.param("kw"), Some("vase"));
        assert_eq!(request.param("wf_deleted"), Some("false"));
        assert_eq!(request.param("rtSbj"), None);
        assert_eq!(request.list_node_name, "ns2:abstract-common-list");
        assert_eq!(request.item_node_name, "list-item");
    }

    #[rstest]
    fn missing_size_uses_default_page_size() {
        let descriptor = SearchDescriptor::new("group");
        let request = build_service_search_request(&config(), &descriptor, "common", "default").unwrap();
        assert_eq!(request.param("pgSz"), Some("20"));
    }

    #[rstest]
    #[case(Some("objectNumber"), None, Some("collectionobjects_common:objectNumber"))]
    #[case(Some("objectNumber desc"), None, Some("collectionobjects_common:objectNumber DESC"))]
    #[case(Some("title"), None, Some("collectionobjects_common:titleGroupList/0/title"))]
    #[case(Some("title"), Some("1234"), None)]
    #[case(Some("nope"), None, None)]
    #[case(None, None, None)]
    fn maps_sort_to_service_path(
        #[case] sort: Option<&str>,
        #[case] rel: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let descriptor = SearchDescriptor::new("collectionobject").with_search_query(SearchQuery {
            sort: sort.map(str::to_string),
            rel: rel.map(str::to_string),
            ..Default::default()
        });
        let request = build_service_search_request(&config(), &descriptor, "common", "default").unwrap();
        assert_eq!(request.param("sortBy"), expected);
    }

    #[rstest]
    fn relation_filter_is_sent_as_subject() {
        let descriptor = SearchDescriptor::new("collectionobject").with_search_query(SearchQuery {
            rel: Some("1234".to_string()),
            ..Default::default()
        });
        let request = build_service_search_request(&config(), &descriptor, "common", "default").unwrap();
        assert_eq!(request.param("rtSbj"), Some("1234"));
    }

    #[rstest]
    fn vocabulary_and_subresource_extend_the_path() {
        let vocabulary = SearchDescriptor {
            vocabulary: Some("local".to_string()),
            ..SearchDescriptor::new("person")
        };
        let request = build_service_search_request(&config(), &vocabulary, "common", "default").unwrap();
        assert_eq!(request.path, "/personauthorities/urn:cspace:name(local)/items");

        let terms = SearchDescriptor {
            csid: Some("abcd".to_string()),
            subresource: Some("terms".to_string()),
            ..SearchDescriptor::new("collectionobject")
        };
        let request = build_service_search_request(&config(), &terms, "authRef", "default").unwrap();
        assert_eq!(request.path, "/collectionobjects/abcd/authorityrefs");
        assert_eq!(request.list_node_name, "ns3:authority-ref-list");
    }

    #[rstest]
    fn filters_pass_through() {
        let descriptor = SearchDescriptor::new("group").with_search_query(SearchQuery {
            filters: [("as".to_string(), "owner = 'x'".to_string())].into(),
            ..Default::default()
        });
        let request = build_service_search_request(&config(), &descriptor, "common", "default").unwrap();
        assert_eq!(request.param("as"), Some("owner = 'x'"));
    }

    #[rstest]
    #[case::record_type(SearchDescriptor::new("nope"), "common")]
    #[case::list_type(SearchDescriptor::new("group"), "nope")]
    #[case::subresource_without_csid(SearchDescriptor { subresource: Some("terms".to_string()), ..SearchDescriptor::new("group") }, "common")]
    fn unresolvable_configuration(#[case] descriptor: SearchDescriptor, #[case] list_type: &str) {
        let err = build_service_search_request(&config(), &descriptor, list_type, "default").unwrap_err();
        assert!(matches!(err, SearchError::ConfigResolution(_)));
    }
}
