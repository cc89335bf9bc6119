use common::search_descriptor::SearchDescriptor;
use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::data_definitions::url_param::UrlParam;
use crate::pages::home_page::HomePage;
use crate::pages::record_page::RecordPage;
use crate::pages::search_result_page::SearchResultPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/record/:record_type/:csid")]
    RecordPage { record_type: String, csid: String },


    #[route("/search/:descriptor")]
    SearchResultPage { descriptor: UrlParam<SearchDescriptor> },

}

impl Route {
    /// Full search result page for the search a panel shows.
    pub fn search_location(descriptor: &SearchDescriptor) -> Self {
        Self::SearchResultPage {
            descriptor: UrlParam::from(descriptor.full_search_descriptor()),
        }
    }

    pub fn record_location(record_type: impl Into<String>, csid: impl Into<String>) -> Self {
        Self::RecordPage {
            record_type: record_type.into(),
            csid: csid.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::search_descriptor::SearchQuery;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    fn record_location_path() {
        assert_eq!(Route::record_location("collectionobject", "1234").to_string(), "/record/collectionobject/1234");
    }

    #[rstest]
    fn search_location_normalizes_paging() {
        let descriptor = SearchDescriptor::new("group").with_search_query(SearchQuery {
            p: 4,
            size: Some(5),
            sort: Some("title desc".to_string()),
            rel: Some("1234".to_string()),
            ..Default::default()
        });
        let Route::SearchResultPage { descriptor: encoded } = Route::search_location(&descriptor) else {
            panic!("expected a search result location");
        };
        assert_eq!(encoded.0.search_query.p, 0);
        assert_eq!(encoded.0.search_query.size, None);
        assert_eq!(encoded.0.search_query.sort, descriptor.search_query.sort);
        assert_eq!(encoded.0.search_query.rel, descriptor.search_query.rel);

        let segment = encoded.to_string();
        let decoded = UrlParam::<SearchDescriptor>::from_str(&segment).unwrap();
        assert_eq!(decoded, encoded);
    }
}
