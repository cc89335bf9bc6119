//! Client API calls for search endpoints.

use common::{search_result::SearchResultList, service_request::ServiceSearchRequest};
use dioxus::prelude::*;

#[server]
pub async fn search_records(request: ServiceSearchRequest) -> Result<SearchResultList, ServerFnError> {
    let x = backend::api::search::search_records(request).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
