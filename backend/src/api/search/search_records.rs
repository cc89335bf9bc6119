//! Record list searches against the records service.

use common::{search_result::SearchResultList, service_request::ServiceSearchRequest};
use tracing::info;

use crate::service_utils::cspace_client::service_get_json;

pub async fn search_records(request: ServiceSearchRequest) -> anyhow::Result<SearchResultList> {
    info!("searching {} with {:?}", request.path, request.params);
    let payload = service_get_json(&request.path, &request.params).await?;
    let result = SearchResultList::from_payload(&payload, &request.list_node_name, &request.item_node_name)?;
    info!(
        "search of {} found {:?} items, {} in page",
        request.path,
        result.total_items,
        result.row_count()
    );
    Ok(result)
}
