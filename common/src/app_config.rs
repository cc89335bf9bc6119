//! Record-type configuration: fields the search views read to build columns,
//! resolve list nodes, and classify record types.
//!
//! The configuration is supplied from outside and may omit optional keys, so
//! every lookup here returns an `Option` instead of failing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::search_const::{DEFAULT_ITEM_NODE_NAME, DEFAULT_LIST_NODE_NAME};

const BUNDLED_CONFIG_JSON: &str = include_str!("default_config.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub record_types: BTreeMap<String, RecordTypeConfig>,
    pub list_types: BTreeMap<String, ListTypeConfig>,
    pub option_lists: BTreeMap<String, Vec<u64>>,
    pub subresources: BTreeMap<String, SubresourceConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct RecordTypeConfig {
    pub name: String,
    pub service_config: ServiceConfig,
    pub messages: RecordTypeMessages,
    pub columns: BTreeMap<String, Vec<ColumnConfig>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceConfig {
    pub service_type: Option<String>,
    pub object_name: Option<String>,
    pub service_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct RecordTypeMessages {
    pub name: Option<String>,
    pub collection_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnConfig {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub width: u32,
    /// Service-side path used to sort by this column. Columns without one are not sortable.
    #[serde(default)]
    pub sort_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTypeConfig {
    #[serde(default = "default_list_node_name")]
    pub list_node_name: String,
    #[serde(default = "default_item_node_name")]
    pub item_node_name: String,
}

impl Default for ListTypeConfig {
    fn default() -> Self {
        Self {
            list_node_name: default_list_node_name(),
            item_node_name: default_item_node_name(),
        }
    }
}

fn default_list_node_name() -> String {
    DEFAULT_LIST_NODE_NAME.to_string()
}

fn default_item_node_name() -> String {
    DEFAULT_ITEM_NODE_NAME.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct SubresourceConfig {
    pub service_config: ServiceConfig,
}

impl AppConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let mut config: AppConfig = serde_json::from_str(json)?;
        // record type entries are keyed by name; fill in names the document left out
        for (name, record_type) in config.record_types.iter_mut() {
            if record_type.name.is_empty() {
                record_type.name = name.clone();
            }
        }
        Ok(config)
    }

    /// Configuration shipped with the application.
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_json_str(BUNDLED_CONFIG_JSON)
    }

    pub fn record_type(&self, name: &str) -> Option<&RecordTypeConfig> {
        self.record_types.get(name)
    }

    pub fn list_type(&self, name: &str) -> Option<&ListTypeConfig> {
        self.list_types.get(name)
    }

    pub fn columns(&self, record_type: &str, column_set_name: &str) -> Option<&[ColumnConfig]> {
        self.record_type(record_type)?
            .columns
            .get(column_set_name)
            .map(|columns| columns.as_slice())
    }

    pub fn service_type(&self, record_type: &str) -> Option<&str> {
        self.record_type(record_type)?.service_config.service_type.as_deref()
    }

    pub fn option_list(&self, name: &str) -> Option<&[u64]> {
        self.option_lists.get(name).map(|options| options.as_slice())
    }

    /// Finds the record type whose service object name matches a list item's `docType`.
    pub fn record_type_by_service_object_name(&self, object_name: &str) -> Option<&RecordTypeConfig> {
        self.record_types
            .values()
            .find(|record_type| record_type.service_config.object_name.as_deref() == Some(object_name))
    }
}

impl RecordTypeConfig {
    /// Display name of a collection of records of this type.
    pub fn collection_name(&self) -> String {
        self.messages
            .collection_name
            .clone()
            .or_else(|| self.messages.name.clone())
            .unwrap_or_else(|| self.name.clone())
    }
}

impl ColumnConfig {
    pub fn display_label(&self) -> String {
        self.label.clone().unwrap_or_else(|| self.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn bundled_config_parses() {
        let config = AppConfig::bundled().unwrap();
        assert!(config.record_type("collectionobject").is_some());
        assert_eq!(
            config.list_type("common").unwrap().list_node_name,
            "ns2:abstract-common-list"
        );
        assert!(config.option_list("searchPanelPageSizes").is_some());
    }

    #[rstest]
    fn record_type_names_are_filled_from_keys() {
        let config = AppConfig::from_json_str(r#"{"recordTypes": {"group": {}}}"#).unwrap();
        assert_eq!(config.record_type("group").unwrap().name, "group");
    }

    #[rstest]
    fn missing_keys_resolve_to_none() {
        let config = AppConfig::from_json_str(r#"{"recordTypes": {"group": {}}}"#).unwrap();
        assert!(config.columns("group", "default").is_none());
        assert!(config.columns("nope", "default").is_none());
        assert!(config.service_type("group").is_none());
        assert!(config.list_type("common").is_none());
    }

    #[rstest]
    fn list_type_node_names_default() {
        let config = AppConfig::from_json_str(r#"{"listTypes": {"common": {}}}"#).unwrap();
        let list_type = config.list_type("common").unwrap();
        assert_eq!(list_type.list_node_name, DEFAULT_LIST_NODE_NAME);
        assert_eq!(list_type.item_node_name, DEFAULT_ITEM_NODE_NAME);
    }

    #[rstest]
    fn finds_record_type_by_object_name() {
        let config = AppConfig::bundled().unwrap();
        let record_type = config.record_type_by_service_object_name("CollectionObject").unwrap();
        assert_eq!(record_type.name, "collectionobject");
        assert!(config.record_type_by_service_object_name("Unknown").is_none());
    }

    #[rstest]
    fn invalid_json_is_an_error() {
        assert!(matches!(AppConfig::from_json_str("{"), Err(ConfigError::Parse(_))));
    }
}
