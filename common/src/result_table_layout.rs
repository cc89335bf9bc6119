//! Column, sort and sizing policy of the search result table.

use crate::app_config::{AppConfig, ColumnConfig};
use crate::search_const::{REPEATING_ITEM_MARKER, ROW_HEIGHT_PX};
use crate::search_descriptor::SearchDescriptor;
use crate::search_result::{RecordSummary, SearchResultList};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Parsed form of a descriptor sort string, `"column"` or `"column desc"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub column: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn parse(spec: &str) -> Option<Self> {
        let mut parts = spec.split(' ');
        let column = parts.next().filter(|column| !column.is_empty())?;
        let direction = match parts.next() {
            Some("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        };
        Some(Self {
            column: column.to_string(),
            direction,
        })
    }

    pub fn to_spec_string(&self) -> String {
        match self.direction {
            SortDirection::Asc => self.column.clone(),
            SortDirection::Desc => format!("{} desc", self.column),
        }
    }

    /// Sort after a click on the header of `column`: the active column flips
    /// direction, any other column sorts ascending.
    pub fn after_header_click(current: Option<&SortSpec>, column: &str) -> SortSpec {
        let direction = match current {
            Some(current) if current.column == column && current.direction == SortDirection::Asc => {
                SortDirection::Desc
            }
            _ => SortDirection::Asc,
        };
        SortSpec {
            column: column.to_string(),
            direction,
        }
    }
}

/// A column is sortable when it declares a sort path, unless the search is
/// constrained to related records and the path reaches into a repeating
/// field: the relation-constrained search cannot sort on those.
pub fn is_sortable(column: &ColumnConfig, descriptor: &SearchDescriptor) -> bool {
    match column.sort_by.as_deref() {
        None | Some("") => false,
        Some(sort_by) => {
            !descriptor.search_query.is_relation_constrained() || !sort_by.contains(REPEATING_ITEM_MARKER)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableColumn {
    pub source: ColumnConfig,
    pub name: String,
    pub label: String,
    pub width: u32,
    pub sortable: bool,
}

/// Columns of `column_set_name` for the descriptor's record type. An unknown
/// record type or column set yields no columns.
pub fn derive_columns(
    config: &AppConfig,
    descriptor: &SearchDescriptor,
    column_set_name: &str,
    format_label: impl Fn(&ColumnConfig) -> String,
) -> Vec<TableColumn> {
    config
        .columns(&descriptor.record_type, column_set_name)
        .unwrap_or_default()
        .iter()
        .map(|column| TableColumn {
            source: column.clone(),
            name: column.name.clone(),
            label: format_label(column),
            width: column.width,
            sortable: is_sortable(column, descriptor),
        })
        .collect()
}

/// Number of rows the table is sized for.
///
/// Unknown totals get one row, for the pending indicator. A result set that
/// fits on one page shrinks the table to its items; a larger one keeps a full
/// page, so the pager does not jump on the last page or while a new page
/// loads. Zero is raised to one row to keep header and footer apart.
pub fn height_basis(total_items: Option<u64>, page_size: Option<u64>, items_in_page: Option<u64>) -> u64 {
    let Some(total_items) = total_items else {
        return 1;
    };

    let fits_one_page = page_size.is_none_or(|page_size| total_items <= page_size);
    let basis = match (fits_one_page, items_in_page, page_size) {
        (true, Some(items_in_page), _) => items_in_page,
        (_, _, Some(page_size)) => page_size,
        (_, items_in_page, None) => items_in_page.unwrap_or(total_items),
    };

    basis.max(1)
}

pub fn result_height_basis(result: &SearchResultList) -> u64 {
    height_basis(result.total_items, result.page_size, result.items_in_page)
}

/// Pixel height of a table sized for `basis` rows plus its header.
pub fn table_height_px(basis: u64) -> u64 {
    basis * ROW_HEIGHT_PX + ROW_HEIGHT_PX
}

/// Record type to open for a clicked row: the one matching the row's
/// `docType`, else the searched record type.
pub fn resolve_row_record_type(
    config: &AppConfig,
    descriptor: &SearchDescriptor,
    item: &RecordSummary,
) -> Option<String> {
    item.doc_type
        .as_deref()
        .and_then(|doc_type| config.record_type_by_service_object_name(doc_type))
        .map(|record_type| record_type.name.clone())
        .or_else(|| Some(descriptor.record_type.clone()))
        .filter(|record_type| !record_type.is_empty())
}
