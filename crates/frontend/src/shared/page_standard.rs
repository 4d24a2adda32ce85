//! Page category constants for tab pages.
//!
//! Every page rendered inside a tab declares an HTML `id` in the format
//! `{entity}--{category}` (e.g. `"a002_inventory--list"`) and a
//! `data-page-category` with one of the constants below. The entity part
//! matches the module directory, so the id copied from the DOM inspector
//! leads straight to the source.

/// List of records: table with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Report over a projection (read-only table plus summary).
pub const PAGE_CAT_REPORT: &str = "report";

/// KPI dashboard.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Administration page.
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_REPORT,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_SYSTEM,
];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a002_inventory--list"));
        assert!(!is_valid_page_id("a002_inventory"));
        assert!(!is_valid_page_id("--list"));
        assert!(is_known_category(PAGE_CAT_REPORT));
        assert!(!is_known_category("legacy"));
    }
}
