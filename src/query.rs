//! Filter, order and paging parameters for GET requests.

use std::collections::BTreeMap;

use serde::Serialize;

/// Query parameters understood by awork list endpoints.
///
/// Only options that were explicitly set are sent. Filter and order
/// expressions are passed through untouched; the API validates them.
///
/// # Example
///
/// ```
/// use awork::QueryParameters;
///
/// let query = QueryParameters::new()
///     .with_filter("name eq 'Launch'")
///     .with_page_size(25);
///
/// let params = query.build();
/// assert_eq!(params.get("filterby").map(String::as_str), Some("name eq 'Launch'"));
/// assert!(!params.contains_key("page"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryParameters {
    /// Filter expression, sent as `filterby`.
    #[serde(rename = "filterby", skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,

    /// Order expression, sent as `orderby`.
    #[serde(rename = "orderby", skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,

    /// Page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Number of items per page, sent as `pageSize`.
    #[serde(rename = "pageSize", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl QueryParameters {
    /// Create an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    #[must_use]
    pub fn with_order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Returns true if no option has been set.
    pub fn is_empty(&self) -> bool {
        self.filter.is_none() && self.order.is_none() && self.page.is_none() && self.page_size.is_none()
    }

    /// Render the set options as a query-parameter mapping.
    ///
    /// Keys are `filterby`, `orderby`, `page` and `pageSize`; unset options
    /// produce no key at all.
    pub fn build(&self) -> BTreeMap<&'static str, String> {
        let mut params = BTreeMap::new();

        if let Some(filter) = &self.filter {
            params.insert("filterby", filter.clone());
        }
        if let Some(order) = &self.order {
            params.insert("orderby", order.clone());
        }
        if let Some(page) = self.page {
            params.insert("page", page.to_string());
        }
        if let Some(page_size) = self.page_size {
            params.insert("pageSize", page_size.to_string());
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_parameters_build_nothing() {
        let query = QueryParameters::new();
        assert!(query.is_empty());
        assert!(query.build().is_empty());
        assert_eq!(serde_qs::to_string(&query).unwrap(), "");
    }

    #[test]
    fn test_only_set_keys_are_emitted() {
        let cases = [
            (QueryParameters::new().with_filter("a"), vec!["filterby"]),
            (QueryParameters::new().with_order("name"), vec!["orderby"]),
            (QueryParameters::new().with_page(0), vec!["page"]),
            (QueryParameters::new().with_page_size(10), vec!["pageSize"]),
            (
                QueryParameters::new().with_order("name").with_page(2),
                vec!["orderby", "page"],
            ),
            (
                QueryParameters::new()
                    .with_filter("a")
                    .with_order("b")
                    .with_page(1)
                    .with_page_size(5),
                vec!["filterby", "orderby", "page", "pageSize"],
            ),
        ];

        for (query, expected) in cases {
            let built = query.build();
            let keys: Vec<&str> = built.keys().copied().collect();
            let mut expected = expected;
            expected.sort_unstable();
            assert_eq!(keys, expected, "unexpected keys for {query:?}");
        }
    }

    #[test]
    fn test_latest_value_wins() {
        let query = QueryParameters::new()
            .with_page(1)
            .with_filter("old")
            .with_page(3)
            .with_filter("new");

        let built = query.build();
        assert_eq!(built["page"], "3");
        assert_eq!(built["filterby"], "new");
        assert_eq!(built.len(), 2);
    }

    #[test]
    fn test_serialized_names_match_api() {
        let query = QueryParameters::new()
            .with_filter("isPrio eq true")
            .with_page_size(50);

        let serialized = serde_qs::to_string(&query).expect("Failed to serialize query");
        assert!(serialized.contains("filterby=isPrio"));
        assert!(serialized.contains("pageSize=50"));
        assert!(!serialized.contains("orderby"));
        assert!(!serialized.contains("page="));
    }
}
