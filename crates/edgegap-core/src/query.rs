//! Convenience builder for HTTP query parameters.
//!
//! Pairs collected here are appended to request URLs through
//! [`url::Url::query_pairs_mut`], so values are percent-encoded on the wire.

use std::fmt::Display;
use url::form_urlencoded;

/// Builder for assembling query parameter pairs.
#[derive(Debug, Default, Clone)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Create a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a key/value pair when the value is present.
    pub fn push_opt<T>(&mut self, key: &'static str, value: Option<T>)
    where
        T: ToString,
    {
        if let Some(value) = value {
            self.pairs.push((key, value.to_string()));
        }
    }

    /// Append using a mapping function when the value is present.
    pub fn push_opt_with<T, F>(&mut self, key: &'static str, value: Option<T>, mut map: F)
    where
        F: FnMut(T) -> String,
    {
        if let Some(value) = value {
            self.pairs.push((key, map(value)));
        }
    }

    /// Append a string value unless it is empty.
    pub fn push_non_empty(&mut self, key: &'static str, value: &str) {
        if !value.is_empty() {
            self.pairs.push((key, value.to_string()));
        }
    }

    /// Append a required key/value pair.
    pub fn push<T>(&mut self, key: &'static str, value: T)
    where
        T: Display,
    {
        self.pairs.push((key, value.to_string()));
    }

    /// Append every pair from another collection.
    pub fn extend(&mut self, pairs: impl IntoIterator<Item = (&'static str, String)>) {
        self.pairs.extend(pairs);
    }

    /// Return the collected key/value pairs.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(&'static str, String)> {
        self.pairs
    }

    /// Returns true if no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render as a percent-encoded query string, including the leading `?`.
    ///
    /// Returns an empty string when no parameters have been added.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }

        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter().map(|(k, v)| (*k, v.as_str())))
            .finish();
        format!("?{encoded}")
    }
}

/// Page selection for paginated list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    /// Page number (1-based)
    pub page: u32,
    /// Number of items per page
    pub size: u32,
}

impl PaginationParams {
    /// Create pagination parameters.
    #[must_use]
    pub const fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    /// Convert to URL query pairs (`page`, `limit`).
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push("page", self.page);
        params.push("limit", self.size);
        params.into_pairs()
    }

    /// Render as `?page=<page>&limit=<size>`.
    #[must_use]
    pub fn query_string(&self) -> String {
        let mut params = QueryParams::new();
        params.extend(self.to_pairs());
        params.to_query_string()
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self { page: 1, size: 10 }
    }
}

#[cfg(test)]
mod tests {
    use super::{PaginationParams, QueryParams};

    #[test]
    fn push_opt_skips_none() {
        let mut params = QueryParams::new();
        params.push_opt("name", Option::<String>::None);
        assert!(params.is_empty());
        assert_eq!(params.to_query_string(), "");
    }

    #[test]
    fn push_opt_with_applies_mapper() {
        let mut params = QueryParams::new();
        params.push_opt_with("limit", Some(5u32), |v| format!("{v:02}"));
        assert_eq!(params.into_pairs(), vec![("limit", "05".to_string())]);
    }

    #[test]
    fn push_non_empty_skips_empty_strings() {
        let mut params = QueryParams::new();
        params.push_non_empty("app", "");
        params.push_non_empty("version", "v1");
        assert_eq!(params.into_pairs(), vec![("version", "v1".to_string())]);
    }

    #[test]
    fn query_string_percent_encodes_values() {
        let mut params = QueryParams::new();
        params.push("app", "my app&co");
        params.push("tags", "a=b");
        assert_eq!(params.to_query_string(), "?app=my+app%26co&tags=a%3Db");
    }

    #[test]
    fn pagination_query_string() {
        let pagination = PaginationParams::new(2, 10);
        assert_eq!(pagination.query_string(), "?page=2&limit=10");
        assert_eq!(
            pagination.to_pairs(),
            vec![("page", "2".to_string()), ("limit", "10".to_string())]
        );
    }

    #[test]
    fn pagination_default_is_first_page() {
        assert_eq!(PaginationParams::default(), PaginationParams::new(1, 10));
    }
}
