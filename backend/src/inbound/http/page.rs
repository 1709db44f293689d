//! Lenient `?page=` query parameter.

use pagination::PageNumber;
use serde::Deserialize;
use utoipa::IntoParams;

/// Page selector shared by the paginated endpoints.
///
/// The raw value is kept as text so a non-integer page falls back to the
/// first page instead of failing the request.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number; defaults to 1.
    #[param(value_type = Option<i64>, example = 1)]
    page: Option<String>,
}

impl PageQuery {
    pub fn page_number(&self) -> PageNumber {
        PageNumber::from_query_value(self.page.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::web::Query;
    use rstest::rstest;

    #[rstest]
    #[case("", 1)]
    #[case("page=3", 3)]
    #[case("page=abc", 1)]
    #[case("page=0", 0)]
    #[case("other=5", 1)]
    fn page_query_parses_leniently(#[case] query: &str, #[case] expected: i64) {
        let parsed = Query::<PageQuery>::from_query(query).expect("query parses");
        assert_eq!(parsed.page_number().get(), expected);
    }
}
