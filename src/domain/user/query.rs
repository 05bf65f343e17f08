// src/domain/user/query.rs
//! Query descriptor for listing and searching users.
//!
//! Everything in here is lenient on purpose: malformed paging or sorting input
//! is corrected to defaults instead of rejected. The only hard failure is a
//! blank keyword on the dedicated search operation.

use crate::domain::errors::{DomainError, DomainResult};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

/// `ceil(total / limit)` without floating point.
pub fn total_pages(total: u64, limit: u32) -> u64 {
    let limit = u64::from(limit.max(1));
    total / limit + u64::from(total % limit > 0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    pub fn normalize(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = match page {
            Some(value) if value >= 1 => u32::try_from(value).unwrap_or(u32::MAX),
            _ => DEFAULT_PAGE,
        };
        let limit = match limit {
            Some(value) if value >= 1 => {
                u32::try_from(value.min(i64::from(MAX_LIMIT))).unwrap_or(MAX_LIMIT)
            }
            _ => DEFAULT_LIMIT,
        };
        Self { page, limit }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }

    pub fn total_pages(&self, total: u64) -> u64 {
        total_pages(total, self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserSortField {
    #[default]
    Id,
    Name,
    Email,
    Age,
    CreatedAt,
}

impl UserSortField {
    /// Unknown fields fall back to `id`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("name") => Self::Name,
            Some("email") => Self::Email,
            Some("age") => Self::Age,
            Some("created_at") => Self::CreatedAt,
            _ => Self::Id,
        }
    }

    /// Column name. Only ever one of these literals reaches the SQL text.
    pub fn column(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Email => "email",
            Self::Age => "age",
            Self::CreatedAt => "created_at",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Exact match only: `DESC` or ` desc` fall back to ascending.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UserSort {
    pub field: UserSortField,
    pub direction: SortDirection,
}

impl UserSort {
    pub fn new(field: UserSortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Rows with equal sort keys are ordered by ascending id.
    pub fn needs_tie_break(&self) -> bool {
        self.field != UserSortField::Id
    }
}

/// Escape `LIKE` metacharacters so the keyword is matched literally.
pub fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn normalize_keyword(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

fn normalize_age_bound(raw: Option<i64>) -> Option<i32> {
    // A bound of 0 (or below) means "unset".
    raw.filter(|value| *value > 0)
        .map(|value| i32::try_from(value).unwrap_or(i32::MAX))
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserFilter {
    keyword: Option<String>,
    age_min: Option<i32>,
    age_max: Option<i32>,
}

impl UserFilter {
    pub fn new(keyword: Option<&str>, age_min: Option<i64>, age_max: Option<i64>) -> Self {
        Self {
            keyword: normalize_keyword(keyword),
            age_min: normalize_age_bound(age_min),
            age_max: normalize_age_bound(age_max),
        }
    }

    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    /// `%keyword%` with metacharacters escaped, ready to bind to `ILIKE`.
    pub fn keyword_pattern(&self) -> Option<String> {
        self.keyword
            .as_deref()
            .map(|keyword| format!("%{}%", escape_like(keyword)))
    }

    pub fn age_min(&self) -> Option<i32> {
        self.age_min
    }

    pub fn age_max(&self) -> Option<i32> {
        self.age_max
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserListQuery {
    pub filter: UserFilter,
    pub sort: UserSort,
    pub page: PageRequest,
}

impl UserListQuery {
    pub fn new(filter: UserFilter, sort: UserSort, page: PageRequest) -> Self {
        Self { filter, sort, page }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSearchQuery {
    keyword: String,
    pub page: PageRequest,
}

impl UserSearchQuery {
    pub fn new(keyword: &str, page: PageRequest) -> DomainResult<Self> {
        let keyword = normalize_keyword(Some(keyword))
            .ok_or_else(|| DomainError::validation("search keyword is required"))?;
        Ok(Self { keyword, page })
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn pattern(&self) -> String {
        format!("%{}%", escape_like(&self.keyword))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up_on_remainder() {
        assert_eq!(total_pages(50, 10), 5);
        assert_eq!(total_pages(51, 10), 6);
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 1), 1);
        assert_eq!(total_pages(99, 100), 1);
        assert_eq!(total_pages(100, 100), 1);
        assert_eq!(total_pages(101, 100), 2);
    }

    #[test]
    fn total_pages_matches_ceiling_for_small_grid() {
        for limit in 1..=12_u32 {
            for total in 0..=60_u64 {
                let expected = total.div_ceil(u64::from(limit));
                assert_eq!(total_pages(total, limit), expected, "total={total} limit={limit}");
            }
        }
    }

    #[test]
    fn page_request_clamps_out_of_range_values() {
        let page = PageRequest::normalize(Some(0), Some(500));
        assert_eq!(page.page(), 1);
        assert_eq!(page.limit(), 100);

        let page = PageRequest::normalize(Some(-3), Some(0));
        assert_eq!(page.page(), 1);
        assert_eq!(page.limit(), 10);

        let page = PageRequest::normalize(None, Some(-1));
        assert_eq!(page, PageRequest::default());
    }

    #[test]
    fn offset_is_derived_from_page_and_limit() {
        assert_eq!(PageRequest::normalize(Some(1), Some(10)).offset(), 0);
        assert_eq!(PageRequest::normalize(Some(3), Some(25)).offset(), 50);
    }

    #[test]
    fn unknown_sort_field_falls_back_to_id() {
        assert_eq!(UserSortField::parse(Some("password")), UserSortField::Id);
        assert_eq!(UserSortField::parse(Some("password_hash")), UserSortField::Id);
        assert_eq!(UserSortField::parse(None), UserSortField::Id);
        assert_eq!(UserSortField::parse(Some("created_at")), UserSortField::CreatedAt);
        assert_eq!(UserSortField::parse(Some("age")).column(), "age");
    }

    #[test]
    fn unknown_direction_falls_back_to_asc() {
        assert_eq!(SortDirection::parse(Some("desc")), SortDirection::Desc);
        assert_eq!(SortDirection::parse(Some("DESC")), SortDirection::Asc);
        assert_eq!(SortDirection::parse(Some(" desc ")), SortDirection::Asc);
        assert_eq!(SortDirection::parse(Some("sideways")), SortDirection::Asc);
        assert_eq!(SortDirection::parse(None), SortDirection::Asc);
    }

    #[test]
    fn zero_age_bounds_are_treated_as_unset() {
        let filter = UserFilter::new(None, Some(0), Some(-5));
        assert_eq!(filter, UserFilter::default());

        let filter = UserFilter::new(None, Some(25), None);
        assert_eq!(filter.age_min(), Some(25));
        assert_eq!(filter.age_max(), None);
    }

    #[test]
    fn blank_keyword_is_dropped() {
        assert_eq!(UserFilter::new(Some("   "), None, None).keyword(), None);
        assert_eq!(
            UserFilter::new(Some(" ada "), None, None).keyword_pattern().as_deref(),
            Some("%ada%")
        );
    }

    #[test]
    fn like_metacharacters_are_escaped() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        let filter = UserFilter::new(Some("a_b"), None, None);
        assert_eq!(filter.keyword_pattern().as_deref(), Some("%a\\_b%"));
    }

    #[test]
    fn search_requires_a_keyword() {
        let err = UserSearchQuery::new("  ", PageRequest::default()).unwrap_err();
        assert_eq!(err.reason(), "search keyword is required");

        let query = UserSearchQuery::new("ada", PageRequest::default()).unwrap();
        assert_eq!(query.pattern(), "%ada%");
    }
}
