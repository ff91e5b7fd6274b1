//! Paging and sorting parameters shared by every list endpoint.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use validator::{Validate, ValidationError};

use super::validation_helpers::{must_be_any_of, violations_from};
use crate::app::{config::Config, error::AppError, error::FieldViolation, links::Link};

pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    fn sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

fn validate_sort_direction(value: &str) -> Result<(), ValidationError> {
    must_be_any_of::<SortDirection>(value, "MUST_BE_ANY_OF_SortDirection")
}

/// Whitelist of sortable fields for one resource: API name -> SQL column.
#[derive(Debug)]
pub struct Sorting {
    pub default: &'static str,
    pub fields: &'static [(&'static str, &'static str)],
}

/// Raw paging query string.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    #[validate(range(min = 0, code = "PAGE_NUMBER_MIN_0"))]
    pub page_number: Option<i64>,
    #[validate(range(min = 1, max = 100, code = "PAGE_SIZE_BETWEEN_1_AND_100"))]
    pub page_size: Option<i64>,
    pub sort_by: Option<String>,
    #[validate(custom(function = "validate_sort_direction"))]
    pub sort_direction: Option<String>,
}

impl PageParams {
    /// Validate against the resource's sort whitelist and fill in defaults.
    pub fn resolve(&self, sorting: &Sorting) -> Result<PageRequest, AppError> {
        let mut violations = match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => violations_from(&errors),
        };

        let sort_by = self.sort_by.as_deref().unwrap_or(sorting.default);
        let sort = sorting.fields.iter().find(|(name, _)| *name == sort_by);
        if sort.is_none() {
            let allowed: Vec<&str> = sorting.fields.iter().map(|(name, _)| *name).collect();
            violations.push(FieldViolation {
                field: "sortBy".to_string(),
                message: format!("SORT_BY_MUST_BE_ANY_OF_{}", allowed.join("_")),
            });
        }

        if !violations.is_empty() {
            return Err(AppError::Validation(violations));
        }

        let (sort_by, column) = sort.copied().ok_or(AppError::Internal)?;
        let direction = self
            .sort_direction
            .as_deref()
            .and_then(|d| d.parse().ok())
            .unwrap_or(SortDirection::Asc);

        Ok(PageRequest {
            page_number: self.page_number.unwrap_or(0),
            page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE),
            sort_by,
            column,
            direction,
        })
    }
}

/// Validated paging request.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub page_number: i64,
    pub page_size: i64,
    pub sort_by: &'static str,
    pub column: &'static str,
    pub direction: SortDirection,
}

impl PageRequest {
    /// Rows to skip. Saturates, so a page far past the end is just empty.
    pub fn offset(&self) -> i64 {
        self.page_number.saturating_mul(self.page_size)
    }

    /// ORDER BY body. Both parts come from static whitelists.
    pub fn order_by(&self) -> String {
        format!("{} {}", self.column, self.direction.sql())
    }

    fn query_for(&self, page_number: i64) -> String {
        format!(
            "pageNumber={}&pageSize={}&sortBy={}&sortDirection={}",
            page_number, self.page_size, self.sort_by, self.direction
        )
    }
}

/// One page of a list response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page_number: i64,
    pub page_size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
    pub links: Vec<Link>,
}

impl<T> Page<T> {
    /// Wrap `content` and link to the neighbouring pages of `path`.
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: i64, config: &Config, path: &str) -> Self {
        let total_pages = (total_elements + request.page_size - 1) / request.page_size;

        let mut links = vec![Link::self_link(
            config,
            &format!("{}?{}", path, request.query_for(request.page_number)),
        )];
        if let Some(next) = request.page_number.checked_add(1).filter(|next| *next < total_pages) {
            links.push(Link::new(config, "next", &format!("{}?{}", path, request.query_for(next))));
        }
        if request.page_number > 0 {
            links.push(Link::new(
                config,
                "previous",
                &format!("{}?{}", path, request.query_for(request.page_number - 1)),
            ));
        }

        Self {
            content,
            page_number: request.page_number,
            page_size: request.page_size,
            total_elements,
            total_pages,
            links,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SORTING: Sorting = Sorting {
        default: "createdAt",
        fields: &[("createdAt", "p.created_at"), ("title", "p.title")],
    };

    #[test]
    fn defaults_apply() {
        let request = PageParams::default().resolve(&SORTING).unwrap();
        assert_eq!(request.page_number, 0);
        assert_eq!(request.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(request.order_by(), "p.created_at ASC");
        assert_eq!(request.offset(), 0);
    }

    #[test]
    fn explicit_sort_and_direction() {
        let params = PageParams {
            page_number: Some(2),
            page_size: Some(5),
            sort_by: Some("title".to_string()),
            sort_direction: Some("DESC".to_string()),
        };
        let request = params.resolve(&SORTING).unwrap();
        assert_eq!(request.order_by(), "p.title DESC");
        assert_eq!(request.offset(), 10);
    }

    #[test]
    fn every_bad_parameter_is_reported() {
        let params = PageParams {
            page_number: Some(-1),
            page_size: Some(0),
            sort_by: Some("password".to_string()),
            sort_direction: Some("sideways".to_string()),
        };
        let Err(AppError::Validation(violations)) = params.resolve(&SORTING) else {
            panic!("expected validation error");
        };
        let messages: Vec<&str> = violations.iter().map(|v| v.message.as_str()).collect();
        assert!(messages.contains(&"PAGE_NUMBER_MIN_0"));
        assert!(messages.contains(&"PAGE_SIZE_BETWEEN_1_AND_100"));
        assert!(messages.contains(&"MUST_BE_ANY_OF_SortDirection"));
        assert!(messages.contains(&"SORT_BY_MUST_BE_ANY_OF_createdAt_title"));
    }

    #[test]
    fn page_links_point_to_neighbours() {
        let config = Config::for_tests();
        let params = PageParams {
            page_number: Some(1),
            page_size: Some(2),
            ..PageParams::default()
        };
        let request = params.resolve(&SORTING).unwrap();
        let page = Page::new(vec![1, 2], &request, 5, &config, "/project");
        assert_eq!(page.total_pages, 3);
        let rels: Vec<&str> = page.links.iter().map(|l| l.rel.as_str()).collect();
        assert_eq!(rels, vec!["self", "next", "previous"]);
        assert_eq!(
            page.links[1].href,
            "http://localhost:3000/project?pageNumber=2&pageSize=2&sortBy=createdAt&sortDirection=asc"
        );
    }

    #[test]
    fn last_representable_page_does_not_overflow() {
        let config = Config::for_tests();
        let params = PageParams {
            page_number: Some(i64::MAX),
            page_size: Some(MAX_PAGE_SIZE),
            ..PageParams::default()
        };
        let request = params.resolve(&SORTING).unwrap();
        assert_eq!(request.offset(), i64::MAX);

        let page = Page::<i32>::new(vec![], &request, 3, &config, "/project");
        let rels: Vec<&str> = page.links.iter().map(|l| l.rel.as_str()).collect();
        assert_eq!(rels, vec!["self", "previous"]);
    }
}
