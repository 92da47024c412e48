//! Room search: filter-to-query translation and page metadata.
//!
//! Raw request input (strings straight off the query string) is turned into a
//! typed [`RoomQuery`]: a predicate set ([`RoomFilter`]), a sort order
//! ([`RoomSort`]) and a page window ([`Pagination`]). Nothing here touches the
//! database; the repository layer binds these values into SQL, and
//! [`RoomFilter::matches`] evaluates the same predicates in memory.
//!
//! Input handling is lenient by contract: malformed numbers are dropped rather
//! than rejected, and blank amenity entries vanish before they can turn into a
//! "match nothing" constraint.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Page used when `page` is absent or unusable.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when `limit` is absent or unusable.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Largest page size a caller may request.
pub const MAX_PAGE_LIMIT: i64 = 100;

// ---------------------------------------------------------------------------
// Query parameter names
// ---------------------------------------------------------------------------

pub const PARAM_PAGE: &str = "page";
pub const PARAM_LIMIT: &str = "limit";
pub const PARAM_MIN_PRICE: &str = "minPrice";
pub const PARAM_MAX_PRICE: &str = "maxPrice";
pub const PARAM_BEDROOMS: &str = "bedrooms";
pub const PARAM_BEDS: &str = "beds";
pub const PARAM_BATHROOMS: &str = "bathrooms";
pub const PARAM_CITY: &str = "city";
pub const PARAM_AMENITIES: &str = "amenities";
/// Bracketed array form (`amenities[]=Wifi`) sent by many JS clients.
pub const PARAM_AMENITIES_ARRAY: &str = "amenities[]";

// ---------------------------------------------------------------------------
// Lenient input parsing
// ---------------------------------------------------------------------------

/// Parse a non-negative integer, treating anything unusable as absent.
///
/// Surrounding whitespace is ignored. Non-numeric strings, empty strings and
/// negative numbers all yield `None`.
pub fn parse_lenient_int(raw: Option<&str>) -> Option<i64> {
    let value: i64 = raw?.trim().parse().ok()?;
    (value >= 0).then_some(value)
}

/// Split, trim and drop empty amenity entries.
///
/// Each value may itself be a comma-separated list, so both
/// `amenities=Wifi,Pool` and `amenities=Wifi&amenities=Pool` produce
/// `["Wifi", "Pool"]`. Duplicates are kept as given.
pub fn clean_amenities<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .flat_map(|v| {
            v.as_ref()
                .split(',')
                .map(|t| t.trim().to_string())
                .collect::<Vec<_>>()
        })
        .filter(|t| !t.is_empty())
        .collect()
}

// ---------------------------------------------------------------------------
// Raw parameters
// ---------------------------------------------------------------------------

/// Query-string values exactly as received, before any coercion.
///
/// Scalar parameters keep their last occurrence; `amenities` accumulates
/// every occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRoomParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub bedrooms: Option<String>,
    pub beds: Option<String>,
    pub bathrooms: Option<String>,
    pub city: Option<String>,
    pub amenities: Vec<String>,
}

impl RawRoomParams {
    /// Collect raw parameters from decoded `(key, value)` pairs.
    ///
    /// Unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut raw = Self::default();
        for (key, value) in pairs {
            let value = value.into();
            match key.as_ref() {
                PARAM_PAGE => raw.page = Some(value),
                PARAM_LIMIT => raw.limit = Some(value),
                PARAM_MIN_PRICE => raw.min_price = Some(value),
                PARAM_MAX_PRICE => raw.max_price = Some(value),
                PARAM_BEDROOMS => raw.bedrooms = Some(value),
                PARAM_BEDS => raw.beds = Some(value),
                PARAM_BATHROOMS => raw.bathrooms = Some(value),
                PARAM_CITY => raw.city = Some(value),
                PARAM_AMENITIES | PARAM_AMENITIES_ARRAY => raw.amenities.push(value),
                _ => {}
            }
        }
        raw
    }
}

// ---------------------------------------------------------------------------
// Filter (predicate set)
// ---------------------------------------------------------------------------

/// Active constraints of a room search. `None` / empty means unconstrained.
///
/// `published = true` is implicit and always applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomFilter {
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub min_bedrooms: Option<i64>,
    pub min_beds: Option<i64>,
    pub min_bathrooms: Option<i64>,
    /// Trimmed, non-empty city fragment.
    pub city: Option<String>,
    /// Tags that must all be present on a room.
    pub amenities: Vec<String>,
}

/// The filterable attributes of a single room.
#[derive(Debug, Clone, Copy)]
pub struct RoomFacts<'a> {
    pub published: bool,
    pub price: i64,
    pub bedrooms: i64,
    pub beds: i64,
    pub bathrooms: i64,
    pub city: Option<&'a str>,
    pub amenities: &'a [String],
}

impl RoomFilter {
    /// Coerce raw parameters into a filter. Never fails.
    pub fn from_params(raw: &RawRoomParams) -> Self {
        let city = raw
            .city
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        Self {
            min_price: parse_lenient_int(raw.min_price.as_deref()),
            max_price: parse_lenient_int(raw.max_price.as_deref()),
            min_bedrooms: parse_lenient_int(raw.bedrooms.as_deref()),
            min_beds: parse_lenient_int(raw.beds.as_deref()),
            min_bathrooms: parse_lenient_int(raw.bathrooms.as_deref()),
            city,
            amenities: clean_amenities(&raw.amenities),
        }
    }

    /// The amenity constraint, or `None` when no tags were requested.
    pub fn amenity_constraint(&self) -> Option<&[String]> {
        (!self.amenities.is_empty()).then_some(self.amenities.as_slice())
    }

    /// `ILIKE` pattern for the city constraint, with LIKE wildcards escaped.
    pub fn city_pattern(&self) -> Option<String> {
        self.city.as_deref().map(|city| {
            let mut pattern = String::with_capacity(city.len() + 2);
            pattern.push('%');
            for c in city.chars() {
                if matches!(c, '\\' | '%' | '_') {
                    pattern.push('\\');
                }
                pattern.push(c);
            }
            pattern.push('%');
            pattern
        })
    }

    /// Evaluate the predicate set against one room.
    pub fn matches(&self, room: &RoomFacts<'_>) -> bool {
        if !room.published {
            return false;
        }
        if self.min_price.is_some_and(|min| room.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| room.price > max) {
            return false;
        }
        if self.min_bedrooms.is_some_and(|n| room.bedrooms < n)
            || self.min_beds.is_some_and(|n| room.beds < n)
            || self.min_bathrooms.is_some_and(|n| room.bathrooms < n)
        {
            return false;
        }
        if let Some(needle) = self.city.as_deref() {
            let needle = needle.to_lowercase();
            match room.city {
                Some(city) if city.to_lowercase().contains(&needle) => {}
                _ => return false,
            }
        }
        self.amenities
            .iter()
            .all(|wanted| room.amenities.iter().any(|have| have == wanted))
    }
}

// ---------------------------------------------------------------------------
// Sort
// ---------------------------------------------------------------------------

/// Result ordering. Every variant ends with `id DESC` so pages are stable
/// across repeated queries against unchanged data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoomSort {
    /// Most recently created first.
    #[default]
    Newest,
    /// Highest rating first, newest among equals.
    TopRated,
}

impl RoomSort {
    /// SQL `ORDER BY` body for this sort.
    pub fn order_by_clause(&self) -> &'static str {
        match self {
            Self::Newest => "created_at DESC, id DESC",
            Self::TopRated => "rating DESC, created_at DESC, id DESC",
        }
    }
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// A 1-based page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl Pagination {
    /// Build a page window from raw strings.
    ///
    /// Unparseable values fall back to the defaults, `page` is at least 1 and
    /// `limit` is clamped to `1..=MAX_PAGE_LIMIT`.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = page
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_PAGE)
            .max(1);
        let limit = limit
            .and_then(|l| l.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_PAGE_LIMIT)
            .clamp(1, MAX_PAGE_LIMIT);
        Self { page, limit }
    }

    /// Number of rows to skip: `(page - 1) * limit`.
    pub fn skip(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// Everything the executor needs for one search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomQuery {
    pub filter: RoomFilter,
    pub sort: RoomSort,
    pub pagination: Pagination,
}

impl RoomQuery {
    pub fn new(filter: RoomFilter, sort: RoomSort, pagination: Pagination) -> Self {
        Self {
            filter,
            sort,
            pagination,
        }
    }

    /// Translate raw request parameters into a query with the given sort.
    pub fn from_params(raw: &RawRoomParams, sort: RoomSort) -> Self {
        Self::new(
            RoomFilter::from_params(raw),
            sort,
            Pagination::from_raw(raw.page.as_deref(), raw.limit.as_deref()),
        )
    }
}

// ---------------------------------------------------------------------------
// Page metadata
// ---------------------------------------------------------------------------

/// `ceil(total / limit)`.
///
/// Zero matches means zero pages, not one empty page.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if limit <= 0 || total <= 0 {
        return 0;
    }
    (total + limit - 1) / limit
}

/// Paging fields of the search envelope.
///
/// `count` is the size of the returned page, `total` the number of matches
/// across all pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub count: i64,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

impl PageMeta {
    pub fn new(total: i64, pagination: Pagination, count: usize) -> Self {
        Self {
            count: count as i64,
            total,
            page: pagination.page,
            limit: pagination.limit,
            total_pages: total_pages(total, pagination.limit),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
