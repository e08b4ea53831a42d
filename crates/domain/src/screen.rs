use serde::Serialize;

use crate::scope::EntityKind;

/// Static list-screen configuration for one entity.
///
/// The original back office derived these from runtime reflection over
/// the schema; they are enumerated here explicitly so the compiler
/// checks them and list screens and services share one source of truth
/// for page sizes and default ordering. Clients read the registry from
/// the screens endpoint to render their list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScreenConfig {
    pub entity: EntityKind,
    /// Columns rendered on the list screen
    pub list_display: &'static [&'static str],
    /// Free-text searchable fields
    pub search_fields: &'static [&'static str],
    /// Fields offered as list filters
    pub list_filter: &'static [&'static str],
    /// Default ordering, `-` prefix meaning descending
    pub ordering: &'static str,
    pub page_size: u64,
}

pub const FARM_SCREEN: ScreenConfig = ScreenConfig {
    entity: EntityKind::Farm,
    list_display: &["id", "name", "owner", "address", "sector", "created"],
    search_fields: &["name", "address", "telephone", "account_number", "email"],
    list_filter: &["sector", "owner", "created"],
    ordering: "-created",
    page_size: 20,
};

pub const SITE_VISIT_SCREEN: ScreenConfig = ScreenConfig {
    entity: EntityKind::SiteVisit,
    list_display: &["id", "farm", "agent", "visit_date", "status", "created"],
    search_fields: &["notes", "resolution_notes"],
    list_filter: &["status", "farm", "agent", "visit_date"],
    ordering: "-created",
    page_size: 20,
};

pub const NOTICE_SCREEN: ScreenConfig = ScreenConfig {
    entity: EntityKind::Notice,
    list_display: &["id", "title", "issued_by", "is_active", "created"],
    search_fields: &["title", "message"],
    list_filter: &["is_active", "issued_by", "created"],
    ordering: "-created",
    page_size: 20,
};

pub const STATEMENT_SCREEN: ScreenConfig = ScreenConfig {
    entity: EntityKind::Statement,
    list_display: &[
        "id",
        "farm",
        "period_start",
        "period_end",
        "total_sales",
        "total_expenses",
        "balance",
    ],
    search_fields: &[],
    list_filter: &["farm", "period_start", "period_end"],
    ordering: "-created",
    page_size: 20,
};

pub const EMPLOYEE_STATS_SCREEN: ScreenConfig = ScreenConfig {
    entity: EntityKind::FarmEmployeeStats,
    list_display: &[
        "id",
        "farm",
        "reporting_month",
        "employment_type",
        "total_contribution_usd",
        "total_contribution_zwl",
    ],
    search_fields: &[],
    list_filter: &["employment_type", "farm", "reporting_month"],
    ordering: "-created",
    page_size: 20,
};

/// Users are not a scoped entity kind; their list screen still has a
/// fixed page size.
pub const USER_PAGE_SIZE: u64 = 25;

pub fn registry() -> &'static [ScreenConfig] {
    &[
        FARM_SCREEN,
        SITE_VISIT_SCREEN,
        NOTICE_SCREEN,
        STATEMENT_SCREEN,
        EMPLOYEE_STATS_SCREEN,
    ]
}

pub fn for_entity(kind: EntityKind) -> &'static ScreenConfig {
    match kind {
        EntityKind::Farm => &FARM_SCREEN,
        EntityKind::SiteVisit => &SITE_VISIT_SCREEN,
        EntityKind::Notice => &NOTICE_SCREEN,
        EntityKind::Statement => &STATEMENT_SCREEN,
        EntityKind::FarmEmployeeStats => &EMPLOYEE_STATS_SCREEN,
    }
}
