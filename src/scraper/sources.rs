use crate::domain::Category;

/// Off-campus property sites scraped on every refresh, in fetch order.
pub const OFF_CAMPUS_SOURCES: &[&str] = &[
    "https://alight-gainesville.com/",
    "https://larkgainesville.com/",
    "https://thestandardgainesville.landmark-properties.com/",
    "https://huboncampus.com/gainesville-university/",
    "https://redpoint-gainesville.com/",
    "https://www.retreatgainesville.com/",
];

/// One declared group of sources sharing a category tag.
pub struct SourceGroup {
    pub category: Category,
    pub urls: Vec<String>,
}

/// The declared source table. On-campus supply is curated rather than
/// scraped, so only the off-campus group carries urls.
pub fn default_sources() -> Vec<SourceGroup> {
    vec![SourceGroup {
        category: Category::OffCampus,
        urls: OFF_CAMPUS_SOURCES.iter().map(|u| (*u).to_string()).collect(),
    }]
}
