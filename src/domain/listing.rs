use serde::{Deserialize, Serialize};

const ON_CAMPUS_IMAGE: &str = "https://images.unsplash.com/photo-1571781926291-c477ebfd024b?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHx1bml2ZXJzaXR5JTIwZG9ybXxlbnwwfHx8fDE3NTcyMzk4NTF8MA&ixlib=rb-4.1.0&q=80&w=1080";
const OFF_CAMPUS_IMAGE: &str = "https://images.unsplash.com/photo-1580063665747-ab495581c9c1?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxjb2xsZWdlJTIwZG9ybSUyMGJ1aWxkaW5nfGVufDF8fHx8MTc1NzIzOTg1MXww&ixlib=rb-4.1.0&q=80&w=1080";

/// Where a listing sits relative to the university. Fixed at extraction time
/// from the source's declared group; stored as its snake_case text in SQLite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    OnCampus,
    OffCampus,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::OnCampus => "on_campus",
            Category::OffCampus => "off_campus",
        }
    }

    pub fn parse(s: &str) -> Option<Category> {
        match s {
            "on_campus" => Some(Category::OnCampus),
            "off_campus" => Some(Category::OffCampus),
            _ => None,
        }
    }

    /// Stock photo used when a source carries no imagery of its own.
    pub fn default_image_url(&self) -> &'static str {
        match self {
            Category::OnCampus => ON_CAMPUS_IMAGE,
            Category::OffCampus => OFF_CAMPUS_IMAGE,
        }
    }
}

/// One housing option, either assembled from a scraped page or taken from the
/// curated datasets. Immutable once built; the db layer owns ids and
/// timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HousingListing {
    pub name: String,
    pub location: String,
    pub price_range: String,
    pub avg_price: i64,
    pub category: Category,
    pub is_international_friendly: bool,
    pub amenities: Vec<String>,
    pub source_url: String,
    pub distance_to_campus: String,
    pub bus_routes: Vec<String>,
    pub description: String,
    pub rating: f64,
    pub member_count: i64,
    pub image_url: String,
}
