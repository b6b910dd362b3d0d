use crate::db::{init_db, Database};
use crate::domain::{Category, HousingListing};
use crate::scraper::TextFetcher;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Fresh test database on a unique temp path, production schema applied.
pub fn make_db() -> Database {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let unique = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!("gator_housing_test_{nanos}_{unique}.sqlite"));

    let db = Database::new(path.to_string_lossy().into_owned());
    init_db(&db).expect("Failed to initialize test DB");
    db
}

/// Canned fetcher: serves fixed text per url, None for everything else.
pub struct FakeFetcher {
    pages: HashMap<String, String>,
}

impl FakeFetcher {
    pub fn new(pages: &[(&str, &str)]) -> Self {
        Self {
            pages: pages
                .iter()
                .map(|(url, text)| (url.to_string(), text.to_string()))
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            pages: HashMap::new(),
        }
    }
}

impl TextFetcher for FakeFetcher {
    fn fetch(&self, url: &str) -> Option<String> {
        self.pages.get(url).cloned()
    }
}

/// Minimal valid listing for persistence tests.
pub fn sample_listing(name: &str, category: Category, avg_price: i64) -> HousingListing {
    HousingListing {
        name: name.to_string(),
        location: "Gainesville, FL".to_string(),
        price_range: format!("${avg_price}"),
        avg_price,
        category,
        is_international_friendly: false,
        amenities: vec!["Pool".to_string()],
        source_url: "https://example.com/".to_string(),
        distance_to_campus: "2-4 miles from campus".to_string(),
        bus_routes: vec!["37".to_string()],
        description: "A place to live.".to_string(),
        rating: 4.0,
        member_count: 20,
        image_url: category.default_image_url().to_string(),
    }
}
