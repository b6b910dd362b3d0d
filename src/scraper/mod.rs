pub mod assemble;
pub mod curated;
pub mod extract;
pub mod fetch;
mod scraper;
mod scraper_error;
pub mod sources;

pub use fetch::{PageFetcher, TextFetcher};
pub use scraper::{
    run_populate, run_refresh, CancelFlag, ExtractionRun, HousingScraper, RefreshSummary,
};
pub use scraper_error::ScraperError;
