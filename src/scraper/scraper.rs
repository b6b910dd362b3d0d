// scraper.rs
use crate::db::connection::Database;
use crate::db::housing::{bulk_insert, clear_listings};
use crate::db::refreshes;
use crate::domain::HousingListing;
use crate::errors::ServerError;
use crate::scraper::assemble;
use crate::scraper::curated;
use crate::scraper::sources::{self, SourceGroup};
use crate::scraper::{PageFetcher, TextFetcher};
use rand::Rng;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

// Politeness window between outbound fetches.
const DELAY_MIN_MS: u64 = 1000;
const DELAY_MAX_MS: u64 = 3000;

/// Outcome of one extraction pass: the accepted listings (scraped then
/// curated, in order) plus per-source accounting.
pub struct ExtractionRun {
    pub listings: Vec<HousingListing>,
    pub accepted: usize,
    pub skipped: usize,
}

/// Counts reported back from a refresh or populate operation.
#[derive(Debug, Serialize)]
pub struct RefreshSummary {
    pub accepted: usize,
    pub skipped: usize,
    pub saved: usize,
    pub total: usize,
}

/// Shared cancellation handle for a run. Cancelling leaves already-accepted
/// records intact; only pending sources are abandoned.
#[derive(Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

pub struct HousingScraper<F: TextFetcher> {
    fetcher: F,
    delay_ms: (u64, u64),
    cancel: CancelFlag,
}

impl<F: TextFetcher> HousingScraper<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            delay_ms: (DELAY_MIN_MS, DELAY_MAX_MS),
            cancel: CancelFlag::default(),
        }
    }

    /// Same pipeline with the politeness delay disabled. Test seams only.
    pub fn without_delay(fetcher: F) -> Self {
        Self {
            fetcher,
            delay_ms: (0, 0),
            cancel: CancelFlag::default(),
        }
    }

    /// Drive the run from an externally held cancellation handle.
    pub fn with_cancel_flag(mut self, flag: CancelFlag) -> Self {
        self.cancel = flag;
        self
    }

    /// Walk every declared source in order, fetch, extract, and assemble.
    /// A source that yields no content or no usable signal is counted and
    /// skipped; nothing a single source does can abort the batch. Curated
    /// records are appended after all sources, in their fixed order.
    pub fn run_extraction(
        &self,
        groups: &[SourceGroup],
        curated: &[HousingListing],
    ) -> ExtractionRun {
        let mut listings = Vec::new();
        let mut accepted = 0;
        let mut skipped = 0;

        for group in groups {
            for url in &group.urls {
                if self.cancel.is_cancelled() {
                    eprintln!("🏁 Run cancelled, leaving {url} unfetched");
                    skipped += 1;
                    continue;
                }

                eprintln!("📄 Scraping {url}...");

                match self.fetcher.fetch(url) {
                    None => {
                        eprintln!("⚠️ No content for {url}, skipping");
                        skipped += 1;
                    }
                    Some(text) => match assemble::assemble(url, group.category, &text) {
                        Some(listing) => {
                            eprintln!("✅ Extracted {}", listing.name);
                            accepted += 1;
                            listings.push(listing);
                        }
                        None => {
                            eprintln!("⚠️ No price or name signal at {url}, skipping");
                            skipped += 1;
                        }
                    },
                }

                self.pause();
            }
        }

        listings.extend_from_slice(curated);

        ExtractionRun {
            listings,
            accepted,
            skipped,
        }
    }

    // Applied after every fetch regardless of outcome.
    fn pause(&self) {
        let (lo, hi) = self.delay_ms;
        if hi == 0 {
            return;
        }
        let wait = rand::thread_rng().gen_range(lo..=hi);
        std::thread::sleep(Duration::from_millis(wait));
    }
}

/// Scrape the declared sources, merge the curated on-campus set, and replace
/// the catalog with the result.
pub fn run_refresh(db: &Database) -> Result<RefreshSummary, ServerError> {
    let fetcher =
        PageFetcher::new().map_err(|e| ServerError::Config(format!("http client: {e}")))?;
    let scraper = HousingScraper::new(fetcher);

    let run = scraper.run_extraction(&sources::default_sources(), &curated::on_campus());
    persist_run(db, "refresh", run)
}

/// Replace the catalog with the curated datasets only, no fetching.
pub fn run_populate(db: &Database) -> Result<RefreshSummary, ServerError> {
    let mut listings = curated::off_campus();
    listings.extend(curated::on_campus());

    let run = ExtractionRun {
        listings,
        accepted: 0,
        skipped: 0,
    };
    persist_run(db, "populate", run)
}

fn persist_run(
    db: &Database,
    mode: &str,
    run: ExtractionRun,
) -> Result<RefreshSummary, ServerError> {
    let started = now_unix();
    let run_id = db
        .with_conn(|conn| refreshes::start_refresh_run(conn, mode, started))
        .unwrap_or(0);

    let total = run.listings.len();
    let result: Result<usize, ServerError> = (|| {
        clear_listings(db)?;
        Ok(bulk_insert(db, &run.listings))
    })();

    let finished = now_unix();
    match result {
        Ok(saved) => {
            let _ = db.with_conn(|conn| {
                refreshes::end_refresh_run(
                    conn,
                    run_id,
                    finished,
                    run.accepted + run.skipped,
                    saved,
                    true,
                    None,
                )
            });
            println!("✅ {mode} complete: {saved}/{total} listings saved");
            Ok(RefreshSummary {
                accepted: run.accepted,
                skipped: run.skipped,
                saved,
                total,
            })
        }
        Err(e) => {
            let _ = db.with_conn(|conn| {
                refreshes::end_refresh_run(
                    conn,
                    run_id,
                    finished,
                    run.accepted + run.skipped,
                    0,
                    false,
                    Some(e.to_string()),
                )
            });
            Err(e)
        }
    }
}

fn now_unix() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
