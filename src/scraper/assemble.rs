// assemble.rs
//
// Turns one fetched page into at most one HousingListing. A page with
// neither a price signal nor an identifiable name is rejected outright.

use crate::domain::{Category, HousingListing};
use crate::scraper::extract;

pub fn assemble(source_url: &str, category: Category, text: &str) -> Option<HousingListing> {
    let prices = extract::extract_prices(text);
    let name = extract::extract_name(source_url, text);

    // No pricing and no recognizable name means there is nothing worth
    // cataloging on this page.
    if prices.is_empty() && name == extract::PLACEHOLDER_NAME {
        return None;
    }

    let (avg_price, price_range) = extract::summarize_prices(&prices);

    // Distance keys off the raw extracted address; the location default is
    // applied afterwards so an unresolved address still gets the default tier.
    let location = extract::extract_location(text);
    let distance_to_campus = extract::estimate_distance(location.as_deref().unwrap_or(""));
    let location = location.unwrap_or_else(|| extract::DEFAULT_LOCATION.to_string());

    let rating = derive_rating(&name);
    let member_count = derive_member_count(&name);

    Some(HousingListing {
        rating,
        member_count,
        image_url: category.default_image_url().to_string(),
        is_international_friendly: extract::is_international_friendly(text),
        amenities: extract::extract_amenities(text),
        bus_routes: extract::extract_bus_routes(text),
        description: extract::extract_description(text),
        source_url: source_url.to_string(),
        name,
        location,
        price_range,
        avg_price,
        category,
        distance_to_campus,
    })
}

/// Rating in [4.0, 4.9], derived from the name so repeated runs over the same
/// sources produce identical records on any platform.
pub fn derive_rating(name: &str) -> f64 {
    4.0 + (fnv1a(name) % 10) as f64 / 10.0
}

/// Member count in [20, 59], same derivation as the rating.
pub fn derive_member_count(name: &str) -> i64 {
    20 + (fnv1a(name) % 40) as i64
}

// FNV-1a over UTF-8 bytes. Chosen over the stdlib hasher because its output
// is specified and stable across platforms and releases.
fn fnv1a(input: &str) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = OFFSET_BASIS;
    for byte in input.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fnv1a_matches_reference_vectors() {
        assert_eq!(fnv1a(""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(fnv1a("a"), 0xaf63_dc4c_8601_ec8c);
    }

    #[test]
    fn derived_values_stay_in_bounds() {
        for name in ["Alight Gainesville", "Broward Hall", "Student Housing", ""] {
            let rating = derive_rating(name);
            assert!((4.0..=4.9).contains(&rating), "rating {rating} for {name:?}");

            let members = derive_member_count(name);
            assert!((20..=59).contains(&members), "members {members} for {name:?}");
        }
    }

    #[test]
    fn derivation_is_deterministic() {
        assert_eq!(derive_rating("Lark Gainesville"), derive_rating("Lark Gainesville"));
        assert_eq!(
            derive_member_count("Lark Gainesville"),
            derive_member_count("Lark Gainesville")
        );
    }

    #[test]
    fn page_without_price_or_name_is_rejected() {
        let listing = assemble(
            "https://example.com/",
            Category::OffCampus,
            "generic words with no price and no property name",
        );
        assert!(listing.is_none());
    }

    #[test]
    fn known_host_without_prices_still_assembles() {
        let listing = assemble(
            "https://redpoint-gainesville.com/",
            Category::OffCampus,
            "Call for rates",
        )
        .unwrap();

        assert_eq!(listing.name, "Redpoint Gainesville");
        assert_eq!(listing.avg_price, extract::DEFAULT_AVG_PRICE);
        assert_eq!(listing.price_range, "$750");
        assert_eq!(listing.location, extract::DEFAULT_LOCATION);
        assert_eq!(listing.distance_to_campus, "2.5 miles from campus");
    }

    #[test]
    fn assembled_listing_covers_all_signals() {
        let text = "Welcome home. Rents from $700/month to $950/month. \
                    Enjoy the pool and our shuttle to campus. \
                    Great for international students. \
                    Located at 1245 SW Archer Road. Served by Route 12 and Bus 12.";
        let listing = assemble("https://alight-gainesville.com/", Category::OffCampus, text).unwrap();

        assert_eq!(listing.name, "Alight Gainesville");
        assert_eq!(listing.category, Category::OffCampus);
        assert!(listing.is_international_friendly);
        assert!(listing.amenities.contains(&"Pool".to_string()));
        assert!(listing.amenities.contains(&"Shuttle".to_string()));
        assert!((700..=950).contains(&listing.avg_price));
        assert_eq!(listing.price_range, "$700-$950");
        assert_eq!(listing.location, "1245 SW Archer Road");
        assert_eq!(listing.bus_routes, vec!["12"]);
        assert_eq!(listing.image_url, Category::OffCampus.default_image_url());
        assert!(listing.description.chars().count() <= 200);
    }
}
