// Field extractors for housing pages.
//
// Each extractor is a pure function over the fetched readable text (plus the
// source url for the name heuristic). They never fail: an unmatchable page
// simply yields the field's default. Keyword vocabularies are public so tests
// and future sources can see exactly what is recognized.

use regex::Regex;
use url::Url;

/// Name used when neither the host table nor the content patterns match.
pub const PLACEHOLDER_NAME: &str = "Student Housing";

/// Applied by the assembler when no street address is found in the text.
pub const DEFAULT_LOCATION: &str = "Gainesville, FL";

/// Monthly price assumed when a page shows no dollar amounts at all.
pub const DEFAULT_AVG_PRICE: i64 = 750;

pub const DEFAULT_DESCRIPTION: &str =
    "Student housing in Gainesville near University of Florida.";

/// Recognized amenity keywords, in presentation order. Matches are
/// title-cased and capped at eight per listing.
pub const AMENITY_VOCAB: &[&str] = &[
    "pool",
    "gym",
    "fitness",
    "parking",
    "furnished",
    "laundry",
    "wifi",
    "internet",
    "study",
    "lounge",
    "tennis",
    "basketball",
    "volleyball",
    "pet-friendly",
    "shuttle",
    "bus",
];

const MAX_AMENITIES: usize = 8;

/// Signals that a property markets itself to international students.
pub const INTERNATIONAL_KEYWORDS: &[&str] = &[
    "international",
    "global",
    "furnished",
    "short-term",
    "all-inclusive",
    "utilities included",
    "no guarantor",
    "visa",
    "f-1",
    "student visa",
];

// Property sites we already know by their hostname.
const KNOWN_HOSTS: &[(&str, &str)] = &[
    ("alight", "Alight Gainesville"),
    ("lark", "Lark Gainesville"),
    ("standard", "The Standard at Gainesville"),
    ("huboncampus", "Hub On Campus Gainesville"),
    ("redpoint", "Redpoint Gainesville"),
    ("retreat", "The Retreat at Gainesville"),
];

// "/month"-suffixed amounts first, then bare dollar amounts.
const PRICE_PATTERNS: &[&str] = &[
    r"(?i)\$(\d+(?:,\d+)?)(?:/month|/mo|per month)",
    r"\$(\d+(?:,\d+)?)",
];

const NAME_PATTERNS: &[&str] = &[
    r"(?:Welcome to|About) ([A-Z][A-Za-z\s&]+(?:Gainesville|Apartments|Village|Commons))",
    r"([A-Z][A-Za-z\s&]+(?:Gainesville|Apartments|Village|Commons))",
];

const LOCATION_PATTERNS: &[&str] = &[
    r"(?i)(\d+\s+(?:SW|NW|SE|NE|North|South|East|West)\s+[A-Za-z\s]+(?:Street|Ave|Avenue|Place|Road|Dr|Drive))",
    r"(?i)((?:SW|NW|SE|NE)\s+\d+\w*\s+(?:Street|Ave|Avenue|Place|Road))",
];

// RTS route mentions.
const ROUTE_PATTERNS: &[&str] = &[
    r"(?i)route\s+(\d+)",
    r"(?i)rts\s+(\d+)",
    r"(?i)bus\s+(\d+)",
];

const NEAR_CAMPUS_MARKERS: &[&str] = &["13th", "university", "campus"];
const MID_RANGE_MARKERS: &[&str] = &["20th", "34th", "35th"];

/// Collect every dollar amount in the text, commas stripped, in pattern-major
/// order of appearance.
pub fn extract_prices(text: &str) -> Vec<i64> {
    let mut prices = Vec::new();
    for pattern in PRICE_PATTERNS {
        if let Ok(re) = Regex::new(pattern) {
            for caps in re.captures_iter(text) {
                let digits = caps[1].replace(',', "");
                if let Ok(amount) = digits.parse::<i64>() {
                    prices.push(amount);
                }
            }
        }
    }
    prices
}

/// Reduce price samples to (avg_price, price_range) per the catalog rules:
/// floor mean of the first three samples, and a "$min-$max" range whenever
/// more than one distinct value was seen.
pub fn summarize_prices(samples: &[i64]) -> (i64, String) {
    if samples.is_empty() {
        return (DEFAULT_AVG_PRICE, format!("${DEFAULT_AVG_PRICE}"));
    }

    let leading = &samples[..samples.len().min(3)];
    let avg = leading.iter().sum::<i64>() / leading.len() as i64;

    let min = samples.iter().min().copied().unwrap_or(avg);
    let max = samples.iter().max().copied().unwrap_or(avg);
    let range = if min != max {
        format!("${min}-${max}")
    } else {
        format!("${avg}")
    };

    (avg, range)
}

/// Resolve the property name: known hostnames first, then capitalized phrases
/// in the content ending in a property-type noun, then the placeholder.
pub fn extract_name(source_url: &str, text: &str) -> String {
    if let Ok(parsed) = Url::parse(source_url) {
        if let Some(host) = parsed.host_str() {
            for (needle, name) in KNOWN_HOSTS {
                if host.contains(needle) {
                    return (*name).to_string();
                }
            }
        }
    }

    for pattern in NAME_PATTERNS {
        if let Ok(re) = Regex::new(pattern) {
            if let Some(caps) = re.captures(text) {
                return caps[1].trim().to_string();
            }
        }
    }

    PLACEHOLDER_NAME.to_string()
}

/// First street-address-like phrase in the text, or None.
pub fn extract_location(text: &str) -> Option<String> {
    for pattern in LOCATION_PATTERNS {
        if let Ok(re) = Regex::new(pattern) {
            if let Some(caps) = re.captures(text) {
                return Some(caps[1].trim().to_string());
            }
        }
    }
    None
}

/// Vocabulary scan over the lower-cased text. Matches keep vocabulary order.
pub fn extract_amenities(text: &str) -> Vec<String> {
    amenities_from_vocab(text, AMENITY_VOCAB)
}

/// Same scan against a caller-supplied vocabulary.
pub fn amenities_from_vocab(text: &str, vocab: &[&str]) -> Vec<String> {
    let lower = text.to_lowercase();
    vocab
        .iter()
        .filter(|keyword| lower.contains(*keyword))
        .map(|keyword| title_case(keyword))
        .take(MAX_AMENITIES)
        .collect()
}

pub fn is_international_friendly(text: &str) -> bool {
    matches_any_keyword(text, INTERNATIONAL_KEYWORDS)
}

pub fn matches_any_keyword(text: &str, keywords: &[&str]) -> bool {
    let lower = text.to_lowercase();
    keywords.iter().any(|keyword| lower.contains(keyword))
}

/// Three-tier distance label from the resolved location string. The tiers key
/// off street names; an unresolved (empty) location gets a fixed default.
pub fn estimate_distance(location: &str) -> String {
    if location.is_empty() {
        return "2.5 miles from campus".to_string();
    }

    let lower = location.to_lowercase();
    if NEAR_CAMPUS_MARKERS.iter().any(|m| lower.contains(m)) {
        "0.5-1.5 miles from campus".to_string()
    } else if MID_RANGE_MARKERS.iter().any(|m| lower.contains(m)) {
        "1.5-3 miles from campus".to_string()
    } else {
        "2-4 miles from campus".to_string()
    }
}

/// Deduplicated numeric route ids, sorted for stable output.
pub fn extract_bus_routes(text: &str) -> Vec<String> {
    let mut routes = std::collections::BTreeSet::new();
    for pattern in ROUTE_PATTERNS {
        if let Ok(re) = Regex::new(pattern) {
            for caps in re.captures_iter(text) {
                routes.insert(caps[1].to_string());
            }
        }
    }
    routes.into_iter().collect()
}

/// Leading five sentences, rejoined and clipped to 200 chars (ellipsis
/// included when clipped).
pub fn extract_description(text: &str) -> String {
    let sentences: Vec<&str> = text.split('.').take(5).collect();
    let joined = sentences.join(". ");
    let trimmed = joined.trim();

    let description = if trimmed.chars().count() > 200 {
        let clipped: String = trimmed.chars().take(197).collect();
        format!("{clipped}...")
    } else {
        trimmed.to_string()
    };

    if description.is_empty() {
        DEFAULT_DESCRIPTION.to_string()
    } else {
        description
    }
}

// Python-style title case: uppercase each letter that follows a non-letter.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut start_of_word = true;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if start_of_word {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            start_of_word = false;
        } else {
            out.push(ch);
            start_of_word = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monthly_price_is_captured() {
        let prices = extract_prices("Rates from $825/month at move-in");
        assert!(prices.contains(&825));
    }

    #[test]
    fn comma_prices_are_stripped() {
        let prices = extract_prices("Penthouse units at $1,200/month");
        assert!(prices.contains(&1200));
    }

    #[test]
    fn no_dollar_amounts_means_defaults() {
        let prices = extract_prices("Call for rates. Tour today.");
        assert!(prices.is_empty());

        let (avg, range) = summarize_prices(&prices);
        assert_eq!(avg, 750);
        assert_eq!(range, "$750");
    }

    #[test]
    fn average_uses_first_three_samples() {
        let (avg, range) = summarize_prices(&[700, 950, 900, 4000]);
        assert_eq!(avg, (700 + 950 + 900) / 3);
        assert_eq!(range, "$700-$4000");
    }

    #[test]
    fn single_distinct_price_collapses_range() {
        // "$825/month" matches both price patterns, but the range must not
        // read "$825-$825".
        let prices = extract_prices("Just $825/month");
        let (avg, range) = summarize_prices(&prices);
        assert_eq!(avg, 825);
        assert_eq!(range, "$825");
    }

    #[test]
    fn known_host_wins_over_content() {
        let name = extract_name(
            "https://alight-gainesville.com/floorplans",
            "Welcome to Palm Apartments",
        );
        assert_eq!(name, "Alight Gainesville");
    }

    #[test]
    fn name_from_content_phrase() {
        let name = extract_name(
            "https://example.com/",
            "some text. Welcome to Palm Grove Apartments and more",
        );
        assert_eq!(name, "Palm Grove Apartments");
    }

    #[test]
    fn name_falls_back_to_placeholder() {
        let name = extract_name("https://example.com/", "no property mentioned here");
        assert_eq!(name, PLACEHOLDER_NAME);
    }

    #[test]
    fn street_address_is_extracted() {
        let location = extract_location("Visit us at 1245 SW Archer Road today");
        assert_eq!(location.as_deref(), Some("1245 SW Archer Road"));
    }

    #[test]
    fn numbered_street_matches_directional_pattern() {
        // Numbered streets fall through to the second pattern, which anchors
        // on the directional prefix rather than the house number.
        let location = extract_location("Visit us at 725 NW 13th Street today");
        assert_eq!(location.as_deref(), Some("NW 13th Street"));
    }

    #[test]
    fn directional_prefix_address_is_extracted() {
        let location = extract_location("located on SW 34th Street near the mall");
        assert_eq!(location.as_deref(), Some("SW 34th Street"));
    }

    #[test]
    fn missing_address_yields_none() {
        assert_eq!(extract_location("luxury living at its finest"), None);
    }

    #[test]
    fn amenities_are_case_insensitive_and_title_cased() {
        let amenities = extract_amenities("Enjoy our POOL, fitness center, and Pet-Friendly policy");
        assert_eq!(amenities, vec!["Pool", "Fitness", "Pet-Friendly"]);
    }

    #[test]
    fn amenities_cap_at_eight() {
        let text = "pool gym fitness parking furnished laundry wifi internet study lounge";
        let amenities = extract_amenities(text);
        assert_eq!(amenities.len(), 8);
        for amenity in &amenities {
            let lower = amenity.to_lowercase();
            assert!(AMENITY_VOCAB.contains(&lower.as_str()), "{amenity} not in vocab");
        }
    }

    #[test]
    fn vocabularies_are_substitutable() {
        let amenities = amenities_from_vocab("sauna and rooftop deck", &["rooftop", "sauna"]);
        assert_eq!(amenities, vec!["Rooftop", "Sauna"]);

        assert!(matches_any_keyword("near the stadium", &["stadium"]));
        assert!(!matches_any_keyword("near the stadium", &["arena"]));
    }

    #[test]
    fn friendliness_keywords_match() {
        assert!(is_international_friendly("Utilities Included in every plan"));
        assert!(is_international_friendly("perfect for F-1 students"));
        assert!(!is_international_friendly("two bedroom townhomes"));
    }

    #[test]
    fn distance_tiers() {
        assert_eq!(estimate_distance(""), "2.5 miles from campus");
        assert_eq!(estimate_distance("725 NW 13th Street"), "0.5-1.5 miles from campus");
        assert_eq!(estimate_distance("SW 34th Street"), "1.5-3 miles from campus");
        assert_eq!(estimate_distance("SW 75th Street"), "2-4 miles from campus");
    }

    #[test]
    fn distance_is_deterministic() {
        let location = "University Ave & SW 13th St";
        assert_eq!(estimate_distance(location), estimate_distance(location));
    }

    #[test]
    fn bus_routes_are_deduplicated() {
        let routes = extract_bus_routes("Take Route 12 or catch Bus 12 at the stop; RTS 37 also runs");
        assert_eq!(routes, vec!["12", "37"]);
    }

    #[test]
    fn description_keeps_first_five_sentences() {
        let text = "One. Two. Three. Four. Five. Six. Seven";
        let description = extract_description(text);
        assert!(description.contains("Five"));
        assert!(!description.contains("Six"));
    }

    #[test]
    fn long_description_is_clipped_with_ellipsis() {
        let text = "a".repeat(300);
        let description = extract_description(&text);
        assert_eq!(description.chars().count(), 200);
        assert!(description.ends_with("..."));
    }

    #[test]
    fn empty_text_gets_default_description() {
        assert_eq!(extract_description(""), DEFAULT_DESCRIPTION);
    }
}
