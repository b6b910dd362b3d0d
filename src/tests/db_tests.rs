use crate::db::housing::{bulk_insert, clear_listings, insert_listing, query_listings};
use crate::domain::{Category, HousingFilters};
use crate::tests::utils::{make_db, sample_listing};

#[test]
fn insert_then_query_round_trips_a_listing() {
    let db = make_db();
    let mut listing = sample_listing("Alight Gainesville", Category::OffCampus, 825);
    listing.bus_routes = vec!["12".to_string(), "37".to_string()];

    let id = insert_listing(&db, &listing).unwrap();
    assert!(id > 0);

    let rows = query_listings(&db, &HousingFilters::by_id(id)).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, id);
    assert_eq!(rows[0].listing, listing);
}

#[test]
fn bulk_insert_skips_bad_records_and_keeps_going() {
    let db = make_db();

    let good_one = sample_listing("First Ok", Category::OffCampus, 700);
    let mut bad = sample_listing("Negative Price", Category::OffCampus, 700);
    bad.avg_price = -5; // violates the avg_price >= 0 check
    let good_two = sample_listing("Second Ok", Category::OnCampus, 800);

    let saved = bulk_insert(&db, &[good_one, bad, good_two]);
    assert_eq!(saved, 2);

    let rows = query_listings(&db, &HousingFilters::default()).unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.listing.name != "Negative Price"));
}

#[test]
fn results_sort_by_rating_desc_then_price_asc() {
    let db = make_db();

    let mut cheap_good = sample_listing("Cheap Good", Category::OffCampus, 600);
    cheap_good.rating = 4.8;
    let mut pricey_good = sample_listing("Pricey Good", Category::OffCampus, 900);
    pricey_good.rating = 4.8;
    let mut mediocre = sample_listing("Mediocre", Category::OffCampus, 500);
    mediocre.rating = 4.1;

    bulk_insert(&db, &[pricey_good, mediocre, cheap_good]);

    let rows = query_listings(&db, &HousingFilters::default()).unwrap();
    let names: Vec<&str> = rows.iter().map(|r| r.listing.name.as_str()).collect();
    assert_eq!(names, vec!["Cheap Good", "Pricey Good", "Mediocre"]);
}

#[test]
fn scalar_filters_compose() {
    let db = make_db();
    bulk_insert(
        &db,
        &[
            sample_listing("On Cheap", Category::OnCampus, 600),
            sample_listing("On Pricey", Category::OnCampus, 1000),
            sample_listing("Off Mid", Category::OffCampus, 800),
        ],
    );

    let filters = HousingFilters {
        category: Some(Category::OnCampus),
        min_price: Some(500),
        max_price: Some(700),
        ..HousingFilters::default()
    };
    let rows = query_listings(&db, &filters).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].listing.name, "On Cheap");
}

#[test]
fn international_filter_is_tri_state() {
    let db = make_db();
    let mut friendly = sample_listing("Friendly", Category::OffCampus, 700);
    friendly.is_international_friendly = true;
    let unfriendly = sample_listing("Unfriendly", Category::OffCampus, 700);
    bulk_insert(&db, &[friendly, unfriendly]);

    let all = query_listings(&db, &HousingFilters::default()).unwrap();
    assert_eq!(all.len(), 2);

    let only_friendly = query_listings(
        &db,
        &HousingFilters {
            international_friendly: Some(true),
            ..HousingFilters::default()
        },
    )
    .unwrap();
    assert_eq!(only_friendly.len(), 1);
    assert_eq!(only_friendly[0].listing.name, "Friendly");

    let only_unfriendly = query_listings(
        &db,
        &HousingFilters {
            international_friendly: Some(false),
            ..HousingFilters::default()
        },
    )
    .unwrap();
    assert_eq!(only_unfriendly.len(), 1);
    assert_eq!(only_unfriendly[0].listing.name, "Unfriendly");
}

#[test]
fn search_is_case_insensitive_over_name_location_description() {
    let db = make_db();
    let mut listing = sample_listing("Lark Gainesville", Category::OffCampus, 900);
    listing.description = "Premium ROOFTOP living.".to_string();
    bulk_insert(&db, &[listing, sample_listing("Other", Category::OffCampus, 700)]);

    for term in ["lark", "rooftop", "gainesville, fl"] {
        let rows = query_listings(
            &db,
            &HousingFilters {
                search: Some(term.to_string()),
                ..HousingFilters::default()
            },
        )
        .unwrap();
        assert!(
            rows.iter().any(|r| r.listing.name == "Lark Gainesville"),
            "search {term:?} missed the listing"
        );
    }
}

#[test]
fn amenity_filter_matches_on_intersection() {
    let db = make_db();
    let mut with_gym = sample_listing("Gym Place", Category::OffCampus, 700);
    with_gym.amenities = vec!["Gym".to_string(), "Laundry".to_string()];
    let pool_only = sample_listing("Pool Place", Category::OffCampus, 700);
    bulk_insert(&db, &[with_gym, pool_only]);

    let rows = query_listings(
        &db,
        &HousingFilters {
            amenities: vec!["gym".to_string(), "tennis".to_string()],
            ..HousingFilters::default()
        },
    )
    .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].listing.name, "Gym Place");
}

#[test]
fn clear_listings_empties_the_catalog() {
    let db = make_db();
    bulk_insert(&db, &[sample_listing("Anything", Category::OffCampus, 700)]);

    clear_listings(&db).unwrap();

    let rows = query_listings(&db, &HousingFilters::default()).unwrap();
    assert!(rows.is_empty());
}
