// curated.rs
//
// Hand-authored listings that never come from live fetches. The on-campus
// set rides along with every scrape; the off-campus set seeds the catalog
// through the populate flow. Ratings and member counts here are researched
// values, not derived ones.

use crate::domain::{Category, HousingListing};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// The three university residence complexes.
pub fn on_campus() -> Vec<HousingListing> {
    vec![
        HousingListing {
            name: "Broward Hall".to_string(),
            location: "Museum Road, UF Campus".to_string(),
            price_range: "$600-$800".to_string(),
            avg_price: 700,
            category: Category::OnCampus,
            is_international_friendly: true,
            amenities: strings(&["Dining Hall", "Study Lounges", "Laundry", "WiFi"]),
            source_url: "https://housing.ufl.edu/".to_string(),
            distance_to_campus: "On campus".to_string(),
            bus_routes: vec![],
            description: "Traditional residence hall on UF campus with dining facilities and study spaces."
                .to_string(),
            rating: 4.6,
            member_count: 46,
            image_url: Category::OnCampus.default_image_url().to_string(),
        },
        HousingListing {
            name: "Lakeside Complex".to_string(),
            location: "UF Campus".to_string(),
            price_range: "$650-$900".to_string(),
            avg_price: 775,
            category: Category::OnCampus,
            is_international_friendly: true,
            amenities: strings(&["Apartment Style", "Kitchen", "Study Rooms", "Recreation"]),
            source_url: "https://housing.ufl.edu/".to_string(),
            distance_to_campus: "On campus".to_string(),
            bus_routes: vec![],
            description: "Apartment-style residence halls with full kitchens and living areas."
                .to_string(),
            rating: 4.4,
            member_count: 54,
            image_url: Category::OnCampus.default_image_url().to_string(),
        },
        HousingListing {
            name: "Springs Complex".to_string(),
            location: "UF Campus".to_string(),
            price_range: "$700-$950".to_string(),
            avg_price: 825,
            category: Category::OnCampus,
            is_international_friendly: true,
            amenities: strings(&["Modern", "Suite Style", "Dining", "Fitness Center"]),
            source_url: "https://housing.ufl.edu/".to_string(),
            distance_to_campus: "On campus".to_string(),
            bus_routes: vec![],
            description: "Newest residence halls with suite-style living and modern amenities."
                .to_string(),
            rating: 4.9,
            member_count: 39,
            image_url: Category::OnCampus.default_image_url().to_string(),
        },
    ]
}

/// Researched off-campus complexes used to seed the catalog without
/// touching the network.
pub fn off_campus() -> Vec<HousingListing> {
    vec![
        HousingListing {
            name: "Alight Gainesville".to_string(),
            location: "725 NW 13th St".to_string(),
            price_range: "$700-$950".to_string(),
            avg_price: 825,
            category: Category::OffCampus,
            is_international_friendly: true,
            amenities: strings(&["Pool", "Fitness Center", "Study Rooms", "Furnished Options"]),
            source_url: "https://alight-gainesville.com/".to_string(),
            distance_to_campus: "1.2 miles from campus".to_string(),
            bus_routes: strings(&["12", "37"]),
            description: "Modern student apartments with resort-style amenities, fully furnished options, and shuttle service to UF campus."
                .to_string(),
            rating: 4.3,
            member_count: 45,
            image_url: Category::OffCampus.default_image_url().to_string(),
        },
        HousingListing {
            name: "Lark Gainesville".to_string(),
            location: "1245 SW 11th Ave".to_string(),
            price_range: "$750-$1100".to_string(),
            avg_price: 925,
            category: Category::OffCampus,
            is_international_friendly: true,
            amenities: strings(&["Rooftop Pool", "Study Lounge", "Fitness Center", "Parking"]),
            source_url: "https://larkgainesville.com/".to_string(),
            distance_to_campus: "0.8 miles from campus".to_string(),
            bus_routes: strings(&["34"]),
            description: "Premium student living with rooftop amenities and modern finishes, walking distance to campus."
                .to_string(),
            rating: 4.5,
            member_count: 38,
            image_url: Category::OffCampus.default_image_url().to_string(),
        },
        HousingListing {
            name: "The Standard at Gainesville".to_string(),
            location: "University Ave & SW 13th St".to_string(),
            price_range: "$800-$1200".to_string(),
            avg_price: 1000,
            category: Category::OffCampus,
            is_international_friendly: true,
            amenities: strings(&["Rooftop Pool", "Sky Lounge", "Fitness Center", "Study Spaces"]),
            source_url: "https://thestandardgainesville.landmark-properties.com/".to_string(),
            distance_to_campus: "0.5 miles from campus".to_string(),
            bus_routes: strings(&["12", "34"]),
            description: "Luxury high-rise student living in the heart of campus with premium amenities and retail on-site."
                .to_string(),
            rating: 4.7,
            member_count: 52,
            image_url: Category::OffCampus.default_image_url().to_string(),
        },
        HousingListing {
            name: "Hub On Campus Gainesville".to_string(),
            location: "Near University Area".to_string(),
            price_range: "$780-$1050".to_string(),
            avg_price: 915,
            category: Category::OffCampus,
            is_international_friendly: true,
            amenities: strings(&["Pool", "Clubhouse", "Study Rooms", "Pet-Friendly"]),
            source_url: "https://huboncampus.com/gainesville-university/".to_string(),
            distance_to_campus: "1.0 miles from campus".to_string(),
            bus_routes: strings(&["37"]),
            description: "Student-focused community with modern apartments and comprehensive amenities for UF students."
                .to_string(),
            rating: 4.4,
            member_count: 41,
            image_url: Category::OffCampus.default_image_url().to_string(),
        },
        HousingListing {
            name: "Redpoint Gainesville".to_string(),
            location: "5120 SW 13th Pl".to_string(),
            price_range: "$650-$900".to_string(),
            avg_price: 775,
            category: Category::OffCampus,
            is_international_friendly: false,
            amenities: strings(&["Pool", "Fitness Center", "Volleyball Court", "Pet-Friendly"]),
            source_url: "https://redpoint-gainesville.com/".to_string(),
            distance_to_campus: "2.5 miles from campus".to_string(),
            bus_routes: strings(&["37"]),
            description: "Townhomes and flats with resort-style amenities, pet-friendly community with shuttle service."
                .to_string(),
            rating: 4.2,
            member_count: 35,
            image_url: Category::OffCampus.default_image_url().to_string(),
        },
        HousingListing {
            name: "The Retreat at Gainesville".to_string(),
            location: "SW Gainesville".to_string(),
            price_range: "$600-$850".to_string(),
            avg_price: 725,
            category: Category::OffCampus,
            is_international_friendly: false,
            amenities: strings(&["Pool", "Sand Volleyball", "Fitness Center", "Cottages"]),
            source_url: "https://www.retreatgainesville.com/".to_string(),
            distance_to_campus: "3.2 miles from campus".to_string(),
            bus_routes: strings(&["37"]),
            description: "Cottage-style and apartment living with resort amenities and a relaxed atmosphere."
                .to_string(),
            rating: 4.1,
            member_count: 29,
            image_url: Category::OffCampus.default_image_url().to_string(),
        },
        HousingListing {
            name: "University Commons".to_string(),
            location: "SW 20th Avenue".to_string(),
            price_range: "$680-$920".to_string(),
            avg_price: 800,
            category: Category::OffCampus,
            is_international_friendly: true,
            amenities: strings(&["Furnished", "Study Rooms", "Pool", "International Hub"]),
            source_url: "https://universitycommons-gainesville.com/".to_string(),
            distance_to_campus: "1.8 miles from campus".to_string(),
            bus_routes: strings(&["37"]),
            description: "Fully furnished apartments popular with international students, utilities included."
                .to_string(),
            rating: 4.3,
            member_count: 47,
            image_url: Category::OffCampus.default_image_url().to_string(),
        },
        HousingListing {
            name: "Cabana Beach".to_string(),
            location: "SW 75th Street".to_string(),
            price_range: "$580-$780".to_string(),
            avg_price: 680,
            category: Category::OffCampus,
            is_international_friendly: false,
            amenities: strings(&["Beach Volleyball", "Pool", "Budget-Friendly", "Shuttle"]),
            source_url: "https://cabanabeach-gainesville.com/".to_string(),
            distance_to_campus: "4.1 miles from campus".to_string(),
            bus_routes: strings(&["37"]),
            description: "Affordable housing with beach volleyball court and resort-style pool, shuttle to campus."
                .to_string(),
            rating: 3.9,
            member_count: 33,
            image_url: Category::OffCampus.default_image_url().to_string(),
        },
        HousingListing {
            name: "Stoneridge Apartments".to_string(),
            location: "SW 34th Street".to_string(),
            price_range: "$720-$950".to_string(),
            avg_price: 835,
            category: Category::OffCampus,
            is_international_friendly: true,
            amenities: strings(&["Pool", "Gym", "Indian Community", "Shuttle"]),
            source_url: "https://stoneridge-gainesville.com/".to_string(),
            distance_to_campus: "2.8 miles from campus".to_string(),
            bus_routes: strings(&["37"]),
            description: "Popular with international students, especially Indian community, with cultural programming."
                .to_string(),
            rating: 4.5,
            member_count: 45,
            image_url: Category::OffCampus.default_image_url().to_string(),
        },
        HousingListing {
            name: "Lexington Crossing".to_string(),
            location: "SW 35th Place".to_string(),
            price_range: "$670-$890".to_string(),
            avg_price: 780,
            category: Category::OffCampus,
            is_international_friendly: false,
            amenities: strings(&["Pool", "Fitness Center", "Pet-Friendly", "Study Lounge"]),
            source_url: "https://lexington-crossing.com/".to_string(),
            distance_to_campus: "2.1 miles from campus".to_string(),
            bus_routes: strings(&["37"]),
            description: "Family-friendly community with spacious apartments and comprehensive amenities."
                .to_string(),
            rating: 4.0,
            member_count: 41,
            image_url: Category::OffCampus.default_image_url().to_string(),
        },
    ]
}
