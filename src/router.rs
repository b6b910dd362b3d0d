use crate::db::housing::{query_listings, StoredListing};
use crate::db::Database;
use crate::domain::{Category, HousingFilters};
use crate::errors::ServerError;
use crate::responses::{json_response, ResultResp};
use crate::scraper::{run_populate, run_refresh};
use astra::Request;
use serde::Serialize;
use serde_json::json;
use std::collections::HashMap;

pub fn handle(req: Request, db: &Database) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => json_response(
            200,
            &json!({
                "message": "Gainesville Housing API",
                "version": env!("CARGO_PKG_VERSION"),
            }),
        ),

        ("GET", "/api/housing") => {
            let filters = parse_filters(&parse_query(&req))?;
            let rows = query_listings(db, &filters)?;
            let housing: Vec<ListingView> = rows.iter().map(ListingView::from).collect();
            json_response(
                200,
                &json!({
                    "housing": housing,
                    "total": housing.len(),
                    "filters_applied": filters,
                }),
            )
        }

        ("GET", "/api/housing/stats") => {
            let rows = query_listings(db, &HousingFilters::default())?;
            json_response(200, &stats_payload(&rows))
        }

        ("POST", "/api/housing/refresh") => {
            let summary = run_refresh(db)?;
            json_response(
                200,
                &json!({
                    "message": "Housing data refreshed successfully",
                    "summary": summary,
                }),
            )
        }

        ("POST", "/api/housing/populate") => {
            let summary = run_populate(db)?;
            json_response(
                200,
                &json!({
                    "message": "Housing data populated successfully",
                    "summary": summary,
                }),
            )
        }

        ("GET", p) if p.starts_with("/api/housing/") => {
            let raw_id = &p["/api/housing/".len()..];
            let id: i64 = raw_id
                .parse()
                .map_err(|_| ServerError::BadRequest(format!("invalid housing id: {raw_id}")))?;

            let rows = query_listings(db, &HousingFilters::by_id(id))?;
            match rows.first() {
                Some(row) => json_response(200, &ListingView::from(row)),
                None => Err(ServerError::NotFound),
            }
        }

        _ => Err(ServerError::NotFound),
    }
}

/// Listing shape the frontend consumes; camelCase keys, first bus route
/// flattened out of the array.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ListingView {
    id: i64,
    name: String,
    location: String,
    price: String,
    price_value: i64,
    rating: f64,
    members: i64,
    image: String,
    tags: Vec<String>,
    bus_route: String,
    area: String,
    housing_type: Category,
    international_friendly: bool,
    description: String,
}

impl From<&StoredListing> for ListingView {
    fn from(row: &StoredListing) -> Self {
        let listing = &row.listing;
        Self {
            id: row.id,
            name: listing.name.clone(),
            location: listing.location.clone(),
            price: listing.price_range.clone(),
            price_value: listing.avg_price,
            rating: listing.rating,
            members: listing.member_count,
            image: listing.image_url.clone(),
            tags: listing.amenities.clone(),
            bus_route: listing.bus_routes.first().cloned().unwrap_or_default(),
            area: listing.distance_to_campus.clone(),
            housing_type: listing.category,
            international_friendly: listing.is_international_friendly,
            description: listing.description.clone(),
        }
    }
}

fn stats_payload(rows: &[StoredListing]) -> serde_json::Value {
    let on_campus = rows
        .iter()
        .filter(|r| r.listing.category == Category::OnCampus)
        .count();
    let international = rows
        .iter()
        .filter(|r| r.listing.is_international_friendly)
        .count();

    let prices: Vec<i64> = rows.iter().map(|r| r.listing.avg_price).collect();
    let min = prices.iter().min().copied().unwrap_or(0);
    let max = prices.iter().max().copied().unwrap_or(0);
    let avg = if prices.is_empty() {
        0
    } else {
        prices.iter().sum::<i64>() / prices.len() as i64
    };

    json!({
        "total_listings": rows.len(),
        "on_campus_count": on_campus,
        "off_campus_count": rows.len() - on_campus,
        "international_friendly_count": international,
        "price_range": { "min": min, "max": max, "avg": avg },
    })
}

fn parse_filters(params: &HashMap<String, String>) -> Result<HousingFilters, ServerError> {
    let mut filters = HousingFilters::default();

    if let Some(v) = params.get("housing_type") {
        filters.category = Some(
            Category::parse(v)
                .ok_or_else(|| ServerError::BadRequest(format!("unknown housing_type: {v}")))?,
        );
    }
    if let Some(v) = params.get("international_friendly") {
        filters.international_friendly = Some(v.parse().map_err(|_| {
            ServerError::BadRequest(format!("international_friendly must be a bool, got: {v}"))
        })?);
    }
    if let Some(v) = params.get("min_price") {
        filters.min_price = Some(parse_price("min_price", v)?);
    }
    if let Some(v) = params.get("max_price") {
        filters.max_price = Some(parse_price("max_price", v)?);
    }
    if let Some(v) = params.get("id") {
        filters.id = Some(
            v.parse()
                .map_err(|_| ServerError::BadRequest(format!("invalid id: {v}")))?,
        );
    }
    if let Some(v) = params.get("search") {
        filters.search = Some(v.clone());
    }
    if let Some(v) = params.get("amenities") {
        filters.amenities = v
            .split(',')
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .collect();
    }

    Ok(filters)
}

fn parse_price(field: &str, value: &str) -> Result<i64, ServerError> {
    value
        .parse()
        .map_err(|_| ServerError::BadRequest(format!("{field} must be an integer, got: {value}")))
}

fn parse_query(req: &astra::Request) -> HashMap<String, String> {
    let mut map = HashMap::new();

    if let Some(q) = req.uri().query() {
        for pair in q.split('&') {
            let mut parts = pair.splitn(2, '=');
            if let (Some(k), Some(v)) = (parts.next(), parts.next()) {
                map.insert(k.to_string(), v.to_string());
            }
        }
    }

    map
}
