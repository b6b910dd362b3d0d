use crate::db::connection::Database;
use crate::domain::{Category, HousingFilters, HousingListing};
use crate::errors::ServerError;
use chrono::Utc;
use rusqlite::types::ToSql;
use rusqlite::{params, params_from_iter};
use serde::Serialize;

/// A listing as it exists in the catalog, id attached.
#[derive(Debug, Serialize)]
pub struct StoredListing {
    pub id: i64,
    #[serde(flatten)]
    pub listing: HousingListing,
}

pub fn insert_listing(db: &Database, listing: &HousingListing) -> Result<i64, ServerError> {
    let now = Utc::now().naive_utc();

    let amenities = serde_json::to_string(&listing.amenities)
        .map_err(|e| ServerError::DbError(e.to_string()))?;
    let bus_routes = serde_json::to_string(&listing.bus_routes)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    db.with_conn(|conn| {
        conn.execute(
            r#"
            INSERT INTO housing (
                name, location, price_range, avg_price, category,
                is_international_friendly, amenities, source_url,
                distance_to_campus, bus_routes, description,
                rating, member_count, image_url,
                created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)
            "#,
            params![
                listing.name,
                listing.location,
                listing.price_range,
                listing.avg_price,
                listing.category.as_str(),
                listing.is_international_friendly,
                amenities,
                listing.source_url,
                listing.distance_to_campus,
                bus_routes,
                listing.description,
                listing.rating,
                listing.member_count,
                listing.image_url,
                now,
                now,
            ],
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;

        Ok(conn.last_insert_rowid())
    })
}

/// Insert each record independently; a record that violates a constraint is
/// logged and skipped while the rest proceed. Returns how many were saved.
pub fn bulk_insert(db: &Database, listings: &[HousingListing]) -> usize {
    let mut saved = 0;
    for listing in listings {
        match insert_listing(db, listing) {
            Ok(_) => saved += 1,
            Err(e) => eprintln!("⚠️ Skipping {}: {e}", listing.name),
        }
    }
    saved
}

/// Filtered catalog query, sorted by rating descending then price ascending.
/// The amenity-intersection filter runs over the decoded rows because the
/// amenity arrays live in JSON text columns.
pub fn query_listings(
    db: &Database,
    filters: &HousingFilters,
) -> Result<Vec<StoredListing>, ServerError> {
    let mut sql = String::from(
        r#"
        SELECT id, name, location, price_range, avg_price, category,
               is_international_friendly, amenities, source_url,
               distance_to_campus, bus_routes, description,
               rating, member_count, image_url
        FROM housing
        WHERE 1=1
        "#,
    );
    let mut values: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some(category) = filters.category {
        sql.push_str(" AND category = ?");
        values.push(Box::new(category.as_str()));
    }
    if let Some(friendly) = filters.international_friendly {
        sql.push_str(" AND is_international_friendly = ?");
        values.push(Box::new(friendly));
    }
    if let Some(min_price) = filters.min_price {
        sql.push_str(" AND avg_price >= ?");
        values.push(Box::new(min_price));
    }
    if let Some(max_price) = filters.max_price {
        sql.push_str(" AND avg_price <= ?");
        values.push(Box::new(max_price));
    }
    if let Some(id) = filters.id {
        sql.push_str(" AND id = ?");
        values.push(Box::new(id));
    }
    if let Some(search) = &filters.search {
        sql.push_str(
            " AND (LOWER(name) LIKE ? OR LOWER(location) LIKE ? OR LOWER(description) LIKE ?)",
        );
        let needle = format!("%{}%", search.to_lowercase());
        values.push(Box::new(needle.clone()));
        values.push(Box::new(needle.clone()));
        values.push(Box::new(needle));
    }

    sql.push_str(" ORDER BY rating DESC, avg_price ASC");

    let rows = db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mapped = stmt
            .query_map(params_from_iter(values.iter().map(|v| v.as_ref())), |row| {
                let category_text: String = row.get(5)?;
                let category = Category::parse(&category_text).ok_or_else(|| {
                    rusqlite::Error::FromSqlConversionFailure(
                        5,
                        rusqlite::types::Type::Text,
                        format!("unknown category: {category_text}").into(),
                    )
                })?;

                let amenities_json: String = row.get(7)?;
                let bus_routes_json: String = row.get(10)?;

                Ok(StoredListing {
                    id: row.get(0)?,
                    listing: HousingListing {
                        name: row.get(1)?,
                        location: row.get(2)?,
                        price_range: row.get(3)?,
                        avg_price: row.get(4)?,
                        category,
                        is_international_friendly: row.get(6)?,
                        amenities: serde_json::from_str(&amenities_json).unwrap_or_default(),
                        source_url: row.get(8)?,
                        distance_to_campus: row.get(9)?,
                        bus_routes: serde_json::from_str(&bus_routes_json).unwrap_or_default(),
                        description: row.get(11)?,
                        rating: row.get(12)?,
                        member_count: row.get(13)?,
                        image_url: row.get(14)?,
                    },
                })
            })
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut out = Vec::new();
        for row in mapped {
            out.push(row.map_err(|e| ServerError::DbError(e.to_string()))?);
        }
        Ok(out)
    })?;

    if filters.amenities.is_empty() {
        return Ok(rows);
    }

    // Keep rows whose amenity set intersects the requested one.
    let wanted: Vec<String> = filters.amenities.iter().map(|a| a.to_lowercase()).collect();
    Ok(rows
        .into_iter()
        .filter(|row| {
            row.listing
                .amenities
                .iter()
                .any(|a| wanted.contains(&a.to_lowercase()))
        })
        .collect())
}

/// Wipe the catalog before a fresh population run.
pub fn clear_listings(db: &Database) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        conn.execute("DELETE FROM housing", [])
            .map_err(|e| ServerError::DbError(e.to_string()))?;
        Ok(())
    })
}
