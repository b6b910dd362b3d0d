pub mod filters;
pub mod listing;

pub use filters::HousingFilters;
pub use listing::{Category, HousingListing};
