//! Static lookup tables: Georgia counties, service regions, and FAQ copy.

pub mod counties;
pub mod faq;

pub use counties::{
    all_counties, county_slug, find_by_name, find_by_slug, nearby_counties, County, Region,
};
pub use faq::{faq_entries, FaqEntry};
