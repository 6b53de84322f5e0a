//! Vehicle catalog: records, search criteria, and the read-only store.
//!
//! The store offers two pure queries, [`Catalog::lookup`] and
//! [`Catalog::filter`]. Neither raises on a miss.

mod criteria;
mod record;
mod store;

pub use criteria::{parse_amount, text_value, Amount, SearchCriteria};
pub use record::{InspectionItem, InspectionReport, ServiceEntry, VehicleRecord};
pub use store::{Catalog, CatalogError, MAX_SCORE};
