//! Mock flight and hotel supply sources. The recommendation engine is
//! agnostic to how candidates are produced; these suppliers stand in for
//! real inventory integrations and generate plausible candidates from
//! route and city tables.

pub mod flights;
pub mod hotels;

pub use flights::FlightSupplier;
pub use hotels::HotelSupplier;
