pub mod amenity;
pub mod room;
