pub mod amenity_repo;
pub mod room_repo;

pub use amenity_repo::AmenityRepo;
pub use room_repo::RoomRepo;
