pub mod competitor;
pub mod group;
pub mod result;
pub mod table;
pub mod tournament;
