pub mod catalog;
pub mod room;

pub use catalog::{CatalogError, RoomCatalog};
pub use room::{DeluxeRoom, Room, StandardRoom, SuiteRoom};
