use crate::room::{DeluxeRoom, Room, StandardRoom, SuiteRoom};

/// Registry of the room categories a property offers.
///
/// Categories are looked up by display name. The stock set carries the three
/// shipped categories; callers register further impls at runtime.
pub struct RoomCatalog {
    rooms: Vec<Box<dyn Room>>,
}

impl RoomCatalog {
    pub fn new() -> Self {
        Self { rooms: Vec::new() }
    }

    /// Catalog pre-loaded with the stock categories.
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.register(Box::new(StandardRoom));
        catalog.register(Box::new(DeluxeRoom));
        catalog.register(Box::new(SuiteRoom));
        catalog
    }

    /// Add a category. The earliest registration wins on name clashes.
    pub fn register(&mut self, room: Box<dyn Room>) {
        self.rooms.push(room);
    }

    /// Look up a category by its display name.
    pub fn find(&self, name: &str) -> Result<&dyn Room, CatalogError> {
        self.rooms
            .iter()
            .map(|room| room.as_ref())
            .find(|room| room.name() == name)
            .ok_or_else(|| CatalogError::UnknownRoom(name.to_string()))
    }

    /// Iterate over every registered category.
    pub fn rooms(&self) -> impl Iterator<Item = &dyn Room> {
        self.rooms.iter().map(|room| room.as_ref())
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl Default for RoomCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Unknown room: {0}")]
    UnknownRoom(String),
}
