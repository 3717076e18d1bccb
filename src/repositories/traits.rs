//! Common repository traits
//!
//! Generic interfaces for the database operations shared by every
//! repository. Domain-specific finders stay as inherent methods on the
//! concrete repositories.

/// Trait for creating new entities in the database
///
/// # Type Parameters
/// * `Entity` - Type of the stored entity as returned to the caller
/// * `CreateDTO` - DTO carrying the data for creation
pub trait Create<Entity, CreateDTO> {
    /// Inserts a new entity.
    ///
    /// # Returns
    /// * `Ok(Entity)` - Entity as persisted
    /// * `Err(sqlx::Error)` - Error during insertion (unique violations included)
    async fn create(&self, data: &CreateDTO) -> Result<Entity, sqlx::Error>;
}

/// Trait for reading a single entity by primary key
///
/// # Type Parameters
/// * `Entity` - Type of the entity to read
/// * `Id` - Type of the primary key
pub trait Read<Entity, Id> {
    /// Reads an entity by its primary key.
    ///
    /// # Returns
    /// * `Ok(Some(Entity))` - Entity found
    /// * `Ok(None)` - No entity with that id
    /// * `Err(sqlx::Error)` - Error during reading
    async fn read(&self, id: &Id) -> Result<Option<Entity>, sqlx::Error>;
}

/// Trait for deleting entities
///
/// # Type Parameters
/// * `Id` - Type of the primary key
pub trait Delete<Id> {
    /// Deletes an entity. Deleting a missing row is not an error; callers
    /// that need 404 semantics check existence first.
    async fn delete(&self, id: &Id) -> Result<(), sqlx::Error>;
}
