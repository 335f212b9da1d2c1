//! Employee persistence boundary.
//!
//! Saving is split by field shape: a caller depends on
//! `EmployeePersistenceGateway<TitleFields>` (or whichever shape it writes),
//! never on a repository covering the whole record. This is the only part of
//! the engine with external effects.

mod gateway;
mod memory;
mod title;

pub use gateway::{EmployeePersistenceGateway, FieldSet, HoursFields, ProfileFields, TitleFields};
pub use memory::{InMemoryEmployeeStore, StoredEmployee};
pub use title::TitleUpdater;
