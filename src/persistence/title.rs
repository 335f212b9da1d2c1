//! Title updates, the saving collaborator for the `{id, title}` shape.

use std::sync::Arc;

use crate::error::EngineResult;

use super::gateway::{EmployeePersistenceGateway, TitleFields};

/// Saves job titles through a gateway that only knows about titles.
///
/// Each call makes exactly one save attempt. Failures come back unchanged.
#[derive(Clone)]
pub struct TitleUpdater {
    gateway: Arc<dyn EmployeePersistenceGateway<TitleFields>>,
}

impl TitleUpdater {
    /// Creates an updater over `gateway`.
    pub fn new(gateway: Arc<dyn EmployeePersistenceGateway<TitleFields>>) -> Self {
        Self { gateway }
    }

    /// Saves `title` for the employee `id`, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Propagates the gateway's validation or persistence error.
    pub async fn update_title(&self, id: &str, title: &str) -> EngineResult<()> {
        let fields = TitleFields {
            title: title.trim().to_string(),
        };
        self.gateway.save(id, fields).await
    }
}
