//! In-memory backing store.
//!
//! Stands in for a real database. Every saved shape is merged into one JSON
//! document per employee ID.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};

use super::gateway::{EmployeePersistenceGateway, FieldSet};

/// A stored employee document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredEmployee {
    /// The employee ID.
    pub id: String,
    /// Every field saved so far, across all shapes.
    pub fields: Map<String, Value>,
    /// Number of saves applied to this document.
    pub version: u64,
    /// Time of the most recent save.
    pub updated_at: DateTime<Utc>,
}

/// Thread-safe in-memory employee store.
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeStore {
    documents: Arc<RwLock<HashMap<String, StoredEmployee>>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryEmployeeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the store as unavailable; every save fails until cleared.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Returns the stored document for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotFound`] if nothing has been saved for `id`.
    pub async fn fetch(&self, id: &str) -> EngineResult<StoredEmployee> {
        self.documents
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| EngineError::NotFound { id: id.to_string() })
    }

    /// Number of stored employees.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    /// Returns true if nothing has been stored.
    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl<F: FieldSet> EmployeePersistenceGateway<F> for InMemoryEmployeeStore {
    async fn save(&self, id: &str, fields: F) -> EngineResult<()> {
        if id.trim().is_empty() {
            return Err(EngineError::validation("id", "must not be empty"));
        }
        fields.validate()?;

        if self.unavailable.load(Ordering::SeqCst) {
            warn!(employee_id = %id, shape = F::SHAPE, "Employee store unavailable");
            return Err(EngineError::Persistence {
                id: id.to_string(),
                message: "store unavailable".to_string(),
            });
        }

        let incoming = match serde_json::to_value(&fields) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                return Err(EngineError::Persistence {
                    id: id.to_string(),
                    message: format!("expected an object for shape '{}', got {}", F::SHAPE, other),
                });
            }
            Err(e) => {
                return Err(EngineError::Persistence {
                    id: id.to_string(),
                    message: e.to_string(),
                });
            }
        };

        let mut documents = self.documents.write().await;
        let document = documents
            .entry(id.to_string())
            .or_insert_with(|| StoredEmployee {
                id: id.to_string(),
                fields: Map::new(),
                version: 0,
                updated_at: Utc::now(),
            });
        document.fields.extend(incoming);
        document.version += 1;
        document.updated_at = Utc::now();

        debug!(
            employee_id = %id,
            shape = F::SHAPE,
            version = document.version,
            "Saved employee fields"
        );
        Ok(())
    }
}
