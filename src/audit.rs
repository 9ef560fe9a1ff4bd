use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::state::AppState;

/// Entries kept before the oldest is dropped.
const AUDIT_CAPACITY: usize = 500;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuditEntry {
    pub id: Uuid,
    pub action: String,
    pub resource: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(Default)]
pub struct AuditLog {
    entries: RwLock<VecDeque<AuditEntry>>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    async fn push(&self, entry: AuditEntry) {
        let mut entries = self.entries.write().await;
        if entries.len() == AUDIT_CAPACITY {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// Newest first.
    pub async fn recent(&self, limit: usize) -> Vec<AuditEntry> {
        let entries = self.entries.read().await;
        entries.iter().rev().take(limit).cloned().collect()
    }
}

pub async fn log_audit(
    state: &AppState,
    action: &str,
    resource: Option<&str>,
    metadata: Option<Value>,
) {
    let entry = AuditEntry {
        id: Uuid::new_v4(),
        action: action.to_string(),
        resource: resource.map(str::to_string),
        metadata,
        created_at: Utc::now(),
    };
    tracing::info!(
        action = %entry.action,
        resource = entry.resource.as_deref().unwrap_or("-"),
        metadata = %entry.metadata.as_ref().map(|m| m.to_string()).unwrap_or_default(),
        "audit"
    );
    state.audit.push(entry).await;
}
