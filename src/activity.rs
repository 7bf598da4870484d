use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::AuditConfig;
use crate::error::AuthzError;
use crate::types::AuthorizationContext;

pub const ACTIVITY_TARGET: &str = "audit::activity";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityStatus {
    Success,
    Failure,
}

/// One hook invocation, as written to the activity log
#[derive(Debug, Clone, Serialize)]
pub struct ActivityRecord {
    pub hook: String,
    pub component: String,
    pub status: ActivityStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protected_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<Map<String, Value>>,
}

impl ActivityRecord {
    pub fn success(hook: &str, context: &AuthorizationContext, audit: &AuditConfig) -> Self {
        Self {
            hook: hook.to_string(),
            component: context.component.clone(),
            status: ActivityStatus::Success,
            message: format!("{} completed", hook),
            protected_count: context.protected_attributes().map(|list| list.len()),
            authorization: audit.log_full_objects.then(|| context.authorization.clone()),
        }
    }

    pub fn failure(hook: &str, context: &AuthorizationContext, error: &AuthzError, audit: &AuditConfig) -> Self {
        Self {
            hook: hook.to_string(),
            component: context.component.clone(),
            status: ActivityStatus::Failure,
            message: error.to_string(),
            protected_count: None,
            authorization: audit.log_full_objects.then(|| context.authorization.clone()),
        }
    }

    /// Write the record to the activity log. Serialization problems are
    /// logged, never raised.
    pub fn emit(&self) {
        let body = match serde_json::to_string(self) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("Failed to serialize activity record for {}: {}", self.hook, e);
                return;
            }
        };

        match self.status {
            ActivityStatus::Success => tracing::info!(
                target: ACTIVITY_TARGET,
                hook = %self.hook,
                component = %self.component,
                "{}",
                body
            ),
            ActivityStatus::Failure => tracing::warn!(
                target: ACTIVITY_TARGET,
                hook = %self.hook,
                component = %self.component,
                "{}",
                body
            ),
        }
    }
}
