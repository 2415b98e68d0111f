//! Transfer objects describing what the backend exposes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberType {
    Action,
    Property,
    Collection,
}

/// A single member of a backend service, usually an action reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub member_type: MemberType,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub disabled_reason: Option<String>,
}

impl Member {
    pub fn action(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            member_type: MemberType::Action,
            href: None,
            disabled_reason: None,
        }
    }

    pub fn is_invokable(&self) -> bool {
        self.member_type == MemberType::Action
    }

    pub fn is_enabled(&self) -> bool {
        self.disabled_reason.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub members: Vec<Member>,
}

impl Service {
    /// Action members in declaration order.
    pub fn invokable_members(&self) -> Vec<Member> {
        self.members
            .iter()
            .filter(|m| m.is_invokable())
            .cloned()
            .collect()
    }
}
