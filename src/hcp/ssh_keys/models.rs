//! SSH key data models

use serde::Deserialize;

use crate::hcp::traits::TfeResource;

/// SSH key registered in an organization
#[derive(Deserialize, Debug, Clone)]
pub struct SshKey {
    pub id: String,
    pub attributes: SshKeyAttributes,
}

/// SSH key attributes (the key material itself is never returned)
#[derive(Deserialize, Debug, Clone)]
pub struct SshKeyAttributes {
    pub name: String,
}

impl TfeResource for SshKey {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.attributes.name
    }
}

/// Relationship document assigning an SSH key to a workspace
pub(crate) fn ssh_key_assignment(ssh_key_id: &str) -> serde_json::Value {
    serde_json::json!({
        "data": {
            "attributes": {
                "id": ssh_key_id
            },
            "type": "workspaces"
        }
    })
}
