//! Account identity and plan entitlement.

use crate::decode::decode_identifier;
use crate::error::{SlidesError, SlidesResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Plans entitled to generate presentations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    /// Essential plan.
    Essential,
    /// Paid plan.
    Paid,
    /// Premium plan.
    Premium,
}

impl Plan {
    /// Lower-case plan name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Essential => "essential",
            Plan::Paid => "paid",
            Plan::Premium => "premium",
        }
    }

    /// Parse an entitled plan, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "essential" => Some(Plan::Essential),
            "paid" => Some(Plan::Paid),
            "premium" => Some(Plan::Premium),
            _ => None,
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw account lookup response. Fields are loosely typed until validated;
/// a workspace ID may arrive as a number.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountInfoResponse {
    /// Account email.
    #[serde(default)]
    pub email: Option<Value>,

    /// Plan name as stored upstream.
    #[serde(default)]
    pub plan: Option<Value>,

    /// Workspace identifier.
    #[serde(default)]
    pub workspace_id: Option<Value>,
}

/// Validated account identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountInfo {
    /// Account email.
    pub email: String,
    /// Entitled plan.
    pub plan: Plan,
    /// Workspace identifier.
    pub workspace_id: String,
}

fn present(value: Option<Value>) -> Option<String> {
    value.as_ref().and_then(decode_identifier)
}

/// Validate a lookup response into an [`AccountInfo`].
///
/// All three identity fields must be present; the plan must be entitled.
pub fn validate_account(
    raw: AccountInfoResponse,
    pricing_url: &str,
) -> SlidesResult<AccountInfo> {
    let (Some(email), Some(plan), Some(workspace_id)) = (
        present(raw.email),
        present(raw.plan),
        present(raw.workspace_id),
    ) else {
        return Err(SlidesError::InvalidAccount);
    };

    let plan = Plan::parse(&plan).ok_or_else(|| SlidesError::PlanNotAllowed {
        plan,
        pricing_url: pricing_url.to_string(),
    })?;

    Ok(AccountInfo {
        email,
        plan,
        workspace_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRICING: &str = "https://www.magicslides.app/pricing";

    fn raw(email: &str, plan: &str, workspace_id: &str) -> AccountInfoResponse {
        AccountInfoResponse {
            email: Some(Value::from(email)),
            plan: Some(Value::from(plan)),
            workspace_id: Some(Value::from(workspace_id)),
        }
    }

    #[test]
    fn test_valid_account_normalizes_plan() {
        let info = validate_account(raw("a@example.com", "Premium", "ws-1"), PRICING).unwrap();
        assert_eq!(info.plan, Plan::Premium);
        assert_eq!(info.plan.as_str(), "premium");
        assert_eq!(info.workspace_id, "ws-1");
    }

    #[test]
    fn test_free_plan_rejected_with_pricing_url() {
        let err = validate_account(raw("a@example.com", "Free", "ws-1"), PRICING).unwrap_err();
        assert!(matches!(err, SlidesError::PlanNotAllowed { ref plan, .. } if plan == "Free"));
        assert!(err.to_string().contains(PRICING));
    }

    #[test]
    fn test_missing_fields_rejected() {
        let mut response = raw("a@example.com", "paid", "ws-1");
        response.workspace_id = None;
        assert!(matches!(
            validate_account(response, PRICING),
            Err(SlidesError::InvalidAccount)
        ));

        assert!(matches!(
            validate_account(raw("", "paid", "ws-1"), PRICING),
            Err(SlidesError::InvalidAccount)
        ));
    }

    #[test]
    fn test_numeric_workspace_id_accepted() {
        let response: AccountInfoResponse = serde_json::from_value(serde_json::json!({
            "email": "a@b.c",
            "plan": "paid",
            "workspace_id": 12345
        }))
        .unwrap();

        let info = validate_account(response, PRICING).unwrap();
        assert_eq!(info.workspace_id, "12345");
        assert_eq!(info.plan, Plan::Paid);
    }

    #[test]
    fn test_null_and_blank_fields_rejected() {
        let response: AccountInfoResponse = serde_json::from_value(serde_json::json!({
            "email": "a@b.c",
            "plan": "  ",
            "workspace_id": null
        }))
        .unwrap();
        assert!(matches!(
            validate_account(response, PRICING),
            Err(SlidesError::InvalidAccount)
        ));
    }
}
