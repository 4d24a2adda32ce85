use serde::{Deserialize, Serialize};
use std::fmt;

/// Portal role of the logged-in account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum UserRole {
    Admin,
    EvmStaff,
    DealerManager,
    DealerStaff,
}

impl UserRole {
    pub const ALL: [UserRole; 4] = [
        UserRole::Admin,
        UserRole::EvmStaff,
        UserRole::DealerManager,
        UserRole::DealerStaff,
    ];

    pub fn code(self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::EvmStaff => "EVM_STAFF",
            UserRole::DealerManager => "DEALER_MANAGER",
            UserRole::DealerStaff => "DEALER_STAFF",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UserRole::Admin => "Administrator",
            UserRole::EvmStaff => "EVM Staff",
            UserRole::DealerManager => "Dealer Manager",
            UserRole::DealerStaff => "Dealer Staff",
        }
    }

    /// Accepts the codes above plus the spellings the backend has used
    /// ("evm", "dealer-manager", "Dealer Staff").
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_uppercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "ADMIN" | "ADMINISTRATOR" => Some(UserRole::Admin),
            "EVM" | "EVM_STAFF" | "MANUFACTURER" => Some(UserRole::EvmStaff),
            "DEALER_MANAGER" | "MANAGER" => Some(UserRole::DealerManager),
            "DEALER_STAFF" | "STAFF" | "DEALER" => Some(UserRole::DealerStaff),
            _ => None,
        }
    }

    pub fn is_evm(self) -> bool {
        matches!(self, UserRole::Admin | UserRole::EvmStaff)
    }

    pub fn is_dealer(self) -> bool {
        !self.is_evm()
    }

    pub fn api_scope(self) -> ApiScope {
        if self.is_evm() {
            ApiScope::Evm
        } else {
            ApiScope::Dealer
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<String> for UserRole {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        UserRole::parse(&value).ok_or_else(|| format!("Unknown role: {}", value))
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.code().to_string()
    }
}

/// First path segment of an endpoint: `{API_URL}/<scope>/<action>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiScope {
    Auth,
    Evm,
    Dealer,
}

impl ApiScope {
    pub fn as_path(self) -> &'static str {
        match self {
            ApiScope::Auth => "auth",
            ApiScope::Evm => "evm",
            ApiScope::Dealer => "dealer",
        }
    }

    /// `/<scope>/<action>`
    pub fn endpoint(self, action: &str) -> String {
        format!("/{}/{}", self.as_path(), action.trim_start_matches('/'))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(deserialize_with = "crate::shared::normalize::de_id")]
    pub user_id: String,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default, deserialize_with = "crate::shared::normalize::de_opt_id")]
    pub dealer_id: Option<String>,
    #[serde(default)]
    pub dealer_name: Option<String>,
}

impl UserInfo {
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.email
        } else {
            &self.full_name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_variants() {
        assert_eq!(UserRole::parse("EVM_STAFF"), Some(UserRole::EvmStaff));
        assert_eq!(UserRole::parse("dealer-manager"), Some(UserRole::DealerManager));
        assert_eq!(UserRole::parse("Dealer Staff"), Some(UserRole::DealerStaff));
        assert_eq!(UserRole::parse("admin"), Some(UserRole::Admin));
        assert_eq!(UserRole::parse("guest"), None);
    }

    #[test]
    fn test_role_scope() {
        assert_eq!(UserRole::Admin.api_scope(), ApiScope::Evm);
        assert_eq!(UserRole::DealerStaff.api_scope(), ApiScope::Dealer);
        assert_eq!(ApiScope::Dealer.endpoint("customers/list"), "/dealer/customers/list");
        assert_eq!(ApiScope::Auth.endpoint("/login"), "/auth/login");
    }

    #[test]
    fn test_user_info_from_backend_json() {
        let json = r#"{"userId":5,"fullName":"Linh Tran","email":"linh@dealer.vn","role":"DEALER_MANAGER","dealerId":2,"dealerName":"Hanoi Central"}"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(user.user_id, "5");
        assert_eq!(user.role, UserRole::DealerManager);
        assert_eq!(user.dealer_id.as_deref(), Some("2"));
        assert_eq!(user.display_name(), "Linh Tran");

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["role"], "DEALER_MANAGER");

        let bad = r#"{"userId":5,"fullName":"","email":"x","role":"PILOT"}"#;
        assert!(serde_json::from_str::<UserInfo>(bad).is_err());
    }
}
