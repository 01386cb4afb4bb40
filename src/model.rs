//! Wire types shared with the marketplace backend.
//!
//! Field names follow the backend's camelCase JSON contract; collection
//! records carry `#[serde(default)]` so partially filled rows coming back
//! from the server never fail to decode.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Account role as issued by the backend at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    Vendor,
    ProductManager,
    Admin,
}

impl Role {
    /// Wire/storage representation (`USER`, `VENDOR`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Vendor => "VENDOR",
            Role::ProductManager => "PRODUCT_MANAGER",
            Role::Admin => "ADMIN",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "USER" => Some(Role::User),
            "VENDOR" => Some(Role::Vendor),
            "PRODUCT_MANAGER" => Some(Role::ProductManager),
            "ADMIN" => Some(Role::Admin),
            _ => None,
        }
    }

    /// Staff roles may work the approval queues.
    pub fn is_staff(&self) -> bool {
        matches!(self, Role::ProductManager | Role::Admin)
    }

    /// Human label for the navbar badge.
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "Shopper",
            Role::Vendor => "Vendor",
            Role::ProductManager => "Product Manager",
            Role::Admin => "Administrator",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Review lifecycle of a listed snack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SnackStatus {
    #[default]
    PendingApproval,
    Approved,
    Rejected,
}

impl SnackStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SnackStatus::PendingApproval => "Pending approval",
            SnackStatus::Approved => "Approved",
            SnackStatus::Rejected => "Rejected",
        }
    }
}

/// Review lifecycle of a vendor account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VendorStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl VendorStatus {
    pub fn label(&self) -> &'static str {
        match self {
            VendorStatus::Pending => "Pending",
            VendorStatus::Approved => "Approved",
            VendorStatus::Rejected => "Rejected",
        }
    }
}

/// A snack record as returned by the catalog, inventory and review
/// endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Snack {
    pub id: String,
    pub snack_name: String,
    pub snack_type: String,
    pub price: f64,
    pub quantity: u32,
    pub expiry_in_months: u32,
    pub description: String,
    pub ingredients: String,
    pub nutritional_info: String,
    pub sku: String,
    pub current_stock: u32,
    pub reorder_point: u32,
    pub max_stock: u32,
    pub status: SnackStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<String>,
}

/// A vendor record in the approval queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Vendor {
    pub id: String,
    pub business_name: String,
    pub email: String,
    pub business_license_number: String,
    pub tax_id: String,
    pub business_address: String,
    pub business_description: String,
    pub status: VendorStatus,
}

// =========================================================
// Request payloads
// =========================================================

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRegistration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorRegistration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub business_name: String,
    pub business_license_number: String,
    pub tax_id: String,
    pub business_address: String,
    pub business_description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewProductManager {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Create/update payload for a snack listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnackPayload {
    pub snack_name: String,
    pub snack_type: String,
    pub price: f64,
    pub quantity: u32,
    pub expiry_in_months: u32,
    pub description: String,
    pub ingredients: String,
    pub nutritional_info: String,
    pub sku: String,
    pub current_stock: u32,
    pub reorder_point: u32,
    pub max_stock: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<String>,
}
