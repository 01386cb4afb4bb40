//! Client-side form validation.
//!
//! Checks run per field before any network call; a submission with a
//! non-empty [`ValidationErrors`] never reaches the API client.

use std::collections::BTreeMap;

use crate::model::SnackPayload;

/// Field name → message map for a submitted form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `Ok(())` when the form may be submitted.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

fn is_valid_email(email: &str) -> bool {
    // local@domain.tld with no whitespace, mirroring the backend's check.
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}

fn is_strong_password(password: &str) -> bool {
    const SPECIALS: &str = "@$!%*?&";
    password.len() >= 8
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| SPECIALS.contains(c))
}

fn is_valid_phone(phone: &str) -> bool {
    phone.len() == 10
        && phone.starts_with(['6', '7', '8', '9'])
        && phone.chars().all(|c| c.is_ascii_digit())
}

fn check_email(errors: &mut ValidationErrors, email: &str) {
    if email.trim().is_empty() {
        errors.add("email", "Email is required");
    } else if !is_valid_email(email) {
        errors.add("email", "Please enter a valid email address");
    }
}

/// Login form: email shape plus a non-empty password.
pub fn validate_login(email: &str, password: &str) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    check_email(&mut errors, email);
    if password.is_empty() {
        errors.add("password", "Password is required");
    }
    errors
}

/// Common signup fields (user and vendor alike).
pub fn validate_signup(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
    phone_number: &str,
) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if username.trim().is_empty() {
        errors.add("username", "Username is required");
    } else if username.len() < 3 {
        errors.add("username", "Username must be at least 3 characters");
    }

    check_email(&mut errors, email);

    if password.is_empty() {
        errors.add("password", "Password is required");
    } else if password.len() < 8 {
        errors.add("password", "Password must be at least 8 characters");
    } else if !is_strong_password(password) {
        errors.add(
            "password",
            "Password must include uppercase, lowercase, number and special character",
        );
    }

    if confirm_password.is_empty() {
        errors.add("confirmPassword", "Please confirm your password");
    } else if password != confirm_password {
        errors.add("confirmPassword", "Passwords do not match");
    }

    if phone_number.trim().is_empty() {
        errors.add("phoneNumber", "Phone number is required");
    } else if !is_valid_phone(phone_number) {
        errors.add("phoneNumber", "Please enter a valid phone number");
    }

    errors
}

/// Vendor-specific signup fields, layered on top of [`validate_signup`].
pub fn validate_vendor_signup(
    errors: &mut ValidationErrors,
    business_name: &str,
    business_license_number: &str,
    tax_id: &str,
    business_address: &str,
) {
    if business_name.trim().is_empty() {
        errors.add("businessName", "Business name is required");
    }
    if business_license_number.trim().is_empty() {
        errors.add("businessLicenseNumber", "Business license number is required");
    }
    if tax_id.trim().is_empty() {
        errors.add("taxId", "Tax ID is required");
    }
    if business_address.trim().is_empty() {
        errors.add("businessAddress", "Business address is required");
    }
}

/// Create-product-manager form.
pub fn validate_product_manager(
    username: &str,
    email: &str,
    password: &str,
) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if username.trim().is_empty() {
        errors.add("username", "Username is required");
    } else if username.len() < 3 {
        errors.add("username", "Username must be at least 3 characters");
    }

    check_email(&mut errors, email);

    if password.is_empty() {
        errors.add("password", "Password is required");
    } else if !is_strong_password(password) {
        errors.add(
            "password",
            "Password must be at least 8 characters and include uppercase, lowercase, number and special character",
        );
    }

    errors
}

/// Snack create/edit form state, kept as raw input strings so numeric
/// checks can report before parsing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SnackForm {
    pub snack_name: String,
    pub snack_type: String,
    pub price: String,
    pub quantity: String,
    pub expiry_in_months: String,
    pub description: String,
    pub ingredients: String,
    pub nutritional_info: String,
    pub sku: String,
    pub current_stock: String,
    pub reorder_point: String,
    pub max_stock: String,
}

impl SnackForm {
    /// Pre-populates the form from an existing listing (inventory edit).
    pub fn from_snack(snack: &crate::model::Snack) -> Self {
        Self {
            snack_name: snack.snack_name.clone(),
            snack_type: snack.snack_type.clone(),
            price: snack.price.to_string(),
            quantity: snack.quantity.to_string(),
            expiry_in_months: snack.expiry_in_months.to_string(),
            description: snack.description.clone(),
            ingredients: snack.ingredients.clone(),
            nutritional_info: snack.nutritional_info.clone(),
            sku: snack.sku.clone(),
            current_stock: snack.current_stock.to_string(),
            reorder_point: snack.reorder_point.to_string(),
            max_stock: snack.max_stock.to_string(),
        }
    }

    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();

        if self.snack_name.trim().is_empty() {
            errors.add("snackName", "Snack name is required");
        }
        if self.snack_type.trim().is_empty() {
            errors.add("snackType", "Snack type is required");
        }

        match self.price.trim().parse::<f64>() {
            Ok(price) if price > 0.0 => {}
            Ok(_) => errors.add("price", "Price must be greater than 0"),
            Err(_) => errors.add("price", "Price is required"),
        }

        match self.quantity.trim().parse::<u32>() {
            Ok(quantity) if quantity > 0 => {}
            _ => errors.add("quantity", "Quantity is required"),
        }

        match self.expiry_in_months.trim().parse::<u32>() {
            Ok(months) if months > 0 => {}
            Ok(_) => errors.add("expiryInMonths", "Expiry must be greater than 0"),
            Err(_) => errors.add("expiryInMonths", "Expiry in months is required"),
        }

        if self.ingredients.trim().is_empty() {
            errors.add("ingredients", "Ingredients are required");
        }
        if self.description.trim().is_empty() {
            errors.add("description", "Description is required");
        }
        if self.nutritional_info.trim().is_empty() {
            errors.add("nutritionalInfo", "Nutritional information is required");
        }
        if self.sku.trim().is_empty() {
            errors.add("sku", "SKU is required");
        }
        if self.current_stock.trim().parse::<u32>().is_err() {
            errors.add("currentStock", "Current stock is required");
        }
        if self.reorder_point.trim().parse::<u32>().is_err() {
            errors.add("reorderPoint", "Reorder point is required");
        }
        if self.max_stock.trim().parse::<u32>().is_err() {
            errors.add("maxStock", "Max stock is required");
        }

        errors
    }

    /// Builds the wire payload. Call only after [`Self::validate`] passed;
    /// unparseable numbers become zero rather than panicking.
    pub fn to_payload(&self, vendor_id: Option<String>) -> SnackPayload {
        SnackPayload {
            snack_name: self.snack_name.trim().to_string(),
            snack_type: self.snack_type.trim().to_string(),
            price: self.price.trim().parse().unwrap_or(0.0),
            quantity: self.quantity.trim().parse().unwrap_or(0),
            expiry_in_months: self.expiry_in_months.trim().parse().unwrap_or(0),
            description: self.description.trim().to_string(),
            ingredients: self.ingredients.trim().to_string(),
            nutritional_info: self.nutritional_info.trim().to_string(),
            sku: self.sku.trim().to_string(),
            current_stock: self.current_stock.trim().parse().unwrap_or(0),
            reorder_point: self.reorder_point.trim().parse().unwrap_or(0),
            max_stock: self.max_stock.trim().parse().unwrap_or(0),
            vendor_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_snack_form() -> SnackForm {
        SnackForm {
            snack_name: "Kale Chips".into(),
            snack_type: "Chips".into(),
            price: "4.99".into(),
            quantity: "20".into(),
            expiry_in_months: "6".into(),
            description: "Crunchy baked kale".into(),
            ingredients: "Kale, olive oil, salt".into(),
            nutritional_info: "120 kcal per serving".into(),
            sku: "KALE-001".into(),
            current_stock: "20".into(),
            reorder_point: "5".into(),
            max_stock: "100".into(),
        }
    }

    #[test]
    fn zero_price_is_rejected_before_any_request() {
        let mut form = valid_snack_form();
        form.price = "0".into();

        let errors = form.validate();
        assert_eq!(errors.get("price"), Some("Price must be greater than 0"));
    }

    #[test]
    fn complete_snack_form_passes() {
        assert!(valid_snack_form().validate().is_empty());
    }

    #[test]
    fn zero_expiry_is_rejected() {
        let mut form = valid_snack_form();
        form.expiry_in_months = "0".into();
        assert_eq!(
            form.validate().get("expiryInMonths"),
            Some("Expiry must be greater than 0"),
        );
    }

    #[test]
    fn login_requires_well_formed_email() {
        assert!(validate_login("vegan@snacks.dev", "hunter22").is_empty());
        assert_eq!(
            validate_login("", "pw").get("email"),
            Some("Email is required"),
        );
        assert_eq!(
            validate_login("not-an-email", "pw").get("email"),
            Some("Please enter a valid email address"),
        );
        assert_eq!(
            validate_login("a@b.c", "").get("password"),
            Some("Password is required"),
        );
    }

    #[test]
    fn signup_enforces_password_policy() {
        let weak = validate_signup("sam", "sam@veg.com", "alllower1", "alllower1", "9876543210");
        assert_eq!(
            weak.get("password"),
            Some("Password must include uppercase, lowercase, number and special character"),
        );

        let short = validate_signup("sam", "sam@veg.com", "Ab1@", "Ab1@", "9876543210");
        assert_eq!(
            short.get("password"),
            Some("Password must be at least 8 characters"),
        );

        let ok = validate_signup("sam", "sam@veg.com", "Abcdef1@", "Abcdef1@", "9876543210");
        assert!(ok.is_empty());
    }

    #[test]
    fn signup_checks_confirmation_and_phone() {
        let errors = validate_signup("sam", "sam@veg.com", "Abcdef1@", "different", "12345");
        assert_eq!(errors.get("confirmPassword"), Some("Passwords do not match"));
        assert_eq!(
            errors.get("phoneNumber"),
            Some("Please enter a valid phone number"),
        );
    }

    #[test]
    fn vendor_signup_requires_business_fields() {
        let mut errors = ValidationErrors::default();
        validate_vendor_signup(&mut errors, "", "LIC-1", "", "12 Sprout St");
        assert_eq!(errors.get("businessName"), Some("Business name is required"));
        assert_eq!(errors.get("taxId"), Some("Tax ID is required"));
        assert!(errors.get("businessLicenseNumber").is_none());
        assert!(errors.get("businessAddress").is_none());
    }
}
