//! Request-shape validation for the entities that feed the calculators.
//!
//! Drafts mirror the create/update payloads of the surrounding CRUD layer.
//! Validation collects every error (not just the first) with Joi-style field
//! paths, so a handler can surface the full set as one 400 response. The
//! calculators assume these checks have run: they do not re-validate
//! positivity or category codes themselves.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::{ValidationError, VatError};
use super::invoice::LineItem;
use super::mileage::VehicleCategory;
use super::rates::VatCategory;
use crate::uk;

/// An invoice line as received from a client, before strict parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemDraft {
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub vat_category: String,
}

impl LineItemDraft {
    /// Strictly parse into an engine [`LineItem`]. Unknown VAT category
    /// codes are rejected here rather than falling back to a zero rate.
    pub fn to_line_item(&self) -> Result<LineItem, VatError> {
        let category = VatCategory::from_code(&self.vat_category)
            .ok_or_else(|| VatError::UnknownVatCategory(self.vat_category.clone()))?;
        Ok(LineItem::new(
            self.description.clone(),
            self.quantity,
            self.unit_price,
            category,
        ))
    }
}

/// Create/update invoice payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    pub line_items: Vec<LineItemDraft>,
}

/// Create/update expense payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDraft {
    pub amount: Decimal,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mileage: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_category: Option<String>,
}

/// Create/update company payload (the business's own registration details).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDraft {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
}

/// Create/update client payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDraft {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_number: Option<String>,
}

const MAX_NAME_LEN: usize = 100;

/// Validate an invoice draft. Returns all errors found.
pub fn validate_invoice_draft(draft: &InvoiceDraft) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if draft.line_items.is_empty() {
        errors.push(ValidationError::new(
            "lineItems",
            "at least one line item is required",
        ));
    }

    for (i, line) in draft.line_items.iter().enumerate() {
        let prefix = format!("lineItems[{i}]");

        if line.description.trim().is_empty() {
            errors.push(ValidationError::new(
                format!("{prefix}.description"),
                "description must not be empty",
            ));
        }

        if line.quantity <= Decimal::ZERO {
            errors.push(ValidationError::new(
                format!("{prefix}.quantity"),
                "quantity must be positive",
            ));
        }

        if line.unit_price <= Decimal::ZERO {
            errors.push(ValidationError::new(
                format!("{prefix}.unitPrice"),
                "unit price must be positive",
            ));
        }

        if VatCategory::from_code(&line.vat_category).is_none() {
            errors.push(ValidationError::new(
                format!("{prefix}.vatCategory"),
                format!(
                    "'{}' is not one of STANDARD, REDUCED, ZERO, EXEMPT",
                    line.vat_category
                ),
            ));
        }
    }

    errors
}

/// Validate an expense draft. Returns all errors found.
pub fn validate_expense_draft(draft: &ExpenseDraft) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if draft.amount <= Decimal::ZERO {
        errors.push(ValidationError::new("amount", "amount must be positive"));
    }

    if draft.category.trim().is_empty() {
        errors.push(ValidationError::new("category", "category is required"));
    }

    if let Some(mileage) = draft.mileage {
        if mileage <= Decimal::ZERO {
            errors.push(ValidationError::new("mileage", "mileage must be positive"));
        }
    }

    if let Some(code) = &draft.vehicle_category {
        if VehicleCategory::from_code(code).is_none() {
            errors.push(ValidationError::new(
                "vehicleCategory",
                format!("'{code}' is not one of car, van, motorcycle, bike"),
            ));
        }
    }

    errors
}

/// Validate a company draft, applying the UK identifier format checks to the
/// optional registration fields.
pub fn validate_company_draft(draft: &CompanyDraft) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    validate_name(&draft.name, &mut errors);

    if let Some(vat_number) = &draft.vat_number {
        push_check(&mut errors, "vatNumber", uk::validate_vat_number(vat_number));
    }
    if let Some(company_number) = &draft.company_number {
        push_check(
            &mut errors,
            "companyNumber",
            uk::validate_company_number(company_number),
        );
    }
    if let Some(utr) = &draft.utr {
        push_check(&mut errors, "utr", uk::validate_utr(utr));
    }
    if let Some(postcode) = &draft.postcode {
        push_check(&mut errors, "postcode", uk::validate_postcode(postcode));
    }

    errors
}

/// Validate a client draft, applying the UK contact format checks.
pub fn validate_client_draft(draft: &ClientDraft) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    validate_name(&draft.name, &mut errors);

    if let Some(email) = &draft.email {
        push_check(&mut errors, "email", uk::validate_email(email));
    }
    if let Some(phone) = &draft.phone {
        push_check(&mut errors, "phone", uk::validate_phone_number(phone));
    }
    if let Some(vat_number) = &draft.vat_number {
        push_check(&mut errors, "vatNumber", uk::validate_vat_number(vat_number));
    }

    errors
}

fn validate_name(name: &str, errors: &mut Vec<ValidationError>) {
    if name.trim().is_empty() {
        errors.push(ValidationError::new("name", "name must not be empty"));
    } else if name.chars().count() > MAX_NAME_LEN {
        errors.push(ValidationError::new(
            "name",
            format!("name must not exceed {MAX_NAME_LEN} characters"),
        ));
    }
}

fn push_check(errors: &mut Vec<ValidationError>, field: &str, check: uk::CheckResult) {
    if !check.is_valid {
        errors.push(ValidationError::new(field, check.message));
    }
}
