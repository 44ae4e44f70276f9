//! # Configuration State
//!
//! Application defaults used to seed a new workspace.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`PRICELIST_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use tracing::warn;

use pricelist_core::pricing::parse_amount;
use pricelist_core::{
    CatalogDraft, CompanyDetails, HeaderLayout, DEFAULT_CONVERSION_FACTOR, DEFAULT_SUB_UNIT_NAME,
};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Company shown on a fresh document (placeholder text).
    pub company: CompanyDetails,

    /// Currency label printed in the table header.
    pub currency: String,

    /// Document title.
    pub title: String,

    /// Initial position of the company block in the printed header.
    pub header_layout: HeaderLayout,

    /// Package label pre-filled in the catalog form.
    pub default_sub_unit: String,

    /// Base units per package pre-filled in the catalog form.
    pub default_conversion_factor: f64,
}

impl Default for AppConfig {
    /// Returns default configuration.
    ///
    /// ## Default Values
    /// - Company: placeholder name, Riyadh address
    /// - Currency: ر.س (Saudi riyal)
    /// - Title: قائمة أسعار ("price list")
    /// - Catalog form: شوال (sack) of 25
    fn default() -> Self {
        AppConfig {
            company: CompanyDetails {
                name: "اسم شركتك هنا".to_string(),
                address: "الرياض، المملكة العربية السعودية".to_string(),
                phone: "0500000000".to_string(),
                email: "info@company.com".to_string(),
                logo_url: None,
            },
            currency: "ر.س".to_string(),
            title: "قائمة أسعار".to_string(),
            header_layout: HeaderLayout::default(),
            default_sub_unit: DEFAULT_SUB_UNIT_NAME.to_string(),
            default_conversion_factor: DEFAULT_CONVERSION_FACTOR,
        }
    }
}

impl AppConfig {
    /// Creates a new AppConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `PRICELIST_COMPANY_NAME`: Override company name
    /// - `PRICELIST_COMPANY_ADDRESS`: Override company address
    /// - `PRICELIST_COMPANY_PHONE`: Override company phone
    /// - `PRICELIST_CURRENCY`: Override currency label
    /// - `PRICELIST_TITLE`: Override document title
    /// - `PRICELIST_HEADER_LAYOUT`: `right`, `left` or `center`
    /// - `PRICELIST_DEFAULT_SUB_UNIT`: Override catalog form package label
    /// - `PRICELIST_DEFAULT_FACTOR`: Override catalog form factor (e.g. "40")
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from any variable source (env, test map).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(name) = lookup("PRICELIST_COMPANY_NAME") {
            config.company.name = name;
        }

        if let Some(address) = lookup("PRICELIST_COMPANY_ADDRESS") {
            config.company.address = address;
        }

        if let Some(phone) = lookup("PRICELIST_COMPANY_PHONE") {
            config.company.phone = phone;
        }

        if let Some(currency) = lookup("PRICELIST_CURRENCY") {
            config.currency = currency;
        }

        if let Some(title) = lookup("PRICELIST_TITLE") {
            config.title = title;
        }

        if let Some(layout) = lookup("PRICELIST_HEADER_LAYOUT") {
            match layout.parse::<HeaderLayout>() {
                Ok(layout) => config.header_layout = layout,
                Err(err) => warn!(error = %err, "Ignoring PRICELIST_HEADER_LAYOUT"),
            }
        }

        if let Some(unit) = lookup("PRICELIST_DEFAULT_SUB_UNIT") {
            config.default_sub_unit = unit;
        }

        if let Some(factor) = lookup("PRICELIST_DEFAULT_FACTOR") {
            let factor = parse_amount(&factor);
            if factor > 0.0 {
                config.default_conversion_factor = factor;
            }
        }

        config
    }

    /// The blank catalog form for this configuration.
    pub fn catalog_draft(&self) -> CatalogDraft {
        CatalogDraft::new(
            "",
            self.default_sub_unit.clone(),
            self.default_conversion_factor,
            0.0,
        )
    }
}
