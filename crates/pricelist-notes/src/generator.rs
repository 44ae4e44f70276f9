//! # Notes Generator
//!
//! The boundary between the price-list state and the AI call.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  workbench                      pricelist-notes                         │
//! │  ─────────                      ───────────────                         │
//! │                                                                         │
//! │  snapshot company/client/items                                          │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  NotesContext ─────────────────► generate(&ctx)                         │
//! │                                      │                                  │
//! │                                      ├── no key? ──► MISSING_KEY_FALLBACK│
//! │                                      ├── error?  ──► ERROR_FALLBACK     │
//! │                                      ├── empty?  ──► EMPTY_RESPONSE_... │
//! │                                      └── text    ──► model output       │
//! │        ◄─────────────────────────────────┘                              │
//! │  quotation.notes = text   (verbatim, overwrites)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use pricelist_core::{ClientDetails, CompanyDetails, LineItem};

/// Returned when no API key is configured.
pub const MISSING_KEY_FALLBACK: &str =
    "الرجاء ضبط إعدادات مفتاح API (VITE_API_KEY أو API_KEY) في منصة الاستضافة لتفعيل الميزة الذكية.";

/// Returned when the call fails for any reason.
pub const ERROR_FALLBACK: &str =
    "حدث خطأ أثناء الاتصال بالذكاء الاصطناعي. يرجى التأكد من إعدادات المفتاح والمحاولة لاحقاً.";

/// Returned when the model answers with no text.
pub const EMPTY_RESPONSE_FALLBACK: &str = "الأسعار قابلة للتغيير. شكراً لتعاملكم معنا.";

/// Point-in-time copy of the data the notes are written about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesContext {
    pub company: CompanyDetails,
    pub client: ClientDetails,
    pub items: Vec<LineItem>,
}

/// Writes the notes paragraph for a price list.
///
/// Implementations must not fail: every outcome is a string.
#[async_trait]
pub trait NotesGenerator: Send + Sync {
    async fn generate(&self, context: &NotesContext) -> String;
}
