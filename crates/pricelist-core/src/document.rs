//! # Document Layout
//!
//! Turns company details, line items and quotation metadata into the
//! printable A4 sheet model. Rendering that model to pixels, HTML or PDF is
//! the host's job; this module fixes *what* is on the page.
//!
//! ## Page Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     [logo]   COMPANY NAME          ← header_layout      │
//! │                        ┌──────────────┐                                 │
//! │                        │ قائمة أسعار  │            ← title box          │
//! │                        └──────────────┘                                 │
//! │  phone                                     date                         │
//! │ ─────────────────────────────────────────────────────────────────────── │
//! │  #  │ name          │ unit [40 kg]  │ base price │ total                │
//! │  1  │ أرز بسمتي     │ شوال  [40]    │ 6          │ 240                  │
//! │  2  │ سكر ناعم      │ شوال  [50]    │ 3          │ 150                  │
//! │     │               │               │            │        ← padding to  │
//! │     │               │               │            │          12 rows     │
//! │                                                                         │
//! │  notes (only when non-empty)                                            │
//! │ ─────────────────────────────────────────────────────────────────────── │
//! │                          company address                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::ledger::LineItem;
use crate::pricing::format_amount;
use crate::types::{CompanyDetails, HeaderLayout, Quotation};
use crate::MIN_PRINT_ROWS;

// =============================================================================
// Model
// =============================================================================

/// Header block of the sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DocumentHeader {
    pub layout: HeaderLayout,
    pub logo_url: Option<String>,
    pub company_name: String,
    pub title: String,
    pub reference: String,
    pub phone: String,
    pub date: String,
}

/// One filled table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DocumentRow {
    /// 1-based row number.
    pub index: usize,
    pub name: String,
    pub unit: String,
    /// Capacity badge; absent when the row's capacity is zero.
    pub capacity_badge: Option<f64>,
    pub base_price: f64,
    pub total: f64,
}

/// Everything a renderer needs to draw one price-list page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DocumentModel {
    pub header: DocumentHeader,
    pub currency: String,
    pub rows: Vec<DocumentRow>,
    /// Blank rows appended after `rows` to reach the minimum row count.
    pub padding_rows: usize,
    pub notes: Option<String>,
    pub footer_address: String,
}

impl DocumentModel {
    /// Builds the sheet model. Pure: same inputs, same model.
    pub fn build(company: &CompanyDetails, items: &[LineItem], quotation: &Quotation) -> Self {
        let rows: Vec<DocumentRow> = items
            .iter()
            .enumerate()
            .map(|(i, item)| DocumentRow {
                index: i + 1,
                name: item.name.clone(),
                unit: item.unit.clone(),
                capacity_badge: (item.capacity() > 0.0).then_some(item.capacity()),
                base_price: item.main_price(),
                total: item.sub_price(),
            })
            .collect();

        DocumentModel {
            header: DocumentHeader {
                layout: quotation.header_layout,
                logo_url: company.logo_url.clone(),
                company_name: company.name.clone(),
                title: quotation.title.clone(),
                reference: quotation.id.clone(),
                phone: company.phone.clone(),
                date: quotation.date().to_string(),
            },
            currency: quotation.currency.clone(),
            padding_rows: MIN_PRINT_ROWS.saturating_sub(rows.len()),
            rows,
            notes: quotation.has_notes().then(|| quotation.notes.clone()),
            footer_address: company.address.clone(),
        }
    }

    /// Filled plus padding rows.
    pub fn total_rows(&self) -> usize {
        self.rows.len() + self.padding_rows
    }
}

// =============================================================================
// Renderer Seam
// =============================================================================

/// Consumer of [`DocumentModel`]: HTML for the browser print path, text for
/// terminals, PDF writers, and so on.
pub trait DocumentRenderer {
    type Output;

    fn render(&self, document: &DocumentModel) -> CoreResult<Self::Output>;
}

/// Renders the sheet as fixed-width text.
#[derive(Debug, Clone)]
pub struct PlainTextRenderer {
    /// Line width in characters.
    pub width: usize,
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        PlainTextRenderer { width: 72 }
    }
}

impl PlainTextRenderer {
    fn align(&self, text: &str, layout: HeaderLayout) -> String {
        let len = text.chars().count();
        let room = self.width.saturating_sub(len);
        let pad = match layout {
            HeaderLayout::Left => 0,
            HeaderLayout::Center => room / 2,
            HeaderLayout::Right => room,
        };
        format!("{}{}", " ".repeat(pad), text)
    }

    fn rule(&self) -> String {
        "-".repeat(self.width)
    }
}

impl DocumentRenderer for PlainTextRenderer {
    type Output = String;

    fn render(&self, document: &DocumentModel) -> CoreResult<String> {
        let header = &document.header;
        let mut lines = Vec::new();

        if let Some(logo) = &header.logo_url {
            lines.push(self.align(&format!("[logo: {}]", logo), header.layout));
        }
        lines.push(self.align(&header.company_name, header.layout));
        lines.push(self.align(&format!("[ {} ]", header.title), HeaderLayout::Center));
        lines.push(format!("{}  {}  {}", header.reference, header.phone, header.date));
        lines.push(self.rule());

        lines.push(format!(
            "{:>3} | {:<24} | {:<14} | {:>10} | {:>12}",
            "#", "name", "unit", "price", document.currency
        ));
        for row in &document.rows {
            let unit = match row.capacity_badge {
                Some(capacity) => format!("{} [{}]", row.unit, format_amount(capacity)),
                None => row.unit.clone(),
            };
            lines.push(format!(
                "{:>3} | {:<24} | {:<14} | {:>10} | {:>12}",
                row.index,
                row.name,
                unit,
                format_amount(row.base_price),
                format_amount(row.total)
            ));
        }
        for _ in 0..document.padding_rows {
            lines.push(format!("{:>3} | {:<24} | {:<14} | {:>10} | {:>12}", "", "", "", "", ""));
        }

        if let Some(notes) = &document.notes {
            lines.push(String::new());
            lines.push(notes.clone());
        }

        lines.push(self.rule());
        lines.push(self.align(&document.footer_address, HeaderLayout::Center));

        Ok(lines.join("\n"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn company() -> CompanyDetails {
        CompanyDetails {
            name: "Al Noor Trading".to_string(),
            address: "Riyadh".to_string(),
            phone: "0500000000".to_string(),
            email: "info@company.com".to_string(),
            logo_url: None,
        }
    }

    fn quotation() -> Quotation {
        Quotation::new_for(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
    }

    #[test]
    fn test_rows_follow_ledger_order() {
        let items = vec![
            LineItem::new("Rice", "sack", 40.0, 6.0),
            LineItem::new("Sugar", "sack", 50.0, 3.0),
        ];
        let doc = DocumentModel::build(&company(), &items, &quotation());

        assert_eq!(doc.rows.len(), 2);
        assert_eq!(doc.rows[0].index, 1);
        assert_eq!(doc.rows[0].name, "Rice");
        assert_eq!(doc.rows[0].capacity_badge, Some(40.0));
        assert_eq!(doc.rows[0].total, 240.0);
        assert_eq!(doc.rows[1].index, 2);
        assert_eq!(doc.rows[1].total, 150.0);
    }

    #[test]
    fn test_padding_reaches_minimum_rows() {
        let items = vec![LineItem::blank(); 3];
        let doc = DocumentModel::build(&company(), &items, &quotation());
        assert_eq!(doc.padding_rows, MIN_PRINT_ROWS - 3);
        assert_eq!(doc.total_rows(), MIN_PRINT_ROWS);

        let many: Vec<LineItem> = (0..15).map(|_| LineItem::blank()).collect();
        let doc = DocumentModel::build(&company(), &many, &quotation());
        assert_eq!(doc.padding_rows, 0);
        assert_eq!(doc.total_rows(), 15);
    }

    #[test]
    fn test_zero_capacity_has_no_badge() {
        let items = vec![LineItem::new("Service", "visit", 0.0, 50.0)];
        let doc = DocumentModel::build(&company(), &items, &quotation());
        assert_eq!(doc.rows[0].capacity_badge, None);
    }

    #[test]
    fn test_notes_only_when_present() {
        let mut q = quotation();
        let doc = DocumentModel::build(&company(), &[], &q);
        assert_eq!(doc.notes, None);

        q.notes = "  \n".to_string();
        assert_eq!(DocumentModel::build(&company(), &[], &q).notes, None);

        q.notes = "Prices valid for 30 days".to_string();
        assert_eq!(
            DocumentModel::build(&company(), &[], &q).notes.as_deref(),
            Some("Prices valid for 30 days")
        );
    }

    #[test]
    fn test_header_and_footer() {
        let mut q = quotation();
        q.header_layout = HeaderLayout::Center;
        let mut c = company();
        c.set_logo("logo.png");

        let doc = DocumentModel::build(&c, &[], &q);
        assert_eq!(doc.header.layout, HeaderLayout::Center);
        assert_eq!(doc.header.logo_url.as_deref(), Some("logo.png"));
        assert_eq!(doc.header.date, "2025-03-01");
        assert_eq!(doc.footer_address, "Riyadh");
    }

    #[test]
    fn test_plain_text_renderer() {
        let items = vec![LineItem::new("Rice", "sack", 40.0, 6.0)];
        let mut q = quotation();
        q.notes = "Thank you".to_string();
        let doc = DocumentModel::build(&company(), &items, &q);

        let text = PlainTextRenderer::default().render(&doc).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert!(text.contains("Al Noor Trading"));
        assert!(text.contains("sack [40]"));
        assert!(text.contains("240"));
        assert!(text.contains("Thank you"));
        assert!(lines.last().unwrap().ends_with("Riyadh"));
    }
}
