//! Render model - the immutable payload handed to the template
//!
//! Pure merge of the aggregated quote, the computed totals, and the
//! supplier profile. No computation happens here and no input is
//! mutated; callers may reuse their values afterwards.

use serde::Serialize;

use crate::quote::aggregate::{AggregatedQuote, LineItem, QuoteHeader};
use crate::quote::totals::Totals;
use crate::settings::SupplierProfile;

/// Everything the quotation template needs, built once per invocation
#[derive(Debug, Clone, Serialize)]
pub struct RenderModel {
    pub header: QuoteHeader,
    pub items: Vec<LineItem>,
    pub discount_amount: i64,
    pub has_discount: bool,
    pub supply: i64,
    pub tax: i64,
    pub total: i64,
    pub supplier: SupplierProfile,
}

/// Merge quote, totals, and supplier into one render model
pub fn build(quote: &AggregatedQuote, totals: &Totals, supplier: &SupplierProfile) -> RenderModel {
    RenderModel {
        header: quote.header.clone(),
        items: quote.items.clone(),
        discount_amount: quote.discount.amount,
        has_discount: quote.discount.present,
        supply: totals.supply,
        tax: totals.tax,
        total: totals.total,
        supplier: supplier.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::aggregate::Discount;

    fn sample_quote() -> AggregatedQuote {
        AggregatedQuote {
            header: QuoteHeader {
                quote_no: "Q1".to_string(),
                date: "2024-01-05".to_string(),
                company: "가나상사".to_string(),
                recipient: "김담당".to_string(),
            },
            items: vec![LineItem {
                name: "설치비".to_string(),
                spec: "현장".to_string(),
                qty: 1.0,
                unit_price: 50_000.0,
                amount: 50_000,
                note: String::new(),
            }],
            discount: Discount {
                amount: -5_000,
                present: true,
            },
        }
    }

    #[test]
    fn test_merge_carries_every_field() {
        let quote = sample_quote();
        let totals = Totals {
            supply: 45_000,
            tax: 4_500,
            total: 49_500,
        };
        let supplier = SupplierProfile {
            company: "우리공업".to_string(),
            ..SupplierProfile::default()
        };

        let model = build(&quote, &totals, &supplier);

        assert_eq!(model.header.quote_no, "Q1");
        assert_eq!(model.items.len(), 1);
        assert_eq!(model.discount_amount, -5_000);
        assert!(model.has_discount);
        assert_eq!(model.supply, 45_000);
        assert_eq!(model.tax, 4_500);
        assert_eq!(model.total, 49_500);
        assert_eq!(model.supplier.company, "우리공업");

        // inputs stay usable after the merge
        assert_eq!(quote.items[0].amount, 50_000);
        assert_eq!(totals.total, 49_500);
    }

    #[test]
    fn test_model_serializes_for_templates() {
        let model = build(
            &sample_quote(),
            &Totals {
                supply: 45_000,
                tax: 4_500,
                total: 49_500,
            },
            &SupplierProfile::default(),
        );
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["header"]["quote_no"], "Q1");
        assert_eq!(json["total"], 49_500);
        assert_eq!(json["has_discount"], true);
    }
}
