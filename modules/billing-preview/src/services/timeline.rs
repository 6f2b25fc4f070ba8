//! Billing timeline
//!
//! Projects the subscription's phases and the assembled invoice breakdown
//! into an ordered sequence of display events. Purely additive: recomputing
//! from the same inputs yields an identical sequence.

use billing_contracts::SubscriptionPhase;

use crate::models::{InvoiceBreakdown, TimelineEvent};

/// Build the ordered event sequence: one phase-start event per phase (the
/// first labeled distinctly), the first-invoice event immediately after the
/// first phase start, and a terminal end event when the final phase has an
/// end date.
pub fn build_timeline(
    phases: &[SubscriptionPhase],
    breakdown: &InvoiceBreakdown,
    coupon_summary: Option<String>,
) -> Vec<TimelineEvent> {
    let mut events = Vec::with_capacity(phases.len() + 2);

    for (index, phase) in phases.iter().enumerate() {
        let label = if index == 0 {
            "Subscription Start"
        } else {
            "Subscription Updates"
        };
        events.push(TimelineEvent::PhaseStart {
            date: phase.start_date,
            label: label.to_string(),
        });

        if index == 0 {
            events.push(TimelineEvent::FirstInvoice {
                date: breakdown.first_invoice_date,
                breakdown: breakdown.clone(),
                coupon_summary: coupon_summary.clone(),
            });
        }
    }

    if let Some(end_date) = phases.last().and_then(|phase| phase.end_date) {
        events.push(TimelineEvent::SubscriptionEnd { date: end_date });
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use billing_contracts::BillingCycle;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn phase(start: NaiveDate, end: Option<NaiveDate>) -> SubscriptionPhase {
        SubscriptionPhase {
            start_date: start,
            end_date: end,
            billing_cycle: BillingCycle::Anniversary,
        }
    }

    fn breakdown(first_invoice: NaiveDate) -> InvoiceBreakdown {
        InvoiceBreakdown {
            plan_subtotal: "100".parse().unwrap(),
            subscription_discount: "0".parse().unwrap(),
            line_item_discount_total: "0".parse().unwrap(),
            per_charge_discounts: BTreeMap::new(),
            addon_total: "0".parse().unwrap(),
            addon_line_items: vec![],
            tax_amount: "0".parse().unwrap(),
            net_payable: "100".parse().unwrap(),
            currency: "USD".to_string(),
            first_invoice_date: first_invoice,
            billing_description: "Bills on Feb 15, 2024 for 1 month".to_string(),
        }
    }

    #[test]
    fn test_first_invoice_follows_first_phase_start() {
        let phases = vec![
            phase(date(2024, 1, 15), None),
            phase(date(2024, 6, 1), None),
        ];
        let events = build_timeline(&phases, &breakdown(date(2024, 2, 15)), None);

        assert_eq!(events.len(), 3);
        assert!(matches!(
            &events[0],
            TimelineEvent::PhaseStart { label, .. } if label == "Subscription Start"
        ));
        assert!(matches!(&events[1], TimelineEvent::FirstInvoice { .. }));
        assert!(matches!(
            &events[2],
            TimelineEvent::PhaseStart { label, .. } if label == "Subscription Updates"
        ));
    }

    #[test]
    fn test_end_event_only_when_final_phase_ends() {
        let open_ended = vec![phase(date(2024, 1, 15), None)];
        let events = build_timeline(&open_ended, &breakdown(date(2024, 2, 15)), None);
        assert!(!events
            .iter()
            .any(|e| matches!(e, TimelineEvent::SubscriptionEnd { .. })));

        let closed = vec![phase(date(2024, 1, 15), Some(date(2025, 1, 15)))];
        let events = build_timeline(&closed, &breakdown(date(2024, 2, 15)), None);
        assert_eq!(
            events.last(),
            Some(&TimelineEvent::SubscriptionEnd {
                date: date(2025, 1, 15)
            })
        );
    }

    #[test]
    fn test_timeline_is_restartable() {
        let phases = vec![phase(date(2024, 1, 15), Some(date(2024, 12, 31)))];
        let b = breakdown(date(2024, 2, 15));
        let summary = Some("1 coupon applied".to_string());

        let first = build_timeline(&phases, &b, summary.clone());
        let second = build_timeline(&phases, &b, summary);
        assert_eq!(first, second);
    }
}
