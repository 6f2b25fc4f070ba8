//! Billing anchor computation
//!
//! Derives the first invoice date for a phase from its start date, the
//! plan's billing period, and the phase's cycle convention. Total over the
//! input enums: every combination yields a concrete date.

use billing_contracts::{BillingCycle, BillingPeriod};
use chrono::{Datelike, Duration, Months, NaiveDate};

/// Compute the first invoice date for a billing cycle convention.
///
/// CALENDAR anchors to the start of the next natural calendar boundary for
/// the period (e.g. the first of next month for MONTHLY), regardless of the
/// start day. ANNIVERSARY anchors exactly one period-length after the start
/// date, clamping the day when the target month is shorter.
pub fn first_invoice_date(
    start: NaiveDate,
    period: BillingPeriod,
    cycle: BillingCycle,
) -> NaiveDate {
    match cycle {
        BillingCycle::Calendar => calendar_anchor(start, period),
        BillingCycle::Anniversary => anniversary_anchor(start, period),
    }
}

fn calendar_anchor(start: NaiveDate, period: BillingPeriod) -> NaiveDate {
    match period {
        BillingPeriod::Daily => start + Duration::days(1),
        // ISO weeks start on Monday; strictly after the start date.
        BillingPeriod::Weekly => next_monday(start),
        BillingPeriod::Monthly => {
            let (year, month) = next_month(start.year(), start.month());
            month_start(year, month, start)
        }
        BillingPeriod::Quarterly => {
            // Quarters begin in Jan, Apr, Jul, Oct.
            let next_q = (start.month() - 1) / 3 * 3 + 4;
            if next_q > 12 {
                month_start(start.year() + 1, 1, start)
            } else {
                month_start(start.year(), next_q, start)
            }
        }
        BillingPeriod::HalfYearly => {
            if start.month() < 7 {
                month_start(start.year(), 7, start)
            } else {
                month_start(start.year() + 1, 1, start)
            }
        }
        BillingPeriod::Annual => month_start(start.year() + 1, 1, start),
    }
}

fn anniversary_anchor(start: NaiveDate, period: BillingPeriod) -> NaiveDate {
    match period {
        BillingPeriod::Daily => start + Duration::days(1),
        BillingPeriod::Weekly => start + Duration::weeks(1),
        BillingPeriod::Monthly => add_months(start, 1),
        BillingPeriod::Quarterly => add_months(start, 3),
        BillingPeriod::HalfYearly => add_months(start, 6),
        BillingPeriod::Annual => add_months(start, 12),
    }
}

/// Add whole months, clamping the day to the end of the target month
/// (Jan 31 + 1 month = Feb 29 in a leap year).
fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months)).unwrap_or(date)
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

fn month_start(year: i32, month: u32, fallback: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(fallback)
}

fn next_monday(date: NaiveDate) -> NaiveDate {
    let offset = 7 - date.weekday().num_days_from_monday() as i64;
    date + Duration::days(offset)
}
