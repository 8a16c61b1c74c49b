//! Billing schedule date calculations.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, Utc};

/// Current UTC time as stored in `created_at` / `updated_at` columns.
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Date of the last charge of a plan.
///
/// The first charge falls on `start_date` and each following charge `frequency` months
/// later, so the last of `amount_of_charges` charges is `frequency * (amount_of_charges - 1)`
/// months after the start. Days past the end of a shorter month are clamped to its last day.
///
/// Returns `None` when the result is outside chrono's supported range.
pub fn plan_end_date(
    start_date: NaiveDate,
    frequency: u32,
    amount_of_charges: u32,
) -> Option<NaiveDate> {
    let months = frequency.checked_mul(amount_of_charges.saturating_sub(1))?;

    start_date.checked_add_months(Months::new(months))
}

/// First date on or after `start_date` whose day of the month is `day_of_the_month`.
///
/// `day_of_the_month` is limited to 1..=28 by validation so it exists in every month.
pub fn first_charge_date(start_date: NaiveDate, day_of_the_month: u32) -> Option<NaiveDate> {
    let candidate = start_date.with_day(day_of_the_month)?;

    if candidate >= start_date {
        return Some(candidate);
    }

    candidate.checked_add_months(Months::new(1))
}
