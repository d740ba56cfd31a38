use crate::domain::money::{Balance, Rate};
use crate::error::{PlanError, Result};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Longest supported projection horizon, in years.
pub const MAX_YEARS: u32 = 100;

/// Inputs for an investment-growth projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthInput {
    pub principal: Balance,
    pub monthly_contribution: Balance,
    pub annual_rate: Rate,
    pub years: u32,
}

/// Projected value at the end of a given year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub year: u32,
    pub amount: Balance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthProjection {
    /// One point per year, year 0 holding the principal. Amounts are
    /// rounded to two decimals for charting.
    pub points: Vec<GrowthPoint>,
    pub final_amount: Balance,
    pub total_invested: Balance,
    pub interest_earned: Balance,
}

/// Projects compound growth year by year.
///
/// Contributions are credited annually with a half-year convention:
/// interest for the year applies to the running total plus half the year's
/// contributions, approximating contributions spread across the year.
pub fn project(input: &GrowthInput) -> Result<GrowthProjection> {
    if input.principal < Balance::ZERO {
        return Err(PlanError::InvalidInput(
            "principal must not be negative".to_string(),
        ));
    }
    if input.monthly_contribution < Balance::ZERO {
        return Err(PlanError::InvalidInput(
            "monthly contribution must not be negative".to_string(),
        ));
    }
    if input.annual_rate < Rate::ZERO {
        return Err(PlanError::InvalidInput(
            "annual rate must not be negative".to_string(),
        ));
    }
    if input.years == 0 || input.years > MAX_YEARS {
        return Err(PlanError::InvalidInput(format!(
            "years must be in 1..={MAX_YEARS}"
        )));
    }

    let yearly_contribution = input.monthly_contribution.value() * dec!(12);
    let rate = input.annual_rate.value() / dec!(100);

    let mut total = input.principal.value();
    let mut points = Vec::with_capacity(input.years as usize + 1);
    for year in 0..=input.years {
        points.push(GrowthPoint {
            year,
            amount: Balance::new(total.round_dp(2)),
        });
        let interest = (total + yearly_contribution / dec!(2)) * rate;
        total += yearly_contribution + interest;
    }

    let final_amount = points
        .last()
        .map(|p| p.amount)
        .unwrap_or(input.principal);
    let total_invested =
        input.principal + Balance::new(yearly_contribution * rust_decimal::Decimal::from(input.years));
    Ok(GrowthProjection {
        points,
        final_amount,
        total_invested,
        interest_earned: final_amount - total_invested,
    })
}
