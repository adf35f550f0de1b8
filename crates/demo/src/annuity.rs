// File: crates/demo/src/annuity.rs
// Summary: Loan amortization sample data (remaining debt, interest and clearance per period).

use cylinder_core::{ChartData, Result};
use tracing::{debug, warn};

/// Annuity loan: constant payment per period covering interest plus clearance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Annuity {
    pub principal: f64,
    /// Yearly interest in percent.
    pub interest_rate: f64,
    /// Initial yearly clearance in percent.
    pub clearance_rate: f64,
    pub periods_per_year: u32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schedule {
    pub debt: Vec<f64>,
    pub interest: Vec<f64>,
    pub clearance: Vec<f64>,
}

impl Annuity {
    /// Payment per period.
    pub fn payment(&self) -> f64 {
        self.principal * (self.interest_rate + self.clearance_rate) / 100.0 / self.periods_per_year as f64
    }

    /// One row per period until the debt is paid off. Empty when any input is zero
    /// or when the payment does not cover the first period's interest.
    pub fn schedule(&self) -> Schedule {
        let mut plan = Schedule::default();
        if self.principal == 0.0 || self.interest_rate == 0.0 || self.clearance_rate == 0.0 || self.periods_per_year == 0 {
            return plan;
        }
        let periods = self.periods_per_year as f64;
        let payment = self.payment();
        let mut debt = self.principal;

        while debt > 0.0 {
            let interest = debt * self.interest_rate / 100.0 / periods;
            let clearance = payment - interest;
            // clearance only grows from here on, so a first non-positive one never pays off
            if clearance <= 0.0 {
                warn!(payment, interest, "annuity never amortizes");
                return Schedule::default();
            }
            plan.debt.push(debt);
            plan.interest.push(interest);
            plan.clearance.push(clearance);
            debt -= clearance;
        }
        debug!(periods = plan.debt.len(), payment, "annuity schedule");
        plan
    }

    /// Append the schedule as three series and widen the x range to at least 3.
    pub fn add_to(&self, data: &mut ChartData) -> Result<()> {
        let plan = self.schedule();
        if plan.debt.is_empty() {
            return Ok(());
        }
        data.add_series("Remaining Debt", plan.debt)?;
        data.add_series("Interest", plan.interest)?;
        data.add_series("Clearance", plan.clearance)?;
        data.extend_len(3);
        Ok(())
    }
}
