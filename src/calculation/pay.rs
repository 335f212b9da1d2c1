//! Pay calculation functionality.
//!
//! [`PayCalculator`] answers to payroll: it turns an employee record, a
//! compensation strategy and an allowance into a [`PayResult`]. It has no
//! side effects and knows nothing about hour reporting.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeRecord, PayResult};

use super::compensation::CompensationStrategy;
use super::regular_hours::{RegularHoursPolicy, StandardWeekPolicy};

/// The default base amount fed to compensation strategies.
pub const DEFAULT_BASE_PAY: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Computes total pay for one employee at a time.
#[derive(Clone)]
pub struct PayCalculator {
    base_pay: Decimal,
    hours_policy: Arc<dyn RegularHoursPolicy>,
}

impl Default for PayCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_PAY, Arc::new(StandardWeekPolicy::default()))
    }
}

impl PayCalculator {
    /// Creates a calculator with an explicit base amount and hours policy.
    pub fn new(base_pay: Decimal, hours_policy: Arc<dyn RegularHoursPolicy>) -> Self {
        Self {
            base_pay,
            hours_policy,
        }
    }

    /// The base amount passed to every strategy.
    pub fn base_pay(&self) -> Decimal {
        self.base_pay
    }

    /// Calculates the total pay for `employee`.
    ///
    /// `total = strategy.compute_salary(base_pay, regular_hours) + allowance`
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Validation`] if `allowance` is negative, or if
    /// the salary or the total overflows a `Decimal`.
    ///
    /// # Examples
    ///
    /// ```
    /// use compensation_engine::calculation::{PayCalculator, StaffStrategy};
    /// use compensation_engine::models::{EmployeeRecord, RoleTag};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = EmployeeRecord::new(
    ///     "emp_001", "Aiko", "Accounting", RoleTag::new("staff").unwrap(), Decimal::from(40),
    /// ).unwrap();
    ///
    /// let result = PayCalculator::default()
    ///     .compute(&employee, &StaffStrategy, Decimal::from(10))
    ///     .unwrap();
    /// assert_eq!(result.amount, Decimal::from(110));
    /// ```
    pub fn compute(
        &self,
        employee: &EmployeeRecord,
        strategy: &dyn CompensationStrategy,
        allowance: Decimal,
    ) -> EngineResult<PayResult> {
        if allowance < Decimal::ZERO {
            return Err(EngineError::validation(
                "allowance",
                format!("must not be negative (got {})", allowance),
            ));
        }

        let regular_hours = self.hours_policy.regular_hours(employee);
        let salary = strategy.compute_salary(self.base_pay, regular_hours)?;
        let amount = salary.checked_add(allowance).ok_or_else(|| {
            EngineError::validation(
                "amount",
                format!("salary {} plus allowance {} is out of range", salary, allowance),
            )
        })?;

        Ok(PayResult {
            employee_id: employee.id().to_string(),
            role: strategy.role(),
            regular_hours,
            salary,
            allowance,
            amount,
        })
    }

    /// Calculates pay with no allowance.
    pub fn compute_without_allowance(
        &self,
        employee: &EmployeeRecord,
        strategy: &dyn CompensationStrategy,
    ) -> EngineResult<PayResult> {
        self.compute(employee, strategy, Decimal::ZERO)
    }
}
