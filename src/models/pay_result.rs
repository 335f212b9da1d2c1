//! Pay calculation result model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::RoleTag;

/// The outcome of a pay calculation for a single employee.
///
/// `amount` is the total payable. The remaining fields break that total down
/// so a consumer can see how it was reached: `amount == salary + allowance`.
///
/// # Example
///
/// ```
/// use compensation_engine::models::{PayResult, RoleTag};
/// use rust_decimal::Decimal;
///
/// let result = PayResult {
///     employee_id: "emp_001".to_string(),
///     role: RoleTag::new("staff").unwrap(),
///     regular_hours: Decimal::from(40),
///     salary: Decimal::from(100),
///     allowance: Decimal::from(10),
///     amount: Decimal::from(110),
/// };
/// assert_eq!(result.amount, result.salary + result.allowance);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayResult {
    /// The employee this result belongs to.
    pub employee_id: String,
    /// The role whose strategy produced the salary.
    pub role: RoleTag,
    /// Regular hours fed into the strategy.
    pub regular_hours: Decimal,
    /// Salary produced by the compensation strategy.
    pub salary: Decimal,
    /// Allowance added on top of the salary.
    pub allowance: Decimal,
    /// Total payable amount.
    pub amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_pay_result_uses_string_decimals() {
        let result = PayResult {
            employee_id: "emp_001".to_string(),
            role: RoleTag::new("manager").unwrap(),
            regular_hours: Decimal::from(40),
            salary: Decimal::from(200),
            allowance: Decimal::ZERO,
            amount: Decimal::from(200),
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["employee_id"], "emp_001");
        assert_eq!(value["role"], "manager");
        assert_eq!(value["amount"], "200");
    }
}
