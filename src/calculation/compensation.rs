//! Role-based compensation strategies.
//!
//! Each role answers the same question, "what is the salary for this base
//! amount?", through its own [`CompensationStrategy`] implementor. Adding a
//! role means adding an implementor and registering it with the
//! [`RoleRegistry`](super::RoleRegistry); calculators only ever see the trait.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::RoleTag;

/// A salary rule for one role.
///
/// Implementors are stateless and shared across many employees, so they must
/// be `Send + Sync`. `base_multiplier` is always strictly positive.
pub trait CompensationStrategy: Send + Sync {
    /// The role tag this strategy is registered under.
    fn role(&self) -> RoleTag;

    /// The factor applied to the base amount.
    fn base_multiplier(&self) -> Decimal;

    /// Computes the salary for `base`, given the employee's regular `hours`.
    ///
    /// The built-in roles scale `base` only; `hours` is available to
    /// strategies that pay per hour.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Validation`] (field `salary`) if the product
    /// does not fit in a `Decimal`.
    fn compute_salary(&self, base: Decimal, _hours: Decimal) -> EngineResult<Decimal> {
        let multiplier = self.base_multiplier();
        base.checked_mul(multiplier).ok_or_else(|| {
            EngineError::validation(
                "salary",
                format!("{} x {} is out of range", base, multiplier),
            )
        })
    }
}

/// Interns earn half of the base amount.
#[derive(Debug, Clone, Copy, Default)]
pub struct InternStrategy;

impl CompensationStrategy for InternStrategy {
    fn role(&self) -> RoleTag {
        RoleTag::builtin("intern")
    }

    fn base_multiplier(&self) -> Decimal {
        Decimal::new(5, 1)
    }
}

/// Staff earn the base amount.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaffStrategy;

impl CompensationStrategy for StaffStrategy {
    fn role(&self) -> RoleTag {
        RoleTag::builtin("staff")
    }

    fn base_multiplier(&self) -> Decimal {
        Decimal::ONE
    }
}

/// Managers earn twice the base amount.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManagerStrategy;

impl CompensationStrategy for ManagerStrategy {
    fn role(&self) -> RoleTag {
        RoleTag::builtin("manager")
    }

    fn base_multiplier(&self) -> Decimal {
        Decimal::TWO
    }
}

/// Leaders earn one and a half times the base amount.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeaderStrategy;

impl CompensationStrategy for LeaderStrategy {
    fn role(&self) -> RoleTag {
        RoleTag::builtin("leader")
    }

    fn base_multiplier(&self) -> Decimal {
        Decimal::new(15, 1)
    }
}

/// A strategy defined entirely by configuration: `base * multiplier`.
///
/// Used for roles declared in `roles.yaml` rather than in code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiplierStrategy {
    role: RoleTag,
    multiplier: Decimal,
}

impl MultiplierStrategy {
    /// Creates a strategy for `role` with the given multiplier.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Validation`] if `multiplier` is zero or negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use compensation_engine::calculation::{CompensationStrategy, MultiplierStrategy};
    /// use compensation_engine::models::RoleTag;
    /// use rust_decimal::Decimal;
    ///
    /// let director = MultiplierStrategy::new(RoleTag::new("director").unwrap(), Decimal::from(3)).unwrap();
    /// assert_eq!(director.compute_salary(Decimal::from(100), Decimal::from(40)).unwrap(), Decimal::from(300));
    ///
    /// assert!(MultiplierStrategy::new(RoleTag::new("volunteer").unwrap(), Decimal::ZERO).is_err());
    /// ```
    pub fn new(role: RoleTag, multiplier: Decimal) -> EngineResult<Self> {
        if multiplier <= Decimal::ZERO {
            return Err(EngineError::validation(
                "multiplier",
                format!("must be greater than zero for role '{}' (got {})", role, multiplier),
            ));
        }
        Ok(Self { role, multiplier })
    }
}

impl CompensationStrategy for MultiplierStrategy {
    fn role(&self) -> RoleTag {
        self.role.clone()
    }

    fn base_multiplier(&self) -> Decimal {
        self.multiplier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn builtin() -> Vec<Box<dyn CompensationStrategy>> {
        vec![
            Box::new(InternStrategy),
            Box::new(StaffStrategy),
            Box::new(ManagerStrategy),
            Box::new(LeaderStrategy),
        ]
    }

    #[test]
    fn test_intern_earns_half() {
        assert_eq!(InternStrategy.compute_salary(dec("100"), dec("40")).unwrap(), dec("50"));
    }

    #[test]
    fn test_staff_earns_base() {
        assert_eq!(StaffStrategy.compute_salary(dec("100"), dec("40")).unwrap(), dec("100"));
    }

    #[test]
    fn test_manager_earns_double() {
        assert_eq!(ManagerStrategy.compute_salary(dec("100"), dec("40")).unwrap(), dec("200"));
    }

    #[test]
    fn test_leader_earns_one_and_a_half() {
        assert_eq!(LeaderStrategy.compute_salary(dec("100"), dec("40")).unwrap(), dec("150"));
    }

    #[test]
    fn test_builtin_roles_have_expected_tags() {
        let tags: Vec<String> = builtin().iter().map(|s| s.role().to_string()).collect();
        assert_eq!(tags, vec!["intern", "staff", "manager", "leader"]);
    }

    #[test]
    fn test_builtin_multipliers_are_positive() {
        for strategy in builtin() {
            assert!(
                strategy.base_multiplier() > Decimal::ZERO,
                "{} has non-positive multiplier",
                strategy.role()
            );
        }
    }

    #[test]
    fn test_multiplier_strategy_rejects_negative() {
        let result = MultiplierStrategy::new(RoleTag::new("temp").unwrap(), dec("-0.5"));
        assert!(matches!(result, Err(EngineError::Validation { .. })));
    }

    #[test]
    fn test_multiplier_strategy_uses_configured_factor() {
        let strategy = MultiplierStrategy::new(RoleTag::new("director").unwrap(), dec("2.75")).unwrap();
        assert_eq!(strategy.role().as_str(), "director");
        assert_eq!(strategy.compute_salary(dec("100"), dec("12")).unwrap(), dec("275"));
    }

    #[test]
    fn test_salary_overflow_is_validation_error() {
        let result = ManagerStrategy.compute_salary(Decimal::MAX, dec("40"));
        match result {
            Err(EngineError::Validation { field, .. }) => assert_eq!(field, "salary"),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    proptest! {
        #[test]
        fn prop_compute_salary_is_pure(base_cents in 0i64..10_000_000, hours in 0i64..200) {
            let base = Decimal::new(base_cents, 2);
            let hours = Decimal::from(hours);
            for strategy in builtin() {
                let first = strategy.compute_salary(base, hours).unwrap();
                let second = strategy.compute_salary(base, hours).unwrap();
                prop_assert_eq!(first, second);
                prop_assert_eq!(first, base * strategy.base_multiplier());
            }
        }
    }
}
