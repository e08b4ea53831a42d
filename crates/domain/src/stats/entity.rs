use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::FieldError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentType {
    Permanent,
    Seasonal,
    Casual,
    FixedTerm,
}

impl EmploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::Permanent => "PERMANENT",
            EmploymentType::Seasonal => "SEASONAL",
            EmploymentType::Casual => "CASUAL",
            EmploymentType::FixedTerm => "FIXED_TERM",
        }
    }

    pub fn parse(s: &str) -> Option<EmploymentType> {
        match s {
            "PERMANENT" => Some(EmploymentType::Permanent),
            "SEASONAL" => Some(EmploymentType::Seasonal),
            "CASUAL" => Some(EmploymentType::Casual),
            "FIXED_TERM" => Some(EmploymentType::FixedTerm),
            _ => None,
        }
    }
}

/// Monthly payroll statistics for one farm and employment type.
///
/// (farm, reporting_month, employment_type) is unique; the store
/// enforces it at write time and the violation surfaces as a conflict.
/// The two totals are derived fields: pure outputs of the
/// contributions and arrears, never inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmEmployeeStats {
    pub id: i32,
    pub farm_id: i32,
    pub reporting_month: NaiveDate,
    pub employment_type: EmploymentType,

    // Employee numbers
    pub citizen_male: i32,
    pub citizen_female: i32,
    pub expatriate_male: i32,
    pub expatriate_female: i32,

    // Payroll
    pub basic_pay_usd: Decimal,
    pub basic_pay_zwl: Decimal,

    // Contributions
    pub employees_contribution_usd: Decimal,
    pub employees_contribution_zwl: Decimal,
    pub employers_contribution_usd: Decimal,
    pub employers_contribution_zwl: Decimal,

    // Arrears and totals
    pub arrears_usd: Decimal,
    pub arrears_zwl: Decimal,
    pub total_contribution_usd: Decimal,
    pub total_contribution_zwl: Decimal,

    /// First-write-wins: set to the acting user on creation when unset,
    /// never overwritten on update. Weak reference.
    pub created_by: Option<i32>,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl FarmEmployeeStats {
    /// Validate the twelve guarded numeric fields. Every offending
    /// field is reported, not just the first.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        let counts = [
            ("citizen_male", self.citizen_male),
            ("citizen_female", self.citizen_female),
            ("expatriate_male", self.expatriate_male),
            ("expatriate_female", self.expatriate_female),
        ];
        for (field, value) in counts {
            if value < 0 {
                errors.push(FieldError::new(field, "must not be negative"));
            }
        }

        let amounts = [
            ("basic_pay_usd", self.basic_pay_usd),
            ("basic_pay_zwl", self.basic_pay_zwl),
            (
                "employees_contribution_usd",
                self.employees_contribution_usd,
            ),
            (
                "employees_contribution_zwl",
                self.employees_contribution_zwl,
            ),
            (
                "employers_contribution_usd",
                self.employers_contribution_usd,
            ),
            (
                "employers_contribution_zwl",
                self.employers_contribution_zwl,
            ),
            ("arrears_usd", self.arrears_usd),
            ("arrears_zwl", self.arrears_zwl),
        ];
        for (field, value) in amounts {
            if value < Decimal::ZERO {
                errors.push(FieldError::new(field, "must not be negative"));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Recompute both derived totals from contributions and arrears,
    /// overriding whatever the caller supplied. Called by the write
    /// services immediately before every persist.
    pub fn recompute(&mut self) {
        self.total_contribution_usd =
            self.employees_contribution_usd + self.employers_contribution_usd + self.arrears_usd;
        self.total_contribution_zwl =
            self.employees_contribution_zwl + self.employers_contribution_zwl + self.arrears_zwl;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn stats() -> FarmEmployeeStats {
        FarmEmployeeStats {
            id: 0,
            farm_id: 1,
            reporting_month: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            employment_type: EmploymentType::Permanent,
            citizen_male: 0,
            citizen_female: 0,
            expatriate_male: 0,
            expatriate_female: 0,
            basic_pay_usd: Decimal::ZERO,
            basic_pay_zwl: Decimal::ZERO,
            employees_contribution_usd: Decimal::ZERO,
            employees_contribution_zwl: Decimal::ZERO,
            employers_contribution_usd: Decimal::ZERO,
            employers_contribution_zwl: Decimal::ZERO,
            arrears_usd: Decimal::ZERO,
            arrears_zwl: Decimal::ZERO,
            total_contribution_usd: Decimal::ZERO,
            total_contribution_zwl: Decimal::ZERO,
            created_by: None,
            created: Utc::now(),
            updated: Utc::now(),
        }
    }

    #[test]
    fn totals_are_contributions_plus_arrears_per_currency() {
        let mut s = stats();
        s.employees_contribution_usd = dec!(100);
        s.employers_contribution_usd = dec!(50);
        s.arrears_usd = dec!(10);
        s.arrears_zwl = dec!(0);
        s.recompute();
        assert_eq!(s.total_contribution_usd, dec!(160));
        assert_eq!(s.total_contribution_zwl, dec!(0));
    }

    #[test]
    fn recompute_overrides_caller_supplied_totals() {
        let mut s = stats();
        s.employees_contribution_zwl = dec!(2500.75);
        s.employers_contribution_zwl = dec!(1000.25);
        s.total_contribution_usd = dec!(12345);
        s.total_contribution_zwl = dec!(99999);
        s.recompute();
        assert_eq!(s.total_contribution_usd, dec!(0));
        assert_eq!(s.total_contribution_zwl, dec!(3501.00));
    }

    #[test]
    fn valid_record_passes_validation() {
        let mut s = stats();
        s.citizen_male = 12;
        s.basic_pay_usd = dec!(4800);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn every_negative_field_is_reported() {
        let mut s = stats();
        s.citizen_male = -1;
        s.expatriate_female = -3;
        s.basic_pay_zwl = dec!(-0.01);
        s.arrears_usd = dec!(-5);

        let errors = s.validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(errors.len(), 4);
        assert!(fields.contains(&"citizen_male"));
        assert!(fields.contains(&"expatriate_female"));
        assert!(fields.contains(&"basic_pay_zwl"));
        assert!(fields.contains(&"arrears_usd"));
    }

    #[test]
    fn all_twelve_guarded_fields_can_fail_at_once() {
        let mut s = stats();
        s.citizen_male = -1;
        s.citizen_female = -1;
        s.expatriate_male = -1;
        s.expatriate_female = -1;
        s.basic_pay_usd = dec!(-1);
        s.basic_pay_zwl = dec!(-1);
        s.employees_contribution_usd = dec!(-1);
        s.employees_contribution_zwl = dec!(-1);
        s.employers_contribution_usd = dec!(-1);
        s.employers_contribution_zwl = dec!(-1);
        s.arrears_usd = dec!(-1);
        s.arrears_zwl = dec!(-1);

        let errors = s.validate().unwrap_err();
        assert_eq!(errors.len(), 12);
    }

    #[test]
    fn employment_type_round_trips_through_str() {
        for et in [
            EmploymentType::Permanent,
            EmploymentType::Seasonal,
            EmploymentType::Casual,
            EmploymentType::FixedTerm,
        ] {
            assert_eq!(EmploymentType::parse(et.as_str()), Some(et));
        }
        assert_eq!(EmploymentType::parse("INTERN"), None);
    }
}
