//! Cross-field business rules, applied to the merged claim

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::Record;

use crate::error::{DateRule, WorkflowError};
use crate::field::groups::RECONCILED_AMOUNT_FIELDS;
use crate::field::ClaimField;

/// Absolute tolerance for settlement reconciliation
pub const RECONCILIATION_TOLERANCE: Decimal = dec!(0.01);

/// Runs every rule in order; the first failure wins
pub fn check_business_rules(merged: &Record<ClaimField>) -> Result<(), WorkflowError> {
    check_date_ordering(merged)?;
    check_financial_reconciliation(merged)
}

/// Incident on or before submission; settlement strictly after submission
pub fn check_date_ordering(merged: &Record<ClaimField>) -> Result<(), WorkflowError> {
    let submitted = merged.date(ClaimField::SubmittedDate);

    if let (Some(incident), Some(submitted)) = (merged.date(ClaimField::IncidentDate), submitted) {
        if incident > submitted {
            return Err(WorkflowError::DateOrderingViolation {
                rule: DateRule::IncidentAfterSubmission,
                first: incident,
                second: submitted,
            });
        }
    }

    if let (Some(settlement), Some(submitted)) =
        (merged.date(ClaimField::SettlementDate), submitted)
    {
        if settlement <= submitted {
            return Err(WorkflowError::DateOrderingViolation {
                rule: DateRule::SettlementNotAfterSubmission,
                first: settlement,
                second: submitted,
            });
        }
    }

    Ok(())
}

/// Once every settlement amount is known, they must add up to the submitted amount.
///
/// Sums or differences outside the `Decimal` range never reconcile.
pub fn check_financial_reconciliation(merged: &Record<ClaimField>) -> Result<(), WorkflowError> {
    let Some(submitted) = merged.amount(ClaimField::AmountSubmitted) else {
        return Ok(());
    };

    let mut amounts = Vec::with_capacity(RECONCILED_AMOUNT_FIELDS.len());
    for field in RECONCILED_AMOUNT_FIELDS {
        match merged.amount(*field) {
            Some(amount) => amounts.push(amount),
            None => return Ok(()),
        }
    }

    let checked_sum = amounts
        .iter()
        .try_fold(Decimal::ZERO, |sum, amount| sum.checked_add(*amount));
    let reconciles = checked_sum
        .and_then(|computed| submitted.checked_sub(computed))
        .is_some_and(|difference| difference.abs() <= RECONCILIATION_TOLERANCE);

    if !reconciles {
        let computed = checked_sum.unwrap_or_else(|| {
            amounts
                .iter()
                .fold(Decimal::ZERO, |sum, amount| sum.saturating_add(*amount))
        });
        return Err(WorkflowError::FinancialReconciliationMismatch {
            submitted,
            computed,
        });
    }
    Ok(())
}
