//! Normalized display records, one typed struct per table kind.
//!
//! [`DisplayRecord`] is the tagged union over the five kinds. Field access
//! goes through [`DisplayRecord::get`], an explicit field → accessor mapping;
//! there is no dynamic property lookup.

use super::cell::Cell;
use super::field::{Field, TableKind};

// ===== Per-kind records =====

/// Row of the policy landing grid.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyRecord {
    /// Policy identifier.
    pub policy_number: Cell,
    /// Product name.
    pub product_name: Cell,
    /// Distributing firm.
    pub firm_name: Cell,
    /// Application sign date.
    pub application_sign_date: Cell,
    /// Ending account value.
    pub account_value: Cell,
    /// Ceded share of the account value.
    pub reinsured_account_value: Cell,
}

impl PolicyRecord {
    fn from_fn(mut cell: impl FnMut(Field) -> Cell) -> Self {
        Self {
            policy_number: cell(Field::PolicyNumber),
            product_name: cell(Field::ProductName),
            firm_name: cell(Field::FirmName),
            application_sign_date: cell(Field::ApplicationSignDate),
            account_value: cell(Field::AccountValue),
            reinsured_account_value: cell(Field::ReinsuredAccountValue),
        }
    }

    fn get(&self, field: Field) -> Option<&Cell> {
        match field {
            Field::PolicyNumber => Some(&self.policy_number),
            Field::ProductName => Some(&self.product_name),
            Field::FirmName => Some(&self.firm_name),
            Field::ApplicationSignDate => Some(&self.application_sign_date),
            Field::AccountValue => Some(&self.account_value),
            Field::ReinsuredAccountValue => Some(&self.reinsured_account_value),
            _ => None,
        }
    }
}

/// Reinsurer treaty row.
#[derive(Debug, Clone, PartialEq)]
pub struct ReinsurerRecord {
    /// Reinsurer identifier.
    pub reinsurer_id: Cell,
    /// Reinsurer name.
    pub reinsurer_name: Cell,
    /// Treaty identifier.
    pub treaty_id: Cell,
    /// Quota share.
    pub quota_share: Cell,
    /// Ceding allowance.
    pub ceding_allowance: Cell,
    /// Expense allowance.
    pub expense_allowance: Cell,
    /// Treaty effective date.
    pub effective_date: Cell,
    /// Treaty expiry date.
    pub expiry_date: Cell,
}

impl ReinsurerRecord {
    fn from_fn(mut cell: impl FnMut(Field) -> Cell) -> Self {
        Self {
            reinsurer_id: cell(Field::ReinsurerId),
            reinsurer_name: cell(Field::ReinsurerName),
            treaty_id: cell(Field::TreatyId),
            quota_share: cell(Field::QuotaShare),
            ceding_allowance: cell(Field::CedingAllowance),
            expense_allowance: cell(Field::ExpenseAllowance),
            effective_date: cell(Field::EffectiveDate),
            expiry_date: cell(Field::ExpiryDate),
        }
    }

    fn get(&self, field: Field) -> Option<&Cell> {
        match field {
            Field::ReinsurerId => Some(&self.reinsurer_id),
            Field::ReinsurerName => Some(&self.reinsurer_name),
            Field::TreatyId => Some(&self.treaty_id),
            Field::QuotaShare => Some(&self.quota_share),
            Field::CedingAllowance => Some(&self.ceding_allowance),
            Field::ExpenseAllowance => Some(&self.expense_allowance),
            Field::EffectiveDate => Some(&self.effective_date),
            Field::ExpiryDate => Some(&self.expiry_date),
            _ => None,
        }
    }
}

/// Premium transaction on a policy.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyTransactionRecord {
    /// Policy identifier.
    pub policy_number: Cell,
    /// Transaction identifier.
    pub transaction_id: Cell,
    /// Transaction type.
    pub transaction_type: Cell,
    /// Transaction date.
    pub transaction_date: Cell,
    /// Insured party.
    pub insured_name: Cell,
    /// Gross premium.
    pub premium: Cell,
    /// Ceded premium.
    pub quota_share_premium: Cell,
    /// Ceding commission.
    pub ceding_commission: Cell,
    /// Net premium.
    pub net_premium: Cell,
}

impl PolicyTransactionRecord {
    fn from_fn(mut cell: impl FnMut(Field) -> Cell) -> Self {
        Self {
            policy_number: cell(Field::PolicyNumber),
            transaction_id: cell(Field::TransactionId),
            transaction_type: cell(Field::TransactionType),
            transaction_date: cell(Field::TransactionDate),
            insured_name: cell(Field::InsuredName),
            premium: cell(Field::Premium),
            quota_share_premium: cell(Field::QuotaSharePremium),
            ceding_commission: cell(Field::CedingCommission),
            net_premium: cell(Field::NetPremium),
        }
    }

    fn get(&self, field: Field) -> Option<&Cell> {
        match field {
            Field::PolicyNumber => Some(&self.policy_number),
            Field::TransactionId => Some(&self.transaction_id),
            Field::TransactionType => Some(&self.transaction_type),
            Field::TransactionDate => Some(&self.transaction_date),
            Field::InsuredName => Some(&self.insured_name),
            Field::Premium => Some(&self.premium),
            Field::QuotaSharePremium => Some(&self.quota_share_premium),
            Field::CedingCommission => Some(&self.ceding_commission),
            Field::NetPremium => Some(&self.net_premium),
            _ => None,
        }
    }
}

/// Policy ceded to a reinsurer.
#[derive(Debug, Clone, PartialEq)]
pub struct ReinsurerTransactionRecord {
    /// Policy identifier.
    pub policy_number: Cell,
    /// Product code.
    pub product_code: Cell,
    /// Product name.
    pub product_name: Cell,
    /// Term in years.
    pub tenor: Cell,
    /// Distributing firm.
    pub firm_name: Cell,
}

impl ReinsurerTransactionRecord {
    fn from_fn(mut cell: impl FnMut(Field) -> Cell) -> Self {
        Self {
            policy_number: cell(Field::PolicyNumber),
            product_code: cell(Field::ProductCode),
            product_name: cell(Field::ProductName),
            tenor: cell(Field::Tenor),
            firm_name: cell(Field::FirmName),
        }
    }

    fn get(&self, field: Field) -> Option<&Cell> {
        match field {
            Field::PolicyNumber => Some(&self.policy_number),
            Field::ProductCode => Some(&self.product_code),
            Field::ProductName => Some(&self.product_name),
            Field::Tenor => Some(&self.tenor),
            Field::FirmName => Some(&self.firm_name),
            _ => None,
        }
    }
}

/// One reinsurer's allocation of a policy.
#[derive(Debug, Clone, PartialEq)]
pub struct ReinsurerLevelRecord {
    /// Reinsurer name.
    pub reinsurer_name: Cell,
    /// Treaty identifier.
    pub treaty_id: Cell,
    /// Quota share.
    pub quota_share: Cell,
    /// Ceding premium allowance.
    pub ceding_premium_allowance: Cell,
    /// Expense premium allowance.
    pub expense_premium_allowance: Cell,
    /// Premium source.
    pub premium_source: Cell,
    /// Total premiums for the period.
    pub total_premiums_for_period: Cell,
    /// Ending accumulation value.
    pub ending_accumulation_value: Cell,
}

impl ReinsurerLevelRecord {
    fn from_fn(mut cell: impl FnMut(Field) -> Cell) -> Self {
        Self {
            reinsurer_name: cell(Field::ReinsurerName),
            treaty_id: cell(Field::TreatyId),
            quota_share: cell(Field::QuotaShare),
            ceding_premium_allowance: cell(Field::CedingPremiumAllowance),
            expense_premium_allowance: cell(Field::ExpensePremiumAllowance),
            premium_source: cell(Field::PremiumSource),
            total_premiums_for_period: cell(Field::TotalPremiumsForPeriod),
            ending_accumulation_value: cell(Field::EndingAccumulationValue),
        }
    }

    fn get(&self, field: Field) -> Option<&Cell> {
        match field {
            Field::ReinsurerName => Some(&self.reinsurer_name),
            Field::TreatyId => Some(&self.treaty_id),
            Field::QuotaShare => Some(&self.quota_share),
            Field::CedingPremiumAllowance => Some(&self.ceding_premium_allowance),
            Field::ExpensePremiumAllowance => Some(&self.expense_premium_allowance),
            Field::PremiumSource => Some(&self.premium_source),
            Field::TotalPremiumsForPeriod => Some(&self.total_premiums_for_period),
            Field::EndingAccumulationValue => Some(&self.ending_accumulation_value),
            _ => None,
        }
    }
}

// ===== DisplayRecord =====

/// A normalized row of any table kind.
///
/// Every field of the kind is present; missing source data is
/// [`Cell::Missing`]. Records are never edited in place, a refetch replaces
/// the whole set.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayRecord {
    /// Policy landing row.
    Policy(PolicyRecord),
    /// Reinsurer treaty row.
    Reinsurer(ReinsurerRecord),
    /// Policy transaction row.
    PolicyTransaction(PolicyTransactionRecord),
    /// Reinsurer transaction row.
    ReinsurerTransaction(ReinsurerTransactionRecord),
    /// Reinsurer level row.
    ReinsurerLevel(ReinsurerLevelRecord),
}

impl DisplayRecord {
    /// Build a record of `kind`, asking `cell` for each of its fields in
    /// column order.
    pub fn build(kind: TableKind, cell: impl FnMut(Field) -> Cell) -> Self {
        match kind {
            TableKind::Policies => DisplayRecord::Policy(PolicyRecord::from_fn(cell)),
            TableKind::Reinsurers => DisplayRecord::Reinsurer(ReinsurerRecord::from_fn(cell)),
            TableKind::PolicyTransactions => {
                DisplayRecord::PolicyTransaction(PolicyTransactionRecord::from_fn(cell))
            }
            TableKind::ReinsurerTransactions => {
                DisplayRecord::ReinsurerTransaction(ReinsurerTransactionRecord::from_fn(cell))
            }
            TableKind::ReinsurerLevels => {
                DisplayRecord::ReinsurerLevel(ReinsurerLevelRecord::from_fn(cell))
            }
        }
    }

    /// Record whose fields are all [`Cell::Missing`].
    pub fn missing(kind: TableKind) -> Self {
        Self::build(kind, |_| Cell::Missing)
    }

    /// Table kind this record belongs to.
    pub fn kind(&self) -> TableKind {
        match self {
            DisplayRecord::Policy(_) => TableKind::Policies,
            DisplayRecord::Reinsurer(_) => TableKind::Reinsurers,
            DisplayRecord::PolicyTransaction(_) => TableKind::PolicyTransactions,
            DisplayRecord::ReinsurerTransaction(_) => TableKind::ReinsurerTransactions,
            DisplayRecord::ReinsurerLevel(_) => TableKind::ReinsurerLevels,
        }
    }

    /// Value of `field`, or `None` if this kind has no such column.
    pub fn get(&self, field: Field) -> Option<&Cell> {
        match self {
            DisplayRecord::Policy(r) => r.get(field),
            DisplayRecord::Reinsurer(r) => r.get(field),
            DisplayRecord::PolicyTransaction(r) => r.get(field),
            DisplayRecord::ReinsurerTransaction(r) => r.get(field),
            DisplayRecord::ReinsurerLevel(r) => r.get(field),
        }
    }

    /// Cells in column order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.kind()
            .fields()
            .iter()
            .filter_map(move |field| self.get(*field))
    }
}
