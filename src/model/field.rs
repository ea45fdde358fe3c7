//! Table kinds and their canonical field sets.
//!
//! Every table page of the dashboard is a [`TableKind`]. Each kind carries a
//! fixed, ordered set of [`Field`]s; a field knows its canonical camelCase
//! name, its display label, the kind of value it holds, the raw source keys
//! it may arrive under, and how column filters match against it.

use std::fmt;

// ===== ValueKind =====

/// Shape of the value a field holds after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Free text, passed through verbatim.
    Text,
    /// Whole number (e.g. tenor in years).
    Integer,
    /// Monetary amount, rendered as `$1,234.56`.
    Currency,
    /// Percentage, rendered as `35.00%`.
    Percent,
    /// Calendar date, rendered as `YYYY-MM-DD`.
    Date,
}

// ===== MatchPolicy =====

/// How a column filter pattern is compared with a field's display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchPolicy {
    /// Case-insensitive substring match.
    Contains,
    /// Lexicographic `value >= pattern` on `YYYY-MM-DD` strings.
    OnOrAfter,
    /// Lexicographic `value <= pattern` on `YYYY-MM-DD` strings.
    OnOrBefore,
}

// ===== Field =====

/// Canonical display field, shared across table kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Policy identifier.
    PolicyNumber,
    /// Product marketing name.
    ProductName,
    /// Product code.
    ProductCode,
    /// Distributing firm name.
    FirmName,
    /// Date the application was signed (record added).
    ApplicationSignDate,
    /// Ending account value.
    AccountValue,
    /// Portion of the account value ceded to reinsurers.
    ReinsuredAccountValue,
    /// Reinsurer identifier.
    ReinsurerId,
    /// Reinsurer name.
    ReinsurerName,
    /// Treaty identifier.
    TreatyId,
    /// Quota share percentage.
    QuotaShare,
    /// Ceding allowance percentage.
    CedingAllowance,
    /// Expense allowance percentage.
    ExpenseAllowance,
    /// Treaty effective date.
    EffectiveDate,
    /// Treaty expiry date.
    ExpiryDate,
    /// Transaction identifier.
    TransactionId,
    /// Transaction type (New Business, Endorsement, ...).
    TransactionType,
    /// Transaction date.
    TransactionDate,
    /// Name of the insured party.
    InsuredName,
    /// Gross premium.
    Premium,
    /// Premium ceded under the quota share.
    QuotaSharePremium,
    /// Ceding commission.
    CedingCommission,
    /// Net premium.
    NetPremium,
    /// Product term in years.
    Tenor,
    /// Ceding premium allowance percentage.
    CedingPremiumAllowance,
    /// Expense premium allowance percentage.
    ExpensePremiumAllowance,
    /// Source of the premium (New Business, Renewal).
    PremiumSource,
    /// Total premiums for the reporting period.
    TotalPremiumsForPeriod,
    /// Ending accumulation value.
    EndingAccumulationValue,
}

impl Field {
    /// Every field, in declaration order.
    pub const ALL: [Field; 29] = [
        Field::PolicyNumber,
        Field::ProductName,
        Field::ProductCode,
        Field::FirmName,
        Field::ApplicationSignDate,
        Field::AccountValue,
        Field::ReinsuredAccountValue,
        Field::ReinsurerId,
        Field::ReinsurerName,
        Field::TreatyId,
        Field::QuotaShare,
        Field::CedingAllowance,
        Field::ExpenseAllowance,
        Field::EffectiveDate,
        Field::ExpiryDate,
        Field::TransactionId,
        Field::TransactionType,
        Field::TransactionDate,
        Field::InsuredName,
        Field::Premium,
        Field::QuotaSharePremium,
        Field::CedingCommission,
        Field::NetPremium,
        Field::Tenor,
        Field::CedingPremiumAllowance,
        Field::ExpensePremiumAllowance,
        Field::PremiumSource,
        Field::TotalPremiumsForPeriod,
        Field::EndingAccumulationValue,
    ];

    /// Canonical camelCase name.
    pub fn name(self) -> &'static str {
        match self {
            Field::PolicyNumber => "policyNumber",
            Field::ProductName => "productName",
            Field::ProductCode => "productCode",
            Field::FirmName => "firmName",
            Field::ApplicationSignDate => "applicationSignDate",
            Field::AccountValue => "accountValue",
            Field::ReinsuredAccountValue => "reinsuredAccountValue",
            Field::ReinsurerId => "reinsurerId",
            Field::ReinsurerName => "reinsurerName",
            Field::TreatyId => "treatyId",
            Field::QuotaShare => "quotaShare",
            Field::CedingAllowance => "cedingAllowance",
            Field::ExpenseAllowance => "expenseAllowance",
            Field::EffectiveDate => "effectiveDate",
            Field::ExpiryDate => "expiryDate",
            Field::TransactionId => "transactionId",
            Field::TransactionType => "transactionType",
            Field::TransactionDate => "transactionDate",
            Field::InsuredName => "insuredName",
            Field::Premium => "premium",
            Field::QuotaSharePremium => "quotaSharePremium",
            Field::CedingCommission => "cedingCommission",
            Field::NetPremium => "netPremium",
            Field::Tenor => "tenor",
            Field::CedingPremiumAllowance => "cedingPremiumAllowance",
            Field::ExpensePremiumAllowance => "expensePremiumAllowance",
            Field::PremiumSource => "premiumSource",
            Field::TotalPremiumsForPeriod => "totalPremiumsForPeriod",
            Field::EndingAccumulationValue => "endingAccumulationValue",
        }
    }

    /// Look up a field by its canonical name (exact match).
    pub fn parse(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.name() == name)
    }

    /// Column header label.
    pub fn label(self) -> &'static str {
        match self {
            Field::PolicyNumber => "Policy Number",
            Field::ProductName => "Product Name",
            Field::ProductCode => "Product Code",
            Field::FirmName => "Firm Name",
            Field::ApplicationSignDate => "Application Sign Date",
            Field::AccountValue => "Account Value",
            Field::ReinsuredAccountValue => "Reinsured Account Value",
            Field::ReinsurerId => "Reinsurer ID",
            Field::ReinsurerName => "Reinsurer Name",
            Field::TreatyId => "Treaty ID",
            Field::QuotaShare => "Quota Share",
            Field::CedingAllowance => "Ceding Allowance",
            Field::ExpenseAllowance => "Expense Allowance",
            Field::EffectiveDate => "Effective Date",
            Field::ExpiryDate => "Expiry Date",
            Field::TransactionId => "Transaction ID",
            Field::TransactionType => "Transaction Type",
            Field::TransactionDate => "Transaction Date",
            Field::InsuredName => "Insured Name",
            Field::Premium => "Premium",
            Field::QuotaSharePremium => "Quota Share Premium",
            Field::CedingCommission => "Ceding Commission",
            Field::NetPremium => "Net Premium",
            Field::Tenor => "Tenor",
            Field::CedingPremiumAllowance => "Ceding Premium Allowance",
            Field::ExpensePremiumAllowance => "Expense Premium Allowance",
            Field::PremiumSource => "Premium Source",
            Field::TotalPremiumsForPeriod => "Total Premiums",
            Field::EndingAccumulationValue => "Ending Accumulation Value",
        }
    }

    /// Value shape after normalization.
    pub fn value_kind(self) -> ValueKind {
        match self {
            Field::ApplicationSignDate
            | Field::EffectiveDate
            | Field::ExpiryDate
            | Field::TransactionDate => ValueKind::Date,
            Field::AccountValue
            | Field::ReinsuredAccountValue
            | Field::Premium
            | Field::QuotaSharePremium
            | Field::CedingCommission
            | Field::NetPremium
            | Field::TotalPremiumsForPeriod
            | Field::EndingAccumulationValue => ValueKind::Currency,
            Field::QuotaShare
            | Field::CedingAllowance
            | Field::ExpenseAllowance
            | Field::CedingPremiumAllowance
            | Field::ExpensePremiumAllowance => ValueKind::Percent,
            Field::Tenor => ValueKind::Integer,
            _ => ValueKind::Text,
        }
    }

    /// Column filter semantics for this field.
    ///
    /// Only the treaty term boundaries use range comparison; every other
    /// field, dates included, matches by substring.
    pub fn match_policy(self) -> MatchPolicy {
        match self {
            Field::EffectiveDate => MatchPolicy::OnOrAfter,
            Field::ExpiryDate => MatchPolicy::OnOrBefore,
            _ => MatchPolicy::Contains,
        }
    }

    /// Raw API keys this field is read from, in priority order.
    ///
    /// Keys that differ from the canonical name only by casing or
    /// underscores (`POLICY_NUMBER`, `policyNumber`) are matched without
    /// being listed here.
    pub fn source_keys(self) -> &'static [&'static str] {
        match self {
            Field::FirmName => &["RF_FIRM_NAME", "FIRM_NAME"],
            Field::ApplicationSignDate => &["RRCF_DATE_ADDED", "APPLICATION_SIGN_DATE"],
            Field::AccountValue => &["ENDING_AV", "ACCOUNT_VALUE"],
            Field::ReinsuredAccountValue => &[],
            Field::EffectiveDate => &["EFFECTIVE_DATE", "TREATY_EFFECTIVE_DATE"],
            Field::ExpiryDate => &["EXPIRY_DATE", "EXPIRATION_DATE", "TREATY_EXPIRY_DATE"],
            Field::Tenor => &["TENOR", "PRODUCT_TENOR"],
            Field::TotalPremiumsForPeriod => &["TOTAL_PREMIUMS_FOR_PERIOD", "TOTAL_PREMIUMS"],
            _ => &[],
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ===== TableKind =====

/// One table page of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TableKind {
    /// Policy landing grid.
    Policies,
    /// Reinsurers and their treaties.
    Reinsurers,
    /// Premium transactions on policies under a treaty.
    PolicyTransactions,
    /// Policies ceded to a reinsurer under a treaty.
    ReinsurerTransactions,
    /// Per-reinsurer allocation of a single policy.
    ReinsurerLevels,
}

impl TableKind {
    /// Every table kind, in tab order.
    pub const ALL: [TableKind; 5] = [
        TableKind::Policies,
        TableKind::Reinsurers,
        TableKind::PolicyTransactions,
        TableKind::ReinsurerTransactions,
        TableKind::ReinsurerLevels,
    ];

    /// Tab title.
    pub fn title(self) -> &'static str {
        match self {
            TableKind::Policies => "Policies",
            TableKind::Reinsurers => "Reinsurers",
            TableKind::PolicyTransactions => "Policy Transactions",
            TableKind::ReinsurerTransactions => "Reinsurer Transactions",
            TableKind::ReinsurerLevels => "Reinsurer Levels",
        }
    }

    /// Identifier used in config files and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            TableKind::Policies => "policies",
            TableKind::Reinsurers => "reinsurers",
            TableKind::PolicyTransactions => "policy_transactions",
            TableKind::ReinsurerTransactions => "reinsurer_transactions",
            TableKind::ReinsurerLevels => "reinsurer_levels",
        }
    }

    /// Inverse of [`TableKind::key`].
    pub fn parse(key: &str) -> Option<TableKind> {
        TableKind::ALL.into_iter().find(|kind| kind.key() == key)
    }

    /// Position in [`TableKind::ALL`].
    pub fn index(self) -> usize {
        match self {
            TableKind::Policies => 0,
            TableKind::Reinsurers => 1,
            TableKind::PolicyTransactions => 2,
            TableKind::ReinsurerTransactions => 3,
            TableKind::ReinsurerLevels => 4,
        }
    }

    /// Fields shown as columns, in display order.
    pub fn fields(self) -> &'static [Field] {
        match self {
            TableKind::Policies => &[
                Field::PolicyNumber,
                Field::ProductName,
                Field::FirmName,
                Field::ApplicationSignDate,
                Field::AccountValue,
                Field::ReinsuredAccountValue,
            ],
            TableKind::Reinsurers => &[
                Field::ReinsurerId,
                Field::ReinsurerName,
                Field::TreatyId,
                Field::QuotaShare,
                Field::CedingAllowance,
                Field::ExpenseAllowance,
                Field::EffectiveDate,
                Field::ExpiryDate,
            ],
            TableKind::PolicyTransactions => &[
                Field::PolicyNumber,
                Field::TransactionId,
                Field::TransactionType,
                Field::TransactionDate,
                Field::InsuredName,
                Field::Premium,
                Field::QuotaSharePremium,
                Field::CedingCommission,
                Field::NetPremium,
            ],
            TableKind::ReinsurerTransactions => &[
                Field::PolicyNumber,
                Field::ProductCode,
                Field::ProductName,
                Field::Tenor,
                Field::FirmName,
            ],
            TableKind::ReinsurerLevels => &[
                Field::ReinsurerName,
                Field::TreatyId,
                Field::QuotaShare,
                Field::CedingPremiumAllowance,
                Field::ExpensePremiumAllowance,
                Field::PremiumSource,
                Field::TotalPremiumsForPeriod,
                Field::EndingAccumulationValue,
            ],
        }
    }

    /// Fields that have a dedicated free-text search box.
    pub fn search_fields(self) -> &'static [Field] {
        match self {
            TableKind::Policies => &[Field::PolicyNumber, Field::ProductName, Field::FirmName],
            TableKind::Reinsurers => &[Field::ReinsurerName, Field::TreatyId],
            TableKind::PolicyTransactions => &[
                Field::PolicyNumber,
                Field::TransactionType,
                Field::InsuredName,
            ],
            TableKind::ReinsurerTransactions => &[
                Field::PolicyNumber,
                Field::ProductCode,
                Field::ProductName,
                Field::FirmName,
            ],
            TableKind::ReinsurerLevels => &[Field::ReinsurerName, Field::TreatyId],
        }
    }

    /// Whether `field` is one of this kind's columns.
    pub fn has_field(self, field: Field) -> bool {
        self.fields().contains(&field)
    }

    /// Whether `field` has a search box on this kind.
    pub fn is_search_field(self, field: Field) -> bool {
        self.search_fields().contains(&field)
    }

    /// Currency columns, summed in the table summary.
    pub fn currency_fields(self) -> impl Iterator<Item = Field> {
        self.fields()
            .iter()
            .copied()
            .filter(|field| field.value_kind() == ValueKind::Currency)
    }

    /// Endpoint path relative to the API base URL.
    pub fn default_endpoint(self) -> &'static str {
        match self {
            TableKind::Policies => "getGridDataPolicyLanding",
            TableKind::Reinsurers => "getGridDataReinsurerLanding",
            TableKind::PolicyTransactions => "getPolicyTransactions",
            TableKind::ReinsurerTransactions => "getReinsurerTransactions",
            TableKind::ReinsurerLevels => "getPolicyReinsurerLevels",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
