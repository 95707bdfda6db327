//! Booking domain types
//!
//! The stay (requested date range + guest count), the pricing selection
//! with its mutual-exclusion rules, and the quote returned by the
//! backend's price preview. The nightly rates themselves already
//! reflect residency/payment-method pricing upstream; this module only
//! derives the flags to send and renders what comes back.

use crate::error::{AppError, AppResult};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Requested date range and guest count for a prospective reservation
///
/// `to` is exclusive: nights = `to - from` in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stay {
    pub room_id: i64,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub guests: u32,
}

impl Stay {
    pub fn new(room_id: i64, from: NaiveDate, to: NaiveDate, guests: u32) -> Self {
        Self {
            room_id,
            from,
            to,
            guests,
        }
    }

    /// Number of nights in the stay
    pub fn nights(&self) -> i64 {
        (self.to - self.from).num_days()
    }

    /// The nights of the stay, date-ascending, check-out day excluded
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let to = self.to;
        self.from.iter_days().take_while(move |d| *d < to)
    }

    /// Check the stay invariants
    ///
    /// Fails with [`crate::error::ErrorCode::StayInvalid`] when the
    /// range is empty or reversed, the guest count is zero, or the room
    /// reference is unresolved. Guest-count-vs-capacity is enforced by
    /// the backend, not here.
    pub fn validate(&self) -> AppResult<()> {
        if self.room_id <= 0 {
            return Err(AppError::invalid_stay("room is unresolved"));
        }
        if self.from >= self.to {
            return Err(AppError::invalid_stay(format!(
                "check-out {} must be after check-in {}",
                self.to, self.from
            )));
        }
        if self.guests < 1 {
            return Err(AppError::invalid_stay("at least one guest is required"));
        }
        Ok(())
    }
}

/// Price option chosen by the guest
///
/// Residents pick between cash and card pricing; non-residents get the
/// generic electronic price unless a loyalty tier applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceOption {
    ResidentCash,
    ResidentCard,
    NonResident,
}

impl PriceOption {
    pub fn is_resident(&self) -> bool {
        matches!(self, Self::ResidentCash | Self::ResidentCard)
    }
}

/// Loyalty-card discount tier, available to non-residents only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoyaltyTier {
    Cash,
    Debit,
    Credit,
}

impl LoyaltyTier {
    /// The payment method this tier pairs with
    pub fn payment_method(&self) -> PaymentMethod {
        match self {
            Self::Cash => PaymentMethod::Cash,
            Self::Debit => PaymentMethod::Debit,
            Self::Credit => PaymentMethod::Credit,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Debit => "debit",
            Self::Credit => "credit",
        }
    }

    /// Nominal discount shown next to the tier
    ///
    /// Display copy only. The authoritative price always comes from the
    /// backend preview; nothing derives these figures from totals.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cash => "15%",
            Self::Debit => "10%",
            Self::Credit => "5%",
        }
    }
}

/// Payment method sent upstream with price previews and reservations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Debit,
    Credit,
    /// Generic non-discounted electronic payment
    Card,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Debit => "debit",
            Self::Credit => "credit",
            Self::Card => "card",
        }
    }
}

/// A change applied to a [`PricingSelection`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// Pick one of the three price options
    ChooseOption(PriceOption),
    /// Turn the loyalty card on without committing to a tier yet
    EnableLoyaltyCard,
    /// Pick a discount tier (implies the card is in use)
    ChooseLoyaltyTier(LoyaltyTier),
    /// Drop the loyalty card and its tier
    ClearLoyaltyCard,
}

/// The guest's pricing selection
///
/// A plain value object with a pure reducer ([`PricingSelection::apply`])
/// so the mutual-exclusion rule lives in exactly one place: residents
/// never combine with the loyalty card, and choosing a resident option
/// clears any loyalty state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSelection {
    pub option: Option<PriceOption>,
    pub use_loyalty_card: bool,
    pub loyalty_tier: Option<LoyaltyTier>,
}

impl PricingSelection {
    /// Apply one change, returning the next selection
    ///
    /// Loyalty changes are ignored while a resident option is active;
    /// selecting a resident option clears loyalty state (idempotent).
    pub fn apply(self, change: SelectionChange) -> Self {
        match change {
            SelectionChange::ChooseOption(option) => {
                if option.is_resident() {
                    Self {
                        option: Some(option),
                        use_loyalty_card: false,
                        loyalty_tier: None,
                    }
                } else {
                    Self {
                        option: Some(option),
                        ..self
                    }
                }
            }
            SelectionChange::EnableLoyaltyCard => {
                if self.option.is_some_and(|o| o.is_resident()) {
                    return self;
                }
                Self {
                    use_loyalty_card: true,
                    ..self
                }
            }
            SelectionChange::ChooseLoyaltyTier(tier) => {
                if self.option.is_some_and(|o| o.is_resident()) {
                    return self;
                }
                Self {
                    use_loyalty_card: true,
                    loyalty_tier: Some(tier),
                    ..self
                }
            }
            SelectionChange::ClearLoyaltyCard => Self {
                use_loyalty_card: false,
                loyalty_tier: None,
                ..self
            },
        }
    }

    /// Check that the selection is complete enough to price
    pub fn validate(&self) -> AppResult<()> {
        if self.option.is_none() {
            return Err(AppError::incomplete_selection("no price option chosen"));
        }
        if self.use_loyalty_card && self.loyalty_tier.is_none() {
            return Err(AppError::incomplete_selection(
                "loyalty card is active but no discount tier chosen",
            ));
        }
        Ok(())
    }

    /// Derive the wire flags for the preview and reservation endpoints
    ///
    /// The one piece of non-obvious business logic:
    /// - resident-card pays by card, resident-cash by cash; residents
    ///   have no loyalty path
    /// - a non-resident with an active tier pays by that tier's method,
    ///   otherwise by card
    pub fn flags(&self) -> AppResult<PricingFlags> {
        self.validate()?;
        let option = self.option.expect("validated above");
        let flags = match option {
            PriceOption::ResidentCash => PricingFlags {
                is_resident: true,
                payment_method: PaymentMethod::Cash,
                has_loyalty_card: false,
                loyalty_tier: None,
            },
            PriceOption::ResidentCard => PricingFlags {
                is_resident: true,
                payment_method: PaymentMethod::Card,
                has_loyalty_card: false,
                loyalty_tier: None,
            },
            PriceOption::NonResident => {
                let tier = self.loyalty_tier.filter(|_| self.use_loyalty_card);
                PricingFlags {
                    is_resident: false,
                    payment_method: tier
                        .map(|t| t.payment_method())
                        .unwrap_or(PaymentMethod::Card),
                    has_loyalty_card: tier.is_some(),
                    loyalty_tier: tier,
                }
            }
        };
        Ok(flags)
    }
}

/// Residency/payment/loyalty flags sent upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingFlags {
    pub is_resident: bool,
    pub payment_method: PaymentMethod,
    pub has_loyalty_card: bool,
    pub loyalty_tier: Option<LoyaltyTier>,
}

/// One night of a quote, as priced upstream
///
/// `final_price` is already guest-count-aware.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdownLine {
    pub date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub final_price: Decimal,
}

impl PriceBreakdownLine {
    /// Per-guest price for display
    ///
    /// `None` when guests is zero: render "n/a", never divide.
    pub fn unit_price(&self, guests: u32) -> Option<Decimal> {
        if guests == 0 {
            return None;
        }
        Some(self.final_price / Decimal::from(guests))
    }
}

/// Quote for a stay under a given pricing selection
///
/// Never persisted; recomputed on every input change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationQuote {
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    /// Date-ascending, one line per night
    pub breakdown: Vec<PriceBreakdownLine>,
}

impl ReservationQuote {
    /// Verify the breakdown covers every night of the stay in order
    ///
    /// Fails with [`crate::error::ErrorCode::RateMissing`] naming the
    /// first unpriced night. An administrator must have populated every
    /// night in range; gaps are never skipped silently.
    pub fn verify_coverage(&self, stay: &Stay) -> AppResult<()> {
        let mut lines = self.breakdown.iter();
        for expected in stay.dates() {
            match lines.next() {
                Some(line) if line.date == expected => {}
                _ => return Err(AppError::missing_rate(expected)),
            }
        }
        if lines.next().is_some() {
            return Err(AppError::validation(
                "breakdown has more lines than nights in the stay",
            ));
        }
        Ok(())
    }
}
