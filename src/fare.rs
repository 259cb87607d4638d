use std::fmt::Display;
use std::ops::Range;

use arrayvec::ArrayVec;

use crate::network::{Age, Amount, Distance};
use crate::utils;

pub const MAX_FARE_TIERS: usize = 4;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum FareError {
    #[error("Fare tier must end after it starts ({start}..{end} km).")]
    EmptyTier { start: Distance, end: Distance },
    #[error("Fare tier unit distance must be positive.")]
    ZeroUnitDistance,
    #[error("A fare policy holds at most {} tiers.", MAX_FARE_TIERS)]
    TooManyTiers,
}

/// Extra charge for the part of a trip that falls within `start..end` kilometres.
///
/// Every started `unit_distance` costs `unit_fare`. The last tier is open-ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FareTier {
    pub start: Distance,
    pub end: Option<Distance>,
    pub unit_distance: Distance,
    pub unit_fare: Amount,
}

impl FareTier {
    pub fn new(start: Distance, end: Option<Distance>, unit_distance: Distance, unit_fare: Amount) -> Result<Self, FareError> {
        let tier = Self { start, end, unit_distance, unit_fare };
        tier.validate()?;
        Ok(tier)
    }

    pub fn validate(&self) -> Result<(), FareError> {
        if let Some(end) = self.end.filter(|&end| end <= self.start) {
            return Err(FareError::EmptyTier { start: self.start, end });
        }
        if self.unit_distance == 0 {
            return Err(FareError::ZeroUnitDistance);
        }
        Ok(())
    }

    // Saturates at `Amount::MAX`. Only called on validated tiers.
    pub fn fare(&self, distance: Distance) -> Amount {
        if distance <= self.start {
            return 0;
        }
        let covered = self.end.map_or(distance, |end| distance.min(end)) - self.start;
        covered.div_ceil(self.unit_distance).saturating_mul(self.unit_fare)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FarePolicy {
    pub base_fare: Amount,
    // Private so every tier goes through `with_tier`.
    tiers: ArrayVec<FareTier, MAX_FARE_TIERS>,
}

impl Default for FarePolicy {
    // Metropolitan subway fares: 1250 up to 10 km, +100 per 5 km up to 50 km, +100 per 8 km beyond.
    fn default() -> Self {
        let mut tiers = ArrayVec::new();
        tiers.push(FareTier { start: 10, end: Some(50), unit_distance: 5, unit_fare: 100 });
        tiers.push(FareTier { start: 50, end: None, unit_distance: 8, unit_fare: 100 });
        Self { base_fare: 1250, tiers }
    }
}

impl FarePolicy {
    pub fn new(base_fare: Amount) -> Self {
        Self { base_fare, tiers: ArrayVec::new() }
    }

    pub fn with_tier(mut self, tier: FareTier) -> Result<Self, FareError> {
        tier.validate()?;
        self.tiers.try_push(tier).map_err(|_| FareError::TooManyTiers)?;
        Ok(self)
    }

    pub fn tiers(&self) -> &[FareTier] { &self.tiers }

    // Fares saturate at `Amount::MAX` instead of wrapping.
    pub fn distance_fare(&self, distance: Distance) -> Amount {
        self.tiers
            .iter()
            .fold(self.base_fare, |fare, tier| fare.saturating_add(tier.fare(distance)))
    }

    pub fn fare(&self, distance: Distance, surcharge: Amount, discount: AgeDiscountPolicy) -> Fare {
        Fare { amount: discount.apply(self.distance_fare(distance).saturating_add(surcharge)) }
    }

    pub fn fare_for_age(&self, distance: Distance, surcharge: Amount, age: Age) -> Fare {
        self.fare(distance, surcharge, AgeDiscountPolicy::from_age(age))
    }
}

/// Age bands with reduced fares. Each band takes `deduction` off the fare and then discounts the
/// rest by `discount_percent`, keeping the deducted part.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AgeDiscountPolicy {
    Infant,
    Child,
    Teenager,
    Adult,
}

impl AgeDiscountPolicy {
    pub const ALL: [AgeDiscountPolicy; 4] = [Self::Infant, Self::Child, Self::Teenager, Self::Adult];

    pub const fn ages(self) -> Range<Age> {
        match self {
            Self::Infant => 0..6,
            Self::Child => 6..13,
            Self::Teenager => 13..19,
            Self::Adult => 19..Age::MAX,
        }
    }

    pub const fn deduction(self) -> Amount {
        match self {
            Self::Infant | Self::Adult => 0,
            Self::Child | Self::Teenager => 350,
        }
    }

    pub const fn discount_percent(self) -> Amount {
        match self {
            Self::Infant => 100,
            Self::Child => 50,
            Self::Teenager => 20,
            Self::Adult => 0,
        }
    }

    pub fn from_age(age: Age) -> Self {
        Self::ALL.into_iter().find(|policy| policy.ages().contains(&age)).unwrap_or(Self::Adult)
    }

    pub fn apply(self, amount: Amount) -> Amount {
        let discountable = amount.saturating_sub(self.deduction()) as u64;
        let discount = discountable * self.discount_percent() as u64 / 100;
        amount - discount as Amount
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Fare {
    amount: Amount,
}

impl Fare {
    // Under the default policy.
    pub fn of(distance: Distance, surcharge: Amount, discount: AgeDiscountPolicy) -> Self {
        FarePolicy::default().fare(distance, surcharge, discount)
    }

    pub fn amount(&self) -> Amount { self.amount }
}

impl Display for Fare {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", utils::get_fare_str(self.amount))
    }
}
