//! Closed enumerations for the sort and limit selectors.
//!
//! Both selectors present a fixed, ordered set of values that is never derived
//! from runtime data. The shared [`SelectOption`] trait lets one option-list
//! routine serve both.

use std::fmt;

/// A value of a fixed, ordered selector enumeration.
pub trait SelectOption: Copy + PartialEq + fmt::Debug + 'static {
    /// Every value, in display order.
    const ALL: &'static [Self];

    /// Value used when the caller gives none or an unrecognized one.
    const DEFAULT: Self;

    /// The wire value carried in the option's `value` attribute.
    fn value(self) -> &'static str;

    /// Parses a wire value. Comparison is exact string equality.
    fn from_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|option| option.value() == value)
    }

    /// Parses a wire value, falling back to [`Self::DEFAULT`].
    fn from_value_or_default(value: &str) -> Self {
        Self::from_value(value).unwrap_or_else(|| {
            tracing::debug!(
                value = %value,
                fallback = Self::DEFAULT.value(),
                "unrecognized selector value, using default"
            );
            Self::DEFAULT
        })
    }
}

/// Product sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// `price_asc`
    #[default]
    PriceAsc,
    /// `price_desc`
    PriceDesc,
    /// `name_asc`
    NameAsc,
    /// `name_desc`
    NameDesc,
}

impl SelectOption for SortOrder {
    const ALL: &'static [Self] = &[Self::PriceAsc, Self::PriceDesc, Self::NameAsc, Self::NameDesc];
    const DEFAULT: Self = Self::PriceAsc;

    fn value(self) -> &'static str {
        match self {
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::NameAsc => "name_asc",
            Self::NameDesc => "name_desc",
        }
    }
}

/// Number of items shown per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ItemLimit {
    /// `"10"`
    Ten,
    /// `"20"`
    #[default]
    Twenty,
    /// `"50"`
    Fifty,
    /// `"100"`
    Hundred,
}

impl ItemLimit {
    /// The numeric item count.
    #[must_use]
    pub const fn count(self) -> u32 {
        match self {
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Fifty => 50,
            Self::Hundred => 100,
        }
    }
}

impl SelectOption for ItemLimit {
    const ALL: &'static [Self] = &[Self::Ten, Self::Twenty, Self::Fifty, Self::Hundred];
    const DEFAULT: Self = Self::Twenty;

    fn value(self) -> &'static str {
        match self {
            Self::Ten => "10",
            Self::Twenty => "20",
            Self::Fifty => "50",
            Self::Hundred => "100",
        }
    }
}
