//! European option type and its terminal payoff.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use super::error::InstrumentError;

/// Type of European option.
///
/// Payoffs are exact (no smoothing): the lattice evaluates them only at
/// expiry, where the kink at the strike is intended.
///
/// # Variants
/// - `Call`: max((S - K) * n, 0)
/// - `Put`: max((K - S) * n, 0)
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionType;
///
/// let call = OptionType::Call;
/// assert_eq!(call.payoff(110.0_f64, 100.0, 1.0), 10.0);
/// assert_eq!(OptionType::Put.payoff(110.0_f64, 100.0, 1.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy the underlying at the strike.
    Call,
    /// Right to sell the underlying at the strike.
    Put,
}

impl OptionType {
    /// Evaluate the payoff at expiry.
    ///
    /// # Arguments
    /// * `spot` - Underlying price at the terminal state
    /// * `strike` - Strike price
    /// * `shares_controlled` - Number of shares the contract controls
    ///
    /// # Returns
    /// The intrinsic value floored at zero. The difference between call and
    /// put payoffs at the same spot is exactly `(spot - strike) * shares_controlled`.
    #[inline]
    pub fn payoff<T: Float>(&self, spot: T, strike: T, shares_controlled: T) -> T {
        let intrinsic = match self {
            OptionType::Call => (spot - strike) * shares_controlled,
            OptionType::Put => (strike - spot) * shares_controlled,
        };
        intrinsic.max(T::zero())
    }

    /// Capitalised label used in reports ("Call" / "Put").
    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            OptionType::Call => "Call",
            OptionType::Put => "Put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(InstrumentError::UnknownOptionType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    // Call payoff tests

    #[test]
    fn test_call_payoff_in_the_money() {
        let payoff = OptionType::Call.payoff(550.0_f64, 500.0, 100.0);
        assert_relative_eq!(payoff, 5000.0);
    }

    #[test]
    fn test_call_payoff_out_of_the_money() {
        let payoff = OptionType::Call.payoff(420.0_f64, 500.0, 100.0);
        assert_eq!(payoff, 0.0);
    }

    #[test]
    fn test_call_payoff_at_the_money() {
        assert_eq!(OptionType::Call.payoff(100.0_f64, 100.0, 1.0), 0.0);
    }

    // Put payoff tests

    #[test]
    fn test_put_payoff_in_the_money() {
        let payoff = OptionType::Put.payoff(420.0_f64, 500.0, 100.0);
        assert_relative_eq!(payoff, 8000.0);
    }

    #[test]
    fn test_put_payoff_out_of_the_money() {
        assert_eq!(OptionType::Put.payoff(550.0_f64, 500.0, 100.0), 0.0);
    }

    #[test]
    fn test_labels() {
        assert_eq!(OptionType::Call.label(), "Call");
        assert_eq!(OptionType::Put.label(), "Put");
    }

    #[test]
    fn test_parsing() {
        assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("CALL".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("c".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!(" Put ".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!("p".parse::<OptionType>().unwrap(), OptionType::Put);
        assert!("straddle".parse::<OptionType>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for option_type in [OptionType::Call, OptionType::Put] {
            let parsed: OptionType = option_type.to_string().parse().unwrap();
            assert_eq!(parsed, option_type);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&OptionType::Put).unwrap(), "\"put\"");
        let parsed: OptionType = serde_json::from_str("\"call\"").unwrap();
        assert_eq!(parsed, OptionType::Call);
    }

    proptest! {
        #[test]
        fn prop_payoff_non_negative(
            spot in 0.01_f64..10_000.0,
            strike in 0.01_f64..10_000.0,
            shares in 0.01_f64..1_000.0,
        ) {
            prop_assert!(OptionType::Call.payoff(spot, strike, shares) >= 0.0);
            prop_assert!(OptionType::Put.payoff(spot, strike, shares) >= 0.0);
        }

        #[test]
        fn prop_call_minus_put_is_exact_intrinsic(
            spot in 0.01_f64..10_000.0,
            strike in 0.01_f64..10_000.0,
            shares in 0.01_f64..1_000.0,
        ) {
            let call = OptionType::Call.payoff(spot, strike, shares);
            let put = OptionType::Put.payoff(spot, strike, shares);
            prop_assert_eq!(call - put, (spot - strike) * shares);
        }
    }
}
