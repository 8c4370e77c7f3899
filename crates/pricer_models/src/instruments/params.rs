//! Replication valuation parameters.
//!
//! This module provides the immutable configuration record consumed by
//! lattice construction, payoff evaluation, and backward induction.

use super::error::InstrumentError;
use super::option_type::OptionType;

/// Validated inputs for a binomial replication valuation.
///
/// Every instance satisfies the domain constraints:
///
/// | Field | Constraint |
/// |---|---|
/// | `spot` | > 0 |
/// | `strike` | > 0 |
/// | `shares_controlled` | > 0 |
/// | `up_factor` | > -1 |
/// | `down_factor` | in (-1, 1] |
/// | `periods` | >= 0 |
/// | `risk_free_rate` | > -1 |
///
/// Up and down factors are fractional moves: an up step multiplies the price
/// by `1 + up_factor`, a down step by `1 - down_factor`. The rate is per period.
///
/// Use [`ReplicationParams::builder`] to construct instances.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReplicationParams {
    spot: f64,
    strike: f64,
    shares_controlled: f64,
    up_factor: f64,
    down_factor: f64,
    periods: usize,
    risk_free_rate: f64,
    option_type: OptionType,
}

impl ReplicationParams {
    /// Creates a new parameter builder.
    #[inline]
    pub fn builder() -> ReplicationParamsBuilder {
        ReplicationParamsBuilder::default()
    }

    /// Returns the spot price at period zero.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the number of shares the contract controls.
    #[inline]
    pub fn shares_controlled(&self) -> f64 {
        self.shares_controlled
    }

    /// Returns the fractional up move.
    #[inline]
    pub fn up_factor(&self) -> f64 {
        self.up_factor
    }

    /// Returns the fractional down move.
    #[inline]
    pub fn down_factor(&self) -> f64 {
        self.down_factor
    }

    /// Returns the number of periods to expiry.
    #[inline]
    pub fn periods(&self) -> usize {
        self.periods
    }

    /// Returns the per-period risk-free rate.
    #[inline]
    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Multiplier applied to the price on an up move.
    #[inline]
    pub fn up_multiplier(&self) -> f64 {
        1.0 + self.up_factor
    }

    /// Multiplier applied to the price on a down move.
    #[inline]
    pub fn down_multiplier(&self) -> f64 {
        1.0 - self.down_factor
    }

    /// One-period growth factor of the risk-free asset.
    #[inline]
    pub fn growth_factor(&self) -> f64 {
        1.0 + self.risk_free_rate
    }

    /// Returns a copy with a different spot price, revalidated.
    ///
    /// # Errors
    /// Returns `InstrumentError::OutOfDomain` if `spot` is not positive.
    pub fn with_spot(&self, spot: f64) -> Result<Self, InstrumentError> {
        check_positive("spot", spot)?;
        Ok(Self { spot, ..*self })
    }

    /// Returns a copy with a different option type.
    #[inline]
    pub fn with_option_type(&self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..*self
        }
    }
}

/// Builder for [`ReplicationParams`].
///
/// Every field is required; [`build`](Self::build) reports the first field
/// that is missing or outside its domain.
#[derive(Debug, Clone, Default)]
pub struct ReplicationParamsBuilder {
    spot: Option<f64>,
    strike: Option<f64>,
    shares_controlled: Option<f64>,
    up_factor: Option<f64>,
    down_factor: Option<f64>,
    periods: Option<i64>,
    risk_free_rate: Option<f64>,
    option_type: Option<OptionType>,
}

impl ReplicationParamsBuilder {
    /// Sets the spot price.
    #[inline]
    pub fn spot(mut self, spot: f64) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Sets the strike price.
    #[inline]
    pub fn strike(mut self, strike: f64) -> Self {
        self.strike = Some(strike);
        self
    }

    /// Sets the number of shares the contract controls.
    #[inline]
    pub fn shares_controlled(mut self, shares_controlled: f64) -> Self {
        self.shares_controlled = Some(shares_controlled);
        self
    }

    /// Sets the fractional up move.
    #[inline]
    pub fn up_factor(mut self, up_factor: f64) -> Self {
        self.up_factor = Some(up_factor);
        self
    }

    /// Sets the fractional down move.
    #[inline]
    pub fn down_factor(mut self, down_factor: f64) -> Self {
        self.down_factor = Some(down_factor);
        self
    }

    /// Sets the number of periods; signed so negative input can be reported.
    #[inline]
    pub fn periods(mut self, periods: i64) -> Self {
        self.periods = Some(periods);
        self
    }

    /// Sets the per-period risk-free rate.
    #[inline]
    pub fn risk_free_rate(mut self, risk_free_rate: f64) -> Self {
        self.risk_free_rate = Some(risk_free_rate);
        self
    }

    /// Sets the option type.
    #[inline]
    pub fn option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = Some(option_type);
        self
    }

    /// Validates and builds the parameters.
    ///
    /// # Errors
    ///
    /// - `MissingParameter` if any field was not set
    /// - `OutOfDomain` if a numeric field violates its constraint
    /// - `NegativePeriods` if `periods < 0`
    pub fn build(self) -> Result<ReplicationParams, InstrumentError> {
        let spot = require("spot", self.spot)?;
        let strike = require("strike", self.strike)?;
        let shares_controlled = require("shares_controlled", self.shares_controlled)?;
        let up_factor = require("up_factor", self.up_factor)?;
        let down_factor = require("down_factor", self.down_factor)?;
        let periods = require("periods", self.periods)?;
        let risk_free_rate = require("risk_free_rate", self.risk_free_rate)?;
        let option_type = require("option_type", self.option_type)?;

        check_positive("spot", spot)?;
        check_positive("strike", strike)?;
        check_positive("shares_controlled", shares_controlled)?;

        if !(up_factor.is_finite() && up_factor > -1.0) {
            return Err(InstrumentError::OutOfDomain {
                name: "up_factor",
                value: up_factor,
                constraint: "> -1",
            });
        }
        if !(down_factor.is_finite() && down_factor > -1.0 && down_factor <= 1.0) {
            return Err(InstrumentError::OutOfDomain {
                name: "down_factor",
                value: down_factor,
                constraint: "in (-1, 1]",
            });
        }
        if !(risk_free_rate.is_finite() && risk_free_rate > -1.0) {
            return Err(InstrumentError::OutOfDomain {
                name: "risk_free_rate",
                value: risk_free_rate,
                constraint: "> -1",
            });
        }
        let periods =
            usize::try_from(periods).map_err(|_| InstrumentError::NegativePeriods { periods })?;

        Ok(ReplicationParams {
            spot,
            strike,
            shares_controlled,
            up_factor,
            down_factor,
            periods,
            risk_free_rate,
            option_type,
        })
    }
}

fn require<V>(name: &'static str, value: Option<V>) -> Result<V, InstrumentError> {
    value.ok_or(InstrumentError::MissingParameter { name })
}

fn check_positive(name: &'static str, value: f64) -> Result<(), InstrumentError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(InstrumentError::OutOfDomain {
            name,
            value,
            constraint: "> 0",
        })
    }
}
