use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ThresholdError {
    #[error("Threshold denominator cannot be zero")]
    ZeroDenominator {},

    #[error("Threshold numerator cannot be zero")]
    ZeroNumerator {},
}

/// The fraction `numerator / denominator` of the enrolled supply that
/// must vote for a proposal's outcome to be decisive.
///
/// The fraction is never evaluated with division. A vote meets quorum
/// when
///
/// ```text
/// voted * denominator > numerator * total_supply
/// ```
///
/// with both products computed in 256 bits, so no amount of enrolled
/// weight can overflow the comparison.
#[cw_serde]
#[derive(Copy)]
pub struct ResolveThreshold {
    pub numerator: u64,
    pub denominator: u64,
}

impl ResolveThreshold {
    pub fn new(numerator: u64, denominator: u64) -> Result<Self, ThresholdError> {
        let threshold = Self {
            numerator,
            denominator,
        };
        threshold.validate()?;
        Ok(threshold)
    }

    /// Both parts must be positive. The numerator may exceed the
    /// denominator, in which case no vote can ever meet quorum.
    pub fn validate(&self) -> Result<(), ThresholdError> {
        if self.denominator == 0 {
            return Err(ThresholdError::ZeroDenominator {});
        }
        if self.numerator == 0 {
            return Err(ThresholdError::ZeroNumerator {});
        }
        Ok(())
    }

    /// Returns true if `voted` weight out of `total_supply` clears
    /// the threshold.
    pub fn is_met(&self, voted: Uint128, total_supply: Uint128) -> bool {
        voted.full_mul(self.denominator) > total_supply.full_mul(self.numerator)
    }
}
