//! The model contract.
//!
//! Every model in this crate implements [`Model`], so `fit` and `predict`
//! exist on any `M: Model` at compile time. [`Capability`] and
//! [`check_capabilities`] mirror that guarantee at runtime for callers that
//! want to inspect a model they only hold behind the trait.

use std::fmt;

use crate::error::{ModelError, Result};

pub mod linear;

pub use linear::{LinearParams, LinearRegressor};

/// An operation a model exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    Fit,
    Predict,
}

impl Capability {
    /// Every capability a [`Model`] is required to expose.
    pub const REQUIRED: [Capability; 2] = [Capability::Fit, Capability::Predict];

    /// Method name of the capability.
    pub fn name(self) -> &'static str {
        match self {
            Capability::Fit => "fit",
            Capability::Predict => "predict",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A trainable predictor.
///
/// # Associated Types
/// - `Input`: feature matrix (one row per sample).
/// - `Target`: training targets (one per sample).
/// - `Output`: predictions (one per input row).
pub trait Model {
    type Input;
    type Target;
    type Output;

    /// Learns parameters from `x` and `y`, replacing any previous fit.
    fn fit(&mut self, x: &Self::Input, y: &Self::Target) -> Result<()>;

    /// Predicts one output per row of `x`.
    ///
    /// # Errors
    /// [`ModelError::NotFitted`] before a successful `fit`.
    fn predict(&self, x: &Self::Input) -> Result<Self::Output>;

    /// Whether `fit` has completed successfully.
    fn is_fitted(&self) -> bool;

    /// Capabilities this model exposes.
    fn capabilities(&self) -> &'static [Capability] {
        &Capability::REQUIRED
    }

    fn supports(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }
}

/// Confirms that `model` exposes every [`Capability::REQUIRED`] entry.
///
/// # Errors
/// [`ModelError::MissingCapability`] naming the first capability not exposed.
pub fn check_capabilities<M: Model + ?Sized>(model: &M) -> Result<()> {
    match Capability::REQUIRED
        .iter()
        .find(|&&capability| !model.supports(capability))
    {
        Some(missing) => Err(ModelError::MissingCapability {
            capability: missing.name().to_string(),
        }),
        None => Ok(()),
    }
}
