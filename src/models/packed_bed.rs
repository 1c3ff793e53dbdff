//! Batch correlation model for packed beds.
//!
//! [`PackedBed`] is a thin [`twine_core::Model`] adapter over
//! [`evaluate_all`]: it fixes a selection of correlations and an evaluator
//! configuration, and maps [`PhysicalInputs`] to an [`Evaluation`].

use twine_core::Model;

use crate::support::correlation::{
    CorrelationId, Evaluation, EvaluationError, EvaluatorConfig, Family, PhysicalInputs,
    evaluate_all,
};

/// Evaluates a fixed selection of correlations.
///
/// # Example
///
/// ```
/// use packed_bed_models::{
///     models::packed_bed::PackedBed,
///     support::correlation::{Family, PhysicalInputs},
/// };
/// use twine_core::Model;
/// use uom::si::{
///     f64::{Length, Ratio, ThermalConductivity},
///     length::meter,
///     ratio::ratio,
///     thermal_conductivity::watt_per_meter_kelvin,
/// };
///
/// let model = PackedBed::family(Family::EffectiveConductivity);
/// let inputs = PhysicalInputs {
///     voidage: Some(Ratio::new::<ratio>(0.4)),
///     fluid_conductivity: Some(ThermalConductivity::new::<watt_per_meter_kelvin>(0.025)),
///     solid_conductivity: Some(ThermalConductivity::new::<watt_per_meter_kelvin>(15.0)),
///     particle_diameter: Some(Length::new::<meter>(0.003)),
///     ..PhysicalInputs::default()
/// };
///
/// // Zehner-Bauer-Schlünder also needs the gas state.
/// assert!(model.call(&inputs).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PackedBed {
    selection: Vec<CorrelationId>,
    config: EvaluatorConfig,
}

impl PackedBed {
    /// Creates a model evaluating `ids` with the default configuration.
    pub fn new(ids: impl IntoIterator<Item = CorrelationId>) -> Self {
        Self {
            selection: ids.into_iter().collect(),
            config: EvaluatorConfig::default(),
        }
    }

    /// Creates a model evaluating the canonical members of `family`.
    #[must_use]
    pub fn family(family: Family) -> Self {
        Self::new(family.correlations().iter().copied())
    }

    #[must_use]
    pub fn with_config(mut self, config: EvaluatorConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn selection(&self) -> &[CorrelationId] {
        &self.selection
    }
}

impl Model for PackedBed {
    type Input = PhysicalInputs;
    type Output = Evaluation;
    type Error = EvaluationError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        evaluate_all(self.selection.iter().copied(), input, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Ratio, ThermalConductivity},
        ratio::ratio,
        thermal_conductivity::watt_per_meter_kelvin,
    };

    use crate::support::correlation::{AdvisoryPolicy, Estimate};

    fn stagnant_bed() -> PhysicalInputs {
        PhysicalInputs {
            voidage: Some(Ratio::new::<ratio>(0.4)),
            fluid_conductivity: Some(ThermalConductivity::new::<watt_per_meter_kelvin>(0.025)),
            solid_conductivity: Some(ThermalConductivity::new::<watt_per_meter_kelvin>(15.0)),
            ..PhysicalInputs::default()
        }
    }

    #[test]
    fn woodside_messmer_through_the_model() {
        let model = PackedBed::new([CorrelationId::WoodsideMessmer]);
        let evaluation = model.call(&stagnant_bed()).unwrap();

        let Some(Ok(Estimate::Conductivity(k))) = evaluation.get(CorrelationId::WoodsideMessmer)
        else {
            panic!("expected a conductivity estimate");
        };
        assert_relative_eq!(
            k.get::<watt_per_meter_kelvin>(),
            0.377_423,
            max_relative = 1e-5
        );
    }

    #[test]
    fn family_constructor_selects_canonical_members() {
        let model = PackedBed::family(Family::PressureDrop);
        assert_eq!(model.selection(), Family::PressureDrop.correlations());
        assert!(!model.selection().contains(&CorrelationId::DixonWallUnsquared));
    }

    #[test]
    fn config_is_passed_through() {
        let model = PackedBed::new([CorrelationId::Krupiczka]).with_config(EvaluatorConfig {
            advisory_policy: AdvisoryPolicy::Enforce,
            ..EvaluatorConfig::default()
        });
        // Krupiczka has no advisory window, so enforcement changes nothing.
        assert!(model.call(&stagnant_bed()).is_ok());
    }

    #[test]
    fn empty_model_reports_empty_selection() {
        let model = PackedBed::new(Vec::<CorrelationId>::new());
        assert_eq!(
            model.call(&stagnant_bed()),
            Err(EvaluationError::EmptySelection)
        );
    }
}
