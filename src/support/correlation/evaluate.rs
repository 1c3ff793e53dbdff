use std::collections::BTreeMap;

use crate::support::dimensionless::{Prandtl, Reynolds, Schmidt, TubeRatio};

use super::{
    AdvisoryPolicy, CorrelationError, CorrelationId, Enforcement, Estimate, EvaluationError,
    EvaluatorConfig, Group, InputError, InputKind, PhysicalInputs, RangeViolation,
    conductivity::{self, GasState, StagnantBed},
    dispersion::{self, DispersionFlow},
    flowing_bed::{self, FlowingBed},
    overall::{self, PackedTube},
    pressure_drop::{self, BedFlow},
    transfer::{self, ParticleFlow},
    trickle_bed::{self, TwoPhaseFlow},
    wall::{self, WallFlow},
};

/// Results of a batch evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// One entry per selected correlation, in registry order.
    pub results: BTreeMap<CorrelationId, Result<Estimate, RangeViolation>>,
    /// Advisory windows violated by correlations that still produced a value.
    pub advisories: Vec<RangeViolation>,
}

impl Evaluation {
    #[must_use]
    pub fn get(&self, id: CorrelationId) -> Option<&Result<Estimate, RangeViolation>> {
        self.results.get(&id)
    }

    /// Correlations that produced a value.
    pub fn successes(&self) -> impl Iterator<Item = (CorrelationId, &Estimate)> {
        self.results
            .iter()
            .filter_map(|(id, result)| result.as_ref().ok().map(|estimate| (*id, estimate)))
    }

    /// Correlations that were out of range.
    pub fn violations(&self) -> impl Iterator<Item = &RangeViolation> {
        self.results.values().filter_map(|result| result.as_ref().err())
    }
}

/// Evaluates one correlation.
///
/// # Errors
///
/// Returns [`CorrelationError::Input`] if an input the correlation reads is
/// missing or invalid, and [`CorrelationError::Range`] if a required window
/// (or, under [`AdvisoryPolicy::Enforce`], an advisory one) is violated.
pub fn evaluate(
    id: CorrelationId,
    inputs: &PhysicalInputs,
    config: &EvaluatorConfig,
) -> Result<Estimate, CorrelationError> {
    if config.advisory_policy == AdvisoryPolicy::Enforce {
        let violations = advisories(id, inputs)?;
        if let Some(&violation) = violations.first() {
            return Err(violation.into());
        }
    }
    compute(id, inputs, config)
}

/// Lists the advisory windows of `id` that the inputs fall outside of.
///
/// # Errors
///
/// Returns an [`InputError`] if an input needed to form a group is missing
/// or invalid.
pub fn advisories(
    id: CorrelationId,
    inputs: &PhysicalInputs,
) -> Result<Vec<RangeViolation>, InputError> {
    let definition = id.definition();
    let mut violations = Vec::new();

    for bound in definition
        .applicability
        .iter()
        .filter(|bound| bound.enforcement == Enforcement::Advisory)
    {
        let value = group_value(bound.group, inputs)?;
        if !bound.contains(value) {
            violations.push(RangeViolation {
                correlation: id,
                value,
                bound: *bound,
            });
        }
    }

    Ok(violations)
}

/// Evaluates every selected correlation against the same inputs.
///
/// Inputs are validated before anything is computed. Range violations are
/// recorded per correlation and never stop the others.
///
/// # Errors
///
/// - [`EvaluationError::EmptySelection`] if no correlation was selected.
/// - [`EvaluationError::Input`] if any input is invalid or one a selected
///   correlation reads is missing.
/// - [`EvaluationError::NoApplicableCorrelation`] if every selected
///   correlation was out of range.
pub fn evaluate_all(
    ids: impl IntoIterator<Item = CorrelationId>,
    inputs: &PhysicalInputs,
    config: &EvaluatorConfig,
) -> Result<Evaluation, EvaluationError> {
    let mut selection: Vec<CorrelationId> = ids.into_iter().collect();
    selection.sort_unstable();
    selection.dedup();

    if selection.is_empty() {
        return Err(EvaluationError::EmptySelection);
    }

    inputs.validate()?;
    for id in &selection {
        for &kind in id.definition().inputs {
            inputs.require(kind)?;
        }
    }

    let mut evaluation = Evaluation {
        results: BTreeMap::new(),
        advisories: Vec::new(),
    };

    for id in selection {
        let result = match evaluate(id, inputs, config) {
            Ok(estimate) => Ok(estimate),
            Err(CorrelationError::Range(violation)) => Err(violation),
            Err(CorrelationError::Input(err)) => return Err(err.into()),
        };

        if result.is_ok() && config.advisory_policy == AdvisoryPolicy::Report {
            evaluation.advisories.extend(advisories(id, inputs)?);
        }
        evaluation.results.insert(id, result);
    }

    if evaluation.results.values().all(Result::is_err) {
        return Err(EvaluationError::NoApplicableCorrelation {
            violations: evaluation.violations().copied().collect(),
        });
    }

    Ok(evaluation)
}

fn group_value(group: Group, inputs: &PhysicalInputs) -> Result<f64, InputError> {
    let particle_reynolds = || -> Result<Reynolds, InputError> {
        Ok(Reynolds::particle(
            inputs.require(InputKind::FluidDensity)?,
            inputs.require(InputKind::Velocity)?,
            inputs.require(InputKind::ParticleDiameter)?,
            inputs.require(InputKind::FluidViscosity)?,
        ))
    };

    Ok(match group {
        Group::ParticleReynolds => particle_reynolds()?.value(),
        Group::ModifiedReynolds => particle_reynolds()?
            .to_modified(inputs.require(InputKind::Voidage)?)
            .value(),
        Group::Schmidt => Schmidt::new(
            inputs.require(InputKind::FluidViscosity)?,
            inputs.require(InputKind::FluidDensity)?,
            inputs.require(InputKind::MolecularDiffusivity)?,
        )
        .value(),
        Group::Prandtl => Prandtl::new(
            inputs.require(InputKind::FluidViscosity)?,
            inputs.require(InputKind::SpecificHeat)?,
            inputs.require(InputKind::FluidConductivity)?,
        )
        .value(),
        Group::TubeRatio => TubeRatio::new(
            inputs.require(InputKind::ColumnDiameter)?,
            inputs.require(InputKind::ParticleDiameter)?,
        )
        .value(),
        Group::Voidage => inputs.require(InputKind::Voidage)?,
    })
}

fn compute(
    id: CorrelationId,
    inputs: &PhysicalInputs,
    config: &EvaluatorConfig,
) -> Result<Estimate, CorrelationError> {
    use CorrelationId as C;

    let estimate = match id {
        C::Ergun => Estimate::pressure_drop(pressure_drop::ergun(&BedFlow::from_inputs(inputs)?)),
        C::CarmanKozeny => {
            Estimate::pressure_drop(pressure_drop::carman_kozeny(&BedFlow::from_inputs(inputs)?))
        }
        C::BurkePlummer => {
            Estimate::pressure_drop(pressure_drop::burke_plummer(&BedFlow::from_inputs(inputs)?))
        }
        C::EisfeldSchnitzlein => {
            let flow = BedFlow::from_inputs(inputs)?;
            let column = inputs.require(InputKind::ColumnDiameter)?;
            Estimate::pressure_drop(pressure_drop::eisfeld_schnitzlein(
                &flow,
                column,
                inputs.particle_shape,
            ))
        }
        C::Dixon => Estimate::pressure_drop(pressure_drop::dixon(&BedFlow::from_inputs(inputs)?)),
        C::DixonWall | C::DixonWallUnsquared => {
            let flow = BedFlow::from_inputs(inputs)?;
            let tube = TubeRatio::new(
                inputs.require(InputKind::ColumnDiameter)?,
                flow.particle_diameter,
            );
            let pascals = if id == C::DixonWall {
                pressure_drop::dixon_wall(&flow, tube, config.wall_alpha)
            } else {
                pressure_drop::dixon_wall_unsquared(&flow, tube, config.wall_alpha)
            };
            Estimate::pressure_drop(pascals)
        }
        C::Kta => Estimate::pressure_drop(pressure_drop::kta(&BedFlow::from_inputs(inputs)?)),

        C::LockhartMartinelli
        | C::LarkinsWhiteJeffrey
        | C::Sato
        | C::AttouBoyerFerschneider
        | C::Holub => {
            let flow = TwoPhaseFlow::from_inputs(inputs)?;
            let pascals = match id {
                C::LockhartMartinelli => trickle_bed::lockhart_martinelli(&flow),
                C::LarkinsWhiteJeffrey => trickle_bed::larkins_white_jeffrey(&flow),
                C::AttouBoyerFerschneider => trickle_bed::attou_boyer_ferschneider(&flow),
                C::Sato => trickle_bed::sato(&flow, inputs.require(InputKind::SurfaceTension)?),
                _ => trickle_bed::holub(&flow, inputs.require(InputKind::SurfaceTension)?),
            };
            Estimate::pressure_drop(pascals)
        }

        C::ZehnerSchlunderConductivity => Estimate::conductivity(conductivity::zehner_schlunder(
            &StagnantBed::from_inputs(inputs)?,
        )),
        C::Krupiczka => {
            Estimate::conductivity(conductivity::krupiczka(&StagnantBed::from_inputs(inputs)?))
        }
        C::WoodsideMessmer => Estimate::conductivity(conductivity::woodside_messmer(
            &StagnantBed::from_inputs(inputs)?,
        )),
        C::KuniiSmith => {
            Estimate::conductivity(conductivity::kunii_smith(&StagnantBed::from_inputs(inputs)?))
        }
        C::ZehnerBauerSchlunder => Estimate::conductivity(conductivity::zehner_bauer_schlunder(
            &StagnantBed::from_inputs(inputs)?,
            &GasState::from_inputs(inputs)?,
        )),
        C::YagiKuniiStatic => Estimate::conductivity(conductivity::yagi_kunii_static(
            &StagnantBed::from_inputs(inputs)?,
        )),

        C::YagiKuniiAxialConductivity
        | C::EdwardsAxialConductivity
        | C::VortmeyerAxialConductivity
        | C::YagiKuniiRadialConductivity
        | C::BauerSchlunderRadialConductivity
        | C::PecletRadialConductivity
        | C::DixonCresswellRadialConductivity => {
            let flow = FlowingBed::from_inputs(inputs)?;
            let lambda = match id {
                C::YagiKuniiAxialConductivity => flowing_bed::yagi_kunii_axial(&flow),
                C::EdwardsAxialConductivity => flowing_bed::edwards_axial(&flow),
                C::VortmeyerAxialConductivity => flowing_bed::vortmeyer_axial(&flow),
                C::YagiKuniiRadialConductivity => flowing_bed::yagi_kunii_radial(&flow),
                C::BauerSchlunderRadialConductivity => flowing_bed::bauer_schlunder_radial(&flow),
                C::PecletRadialConductivity => flowing_bed::peclet_radial(&flow),
                _ => {
                    let tube = TubeRatio::new(
                        inputs.require(InputKind::ColumnDiameter)?,
                        flow.particle_diameter,
                    );
                    flowing_bed::dixon_cresswell_radial(&flow, tube)
                }
            };
            Estimate::conductivity(lambda)
        }

        C::LiFinlayson
        | C::DixonCresswell
        | C::DeWaschFroment
        | C::DeWaschFromentAlternate
        | C::Specchia
        | C::Leva
        | C::Demirel
        | C::Laguerre
        | C::Das
        | C::LevaEtAl
        | C::ChuStorrow
        | C::YagiWakao
        | C::KuniiEtAl
        | C::OlbrichPotter
        | C::SpecchiaBaldiSicardi
        | C::ColledgePaterson
        | C::DixonEtAlWall
        | C::PetersEtAl
        | C::MartinNilles => {
            let flow = WallFlow::from_inputs(inputs)?;
            let (re, pr, tube) = (flow.reynolds(), flow.prandtl(), flow.tube_ratio());
            let nusselt = match id {
                C::LiFinlayson => wall::li_finlayson(re, pr, tube)?,
                C::DixonCresswell => wall::dixon_cresswell(re, pr, tube)?,
                C::DeWaschFroment => wall::de_wasch_froment(re, pr, tube)?,
                C::DeWaschFromentAlternate => wall::de_wasch_froment_alternate(re, pr, tube)?,
                C::Specchia => wall::specchia(re, pr, tube)?,
                C::Leva => wall::leva(re, tube),
                C::Demirel => wall::demirel(re),
                C::Laguerre => wall::laguerre(re, pr),
                C::Das => wall::das(re, pr),
                C::LevaEtAl => wall::leva_et_al(re, tube),
                C::ChuStorrow => {
                    let length_ratio = inputs.require(InputKind::BedLength)? / flow.tube_diameter;
                    wall::chu_storrow(re, tube, length_ratio)
                }
                C::YagiWakao => wall::yagi_wakao(re),
                C::KuniiEtAl => wall::kunii_et_al(re, pr),
                C::OlbrichPotter => wall::olbrich_potter(re, pr),
                C::SpecchiaBaldiSicardi => {
                    wall::specchia_baldi_sicardi(re, inputs.require(InputKind::Voidage)?)
                }
                C::ColledgePaterson => wall::colledge_paterson(re, pr, tube),
                C::DixonEtAlWall => wall::dixon_et_al(re, pr, tube),
                C::PetersEtAl => wall::peters_et_al(re, pr, tube),
                _ => {
                    let ratio = inputs.require(InputKind::RadialConductivity)?
                        / flow.fluid_conductivity;
                    wall::martin_nilles(re, pr, tube, ratio)
                }
            };
            Estimate::heat_transfer(flow.coefficient(nusselt), Some(nusselt))
        }

        C::EdwardsRichardsonAxial
        | C::ZehnerSchlunderAxial
        | C::GunnAxial
        | C::WakaoKagueiAxial
        | C::EdwardsRichardsonRadial
        | C::ZehnerSchlunderRadial
        | C::GunnRadial
        | C::WakaoKagueiRadial => {
            let flow = DispersionFlow::from_inputs(inputs)?;
            let coefficient = match id {
                C::EdwardsRichardsonAxial => dispersion::edwards_richardson_axial(&flow),
                C::ZehnerSchlunderAxial => dispersion::zehner_schlunder_axial(&flow),
                C::GunnAxial => dispersion::gunn_axial(&flow),
                C::WakaoKagueiAxial => dispersion::wakao_kaguei_axial(&flow),
                C::EdwardsRichardsonRadial => dispersion::edwards_richardson_radial(&flow),
                C::ZehnerSchlunderRadial => dispersion::zehner_schlunder_radial(&flow),
                C::GunnRadial => dispersion::gunn_radial(&flow),
                _ => dispersion::wakao_kaguei_radial(&flow),
            };
            Estimate::dispersion(coefficient, flow.peclet(coefficient))
        }
        C::LerouWammesRadial | C::BauerRadial => {
            let flow = DispersionFlow::from_inputs(inputs)?;
            let tube = TubeRatio::new(
                inputs.require(InputKind::ColumnDiameter)?,
                flow.particle_diameter,
            );
            let coefficient = if id == C::LerouWammesRadial {
                dispersion::lerou_wammes_radial(&flow, tube)
            } else {
                dispersion::bauer_radial(&flow, tube)
            };
            Estimate::dispersion(coefficient, flow.peclet(coefficient))
        }

        C::RanzMarshallMass | C::WakaoFunazkri | C::Rowe => {
            let flow = ParticleFlow::from_inputs(inputs)?;
            let diffusivity = inputs.require(InputKind::MolecularDiffusivity)?;
            let re = flow.reynolds();
            let sc = Schmidt::new(flow.viscosity, flow.density, diffusivity);
            let sherwood = match id {
                C::RanzMarshallMass => transfer::ranz_marshall_mass(re, sc),
                C::WakaoFunazkri => transfer::wakao_funazkri(re, sc),
                _ => transfer::rowe(re, sc),
            };
            Estimate::mass_transfer(sherwood * diffusivity / flow.particle_diameter, sherwood)
        }
        C::RanzMarshallHeat | C::Gnielinski | C::DittusBoelter | C::Hausen => {
            let flow = ParticleFlow::from_inputs(inputs)?;
            let conductivity = inputs.require(InputKind::FluidConductivity)?;
            let re = flow.reynolds();
            let pr = Prandtl::new(
                flow.viscosity,
                inputs.require(InputKind::SpecificHeat)?,
                conductivity,
            );
            let nusselt = match id {
                C::RanzMarshallHeat => transfer::ranz_marshall_heat(re, pr),
                C::Gnielinski => transfer::gnielinski(re, pr),
                C::DittusBoelter => transfer::dittus_boelter(re, pr),
                _ => transfer::hausen(re, pr),
            };
            Estimate::heat_transfer(nusselt * conductivity / flow.particle_diameter, Some(nusselt))
        }

        C::OverallComplete | C::OverallApproximate => {
            let tube = PackedTube::from_inputs(inputs)?;
            let transport = overall::radial_transport(&tube);
            let coefficient = if id == C::OverallComplete {
                overall::overall_complete(&tube)
            } else {
                overall::overall_approximate(&tube)
            };
            Estimate::overall(
                coefficient,
                transport.wall_coefficient,
                transport.wall_nusselt,
                transport.radial_conductivity,
            )
        }
    };

    Ok(estimate)
}
