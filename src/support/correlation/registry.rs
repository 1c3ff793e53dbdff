//! Static metadata for every correlation.

use super::{
    Applicability, CorrelationDefinition, CorrelationId, CorrelationId as C, Family,
    Group::{ModifiedReynolds, ParticleReynolds, Prandtl, Schmidt, TubeRatio, Voidage},
    InputKind as I,
};

impl CorrelationId {
    /// Static metadata for this correlation.
    #[must_use]
    pub fn definition(self) -> &'static CorrelationDefinition {
        &DEFINITIONS[self as usize]
    }
}

const BED_FLOW: &[I] = &[
    I::BedLength,
    I::Voidage,
    I::ParticleDiameter,
    I::Velocity,
    I::FluidDensity,
    I::FluidViscosity,
];

const BED_FLOW_IN_COLUMN: &[I] = &[
    I::BedLength,
    I::Voidage,
    I::ParticleDiameter,
    I::Velocity,
    I::FluidDensity,
    I::FluidViscosity,
    I::ColumnDiameter,
];

const TWO_PHASE_FLOW: &[I] = &[
    I::BedLength,
    I::Voidage,
    I::ParticleDiameter,
    I::LiquidVelocity,
    I::GasVelocity,
    I::LiquidDensity,
    I::GasDensity,
    I::LiquidViscosity,
    I::GasViscosity,
];

const TWO_PHASE_FLOW_WITH_INTERFACE: &[I] = &[
    I::BedLength,
    I::Voidage,
    I::ParticleDiameter,
    I::LiquidVelocity,
    I::GasVelocity,
    I::LiquidDensity,
    I::GasDensity,
    I::LiquidViscosity,
    I::GasViscosity,
    I::SurfaceTension,
];

const STAGNANT_BED: &[I] = &[I::Voidage, I::FluidConductivity, I::SolidConductivity];

const STAGNANT_BED_WITH_GAS: &[I] = &[
    I::Voidage,
    I::FluidConductivity,
    I::SolidConductivity,
    I::ParticleDiameter,
    I::Temperature,
    I::Pressure,
    I::MolarMass,
    I::SpecificHeat,
];

const WALL_FLOW: &[I] = &[
    I::ParticleDiameter,
    I::ColumnDiameter,
    I::Velocity,
    I::FluidDensity,
    I::FluidViscosity,
    I::SpecificHeat,
    I::FluidConductivity,
];

const WALL_FLOW_IN_BED: &[I] = &[
    I::Voidage,
    I::ParticleDiameter,
    I::ColumnDiameter,
    I::Velocity,
    I::FluidDensity,
    I::FluidViscosity,
    I::SpecificHeat,
    I::FluidConductivity,
];

const WALL_FLOW_ALONG_BED: &[I] = &[
    I::BedLength,
    I::ParticleDiameter,
    I::ColumnDiameter,
    I::Velocity,
    I::FluidDensity,
    I::FluidViscosity,
    I::SpecificHeat,
    I::FluidConductivity,
];

const WALL_FLOW_WITH_BED_CONDUCTIVITY: &[I] = &[
    I::ParticleDiameter,
    I::ColumnDiameter,
    I::Velocity,
    I::FluidDensity,
    I::FluidViscosity,
    I::SpecificHeat,
    I::FluidConductivity,
    I::RadialConductivity,
];

const FLOWING_BED: &[I] = &[
    I::Voidage,
    I::ParticleDiameter,
    I::Velocity,
    I::FluidDensity,
    I::FluidViscosity,
    I::SpecificHeat,
    I::FluidConductivity,
    I::SolidConductivity,
];

const FLOWING_BED_IN_TUBE: &[I] = &[
    I::Voidage,
    I::ParticleDiameter,
    I::ColumnDiameter,
    I::Velocity,
    I::FluidDensity,
    I::FluidViscosity,
    I::SpecificHeat,
    I::FluidConductivity,
    I::SolidConductivity,
];

const DISPERSION: &[I] = &[
    I::Voidage,
    I::ParticleDiameter,
    I::Velocity,
    I::MolecularDiffusivity,
];

const DISPERSION_IN_TUBE: &[I] = &[
    I::Voidage,
    I::ParticleDiameter,
    I::Velocity,
    I::MolecularDiffusivity,
    I::ColumnDiameter,
];

const MASS_TRANSFER: &[I] = &[
    I::ParticleDiameter,
    I::Velocity,
    I::FluidDensity,
    I::FluidViscosity,
    I::MolecularDiffusivity,
];

const HEAT_TRANSFER: &[I] = &[
    I::ParticleDiameter,
    I::Velocity,
    I::FluidDensity,
    I::FluidViscosity,
    I::SpecificHeat,
    I::FluidConductivity,
];

const PACKED_TUBE: &[I] = &[
    I::Voidage,
    I::ParticleDiameter,
    I::ColumnDiameter,
    I::Velocity,
    I::FluidDensity,
    I::FluidViscosity,
    I::SpecificHeat,
    I::FluidConductivity,
    I::SolidConductivity,
];

const YAGI_KUNII_RANGE: &[Applicability] = &[
    Applicability::advisory(ParticleReynolds, 0.2, 200.0),
    Applicability::advisory(Voidage, 0.35, 0.75),
];

const fn entry(
    id: CorrelationId,
    name: &'static str,
    family: Family,
    formula: &'static str,
    inputs: &'static [I],
    applicability: &'static [Applicability],
) -> CorrelationDefinition {
    CorrelationDefinition {
        id,
        name,
        family,
        formula,
        inputs,
        applicability,
    }
}

static DEFINITIONS: [CorrelationDefinition; CorrelationId::ALL.len()] = [
    entry(
        C::Ergun,
        "Ergun",
        Family::PressureDrop,
        r"\Delta P = \frac{L}{d_p}\left[\frac{150(1-\varepsilon)^2\mu u_0}{\varepsilon^3 d_p} + \frac{1.75(1-\varepsilon)\rho u_0^2}{\varepsilon^3}\right]",
        BED_FLOW,
        &[],
    ),
    entry(
        C::CarmanKozeny,
        "Carman-Kozeny",
        Family::PressureDrop,
        r"\Delta P = \frac{180 L (1-\varepsilon)^2 \mu u_0}{d_p^2 \varepsilon^3}",
        BED_FLOW,
        &[],
    ),
    entry(
        C::BurkePlummer,
        "Burke-Plummer",
        Family::PressureDrop,
        r"\Delta P = \frac{1.75 L (1-\varepsilon) \rho u_0^2}{d_p \varepsilon^3}",
        BED_FLOW,
        &[],
    ),
    entry(
        C::EisfeldSchnitzlein,
        "Eisfeld-Schnitzlein",
        Family::PressureDrop,
        r"\Delta P = \frac{L}{d_p}\left[\frac{K_1 A_w^2 (1-\varepsilon)^2\mu u_0}{\varepsilon^3 d_p} + \frac{A_w}{B_w}\frac{(1-\varepsilon)\rho u_0^2}{\varepsilon^3}\right]",
        BED_FLOW_IN_COLUMN,
        &[],
    ),
    entry(
        C::Dixon,
        "Dixon (no wall effect)",
        Family::PressureDrop,
        r"\Delta P = \frac{L \rho u_0^2 (1-\varepsilon)}{d_p \varepsilon^3}\left[\frac{160}{Re_m} + \left(0.922 + \frac{16}{Re_m^{0.46}}\right)\frac{Re_m}{Re_m + 52}\right]",
        BED_FLOW,
        &[],
    ),
    entry(
        C::DixonWall,
        "Dixon (wall effect)",
        Family::PressureDrop,
        r"\Delta P = \frac{L \rho u_0^2 (1-\varepsilon)}{d_p \varepsilon^3}\left[\frac{160}{Re_m}\left(1 + \frac{2\alpha}{3(1-\varepsilon)N}\right)^2 + \left(0.922 + \frac{16}{Re_m^{0.46}}\right)\frac{Re_m}{Re_m + 52}\right]",
        BED_FLOW_IN_COLUMN,
        &[],
    ),
    entry(
        C::DixonWallUnsquared,
        "Dixon (wall effect, unsquared variant)",
        Family::PressureDrop,
        r"\Delta P = \frac{L \rho u_0^2 (1-\varepsilon)}{d_p \varepsilon^3}\left[\frac{160}{Re_m}\left(1 + \frac{2\alpha}{3(1-\varepsilon)N}\right) + 0.922 + \frac{16}{Re_m^{0.46}}\frac{Re_m}{Re_m + 52}\right]",
        BED_FLOW_IN_COLUMN,
        &[],
    ),
    entry(
        C::Kta,
        "KTA",
        Family::PressureDrop,
        r"\Delta P = \frac{L \rho u_0^2 (1-\varepsilon)}{d_p \varepsilon^3}\left[\frac{160}{Re_m} + \frac{3}{Re_m^{0.1}}\right]",
        BED_FLOW,
        &[Applicability::advisory(ModifiedReynolds, 1.0, 1.0e5)],
    ),
    entry(
        C::LockhartMartinelli,
        "Lockhart-Martinelli",
        Family::TwoPhasePressureDrop,
        r"\Delta P = \Delta P_L\left(1 + \frac{20}{X} + \frac{1}{X^2}\right),\quad X = \sqrt{\Delta P_L/\Delta P_G}",
        TWO_PHASE_FLOW,
        &[],
    ),
    entry(
        C::LarkinsWhiteJeffrey,
        "Larkins-White-Jeffrey",
        Family::TwoPhasePressureDrop,
        r"\Delta P = \Delta P_L\left(1 + 40\frac{u_G}{u_L}\sqrt{\rho_G/\rho_L}\,Re_L^{-0.2}\right)",
        TWO_PHASE_FLOW,
        &[],
    ),
    entry(
        C::Sato,
        "Sato et al.",
        Family::TwoPhasePressureDrop,
        r"\Delta P = \Delta P_L\left[1 + 25\left(\frac{u_G}{u_L}\right)^{0.8}\left(\frac{Re_G}{Re_L}\right)^{0.3} We_L^{-0.15}\right]_{1}^{50}",
        TWO_PHASE_FLOW_WITH_INTERFACE,
        &[],
    ),
    entry(
        C::AttouBoyerFerschneider,
        "Attou-Boyer-Ferschneider",
        Family::TwoPhasePressureDrop,
        r"\Delta P = L\left[\kappa\frac{\mu_L u_L}{d_p^2} + \frac{0.3}{Re_L}\frac{\rho_L u_L^2}{d_p}\right](1 + 3\alpha_G)",
        TWO_PHASE_FLOW,
        &[],
    ),
    entry(
        C::Holub,
        "Holub et al.",
        Family::TwoPhasePressureDrop,
        r"\Delta P = \Delta P_L\,\phi(\psi),\quad \psi = Re_L Re_G^{0.4} Fr_L^{-0.6}",
        TWO_PHASE_FLOW_WITH_INTERFACE,
        &[],
    ),
    entry(
        C::ZehnerSchlunderConductivity,
        "Zehner-Schlünder",
        Family::EffectiveConductivity,
        r"\lambda_{eff} = \lambda_f\left[1 - \sqrt{1-\varepsilon} + \frac{\sqrt{1-\varepsilon}}{\kappa\phi + 2/3}\right]",
        STAGNANT_BED,
        &[],
    ),
    entry(
        C::Krupiczka,
        "Krupiczka",
        Family::EffectiveConductivity,
        r"\lambda_{eff} = \lambda_f \kappa^{(0.280 - 0.757\log_{10}\varepsilon)(0.057\log_{10}\kappa)}",
        STAGNANT_BED,
        &[],
    ),
    entry(
        C::WoodsideMessmer,
        "Woodside-Messmer",
        Family::EffectiveConductivity,
        r"\lambda_{eff} = \lambda_f\varepsilon + \lambda_s(1-\varepsilon)\sqrt{\lambda_f/\lambda_s}",
        STAGNANT_BED,
        &[],
    ),
    entry(
        C::KuniiSmith,
        "Kunii-Smith (simplified)",
        Family::EffectiveConductivity,
        r"\lambda_{eff} = \lambda_f\left[\varepsilon + \frac{1-\varepsilon}{\frac{2}{3}\frac{\lambda_f}{\lambda_s} + \frac{1}{3}}\right]",
        STAGNANT_BED,
        &[],
    ),
    entry(
        C::ZehnerBauerSchlunder,
        "Zehner-Bauer-Schlünder",
        Family::EffectiveConductivity,
        r"\frac{\lambda_{eff}}{\lambda_f} = (1-\sqrt{1-\varepsilon})\varepsilon\left[\frac{1}{\varepsilon - 1 + 1/k_G} + k_r\right] + \sqrt{1-\varepsilon}\left[\varphi\kappa + (1-\varphi)k_c\right]",
        STAGNANT_BED_WITH_GAS,
        &[],
    ),
    entry(
        C::YagiKuniiStatic,
        "Yagi-Kunii (stagnant)",
        Family::EffectiveConductivity,
        r"\lambda_{eff} = \varepsilon\lambda_f + \frac{1-\varepsilon}{1/\lambda_s + 1/\lambda_f}",
        STAGNANT_BED,
        &[],
    ),
    entry(
        C::YagiKuniiAxialConductivity,
        "Yagi-Kunii (axial)",
        Family::AxialConductivity,
        r"\lambda_{ax} = \lambda_{ax}^0 + 0.7\,Re\,Pr\,\lambda_f",
        FLOWING_BED,
        YAGI_KUNII_RANGE,
    ),
    entry(
        C::EdwardsAxialConductivity,
        "Edwards (axial)",
        Family::AxialConductivity,
        r"\lambda_{ax} = \lambda_{ax}^0 + 0.5\,Re\,Pr\,\lambda_f",
        FLOWING_BED,
        &[],
    ),
    entry(
        C::VortmeyerAxialConductivity,
        "Vortmeyer (axial)",
        Family::AxialConductivity,
        r"\lambda_{ax} = \lambda_{ax}^0 + 0.054\,Re\,Pr\,\lambda_f",
        FLOWING_BED,
        &[],
    ),
    entry(
        C::YagiKuniiRadialConductivity,
        "Yagi-Kunii (radial)",
        Family::RadialConductivity,
        r"\lambda_{er} = \lambda_{er}^0 + 0.1\,Re\,\lambda_f",
        FLOWING_BED,
        YAGI_KUNII_RANGE,
    ),
    entry(
        C::BauerSchlunderRadialConductivity,
        "Bauer-Schlünder (radial)",
        Family::RadialConductivity,
        r"\lambda_{er} = \lambda_{er}^0\left(1 + 0.14\,Re\sqrt{\frac{\varepsilon}{1-\varepsilon}}\right)",
        FLOWING_BED,
        &[
            Applicability::advisory(ParticleReynolds, 0.2, 1000.0),
            Applicability::advisory(Voidage, 0.3, 0.6),
        ],
    ),
    entry(
        C::PecletRadialConductivity,
        "Limiting Péclet (radial)",
        Family::RadialConductivity,
        r"\lambda_{er} = \lambda_{er}^0 + \frac{Re\,Pr}{10}\lambda_f",
        FLOWING_BED,
        &[],
    ),
    entry(
        C::DixonCresswellRadialConductivity,
        "Dixon-Cresswell (radial)",
        Family::RadialConductivity,
        r"\lambda_{er} = \lambda_{er}^0 + \frac{Re\,Pr}{8.65(1 + 1.94/N^2)}\lambda_f",
        FLOWING_BED_IN_TUBE,
        &[],
    ),
    entry(
        C::LiFinlayson,
        "Li & Finlayson",
        Family::WallHeatTransfer,
        r"\frac{h_w d_p}{\lambda_f} = 0.17 Re^{0.79} Pr^{0.33} (d_p/D_t)^{-0.25}",
        WALL_FLOW,
        &[Applicability::required(ParticleReynolds, 1.0, 100.0)],
    ),
    entry(
        C::DixonCresswell,
        "Dixon & Cresswell",
        Family::WallHeatTransfer,
        r"\frac{h_w d_p}{\lambda_f} = 0.23 Re^{0.7} Pr^{0.33} (d_p/D_t)^{-0.2}",
        WALL_FLOW,
        &[Applicability::required(ParticleReynolds, 1.0, 50.0)],
    ),
    entry(
        C::DeWaschFroment,
        "De Wasch & Froment",
        Family::WallHeatTransfer,
        r"\frac{h_w d_p}{\lambda_f} = 0.31 Re^{0.93} Pr^{0.33} (d_p/D_t)^{-0.5}",
        WALL_FLOW,
        &[Applicability::required(ParticleReynolds, 100.0, 1000.0)],
    ),
    entry(
        C::DeWaschFromentAlternate,
        "De Wasch & Froment (0.11 variant)",
        Family::WallHeatTransfer,
        r"\frac{h_w d_p}{\lambda_f} = 0.11 Re^{0.93} Pr^{0.33} (d_p/D_t)^{-0.485}",
        WALL_FLOW,
        &[Applicability::required(ParticleReynolds, 100.0, 1000.0)],
    ),
    entry(
        C::Specchia,
        "Specchia et al.",
        Family::WallHeatTransfer,
        r"\frac{h_w d_p}{\lambda_f} = 0.27 Re^{0.85} Pr^{0.33} (d_p/D_t)^{-0.33}",
        WALL_FLOW,
        &[Applicability::required(ParticleReynolds, 50.0, 500.0)],
    ),
    entry(
        C::Leva,
        "Leva",
        Family::WallHeatTransfer,
        r"\frac{h_w d_p}{\lambda_f} = 0.813 \frac{d_p}{D_t} e^{-6 d_p/D_t} Re^{0.9}",
        WALL_FLOW,
        &[Applicability::advisory(ParticleReynolds, 100.0, 2000.0)],
    ),
    entry(
        C::Demirel,
        "Demirel et al.",
        Family::WallHeatTransfer,
        r"\frac{h_w d_p}{\lambda_f} = 0.047 Re^{0.927}",
        WALL_FLOW,
        &[Applicability::advisory(ParticleReynolds, 200.0, 1450.0)],
    ),
    entry(
        C::Laguerre,
        "Laguerre et al.",
        Family::WallHeatTransfer,
        r"\frac{h_w d_p}{\lambda_f} = 1.56 Pr^{1/3} Re^{0.42}",
        WALL_FLOW,
        &[Applicability::advisory(ParticleReynolds, 100.0, 400.0)],
    ),
    entry(
        C::Das,
        "Das et al.",
        Family::WallHeatTransfer,
        r"\frac{h_w d_p}{\lambda_f} = 1.351 + 0.1124 Pr^{1/3} Re^{0.878}",
        WALL_FLOW,
        &[Applicability::advisory(ParticleReynolds, 1.0, 500.0)],
    ),
    entry(
        C::LevaEtAl,
        "Leva et al.",
        Family::WallHeatTransfer,
        r"\frac{h_w d_p}{\lambda_f} = 3.5 \frac{d_p}{D_t} e^{-4.6 d_p/D_t} Re^{0.7}",
        WALL_FLOW,
        &[
            Applicability::advisory(ParticleReynolds, 250.0, 3000.0),
            Applicability::advisory(TubeRatio, 3.7, 12.5),
        ],
    ),
    entry(
        C::ChuStorrow,
        "Chu & Storrow",
        Family::WallHeatTransfer,
        r"\frac{h_w d_p}{\lambda_f} = 0.134 \left(\frac{d_p}{D_t}\right)^{-0.13}\left(\frac{L}{D_t}\right)^{-0.9} Re^{1.17}",
        WALL_FLOW_ALONG_BED,
        &[
            Applicability::advisory_below(ParticleReynolds, 1600.0),
            Applicability::advisory(TubeRatio, 3.9, 25.7),
        ],
    ),
    entry(
        C::YagiWakao,
        "Yagi & Wakao",
        Family::WallHeatTransfer,
        r"\frac{h_w d_p}{\lambda_f} = \begin{cases} 0.6 Re^{0.5} & Re < 40 \\ 0.2 Re^{0.8} & Re \ge 40 \end{cases}",
        WALL_FLOW,
        &[
            Applicability::advisory(ParticleReynolds, 20.0, 2000.0),
            Applicability::advisory(TubeRatio, 6.0, 47.0),
        ],
    ),
    entry(
        C::KuniiEtAl,
        "Kunii et al.",
        Family::WallHeatTransfer,
        r"\frac{h_w d_p}{\lambda_f} = 0.2 Re^{0.75} Pr^{0.33}",
        WALL_FLOW,
        &[
            Applicability::advisory_above(ParticleReynolds, 100.0),
            Applicability::advisory(TubeRatio, 3.3, 5.0),
        ],
    ),
    entry(
        C::OlbrichPotter,
        "Olbrich & Potter",
        Family::WallHeatTransfer,
        r"\frac{h_w d_p}{\lambda_f} = 8.9 Pr^{1/3} Re^{0.34}",
        WALL_FLOW,
        &[
            Applicability::advisory(ParticleReynolds, 100.0, 3000.0),
            Applicability::advisory(TubeRatio, 4.06, 26.6),
        ],
    ),
    entry(
        C::SpecchiaBaldiSicardi,
        "Specchia, Baldi & Sicardi",
        Family::WallHeatTransfer,
        r"\frac{h_w d_p}{\lambda_f} = 2\varepsilon + 0.0835 Re^{0.91}",
        WALL_FLOW_IN_BED,
        &[
            Applicability::advisory(ParticleReynolds, 10.0, 1200.0),
            Applicability::advisory(TubeRatio, 3.5, 8.4),
        ],
    ),
    entry(
        C::ColledgePaterson,
        "Colledge & Paterson",
        Family::WallHeatTransfer,
        r"\frac{h_w d_p}{\lambda_f} = 0.523\left(1 - \frac{d_p}{D_t}\right) Pr^{1/3} Re^{0.738}",
        WALL_FLOW,
        &[],
    ),
    entry(
        C::DixonEtAlWall,
        "Dixon et al.",
        Family::WallHeatTransfer,
        r"\frac{h_w d_p}{\lambda_f} = \left[1 - 1.5\left(\frac{d_p}{D_t}\right)^{1.5}\right] Pr^{1/3} Re^{0.59}",
        WALL_FLOW,
        &[
            Applicability::advisory(ParticleReynolds, 50.0, 500.0),
            Applicability::advisory(TubeRatio, 3.0, 12.0),
        ],
    ),
    entry(
        C::PetersEtAl,
        "Peters et al.",
        Family::WallHeatTransfer,
        r"\frac{h_w d_p}{\lambda_f} = 4.9\left(\frac{d_p}{D_t}\right)^{0.26} Pr^{1/3} Re^{0.45}",
        WALL_FLOW,
        &[
            Applicability::advisory(ParticleReynolds, 200.0, 8000.0),
            Applicability::advisory(TubeRatio, 3.0, 11.0),
        ],
    ),
    entry(
        C::MartinNilles,
        "Martin & Nilles",
        Family::WallHeatTransfer,
        r"\frac{h_w d_p}{\lambda_f} = \left(1.3 + \frac{5 d_p}{D_t}\right)\frac{\lambda_{er}}{\lambda_f} + 0.19 Pr^{1/3} Re^{0.75}",
        WALL_FLOW_WITH_BED_CONDUCTIVITY,
        &[
            Applicability::advisory(ParticleReynolds, 35.0, 500.0),
            Applicability::advisory(TubeRatio, 3.3, 20.0),
        ],
    ),
    entry(
        C::EdwardsRichardsonAxial,
        "Edwards & Richardson (axial)",
        Family::AxialDispersion,
        r"D_{ax} = 0.73 D_m + \frac{0.5 u_0 d_p}{1 + 9.7 D_m/(u_0 d_p)}",
        DISPERSION,
        &[],
    ),
    entry(
        C::ZehnerSchlunderAxial,
        "Zehner & Schlünder (axial)",
        Family::AxialDispersion,
        r"D_{ax} = \frac{2 D_m}{\varepsilon} + 0.5 u_0 d_p",
        DISPERSION,
        &[],
    ),
    entry(
        C::GunnAxial,
        "Gunn (axial)",
        Family::AxialDispersion,
        r"D_{ax} = 0.7 D_m + 0.5 u_0 d_p",
        DISPERSION,
        &[],
    ),
    entry(
        C::WakaoKagueiAxial,
        "Wakao & Kaguei (axial)",
        Family::AxialDispersion,
        r"D_{ax} = \varepsilon D_m + 0.5 u_0 d_p",
        DISPERSION,
        &[],
    ),
    entry(
        C::EdwardsRichardsonRadial,
        "Edwards & Richardson (radial)",
        Family::RadialDispersion,
        r"D_{rad} = \varepsilon D_m + \frac{0.08 u_0 d_p}{1 + 9.7 D_m/(u_0 d_p)}",
        DISPERSION,
        &[],
    ),
    entry(
        C::ZehnerSchlunderRadial,
        "Zehner & Schlünder (radial)",
        Family::RadialDispersion,
        r"D_{rad} = \varepsilon D_m + 0.1 u_0 d_p",
        DISPERSION,
        &[],
    ),
    entry(
        C::GunnRadial,
        "Gunn (radial)",
        Family::RadialDispersion,
        r"D_{rad} = \varepsilon D_m + 0.1 \varepsilon u_0 d_p",
        DISPERSION,
        &[],
    ),
    entry(
        C::WakaoKagueiRadial,
        "Wakao & Kaguei (radial)",
        Family::RadialDispersion,
        r"D_{rad} = \varepsilon D_m + 0.1 u_0 d_p",
        DISPERSION,
        &[],
    ),
    entry(
        C::LerouWammesRadial,
        "Lerou & Wammes (radial)",
        Family::RadialDispersion,
        r"Pe_{rad} = \frac{8}{1 + 20/N^2}",
        DISPERSION_IN_TUBE,
        &[],
    ),
    entry(
        C::BauerRadial,
        "Bauer (radial)",
        Family::RadialDispersion,
        r"\frac{1}{Pe_{rad}} = \frac{0.73\varepsilon}{Re\,Sc} + \frac{1}{7\left[2 - (1 - 2/N)\right]^2}",
        DISPERSION_IN_TUBE,
        &[],
    ),
    entry(
        C::RanzMarshallMass,
        "Ranz-Marshall (mass)",
        Family::MassTransfer,
        r"Sh = 2 + 0.6 Re^{1/2} Sc^{1/3}",
        MASS_TRANSFER,
        &[
            Applicability::advisory(ParticleReynolds, 2.0, 200.0),
            Applicability::advisory(Schmidt, 0.6, 2.7),
        ],
    ),
    entry(
        C::WakaoFunazkri,
        "Wakao-Funazkri",
        Family::MassTransfer,
        r"Sh = 2 + 1.1 Re^{0.6} Sc^{1/3}",
        MASS_TRANSFER,
        &[Applicability::advisory(ParticleReynolds, 3.0, 1.0e4)],
    ),
    entry(
        C::Rowe,
        "Rowe",
        Family::MassTransfer,
        r"Sh = 1.1\left(Re^{0.5} + 0.2 Re^{0.67}\right) Sc^{0.33}",
        MASS_TRANSFER,
        &[Applicability::advisory(ParticleReynolds, 1.0, 3.0e4)],
    ),
    entry(
        C::RanzMarshallHeat,
        "Ranz-Marshall (heat)",
        Family::HeatTransfer,
        r"Nu = 2 + 0.6 Re^{1/2} Pr^{1/3}",
        HEAT_TRANSFER,
        &[
            Applicability::advisory(ParticleReynolds, 2.0, 200.0),
            Applicability::advisory(Prandtl, 0.6, 380.0),
        ],
    ),
    entry(
        C::Gnielinski,
        "Gnielinski",
        Family::HeatTransfer,
        r"Nu = 2 + \sqrt{Nu_{lam}^2 + Nu_{turb}^2}",
        HEAT_TRANSFER,
        &[Applicability::advisory(ParticleReynolds, 10.0, 1.0e7)],
    ),
    entry(
        C::DittusBoelter,
        "Dittus-Boelter",
        Family::HeatTransfer,
        r"Nu = 0.023 Re^{0.8} Pr^{0.4}",
        HEAT_TRANSFER,
        &[Applicability::advisory_above(ParticleReynolds, 1.0e4)],
    ),
    entry(
        C::Hausen,
        "Hausen",
        Family::HeatTransfer,
        r"Nu = 0.037 Re^{0.8} Pr^{1/3}",
        HEAT_TRANSFER,
        &[Applicability::advisory_above(ParticleReynolds, 5000.0)],
    ),
    entry(
        C::OverallComplete,
        "Two-dimensional model (complete)",
        Family::OverallHeatTransfer,
        r"\frac{1}{U} = \frac{1}{h_w} + \frac{D_t}{2\lambda_{er}}\frac{I_0(N_w)}{N_w I_1(N_w)}",
        PACKED_TUBE,
        &[],
    ),
    entry(
        C::OverallApproximate,
        "Two-dimensional model (approximate)",
        Family::OverallHeatTransfer,
        r"\frac{1}{U} = \frac{1}{h_w} + \frac{D_t}{4\lambda_{er}}",
        PACKED_TUBE,
        &[],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::correlation::Enforcement;

    #[test]
    fn table_is_indexed_by_id() {
        for id in CorrelationId::ALL {
            assert_eq!(id.definition().id, id);
        }
    }

    #[test]
    fn only_wall_correlations_gate_their_results() {
        let gated: Vec<_> = CorrelationId::ALL
            .into_iter()
            .filter(|id| {
                id.definition()
                    .applicability
                    .iter()
                    .any(|bound| bound.enforcement == Enforcement::Required)
            })
            .collect();
        assert_eq!(
            gated,
            [
                C::LiFinlayson,
                C::DixonCresswell,
                C::DeWaschFroment,
                C::DeWaschFromentAlternate,
                C::Specchia,
            ]
        );
    }

    #[test]
    fn tube_ratio_windows_are_advisory() {
        let windows: Vec<_> = CorrelationId::ALL
            .into_iter()
            .flat_map(|id| id.definition().applicability)
            .filter(|bound| bound.group == TubeRatio)
            .collect();
        assert_eq!(windows.len(), 9);
        assert!(windows.iter().all(|b| b.enforcement == Enforcement::Advisory));
    }

    #[test]
    fn two_phase_correlations_read_both_phases() {
        for &id in Family::TwoPhasePressureDrop.correlations() {
            let inputs = id.definition().inputs;
            assert!(inputs.contains(&I::LiquidVelocity), "{id}");
            assert!(inputs.contains(&I::GasViscosity), "{id}");
            assert!(!inputs.contains(&I::Velocity), "{id}");
        }
    }

    #[test]
    fn transfer_correlations_carry_advisory_reynolds_windows() {
        for id in [C::RanzMarshallMass, C::WakaoFunazkri, C::RanzMarshallHeat, C::Gnielinski] {
            let bounds = id.definition().applicability;
            assert!(
                bounds
                    .iter()
                    .any(|b| b.group == ParticleReynolds && b.enforcement == Enforcement::Advisory),
                "{id}"
            );
        }
    }
}
