use std::fmt;

/// Identifies one published correlation.
///
/// The discriminant order is the registry order used by
/// [`CorrelationId::ALL`] and the static metadata table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CorrelationId {
    // Pressure drop.
    Ergun,
    CarmanKozeny,
    BurkePlummer,
    EisfeldSchnitzlein,
    Dixon,
    DixonWall,
    /// Single-file page variant of [`CorrelationId::DixonWall`] with an
    /// unsquared wall correction.
    DixonWallUnsquared,
    Kta,

    // Two-phase (trickle-bed) pressure drop.
    LockhartMartinelli,
    LarkinsWhiteJeffrey,
    Sato,
    AttouBoyerFerschneider,
    Holub,

    // Effective thermal conductivity.
    ZehnerSchlunderConductivity,
    Krupiczka,
    WoodsideMessmer,
    KuniiSmith,
    ZehnerBauerSchlunder,
    YagiKuniiStatic,

    // Axial conductivity of a flowing bed.
    YagiKuniiAxialConductivity,
    EdwardsAxialConductivity,
    VortmeyerAxialConductivity,

    // Radial conductivity of a flowing bed.
    YagiKuniiRadialConductivity,
    BauerSchlunderRadialConductivity,
    PecletRadialConductivity,
    DixonCresswellRadialConductivity,

    // Wall heat transfer.
    LiFinlayson,
    DixonCresswell,
    DeWaschFroment,
    /// The `0.11`, `(dp/Dt)^-0.485` coefficient set found in one copy of the
    /// De Wasch & Froment correlation.
    DeWaschFromentAlternate,
    Specchia,
    Leva,
    Demirel,
    Laguerre,
    Das,
    LevaEtAl,
    ChuStorrow,
    YagiWakao,
    KuniiEtAl,
    OlbrichPotter,
    SpecchiaBaldiSicardi,
    ColledgePaterson,
    DixonEtAlWall,
    PetersEtAl,
    MartinNilles,

    // Axial dispersion.
    EdwardsRichardsonAxial,
    ZehnerSchlunderAxial,
    GunnAxial,
    WakaoKagueiAxial,

    // Radial dispersion.
    EdwardsRichardsonRadial,
    ZehnerSchlunderRadial,
    GunnRadial,
    WakaoKagueiRadial,
    LerouWammesRadial,
    BauerRadial,

    // Particle-to-fluid mass transfer.
    RanzMarshallMass,
    WakaoFunazkri,
    Rowe,

    // Particle-to-fluid heat transfer.
    RanzMarshallHeat,
    Gnielinski,
    DittusBoelter,
    Hausen,

    // Overall wall-to-bed heat transfer.
    OverallComplete,
    OverallApproximate,
}

impl CorrelationId {
    /// Every correlation, in registry order.
    pub const ALL: [CorrelationId; 64] = [
        Self::Ergun,
        Self::CarmanKozeny,
        Self::BurkePlummer,
        Self::EisfeldSchnitzlein,
        Self::Dixon,
        Self::DixonWall,
        Self::DixonWallUnsquared,
        Self::Kta,
        Self::LockhartMartinelli,
        Self::LarkinsWhiteJeffrey,
        Self::Sato,
        Self::AttouBoyerFerschneider,
        Self::Holub,
        Self::ZehnerSchlunderConductivity,
        Self::Krupiczka,
        Self::WoodsideMessmer,
        Self::KuniiSmith,
        Self::ZehnerBauerSchlunder,
        Self::YagiKuniiStatic,
        Self::YagiKuniiAxialConductivity,
        Self::EdwardsAxialConductivity,
        Self::VortmeyerAxialConductivity,
        Self::YagiKuniiRadialConductivity,
        Self::BauerSchlunderRadialConductivity,
        Self::PecletRadialConductivity,
        Self::DixonCresswellRadialConductivity,
        Self::LiFinlayson,
        Self::DixonCresswell,
        Self::DeWaschFroment,
        Self::DeWaschFromentAlternate,
        Self::Specchia,
        Self::Leva,
        Self::Demirel,
        Self::Laguerre,
        Self::Das,
        Self::LevaEtAl,
        Self::ChuStorrow,
        Self::YagiWakao,
        Self::KuniiEtAl,
        Self::OlbrichPotter,
        Self::SpecchiaBaldiSicardi,
        Self::ColledgePaterson,
        Self::DixonEtAlWall,
        Self::PetersEtAl,
        Self::MartinNilles,
        Self::EdwardsRichardsonAxial,
        Self::ZehnerSchlunderAxial,
        Self::GunnAxial,
        Self::WakaoKagueiAxial,
        Self::EdwardsRichardsonRadial,
        Self::ZehnerSchlunderRadial,
        Self::GunnRadial,
        Self::WakaoKagueiRadial,
        Self::LerouWammesRadial,
        Self::BauerRadial,
        Self::RanzMarshallMass,
        Self::WakaoFunazkri,
        Self::Rowe,
        Self::RanzMarshallHeat,
        Self::Gnielinski,
        Self::DittusBoelter,
        Self::Hausen,
        Self::OverallComplete,
        Self::OverallApproximate,
    ];

    /// The family this correlation belongs to.
    #[must_use]
    pub fn family(self) -> Family {
        self.definition().family
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.definition().name)
    }
}

/// A group of correlations estimating the same transport property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    PressureDrop,
    TwoPhasePressureDrop,
    EffectiveConductivity,
    AxialConductivity,
    RadialConductivity,
    WallHeatTransfer,
    AxialDispersion,
    RadialDispersion,
    MassTransfer,
    HeatTransfer,
    OverallHeatTransfer,
}

impl Family {
    pub const ALL: [Family; 11] = [
        Self::PressureDrop,
        Self::TwoPhasePressureDrop,
        Self::EffectiveConductivity,
        Self::AxialConductivity,
        Self::RadialConductivity,
        Self::WallHeatTransfer,
        Self::AxialDispersion,
        Self::RadialDispersion,
        Self::MassTransfer,
        Self::HeatTransfer,
        Self::OverallHeatTransfer,
    ];

    /// The canonical members of this family.
    ///
    /// Known-inconsistent variants ([`CorrelationId::DixonWallUnsquared`],
    /// [`CorrelationId::DeWaschFromentAlternate`]) are left out; select them
    /// by id when they are wanted.
    #[must_use]
    pub fn correlations(self) -> &'static [CorrelationId] {
        use CorrelationId as C;

        match self {
            Self::PressureDrop => &[
                C::Ergun,
                C::CarmanKozeny,
                C::BurkePlummer,
                C::EisfeldSchnitzlein,
                C::Dixon,
                C::DixonWall,
                C::Kta,
            ],
            Self::TwoPhasePressureDrop => &[
                C::LockhartMartinelli,
                C::LarkinsWhiteJeffrey,
                C::Sato,
                C::AttouBoyerFerschneider,
                C::Holub,
            ],
            Self::EffectiveConductivity => &[
                C::ZehnerSchlunderConductivity,
                C::Krupiczka,
                C::WoodsideMessmer,
                C::KuniiSmith,
                C::ZehnerBauerSchlunder,
                C::YagiKuniiStatic,
            ],
            Self::AxialConductivity => &[
                C::YagiKuniiAxialConductivity,
                C::EdwardsAxialConductivity,
                C::VortmeyerAxialConductivity,
            ],
            Self::RadialConductivity => &[
                C::YagiKuniiRadialConductivity,
                C::BauerSchlunderRadialConductivity,
                C::PecletRadialConductivity,
                C::DixonCresswellRadialConductivity,
            ],
            Self::WallHeatTransfer => &[
                C::LiFinlayson,
                C::DixonCresswell,
                C::DeWaschFroment,
                C::Specchia,
                C::Leva,
                C::Demirel,
                C::Laguerre,
                C::Das,
                C::LevaEtAl,
                C::ChuStorrow,
                C::YagiWakao,
                C::KuniiEtAl,
                C::OlbrichPotter,
                C::SpecchiaBaldiSicardi,
                C::ColledgePaterson,
                C::DixonEtAlWall,
                C::PetersEtAl,
                C::MartinNilles,
            ],
            Self::AxialDispersion => &[
                C::EdwardsRichardsonAxial,
                C::ZehnerSchlunderAxial,
                C::GunnAxial,
                C::WakaoKagueiAxial,
            ],
            Self::RadialDispersion => &[
                C::EdwardsRichardsonRadial,
                C::ZehnerSchlunderRadial,
                C::GunnRadial,
                C::WakaoKagueiRadial,
                C::LerouWammesRadial,
                C::BauerRadial,
            ],
            Self::MassTransfer => &[C::RanzMarshallMass, C::WakaoFunazkri, C::Rowe],
            Self::HeatTransfer => &[
                C::RanzMarshallHeat,
                C::Gnielinski,
                C::DittusBoelter,
                C::Hausen,
            ],
            Self::OverallHeatTransfer => &[C::OverallComplete, C::OverallApproximate],
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PressureDrop => "pressure drop",
            Self::TwoPhasePressureDrop => "two-phase pressure drop",
            Self::EffectiveConductivity => "effective thermal conductivity",
            Self::AxialConductivity => "axial effective conductivity",
            Self::RadialConductivity => "radial effective conductivity",
            Self::WallHeatTransfer => "wall heat-transfer coefficient",
            Self::AxialDispersion => "axial dispersion coefficient",
            Self::RadialDispersion => "radial dispersion coefficient",
            Self::MassTransfer => "mass-transfer coefficient",
            Self::HeatTransfer => "heat-transfer coefficient",
            Self::OverallHeatTransfer => "overall heat-transfer coefficient",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_canonical_member_reports_its_family() {
        for family in Family::ALL {
            for id in family.correlations() {
                assert_eq!(id.family(), family, "{id:?}");
            }
        }
    }

    #[test]
    fn variants_are_addressable_but_not_canonical() {
        let pressure = Family::PressureDrop.correlations();
        assert!(!pressure.contains(&CorrelationId::DixonWallUnsquared));
        assert_eq!(
            CorrelationId::DixonWallUnsquared.family(),
            Family::PressureDrop
        );

        let wall = Family::WallHeatTransfer.correlations();
        assert!(!wall.contains(&CorrelationId::DeWaschFromentAlternate));
    }

    #[test]
    fn every_correlation_belongs_to_one_family() {
        let listed: usize = Family::ALL.iter().map(|f| f.correlations().len()).sum();
        // The two inconsistent variants are the only unlisted ids.
        assert_eq!(listed + 2, CorrelationId::ALL.len());
    }

    #[test]
    fn all_is_in_discriminant_order() {
        for (index, id) in CorrelationId::ALL.iter().enumerate() {
            assert_eq!(*id as usize, index);
        }
    }
}
