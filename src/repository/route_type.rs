use serde::Serialize;

use crate::gtfs::parse::Code;

/// The kind of vehicle operating a route.
///
/// Covers the core codes 0-7, 11 and 12 and the extended route types
/// (<https://developers.google.com/transit/gtfs/reference/extended-route-types>).
/// A few legacy extended codes share a variant: 300 is [`RouteType::SuburbanRail`],
/// 500 is [`RouteType::Metro`] and 600 is [`RouteType::Underground`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RouteType {
    LightRail,
    Subway,
    Rail,
    Bus,
    Ferry,
    CableCar,
    Gondola,
    Funicular,
    Trolleybus,
    Monorail,

    // Rail 100-117
    RailwayService,
    HighSpeedRail,
    LongDistanceRail,
    InterRegionalRail,
    CarTransportRail,
    SleeperRail,
    RegionalRail,
    TouristRail,
    RailShuttle,
    SuburbanRail,
    ReplacementRail,
    SpecialRail,
    LorryTransportRail,
    AllRail,
    CrossCountryRail,
    VehicleTransportRail,
    RackAndPinionRail,
    AdditionalRail,

    // Coach 200-209
    CoachService,
    InternationalCoach,
    NationalCoach,
    ShuttleCoach,
    RegionalCoach,
    SpecialCoach,
    SightseeingCoach,
    TouristCoach,
    CommuterCoach,
    AllCoach,

    // Urban rail 400-405
    UrbanRailService,
    Metro,
    Underground,
    UrbanRail,
    AllUrbanRail,
    UrbanMonorail,

    // Bus 700-716
    BusService,
    RegionalBus,
    ExpressBus,
    StoppingBus,
    LocalBus,
    NightBus,
    PostBus,
    SpecialNeedsBus,
    MobilityBus,
    MobilityBusForRegisteredDisabled,
    SightseeingBus,
    ShuttleBus,
    SchoolBus,
    SchoolAndPublicServiceBus,
    RailReplacementBus,
    DemandAndResponseBus,
    AllBus,

    TrolleybusService,

    // Tram 900-906
    TramService,
    CityTram,
    LocalTram,
    RegionalTram,
    SightseeingTram,
    ShuttleTram,
    AllTram,

    WaterTransport,
    AirService,
    FerryService,
    AerialLiftService,
    FunicularService,

    // Taxi 1500-1507
    TaxiService,
    CommunalTaxi,
    WaterTaxi,
    RailTaxi,
    BikeTaxi,
    LicensedTaxi,
    PrivateHireVehicle,
    AllTaxi,

    MiscellaneousService,
    HorseDrawnCarriage,
}

impl Code for RouteType {
    fn from_code(code: &str) -> Option<Self> {
        use RouteType::*;
        let route_type = match code {
            "0" => LightRail,
            "1" => Subway,
            "2" => Rail,
            "3" => Bus,
            "4" => Ferry,
            "5" => CableCar,
            "6" => Gondola,
            "7" => Funicular,
            "11" => Trolleybus,
            "12" => Monorail,

            "100" => RailwayService,
            "101" => HighSpeedRail,
            "102" => LongDistanceRail,
            "103" => InterRegionalRail,
            "104" => CarTransportRail,
            "105" => SleeperRail,
            "106" => RegionalRail,
            "107" => TouristRail,
            "108" => RailShuttle,
            "109" | "300" => SuburbanRail,
            "110" => ReplacementRail,
            "111" => SpecialRail,
            "112" => LorryTransportRail,
            "113" => AllRail,
            "114" => CrossCountryRail,
            "115" => VehicleTransportRail,
            "116" => RackAndPinionRail,
            "117" => AdditionalRail,

            "200" => CoachService,
            "201" => InternationalCoach,
            "202" => NationalCoach,
            "203" => ShuttleCoach,
            "204" => RegionalCoach,
            "205" => SpecialCoach,
            "206" => SightseeingCoach,
            "207" => TouristCoach,
            "208" => CommuterCoach,
            "209" => AllCoach,

            "400" => UrbanRailService,
            "401" | "500" => Metro,
            "402" | "600" => Underground,
            "403" => UrbanRail,
            "404" => AllUrbanRail,
            "405" => UrbanMonorail,

            "700" => BusService,
            "701" => RegionalBus,
            "702" => ExpressBus,
            "703" => StoppingBus,
            "704" => LocalBus,
            "705" => NightBus,
            "706" => PostBus,
            "707" => SpecialNeedsBus,
            "708" => MobilityBus,
            "709" => MobilityBusForRegisteredDisabled,
            "710" => SightseeingBus,
            "711" => ShuttleBus,
            "712" => SchoolBus,
            "713" => SchoolAndPublicServiceBus,
            "714" => RailReplacementBus,
            "715" => DemandAndResponseBus,
            "716" => AllBus,

            "800" => TrolleybusService,

            "900" => TramService,
            "901" => CityTram,
            "902" => LocalTram,
            "903" => RegionalTram,
            "904" => SightseeingTram,
            "905" => ShuttleTram,
            "906" => AllTram,

            "1000" => WaterTransport,
            "1100" => AirService,
            "1200" => FerryService,
            "1300" => AerialLiftService,
            "1400" => FunicularService,

            "1500" => TaxiService,
            "1501" => CommunalTaxi,
            "1502" => WaterTaxi,
            "1503" => RailTaxi,
            "1504" => BikeTaxi,
            "1505" => LicensedTaxi,
            "1506" => PrivateHireVehicle,
            "1507" => AllTaxi,

            "1700" => MiscellaneousService,
            "1702" => HorseDrawnCarriage,
            _ => return None,
        };
        Some(route_type)
    }
}

impl RouteType {
    /// The canonical wire code. Legacy aliases map back to their primary code.
    pub const fn code(self) -> u16 {
        use RouteType::*;
        match self {
            LightRail => 0,
            Subway => 1,
            Rail => 2,
            Bus => 3,
            Ferry => 4,
            CableCar => 5,
            Gondola => 6,
            Funicular => 7,
            Trolleybus => 11,
            Monorail => 12,
            RailwayService => 100,
            HighSpeedRail => 101,
            LongDistanceRail => 102,
            InterRegionalRail => 103,
            CarTransportRail => 104,
            SleeperRail => 105,
            RegionalRail => 106,
            TouristRail => 107,
            RailShuttle => 108,
            SuburbanRail => 109,
            ReplacementRail => 110,
            SpecialRail => 111,
            LorryTransportRail => 112,
            AllRail => 113,
            CrossCountryRail => 114,
            VehicleTransportRail => 115,
            RackAndPinionRail => 116,
            AdditionalRail => 117,
            CoachService => 200,
            InternationalCoach => 201,
            NationalCoach => 202,
            ShuttleCoach => 203,
            RegionalCoach => 204,
            SpecialCoach => 205,
            SightseeingCoach => 206,
            TouristCoach => 207,
            CommuterCoach => 208,
            AllCoach => 209,
            UrbanRailService => 400,
            Metro => 401,
            Underground => 402,
            UrbanRail => 403,
            AllUrbanRail => 404,
            UrbanMonorail => 405,
            BusService => 700,
            RegionalBus => 701,
            ExpressBus => 702,
            StoppingBus => 703,
            LocalBus => 704,
            NightBus => 705,
            PostBus => 706,
            SpecialNeedsBus => 707,
            MobilityBus => 708,
            MobilityBusForRegisteredDisabled => 709,
            SightseeingBus => 710,
            ShuttleBus => 711,
            SchoolBus => 712,
            SchoolAndPublicServiceBus => 713,
            RailReplacementBus => 714,
            DemandAndResponseBus => 715,
            AllBus => 716,
            TrolleybusService => 800,
            TramService => 900,
            CityTram => 901,
            LocalTram => 902,
            RegionalTram => 903,
            SightseeingTram => 904,
            ShuttleTram => 905,
            AllTram => 906,
            WaterTransport => 1000,
            AirService => 1100,
            FerryService => 1200,
            AerialLiftService => 1300,
            FunicularService => 1400,
            TaxiService => 1500,
            CommunalTaxi => 1501,
            WaterTaxi => 1502,
            RailTaxi => 1503,
            BikeTaxi => 1504,
            LicensedTaxi => 1505,
            PrivateHireVehicle => 1506,
            AllTaxi => 1507,
            MiscellaneousService => 1700,
            HorseDrawnCarriage => 1702,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_types() {
        let expected = [
            ("0", RouteType::LightRail),
            ("1", RouteType::Subway),
            ("2", RouteType::Rail),
            ("3", RouteType::Bus),
            ("4", RouteType::Ferry),
            ("5", RouteType::CableCar),
            ("6", RouteType::Gondola),
            ("7", RouteType::Funicular),
            ("11", RouteType::Trolleybus),
            ("12", RouteType::Monorail),
        ];
        for (code, route_type) in expected {
            assert_eq!(RouteType::from_code(code), Some(route_type), "code {code}");
        }
    }

    #[test]
    fn extended_types() {
        assert_eq!(RouteType::from_code("100"), Some(RouteType::RailwayService));
        assert_eq!(RouteType::from_code("117"), Some(RouteType::AdditionalRail));
        assert_eq!(RouteType::from_code("700"), Some(RouteType::BusService));
        assert_eq!(RouteType::from_code("716"), Some(RouteType::AllBus));
        assert_eq!(RouteType::from_code("1702"), Some(RouteType::HorseDrawnCarriage));
    }

    #[test]
    fn legacy_aliases() {
        assert_eq!(RouteType::from_code("300"), Some(RouteType::SuburbanRail));
        assert_eq!(RouteType::from_code("500"), Some(RouteType::Metro));
        assert_eq!(RouteType::from_code("600"), Some(RouteType::Underground));
        assert_eq!(RouteType::Metro.code(), 401);
    }

    #[test]
    fn invalid_types() {
        for code in ["", "8", "10", "118", "717", "1701", "03", "bus"] {
            assert_eq!(RouteType::from_code(code), None, "code {code:?}");
        }
    }

    #[test]
    fn code_round_trips_for_primary_codes() {
        for code in 0..=2000u16 {
            if let Some(route_type) = RouteType::from_code(&code.to_string()) {
                if !matches!(code, 300 | 500 | 600) {
                    assert_eq!(route_type.code(), code);
                }
            }
        }
    }
}
