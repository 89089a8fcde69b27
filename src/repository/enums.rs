use serde::Serialize;

use crate::gtfs::parse::Code;

/// Categorizes the specific nature of a stop location.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LocationType {
    /// A location where passengers board or disembark. Only stops may have a parent station.
    #[default]
    Stop,
    /// A physical structure or area that contains one or more stops.
    Station,
    /// A location where passengers can enter or exit a station from the street.
    StationEntrance,
}

impl Code for LocationType {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "" | "0" => Some(Self::Stop),
            "1" => Some(Self::Station),
            "2" => Some(Self::StationEntrance),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WheelchairAccessible {
    #[default]
    Unknown,
    Yes,
    No,
}

impl Code for WheelchairAccessible {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "" | "0" => Some(Self::Unknown),
            "1" => Some(Self::Yes),
            "2" => Some(Self::No),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BikesAllowed {
    #[default]
    Unknown,
    Yes,
    No,
}

impl Code for BikesAllowed {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "" | "0" => Some(Self::Unknown),
            "1" => Some(Self::Yes),
            "2" => Some(Self::No),
            _ => None,
        }
    }
}

/// How passengers may board or alight at a stop time.
/// Used for both `pickup_type` and `drop_off_type`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PickupDropOffType {
    #[default]
    Regular,
    None,
    PhoneAgency,
    CoordinateWithDriver,
}

impl Code for PickupDropOffType {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "" | "0" => Some(Self::Regular),
            "1" => Some(Self::None),
            "2" => Some(Self::PhoneAgency),
            "3" => Some(Self::CoordinateWithDriver),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Timepoint {
    #[default]
    Exact,
    Approximate,
}

impl Code for Timepoint {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "" | "1" => Some(Self::Exact),
            "0" => Some(Self::Approximate),
            _ => None,
        }
    }
}

/// Where a fare is paid. There is no default; the field is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PaymentMethod {
    OnBoard,
    BeforeBoarding,
}

impl Code for PaymentMethod {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "0" => Some(Self::OnBoard),
            "1" => Some(Self::BeforeBoarding),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TransferType {
    /// A recommended transfer point between two routes.
    #[default]
    Recommended,
    /// The departing vehicle waits for the arriving one.
    Timed,
    /// The transfer needs at least `min_transfer_time` seconds.
    MinimumTime,
    /// No transfer is possible between the two stops.
    None,
}

impl Code for TransferType {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "" | "0" => Some(Self::Recommended),
            "1" => Some(Self::Timed),
            "2" => Some(Self::MinimumTime),
            "3" => Some(Self::None),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ExceptionType {
    Added,
    Removed,
}

impl Code for ExceptionType {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(Self::Added),
            "2" => Some(Self::Removed),
            _ => None,
        }
    }
}
