use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    repository::{
        BikesAllowed, LocationType, PaymentMethod, PickupDropOffType, RouteType, Timepoint,
        TransferType, WheelchairAccessible,
    },
    shared::{Coordinate, Duration, Time, parse_date},
};

/// An operator of one or more routes.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Agency {
    /// Position of this agency in [`Repository::agencies`](crate::repository::Repository::agencies).
    pub index: u32,
    /// May only be empty when the feed has a single agency.
    pub id: Arc<str>,
    pub name: Arc<str>,
    pub url: Arc<str>,
    pub timezone: Arc<str>,
    pub lang: Arc<str>,
    pub phone: Arc<str>,
    pub fare_url: Arc<str>,
    pub email: Arc<str>,
}

/// A stop, station or station entrance.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Stop {
    pub index: u32,
    pub id: Arc<str>,
    pub code: Arc<str>,
    pub name: Arc<str>,
    pub description: Arc<str>,
    pub coordinate: Coordinate,
    pub zone_id: Arc<str>,
    pub url: Arc<str>,
    pub location_type: LocationType,
    /// Index of the parent station, if one was declared and could be resolved.
    pub parent_station_idx: Option<u32>,
    pub timezone: Arc<str>,
    /// Raw `wheelchair_boarding` code. Its meaning depends on the parent station.
    pub wheelchair_boarding: Arc<str>,
    pub platform_code: Arc<str>,
    pub vehicle_type: Option<RouteType>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub index: u32,
    pub id: Arc<str>,
    /// Index of the operating agency. Unset only when a lenient load met an unknown `agency_id`.
    pub agency_idx: Option<u32>,
    pub short_name: Arc<str>,
    pub long_name: Arc<str>,
    pub description: Arc<str>,
    pub route_type: RouteType,
    pub url: Arc<str>,
    /// Hex color without a leading `#`, `FFFFFF` when the feed leaves it empty.
    pub color: Arc<str>,
    /// Hex color without a leading `#`, `000000` when the feed leaves it empty.
    pub text_color: Arc<str>,
    pub sort_order: u64,
}

/// A set of dates on which trips run.
///
/// Built from `calendar.txt`, then extended by `calendar_dates.txt`. A service
/// only named in `calendar_dates.txt` runs on no weekday and has empty dates.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    pub index: u32,
    pub id: Arc<str>,
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub saturday: bool,
    pub sunday: bool,
    /// `YYYYMMDD`, as written in the feed.
    pub start_date: Arc<str>,
    /// `YYYYMMDD`, as written in the feed.
    pub end_date: Arc<str>,
    /// Dates with exception type 1, in file order.
    pub added_dates: Vec<Arc<str>>,
    /// Dates with exception type 2, in file order.
    pub removed_dates: Vec<Arc<str>>,
}

impl Service {
    pub fn start(&self) -> Option<NaiveDate> {
        parse_date(&self.start_date)
    }

    pub fn end(&self) -> Option<NaiveDate> {
        parse_date(&self.end_date)
    }

    /// The weekday flags from Monday to Sunday.
    pub fn weekdays(&self) -> [bool; 7] {
        [
            self.monday,
            self.tuesday,
            self.wednesday,
            self.thursday,
            self.friday,
            self.saturday,
            self.sunday,
        ]
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Shape {
    pub index: u32,
    pub id: Arc<str>,
    /// Sorted by ascending sequence.
    pub points: Vec<ShapePoint>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct ShapePoint {
    pub coordinate: Coordinate,
    pub sequence: u64,
    /// Distance traveled from the first point, 0.0 when not given.
    pub distance: f64,
}

/// A single journey of a vehicle along a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trip {
    pub index: u32,
    pub id: Arc<str>,
    /// Index of the route. Only unset after a lenient load that met an unknown `route_id`.
    pub route_idx: Option<u32>,
    /// Index of the service. Only unset after a lenient load that met an unknown `service_id`.
    pub service_idx: Option<u32>,
    /// Unset when the trip names no shape, or an unknown one in a lenient load.
    pub shape_idx: Option<u32>,
    pub headsign: Arc<str>,
    pub short_name: Arc<str>,
    pub direction_id: Arc<str>,
    pub block_id: Arc<str>,
    pub wheelchair_accessible: WheelchairAccessible,
    pub bikes_allowed: BikesAllowed,
    pub exceptional: bool,
    /// Sorted by ascending sequence.
    pub stop_times: Vec<StopTime>,
    /// Set by `frequencies.txt`. When present the trip runs in headway mode and
    /// `stop_times` only describes the pattern.
    pub frequency: Option<Frequency>,
}

impl Trip {
    /// True while the trip's times are given explicitly by its stop times.
    pub fn absolute_times(&self) -> bool {
        self.frequency.is_none()
    }
}

/// Individual event within a trip where a vehicle calls at a stop.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct StopTime {
    /// Index of the stop. Unset when the stop id is unknown.
    pub stop_idx: Option<u32>,
    pub arrival_time: Arc<str>,
    pub departure_time: Arc<str>,
    pub sequence: u64,
    pub headsign: Arc<str>,
    pub pickup_type: PickupDropOffType,
    pub drop_off_type: PickupDropOffType,
    pub distance: f64,
    pub timepoint: Timepoint,
}

impl StopTime {
    pub fn arrival(&self) -> Option<Time> {
        Time::from_hms(&self.arrival_time)
    }

    pub fn departure(&self) -> Option<Time> {
        Time::from_hms(&self.departure_time)
    }
}

/// Headway-based schedule of a trip.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Frequency {
    pub start_time: Arc<str>,
    pub end_time: Arc<str>,
    pub headway_secs: u64,
    pub exact_times: bool,
}

impl Frequency {
    pub fn start(&self) -> Option<Time> {
        Time::from_hms(&self.start_time)
    }

    pub fn end(&self) -> Option<Time> {
        Time::from_hms(&self.end_time)
    }

    /// `None` when `headway_secs` does not fit in a [`Duration`].
    pub fn headway(&self) -> Option<Duration> {
        u32::try_from(self.headway_secs)
            .ok()
            .map(Duration::from_seconds)
    }

    /// Departure times of the first stop, from `start` up to and excluding `end`.
    pub fn departures(&self) -> Vec<Time> {
        let (Some(start), Some(end), Some(headway)) = (self.start(), self.end(), self.headway())
        else {
            return Vec::new();
        };
        if headway.as_seconds() == 0 {
            return Vec::new();
        }
        let mut departures = Vec::new();
        let mut time = start;
        while time < end {
            departures.push(time);
            let next = time + headway;
            if next == time {
                break;
            }
            time = next;
        }
        departures
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fare {
    pub index: u32,
    pub id: Arc<str>,
    pub price: Arc<str>,
    pub currency: Arc<str>,
    pub payment_method: PaymentMethod,
    pub transfers: u64,
    /// Seconds, 0 when not given.
    pub transfer_duration: u64,
    /// Indices of the routes named by this fare's rules.
    pub route_idxs: Vec<u32>,
    pub origin_zones: Vec<Arc<str>>,
    pub destination_zones: Vec<Arc<str>>,
    pub contains_zones: Vec<Arc<str>>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Transfer {
    /// Unset when `from_stop_id` does not name a known stop.
    pub from_stop_idx: Option<u32>,
    /// Unset when `to_stop_id` does not name a known stop.
    pub to_stop_idx: Option<u32>,
    pub transfer_type: TransferType,
    /// Seconds, 0 when not given.
    pub min_transfer_time: u64,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct FeedInfo {
    pub publisher_name: Arc<str>,
    pub publisher_url: Arc<str>,
    pub lang: Arc<str>,
    pub start_date: Arc<str>,
    pub end_date: Arc<str>,
    pub version: Arc<str>,
    pub contact_email: Arc<str>,
    pub contact_url: Arc<str>,
}

impl FeedInfo {
    pub fn start(&self) -> Option<NaiveDate> {
        parse_date(&self.start_date)
    }

    pub fn end(&self) -> Option<NaiveDate> {
        parse_date(&self.end_date)
    }
}

/// A translation of a phrase into one language.
///
/// `Translation { id: "station-001", lang: "en", translation: "City Center" }`
/// translates the phrase `station-001` into English.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub id: Arc<str>,
    pub lang: Arc<str>,
    pub translation: Arc<str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frequency(start: &str, end: &str, headway_secs: u64) -> Frequency {
        Frequency {
            start_time: start.into(),
            end_time: end.into(),
            headway_secs,
            exact_times: false,
        }
    }

    #[test]
    fn frequency_headway() {
        let every_ten = frequency("06:00:00", "07:00:00", 600);
        assert_eq!(every_ten.headway(), Some(Duration::from_minutes(10)));
        assert_eq!(frequency("06:00:00", "07:00:00", u64::MAX).headway(), None);
    }

    #[test]
    fn frequency_departures() {
        let departures: Vec<String> = frequency("23:40:00", "24:10:00", 600)
            .departures()
            .iter()
            .map(Time::to_hms_string)
            .collect();
        assert_eq!(departures, ["23:40:00", "23:50:00", "24:00:00"]);

        assert!(frequency("06:00:00", "07:00:00", 0).departures().is_empty());
        assert!(frequency("07:00:00", "06:00:00", 600).departures().is_empty());
        assert!(frequency("", "07:00:00", 600).departures().is_empty());
    }
}
