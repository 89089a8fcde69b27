use std::{collections::HashMap, sync::Arc};

mod enums;
mod models;
mod route_type;
mod source;
pub use enums::*;
pub use models::*;
pub use route_type::*;

use serde::Serialize;

use crate::gtfs::{self, Config};

type IdToIndex = HashMap<Arc<str>, u32>;
type IdToLangToIndex = HashMap<Arc<str>, HashMap<Arc<str>, u32>>;

/// Owns every entity of a loaded feed.
///
/// Entities refer to each other through their `index` in the owning collection,
/// so a reference is only meaningful together with the repository it came from.
/// Entities from tables that loaded before a failure stay in place, so a
/// repository whose [`Repository::load`] failed can still be inspected.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Repository {
    pub agencies: Vec<Agency>,
    pub stops: Vec<Stop>,
    pub routes: Vec<Route>,
    pub services: Vec<Service>,
    pub shapes: Vec<Shape>,
    pub trips: Vec<Trip>,
    pub fares: Vec<Fare>,
    pub transfers: Vec<Transfer>,
    pub feed_info: Option<FeedInfo>,
    pub translations: Vec<Translation>,

    #[serde(skip)]
    config: Config,
    #[serde(skip)]
    agency_lookup: IdToIndex,
    #[serde(skip)]
    stop_lookup: IdToIndex,
    #[serde(skip)]
    route_lookup: IdToIndex,
    #[serde(skip)]
    service_lookup: IdToIndex,
    #[serde(skip)]
    shape_lookup: IdToIndex,
    #[serde(skip)]
    trip_lookup: IdToIndex,
    #[serde(skip)]
    fare_lookup: IdToIndex,
    #[serde(skip)]
    translation_lookup: IdToLangToIndex,
}

impl Repository {
    pub fn new() -> Self {
        Default::default()
    }

    /// The parsing policy of the last load.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get an agency with the given id.
    /// If no agency is found with the given id None is returned.
    pub fn agency_by_id(&self, id: &str) -> Option<&Agency> {
        let index = self.agency_lookup.get(id)?;
        self.agencies.get(*index as usize)
    }

    /// Resolves an optional agency reference.
    ///
    /// A non-empty id must name a known agency. An empty id stands for the
    /// feed's only agency and fails when there are zero or several.
    pub fn agency_by_id_or_default(&self, id: &str) -> Result<&Agency, gtfs::Error> {
        if !id.is_empty() {
            return self
                .agency_by_id(id)
                .ok_or_else(|| gtfs::Error::unknown("agency_id", id));
        }
        match self.agencies.as_slice() {
            [agency] => Ok(agency),
            agencies => Err(gtfs::Error::AmbiguousAgency(agencies.len())),
        }
    }

    pub fn stop_by_id(&self, id: &str) -> Option<&Stop> {
        let index = self.stop_lookup.get(id)?;
        self.stops.get(*index as usize)
    }

    pub fn route_by_id(&self, id: &str) -> Option<&Route> {
        let index = self.route_lookup.get(id)?;
        self.routes.get(*index as usize)
    }

    pub fn service_by_id(&self, id: &str) -> Option<&Service> {
        let index = self.service_lookup.get(id)?;
        self.services.get(*index as usize)
    }

    pub fn shape_by_id(&self, id: &str) -> Option<&Shape> {
        let index = self.shape_lookup.get(id)?;
        self.shapes.get(*index as usize)
    }

    /// Gets a trip with the given id.
    /// If no trip with the given id was found None is returned.
    pub fn trip_by_id(&self, id: &str) -> Option<&Trip> {
        let index = self.trip_lookup.get(id)?;
        self.trips.get(*index as usize)
    }

    pub fn fare_by_id(&self, id: &str) -> Option<&Fare> {
        let index = self.fare_lookup.get(id)?;
        self.fares.get(*index as usize)
    }

    /// Translates `phrase` into `lang`.
    /// If no translation is available the phrase itself is returned.
    pub fn translate<'a>(&'a self, phrase: &'a str, lang: &str) -> &'a str {
        self.translation_lookup
            .get(phrase)
            .and_then(|langs| langs.get(lang))
            .and_then(|index| self.translations.get(*index as usize))
            .map(|translation| translation.translation.as_ref())
            .unwrap_or(phrase)
    }

    pub fn agency_by_route_id(&self, route_id: &str) -> Option<&Agency> {
        let index = self.route_by_id(route_id)?.agency_idx?;
        self.agencies.get(index as usize)
    }

    pub fn route_by_trip_id(&self, trip_id: &str) -> Option<&Route> {
        let index = self.trip_by_id(trip_id)?.route_idx?;
        self.routes.get(index as usize)
    }

    pub fn service_by_trip_id(&self, trip_id: &str) -> Option<&Service> {
        let index = self.trip_by_id(trip_id)?.service_idx?;
        self.services.get(index as usize)
    }

    pub fn shape_by_trip_id(&self, trip_id: &str) -> Option<&Shape> {
        let index = self.trip_by_id(trip_id)?.shape_idx?;
        self.shapes.get(index as usize)
    }

    /// Returns all the stop times for a given trip, ordered by sequence.
    /// If no trip was found with the given id None is returned.
    pub fn stop_times_by_trip_id(&self, trip_id: &str) -> Option<&[StopTime]> {
        self.trip_by_id(trip_id)
            .map(|trip| trip.stop_times.as_slice())
    }

    pub fn parent_station_by_stop_id(&self, stop_id: &str) -> Option<&Stop> {
        let index = self.stop_by_id(stop_id)?.parent_station_idx?;
        self.stops.get(index as usize)
    }

    /// Returns the routes a fare's rules apply to, in rule order.
    pub fn routes_by_fare_id(&self, fare_id: &str) -> Option<Vec<&Route>> {
        let fare = self.fare_by_id(fare_id)?;
        Some(
            fare.route_idxs
                .iter()
                .filter_map(|index| self.routes.get(*index as usize))
                .collect(),
        )
    }

    /// Get all the transfers departing from a stop.
    pub fn transfers_by_stop_id(&self, stop_id: &str) -> Option<Vec<&Transfer>> {
        let stop = self.stop_by_id(stop_id)?;
        Some(
            self.transfers
                .iter()
                .filter(|transfer| transfer.from_stop_idx == Some(stop.index))
                .collect(),
        )
    }
}
