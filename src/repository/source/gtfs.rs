use crate::{
    gtfs::{
        self, Gtfs, Row, Table,
        parse::{
            parse_bool, parse_enum, parse_f64, parse_optional_bool, parse_optional_f64,
            parse_required_u64, parse_u64,
        },
    },
    repository::{
        Agency, ExceptionType, Fare, FeedInfo, Frequency, IdToIndex, LocationType, Repository,
        Route, Service, Shape, ShapePoint, Stop, StopTime, Transfer, Translation, Trip,
    },
    shared::Coordinate,
};
use std::{
    collections::HashMap,
    io::{Read, Seek},
    sync::Arc,
    time::Instant,
};
use tracing::{debug, warn};

const DEFAULT_ROUTE_COLOR: &str = "FFFFFF";
const DEFAULT_ROUTE_TEXT_COLOR: &str = "000000";

type Processor = fn(&mut Repository, Vec<Row>) -> Result<(), gtfs::Error>;

impl Repository {
    /// Loads every table of `gtfs` into this repository, replacing its contents.
    ///
    /// Tables are read one at a time in dependency order. On failure the
    /// entities of the tables loaded so far stay in place, which makes a
    /// partially loaded repository available for inspection.
    pub fn load<R: Read + Seek>(&mut self, gtfs: &mut Gtfs<R>) -> Result<(), gtfs::Error> {
        *self = Self {
            config: *gtfs.config(),
            ..Default::default()
        };
        let now = Instant::now();

        if let Some(table) = Table::ALL
            .into_iter()
            .find(|table| table.is_required() && !gtfs.contains(*table))
        {
            return Err(gtfs::Error::MissingFile(table.file_name()));
        }

        self.load_table(gtfs, Table::Agency, Self::load_agencies)?;
        self.load_table(gtfs, Table::Stops, Self::load_stops)?;
        self.load_table(gtfs, Table::Routes, Self::load_routes)?;

        let has_calendar = gtfs.contains(Table::Calendar);
        let has_calendar_dates = gtfs.contains(Table::CalendarDates);
        if !has_calendar && !has_calendar_dates {
            return Err(gtfs::Error::MissingCalendar);
        }
        if has_calendar {
            self.load_table(gtfs, Table::Calendar, Self::load_services)?;
        }
        if has_calendar_dates {
            self.load_table(gtfs, Table::CalendarDates, Self::load_service_dates)?;
        }

        if gtfs.contains(Table::Shapes) {
            self.load_table(gtfs, Table::Shapes, Self::load_shapes)?;
        }
        self.load_table(gtfs, Table::Trips, Self::load_trips)?;
        self.load_table(gtfs, Table::StopTimes, Self::load_stop_times)?;

        if gtfs.contains(Table::FareAttributes) {
            self.load_table(gtfs, Table::FareAttributes, Self::load_fares)?;
            if gtfs.contains(Table::FareRules) {
                self.load_table(gtfs, Table::FareRules, Self::load_fare_rules)?;
            }
        }

        let optional: [(Table, Processor); 4] = [
            (Table::Frequencies, Self::load_frequencies),
            (Table::Transfers, Self::load_transfers),
            (Table::FeedInfo, Self::load_feed_info),
            (Table::Translations, Self::load_translations),
        ];
        for (table, processor) in optional {
            if gtfs.contains(table) {
                self.load_table(gtfs, table, processor)?;
            }
        }

        debug!("Loading GTFS took {:?}", now.elapsed());
        Ok(())
    }

    fn load_table<R: Read + Seek>(
        &mut self,
        gtfs: &mut Gtfs<R>,
        table: Table,
        processor: Processor,
    ) -> Result<(), gtfs::Error> {
        let file = table.file_name();
        debug!("Loading {file}...");
        let now = Instant::now();
        let result = gtfs
            .read_table(table)
            .and_then(|rows| processor(self, rows));
        debug!("Loading {file} took {:?}", now.elapsed());
        result.map_err(|source| gtfs::Error::Table {
            file,
            source: Box::new(source),
        })
    }

    /// Resolves a reference that may be dropped when parsing leniently.
    fn resolve(
        &self,
        lookup: &IdToIndex,
        field: &'static str,
        id: &str,
    ) -> Result<Option<u32>, gtfs::Error> {
        match lookup.get(id) {
            Some(index) => Ok(Some(*index)),
            None if self.config.strict => Err(gtfs::Error::unknown(field, id)),
            None => {
                warn!("Ignoring unknown {field} {id:?}");
                Ok(None)
            }
        }
    }

    fn load_agencies(&mut self, rows: Vec<Row>) -> Result<(), gtfs::Error> {
        let mut missing_id = false;
        for row in rows {
            let agency = Agency {
                index: self.agencies.len() as u32,
                id: row.value("agency_id").into(),
                name: row.value("agency_name").into(),
                url: row.value("agency_url").into(),
                timezone: row.value("agency_timezone").into(),
                lang: row.value("agency_lang").into(),
                phone: row.value("agency_phone").into(),
                fare_url: row.value("agency_fare_url").into(),
                email: row.value("agency_email").into(),
            };
            missing_id |= agency.id.is_empty();
            self.agency_lookup.insert(agency.id.clone(), agency.index);
            self.agencies.push(agency);
        }

        if missing_id && self.agencies.len() > 1 {
            return Err(gtfs::Error::AgencyIdRequired);
        }
        Ok(())
    }

    fn load_stops(&mut self, rows: Vec<Row>) -> Result<(), gtfs::Error> {
        let mut parents: Vec<(u32, String)> = Vec::new();
        for row in rows {
            let coordinate = Coordinate::new(
                parse_f64("stop_lat", row.value("stop_lat"))?,
                parse_f64("stop_lon", row.value("stop_lon"))?,
            );
            let vehicle_type = match row.value("vehicle_type") {
                "" => None,
                value => Some(parse_enum("vehicle_type", value)?),
            };
            let stop = Stop {
                index: self.stops.len() as u32,
                id: row.value("stop_id").into(),
                code: row.value("stop_code").into(),
                name: row.value("stop_name").into(),
                description: row.value("stop_desc").into(),
                coordinate,
                zone_id: row.value("zone_id").into(),
                url: row.value("stop_url").into(),
                location_type: parse_enum("location_type", row.value("location_type"))?,
                parent_station_idx: None,
                timezone: row.value("stop_timezone").into(),
                wheelchair_boarding: row.value("wheelchair_boarding").into(),
                platform_code: row.value("platform_code").into(),
                vehicle_type,
            };
            match row.value("parent_station") {
                "" => {}
                parent => parents.push((stop.index, parent.to_string())),
            }
            self.stop_lookup.insert(stop.id.clone(), stop.index);
            self.stops.push(stop);
        }

        // Parents may appear after their children, so they are linked once every stop exists.
        for (index, parent_id) in parents {
            let stop = &self.stops[index as usize];
            if stop.location_type != LocationType::Stop {
                return Err(gtfs::Error::InvalidParentStation {
                    stop_id: stop.id.to_string(),
                    parent_id,
                });
            }
            let parent = self.resolve(&self.stop_lookup, "parent_station", &parent_id)?;
            self.stops[index as usize].parent_station_idx = parent;
        }
        Ok(())
    }

    fn load_routes(&mut self, rows: Vec<Row>) -> Result<(), gtfs::Error> {
        for row in rows {
            let id = row.value("route_id");
            let agency_id = row.value("agency_id");
            let agency_idx = match self
                .agency_by_id_or_default(agency_id)
                .map(|agency| agency.index)
            {
                Ok(index) => Some(index),
                Err(gtfs::Error::UnknownReference { .. }) if !self.config.strict => {
                    warn!("Route {id:?} has unknown agency_id {agency_id:?}");
                    None
                }
                Err(err) => return Err(err),
            };

            let route = Route {
                index: self.routes.len() as u32,
                id: id.into(),
                agency_idx,
                short_name: row.value("route_short_name").into(),
                long_name: row.value("route_long_name").into(),
                description: row.value("route_desc").into(),
                route_type: parse_enum("route_type", row.value("route_type"))?,
                url: row.value("route_url").into(),
                color: color_or(row.value("route_color"), DEFAULT_ROUTE_COLOR),
                text_color: color_or(row.value("route_text_color"), DEFAULT_ROUTE_TEXT_COLOR),
                sort_order: parse_u64("route_sort_order", row.value("route_sort_order"))?,
            };
            self.route_lookup.insert(route.id.clone(), route.index);
            self.routes.push(route);
        }
        Ok(())
    }

    fn load_services(&mut self, rows: Vec<Row>) -> Result<(), gtfs::Error> {
        for row in rows {
            let service = Service {
                index: self.services.len() as u32,
                id: row.value("service_id").into(),
                monday: parse_bool("monday", row.value("monday"))?,
                tuesday: parse_bool("tuesday", row.value("tuesday"))?,
                wednesday: parse_bool("wednesday", row.value("wednesday"))?,
                thursday: parse_bool("thursday", row.value("thursday"))?,
                friday: parse_bool("friday", row.value("friday"))?,
                saturday: parse_bool("saturday", row.value("saturday"))?,
                sunday: parse_bool("sunday", row.value("sunday"))?,
                start_date: row.value("start_date").into(),
                end_date: row.value("end_date").into(),
                added_dates: Vec::new(),
                removed_dates: Vec::new(),
            };
            self.service_lookup.insert(service.id.clone(), service.index);
            self.services.push(service);
        }
        Ok(())
    }

    /// Applies calendar exceptions, creating services that only exist in `calendar_dates.txt`.
    fn load_service_dates(&mut self, rows: Vec<Row>) -> Result<(), gtfs::Error> {
        for row in rows {
            let id = row.value("service_id");
            let exception_type = parse_enum("exception_type", row.value("exception_type"))?;
            let index = match self.service_lookup.get(id) {
                Some(index) => *index,
                None => {
                    let service = Service {
                        index: self.services.len() as u32,
                        id: id.into(),
                        ..Default::default()
                    };
                    self.service_lookup.insert(service.id.clone(), service.index);
                    self.services.push(service);
                    self.services.len() as u32 - 1
                }
            };

            let service = &mut self.services[index as usize];
            let date: Arc<str> = row.value("date").into();
            match exception_type {
                ExceptionType::Added => service.added_dates.push(date),
                ExceptionType::Removed => service.removed_dates.push(date),
            }
        }
        Ok(())
    }

    fn load_shapes(&mut self, rows: Vec<Row>) -> Result<(), gtfs::Error> {
        let mut shape_lookup: IdToIndex = HashMap::new();
        let mut shapes: Vec<Shape> = Vec::new();
        for row in rows {
            let point = ShapePoint {
                coordinate: Coordinate::new(
                    parse_f64("shape_pt_lat", row.value("shape_pt_lat"))?,
                    parse_f64("shape_pt_lon", row.value("shape_pt_lon"))?,
                ),
                sequence: parse_required_u64("shape_pt_sequence", row.value("shape_pt_sequence"))?,
                distance: parse_optional_f64(
                    "shape_dist_traveled",
                    row.value("shape_dist_traveled"),
                )?,
            };

            let id = row.value("shape_id");
            let index = match shape_lookup.get(id) {
                Some(index) => *index,
                None => {
                    let index = shapes.len() as u32;
                    let id: Arc<str> = id.into();
                    shape_lookup.insert(id.clone(), index);
                    shapes.push(Shape {
                        index,
                        id,
                        points: Vec::new(),
                    });
                    index
                }
            };
            shapes[index as usize].points.push(point);
        }

        for shape in shapes.iter_mut() {
            shape.points.sort_by_key(|point| point.sequence);
        }
        self.shapes = shapes;
        self.shape_lookup = shape_lookup;
        Ok(())
    }

    fn load_trips(&mut self, rows: Vec<Row>) -> Result<(), gtfs::Error> {
        for row in rows {
            let shape_idx = match row.value("shape_id") {
                "" => None,
                id => self.resolve(&self.shape_lookup, "shape_id", id)?,
            };
            let trip = Trip {
                index: self.trips.len() as u32,
                id: row.value("trip_id").into(),
                route_idx: self.resolve(&self.route_lookup, "route_id", row.value("route_id"))?,
                service_idx: self.resolve(
                    &self.service_lookup,
                    "service_id",
                    row.value("service_id"),
                )?,
                shape_idx,
                headsign: row.value("trip_headsign").into(),
                short_name: row.value("trip_short_name").into(),
                direction_id: row.value("direction_id").into(),
                block_id: row.value("block_id").into(),
                wheelchair_accessible: parse_enum(
                    "wheelchair_accessible",
                    row.value("wheelchair_accessible"),
                )?,
                bikes_allowed: parse_enum("bikes_allowed", row.value("bikes_allowed"))?,
                exceptional: parse_optional_bool("exceptional", row.value("exceptional"))?,
                stop_times: Vec::new(),
                frequency: None,
            };
            self.trip_lookup.insert(trip.id.clone(), trip.index);
            self.trips.push(trip);
        }
        Ok(())
    }

    /// Groups stop times by trip over the whole table before attaching them,
    /// since a feed is free to interleave trips.
    fn load_stop_times(&mut self, rows: Vec<Row>) -> Result<(), gtfs::Error> {
        let mut trip_to_stop_times: HashMap<&str, Vec<StopTime>> = HashMap::new();
        for row in rows.iter() {
            let stop_time = StopTime {
                stop_idx: self.stop_lookup.get(row.value("stop_id")).copied(),
                arrival_time: row.value("arrival_time").into(),
                departure_time: row.value("departure_time").into(),
                sequence: parse_required_u64("stop_sequence", row.value("stop_sequence"))?,
                headsign: row.value("stop_headsign").into(),
                pickup_type: parse_enum("pickup_type", row.value("pickup_type"))?,
                drop_off_type: parse_enum("drop_off_type", row.value("drop_off_type"))?,
                distance: parse_optional_f64(
                    "shape_dist_traveled",
                    row.value("shape_dist_traveled"),
                )?,
                timepoint: parse_enum("timepoint", row.value("timepoint"))?,
            };
            trip_to_stop_times
                .entry(row.value("trip_id"))
                .or_default()
                .push(stop_time);
        }

        for stop_times in trip_to_stop_times.values_mut() {
            stop_times.sort_by_key(|stop_time| stop_time.sequence);
        }
        // A trip id listed twice in trips.txt gets the same stop times on every copy.
        for trip in self.trips.iter_mut() {
            if let Some(stop_times) = trip_to_stop_times.get(trip.id.as_ref()) {
                trip.stop_times = stop_times.clone();
            }
        }
        let dropped: usize = trip_to_stop_times
            .iter()
            .filter(|(trip_id, _)| !self.trip_lookup.contains_key(**trip_id))
            .map(|(_, stop_times)| stop_times.len())
            .sum();
        if dropped > 0 {
            debug!("Dropped {dropped} stop times of unknown trips");
        }
        Ok(())
    }

    fn load_fares(&mut self, rows: Vec<Row>) -> Result<(), gtfs::Error> {
        for row in rows {
            let fare = Fare {
                index: self.fares.len() as u32,
                id: row.value("fare_id").into(),
                price: row.value("price").into(),
                currency: row.value("currency_type").into(),
                payment_method: parse_enum("payment_method", row.value("payment_method"))?,
                transfers: parse_u64("transfers", row.value("transfers"))?,
                transfer_duration: parse_u64("transfer_duration", row.value("transfer_duration"))?,
                route_idxs: Vec::new(),
                origin_zones: Vec::new(),
                destination_zones: Vec::new(),
                contains_zones: Vec::new(),
            };
            self.fare_lookup.insert(fare.id.clone(), fare.index);
            self.fares.push(fare);
        }
        Ok(())
    }

    /// Attaches routes and zones to fares. Rules are never downgraded: an
    /// unknown fare or route fails in both modes.
    fn load_fare_rules(&mut self, rows: Vec<Row>) -> Result<(), gtfs::Error> {
        for row in rows {
            let fare_id = row.value("fare_id");
            let fare_idx = *self
                .fare_lookup
                .get(fare_id)
                .ok_or_else(|| gtfs::Error::unknown("fare_id", fare_id))?;
            let route_idx = match row.value("route_id") {
                "" => None,
                route_id => Some(
                    *self
                        .route_lookup
                        .get(route_id)
                        .ok_or_else(|| gtfs::Error::unknown("route_id", route_id))?,
                ),
            };

            let fare = &mut self.fares[fare_idx as usize];
            fare.route_idxs.extend(route_idx);
            push_zone(&mut fare.origin_zones, row.value("origin_id"));
            push_zone(&mut fare.destination_zones, row.value("destination_id"));
            push_zone(&mut fare.contains_zones, row.value("contains_id"));
        }
        Ok(())
    }

    /// Switches trips to headway mode. A trip listed more than once keeps its last row.
    fn load_frequencies(&mut self, rows: Vec<Row>) -> Result<(), gtfs::Error> {
        for row in rows {
            let trip_id = row.value("trip_id");
            let trip_idx = *self
                .trip_lookup
                .get(trip_id)
                .ok_or_else(|| gtfs::Error::unknown("trip_id", trip_id))?;
            let frequency = Frequency {
                start_time: row.value("start_time").into(),
                end_time: row.value("end_time").into(),
                headway_secs: parse_required_u64("headway_secs", row.value("headway_secs"))?,
                exact_times: parse_optional_bool("exact_times", row.value("exact_times"))?,
            };
            self.trips[trip_idx as usize].frequency = Some(frequency);
        }
        Ok(())
    }

    fn load_transfers(&mut self, rows: Vec<Row>) -> Result<(), gtfs::Error> {
        for row in rows {
            let transfer = Transfer {
                from_stop_idx: self.stop_lookup.get(row.value("from_stop_id")).copied(),
                to_stop_idx: self.stop_lookup.get(row.value("to_stop_id")).copied(),
                transfer_type: parse_enum("transfer_type", row.value("transfer_type"))?,
                min_transfer_time: parse_u64(
                    "min_transfer_time",
                    row.value("min_transfer_time"),
                )?,
            };
            self.transfers.push(transfer);
        }
        Ok(())
    }

    fn load_feed_info(&mut self, rows: Vec<Row>) -> Result<(), gtfs::Error> {
        let [row] = rows.as_slice() else {
            return Err(gtfs::Error::RowCount(rows.len()));
        };
        self.feed_info = Some(FeedInfo {
            publisher_name: row.value("feed_publisher_name").into(),
            publisher_url: row.value("feed_publisher_url").into(),
            lang: row.value("feed_lang").into(),
            start_date: row.value("feed_start_date").into(),
            end_date: row.value("feed_end_date").into(),
            version: row.value("feed_version").into(),
            contact_email: row.value("feed_contact_email").into(),
            contact_url: row.value("feed_contact_url").into(),
        });
        Ok(())
    }

    fn load_translations(&mut self, rows: Vec<Row>) -> Result<(), gtfs::Error> {
        for row in rows {
            let translation = Translation {
                id: row.value("trans_id").into(),
                lang: row.value("lang").into(),
                translation: row.value("translation").into(),
            };
            self.translation_lookup
                .entry(translation.id.clone())
                .or_default()
                .insert(translation.lang.clone(), self.translations.len() as u32);
            self.translations.push(translation);
        }
        Ok(())
    }
}

fn color_or(value: &str, default: &'static str) -> Arc<str> {
    match value {
        "" => default.into(),
        color => color.into(),
    }
}

fn push_zone(zones: &mut Vec<Arc<str>>, zone: &str) {
    if !zone.is_empty() {
        zones.push(zone.into());
    }
}
