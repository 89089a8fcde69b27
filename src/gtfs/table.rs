/// A recognized column of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub required: bool,
}

const fn required(name: &'static str) -> Field {
    Field {
        name,
        required: true,
    }
}

const fn optional(name: &'static str) -> Field {
    Field {
        name,
        required: false,
    }
}

/// Every table of a feed that is read, in load order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Agency,
    Stops,
    Routes,
    Calendar,
    CalendarDates,
    Shapes,
    Trips,
    StopTimes,
    FareAttributes,
    FareRules,
    Frequencies,
    Transfers,
    FeedInfo,
    Translations,
}

impl Table {
    pub const ALL: [Table; 14] = [
        Table::Agency,
        Table::Stops,
        Table::Routes,
        Table::Calendar,
        Table::CalendarDates,
        Table::Shapes,
        Table::Trips,
        Table::StopTimes,
        Table::FareAttributes,
        Table::FareRules,
        Table::Frequencies,
        Table::Transfers,
        Table::FeedInfo,
        Table::Translations,
    ];

    pub const fn file_name(self) -> &'static str {
        match self {
            Table::Agency => "agency.txt",
            Table::Stops => "stops.txt",
            Table::Routes => "routes.txt",
            Table::Calendar => "calendar.txt",
            Table::CalendarDates => "calendar_dates.txt",
            Table::Shapes => "shapes.txt",
            Table::Trips => "trips.txt",
            Table::StopTimes => "stop_times.txt",
            Table::FareAttributes => "fare_attributes.txt",
            Table::FareRules => "fare_rules.txt",
            Table::Frequencies => "frequencies.txt",
            Table::Transfers => "transfers.txt",
            Table::FeedInfo => "feed_info.txt",
            Table::Translations => "translations.txt",
        }
    }

    /// Tables whose absence aborts a load before any table is read.
    /// Calendar and calendar dates are checked separately: one of the two must exist.
    pub const fn is_required(self) -> bool {
        matches!(
            self,
            Table::Agency | Table::Stops | Table::Routes | Table::Trips | Table::StopTimes
        )
    }

    pub const fn fields(self) -> &'static [Field] {
        match self {
            Table::Agency => AGENCY_FIELDS,
            Table::Stops => STOP_FIELDS,
            Table::Routes => ROUTE_FIELDS,
            Table::Calendar => CALENDAR_FIELDS,
            Table::CalendarDates => CALENDAR_DATE_FIELDS,
            Table::Shapes => SHAPE_FIELDS,
            Table::Trips => TRIP_FIELDS,
            Table::StopTimes => STOP_TIME_FIELDS,
            Table::FareAttributes => FARE_FIELDS,
            Table::FareRules => FARE_RULE_FIELDS,
            Table::Frequencies => FREQUENCY_FIELDS,
            Table::Transfers => TRANSFER_FIELDS,
            Table::FeedInfo => FEED_INFO_FIELDS,
            Table::Translations => TRANSLATION_FIELDS,
        }
    }
}

pub const AGENCY_FIELDS: &[Field] = &[
    optional("agency_id"),
    required("agency_name"),
    required("agency_url"),
    required("agency_timezone"),
    optional("agency_lang"),
    optional("agency_phone"),
    optional("agency_fare_url"),
    optional("agency_email"),
];

pub const STOP_FIELDS: &[Field] = &[
    required("stop_id"),
    optional("stop_code"),
    required("stop_name"),
    optional("stop_desc"),
    required("stop_lat"),
    required("stop_lon"),
    optional("zone_id"),
    optional("stop_url"),
    optional("location_type"),
    optional("parent_station"),
    optional("stop_timezone"),
    optional("wheelchair_boarding"),
    // Extensions
    optional("platform_code"),
    optional("vehicle_type"),
];

pub const ROUTE_FIELDS: &[Field] = &[
    required("route_id"),
    optional("agency_id"),
    required("route_short_name"),
    required("route_long_name"),
    optional("route_desc"),
    required("route_type"),
    optional("route_url"),
    optional("route_color"),
    optional("route_text_color"),
    optional("route_sort_order"),
];

pub const CALENDAR_FIELDS: &[Field] = &[
    required("service_id"),
    required("monday"),
    required("tuesday"),
    required("wednesday"),
    required("thursday"),
    required("friday"),
    required("saturday"),
    required("sunday"),
    required("start_date"),
    required("end_date"),
];

pub const CALENDAR_DATE_FIELDS: &[Field] = &[
    required("service_id"),
    required("date"),
    required("exception_type"),
];

pub const SHAPE_FIELDS: &[Field] = &[
    required("shape_id"),
    required("shape_pt_lat"),
    required("shape_pt_lon"),
    required("shape_pt_sequence"),
    optional("shape_dist_traveled"),
];

pub const TRIP_FIELDS: &[Field] = &[
    required("route_id"),
    required("service_id"),
    required("trip_id"),
    optional("trip_headsign"),
    optional("trip_short_name"),
    optional("direction_id"),
    optional("block_id"),
    optional("shape_id"),
    optional("wheelchair_accessible"),
    optional("bikes_allowed"),
    // Extensions
    optional("exceptional"),
];

pub const STOP_TIME_FIELDS: &[Field] = &[
    required("trip_id"),
    required("arrival_time"),
    required("departure_time"),
    required("stop_id"),
    required("stop_sequence"),
    optional("stop_headsign"),
    optional("pickup_type"),
    optional("drop_off_type"),
    optional("shape_dist_traveled"),
    optional("timepoint"),
];

pub const FARE_FIELDS: &[Field] = &[
    required("fare_id"),
    required("price"),
    required("currency_type"),
    required("payment_method"),
    required("transfers"),
    optional("transfer_duration"),
];

pub const FARE_RULE_FIELDS: &[Field] = &[
    required("fare_id"),
    optional("route_id"),
    optional("origin_id"),
    optional("destination_id"),
    optional("contains_id"),
];

pub const FREQUENCY_FIELDS: &[Field] = &[
    required("trip_id"),
    required("start_time"),
    required("end_time"),
    required("headway_secs"),
    optional("exact_times"),
];

pub const TRANSFER_FIELDS: &[Field] = &[
    required("from_stop_id"),
    required("to_stop_id"),
    required("transfer_type"),
    optional("min_transfer_time"),
];

pub const FEED_INFO_FIELDS: &[Field] = &[
    required("feed_publisher_name"),
    required("feed_publisher_url"),
    required("feed_lang"),
    optional("feed_start_date"),
    optional("feed_end_date"),
    optional("feed_version"),
    optional("feed_contact_email"),
    optional("feed_contact_url"),
];

pub const TRANSLATION_FIELDS: &[Field] = &[
    required("trans_id"),
    required("lang"),
    required("translation"),
];
