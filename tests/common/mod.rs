#![allow(dead_code)]

use std::io::{Cursor, Write};
use zip::{CompressionMethod, ZipArchive, ZipWriter, write::SimpleFileOptions};

pub const AGENCY: &str = "agency_name,agency_url,agency_timezone\n\
                          Transit,https://example.com,Europe/Stockholm\n";

pub const STOPS: &str = "stop_id,stop_name,stop_lat,stop_lon,location_type,parent_station\n\
                         central,Central,59.33,18.06,1,\n\
                         central-a,Central A,59.33,18.06,0,central\n\
                         harbor,Harbor,59.31,18.09,0,\n";

pub const ROUTES: &str = "route_id,route_short_name,route_long_name,route_type\n\
                          r1,1,Central - Harbor,3\n";

pub const CALENDAR: &str =
    "service_id,monday,tuesday,wednesday,thursday,friday,saturday,sunday,start_date,end_date\n\
     weekdays,1,1,1,1,1,0,0,20240101,20241231\n";

pub const TRIPS: &str = "route_id,service_id,trip_id\n\
                         r1,weekdays,t1\n";

pub const STOP_TIMES: &str = "trip_id,arrival_time,departure_time,stop_id,stop_sequence\n\
                              t1,08:10:00,08:10:00,harbor,2\n\
                              t1,08:00:00,08:00:00,central-a,1\n";

/// Builds feed archives in memory, starting from a small valid feed.
#[derive(Debug, Clone)]
pub struct FeedBuilder {
    files: Vec<(&'static str, String)>,
}

impl FeedBuilder {
    pub fn minimal() -> Self {
        Self {
            files: vec![
                ("agency.txt", AGENCY.to_string()),
                ("stops.txt", STOPS.to_string()),
                ("routes.txt", ROUTES.to_string()),
                ("calendar.txt", CALENDAR.to_string()),
                ("trips.txt", TRIPS.to_string()),
                ("stop_times.txt", STOP_TIMES.to_string()),
            ],
        }
    }

    /// Adds `name`, replacing any file already stored under that name.
    pub fn with(mut self, name: &'static str, content: &str) -> Self {
        self = self.without(name);
        self.files.push((name, content.to_string()));
        self
    }

    pub fn without(mut self, name: &str) -> Self {
        self.files.retain(|(file, _)| *file != name);
        self
    }

    pub fn bytes(&self) -> Vec<u8> {
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in &self.files {
            writer.start_file(*name, options).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    pub fn archive(&self) -> ZipArchive<Cursor<Vec<u8>>> {
        ZipArchive::new(Cursor::new(self.bytes())).unwrap()
    }
}
