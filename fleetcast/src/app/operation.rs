//! cli operations over the prediction subsystem. fleet definitions and
//! prediction records live in files standing in for the document store;
//! see the fleet file and records file formats in the crate README.
use super::{batch_ops, config_ops, simulate_ops, AppError};
use crate::model::factors::{TrafficLevel, WeatherCondition};
use crate::model::fleet::{BusId, RouteId, StopNumber};
use crate::model::record::PredictionId;
use crate::service::{generate_ops, query_ops, report_ops, TripUpdate};
use crate::store::{FleetFile, JsonFileStore, RecordFilter};
use chrono::{Local, NaiveDateTime};
use clap::Subcommand;
use geo::Point;
use std::path::Path;

#[derive(Debug, Clone, Subcommand)]
pub enum FleetOperation {
    /// generate one arrival prediction from a trip update
    Predict {
        /// fleet definition file (TOML or JSON)
        #[arg(long)]
        fleet_file: String,
        /// JSON file the prediction records live in
        #[arg(long, default_value_t = String::from("predictions.json"))]
        records_file: String,
        #[arg(long)]
        bus: String,
        #[arg(long)]
        route: String,
        /// stop number along the route
        #[arg(long)]
        stop: u32,
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lon: f64,
        #[arg(long, value_enum, default_value_t = TrafficLevel::Medium)]
        traffic: TrafficLevel,
        #[arg(long, value_enum, default_value_t = WeatherCondition::Clear)]
        weather: WeatherCondition,
        /// km/h; zero disables the speed adjustment
        #[arg(long, default_value_t = 0.0)]
        speed: f64,
        /// km remaining to the stop
        #[arg(long, default_value_t = 0.0)]
        distance: f64,
    },
    /// record the observed arrival for a prediction and score it
    Report {
        #[arg(long, default_value_t = String::from("predictions.json"))]
        records_file: String,
        /// id of the prediction to reconcile
        #[arg(long)]
        prediction: u64,
        /// observed arrival, `YYYY-mm-dd HH:MM:SS`; defaults to now
        #[arg(long)]
        arrived_at: Option<String>,
    },
    /// list upcoming arrivals for a stop, soonest first
    Next {
        #[arg(long, default_value_t = String::from("predictions.json"))]
        records_file: String,
        #[arg(long)]
        stop: u32,
        #[arg(long)]
        route: Option<String>,
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },
    /// aggregate prediction accuracy over a time window
    Analytics {
        #[arg(long, default_value_t = String::from("predictions.json"))]
        records_file: String,
        /// window start, `YYYY-mm-dd HH:MM:SS`, inclusive
        #[arg(long)]
        from: Option<String>,
        /// window end, `YYYY-mm-dd HH:MM:SS`, exclusive
        #[arg(long)]
        until: Option<String>,
        #[arg(long)]
        bus: Option<String>,
        #[arg(long)]
        route: Option<String>,
    },
    /// ingest a CSV of trip updates and append a prediction per row
    Batch {
        #[arg(long)]
        fleet_file: String,
        #[arg(long, default_value_t = String::from("predictions.json"))]
        records_file: String,
        /// trip update CSV
        #[arg(long)]
        input: String,
        #[arg(long, default_value_t = 1)]
        parallelism: usize,
    },
    /// generate a synthetic fleet and stream of trip updates, then predict
    Simulate {
        #[arg(long, default_value_t = 3)]
        buses: usize,
        #[arg(long, default_value_t = 2)]
        routes: usize,
        #[arg(long, default_value_t = 20)]
        updates: usize,
        /// persist the simulated records here; in-memory only when omitted
        #[arg(long)]
        records_file: Option<String>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// write the default predictor configuration as TOML
    InitConfig {
        #[arg(long, default_value_t = String::from("fleetcast.toml"))]
        output: String,
    },
}

impl FleetOperation {
    pub fn run(&self, config_file: Option<&str>) -> Result<(), AppError> {
        let config = config_ops::load_config(config_file)?;
        match self {
            FleetOperation::Predict {
                fleet_file,
                records_file,
                bus,
                route,
                stop,
                lat,
                lon,
                traffic,
                weather,
                speed,
                distance,
            } => {
                let fleet = FleetFile::from_path(Path::new(fleet_file))?;
                let mut store = JsonFileStore::open(Path::new(records_file))?;
                let update = TripUpdate {
                    bus_id: BusId::from(bus.as_str()),
                    route_id: RouteId::from(route.as_str()),
                    stop_number: StopNumber(*stop),
                    location: Point::new(*lon, *lat),
                    traffic: *traffic,
                    weather: *weather,
                    speed_kmh: *speed,
                    distance_to_stop_km: *distance,
                };
                let now = Local::now().naive_local();
                let record = generate_ops::generate(&mut store, &fleet, &config, &update, now)?;
                store.save()?;
                println!("{}", serde_json::to_string_pretty(&record)?);
                Ok(())
            }
            FleetOperation::Report {
                records_file,
                prediction,
                arrived_at,
            } => {
                let mut store = JsonFileStore::open(Path::new(records_file))?;
                let actual = match arrived_at {
                    Some(s) => parse_datetime(s)?,
                    None => Local::now().naive_local(),
                };
                let record =
                    report_ops::report_actual(&mut store, &PredictionId(*prediction), actual)?;
                store.save()?;
                println!("{}", serde_json::to_string_pretty(&record)?);
                Ok(())
            }
            FleetOperation::Next {
                records_file,
                stop,
                route,
                limit,
            } => {
                let store = JsonFileStore::open(Path::new(records_file))?;
                let now = Local::now().naive_local();
                let upcoming = query_ops::next_arrivals(
                    &store,
                    StopNumber(*stop),
                    route.as_deref().map(RouteId::from),
                    now,
                    *limit,
                );
                println!("{}", serde_json::to_string_pretty(&upcoming)?);
                Ok(())
            }
            FleetOperation::Analytics {
                records_file,
                from,
                until,
                bus,
                route,
            } => {
                let store = JsonFileStore::open(Path::new(records_file))?;
                let filter = RecordFilter {
                    created_from: from.as_deref().map(parse_datetime).transpose()?,
                    created_until: until.as_deref().map(parse_datetime).transpose()?,
                    bus_id: bus.as_deref().map(BusId::from),
                    route_id: route.as_deref().map(RouteId::from),
                    ..Default::default()
                };
                let report =
                    query_ops::accuracy_analytics(&store, &filter, config.accurate_threshold);
                println!("{}", serde_json::to_string_pretty(&report)?);
                Ok(())
            }
            FleetOperation::Batch {
                fleet_file,
                records_file,
                input,
                parallelism,
            } => batch_ops::run_batch(input, fleet_file, records_file, *parallelism, &config),
            FleetOperation::Simulate {
                buses,
                routes,
                updates,
                records_file,
                seed,
            } => simulate_ops::run_simulation(
                *buses,
                *routes,
                *updates,
                records_file.as_deref(),
                *seed,
                &config,
            ),
            FleetOperation::InitConfig { output } => config_ops::write_default_config(output),
        }
    }
}

fn parse_datetime(s: &str) -> Result<NaiveDateTime, AppError> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map_err(|e| {
        AppError::InvalidArgumentError(format!("'{s}' is not a `YYYY-mm-dd HH:MM:SS` datetime: {e}"))
    })
}
