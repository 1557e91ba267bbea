use super::AppError;
use crate::model::factors::{TrafficLevel, WeatherCondition};
use crate::model::fleet::{BusId, RouteId, StopNumber};
use crate::model::prediction::PredictorConfig;
use crate::model::record::PredictionRecord;
use crate::service::{generate_ops, ServiceError, TripUpdate};
use crate::store::{FleetFile, JsonFileStore, PredictionStore};
use chrono::Local;
use geo::Point;
use kdam::tqdm;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// a row of the trip-update CSV: flat lat/lon columns, factor columns
/// falling back to their defaults when empty
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripUpdateRow {
    pub bus_id: String,
    pub route_id: String,
    pub stop_number: u32,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub traffic: Option<TrafficLevel>,
    #[serde(default)]
    pub weather: Option<WeatherCondition>,
    #[serde(default)]
    pub speed_kmh: f64,
    #[serde(default)]
    pub distance_to_stop_km: f64,
}

impl TripUpdateRow {
    pub fn into_update(self) -> TripUpdate {
        TripUpdate {
            bus_id: BusId(self.bus_id),
            route_id: RouteId(self.route_id),
            stop_number: StopNumber(self.stop_number),
            location: Point::new(self.longitude, self.latitude),
            traffic: self.traffic.unwrap_or_default(),
            weather: self.weather.unwrap_or_default(),
            speed_kmh: self.speed_kmh,
            distance_to_stop_km: self.distance_to_stop_km,
        }
    }
}

/// reads a trip-update CSV, computes a prediction per row in parallel,
/// and appends the records to the records file. rows that fail validation
/// or reference an unknown bus or route are skipped and counted.
pub fn run_batch(
    input: &str,
    fleet_file: &str,
    records_file: &str,
    parallelism: usize,
    config: &PredictorConfig,
) -> Result<(), AppError> {
    let fleet = FleetFile::from_path(Path::new(fleet_file))?;
    let mut store = JsonFileStore::open(Path::new(records_file))?;
    let rows = read_rows(input)?;
    log::info!("read {} trip updates from '{}'", rows.len(), input);

    let now = Local::now().naive_local();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(parallelism)
        .build()
        .map_err(|e| AppError::OtherError(format!("failed building thread pool: {e}")))?;

    // the pure computation runs in parallel; inserts stay sequential so the
    // store assigns ids in row order. generated records carry no actual
    // arrival, so they cannot shift the history mean mid-batch.
    let results: Vec<Result<PredictionRecord, ServiceError>> = pool.install(|| {
        rows.par_iter()
            .map(|row| generate_ops::build_record(&store, &fleet, config, &row.clone().into_update(), now))
            .collect()
    });

    let mut generated = 0usize;
    let mut skipped = 0usize;
    for result in tqdm!(results.into_iter(), desc = "persist predictions") {
        match result {
            Ok(record) => {
                store.insert(record)?;
                generated += 1;
            }
            Err(e) => {
                log::warn!("skipping trip update: {e}");
                skipped += 1;
            }
        }
    }
    store.save()?;
    log::info!("{generated} predictions written to '{records_file}', {skipped} rows skipped");
    Ok(())
}

/// reads rows from a trip-update CSV with headers matching the
/// `TripUpdateRow` field names
fn read_rows(input: &str) -> Result<Vec<TripUpdateRow>, AppError> {
    let reader = csv::ReaderBuilder::new()
        .from_path(Path::new(input))
        .map_err(|e| AppError::CsvReadError(format!("failure reading '{input}': {e}")))?;
    reader
        .into_deserialize::<TripUpdateRow>()
        .map(|r| {
            r.map_err(|e| AppError::CsvReadError(format!("failure reading trip update row: {e}")))
        })
        .collect::<Result<Vec<_>, AppError>>()
}
