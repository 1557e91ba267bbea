use super::AppError;
use crate::model::factors::{TrafficLevel, WeatherCondition};
use crate::model::fleet::{Bus, BusId, Route, RouteId, Stop, StopNumber};
use crate::model::prediction::PredictorConfig;
use crate::service::{generate_ops, query_ops, report_ops, TripUpdate};
use crate::store::{FleetFile, JsonFileStore, MemoryStore, PredictionStore, RecordFilter};
use chrono::{Duration, Local, NaiveDateTime};
use geo::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;

const STOPS_PER_ROUTE: u32 = 5;

const TRAFFIC_LEVELS: [TrafficLevel; 3] =
    [TrafficLevel::Low, TrafficLevel::Medium, TrafficLevel::High];
const WEATHER_CONDITIONS: [WeatherCondition; 4] = [
    WeatherCondition::Clear,
    WeatherCondition::Rainy,
    WeatherCondition::Snowy,
    WeatherCondition::Foggy,
];

/// generates a synthetic fleet and a stream of trip updates one minute
/// apart, runs each through the predictor, reconciles a third of them, and
/// prints the resulting accuracy report. intended for demos and smoke
/// testing against a realistic record set.
pub fn run_simulation(
    buses: usize,
    routes: usize,
    updates: usize,
    records_file: Option<&str>,
    seed: Option<u64>,
    config: &PredictorConfig,
) -> Result<(), AppError> {
    if buses == 0 || routes == 0 {
        return Err(AppError::InvalidArgumentError(String::from(
            "a simulation needs at least one bus and one route",
        )));
    }
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let fleet = synthetic_fleet(buses, routes, &mut rng);
    let start = Local::now().naive_local();

    match records_file {
        Some(path) => {
            let mut store = JsonFileStore::open(Path::new(path))?;
            simulate_into(&mut store, &fleet, updates, start, &mut rng, config)?;
            store.save()?;
            log::info!("simulated records written to '{path}'");
            Ok(())
        }
        None => {
            let mut store = MemoryStore::new();
            simulate_into(&mut store, &fleet, updates, start, &mut rng, config)
        }
    }
}

fn simulate_into(
    store: &mut impl PredictionStore,
    fleet: &FleetFile,
    updates: usize,
    start: NaiveDateTime,
    rng: &mut StdRng,
    config: &PredictorConfig,
) -> Result<(), AppError> {
    for i in 0..updates {
        let bus = &fleet.buses[rng.random_range(0..fleet.buses.len())];
        let route = &fleet.routes[rng.random_range(0..fleet.routes.len())];
        let stop = &route.stops[rng.random_range(0..route.stops.len())];
        let update = TripUpdate {
            bus_id: bus.id.clone(),
            route_id: route.id.clone(),
            stop_number: stop.number,
            location: jittered_point(rng),
            traffic: TRAFFIC_LEVELS[rng.random_range(0..TRAFFIC_LEVELS.len())],
            weather: WEATHER_CONDITIONS[rng.random_range(0..WEATHER_CONDITIONS.len())],
            speed_kmh: rng.random_range(0.0..120.0),
            distance_to_stop_km: rng.random_range(0.0..20.0),
        };
        let now = start + Duration::minutes(i as i64);
        let record = generate_ops::generate(store, fleet, config, &update, now)?;

        // reconcile a third of the stream so analytics has scored records
        if i % 3 == 0 {
            let deviation = Duration::minutes(rng.random_range(-12..=12));
            report_ops::report_actual(store, &record.id, record.predicted_arrival + deviation)?;
        }
    }

    let report = query_ops::accuracy_analytics(store, &RecordFilter::default(), config.accurate_threshold);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn synthetic_fleet(buses: usize, routes: usize, rng: &mut StdRng) -> FleetFile {
    let buses = (1..=buses)
        .map(|i| Bus {
            id: BusId(format!("bus-{i}")),
            number: format!("{i}"),
            capacity: Some(40),
        })
        .collect();
    let routes = (1..=routes)
        .map(|i| Route {
            id: RouteId(format!("route-{i}")),
            name: format!("Route {i}"),
            stops: (1..=STOPS_PER_ROUTE)
                .map(|n| Stop {
                    number: StopNumber(n),
                    name: format!("Stop {n}"),
                    location: jittered_point(rng),
                })
                .collect(),
        })
        .collect();
    FleetFile { buses, routes }
}

/// a point scattered around the city center used for synthetic telemetry
fn jittered_point(rng: &mut StdRng) -> Point<f64> {
    Point::new(
        -104.99 + rng.random_range(-0.1..0.1),
        39.74 + rng.random_range(-0.1..0.1),
    )
}
