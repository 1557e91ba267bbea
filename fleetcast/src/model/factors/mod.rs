mod factor_snapshot;
mod time_of_day;
mod traffic_level;
mod weather_condition;

pub use factor_snapshot::FactorSnapshot;
pub use time_of_day::TimeOfDay;
pub use traffic_level::TrafficLevel;
pub use weather_condition::WeatherCondition;
