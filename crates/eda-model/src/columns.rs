//! Normalized column names used by the cleaning policy and the charts.

pub const DATE_AND_TIME: &str = "date_and_time";
pub const YEAR: &str = "year";
pub const MONTH: &str = "month";
pub const HOUR: &str = "hour";
pub const WEEKDAY: &str = "weekday";
pub const SEASON: &str = "season";

pub const NUMBER_OF_MOTOR_VEHICLES: &str = "number_of_motor_vehicles";
pub const NUMBER_OF_INJURIES: &str = "number_of_injuries";
pub const NUMBER_OF_FATALITIES: &str = "number_of_fatalities";

pub const HIT_AND_RUN: &str = "hit_and_run";
pub const COLLISION_TYPE_DESCRIPTION: &str = "collision_type_description";
pub const WEATHER_DESCRIPTION: &str = "weather_description";
pub const ILLUMINATION_DESCRIPTION: &str = "illumination_description";
pub const PRECINCT: &str = "precinct";

pub const LAT: &str = "lat";
pub const LONG: &str = "long";

/// Columns removed before imputation: administrative IDs, free-text
/// addresses, coded duplicates of description columns, projected coordinates.
pub const LOW_VALUE_COLUMNS: [&str; 16] = [
    "accident_number",
    "property_damage",
    "street_address",
    "city",
    "state",
    "harmfulcodes",
    "harmfuldescriptions",
    "objectid",
    "zip_code",
    "rpa",
    "weather",
    "illumination",
    "collision_type",
    "reporting_officer",
    "x",
    "y",
];

/// Columns that must contain no nulls once the missing-value policy ran.
pub const POLICY_COLUMNS: [&str; 8] = [
    NUMBER_OF_MOTOR_VEHICLES,
    NUMBER_OF_INJURIES,
    NUMBER_OF_FATALITIES,
    HIT_AND_RUN,
    COLLISION_TYPE_DESCRIPTION,
    WEATHER_DESCRIPTION,
    ILLUMINATION_DESCRIPTION,
    PRECINCT,
];
