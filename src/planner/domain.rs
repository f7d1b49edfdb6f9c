use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier wrapper for catalog destinations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DestinationId(pub String);

impl DestinationId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DestinationId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for travelers tracked in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TravelerId(pub String);

impl TravelerId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TravelerId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for TravelerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Calendar month, serialized with the three-letter lowercase code used by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            Month::Jan => "jan",
            Month::Feb => "feb",
            Month::Mar => "mar",
            Month::Apr => "apr",
            Month::May => "may",
            Month::Jun => "jun",
            Month::Jul => "jul",
            Month::Aug => "aug",
            Month::Sep => "sep",
            Month::Oct => "oct",
            Month::Nov => "nov",
            Month::Dec => "dec",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Month::Jan => "January",
            Month::Feb => "February",
            Month::Mar => "March",
            Month::Apr => "April",
            Month::May => "May",
            Month::Jun => "June",
            Month::Jul => "July",
            Month::Aug => "August",
            Month::Sep => "September",
            Month::Oct => "October",
            Month::Nov => "November",
            Month::Dec => "December",
        }
    }

    pub const fn short(self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Accepts the three-letter code in any case.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|month| month.code().eq_ignore_ascii_case(raw))
    }
}

impl From<chrono::Month> for Month {
    fn from(value: chrono::Month) -> Self {
        match value {
            chrono::Month::January => Month::Jan,
            chrono::Month::February => Month::Feb,
            chrono::Month::March => Month::Mar,
            chrono::Month::April => Month::Apr,
            chrono::Month::May => Month::May,
            chrono::Month::June => Month::Jun,
            chrono::Month::July => Month::Jul,
            chrono::Month::August => Month::Aug,
            chrono::Month::September => Month::Sep,
            chrono::Month::October => Month::Oct,
            chrono::Month::November => Month::Nov,
            chrono::Month::December => Month::Dec,
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A value for every calendar month. Deserialization rejects tables with a missing month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthTable<T> {
    pub jan: T,
    pub feb: T,
    pub mar: T,
    pub apr: T,
    pub may: T,
    pub jun: T,
    pub jul: T,
    pub aug: T,
    pub sep: T,
    pub oct: T,
    pub nov: T,
    pub dec: T,
}

impl<T: Copy> MonthTable<T> {
    pub fn uniform(value: T) -> Self {
        Self::from_fn(|_| value)
    }

    pub fn from_fn(mut f: impl FnMut(Month) -> T) -> Self {
        Self {
            jan: f(Month::Jan),
            feb: f(Month::Feb),
            mar: f(Month::Mar),
            apr: f(Month::Apr),
            may: f(Month::May),
            jun: f(Month::Jun),
            jul: f(Month::Jul),
            aug: f(Month::Aug),
            sep: f(Month::Sep),
            oct: f(Month::Oct),
            nov: f(Month::Nov),
            dec: f(Month::Dec),
        }
    }

    pub fn get(&self, month: Month) -> T {
        match month {
            Month::Jan => self.jan,
            Month::Feb => self.feb,
            Month::Mar => self.mar,
            Month::Apr => self.apr,
            Month::May => self.may,
            Month::Jun => self.jun,
            Month::Jul => self.jul,
            Month::Aug => self.aug,
            Month::Sep => self.sep,
            Month::Oct => self.oct,
            Month::Nov => self.nov,
            Month::Dec => self.dec,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Month, T)> + '_ {
        Month::ALL.into_iter().map(move |month| (month, self.get(month)))
    }
}

/// Destination attributes that can be "a bit of both".
pub trait Blend: Copy + PartialEq {
    fn is_mix(self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Climate {
    Hot,
    Cold,
    Temperate,
    Mix,
}

impl Climate {
    pub const fn code(self) -> &'static str {
        match self {
            Climate::Hot => "Hot",
            Climate::Cold => "Cold",
            Climate::Temperate => "Temperate",
            Climate::Mix => "Mix",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Climate::Hot => "Hot / Tropical",
            Climate::Cold => "Cold / Alpine",
            Climate::Temperate => "Temperate",
            Climate::Mix => "Mixed Climate",
        }
    }
}

impl Blend for Climate {
    fn is_mix(self) -> bool {
        self == Climate::Mix
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TripType {
    Urban,
    Nature,
    Mix,
}

impl TripType {
    pub const fn code(self) -> &'static str {
        match self {
            TripType::Urban => "Urban",
            TripType::Nature => "Nature",
            TripType::Mix => "Mix",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            TripType::Urban => "Urban / City",
            TripType::Nature => "Nature / Outdoors",
            TripType::Mix => "Mix of Both",
        }
    }
}

impl Blend for TripType {
    fn is_mix(self) -> bool {
        self == TripType::Mix
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "North America")]
    NorthAmerica,
    #[serde(rename = "Central America")]
    CentralAmerica,
    #[serde(rename = "South America")]
    SouthAmerica,
    Caribbean,
    #[serde(rename = "Western Europe")]
    WesternEurope,
    #[serde(rename = "Eastern Europe")]
    EasternEurope,
    #[serde(rename = "Northern Europe")]
    NorthernEurope,
    #[serde(rename = "Southern Europe")]
    SouthernEurope,
    #[serde(rename = "Middle East")]
    MiddleEast,
    #[serde(rename = "Central Asia")]
    CentralAsia,
    #[serde(rename = "South Asia")]
    SouthAsia,
    #[serde(rename = "Southeast Asia")]
    SoutheastAsia,
    #[serde(rename = "East Asia")]
    EastAsia,
    Africa,
    Oceania,
}

impl Region {
    pub const ALL: [Region; 15] = [
        Region::NorthAmerica,
        Region::CentralAmerica,
        Region::SouthAmerica,
        Region::Caribbean,
        Region::WesternEurope,
        Region::EasternEurope,
        Region::NorthernEurope,
        Region::SouthernEurope,
        Region::MiddleEast,
        Region::CentralAsia,
        Region::SouthAsia,
        Region::SoutheastAsia,
        Region::EastAsia,
        Region::Africa,
        Region::Oceania,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Region::NorthAmerica => "North America",
            Region::CentralAmerica => "Central America",
            Region::SouthAmerica => "South America",
            Region::Caribbean => "Caribbean",
            Region::WesternEurope => "Western Europe",
            Region::EasternEurope => "Eastern Europe",
            Region::NorthernEurope => "Northern Europe",
            Region::SouthernEurope => "Southern Europe",
            Region::MiddleEast => "Middle East",
            Region::CentralAsia => "Central Asia",
            Region::SouthAsia => "South Asia",
            Region::SoutheastAsia => "Southeast Asia",
            Region::EastAsia => "East Asia",
            Region::Africa => "Africa",
            Region::Oceania => "Oceania",
        }
    }
}

/// How closely a destination attribute matches a stated preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrength {
    Full,
    Half,
    Miss,
}

impl MatchStrength {
    pub const fn fraction(self) -> f64 {
        match self {
            MatchStrength::Full => 1.0,
            MatchStrength::Half => 0.5,
            MatchStrength::Miss => 0.0,
        }
    }
}

const ANY: &str = "Any";

/// A preference that is either unconstrained or pinned to one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice<T> {
    Any,
    Only(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::Any
    }
}

impl<T> Choice<T> {
    pub const fn is_any(&self) -> bool {
        matches!(self, Choice::Any)
    }

    pub const fn as_option(&self) -> Option<&T> {
        match self {
            Choice::Any => None,
            Choice::Only(value) => Some(value),
        }
    }
}

impl<T: PartialEq> Choice<T> {
    /// Exact equality; an absent value never satisfies a pinned choice.
    pub fn matches_exactly(&self, value: Option<&T>) -> bool {
        match self {
            Choice::Any => true,
            Choice::Only(expected) => value == Some(expected),
        }
    }
}

impl<T: Blend> Choice<T> {
    /// Hard-filter semantics: a mixed destination satisfies any specific preference.
    pub fn admits(&self, value: T) -> bool {
        match self {
            Choice::Any => true,
            Choice::Only(expected) => value == *expected || value.is_mix(),
        }
    }

    /// Scoring semantics: mixed destinations earn half credit against a specific preference.
    pub fn strength(&self, value: T) -> MatchStrength {
        match self {
            Choice::Any => MatchStrength::Full,
            Choice::Only(expected) if value == *expected => MatchStrength::Full,
            Choice::Only(_) if value.is_mix() => MatchStrength::Half,
            Choice::Only(_) => MatchStrength::Miss,
        }
    }
}

impl<T: Serialize> Serialize for Choice<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Choice::Any => serializer.serialize_str(ANY),
            Choice::Only(value) => value.serialize(serializer),
        }
    }
}

#[derive(Deserialize)]
enum AnyTag {
    Any,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawChoice<T> {
    Any(AnyTag),
    Only(T),
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Choice<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawChoice::deserialize(deserializer)? {
            RawChoice::Any(AnyTag::Any) => Choice::Any,
            RawChoice::Only(value) => Choice::Only(value),
        })
    }
}

/// IATA code of a departure airport.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AirportCode(pub String);

impl AirportCode {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn hub(&self) -> Option<&'static AirportHub> {
        AIRPORT_HUBS.iter().find(|hub| hub.code == self.0)
    }

    pub fn is_known_hub(&self) -> bool {
        self.hub().is_some()
    }
}

impl From<&str> for AirportCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Departure hub offered as a home airport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AirportHub {
    pub code: &'static str,
    pub name: &'static str,
    pub city: &'static str,
    pub country: &'static str,
    pub region: &'static str,
}

const fn hub(
    code: &'static str,
    name: &'static str,
    city: &'static str,
    country: &'static str,
    region: &'static str,
) -> AirportHub {
    AirportHub {
        code,
        name,
        city,
        country,
        region,
    }
}

pub static AIRPORT_HUBS: [AirportHub; 25] = [
    hub("JFK", "John F. Kennedy International", "New York", "USA", "North America"),
    hub("LAX", "Los Angeles International", "Los Angeles", "USA", "North America"),
    hub("ORD", "O'Hare International", "Chicago", "USA", "North America"),
    hub("SFO", "San Francisco International", "San Francisco", "USA", "North America"),
    hub("MIA", "Miami International", "Miami", "USA", "North America"),
    hub("DEN", "Denver International", "Denver", "USA", "North America"),
    hub("SEA", "Seattle-Tacoma International", "Seattle", "USA", "North America"),
    hub("ATL", "Hartsfield-Jackson Atlanta", "Atlanta", "USA", "North America"),
    hub("LHR", "Heathrow", "London", "UK", "Europe"),
    hub("CDG", "Charles de Gaulle", "Paris", "France", "Europe"),
    hub("FRA", "Frankfurt Airport", "Frankfurt", "Germany", "Europe"),
    hub("AMS", "Schiphol", "Amsterdam", "Netherlands", "Europe"),
    hub("MAD", "Adolfo Suárez Madrid–Barajas", "Madrid", "Spain", "Europe"),
    hub("FCO", "Leonardo da Vinci–Fiumicino", "Rome", "Italy", "Europe"),
    hub("NRT", "Narita International", "Tokyo", "Japan", "Asia"),
    hub("PEK", "Beijing Capital International", "Beijing", "China", "Asia"),
    hub("SIN", "Changi Airport", "Singapore", "Singapore", "Asia"),
    hub("HKG", "Hong Kong International", "Hong Kong", "China", "Asia"),
    hub("ICN", "Incheon International", "Seoul", "South Korea", "Asia"),
    hub("BKK", "Suvarnabhumi", "Bangkok", "Thailand", "Asia"),
    hub("DXB", "Dubai International", "Dubai", "UAE", "Middle East"),
    hub("SYD", "Sydney Airport", "Sydney", "Australia", "Oceania"),
    hub("MEL", "Melbourne Airport", "Melbourne", "Australia", "Oceania"),
    hub("GRU", "São Paulo–Guarulhos", "São Paulo", "Brazil", "South America"),
    hub("EZE", "Ministro Pistarini", "Buenos Aires", "Argentina", "South America"),
];

/// Static catalog entry describing a bookable trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: DestinationId,
    pub name: String,
    pub duration: u32,
    pub itinerary_summary: String,
    #[serde(default)]
    pub considerations: String,
    pub visa_requirements: String,
    pub countries: Vec<String>,
    #[serde(default)]
    pub region: Option<Region>,
    pub climate: Climate,
    #[serde(rename = "type")]
    pub trip_type: TripType,
    pub ease_with_child: u8,
    #[serde(default)]
    pub urgency: u8,
    pub danger: u8,
    pub cost: u8,
    #[serde(default)]
    pub flight_times: BTreeMap<AirportCode, f64>,
    pub best_months: MonthTable<u8>,
    #[serde(default)]
    pub best_time_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_flight_prices: Option<BTreeMap<AirportCode, MonthTable<f64>>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Destination {
    /// Flight hours from `airport`, `None` when the catalog has no entry.
    pub fn flight_hours(&self, airport: &AirportCode) -> Option<f64> {
        self.flight_times.get(airport).copied()
    }

    pub fn is_good_month(&self, month: Month) -> bool {
        self.best_months.get(month) == 1
    }
}

/// Ledger entry for one traveler and one destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelerData {
    pub has_visited: bool,
    pub rating: u8,
}

pub const NEUTRAL_RATING: u8 = 5;
pub const MAX_RATING: u8 = 10;

impl Default for TravelerData {
    fn default() -> Self {
        Self {
            has_visited: false,
            rating: NEUTRAL_RATING,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Traveler {
    pub id: TravelerId,
    pub name: String,
    #[serde(default)]
    pub is_child: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<u16>,
    #[serde(default)]
    pub destinations: BTreeMap<DestinationId, TravelerData>,
}

impl Traveler {
    pub fn new(id: TravelerId, name: impl Into<String>, is_child: bool) -> Self {
        Self {
            id,
            name: name.into(),
            is_child,
            birth_year: None,
            destinations: BTreeMap::new(),
        }
    }

    /// Ledger entry for `destination`, substituting the neutral default when none is recorded.
    pub fn entry(&self, destination: &DestinationId) -> TravelerData {
        self.destinations
            .get(destination)
            .copied()
            .unwrap_or_default()
    }
}

/// How much weight the cost rating carries in the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetSensitivity {
    Flexible,
    #[default]
    Moderate,
    Strict,
}

impl BudgetSensitivity {
    pub const fn label(self) -> &'static str {
        match self {
            BudgetSensitivity::Flexible => "Flexible",
            BudgetSensitivity::Moderate => "Moderate",
            BudgetSensitivity::Strict => "Strict",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            BudgetSensitivity::Flexible => "Money is no object",
            BudgetSensitivity::Moderate => "Cost-conscious but willing to splurge",
            BudgetSensitivity::Strict => "Looking for the best value",
        }
    }
}

pub const DEFAULT_DURATION_MIN: u32 = 6;
pub const DEFAULT_DURATION_MAX: u32 = 9;
pub const DEFAULT_MAX_DANGER: u8 = 6;
pub const DEFAULT_HOME_AIRPORT: &str = "SFO";
pub const DEFAULT_TRAVEL_MONTH: Month = Month::Oct;

/// The user's current query. Missing fields deserialize to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub travel_month: Month,
    pub duration_min: u32,
    pub duration_max: u32,
    pub selected_travelers: BTreeSet<TravelerId>,
    pub home_airport: AirportCode,
    pub temperature_preference: Choice<Climate>,
    pub type_preference: Choice<TripType>,
    pub region_preference: Choice<Region>,
    pub budget_sensitivity: BudgetSensitivity,
    /// Hours; zero means no limit.
    pub max_flight_time: f64,
    pub max_danger: u8,
    pub prefer_new_places: bool,
    pub visa_free_only: bool,
    pub search_query: String,
    pub favorites: Vec<DestinationId>,
    pub compare_list: Vec<DestinationId>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            travel_month: DEFAULT_TRAVEL_MONTH,
            duration_min: DEFAULT_DURATION_MIN,
            duration_max: DEFAULT_DURATION_MAX,
            selected_travelers: BTreeSet::new(),
            home_airport: AirportCode::new(DEFAULT_HOME_AIRPORT),
            temperature_preference: Choice::Any,
            type_preference: Choice::Any,
            region_preference: Choice::Any,
            budget_sensitivity: BudgetSensitivity::Moderate,
            max_flight_time: 0.0,
            max_danger: DEFAULT_MAX_DANGER,
            prefer_new_places: true,
            visa_free_only: false,
            search_query: String::new(),
            favorites: Vec::new(),
            compare_list: Vec::new(),
        }
    }
}

impl Preferences {
    pub fn has_flight_limit(&self) -> bool {
        self.max_flight_time > 0.0
    }

    pub fn duration_fits(&self, duration: u32) -> bool {
        (self.duration_min..=self.duration_max).contains(&duration)
    }
}
