use crate::infra::{parse_airport, parse_destination, parse_month};
use clap::{Args, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use travel_planner::catalog::Catalog;
use travel_planner::config::AppConfig;
use travel_planner::error::AppError;
use travel_planner::planner::export::write_csv;
use travel_planner::planner::{
    active_filters, advise, duration_recommendation, rank, AirportCode, Destination,
    DestinationId, Month, Preferences, RankedDestination,
};
use travel_planner::store::{JsonFileStore, PlannerState, StateStore};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Csv,
}

#[derive(Args, Debug, Default)]
pub(crate) struct SourceArgs {
    /// Destination catalog JSON (defaults to PLANNER_CATALOG_PATH)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Saved planner state (defaults to PLANNER_STATE_PATH; omitted means defaults)
    #[arg(long)]
    pub(crate) state: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RankArgs {
    #[command(flatten)]
    pub(crate) source: SourceArgs,
    /// Travel month code (jan..dec)
    #[arg(long, value_parser = parse_month)]
    pub(crate) month: Option<Month>,
    /// Home airport IATA code
    #[arg(long, value_parser = parse_airport)]
    pub(crate) airport: Option<AirportCode>,
    /// Shortest acceptable trip in days
    #[arg(long)]
    pub(crate) min_days: Option<u32>,
    /// Longest acceptable trip in days
    #[arg(long)]
    pub(crate) max_days: Option<u32>,
    /// Longest acceptable flight in hours
    #[arg(long)]
    pub(crate) max_flight: Option<f64>,
    /// Only destinations that need no visa
    #[arg(long)]
    pub(crate) visa_free: bool,
    /// Free-text search over names, countries, summaries, regions and tags
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Show at most this many results
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug, Default)]
pub(crate) struct AdviseArgs {
    #[command(flatten)]
    pub(crate) source: SourceArgs,
    /// Home airport IATA code (defaults to the saved preference)
    #[arg(long, value_parser = parse_airport)]
    pub(crate) airport: Option<AirportCode>,
    /// Limit the advice to one destination id
    #[arg(long, value_parser = parse_destination)]
    pub(crate) destination: Option<DestinationId>,
    /// Trip length in days; with --flight-hours, skips the catalog entirely
    #[arg(long, requires = "flight_hours")]
    pub(crate) duration: Option<u32>,
    /// Flight length in hours
    #[arg(long, requires = "duration")]
    pub(crate) flight_hours: Option<f64>,
}

impl RankArgs {
    fn apply(&self, preferences: &mut Preferences) {
        if let Some(month) = self.month {
            preferences.travel_month = month;
        }
        if let Some(airport) = &self.airport {
            preferences.home_airport = airport.clone();
        }
        if let Some(min_days) = self.min_days {
            preferences.duration_min = min_days;
        }
        if let Some(max_days) = self.max_days {
            preferences.duration_max = max_days;
        }
        if let Some(max_flight) = self.max_flight {
            preferences.max_flight_time = max_flight.max(0.0);
        }
        if self.visa_free {
            preferences.visa_free_only = true;
        }
        if let Some(search) = &self.search {
            preferences.search_query = search.clone();
        }
    }
}

fn load_sources(source: &SourceArgs) -> Result<(Catalog, PlannerState), AppError> {
    let config = AppConfig::load()?;
    let catalog_path = source
        .catalog
        .clone()
        .unwrap_or(config.planner.catalog_path);
    let catalog = Catalog::from_path(catalog_path)?;

    let state = match source.state.clone().or(config.planner.state_path) {
        Some(path) => JsonFileStore::new(path).load()?,
        None => PlannerState::default(),
    };
    Ok((catalog, state))
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), AppError> {
    let (catalog, state) = load_sources(&args.source)?;
    let mut preferences = state.preferences.clone();
    args.apply(&mut preferences);

    let mut ranked = rank(&catalog, &preferences, &state.travelers);
    if let Some(limit) = args.limit {
        ranked.truncate(limit);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Csv => write_csv(&mut out, &ranked, &preferences)?,
        OutputFormat::Table => render_table(&mut out, &ranked, &preferences, catalog.len())?,
    }
    Ok(())
}

pub(crate) fn render_table<W: Write>(
    out: &mut W,
    ranked: &[RankedDestination<'_>],
    preferences: &Preferences,
    candidates: usize,
) -> std::io::Result<()> {
    writeln!(
        out,
        "{} from {}: {} of {} destinations",
        preferences.travel_month.label(),
        preferences.home_airport,
        ranked.len(),
        candidates
    )?;
    for filter in active_filters(preferences) {
        writeln!(out, "  filter {}: {}", filter.label, filter.value)?;
    }

    for (index, entry) in ranked.iter().enumerate() {
        writeln!(
            out,
            "{:>2}. {:<26} {:>5.1} {:>3.0}% {}",
            index + 1,
            entry.destination.name,
            entry.score.total,
            entry.score.percentage(),
            entry.score.grade().label()
        )?;
    }
    Ok(())
}

pub(crate) fn run_advise(args: AdviseArgs) -> Result<(), AppError> {
    if let (Some(duration), Some(hours)) = (args.duration, args.flight_hours) {
        let advice = duration_recommendation(duration, hours.max(0.0));
        println!(
            "{} days for a {hours:.1}h flight: {} - {}",
            duration,
            advice.status.label(),
            advice.message
        );
        return Ok(());
    }

    let (catalog, state) = load_sources(&args.source)?;
    let airport = args
        .airport
        .clone()
        .unwrap_or(state.preferences.home_airport);

    let destinations: Vec<&Destination> = match &args.destination {
        Some(id) => catalog.get(id).into_iter().collect(),
        None => catalog.iter().collect(),
    };
    if destinations.is_empty() {
        println!("No matching destinations");
        return Ok(());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for destination in destinations {
        writeln!(out, "{}", advice_line(destination, &airport))?;
    }
    Ok(())
}

pub(crate) fn advice_line(destination: &Destination, airport: &AirportCode) -> String {
    match advise(destination, airport) {
        Some(advice) => format!(
            "{} ({} days): {} - {}",
            destination.name,
            destination.duration,
            advice.status.label(),
            advice.message
        ),
        None => format!(
            "{} ({} days): no flight data from {}",
            destination.name, destination.duration, airport
        ),
    }
}
