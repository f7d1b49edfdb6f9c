use crate::infra::{parse_airport, parse_month};
use clap::Args;
use std::sync::Arc;
use travel_planner::catalog::{Catalog, CatalogError};
use travel_planner::error::AppError;
use travel_planner::planner::{
    AirportCode, Comparison, DestinationId, Month, PlannerService, Recommendations, VisitUpdate,
    MAX_COMPARE,
};
use travel_planner::store::MemoryStore;

const SAMPLE_CATALOG: &str = include_str!("../../../data/destinations.json");

pub(crate) fn sample_catalog() -> Result<Catalog, CatalogError> {
    Catalog::from_reader(SAMPLE_CATALOG.as_bytes())
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Travel month code (jan..dec). Defaults to the saved preference.
    #[arg(long, value_parser = parse_month)]
    pub(crate) month: Option<Month>,
    /// Home airport IATA code.
    #[arg(long, value_parser = parse_airport)]
    pub(crate) airport: Option<AirportCode>,
    /// Rank without the sample travelers and their history.
    #[arg(long)]
    pub(crate) skip_travelers: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        month,
        airport,
        skip_travelers,
    } = args;

    let service = PlannerService::new(
        Arc::new(sample_catalog()?),
        Arc::new(MemoryStore::default()),
    );

    println!("Travel planner demo");
    println!("Catalog: {} destinations", service.catalog().len());

    let mut preferences = service.preferences()?;
    if let Some(month) = month {
        preferences.travel_month = month;
    }
    if let Some(airport) = airport {
        preferences.home_airport = airport;
    }

    if !skip_travelers {
        let alex = service.add_traveler("Alex", false)?;
        let sam = service.add_traveler("Sam", true)?;
        service.record_visit(
            &alex.id,
            &DestinationId::new("kyoto-japan"),
            VisitUpdate {
                has_visited: Some(true),
                rating: Some(8),
            },
        )?;
        service.record_visit(
            &sam.id,
            &DestinationId::new("bali-indonesia"),
            VisitUpdate {
                has_visited: None,
                rating: Some(9),
            },
        )?;
        println!("Travelers: Alex (has been to Kyoto), Sam (child, keen on Bali)");
        preferences.selected_travelers.extend([alex.id, sam.id]);
    }

    service.update_preferences(preferences)?;
    let recommendations = service.recommend(None)?;
    render_recommendations(&recommendations);

    let shortlist: Vec<DestinationId> = recommendations
        .results
        .iter()
        .take(MAX_COMPARE)
        .map(|entry| entry.destination_id.clone())
        .collect();
    if !shortlist.is_empty() {
        let comparison = service.compare(Some(shortlist))?;
        render_comparison(&comparison);
    }

    if let Some(top) = recommendations.results.first() {
        println!("\nShare link: {}", service.share_link(&top.destination_id)?);
    }

    Ok(())
}

fn render_recommendations(recommendations: &Recommendations) {
    let preferences = &recommendations.preferences;
    println!(
        "\nRecommendations for {} from {} ({} of {} destinations)",
        preferences.travel_month.label(),
        preferences.home_airport,
        recommendations.results.len(),
        recommendations.candidates
    );

    if !recommendations.active_filters.is_empty() {
        let filters: Vec<String> = recommendations
            .active_filters
            .iter()
            .map(|filter| format!("{}: {}", filter.label, filter.value))
            .collect();
        println!("Active filters: {}", filters.join(", "));
    }

    for entry in &recommendations.results {
        let advice = entry
            .advice
            .as_ref()
            .map(|advice| format!(" | {}: {}", advice.status.label(), advice.message))
            .unwrap_or_default();
        println!(
            "{:>2}. {:<26} {:>5.1} pts {:>3.0}% grade {}{}",
            entry.rank,
            entry.name,
            entry.score.total,
            entry.percentage,
            entry.grade.label(),
            advice
        );
    }
}

fn render_comparison(comparison: &Comparison<'_>) {
    println!("\nSide by side");
    for column in &comparison.columns {
        let flight = column
            .flight_hours
            .map(|hours| format!("{hours:.1}h flight"))
            .unwrap_or_else(|| "flight unknown".to_string());
        let marker = if comparison.is_best_score(column) {
            " (best)"
        } else {
            ""
        };
        println!(
            "- {}: {:.1} pts{}, {} days, {}, cost {}/10, safety {}/10, kids {}/10",
            column.destination.name,
            column.score.total,
            marker,
            column.duration,
            flight,
            column.cost,
            column.safety,
            column.kid_friendly
        );
    }
}
