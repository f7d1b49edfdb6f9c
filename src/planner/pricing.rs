use serde::Serialize;

use super::domain::{AirportCode, Destination, Month};

/// Average flight price for `month` from `airport`, when the catalog lists one.
pub fn price_for(destination: &Destination, airport: &AirportCode, month: Month) -> Option<f64> {
    destination
        .avg_flight_prices
        .as_ref()
        .and_then(|prices| prices.get(airport))
        .map(|table| table.get(month))
}

/// Where a price sits within the year's range for one route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceBand {
    Cheaper,
    Typical,
    Pricier,
}

impl PriceBand {
    pub fn classify(price: f64, min: f64, max: f64) -> Self {
        let range = max - min;
        if range <= 0.0 {
            return PriceBand::Typical;
        }

        let position = (price - min) / range;
        if position < 0.33 {
            PriceBand::Cheaper
        } else if position < 0.66 {
            PriceBand::Typical
        } else {
            PriceBand::Pricier
        }
    }
}

/// Year-round price overview for one destination and departure airport.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSummary {
    pub airport: AirportCode,
    pub min: f64,
    pub max: f64,
    pub average: f64,
    pub cheapest_month: Month,
    pub months: Vec<MonthlyPrice>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyPrice {
    pub month: Month,
    pub price: f64,
    pub band: PriceBand,
}

impl PriceSummary {
    pub fn for_airport(destination: &Destination, airport: &AirportCode) -> Option<Self> {
        let table = destination.avg_flight_prices.as_ref()?.get(airport)?;

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        let mut cheapest_month = Month::Jan;
        for (month, price) in table.iter() {
            if price < min {
                min = price;
                cheapest_month = month;
            }
            max = max.max(price);
            sum += price;
        }

        let months = table
            .iter()
            .map(|(month, price)| MonthlyPrice {
                month,
                price,
                band: PriceBand::classify(price, min, max),
            })
            .collect();

        Some(Self {
            airport: airport.clone(),
            min,
            max,
            average: (sum / Month::ALL.len() as f64).round(),
            cheapest_month,
            months,
        })
    }

    pub fn price_in(&self, month: Month) -> Option<f64> {
        self.months
            .iter()
            .find(|entry| entry.month == month)
            .map(|entry| entry.price)
    }
}
