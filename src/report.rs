use crate::models::{FarmAssistance, FarmProfile};

/// Render the assistance record as a plain text report
pub fn print(input: &FarmProfile, assistance: &FarmAssistance) {
    println!(
        "Assistance for {} on {} acres - {}, {}",
        input.crop_name, input.land_size_acres, input.district, input.state
    );
    println!(
        "Soil pH {} | planted {}",
        input.soil_ph, input.planting_date
    );

    println!();
    println!("Weather outlook ({} days)", assistance.weather.days.len());
    for day in &assistance.weather.days {
        println!(
            "  {}  {:>5.1} to {:<5.1} C  rain {:>5.1} mm  humidity {:>3.0}%  wind {:>4.1} km/h{}",
            day.date,
            day.min_temp_c,
            day.max_temp_c,
            day.precipitation_mm,
            day.humidity_percent,
            day.wind_speed_kmh,
            if day.is_anomaly { "  [anomaly]" } else { "" }
        );
        println!("      {}", day.description);
    }

    println!();
    if assistance.diseases.is_empty() {
        println!("Disease risk: no candidate diseases on record for this crop");
    } else {
        println!("Disease risk");
        for disease in &assistance.diseases {
            println!("  [{}] {}", disease.risk_level, disease.name);
            println!("      Favorable to pathogen: {}", disease.optimal_conditions);
            for measure in &disease.preventive_measures {
                println!("      - {}", measure);
            }
        }
    }

    println!();
    println!("Irrigation");
    println!(
        "  Every {} days, {} L/acre, best at {}",
        assistance.irrigation.frequency_days,
        assistance.irrigation.water_liters_per_acre,
        assistance.irrigation.best_time
    );
    println!(
        "  Next: {} ({})",
        assistance.irrigation.next_date, assistance.irrigation.reason
    );

    println!();
    println!("Harvest");
    println!(
        "  Optimal date {} | expected yield {} kg/acre | weather {}",
        assistance.harvest.optimal_date,
        assistance.harvest.expected_yield_kg_per_acre,
        assistance.harvest.weather_suitability
    );
    println!("  Method: {}", assistance.harvest.harvesting_method);

    println!();
    println!("Market");
    println!(
        "  Local price {} | projected {} | sell: {}",
        assistance.market.current_local_price,
        assistance.market.projected_price,
        assistance.market.best_selling_time
    );
    for mandi in &assistance.market.nearby_mandis {
        println!(
            "  {} ({} km): {} [{}]",
            mandi.name, mandi.distance_km, mandi.current_price, mandi.expected_trend
        );
    }
    match &assistance.market.msp_info {
        Some(msp) => println!(
            "  MSP {} ({} to {})",
            msp.current, msp.applicable_from, msp.applicable_to
        ),
        None => println!("  No MSP applies to this crop"),
    }
}
