//! Plain-text vehicle output for the one-shot commands.

use crate::catalog::VehicleRecord;
use crate::ui::format::{format_mileage, format_usd, format_yen};

/// `1  2020 Toyota Crown RS  ¥3,200,000  9,939 km  Tokyo`
pub fn summary_line(record: &VehicleRecord) -> String {
    format!(
        "{:<22} {:<48} {:>13}  {:>10}  {}",
        record.id,
        record.title(),
        format_yen(record.price),
        format_mileage(record.mileage),
        record.location
    )
}

pub fn detail_lines(record: &VehicleRecord, show_usd: bool) -> Vec<String> {
    let mut title = record.title();
    if let Some(grade) = &record.grade {
        title.push(' ');
        title.push_str(grade);
    }

    let mut price = format_yen(record.price);
    if let Some(usd) = record.price_usd.filter(|_| show_usd) {
        price.push_str(&format!(" (≈ {} USD)", format_usd(usd)));
    }

    let mut lines = vec![
        title,
        format!("Price:        {price}"),
        format!("Mileage:      {}", format_mileage(record.mileage)),
        format!("Fuel:         {}", record.fuel),
        format!("Transmission: {}", record.transmission),
        format!("Drivetrain:   {}", record.drivetrain),
        format!("Engine:       {}", record.engine),
        format!("Body type:    {}", record.body_type),
        format!("Color:        {}", record.color),
        format!("Condition:    {}", record.condition),
        format!("Dealer:       {} ({})", record.dealer, record.location),
        format!("Rating:       {:.1}", record.rating),
    ];
    if !record.features.is_empty() {
        lines.push(format!("Features:     {}", record.features.join(", ")));
    }
    lines
}
