// Feeds a generated station log through the daily aggregator and prints the
// three products a dashboard page would render: metric tiles, the forecast
// panel, and the chart bucket series.
use chrono::NaiveDate;
use daily_report::{build_daily_report, ReportOptions};
use station_data::utils::generate_readings;
use station_data::{ReadingTable, TableSchema};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Four days of synthetic readings starting 2024-01-01, hourly
    let schema = TableSchema::weather_station();
    let rows = generate_readings(&schema, 4, 24);
    let table = ReadingTable::new(schema, rows)?;

    // The caller owns "now" and its timezone normalization
    let reference = NaiveDate::from_ymd_opt(2024, 1, 2)
        .ok_or("bad reference date")?
        .and_hms_opt(12, 0, 0)
        .ok_or("bad reference time")?;

    let report = build_daily_report(&table, reference, ReportOptions::default())?;

    println!("=== Current Conditions ({}) ===", reference.date());
    match &report.snapshot {
        Some(snapshot) => {
            println!("as of {}", snapshot.reading.timestamp.time());
            for (field, value) in table.schema().fields().iter().zip(&snapshot.reading.values) {
                match value {
                    Some(value) => println!("{:>14}: {:8.1}", field, value),
                    None => println!("{:>14}: {:>8}", field, "--"),
                }
            }
        }
        None => println!("no data recorded today"),
    }

    println!("\n=== Forecast ===");
    for entry in &report.forecast {
        let label = entry.date.format("%a %Y-%m-%d");
        if entry.is_absent() {
            println!("{}  (no data)", label);
            continue;
        }
        let temperature = entry
            .values
            .first()
            .copied()
            .flatten()
            .map(|value| format!("{:.1}", value))
            .unwrap_or_else(|| "--".to_string());
        println!("{}  temperature {}", label, temperature);
    }

    println!("\n=== Chart Buckets ({}) ===", report.series.day());
    for (start, stats) in report.series.buckets() {
        let means: Vec<String> = stats
            .means
            .iter()
            .map(|mean| match mean {
                Some(mean) => format!("{:6.1}", mean),
                None => format!("{:>6}", "--"),
            })
            .collect();
        println!(
            "{}  n={:<3} {}",
            start.time().format("%H:%M"),
            stats.count,
            means.join(" ")
        );
    }

    Ok(())
}
