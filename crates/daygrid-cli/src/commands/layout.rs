use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use daygrid_core::event::load_events;
use daygrid_core::{layout_day, LayoutAttributes};

use super::common::load_style;

#[derive(Args)]
pub struct LayoutArgs {
    /// Path to a JSON array of event descriptors
    #[arg(short, long)]
    pub events: PathBuf,
    /// Reference day (YYYY-MM-DD)
    #[arg(short, long)]
    pub day: NaiveDate,
    /// TOML style file (defaults apply otherwise)
    #[arg(short, long)]
    pub style: Option<PathBuf>,
    /// Print the layout as pretty JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: LayoutArgs) -> Result<(), Box<dyn std::error::Error>> {
    let events = load_events(&args.events)?;
    let style = load_style(args.style.as_deref())?;
    let attributes = layout_day(&events, args.day, &style)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&attributes)?);
    } else {
        print_table(&attributes);
    }
    Ok(())
}

fn print_table(attributes: &[LayoutAttributes]) {
    println!(
        "{:<24} {:>3} {:>4} {:>9} {:>9} {:>9} {:>9}",
        "event", "col", "conc", "x", "y", "width", "height"
    );
    for a in attributes {
        println!(
            "{:<24} {:>3} {:>4} {:>9.1} {:>9.1} {:>9.1} {:>9.1}",
            a.event.title,
            a.column,
            a.concurrency(),
            a.frame.x,
            a.frame.y,
            a.frame.width,
            a.frame.height
        );
    }
}
