use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use daygrid_core::TimeMapper;

use super::common::load_style;

#[derive(Args)]
pub struct LocateArgs {
    /// Vertical position in pixels
    #[arg(short, long)]
    pub y: f64,
    /// Reference day (YYYY-MM-DD)
    #[arg(short, long)]
    pub day: NaiveDate,
    /// TOML style file (defaults apply otherwise)
    #[arg(short, long)]
    pub style: Option<PathBuf>,
    /// Snap down to the style's split interval
    #[arg(long)]
    pub snap: bool,
}

pub fn run(args: LocateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let style = load_style(args.style.as_deref())?;
    let mapper = TimeMapper::new(&style, args.day);
    let t = if args.snap {
        mapper.y_to_date_snapped(args.y, style.split_minute_interval)
    } else {
        mapper.y_to_date(args.y)
    };
    println!("{}", t.format("%Y-%m-%d %H:%M"));
    Ok(())
}
