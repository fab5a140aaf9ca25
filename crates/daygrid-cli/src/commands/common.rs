use std::fs;
use std::path::Path;

use daygrid_core::DayViewStyle;

/// Load a style from a TOML file, or fall back to the defaults.
///
/// The style is validated here so both commands fail before doing any
/// work with a broken configuration.
pub fn load_style(path: Option<&Path>) -> Result<DayViewStyle, Box<dyn std::error::Error>> {
    let style: DayViewStyle = match path {
        Some(p) => toml::from_str(&fs::read_to_string(p)?)?,
        None => DayViewStyle::default(),
    };
    style.validate()?;
    Ok(style)
}
