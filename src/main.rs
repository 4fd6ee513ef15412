// Date Range Picker demo
// Minimal text host: prints a classified month grid to the terminal
//
// Usage: date-range-picker [YYYY-MM] [--select DAY[,DAY...]] [--zh] [--json]

use anyhow::{anyhow, bail, Context, Result};
use date_range_picker::services::settings::SettingsService;
use date_range_picker::{DateRangePicker, DayCell, PickerSettings, ViewMonth};

#[derive(Debug, Default)]
struct Options {
    view_month: Option<ViewMonth>,
    clicks: Vec<u32>,
    chinese: bool,
    json: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let options = parse_args(std::env::args().skip(1))?;

    let settings = if options.chinese {
        PickerSettings::chinese()
    } else {
        match SettingsService::at_default_location() {
            Some(service) => service.get()?,
            None => PickerSettings::default(),
        }
    };

    let mut picker = DateRangePicker::new()?
        .with_settings(settings)?
        .on_range_change(|start, end| log::info!("Range changed: {:?} - {:?}", start, end));
    if let Some(view_month) = options.view_month {
        picker = picker.with_view_month(view_month);
    }

    for day in options.clicks {
        let grid = picker.grid();
        let cell = grid
            .current_month_cells()
            .find(|cell| cell.day() == day)
            .copied()
            .ok_or_else(|| anyhow!("{} has no day {}", picker.month_label(), day))?;
        picker.handle_date_click(cell.date, cell.is_current_month);
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&picker.grid())?);
    } else {
        print_grid(&picker);
    }
    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options> {
    let mut options = Options::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--zh" => options.chinese = true,
            "--json" => options.json = true,
            "--select" => {
                let days = args.next().context("--select needs a list of days")?;
                for day in days.split(',') {
                    let day = day
                        .trim()
                        .parse::<u32>()
                        .with_context(|| format!("invalid day '{}'", day))?;
                    options.clicks.push(day);
                }
            }
            other if options.view_month.is_none() && !other.starts_with("--") => {
                options.view_month = Some(parse_view_month(other)?);
            }
            other => bail!("unexpected argument '{}'", other),
        }
    }

    Ok(options)
}

fn parse_view_month(text: &str) -> Result<ViewMonth> {
    let (year, month) = text
        .split_once('-')
        .with_context(|| format!("expected YYYY-MM, got '{}'", text))?;
    let year = year.parse::<i32>().with_context(|| format!("invalid year '{}'", year))?;
    let month = month.parse::<u32>().with_context(|| format!("invalid month '{}'", month))?;
    Ok(ViewMonth::new(year, month)?)
}

fn print_grid(picker: &DateRangePicker) {
    println!("{:^42}", picker.month_label());
    let header: Vec<String> = picker
        .weekday_labels()
        .iter()
        .map(|label| format!("{:^6}", label))
        .collect();
    println!("{}", header.join(""));

    for week in picker.grid().weeks() {
        let row: Vec<String> = week
            .iter()
            .map(|cell| format!("{:^6}", cell_text(picker, cell)))
            .collect();
        println!("{}", row.join(""));
    }
}

fn cell_text(picker: &DateRangePicker, cell: &DayCell) -> String {
    let label = picker.day_label(cell);
    if cell.is_disabled() {
        return format!("({})", label);
    }

    let open = if cell.is_start {
        "["
    } else if cell.is_today {
        "*"
    } else if cell.is_in_range {
        "="
    } else {
        ""
    };
    let close = if cell.is_end { "]" } else { "" };
    format!("{}{}{}", open, label, close)
}
