use crate::cli::commands::load_analysis;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::cycle::CycleWindow;
use crate::errors::AppResult;
use crate::models::interval::UnitPhases;
use crate::models::unit::UnitId;
use crate::ui::messages::{header, info};
use crate::utils::formatting::{optional, short_ts};
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Phases { file, unit, cycle } = cmd {
        let analysis = load_analysis(file, cfg)?;

        info(format!("Cycle: {}", analysis.window.describe()));

        let selected = match unit {
            Some(label) => vec![analysis.find_unit(label)?],
            None => analysis.units_in_order(),
        };

        let window = cycle.then_some(&analysis.window);
        for (unit, phases) in selected {
            print_unit(unit, phases, window);
        }
    }
    Ok(())
}

fn print_unit(unit: &UnitId, phases: &UnitPhases, window: Option<&CycleWindow>) {
    println!();
    header(unit.label());

    if phases.is_empty() {
        println!("No preheat or run intervals.");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("PHASE").width(7),
        Column::new("START"),
        Column::new("END"),
        Column::new("DURATION"),
        Column::new("PROGRAM"),
    ]);

    for iv in phases.all_sorted() {
        let (start, end) = match window {
            Some(w) => w.remap_interval(iv),
            None => (iv.start, iv.end),
        };
        table.add_row(vec![
            iv.phase.as_str().to_string(),
            short_ts(start),
            short_ts(end),
            mins2readable(iv.duration_minutes()),
            optional(iv.program.as_deref()),
        ]);
    }

    print!("{}", table.render());
}
