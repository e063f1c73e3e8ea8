//! `mcond units` command - List supported measurement kinds and units

use miette::Result;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::physical::MeasurementKind;

#[derive(clap::Args, Debug)]
pub struct UnitsArgs {
    /// Only list units for one kind (length, weight, volume, area)
    #[arg(long, short = 'k')]
    pub kind: Option<MeasurementKind>,
}

#[derive(Tabled)]
struct UnitRow {
    #[tabled(rename = "Kind")]
    kind: String,

    #[tabled(rename = "Base")]
    base: String,

    #[tabled(rename = "Units")]
    units: String,
}

pub fn run(args: UnitsArgs) -> Result<()> {
    let kinds: Vec<MeasurementKind> = match args.kind {
        Some(kind) => vec![kind],
        None => MeasurementKind::ALL.to_vec(),
    };

    let rows: Vec<UnitRow> = kinds
        .iter()
        .map(|kind| UnitRow {
            kind: kind.to_string(),
            base: kind.base_unit().to_string(),
            units: kind
                .units()
                .iter()
                .map(|u| u.symbol())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    println!("{}", table);
    Ok(())
}
