use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use pi_quarterly::config::{SettingsOverrides, resolve_settings};
use pi_quarterly::error::AppResult;
use pi_quarterly::logging::init_logging;
use pi_quarterly::model::{Category, RecordId, Settings};
use pi_quarterly::pipeline::stage5_report::{ChartView, assemble};
use pi_quarterly::pipeline::stage6_export::export_all;
use pi_quarterly::report::json::{render_chart_json, render_report_json};
use pi_quarterly::report::text::{render_record_list, render_report_text};
use pi_quarterly::store::RecordStore;
use pi_quarterly::store::entry::{EntryDraft, prepare_entry, remove, upsert};
use pi_quarterly::store::seed::seed_records;

#[derive(Debug, Parser)]
#[command(name = "pi-quarterly", version)]
#[command(about = "Quarterly performance-indicator reports: target vs. accomplishment")]
struct Cli {
    /// Directory holding one JSON record list per category
    #[arg(long, global = true, default_value = "./data")]
    data_dir: PathBuf,

    /// JSON settings file (tolerance, decimals, chartMaxY)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Percentage points of slack when judging on-track
    #[arg(long, global = true)]
    tolerance: Option<f64>,

    #[arg(long, global = true)]
    decimals: Option<u32>,

    /// Percent-axis ceiling used when every chart value is zero
    #[arg(long, global = true)]
    chart_max_y: Option<f64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the category report
    Report {
        category: Category,
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
    /// Print chart data for one view (overall or Q1..Q4)
    Chart {
        category: Category,
        #[arg(long, default_value = "overall")]
        view: ChartView,
    },
    /// Add a record, or replace it when --id matches an existing one
    Add {
        category: Category,
        #[arg(long)]
        indicator: String,
        #[arg(long)]
        quarter: String,
        #[arg(long)]
        target: f64,
        #[arg(long, default_value_t = 0.0)]
        target_denom: f64,
        #[arg(long)]
        accomp: f64,
        #[arg(long, default_value_t = 0.0)]
        accomp_denom: f64,
        #[arg(long, default_value = "")]
        remarks: String,
        #[arg(long)]
        id: Option<RecordId>,
    },
    Delete {
        category: Category,
        id: RecordId,
    },
    List {
        category: Category,
    },
    /// Append the sample records for a category
    Seed {
        category: Category,
    },
    /// Remove every stored record of a category
    Clear {
        category: Category,
    },
    /// Write report.txt, report.json and chart.json per category
    Export {
        out_dir: PathBuf,
        #[arg(long)]
        category: Option<Category>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let settings = load_settings(&cli)?;
    let store = RecordStore::new(&cli.data_dir);

    match cli.command {
        Command::Report { category, format } => {
            let records = store.load(category)?;
            let model = assemble(category, &records, &settings);
            match format {
                ReportFormat::Text => print!("{}", render_report_text(&model)),
                ReportFormat::Json => println!("{}", render_report_json(&model)?),
            }
        }
        Command::Chart { category, view } => {
            let records = store.load(category)?;
            let model = assemble(category, &records, &settings);
            println!("{}", render_chart_json(&model, view, &settings)?);
        }
        Command::Add {
            category,
            indicator,
            quarter,
            target,
            target_denom,
            accomp,
            accomp_denom,
            remarks,
            id,
        } => {
            let mut records = store.load(category)?;
            let draft = EntryDraft {
                id,
                indicator,
                quarter,
                target,
                target_denom,
                accomp,
                accomp_denom,
                remarks,
            };
            let record = prepare_entry(category, &draft, &records)?;
            let saved_id = record.id;
            upsert(&mut records, record);
            store.save(category, &records)?;
            println!("saved record {saved_id}");
        }
        Command::Delete { category, id } => {
            let mut records = store.load(category)?;
            let removed = remove(&mut records, id)?;
            store.save(category, &records)?;
            println!("deleted record {} ({})", removed.id, removed.indicator);
        }
        Command::List { category } => {
            let records = store.load(category)?;
            print!("{}", render_record_list(category, &records));
        }
        Command::Seed { category } => {
            let mut records = store.load(category)?;
            let added = seed_records(category, &mut records);
            store.save(category, &records)?;
            println!("added {added} sample record(s) to {category}");
        }
        Command::Clear { category } => {
            store.clear(category)?;
            println!("cleared {category}");
        }
        Command::Export { out_dir, category } => {
            let categories: Vec<Category> = match category {
                Some(c) => vec![c],
                None => Category::ALL.to_vec(),
            };
            let written = export_all(&store, &categories, &out_dir, &settings)?;
            info!("exported {} categor(ies)", written.len());
            for dir in written {
                println!("{}", dir.display());
            }
        }
    }
    Ok(())
}

fn load_settings(cli: &Cli) -> AppResult<Settings> {
    let overrides = SettingsOverrides {
        tolerance: cli.tolerance,
        decimals: cli.decimals,
        chart_max_y: cli.chart_max_y,
    };
    Ok(resolve_settings(cli.settings.as_deref(), &overrides)?)
}
