use anyhow::{ Context, Result };
use clap::Parser;
use comfy_table::{ presets, Attribute, Cell, CellAlignment, Color, ContentArrangement, Table };

use poolscope::{
    arguments::Arguments,
    config::{ self, Config },
    logger::{ self, LogTag },
    pools::{ load_records_from_path, PoolMetricsEngine, PoolView },
};

/// Poolscope entry point
///
/// Loads pool rows from a JSON file, applies sort, filter and page from the
/// command line and prints the page as a table or JSON.
fn main() {
    let args = Arguments::parse();
    logger::init_with(args.logger_config());

    if let Err(e) = run(&args) {
        logger::error(LogTag::System, &format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: &Arguments) -> Result<()> {
    let loaded = match &args.config {
        Some(path) => {
            let loaded = config::read_config_file(path)
                .with_context(|| format!("loading configuration from {}", path.display()))?;
            logger::debug(LogTag::Config, &format!("Loaded configuration from {}", path.display()));
            loaded
        }
        None => Config::default(),
    };
    config::set_config(loaded)?;

    let engine = PoolMetricsEngine::from_global_config();
    let sort = args.sort.unwrap_or(engine.engine_config().default_sort);
    let page = engine.page(args.page);
    let filter = args.filter();

    if args.print_query {
        let variables = engine.query_variables(sort, page, &filter);
        println!("{}", serde_json::to_string_pretty(&variables)?);
        return Ok(());
    }

    let records = load_records_from_path(&args.input, args.validation_mode())
        .with_context(|| format!("loading pools from {}", args.input.display()))?;
    logger::info(LogTag::System, &format!("Loaded {} pools from {}", records.len(), args.input.display()));

    let views = engine.sort_and_paginate(&records, sort, page, &filter)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&views)?);
    } else if views.is_empty() {
        logger::info(LogTag::Pools, "No items");
    } else {
        println!("{}", render_table(&views));
        logger::info(
            LogTag::Pools,
            &format!("Page {} sorted by {} ({} rows)", args.page, sort, views.len())
        );
    }

    Ok(())
}

fn render_table(views: &[PoolView]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL).set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(
        [
            "Pool Address",
            "Total Users",
            "Total Staked",
            "Total Rewards",
            "7-days % (annual)",
            "30-days % (annual)",
            "Configured Commission",
            "Accrued Commission",
        ].map(|title| Cell::new(title).add_attribute(Attribute::Bold))
    );

    for view in views {
        let address = if view.paused {
            Cell::new(format!("{} (paused)", view.id)).fg(Color::Yellow)
        } else {
            Cell::new(&view.id)
        };
        table.add_row(vec![
            address,
            numeric(view.total_users.to_string()),
            numeric(view.amount_label.clone()),
            numeric(view.user_total_reward_label.clone()),
            numeric(view.week_performance_label.clone()),
            numeric(view.month_performance_label.clone()),
            numeric(view.commission_label.clone()),
            numeric(view.accrued_commission_label.clone())
        ]);
    }

    table
}

fn numeric(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}
