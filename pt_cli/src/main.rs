//! `ptcalc`: the CLI collaborator that wires `pt_config` (settings + dataset
//! ingestion) and `pt_core` (the statistical engine) together, plus the
//! external report renderer.

mod calculate;
mod cli;
mod error;
mod error_fmt;
mod renderer;
mod report_only;
mod tracing_setup;
mod validate;

use clap::Parser;
use cli::{Cli, Commands, JSON_MODE};

fn main() {
    color_eyre::install().ok();
    let cli = Cli::parse();
    let _ = JSON_MODE.set(cli.json);

    tracing_setup::init_tracing(cli.json, &cli.log_level, cli.log_file.as_deref());

    if let Err(report) = real_main(&cli) {
        if cli.json {
            eprintln!("{}", error_fmt::format_error_json(&report));
        } else {
            eprintln!("{}", error_fmt::humanize(&report));
        }
        std::process::exit(error_fmt::exit_code_for_error(&report));
    }
}

fn real_main(cli: &Cli) -> eyre::Result<()> {
    match &cli.cmd {
        Commands::Validate { config, data } => {
            validate::run(config, data)?;
        }
        Commands::Calculate { config, data, out } => {
            let record = calculate::run(config, data, out.clone())?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                print_human_summary(&record);
            }
        }
        Commands::ReportOnly {
            record,
            template,
            format,
            output,
            renderer,
        } => {
            report_only::run(record, template, *format, output, renderer)?;
        }
    }
    Ok(())
}

fn print_human_summary(record: &pt_core::ResultsRecord) {
    println!("method:     {}", record.method);
    println!("x_pt:       {}", record.x_pt);
    println!("u(x_pt):    {}", record.u_x_pt);
    if let Some(s) = record.s_star {
        println!("s*:         {s}");
    }
    if let Some(p) = record.p_used {
        println!("p_used:     {p}");
    }
    if let Some(it) = record.iterations {
        println!("iterations: {it}");
    }
    if let Some(c) = record.converged {
        println!("converged:  {c}");
    }
    println!();
    println!("{:<16}{:>12}{:>12}{:>10}{:>10}", "id", "result", "u(x_i)", "z", "zeta");
    for i in 0..record.ids.len() {
        let u_i = record.uncertainties[i].map_or("-".to_string(), |v| v.to_string());
        let z = record.z_scores[i].map_or("-".to_string(), |v| format!("{v:.2}"));
        let zeta = record.zeta_scores[i].map_or("-".to_string(), |v| format!("{v:.2}"));
        println!(
            "{:<16}{:>12}{:>12}{:>10}{:>10}",
            record.ids[i], record.results[i], u_i, z, zeta
        );
    }
    if !record.dropped_rows.is_empty() {
        println!();
        println!("dropped rows:");
        for d in &record.dropped_rows {
            println!("  row {}: {}", d.index, d.reason);
        }
    }
}
