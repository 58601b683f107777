use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use kira_poolcalc::cli::{Cli, Commands, PoolsCommand, PoolsShowArgs};
use kira_poolcalc::ctx::Ctx;
use kira_poolcalc::io;
use kira_poolcalc::pipeline::Pipeline;
use kira_poolcalc::pipeline::stage1_input::Stage1Input;
use kira_poolcalc::pipeline::stage2_validate::Stage2Validate;
use kira_poolcalc::pooling::PoolingOptions;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            let options = PoolingOptions {
                desired_final_volume: args.final_volume,
                maximize_volumes: !args.no_maximize,
                use_measured_concentrations: args.use_measured,
            };
            let mut ctx = Ctx::new(
                args.input,
                args.out,
                options,
                args.json,
                args.tsv,
                env!("CARGO_PKG_VERSION"),
            );
            ctx.excluded = args.exclude;
            ctx.strict = args.strict;

            Pipeline::full().run(&mut ctx)?;
            print_summary(&ctx)?;
        }
        Commands::Validate(args) => {
            let options = PoolingOptions {
                desired_final_volume: args.final_volume,
                use_measured_concentrations: args.use_measured,
                ..PoolingOptions::default()
            };
            let mut ctx = Ctx::new(
                args.input,
                PathBuf::from("."),
                options,
                false,
                false,
                env!("CARGO_PKG_VERSION"),
            );
            let pipeline = Pipeline::new(vec![
                Box::new(Stage1Input::new()),
                Box::new(Stage2Validate::new()),
            ]);
            pipeline.run(&mut ctx)?;
            print_validate_summary(&ctx);
        }
        Commands::Pools(args) => match args.command {
            PoolsCommand::Show(show) => handle_pools_show(show)?,
        },
    }

    Ok(())
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
    Ok(())
}

fn print_validate_summary(ctx: &Ctx) {
    if ctx.issues.is_empty() {
        println!("kira-poolcalc validate ok");
    } else {
        println!("kira-poolcalc validate: {} issue(s)", ctx.issues.len());
    }
    println!("pools: {}", ctx.table.len());
    println!(
        "samples: {}",
        ctx.table
            .pools()
            .iter()
            .map(|p| p.samples as u64)
            .sum::<u64>()
    );
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
}

fn handle_pools_show(args: PoolsShowArgs) -> Result<()> {
    let mut ctx = Ctx::new(
        args.input,
        PathBuf::from("."),
        PoolingOptions::default(),
        false,
        false,
        env!("CARGO_PKG_VERSION"),
    );
    Pipeline::new(vec![Box::new(Stage1Input::new())]).run(&mut ctx)?;

    println!("pools ({}):", ctx.source_label());
    println!("id\tmolarity\tvolume\tsamples\tmeasured_concentration");
    for pool in ctx.table.pools() {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            pool.id, pool.molarity, pool.volume, pool.samples, pool.measured_concentration
        );
    }
    Ok(())
}
