use clap::Parser;
use colored::Colorize;
use ipv4_subnet_calc::config::{Config, OutputFormat};
use ipv4_subnet_calc::input::{parse_request, prompt_request};
use ipv4_subnet_calc::logging::init_logging;
use ipv4_subnet_calc::output::{error_message, render_csv, render_json, render_text};
use std::error::Error;
use std::io;

#[derive(Parser)]
#[command(version, about = "Calculate IPv4 network ID, broadcast and usable host range")]
struct Cli {
    /// Host address, either `a.b.c.d` (needs --mask) or `a.b.c.d/prefix`. Prompted for when
    /// omitted.
    address: Option<String>,

    /// Dotted subnet mask, e.g. 255.255.255.192.
    #[arg(short = 'm', long = "mask")]
    mask: Option<String>,

    /// Output format: text, csv or json. Overrides SUBNET_CALC_FORMAT.
    #[arg(short = 'f', long = "format")]
    format: Option<OutputFormat>,

    /// Leave out the CSV header row.
    #[arg(long = "no-header", default_value_t = false)]
    no_header: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let config = Config::from_env();
    init_logging(&config.log_config)?;
    config.log_warnings();
    log::info!("#Start main()");

    let request = match cli.address {
        Some(address) => parse_request(&address, cli.mask.as_deref()),
        None => prompt_request(&mut io::stdin().lock(), &mut io::stdout())?,
    };

    let info = match request.and_then(|r| r.calculate()) {
        Ok(info) => info,
        Err(e) => {
            log::warn!("Calculation failed: {e}");
            eprintln!("{} {}", "ERROR".on_red(), error_message(&e).as_str().red());
            std::process::exit(e.exit_code());
        }
    };

    let rendered = match cli.format.unwrap_or(config.format) {
        OutputFormat::Text => render_text(&info),
        OutputFormat::Csv => render_csv(&info, !cli.no_header),
        OutputFormat::Json => render_json(&info)?,
    };
    println!("{rendered}");

    log::info!("#End main() {info}");
    Ok(())
}
