use clap::Parser;
use ride_alloc::utils::logger;
use ride_alloc::{write_report, AllocError, AllocationEngine, CliConfig, FileRoster, Settings};

fn run(settings: &Settings) -> Result<(), AllocError> {
    let engine = AllocationEngine::new(FileRoster::new(&settings.input_path))
        .with_policy(settings.failed_groups);
    let allocation = engine.run()?;

    let stdout = std::io::stdout();
    write_report(&allocation, &settings.report_options(), stdout.lock())
}

fn main() {
    let cli = match CliConfig::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let e = AllocError::Usage {
                message: e.render().to_string(),
            };
            eprint!("{}", e);
            std::process::exit(e.exit_code());
        }
    };

    let settings = match Settings::resolve(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    };

    if settings.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(settings.verbose);
    }

    tracing::info!("Starting ride-alloc on {}", settings.input_path);
    tracing::debug!("Settings: {:?}", settings);

    if let Err(e) = run(&settings) {
        tracing::error!("❌ Allocation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }
}
