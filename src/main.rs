// sortviz: terminal sorting algorithm visualiser

use std::io;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use sortviz::cli::{CliArgs, open_log_file, parse_args, usage};
use sortviz::config::Config;
use sortviz::errors::SortvizError;
use sortviz::headless;
use sortviz::session::Session;
use sortviz::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("sortviz");

    let cli = match parse_args(args.iter().skip(1).cloned()) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.is_usage_error() {
                eprintln!();
                eprint!("{}", usage(program_name));
            }
            std::process::exit(1);
        }
    };

    if cli.help {
        print!("{}", usage(program_name));
        return Ok(());
    }

    init_logging(&cli)?;

    let config = Config {
        seed: cli.seed,
        ..Config::default()
    };

    if let Some(algorithm) = cli.headless {
        let report = headless::run(config, algorithm)?;
        println!("{}", report);
        return Ok(());
    }

    log::info!(
        "starting with {} bars (seed: {:?})",
        config.bar_count(),
        config.seed
    );

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let session = Session::new(config.clone());
    let mut app = App::new(session, config);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Logs go to `--log <file>` when given. Headless runs fall back to stderr;
/// the TUI owns the terminal, so without a file it logs nothing.
fn init_logging(cli: &CliArgs) -> Result<(), SortvizError> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    match &cli.log_file {
        Some(path) => {
            let file = open_log_file(path)?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None if cli.headless.is_some() => {}
        None => return Ok(()),
    }

    builder.init();
    Ok(())
}
