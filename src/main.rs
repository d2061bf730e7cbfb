//! trucli - an interactive command shell with typed, self-documenting commands.

mod cli;

use cli::Cli;
use tracing::{error, info};
use trucli::commands::{CommandRegistry, LineOutput, ReaderInput, Shell, WriterOutput};
use trucli::config::ShellConfig;
use trucli::demo::{register_demo_commands, BANNER};
use trucli::error::Result;
use trucli::logging;

fn main() {
    let cli = Cli::parse_args();

    if let Err(e) = logging::init(&cli.log_target()) {
        eprintln!("Warning: Could not create log file: {e}");
    }

    if let Err(e) = run(&cli) {
        error!("{}: {}", e.category(), e);
        eprintln!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let config = ShellConfig::load_from_file(&config_path)?;

    let mut registry = CommandRegistry::new();
    register_demo_commands(&mut registry)?;

    let mut shell = Shell::new(registry, ReaderInput::stdio(), WriterOutput::stdout())
        .with_prompt(cli.resolve_prompt(&config));

    if cli.is_scripted() {
        info!("Executing {} line(s) from the command line", cli.execute.len());
        return shell.run_lines(&cli.execute);
    }

    let banner = config.banner.as_deref().unwrap_or(BANNER);
    shell.output_mut().write_line(banner)?;
    shell.run()?;
    info!("Session ended");
    Ok(())
}
