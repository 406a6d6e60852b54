use anyhow::Context;
use clap::Parser;
use small_calc::app::commands;
use small_calc::utils::validation::Validate;
use small_calc::utils::logger;
use small_calc::{CalcConfig, CalcError, CliConfig, Command, Dispatcher, Repl, Session};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入配置，命令列參數優先
    let mut config = CalcConfig::load_or_default(cli.config.as_deref())
        .with_context(|| format!("failed to load config {:?}", cli.config))?;
    if let Some(precision) = cli.precision {
        config.display.precision = Some(precision);
    }

    if config.logging.json && !cli.verbose {
        logger::init_json_logger(config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }

    tracing::info!("Starting small-calc");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = config.validate() {
        fail(e, "Configuration validation failed");
    }

    let dispatcher = Dispatcher::with_builtins();

    match cli.command() {
        Command::Eval { a, op, b } => {
            match commands::eval(&dispatcher, config.precision(), &a, &op, &b) {
                Ok(result) => println!("{}", result),
                Err(e) => fail(e, "Evaluation failed"),
            }
        }
        Command::List { json } => println!("{}", commands::list(dispatcher.registry(), json)?),
        Command::Describe { op } => match commands::describe(dispatcher.registry(), &op) {
            Ok(description) => println!("{}", description),
            Err(e) => fail(e, "Describe failed"),
        },
        Command::Keys { sequence } => {
            let mut session = new_session(dispatcher, &config);
            for line in commands::keys(&mut session, &sequence) {
                println!("{}", line);
            }
        }
        Command::Repl => {
            let session = new_session(dispatcher, &config);
            let stdin = std::io::stdin();
            let mut repl = Repl::new(session, stdin.lock(), std::io::stdout());
            repl.run()?;
        }
    }

    Ok(())
}

fn fail(e: CalcError, context: &str) -> ! {
    tracing::error!(
        "❌ {}: {} (Category: {:?}, Severity: {:?})",
        context,
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(commands::exit_code(&e));
}

fn new_session(dispatcher: Dispatcher, config: &CalcConfig) -> Session {
    Session::with_display(dispatcher, config.default_text(), config.precision())
}
