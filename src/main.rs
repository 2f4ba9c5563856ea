use reg_assist::cli::{self, SessionOutcome};
use reg_assist::config::AppConfig;
use reg_assist::gateway::LlmGateway;
use reg_assist::llm::create_provider;
use reg_assist::schema::default_schema;
use reg_assist::session::Controller;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Configuration is read once; a missing API key is fatal here, before
    // any session starts.
    let config = AppConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!("  export OPENAI_API_KEY=sk-... (or ANTHROPIC_API_KEY with REG_ASSIST_BACKEND=anthropic)");
        std::process::exit(1);
    });

    eprintln!("📝 Reg Assist v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Model: {}", config.llm.model);
    eprintln!();
    eprintln!("👋 Hello! Let's go through a short registration.");
    eprintln!("Tips: type 'help' for an explanation of the CURRENT field, or 'quit' to exit.");
    eprintln!();

    let provider = create_provider(&config.llm)?;
    let gateway = LlmGateway::new(provider);
    let schema = default_schema()?;

    let mut controller = Controller::new(schema, gateway);
    match cli::run_stdin(&mut controller).await? {
        SessionOutcome::Completed(record) => {
            eprintln!("\n✅ Final JSON:");
            println!("{}", record.to_json_pretty()?);
        }
        SessionOutcome::Cancelled => {}
    }

    Ok(())
}
