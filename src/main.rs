use clap::Parser;
use range_panel::adapters::memory::{MemoryDateInput, MemoryLabel, MemorySection};
use range_panel::adapters::page::{Doctype, DocumentSnapshot, HttpPageSource};
use range_panel::adapters::status::TracingReporter;
use range_panel::core::clipboard::page_html;
use range_panel::core::defaults::fill_defaults;
use range_panel::core::toggle::{toggle, HIDDEN_CLASS};
use range_panel::core::{DateControl, LabelControl};
use range_panel::domain::model::SHOW_LABEL;
use range_panel::utils::error::ErrorSeverity;
use range_panel::utils::logger;
use range_panel::utils::validation::{validate_required_field, Validate};
use range_panel::{
    CliConfig, Command, DateRangeInput, DateRangeResolver, PanelConfig, PanelError, SystemClock,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.load_panel_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    let verbose = cli.verbose || config.verbose_logs();
    if config.json_logs() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&cli.command, &config).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 2,
            ErrorSeverity::Medium => 3,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 4,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run(command: &Command, config: &PanelConfig) -> Result<(), PanelError> {
    match command {
        Command::Resolve { start, end } => {
            let resolver =
                DateRangeResolver::with_policy(SystemClock, TracingReporter, config.policy());
            let input = DateRangeInput::new(start.as_deref(), end.as_deref());
            let range = resolver.resolve(&input)?;

            let output = serde_json::json!({
                "start": range.start_local().to_rfc3339(),
                "end": range.end_local().to_rfc3339(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Command::Defaults => {
            let mut start = MemoryDateInput::default();
            let mut end = MemoryDateInput::default();
            fill_defaults(Some(&mut start), Some(&mut end), &SystemClock, &config.policy());
            println!("{} {}", start.value(), end.value());
        }
        Command::Toggle { times } => {
            let mut section = MemorySection::with_classes(&["advanced", HIDDEN_CLASS]);
            let mut label = MemoryLabel::new(SHOW_LABEL);
            for _ in 0..*times {
                if let Some(state) = toggle(Some(&mut section), Some(&mut label)) {
                    println!("{:?}: {}", state, label.text());
                }
            }
        }
        Command::FetchPage { .. } => {
            let page = validate_required_field("page.url", &config.page)?;
            let snapshot = DocumentSnapshot::new(Some(Doctype::html()), "<html></html>");
            let source = HttpPageSource::new(page.url.as_str(), snapshot);
            let html = page_html(&source).await;
            tracing::info!("📄 Page source: {} bytes", html.len());
            println!("{}", html);
        }
    }

    Ok(())
}
