mod cli;

use chrono::Utc;
use cli::Args;
use fleet_components::adapters::outbound::clock::SystemClock;
use fleet_components::adapters::outbound::console::StderrProgressReporter;
use fleet_components::adapters::outbound::filesystem::JsonSnapshotRepository;
use fleet_components::adapters::outbound::network::{
    ApiSettings, EnvTokenProvider, HttpComponentRepository,
};
use fleet_components::application::dto::ReportFormat;
use fleet_components::application::factories::{
    FormatterFactory, PresenterFactory, PresenterType,
};
use fleet_components::application::read_models::ComponentReportBuilder;
use fleet_components::application::use_cases::{ComponentSessionController, SessionStatus};
use fleet_components::component_hierarchy::domain::{ComponentId, CriticalityFilter};
use fleet_components::config::{self, ConfigFile};
use fleet_components::ports::outbound::ComponentRepository;
use fleet_components::shared::error::{ExitCode, FleetError};
use fleet_components::shared::Result;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

/// Where the component list comes from, after merging flags and config
#[derive(Debug)]
enum ComponentSource {
    Snapshot(PathBuf),
    Api(ApiSettings),
}

/// What to do with the session once the vessel is loaded
struct SessionOptions {
    vessel_id: String,
    search: Option<String>,
    criticality: CriticalityFilter,
    expand_all: bool,
    expand: Vec<ComponentId>,
    select: Option<ComponentId>,
    format: ReportFormat,
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    let code = match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }
            eprintln!();

            e.downcast_ref::<FleetError>()
                .map(FleetError::exit_code)
                .unwrap_or(ExitCode::ApplicationError)
        }
    };

    process::exit(code.as_i32());
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = match &args.config {
        Some(path) => config::load_config_from_path(path)?,
        None => {
            let dir = std::env::current_dir()?;
            match config::discover_config(&dir)? {
                Some(config) => {
                    eprintln!(
                        "📋 Auto-discovered config file: {}",
                        dir.join(config::CONFIG_FILENAME).display()
                    );
                    config
                }
                None => ConfigFile::default(),
            }
        }
    };

    let source = resolve_source(&args, &config)?;
    let options = resolve_options(args, &config)?;

    match source {
        ComponentSource::Snapshot(dir) => execute(JsonSnapshotRepository::new(dir), options).await,
        ComponentSource::Api(settings) => {
            let repository =
                HttpComponentRepository::new(settings, Box::new(EnvTokenProvider::new()))?;
            execute(repository, options).await
        }
    }
}

/// CLI flags win over the config file; a snapshot directory wins over an API URL
/// from the same layer.
fn resolve_source(args: &Args, config: &ConfigFile) -> Result<ComponentSource> {
    if let Some(dir) = &args.snapshot_dir {
        return Ok(ComponentSource::Snapshot(dir.clone()));
    }

    let base_url = match (&args.api_url, &config.snapshot_dir, &config.api_base_url) {
        (Some(url), _, _) => url.clone(),
        (None, Some(dir), _) => return Ok(ComponentSource::Snapshot(dir.clone())),
        (None, None, Some(url)) => url.clone(),
        (None, None, None) => {
            return Err(FleetError::Validation {
                message: "No component source configured. Pass --api-url or --snapshot-dir, \
                          or set api_base_url / snapshot_dir in the config file"
                    .to_string(),
            }
            .into())
        }
    };

    let mut settings = ApiSettings::new(base_url);
    if let Some(secs) = args.timeout.or(config.timeout_secs) {
        if secs == 0 {
            return Err(FleetError::Validation {
                message: "--timeout must be greater than 0".to_string(),
            }
            .into());
        }
        settings.timeout = Duration::from_secs(secs);
    }
    if let Some(max_retries) = config.max_retries {
        settings.max_retries = max_retries;
    }
    Ok(ComponentSource::Api(settings))
}

fn resolve_options(args: Args, config: &ConfigFile) -> Result<SessionOptions> {
    let vessel_id = args
        .vessel
        .or_else(|| config.default_vessel_id.clone())
        .ok_or_else(|| FleetError::Validation {
            message: "No vessel given. Pass --vessel or set default_vessel_id in the config file"
                .to_string(),
        })?;

    Ok(SessionOptions {
        vessel_id,
        search: args.search,
        criticality: args
            .criticality
            .or_else(|| config.criticality())
            .unwrap_or_default(),
        expand_all: args.expand_all,
        expand: args.expand,
        select: args.select,
        format: args
            .format
            .or_else(|| args.output.as_deref().and_then(ReportFormat::for_output_path))
            .unwrap_or_default(),
        output: args.output,
    })
}

async fn execute<R: ComponentRepository>(repository: R, options: SessionOptions) -> Result<ExitCode> {
    let mut session = ComponentSessionController::new(
        repository,
        SystemClock::new(),
        StderrProgressReporter::new(),
    );

    if let SessionStatus::Failed { message } = session.load_vessel(&options.vessel_id).await {
        eprintln!("\n❌ {}\n", message);
        return Ok(ExitCode::FetchFailed);
    }

    if let Some(text) = &options.search {
        session.set_search_text(text);
    }
    session.set_criticality_filter(options.criticality);
    if options.expand_all {
        session.expand_all();
    }
    for id in &options.expand {
        session.toggle(*id);
    }
    if let Some(id) = options.select {
        session.select(id);
        if session.selected_component().is_none() {
            eprintln!(
                "⚠️  Warning: Component #{} does not exist on vessel '{}'",
                id, options.vessel_id
            );
        }
    }

    let report = ComponentReportBuilder::from_session(&session, Utc::now());

    eprintln!("{}", FormatterFactory::progress_message(options.format));
    let formatted_output = FormatterFactory::create(options.format).format(&report)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(options.output));
    presenter.present(&formatted_output)?;

    Ok(ExitCode::Success)
}
