use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

use configs::{AppConfig, LogFormat};

fn init_logging(format: LogFormat) {
    match format {
        LogFormat::Compact => common::utils::logging::init_logging_default(),
        LogFormat::Json => common::utils::logging::init_logging_json(),
    }
    info!(service = "entities", event = "logger_init", "tracing subscriber initialized");
}

async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    service::runtime::ensure_env(&cfg.storage.data_dir).await?;
    let svc = service::runtime::open_json_service(&cfg.storage).await?;
    let cities = svc.get_all_cities().await?;
    info!(service = "entities", event = "ready", cities = cities.len(), "entity service ready");
    Ok(())
}

fn main() -> std::process::ExitCode {
    // .env first so RUST_LOG, CONFIG_PATH and DATA_DIR apply
    dotenv().ok();

    let cfg = AppConfig::load_and_validate();
    let format = cfg.as_ref().map(|c| c.logging.format).unwrap_or_default();
    init_logging(format);

    let cfg = match cfg {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = "entities", event = "config_invalid", error = %e, "failed to load configuration");
            return std::process::ExitCode::FAILURE;
        }
    };

    let run_id = Uuid::new_v4();
    info!(
        service = "entities",
        event = "start",
        %run_id,
        pid = std::process::id(),
        version = env!("CARGO_PKG_VERSION"),
        data_dir = %cfg.storage.data_dir,
        "entities bootstrap starting"
    );

    let rt = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "entities", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    match rt.block_on(run(cfg)) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            error!(service = "entities", event = "run_failed", %run_id, error = %e, "bootstrap failed");
            std::process::ExitCode::FAILURE
        }
    }
}
