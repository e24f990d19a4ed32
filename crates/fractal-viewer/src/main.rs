use fractal_engine::logging::init_logging;
use fractal_viewer::ViewerConfig;

fn main() -> anyhow::Result<()> {
    let config = ViewerConfig::default();
    init_logging(config.logging.clone());

    log::info!("controls: arrows pan, W/S zoom, Esc quits");

    fractal_viewer::run(config)
}
