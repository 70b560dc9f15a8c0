use anyhow::Context;
use archiveplot::cli::Args;
use archiveplot::config::ConfigManager;
use archiveplot::data::{ArchiveConnector, GenerationRange};
use archiveplot::engines::{ArchivePipeline, GlobalColorScale, LogProgress};
use archiveplot::render::{FigureSink, LogSink};
use archiveplot::ui::ViewerSink;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut manager = ConfigManager::new();
    if let Some(path) = &args.config {
        manager
            .load_from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?;
    }
    let config = manager.get();

    if args.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let range = GenerationRange::new(args.dump_period, args.max_gens)?;
    let base_dir = std::env::current_dir().context("resolving working directory")?;
    let connector = ArchiveConnector::new(&base_dir, &args.data_folder, config.archive.clone());
    let pipeline = ArchivePipeline::new(connector, range);

    let output = pipeline
        .run(&mut LogProgress)
        .with_context(|| format!("processing archives in '{}'", args.data_folder))?;

    let mut sink: Box<dyn FigureSink> = if args.nogui {
        Box::new(LogSink::new())
    } else {
        Box::new(ViewerSink::new(config.viewer.clone(), scale_summary(&output.scale)))
    };

    output.render_into(sink.as_mut())?;
    if output.datasets.is_empty() {
        log::warn!("No figures to show");
        return Ok(());
    }
    sink.show()?;

    Ok(())
}

fn scale_summary(scale: &GlobalColorScale) -> String {
    match scale {
        GlobalColorScale::Max(max) => format!("Color scale: |variance| / {:.4}", max),
        GlobalColorScale::Zero => "Color scale: all variances zero".to_string(),
        GlobalColorScale::Empty => "Color scale: no data".to_string(),
    }
}
