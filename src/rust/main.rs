use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use bytesight::bot::discord;
use bytesight::{BotConfig, BotContext, Dispatcher, ImageClassifier, LabelList, RuntimeConfig};
use clap::Parser;
use log::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding keras_model.onnx and labels.txt (overrides MODEL_BASE_DIRECTORY)
    #[arg(short, long)]
    model_dir: Option<PathBuf>,

    /// Prefix that marks a message as a bot command
    #[arg(short, long, default_value = bytesight::config::DEFAULT_PREFIX)]
    prefix: String,

    /// ONNX Runtime inter-op threads (0 lets the runtime decide)
    #[arg(long, default_value_t = 0)]
    inter_threads: usize,

    /// ONNX Runtime intra-op threads (0 lets the runtime decide)
    #[arg(long, default_value_t = 0)]
    intra_threads: usize,
}

fn load_classifier(config: &BotConfig, runtime: RuntimeConfig) -> anyhow::Result<ImageClassifier> {
    let model_path = config.model_path();
    let classifier = ImageClassifier::builder()
        .with_runtime_config(runtime)
        .with_model_file(&model_path)
        .with_context(|| {
            format!(
                "Could not load model from {}. Please check the path and file integrity.",
                model_path.display()
            )
        })?
        .with_labels(LabelList::load_or_default(config.labels_path()))
        .build()?;
    info!("Successfully loaded model from: {}", model_path.display());
    Ok(classifier)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    bytesight::init_logger();
    let args = Args::parse();

    info!("=== Starting ByteSight ===");

    let mut config = BotConfig::from_env().context(
        "Set DISCORD_BOT_TOKEN in the environment before starting the bot",
    )?;
    if let Some(dir) = args.model_dir {
        config = config.with_model_dir(dir);
    }
    let config = config.with_prefix(args.prefix)?;

    let start_time = Instant::now();
    let runtime = RuntimeConfig::with_threads(args.inter_threads, args.intra_threads);
    let classifier = load_classifier(&config, runtime)?;
    let classifier_info = classifier.info();
    info!(
        "Classifier ready in {:.2?}: {} classes, input {}x{} ({:?})",
        start_time.elapsed(),
        classifier_info.num_classes,
        classifier_info.input_size.width,
        classifier_info.input_size.height,
        classifier_info.input_size.layout,
    );

    let context = BotContext::new(Arc::new(classifier), &config.prefix);
    discord::run(&config.token, Dispatcher::new(context))
        .await
        .context("Discord client stopped with an error")?;

    Ok(())
}
