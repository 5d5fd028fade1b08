use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use annotator::console::parse_command;
use annotator::surface::text::TextSurface;
use annotator::{Event, PlayerConfig, VideoRef};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (stderr, so stdout stays the rendered surface)
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("setting default subscriber failed")?;

    // 2. Arguments: <video> [config.json]
    let mut args = std::env::args().skip(1);
    let video = args.next().context("usage: annotator <video> [config.json]")?;
    let config = match args.next() {
        Some(path) => PlayerConfig::from_json_path(&path).with_context(|| format!("loading config from {}", path))?,
        None => PlayerConfig::default(),
    };

    // 3. Start Trial
    let handle = annotator::start(TextSurface::stdout(), VideoRef::new(video), config)?;
    tracing::info!(trial = %handle.trial_id(), "Annotation trial running");
    let tx_input = handle.sender();

    // 4. Spawn Input Reader (Stdin)
    tokio::spawn(async move {
        let stdin = tokio::io::stdin();
        let reader = BufReader::new(stdin);
        let mut lines = reader.lines();

        println!("Commands: pause <t> | play | click | add <word> | remove <word> | submit <t> | end | error | abort");

        while let Ok(Some(line)) = lines.next_line().await {
            let event = match parse_command(&line) {
                Ok(Some(event)) => event,
                Ok(None) => continue,
                Err(e) => {
                    tracing::warn!("{}", e);
                    continue;
                }
            };

            if let Err(e) = tx_input.send(event).await {
                tracing::debug!("Trial no longer accepting input: {}", e);
                break;
            }
        }

        // EOF without an ending: tear the trial down
        let _ = tx_input.send(Event::Abort).await;
    });

    // 5. Wait for the single result
    let result = handle.wait().await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
