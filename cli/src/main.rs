mod payload;
mod transport;


use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use tracing::{info, warn};

use canvas::accessor::{CanvasAccessor, FetchOutcome};
use canvas::config::{DEFAULT_NODE_URL, DEFAULT_PROCESS_ID, DEFAULT_STATE_KEY, ProcessConfig};
use canvas::consts::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_POLL_INTERVAL_MS, DEFAULT_SETTLE_DELAY_MS,
    DEFAULT_STICKER_SIZE,
};
use canvas::error::CanvasError;
use canvas::grid::{Canvas, check_bounds};
use canvas::pixel::Pixel;
use canvas::poll::{PollHandle, run_polling};
use canvas::sticker::{StickerCell, StickerComposer};
use canvas::wire::{OutboundMessage, PixelWrite};

use payload::{Expectation, expectations_for, mismatches, random_writes, render_grid, test_pattern, test_pattern_checkpoints};
use transport::{CaptureWriter, HttpReader};

type CliAccessor = CanvasAccessor<HttpReader, CaptureWriter>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("{0}")]
    Canvas(#[from] CanvasError),
    #[error("io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("health check failed: HTTP {0}")]
    HealthCheck(u16),
    #[error("could not read canvas state from {0}")]
    FetchFailed(String),
    #[error("canvas did not match after {secs}s:\n  {}", mismatches.join("\n  "))]
    VerifyTimeout { secs: u64, mismatches: Vec<String> },
}

#[derive(Parser, Debug)]
#[command(name = "place-cli", about = "Read, watch and prepare writes for the shared pixel canvas")]
struct Cli {
    #[arg(long, env = "PLACE_NODE_URL", default_value = DEFAULT_NODE_URL)]
    node_url: String,

    #[arg(long, env = "PLACE_PROCESS_ID", default_value = DEFAULT_PROCESS_ID)]
    process_id: String,

    #[arg(long, env = "PLACE_STATE_KEY", default_value = DEFAULT_STATE_KEY)]
    state_key: String,

    #[arg(long, env = "PLACE_CANVAS_WIDTH", default_value_t = DEFAULT_CANVAS_WIDTH)]
    width: usize,

    #[arg(long, env = "PLACE_CANVAS_HEIGHT", default_value_t = DEFAULT_CANVAS_HEIGHT)]
    height: usize,

    #[arg(long, env = "PLACE_POLL_INTERVAL_MS", default_value_t = DEFAULT_POLL_INTERVAL_MS)]
    poll_interval_ms: u64,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn process_config(&self) -> ProcessConfig {
        ProcessConfig {
            node_url: self.node_url.trim_end_matches('/').to_owned(),
            process_id: self.process_id.clone(),
            state_key: self.state_key.clone(),
            poll_interval_ms: self.poll_interval_ms,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            canvas_width: self.width,
            canvas_height: self.height,
            sticker_size: DEFAULT_STICKER_SIZE,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the node answers its metadata endpoint.
    Ping,
    /// Fetch the canvas once and print it.
    Show {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Poll the canvas and print every refresh until Ctrl-C.
    Watch {
        #[arg(long, help = "Stop after this many refreshes")]
        max_ticks: Option<u64>,
    },
    /// Validate a write and print its unsigned message envelope.
    Payload(PayloadCommand),
    /// Poll until the canvas shows the expected colors.
    Verify(VerifyArgs),
}

#[derive(Args, Debug)]
struct PayloadCommand {
    #[command(subcommand)]
    command: PayloadSubcommand,
}

#[derive(Subcommand, Debug)]
enum PayloadSubcommand {
    /// Single `changePixel` write.
    #[command(allow_negative_numbers = true)]
    Pixel {
        x: i32,
        y: i32,
        #[arg(long, value_parser = payload::parse_color)]
        color: Pixel,
    },
    /// Sticker centered on (X, Y), cropped to the canvas.
    #[command(allow_negative_numbers = true)]
    Sticker {
        x: i32,
        y: i32,
        #[arg(long = "cell", value_parser = payload::parse_cell, help = "Sticker cell as DX,DY,HEX (repeatable)")]
        cells: Vec<StickerCell>,
        #[arg(long, env = "PLACE_STICKER_SIZE", default_value_t = DEFAULT_STICKER_SIZE)]
        size: usize,
    },
    /// 3×3 smoke pattern: red center, black corners.
    TestPattern,
    /// Reproducible random writes.
    Random {
        #[arg(long, default_value_t = 10)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

#[derive(Args, Debug)]
struct VerifyArgs {
    #[arg(long = "expect", value_parser = payload::parse_expectation, help = "Expected cell as X,Y,HEX (repeatable)")]
    expectations: Vec<Expectation>,

    #[arg(long, requires = "seed", help = "Expect the final state of `payload random` with the same count and seed")]
    random_count: Option<usize>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 60)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = cli.process_config();

    match cli.command {
        Command::Ping => run_ping(&config).await,
        Command::Show { json } => run_show(connect(config)?, json).await,
        Command::Watch { max_ticks } => run_watch(connect(config)?, max_ticks).await,
        Command::Payload(payload) => run_payload(connect(config)?, payload).await,
        Command::Verify(args) => run_verify(connect(config)?, args).await,
    }
}

fn connect(config: ProcessConfig) -> Result<CliAccessor, CliError> {
    Ok(CanvasAccessor::new(config, HttpReader::new(reqwest::Client::new()), CaptureWriter::default())?)
}

async fn run_ping(config: &ProcessConfig) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let response = client.get(config.health_url()).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::HealthCheck(status.as_u16()));
    }
    println!("ok");
    Ok(())
}

async fn run_show(accessor: CliAccessor, json: bool) -> Result<(), CliError> {
    let FetchOutcome::Updated(_) = accessor.fetch().await else {
        return Err(CliError::FetchFailed(accessor.config().state_url()));
    };
    let canvas = accessor.snapshot();
    if json {
        print_json(&serde_json::to_value(canvas.rows())?)?;
    } else {
        println!("{}", render_grid(&canvas));
    }
    Ok(())
}

async fn run_watch(accessor: CliAccessor, max_ticks: Option<u64>) -> Result<(), CliError> {
    let handle = PollHandle::new();
    let listener_handle = handle.clone();
    accessor.set_listener(move |canvas, revision| {
        println!("revision {revision}\n{}\n", render_grid(canvas));
        if max_ticks.is_some_and(|max| revision >= max) {
            listener_handle.cancel();
        }
    });

    let polling = run_polling(&accessor, &handle);
    tokio::pin!(polling);
    tokio::select! {
        ticks = &mut polling => info!(ticks, "watch finished"),
        signal = tokio::signal::ctrl_c() => {
            signal?;
            handle.cancel();
            info!("watch cancelled");
        }
    }
    Ok(())
}

async fn run_payload(accessor: CliAccessor, payload: PayloadCommand) -> Result<(), CliError> {
    let config = accessor.config().clone();
    let messages = match payload.command {
        PayloadSubcommand::Pixel { x, y, color } => {
            accessor.place_pixel(x, y, color).await?;
            accessor.writer().take()
        }
        PayloadSubcommand::Sticker { x, y, cells, size } => {
            let mut composer = StickerComposer::new(size);
            for cell in cells {
                composer.set_cell(cell.x, cell.y, cell.color)?;
            }
            let sent = accessor
                .place_sticker_pattern(x, y, composer.pattern(), composer.half_extent())
                .await?;
            info!(pixels = sent, "sticker cropped to canvas");
            accessor.writer().take()
        }
        PayloadSubcommand::TestPattern => vec![batch(&config, &test_pattern())?],
        PayloadSubcommand::Random { count, seed } => {
            vec![batch(&config, &random_writes(count, seed, config.canvas_width, config.canvas_height))?]
        }
    };
    for message in messages {
        print_json(&serde_json::to_value(&message)?)?;
    }
    Ok(())
}

async fn run_verify(accessor: CliAccessor, args: VerifyArgs) -> Result<(), CliError> {
    let config = accessor.config().clone();
    let mut expectations = args.expectations;
    if let (Some(count), Some(seed)) = (args.random_count, args.seed) {
        expectations.extend(expectations_for(&random_writes(count, seed, config.canvas_width, config.canvas_height)));
    }
    if expectations.is_empty() {
        expectations = test_pattern_checkpoints();
    }

    let handle = PollHandle::new();
    let listener_handle = handle.clone();
    let matched = Rc::new(Cell::new(false));
    let listener_matched = Rc::clone(&matched);
    let listener_expectations = expectations.clone();
    accessor.set_listener(move |canvas, revision| {
        let missing = mismatches(canvas, &listener_expectations);
        if missing.is_empty() {
            listener_matched.set(true);
            listener_handle.cancel();
        } else {
            info!(revision, remaining = missing.len(), "waiting for canvas to match");
        }
    });

    let timeout = Duration::from_secs(args.timeout_secs);
    if tokio::time::timeout(timeout, run_polling(&accessor, &handle)).await.is_err() {
        handle.cancel();
        warn!(secs = args.timeout_secs, "verify timed out");
    }

    if matched.get() {
        println!("all {} expectations matched", expectations.len());
        return Ok(());
    }
    Err(verify_failure(&config, &accessor.snapshot(), accessor.revision(), &expectations, args.timeout_secs))
}

/// Error for a verify run that ended without a match. Revision 0 means no
/// fetch ever succeeded, so the cache is the blank placeholder and comparing
/// against it would report misleading mismatches.
fn verify_failure(
    config: &ProcessConfig,
    canvas: &Canvas,
    revision: u64,
    expectations: &[Expectation],
    secs: u64,
) -> CliError {
    if revision == 0 {
        return CliError::FetchFailed(config.state_url());
    }
    CliError::VerifyTimeout { secs, mismatches: mismatches(canvas, expectations) }
}

/// Bounds-check every write, then wrap them in one `changePixels` message.
fn batch(config: &ProcessConfig, writes: &[PixelWrite]) -> Result<OutboundMessage, CliError> {
    for write in writes {
        check_bounds(write.x, write.y, config.canvas_width, config.canvas_height)?;
    }
    Ok(OutboundMessage::change_pixels(&config.process_id, writes)?)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
