use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use railvox_gateway::agent::SupportAgent;
use railvox_gateway::chat::{ChatSession, GeminiChat};
use railvox_gateway::console::Console;
use railvox_gateway::data::{PnrStore, RailwayData};
use railvox_gateway::enrich::QueryEnricher;
use railvox_gateway::persona::build_system_prompt;
use railvox_gateway::voice::{AudioCapture, AudioPlayback, TextToSpeech, VoicePipeline, rms};
use railvox_gateway::Config;

/// Railvox - voice customer-service gateway for railway operators
#[derive(Parser)]
#[command(name = "railvox", version, about)]
struct Cli {
    /// Conversational model identifier
    #[arg(long, env = "RAILVOX_MODEL")]
    model: Option<String>,

    /// Path to the tabular PNR snapshot file
    #[arg(long, env = "RAILVOX_PNR_FILE")]
    pnr_file: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable voice features (for hosts without audio hardware)
    #[arg(long, env = "RAILVOX_DISABLE_VOICE")]
    disable_voice: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Look up a booking's status by PNR number
    Pnr {
        /// Booking reference number
        pnr: String,
    },
    /// Test microphone input
    TestMic {
        /// Duration in seconds
        #[arg(short, long, default_value = "5")]
        duration: u64,
    },
    /// Test speaker output
    TestSpeaker,
    /// Test TTS output
    TestTts {
        /// Text to speak
        #[arg(default_value = "Hello! This is a test of the text to speech system.")]
        text: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "info,railvox_gateway=info",
        1 => "info,railvox_gateway=debug",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fatal: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let pnr_file = cli.pnr_file.clone();

    // Handle subcommands
    if let Some(cmd) = cli.command {
        return match cmd {
            Command::Pnr { pnr } => cmd_pnr(pnr_file, &pnr),
            Command::TestMic { duration } => test_mic(duration).await,
            Command::TestSpeaker => test_speaker().await,
            Command::TestTts { text } => test_tts(&text).await,
        };
    }

    tracing::info!(
        model = ?cli.model,
        disable_voice = cli.disable_voice,
        "starting railvox gateway"
    );

    // Load configuration; the chat credential is required up front
    let mut config = Config::load(cli.disable_voice)?;
    if let Some(model) = cli.model {
        config.llm_model = model;
    }
    if let Some(path) = pnr_file {
        config.pnr_file = Some(path);
    }
    tracing::debug!(
        model = %config.llm_model,
        voice_enabled = config.voice.enabled,
        pnr_file = ?config.pnr_file,
        "loaded configuration"
    );

    // Assemble the pipeline: data -> enricher -> chat session -> console
    let data = Arc::new(RailwayData::builtin());
    let system_prompt = build_system_prompt(&config.persona, &data);

    let backend = Arc::new(GeminiChat::new(
        config.api_keys.gemini.clone(),
        config.llm_model.clone(),
    )?);
    let session = ChatSession::new(backend, system_prompt);
    let enricher = QueryEnricher::new(Arc::clone(&data));
    let agent = SupportAgent::new(enricher, session);

    let voice = if config.voice.enabled {
        match VoicePipeline::from_config(&config.voice, &config.api_keys) {
            Ok(pipeline) => Some(pipeline),
            Err(e) => {
                tracing::warn!(error = %e, "voice unavailable, continuing text-only");
                None
            }
        }
    } else {
        None
    };

    if voice.is_some() {
        tracing::info!("railvox gateway ready (voice enabled)");
    } else {
        tracing::info!("railvox gateway ready (text-only mode)");
    }

    Console::new(agent, config.persona.clone(), voice)
        .run()
        .await?;

    Ok(())
}

/// Look up a booking's status in the tabular PNR store
fn cmd_pnr(cli_path: Option<PathBuf>, pnr: &str) -> anyhow::Result<()> {
    let config = Config::load(true)?;

    let path = cli_path.or(config.pnr_file).ok_or_else(|| {
        anyhow::anyhow!("no PNR file configured (use --pnr-file or data.pnr_file)")
    })?;

    let store = PnrStore::load(&path)?;
    println!("{}", store.status_line(pnr));

    Ok(())
}

/// Test microphone input
async fn test_mic(duration: u64) -> anyhow::Result<()> {
    println!("Testing microphone for {duration} seconds...");
    println!("Speak into your microphone!\n");

    let mut capture = AudioCapture::new()?;
    println!("Sample rate: {} Hz", railvox_gateway::voice::SAMPLE_RATE);
    println!("---");

    for i in 0..duration {
        let samples = capture.record_timed(Duration::from_secs(1)).await?;
        let energy = rms(&samples);
        let peak = samples.iter().map(|s| s.abs()).fold(0.0f32, f32::max);

        // Visual meter
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let meter_len = (energy * 100.0).min(50.0) as usize;
        let meter: String = "█".repeat(meter_len) + &" ".repeat(50 - meter_len);

        println!(
            "[{:2}s] RMS: {:.4} | Peak: {:.4} | [{}]",
            i + 1,
            energy,
            peak,
            meter
        );
    }

    println!("\n---");
    println!("If you saw movement in the meter, your mic is working!");
    println!("If RMS stayed near 0, check:");
    println!("  1. Is your mic plugged in?");
    println!("  2. Run: pactl info | grep 'Default Source'");
    println!("  3. Run: arecord -l (to list devices)");
    println!("  4. Try: pavucontrol (to check levels)");

    Ok(())
}

/// Test speaker output with a sine wave
async fn test_speaker() -> anyhow::Result<()> {
    println!("Testing speaker output...");
    println!("You should hear a 440Hz tone for 2 seconds\n");

    let mut playback = AudioPlayback::new()?;

    // Generate 2 seconds of 440Hz sine wave at 24kHz sample rate
    let sample_rate = 24000_i32;
    let frequency = 440.0_f32;
    let duration_secs = 2.0_f32;
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let num_samples = (sample_rate as f32 * duration_secs) as usize;

    #[allow(clippy::cast_precision_loss)]
    let samples: Vec<f32> = (0..num_samples)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            (2.0 * std::f32::consts::PI * frequency * t).sin() * 0.3 // 30% volume
        })
        .collect();

    println!("Playing {} samples at {} Hz...", samples.len(), sample_rate);

    playback.play(samples).await?;

    println!("\n---");
    println!("If you heard the tone, your speakers are working!");
    println!("If you didn't hear anything, check:");
    println!("  1. Run: pactl info | grep 'Default Sink'");
    println!("  2. Run: pactl list sinks short");
    println!("  3. Try: pavucontrol (to check output levels)");

    Ok(())
}

/// Test TTS synthesis and playback
async fn test_tts(text: &str) -> anyhow::Result<()> {
    println!("Testing TTS with text: \"{text}\"\n");

    let config = Config::load(true)?;

    let key = config
        .api_keys
        .openai
        .clone()
        .ok_or_else(|| anyhow::anyhow!("OPENAI_API_KEY required for TTS test"))?;

    let tts = TextToSpeech::new_openai(
        key,
        config.voice.tts_voice.clone(),
        config.voice.tts_speed,
        config.voice.tts_model.clone(),
    )?;

    println!("Synthesizing speech...");
    let mp3_data = tts.synthesize(text).await?;
    println!("Got {} bytes of audio data", mp3_data.len());

    println!("Playing audio...");
    let mut playback = AudioPlayback::new()?;
    playback.play_mp3(&mp3_data).await?;

    println!("\n---");
    println!("If you heard the speech, TTS is working!");

    Ok(())
}
