use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand};

use script_score_core::comparison::domain::script_comparator::ScriptComparator;
use script_score_core::pipeline::score_pronunciation_use_case::ScorePronunciationUseCase;
use script_score_core::pipeline::transcribe_audio_use_case::TranscribeAudioUseCase;
use script_score_core::shared::constants::DEFAULT_AUDIO_FILE_NAME;
use script_score_core::transcription::domain::audio_clip::AudioClip;
use script_score_core::transcription::domain::speech_transcriber::SpeechTranscriber;
use script_score_core::transcription::infrastructure::openai_transcriber::OpenAiTranscriber;

/// Score a spoken attempt against a reference script.
#[derive(Parser)]
#[command(name = "script-score", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare a reference script with an already transcribed attempt.
    Compare {
        #[command(flatten)]
        reference: ReferenceArgs,

        /// Transcribed attempt.
        #[arg(long)]
        hypothesis: Option<String>,

        /// File containing the transcribed attempt.
        #[arg(long)]
        hypothesis_file: Option<PathBuf>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Transcribe an audio file and print the lowercased text.
    Transcribe {
        /// Audio file (wav, mp3, m4a, ...).
        audio: PathBuf,

        #[command(flatten)]
        service: ServiceArgs,
    },

    /// Transcribe an audio file and score it against a reference script.
    Score {
        /// Audio file (wav, mp3, m4a, ...).
        audio: PathBuf,

        #[command(flatten)]
        reference: ReferenceArgs,

        #[command(flatten)]
        service: ServiceArgs,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct ReferenceArgs {
    /// Reference script.
    #[arg(long)]
    reference: Option<String>,

    /// File containing the reference script.
    #[arg(long)]
    reference_file: Option<PathBuf>,
}

#[derive(Args)]
struct ServiceArgs {
    /// Transcription service API key.
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Override the transcription endpoint URL.
    #[arg(long)]
    endpoint: Option<String>,

    /// Override the transcription model.
    #[arg(long)]
    model: Option<String>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Compare {
            reference,
            hypothesis,
            hypothesis_file,
            json,
        } => {
            let reference = resolve_reference(&reference)?;
            let hypothesis = resolve_text(hypothesis, hypothesis_file, "hypothesis")?;
            run_compare(&reference, &hypothesis, json)
        }
        Command::Transcribe { audio, service } => run_transcribe(&audio, &service),
        Command::Score {
            audio,
            reference,
            service,
            json,
        } => {
            let reference = resolve_reference(&reference)?;
            run_score(&audio, &reference, &service, json)
        }
    }
}

fn run_compare(
    reference: &str,
    hypothesis: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let comparison = ScriptComparator::compare(reference, hypothesis)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
    } else {
        println!("Score: {:.2}", comparison.score);
        println!("{}", comparison.html);
    }
    Ok(())
}

fn run_transcribe(audio: &Path, service: &ServiceArgs) -> Result<(), Box<dyn std::error::Error>> {
    let clip = read_audio(audio)?;
    let use_case = TranscribeAudioUseCase::new(build_transcriber(service)?);
    println!("{}", use_case.run(&clip)?);
    Ok(())
}

fn run_score(
    audio: &Path,
    reference: &str,
    service: &ServiceArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let clip = read_audio(audio)?;
    let use_case = ScorePronunciationUseCase::new(build_transcriber(service)?);
    let report = use_case.run(reference, &clip)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Original: {}", report.original_script);
        println!("Spoken:   {}", report.user_script);
        println!("Score: {:.2}", report.score);
        println!("{}", report.html);
    }
    Ok(())
}

fn build_transcriber(
    service: &ServiceArgs,
) -> Result<Box<dyn SpeechTranscriber>, Box<dyn std::error::Error>> {
    let api_key = service
        .api_key
        .clone()
        .ok_or("An API key is required: pass --api-key or set OPENAI_API_KEY")?;

    let mut transcriber = OpenAiTranscriber::new(api_key)?;
    if let Some(endpoint) = &service.endpoint {
        transcriber = transcriber.with_endpoint(endpoint.clone());
    }
    if let Some(model) = &service.model {
        transcriber = transcriber.with_model(model.clone());
    }
    log::info!(
        "Using transcription model {} at {}",
        transcriber.model(),
        transcriber.endpoint()
    );
    Ok(Box::new(transcriber))
}

fn resolve_reference(args: &ReferenceArgs) -> Result<String, Box<dyn std::error::Error>> {
    resolve_text(args.reference.clone(), args.reference_file.clone(), "reference")
}

/// Exactly one of inline text or a file path must be given.
fn resolve_text(
    inline: Option<String>,
    file: Option<PathBuf>,
    what: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    match (inline, file) {
        (Some(_), Some(_)) => {
            Err(format!("--{what} and --{what}-file are mutually exclusive").into())
        }
        (Some(text), None) => Ok(text),
        (None, Some(path)) => {
            if !path.exists() {
                return Err(format!("{what} file not found: {}", path.display()).into());
            }
            Ok(fs::read_to_string(&path)?)
        }
        (None, None) => Err(format!("Either --{what} or --{what}-file is required").into()),
    }
}

fn read_audio(path: &Path) -> Result<AudioClip, Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!("Audio file not found: {}", path.display()).into());
    }
    let bytes = fs::read(path)?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(DEFAULT_AUDIO_FILE_NAME);
    Ok(AudioClip::new(file_name, bytes))
}
