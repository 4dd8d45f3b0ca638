//! saytext entry point
//!
//! One linear pipeline per invocation: collect the text and voice
//! preferences, pick a matching voice, hand the request to a speech engine,
//! and report the outcome. Any failure prints a single line to stderr and
//! exits non-zero.

use log::{debug, error, info};
use saytext::config::Config;
use saytext::input;
use saytext::prefs::{join_words, parse_rate, Gender};
use saytext::report;
use saytext::speech::{create_engine, SpeechRequest};
use saytext::voice::select_voice;
use saytext::{Result, SayError};
use std::io;
use std::path::PathBuf;
use std::process;

/// Spoken when no words are given on the command line
const SAMPLE_TEXT: &str = "Quy trình xử lý ô nhiễm dinh dưỡng và tảo độc \
bằng mô hình công nghệ sinh thái sử dụng thực vật thủy sinh";

#[derive(Default)]
struct CliArgs {
    words: Vec<String>,
    output: Option<PathBuf>,
    interactive: bool,
    list_voices: bool,
    language: Option<String>,
    country: Option<String>,
    gender: Option<String>,
    rate: Option<String>,
    help: bool,
}

/// Prints the usage to the standard output.
fn usage() {
    println!("Usage: {} [OPTIONS] [word]...", saytext::APP_NAME);
    println!();
    println!("Speak the given words (or a built-in sample) with a native TTS voice.");
    println!();
    println!("Options:");
    println!("  -o, --output <path>   Write a WAV file instead of playing audio");
    println!("  -i, --interactive     Prompt for voice preferences and rate");
    println!("  -l, --list-voices     List available voices and exit");
    println!("      --lang <code>     Preferred language, e.g. 'vi'");
    println!("      --country <code>  Preferred country, e.g. 'VN'");
    println!("      --gender <g>      Preferred gender: male or female");
    println!("      --rate <n>        Speech rate in [-100, 100]");
    println!("  -d, --debug           Verbose logging to saytext.log");
    println!("  -h, --help            Show this help");
}

fn take_value(iter: &mut std::slice::Iter<'_, String>, flag: &str) -> Result<String> {
    iter.next()
        .cloned()
        .ok_or_else(|| SayError::Other(format!("Missing value for {}", flag)))
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-o" | "--output" => parsed.output = Some(PathBuf::from(take_value(&mut iter, arg)?)),
            "-i" | "--interactive" => parsed.interactive = true,
            "-l" | "--list-voices" => parsed.list_voices = true,
            "--lang" => parsed.language = Some(take_value(&mut iter, arg)?),
            "--country" => parsed.country = Some(take_value(&mut iter, arg)?),
            "--gender" => parsed.gender = Some(take_value(&mut iter, arg)?),
            "--rate" => parsed.rate = Some(take_value(&mut iter, arg)?),
            "-d" | "--debug" => {} // consumed before logger init
            "-h" | "--help" => parsed.help = true,
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(SayError::Other(format!("Unknown option: {}", arg)));
            }
            _ => parsed.words.push(arg.clone()),
        }
    }

    Ok(parsed)
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let debug_mode = args.iter().any(|arg| arg == "--debug" || arg == "-d");

    // Initialize logger
    if debug_mode {
        // Debug mode: write to saytext.log file
        use std::fs::OpenOptions;
        match OpenOptions::new()
            .create(true)
            .append(true)
            .open("saytext.log")
        {
            Ok(log_file) => {
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Debug)
                    .target(env_logger::Target::Pipe(Box::new(log_file)))
                    .init();
            }
            Err(e) => {
                eprintln!("Warning: Failed to open saytext.log for debug logging: {}", e);
                eprintln!("Continuing without file logging...");
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Warn)
                    .init();
            }
        }

        info!(
            "saytext version {} starting (debug mode, logging to saytext.log)",
            saytext::VERSION
        );
    } else {
        // Normal mode: minimal logging to stderr, only errors
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Error)
            .init();
    }

    if let Err(e) = run(&args) {
        error!("Fatal error: {}", e);
        report::report_error(&e);
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<()> {
    let cli = parse_args(args)?;
    if cli.help {
        usage();
        return Ok(());
    }

    let config = Config::load()?;
    debug!("Config loaded from {:?}", config.path());

    if cli.list_voices {
        let engine = create_engine(false)?;
        report::print_voices(&engine.voices()?);
        return Ok(());
    }

    let text = if cli.words.is_empty() {
        SAMPLE_TEXT.to_string()
    } else {
        join_words(&cli.words)
    };

    // Preferences: config defaults, overridden by flags, overridden by prompts
    let mut prefs = config.preferences();
    if let Some(language) = &cli.language {
        prefs.language = Some(language.to_lowercase());
    }
    if let Some(country) = &cli.country {
        prefs.country = Some(country.to_uppercase());
    }
    if let Some(gender) = &cli.gender {
        prefs.gender = Gender::parse(gender);
    }

    let mut rate = config.rate();
    if let Some(value) = &cli.rate {
        match parse_rate(value) {
            Ok(parsed) => rate = parsed,
            Err(e) => {
                // Parse failure is non-fatal: report and fall back to 0
                report::report_error(&e);
                rate = 0;
            }
        }
    }

    if cli.interactive {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        prefs = input::read_preferences(&mut stdin.lock(), &mut stdout)?;
        rate = input::read_rate(&mut stdin.lock(), &mut stdout)?;
    }

    let output = cli.output.or_else(|| config.wav_path());
    let request = SpeechRequest { text, output };

    let mut engine = create_engine(request.output.is_some())?;
    info!("Using speech engine: {}", engine.name());

    let voices = engine.voices()?;
    debug!("Engine reported {} voices", voices.len());

    let voice = select_voice(&voices, &prefs)
        .ok_or_else(|| SayError::NoMatchingVoice(prefs.clone()))?;
    info!("Selected voice: {}", voice);

    engine.set_voice(voice)?;
    engine.set_rate(rate)?;

    report::announce(&request);
    engine.run(&request)?;

    Ok(())
}
