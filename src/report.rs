//! Console status reporting
//!
//! Status goes to stdout, errors to stderr as single lines; the process
//! never crashes on an engine failure.

use crate::speech::SpeechRequest;
use crate::voice::VoiceInfo;
use crate::SayError;

/// Print what is about to be synthesized and where it will go.
pub fn announce(request: &SpeechRequest) {
    match &request.output {
        Some(path) => println!(
            "Playing the following text: \"{}\"\n ---> {}",
            request.text,
            path.display()
        ),
        None => println!(
            "Playing the following text: \"{}\"\n ---> default audio device",
            request.text
        ),
    }
}

/// Print all voices with their selection indices.
pub fn print_voices(voices: &[VoiceInfo]) {
    for (id, voice) in voices.iter().enumerate() {
        println!("{}: {}", id, voice);
    }
}

/// Single-line error report to stderr.
pub fn report_error(error: &SayError) {
    eprintln!("Error: {}", error);
}
