//! Interactive collection of voice preferences and speech rate
//!
//! Line-based prompts over generic readers/writers so tests can drive them
//! with scripted input. Blank answers mean "no preference".

use crate::prefs::{parse_rate, Gender, VoicePreferences};
use crate::Result;
use log::debug;
use std::io::{BufRead, Write};

fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompt for language, country, and gender.
///
/// Language is lowercased and country uppercased to match culture-tag
/// subtags; gender accepts "male"/"female" case-insensitively and leaves
/// the preference unset for anything else. The collected preferences are
/// echoed back before returning.
pub fn read_preferences<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<VoicePreferences> {
    let mut prefs = VoicePreferences::new();

    let language = prompt_line(input, output, "Language: ")?;
    if !language.is_empty() {
        prefs.language = Some(language.to_lowercase());
    }

    let country = prompt_line(input, output, "Country: ")?;
    if !country.is_empty() {
        prefs.country = Some(country.to_uppercase());
    }

    let gender = prompt_line(input, output, "Gender: ")?;
    prefs.gender = Gender::parse(&gender);

    writeln!(output, "You have selected the following voice preferences:")?;
    writeln!(output, "{}", prefs)?;

    Ok(prefs)
}

/// Prompt for a speech rate in [-100, 100].
///
/// A parse failure is non-fatal: the error is reported to stderr and the
/// rate defaults to 0.
pub fn read_rate<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<i32> {
    let answer = prompt_line(input, output, "Rate [-100..100]: ")?;
    match parse_rate(&answer) {
        Ok(rate) => Ok(rate),
        Err(e) => {
            eprintln!("{}", e);
            debug!("Rate input {:?} rejected, defaulting to 0", answer);
            Ok(0)
        }
    }
}
