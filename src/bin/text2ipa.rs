use clap::{ArgGroup, Parser};
use phrasecard::ipa::{CmuDict, Converter, IpaError, IpaLexicon, Method, Transcriber};
use phrasecard::output;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "text2ipa")]
#[command(about = "Convert English text to an IPA pronunciation string")]
#[command(long_about = "\
Convert English text to an IPA pronunciation string

Methods, in order:
  1. IPA lexicon (--lexicon), used when it knows every word of the phrase
  2. CMUdict (--cmudict), word by word via ARPAbet; unknown words kept as-is

Examples:
  text2ipa --cmudict cmudict.dict --text \"best kept secret of\"
  text2ipa --lexicon en_US.txt --cmudict cmudict.dict --file phrases.txt

Paste the output into a card's pronunciation field.")]
#[command(version)]
#[command(group(ArgGroup::new("input").required(true).args(["text", "file"])))]
struct Cli {
    /// Phrase to convert
    #[arg(long)]
    text: Option<String>,

    /// Convert each non-blank line of this file
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Separator between words
    #[arg(long, default_value = " ")]
    sep: String,

    /// Print lookup details to stderr
    #[arg(long)]
    debug: bool,

    /// IPA lexicon for the primary method (word, whitespace, IPA per line)
    #[arg(long, value_name = "PATH")]
    lexicon: Option<PathBuf>,

    /// CMUdict file for the fallback method
    #[arg(long, value_name = "PATH")]
    cmudict: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(IpaError::Read { path, source }) if source.kind() == std::io::ErrorKind::NotFound => {
            output::print_error(&format!("File not found: {}", path.display()));
            ExitCode::FAILURE
        }
        Err(e) => {
            output::print_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), IpaError> {
    let lexicon = cli.lexicon.as_deref().map(IpaLexicon::load).transpose()?;
    let cmudict = cli.cmudict.as_deref().map(CmuDict::load).transpose()?;
    if cli.debug {
        if let Some(lex) = &lexicon {
            debug(&format!("lexicon: {} words", lex.len()));
        }
        if let Some(dict) = &cmudict {
            debug(&format!("cmudict: {} words", dict.len()));
        }
    }

    let primary = lexicon.as_ref().map(|l| l as &dyn Transcriber);
    let fallback = cmudict.as_ref().map(|d| d as &dyn Transcriber);
    let converter = Converter::new(primary, fallback, cli.sep.as_str());

    if let Some(text) = &cli.text {
        println!("{}", convert(&converter, text, cli.debug)?);
        return Ok(());
    }

    if let Some(path) = &cli.file {
        let count = convert_file(&converter, path, cli.debug)?;
        if count == 0 {
            output::print_warn("No non-empty lines found.");
        }
    }
    Ok(())
}

fn convert_file(converter: &Converter, path: &Path, debug_on: bool) -> Result<usize, IpaError> {
    let content = std::fs::read_to_string(path).map_err(|source| IpaError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut count = 0;
    for line in content.lines() {
        let phrase = line.trim();
        if phrase.is_empty() {
            continue;
        }
        println!("{}", convert(converter, phrase, debug_on)?);
        count += 1;
    }
    Ok(count)
}

fn convert(converter: &Converter, phrase: &str, debug_on: bool) -> Result<String, IpaError> {
    let conversion = converter.convert(phrase)?;
    if debug_on {
        for line in &conversion.trace {
            debug(line);
        }
        if conversion.method == Method::Fallback {
            debug(&format!("'{}' used the fallback method", phrase.trim()));
        }
    }
    Ok(conversion.ipa)
}

fn debug(message: &str) {
    eprintln!("[debug] {message}");
}
