use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lm_gen_core::io::read_corpus;
use lm_gen_core::{GenerationMode, LanguageModel};

/// Trains a character-level language model on a corpus and prints text
/// generated from an initial seed.
#[derive(Parser, Debug)]
#[command(name = "lm-gen", version)]
struct Args {
    /// Number of characters in a window (>= 1)
    window_length: usize,

    /// Text the generation starts from
    initial_text: String,

    /// Number of characters to generate
    length: usize,

    /// "random" for a different text on every run, anything else for a fixed seed
    mode: String,

    /// Corpus file to train on
    corpus: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mode = GenerationMode::from_arg(&args.mode);
    log::info!("window length {}, mode {:?}", args.window_length, mode);

    let mut model = LanguageModel::from_mode(args.window_length, mode)?;

    let corpus = read_corpus(&args.corpus)
        .with_context(|| format!("failed to load corpus {}", args.corpus.display()))?;
    model.train(corpus.chars());
    log::info!("{} windows learned", model.len());

    println!("{}", model.generate(&args.initial_text, args.length));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positional_arguments() {
        let args = Args::try_parse_from(["lm-gen", "3", "the", "100", "random", "corpus.txt"]).unwrap();

        assert_eq!(args.window_length, 3);
        assert_eq!(args.initial_text, "the");
        assert_eq!(args.length, 100);
        assert_eq!(GenerationMode::from_arg(&args.mode), GenerationMode::Random);
        assert_eq!(args.corpus, PathBuf::from("corpus.txt"));
    }

    #[test]
    fn rejects_malformed_numbers() {
        assert!(Args::try_parse_from(["lm-gen", "x", "the", "100", "random", "c.txt"]).is_err());
        assert!(Args::try_parse_from(["lm-gen", "3", "the", "-1", "random", "c.txt"]).is_err());
        assert!(Args::try_parse_from(["lm-gen", "3", "the", "100", "random"]).is_err());
    }
}
