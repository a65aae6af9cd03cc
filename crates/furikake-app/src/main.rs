use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use furikake_audio::PronunciationClient;
use furikake_config::FieldConfig;
use furikake_core::record::{MemoryRecord, Record};
use furikake_lang_japanese::{FuriganaIndex, JapaneseAnnotator, JmdictLoader, TsvSentenceCorpus};

/// Batch-annotate Japanese flashcard records.
#[derive(Parser)]
#[command(name = "furikake", version, about)]
struct Args {
    /// Field mapping configuration (JSON)
    #[arg(long)]
    config: PathBuf,

    /// jmdict-simplified lexicon (JSON)
    #[arg(long)]
    jmdict: PathBuf,

    /// JmdictFurigana file (JSON)
    #[arg(long)]
    furigana: PathBuf,

    /// Sentence corpus, one `japanese<TAB>translation` per line
    #[arg(long)]
    sentences: Option<PathBuf>,

    /// Pronunciation service URL; audio is skipped when absent
    #[arg(long)]
    audio_url: Option<String>,

    /// Directory for downloaded pronunciation clips
    #[arg(long, default_value = "media")]
    media_dir: PathBuf,

    /// Write updated records back instead of only reporting
    #[arg(long)]
    write: bool,

    /// Records to annotate: a JSON array of field-name → value objects
    records: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config: FieldConfig = serde_json::from_str(
        &fs::read_to_string(&args.config)
            .with_context(|| format!("reading config {}", args.config.display()))?,
    )
    .with_context(|| format!("parsing config {}", args.config.display()))?;

    let dictionary = JmdictLoader::load_from_file(&args.jmdict)?;
    let furigana = FuriganaIndex::load_from_file(&args.furigana)?;

    let mut annotator = JapaneseAnnotator::new(dictionary, furigana);
    if let Some(path) = &args.sentences {
        annotator =
            annotator.with_sentence_provider(Box::new(TsvSentenceCorpus::load_from_file(path)?));
    }
    if let Some(url) = &args.audio_url {
        fs::create_dir_all(&args.media_dir)
            .with_context(|| format!("creating media dir {}", args.media_dir.display()))?;
        annotator = annotator.with_audio_provider(Box::new(PronunciationClient::new(
            url.clone(),
            args.media_dir.clone(),
        )?));
    }

    let raw: Vec<BTreeMap<String, String>> = serde_json::from_str(
        &fs::read_to_string(&args.records)
            .with_context(|| format!("reading records {}", args.records.display()))?,
    )
    .with_context(|| format!("parsing records {}", args.records.display()))?;

    let mut records: Vec<MemoryRecord> = raw.into_iter().map(MemoryRecord::from_fields).collect();
    let total = records.len();

    let changed = annotator.process_many(
        records.iter_mut().map(|r| r as &mut dyn Record),
        &config,
    );

    if args.write {
        let out: Vec<BTreeMap<String, String>> =
            records.into_iter().map(MemoryRecord::into_fields).collect();
        fs::write(&args.records, serde_json::to_string_pretty(&out)?)
            .with_context(|| format!("writing records {}", args.records.display()))?;
    }

    println!("updated {changed} of {total} records");
    Ok(())
}
