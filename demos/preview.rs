use std::path::PathBuf;
use std::time::Instant;

use yomi_rs::{
    normalizers::japanese::{JapaneseNormalizeParamsBuilder, JapaneseNormalizer, UserDictionary},
    ReadingNormalizer,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut text = None;
    let mut dictionary_path: Option<PathBuf> = None;
    let mut show_reading = false;
    let mut json = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--show-reading" | "-r" => show_reading = true,
            "--json" => json = true,
            "--dictionary" | "-d" => dictionary_path = args.next().map(PathBuf::from),
            _ => text = Some(arg),
        }
    }

    let text = text.unwrap_or_else(|| {
        "予算は1000万円で、人口は1億2000万人、国債は1000兆円を超えた。".to_string()
    });

    let normalizer = match dictionary_path {
        Some(path) => JapaneseNormalizer::with_dictionary(UserDictionary::load(&path)?),
        None => JapaneseNormalizer::new(),
    };
    println!("Dictionary entries: {}", normalizer.dictionary().len());

    let params = JapaneseNormalizeParamsBuilder::default()
        .fold_ideographic_space(true)
        .build()?;

    let start = Instant::now();
    let result = normalizer.normalize_with_params(&text, Some(params));
    println!(
        "Normalized {} chars in {:.2?} ({} spans)",
        text.chars().count(),
        start.elapsed(),
        result.readings.len()
    );

    if json {
        println!("{}", result.to_json()?);
    } else if show_reading {
        println!("{}", result.annotation(&text));
    } else {
        println!("{}", result.text);
    }

    Ok(())
}
