use anyhow::{anyhow, bail, Result};
use std::env;
use std::fs;

use std::path::PathBuf;

use dev_toolbox::{
    analyzer, color, export, history, history::FileStore, json_fmt, lorem, password, uuid_gen,
    AvatarSpec, CaseStyle, ColorFormat, Indent, Length, PasswordOptions, Unit, UuidFormat,
    UuidVersion, VERSION,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("case") => run_case(&args[2..]),
        Some("color") => run_color(&args[2..]),
        Some("analyze") => run_analyze(&args[2..]),
        Some("password") => run_password(&args[2..]),
        Some("uuid") => run_uuid(&args[2..]),
        Some("lorem") => run_lorem(&args[2..]),
        Some("json") => run_json(&args[2..]),
        Some("avatar") => run_avatar(&args[2..]),
        Some("--version") => {
            println!("dev-toolbox {}", VERSION);
            Ok(())
        }
        _ => {
            print_usage();
            Ok(())
        }
    }
}

fn print_usage() {
    println!("dev-toolbox {} - developer utility toolbox", VERSION);
    println!();
    println!("Usage:");
    println!("  dev-toolbox case <style> <text>          uppercase|lowercase|capitalize|sentence|toggle");
    println!("  dev-toolbox color <input> [format]       hex|rgb|hsl|cmyk (default: detected)");
    println!("  dev-toolbox analyze <text>               word/char counts, frequency, read time");
    println!("  dev-toolbox password [length] [count]    generate passwords with strength");
    println!("  dev-toolbox uuid [v1|v4] [count]         generate UUIDs");
    println!("  dev-toolbox lorem <unit> <amount> [len]  words|sentences|paragraphs, short|medium|long");
    println!("  dev-toolbox json <pretty|minify|validate> <input>");
    println!("  dev-toolbox avatar <name> [out.svg]      initials avatar as SVG");
}

/// Cross-invocation history lives in one JSON file under $HOME,
/// or the current directory when HOME is unset
fn history_store() -> FileStore {
    let dir = env::var_os("HOME").map(PathBuf::from).unwrap_or_default();
    FileStore::open(dir.join(".dev-toolbox-history.json"))
}

// ============================================================================
// SUBCOMMANDS
// ============================================================================

fn run_case(args: &[String]) -> Result<()> {
    let style_name = args.first().ok_or_else(|| anyhow!("missing case style"))?;
    let text = args.get(1).ok_or_else(|| anyhow!("missing text"))?;

    let style = CaseStyle::from_name(style_name)
        .ok_or_else(|| anyhow!("unknown case style: {}", style_name))?;
    println!("{}", style.apply(text));
    Ok(())
}

fn run_color(args: &[String]) -> Result<()> {
    let input = args.first().ok_or_else(|| anyhow!("missing color input"))?;

    let format = match args.get(1) {
        Some(name) => ColorFormat::from_name(name)
            .ok_or_else(|| anyhow!("unknown color format: {}", name))?,
        None => detect_color_format(input),
    };

    let conversions = color::convert(input, format)?;
    history::record_color(&mut history_store(), input, format.name());
    println!("HEX:   {}", conversions.hex);
    println!("RGB:   {}", conversions.rgb);
    println!("RGBA:  {}", conversions.rgba);
    println!("HSL:   {}", conversions.hsl);
    println!("HSLA:  {}", conversions.hsla);
    println!("CMYK:  {}", conversions.cmyk);
    Ok(())
}

/// Pick the parse format from the input's shape
fn detect_color_format(input: &str) -> ColorFormat {
    let lower = input.trim().to_lowercase();
    if lower.starts_with("cmyk") {
        ColorFormat::Cmyk
    } else if lower.starts_with("hsl") {
        ColorFormat::Hsl
    } else if lower.starts_with("rgb") {
        ColorFormat::Rgb
    } else {
        ColorFormat::Hex
    }
}

fn run_analyze(args: &[String]) -> Result<()> {
    let text = args.first().ok_or_else(|| anyhow!("missing text"))?;

    let Some(stats) = analyzer::analyze(text) else {
        bail!("nothing to analyze");
    };

    println!("Characters:      {}", stats.characters);
    println!("Words:           {}", stats.words);
    println!("Unique words:    {}", stats.unique_words);
    println!("Sentences:       {}", stats.sentences);
    println!("Paragraphs:      {}", stats.paragraphs);
    println!("Avg word length: {}", stats.average_word_length);
    println!("Longest word:    {}", stats.longest_word);
    println!("Shortest word:   {}", stats.shortest_word);
    println!("Reading time:    {}", stats.reading_time);
    println!("Speaking time:   {}", stats.speaking_time);
    if !stats.most_used_words.is_empty() {
        println!("Top words:");
        for entry in &stats.most_used_words {
            println!("  {:>4}  {}", entry.count, entry.word);
        }
    }
    Ok(())
}

fn run_password(args: &[String]) -> Result<()> {
    let mut options = PasswordOptions::default();
    if let Some(length) = args.first() {
        options.length = length.parse()?;
    }
    let count: usize = match args.get(1) {
        Some(count) => count.parse()?,
        None => 1,
    };

    let passwords = password::generate_batch(&options, count, &mut rand::rng())?;
    let mut store = history_store();
    for pw in &passwords {
        history::record_password(&mut store, pw);
        println!("{}  ({})", pw, password::classify_strength(pw));
    }
    Ok(())
}

fn run_uuid(args: &[String]) -> Result<()> {
    let version = match args.first() {
        Some(name) => UuidVersion::from_name(name)
            .ok_or_else(|| anyhow!("unknown UUID version: {}", name))?,
        None => UuidVersion::V4,
    };
    let count: usize = match args.get(1) {
        Some(count) => count.parse()?,
        None => 1,
    };

    let uuids = uuid_gen::generate_batch(version, UuidFormat::Default, count)?;
    if let Some(first) = uuids.first() {
        history::record_uuid(&mut history_store(), first, version.name());
    }
    print!("{}", export::lines_txt(&uuids));
    println!();
    Ok(())
}

fn run_lorem(args: &[String]) -> Result<()> {
    let unit_name = args.first().ok_or_else(|| anyhow!("missing unit"))?;
    let unit =
        Unit::from_name(unit_name).ok_or_else(|| anyhow!("unknown unit: {}", unit_name))?;
    let amount: usize = match args.get(1) {
        Some(amount) => amount.parse()?,
        None => 1,
    };
    let length = match args.get(2) {
        Some(name) => {
            Length::from_name(name).ok_or_else(|| anyhow!("unknown length: {}", name))?
        }
        None => Length::default(),
    };

    println!("{}", lorem::generate(unit, amount, length));
    Ok(())
}

fn run_json(args: &[String]) -> Result<()> {
    let action = args.first().ok_or_else(|| anyhow!("missing action"))?;
    let input = args.get(1).ok_or_else(|| anyhow!("missing JSON input"))?;

    match action.as_str() {
        "pretty" => println!("{}", json_fmt::format(input, Indent::default())?),
        "minify" => println!("{}", json_fmt::minify(input)?),
        "validate" => {
            json_fmt::validate(input)?;
            println!("Valid JSON");
        }
        other => bail!("unknown JSON action: {}", other),
    }
    Ok(())
}

fn run_avatar(args: &[String]) -> Result<()> {
    let name = args.first().ok_or_else(|| anyhow!("missing name"))?;

    let spec = AvatarSpec::for_name(name);
    let Some(svg) = spec.svg() else {
        bail!("name produced no initials: {:?}", name);
    };

    match args.get(1) {
        Some(path) => {
            fs::write(path, &svg)?;
            println!("Wrote {} ({:?}, {}px)", path, spec.initials, spec.size);
        }
        None => println!("{}", svg),
    }
    Ok(())
}
