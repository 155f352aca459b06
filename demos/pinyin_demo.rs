use clap::Parser;
use std::time::Instant;
use zh_pinyin_rs::*;

#[derive(Parser, Debug)]
#[command(about = "Convert Chinese text to pinyin")]
struct Args {
    /// Text to convert
    text: String,

    #[arg(long, default_value = "symbol")]
    tone_type: ToneType,

    #[arg(long, default_value = "pinyin")]
    pattern: Pattern,

    #[arg(long, default_value = "normal")]
    mode: Mode,

    #[arg(long, default_value = "spaced")]
    non_zh: NonZh,

    #[arg(long, default_value = "string")]
    output: OutputType,

    #[arg(long)]
    multiple: bool,

    #[arg(long)]
    v: bool,

    /// Print every dictionary reading instead of converting
    #[arg(long)]
    readings: bool,

    /// Options as a JSON object, overriding the flags above
    #[arg(long)]
    options_json: Option<String>,
}

fn main() -> Result<(), PinyinError> {
    env_logger::init();
    let args = Args::parse();

    if args.readings {
        let readings = convert_all_readings(&args.text);
        println!("{}", serde_json::to_string_pretty(&readings)?);
        return Ok(());
    }

    let options = match &args.options_json {
        Some(json) => Options::from_json(json)?,
        None => Options::builder()
            .tone_type(args.tone_type)
            .pattern(args.pattern)
            .mode(args.mode)
            .non_zh(args.non_zh)
            .output(args.output)
            .multiple(args.multiple)
            .v(args.v)
            .build(),
    };

    let start = Instant::now();
    let out = convert(&args.text, &options);
    log::info!("converted in {:.3} ms", start.elapsed().as_secs_f64() * 1000.0);

    match &out {
        Converted::Text(s) => println!("{}", s),
        other => println!("{}", serde_json::to_string_pretty(other)?),
    }
    Ok(())
}
