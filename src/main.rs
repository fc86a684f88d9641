use serde::Serialize;
use std::env;
use std::process;

use chordfret::shape::synthesize;
use chordfret::{
    build_chord, parse_chord_symbol, qualities, recognise_chord, synthesize_ranked, Chord, Config,
    Fretboard,
};

const USAGE: &str = "Usage: chordfret [--config <file.yaml>] <command> [args]

Commands:
  fretboard [--tuning NAME] [--frets N]      Notes on every string and fret
  recognise NOTE...                          Name the chord formed by the notes
  chord SYMBOL | chord ROOT QUALITY          Build a chord
  shape SYMBOL | shape ROOT QUALITY          Best fingering for a chord
        [--tuning NAME] [--frets N] [--top N]
  tunings                                    List tuning names
  qualities                                  List chord qualities";

fn main() {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let config = match take_option(&mut args, "--config") {
        Ok(Some(path)) => match Config::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    if args.is_empty() {
        eprintln!("{}", USAGE);
        process::exit(1);
    }
    let command = args.remove(0);

    let result = match command.as_str() {
        "fretboard" => fretboard(&config, args),
        "recognise" | "recognize" => recognise(&config, args),
        "chord" => chord(&config, args),
        "shape" => shape(&config, args),
        "tunings" => to_json(&config.tunings.names()),
        "qualities" => to_json(&qualities()),
        "help" | "--help" | "-h" => {
            println!("{}", USAGE);
            return;
        }
        other => Err(format!("Unknown command '{}'\n\n{}", other, USAGE)),
    };

    match result {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn fretboard(config: &Config, mut args: Vec<String>) -> Result<String, String> {
    let fretboard = load_fretboard(config, &mut args)?;
    reject_extra(&args)?;
    to_json(&fretboard)
}

fn recognise(config: &Config, args: Vec<String>) -> Result<String, String> {
    let chord = recognise_chord(&args).map_err(|e| e.to_string())?;
    to_json(&config.spell(chord))
}

fn chord(config: &Config, args: Vec<String>) -> Result<String, String> {
    to_json(&config.spell(parse_chord_args(&args)?))
}

fn shape(config: &Config, mut args: Vec<String>) -> Result<String, String> {
    let top = take_option(&mut args, "--top")?
        .map(|n| parse_number::<usize>("--top", &n))
        .transpose()?;
    let fretboard = load_fretboard(config, &mut args)?;
    let chord = config.spell(parse_chord_args(&args)?);

    match top {
        Some(limit) => {
            let shapes = synthesize_ranked(&fretboard, &chord, &config.constraints, limit)
                .map_err(|e| e.to_string())?;
            to_json(&shapes)
        }
        None => {
            let shape =
                synthesize(&fretboard, &chord, &config.constraints).map_err(|e| e.to_string())?;
            to_json(&shape)
        }
    }
}

fn load_fretboard(config: &Config, args: &mut Vec<String>) -> Result<Fretboard, String> {
    let tuning_name = take_option(args, "--tuning")?.unwrap_or_else(|| "Standard".to_string());
    let max_fret = match take_option(args, "--frets")? {
        Some(n) => parse_number::<u8>("--frets", &n)?,
        None => config.max_fret,
    };

    let tuning = config.tunings.select(&tuning_name).map_err(|e| e.to_string())?;
    Ok(Fretboard::build(&tuning, max_fret).with_spelling(config.spelling))
}

/// `SYMBOL` or `ROOT QUALITY`.
fn parse_chord_args(args: &[String]) -> Result<Chord, String> {
    let chord = match args {
        [symbol] => parse_chord_symbol(symbol),
        [root, quality] => build_chord(root, quality),
        _ => return Err(format!("Expected SYMBOL or ROOT QUALITY\n\n{}", USAGE)),
    };
    chord.map_err(|e| e.to_string())
}

/// Remove `flag` and its value from `args`.
fn take_option(args: &mut Vec<String>, flag: &str) -> Result<Option<String>, String> {
    let Some(index) = args.iter().position(|arg| arg == flag) else {
        return Ok(None);
    };
    if index + 1 >= args.len() {
        return Err(format!("{} needs a value", flag));
    }
    let value = args.remove(index + 1);
    args.remove(index);
    Ok(Some(value))
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("{} expects a number, got '{}'", flag, value))
}

fn reject_extra(args: &[String]) -> Result<(), String> {
    match args.first() {
        Some(arg) => Err(format!("Unexpected argument '{}'", arg)),
        None => Ok(()),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| e.to_string())
}
