use std::path::Path;
use std::process::ExitCode;

use chrono::Local;
use sofdat::convert;
use sofdat_model::StructuralModel;

fn usage() {
    eprintln!("usage: sofdat-cli convert <model.json> [output.dat]");
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    if !(3..=4).contains(&args.len()) || args[1] != "convert" {
        usage();
        return ExitCode::from(2);
    }

    let raw = match std::fs::read_to_string(&args[2]) {
        Ok(raw) => raw,
        Err(err) => {
            eprintln!("cannot read {}: {err}", args[2]);
            return ExitCode::from(1);
        }
    };
    let model: StructuralModel = match serde_json::from_str(&raw) {
        Ok(model) => model,
        Err(err) => {
            eprintln!("cannot parse {}: {err}", args[2]);
            return ExitCode::from(1);
        }
    };

    let destination = args.get(3).map(Path::new);
    let conversion = convert(&model, destination);

    print!("{}", conversion.status);
    println!("finished at {}", Local::now().format("%Y-%m-%d %H:%M:%S"));

    // Without a destination the deck goes to stdout so it can be piped.
    if destination.is_none() {
        print!("{}", conversion.output);
    }

    if conversion.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
