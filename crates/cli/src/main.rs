use fatecast_core::{evaluate, DuelConfig};
use std::env;
use std::process::ExitCode;

const USAGE: &str = "\
fatecast - exact duel odds over the 54-card fate deck

Usage: fatecast --attacker STAT (--defender STAT | --target NUMBER) [options]

Options:
  -a, --attacker STAT     attacker stat (required)
  -d, --defender STAT     defender stat (opposed duel)
  -t, --target NUMBER     target number (simple duel, or gate for an
                          opposed duel when given with --defender)
      --attacker-flips S  attacker flip modifier: '', '+', '++', '-', '--'
      --defender-flips S  defender flip modifier
      --json              print the result as JSON
  -h, --help              show this help
";

#[derive(Debug, Default)]
struct Options {
    attacker: Option<i64>,
    defender: Option<i64>,
    target: Option<i64>,
    attacker_flips: String,
    defender_flips: String,
    json: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print!("{USAGE}");
        return ExitCode::SUCCESS;
    }
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::from(2);
        }
    };
    let Some(attacker) = options.attacker else {
        eprintln!("error: --attacker is required");
        return ExitCode::from(2);
    };
    let outcome = DuelConfig::from_tokens(
        attacker,
        options.defender,
        options.target,
        &options.attacker_flips,
        &options.defender_flips,
    )
    .and_then(|config| evaluate(&config));
    match outcome {
        Ok(result) => {
            if options.json {
                match serde_json::to_string(&result) {
                    Ok(body) => println!("{body}"),
                    Err(err) => {
                        eprintln!("error: {err}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                println!("success: {}%", result.success_rate);
                println!("raise:   {}%", result.raise_rate);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-a" | "--attacker" => options.attacker = Some(int_value(arg, iter.next())?),
            "-d" | "--defender" => options.defender = Some(int_value(arg, iter.next())?),
            "-t" | "--target" => options.target = Some(int_value(arg, iter.next())?),
            "--attacker-flips" => {
                options.attacker_flips = string_value(arg, iter.next())?;
            }
            "--defender-flips" => {
                options.defender_flips = string_value(arg, iter.next())?;
            }
            "--json" => options.json = true,
            other => return Err(format!("unknown argument {other:?}")),
        }
    }
    Ok(options)
}

fn string_value(flag: &str, value: Option<&String>) -> Result<String, String> {
    value
        .cloned()
        .ok_or_else(|| format!("{flag} needs a value"))
}

fn int_value(flag: &str, value: Option<&String>) -> Result<i64, String> {
    string_value(flag, value)?
        .parse::<i64>()
        .map_err(|_| format!("{flag} needs an integer"))
}
