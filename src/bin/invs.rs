use clap::{arg, value_parser, Arg, ArgAction, ArgMatches, Command};
use invs::{parse_item, parse_qty, Config, Inventory, InvsError, Result};
use serde_json::json;
use std::path::PathBuf;
use std::process::exit;
use stderrlog::{LogLevelNum, Timestamp};

fn cli() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .subcommand_required(true)
        .disable_help_subcommand(true)
        .args([
            arg!(-f --file <FILE> "The inventory file. Defaults to inventory.json")
                .value_parser(value_parser!(PathBuf))
                .global(true),
            arg!(-t --threshold <N> "Items with strictly less than N are low. Defaults to 5")
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true)
                .global(true),
            arg!(-c --config <FILE> "A JSON file with \"path\" and \"threshold\" keys")
                .value_parser(value_parser!(PathBuf))
                .global(true),
            arg!(-v --verbose "Log more, repeat for debug output")
                .action(ArgAction::Count)
                .global(true),
            arg!(-q --quiet "Log nothing").global(true),
        ])
        .subcommand(
            Command::new("add")
                .about("Add a quantity of an item")
                .arg(Arg::new("ITEM").help("An item name").required(true))
                .arg(
                    Arg::new("QTY")
                        .help("A whole number")
                        .required(true)
                        .allow_negative_numbers(true),
                ),
        )
        .subcommand(
            Command::new("rm")
                .about("Remove a quantity of an item, dropping it at zero")
                .arg(Arg::new("ITEM").help("An item name").required(true))
                .arg(
                    Arg::new("QTY")
                        .help("A whole number")
                        .required(true)
                        .allow_negative_numbers(true),
                ),
        )
        .subcommand(
            Command::new("get")
                .about("Print the quantity of an item")
                .arg(Arg::new("ITEM").help("An item name").required(true)),
        )
        .subcommand(Command::new("low").about("List the items below the threshold"))
        .subcommand(Command::new("report").about("Print every item and its quantity"))
        .subcommand(Command::new("demo").about("Run a sample session against the file"))
}

fn config(matches: &ArgMatches) -> Result<Config> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(path) = matches.get_one::<PathBuf>("file") {
        config.path = path.clone();
    }
    if let Some(threshold) = matches.get_one::<i64>("threshold") {
        config.threshold = *threshold;
    }
    Ok(config)
}

fn init_logging(matches: &ArgMatches) {
    let verbosity = match matches.get_count("verbose") {
        0 => LogLevelNum::Info,
        1 => LogLevelNum::Debug,
        _ => LogLevelNum::Trace,
    };
    if stderrlog::new()
        .module(module_path!())
        .timestamp(Timestamp::Second)
        .verbosity(verbosity)
        .quiet(matches.get_flag("quiet"))
        .init()
        .is_err()
    {
        eprintln!("Logger already initialised");
    }
}

// Load, apply, and save only when the operation went through.
fn mutate(config: &Config, op: impl FnOnce(&mut Inventory) -> Result<()>) -> i32 {
    let mut inventory = Inventory::load(&config.path);
    match op(&mut inventory) {
        Ok(()) => match inventory.save(&config.path) {
            Ok(()) => 0,
            Err(_) => 1,
        },
        Err(InvsError::NotFound(_)) => 0,
        Err(_) => 1,
    }
}

fn demo(config: &Config) {
    let mut inventory = Inventory::load(&config.path);
    println!();
    print!("{inventory}");

    let _ = inventory.add("apple", 10);
    let _ = inventory.add("banana", 15);
    let _ = inventory.add("orange", 3);
    let _ = inventory.add("apple", 5);

    let _ = inventory.add_raw(&json!(123), &json!("ten"));
    let _ = inventory.remove("grape", 1);

    let _ = inventory.remove("apple", 3);

    println!("\nApple stock: {}", inventory.get_qty("apple"));
    println!("Grape stock: {}", inventory.get_qty("grape"));
    println!("Low items: {:?}", inventory.check_low_items(config.threshold));

    println!();
    print!("{inventory}");
    let _ = inventory.save(&config.path);
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_logging(&matches);
    let config = config(&matches)?;

    match matches.subcommand() {
        Some(("add", _matches)) => {
            let item = _matches.get_one::<String>("ITEM").expect("required");
            let qty = _matches.get_one::<String>("QTY").expect("required");
            exit(mutate(&config, |inventory| {
                inventory.add(parse_item(item)?, parse_qty(item, qty)?)
            }));
        }
        Some(("rm", _matches)) => {
            let item = _matches.get_one::<String>("ITEM").expect("required");
            let qty = _matches.get_one::<String>("QTY").expect("required");
            exit(mutate(&config, |inventory| {
                inventory.remove(parse_item(item)?, parse_qty(item, qty)?)
            }));
        }
        Some(("get", _matches)) => {
            let item = _matches.get_one::<String>("ITEM").expect("required");
            let inventory = Inventory::load(&config.path);
            println!("{}", inventory.get_qty(item));
        }
        Some(("low", _)) => {
            let inventory = Inventory::load(&config.path);
            for item in inventory.check_low_items(config.threshold) {
                println!("{item}");
            }
        }
        Some(("report", _)) => {
            print!("{}", Inventory::load(&config.path));
        }
        Some(("demo", _)) => demo(&config),
        _ => unreachable!(),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn flags_override_config_defaults() {
        let matches = cli()
            .try_get_matches_from(["invs", "low", "-t", "-1", "--file", "stock.json"])
            .unwrap();
        let config = config(&matches).unwrap();
        assert_eq!(config.threshold, -1);
        assert_eq!(config.path, PathBuf::from("stock.json"));
    }

    #[test]
    fn negative_quantities_parse_as_values() {
        let matches = cli()
            .try_get_matches_from(["invs", "add", "apple", "-3"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(sub.get_one::<String>("QTY").unwrap(), "-3");
    }
}
