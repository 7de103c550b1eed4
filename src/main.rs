

mod resolver;
mod util;
mod wordnet;

use resolver::*;
use util::*;
use wordnet::*;


/// Shows help message.
fn help() {
    print!("usage: cargo run --release [COMMAND]

Without COMMAND the WordNet database is fetched if absent and
data/sense_keys.txt is resolved to dictionaries/synset_names.txt,
one synset name per sense key, empty line for unresolved keys.

COMMAND:
  wordnet          gets the WordNet database files if absent
  resolve          resolves sense keys, requires the database files
  clean            removes build directory
  help             this message
");
}

/// Execute command.
fn command_runner(args: &Vec<&str>) {
    for argument in args {
        let r = match *argument {
            "clean" => command_wait("rm", vec!["-rf", "build"]),
            "help" => {
                help();
                continue;
            },
            "resolve" => run_resolve_sense_keys(),
            "wordnet" => get_wordnet(),
            _ => {
                println!("unknown option: {}", &argument);
                std::process::exit(-1);
            },
        };
        if let Err(e) = r {
            println!("{}", e);
            std::process::exit(-1);
        }
    }
}

/// Fetch the database if required, then run the resolution pass.
fn workflow() {
    command_runner(&vec!["wordnet", "resolve"]);
}

fn main() {
    let args = std::env::args().collect::<Vec<String>>();

    if args.len() > 1 {
        let a = args
            .iter()
            .skip(1)
            .map(|s| s.as_str())
            .collect::<Vec<&str>>();

        command_runner(&a);
    } else {
        workflow()
    }
}
