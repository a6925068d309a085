// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Metazoom-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Metazoom and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! MetaZoom CLI entrypoint.
//!
//! Loads an SBML model (from a file, standard input, or the built-in demo)
//! and runs the interactive focus view.

use std::collections::BTreeSet;
use std::error::Error;
use std::fs;
use std::io::Read;

use metazoom::model::Network;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [-c <currency-file>] <model.xml | ->\n  {program} --demo\n  {program} -h | --help\n\nLoads an SBML model and opens the interactive focus view.\nA model path of `-` reads the document from standard input.\n\n-c names a file listing currency-metabolite identifiers, one per line;\nblank lines and lines starting with `#` are ignored.\n--demo uses a small built-in model and cannot be combined with a model path."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    help: bool,
    demo: bool,
    currency_file: Option<String>,
    model_path: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                if options.help {
                    return Err(());
                }
                options.help = true;
            }
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "-c" => {
                if options.currency_file.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.currency_file = Some(path);
            }
            // A bare `-` is the stdin model path, not a flag.
            _ if arg.starts_with('-') && arg != "-" => return Err(()),
            _ => {
                if options.model_path.is_some() {
                    return Err(());
                }
                options.model_path = Some(arg);
            }
        }
    }

    if options.demo && options.model_path.is_some() {
        return Err(());
    }

    if !options.help && !options.demo && options.model_path.is_none() {
        return Err(());
    }

    Ok(options)
}

fn load_currency(path: &str) -> Result<BTreeSet<String>, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let mut currency = BTreeSet::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        currency.insert(line.to_owned());
    }
    Ok(currency)
}

fn load_model(path: &str) -> Result<Network, Box<dyn Error>> {
    let (label, text) = if path == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        ("<stdin>".to_owned(), text)
    } else {
        (path.to_owned(), fs::read_to_string(path)?)
    };

    println!("Parsing {label} ...");
    let network = metazoom::format::sbml::parse_model(&text)?;
    println!("Imported {} reactions", network.reactions().len());
    println!("Imported {} species", network.species().len());
    println!("Imported {} compartments", network.compartments().len());
    Ok(network)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "metazoom".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        if options.help {
            print_usage(&program);
            return Ok(());
        }

        let currency = match &options.currency_file {
            Some(path) => load_currency(path)?,
            None => BTreeSet::new(),
        };

        let network = if options.demo {
            metazoom::tui::demo_network()
        } else {
            // Presence is guaranteed by parse_options.
            let path = options.model_path.as_deref().ok_or("missing model path")?;
            load_model(path)?
        };

        println!("\nStarting TUI...");
        metazoom::tui::run(network, currency)?;
        println!("Shutting down metazoom...");

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("metazoom: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions};

    fn parse(args: &[&str]) -> Result<CliOptions, ()> {
        parse_options(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn rejects_empty_args() {
        parse(&[]).unwrap_err();
    }

    #[test]
    fn parses_model_path() {
        let options = parse(&["model.xml"]).expect("parse options");
        assert_eq!(options.model_path.as_deref(), Some("model.xml"));
        assert!(!options.demo);
        assert!(!options.help);
        assert!(options.currency_file.is_none());
    }

    #[test]
    fn parses_stdin_marker_as_model_path() {
        let options = parse(&["-"]).expect("parse options");
        assert_eq!(options.model_path.as_deref(), Some("-"));
    }

    #[test]
    fn parses_currency_file_with_model() {
        let options = parse(&["-c", "currency.txt", "model.xml"]).expect("parse options");
        assert_eq!(options.currency_file.as_deref(), Some("currency.txt"));
        assert_eq!(options.model_path.as_deref(), Some("model.xml"));

        let options = parse(&["model.xml", "-c", "currency.txt"]).expect("parse options");
        assert_eq!(options.currency_file.as_deref(), Some("currency.txt"));
        assert_eq!(options.model_path.as_deref(), Some("model.xml"));
    }

    #[test]
    fn parses_demo_flag() {
        let options = parse(&["--demo"]).expect("parse options");
        assert!(options.demo);
        assert!(options.model_path.is_none());
    }

    #[test]
    fn parses_help_without_model() {
        assert!(parse(&["-h"]).expect("parse options").help);
        assert!(parse(&["--help"]).expect("parse options").help);
    }

    #[test]
    fn rejects_demo_with_model_path() {
        parse(&["--demo", "model.xml"]).unwrap_err();
        parse(&["model.xml", "--demo"]).unwrap_err();
    }

    #[test]
    fn rejects_unknown_flags() {
        parse(&["--nope", "model.xml"]).unwrap_err();
        parse(&["-x", "model.xml"]).unwrap_err();
    }

    #[test]
    fn rejects_duplicate_flags() {
        parse(&["--demo", "--demo"]).unwrap_err();
        parse(&["-c", "a.txt", "-c", "b.txt", "model.xml"]).unwrap_err();
        parse(&["-h", "-h"]).unwrap_err();
    }

    #[test]
    fn rejects_multiple_model_paths() {
        parse(&["one.xml", "two.xml"]).unwrap_err();
        parse(&["-", "two.xml"]).unwrap_err();
    }

    #[test]
    fn rejects_missing_currency_value() {
        parse(&["model.xml", "-c"]).unwrap_err();
    }
}
