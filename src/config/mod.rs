// Copyright 2019 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod general;

use std::io::Read;
use std::path::PathBuf;

use clap::{App, Arg};
use log::{info, LevelFilter};
use serde_derive::*;

use crate::config::general::General;
use crate::sweep::Sweep;
use crate::{NAME, VERSION};

/// Run configuration: the sweep bounds, the ordered result file list, and
/// presentation options. Built once from the CLI and an optional TOML file,
/// immutable afterwards.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    general: General,
    #[serde(default)]
    sweep: Sweep,
    #[serde(default = "default_files")]
    files: Vec<String>,
}

fn default_files() -> Vec<String> {
    [
        "random.txt",
        "random_hybrid.txt",
        "reversed.txt",
        "reversed_hybrid.txt",
        "swap.txt",
        "swap_hybrid.txt",
    ]
    .iter()
    .map(|file| file.to_string())
    .collect()
}

impl Default for Config {
    fn default() -> Config {
        Config {
            general: Default::default(),
            sweep: Default::default(),
            files: default_files(),
        }
    }
}

impl Config {
    /// parse command line options and return `Config`
    pub fn new() -> Config {
        let app = App::new(NAME)
            .version(VERSION)
            .about("Comparative charts for sort benchmark results")
            .arg(
                Arg::with_name("config")
                    .long("config")
                    .value_name("FILE")
                    .help("TOML config file")
                    .takes_value(true),
            )
            .arg(
                Arg::with_name("data")
                    .long("data")
                    .value_name("DIR")
                    .help("Directory holding the result files")
                    .takes_value(true),
            )
            .arg(
                Arg::with_name("output")
                    .long("output")
                    .value_name("DIR")
                    .help("Directory to write chart PNGs into")
                    .takes_value(true),
            )
            .arg(
                Arg::with_name("verbose")
                    .short("v")
                    .long("verbose")
                    .help("Increase verbosity by one level. Can be used more than once")
                    .multiple(true),
            );

        let matches = app.get_matches();

        let mut config = if let Some(file) = matches.value_of("config") {
            Config::load_from_file(file)
        } else {
            println!("NOTE: using builtin base configuration");
            Default::default()
        };

        if let Some(data) = matches.value_of("data") {
            config.general.set_data(data.to_string());
        }

        if let Some(output) = matches.value_of("output") {
            config.general.set_output(output.to_string());
        }

        match matches.occurrences_of("verbose") {
            0 => {}
            1 => config.general.set_logging(LevelFilter::Debug),
            _ => config.general.set_logging(LevelFilter::Trace),
        }

        config
    }

    fn load_from_file(file: &str) -> Config {
        let mut file = std::fs::File::open(file).unwrap_or_else(|e| {
            println!("ERROR: failed to open config file: {}", e);
            std::process::exit(1);
        });
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap_or_else(|e| {
            println!("ERROR: failed to read config file: {}", e);
            std::process::exit(1);
        });
        toml::from_str(&content).unwrap_or_else(|e| {
            println!("ERROR: failed to parse config file: {}", e);
            std::process::exit(1);
        })
    }

    pub fn sweep(&self) -> Sweep {
        self.sweep
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn data(&self) -> PathBuf {
        PathBuf::from(self.general.data())
    }

    pub fn output(&self) -> PathBuf {
        PathBuf::from(self.general.output())
    }

    pub fn baseline_label(&self) -> String {
        self.general.baseline_label()
    }

    pub fn comparison_label(&self) -> String {
        self.general.comparison_label()
    }

    pub fn width(&self) -> u32 {
        self.general.width()
    }

    pub fn height(&self) -> u32 {
        self.general.height()
    }

    pub fn logging(&self) -> LevelFilter {
        self.general.logging()
    }

    pub fn print(&self) {
        info!("-----");
        info!(
            "Config: Sweep: start: {} end: {} step: {} points: {}",
            self.sweep.start(),
            self.sweep.end(),
            self.sweep.step(),
            self.sweep.len()
        );
        info!(
            "Config: Files: {} Data: {} Output: {}",
            self.files.len(),
            self.general.data(),
            self.general.output()
        );
        info!(
            "Config: Series: {} vs {}",
            self.general.baseline_label(),
            self.general.comparison_label()
        );
    }
}
