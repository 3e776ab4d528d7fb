// Copyright 2019 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use log::{error, info};

use sortgraph::chart;
use sortgraph::config::Config;
use sortgraph::error::Error;
use sortgraph::logger::SimpleLogger;
use sortgraph::scenario::Scenario;
use sortgraph::series;
use sortgraph::VERSION;

pub fn main() {
    let config = Config::new();

    SimpleLogger::new()
        .level(config.logging())
        .init()
        .expect("Failed to initialize logger");

    info!("sortgraph {} initializing...", VERSION);

    config.print();

    if let Err(error) = run(&config) {
        error!("{}", error);
        std::process::exit(1);
    }
}

// load every series up front, then render strictly in scenario order; the
// first failure is terminal and charts already written are left in place
fn run(config: &Config) -> Result<(), Error> {
    let data = series::load_all(config.files(), &config.data())?;
    let scenarios = Scenario::pair(config.files())?;
    let sweep = config.sweep();

    std::fs::create_dir_all(config.output()).map_err(|error| {
        Error::Render(format!(
            "unable to create output directory {}: {}",
            config.output().display(),
            error
        ))
    })?;

    for scenario in &scenarios {
        // pairing was built from the same list the loader consumed
        let baseline = data
            .get(scenario.baseline_file())
            .expect("series loaded for every configured file");
        let comparison = data
            .get(scenario.comparison_file())
            .expect("series loaded for every configured file");
        let path = chart::plot_comparison(scenario, &sweep, baseline, comparison, config)?;
        info!("rendered {} to {}", scenario.name(), path.display());
    }

    info!("rendered {} charts", scenarios.len());
    Ok(())
}
