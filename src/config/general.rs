// Copyright 2019 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use log::LevelFilter;
use serde_derive::*;

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct General {
    #[serde(default = "default_data")]
    data: String,
    #[serde(default = "default_output")]
    output: String,
    #[serde(default = "default_baseline_label")]
    baseline_label: String,
    #[serde(default = "default_comparison_label")]
    comparison_label: String,
    #[serde(default = "default_width")]
    width: u32,
    #[serde(default = "default_height")]
    height: u32,
    #[serde(default = "default_logging_level")]
    logging: LevelFilter,
}

fn default_data() -> String {
    ".".to_string()
}

fn default_output() -> String {
    "charts".to_string()
}

fn default_baseline_label() -> String {
    "Quick Sort".to_string()
}

fn default_comparison_label() -> String {
    "Intro Sort".to_string()
}

fn default_width() -> u32 {
    1000
}

fn default_height() -> u32 {
    600
}

fn default_logging_level() -> LevelFilter {
    LevelFilter::Info
}

impl Default for General {
    fn default() -> General {
        General {
            data: default_data(),
            output: default_output(),
            baseline_label: default_baseline_label(),
            comparison_label: default_comparison_label(),
            width: default_width(),
            height: default_height(),
            logging: default_logging_level(),
        }
    }
}

impl General {
    pub fn data(&self) -> String {
        self.data.clone()
    }

    pub fn set_data(&mut self, data: String) {
        self.data = data;
    }

    pub fn output(&self) -> String {
        self.output.clone()
    }

    pub fn set_output(&mut self, output: String) {
        self.output = output;
    }

    pub fn baseline_label(&self) -> String {
        self.baseline_label.clone()
    }

    pub fn comparison_label(&self) -> String {
        self.comparison_label.clone()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn logging(&self) -> LevelFilter {
        self.logging
    }

    pub fn set_logging(&mut self, level: LevelFilter) {
        self.logging = level;
    }
}
