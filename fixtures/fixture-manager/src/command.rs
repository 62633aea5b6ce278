// Copyright (c) The lopt Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::Parser;
use color_eyre::Result;
use fixture_details::AllFixtures;
use log::LevelFilter;

#[derive(Debug, Parser)]
pub struct FixtureManagerApp {
    #[clap(subcommand)]
    command: FixtureManagerCommand,
}

#[derive(Debug, Parser)]
pub enum FixtureManagerCommand {
    /// Minimize the known fixtures and a batch of random tables, checking every cover.
    Check {
        /// Number of random tables to generate.
        #[clap(long, short, default_value_t = 64)]
        count: usize,

        /// Inputs per random table.
        #[clap(long, short, default_value_t = 4)]
        inputs: usize,

        /// Outputs per random table.
        #[clap(long, short, default_value_t = 2)]
        outputs: usize,

        /// Seed for the random tables.
        #[clap(long, short, default_value = "lopt")]
        seed: String,

        /// Log every minimized output.
        #[clap(long, short)]
        verbose: bool,
    },
}

impl FixtureManagerApp {
    pub fn log_level(&self) -> LevelFilter {
        match &self.command {
            FixtureManagerCommand::Check { verbose: true, .. } => LevelFilter::Debug,
            FixtureManagerCommand::Check { .. } => LevelFilter::Info,
        }
    }

    pub fn exec(self) -> Result<()> {
        self.command.exec()
    }
}

impl FixtureManagerCommand {
    pub fn exec(self) -> Result<()> {
        match self {
            Self::Check {
                count,
                inputs,
                outputs,
                seed,
                verbose: _,
            } => {
                AllFixtures::get().check_known()?;
                let summary = AllFixtures::check_random(count, inputs, outputs, &seed)?;
                println!(
                    "checked {} tables ({} outputs): {} terms, {} literals",
                    summary.tables, summary.outputs, summary.terms, summary.literals
                );
                Ok(())
            }
        }
    }
}
