//
//  Copyright (C) 2022-2024  Chase Ruskin
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

use crate::commands::helps::generate;
use crate::core::circuit::Circuit;
use crate::core::context::Context;
use crate::core::script::{Outcome, ScriptError};
use crate::error::{Error, Hint, LastError};
use crate::util::environment;
use crate::util::filesystem;
use colored::Colorize;
use std::path::PathBuf;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Generate {
    circuit: PathBuf,
    config: Option<PathBuf>,
    template: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl Subcommand<Context> for Generate {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(generate::HELP))?;
        Ok(Generate {
            // Options
            config: cli.get(Arg::option("config").value("file"))?,
            template: cli.get(Arg::option("template").value("file"))?,
            output: cli.get(Arg::option("output").value("file"))?,
            // Positionals
            circuit: cli.require(Arg::positional("circuit"))?,
        })
    }

    fn execute(self, c: &Context) -> proc::Result {
        let context = self.prepare(c, environment::TCLCOMP_CONFIG)?;

        let circuit = match Circuit::from_file(&self.circuit) {
            Ok(r) => r,
            Err(e) => return Err(Error::CircuitNotLoaded(LastError(e.to_string())))?,
        };

        let mut generator = context.create_generator();
        match generator.generate(&circuit) {
            Ok(Outcome::Written { path, commands }) => {
                println!(
                    "{}: wrote {} compile command(s) for circuit {:?} to {}",
                    "info".green(),
                    commands,
                    circuit.get_name(),
                    filesystem::into_std_str(path)
                );
                Ok(())
            }
            Ok(Outcome::Fresh) => Ok(()),
            Err(e) => {
                let hint = match &e {
                    ScriptError::TemplateRead { .. } => Hint::TemplateView,
                    ScriptError::FileWrite { .. } => Hint::SimPathEnv,
                };
                Err(Error::ScriptNotGenerated(LastError(e.to_string()), hint))?
            }
        }
    }
}

impl Generate {
    /// Creates the context for this run, with command-line values taking
    /// priority over the configuration files.
    ///
    /// The file given by `--config` replaces the one named by the variable `key`.
    fn prepare(&self, c: &Context, key: &str) -> Result<Context, Error> {
        let loaded = match &self.config {
            Some(p) => c.clone().config_file(p),
            None => c.clone().settings(key),
        };
        let mut context = match loaded {
            Ok(r) => r,
            Err(e) => return Err(Error::ConfigNotLoaded(LastError(e.to_string()))),
        };
        let settings = context.get_config_mut().get_script_mut();
        if let Some(t) = &self.template {
            settings.set_template(t.clone());
        }
        if let Some(o) = &self.output {
            settings.set_output(o.clone());
        }
        Ok(context)
    }
}
