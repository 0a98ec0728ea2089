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

use crate::commands::helps::tclcomp;
use crate::core::context::Context;
use crate::util::anyerror::AnyError;
use crate::util::environment;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Command, Help, Subcommand};

use super::entities::Entities;
use super::generate::Generate;
use super::template::Template;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, PartialEq)]
pub struct Tclcomp {
    version: bool,
    color: Option<ColorMode>,
    command: Option<TclcompSubcommand>,
}

impl Command for Tclcomp {
    fn interpret(cli: &mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(tclcomp::HELP))?;
        Ok(Tclcomp {
            version: cli.check(Arg::flag("version"))?,
            color: cli.get(Arg::option("color").value("when"))?,
            command: cli.nest(Arg::subcommand("command"))?,
        })
    }

    fn execute(self) -> proc::Result {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .try_init();

        match self.color.unwrap_or(ColorMode::Auto) {
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
            ColorMode::Auto => {
                if environment::read(environment::NO_COLOR).is_some() {
                    colored::control::set_override(false);
                }
            }
        }

        // prioritize version information
        if self.version == true {
            println!("tclcomp {}", VERSION);
            Ok(())
        // run the specified command
        } else if let Some(c) = self.command {
            // configuration is loaded by the commands that need it
            let context = Context::new().sim_path(environment::TCLCOMP_SIM_PATH)?;
            c.execute(&context)
        // if no command is given then print default help
        } else {
            Ok(println!("{}", tclcomp::HELP))
        }
    }
}

#[derive(Debug, PartialEq)]
enum TclcompSubcommand {
    Generate(Generate),
    Entities(Entities),
    Template(Template),
}

impl Subcommand<Context> for TclcompSubcommand {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        match cli
            .select(&["generate", "g", "entities", "template"])?
            .as_ref()
        {
            "g" | "generate" => Ok(TclcompSubcommand::Generate(Generate::interpret(cli)?)),
            "entities" => Ok(TclcompSubcommand::Entities(Entities::interpret(cli)?)),
            "template" => Ok(TclcompSubcommand::Template(Template::interpret(cli)?)),
            _ => panic!("an unimplemented command was passed through!"),
        }
    }

    fn execute(self, context: &Context) -> proc::Result {
        match self {
            TclcompSubcommand::Generate(c) => c.execute(context),
            TclcompSubcommand::Entities(c) => c.execute(context),
            TclcompSubcommand::Template(c) => c.execute(context),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ColorMode {
    Always,
    Never,
    Auto,
}

impl std::str::FromStr for ColorMode {
    type Err = AnyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            "auto" => Ok(Self::Auto),
            _ => Err(AnyError(format!(
                "unknown color mode {:?}; expected one of: auto, always, never",
                s
            ))),
        }
    }
}
