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

use crate::commands::helps::entities;
use crate::core::circuit::{Circuit, EntityProvider};
use crate::core::context::Context;
use crate::error::{Error, LastError};
use std::path::PathBuf;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Entities {
    circuit: PathBuf,
}

impl Subcommand<Context> for Entities {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(entities::HELP))?;
        Ok(Entities {
            circuit: cli.require(Arg::positional("circuit"))?,
        })
    }

    fn execute(self, _: &Context) -> proc::Result {
        let circuit = match Circuit::from_file(&self.circuit) {
            Ok(r) => r,
            Err(e) => return Err(Error::CircuitNotLoaded(LastError(e.to_string())))?,
        };
        print!("{}", Self::list(&circuit));
        Ok(())
    }
}

impl Entities {
    /// Creates the listing with one entity name per line.
    fn list<P: EntityProvider>(ctx: &P) -> String {
        ctx.hdl_entities()
            .into_iter()
            .fold(String::new(), |mut acc, e| {
                acc.push_str(&format!("{}\n", e));
                acc
            })
    }
}
