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

use super::config::{Config, CONFIG_FILE};
use super::script::{ScriptGenerator, SCRIPT_FILE};
use crate::error::Error;
use crate::util::anyerror::Fault;
use crate::util::environment;
use std::path::{Path, PathBuf};

/// Directory name used for the simulation files when none is configured.
pub const DEFAULT_SIM_DIR: &str = "sim";

/// Runtime settings shared by all commands.
#[derive(Debug, PartialEq, Clone)]
pub struct Context {
    sim_path: PathBuf,
    config_path: Option<PathBuf>,
    config: Config,
}

impl Context {
    pub fn new() -> Context {
        Context {
            sim_path: PathBuf::from(DEFAULT_SIM_DIR),
            config_path: None,
            config: Config::new(),
        }
    }

    /// Sets the simulation directory. If the variable `key` is not set, the
    /// directory defaults to `sim/` under the current working directory.
    pub fn sim_path(mut self, key: &str) -> Result<Context, Fault> {
        self.sim_path = match environment::read(key) {
            Some(s) => PathBuf::from(s),
            None => std::env::current_dir()?.join(DEFAULT_SIM_DIR),
        };
        Ok(self)
    }

    /// Loads the configuration file named by the variable `key`.
    ///
    /// Without `key`, a `tclcomp.toml` in the current working directory is used
    /// if one exists; otherwise the defaults are kept.
    pub fn settings(self, key: &str) -> Result<Context, Fault> {
        match environment::read(key) {
            Some(s) => {
                let p = PathBuf::from(s);
                if p.exists() == false {
                    return Err(Error::ConfigFileNotFound(p, key.to_string()))?;
                }
                self.config_file(&p)
            }
            None => {
                let p = std::env::current_dir()?.join(CONFIG_FILE);
                match p.exists() {
                    true => self.config_file(&p),
                    false => Ok(self),
                }
            }
        }
    }

    /// Loads the configuration from the file at `path`, replacing any previously
    /// loaded configuration.
    pub fn config_file(mut self, path: &Path) -> Result<Context, Fault> {
        self.config = Config::from_file(path)?;
        self.config_path = Some(path.to_path_buf());
        Ok(self)
    }

    pub fn get_config(&self) -> &Config {
        &self.config
    }

    pub fn get_config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn get_config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub fn get_sim_path(&self) -> &PathBuf {
        &self.sim_path
    }

    /// Returns where the compile script is written.
    ///
    /// The configured output wins over the simulation directory.
    pub fn get_output_path(&self) -> PathBuf {
        match self.config.get_script().get_output() {
            Some(p) => p.clone(),
            None => self.sim_path.join(SCRIPT_FILE),
        }
    }

    /// Creates a script generator set up from this context.
    pub fn create_generator(&self) -> ScriptGenerator {
        ScriptGenerator::from_config(self.config.get_script(), self.get_output_path())
    }
}
