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

use crate::util::anyerror::{AnyError, Fault};
use crate::util::filesystem;
use chrono::format::{Item, StrftimeItems};
use serde_derive::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONFIG_FILE: &str = "tclcomp.toml";

#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    script: ScriptConfig,
}

/// Settings for the generated compile script.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct ScriptConfig {
    compiler: String,
    args: Vec<String>,
    src_dir: String,
    extension: String,
    date_format: String,
    template: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            compiler: String::from("vcom"),
            args: vec![
                String::from("-reportprogress"),
                String::from("300"),
                String::from("-work"),
                String::from("work"),
            ],
            src_dir: String::from("../src"),
            extension: String::from("vhdl"),
            date_format: String::from("%Y-%m-%d %H:%M:%S"),
            template: None,
            output: None,
        }
    }
}

impl ScriptConfig {
    pub fn get_compiler(&self) -> &str {
        &self.compiler
    }

    pub fn get_args(&self) -> &Vec<String> {
        &self.args
    }

    pub fn get_src_dir(&self) -> &str {
        &self.src_dir
    }

    pub fn get_extension(&self) -> &str {
        &self.extension
    }

    pub fn get_date_format(&self) -> &str {
        &self.date_format
    }

    pub fn get_template(&self) -> Option<&PathBuf> {
        self.template.as_ref()
    }

    pub fn get_output(&self) -> Option<&PathBuf> {
        self.output.as_ref()
    }

    pub fn set_template(&mut self, p: PathBuf) {
        self.template = Some(p);
    }

    pub fn set_output(&mut self, p: PathBuf) {
        self.output = Some(p);
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cfg: Config = toml::from_str(s)?;
        cfg.validate()
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the configuration file at `path`.
    ///
    /// Relative template and output paths are resolved against the directory
    /// holding the file.
    pub fn from_file(path: &Path) -> Result<Self, Fault> {
        let contents = std::fs::read_to_string(&path)
            .map_err(|e| AnyError::context(&format!("read {:?}", path), e))?;
        let cfg = Self::from_str(&contents)
            .map_err(|e| AnyError::context(&format!("parse {:?}", path), e))?;
        let root = path.parent().unwrap_or(Path::new("."));
        Ok(cfg.resolve_root_path(root))
    }

    pub fn get_script(&self) -> &ScriptConfig {
        &self.script
    }

    pub fn get_script_mut(&mut self) -> &mut ScriptConfig {
        &mut self.script
    }

    /// Applies the `resolve_rel_path` fn to the file paths of the script table.
    fn resolve_root_path(mut self, root: &Path) -> Self {
        self.script.template = self
            .script
            .template
            .map(|p| filesystem::resolve_rel_path(root, &p));
        self.script.output = self
            .script
            .output
            .map(|p| filesystem::resolve_rel_path(root, &p));
        self
    }

    fn validate(self) -> Result<Self, ConfigError> {
        let script = &self.script;
        if script.compiler.trim().is_empty() == true {
            return Err(ConfigError::EmptyCompiler);
        }
        if StrftimeItems::new(&script.date_format).any(|i| i == Item::Error) == true {
            return Err(ConfigError::InvalidDateFormat(script.date_format.clone()));
        }
        Ok(self)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0}")]
    Syntax(#[from] toml::de::Error),
    #[error("key \"script.compiler\" cannot be empty")]
    EmptyCompiler,
    #[error("key \"script.date-format\" has invalid format string {0:?}")]
    InvalidDateFormat(String),
}

#[cfg(test)]
mod test {
    use super::*;

    const C_0: &str = r#"
# This is a blank configuration file.
"#;

    const C_1: &str = r#"
[script]
compiler = "ghdl"
args = ["-a", "--std=08"]
src-dir = "hdl"
extension = "vhd"
date-format = "%d.%m.%Y"
template = "templates/comp.templ"
output = "/tmp/sim/comp.tcl"
"#;

    #[test]
    fn parse_empty_config() {
        assert_eq!(Config::from_str(C_0).unwrap(), Config::new());
        let script = Config::new().script;
        assert_eq!(script.get_compiler(), "vcom");
        assert_eq!(script.get_args().join(" "), "-reportprogress 300 -work work");
        assert_eq!(script.get_src_dir(), "../src");
        assert_eq!(script.get_extension(), "vhdl");
    }

    #[test]
    fn parse_basic_config() {
        let cfg = Config::from_str(C_1).unwrap();
        let script = cfg.get_script();
        assert_eq!(script.get_compiler(), "ghdl");
        assert_eq!(script.get_args(), &vec!["-a".to_string(), "--std=08".to_string()]);
        assert_eq!(script.get_src_dir(), "hdl");
        assert_eq!(script.get_extension(), "vhd");
        assert_eq!(script.get_date_format(), "%d.%m.%Y");
        assert_eq!(script.get_template(), Some(&PathBuf::from("templates/comp.templ")));
    }

    #[test]
    fn demo_config_matches_defaults() {
        let cfg = Config::from_str(include_str!("../../demos/tclcomp.toml")).unwrap();
        assert_eq!(cfg, Config::new());
    }

    #[test]
    fn partial_table_keeps_defaults() {
        let cfg = Config::from_str("[script]\ncompiler = \"nvc\"\n").unwrap();
        assert_eq!(cfg.get_script().get_compiler(), "nvc");
        assert_eq!(cfg.get_script().get_extension(), "vhdl");
    }

    #[test]
    fn reject_bad_values() {
        assert!(matches!(
            Config::from_str("[script]\ncompiler = \" \"\n"),
            Err(ConfigError::EmptyCompiler)
        ));
        assert!(matches!(
            Config::from_str("[script]\ndate-format = \"%Q\"\n"),
            Err(ConfigError::InvalidDateFormat(_))
        ));
        assert!(matches!(
            Config::from_str("[script]\nflavor = \"spicy\"\n"),
            Err(ConfigError::Syntax(_))
        ));
    }

    #[test]
    fn paths_resolve_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, C_1).unwrap();
        let cfg = Config::from_file(&path).unwrap();
        assert_eq!(
            cfg.get_script().get_template(),
            Some(&dir.path().join("templates/comp.templ"))
        );
        // absolute paths are left alone
        assert_eq!(
            cfg.get_script().get_output(),
            Some(&PathBuf::from("/tmp/sim/comp.tcl"))
        );
    }
}
