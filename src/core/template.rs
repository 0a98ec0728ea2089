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

use super::swap::{self, StrSwapTable};
use std::path::PathBuf;

/// Default template for the compile script, shipped with the binary.
pub const COMP_TEMPLATE: &str = include_str!("../../resources/comp.templ");

/// Placeholder replaced by the generation timestamp.
pub const DATE_VAR: &str = "date";
/// Placeholder replaced by the block of compiler invocations.
pub const COMP_FILES_VAR: &str = "comp_files";

/// Where the text of a [Template] comes from.
#[derive(Debug, PartialEq, Clone, Default)]
pub enum TemplateSource {
    #[default]
    Builtin,
    File(PathBuf),
}

impl TemplateSource {
    /// Reads the template text from the source.
    pub fn read(&self) -> std::io::Result<Template> {
        match self {
            Self::Builtin => Ok(Template::builtin()),
            Self::File(p) => Template::load(p),
        }
    }
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Builtin => write!(f, "<builtin>"),
            Self::File(p) => write!(f, "{}", p.display()),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Template(String);

impl Template {
    pub fn new(text: &str) -> Self {
        Self(text.to_string())
    }

    pub fn builtin() -> Self {
        Self::new(COMP_TEMPLATE)
    }

    pub fn load(path: &PathBuf) -> std::io::Result<Self> {
        Ok(Self(std::fs::read_to_string(path)?))
    }

    /// Fills in every known placeholder with its value from `code`.
    pub fn render(&self, code: &StrSwapTable) -> String {
        swap::substitute(&self.0, code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
