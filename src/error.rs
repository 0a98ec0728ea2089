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

use colored::Colorize;
use std::{fmt::Display, path::PathBuf};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("configuration file {0:?} set by {1} does not exist")]
    ConfigFileNotFound(PathBuf, String),
    #[error("failed to load configuration: {0}")]
    ConfigNotLoaded(LastError),
    #[error("failed to load circuit: {0}")]
    CircuitNotLoaded(LastError),
    #[error("failed to generate compile script: {0}{1}")]
    ScriptNotGenerated(LastError, Hint),
}

#[derive(Debug, PartialEq)]
pub struct LastError(pub String);

impl Display for LastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Error::lowerize(self.0.to_string()))
    }
}

impl Error {
    pub fn lowerize(s: String) -> String {
        // get the first word
        let first_word = match s.split_whitespace().next() {
            Some(w) => w,
            None => return s,
        };
        // retain punctuation if the first word is all-caps and longer than 1 character
        if first_word.len() > 1 && first_word.chars().any(|c| c.is_ascii_lowercase()) == false {
            s
        } else {
            s.char_indices()
                .map(|(i, c)| if i == 0 { c.to_ascii_lowercase() } else { c })
                .collect()
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Hint {
    TemplateView,
    SimPathEnv,
}

impl Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::TemplateView => {
                "use `tclcomp template` to start a new template from the built-in one"
            }
            Self::SimPathEnv => {
                "set the TCLCOMP_SIM_PATH environment variable or \"--output\" to write elsewhere"
            }
        };
        write!(
            f,
            "\n\n{}: {}",
            "hint".green(),
            Error::lowerize(message.to_string())
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lowerize_first_letter() {
        assert_eq!(
            Error::lowerize(String::from("No such file or directory")),
            String::from("no such file or directory")
        );
        // acronyms keep their case
        assert_eq!(
            Error::lowerize(String::from("TOML parse error")),
            String::from("TOML parse error")
        );
        assert_eq!(Error::lowerize(String::new()), String::new());
    }

    #[test]
    fn display_with_hint() {
        colored::control::set_override(false);
        let e = Error::ScriptNotGenerated(
            LastError(String::from("Permission denied")),
            Hint::SimPathEnv,
        );
        assert_eq!(
            e.to_string(),
            "failed to generate compile script: permission denied\n\nhint: set the TCLCOMP_SIM_PATH environment variable or \"--output\" to write elsewhere"
        );
    }
}
