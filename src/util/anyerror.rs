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

use std::error::Error;
use std::fmt::Display;

pub type Fault = Box<dyn Error>;

/// A free-form error message.
///
/// Used where a lower-level error needs to be reported alongside what was
/// being attempted when it occurred.
#[derive(Debug, PartialEq)]
pub struct AnyError(pub String);

impl AnyError {
    /// Wraps `err` with a description of the failed `action`.
    pub fn context<E: Display>(action: &str, err: E) -> Self {
        Self(format!("failed to {}: {}", action, err))
    }
}

impl Error for AnyError {}

impl Display for AnyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
