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

use std::env;

pub const TCLCOMP_SIM_PATH: &str = "TCLCOMP_SIM_PATH";
pub const TCLCOMP_CONFIG: &str = "TCLCOMP_CONFIG";
pub const NO_COLOR: &str = "NO_COLOR";

/// Reads the environment variable `key`.
///
/// A variable that is set to an empty (or all-whitespace) string is treated
/// the same as an unset variable.
pub fn read(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(v) if v.trim().is_empty() == false => Some(v),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn blank_is_unset() {
        env::set_var("TCLCOMP_TEST_BLANK_VAR", "  ");
        assert_eq!(read("TCLCOMP_TEST_BLANK_VAR"), None);
        env::set_var("TCLCOMP_TEST_SET_VAR", "./sim");
        assert_eq!(read("TCLCOMP_TEST_SET_VAR"), Some(String::from("./sim")));
        assert_eq!(read("TCLCOMP_TEST_NEVER_SET_VAR"), None);
    }
}
