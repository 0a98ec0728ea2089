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

use std::collections::HashMap;

/// Lookup table of placeholder names to their replacement text.
#[derive(Debug, PartialEq, Default)]
pub struct StrSwapTable(HashMap<String, String>);

impl StrSwapTable {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Builder-style variant of [StrSwapTable::add].
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.add(key, value);
        self
    }

    pub fn add(&mut self, key: &str, value: &str) -> Option<String> {
        self.0.insert(key.to_string(), value.to_string())
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.0.get(key)
    }
}

const VAR_DELIMITER: char = '%';

/// Performs variable replacement on the given `text`, looking up variables in
/// the `code` to swap with their values.
///
/// A variable is written as `%name%`. Every occurrence of a known variable is
/// replaced in a single pass; replaced values are never scanned again. Text
/// that does not form a known variable is copied as-is.
pub fn substitute(text: &str, code: &StrSwapTable) -> String {
    let mut result = String::with_capacity(text.len());

    let mut rest = text;
    while let Some(i) = rest.find(VAR_DELIMITER) {
        result.push_str(&rest[..i]);
        let tail = &rest[i..];
        match match_variable(tail, code) {
            Some((value, len)) => {
                result.push_str(value);
                rest = &tail[len..];
            }
            None => {
                // keep the delimiter; it may open the next variable
                result.push(VAR_DELIMITER);
                rest = &tail[VAR_DELIMITER.len_utf8()..];
            }
        }
    }
    result.push_str(rest);
    result
}

/// Checks if `text` starts with a `%name%` variable known to `code`.
///
/// Assumes the first character of `text` is the opening delimiter. Returns the
/// replacement value and the number of bytes the variable spans.
fn match_variable<'a>(text: &str, code: &'a StrSwapTable) -> Option<(&'a str, usize)> {
    let body = &text[VAR_DELIMITER.len_utf8()..];
    let end = body.find(VAR_DELIMITER)?;
    let key = &body[..end];
    code.get(key)
        .map(|value| (value.as_str(), end + 2 * VAR_DELIMITER.len_utf8()))
}
