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

pub const HELP: &str = r#"Write the compile script for a circuit.

Usage:
    tclcomp generate [options] <circuit>

Args:
    <circuit>             circuit description file (.toml)

Options:
    --config <file>       read settings from this file instead
    --template <file>     script template to fill in
    --output <file>       destination of the generated script

Use 'tclcomp template' to view the built-in template."#;
