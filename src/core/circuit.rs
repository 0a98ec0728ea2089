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
use serde_derive::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// A component whose behavior is defined by an external VHDL source file.
#[derive(Debug, PartialEq, Clone)]
pub struct HdlEntity {
    name: String,
}

impl HdlEntity {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// Returns the top-level name of the entity, which is also the stem of
    /// its source file.
    pub fn get_name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for HdlEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Capability to list the HDL entities that belong to a circuit.
pub trait EntityProvider {
    /// Returns the HDL entities in enumeration order.
    fn hdl_entities(&self) -> Vec<HdlEntity>;
}

impl EntityProvider for Vec<HdlEntity> {
    fn hdl_entities(&self) -> Vec<HdlEntity> {
        self.clone()
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Component {
    /// Instance of a VHDL entity, compiled from `<name>.vhdl`.
    Vhdl { name: String },
    /// Built-in component simulated natively.
    Native { name: String },
}

impl Component {
    pub fn get_name(&self) -> &str {
        match self {
            Self::Vhdl { name } => name,
            Self::Native { name } => name,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Circuit {
    name: String,
    #[serde(default, rename = "component")]
    components: Vec<Component>,
}

impl Circuit {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            components: Vec::new(),
        }
    }

    /// Appends `comp` to the end of the circuit's component list.
    pub fn add(mut self, comp: Component) -> Self {
        self.components.push(comp);
        self
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_components(&self) -> &Vec<Component> {
        &self.components
    }

    /// Loads a circuit description from the TOML file at `path`.
    pub fn from_file(path: &Path) -> Result<Self, Fault> {
        let contents = std::fs::read_to_string(&path)
            .map_err(|e| AnyError::context(&format!("read circuit file {:?}", path), e))?;
        let circuit = Self::from_str(&contents)
            .map_err(|e| AnyError::context(&format!("parse circuit file {:?}", path), e))?;
        Ok(circuit)
    }

    /// Verifies every VHDL entity has a usable name.
    fn validate(self) -> Result<Self, CircuitError> {
        for (i, comp) in self.components.iter().enumerate() {
            if let Component::Vhdl { name } = comp {
                if name.trim().is_empty() == true {
                    return Err(CircuitError::EmptyEntityName(i));
                }
            }
        }
        Ok(self)
    }
}

impl FromStr for Circuit {
    type Err = CircuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let circuit: Circuit = toml::from_str(s)?;
        circuit.validate()
    }
}

impl EntityProvider for Circuit {
    fn hdl_entities(&self) -> Vec<HdlEntity> {
        self.components
            .iter()
            .filter_map(|c| match c {
                Component::Vhdl { name } => Some(HdlEntity::new(name.trim())),
                Component::Native { .. } => None,
            })
            .collect()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CircuitError {
    #[error("{0}")]
    Syntax(#[from] toml::de::Error),
    #[error("component at index {0} is a vhdl entity with an empty name")]
    EmptyEntityName(usize),
}
