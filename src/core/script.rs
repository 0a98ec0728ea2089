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

//! Generation of the TCL script that compiles the VHDL sources of a circuit.
//!
//! The script is cached: once written, it is left alone until the generator is
//! invalidated (for example, after the contents of the circuit change).

use super::circuit::{EntityProvider, HdlEntity};
use super::config::ScriptConfig;
use super::swap::StrSwapTable;
use super::template::{TemplateSource, COMP_FILES_VAR, DATE_VAR};
use crate::util::filesystem;
use chrono::NaiveDateTime;
use std::fmt::Write;
use std::path::PathBuf;

/// Default file name of the generated script within the simulation directory.
pub const SCRIPT_FILE: &str = "comp.tcl";

/// First line of every generated command block.
pub const HEADER: &str = "Autogenerated by tclcomp";

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub enum ScriptState {
    /// The script on disk may not reflect the circuit.
    #[default]
    Stale,
    /// The script on disk was written since the last invalidation.
    Valid,
}

#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// Nothing was done; the script was already valid.
    Fresh,
    /// The script was written to `path` with `commands` compiler invocations.
    Written { path: PathBuf, commands: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("could not read template {path}: {source}")]
    TemplateRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not create script file {path:?}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// How to invoke the VHDL compiler on a single entity.
#[derive(Debug, PartialEq, Clone)]
pub struct CompileCommand {
    compiler: String,
    args: Vec<String>,
    src_dir: String,
    extension: String,
}

impl Default for CompileCommand {
    fn default() -> Self {
        Self::from(&ScriptConfig::default())
    }
}

impl From<&ScriptConfig> for CompileCommand {
    fn from(value: &ScriptConfig) -> Self {
        Self {
            compiler: value.get_compiler().to_string(),
            args: value.get_args().clone(),
            src_dir: value.get_src_dir().trim_end_matches('/').to_string(),
            extension: value.get_extension().trim_start_matches('.').to_string(),
        }
    }
}

impl CompileCommand {
    /// Creates the invocation line for `entity`, without a line ending.
    pub fn format(&self, entity: &HdlEntity) -> String {
        let mut line = self.compiler.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line.push(' ');
        if self.src_dir.is_empty() == false {
            line.push_str(&self.src_dir);
            line.push('/');
        }
        line.push_str(entity.get_name());
        if self.extension.is_empty() == false {
            line.push('.');
            line.push_str(&self.extension);
        }
        line
    }

    /// Creates the command block: the header line, then one invocation per
    /// entity in the given order.
    pub fn block(&self, entities: &[HdlEntity]) -> String {
        let mut block = String::from(HEADER);
        block.push_str(LINE_ENDING);
        for entity in entities {
            block.push_str(&self.format(entity));
            block.push_str(LINE_ENDING);
        }
        block
    }
}

/// Writes the compile script and remembers whether it is still up to date.
#[derive(Debug, PartialEq)]
pub struct ScriptGenerator {
    command: CompileCommand,
    template: TemplateSource,
    output: PathBuf,
    date_format: String,
    state: ScriptState,
    failures: usize,
}

impl ScriptGenerator {
    /// Creates a generator writing to `output` with the default settings and
    /// the built-in template.
    pub fn new(output: PathBuf) -> Self {
        Self::from_config(&ScriptConfig::default(), output)
    }

    /// Creates a generator writing to `output` with the settings from `cfg`.
    ///
    /// The template comes from `cfg` when it names one, otherwise the built-in
    /// template is used. The output key of `cfg` is ignored.
    pub fn from_config(cfg: &ScriptConfig, output: PathBuf) -> Self {
        Self {
            command: CompileCommand::from(cfg),
            template: match cfg.get_template() {
                Some(p) => TemplateSource::File(p.clone()),
                None => TemplateSource::Builtin,
            },
            output,
            date_format: cfg.get_date_format().to_string(),
            state: ScriptState::default(),
            failures: 0,
        }
    }

    pub fn template(mut self, src: TemplateSource) -> Self {
        self.template = src;
        self
    }

    pub fn get_output_path(&self) -> &PathBuf {
        &self.output
    }

    pub fn get_state(&self) -> ScriptState {
        self.state
    }

    pub fn is_valid(&self) -> bool {
        self.state == ScriptState::Valid
    }

    /// Number of failed generations since the last successful one.
    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Marks the script as out-of-date so the next call to `generate` rewrites it.
    pub fn invalidate(&mut self) {
        self.state = ScriptState::Stale;
    }

    /// Writes the script using the current local time as the generation date.
    pub fn generate<P: EntityProvider + ?Sized>(
        &mut self,
        ctx: &P,
    ) -> Result<Outcome, ScriptError> {
        self.generate_at(ctx, chrono::Local::now().naive_local())
    }

    /// Writes the script for the entities listed by `ctx`, stamping it with `date`.
    ///
    /// Does nothing if the script is already valid. On failure the state is
    /// left stale so the next call attempts the whole generation again.
    pub fn generate_at<P: EntityProvider + ?Sized>(
        &mut self,
        ctx: &P,
        date: NaiveDateTime,
    ) -> Result<Outcome, ScriptError> {
        if self.state == ScriptState::Valid {
            log::debug!("script {:?} is up to date", self.output);
            return Ok(Outcome::Fresh);
        }
        match self.write(ctx, date) {
            Ok(commands) => {
                self.state = ScriptState::Valid;
                self.failures = 0;
                log::info!(
                    "wrote {} compile command(s) to {:?}",
                    commands,
                    self.output
                );
                Ok(Outcome::Written {
                    path: self.output.clone(),
                    commands,
                })
            }
            Err(e) => {
                self.failures += 1;
                log::error!("{}", e);
                Err(e)
            }
        }
    }

    /// Performs the read, substitute, and write sequence.
    ///
    /// Returns the number of compiler invocations written.
    fn write<P: EntityProvider + ?Sized>(
        &self,
        ctx: &P,
        date: NaiveDateTime,
    ) -> Result<usize, ScriptError> {
        let entities = ctx.hdl_entities();
        let comp_files = self.command.block(&entities);

        let template = self
            .template
            .read()
            .map_err(|e| ScriptError::TemplateRead {
                path: self.template.to_string(),
                source: e,
            })?;

        let code = StrSwapTable::new()
            .with(DATE_VAR, &self.format_date(date))
            .with(COMP_FILES_VAR, &comp_files);
        let contents = template.render(&code);

        filesystem::write_atomic(&self.output, &contents).map_err(|e| ScriptError::FileWrite {
            path: self.output.clone(),
            source: e,
        })?;
        Ok(entities.len())
    }

    fn format_date(&self, date: NaiveDateTime) -> String {
        let mut s = String::new();
        // an unusable format string leaves the date blank
        if write!(s, "{}", date.format(&self.date_format)).is_err() {
            log::warn!("invalid date format {:?}", self.date_format);
            s.clear();
        }
        s
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;
    use std::cell::Cell;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 31)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap()
    }

    fn entities(names: &[&str]) -> Vec<HdlEntity> {
        names.iter().map(|n| HdlEntity::new(n)).collect()
    }

    /// Counts how many times the generator asked for the entity list.
    struct CountingProvider {
        entities: Vec<HdlEntity>,
        queries: Cell<usize>,
    }

    impl EntityProvider for CountingProvider {
        fn hdl_entities(&self) -> Vec<HdlEntity> {
            self.queries.set(self.queries.get() + 1);
            self.entities.clone()
        }
    }

    fn templ_file(dir: &std::path::Path, text: &str) -> PathBuf {
        let p = dir.join("comp.templ");
        std::fs::write(&p, text).unwrap();
        p
    }

    #[test]
    fn format_default_command() {
        let cmd = CompileCommand::default();
        assert_eq!(
            cmd.format(&HdlEntity::new("adder")),
            "vcom -reportprogress 300 -work work ../src/adder.vhdl"
        );
    }

    #[test]
    fn format_custom_command() {
        let cfg: crate::core::config::Config = r#"
[script]
compiler = "ghdl"
args = ["-a"]
src-dir = "hdl/"
extension = ".vhd"
"#
        .parse()
        .unwrap();
        let cmd = CompileCommand::from(cfg.get_script());
        assert_eq!(cmd.format(&HdlEntity::new("mux")), "ghdl -a hdl/mux.vhd");
    }

    #[test]
    fn one_line_per_entity_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join(SCRIPT_FILE);
        let templ = templ_file(dir.path(), "%comp_files%");
        let mut script = ScriptGenerator::new(out.clone()).template(TemplateSource::File(templ));

        let ents = entities(&["adder", "shifter", "adder", "decoder"]);
        let outcome = script.generate_at(&ents, timestamp()).unwrap();
        assert_eq!(
            outcome,
            Outcome::Written {
                path: out.clone(),
                commands: 4
            }
        );

        let text = std::fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], HEADER);
        let cmds: Vec<&str> = lines.into_iter().filter(|l| l.starts_with("vcom ")).collect();
        assert_eq!(
            cmds,
            vec![
                "vcom -reportprogress 300 -work work ../src/adder.vhdl",
                "vcom -reportprogress 300 -work work ../src/shifter.vhdl",
                "vcom -reportprogress 300 -work work ../src/adder.vhdl",
                "vcom -reportprogress 300 -work work ../src/decoder.vhdl",
            ]
        );
    }

    #[test]
    fn substitution_alters_nothing_else() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join(SCRIPT_FILE);
        let templ = templ_file(
            dir.path(),
            "# 100% generated on %date% (%date%)\n%comp_files%# end %unknown%\n",
        );
        let mut script = ScriptGenerator::new(out.clone()).template(TemplateSource::File(templ));
        script.generate_at(&entities(&["alu"]), timestamp()).unwrap();

        let expected = format!(
            "# 100% generated on 2024-01-31 12:30:00 (2024-01-31 12:30:00)\n{}{}vcom -reportprogress 300 -work work ../src/alu.vhdl{}# end %unknown%\n",
            HEADER, LINE_ENDING, LINE_ENDING
        );
        assert_eq!(std::fs::read_to_string(&out).unwrap(), expected);
    }

    #[test]
    fn second_generate_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join(SCRIPT_FILE);
        let mut script = ScriptGenerator::new(out.clone());
        let ctx = CountingProvider {
            entities: entities(&["adder"]),
            queries: Cell::new(0),
        };

        assert!(matches!(script.generate_at(&ctx, timestamp()), Ok(Outcome::Written { .. })));
        assert_eq!(script.is_valid(), true);
        // remove the output to detect any further writes
        std::fs::remove_file(&out).unwrap();

        assert_eq!(script.generate_at(&ctx, timestamp()).unwrap(), Outcome::Fresh);
        assert_eq!(out.exists(), false);
        assert_eq!(ctx.queries.get(), 1);
    }

    #[test]
    fn invalidate_forces_regeneration() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join(SCRIPT_FILE);
        let mut script = ScriptGenerator::new(out.clone());
        let ctx = CountingProvider {
            entities: entities(&["adder"]),
            queries: Cell::new(0),
        };

        script.generate_at(&ctx, timestamp()).unwrap();
        script.invalidate();
        // idempotent
        script.invalidate();
        assert_eq!(script.get_state(), ScriptState::Stale);

        std::fs::remove_file(&out).unwrap();
        assert!(matches!(script.generate_at(&ctx, timestamp()), Ok(Outcome::Written { .. })));
        assert_eq!(out.exists(), true);
        assert_eq!(ctx.queries.get(), 2);
        assert_eq!(script.get_state(), ScriptState::Valid);
    }

    #[test]
    fn missing_template_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join(SCRIPT_FILE);
        let templ = dir.path().join("missing.templ");
        let mut script =
            ScriptGenerator::new(out.clone()).template(TemplateSource::File(templ.clone()));

        let result = script.generate_at(&entities(&["adder"]), timestamp());
        assert!(matches!(result, Err(ScriptError::TemplateRead { .. })));
        assert_eq!(out.exists(), false);
        assert_eq!(script.is_valid(), false);
        assert_eq!(script.failures(), 1);

        // a later call retries from scratch once the template exists
        std::fs::write(&templ, "%comp_files%").unwrap();
        assert!(matches!(
            script.generate_at(&entities(&["adder"]), timestamp()),
            Ok(Outcome::Written { commands: 1, .. })
        ));
        assert_eq!(script.is_valid(), true);
        assert_eq!(script.failures(), 0);
    }

    #[test]
    fn unwritable_output_stays_stale() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("sim");
        // a regular file where the output directory should be
        std::fs::write(&blocker, "").unwrap();
        let mut script = ScriptGenerator::new(blocker.join(SCRIPT_FILE));

        for attempt in 1..=3 {
            let result = script.generate_at(&entities(&["adder"]), timestamp());
            assert!(matches!(result, Err(ScriptError::FileWrite { .. })));
            assert_eq!(script.is_valid(), false);
            assert_eq!(script.failures(), attempt);
        }
    }

    #[test]
    fn no_entities_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join(SCRIPT_FILE);
        let templ = templ_file(dir.path(), "%comp_files%");
        let mut script = ScriptGenerator::new(out.clone()).template(TemplateSource::File(templ));

        assert_eq!(
            script.generate_at(&Vec::<HdlEntity>::new(), timestamp()).unwrap(),
            Outcome::Written {
                path: out.clone(),
                commands: 0
            }
        );
        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            format!("{}{}", HEADER, LINE_ENDING)
        );
    }

    #[test]
    fn builtin_template_and_configured_date() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join(SCRIPT_FILE);
        let cfg: crate::core::config::Config = "[script]\ndate-format = \"%d.%m.%Y\"\n"
            .parse()
            .unwrap();
        let mut script = ScriptGenerator::from_config(cfg.get_script(), out.clone());

        script.generate_at(&entities(&["adder"]), timestamp()).unwrap();
        let text = std::fs::read_to_string(&out).unwrap();
        assert!(text.contains("Generated on 31.01.2024"));
        assert!(text.contains("vcom -reportprogress 300 -work work ../src/adder.vhdl"));
    }

    #[test]
    fn generate_with_circuit() {
        use crate::core::circuit::{Circuit, Component};

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join(SCRIPT_FILE);
        let circuit = Circuit::new("alu")
            .add(Component::Native {
                name: String::from("Clock"),
            })
            .add(Component::Vhdl {
                name: String::from("adder"),
            });
        let mut script = ScriptGenerator::new(out.clone());
        assert!(matches!(
            script.generate(&circuit),
            Ok(Outcome::Written { commands: 1, .. })
        ));
    }
}
