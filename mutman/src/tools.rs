//! The operations exposed to an invoking surface.
//!
//! Each operation shells out to the mutmut engine through the
//! [`CommandRunner`] seam and returns normalized text (or a structured
//! ranking for [`Tools::prioritize_survivors`]), never a raised error.
//! A remote tool-invocation layer registers these methods one-to-one.

use std::path::Path;

use crate::core::prioritizer::{Prioritization, prioritize};
use crate::io::cache::clear_cache_file;
use crate::io::config::ManagerConfig;
use crate::io::engine::run_engine;
use crate::io::process::CommandRunner;

/// Mutation-testing operations bound to a command runner and configuration.
pub struct Tools<R: CommandRunner> {
    runner: R,
    config: ManagerConfig,
}

impl<R: CommandRunner> Tools<R> {
    pub fn new(runner: R, config: ManagerConfig) -> Self {
        Self { runner, config }
    }

    /// Run a full mutation testing session.
    ///
    /// An empty `target` runs the engine against its configured default
    /// scope. `options` is split on whitespace and appended verbatim.
    pub fn run(&self, target: &str, options: &str, venv_path: Option<&Path>) -> String {
        let mut args = vec!["run"];
        if !target.is_empty() {
            args.push(target);
        }
        args.extend(options.split_whitespace());
        self.engine(venv_path, &args)
    }

    /// Overall results of the last run.
    pub fn show_results(&self, venv_path: Option<&Path>) -> String {
        self.engine(venv_path, &["results"])
    }

    /// Survivor report of the last run.
    pub fn show_survivors(&self, venv_path: Option<&Path>) -> String {
        self.engine(venv_path, &["survivors"])
    }

    /// Rerun one survivor, or all survivors when `mutation_id` is `None`.
    pub fn rerun_survivor(&self, mutation_id: Option<&str>, venv_path: Option<&Path>) -> String {
        match mutation_id {
            Some(id) => self.engine(venv_path, &["run", "--rerun", id]),
            None => self.engine(venv_path, &["run", "--rerun-all"]),
        }
    }

    /// Clean the engine cache.
    ///
    /// Falls back to removing the configured cache file directly when the
    /// engine's own clean invocation does not succeed.
    pub fn clean_cache(&self, venv_path: Option<&Path>) -> String {
        let result = run_engine(&self.runner, &self.config, venv_path, &["clean"]);
        if result.succeeded {
            return result.output;
        }
        clear_cache_file(&self.config.cache_path)
    }

    /// Code diff and details for one mutant.
    pub fn show_mutant(&self, mutation_id: &str, venv_path: Option<&Path>) -> String {
        if mutation_id.is_empty() {
            return "Error: mutation_id is required.".to_string();
        }
        self.engine(venv_path, &["show", mutation_id])
    }

    /// Rank survivors by likely materiality.
    ///
    /// Feeds the survivor report text through the prioritizer; engine
    /// errors flow through as report text and yield an empty ranking.
    pub fn prioritize_survivors(&self, venv_path: Option<&Path>) -> Prioritization {
        prioritize(&self.show_survivors(venv_path))
    }

    fn engine(&self, venv_path: Option<&Path>, args: &[&str]) -> String {
        run_engine(&self.runner, &self.config, venv_path, args).output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedRunner;
    use std::fs;

    fn tools(runner: ScriptedRunner) -> Tools<ScriptedRunner> {
        Tools::new(runner, ManagerConfig::default())
    }

    fn only_call(tools: &Tools<ScriptedRunner>) -> Vec<String> {
        let calls = tools.runner.calls();
        assert_eq!(calls.len(), 1);
        calls.into_iter().next().expect("one call")
    }

    #[test]
    fn run_without_target_omits_positional() {
        let tools = tools(ScriptedRunner::succeeding("done"));
        let output = tools.run("", "", None);

        assert_eq!(output, "done");
        assert_eq!(only_call(&tools), vec!["mutmut", "run"]);
    }

    #[test]
    fn run_appends_target_and_split_options() {
        let tools = tools(ScriptedRunner::succeeding("done"));
        tools.run("geohash", "--use-coverage  --max-children 2", None);

        assert_eq!(
            only_call(&tools),
            vec![
                "mutmut",
                "run",
                "geohash",
                "--use-coverage",
                "--max-children",
                "2"
            ]
        );
    }

    #[test]
    fn show_results_and_survivors_invoke_engine_subcommands() {
        let tools = tools(ScriptedRunner::succeeding("report"));
        assert_eq!(tools.show_results(None), "report");
        assert_eq!(tools.show_survivors(None), "report");

        let calls = tools.runner.calls();
        assert_eq!(calls[0], vec!["mutmut", "results"]);
        assert_eq!(calls[1], vec!["mutmut", "survivors"]);
    }

    #[test]
    fn rerun_with_id_targets_that_survivor() {
        let tools = tools(ScriptedRunner::succeeding("ok"));
        tools.rerun_survivor(Some("pkg.distance:42"), None);

        assert_eq!(
            only_call(&tools),
            vec!["mutmut", "run", "--rerun", "pkg.distance:42"]
        );
    }

    #[test]
    fn rerun_without_id_reruns_all() {
        let tools = tools(ScriptedRunner::succeeding("ok"));
        tools.rerun_survivor(None, None);

        assert_eq!(only_call(&tools), vec!["mutmut", "run", "--rerun-all"]);
    }

    #[test]
    fn clean_returns_engine_output_on_success() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cache = temp.path().join(".mutmut-cache");
        fs::write(&cache, b"x").expect("write cache");

        let config = ManagerConfig {
            cache_path: cache.clone(),
            ..ManagerConfig::default()
        };
        let tools = Tools::new(ScriptedRunner::succeeding("cache cleaned\n"), config);

        assert_eq!(tools.clean_cache(None), "cache cleaned\n");
        // Engine handled it, so the fallback must not touch the file.
        assert!(cache.exists());
    }

    #[test]
    fn clean_falls_back_to_file_removal_on_engine_failure() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cache = temp.path().join(".mutmut-cache");
        fs::write(&cache, b"x").expect("write cache");

        let config = ManagerConfig {
            cache_path: cache.clone(),
            ..ManagerConfig::default()
        };
        let tools = Tools::new(ScriptedRunner::failing("Error: no clean subcommand"), config);

        assert_eq!(tools.clean_cache(None), "Mutmut cache cleared successfully.");
        assert!(!cache.exists());
    }

    #[test]
    fn clean_fallback_without_cache_reports_nothing_to_clear() {
        let temp = tempfile::tempdir().expect("tempdir");
        let config = ManagerConfig {
            cache_path: temp.path().join(".mutmut-cache"),
            ..ManagerConfig::default()
        };
        let tools = Tools::new(ScriptedRunner::failing("Error: boom"), config);

        assert_eq!(tools.clean_cache(None), "No mutmut cache found to clear.");
    }

    #[test]
    fn show_mutant_requires_an_id_and_spawns_nothing() {
        let tools = tools(ScriptedRunner::succeeding("diff"));
        let output = tools.show_mutant("", None);

        assert_eq!(output, "Error: mutation_id is required.");
        assert!(tools.runner.calls().is_empty());
    }

    #[test]
    fn show_mutant_passes_id_as_discrete_token() {
        let tools = tools(ScriptedRunner::succeeding("diff"));
        tools.show_mutant("pkg.distance:42; rm -rf /", None);

        // The id stays one argv token, shell metacharacters and all.
        assert_eq!(
            only_call(&tools),
            vec!["mutmut", "show", "pkg.distance:42; rm -rf /"]
        );
    }

    #[test]
    fn prioritize_survivors_ranks_report_lines() {
        let report = "SURVIVED: pkg.core_logic:42 (x)\nSURVIVED: pkg.logger_setup:10 (y)\n";
        let tools = tools(ScriptedRunner::succeeding(report));

        let ranking = tools.prioritize_survivors(None);
        assert_eq!(ranking.prioritized.len(), 2);
        assert_eq!(ranking.prioritized[0].score, 1);
        assert_eq!(ranking.message, "Survivors prioritized by likely materiality.");
    }

    #[test]
    fn prioritize_survivors_with_clean_run_is_empty() {
        let tools = tools(ScriptedRunner::succeeding("No surviving mutants found.\n"));

        let ranking = tools.prioritize_survivors(None);
        assert!(ranking.prioritized.is_empty());
        assert_eq!(ranking.message, "No surviving mutants found.");
    }

    #[test]
    fn prioritize_survivors_with_engine_error_is_empty_ranking() {
        let tools = tools(ScriptedRunner::failing("Error: no results cache"));

        let ranking = tools.prioritize_survivors(None);
        assert!(ranking.prioritized.is_empty());
        assert_eq!(ranking.message, "Survivors prioritized by likely materiality.");
    }
}
