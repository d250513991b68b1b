use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::ComputeArgs;
use crate::error::{CliError, Result};
use saambe::engine::config::DdgConfigBuilder;
use std::path::PathBuf;
use tracing::debug;

/// Merges command line, config file and built-in defaults, in that order of precedence.
pub fn build_config(args: &ComputeArgs) -> Result<AppConfig> {
    build_config_with_defaults(args, DefaultsConfig::default())
}

fn build_config_with_defaults(args: &ComputeArgs, defaults: DefaultsConfig) -> Result<AppConfig> {
    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let saambe_file = file_config.saambe.take().unwrap_or_default();
    let output_file = file_config.output.take().unwrap_or_default();

    let saambe_home = args
        .saambe_home
        .clone()
        .or(saambe_file.home)
        .or(defaults.saambe_home)
        .ok_or_else(|| {
            CliError::Config(
                "Could not determine the SAAMBE-3D home directory. \
                 Pass --saambe-home or set SAAMBE_HOME."
                    .to_string(),
            )
        })?;
    let interpreter = args
        .interpreter
        .clone()
        .or(saambe_file.interpreter)
        .unwrap_or(defaults.interpreter);
    let script = args
        .script
        .clone()
        .or(saambe_file.script)
        .unwrap_or(defaults.script);
    let keep_intermediate = args.keep_intermediate
        || output_file
            .keep_intermediate
            .unwrap_or(defaults.keep_intermediate);

    debug!(
        "Resolved SAAMBE-3D: interpreter {:?}, home {:?}, script {:?}",
        interpreter, saambe_home, script
    );

    let core_config = DdgConfigBuilder::new()
        .interpreter(interpreter)
        .saambe_home(saambe_home)
        .script(script)
        .run_directory(args.output.clone())
        .keep_intermediate(keep_intermediate)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        structure_path: args.input.structure.clone(),
        mutations_path: args.input.mutations.clone(),
        core_config,
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key {
            "saambe.home" => {
                config.saambe.get_or_insert_with(Default::default).home =
                    Some(PathBuf::from(value_str));
            }
            "saambe.interpreter" => {
                config
                    .saambe
                    .get_or_insert_with(Default::default)
                    .interpreter = Some(PathBuf::from(value_str));
            }
            "saambe.script" => {
                config.saambe.get_or_insert_with(Default::default).script =
                    Some(PathBuf::from(value_str));
            }
            "output.keep-intermediate" => {
                config
                    .output
                    .get_or_insert_with(Default::default)
                    .keep_intermediate = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid boolean value for {}: {}", key, value_str))
                })?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::MutationInput;
    use std::fs;
    use tempfile::tempdir;

    fn base_compute_args() -> ComputeArgs {
        ComputeArgs {
            input: MutationInput {
                structure: PathBuf::from("complex.pdb"),
                mutations: PathBuf::from("mutations.txt"),
            },
            output: PathBuf::from("run"),
            config: None,
            saambe_home: None,
            interpreter: None,
            script: None,
            keep_intermediate: false,
            set_values: vec![],
        }
    }

    fn defaults_with_home(home: Option<&str>) -> DefaultsConfig {
        DefaultsConfig {
            saambe_home: home.map(PathBuf::from),
            ..DefaultsConfig::default()
        }
    }

    #[test]
    fn defaults_fill_every_unset_value() {
        let app = build_config_with_defaults(
            &base_compute_args(),
            defaults_with_home(Some("/data/saambe-1.0/saambe")),
        )
        .expect("build ok");
        let cfg = app.core_config;

        assert_eq!(cfg.saambe.interpreter, PathBuf::from("python"));
        assert_eq!(
            cfg.saambe.script_path(),
            PathBuf::from("/data/saambe-1.0/saambe/saambe-3d.py")
        );
        assert_eq!(cfg.output.run_directory, PathBuf::from("run"));
        assert!(!cfg.output.keep_intermediate);
        assert_eq!(app.structure_path, PathBuf::from("complex.pdb"));
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("config.toml");
        fs::write(
            &cfg_path,
            r#"
            [saambe]
            home = "/opt/saambe"
            interpreter = "python3.11"

            [output]
            keep-intermediate = true
            "#,
        )
        .unwrap();

        let mut args = base_compute_args();
        args.config = Some(cfg_path);

        let cfg = build_config_with_defaults(&args, defaults_with_home(Some("/default")))
            .expect("build ok")
            .core_config;
        assert_eq!(cfg.saambe.home, PathBuf::from("/opt/saambe"));
        assert_eq!(cfg.saambe.interpreter, PathBuf::from("python3.11"));
        assert_eq!(cfg.saambe.script, PathBuf::from("saambe-3d.py"));
        assert!(cfg.output.keep_intermediate);
    }

    #[test]
    fn cli_overrides_file_and_set_values() {
        let mut args = base_compute_args();
        args.saambe_home = Some(PathBuf::from("/cli/saambe"));
        args.set_values = vec![
            "saambe.home=/set/saambe".to_string(),
            "saambe.script=run.py".to_string(),
        ];

        let cfg = build_config_with_defaults(&args, defaults_with_home(None))
            .expect("build ok")
            .core_config;
        assert_eq!(cfg.saambe.home, PathBuf::from("/cli/saambe"));
        assert_eq!(cfg.saambe.script, PathBuf::from("run.py"));
    }

    #[test]
    fn missing_home_is_a_config_error() {
        let result = build_config_with_defaults(&base_compute_args(), defaults_with_home(None));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn set_values_are_validated() {
        let config = apply_set_values(
            FileConfig::default(),
            &["output.keep-intermediate=true".to_string()],
        )
        .unwrap();
        assert_eq!(config.output.unwrap().keep_intermediate, Some(true));

        for bad in ["saambe.home", "output.keep-intermediate=maybe", "saambe.binary=x"] {
            let result = apply_set_values(FileConfig::default(), &[bad.to_string()]);
            assert!(matches!(result, Err(CliError::Config(_))), "{bad}");
        }
    }
}
