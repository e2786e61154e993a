//! Runtime configuration for the `make_icons` binary.
//!
//! Settings come from three layers, highest priority first: positional CLI
//! arguments, CLI flags (`--sizes`, `--config`), and an optional JSON config
//! file. Anything still unset falls back to the defaults below.
use crate::fit::Mode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default icon edge lengths, in output order.
pub const DEFAULT_SIZES: &[usize] = &[16, 48, 128];

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTDIR: &str = "icons";

/// Fully resolved settings the binary runs with.
#[derive(Clone, Debug)]
pub struct IconConfig {
    pub input: PathBuf,
    pub outdir: PathBuf,
    pub mode: Mode,
    pub sizes: Vec<usize>,
}

/// JSON config file shape. Every field is optional; CLI values win.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct IconFileConfig {
    pub input: Option<PathBuf>,
    pub output: FileOutputConfig,
    /// Mode name, normalized through `Mode::from_name` (unknown names fall
    /// back to contain, same as on the command line).
    pub mode: Option<String>,
    pub sizes: Option<Vec<usize>>,
}

#[derive(Debug, Deserialize, Default)]
pub struct FileOutputConfig {
    pub dir: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<IconFileConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} <source-image> [outdir] [contain|cover] \
         [--sizes N,N,...] [--config <path.json>]"
    )
}

/// Parse command-line arguments (without the program name) into a resolved
/// `IconConfig`, merging in a JSON config file when `--config` is given.
pub fn parse_args(program: &str, args: &[String]) -> Result<IconConfig, String> {
    let mut positionals: Vec<&str> = Vec::new();
    let mut sizes_arg: Option<&str> = None;
    let mut config_path: Option<&str> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--sizes" => {
                sizes_arg = Some(
                    iter.next()
                        .ok_or_else(|| format!("--sizes requires a value\n{}", usage(program)))?,
                );
            }
            "--config" => {
                config_path = Some(
                    iter.next()
                        .ok_or_else(|| format!("--config requires a value\n{}", usage(program)))?,
                );
            }
            flag if flag.starts_with("--") => {
                return Err(format!("Unknown option {flag}\n{}", usage(program)));
            }
            positional => positionals.push(positional),
        }
    }
    // Positionals beyond <input> [outdir] [mode] are ignored.

    let file = match config_path {
        Some(path) => load_config(Path::new(path))?,
        None => IconFileConfig::default(),
    };

    let input = positionals
        .first()
        .copied()
        .map(PathBuf::from)
        .or(file.input)
        .ok_or_else(|| usage(program))?;
    let outdir = positionals
        .get(1)
        .copied()
        .map(PathBuf::from)
        .or(file.output.dir)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTDIR));
    let mode = positionals
        .get(2)
        .copied()
        .or(file.mode.as_deref())
        .map(Mode::from_name)
        .unwrap_or_default();
    let sizes = match sizes_arg {
        Some(list) => parse_sizes(list)?,
        None => match file.sizes {
            Some(sizes) => validate_sizes(sizes)?,
            None => DEFAULT_SIZES.to_vec(),
        },
    };

    Ok(IconConfig {
        input,
        outdir,
        mode,
        sizes,
    })
}

fn parse_sizes(list: &str) -> Result<Vec<usize>, String> {
    let sizes = list
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<usize>()
                .map_err(|_| format!("Invalid size {:?} in --sizes", part.trim()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    validate_sizes(sizes)
}

fn validate_sizes(sizes: Vec<usize>) -> Result<Vec<usize>, String> {
    if sizes.is_empty() {
        return Err("Size list must not be empty".to_string());
    }
    if sizes.contains(&0) {
        return Err("Sizes must be positive".to_string());
    }
    Ok(sizes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_apply_when_only_input_is_given() {
        let cfg = parse_args("make_icons", &args(&["logo.png"])).unwrap();
        assert_eq!(cfg.input, PathBuf::from("logo.png"));
        assert_eq!(cfg.outdir, PathBuf::from("icons"));
        assert_eq!(cfg.mode, Mode::Contain);
        assert_eq!(cfg.sizes, vec![16, 48, 128]);
    }

    #[test]
    fn positionals_set_outdir_and_mode() {
        let cfg = parse_args("make_icons", &args(&["logo.png", "out", "cover"])).unwrap();
        assert_eq!(cfg.outdir, PathBuf::from("out"));
        assert_eq!(cfg.mode, Mode::Cover);
    }

    #[test]
    fn unknown_mode_name_falls_back_to_contain() {
        let cfg = parse_args("make_icons", &args(&["logo.png", "out", "COVER"])).unwrap();
        assert_eq!(cfg.mode, Mode::Contain);
    }

    #[test]
    fn sizes_flag_overrides_defaults() {
        let cfg = parse_args("make_icons", &args(&["logo.png", "--sizes", "32,64,256"])).unwrap();
        assert_eq!(cfg.sizes, vec![32, 64, 256]);
    }

    #[test]
    fn zero_and_garbage_sizes_are_rejected() {
        assert!(parse_args("make_icons", &args(&["a.png", "--sizes", "16,0"])).is_err());
        assert!(parse_args("make_icons", &args(&["a.png", "--sizes", "x"])).is_err());
        assert!(parse_args("make_icons", &args(&["a.png", "--sizes", ""])).is_err());
    }

    #[test]
    fn missing_input_reports_usage() {
        let err = parse_args("make_icons", &[]).unwrap_err();
        assert!(err.starts_with("Usage:"), "got {err}");
    }

    #[test]
    fn config_file_fields_deserialize_with_defaults() {
        let cfg: IconFileConfig =
            serde_json::from_str(r#"{"output": {"dir": "build/icons"}, "sizes": [64]}"#).unwrap();
        assert_eq!(cfg.output.dir, Some(PathBuf::from("build/icons")));
        assert_eq!(cfg.sizes, Some(vec![64]));
        assert!(cfg.input.is_none());
        assert!(cfg.mode.is_none());
    }

    fn write_config(contents: &str) -> (tempfile::TempDir, String) {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("icons.json");
        fs::write(&path, contents).expect("write config");
        let path = path.to_str().expect("utf-8 path").to_string();
        (dir, path)
    }

    #[test]
    fn config_file_supplies_all_settings() {
        let (_dir, path) = write_config(
            r#"{
                "input": "logo.png",
                "output": {"dir": "build/icons"},
                "mode": "cover",
                "sizes": [32, 64]
            }"#,
        );
        let cfg = parse_args("make_icons", &args(&["--config", &path])).unwrap();
        assert_eq!(cfg.input, PathBuf::from("logo.png"));
        assert_eq!(cfg.outdir, PathBuf::from("build/icons"));
        assert_eq!(cfg.mode, Mode::Cover);
        assert_eq!(cfg.sizes, vec![32, 64]);
    }

    #[test]
    fn positionals_and_sizes_flag_win_over_config_file() {
        let (_dir, path) = write_config(
            r#"{
                "input": "logo.png",
                "output": {"dir": "build/icons"},
                "mode": "cover",
                "sizes": [32, 64]
            }"#,
        );
        let cfg = parse_args(
            "make_icons",
            &args(&["cli.png", "cli-out", "contain", "--sizes", "16", "--config", &path]),
        )
        .unwrap();
        assert_eq!(cfg.input, PathBuf::from("cli.png"));
        assert_eq!(cfg.outdir, PathBuf::from("cli-out"));
        assert_eq!(cfg.mode, Mode::Contain);
        assert_eq!(cfg.sizes, vec![16]);
    }

    #[test]
    fn config_file_fills_gaps_left_by_positionals() {
        let (_dir, path) = write_config(r#"{"output": {"dir": "build/icons"}, "mode": "cover"}"#);
        let cfg = parse_args("make_icons", &args(&["cli.png", "--config", &path])).unwrap();
        assert_eq!(cfg.input, PathBuf::from("cli.png"));
        assert_eq!(cfg.outdir, PathBuf::from("build/icons"));
        assert_eq!(cfg.mode, Mode::Cover);
        assert_eq!(cfg.sizes, vec![16, 48, 128]);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let err =
            parse_args("make_icons", &args(&["a.png", "--config", "no-such.json"])).unwrap_err();
        assert!(err.starts_with("Failed to read config"), "got {err}");
    }

    #[test]
    fn extra_positionals_are_ignored() {
        let cfg = parse_args(
            "make_icons",
            &args(&["logo.png", "out", "cover", "stray", "stray2"]),
        )
        .unwrap();
        assert_eq!(cfg.input, PathBuf::from("logo.png"));
        assert_eq!(cfg.outdir, PathBuf::from("out"));
        assert_eq!(cfg.mode, Mode::Cover);
    }
}
