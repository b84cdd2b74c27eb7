use std::io::{self, Read, Write};
use std::path::PathBuf;

use prefixfree::{camel_case, Capabilities, HostProfile, PrefixError, PrefixFree, ProfileHost};
use prefixfree_config::PrefixFreeConfig;
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::{Args, Command};

#[derive(Debug, Serialize)]
struct ProbeReport<'a> {
    host: &'a str,
    active: bool,
    capabilities: Option<&'a Capabilities>,
    root_classes: &'a [String],
}

pub fn run(args: &Args, config: &PrefixFreeConfig) -> Result<(), PrefixError> {
    let profile = HostProfile::resolve(&args.host)?;
    info!(host = %profile.name, "probing host profile");
    let mut host = ProfileHost::new(profile);
    let pf = PrefixFree::from_config(&mut host, config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.command {
        Command::Css {
            files,
            no_selectors,
            output,
        } => {
            let include_selectors = config.rewrite.include_selectors && !no_selectors;
            let sources = read_sources(files)?;
            let css = rewrite_sources(&pf, &sources, include_selectors);
            match output {
                Some(path) => {
                    std::fs::write(path, css)?;
                    info!(path = %path.display(), "wrote rewritten css");
                }
                None => out.write_all(css.as_bytes())?,
            }
        }
        Command::Property { name, camel, force } => {
            writeln!(out, "{}", property(&pf, name, *camel, *force))?;
        }
        Command::Value { value, property } => {
            writeln!(out, "{}", pf.value(value, property))?;
        }
        Command::Selector { selector } => {
            writeln!(out, "{}", pf.prefix_selector(selector))?;
        }
        Command::Probe => {
            writeln!(out, "{}", probe_report(&args.host, &pf, &host)?)?;
        }
    }

    Ok(())
}

/// File contents in order, or stdin when `files` is empty.
fn read_sources(files: &[PathBuf]) -> Result<Vec<String>, PrefixError> {
    if files.is_empty() {
        let mut css = String::new();
        io::stdin().read_to_string(&mut css)?;
        return Ok(vec![css]);
    }

    files
        .iter()
        .map(|path| {
            debug!(path = %path.display(), "reading stylesheet");
            std::fs::read_to_string(path).map_err(PrefixError::from)
        })
        .collect()
}

fn rewrite_sources(pf: &PrefixFree, sources: &[String], include_selectors: bool) -> String {
    sources
        .iter()
        .map(|css| pf.prefix_css(css, include_selectors))
        .collect::<Vec<_>>()
        .join("\n")
}

fn property(pf: &PrefixFree, name: &str, camel: bool, force: bool) -> String {
    if force {
        return pf.prefix_property(name, camel);
    }
    let prefixed = pf.property(name);
    if camel {
        camel_case(&prefixed)
    } else {
        prefixed.into_owned()
    }
}

fn probe_report(
    host_name: &str,
    pf: &PrefixFree,
    host: &ProfileHost,
) -> Result<String, PrefixError> {
    let report = ProbeReport {
        host: host_name,
        active: pf.is_active(),
        capabilities: pf.capabilities(),
        root_classes: host.root_classes(),
    };
    serde_json::to_string_pretty(&report)
        .map_err(|e| PrefixError::Other(format!("failed to serialize probe report: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn webkit() -> (PrefixFree, ProfileHost) {
        let mut host = ProfileHost::new(HostProfile::resolve("legacy-webkit").unwrap());
        let pf = PrefixFree::initialize(&mut host);
        (pf, host)
    }

    #[test]
    fn reads_and_rewrites_files_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.css");
        let b = dir.path().join("b.css");
        std::fs::write(&a, "a { transform: none; }").unwrap();
        std::fs::write(&b, "::placeholder { color: gray }").unwrap();

        let sources = read_sources(&[a, b]).unwrap();
        let (pf, _) = webkit();

        assert_eq!(
            rewrite_sources(&pf, &sources, true),
            "a { -webkit-transform: none; }\n::-webkit-input-placeholder { color: gray }"
        );
        assert_eq!(
            rewrite_sources(&pf, &sources, false),
            "a { -webkit-transform: none; }\n::placeholder { color: gray }"
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_sources(&[PathBuf::from("/tmp/nonexistent_prefixfree.css")]).unwrap_err();
        assert!(matches!(err, PrefixError::Io(_)));
    }

    #[test]
    fn property_forms() {
        let (pf, _) = webkit();
        assert_eq!(property(&pf, "transform", false, false), "-webkit-transform");
        assert_eq!(property(&pf, "transform", true, false), "WebkitTransform");
        assert_eq!(property(&pf, "color", true, false), "color");
        assert_eq!(property(&pf, "color", false, true), "-webkit-color");
        assert_eq!(property(&pf, "box-shadow", true, true), "WebkitBoxShadow");
    }

    #[test]
    fn probe_report_lists_capabilities_and_root_classes() {
        let (pf, host) = webkit();
        let json = probe_report("legacy-webkit", &pf, &host).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["active"], true);
        assert_eq!(value["capabilities"]["prefix"], "-webkit-");
        assert_eq!(value["root_classes"][0], "-webkit-");
        assert!(value["capabilities"]["sets"]["properties"]
            .as_array()
            .unwrap()
            .iter()
            .any(|p| p == "transform"));
    }

    #[test]
    fn probe_report_for_inert_host() {
        let mut host = ProfileHost::new(HostProfile {
            computed_style: false,
            ..HostProfile::default()
        });
        let pf = PrefixFree::initialize(&mut host);
        let json = probe_report("custom", &pf, &host).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["active"], false);
        assert!(value["capabilities"].is_null());
    }
}
