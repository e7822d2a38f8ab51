use std::path::PathBuf;

use serde::Serialize;

use crate::cmd::ManifestArgs;
use crate::exit::{io_error, ExitError, ExitResult, INTERNAL, SUCCESS, USAGE};

/// The JSON file a browser reads to locate and authorize a native host.
#[derive(Debug, Serialize)]
struct HostManifest {
    name: String,
    description: String,
    path: PathBuf,
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    allowed_origins: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    allowed_extensions: Option<Vec<String>>,
}

pub fn run(args: ManifestArgs) -> ExitResult<i32> {
    let manifest = build_manifest(args)?;
    let text = serde_json::to_string_pretty(&manifest)
        .map_err(|err| ExitError::new(INTERNAL, format!("manifest encoding failed: {err}")))?;
    println!("{text}");
    Ok(SUCCESS)
}

fn build_manifest(args: ManifestArgs) -> ExitResult<HostManifest> {
    validate_name(&args.name)?;

    let path = match args.path {
        Some(path) => path,
        None => std::env::current_exe()
            .map_err(|err| io_error("cannot resolve executable path", &err))?,
    };
    if !path.is_absolute() {
        return Err(ExitError::new(
            USAGE,
            format!("host path must be absolute: {}", path.display()),
        ));
    }

    for origin in &args.chrome_origin {
        validate_origin(origin)?;
    }

    let (allowed_origins, allowed_extensions) = if args.chrome_origin.is_empty() {
        (None, Some(args.firefox_extension))
    } else {
        (Some(args.chrome_origin), None)
    };

    Ok(HostManifest {
        name: args.name,
        description: args.description,
        path,
        kind: "stdio",
        allowed_origins,
        allowed_extensions,
    })
}

/// Browsers accept dot-separated segments of lowercase alphanumerics and `_`.
fn validate_name(name: &str) -> ExitResult<()> {
    let valid = name.split('.').all(|segment| {
        !segment.is_empty()
            && segment
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    });
    if valid {
        Ok(())
    } else {
        Err(ExitError::new(USAGE, format!("invalid host name: {name:?}")))
    }
}

fn validate_origin(origin: &str) -> ExitResult<()> {
    let id = origin
        .strip_prefix("chrome-extension://")
        .and_then(|rest| rest.strip_suffix('/'));
    match id {
        Some(id) if !id.is_empty() && !id.contains('/') && !id.contains('*') => Ok(()),
        _ => Err(ExitError::new(
            USAGE,
            format!("invalid extension origin {origin:?}, expected chrome-extension://<id>/"),
        )),
    }
}
