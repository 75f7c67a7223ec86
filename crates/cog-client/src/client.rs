//! Endpoint resolution
//!
//! Computes `http://<host>/<path>` for a repository. The path comes from a
//! template whose `%s`, `%d`, and `%v` placeholders are filled positionally;
//! `%%` is a literal percent sign.

use std::fmt;

use crate::{Error, RepoReference, Result, Settings};

/// Transport scheme of every resolved endpoint.
pub const SCHEME: &str = "http";

/// Resolves endpoints for repository references.
///
/// Without explicit settings, the process environment is read on every
/// call so a changed default host is picked up immediately.
#[derive(Debug, Clone, Default)]
pub struct Client {
    settings: Option<Settings>,
}

impl Client {
    /// Client that reads [`Settings::from_env`] on each resolution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Client with fixed settings.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings: Some(settings),
        }
    }

    /// URL for `path` (a template when `args` is non-empty) on `repo`'s host.
    pub fn url(&self, repo: &RepoReference, path: &str, args: &[&dyn fmt::Display]) -> Result<String> {
        match &self.settings {
            Some(settings) => resolve(repo, settings, path, args),
            None => resolve(repo, &Settings::from_env(), path, args),
        }
    }
}

/// Compute the URL of a service call for `repo`.
///
/// The host is the reference's own host if set, otherwise the settings'
/// default host. With neither, resolution fails with [`Error::MissingHost`].
pub fn resolve(
    repo: &RepoReference,
    settings: &Settings,
    template: &str,
    args: &[&dyn fmt::Display],
) -> Result<String> {
    let path = if args.is_empty() {
        template.to_string()
    } else {
        expand_path(template, args)?
    };

    let host = match repo.host().or(settings.default_host()) {
        Some(host) => host,
        None => {
            return Err(Error::MissingHost {
                reference: repo.to_string(),
            });
        }
    };

    let url = format!("{SCHEME}://{host}/{}", path.trim_start_matches('/'));
    tracing::debug!(repo = %repo, %url, "resolved endpoint");
    Ok(url)
}

/// Substitute `args` into the placeholders of `template`, in order.
///
/// The number of placeholders must equal `args.len()`.
pub fn expand_path(template: &str, args: &[&dyn fmt::Display]) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = args.iter();
    let mut expected = 0;
    let mut chars = template.char_indices();

    while let Some((position, c)) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some((_, '%')) => out.push('%'),
            Some((_, 's' | 'd' | 'v')) => {
                expected += 1;
                if let Some(arg) = rest.next() {
                    out.push_str(&arg.to_string());
                }
            }
            _ => {
                return Err(Error::InvalidPlaceholder {
                    template: template.to_string(),
                    position,
                });
            }
        }
    }

    if expected != args.len() {
        return Err(Error::TemplateArguments {
            template: template.to_string(),
            expected,
            given: args.len(),
        });
    }
    Ok(out)
}
