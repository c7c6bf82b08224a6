use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::normalize::NewlineMode;

/// How `behind(0)` is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ZeroLookbehind {
    /// `0` means the same as `1`: the unit just before the cursor.
    #[default]
    AsOne,
    /// `0` means the unit under the cursor.
    Current,
}

/// Construction options for a [`StringWalker`](crate::StringWalker).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkerOptions {
    /// Rewrite `\r\n` and `\r` to `\n` before storing the text.
    pub normalize_whitespace: bool,
    /// Which normalization pass to run.
    pub newline_mode: NewlineMode,
    /// How `behind(0)` is read.
    pub zero_lookbehind: ZeroLookbehind,
}

impl WalkerOptions {
    /// Options with every setting at its default.
    pub const fn new() -> Self {
        Self {
            normalize_whitespace: false,
            newline_mode: NewlineMode::All,
            zero_lookbehind: ZeroLookbehind::AsOne,
        }
    }

    #[must_use]
    pub const fn with_normalize_whitespace(mut self, normalize: bool) -> Self {
        self.normalize_whitespace = normalize;
        self
    }

    #[must_use]
    pub const fn with_newline_mode(mut self, mode: NewlineMode) -> Self {
        self.newline_mode = mode;
        self
    }

    #[must_use]
    pub const fn with_zero_lookbehind(mut self, mode: ZeroLookbehind) -> Self {
        self.zero_lookbehind = mode;
        self
    }

    /// Apply a layer of overrides. Every setting present in `other` wins.
    pub fn union(&self, other: &OptionLayer) -> Self {
        Self {
            normalize_whitespace: other
                .normalize_whitespace
                .unwrap_or(self.normalize_whitespace),
            newline_mode: other.newline_mode.unwrap_or(self.newline_mode),
            zero_lookbehind: other.zero_lookbehind.unwrap_or(self.zero_lookbehind),
        }
    }
}

/// A partial set of options, as read from one file or token list.
///
/// `None` means the layer does not mention the setting.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OptionLayer {
    /// Set by `--normalize` / `--no-normalize`.
    pub normalize_whitespace: Option<bool>,
    /// Set by `--newlines`.
    pub newline_mode: Option<NewlineMode>,
    /// Set by `--zero-lookbehind`.
    pub zero_lookbehind: Option<ZeroLookbehind>,
}

impl OptionLayer {
    /// Stack `other` on top of `self`.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            normalize_whitespace: other.normalize_whitespace.or(self.normalize_whitespace),
            newline_mode: other.newline_mode.or(self.newline_mode),
            zero_lookbehind: other.zero_lookbehind.or(self.zero_lookbehind),
        }
    }

    /// Fill unset settings with their defaults.
    pub fn resolve(&self) -> WalkerOptions {
        WalkerOptions::default().union(self)
    }
}

impl From<WalkerOptions> for OptionLayer {
    fn from(options: WalkerOptions) -> Self {
        Self {
            normalize_whitespace: Some(options.normalize_whitespace),
            newline_mode: Some(options.newline_mode),
            zero_lookbehind: Some(options.zero_lookbehind),
        }
    }
}

/// Load an options file as a layer. A missing file is an empty layer.
pub fn load_option_layer(path: &Path) -> Result<OptionLayer> {
    if !path.exists() {
        return Ok(OptionLayer::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read options {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    let layer = parse_option_tokens(&tokens);
    tracing::debug!(path = %path.display(), ?layer, "loaded walker options");
    Ok(layer)
}

/// Load an options file, filling unset settings with defaults.
pub fn load_options(path: &Path) -> Result<WalkerOptions> {
    Ok(load_option_layer(path)?.resolve())
}

pub fn save_options(path: &Path, options: &WalkerOptions) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# string-walker options".to_string());
    lines.push(if options.normalize_whitespace {
        "--normalize".to_string()
    } else {
        "--no-normalize".to_string()
    });
    lines.push(format!("--newlines {}", newline_mode_name(options.newline_mode)));
    lines.push(format!(
        "--zero-lookbehind {}",
        zero_lookbehind_name(options.zero_lookbehind)
    ));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create options dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write options {}", path.display()))
}

pub fn parse_option_tokens(tokens: &[String]) -> OptionLayer {
    let mut layer = OptionLayer::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--normalize" {
            layer.normalize_whitespace = Some(true);
        } else if token == "--no-normalize" {
            layer.normalize_whitespace = Some(false);
        } else if token == "--newlines" {
            if let Some(next) = tokens.get(i + 1) {
                set_mode(&mut layer.newline_mode, parse_newline_mode(next), token, next);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--newlines=") {
            set_mode(&mut layer.newline_mode, parse_newline_mode(value), token, value);
        } else if token == "--zero-lookbehind" {
            if let Some(next) = tokens.get(i + 1) {
                set_mode(&mut layer.zero_lookbehind, parse_zero_lookbehind(next), token, next);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--zero-lookbehind=") {
            set_mode(&mut layer.zero_lookbehind, parse_zero_lookbehind(value), token, value);
        } else {
            tracing::trace!(token = %token, "ignoring unknown option token");
        }
        i += 1;
    }
    layer
}

fn set_mode<T>(slot: &mut Option<T>, parsed: Option<T>, option: &str, value: &str) {
    if parsed.is_some() {
        *slot = parsed;
    } else {
        tracing::trace!(option = %option, value = %value, "ignoring unknown option value");
    }
}

fn parse_newline_mode(s: &str) -> Option<NewlineMode> {
    match s {
        "all" => Some(NewlineMode::All),
        "first" => Some(NewlineMode::FirstOnly),
        _ => None,
    }
}

const fn newline_mode_name(mode: NewlineMode) -> &'static str {
    match mode {
        NewlineMode::All => "all",
        NewlineMode::FirstOnly => "first",
    }
}

fn parse_zero_lookbehind(s: &str) -> Option<ZeroLookbehind> {
    match s {
        "one" => Some(ZeroLookbehind::AsOne),
        "current" => Some(ZeroLookbehind::Current),
        _ => None,
    }
}

const fn zero_lookbehind_name(mode: ZeroLookbehind) -> &'static str {
    match mode {
        ZeroLookbehind::AsOne => "one",
        ZeroLookbehind::Current => "current",
    }
}
