//! Text cleanup before analysis
//!
//! Every mode except [`CleanupMode::None`] turns line breaks into spaces and
//! collapses runs of spaces afterwards. The markup modes are character
//! substitutions, not parsers.

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

/// Characters replaced by [`CleanupMode::RemoveAllSigns`]
const PUNCTUATION_SIGNS: &[char] = &[',', '.', '!', '?', '-'];

/// Characters replaced by [`CleanupMode::Markdown`]
const MARKDOWN_SIGNS: &[char] = &['*', '~', '_', '#'];

/// How a text is cleaned before analysis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CleanupMode {
    /// Leave the text untouched
    None,
    /// Only normalize line breaks and spaces
    #[default]
    Plain,
    /// Also replace `,.!?-` with spaces
    RemoveAllSigns,
    /// Also replace every `<...>` tag with a space
    Html,
    /// Also replace `*~_#` with spaces
    Markdown,
}

/// Clean `text` according to `mode`
pub fn clean_up_text(text: &str, mode: CleanupMode) -> Result<String> {
    if mode == CleanupMode::None {
        return Ok(text.to_string());
    }

    let text = text.replace('\n', " ");
    let text = match mode {
        CleanupMode::None | CleanupMode::Plain => text,
        CleanupMode::RemoveAllSigns => replace_signs(&text, PUNCTUATION_SIGNS),
        CleanupMode::Html => strip_tags(&text)?,
        CleanupMode::Markdown => replace_signs(&text, MARKDOWN_SIGNS),
    };

    Ok(collapse_spaces(&text))
}

fn replace_signs(text: &str, signs: &[char]) -> String {
    text.chars()
        .map(|ch| if signs.contains(&ch) { ' ' } else { ch })
        .collect()
}

fn strip_tags(text: &str) -> Result<String> {
    let mut cleaned = String::with_capacity(text.len());
    let mut rest = text;
    let mut offset = 0;

    while let Some(open) = rest.find('<') {
        let close = rest[open..]
            .find('>')
            .ok_or(AnalysisError::MalformedMarkup {
                position: offset + open,
            })?;

        cleaned.push_str(&rest[..open]);
        cleaned.push(' ');

        let consumed = open + close + 1;
        rest = &rest[consumed..];
        offset += consumed;
    }

    cleaned.push_str(rest);
    Ok(cleaned)
}

fn collapse_spaces(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut previous_space = false;

    for ch in text.chars() {
        let is_space = ch == ' ';
        if !(is_space && previous_space) {
            collapsed.push(ch);
        }
        previous_space = is_space;
    }

    collapsed
}
