use anyhow::{anyhow, Context, Result};

use crate::input_engine::key::Key;

/// Une étape d'un script d'entrée clavier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    /// Appui + relâchement dans la même frame
    Tap(Key),
    Hold(Key),
    Release(Key),
    /// Frames sans entrée
    Wait(u32),
}

/// Parse un script du type `"space wait:700 T wait:120 hold:+ wait:30 release:+ esc"`.
///
/// Les jetons sont séparés par des blancs. Un jeton nu est un nom de touche (voir [`Key::parse`]).
pub fn parse_script(source: &str) -> Result<Vec<ScriptStep>> {
    source
        .split_whitespace()
        .enumerate()
        .map(|(index, token)| {
            parse_token(token).with_context(|| format!("script token #{index} ({token:?})"))
        })
        .collect()
}

fn parse_token(token: &str) -> Result<ScriptStep> {
    // ':' seul est un nom de touche valide
    let Some((verb, arg)) = token.split_once(':').filter(|(verb, _)| !verb.is_empty()) else {
        return Ok(ScriptStep::Tap(Key::parse(token)?));
    };
    match verb {
        "wait" => {
            let frames = arg
                .parse::<u32>()
                .map_err(|e| anyhow!("invalid frame count {arg:?}: {e}"))?;
            Ok(ScriptStep::Wait(frames))
        }
        "hold" => Ok(ScriptStep::Hold(Key::parse(arg)?)),
        "release" => Ok(ScriptStep::Release(Key::parse(arg)?)),
        "tap" => Ok(ScriptStep::Tap(Key::parse(arg)?)),
        _ => Err(anyhow!("unknown script verb {verb:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_script() {
        let steps = parse_script("space wait:700 T hold:+ wait:2 release:+ esc").unwrap();
        assert_eq!(
            steps,
            vec![
                ScriptStep::Tap(Key::Space),
                ScriptStep::Wait(700),
                ScriptStep::Tap(Key::Char('T')),
                ScriptStep::Hold(Key::Char('+')),
                ScriptStep::Wait(2),
                ScriptStep::Release(Key::Char('+')),
                ScriptStep::Tap(Key::Escape),
            ]
        );
    }

    #[test]
    fn rejects_bad_tokens() {
        assert!(parse_script("wait:abc").is_err());
        assert!(parse_script("jump:1").is_err());
        assert!(parse_script("space banana").is_err());
        assert!(parse_script("").unwrap().is_empty());
    }
}
