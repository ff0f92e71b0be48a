use std::{env, str::FromStr};

use tracing::{debug, warn};

use minesweeper_common::models::GameParams;

pub const SIZE_VAR: &str = "MINESWEEPER_SIZE";
pub const MINES_VAR: &str = "MINESWEEPER_MINES";
pub const SEED_VAR: &str = "MINESWEEPER_SEED";

/// Startup settings. The board parameters are only defaults; the session
/// still offers to change them interactively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    pub params: GameParams,
    pub seed: Option<u64>,
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<T> {
    let value = lookup(name)?;
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("Ignoring {}: could not parse {:?}", name, value);
            None
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = GameParams::default();
        let mut params = GameParams {
            size: parse_var(&lookup, SIZE_VAR).unwrap_or(defaults.size),
            mines: parse_var(&lookup, MINES_VAR).unwrap_or(defaults.mines),
        };

        if let Err(err) = params.validate() {
            warn!("Falling back to the default board: {}", err);
            params = defaults;
        }

        let seed = parse_var(&lookup, SEED_VAR);
        debug!(
            "Loaded config: {}x{} with {} mines, seed {:?}",
            params.size, params.size, params.mines, seed
        );

        Self { params, seed }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(Config::from_lookup(lookup(&[])), Config::default());
    }

    #[test]
    fn reads_all_variables() {
        let config = Config::from_lookup(lookup(&[
            (SIZE_VAR, "16"),
            (MINES_VAR, " 40 "),
            (SEED_VAR, "1234"),
        ]));
        assert_eq!(config.params, GameParams { size: 16, mines: 40 });
        assert_eq!(config.seed, Some(1234));
    }

    #[test]
    fn unparsable_values_fall_back_individually() {
        let config = Config::from_lookup(lookup(&[
            (SIZE_VAR, "twelve"),
            (MINES_VAR, "3"),
            (SEED_VAR, "-1"),
        ]));
        assert_eq!(config.params, GameParams { size: 10, mines: 3 });
        assert_eq!(config.seed, None);
    }

    #[test]
    fn invalid_board_falls_back_to_default() {
        let config = Config::from_lookup(lookup(&[(SIZE_VAR, "2"), (MINES_VAR, "5")]));
        assert_eq!(config.params, GameParams::default());

        let config = Config::from_lookup(lookup(&[(SIZE_VAR, "0")]));
        assert_eq!(config.params, GameParams::default());
    }

    #[test]
    fn overflowing_size_falls_back_to_default() {
        let huge = usize::MAX.to_string();
        for size in ["4294967296", huge.as_str()] {
            let config = Config::from_lookup(lookup(&[(SIZE_VAR, size), (MINES_VAR, "1")]));
            assert_eq!(config.params, GameParams::default(), "{size}");
        }
    }
}
