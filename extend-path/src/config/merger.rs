//! Configuration merging and precedence handling.

use crate::config::schema::Config;

/// Merges configuration layers.
///
/// # Examples
///
/// ```
/// use extend_path::config::{Config, ConfigMerger};
///
/// let low = Config { variable: Some("PATH".to_string()), ..Default::default() };
/// let high = Config { variable: Some("MANPATH".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.variable, Some("MANPATH".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge layers given from lowest to highest precedence.
    #[must_use]
    pub fn merge(layers: &[Config]) -> Config {
        let mut result = Config::default();
        for layer in layers {
            Self::merge_into(&mut result, layer);
        }
        result
    }

    /// Merge source config into target; every field set in `source` wins.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.variable.is_some() {
            target.variable.clone_from(&source.variable);
        }

        if source.validate.is_some() {
            target.validate = source.validate;
        }

        if source.relocate.is_some() {
            target.relocate = source.relocate;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.shell.is_some() {
            target.shell.clone_from(&source.shell);
        }
    }
}
