//! Prediction and training entrypoints (`<module-path>:<symbol-name>`)

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::validation::ValidationReason;

/// Which entrypoint of a manifest to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Predict,
    Train,
}

impl Mode {
    /// Manifest key holding this mode's entrypoint.
    pub fn key(&self) -> &'static str {
        match self {
            Mode::Predict => "predict",
            Mode::Train => "train",
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "predict" => Ok(Mode::Predict),
            "train" => Ok(Mode::Train),
            _ => Err(Error::InvalidMode {
                mode: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A callable reference such as `predict.py:Predictor`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entrypoint {
    module_path: String,
    symbol: String,
}

impl Entrypoint {
    /// Path of the module file, e.g. `src/predict.py`.
    pub fn module_path(&self) -> &str {
        &self.module_path
    }

    /// Name of the class or function inside the module.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Importable module name: the file name up to its `.py` suffix.
    pub fn module_name(&self) -> &str {
        let file_name = Path::new(&self.module_path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.module_path);
        file_name.split(".py").next().unwrap_or(file_name)
    }
}

impl FromStr for Entrypoint {
    type Err = ValidationReason;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ValidationReason::Empty);
        }
        match s.split_once(':') {
            Some((module_path, symbol))
                if !module_path.is_empty() && !symbol.is_empty() && !symbol.contains(':') =>
            {
                Ok(Self {
                    module_path: module_path.to_string(),
                    symbol: symbol.to_string(),
                })
            }
            _ => Err(ValidationReason::EntrypointFormat),
        }
    }
}

impl fmt::Display for Entrypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.module_path, self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entrypoint() {
        let ep: Entrypoint = "src/predict.py:Predictor".parse().unwrap();
        assert_eq!(ep.module_path(), "src/predict.py");
        assert_eq!(ep.symbol(), "Predictor");
        assert_eq!(ep.module_name(), "predict");
        assert_eq!(ep.to_string(), "src/predict.py:Predictor");
    }

    #[test]
    fn test_module_name_without_suffix() {
        let ep: Entrypoint = "pkg/model:run".parse().unwrap();
        assert_eq!(ep.module_name(), "model");
    }

    #[test]
    fn test_reject_bad_entrypoints() {
        assert_eq!("".parse::<Entrypoint>(), Err(ValidationReason::Empty));
        for bad in ["predict.py", ":Predictor", "predict.py:", "a:b:c"] {
            assert_eq!(
                bad.parse::<Entrypoint>(),
                Err(ValidationReason::EntrypointFormat),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("predict".parse::<Mode>().unwrap(), Mode::Predict);
        assert_eq!("train".parse::<Mode>().unwrap(), Mode::Train);
        assert!(matches!(
            "serve".parse::<Mode>(),
            Err(Error::InvalidMode { mode }) if mode == "serve"
        ));
        assert_eq!(Mode::Train.to_string(), "train");
    }
}
