use {serde::Deserialize, std::path::PathBuf};

pub const DEFAULT_SRC: &str = "/g/data/vk83/configurations/inputs/access-om3/cice/initial_conditions/global.025deg/2024.04.09/iced.1900-01-01-10800.nc";
pub const DEFAULT_DST: &str = "~/AFIM_input/cice/ic/iced.1900-01-01-10800.nc";

/// Defaults for a run, optionally read from a YAML file
#[derive(Debug, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Parameters {
    pub paths: Paths,
    pub tools: Tools,
}

#[derive(Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Paths {
    /// Source restart file
    pub src: PathBuf,
    /// Destination initial-condition file, may start with `~`
    pub dst: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Paths {
            src: DEFAULT_SRC.into(),
            dst: DEFAULT_DST.into(),
        }
    }
}

/// External NCO executables, either bare names looked up on `PATH` or paths
#[derive(Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tools {
    /// Array editor applying the zeroing script
    pub editor: String,
    /// Inspector used by `--verify`
    pub inspector: String,
}

impl Default for Tools {
    fn default() -> Self {
        Tools {
            editor: "ncap2".into(),
            inspector: "ncks".into(),
        }
    }
}
