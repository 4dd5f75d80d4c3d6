use std::path::PathBuf;

/// What to do with the parsed groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Print,
    Mentions,
    TestData,
    Inspect,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Args {
    pub config: Option<PathBuf>,
    pub mode: Mode,
    pub input: PathBuf,
}

pub const USAGE: &str =
    "Usage: rich-delta [--config <path>] [--mentions | --test-data | --inspect] <ops.json>";

impl Args {
    /// Parses everything after the program name.
    pub fn parse<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = None;
        let mut mode = None;
        let mut input = None;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let selected = match arg.as_str() {
                "--config" => {
                    let path = args.next().ok_or("--config needs a path")?;
                    config = Some(PathBuf::from(path));
                    continue;
                }
                "--mentions" => Mode::Mentions,
                "--test-data" => Mode::TestData,
                "--inspect" => Mode::Inspect,
                flag if flag.starts_with("--") => return Err(format!("unknown option {flag}")),
                path => {
                    if input.replace(PathBuf::from(path)).is_some() {
                        return Err("only one input file can be given".to_string());
                    }
                    continue;
                }
            };
            if mode.replace(selected).is_some() {
                return Err("--mentions, --test-data and --inspect are exclusive".to_string());
            }
        }

        Ok(Self {
            config,
            mode: mode.unwrap_or_default(),
            input: input.ok_or("missing input file")?,
        })
    }
}
