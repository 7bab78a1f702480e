use std::path::PathBuf;

pub struct Config {
    /// Location of the transient artifact.
    ///
    /// Written, re-read and deleted by the same run; never shared with
    /// another process.
    pub artifact: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            artifact: PathBuf::from("ips.json"),
        }
    }
}
