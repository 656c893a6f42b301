use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::{FetchError, Fetcher};
use crate::catalog::CatalogEntry;
use crate::config::ToolConfig;
use crate::process::run_tool;

/// Downloads one entry with yt-dlp into a fixed target directory.
#[derive(Debug, Clone)]
pub struct YtDlpFetcher {
    tool: ToolConfig,
    target_dir: PathBuf,
}

impl YtDlpFetcher {
    pub fn new(tool: ToolConfig, target_dir: &Path) -> Self {
        Self {
            tool,
            target_dir: target_dir.to_path_buf(),
        }
    }

    /// Arguments for one download, URL last.
    pub fn args(&self, entry: &CatalogEntry) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-f".into(),
            self.tool.format.as_str().into(),
            "--merge-output-format".into(),
            self.tool.merge_output_format.as_str().into(),
        ];
        if !self.tool.downloader.is_empty() {
            args.push("--downloader".into());
            args.push(self.tool.downloader.as_str().into());
            if !self.tool.downloader_args.is_empty() {
                args.push("--downloader-args".into());
                args.push(self.tool.downloader_args.as_str().into());
            }
        }
        args.push("-o".into());
        args.push(self.target_dir.join(&self.tool.output_template).into_os_string());
        args.push(entry.url.as_str().into());
        args
    }
}

impl Fetcher for YtDlpFetcher {
    fn fetch(&self, entry: &CatalogEntry) -> Result<(), FetchError> {
        run_tool(&self.tool.program, self.args(entry))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> CatalogEntry {
        CatalogEntry::new("https://www.youtube.com/watch?v=abc", "Talk A")
    }

    #[test]
    fn default_args_match_tool_defaults() {
        let fetcher = YtDlpFetcher::new(ToolConfig::default(), Path::new("/media/P_BY_C"));
        let args = fetcher.args(&entry());
        let expected: Vec<OsString> = [
            "-f",
            "bv*[height<=1080]+ba/b",
            "--merge-output-format",
            "mp4",
            "--downloader",
            "aria2c",
            "--downloader-args",
            "aria2c:-x 16 -s 16 -k 1M",
            "-o",
            "/media/P_BY_C/%(title)s.%(ext)s",
            "https://www.youtube.com/watch?v=abc",
        ]
        .iter()
        .map(OsString::from)
        .collect();
        assert_eq!(args, expected);
    }

    #[test]
    fn empty_downloader_drops_downloader_flags() {
        let tool = ToolConfig {
            downloader: String::new(),
            ..ToolConfig::default()
        };
        let args = YtDlpFetcher::new(tool, Path::new("/d")).args(&entry());
        assert!(!args.iter().any(|a| a == "--downloader"));
        assert!(!args.iter().any(|a| a == "--downloader-args"));
        assert_eq!(args.last().unwrap(), "https://www.youtube.com/watch?v=abc");
    }

    #[test]
    fn missing_tool_fails_the_fetch() {
        let tool = ToolConfig {
            program: "yank-test-no-such-tool".to_string(),
            ..ToolConfig::default()
        };
        let err = YtDlpFetcher::new(tool, Path::new("/d"))
            .fetch(&entry())
            .unwrap_err();
        assert!(matches!(err, FetchError::Tool(_)));
    }
}
